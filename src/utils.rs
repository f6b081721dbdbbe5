use env_logger::Env;

/// Logs at `info` unless RUST_LOG says otherwise.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
