pub mod fallback;
pub mod models;
pub mod repositories;
