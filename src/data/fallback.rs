use crate::data::models::{CharacterEntry, Tier};

// (char, pinyin, meaning, exampleZh, exampleEn)
type FallbackRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

const HSK1_FALLBACK: &[FallbackRow] = &[
    ("学", "xué", "to study; learn", "我学中文。", "I study Chinese."),
    ("人", "rén", "person", "我们是好人。", "We are good people."),
    ("你", "nǐ", "you", "你好吗？", "How are you?"),
    ("我", "wǒ", "I; me", "我是学生。", "I am a student."),
    ("中", "zhōng", "middle; center", "中国", "China"),
    ("国", "guó", "country; nation", "美国", "USA"),
];

const HSK2_FALLBACK: &[FallbackRow] = &[
    ("班", "bān", "class", "我们班", "our class"),
    ("办", "bàn", "to handle", "办事情", "handle matters"),
    ("半", "bàn", "half", "半年", "half a year"),
    ("帮", "bāng", "to help", "帮助你", "help you"),
];

/// Static deck used when a word list cannot be fetched.
///
/// Only HSK 1 and 2 have authored entries; higher levels fall back to an
/// empty deck.
pub fn fallback_deck(tier: Tier) -> Vec<CharacterEntry> {
    let rows: &[FallbackRow] = match tier.number() {
        1 => HSK1_FALLBACK,
        2 => HSK2_FALLBACK,
        _ => &[],
    };

    rows.iter()
        .map(|&(character, pinyin, meaning, example_zh, example_en)| CharacterEntry {
            character: character.to_string(),
            pinyin: pinyin.to_string(),
            meaning: meaning.to_string(),
            example_zh: example_zh.to_string(),
            example_en: example_en.to_string(),
        })
        .collect()
}
