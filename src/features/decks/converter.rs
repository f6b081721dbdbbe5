use crate::data::models::{CharacterEntry, Definitions, RawVocabEntry};
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    // Hand-written (Chinese, English) examples for the most common glyphs
    static ref EXAMPLE_PATTERNS: HashMap<&'static str, (&'static str, &'static str)> = HashMap::from([
        ("我", ("我是学生。", "I am a student.")),
        ("你", ("你好吗？", "How are you?")),
        ("他", ("他很好。", "He is fine.")),
        ("她", ("她是老师。", "She is a teacher.")),
        ("中", ("中国很大。", "China is big.")),
        ("国", ("美国在哪里？", "Where is America?")),
        ("人", ("这个人很好。", "This person is good.")),
        ("学", ("我学中文。", "I study Chinese.")),
        ("好", ("今天天气很好。", "The weather is good today.")),
        ("大", ("这个房子很大。", "This house is big.")),
    ]);
}

pub struct EntryConverter;

impl EntryConverter {
    /// Maps a raw word-list record onto a flashcard entry.
    ///
    /// Missing fields become empty strings; this never fails.
    pub fn convert(raw: &RawVocabEntry) -> CharacterEntry {
        let character = EntryConverter::glyph(raw).to_string();
        let pinyin = raw.pinyin.clone().unwrap_or_default();
        let meaning = match &raw.definitions {
            Some(Definitions::Many(senses)) => senses.join("; "),
            Some(Definitions::One(sense)) => sense.clone(),
            None => String::new(),
        };

        let (example_zh, example_en) = EntryConverter::examples(&character, &meaning);

        CharacterEntry {
            character,
            pinyin,
            meaning,
            example_zh,
            example_en,
        }
    }

    /// Simplified form if present, traditional otherwise.
    pub fn glyph(raw: &RawVocabEntry) -> &str {
        raw.simplified
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(raw.traditional.as_deref())
            .unwrap_or("")
    }

    /// Only single characters are kept for writing practice.
    pub fn is_single_glyph(raw: &RawVocabEntry) -> bool {
        EntryConverter::glyph(raw).chars().count() == 1
    }

    fn examples(character: &str, meaning: &str) -> (String, String) {
        match EXAMPLE_PATTERNS.get(character) {
            Some(&(zh, en)) => (zh.to_string(), en.to_string()),
            None => (format!("这是{}。", character), format!("This is {}.", meaning)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(simplified: Option<&str>, traditional: Option<&str>, definitions: Option<Definitions>) -> RawVocabEntry {
        RawVocabEntry {
            simplified: simplified.map(str::to_string),
            traditional: traditional.map(str::to_string),
            pinyin: Some("x".to_string()),
            definitions,
        }
    }

    #[test]
    fn test_pattern_hit_uses_authored_examples() {
        let entry = EntryConverter::convert(&RawVocabEntry {
            simplified: Some("你".to_string()),
            traditional: None,
            pinyin: Some("nǐ".to_string()),
            definitions: Some(Definitions::Many(vec!["you".to_string()])),
        });

        assert_eq!(
            entry,
            CharacterEntry {
                character: "你".to_string(),
                pinyin: "nǐ".to_string(),
                meaning: "you".to_string(),
                example_zh: "你好吗？".to_string(),
                example_en: "How are you?".to_string(),
            }
        );
    }

    #[test]
    fn test_pattern_miss_uses_template() {
        let entry = EntryConverter::convert(&raw(
            Some("爱"),
            None,
            Some(Definitions::One("love".to_string())),
        ));
        assert_eq!(entry.example_zh, "这是爱。");
        assert_eq!(entry.example_en, "This is love.");
    }

    #[test]
    fn test_definition_list_is_joined() {
        let entry = EntryConverter::convert(&raw(
            Some("学"),
            None,
            Some(Definitions::Many(vec!["a".to_string(), "b".to_string()])),
        ));
        assert_eq!(entry.meaning, "a; b");
    }

    #[test]
    fn test_missing_fields_degrade_to_empty() {
        let entry = EntryConverter::convert(&RawVocabEntry::default());
        assert_eq!(entry.character, "");
        assert_eq!(entry.pinyin, "");
        assert_eq!(entry.meaning, "");
        assert_eq!(entry.example_zh, "这是。");
        assert_eq!(entry.example_en, "This is .");
    }

    #[test]
    fn test_traditional_used_when_simplified_missing() {
        let record = raw(None, Some("愛"), None);
        assert_eq!(EntryConverter::glyph(&record), "愛");
        assert_eq!(EntryConverter::convert(&record).character, "愛");
    }

    #[test]
    fn test_single_glyph_filter() {
        assert!(EntryConverter::is_single_glyph(&raw(Some("好"), None, None)));
        assert!(!EntryConverter::is_single_glyph(&raw(Some("你好"), None, None)));
        assert!(!EntryConverter::is_single_glyph(&raw(None, None, None)));
    }

    #[test]
    fn test_raw_record_accepts_string_or_list_definitions() {
        let records: Vec<RawVocabEntry> = serde_json::from_str(
            r#"[{"simplified":"爱","pinyin":"ài","definitions":"love"},
                {"simplified":"我","definitions":["I","me"],"frequency":12}]"#,
        )
        .unwrap();

        assert_eq!(EntryConverter::convert(&records[0]).meaning, "love");
        assert_eq!(EntryConverter::convert(&records[1]).meaning, "I; me");
    }
}
