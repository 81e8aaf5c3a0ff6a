use crate::core::coerce;
use crate::domain::{LanguageText, OneOrMany, Timestamp};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// 連結與取得鏈保留的最大深度，更深的子樹捨棄
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// 將 JSON 值樹轉成 feed 實體樹
///
/// 寬鬆解碼：形狀不符的欄位維持預設值。唯一的狀態是深度上限，
/// 同一個 `Decoder` 可用於多份文件。
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub(crate) fn within_depth(&self, depth: usize, what: &str) -> bool {
        if depth > self.options.max_depth {
            tracing::warn!(
                "Dropping {} nested {} levels deep (limit {})",
                what,
                depth,
                self.options.max_depth
            );
            return false;
        }
        true
    }
}

pub fn language_text(value: &Value) -> LanguageText {
    match value {
        Value::String(s) => LanguageText::new(s.as_str()),
        Value::Object(_) => LanguageText {
            single: String::new(),
            by_language: coerce::to_string_map(value),
        },
        other => {
            tracing::debug!("Ignoring {} where a language map or string was expected", other);
            LanguageText::default()
        }
    }
}

/// 字串或字串陣列；其他形狀視為不存在，空陣列保留為空列表
pub fn one_or_many(value: &Value) -> Option<OneOrMany> {
    match value {
        Value::String(_) | Value::Array(_) => Some(OneOrMany(coerce::to_string_list(value))),
        other => {
            tracing::debug!("Ignoring {} where a string or array was expected", other);
            None
        }
    }
}

/// RFC 3339，或只有日期 (視為 UTC 午夜)；其他格式不設定
pub fn timestamp(value: &Value) -> Option<Timestamp> {
    let text = value.as_str()?.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed);
    }
    if let Some(midnight) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Some(midnight.and_utc().fixed_offset());
    }
    tracing::warn!("Ignoring unparseable timestamp '{}'", text);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_language_text_shapes() {
        let plain = language_text(&json!("Moby Dick"));
        assert_eq!(plain.single, "Moby Dick");
        assert!(!plain.is_multilingual());

        let multi = language_text(&json!({"en": "The Stranger", "fr": "L'Étranger"}));
        assert_eq!(multi.get("fr"), Some("L'Étranger"));
        assert_eq!(multi.by_language.len(), 2);
        assert!(multi.single.is_empty());

        assert!(language_text(&json!(12)).is_empty());
    }

    #[test]
    fn test_one_or_many_shapes() {
        assert_eq!(one_or_many(&json!("self")), Some(OneOrMany::one("self")));
        assert_eq!(
            one_or_many(&json!(["self", "start"])).unwrap().0,
            vec!["self", "start"]
        );
        assert_eq!(one_or_many(&json!([])), Some(OneOrMany::new()));
        assert!(one_or_many(&json!({"rel": "self"})).is_none());
    }

    #[test]
    fn test_timestamp_keeps_parsed_value() {
        let parsed = timestamp(&json!("2016-09-09T12:00:00+02:00")).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2016-09-09T12:00:00+02:00");

        let date_only = timestamp(&json!("2001-03-05")).unwrap();
        assert_eq!(date_only.to_rfc3339(), "2001-03-05T00:00:00+00:00");
    }

    #[test]
    fn test_timestamp_failure_leaves_unset() {
        assert!(timestamp(&json!("last tuesday")).is_none());
        assert!(timestamp(&json!(1473422400)).is_none());
        assert!(timestamp(&json!("")).is_none());
    }

    #[test]
    fn test_depth_guard() {
        let decoder = Decoder::new(DecodeOptions { max_depth: 2 });
        assert!(decoder.within_depth(2, "link"));
        assert!(!decoder.within_depth(3, "link"));
    }
}
