//! 標準化輸出：序列化與顯示用的名稱串接
//!
//! 輸出格式由 `serde` 從領域型別產生。多語字串與單一或多值列表在這裡決定 JSON 形狀，
//! 其餘欄位直接對應，空值省略。

use crate::domain::{Collection, Contributor, Feed, LanguageText, Link, OneOrMany, Subject, Timestamp};
use crate::utils::error::Result;
use chrono::SecondsFormat;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

pub fn encode(feed: &Feed) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(feed)?)
}

pub fn encode_pretty(feed: &Feed) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(feed)?)
}

pub fn to_value(feed: &Feed) -> Result<Value> {
    Ok(serde_json::to_value(feed)?)
}

impl Serialize for LanguageText {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.by_language.is_empty() {
            return serializer.serialize_str(&self.single);
        }
        let mut map = serializer.serialize_map(Some(self.by_language.len()))?;
        for (language, text) in &self.by_language {
            map.serialize_entry(language, text)?;
        }
        map.end()
    }
}

impl Serialize for OneOrMany {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if let [only] = self.0.as_slice() {
            return serializer.serialize_str(only);
        }
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for value in &self.0 {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// 數字形式的 duration 輸出為數字，其餘原樣輸出為字串
pub(crate) fn serialize_duration<S: Serializer>(
    value: &str,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let trimmed = value.trim();
    if let Ok(seconds) = trimmed.parse::<u64>() {
        return serializer.serialize_u64(seconds);
    }
    match trimmed.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => serializer.serialize_f64(seconds),
        _ => serializer.serialize_str(value),
    }
}

pub(crate) fn serialize_timestamp<S: Serializer>(
    value: &Option<Timestamp>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        None => serializer.serialize_none(),
    }
}

/// 實體列表的顯示字串 (不用於 JSON 輸出)
pub trait DisplayList {
    fn names(&self) -> Vec<String>;
    fn joined(&self) -> String;
}

/// 創作者以 "A & B" 串接，出版相關角色以 "A, B" 串接
fn contributor_separator(first_role: &str) -> &'static str {
    match first_role {
        "publisher" | "imprint" | "contributor" => ", ",
        _ => " & ",
    }
}

impl DisplayList for [Contributor] {
    fn names(&self) -> Vec<String> {
        self.iter().map(|c| c.display_name().to_string()).collect()
    }

    fn joined(&self) -> String {
        let Some(first) = self.first() else {
            return String::new();
        };
        self.names().join(contributor_separator(&first.role))
    }
}

impl DisplayList for [Collection] {
    fn names(&self) -> Vec<String> {
        self.iter().map(|c| c.display_name().to_string()).collect()
    }

    fn joined(&self) -> String {
        self.names().join(", ")
    }
}

impl DisplayList for [Subject] {
    fn names(&self) -> Vec<String> {
        self.iter().map(|s| s.name.clone()).collect()
    }

    fn joined(&self) -> String {
        self.names().join(", ")
    }
}

impl DisplayList for [Link] {
    fn names(&self) -> Vec<String> {
        self.iter().map(|l| l.href.clone()).collect()
    }

    fn joined(&self) -> String {
        self.names().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BelongsTo, IndirectAcquisition, Properties, Publication};
    use serde_json::json;

    #[test]
    fn test_language_text_shape() {
        assert_eq!(serde_json::to_value(LanguageText::new("Plain")).unwrap(), json!("Plain"));

        let mut text = LanguageText::new("ignored");
        text.by_language.insert("en".to_string(), "Hello".to_string());
        text.by_language.insert("fr".to_string(), "Bonjour".to_string());
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!({"en": "Hello", "fr": "Bonjour"})
        );
    }

    #[test]
    fn test_one_or_many_collapse() {
        assert_eq!(serde_json::to_value(OneOrMany::new()).unwrap(), json!([]));
        assert_eq!(serde_json::to_value(OneOrMany::one("self")).unwrap(), json!("self"));
        assert_eq!(
            serde_json::to_value(OneOrMany::from(vec!["a".to_string(), "b".to_string()])).unwrap(),
            json!(["a", "b"])
        );
    }

    #[test]
    fn test_link_omits_empty_fields() {
        let mut link = Link::new("/a");
        assert_eq!(serde_json::to_value(&link).unwrap(), json!({"href": "/a"}));

        link.add_rel("self");
        link.duration = "90".to_string();
        link.templated = true;
        link.children.push(Link::new("/a/1"));
        link.properties = Some(Properties {
            indirect_acquisition: vec![IndirectAcquisition::new("application/epub+zip")],
            ..Properties::default()
        });
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "href": "/a",
                "rel": "self",
                "duration": 90,
                "templated": true,
                "children": [{"href": "/a/1"}],
                "properties": {"indirectAcquisition": [{"type": "application/epub+zip"}]}
            })
        );
    }

    #[test]
    fn test_non_numeric_duration_stays_text() {
        let mut link = Link::new("/a");
        link.duration = "PT1H".to_string();
        assert_eq!(serde_json::to_value(&link).unwrap()["duration"], json!("PT1H"));
        link.duration = "12.5".to_string();
        assert_eq!(serde_json::to_value(&link).unwrap()["duration"], json!(12.5));
    }

    #[test]
    fn test_collection_flattens_contributor_fields() {
        let mut collection = Collection::new("Foundation", 2.0);
        collection.contributor.identifier = "urn:series:1".to_string();
        assert_eq!(
            serde_json::to_value(&collection).unwrap(),
            json!({"name": "Foundation", "identifier": "urn:series:1", "position": 2.0})
        );
    }

    #[test]
    fn test_empty_belongs_to_is_omitted() {
        let mut publication = Publication::default();
        publication.metadata.belongs_to = Some(BelongsTo::default());
        let value = serde_json::to_value(&publication).unwrap();
        assert!(value["metadata"].get("belongs_to").is_none());
    }

    #[test]
    fn test_contributor_join_separator() {
        let mut publishers = vec![Contributor::new("Penguin"), Contributor::new("Vintage")];
        publishers[0].role = "publisher".to_string();
        assert_eq!(publishers.joined(), "Penguin, Vintage");

        let mut authors = vec![Contributor::new("Good Omens A"), Contributor::new("B")];
        authors[0].role = "author".to_string();
        assert_eq!(authors.joined(), "Good Omens A & B");

        let none: Vec<Contributor> = Vec::new();
        assert_eq!(none.joined(), "");
    }

    #[test]
    fn test_other_joins() {
        let series = vec![Collection::new("S1", 1.0), Collection::new("S2", 2.0)];
        assert_eq!(series.joined(), "S1, S2");
        let subjects = vec![Subject::new("Fiction"), Subject::new("Sea")];
        assert_eq!(subjects.names(), vec!["Fiction", "Sea"]);
        assert_eq!(subjects.joined(), "Fiction, Sea");
        let links = vec![Link::new("/a"), Link::new("/b")];
        assert_eq!(links.joined(), "/a, /b");
    }
}
