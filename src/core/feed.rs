use crate::core::coerce;
use crate::core::decode::{DecodeOptions, Decoder};
use crate::core::shape;
use crate::domain::{Facet, Feed, Group, Publication};
use crate::utils::error::{FeedError, Result};
use serde_json::Value;

impl Decoder {
    /// 從已解析的 JSON 物件組出 feed
    pub fn feed(&self, value: &Value) -> Result<Feed> {
        let Value::Object(fields) = value else {
            return Err(FeedError::NotAnObjectError {
                found: shape::kind(value),
            });
        };

        let mut feed = Feed::default();
        for (key, v) in fields {
            match key.as_str() {
                "@context" => feed.context = coerce::to_string_list(v),
                "metadata" => feed.metadata = self.metadata(v),
                "links" => feed.links = self.links(v, 1),
                "facets" => feed.facets = self.facets(v),
                "groups" => feed.groups = self.groups(v),
                "publications" => feed.publications = self.publications(v),
                "navigation" => feed.navigation = self.links(v, 1),
                other => tracing::debug!("Ignoring unknown feed key '{}'", other),
            }
        }
        Ok(feed)
    }

    pub fn facets(&self, value: &Value) -> Vec<Facet> {
        shape::items(value)
            .iter()
            .map(|item| {
                let mut facet = Facet::default();
                if let Value::Object(fields) = item {
                    for (key, v) in fields {
                        match key.as_str() {
                            "metadata" => facet.metadata = self.metadata(v),
                            "links" => facet.links = self.links(v, 1),
                            _ => {}
                        }
                    }
                }
                facet
            })
            .collect()
    }

    pub fn groups(&self, value: &Value) -> Vec<Group> {
        shape::items(value)
            .iter()
            .map(|item| {
                let mut group = Group::default();
                if let Value::Object(fields) = item {
                    for (key, v) in fields {
                        match key.as_str() {
                            "metadata" => group.metadata = self.metadata(v),
                            "links" => group.links = self.links(v, 1),
                            "navigation" => group.navigation = self.links(v, 1),
                            "publications" => group.publications = self.publications(v),
                            _ => {}
                        }
                    }
                }
                group
            })
            .collect()
    }

    pub fn publications(&self, value: &Value) -> Vec<Publication> {
        shape::items(value)
            .iter()
            .map(|item| self.publication(item))
            .collect()
    }

    pub fn publication(&self, value: &Value) -> Publication {
        let mut publication = Publication::default();
        if let Value::Object(fields) = value {
            for (key, v) in fields {
                match key.as_str() {
                    "metadata" => publication.metadata = self.publication_metadata(v),
                    "links" => publication.links = self.links(v, 1),
                    "images" => publication.images = self.links(v, 1),
                    _ => {}
                }
            }
        }
        publication
    }
}

impl Feed {
    pub fn from_value(value: &Value) -> Result<Feed> {
        Decoder::default().feed(value)
    }
}

/// 解碼完整的 feed 文件
///
/// 只有內容不是 JSON 或最上層不是物件時才回傳錯誤，
/// 其下的格式問題一律退回欄位預設值。
pub fn decode(bytes: &[u8]) -> Result<Feed> {
    decode_with(bytes, &DecodeOptions::default())
}

pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Feed> {
    let value: Value = serde_json::from_slice(bytes)?;
    let feed = Decoder::new(*options).feed(&value)?;
    tracing::debug!(
        "Decoded feed '{}': {} publications, {} groups, {} facets, {} navigation links",
        feed.metadata.title,
        feed.publications.len(),
        feed.groups.len(),
        feed.facets.len(),
        feed.navigation.len()
    );
    Ok(feed)
}

/// 解碼單獨的出版品 manifest
pub fn decode_publication(bytes: &[u8]) -> Result<Publication> {
    decode_publication_with(bytes, &DecodeOptions::default())
}

pub fn decode_publication_with(bytes: &[u8], options: &DecodeOptions) -> Result<Publication> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Object(_) => Ok(Decoder::new(*options).publication(&value)),
        other => Err(FeedError::NotAnObjectError {
            found: shape::kind(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(
            decode(b"[1, 2]"),
            Err(FeedError::NotAnObjectError { found: "array" })
        ));
        assert!(matches!(
            decode(b"\"feed\""),
            Err(FeedError::NotAnObjectError { found: "string" })
        ));
        assert!(matches!(
            decode(b"{not json"),
            Err(FeedError::SerializationError(_))
        ));
    }

    #[test]
    fn test_context_string_or_array() {
        let feed = Feed::from_value(&json!({"@context": "http://opds-spec.org/opds.jsonld"}))
            .unwrap();
        assert_eq!(feed.context, vec!["http://opds-spec.org/opds.jsonld"]);

        let feed = Feed::from_value(&json!({"@context": ["a", "b"]})).unwrap();
        assert_eq!(feed.context, vec!["a", "b"]);
    }

    #[test]
    fn test_wrong_shapes_degrade_to_defaults() {
        let feed = Feed::from_value(&json!({
            "metadata": "not an object",
            "links": {"href": "not an array"},
            "publications": [42, {"metadata": {"title": "Kept"}}],
            "groups": "nope"
        }))
        .unwrap();
        assert!(feed.metadata.title.is_empty());
        assert!(feed.links.is_empty());
        assert!(feed.groups.is_empty());
        assert_eq!(feed.publications.len(), 2);
        assert_eq!(feed.publications[0], Publication::default());
        assert_eq!(feed.publications[1].metadata.title.single, "Kept");
    }

    #[test]
    fn test_facets_do_not_share_state() {
        let feed = Feed::from_value(&json!({
            "facets": [
                {"metadata": {"title": "Language"}, "links": [{"href": "/en"}, {"href": "/fr"}]},
                {"metadata": {"title": "Format"}, "links": [{"href": "/epub"}]}
            ]
        }))
        .unwrap();
        assert_eq!(feed.facets.len(), 2);
        assert_eq!(feed.facets[0].links.len(), 2);
        assert_eq!(feed.facets[1].links.len(), 1);
        assert_eq!(feed.facets[1].metadata.title, "Format");
    }

    #[test]
    fn test_decode_publication_manifest() {
        let publication = decode_publication(
            br#"{"metadata": {"title": "Solo", "author": "Ann"}, "links": [{"href": "/solo.epub"}]}"#,
        )
        .unwrap();
        assert_eq!(publication.metadata.author[0].role, "author");
        assert_eq!(publication.links[0].href, "/solo.epub");
        assert!(decode_publication(b"[]").is_err());
    }

    #[test]
    fn test_decode_publication_with_depth_limit() {
        let bytes = br#"{
            "metadata": {"title": "Nested"},
            "links": [{"href": "/toc", "children": [{"href": "/toc/1", "children": [{"href": "/toc/1/a"}]}]}]
        }"#;

        let shallow = decode_publication_with(bytes, &DecodeOptions { max_depth: 2 }).unwrap();
        assert_eq!(shallow.links[0].children.len(), 1);
        assert!(shallow.links[0].children[0].children.is_empty());

        let full = decode_publication(bytes).unwrap();
        assert_eq!(full.links[0].children[0].children.len(), 1);
    }
}
