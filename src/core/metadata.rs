use crate::core::coerce;
use crate::core::decode::{self, Decoder};
use crate::core::shape;
use crate::domain::{BelongsTo, Metadata, PublicationMetadata, Role};
use serde_json::Value;

impl Decoder {
    /// feed、facet 或 group 的 metadata
    pub fn metadata(&self, value: &Value) -> Metadata {
        let mut metadata = Metadata::default();
        let Value::Object(fields) = value else {
            tracing::debug!("Metadata is a {}, not an object", shape::kind(value));
            return metadata;
        };

        for (key, v) in fields {
            match key.as_str() {
                "title" => metadata.title = coerce::to_string(v),
                "@type" | "type" => metadata.rdf_type = coerce::to_string(v),
                "numberOfItems" => metadata.number_of_items = coerce::to_u64(v),
                "itemsPerPage" => metadata.items_per_page = coerce::to_u64(v),
                "currentPage" => metadata.current_page = coerce::to_u64(v),
                "modified" => metadata.modified = decode::timestamp(v),
                _ => {}
            }
        }
        metadata
    }

    /// 出版品 metadata；單一字串視為標題
    pub fn publication_metadata(&self, value: &Value) -> PublicationMetadata {
        let mut metadata = PublicationMetadata::default();
        let fields = match value {
            Value::String(_) => {
                metadata.title = decode::language_text(value);
                return metadata;
            }
            Value::Object(fields) => fields,
            other => {
                tracing::debug!("Publication metadata is a {}", shape::kind(other));
                return metadata;
            }
        };

        for (key, v) in fields {
            if let Some(role) = Role::from_key(key) {
                *metadata.contributors_mut(role) = self.contributors(v, Some(role));
                continue;
            }

            match key.as_str() {
                "title" => metadata.title = decode::language_text(v),
                "identifier" => metadata.identifier = coerce::to_string(v),
                "@type" | "type" => metadata.rdf_type = coerce::to_string(v),
                "modified" => metadata.modified = decode::timestamp(v),
                "published" => metadata.publication_date = decode::timestamp(v),
                "language" => metadata.language = decode::one_or_many(v),
                "description" => metadata.description = coerce::to_string(v),
                "source" => metadata.source = coerce::to_string(v),
                "rights" => metadata.rights = coerce::to_string(v),
                "subject" => metadata.subject = self.subjects(v),
                "belongs_to" | "belongsTo" => metadata.belongs_to = Some(self.belongs_to(v)),
                "duration" => metadata.duration = coerce::to_u64(v),
                _ => {}
            }
        }
        metadata
    }

    pub fn belongs_to(&self, value: &Value) -> BelongsTo {
        let mut belongs_to = BelongsTo::default();
        if let Value::Object(fields) = value {
            for (key, v) in fields {
                match key.as_str() {
                    "series" => belongs_to.series = self.collections(v),
                    "collection" => belongs_to.collection = self.collections(v),
                    _ => {}
                }
            }
        }
        belongs_to
    }
}
