//! 貢獻者、合集與主題的形狀分派
//!
//! 來源可能是單一字串、單一物件，或混合兩者的陣列，最後都轉成有序列表。
//! 陣列元素保持原順序，其他形狀的元素略過。

use crate::core::coerce;
use crate::core::decode::{self, Decoder};
use crate::core::shape::Shape;
use crate::domain::{Collection, Contributor, Link, Role, Subject};
use serde_json::{Map, Value};

fn normalize<'a, T>(
    value: &'a Value,
    what: &str,
    mut decode_one: impl FnMut(Shape<'a>) -> Option<T>,
) -> Vec<T> {
    match Shape::of(value) {
        Shape::List(items) => items
            .iter()
            .filter_map(|item| {
                let entity = decode_one(Shape::of(item));
                if entity.is_none() {
                    tracing::debug!("Skipping {} entry of unexpected shape: {}", what, item);
                }
                entity
            })
            .collect(),
        Shape::Absent => {
            tracing::debug!("Ignoring {} given as {}", what, value);
            Vec::new()
        }
        single => decode_one(single).into_iter().collect(),
    }
}

impl Decoder {
    /// 角色鍵下的貢獻者；沒有明確角色的項目套用 `role`
    pub fn contributors(&self, value: &Value, role: Option<Role>) -> Vec<Contributor> {
        let mut contributors = normalize(value, "contributor", |shape| match shape {
            Shape::Scalar(name) => Some(Contributor::new(name)),
            Shape::Object(fields) => Some(self.contributor(fields)),
            _ => None,
        });

        if let Some(role) = role {
            for contributor in contributors.iter_mut().filter(|c| c.role.is_empty()) {
                contributor.role = role.as_str().to_string();
            }
        }
        contributors
    }

    fn contributor(&self, fields: &Map<String, Value>) -> Contributor {
        let mut contributor = Contributor::default();
        for (key, v) in fields {
            match key.as_str() {
                "name" => contributor.name = decode::language_text(v),
                "identifier" => contributor.identifier = coerce::to_string(v),
                "sort_as" => contributor.sort_as = coerce::to_string(v),
                "role" => contributor.role = coerce::to_string(v),
                "links" => contributor.links.extend(self.entity_links(v)),
                _ => {}
            }
        }
        contributor
    }

    /// 貢獻者或合集的連結：單一連結物件或陣列
    fn entity_links(&self, value: &Value) -> Vec<Link> {
        match Shape::of(value) {
            Shape::Object(_) => self.link(value, 1).into_iter().collect(),
            Shape::List(_) => self.links(value, 1),
            _ => Vec::new(),
        }
    }

    pub fn collections(&self, value: &Value) -> Vec<Collection> {
        normalize(value, "collection", |shape| match shape {
            Shape::Scalar(name) => Some(Collection::new(name, 0.0)),
            Shape::Object(fields) => Some(Collection {
                contributor: self.contributor(fields),
                position: fields.get("position").map(coerce::to_f64).unwrap_or(0.0),
            }),
            _ => None,
        })
    }

    pub fn subjects(&self, value: &Value) -> Vec<Subject> {
        normalize(value, "subject", |shape| match shape {
            Shape::Scalar(name) => Some(Subject::new(name)),
            Shape::Object(fields) => Some(subject(fields)),
            _ => None,
        })
    }
}

fn subject(fields: &Map<String, Value>) -> Subject {
    let mut subject = Subject::default();
    for (key, v) in fields {
        match key.as_str() {
            "name" => subject.name = coerce::to_string(v),
            "sort_as" => subject.sort_as = coerce::to_string(v),
            "scheme" => subject.scheme = coerce::to_string(v),
            "code" => subject.code = coerce::to_string(v),
            _ => {}
        }
    }
    subject
}
