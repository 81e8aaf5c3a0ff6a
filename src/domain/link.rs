use crate::core::encode::{is_false, is_zero, serialize_duration};
use crate::domain::text::OneOrMany;
use serde::Serialize;

/// 型別化超連結；`children` 擁有整棵子樹，沒有反向參照
///
/// 來源沒有 `rel` 鍵時為 `None`，明確給出的空列表輸出時保留為 `[]`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Link {
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub media_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<OneOrMany>,
    #[serde(skip_serializing_if = "is_zero")]
    pub height: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub width: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(
        skip_serializing_if = "String::is_empty",
        serialize_with = "serialize_duration"
    )]
    pub duration: String,
    #[serde(skip_serializing_if = "is_false")]
    pub templated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Link>,
    #[serde(skip_serializing_if = "is_zero")]
    pub bitrate: u32,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn has_rel(&self, rel: &str) -> bool {
        self.rel.as_ref().is_some_and(|rels| rels.contains(rel))
    }

    /// 新增關係，第一次使用時建立列表
    pub fn add_rel(&mut self, rel: impl Into<String>) {
        self.rel.get_or_insert_with(OneOrMany::new).push(rel);
    }

    /// 依序的關係列表，沒有時為空
    pub fn rels(&self) -> &[String] {
        self.rel
            .as_ref()
            .map(|rels| rels.0.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Properties {
    #[serde(rename = "numberOfItems", skip_serializing_if = "is_zero")]
    pub number_of_items: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(rename = "indirectAcquisition", skip_serializing_if = "Vec::is_empty")]
    pub indirect_acquisition: Vec<IndirectAcquisition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Price {
    pub currency: String,
    pub value: f64,
}

/// 取得鏈的一層；`child` 列出其中還需取得的格式
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndirectAcquisition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child: Vec<IndirectAcquisition>,
}

impl IndirectAcquisition {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            child: Vec::new(),
        }
    }
}
