use crate::core::encode::{is_zero, serialize_timestamp};
use crate::domain::contributor::{BelongsTo, Contributor, Role, Subject};
use crate::domain::link::Link;
use crate::domain::text::{LanguageText, OneOrMany};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

pub type Timestamp = DateTime<FixedOffset>;

/// 目錄 feed (最上層文件)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feed {
    #[serde(rename = "@context", skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
    pub metadata: Metadata,
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facets: Vec<Facet>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<Publication>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<Link>,
}

/// feed、facet、group 共用的精簡 metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(rename = "@type", skip_serializing_if = "String::is_empty")]
    pub rdf_type: String,
    pub title: String,
    #[serde(rename = "numberOfItems", skip_serializing_if = "is_zero")]
    pub number_of_items: u64,
    #[serde(rename = "itemsPerPage", skip_serializing_if = "is_zero")]
    pub items_per_page: u64,
    #[serde(rename = "currentPage", skip_serializing_if = "is_zero")]
    pub current_page: u64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_timestamp"
    )]
    pub modified: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Facet {
    pub metadata: Metadata,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<Publication>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<Link>,
}

impl Group {
    /// 第一個 `self` 連結的 href
    pub fn self_href(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.has_rel("self"))
            .map(|link| link.href.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Publication {
    pub metadata: PublicationMetadata,
    pub links: Vec<Link>,
    pub images: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublicationMetadata {
    #[serde(rename = "@type", skip_serializing_if = "String::is_empty")]
    pub rdf_type: String,
    pub title: LanguageText,
    pub identifier: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub translator: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub editor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artist: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub illustrator: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub letterer: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub penciler: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colorist: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inker: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub narrator: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publisher: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imprint: Vec<Contributor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<OneOrMany>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_timestamp"
    )]
    pub modified: Option<Timestamp>,
    #[serde(
        rename = "published",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_timestamp"
    )]
    pub publication_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rights: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject: Vec<Subject>,
    #[serde(skip_serializing_if = "no_membership")]
    pub belongs_to: Option<BelongsTo>,
    #[serde(skip_serializing_if = "is_zero")]
    pub duration: u64,
}

fn no_membership(belongs_to: &Option<BelongsTo>) -> bool {
    belongs_to.as_ref().map_or(true, BelongsTo::is_empty)
}

impl PublicationMetadata {
    pub fn contributors(&self, role: Role) -> &[Contributor] {
        match role {
            Role::Author => &self.author,
            Role::Translator => &self.translator,
            Role::Editor => &self.editor,
            Role::Artist => &self.artist,
            Role::Illustrator => &self.illustrator,
            Role::Letterer => &self.letterer,
            Role::Penciler => &self.penciler,
            Role::Colorist => &self.colorist,
            Role::Inker => &self.inker,
            Role::Narrator => &self.narrator,
            Role::Contributor => &self.contributor,
            Role::Publisher => &self.publisher,
            Role::Imprint => &self.imprint,
        }
    }

    pub fn contributors_mut(&mut self, role: Role) -> &mut Vec<Contributor> {
        match role {
            Role::Author => &mut self.author,
            Role::Translator => &mut self.translator,
            Role::Editor => &mut self.editor,
            Role::Artist => &mut self.artist,
            Role::Illustrator => &mut self.illustrator,
            Role::Letterer => &mut self.letterer,
            Role::Penciler => &mut self.penciler,
            Role::Colorist => &mut self.colorist,
            Role::Inker => &mut self.inker,
            Role::Narrator => &mut self.narrator,
            Role::Contributor => &mut self.contributor,
            Role::Publisher => &mut self.publisher,
            Role::Imprint => &mut self.imprint,
        }
    }
}
