use crate::core::encode::is_zero;
use crate::domain::link::Link;
use crate::domain::text::LanguageText;
use serde::Serialize;
use std::fmt;

/// 出版品 metadata 中作為鍵的貢獻者角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Author,
    Translator,
    Editor,
    Artist,
    Illustrator,
    Letterer,
    Penciler,
    Colorist,
    Inker,
    Narrator,
    Contributor,
    Publisher,
    Imprint,
}

impl Role {
    pub const ALL: [Role; 13] = [
        Role::Author,
        Role::Translator,
        Role::Editor,
        Role::Artist,
        Role::Illustrator,
        Role::Letterer,
        Role::Penciler,
        Role::Colorist,
        Role::Inker,
        Role::Narrator,
        Role::Contributor,
        Role::Publisher,
        Role::Imprint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Author => "author",
            Role::Translator => "translator",
            Role::Editor => "editor",
            Role::Artist => "artist",
            Role::Illustrator => "illustrator",
            Role::Letterer => "letterer",
            Role::Penciler => "penciler",
            Role::Colorist => "colorist",
            Role::Inker => "inker",
            Role::Narrator => "narrator",
            Role::Contributor => "contributor",
            Role::Publisher => "publisher",
            Role::Imprint => "imprint",
        }
    }

    pub fn from_key(key: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == key)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contributor {
    #[serde(skip_serializing_if = "LanguageText::is_empty")]
    pub name: LanguageText,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sort_as: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub identifier: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Contributor {
    pub fn new(name: impl Into<LanguageText>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_text()
    }
}

/// 系列或合集歸屬：貢獻者欄位加上排序位置
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collection {
    #[serde(flatten)]
    pub contributor: Contributor,
    #[serde(skip_serializing_if = "is_zero")]
    pub position: f64,
}

impl Collection {
    pub fn new(name: impl Into<LanguageText>, position: f64) -> Self {
        Self {
            contributor: Contributor::new(name),
            position,
        }
    }

    pub fn display_name(&self) -> &str {
        self.contributor.display_name()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sort_as: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scheme: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// series 與 collection 兩個列表各自獨立，互不混用
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BelongsTo {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Collection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collection: Vec<Collection>,
}

impl BelongsTo {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.collection.is_empty()
    }
}
