use std::collections::BTreeMap;
use std::fmt;

/// 單一字串，或依語言代碼分開的多語字串
///
/// `by_language` 不為空時以它為準，輸出與顯示都忽略 `single`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageText {
    pub single: String,
    pub by_language: BTreeMap<String, String>,
}

impl LanguageText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            single: text.into(),
            by_language: BTreeMap::new(),
        }
    }

    pub fn from_translations<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            single: String::new(),
            by_language: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn is_multilingual(&self) -> bool {
        !self.by_language.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.by_language.is_empty()
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.by_language.get(language).map(String::as_str)
    }

    /// 顯示用文字：有翻譯取其一，否則用純字串
    pub fn as_text(&self) -> &str {
        self.by_language
            .values()
            .next()
            .map(String::as_str)
            .unwrap_or(&self.single)
    }
}

impl fmt::Display for LanguageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

impl From<&str> for LanguageText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for LanguageText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// 有序字串列表；只有一個元素時輸出為單一字串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneOrMany(pub Vec<String>);

impl OneOrMany {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn one(value: impl Into<String>) -> Self {
        Self(vec![value.into()])
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl<'a> IntoIterator for &'a OneOrMany {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
