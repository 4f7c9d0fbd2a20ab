use serde::{Deserialize, Serialize};
use std::fmt;

/// A HoYoLAB wiki the backend plugin knows about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Wiki {
    /// Honkai: Star Rail. The only wiki with a working backend parser.
    #[serde(rename = "hsr")]
    StarRail,
    /// Genshin Impact. Recognized, but the backend parser does not exist yet.
    #[serde(rename = "genshin")]
    Genshin,
}

impl Wiki {
    pub const ALL: [Self; 2] = [Self::StarRail, Self::Genshin];

    /// The identifier used on the wire and in host dropdowns.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StarRail => "hsr",
            Self::Genshin => "genshin",
        }
    }

    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|wiki| wiki.as_str() == identifier)
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::StarRail => "Honkai: Star Rail HoYoLAB wiki",
            Self::Genshin => "Genshin Impact wiki",
        }
    }

    /// Progress text shown to the user while an entry is being scraped.
    #[must_use]
    pub fn scrape_notice(self, id: &str) -> String {
        format!("Scraping the {} for Wiki Entry ID: {id}", self.display_name())
    }
}

impl fmt::Display for Wiki {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated request for one wiki entry. Build it with
/// [`WikiQuery::parse`](crate::WikiQuery::parse) to go through validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiQuery {
    #[serde(rename = "miHoYoWiki")]
    pub wiki: Wiki,
    #[serde(rename = "miHoYoWikiID")]
    pub id: String,
}

/// A single entry as returned by the backend plugin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiEntry {
    pub name: String,
    pub content: EntryContent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryContent {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub modules: Vec<WikiModule>,
}

/// A titled section of an entry, e.g. "Stats" or "Eidolons".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiModule {
    pub name: String,
    #[serde(default)]
    pub data: Vec<DataItem>,
}

/// A key/value row of a module. An empty key marks a plain bullet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataItem {
    #[serde(default)]
    pub key: String,
    pub value: String,
}

impl WikiEntry {
    pub fn new(name: impl Into<String>, content: EntryContent) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

impl EntryContent {
    pub fn new(description: impl Into<String>, modules: Vec<WikiModule>) -> Self {
        Self {
            description: description.into(),
            modules,
        }
    }
}

impl WikiModule {
    pub fn new(name: impl Into<String>, data: Vec<DataItem>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl DataItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A row without a key, rendered as a plain bullet.
    pub fn bullet(value: impl Into<String>) -> Self {
        Self::new(String::new(), value)
    }
}
