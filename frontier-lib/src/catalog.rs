//! Page content: categories, resources and authors.
//!
//! A catalog is the static data a page is built from. It is loaded once and
//! turned into a row snapshot plus section layout for the controller.
//!
//! ```json
//! {
//!   "title": "Knowledge Engineering",
//!   "categories": [
//!     {
//!       "id": "tools",
//!       "name": "Tools",
//!       "description": "Software for building knowledge bases",
//!       "rows": [
//!         { "title": "Protege", "href": "https://protege.stanford.edu", "authorId": "musen" },
//!         { "title": "Obsidian", "resourceId": "obsidian", "description": "Markdown notes" }
//!       ]
//!     }
//!   ],
//!   "resources": { "obsidian": { "url": "https://obsidian.md" } },
//!   "authors": { "musen": { "name": "Mark Musen", "yearsInField": 30 } }
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::card::{Author, ContextCard};
use crate::error::CatalogError;
use crate::row::{ResourceId, Row};
use crate::sections::{Section, Sections};

/// One row as written in the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Explicit row key; defaults to the resource id, then to
    /// `"{category}/{position}"`.
    #[serde(default)]
    pub key: Option<String>,
    pub title: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A collapsible category and its rows.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rows: Vec<Entry>,
}

/// Extra data for rows that only carry a resource id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub resources: HashMap<String, ResourceData>,
    #[serde(default)]
    pub authors: HashMap<String, Author>,
}

impl Catalog {
    /// Read and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        debug!(
            "Loaded catalog {} ({} categories)",
            path.display(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Parse and validate catalog JSON.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for category in &self.categories {
            if !ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    id: category.id.clone(),
                });
            }
        }

        let mut keys = HashSet::new();
        for (category, position, entry) in self.entries() {
            let key = row_key(category, position, entry);
            if !keys.insert(key.clone()) {
                return Err(CatalogError::DuplicateRow { key });
            }
        }
        Ok(())
    }

    fn entries(&self) -> impl Iterator<Item = (&Category, usize, &Entry)> {
        self.categories.iter().flat_map(|category| {
            category
                .rows
                .iter()
                .enumerate()
                .map(move |(position, entry)| (category, position, entry))
        })
    }

    /// Flatten the catalog into rows (category order) and their sections.
    pub fn snapshot(&self) -> (Vec<Row>, Sections) {
        let mut rows = Vec::new();
        let mut sections = Vec::new();

        for category in &self.categories {
            let start = rows.len();
            for (position, entry) in category.rows.iter().enumerate() {
                rows.push(Row {
                    key: row_key(category, position, entry),
                    url: entry.href.clone(),
                    resource_id: entry.resource_id.clone().map(ResourceId::from),
                    section: Some(category.id.as_str().into()),
                    title: entry.title.clone(),
                    author: entry.author.clone().or_else(|| {
                        entry
                            .author_id
                            .as_ref()
                            .and_then(|id| self.authors.get(id))
                            .and_then(|a| a.name.clone())
                    }),
                    author_id: entry.author_id.clone(),
                    time: entry.time.clone(),
                    description: entry.description.clone(),
                });
            }

            let mut section = Section::new(category.id.as_str(), category.name.as_str(), start..rows.len());
            section.description = category.description.clone();
            sections.push(section);
        }

        (rows, Sections::new(sections))
    }

    /// URL of a resource from the resource-data table.
    pub fn resource_url(&self, id: &ResourceId) -> Option<String> {
        self.resources.get(id.as_str()).and_then(|r| r.url.clone())
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.get(id)
    }

    /// Context card for a row's author. Rows with an unknown author get none.
    pub fn card_for(&self, row: &Row) -> Option<ContextCard> {
        let author = self.author(row.author_id.as_deref()?)?;
        Some(ContextCard::from_author(author))
    }
}

fn row_key(category: &Category, position: usize, entry: &Entry) -> String {
    entry
        .key
        .clone()
        .or_else(|| entry.resource_id.clone())
        .unwrap_or_else(|| format!("{}/{}", category.id, position))
}
