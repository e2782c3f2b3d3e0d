//! Navigable rows.

/// Identifier of a resource in the resource-data table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(pub String);

impl ResourceId {
    /// Create a new resource ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a collapsible section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(pub String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One navigable item in the displayed list.
///
/// The navigator only looks at `key`, `url` and `resource_id`; the rest is
/// display data consumed by the quick peek, context cards and the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Stable identity used to follow a row across `resync`.
    pub key: String,
    /// Direct link, preferred over the resource-data lookup.
    pub url: Option<String>,
    pub resource_id: Option<ResourceId>,
    pub section: Option<SectionId>,
    pub title: String,
    pub author: Option<String>,
    pub author_id: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
}

impl Row {
    /// Create a row with the given key and title.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_resource(mut self, id: impl Into<ResourceId>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    pub fn with_section(mut self, id: impl Into<SectionId>) -> Self {
        self.section = Some(id.into());
        self
    }

    pub fn with_author(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.author_id = Some(id.into());
        self.author = Some(name.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description text, if it has any non-whitespace content.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
