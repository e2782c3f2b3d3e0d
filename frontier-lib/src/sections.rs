//! Collapsible category sections.

use std::ops::Range;

use log::debug;

use crate::host::Animator;
use crate::row::{Row, SectionId};

/// A category header and the contiguous run of rows it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub description: Option<String>,
    /// Rows owned by this section, as indices into the full sequence.
    pub rows: Range<usize>,
    pub collapsed: bool,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>, rows: Range<usize>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            rows,
            collapsed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn contains(&self, index: usize) -> bool {
        self.rows.contains(&index)
    }
}

/// Collapse state of every section on the page.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Group contiguous rows sharing a section id. Titles default to the id.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let Some(id) = &row.section else {
                continue;
            };
            if let Some(last) = sections.last_mut()
                && last.id == *id
                && last.rows.end == index
            {
                last.rows.end = index + 1;
                continue;
            }
            sections.push(Section::new(id.clone(), id.as_str(), index..index + 1));
        }
        Self { sections }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == *id)
    }

    /// Section owning the row at `index`.
    pub fn section_of(&self, index: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(index))
    }

    pub fn is_collapsed(&self, id: &SectionId) -> bool {
        self.get(id).is_some_and(|s| s.collapsed)
    }

    /// Whether a row is hidden by a collapsed section.
    pub fn is_row_hidden(&self, index: usize) -> bool {
        self.section_of(index).is_some_and(|s| s.collapsed)
    }

    /// Flip a section. Returns the new collapsed state, or `None` for an
    /// unknown section.
    pub fn toggle(&mut self, id: &SectionId, animator: &mut dyn Animator) -> Option<bool> {
        let section = self.sections.iter_mut().find(|s| s.id == *id)?;
        section.collapsed = !section.collapsed;
        debug!(
            "Section {} {}",
            section.id.as_str(),
            if section.collapsed { "collapsed" } else { "expanded" }
        );
        animator.section_toggled(&section.id, section.collapsed);
        Some(section.collapsed)
    }

    /// Expand every collapsed section.
    pub fn expand_all(&mut self, animator: &mut dyn Animator) {
        for section in self.sections.iter_mut().filter(|s| s.collapsed) {
            section.collapsed = false;
            animator.section_toggled(&section.id, false);
        }
    }
}
