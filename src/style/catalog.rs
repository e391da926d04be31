//! Style descriptors and the ordered catalog that holds them.

use std::sync::Arc;

use serde::Serialize;

use super::{Category, StyleError};
use crate::clean::clean_format;
use crate::mapper::Mapper;
use crate::transform::{toggle, DecorationMark};

/// A text transform shared between catalog entries and threads.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A named transform from plain text to a styled rendering.
#[derive(Clone)]
pub struct Style {
    id: String,
    label: String,
    category: Category,
    overlay: bool,
    transform: TransformFn,
}

impl Style {
    /// Creates a style from any transform closure.
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, category: Category, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            category,
            overlay: false,
            transform: Arc::new(f),
        }
    }

    /// Creates a style backed by a table [`Mapper`].
    pub fn mapped(
        id: impl Into<String>,
        label: impl Into<String>,
        category: Category,
        mapper: Mapper,
    ) -> Self {
        Self::new(id, label, category, mapper.into_fn())
    }

    /// Creates a decoration style that toggles `mark`.
    ///
    /// Decorations are overlays: [`Catalog::restyle`] applies them on top of
    /// existing styling instead of cleaning first.
    pub fn decoration(id: impl Into<String>, label: impl Into<String>, mark: DecorationMark) -> Self {
        let mut style = Self::new(id, label, Category::Decoration, move |text: &str| {
            toggle(text, mark)
        });
        style.overlay = true;
        style
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns `true` for combining-mark decorations.
    pub fn is_overlay(&self) -> bool {
        self.overlay
    }

    /// Applies the transform.
    pub fn apply(&self, text: &str) -> String {
        (self.transform)(text)
    }

    /// The serializable part of the descriptor.
    pub fn info(&self) -> StyleInfo {
        StyleInfo {
            id: self.id.clone(),
            label: self.label.clone(),
            category: self.category,
        }
    }
}

impl std::fmt::Debug for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Style")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("category", &self.category)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

/// What a UI needs to list a style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleInfo {
    pub id: String,
    pub label: String,
    pub category: Category,
}

/// An ordered collection of styles.
///
/// Entries keep their insertion order, which is also the order returned by
/// [`Catalog::list`] with or without a category filter.
///
/// # Example
///
/// ```rust
/// use unistyle::{Catalog, Category, Style};
///
/// let catalog = Catalog::new()
///     .add(Style::new("shout", "Shout", Category::Fancy, |t: &str| t.to_uppercase()))
///     .add(Style::new("quiet", "Quiet", Category::Basic, |t: &str| t.to_lowercase()));
///
/// assert_eq!(catalog.apply("shout", "hey").unwrap(), "HEY");
/// assert_eq!(catalog.list(Some(Category::Basic)).count(), 1);
/// assert!(catalog.apply("whisper", "hey").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    styles: Vec<Style>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self { styles: Vec::new() }
    }

    /// Appends a style, returning the catalog for chaining.
    pub fn add(mut self, style: Style) -> Self {
        self.styles.push(style);
        self
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterates over styles in catalog order, optionally restricted to one category.
    pub fn list(&self, category: Option<Category>) -> impl Iterator<Item = &Style> {
        self.styles
            .iter()
            .filter(move |s| category.map_or(true, |c| s.category == c))
    }

    /// Like [`list`](Self::list), with the category given by name.
    ///
    /// An unrecognised name matches nothing.
    pub fn filter_by_name(&self, category: &str) -> Vec<&Style> {
        match category.parse::<Category>() {
            Ok(c) => self.list(Some(c)).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Serializable descriptors, in catalog order.
    pub fn infos(&self, category: Option<Category>) -> Vec<StyleInfo> {
        self.list(category).map(Style::info).collect()
    }

    /// Finds a style by id.
    pub fn get(&self, id: &str) -> Result<&Style, StyleError> {
        self.styles
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StyleError::NotFound {
                id: id.to_string(),
                available: self.styles.iter().map(|s| s.id.clone()).collect(),
            })
    }

    /// Returns `true` if a style with this id exists.
    pub fn has(&self, id: &str) -> bool {
        self.styles.iter().any(|s| s.id == id)
    }

    /// Applies the style `id` to `text`.
    pub fn apply(&self, id: &str, text: &str) -> Result<String, StyleError> {
        Ok(self.get(id)?.apply(text))
    }

    /// Applies a style to text that may already be styled.
    ///
    /// Font-like styles clean the text first, so switching from bold to
    /// script yields script rather than bold letters left untouched.
    /// Decorations are layered on top as-is.
    pub fn restyle(&self, id: &str, text: &str) -> Result<String, StyleError> {
        let style = self.get(id)?;
        if style.is_overlay() {
            Ok(style.apply(text))
        } else {
            Ok(style.apply(&clean_format(text)))
        }
    }

    /// Checks that every id is unique.
    pub fn validate(&self) -> Result<(), StyleError> {
        let mut seen = std::collections::HashSet::new();
        for style in &self.styles {
            if !seen.insert(style.id.as_str()) {
                return Err(StyleError::DuplicateId {
                    id: style.id.clone(),
                });
            }
        }
        Ok(())
    }
}
