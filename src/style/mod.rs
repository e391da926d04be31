//! Style catalog.
//!
//! This module provides:
//!
//! - [`Style`]: A named transform with a display label and a [`Category`]
//! - [`Catalog`]: An ordered, filterable collection of styles
//! - [`StyleInfo`]: The serializable `{id, label, category}` view of a style
//! - [`StyleError`]: Lookup and validation errors
//!
//! [`Catalog::builtin`] holds every style shipped with the crate.

mod builtin;
mod catalog;
mod category;
mod error;

pub use catalog::{Catalog, Style, StyleInfo, TransformFn};
pub use category::Category;
pub use error::StyleError;
