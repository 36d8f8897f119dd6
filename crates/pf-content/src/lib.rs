//! Portfolio content core.
//!
//! Everything the browser frontend needs that does not touch the DOM:
//! record types, row parsing, filter/sort derivation, card markup,
//! theme preference, contact submission state and site configuration.
//! Kept free of `web-sys` so it can be unit-tested natively.

pub mod ambient;
pub mod catalog;
pub mod certificate;
pub mod config;
pub mod contact;
pub mod error;
pub mod render;
pub mod repo;
pub mod settings;
pub mod theme;

pub use catalog::{CatalogView, Filter, SortKey};
pub use certificate::{Category, Certificate};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use repo::RepoRecord;
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemePreference};
