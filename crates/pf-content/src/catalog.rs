//! Filtering and sorting of the certificate list.
//!
//! The source list is never reordered in place; every change of filter or
//! sort derives a fresh copy from it, so the order in which the controls are
//! used does not matter.

use crate::certificate::Certificate;
use chrono::NaiveDate;
use std::cmp::Reverse;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value; `"all"` or empty selects everything.
    pub fn from_selector(raw: &str) -> Filter {
        match raw.trim() {
            "" | "all" => Filter::All,
            other => Filter::Category(other.to_owned()),
        }
    }

    pub fn matches(&self, cert: &Certificate) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(sel) => cert.category.as_str() == sel,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    None,
    DateDesc,
    RatingDesc,
}

impl SortKey {
    pub fn from_selector(raw: &str) -> SortKey {
        match raw.trim() {
            "date" => SortKey::DateDesc,
            "rating" => SortKey::RatingDesc,
            _ => SortKey::None,
        }
    }
}

/// Active filter and sort. Both axes apply together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub filter: Filter,
    pub sort: SortKey,
}

impl CatalogView {
    pub fn derive(&self, source: &[Certificate]) -> Vec<Certificate> {
        let mut out = filter_by(source, &self.filter);
        sort_in_place(&mut out, self.sort);
        out
    }
}

pub fn filter_by(source: &[Certificate], filter: &Filter) -> Vec<Certificate> {
    source.iter().filter(|c| filter.matches(c)).cloned().collect()
}

pub fn sorted_by(source: &[Certificate], key: SortKey) -> Vec<Certificate> {
    let mut out = source.to_vec();
    sort_in_place(&mut out, key);
    out
}

// `sort_by*` is stable, ties keep their relative order.
fn sort_in_place(certs: &mut [Certificate], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::DateDesc => certs.sort_by_key(|c| {
            let date = parse_date(&c.date);
            (date.is_none(), Reverse(date))
        }),
        SortKey::RatingDesc => certs.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM` and `YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d"))
        .ok()
}
