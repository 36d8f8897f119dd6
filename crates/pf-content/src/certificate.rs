//! Certificate records parsed from spreadsheet rows.
//!
//! Column order: title, issuer, date, category, description, image, rating.

use serde::{Deserialize, Serialize};

/// Rows shorter than this are dropped.
pub const MIN_FIELDS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Programming,
    Ai,
    SoftSkills,
    /// Unknown labels pass through untouched.
    Other(String),
}

impl Category {
    pub fn parse(raw: &str) -> Category {
        match raw.trim() {
            "programming" => Category::Programming,
            "ai" => Category::Ai,
            "soft-skills" => Category::SoftSkills,
            other => Category::Other(other.to_owned()),
        }
    }

    /// Selector value used by the filter controls and `data-category`.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Programming => "programming",
            Category::Ai => "ai",
            Category::SoftSkills => "soft-skills",
            Category::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Programming => "Programming",
            Category::Ai => "AI",
            Category::SoftSkills => "Soft Skills",
            Category::Other(raw) => raw,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Ai => "brain",
            Category::SoftSkills => "user",
            _ => "code",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: usize,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub category: Category,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub icon: String,
}

/// Response body of the spreadsheet values endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SheetValues {
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl SheetValues {
    pub fn parse(body: &str) -> crate::Result<SheetValues> {
        Ok(serde_json::from_str(body)?)
    }

    /// Cells rendered as plain strings.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.values
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect()
    }
}

fn cell_text(cell: &serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Map sheet rows to certificates, skipping short rows and rows without a
/// title. Ids are the 1-based positions of the rows in the source range.
pub fn parse_certificate_rows<R: AsRef<[String]>>(rows: &[R]) -> Vec<Certificate> {
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| parse_row(idx + 1, row.as_ref()))
        .collect()
}

fn parse_row(id: usize, row: &[String]) -> Option<Certificate> {
    if row.len() < MIN_FIELDS {
        return None;
    }
    let title = row[0].trim();
    if title.is_empty() {
        return None;
    }
    let field = |i: usize| row.get(i).map(|s| s.trim().to_owned()).unwrap_or_default();
    let category = Category::parse(&field(3));
    Some(Certificate {
        id,
        title: title.to_owned(),
        issuer: field(1),
        date: field(2),
        icon: category.icon().to_owned(),
        category,
        description: field(4),
        image: field(5),
        rating: parse_rating(&field(6)),
    })
}

fn parse_rating(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(r) if r.is_finite() && r >= 0.0 => r,
        _ => 0.0,
    }
}
