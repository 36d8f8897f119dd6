//! Repository records as returned by the GitHub REST API.

use serde::{Deserialize, Deserializer, Serialize};

/// One listing entry. Every field tolerates being absent or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, rename = "stargazers_count", deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(default, rename = "html_url", deserialize_with = "null_as_default")]
    pub url: String,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

impl RepoRecord {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "No description available",
        }
    }

    pub fn language_or_default(&self) -> &str {
        match self.language.as_deref() {
            Some(l) if !l.is_empty() => l,
            _ => "Various",
        }
    }

    /// Font Awesome brand icon for the primary language.
    pub fn icon(&self) -> &'static str {
        project_icon(self.language.as_deref().unwrap_or_default())
    }
}

pub fn project_icon(language: &str) -> &'static str {
    match language {
        "JavaScript" => "js",
        "Python" => "python",
        "Java" => "java",
        "C++" => "cuttlefish",
        "HTML" => "html5",
        "CSS" => "css3-alt",
        "TypeScript" => "js-square",
        "PHP" => "php",
        "Ruby" => "gem",
        _ => "code",
    }
}

/// Decode a repository listing. Anything that is not a JSON array yields an
/// empty list; the API answers rate limits with an object. Entries that are
/// not objects, or carry fields of the wrong type, are skipped on their own.
pub fn parse_repos(body: &str) -> crate::Result<Vec<RepoRecord>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
