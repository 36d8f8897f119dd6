//! Site configuration.
//!
//! Every field has a default so a page can ship without any configuration
//! block, or override only the parts it cares about.

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub github: GithubConfig,
    pub sheets: SheetsConfig,
    pub contact: ContactConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub ambient: AmbientConfig,
}

impl SiteConfig {
    /// Parse a JSON configuration block.
    pub fn from_json(raw: &str) -> crate::Result<SiteConfig> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub user: String,
    pub api_base: String,
    pub limit: u32,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            user: "itz-youssef".into(),
            api_base: "https://api.github.com".into(),
            limit: 6,
        }
    }
}

impl GithubConfig {
    /// Most recently updated public repositories of the user.
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base.trim_end_matches('/'),
            self.user,
            self.limit
        )
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.user)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    pub api_base: String,
    pub spreadsheet_id: String,
    pub api_key: String,
    pub settings_range: String,
    pub certificates_range: String,
    /// Link shown when certificates cannot be loaded.
    pub fallback_url: Option<String>,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_base: "https://sheets.googleapis.com/v4/spreadsheets".into(),
            spreadsheet_id: String::new(),
            api_key: String::new(),
            settings_range: "Settings!A2:B".into(),
            certificates_range: "Certificates!A2:G".into(),
            fallback_url: None,
        }
    }
}

impl SheetsConfig {
    /// Values endpoint for `range`. Fails when the sheet is not configured.
    pub fn values_url(&self, range: &str) -> crate::Result<String> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(crate::Error::MissingConfig("sheets.spreadsheet_id"));
        }
        if self.api_key.trim().is_empty() {
            return Err(crate::Error::MissingConfig("sheets.api_key"));
        }
        Ok(format!(
            "{}/{}/values/{}?key={}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(self.spreadsheet_id.trim()),
            urlencoding::encode(range),
            urlencoding::encode(self.api_key.trim())
        ))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Relay endpoint used when the form carries no `action` attribute.
    pub endpoint: String,
    pub reset_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            reset_delay_ms: 5_000,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Height of the fixed header, subtracted from scroll targets.
    pub header_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { header_offset: 80.0 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub revealed_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".intro-card, .project-card, .interest-card, .gallery-item, .certificate-card"
                .into(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            revealed_class: "fade-in".into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    pub host_id: String,
    pub retry_interval_ms: u32,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            host_id: "particles-js".into(),
            retry_interval_ms: 100,
        }
    }
}
