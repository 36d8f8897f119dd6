//! Card markup for the projects and certificates panels.
//!
//! Remote strings are escaped before they are spliced into markup.

use crate::certificate::Certificate;
use crate::repo::RepoRecord;

pub const PROJECT_CARD_CLASS: &str = "project-card";
pub const CERTIFICATE_CARD_CLASS: &str = "certificate-card";

pub const NO_PROJECTS_HTML: &str =
    r#"<div class="loading empty-state">No public projects found on GitHub.</div>"#;
pub const NO_CERTIFICATES_HTML: &str =
    r#"<div class="loading empty-state">No certificates found in this category.</div>"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn project_card(repo: &RepoRecord) -> String {
    format!(
        r#"<div class="{cls}">
    <div class="project-icon"><i class="fab fa-{icon}"></i></div>
    <h3>{name}</h3>
    <p>{description}</p>
    <div class="project-meta">
        <span class="language">{language}</span>
        <span class="stars"><i class="fas fa-star"></i> {stars}</span>
    </div>
    <a href="{url}" target="_blank" rel="noopener" class="project-link">View on GitHub</a>
</div>"#,
        cls = PROJECT_CARD_CLASS,
        icon = repo.icon(),
        name = escape_html(&repo.name),
        description = escape_html(repo.description_or_default()),
        language = escape_html(repo.language_or_default()),
        stars = repo.stars,
        url = escape_html(&repo.url),
    )
}

/// Certificate card. Cards with an image carry `data-image`, which the
/// frontend uses as the lightbox trigger.
pub fn certificate_card(cert: &Certificate) -> String {
    let image = if cert.image.is_empty() {
        String::new()
    } else {
        let src = escape_html(&cert.image);
        format!(
            r#"<div class="certificate-image" data-image="{src}"><img src="{src}" alt="{alt}" loading="lazy"></div>"#,
            alt = escape_html(&cert.title),
        )
    };
    let description = if cert.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="certificate-description">{}</p>"#,
            escape_html(&cert.description)
        )
    };
    format!(
        r#"<div class="{cls} gallery-item" data-id="{id}" data-category="{category}">
    {image}
    <div class="certificate-info">
        <div class="certificate-icon"><i class="fas fa-{icon}"></i></div>
        <h3>{title}</h3>
        <p class="certificate-issuer">{issuer}</p>
        <div class="certificate-meta">
            <span class="certificate-category">{label}</span>
            <span class="certificate-date">{date}</span>
            <span class="certificate-rating"><i class="fas fa-star"></i> {rating}</span>
        </div>
        {description}
    </div>
</div>"#,
        cls = CERTIFICATE_CARD_CLASS,
        id = cert.id,
        category = escape_html(cert.category.as_str()),
        icon = escape_html(&cert.icon),
        title = escape_html(&cert.title),
        issuer = escape_html(&cert.issuer),
        label = escape_html(cert.category.label()),
        date = escape_html(&cert.date),
        rating = format_rating(cert.rating),
    )
}

fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Full container markup: one card per record, or the placeholder.
pub fn cards_html<T>(records: &[T], card: impl Fn(&T) -> String, empty: &str) -> String {
    if records.is_empty() {
        return empty.to_owned();
    }
    records.iter().map(card).collect::<Vec<_>>().join("\n")
}

/// Shown in place of a panel whose data could not be loaded.
pub fn fallback_html(message: &str, link: &str, link_text: &str) -> String {
    format!(
        r#"<div class="loading fallback">
    <p>{}</p>
    <a href="{}" target="_blank" rel="noopener" class="btn btn-primary">{}</a>
</div>"#,
        escape_html(message),
        escape_html(link),
        escape_html(link_text)
    )
}
