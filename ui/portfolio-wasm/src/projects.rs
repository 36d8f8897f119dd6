//! GitHub repository panel.

use crate::api;
use crate::render;
use crate::state::App;
use pf_content::config::GithubConfig;
use pf_content::render::fallback_html;
use pf_content::repo::parse_repos;
use pf_content::{Error, RepoRecord};
use std::rc::Rc;

pub async fn fetch_projects(config: &GithubConfig) -> Result<Vec<RepoRecord>, Error> {
    let body = api::get_text(&config.repos_url()).await?;
    parse_repos(&body)
}

/// Fetch and render. Inert when the page has no projects container.
pub async fn load_projects(app: Rc<App>) {
    if app.els.projects_container.is_none() {
        return;
    }
    let outcome = fetch_projects(&app.config.github).await;
    show_projects(&app, outcome);
}

/// Render a fetch outcome: cards, the empty state, or the fallback link.
pub fn show_projects(app: &App, outcome: Result<Vec<RepoRecord>, Error>) {
    let Some(container) = &app.els.projects_container else {
        return;
    };
    match outcome {
        Ok(repos) => render::render_projects(container, &repos, app.reveal.as_ref()),
        Err(e) => {
            gloo_console::error!("Error fetching GitHub projects:", e.to_string());
            container.set_inner_html(&fallback_html(
                "Unable to load projects from GitHub.",
                &app.config.github.profile_url(),
                "View on GitHub",
            ));
        }
    }
}
