//! Browser tests. Run with `wasm-pack test --headless --firefox ui/portfolio-wasm`.

use gloo_timers::future::TimeoutFuture;
use pf_content::contact::{SubmissionState, outcome_for_status};
use pf_content::config::{ContactConfig, RevealConfig};
use pf_content::{Category, Certificate, Error, Filter, PreferenceStore, RepoRecord, SiteConfig, Theme};
use portfolio_wasm::dom::{self, Elements};
use portfolio_wasm::reveal::RevealController;
use portfolio_wasm::state::{self, App, LocalPreferences};
use portfolio_wasm::{catalog, certificates, contact, modal, nav, projects, render, theme};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlFormElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

/// Mount `html` in a fresh wrapper under `<body>`. Dropping removes it.
struct Fixture(Element);

impl Fixture {
    fn mount(html: &str) -> Fixture {
        let wrapper = dom::create_element("div").unwrap();
        wrapper.set_inner_html(html);
        dom::document().body().unwrap().append_child(&wrapper).unwrap();
        Fixture(wrapper)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.0.remove();
    }
}

fn app() -> Rc<App> {
    App::new(Elements::bind().unwrap(), SiteConfig::default())
}

/// Poll `cond` every 20 ms for up to two seconds.
async fn wait_for(cond: impl Fn() -> bool) -> bool {
    for _ in 0..100 {
        if cond() {
            return true;
        }
        TimeoutFuture::new(20).await;
    }
    cond()
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

fn cert(id: usize, category: &str, date: &str, rating: f64) -> Certificate {
    let category = Category::parse(category);
    Certificate {
        id,
        title: format!("cert-{id}"),
        issuer: "Issuer".into(),
        date: date.into(),
        icon: category.icon().into(),
        category,
        image: format!("img-{id}.png"),
        rating,
        ..Default::default()
    }
}

#[wasm_bindgen_test]
fn theme_toggled_twice_is_restored() {
    let _f = Fixture::mount(r#"<button id="themeToggle"><i></i></button>"#);
    LocalPreferences.set("theme", "light");
    let app = app();
    theme::init(&app);
    assert_eq!(theme::document_theme().as_deref(), Some("light"));

    theme::toggle(&app);
    assert_eq!(theme::document_theme().as_deref(), Some("dark"));
    assert_eq!(LocalPreferences.get("theme").as_deref(), Some("dark"));
    let icon = dom::by_id("themeToggle").unwrap().query_selector("i").unwrap().unwrap();
    assert_eq!(icon.class_name(), "fas fa-sun");

    theme::toggle(&app);
    assert_eq!(theme::active_theme(&app), Theme::Light);
    assert_eq!(theme::document_theme().as_deref(), Some("light"));
    assert_eq!(LocalPreferences.get("theme").as_deref(), Some("light"));
    assert_eq!(icon.class_name(), "fas fa-moon");
}

#[wasm_bindgen_test]
fn unknown_stored_theme_falls_back_to_light() {
    LocalPreferences.set("theme", "sepia");
    let app = app();
    theme::init(&app);
    assert_eq!(app.theme(), Theme::Light);
}

#[wasm_bindgen_test]
fn empty_render_shows_only_the_placeholder() {
    let _f = Fixture::mount(r#"<div id="certificatesContainer"><div class="loading">Loading</div></div>"#);
    let container = dom::by_id("certificatesContainer").unwrap();

    render::render_certificates(&container, &[], None);

    assert_eq!(container.child_element_count(), 1);
    assert!(container.query_selector(".empty-state").unwrap().is_some());
    assert!(container.query_selector(".certificate-card").unwrap().is_none());
}

#[wasm_bindgen_test]
fn failed_repository_fetch_renders_fallback_link() {
    let _f = Fixture::mount(r#"<div id="projectsContainer"><div class="loading">Loading</div></div>"#);
    let app = app();

    projects::show_projects(&app, Err(Error::Network("offline".into())));

    let container = dom::by_id("projectsContainer").unwrap();
    let link = container.query_selector(".fallback a").unwrap().unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("https://github.com/itz-youssef"));
    assert!(container.query_selector(".project-card").unwrap().is_none());
}

#[wasm_bindgen_test]
fn fetched_repositories_render_one_card_each() {
    let _f = Fixture::mount(r#"<div id="projectsContainer"></div>"#);
    let app = app();
    let repos = vec![
        RepoRecord {
            name: "one".into(),
            ..Default::default()
        },
        RepoRecord {
            name: "two".into(),
            ..Default::default()
        },
    ];

    projects::show_projects(&app, Ok(repos));

    let container = dom::by_id("projectsContainer").unwrap();
    assert_eq!(dom::query_all_within(&container, ".project-card").len(), 2);
}

#[wasm_bindgen_test]
fn filter_and_sort_rerender_the_gallery() {
    let _f = Fixture::mount(
        r#"<div id="certificatesContainer"></div>
           <button class="filter-btn active" data-filter="all"></button>
           <button class="filter-btn" data-filter="ai"></button>"#,
    );
    let app = app();
    certificates::show_certificates(
        &app,
        Ok(vec![
            cert(1, "programming", "2023-01-01", 4.0),
            cert(2, "ai", "2024-01-01", 4.5),
            cert(3, "ai", "2022-01-01", 4.9),
        ]),
    );
    let container = dom::by_id("certificatesContainer").unwrap();
    assert_eq!(dom::query_all_within(&container, ".certificate-card").len(), 3);

    catalog::set_filter(&app, Filter::from_selector("ai"));
    let cards = dom::query_all_within(&container, ".certificate-card");
    let ids: Vec<_> = cards.iter().filter_map(|c| c.get_attribute("data-id")).collect();
    assert_eq!(ids, vec!["2", "3"]);

    catalog::set_sort(&app, pf_content::SortKey::RatingDesc);
    let cards = dom::query_all_within(&container, ".certificate-card");
    let ids: Vec<_> = cards.iter().filter_map(|c| c.get_attribute("data-id")).collect();
    assert_eq!(ids, vec!["3", "2"]);

    // The source list is untouched.
    let stored: Vec<_> = app.certificates().iter().map(|c| c.id).collect();
    assert_eq!(stored, vec![1, 2, 3]);
}

#[wasm_bindgen_test]
fn settings_override_only_present_keys() {
    let _f = Fixture::mount(
        r#"<h1 id="heroName">Static name</h1><p id="missionText">Static mission</p>"#,
    );
    let mut settings = std::collections::BTreeMap::new();
    settings.insert("hero_name".to_string(), "Remote name".to_string());

    certificates::apply_settings(&settings);

    assert_eq!(dom::by_id("heroName").unwrap().text_content().as_deref(), Some("Remote name"));
    assert_eq!(
        dom::by_id("missionText").unwrap().text_content().as_deref(),
        Some("Static mission")
    );
}

#[wasm_bindgen_test]
fn modal_open_and_close_toggle_page_scroll() {
    let _f = Fixture::mount(
        r#"<div id="certModal" class="modal">
               <span class="modal-close">&times;</span>
               <img id="modalImage">
           </div>"#,
    );
    let els = Elements::bind().unwrap();
    let body = els.body.clone().unwrap();

    modal::open(&els, "x.jpg");
    let image = els.modal_image.clone().unwrap();
    assert_eq!(image.get_attribute("src").as_deref(), Some("x.jpg"));
    assert!(modal::is_open(&els));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    modal::open(&els, "y.jpg");
    assert_eq!(image.get_attribute("src").as_deref(), Some("y.jpg"));

    modal::close(&els);
    assert!(!modal::is_open(&els));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
}

#[wasm_bindgen_test]
fn menu_toggle_and_close() {
    let _f = Fixture::mount(
        r#"<div class="hamburger"></div><ul class="nav-menu"><a class="nav-link" href="/x">x</a></ul>"#,
    );
    let els = Elements::bind().unwrap();

    nav::set_menu_open(&els, true);
    assert!(nav::is_menu_open(&els));
    assert!(dom::has_class(els.hamburger.as_ref().unwrap(), "active"));

    nav::set_menu_open(&els, false);
    assert!(!nav::is_menu_open(&els));
}

#[wasm_bindgen_test]
async fn failed_submission_reports_then_resets() {
    let _f = Fixture::mount(
        r#"<form id="contactForm">
               <input name="name" value="Ada">
               <button type="submit">Send</button>
           </form>"#,
    );
    let form: HtmlFormElement = dom::by_id("contactForm").unwrap().dyn_into().unwrap();
    let button = form.query_selector("button").unwrap().unwrap();
    let _ = button.set_attribute("disabled", "");
    let status = contact::show_status(&form, SubmissionState::Sending).unwrap();

    let form2 = form.clone();
    let status2 = status.clone();
    wasm_bindgen_futures::spawn_local(async move {
        contact::finish(&form2, &status2, outcome_for_status(500), 100).await;
    });

    TimeoutFuture::new(10).await;
    assert_eq!(
        status.text_content().as_deref(),
        SubmissionState::Failed.message()
    );
    assert!(dom::has_class(&status, "error"));

    TimeoutFuture::new(200).await;
    assert!(!button.has_attribute("disabled"));
    assert!(form.query_selector(".form-status").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn submission_without_endpoint_fails() {
    let _f = Fixture::mount(
        r#"<form id="contactForm"><input name="email" value="a@b.c"><button type="submit">Send</button></form>"#,
    );
    let form: HtmlFormElement = dom::by_id("contactForm").unwrap().dyn_into().unwrap();
    let config = pf_content::config::ContactConfig {
        endpoint: String::new(),
        reset_delay_ms: 50,
    };

    let form2 = form.clone();
    wasm_bindgen_futures::spawn_local(async move {
        contact::submit(&form2, &config).await;
    });

    TimeoutFuture::new(10).await;
    let status = form.query_selector(".form-status").unwrap().unwrap();
    assert_eq!(
        status.text_content().as_deref(),
        SubmissionState::Failed.message()
    );
    let button = form.query_selector("button").unwrap().unwrap();
    assert!(button.has_attribute("disabled"));

    TimeoutFuture::new(150).await;
    assert!(!button.has_attribute("disabled"));
    assert!(form.query_selector(".form-status").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn ambient_start_gives_up_without_host() {
    let app = app();
    app.ambient.start(Theme::Dark).await;
    assert!(!app.ambient.is_live());
    app.ambient.restart(Theme::Light).await;
    assert!(!app.ambient.is_live());
}

#[wasm_bindgen_test]
async fn init_keeps_the_app_alive_after_returning() {
    let app = portfolio_wasm::init().unwrap();
    let weak = Rc::downgrade(&app);
    drop(app);
    TimeoutFuture::new(50).await;

    let alive = weak.upgrade().expect("app dropped after init");
    assert!(Rc::ptr_eq(&alive, &state::current().unwrap()));
    assert!(alive.reveal.is_some());
}

#[wasm_bindgen_test]
fn image_clicks_open_the_modal_after_rerenders() {
    let _f = Fixture::mount(
        r#"<div id="certificatesContainer"></div>
           <div id="certModal" class="modal">
               <span class="modal-close">&times;</span>
               <img id="modalImage">
           </div>"#,
    );
    let app = app();
    certificates::show_certificates(
        &app,
        Ok(vec![cert(1, "ai", "2024-01-01", 4.0), cert(2, "programming", "2023-01-01", 3.0)]),
    );
    catalog::set_filter(&app, Filter::from_selector("programming"));
    catalog::set_filter(&app, Filter::from_selector("all"));
    catalog::set_sort(&app, pf_content::SortKey::RatingDesc);

    let container = dom::by_id("certificatesContainer").unwrap();
    let img = container
        .query_selector(r#"[data-image="img-2.png"] img"#)
        .unwrap()
        .unwrap();
    click(&img);

    assert!(modal::is_open(&app.els));
    let shown = app.els.modal_image.as_ref().unwrap().get_attribute("src");
    assert_eq!(shown.as_deref(), Some("img-2.png"));
    modal::close(&app.els);

    // Clicks outside any trigger leave the modal closed.
    click(&container.query_selector(".certificate-card").unwrap().unwrap());
    assert!(!modal::is_open(&app.els));
}

#[wasm_bindgen_test]
async fn reveal_is_one_way_and_covers_rendered_cards() {
    let _f = Fixture::mount(
        r#"<div id="revealHost" style="position:fixed;top:0;left:0;width:300px">
               <div class="project-card" style="height:60px">static</div>
               <div id="projectsContainer"></div>
           </div>"#,
    );
    let reveal = RevealController::new(&RevealConfig::default()).unwrap();
    let host = dom::by_id("revealHost").unwrap();
    let card = host.query_selector(".project-card").unwrap().unwrap();

    reveal.observe_within(&host);
    assert!(wait_for(|| dom::has_class(&card, "fade-in")).await);

    // Out of view again: the class stays.
    dom::set_style(&host, "top", "-5000px");
    TimeoutFuture::new(200).await;
    assert!(dom::has_class(&card, "fade-in"));
    dom::set_style(&host, "top", "0");

    let container = dom::by_id("projectsContainer").unwrap();
    let repos = vec![RepoRecord {
        name: "fresh".into(),
        ..Default::default()
    }];
    render::render_projects(&container, &repos, Some(&reveal));
    let fresh = container.query_selector(".project-card").unwrap().unwrap();
    assert!(!dom::has_class(&fresh, "fade-in"));
    assert!(wait_for(|| dom::has_class(&fresh, "fade-in")).await);
}

#[wasm_bindgen_test]
async fn anchors_scroll_below_the_header_and_bare_hash_is_ignored() {
    let _f = Fixture::mount(
        r##"<a id="toNowhere" href="#">top</a>
            <a id="toSection" href="#anchorTarget">go</a>
            <div style="height:2000px"></div>
            <section id="anchorTarget" style="height:100px">target</section>
            <div style="height:3000px"></div>"##,
    );
    let window = dom::window();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let els = Elements::bind().unwrap();
    nav::bind(&els, 80.0);

    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    let not_cancelled = dom::by_id("toNowhere").unwrap().dispatch_event(&event).unwrap();
    assert!(!not_cancelled);
    TimeoutFuture::new(100).await;
    assert_eq!(window.scroll_y().unwrap(), 0.0);

    let target: HtmlElement = dom::by_id("anchorTarget").unwrap().dyn_into().unwrap();
    let expected = target.offset_top() as f64 - 80.0;
    click(&dom::by_id("toSection").unwrap());
    let settled = wait_for(|| (window.scroll_y().unwrap_or(0.0) - expected).abs() < 2.0).await;
    assert!(settled, "scrolled to {:?}, expected {expected}", window.scroll_y());

    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn only_the_current_page_link_is_highlighted() {
    let _f = Fixture::mount(
        r#"<ul class="nav-menu">
               <a class="nav-link" id="here">here</a>
               <a class="nav-link" id="elsewhere" href="/elsewhere">elsewhere</a>
           </ul>"#,
    );
    let current = dom::window().location().href().unwrap();
    let _ = dom::by_id("here").unwrap().set_attribute("href", &current);
    let els = Elements::bind().unwrap();

    nav::highlight_active_link(&els);

    let here = dom::by_id("here").unwrap();
    let elsewhere = dom::by_id("elsewhere").unwrap();
    assert!(dom::has_class(&here, nav::ACTIVE_LINK_CLASS));
    assert!(!dom::has_class(&elsewhere, nav::ACTIVE_LINK_CLASS));
    assert!(!nav::is_menu_open(&els));
}

#[wasm_bindgen_test]
fn form_payload_keeps_named_text_fields() {
    let _f = Fixture::mount(
        r#"<form id="contactForm">
               <input name="name" value="Ada">
               <input name="email" value="ada@example.com">
               <input value="unnamed">
               <input type="file" name="attachment">
               <textarea name="message">Hello</textarea>
           </form>"#,
    );
    let form: HtmlFormElement = dom::by_id("contactForm").unwrap().dyn_into().unwrap();

    let payload = contact::form_payload(&form).unwrap();

    assert_eq!(
        payload,
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello" })
    );
}

#[wasm_bindgen_test]
async fn unreachable_relay_reports_failure_then_resets() {
    let _f = Fixture::mount(
        r#"<form id="contactForm" action="http://127.0.0.1:9/relay">
               <input name="email" value="a@b.c">
               <button type="submit">Send</button>
           </form>"#,
    );
    let form: HtmlFormElement = dom::by_id("contactForm").unwrap().dyn_into().unwrap();
    let button = form.query_selector("button").unwrap().unwrap();
    let config = ContactConfig {
        endpoint: String::new(),
        reset_delay_ms: 300,
    };

    let form2 = form.clone();
    wasm_bindgen_futures::spawn_local(async move {
        contact::submit(&form2, &config).await;
    });

    let status_text = || {
        form.query_selector(".form-status")
            .ok()
            .flatten()
            .and_then(|s| s.text_content())
    };
    let failed = SubmissionState::Failed.message().map(str::to_owned);
    assert!(wait_for(|| status_text() == failed).await);
    assert!(button.has_attribute("disabled"));

    assert!(wait_for(|| form.query_selector(".form-status").unwrap().is_none()).await);
    assert!(!button.has_attribute("disabled"));
}
