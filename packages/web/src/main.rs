use dioxus::prelude::*;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Where the contact form posts; baked in at build time.
const CONTACT_FORM_ACTION: Option<&str> = option_env!("CONTACT_FORM_ACTION");
/// `plain` builds the single-language configuration.
const SITE_VARIANT: Option<&str> = option_env!("SITE_VARIANT");

fn main() {
    init_tracing();
    install_panic_hook();
    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus::launch may install its own subscriber; first one wins.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(not(feature = "server"))]
fn init_tracing() {}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}

#[cfg(feature = "server")]
fn log_runtime_config() {
    let ip = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let config = site_config(SITE_VARIANT, CONTACT_FORM_ACTION);

    tracing::info!(%ip, %port, "startup");
    tracing::info!(
        variant = ?config.form.variant,
        form_action = config.form.action,
        lang_storage_key = ?config.lang_storage_key,
        "startup: site config"
    );
    if CONTACT_FORM_ACTION.is_none() {
        tracing::warn!("startup: CONTACT_FORM_ACTION was not set at build time");
    }
}

#[cfg(not(feature = "server"))]
fn log_runtime_config() {}

fn site_config(variant: Option<&str>, form_action: Option<&'static str>) -> ui::SiteConfig {
    let base = match variant.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("plain") => ui::SiteConfig::plain(),
        _ => ui::SiteConfig::default(),
    };
    base.with_form_action(form_action)
}

#[component]
fn App() -> Element {
    use_context_provider(|| site_config(SITE_VARIANT, CONTACT_FORM_ACTION));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::ReducedMotionProvider {
            ui::I18nProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Header with brand, navigation (desktop links and the mobile disclosure)
/// and the language switch, around the routed page.
#[component]
fn SiteLayout() -> Element {
    let lang = ui::use_lang().get();

    rsx! {
        a { class: "sr-only", href: "#main", {ui::t(lang, "nav.skip")} }
        header { class: "site_header",
            a { class: "brand", href: "/", {ui::t(lang, "site.name")} }
            ui::MainNav {
                div { class: "nav_links desktop", NavLinks {} }
                ui::MobileMenu {
                    NavLinks {}
                }
            }
            ui::LanguageToggle {}
        }
        main { id: "main", Outlet::<Route> {} }
    }
}

#[component]
fn NavLinks() -> Element {
    let lang = ui::use_lang().get();

    rsx! {
        ui::SectionLink { target: "services", class: "nav_link", {ui::t(lang, "nav.services")} }
        ui::SectionLink { target: "about", class: "nav_link", {ui::t(lang, "nav.about")} }
        ui::SectionLink { target: "contact", class: "nav_link", {ui::t(lang, "nav.contact")} }
    }
}
