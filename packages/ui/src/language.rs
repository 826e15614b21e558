use dioxus::prelude::*;
use serde::Deserialize;

use crate::config::use_site_config;
use crate::i18n::{resolve_lang, t, Lang};
use crate::js::js_literal;

/// Shared handle to the page language.
///
/// Components read the language through [`LangHandle::get`] (which subscribes
/// the caller) and change it through [`LangHandle::set`].
#[derive(Clone, Copy, PartialEq)]
pub struct LangHandle {
    lang: Signal<Lang>,
    storage_key: Option<&'static str>,
}

impl LangHandle {
    pub fn get(&self) -> Lang {
        (self.lang)()
    }

    pub fn peek(&self) -> Lang {
        *self.lang.peek()
    }

    /// Apply `next` to the page and persist it.
    ///
    /// Reapplying the current language leaves the rendered page untouched.
    pub fn set(&self, next: Lang) {
        let mut lang = self.lang;
        if *lang.peek() != next {
            tracing::debug!(lang = next.code(), "language changed");
            lang.set(next);
        }
        if let Some(key) = self.storage_key {
            spawn(persist_lang(key, next));
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LangSources {
    search: Option<String>,
    stored: Option<String>,
}

async fn read_lang_sources(storage_key: Option<&'static str>) -> LangSources {
    let js = format!(
        r#"
        var key = {key};
        var search = null, stored = null;
        try {{ search = window.location.search; }} catch (e) {{}}
        try {{ if (key !== null) stored = localStorage.getItem(key); }} catch (e) {{}}
        return {{ search: search, stored: stored }};
        "#,
        key = js_literal(&storage_key)
    );
    match document::eval(&js).await {
        Ok(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            tracing::debug!(%err, "unreadable language sources");
            LangSources::default()
        }),
        Err(err) => {
            tracing::debug!(?err, "language sources unavailable");
            LangSources::default()
        }
    }
}

async fn persist_lang(key: &'static str, lang: Lang) {
    let js = format!(
        r#"
        try {{ localStorage.setItem({key}, "{code}"); return true; }}
        catch (e) {{ return false; }}
        "#,
        key = js_literal(key),
        code = lang.code()
    );
    match document::eval(&js).await {
        Ok(value) if value.as_bool() == Some(true) => {}
        Ok(_) => tracing::debug!("storage unavailable, language not persisted"),
        Err(err) => tracing::debug!(?err, "language not persisted"),
    }
}

/// Provide the page language to the tree, defaulting to French.
///
/// After mount the language is resolved from `?lang=`, then storage, then the
/// default. The document title and `<html lang>` follow the current value.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let config = use_site_config();
    let lang = use_signal(Lang::default);
    let handle = use_context_provider(|| LangHandle {
        lang,
        storage_key: config.lang_storage_key,
    });

    use_effect(move || {
        spawn(async move {
            let sources = read_lang_sources(handle.storage_key).await;
            let resolved = resolve_lang(sources.search.as_deref(), sources.stored.as_deref());
            handle.set(resolved);
        });
    });

    use_effect(move || {
        let code = lang().code();
        spawn(async move {
            let js = format!(r#"document.documentElement.lang = "{code}"; return null;"#);
            if let Err(err) = document::eval(&js).await {
                tracing::debug!(?err, "could not set document language");
            }
        });
    });

    let title = t(lang(), "site.title");

    rsx! {
        document::Title { "{title}" }
        {children}
    }
}

pub fn use_lang() -> LangHandle {
    if let Some(handle) = try_use_context::<LangHandle>() {
        return handle;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("missing I18nProvider context, using local French signal");
    LangHandle {
        lang: use_signal(Lang::default),
        storage_key: None,
    }
}

/// Content shown only while the page is in `lang`.
#[component]
pub fn LangBlock(lang: Lang, #[props(default, into)] class: String, children: Element) -> Element {
    let current = use_lang().get();
    rsx! {
        div {
            class: "{class}",
            "data-lang": lang.code(),
            hidden: current != lang,
            {children}
        }
    }
}

fn option_label_key(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => "lang.fr",
        Lang::En => "lang.en",
    }
}

/// Radio group named `language`; selecting an option applies it.
#[component]
pub fn LanguageToggle() -> Element {
    let handle = use_lang();
    let current = handle.get();

    rsx! {
        fieldset { class: "lang_toggle",
            legend { class: "sr-only", {t(current, "lang.label")} }
            for (lang, code) in Lang::ALL.iter().map(|l| (*l, l.code())) {
                label { key: "{code}", class: "lang_option",
                    input {
                        r#type: "radio",
                        name: "language",
                        value: code,
                        checked: current == lang,
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            match Lang::from_code(&value) {
                                Some(next) => handle.set(next),
                                None => {
                                    tracing::debug!(%value, "ignoring malformed language value")
                                }
                            }
                        },
                    }
                    span { {t(current, option_label_key(lang))} }
                }
            }
        }
    }
}

/// The `#main-nav` landmark, labelled in the current language.
#[component]
pub fn MainNav(children: Element) -> Element {
    let lang = use_lang().get();
    rsx! {
        nav { id: "main-nav", class: "site_nav", "aria-label": t(lang, "nav.label"), {children} }
    }
}
