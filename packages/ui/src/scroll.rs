use dioxus::prelude::*;

use crate::js::js_literal;
use crate::mobile_menu::{use_menu, ReturnFocus};

const REDUCED_MOTION_JS: &str = r#"
try { return window.matchMedia("(prefers-reduced-motion: reduce)").matches; }
catch (e) { return false; }
"#;

/// Whether the user asked the platform to suppress animations.
#[derive(Clone, Copy, PartialEq)]
pub struct MotionPreference {
    reduced: Signal<bool>,
}

impl MotionPreference {
    pub fn reduced(&self) -> bool {
        *self.reduced.peek()
    }
}

/// Query `prefers-reduced-motion` once after mount and share the answer.
#[component]
pub fn ReducedMotionProvider(children: Element) -> Element {
    let reduced = use_signal(|| false);
    let preference = use_context_provider(|| MotionPreference { reduced });

    use_effect(move || {
        spawn(async move {
            let mut reduced = preference.reduced;
            match document::eval(REDUCED_MOTION_JS).await {
                Ok(value) => reduced.set(value.as_bool().unwrap_or(false)),
                Err(err) => tracing::debug!(?err, "reduced motion preference unavailable"),
            }
        });
    });

    rsx! { {children} }
}

fn scroll_script(target: &str) -> String {
    format!(
        r#"
        var target = document.getElementById({id});
        if (!target) return false;
        target.scrollIntoView({{ behavior: "smooth", block: "start" }});
        target.setAttribute("tabindex", "-1");
        target.focus();
        return true;
        "#,
        id = js_literal(target)
    )
}

async fn scroll_to_section(target: String) {
    match document::eval(&scroll_script(&target)).await {
        Ok(value) if value.as_bool() == Some(true) => {}
        Ok(_) => tracing::debug!(%target, "scroll target missing"),
        Err(err) => tracing::debug!(?err, %target, "smooth scroll unavailable"),
    }
}

/// In-page link to the element with id `target`.
///
/// Smooth-scrolls and moves focus to the section unless reduced motion is
/// preferred, in which case the browser's own jump is used. Inside an open
/// mobile menu the click also closes the menu, leaving focus alone.
#[component]
pub fn SectionLink(
    #[props(into)] target: String,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let motion = try_use_context::<MotionPreference>();
    let menu = use_menu();
    let href = format!("#{target}");

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                if let Some(menu) = menu {
                    menu.close(ReturnFocus::No);
                }
                if motion.is_some_and(|m| m.reduced()) {
                    return;
                }
                evt.prevent_default();
                spawn(scroll_to_section(target.clone()));
            },
            {children}
        }
    }
}
