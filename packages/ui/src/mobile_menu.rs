use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::i18n::t;
use crate::language::use_lang;

const ESCAPE_LISTEN_JS: &str = r#"
if (window.__mobileMenuEscape) {
    document.removeEventListener("keydown", window.__mobileMenuEscape);
}
window.__mobileMenuEscape = function (e) {
    if (e.key === "Escape") {
        dioxus.send(e.key);
    }
};
document.addEventListener("keydown", window.__mobileMenuEscape);
"#;

const ESCAPE_RELEASE_JS: &str = r#"
if (window.__mobileMenuEscape) {
    document.removeEventListener("keydown", window.__mobileMenuEscape);
    window.__mobileMenuEscape = null;
}
return null;
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnFocus {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    Opened,
    Closed(ReturnFocus),
}

/// What the widget must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEffects {
    /// `true` while open: a document-level Escape listener is attached.
    pub listen_for_escape: bool,
    pub focus_button: bool,
}

impl MenuTransition {
    pub fn effects(self) -> MenuEffects {
        match self {
            MenuTransition::Opened => MenuEffects {
                listen_for_escape: true,
                focus_button: false,
            },
            MenuTransition::Closed(focus) => MenuEffects {
                listen_for_escape: false,
                focus_button: focus == ReturnFocus::Yes,
            },
        }
    }
}

/// Open/closed flag of the disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn expanded_attr(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle(&mut self) -> MenuTransition {
        self.open = !self.open;
        if self.open {
            MenuTransition::Opened
        } else {
            MenuTransition::Closed(ReturnFocus::Yes)
        }
    }

    /// `None` when the menu was already closed.
    pub fn close(&mut self, focus: ReturnFocus) -> Option<MenuTransition> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(MenuTransition::Closed(focus))
    }

    /// Escape closes an open menu and hands focus back to the button.
    pub fn escape(&mut self) -> Option<MenuTransition> {
        self.close(ReturnFocus::Yes)
    }
}

/// Handle owned by one [`MobileMenu`] and shared with links inside it.
#[derive(Clone, Copy, PartialEq)]
pub struct MenuWidget {
    state: Signal<MenuState>,
    button: Signal<Option<Rc<MountedData>>>,
    escape: Signal<Option<Task>>,
}

impl MenuWidget {
    pub fn current(&self) -> MenuState {
        (self.state)()
    }

    pub fn toggle(self) {
        let mut state = self.state;
        let transition = state.write().toggle();
        self.apply(transition);
    }

    pub fn close(self, focus: ReturnFocus) {
        let mut state = self.state;
        let transition = state.write().close(focus);
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn apply(self, transition: MenuTransition) {
        tracing::debug!(?transition, "mobile menu");
        let effects = transition.effects();
        if effects.listen_for_escape {
            self.listen_for_escape();
        } else {
            self.stop_listening();
        }
        if effects.focus_button {
            self.focus_button();
        }
    }

    fn listen_for_escape(self) {
        let mut escape = self.escape;
        if let Some(previous) = escape.take() {
            previous.cancel();
        }
        let task = spawn(async move {
            let mut listener = document::eval(ESCAPE_LISTEN_JS);
            loop {
                match listener.recv::<String>().await {
                    Ok(key) if key == "Escape" => break,
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::debug!(?err, "escape listener unavailable");
                        return;
                    }
                }
            }
            // Detach before closing so close() does not cancel this task.
            let mut escape = self.escape;
            escape.set(None);
            let mut state = self.state;
            let transition = state.write().escape();
            if let Some(transition) = transition {
                self.apply(transition);
            }
        });
        escape.set(Some(task));
    }

    fn stop_listening(self) {
        let mut escape = self.escape;
        if let Some(task) = escape.take() {
            task.cancel();
        }
        spawn(async move {
            if let Err(err) = document::eval(ESCAPE_RELEASE_JS).await {
                tracing::debug!(?err, "could not release escape listener");
            }
        });
    }

    fn focus_button(self) {
        let Some(button) = self.button.peek().clone() else {
            return;
        };
        spawn(async move {
            if let Err(err) = button.set_focus(true).await {
                tracing::debug!(?err, "could not return focus to menu button");
            }
        });
    }
}

/// The enclosing menu, if any.
pub fn use_menu() -> Option<MenuWidget> {
    try_use_context::<MenuWidget>()
}

/// Toggle button plus the `#mobile-menu` container it discloses.
#[component]
pub fn MobileMenu(children: Element) -> Element {
    let lang = use_lang().get();
    let state = use_signal(MenuState::default);
    let button = use_signal(|| None);
    let escape = use_signal(|| None);
    let widget = use_context_provider(|| MenuWidget {
        state,
        button,
        escape,
    });
    let current = widget.current();

    rsx! {
        button {
            class: "mobile-menu-button",
            r#type: "button",
            "aria-controls": "mobile-menu",
            "aria-expanded": current.expanded_attr(),
            onmounted: move |evt: MountedEvent| {
                let mut button = widget.button;
                button.set(Some(evt.data()));
            },
            onclick: move |_| widget.toggle(),
            span { class: "sr-only", {t(lang, "menu.toggle")} }
            span { class: "menu_icon", "aria-hidden": "true", "☰" }
        }
        div { id: "mobile-menu", class: "mobile_menu", hidden: !current.is_open(), {children} }
    }
}
