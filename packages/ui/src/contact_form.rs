use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::{use_site_config, FormVariant};
use crate::i18n::t;
use crate::language::{use_lang, LangHandle};
use crate::validation::{
    validate_field, validate_submission, Annotations, Field, FormValues, ValidationReport,
};

const ERROR_COLOR: &str = "#C53030";
const ERROR_STYLE: &str =
    "display: block; color: #C53030; font-size: 0.875rem; margin-top: 0.25rem;";

#[derive(Clone, Copy, PartialEq)]
struct FieldSlot {
    value: Signal<String>,
    mounted: Signal<Option<Rc<MountedData>>>,
}

fn use_field_slot() -> FieldSlot {
    FieldSlot {
        value: use_signal(String::new),
        mounted: use_signal(|| None),
    }
}

/// Everything the form's handlers share, built once per form instance.
#[derive(Clone, Copy, PartialEq)]
struct FormState {
    slots: [FieldSlot; 3],
    annotations: Signal<Annotations>,
    variant: FormVariant,
    lang: LangHandle,
}

impl FormState {
    fn slot(&self, field: Field) -> FieldSlot {
        self.slots[field.index()]
    }

    fn values(&self) -> FormValues {
        let read = |field: Field| self.slot(field).value.peek().clone();
        FormValues {
            name: read(Field::Name),
            email: read(Field::Email),
            message: read(Field::Message),
        }
    }

    /// Drop every annotation, then validate all fields and annotate failures.
    fn submit(&self) -> ValidationReport {
        let report = validate_submission(&self.values());
        // Messages use the language in effect right now, not at render time.
        let lang = self.lang.peek();
        let mut annotations = self.annotations;
        annotations
            .write()
            .apply_report(&report, self.variant, lang);
        tracing::debug!(failures = report.failures().len(), "contact form validated");
        report
    }

    fn check(&self, field: Field) {
        let value = self.slot(field).value.peek().clone();
        let outcome = validate_field(field, &value);
        let mut annotations = self.annotations;
        annotations
            .write()
            .apply_check(field, outcome, self.variant, self.lang.peek());
    }

    fn edited(&self, field: Field, value: String) {
        let mut slot_value = self.slot(field).value;
        slot_value.set(value);
        if self.annotations.peek().is_invalid(field) {
            let mut annotations = self.annotations;
            annotations.write().edited(field);
        }
    }

    fn focus(&self, field: Field) {
        let Some(element) = self.slot(field).mounted.peek().clone() else {
            tracing::debug!(field = field.id(), "field not mounted, focus skipped");
            return;
        };
        spawn(async move {
            if let Err(err) = element.set_focus(true).await {
                tracing::debug!(?err, "could not focus field");
            }
        });
    }
}

/// The `#contact-form`: name, email and message, all required.
///
/// A failed submission is blocked and focus moves to the first failing field.
/// A passing one is left to the browser.
#[component]
pub fn ContactForm() -> Element {
    let config = use_site_config();
    let lang = use_lang();
    let current = lang.get();
    let form = FormState {
        slots: [use_field_slot(), use_field_slot(), use_field_slot()],
        annotations: use_signal(Annotations::default),
        variant: config.form.variant,
        lang,
    };

    rsx! {
        form {
            id: "contact-form",
            class: "contact_form",
            action: config.form.action,
            method: config.form.method,
            "novalidate": "novalidate",
            onsubmit: move |evt: FormEvent| {
                let report = form.submit();
                if let Some(first) = report.first_invalid() {
                    evt.prevent_default();
                    form.focus(first);
                }
            },
            for (field, id) in Field::ALL.iter().map(|f| (*f, f.id())) {
                RequiredField { key: "{id}", field: field, form: form }
            }
            button { r#type: "submit", class: "btn primary", {t(current, "form.submit")} }
        }
    }
}

/// One required input with its blur/input handlers and error annotation.
#[component]
fn RequiredField(field: Field, form: FormState) -> Element {
    let lang = form.lang.get();
    let slot = form.slot(field);
    let value = slot.value.read().clone();
    let message = form.annotations.read().message(field).map(str::to_string);
    let invalid = message.is_some();
    let error_id = field.error_id();
    let described_by = invalid.then(|| error_id.clone());
    let border_color = if invalid { ERROR_COLOR } else { "" };

    let onblur = move |_: FocusEvent| form.check(field);
    let oninput = move |evt: FormEvent| form.edited(field, evt.value());
    let onmounted = move |evt: MountedEvent| {
        let mut mounted = slot.mounted;
        mounted.set(Some(evt.data()));
    };

    rsx! {
        div { class: "form_field",
            label { r#for: field.id(), {t(lang, field.label_key())} }
            if field == Field::Message {
                textarea {
                    id: field.id(),
                    name: field.id(),
                    rows: "5",
                    required: true,
                    value: "{value}",
                    "aria-invalid": invalid.then_some("true"),
                    "aria-describedby": described_by.clone(),
                    border_color: border_color,
                    onblur: onblur,
                    oninput: oninput,
                    onmounted: onmounted,
                }
            } else {
                input {
                    id: field.id(),
                    name: field.id(),
                    r#type: if field == Field::Email { "email" } else { "text" },
                    autocomplete: field.id(),
                    required: true,
                    value: "{value}",
                    "aria-invalid": invalid.then_some("true"),
                    "aria-describedby": described_by.clone(),
                    border_color: border_color,
                    onblur: onblur,
                    oninput: oninput,
                    onmounted: onmounted,
                }
            }
            if let Some(message) = message {
                span {
                    id: "{error_id}",
                    class: "error-message",
                    role: "alert",
                    style: ERROR_STYLE,
                    "{message}"
                }
            }
        }
    }
}
