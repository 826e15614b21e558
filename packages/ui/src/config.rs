use dioxus::prelude::*;

use crate::i18n::LANG_STORAGE_KEY;

/// Which message table the contact form speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    /// English messages regardless of the page language.
    Plain,
    /// Messages follow the page language at the moment of validation.
    #[default]
    Bilingual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    pub variant: FormVariant,
    pub action: &'static str,
    pub method: &'static str,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            variant: FormVariant::Bilingual,
            action: "/contact",
            method: "post",
        }
    }
}

/// Site-wide settings, provided once at the app root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    /// `None` disables language persistence.
    pub lang_storage_key: Option<&'static str>,
    pub form: FormConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang_storage_key: Some(LANG_STORAGE_KEY),
            form: FormConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Single-language site: English form messages, nothing persisted.
    pub fn plain() -> Self {
        Self {
            lang_storage_key: None,
            form: FormConfig {
                variant: FormVariant::Plain,
                ..FormConfig::default()
            },
        }
    }

    pub fn with_form_action(mut self, action: Option<&'static str>) -> Self {
        if let Some(action) = action.map(str::trim).filter(|a| !a.is_empty()) {
            self.form.action = action;
        }
        self
    }
}

/// Read the configuration from context, falling back to defaults when the
/// root did not provide one.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}
