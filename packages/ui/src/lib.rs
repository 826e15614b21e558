//! This crate contains all shared UI for the site.

mod js;

mod config;
pub use config::{use_site_config, FormConfig, FormVariant, SiteConfig};

mod i18n;
pub use i18n::{lang_from_query, resolve_lang, t, Lang, LANG_STORAGE_KEY};

mod language;
pub use language::{use_lang, I18nProvider, LangBlock, LangHandle, LanguageToggle, MainNav};

mod validation;
pub use validation::{
    is_valid_email, validate_field, validate_submission, Annotations, Field, FieldError,
    FormValues, ValidationReport,
};

mod contact_form;
pub use contact_form::ContactForm;

mod mobile_menu;
pub use mobile_menu::{use_menu, MenuState, MenuTransition, MenuWidget, MobileMenu, ReturnFocus};

mod scroll;
pub use scroll::{MotionPreference, ReducedMotionProvider, SectionLink};

mod theme;
pub use theme::SiteTheme;
