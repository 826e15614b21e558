/// Key under which the chosen language is persisted in `localStorage`.
pub const LANG_STORAGE_KEY: &str = "orig_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Fr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Lang::Fr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Extract the `lang` parameter from a raw `location.search` string.
///
/// Like `URLSearchParams.get`, only the first `lang` pair counts; an
/// unsupported value there yields `None` even if a later pair is valid.
pub fn lang_from_query(search: &str) -> Option<Lang> {
    let (_, value) = search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "lang")?;
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .ok()
        .and_then(|decoded| Lang::from_code(&decoded))
}

/// URL parameter, then persisted value, then French.
pub fn resolve_lang(query: Option<&str>, stored: Option<&str>) -> Lang {
    query
        .and_then(lang_from_query)
        .or_else(|| stored.and_then(Lang::from_code))
        .unwrap_or_default()
}

/// Translate a key for a given language. Falls back to French if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Document
        (Lang::Fr, "site.name") => "Atelier Rivage".to_string(),
        (Lang::Fr, "site.title") => "Atelier Rivage | Design et artisanat".to_string(),
        (Lang::En, "site.title") => "Atelier Rivage | Design and craft".to_string(),

        // Nav
        (Lang::Fr, "nav.label") => "Navigation principale".to_string(),
        (Lang::En, "nav.label") => "Main navigation".to_string(),
        (Lang::Fr, "nav.skip") => "Aller au contenu".to_string(),
        (Lang::En, "nav.skip") => "Skip to content".to_string(),
        (Lang::Fr, "nav.services") => "Services".to_string(),
        (Lang::Fr, "nav.about") => "À propos".to_string(),
        (Lang::En, "nav.about") => "About".to_string(),
        (Lang::Fr, "nav.contact") => "Contact".to_string(),
        (Lang::Fr, "menu.toggle") => "Ouvrir ou fermer le menu".to_string(),
        (Lang::En, "menu.toggle") => "Open or close the menu".to_string(),
        (Lang::Fr, "lang.label") => "Langue".to_string(),
        (Lang::En, "lang.label") => "Language".to_string(),
        (Lang::Fr, "lang.fr") => "Français".to_string(),
        (Lang::Fr, "lang.en") => "English".to_string(),

        // Contact form
        (Lang::Fr, "form.title") => "Nous écrire".to_string(),
        (Lang::En, "form.title") => "Write to us".to_string(),
        (Lang::Fr, "form.name") => "Nom".to_string(),
        (Lang::En, "form.name") => "Name".to_string(),
        (Lang::Fr, "form.email") => "Courriel".to_string(),
        (Lang::En, "form.email") => "Email".to_string(),
        (Lang::Fr, "form.message") => "Message".to_string(),
        (Lang::Fr, "form.submit") => "Envoyer".to_string(),
        (Lang::En, "form.submit") => "Send".to_string(),
        (Lang::Fr, "form.error.name_required") => "Le nom est requis".to_string(),
        (Lang::En, "form.error.name_required") => "Name is required".to_string(),
        (Lang::Fr, "form.error.email_required") => "Le courriel est requis".to_string(),
        (Lang::En, "form.error.email_required") => "Email is required".to_string(),
        (Lang::Fr, "form.error.message_required") => "Le message est requis".to_string(),
        (Lang::En, "form.error.message_required") => "Message is required".to_string(),
        (Lang::Fr, "form.error.email_invalid") => {
            "Veuillez saisir une adresse courriel valide".to_string()
        }
        (Lang::En, "form.error.email_invalid") => "Please enter a valid email address".to_string(),

        // Sections
        (Lang::Fr, "home.tagline") => "Des objets pensés pour durer.".to_string(),
        (Lang::En, "home.tagline") => "Objects made to last.".to_string(),
        (Lang::Fr, "home.cta") => "Parlons de votre projet".to_string(),
        (Lang::En, "home.cta") => "Tell us about your project".to_string(),
        (Lang::Fr, "services.title") => "Nos services".to_string(),
        (Lang::En, "services.title") => "Our services".to_string(),
        (Lang::Fr, "about.title") => "L'atelier".to_string(),
        (Lang::En, "about.title") => "The workshop".to_string(),
        (Lang::Fr, "contact.title") => "Contact".to_string(),

        // Fallback: use French string if present, else show key.
        (Lang::En, k) => t(Lang::Fr, k),
        (Lang::Fr, _) => key.to_string(),
    }
}
