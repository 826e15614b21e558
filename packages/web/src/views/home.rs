use dioxus::prelude::*;
use ui::{ContactForm, Lang, LangBlock, SectionLink};

#[component]
pub fn Home() -> Element {
    let lang = ui::use_lang().get();

    rsx! {
        section { id: "hero", class: "section hero",
            h1 { {ui::t(lang, "site.name")} }
            p { class: "tagline", {ui::t(lang, "home.tagline")} }
            SectionLink { target: "contact", class: "btn primary", {ui::t(lang, "home.cta")} }
        }

        section { id: "services", class: "section",
            h2 { {ui::t(lang, "services.title")} }
            LangBlock { lang: Lang::Fr,
                ul {
                    li { "Mobilier sur mesure en bois massif" }
                    li { "Restauration de pièces anciennes" }
                    li { "Accompagnement de projets d'aménagement" }
                }
            }
            LangBlock { lang: Lang::En,
                ul {
                    li { "Custom solid wood furniture" }
                    li { "Restoration of antique pieces" }
                    li { "Support for interior fit-out projects" }
                }
            }
        }

        section { id: "about", class: "section",
            h2 { {ui::t(lang, "about.title")} }
            LangBlock { lang: Lang::Fr,
                p {
                    "Installé au bord de l'eau depuis 2009, l'atelier conçoit et fabrique "
                    "des objets simples, réparables et faits pour durer."
                }
            }
            LangBlock { lang: Lang::En,
                p {
                    "Based by the water since 2009, the workshop designs and builds "
                    "simple, repairable objects made to last."
                }
            }
        }

        section { id: "contact", class: "section",
            h2 { {ui::t(lang, "contact.title")} }
            LangBlock { lang: Lang::Fr,
                p { "Décrivez votre projet, nous répondons sous deux jours ouvrés." }
            }
            LangBlock { lang: Lang::En,
                p { "Tell us about your project, we reply within two working days." }
            }
            h3 { {ui::t(lang, "form.title")} }
            ContactForm {}
        }
    }
}
