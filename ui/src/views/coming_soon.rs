use dioxus::prelude::*;

use crate::i18n::Translator;
use crate::shell::Tab;
use crate::t;

/// Destinations that only show a "coming soon" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Stats,
    Chat,
    Settings,
}

impl Placeholder {
    pub fn tab(self) -> Tab {
        match self {
            Placeholder::Stats => Tab::Stats,
            Placeholder::Chat => Tab::Chat,
            Placeholder::Settings => Tab::Settings,
        }
    }

    pub fn message(self, translator: &Translator) -> String {
        match self {
            Placeholder::Stats => t!(translator, "coming-soon-stats"),
            Placeholder::Chat => t!(translator, "coming-soon-chat"),
            Placeholder::Settings => t!(translator, "coming-soon-settings"),
        }
    }
}

/// Placeholder page for destinations that aren't built yet.
#[component]
pub fn ComingSoon(translator: Translator, page: Placeholder) -> Element {
    let message = page.message(&translator);

    rsx! {
        section { class: "page page-coming-soon",
            span { class: "page-coming-soon__icon", aria_hidden: "true", "{page.tab().icon()}" }
            p { class: "page-coming-soon__message", "{message}" }
        }
    }
}
