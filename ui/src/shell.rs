//! Application shell: header, the active tab's view, bottom tab bar.

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::components::TabBar;
use crate::i18n::Translator;
use crate::t;
use crate::tracker::behavior::BehaviorDraft;
use crate::tracker::emotion::EmotionDraft;
use crate::tracker::sensory::SensoryDraft;
use crate::tracker::Journal;
use crate::views::{BehaviorTracker, ComingSoon, EmotionTracker, Placeholder, SensoryTracker};

// Shared theme (inlined too in release native builds, like the tab bar CSS)
const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Top-level destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Emotions,
    Behavior,
    Sensory,
    Stats,
    Chat,
    Settings,
}

impl Tab {
    /// Destinations shown in the bottom bar. `Settings` has no button.
    pub const NAV: [Tab; 5] = [Tab::Emotions, Tab::Behavior, Tab::Sensory, Tab::Stats, Tab::Chat];

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Emotions => "emotions",
            Tab::Behavior => "behavior",
            Tab::Sensory => "sensory",
            Tab::Stats => "stats",
            Tab::Chat => "chat",
            Tab::Settings => "settings",
        }
    }

    /// Parse a slug (e.g. a URL fragment). Anything unrecognized opens the
    /// emotions view.
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim().to_ascii_lowercase().as_str() {
            "behavior" => Tab::Behavior,
            "sensory" => Tab::Sensory,
            "stats" => Tab::Stats,
            "chat" => Tab::Chat,
            "settings" => Tab::Settings,
            _ => Tab::Emotions,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Emotions => "❤️",
            Tab::Behavior => "🔍",
            Tab::Sensory => "👁️",
            Tab::Stats => "📊",
            Tab::Chat => "💬",
            Tab::Settings => "⚙️",
        }
    }

    pub fn label(self, translator: &Translator) -> String {
        match self {
            Tab::Emotions => t!(translator, "nav-emotions"),
            Tab::Behavior => t!(translator, "nav-behavior"),
            Tab::Sensory => t!(translator, "nav-sensory"),
            Tab::Stats => t!(translator, "nav-stats"),
            Tab::Chat => t!(translator, "nav-chat"),
            Tab::Settings => t!(translator, "nav-settings"),
        }
    }
}

/// Which tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    active: Tab,
}

impl ShellState {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Always succeeds; re-selecting the active tab is a no-op.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
    }
}

/// Root component. The shell owns one journal per tracker and hands each
/// to its own view only, so a tracker's draft and entries survive switching
/// tabs for the rest of the session.
#[component]
pub fn Shell(translator: Translator, #[props(default)] initial_tab: Tab) -> Element {
    let mut shell = use_signal(|| ShellState::new(initial_tab));
    let emotions = use_signal(Journal::<EmotionDraft>::default);
    let behavior = use_signal(Journal::<BehaviorDraft>::default);
    let sensory = use_signal(Journal::<SensoryDraft>::default);

    let active = shell().active();

    #[cfg(debug_assertions)]
    debug!(tab = active.slug(), locale = %translator.locale(), "Shell render");

    let content = match active {
        Tab::Emotions => rsx! {
            EmotionTracker { translator: translator.clone(), journal: emotions }
        },
        Tab::Behavior => rsx! {
            BehaviorTracker { translator: translator.clone(), journal: behavior }
        },
        Tab::Sensory => rsx! {
            SensoryTracker { translator: translator.clone(), journal: sensory }
        },
        Tab::Stats => rsx! {
            ComingSoon { translator: translator.clone(), page: Placeholder::Stats }
        },
        Tab::Chat => rsx! {
            ComingSoon { translator: translator.clone(), page: Placeholder::Chat }
        },
        Tab::Settings => rsx! {
            ComingSoon { translator: translator.clone(), page: Placeholder::Settings }
        },
    };

    let on_select = move |tab: Tab| {
        shell.write().select_tab(tab);
        info!(tab = tab.slug(), "tab selected");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }

        div { class: "app", lang: "{translator.locale()}",
            header { class: "app__header",
                div { class: "app__header-inner",
                    h1 { class: "app__title", {t!(translator, "app-title")} }
                }
            }

            main { class: "app__main", {content} }

            TabBar { translator: translator.clone(), active: active, on_select: on_select }
        }
    }
}
