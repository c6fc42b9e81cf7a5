use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::i18n::Translator;
use ui::{Shell, Tab};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One translator for the whole session; views receive it as a prop.
    let translator = use_hook(Translator::nb_no);
    let initial_tab = use_hook(|| {
        let tab = location_fragment()
            .map(|slug| Tab::from_slug(&slug))
            .unwrap_or_default();
        info!(tab = tab.slug(), "web shell starting");
        tab
    });

    rsx! {
        Shell { translator, initial_tab }
    }
}

/// `#sensory` style deep link, without the leading `#`.
#[cfg(target_arch = "wasm32")]
fn location_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let slug = hash.trim_start_matches('#');
    (!slug.is_empty()).then(|| slug.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn location_fragment() -> Option<String> {
    None
}
