use crate::i18n::Translator;
use crate::shell::Tab;
use crate::t;
use dioxus::prelude::*;

// Tab bar stylesheet (linked, and inlined in release native builds)
const TAB_BAR_CSS: Asset = asset!("/assets/styling/tab_bar.css");
const TAB_BAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/tab_bar.css"
));

/// Fixed bottom navigation with one button per [`Tab::NAV`] destination.
///
/// The bar is stateless: it highlights `active` and reports clicks through
/// `on_select`; the shell owns the selection.
#[component]
pub fn TabBar(translator: Translator, active: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: TAB_BAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{TAB_BAR_CSS_INLINE}" }
        }

        nav { class: "tab-bar", aria_label: t!(translator, "nav-label"),
            div { class: "tab-bar__inner",
                for tab in Tab::NAV {
                    button {
                        key: "{tab.slug()}",
                        r#type: "button",
                        class: item_class(tab == active),
                        aria_current: current_marker(tab == active),
                        onclick: move |_| on_select.call(tab),
                        span { class: "tab-bar__icon", aria_hidden: "true", "{tab.icon()}" }
                        span { class: "tab-bar__label", {tab.label(&translator)} }
                    }
                }
            }
        }
    }
}

fn item_class(is_active: bool) -> &'static str {
    if is_active {
        "tab-bar__item tab-bar__item--active"
    } else {
        "tab-bar__item"
    }
}

fn current_marker(is_active: bool) -> &'static str {
    if is_active {
        "page"
    } else {
        "false"
    }
}
