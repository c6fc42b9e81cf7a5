#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

use dioxus::logger::tracing::info;
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::i18n::Translator;
use ui::Shell;

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    // Phone-ish portrait window; the layout is built for narrow screens.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("SpecEduTracker – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(480.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let translator = use_hook(|| {
        let translator = Translator::nb_no();
        info!(locale = %translator.locale(), "desktop shell starting");
        translator
    });

    rsx! {
        Shell { translator }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load straight from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
