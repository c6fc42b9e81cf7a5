use dioxus::prelude::*;

use ui::i18n::Translator;
use ui::Shell;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let translator = use_hook(Translator::nb_no);

    rsx! {
        Shell { translator }
    }
}
