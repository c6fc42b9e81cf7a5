use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::core::format::format_local_timestamp;
use crate::i18n::Translator;
use crate::tracker::{choice_class, Journal};

use super::{ResponseType, SensoryDraft, SensoryEntry, SensoryType};

#[component]
pub fn SensoryTracker(translator: Translator, journal: Signal<Journal<SensoryDraft>>) -> Element {
    let mut journal = journal;

    let snapshot = journal();
    let SensoryDraft {
        sensory_type,
        response_type,
        environment,
    } = snapshot.draft().clone();
    let can_save = snapshot.can_save();
    let entries: Vec<SensoryEntry> = snapshot.entries().cloned().collect();
    let total = entries.len();
    let environment_label = translator.translate("Environment");

    let save = move |_: MouseEvent| match journal.write().save() {
        Ok(entry) => info!(
            sensory_type = entry.sensory_type.label(),
            response_type = entry.response_type.label(),
            "sensory entry saved"
        ),
        Err(err) => debug!("sensory save ignored: {err}"),
    };

    rsx! {
        article { class: "tracker tracker--sensory",
            h2 { class: "tracker__title", {translator.translate("Sensory Input Tracker")} }

            div { class: "tracker__group",
                p { class: "tracker__caption", {translator.translate("Sensory Input Tracker")} }
                div { class: "tracker__choices tracker__choices--five",
                    for kind in SensoryType::ALL {
                        button {
                            key: "{kind.label()}",
                            r#type: "button",
                            class: choice_class("accent--teal", sensory_type == Some(kind)),
                            aria_pressed: sensory_type == Some(kind),
                            onclick: move |_| { journal.write().draft_mut().sensory_type = Some(kind); },
                            span { class: "choice__icon", "{kind.icon()}" }
                            span { class: "choice__label", {translator.translate(kind.label())} }
                        }
                    }
                }
            }

            div { class: "tracker__group",
                p { class: "tracker__label", {translator.translate("Response Type")} }
                div { class: "tracker__pills",
                    for response in ResponseType::ALL {
                        button {
                            key: "{response.label()}",
                            r#type: "button",
                            class: pill_class(response, response_type == Some(response)),
                            aria_pressed: response_type == Some(response),
                            onclick: move |_| { journal.write().draft_mut().response_type = Some(response); },
                            {translator.translate(response.label())}
                        }
                    }
                }
            }

            div { class: "tracker__field",
                label { class: "tracker__label", r#for: "sensory-environment", "{environment_label}" }
                input {
                    id: "sensory-environment",
                    class: "tracker__input",
                    r#type: "text",
                    placeholder: translator.translate("e.g., Classroom, Playground, Cafeteria"),
                    value: "{environment}",
                    oninput: move |evt: FormEvent| { journal.write().draft_mut().environment = evt.value(); },
                }
            }

            button {
                r#type: "button",
                class: "button button--primary tracker__save",
                disabled: !can_save,
                onclick: save,
                {translator.translate("Save Entry")}
            }

            if total > 0 {
                div { class: "tracker__recent",
                    h3 { {translator.translate("Recent entries")} }
                    ul { class: "tracker__entries",
                        for (index, entry) in entries.into_iter().enumerate() {
                            li { key: "{total - index}", class: "entry",
                                div { class: "entry__row entry__row--spread",
                                    span { class: "entry__title",
                                        span { class: "entry__icon", "{entry.sensory_type.icon()}" }
                                        {translator.translate(entry.sensory_type.label())}
                                    }
                                    span { class: pill_class(entry.response_type, true),
                                        {translator.translate(entry.response_type.label())}
                                    }
                                }
                                if !entry.environment.is_empty() {
                                    div { class: "entry__detail",
                                        span { class: "entry__detail-label", "{environment_label}:" }
                                        " {entry.environment}"
                                    }
                                }
                                div { class: "entry__time entry__time--end",
                                    "{format_local_timestamp(entry.timestamp)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Response pills only take their accent colour once chosen.
fn pill_class(response: ResponseType, is_selected: bool) -> String {
    if is_selected {
        format!("pill {} pill--selected", response.accent_class())
    } else {
        "pill".to_string()
    }
}
