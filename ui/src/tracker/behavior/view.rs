use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::core::format::format_local_timestamp;
use crate::i18n::Translator;
use crate::tracker::Journal;

use super::{BehaviorDraft, BehaviorEntry};

#[component]
pub fn BehaviorTracker(translator: Translator, journal: Signal<Journal<BehaviorDraft>>) -> Element {
    let mut journal = journal;

    let snapshot = journal();
    let BehaviorDraft {
        description,
        duration,
        antecedent,
        consequence,
    } = snapshot.draft().clone();
    let can_save = snapshot.can_save();
    let entries: Vec<BehaviorEntry> = snapshot.entries().cloned().collect();
    let total = entries.len();

    let duration_label = translator.translate("Duration (minutes)");
    let antecedent_label = translator.translate("What happened before? (Antecedent)");
    let consequence_label = translator.translate("What happened after? (Consequence)");

    let save = move |_: MouseEvent| match journal.write().save() {
        Ok(entry) => info!(
            duration_minutes = entry.duration_minutes,
            "behavior entry saved"
        ),
        Err(err) => debug!("behavior save ignored: {err}"),
    };

    rsx! {
        article { class: "tracker tracker--behavior",
            h2 { class: "tracker__title", {translator.translate("Behavior Tracker")} }

            div { class: "tracker__field",
                label { class: "tracker__label", r#for: "behavior-description",
                    {translator.translate("Behavior Description")}
                }
                input {
                    id: "behavior-description",
                    class: "tracker__input",
                    r#type: "text",
                    placeholder: translator.translate("Describe the behavior"),
                    value: "{description}",
                    oninput: move |evt: FormEvent| { journal.write().draft_mut().description = evt.value(); },
                }
            }

            div { class: "tracker__field",
                label { class: "tracker__label", r#for: "behavior-duration", "{duration_label}" }
                div { class: "tracker__duration",
                    span { class: "tracker__duration-icon", aria_hidden: "true", "⏱️" }
                    input {
                        id: "behavior-duration",
                        class: "tracker__input tracker__input--narrow",
                        r#type: "number",
                        min: "1",
                        value: "{duration}",
                        oninput: move |evt: FormEvent| { journal.write().draft_mut().duration = evt.value(); },
                    }
                }
            }

            div { class: "tracker__field",
                label { class: "tracker__label", r#for: "behavior-antecedent", "{antecedent_label}" }
                textarea {
                    id: "behavior-antecedent",
                    class: "tracker__input",
                    rows: "3",
                    placeholder: translator.translate("What triggered this behavior?"),
                    value: "{antecedent}",
                    oninput: move |evt: FormEvent| { journal.write().draft_mut().antecedent = evt.value(); },
                }
            }

            div { class: "tracker__field",
                label { class: "tracker__label", r#for: "behavior-consequence", "{consequence_label}" }
                textarea {
                    id: "behavior-consequence",
                    class: "tracker__input",
                    rows: "3",
                    placeholder: translator.translate("How was the situation resolved?"),
                    value: "{consequence}",
                    oninput: move |evt: FormEvent| { journal.write().draft_mut().consequence = evt.value(); },
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
                                    span { class: "entry__title", "{entry.description}" }
                                    span { class: "entry__time", "{format_local_timestamp(entry.timestamp)}" }
                                }
                                div { class: "entry__detail",
                                    span { class: "entry__detail-label", "{duration_label}:" }
                                    " {entry.duration_minutes}"
                                }
                                if !entry.antecedent.is_empty() {
                                    div { class: "entry__detail",
                                        span { class: "entry__detail-label", "{antecedent_label}:" }
                                        p { class: "entry__notes", "{entry.antecedent}" }
                                    }
                                }
                                if !entry.consequence.is_empty() {
                                    div { class: "entry__detail",
                                        span { class: "entry__detail-label", "{consequence_label}:" }
                                        p { class: "entry__notes", "{entry.consequence}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
