use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::core::format::format_local_timestamp;
use crate::i18n::Translator;
use crate::tracker::{choice_class, Journal};

use super::{Emotion, EmotionDraft, EmotionEntry, INTENSITY_MAX, INTENSITY_MIN};

#[component]
pub fn EmotionTracker(translator: Translator, journal: Signal<Journal<EmotionDraft>>) -> Element {
    let mut journal = journal;

    let snapshot = journal();
    let draft = snapshot.draft();
    let selected = draft.selected();
    let intensity = draft.intensity();
    let notes = draft.notes().to_string();
    let can_save = snapshot.can_save();
    let entries: Vec<EmotionEntry> = snapshot.entries().cloned().collect();
    let total = entries.len();
    let intensity_label = translator.translate("Intensity:");

    #[cfg(debug_assertions)]
    debug!(?selected, intensity, entries = total, "EmotionTracker render");

    let save = move |_: MouseEvent| match journal.write().save() {
        Ok(entry) => info!(
            emotion = entry.emotion.label(),
            intensity = entry.intensity,
            "emotion entry saved"
        ),
        Err(err) => debug!("emotion save ignored: {err}"),
    };

    rsx! {
        article { class: "tracker tracker--emotion",
            h2 { class: "tracker__title", {translator.translate("How are you feeling?")} }

            div { class: "tracker__choices tracker__choices--five",
                for emotion in Emotion::ALL {
                    button {
                        key: "{emotion.label()}",
                        r#type: "button",
                        class: choice_class(emotion.accent_class(), selected == Some(emotion)),
                        aria_pressed: selected == Some(emotion),
                        onclick: move |_| journal.write().draft_mut().select_emotion(emotion),
                        span { class: "choice__icon", "{emotion.icon()}" }
                        span { class: "choice__label", {translator.translate(emotion.label())} }
                    }
                }
            }

            div { class: "tracker__field",
                label { class: "tracker__label", r#for: "emotion-intensity",
                    {translator.translate("Intensity (1-10)")}
                }
                div { class: "tracker__range",
                    span { "{INTENSITY_MIN}" }
                    input {
                        id: "emotion-intensity",
                        r#type: "range",
                        min: "{INTENSITY_MIN}",
                        max: "{INTENSITY_MAX}",
                        value: "{intensity}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(level) = evt.value().parse::<u8>() {
                                journal.write().draft_mut().set_intensity(level);
                            }
                        },
                    }
                    span { "{INTENSITY_MAX}" }
                }
            }

            div { class: "tracker__field",
                label { class: "tracker__label", r#for: "emotion-notes",
                    {translator.translate("Notes (optional)")}
                }
                textarea {
                    id: "emotion-notes",
                    class: "tracker__input",
                    rows: "4",
                    placeholder: translator.translate("What triggered this emotion?"),
                    value: "{notes}",
                    oninput: move |evt: FormEvent| journal.write().draft_mut().set_notes(evt.value()),
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
                                div { class: "entry__row",
                                    span { class: "entry__dot {entry.emotion.accent_class()}" }
                                    span { class: "entry__title", {translator.translate(entry.emotion.label())} }
                                    span { class: "entry__sep", "•" }
                                    span { "{intensity_label} {entry.intensity}" }
                                    span { class: "entry__time", "{format_local_timestamp(entry.timestamp)}" }
                                }
                                if let Some(notes) = entry.notes.as_ref() {
                                    p { class: "entry__notes", "{notes}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
