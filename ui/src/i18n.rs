//! Internationalization (i18n) support for `specedu-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading into a `FluentLanguageLoader`)
//! - Fluent (message formatting, pulled in through `i18n-embed`)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/specedu-ui.ftl   (fallback/reference)
//!   nb-NO/specedu-ui.ftl   (target locale)
//! ```
//!
//! There are two ways to look a string up, both through an explicit
//! [`Translator`] value that the platform crate builds once and hands down
//! as a prop (there is no global loader):
//! - `translator.translate("Save Entry")` keys on the canonical English
//!   phrase. Unknown phrases come back unchanged.
//! - `t!(translator, "nav-emotions")` keys on a Fluent message ID and is
//!   checked against the fallback FTL at compile time. Used for app chrome.
//!
//! The target locale is fixed to `nb-NO`; there is no runtime switching.
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Message lookup by Fluent ID through a [`Translator`].
/// Examples:
///     t!(translator, "nav-emotions")
///     t!(&translator, "app-title")
#[macro_export]
macro_rules! t {
    ($translator:expr, $key:literal) => {
        $crate::i18n::fl!($translator.loader(), $key)
    };
}

/// Fluent "domain" (matches the crate / the FTL filename in every locale).
pub(crate) const DOMAIN: &str = "specedu-ui";

/// The one locale the application renders in.
pub const TARGET_LOCALE: &str = "nb-NO";

/// Reference locale; also what unknown IDs resolve against.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Canonical English phrase → Fluent message ID.
///
/// The phrase is the key callers pass to [`Translator::translate`]; the ID
/// names the message in `i18n/<locale>/specedu-ui.ftl`.
pub const PHRASES: &[(&str, &str)] = &[
    // Headers
    ("How are you feeling?", "header-how-feeling"),
    ("Daily Mood Score", "header-daily-mood"),
    ("Weekly Progress", "header-weekly-progress"),
    ("Achievements", "header-achievements"),
    ("Sensory Input Tracker", "header-sensory-tracker"),
    ("Behavior Tracker", "header-behavior-tracker"),
    // Emotions
    ("Happy", "emotion-happy"),
    ("Calm", "emotion-calm"),
    ("Anxious", "emotion-anxious"),
    ("Frustrated", "emotion-frustrated"),
    ("Excited", "emotion-excited"),
    // Form fields
    ("Intensity (1-10)", "form-intensity-range"),
    ("Notes (optional)", "form-notes-optional"),
    ("What triggered this emotion?", "form-emotion-trigger"),
    ("Save Entry", "form-save-entry"),
    ("Recent entries", "form-recent-entries"),
    // Sensory input types
    ("Visual", "sensory-visual"),
    ("Auditory", "sensory-auditory"),
    ("Tactile", "sensory-tactile"),
    ("Movement", "sensory-movement"),
    ("Body Awareness", "sensory-body-awareness"),
    // Response types
    ("Response Type", "response-type"),
    ("Seeking", "response-seeking"),
    ("Avoiding", "response-avoiding"),
    ("Neutral", "response-neutral"),
    // Behavior tracking
    ("Behavior Description", "behavior-description"),
    ("Describe the behavior", "behavior-describe"),
    ("Duration (minutes)", "behavior-duration"),
    ("What happened before? (Antecedent)", "behavior-antecedent"),
    ("What happened after? (Consequence)", "behavior-consequence"),
    ("What triggered this behavior?", "behavior-trigger"),
    ("How was the situation resolved?", "behavior-resolution"),
    // Achievements
    ("Consistent Logger", "achievement-consistent-logger"),
    ("Emotion Master", "achievement-emotion-master"),
    // Environment
    ("Environment", "environment"),
    ("e.g., Classroom, Playground, Cafeteria", "environment-examples"),
    // Intensity labels
    ("Intensity:", "intensity-label"),
];

/// Read-only translation service handed to every view at construction.
///
/// Cloning is cheap (shared `Rc`); two handles compare equal only when they
/// point at the same loaded dictionary, which is what Dioxus prop diffing
/// needs.
#[derive(Clone)]
pub struct Translator {
    inner: Rc<Inner>,
}

struct Inner {
    loader: FluentLanguageLoader,
    dictionary: HashMap<&'static str, String>,
}

impl Translator {
    /// Translator for the application's target locale (`nb-NO`).
    pub fn nb_no() -> Self {
        Self::for_locale(TARGET_LOCALE)
    }

    /// Load the embedded bundles for `tag` (plus the fallback) and resolve
    /// the phrase dictionary once. Asset failures are logged and leave the
    /// English fallback in place.
    fn for_locale(tag: &str) -> Self {
        let fallback: LanguageIdentifier = FALLBACK_LOCALE
            .parse()
            .expect("valid fallback language identifier");
        let loader = FluentLanguageLoader::new(DOMAIN, fallback);

        let requested: Vec<LanguageIdentifier> = tag.parse().ok().into_iter().collect();
        match i18n_embed::select(&loader, &Localizations, &requested) {
            Ok(selected) => debug!(
                ?selected,
                available = ?available_languages(),
                "[i18n] localization bundles loaded"
            ),
            Err(err) => warn!("[i18n] failed selecting {tag} ({err}); continuing with fallback"),
        }

        let dictionary = PHRASES
            .iter()
            .map(|&(phrase, id)| (phrase, loader.get(id)))
            .collect();

        Self {
            inner: Rc::new(Inner { loader, dictionary }),
        }
    }

    /// Localized string for a canonical English phrase, or `key` itself
    /// when the phrase is not in the dictionary.
    pub fn translate(&self, key: &str) -> String {
        self.inner
            .dictionary
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Language the loader resolved to (used for the `lang` attribute).
    pub fn locale(&self) -> LanguageIdentifier {
        self.inner.loader.current_language()
    }

    /// Underlying Fluent loader, consumed by the `t!` macro.
    pub fn loader(&self) -> &FluentLanguageLoader {
        &self.inner.loader
    }
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale().to_string())
            .field("phrases", &self.inner.dictionary.len())
            .finish()
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
