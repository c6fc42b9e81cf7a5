use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{DOMAIN, FALLBACK_LOCALE, PHRASES};
use crate::tracker::emotion::Emotion;
use crate::tracker::sensory::{ResponseType, SensoryType};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "specedu-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Simple parser: message ID → value for single-line Fluent messages.
/// Any line that starts (after optional whitespace) with `<identifier> =`
/// counts as a definition. Comments, terms (-prefix), blank lines ignored.
fn parse_ftl_messages(content: &str) -> BTreeMap<String, String> {
    let mut messages = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((maybe_id, value)) = line.split_once('=') {
            let id = maybe_id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                messages.insert(id.to_string(), value.trim().to_string());
            }
        }
    }
    messages
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Walk every `.rs` file under `src_root` (skipping `src/tests`) and hand
/// the non-test part of its content to `visit`. Test modules sit at the
/// bottom of each file, so everything after the first `#[cfg(test)]` is cut.
fn for_each_source(src_root: &Path, mut visit: impl FnMut(&str)) {
    let mut stack = vec![src_root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("tests") {
                continue;
            }
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let shipped = content.split("#[cfg(test)]").next().unwrap_or_default();
        visit(shipped);
    }
}

/// Literal phrases passed to `.translate("...")`.
///
/// NOTE: keys built at runtime (enum labels) are not seen here; those are
/// checked separately below.
fn extract_translate_phrases(content: &str, found: &mut HashSet<String>) {
    let needle = ".translate(\"";
    let mut rest = content;
    while let Some(pos) = rest.find(needle) {
        let after = &rest[pos + needle.len()..];
        match after.find('"') {
            Some(end) => {
                found.insert(after[..end].to_string());
                rest = &after[end..];
            }
            None => break,
        }
    }
}

/// Message IDs passed to `t!(translator, "...")`.
fn extract_macro_ids(content: &str, found: &mut HashSet<String>) {
    let bytes = content.as_bytes();
    let needle = "t!(";
    let mut offset = 0;
    while let Some(pos) = content[offset..].find(needle) {
        let start = offset + pos;
        offset = start + needle.len();
        // Skip `assert!(`, `print!(` and friends.
        if start > 0 && (bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'_') {
            continue;
        }
        let call = &content[offset..];
        let call = &call[..call.find(')').unwrap_or(call.len())];
        if let Some((_, quoted)) = call.split_once('"') {
            let id = quoted.split('"').next().unwrap_or_default();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                found.insert(id.to_string());
            }
        }
    }
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs = Vec::new();
    if let Ok(read_dir) = fs::read_dir(i18n_root) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    if name.contains('-') {
                        dirs.push(name.to_string());
                    }
                }
            }
        }
    }
    dirs.sort();
    dirs
}

fn read_fallback(crate_root: &Path) -> BTreeMap<String, String> {
    let fallback_file = crate_root
        .join(I18N_DIR)
        .join(FALLBACK_LOCALE)
        .join(FTL_FILENAME);
    let content = fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let messages = parse_ftl_messages(&content);
    assert!(
        !messages.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );
    messages
}

/// `fl!` resolves files from `i18n.toml`; without an explicit domain it
/// would look for the underscored lib name and fail to compile.
#[test]
fn fl_macro_domain_matches_ftl_files() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = fs::read_to_string(crate_root.join("i18n.toml")).expect("read i18n.toml");

    let domain = config
        .lines()
        .filter_map(|line| line.trim().strip_prefix("domain"))
        .filter_map(|rest| rest.trim_start().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"').to_string())
        .next();

    assert_eq!(domain.as_deref(), Some(DOMAIN), "i18n.toml [fluent] domain");
    assert_eq!(FTL_FILENAME, format!("{DOMAIN}.ftl"));
    assert!(crate_root
        .join(I18N_DIR)
        .join(FALLBACK_LOCALE)
        .join(FTL_FILENAME)
        .exists());
}

#[test]
fn phrase_catalogue_matches_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = read_fallback(&crate_root);

    let mut problems = Vec::new();
    let mut seen_phrases = HashSet::new();
    let mut seen_ids = HashSet::new();
    for (phrase, id) in PHRASES {
        if !seen_phrases.insert(*phrase) {
            problems.push(format!("duplicate phrase {phrase:?}"));
        }
        if !seen_ids.insert(*id) {
            problems.push(format!("duplicate id {id}"));
        }
        match fallback.get(*id) {
            None => problems.push(format!("{id} missing in {FALLBACK_LOCALE}")),
            Some(value) if value != phrase => {
                problems.push(format!("{id} = {value:?}, but catalogue key is {phrase:?}"))
            }
            Some(_) => {}
        }
    }

    assert!(problems.is_empty(), "Phrase catalogue problems:\n{}", problems.join("\n"));
}

#[test]
fn translated_phrases_in_sources_are_catalogued() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let catalogue: HashSet<&str> = PHRASES.iter().map(|(phrase, _)| *phrase).collect();

    let mut referenced = HashSet::new();
    for_each_source(&src_root, |content| {
        extract_translate_phrases(content, &mut referenced)
    });
    assert!(!referenced.is_empty(), "no translate(\"…\") calls found under src/");

    let runtime_keys = Emotion::ALL
        .iter()
        .map(|e| e.label())
        .chain(SensoryType::ALL.iter().map(|s| s.label()))
        .chain(ResponseType::ALL.iter().map(|r| r.label()));
    referenced.extend(runtime_keys.map(str::to_string));

    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|phrase| !catalogue.contains(phrase.as_str()))
        .cloned()
        .collect();
    missing.sort();

    assert!(
        missing.is_empty(),
        "Phrases shown untranslated ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);
    let fallback_keys: BTreeSet<String> = read_fallback(&crate_root).into_keys().collect();

    // 1. Every t!() ID used in shipped code exists in the fallback.
    let mut referenced_ids = HashSet::new();
    for_each_source(&crate_root.join("src"), |content| {
        extract_macro_ids(content, &mut referenced_ids)
    });
    let mut missing_in_fallback: Vec<_> = referenced_ids
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing_in_fallback.sort();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing_in_fallback.len(),
        missing_in_fallback.join("\n")
    );

    // 2. Every locale folder defines every fallback key.
    let mut per_locale_missing: HashMap<String, Vec<String>> = HashMap::new();
    for locale in collect_locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        assert!(
            path.exists(),
            "Locale folder {:?} missing expected file {:?}",
            locale,
            path
        );
        let content = fs::read_to_string(&path).unwrap_or_default();
        let keys = parse_ftl_messages(&content);
        let missing: Vec<_> = fallback_keys
            .iter()
            .filter(|k| !keys.contains_key(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (loc, miss) in per_locale_missing.iter() {
            report.push_str(&format!("  {loc} ({} missing)\n", miss.len()));
            for k in miss {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }
}

#[test]
fn macro_id_scanner_ignores_assertions() {
    let mut found = HashSet::new();
    extract_macro_ids(
        "assert!(ok, \"page\"); let s = t!(tr, \"nav-chat\"); crate::t!(tr, \"app-title\")",
        &mut found,
    );
    let mut found: Vec<_> = found.into_iter().collect();
    found.sort();
    assert_eq!(found, ["app-title", "nav-chat"]);
}
