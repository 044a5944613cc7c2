use std::collections::{BTreeMap, HashMap};

use crate::error::{
    KEY_INVALID_BY_HASH, KEY_INVALID_BY_ID, KEY_INVALID_BY_TEXT, KEY_TYPE_INVALID,
    KEY_TYPE_MISSING, KEY_TYPE_UNSUPPORTED, ValidationFailure,
};

pub const DEFAULT_LOCALE: &str = "en";

/// Resolves a message key to localized text.
///
/// Resolution order: the exact locale, then its language part (`es-MX` -> `es`),
/// then `default_text`, then an empty string. `{name}` placeholders are filled
/// from `params`.
pub trait Localizer: Send + Sync {
    fn localize(
        &self,
        key: &str,
        locale: &str,
        default_text: Option<&str>,
        params: &BTreeMap<String, String>,
    ) -> String;
}

/// In-memory [`Localizer`] keyed by locale then message key.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    templates: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with English text for every memo failure.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for (key, template) in [
            (KEY_TYPE_MISSING, "Memo type is required when a memo is provided."),
            (KEY_TYPE_INVALID, "Invalid memo type: {memo_type}."),
            (KEY_TYPE_UNSUPPORTED, "Memo type {memo_type} is not supported."),
            (KEY_INVALID_BY_ID, "Memo {memo} is not a valid ID memo."),
            (
                KEY_INVALID_BY_TEXT,
                "Memo {memo} is too long for a text memo (28 bytes max).",
            ),
            (KEY_INVALID_BY_HASH, "Memo {memo} is not a valid 32-byte hash."),
        ] {
            catalog.insert(DEFAULT_LOCALE, key, template);
        }
        catalog
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.templates
            .entry(locale.into())
            .or_default()
            .insert(key.into(), template.into());
        self
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.templates
            .get(locale)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }
}

impl Localizer for MessageCatalog {
    fn localize(
        &self,
        key: &str,
        locale: &str,
        default_text: Option<&str>,
        params: &BTreeMap<String, String>,
    ) -> String {
        let template = self
            .lookup(locale, key)
            .or_else(|| language_of(locale).and_then(|lang| self.lookup(lang, key)))
            .or(default_text)
            .unwrap_or_default();
        substitute(template, params)
    }
}

fn language_of(locale: &str) -> Option<&str> {
    let (lang, _) = locale.split_once(['-', '_'])?;
    (!lang.is_empty()).then_some(lang)
}

/// Replaces `{name}` with `params[name]`; unknown placeholders stay as written.
fn substitute(template: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Localized text for a failure, falling back to the catalog's default locale.
pub fn localize_failure(
    localizer: &dyn Localizer,
    failure: &ValidationFailure,
    locale: &str,
) -> String {
    let text = localizer.localize(
        &failure.message_key,
        locale,
        None,
        &failure.message_params,
    );
    if !text.is_empty() || locale == DEFAULT_LOCALE {
        return text;
    }
    localizer.localize(
        &failure.message_key,
        DEFAULT_LOCALE,
        None,
        &failure.message_params,
    )
}
