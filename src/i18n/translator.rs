use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use thiserror::Error;

use super::keys;

const BUILTIN_DICTIONARY: &str = include_str!("dictionary.toml");

/// Namespace used when a key carries no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "common";

/// locale -> namespace -> key -> text
type Dictionary = HashMap<String, HashMap<String, HashMap<String, String>>>;

/// Errors that can occur when loading a dictionary.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to read dictionary '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dictionary: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

/// Localization lookup with a runtime-switchable locale.
///
/// Lookups never fail: a missing translation falls back to the key.
pub struct Translator {
    dictionary: Dictionary,
    locale: RwLock<String>,
}

impl Translator {
    /// Translator over the built-in dictionary.
    pub fn new(locale: &str) -> Result<Self, I18nError> {
        let dictionary = parse_dictionary(BUILTIN_DICTIONARY)?;
        Ok(Self {
            dictionary,
            locale: RwLock::new(locale.to_string()),
        })
    }

    /// Built-in dictionary with the entries of `path` merged over it.
    pub fn with_overrides(locale: &str, path: &Path) -> Result<Self, I18nError> {
        let mut translator = Self::new(locale)?;
        let content = fs::read_to_string(path).map_err(|source| I18nError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        translator.merge(parse_dictionary(&content)?);
        Ok(translator)
    }

    fn merge(&mut self, other: Dictionary) {
        for (locale, namespaces) in other {
            let target = self.dictionary.entry(locale).or_default();
            for (namespace, entries) in namespaces {
                target.entry(namespace).or_default().extend(entries);
            }
        }
    }

    pub fn locale(&self) -> String {
        self.locale.read().clone()
    }

    pub fn set_locale(&self, locale: &str) {
        *self.locale.write() = locale.to_string();
    }

    /// Translate `"namespace:key"`, or a bare key from the default namespace.
    pub fn t(&self, key: &str) -> String {
        let (namespace, name) = key.split_once(':').unwrap_or((DEFAULT_NAMESPACE, key));
        self.lookup(namespace, name).unwrap_or_else(|| {
            tracing::warn!(key = %key, locale = %self.locale(), "No translation found");
            key.to_string()
        })
    }

    /// Translate `key` from an explicit namespace.
    pub fn t_ns(&self, namespace: &str, key: &str) -> String {
        self.lookup(namespace, key).unwrap_or_else(|| {
            tracing::warn!(namespace = %namespace, key = %key, locale = %self.locale(), "No translation found");
            key.to_string()
        })
    }

    /// Translate `key` and substitute `{{name}}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut text = self.t(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{{{}}}}}", name), value);
        }
        text
    }

    /// "`<entity>` has been `<action>`" in the current locale.
    pub fn success_message(&self, entity_label: &str, action_label: &str) -> String {
        self.format(
            keys::BACK_END_SUCCESS_OPERATION,
            &[
                ("cardType", self.t(entity_label)),
                ("actionType", self.t(action_label)),
            ],
        )
    }

    fn lookup(&self, namespace: &str, key: &str) -> Option<String> {
        let locale = self.locale.read();
        self.dictionary
            .get(locale.as_str())
            .and_then(|namespaces| namespaces.get(namespace))
            .and_then(|entries| entries.get(key))
            .cloned()
    }
}

fn parse_dictionary(content: &str) -> Result<Dictionary, I18nError> {
    toml::from_str(content).map_err(|source| I18nError::Parse { source })
}
