// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for InsectAID.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | tr   | Turkish  | Türkçe      |
//!
//! ## Design
//!
//! Translation keys are dotted paths into a nested table: `"home.takePhoto"`,
//! `"categories.beetles.name"`. A path that is missing, or that ends on a
//! table or list when a string was asked for, resolves to the path itself.
//! There is no cross-language fallback, so an untranslated key is visible
//! during development.
//!
//! The active language is owned by a [`Translator`] rather than held in a
//! global. It is restored from the key-value store when the translator is
//! created and written back on every [`Translator::set_lang`].

mod catalog;
mod preference;
mod resolver;

pub use catalog::{table_for, Lang, TranslationNode};
pub use preference::{
    load_preference, save_preference, try_load_preference, try_save_preference, LANGUAGE_KEY,
};
pub use resolver::{
    array_in, interpolate, lookup, resolve_array, resolve_string, string_in, Vars,
};

use crate::storage::KeyValueStore;

/// Active-language holder and lookup front end.
pub struct Translator<S> {
    lang: Lang,
    store: S,
}

impl<S: KeyValueStore> Translator<S> {
    /// Restore the saved language from `store`.
    pub fn load(store: S) -> Self {
        let lang = load_preference(&store);
        tracing::debug!(lang = %lang, "restored language preference");
        Self { lang, store }
    }

    /// Start in `lang` without consulting or writing the store.
    pub fn with_lang(store: S, lang: Lang) -> Self {
        Self { lang, store }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Switch language and persist the choice.
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
        save_preference(&self.store, lang);
    }

    pub fn t(&self, path: &str) -> String {
        resolve_string(self.lang, path, None)
    }

    pub fn t_with(&self, path: &str, vars: &Vars) -> String {
        resolve_string(self.lang, path, Some(vars))
    }

    pub fn t_array(&self, path: &str) -> Vec<String> {
        resolve_array(self.lang, path)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
