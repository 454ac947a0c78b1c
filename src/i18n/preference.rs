// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persisted display-language preference.

use super::catalog::Lang;
use crate::storage::KeyValueStore;
use anyhow::{Context, Result};

/// Storage key holding the raw language code.
pub const LANGUAGE_KEY: &str = "@insectaid_language";

/// Stored language, or [`Lang::En`] when nothing usable is stored or the
/// store cannot be read.
pub fn load_preference(store: &dyn KeyValueStore) -> Lang {
    match try_load_preference(store) {
        Ok(Some(lang)) => lang,
        Ok(None) => Lang::default(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to load language preference");
            Lang::default()
        }
    }
}

/// Stored language, `Ok(None)` when absent or unrecognised.
pub fn try_load_preference(store: &dyn KeyValueStore) -> Result<Option<Lang>> {
    let saved = store
        .get(LANGUAGE_KEY)
        .with_context(|| format!("reading {}", LANGUAGE_KEY))?;
    Ok(saved.as_deref().and_then(|code| {
        let lang = Lang::from_code(code);
        if lang.is_none() {
            tracing::debug!(code, "ignoring unrecognised stored language");
        }
        lang
    }))
}

/// Persist `lang`. Failures are logged and otherwise ignored.
pub fn save_preference(store: &dyn KeyValueStore, lang: Lang) {
    if let Err(err) = try_save_preference(store, lang) {
        tracing::warn!(lang = %lang, error = %err, "failed to save language preference");
    }
}

pub fn try_save_preference(store: &dyn KeyValueStore, lang: Lang) -> Result<()> {
    store
        .set(LANGUAGE_KEY, lang.code())
        .with_context(|| format!("writing {}", LANGUAGE_KEY))
}
