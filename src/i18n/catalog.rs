// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation tables for InsectAID.
//!
//! Each supported language ships one nested JSON table under `locales/`,
//! embedded at compile time and decoded once on first use. A table node is
//! either a string, a list of strings, or another table.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add the `code()` / `from_code()` arms
//! 3. Drop a `locales/xx.json` next to `en.json` and add it to `source_for()`
//!
//! ## Adding a new key
//!
//! Add it to every `locales/*.json` file. The `every_english_path_exists_in_turkish`
//! test fails until both tables carry it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

const EN_SOURCE: &str = include_str!("../../locales/en.json");
const TR_SOURCE: &str = include_str!("../../locales/tr.json");

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Tr,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Tr => "tr",
        }
    }

    /// Parse a stored or user-supplied code.
    ///
    /// Case-sensitive: only the exact lowercase codes are recognised, so a
    /// stored `"EN"` decodes as unknown.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "tr" => Some(Lang::Tr),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Tr]
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Tr => "Türkçe",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One node of a translation table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Text(String),
    List(Vec<String>),
    Table(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    /// Child node under `key`, if this node is a table that has one.
    pub fn child(&self, key: &str) -> Option<&TranslationNode> {
        match self {
            TranslationNode::Table(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Every dotted path that ends in a string or list, sorted.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, String::new(), &mut paths);
        paths
    }
}

fn collect_leaf_paths(node: &TranslationNode, prefix: String, out: &mut Vec<String>) {
    match node {
        TranslationNode::Table(entries) => {
            for (key, child) in entries {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaf_paths(child, path, out);
            }
        }
        _ => out.push(prefix),
    }
}

/// Root table for `lang`.
///
/// The embedded sources are decoded once per process. A source that fails to
/// decode yields an empty table, so every lookup degrades to the path echo.
pub fn table_for(lang: Lang) -> &'static TranslationNode {
    static EN: OnceLock<TranslationNode> = OnceLock::new();
    static TR: OnceLock<TranslationNode> = OnceLock::new();

    let cell = match lang {
        Lang::En => &EN,
        Lang::Tr => &TR,
    };
    cell.get_or_init(|| decode_table(lang, source_for(lang)))
}

fn source_for(lang: Lang) -> &'static str {
    match lang {
        Lang::En => EN_SOURCE,
        Lang::Tr => TR_SOURCE,
    }
}

fn decode_table(lang: Lang, source: &str) -> TranslationNode {
    match serde_json::from_str::<TranslationNode>(source) {
        Ok(node @ TranslationNode::Table(_)) => node,
        Ok(_) => {
            tracing::error!(lang = %lang, "translation source is not a table");
            TranslationNode::Table(BTreeMap::new())
        }
        Err(err) => {
            tracing::error!(lang = %lang, error = %err, "failed to decode translation source");
            TranslationNode::Table(BTreeMap::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_decode() {
        for lang in Lang::all() {
            let table = table_for(*lang);
            assert!(
                !table.leaf_paths().is_empty(),
                "{:?} table should not be empty",
                lang
            );
        }
    }

    #[test]
    fn every_english_path_exists_in_turkish() {
        let en = table_for(Lang::En).leaf_paths();
        let tr = table_for(Lang::Tr).leaf_paths();
        assert_eq!(en, tr, "en and tr tables must expose the same key paths");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn from_code_is_case_sensitive() {
        assert_eq!(Lang::from_code("TR"), None);
        assert_eq!(Lang::from_code(" en"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn untagged_nodes_decode_by_shape() {
        let node: TranslationNode =
            serde_json::from_str(r#"{"a": "x", "b": ["y", "z"], "c": {"d": "w"}}"#).unwrap();
        assert_eq!(node.child("a"), Some(&TranslationNode::Text("x".into())));
        assert!(matches!(node.child("b"), Some(TranslationNode::List(items)) if items.len() == 2));
        assert!(matches!(node.child("c"), Some(TranslationNode::Table(_))));
        assert_eq!(
            node.leaf_paths(),
            vec!["a".to_string(), "b".to_string(), "c.d".to_string()]
        );
    }

    #[test]
    fn non_table_source_decodes_to_empty_table() {
        let node = decode_table(Lang::En, r#"["not", "a", "table"]"#);
        assert_eq!(node, TranslationNode::Table(BTreeMap::new()));
        let node = decode_table(Lang::En, "{ broken");
        assert_eq!(node, TranslationNode::Table(BTreeMap::new()));
    }
}
