// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dotted-path lookup and `{{name}}` interpolation.
//!
//! Lookups never fail: a missing path or a value of the wrong shape comes
//! back as the path itself (strings) or an empty list (arrays), so a gap in
//! a translation table shows up on screen instead of taking the screen down.

use super::catalog::{table_for, Lang, TranslationNode};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Placeholder values for [`resolve_string`], keyed by placeholder name.
///
/// ```
/// use insectaid::i18n::Vars;
/// let vars = Vars::new().with("count", 8).with("name", "Beetles");
/// assert_eq!(vars.get("count"), Some("8"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vars(BTreeMap<String, String>);

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Vars::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Vars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Vars::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

/// Walk `path` one `.`-separated segment at a time from `root`.
pub fn lookup<'a>(root: &'a TranslationNode, path: &str) -> Option<&'a TranslationNode> {
    path.split('.')
        .try_fold(root, |node, segment| node.child(segment))
}

/// Resolve `path` to a string in `lang`'s table, substituting `vars`.
///
/// # Examples
///
/// ```
/// use insectaid::i18n::{resolve_string, Lang, Vars};
/// assert_eq!(resolve_string(Lang::En, "home.takePhoto", None), "Take Photo");
/// assert_eq!(resolve_string(Lang::Tr, "home.takePhoto", None), "Fotoğraf Çek");
/// assert_eq!(resolve_string(Lang::En, "home.nope", None), "home.nope");
/// let vars = Vars::new().with("count", 8);
/// assert_eq!(
///     resolve_string(Lang::En, "encyclopedia.subtitle", Some(&vars)),
///     "8 insect orders to explore"
/// );
/// ```
pub fn resolve_string(lang: Lang, path: &str, vars: Option<&Vars>) -> String {
    string_in(table_for(lang), path, vars)
}

/// Resolve `path` to a list of strings in `lang`'s table.
///
/// Anything other than a list at the end of the walk yields an empty list.
pub fn resolve_array(lang: Lang, path: &str) -> Vec<String> {
    array_in(table_for(lang), path)
}

/// [`resolve_string`] against an arbitrary table.
pub fn string_in(root: &TranslationNode, path: &str, vars: Option<&Vars>) -> String {
    match lookup(root, path) {
        Some(TranslationNode::Text(text)) => match vars {
            Some(vars) => interpolate(text, vars),
            None => text.clone(),
        },
        _ => {
            tracing::debug!(path, "translation missing, echoing path");
            path.to_string()
        }
    }
}

/// [`resolve_array`] against an arbitrary table.
pub fn array_in(root: &TranslationNode, path: &str) -> Vec<String> {
    match lookup(root, path) {
        Some(TranslationNode::List(items)) => items.clone(),
        _ => Vec::new(),
    }
}

fn placeholder_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\{\{([^{}]*)\}\}").ok())
        .as_ref()
}

/// Replace every `{{name}}` in `template` whose name appears in `vars`.
///
/// Single pass: substituted values are not rescanned, and placeholders
/// without a value are left as written.
pub fn interpolate(template: &str, vars: &Vars) -> String {
    let Some(pattern) = placeholder_pattern() else {
        return template.to_string();
    };
    if vars.is_empty() {
        return template.to_string();
    }
    pattern
        .replace_all(template, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
