// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property-based invariants for the translation resolver.
//!
//! 1. A path with a segment that no table contains always echoes verbatim
//! 2. Array lookup never fails and returns nothing for unknown paths
//! 3. Interpolation with no placeholders is identity
//! 4. Interpolation does not rescan substituted values
//! 5. Placeholders without a value are left intact
//! 6. Every occurrence of a supplied placeholder is replaced

use insectaid::i18n::{interpolate, resolve_array, resolve_string, Lang, Vars};
use proptest::prelude::*;

fn any_lang() -> impl Strategy<Value = Lang> {
    prop_oneof![Just(Lang::En), Just(Lang::Tr)]
}

proptest! {
    #[test]
    fn unknown_paths_echo(lang in any_lang(), prefix in "[a-z.]{0,12}", tail in "[a-z]{1,8}") {
        let path = format!("{}zz_{}", prefix, tail);
        prop_assert_eq!(resolve_string(lang, &path, None), path);
    }

    #[test]
    fn unknown_array_paths_are_empty(lang in any_lang(), tail in "[a-z]{1,8}") {
        let path = format!("home.zz_{}", tail);
        prop_assert!(resolve_array(lang, &path).is_empty());
    }

    #[test]
    fn arbitrary_paths_never_panic(lang in any_lang(), path in "\\PC{0,40}") {
        let _ = resolve_string(lang, &path, Some(&Vars::new().with("x", 1)));
        let _ = resolve_array(lang, &path);
    }

    #[test]
    fn plain_text_is_unchanged(text in "[^{}]{0,40}", value in "[a-z0-9]{0,6}") {
        let vars = Vars::new().with("x", value);
        prop_assert_eq!(interpolate(&text, &vars), text);
    }

    #[test]
    fn substituted_values_are_not_rescanned(value in "[a-z]{0,6}") {
        let vars = Vars::new().with("a", "{{b}}").with("b", value.clone());
        prop_assert_eq!(interpolate("{{a}}|{{b}}", &vars), format!("{{{{b}}}}|{}", value));
    }

    #[test]
    fn missing_placeholders_survive(name in "[a-z]{1,8}") {
        let template = format!("<{{{{{}}}}}>", name);
        let vars = Vars::new().with(format!("{}_other", name), 1);
        prop_assert_eq!(interpolate(&template, &vars), template);
    }

    #[test]
    fn every_occurrence_is_replaced(n in 1usize..6, value in 0u32..1000) {
        let template = "{{x}} ".repeat(n);
        let vars = Vars::new().with("x", value);
        prop_assert_eq!(interpolate(&template, &vars), format!("{} ", value).repeat(n));
    }
}
