// SPDX-License-Identifier: PMPL-1.0-or-later

//! InsectAID: localization and identification-history core.
//!
//! The screens of the InsectAID field guide sit on two small pieces of logic
//! that live here:
//!
//! 1. **i18n**: dotted-path lookup into per-language translation tables with
//!    `{{name}}` interpolation and a persisted language preference.
//! 2. **history**: a newest-first log of identifications capped at 50
//!    records, stored as one JSON blob in a key-value store.
//!
//! Neither ever hands an error to the UI. Missing translations echo their
//! key, and storage problems degrade to empty reads or skipped writes.

pub mod config;
pub mod history;
pub mod i18n;
pub mod identify;
pub mod insects;
pub mod storage;
pub mod types;
