// SPDX-License-Identifier: PMPL-1.0-or-later

//! Simulated identification.
//!
//! There is no classifier: every photo yields [`insects::sample_result`].
//! What this module does own is turning that result into a fresh
//! [`HistoryRecord`] with a new id and timestamp and appending it to the log.

use crate::history::HistoryStore;
use crate::insects;
use crate::storage::KeyValueStore;
use crate::types::{HistoryRecord, Identification};
use anyhow::{anyhow, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Source of unique record ids.
pub trait IdGenerator {
    fn next_id(&self) -> Result<String>;
}

/// Random version 4 UUIDs in the usual hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Result<String> {
        let mut bytes = [0u8; 16];
        getrandom::getrandom(&mut bytes).map_err(|err| anyhow!("gathering entropy: {}", err))?;
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        let hex = hex::encode(bytes);
        Ok(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }
}

/// Source of record timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Result of one identification plus the record made from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentificationOutcome {
    pub result: Identification,
    pub record: HistoryRecord,
}

/// Identify the photo at `image_uri` without touching history.
pub fn simulate_identification(
    image_uri: &str,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
) -> Result<IdentificationOutcome> {
    let result = insects::sample_result();
    let record = HistoryRecord {
        id: ids.next_id()?,
        name: result.name.clone(),
        scientific_name: result.scientific_name.clone(),
        confidence: result.confidence,
        image_uri: image_uri.to_string(),
        date: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
        category: result.category.clone(),
    };
    tracing::debug!(id = %record.id, image_uri, "simulated identification");
    Ok(IdentificationOutcome { result, record })
}

/// Identify the photo at `image_uri` and append the record to `history`.
pub fn identify_and_record<S: KeyValueStore>(
    image_uri: &str,
    history: &HistoryStore<S>,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
) -> Result<IdentificationOutcome> {
    let outcome = simulate_identification(image_uri, ids, clock)?;
    history.append(outcome.record.clone());
    Ok(outcome)
}
