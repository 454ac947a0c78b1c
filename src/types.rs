// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for InsectAID

use chrono::{DateTime, Local};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Highest valid confidence percentage.
pub const MAX_CONFIDENCE: u8 = 100;

/// One completed identification, as stored in the history log.
///
/// The display fields are a snapshot taken when the identification ran; they
/// do not follow later edits to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    /// Whole-number percentage, 0..=100. Values above 100 are rejected on
    /// decode; construct records through [`HistoryRecord::confidence_checked`]
    /// when the value comes from outside the crate.
    #[serde(deserialize_with = "deserialize_confidence")]
    pub confidence: u8,
    /// Reference into external media storage. Never opened by this crate.
    pub image_uri: String,
    /// RFC 3339 timestamp.
    pub date: String,
    pub category: String,
}

fn deserialize_confidence<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = u8::deserialize(deserializer)?;
    HistoryRecord::confidence_checked(value).ok_or_else(|| {
        de::Error::custom(format!("confidence {} exceeds {}", value, MAX_CONFIDENCE))
    })
}

impl HistoryRecord {
    /// `value` if it is a valid percentage.
    pub fn confidence_checked(value: u8) -> Option<u8> {
        (value <= MAX_CONFIDENCE).then_some(value)
    }

    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::from_percent(self.confidence)
    }

    /// `Mar 4, 2025, 09:30 AM` in local time, or the stored string verbatim
    /// when it does not parse.
    pub fn display_date(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.date) {
            Ok(date) => date
                .with_timezone(&Local)
                .format("%b %-d, %Y, %I:%M %p")
                .to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

/// Coarse confidence grouping used when listing history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn from_percent(confidence: u8) -> Self {
        match confidence {
            90.. => ConfidenceBand::High,
            70..=89 => ConfidenceBand::Medium,
            _ => ConfidenceBand::Low,
        }
    }

    /// Translation key for the band label.
    pub fn key(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "history.confidence.high",
            ConfidenceBand::Medium => "history.confidence.medium",
            ConfidenceBand::Low => "history.confidence.low",
        }
    }
}

/// Full result shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub name: String,
    pub scientific_name: String,
    pub confidence: u8,
    pub category: String,
    pub habitat: String,
    pub diet: String,
    pub lifespan: String,
    pub size: String,
    pub characteristics: Vec<String>,
    pub fun_fact: String,
}

/// One insect order in the encyclopedia.
///
/// Name and description are looked up under `categories.<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsectCategory {
    pub id: &'static str,
    pub scientific_order: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub count: &'static str,
    pub examples: &'static [&'static str],
}

impl InsectCategory {
    pub fn name_key(&self) -> String {
        format!("categories.{}.name", self.id)
    }

    pub fn description_key(&self) -> String {
        format!("categories.{}.description", self.id)
    }
}

/// One species in the pest library.
///
/// Localised text lives under `insects.<i18n_key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryEntry {
    pub id: &'static str,
    pub scientific_name: &'static str,
    pub i18n_key: &'static str,
    pub family: &'static str,
    pub order: &'static str,
}

impl LibraryEntry {
    /// Key for one of the entry's text fields, e.g. `field_key("commonName")`.
    pub fn field_key(&self, field: &str) -> String {
        format!("insects.{}.{}", self.i18n_key, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> HistoryRecord {
        HistoryRecord {
            id: "abc".into(),
            name: "Monarch Butterfly".into(),
            scientific_name: "Danaus plexippus".into(),
            confidence: 94,
            image_uri: "file:///photo.jpg".into(),
            date: "2025-03-04T09:30:00.000Z".into(),
            category: "Butterflies & Moths".into(),
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(record()).unwrap();
        let obj = json.as_object().unwrap();
        for field in [
            "id",
            "name",
            "scientificName",
            "confidence",
            "imageUri",
            "date",
            "category",
        ] {
            assert!(obj.contains_key(field), "missing field {}", field);
        }
        assert_eq!(obj.len(), 7);
        assert_eq!(json["confidence"], 94);
    }

    #[test]
    fn confidence_above_one_hundred_is_rejected_on_decode() {
        let mut json = serde_json::to_value(record()).unwrap();
        json["confidence"] = serde_json::json!(100);
        assert_eq!(
            serde_json::from_value::<HistoryRecord>(json.clone()).unwrap().confidence,
            100
        );
        json["confidence"] = serde_json::json!(101);
        assert!(serde_json::from_value::<HistoryRecord>(json.clone()).is_err());
        json["confidence"] = serde_json::json!(255);
        assert!(serde_json::from_value::<HistoryRecord>(json).is_err());
    }

    #[test]
    fn confidence_checked_bounds() {
        assert_eq!(HistoryRecord::confidence_checked(0), Some(0));
        assert_eq!(HistoryRecord::confidence_checked(100), Some(100));
        assert_eq!(HistoryRecord::confidence_checked(101), None);
    }

    #[test]
    fn confidence_bands() {
        assert_eq!(ConfidenceBand::from_percent(100), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_percent(90), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_percent(89), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_percent(70), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from_percent(69), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_percent(0), ConfidenceBand::Low);
    }

    #[test]
    fn unparsable_date_displays_verbatim() {
        let mut rec = record();
        rec.date = "yesterday".into();
        assert_eq!(rec.display_date(), "yesterday");
    }

    #[test]
    fn parsable_date_is_reformatted() {
        let shown = record().display_date();
        assert_ne!(shown, record().date);
        assert!(shown.contains("2025"), "got {}", shown);
    }
}
