// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in encyclopedia and library data.

use crate::types::{Identification, InsectCategory, LibraryEntry};

/// Insect orders shown in the encyclopedia, in display order.
pub const INSECT_CATEGORIES: &[InsectCategory] = &[
    InsectCategory {
        id: "beetles",
        scientific_order: "Coleoptera",
        icon: "bug",
        color: "#5C3D2E",
        count: "400,000+",
        examples: &["Ladybug", "Stag Beetle", "Firefly", "Weevil"],
    },
    InsectCategory {
        id: "butterflies",
        scientific_order: "Lepidoptera",
        icon: "flower",
        color: "#C9A227",
        count: "180,000+",
        examples: &["Monarch", "Swallowtail", "Luna Moth", "Painted Lady"],
    },
    InsectCategory {
        id: "ants",
        scientific_order: "Hymenoptera",
        icon: "apps",
        color: "#8B0000",
        count: "150,000+",
        examples: &["Honey Bee", "Fire Ant", "Paper Wasp", "Carpenter Ant"],
    },
    InsectCategory {
        id: "flies",
        scientific_order: "Diptera",
        icon: "radio-button-off",
        color: "#1E5631",
        count: "150,000+",
        examples: &["House Fly", "Mosquito", "Crane Fly", "Fruit Fly"],
    },
    InsectCategory {
        id: "dragonflies",
        scientific_order: "Odonata",
        icon: "airplane",
        color: "#2D7A4A",
        count: "6,000+",
        examples: &["Blue Dasher", "Green Darner", "Ebony Jewelwing"],
    },
    InsectCategory {
        id: "grasshoppers",
        scientific_order: "Orthoptera",
        icon: "leaf",
        color: "#6B8E23",
        count: "28,000+",
        examples: &["Field Cricket", "Katydid", "Locust", "Grasshopper"],
    },
    InsectCategory {
        id: "mantises",
        scientific_order: "Mantodea",
        icon: "hand-left",
        color: "#556B2F",
        count: "2,400+",
        examples: &["Chinese Mantis", "Carolina Mantis", "Orchid Mantis"],
    },
    InsectCategory {
        id: "true-bugs",
        scientific_order: "Hemiptera",
        icon: "shield",
        color: "#8B6F47",
        count: "80,000+",
        examples: &["Stink Bug", "Cicada", "Aphid", "Water Strider"],
    },
];

/// Stored-product pests in the library.
pub const LIBRARY_ENTRIES: &[LibraryEntry] = &[
    LibraryEntry {
        id: "tribolium_castaneum",
        scientific_name: "Tribolium castaneum",
        i18n_key: "tribolium_castaneum",
        family: "Tenebrionidae",
        order: "Coleoptera",
    },
    LibraryEntry {
        id: "tribolium_confusum",
        scientific_name: "Tribolium confusum",
        i18n_key: "tribolium_confusum",
        family: "Tenebrionidae",
        order: "Coleoptera",
    },
    LibraryEntry {
        id: "sitophilus_granarius",
        scientific_name: "Sitophilus granarius",
        i18n_key: "sitophilus_granarius",
        family: "Curculionidae",
        order: "Coleoptera",
    },
    LibraryEntry {
        id: "sitophilus_oryzae",
        scientific_name: "Sitophilus oryzae",
        i18n_key: "sitophilus_oryzae",
        family: "Curculionidae",
        order: "Coleoptera",
    },
];

/// Text fields every library entry carries under `insects.<key>`.
pub const LIBRARY_TEXT_FIELDS: &[&str] = &["commonName", "physicalDesc", "reproduction", "bioNotes"];

pub fn category(id: &str) -> Option<&'static InsectCategory> {
    INSECT_CATEGORIES.iter().find(|category| category.id == id)
}

pub fn library_entry(id: &str) -> Option<&'static LibraryEntry> {
    LIBRARY_ENTRIES.iter().find(|entry| entry.id == id)
}

/// The canned result every identification currently returns.
pub fn sample_result() -> Identification {
    Identification {
        name: "Monarch Butterfly".to_string(),
        scientific_name: "Danaus plexippus".to_string(),
        confidence: 94,
        category: "Butterflies & Moths".to_string(),
        habitat: "Open fields, meadows, gardens across North America".to_string(),
        diet: "Nectar from milkweed and various flowers".to_string(),
        lifespan: "2-6 weeks (summer), up to 8 months (migratory)".to_string(),
        size: "Wingspan: 8.9-10.2 cm (3.5-4 in)".to_string(),
        characteristics: vec![
            "Distinctive orange and black wing pattern".to_string(),
            "Known for long-distance migration up to 3,000 miles".to_string(),
            "Caterpillars feed exclusively on milkweed".to_string(),
            "Toxic to predators due to cardenolide compounds".to_string(),
        ],
        fun_fact: "Monarchs are the only butterflies known to make a two-way migration, \
                   traveling up to 3,000 miles from North America to central Mexico."
            .to_string(),
    }
}
