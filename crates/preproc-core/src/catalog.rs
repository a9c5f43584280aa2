//! Preprocessing step catalog
//!
//! A fixed, versioned id → name table of the preprocessing step kinds the
//! monitoring server understands. The table is compiled in; there is no
//! dynamic registration. A subset of entries is flagged as "AI suggested":
//! those carry a description and are the kinds a model is steered towards.

use serde::Serialize;

/// Version of the compiled-in catalog table
pub const CATALOG_VERSION: u32 = 1;

/// Well-known step type identifiers
pub mod step_type {
    pub const CUSTOM_ON_FAIL: i64 = 0;
    pub const REGEX: i64 = 11;
    pub const TRIM: i64 = 12;
    pub const MULTIPLIER: i64 = 13;
    pub const RTRIM: i64 = 14;
    pub const LTRIM: i64 = 15;
    pub const XPATH: i64 = 16;
    pub const JSONPATH: i64 = 17;
    pub const IN_RANGE: i64 = 18;
    pub const MATCHES_REGEX: i64 = 19;
    pub const DISCARD_UNCHANGED_HEARTBEAT: i64 = 20;
    pub const DISCARD_UNCHANGED: i64 = 21;
    pub const JAVASCRIPT: i64 = 22;
    pub const PROMETHEUS_PATTERN: i64 = 23;
    pub const PROMETHEUS_TO_JSON: i64 = 24;
    pub const CSV_TO_JSON: i64 = 25;
    pub const REPLACE: i64 = 26;
    pub const CHECK_JSON_ERROR: i64 = 27;
    pub const CHECK_XML_ERROR: i64 = 28;
    pub const THROTTLE_TIMESTAMPS: i64 = 29;
    pub const SCRIPT: i64 = 30;
    pub const SNMP_WALK_VALUE: i64 = 31;
}

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip)]
    pub ai_suggested: bool,
}

impl CatalogEntry {
    const fn plain(id: i64, name: &'static str) -> Self {
        Self {
            id,
            name,
            description: None,
            ai_suggested: false,
        }
    }

    const fn suggested(id: i64, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description: Some(description),
            ai_suggested: true,
        }
    }
}

use step_type::*;

const STANDARD_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::plain(CUSTOM_ON_FAIL, "None"),
    CatalogEntry::suggested(
        REGEX,
        "Regular expression",
        "Extract value using regular expression pattern",
    ),
    CatalogEntry::suggested(TRIM, "Trim", "Remove whitespace from both ends"),
    CatalogEntry::suggested(
        MULTIPLIER,
        "Custom multiplier",
        "Multiply value by specified factor",
    ),
    CatalogEntry::plain(RTRIM, "Right trim"),
    CatalogEntry::plain(LTRIM, "Left trim"),
    CatalogEntry::plain(XPATH, "XML XPath"),
    CatalogEntry::suggested(
        JSONPATH,
        "JSONPath",
        "Extract value from JSON using JSONPath expression",
    ),
    CatalogEntry::plain(IN_RANGE, "In range"),
    CatalogEntry::plain(MATCHES_REGEX, "Matches regular expression"),
    CatalogEntry::suggested(
        DISCARD_UNCHANGED_HEARTBEAT,
        "Discard unchanged with heartbeat",
        "Discard value if unchanged for specified period",
    ),
    CatalogEntry::plain(DISCARD_UNCHANGED, "Discard unchanged"),
    CatalogEntry::suggested(JAVASCRIPT, "JavaScript", "Custom JavaScript transformation"),
    CatalogEntry::plain(PROMETHEUS_PATTERN, "Prometheus pattern"),
    CatalogEntry::plain(PROMETHEUS_TO_JSON, "Prometheus to JSON"),
    CatalogEntry::plain(CSV_TO_JSON, "CSV to JSON"),
    CatalogEntry::suggested(REPLACE, "Replace", "Replace substring with another value"),
    CatalogEntry::plain(CHECK_JSON_ERROR, "Check for error in JSON"),
    CatalogEntry::plain(CHECK_XML_ERROR, "Check for error in XML"),
    CatalogEntry::plain(THROTTLE_TIMESTAMPS, "Throttle timestamps"),
    CatalogEntry::plain(SCRIPT, "Script"),
    CatalogEntry::plain(SNMP_WALK_VALUE, "SNMP walk value"),
];

/// Static registry of preprocessing step kinds
#[derive(Debug, Clone, Copy)]
pub struct StepCatalog {
    entries: &'static [CatalogEntry],
}

impl StepCatalog {
    /// The compiled-in catalog
    pub const fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES,
        }
    }

    pub fn version(&self) -> u32 {
        CATALOG_VERSION
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: i64) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Display name for an id, if the id is known
    pub fn name_of(&self, id: i64) -> Option<&'static str> {
        self.get(id).map(|entry| entry.name)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Entries a model should prefer when suggesting steps
    pub fn ai_suggested(&self) -> impl Iterator<Item = &'static CatalogEntry> {
        self.entries.iter().filter(|entry| entry.ai_suggested)
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
