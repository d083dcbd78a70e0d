//! Core types for pcf-core — APQC Process Classification Framework.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the taxonomy [`Process`] record, its [`ProcessLevel`], and the
//! [`Domain`] namespace descriptor.

use serde::{Deserialize, Serialize};

/// Canonical namespace of the published dataset. Also the default base URL
/// the client fetches from.
pub const CONTEXT: &str = "https://process.org.ai";

/// JSON-LD `@type` value carried by every record.
pub const PROCESS_TYPE: &str = "https://process.org.ai/Process";

/// One taxonomy entry, as published in the `things.json` snapshot.
///
/// The wire shape is JSON-LD flavoured: `@context` and `@type` are fixed
/// literals, `@id` is a per-record URI, and the remaining keys are
/// camelCase. `parent` and `children` are advisory denormalised references;
/// tree structure is always derived from `hierarchy_id` (see the
/// [`hierarchy`](crate::hierarchy) module), never from these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// JSON-LD context, fixed to [`CONTEXT`].
    #[serde(rename = "@context", default = "default_context")]
    pub context: String,
    /// JSON-LD type, fixed to [`PROCESS_TYPE`].
    #[serde(rename = "@type", default = "default_type")]
    pub kind: String,
    /// Globally unique record URI, e.g. `https://process.org.ai/3.4.2.5`.
    #[serde(rename = "@id")]
    pub id: String,
    /// Human-readable process name, formed from `verb` + `object`.
    pub name: String,
    /// Longer hand-authored description. Absent for many records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short APQC taxonomy code (pCFID), unique within the dataset.
    pub code: String,
    /// Dot-separated tree position, e.g. `"3.4.2.5"`. Segment count equals
    /// the record's depth.
    pub hierarchy_id: String,
    /// Tree depth semantics for this record.
    pub level: ProcessLevel,
    /// Lexical verb component of the name.
    pub verb: String,
    /// Lexical object component of the name.
    pub object: String,
    /// Advisory back-reference to the parent record's `@id`. Non-owning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Advisory ordered list of child record `@id`s. Non-owning; absent on
    /// the wire is the same as empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    /// Whether APQC publishes KPI metrics for this process.
    #[serde(default)]
    pub metrics_available: bool,
}

fn default_context() -> String {
    CONTEXT.to_string()
}

fn default_type() -> String {
    PROCESS_TYPE.to_string()
}

/// Taxonomy hierarchy level, from broadest to narrowest.
///
/// The level of a record mirrors the segment count of its `hierarchy_id`:
/// a `Category` has one segment, a `Task` has five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProcessLevel {
    Category,
    ProcessGroup,
    Process,
    Activity,
    Task,
}

impl ProcessLevel {
    /// Hierarchy depth this level corresponds to (`Category` = 1).
    pub fn depth(self) -> usize {
        match self {
            ProcessLevel::Category => 1,
            ProcessLevel::ProcessGroup => 2,
            ProcessLevel::Process => 3,
            ProcessLevel::Activity => 4,
            ProcessLevel::Task => 5,
        }
    }

    /// Level expected for a record at the given hierarchy depth, if any.
    pub fn from_depth(depth: usize) -> Option<ProcessLevel> {
        match depth {
            1 => Some(ProcessLevel::Category),
            2 => Some(ProcessLevel::ProcessGroup),
            3 => Some(ProcessLevel::Process),
            4 => Some(ProcessLevel::Activity),
            5 => Some(ProcessLevel::Task),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProcessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessLevel::Category => write!(f, "Category"),
            ProcessLevel::ProcessGroup => write!(f, "ProcessGroup"),
            ProcessLevel::Process => write!(f, "Process"),
            ProcessLevel::Activity => write!(f, "Activity"),
            ProcessLevel::Task => write!(f, "Task"),
        }
    }
}

/// Static namespace metadata for the dataset. Informational only; query
/// logic never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Domain {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: &'static str,
    pub name: &'static str,
    pub parent: &'static str,
    pub types: &'static [&'static str],
}

/// The `process.org.ai` namespace descriptor.
pub const DOMAIN: Domain = Domain {
    context: CONTEXT,
    id: CONTEXT,
    name: "process.org.ai",
    parent: "schema.org.ai",
    types: &["Process"],
};
