// SPDX-License-Identifier: MIT OR Apache-2.0

//! The catalog JSON shape (§6): a mapping from resource id to a list of
//! `{conditions: [{qualifier, value, priority?}], value, isPartial?,
//! mergeMethod?}`. This is the importer's external output format and the
//! loader's external input format — a stable serialization boundary
//! independent of `ctxres_resource`'s in-memory types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestCondition {
    pub qualifier: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestCandidate {
    pub conditions: Vec<ManifestCondition>,
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_partial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_method: Option<String>,
}

/// A dotted resource id to its candidate list. `BTreeMap` keeps exported
/// catalog JSON byte-stable across runs over the same tree.
pub type Manifest = BTreeMap<String, Vec<ManifestCandidate>>;
