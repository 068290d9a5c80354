// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single registry partition: case-insensitive lookup over one
//! `RegistryType`'s records (§4.A).

use crate::record::{RegistryRecord, RegistryType};
use ctxres_core::{casing, CtxError, Result};
use regex::Regex;
use std::collections::HashMap;

pub struct Partition {
    record_type: RegistryType,
    by_lower: HashMap<String, RegistryRecord>,
    well_formed: &'static Regex,
}

fn case_normalize(record_type: RegistryType, raw: &str) -> String {
    match record_type {
        RegistryType::Language | RegistryType::Extlang => casing::lower(raw),
        RegistryType::Script => casing::title(raw),
        RegistryType::Region => casing::upper(raw),
        RegistryType::Variant => casing::lower(raw),
        RegistryType::Grandfathered | RegistryType::Redundant => raw.to_string(),
        RegistryType::Extension => casing::lower(raw),
    }
}

impl Partition {
    pub fn new(record_type: RegistryType, well_formed: &'static Regex) -> Self {
        Self { record_type, by_lower: HashMap::new(), well_formed }
    }

    pub fn insert(&mut self, record: RegistryRecord) {
        self.by_lower.insert(record.subtag.to_ascii_lowercase(), record);
    }

    pub fn record_type(&self) -> RegistryType {
        self.record_type
    }

    pub fn is_well_formed(&self, raw: &str) -> bool {
        self.well_formed.is_match(raw)
    }

    /// Case-insensitive canonicalization then exact match (§4.A).
    pub fn try_get(&self, raw: &str) -> Option<&RegistryRecord> {
        self.by_lower.get(&raw.to_ascii_lowercase())
    }

    /// The registry's canonical casing if registered, else the
    /// mechanically case-normalized raw subtag.
    pub fn to_canonical(&self, raw: &str) -> Result<String> {
        if !self.is_well_formed(raw) {
            return Err(CtxError::NotWellFormed(raw.to_string()));
        }
        Ok(self
            .try_get(raw)
            .map(|r| r.subtag.clone())
            .unwrap_or_else(|| case_normalize(self.record_type, raw)))
    }

    /// As `to_canonical`, but fails unless the subtag is registered.
    pub fn to_valid_canonical(&self, raw: &str) -> Result<&RegistryRecord> {
        if !self.is_well_formed(raw) {
            return Err(CtxError::NotWellFormed(raw.to_string()));
        }
        self.try_get(raw).ok_or_else(|| CtxError::NotRegistered(raw.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryRecord> {
        self.by_lower.values()
    }

    pub fn len(&self) -> usize {
        self.by_lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_lower.is_empty()
    }
}
