// SPDX-License-Identifier: MIT OR Apache-2.0

//! The on-disk JSON document shape for both registries (§6).

use crate::record::RegistryRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDocument {
    #[serde(rename = "fileDate")]
    pub file_date: String,
    pub entries: Vec<RegistryRecord>,
}

impl RegistryDocument {
    pub fn from_json_str(s: &str) -> ctxres_core::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
