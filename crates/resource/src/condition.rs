// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single `qualifier = value` test with a priority (§3 `Condition`).

use ctxres_store::Keyed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub qualifier_name: String,
    pub value: String,
    pub priority: u16,
}

impl Condition {
    pub fn new(qualifier_name: impl Into<String>, value: impl Into<String>, priority: u16) -> Self {
        Self { qualifier_name: qualifier_name.into(), value: value.into(), priority }
    }
}

impl Keyed for Condition {
    fn key(&self) -> String {
        format!("{}={}@{}", self.qualifier_name, self.value, self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_embeds_qualifier_value_and_priority() {
        let c = Condition::new("lang", "en-US", 5);
        assert_eq!(c.key(), "lang=en-US@5");
    }
}
