// SPDX-License-Identifier: MIT OR Apache-2.0

//! An immutable, priority-sorted set of conditions (§3 `ConditionSet`).

use crate::condition::Condition;
use ctxres_core::{CtxError, Result};
use ctxres_store::Keyed;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct ConditionSet {
    conditions: Vec<Condition>,
    key: String,
}

impl ConditionSet {
    /// Builds a condition set, sorting by `(priority desc, qualifier.name
    /// asc)` and rejecting two conditions on the same qualifier.
    pub fn new(mut conditions: Vec<Condition>) -> Result<Self> {
        conditions.sort_by(|a, b| {
            b.priority.cmp(&a.priority).then_with(|| a.qualifier_name.cmp(&b.qualifier_name))
        });
        let mut seen = HashSet::new();
        for c in &conditions {
            if !seen.insert(c.qualifier_name.clone()) {
                return Err(CtxError::DuplicateQualifier(c.qualifier_name.clone()));
            }
        }
        let key = compute_key(&conditions);
        Ok(Self { conditions, key })
    }

    pub fn empty() -> Self {
        Self { conditions: Vec::new(), key: compute_key(&[]) }
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

fn compute_key(conditions: &[Condition]) -> String {
    let joined = conditions.iter().map(Condition::key).collect::<Vec<_>>().join("+");
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(joined.as_bytes());
    format!("{:08x}", hasher.finalize())
}

impl Keyed for ConditionSet {
    fn key(&self) -> String {
        self.key.clone()
    }
}

impl PartialEq for ConditionSet {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for ConditionSet {}

/// Element-wise by member key; on equal prefixes the shorter set sorts
/// first, so the empty set is the global minimum (§3: "The empty set
/// exists and sorts first."). [`crate::decision::AbstractDecision::create`]
/// sorts its condition sets *descending* by this order, which puts the
/// most specific (longest) set first and the empty set last as the
/// catch-all fallback.
impl PartialOrd for ConditionSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ConditionSet {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.conditions.iter().zip(other.conditions.iter()) {
            let ord = a.key().cmp(&b.key());
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.conditions.len().cmp(&other.conditions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_qualifier() {
        let conditions =
            vec![Condition::new("lang", "en", 1), Condition::new("lang", "fr", 2)];
        let err = ConditionSet::new(conditions).unwrap_err();
        assert!(matches!(err, CtxError::DuplicateQualifier(_)));
    }

    #[test]
    fn sorts_by_priority_desc_then_qualifier_asc() {
        let conditions = vec![
            Condition::new("territory", "US", 1),
            Condition::new("lang", "en", 5),
            Condition::new("density", "hi", 5),
        ];
        let set = ConditionSet::new(conditions).unwrap();
        let names: Vec<&str> =
            set.conditions().iter().map(|c| c.qualifier_name.as_str()).collect();
        assert_eq!(names, vec!["density", "lang", "territory"]);
    }

    #[test]
    fn empty_set_is_the_global_minimum() {
        let non_empty = ConditionSet::new(vec![Condition::new("lang", "en", 1)]).unwrap();
        assert!(ConditionSet::empty() < non_empty);
    }

    #[test]
    fn equal_condition_sets_share_a_key() {
        let a = ConditionSet::new(vec![Condition::new("lang", "en", 1)]).unwrap();
        let b = ConditionSet::new(vec![Condition::new("lang", "en", 1)]).unwrap();
        assert_eq!(a.key(), b.key());
    }
}
