// SPDX-License-Identifier: MIT OR Apache-2.0

//! Abstract and concrete decisions (§3 `AbstractDecision`,
//! `ConcreteDecision`).

use crate::candidate::{Candidate, MergeMethod};
use crate::condition_set::ConditionSet;
use ctxres_core::{CtxError, JsonValue, Result};
use ctxres_store::Keyed;

/// The structure of a decision — its condition sets, most specific
/// first, empty set last — shared across every resource that happens to
/// vary over the same conditions (§3: "shared across many resources").
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractDecision {
    key: String,
    condition_sets: Vec<ConditionSet>,
}

impl AbstractDecision {
    /// Sorts `condition_sets` descending by [`ConditionSet`]'s natural
    /// order (longest/most-specific first, empty set last) and derives
    /// the key as the concatenation of each set's hash.
    pub fn create(mut condition_sets: Vec<ConditionSet>) -> Self {
        condition_sets.sort_by(|a, b| b.cmp(a));
        let key = condition_sets.iter().map(Keyed::key).collect::<Vec<_>>().join("");
        Self { key, condition_sets }
    }

    /// The distinguished empty decision: no condition sets at all.
    pub fn empty() -> Self {
        Self::create(Vec::new())
    }

    /// The distinguished default-only decision: a single empty condition
    /// set, matching every context at the lowest possible specificity.
    pub fn default_only() -> Self {
        Self::create(vec![ConditionSet::empty()])
    }

    pub fn condition_sets(&self) -> &[ConditionSet] {
        &self.condition_sets
    }

    pub fn len(&self) -> usize {
        self.condition_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.condition_sets.is_empty()
    }

    pub fn position_of(&self, set: &ConditionSet) -> Option<usize> {
        self.condition_sets.iter().position(|cs| cs.key() == set.key())
    }
}

impl Keyed for AbstractDecision {
    fn key(&self) -> String {
        self.key.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEntry {
    pub value: JsonValue,
    pub is_partial: bool,
    pub merge_method: MergeMethod,
}

/// A fully materialized decision: one value per position of its
/// [`AbstractDecision`]'s condition-set sequence (§3: `(AbstractDecision,
/// values)` where `values.len == abstract.candidates.len`).
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteDecision {
    key: String,
    abstract_key: String,
    entries: Vec<CandidateEntry>,
}

impl ConcreteDecision {
    /// Maps `candidates` bijectively onto `abstract_decision`'s
    /// condition-set positions and materializes the resulting values
    /// array, erroring if the mapping isn't exactly one candidate per
    /// position (§4.I).
    pub fn create(abstract_decision: &AbstractDecision, candidates: Vec<Candidate>) -> Result<Self> {
        if candidates.len() != abstract_decision.len() {
            return Err(CtxError::Internal(format!(
                "{} candidates do not match abstract decision {:?}'s {} condition sets",
                candidates.len(),
                abstract_decision.key(),
                abstract_decision.len()
            )));
        }

        let mut slots: Vec<Option<CandidateEntry>> = (0..abstract_decision.len()).map(|_| None).collect();
        for candidate in candidates {
            let position = abstract_decision.position_of(&candidate.condition_set).ok_or_else(|| {
                CtxError::NotFound(format!(
                    "condition set {:?} is not part of abstract decision {:?}",
                    candidate.condition_set.key(),
                    abstract_decision.key()
                ))
            })?;
            if slots[position].is_some() {
                return Err(CtxError::Internal(format!(
                    "candidate list does not bijectively map onto abstract decision {:?}",
                    abstract_decision.key()
                )));
            }
            slots[position] = Some(CandidateEntry {
                value: candidate.value,
                is_partial: candidate.is_partial,
                merge_method: candidate.merge_method,
            });
        }

        let entries: Vec<CandidateEntry> = slots.into_iter().collect::<Option<Vec<_>>>().ok_or_else(|| {
            CtxError::Internal(format!(
                "candidate list does not bijectively map onto abstract decision {:?}",
                abstract_decision.key()
            ))
        })?;

        let key = compute_key(&abstract_decision.key(), &entries);
        Ok(Self { key, abstract_key: abstract_decision.key(), entries })
    }

    pub fn abstract_key(&self) -> &str {
        &self.abstract_key
    }

    pub fn entries(&self) -> &[CandidateEntry] {
        &self.entries
    }
}

fn compute_key(abstract_key: &str, entries: &[CandidateEntry]) -> String {
    let mut hasher = crc32fast::Hasher::new();
    for entry in entries {
        hasher.update(&entry.value.canonical_bytes());
    }
    format!("{abstract_key}|{:08x}", hasher.finalize())
}

impl Keyed for ConcreteDecision {
    fn key(&self) -> String {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;

    fn set(qualifier: &str, value: &str, priority: u16) -> ConditionSet {
        ConditionSet::new(vec![Condition::new(qualifier, value, priority)]).unwrap()
    }

    #[test]
    fn most_specific_condition_set_sorts_first_and_empty_set_last() {
        let home = set("home", "CA", 1);
        let current_and_lang = ConditionSet::new(vec![
            Condition::new("current", "US", 1),
            Condition::new("lang", "en", 1),
        ])
        .unwrap();
        let abstract_decision =
            AbstractDecision::create(vec![ConditionSet::empty(), home.clone(), current_and_lang.clone()]);
        assert_eq!(abstract_decision.condition_sets().last(), Some(&ConditionSet::empty()));
        assert_eq!(abstract_decision.len(), 3);
    }

    #[test]
    fn identical_condition_sets_in_any_order_produce_the_same_key() {
        let home = set("home", "CA", 1);
        let lang = set("lang", "en", 1);
        let a = AbstractDecision::create(vec![home.clone(), lang.clone()]);
        let b = AbstractDecision::create(vec![lang, home]);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn concrete_decision_materializes_values_in_abstract_order() {
        let home = set("home", "CA", 1);
        let abstract_decision = AbstractDecision::create(vec![ConditionSet::empty(), home.clone()]);
        let candidates = vec![
            Candidate::new(home.clone(), JsonValue::String("ca-value".into())),
            Candidate::new(ConditionSet::empty(), JsonValue::String("default".into())),
        ];
        let concrete = ConcreteDecision::create(&abstract_decision, candidates).unwrap();
        assert_eq!(concrete.entries()[0].value, JsonValue::String("ca-value".into()));
        assert_eq!(concrete.entries()[1].value, JsonValue::String("default".into()));
    }

    #[test]
    fn non_bijective_candidate_list_is_rejected() {
        let home = set("home", "CA", 1);
        let other = set("home", "US", 1);
        let abstract_decision = AbstractDecision::create(vec![home.clone()]);
        let candidates = vec![Candidate::new(other, JsonValue::Null)];
        assert!(ConcreteDecision::create(&abstract_decision, candidates).is_err());
    }

    #[test]
    fn rebuilding_the_same_decision_twice_yields_the_same_key() {
        let home = set("home", "CA", 1);
        let current_and_lang = ConditionSet::new(vec![
            Condition::new("current", "US", 1),
            Condition::new("lang", "en", 1),
        ])
        .unwrap();
        let abstract_decision =
            AbstractDecision::create(vec![home.clone(), current_and_lang.clone()]);
        let build = || {
            ConcreteDecision::create(
                &abstract_decision,
                vec![
                    Candidate::new(home.clone(), JsonValue::Bool(true)),
                    Candidate::new(current_and_lang.clone(), JsonValue::Bool(false)),
                ],
            )
            .unwrap()
        };
        assert_eq!(build().key(), build().key());
    }
}
