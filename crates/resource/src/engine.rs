// SPDX-License-Identifier: MIT OR Apache-2.0

//! The matching engine (§4.J): scores a concrete decision's candidates
//! against a context, ranks them, and optionally folds them into a
//! single merged value.

use crate::candidate::MergeMethod;
use crate::condition_set::ConditionSet;
use crate::context::Context;
use crate::decision::{AbstractDecision, CandidateEntry, ConcreteDecision};
use crate::qualifier::Qualifier;
use ctxres_core::{CtxError, JsonValue, Result};
use ctxres_registry::Registries;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A single candidate's score against a context, with its position in
/// the abstract decision's (already most-specific-first) order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub position: usize,
    pub score: f64,
    pub entry: &'a CandidateEntry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    /// At least one candidate scored above zero, ordered `(score desc,
    /// position asc)`.
    Ranked(Vec<Ranked<'a>>),
    /// No candidate scored above zero, but the decision carries a
    /// default (empty condition set) candidate.
    DefaultOnly(&'a CandidateEntry),
    NoMatch,
}

/// Score every candidate of `concrete` (whose positions line up with
/// `abstract_decision`'s condition sets) against `context`, then rank.
pub fn evaluate<'a>(
    registries: &Registries,
    qualifiers: &HashMap<String, Qualifier>,
    abstract_decision: &AbstractDecision,
    concrete: &'a ConcreteDecision,
    context: &Context,
) -> Result<Outcome<'a>> {
    let mut ranked = Vec::new();
    let mut default_position = None;

    for (position, condition_set) in abstract_decision.condition_sets().iter().enumerate() {
        if condition_set.is_empty() {
            default_position = Some(position);
        }
        let score = score_condition_set(registries, qualifiers, condition_set, context)?;
        if score > 0.0 {
            ranked.push(Ranked { position, score, entry: &concrete.entries()[position] });
        }
    }

    ranked.sort_by(|a, b| {
        b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal).then(a.position.cmp(&b.position))
    });

    if !ranked.is_empty() {
        return Ok(Outcome::Ranked(ranked));
    }
    if let Some(position) = default_position {
        return Ok(Outcome::DefaultOnly(&concrete.entries()[position]));
    }
    Ok(Outcome::NoMatch)
}

fn score_condition_set(
    registries: &Registries,
    qualifiers: &HashMap<String, Qualifier>,
    condition_set: &ConditionSet,
    context: &Context,
) -> Result<f64> {
    let mut score = 1.0_f64;
    for condition in condition_set.conditions() {
        let qualifier = qualifiers
            .get(&condition.qualifier_name)
            .ok_or_else(|| CtxError::UnknownQualifier(condition.qualifier_name.clone()))?;
        let context_value = context
            .get(&condition.qualifier_name)
            .or(qualifier.default_value.as_deref());
        let Some(context_value) = context_value else {
            return Ok(0.0);
        };
        score *= qualifier.qualifier_type.score(registries, &condition.value, context_value);
        if score <= 0.0 {
            return Ok(0.0);
        }
    }
    Ok(score)
}

/// Folds a `Ranked` set into a single value (§4.J step 3): the best
/// candidate seeds the accumulator; subsequent *partial* candidates fold
/// in per their own `MergeMethod`, in ranked order.
pub fn merge(ranked: &[Ranked<'_>]) -> Option<JsonValue> {
    let (first, rest) = ranked.split_first()?;
    let mut acc = first.entry.value.clone();
    for r in rest {
        if r.entry.is_partial {
            match r.entry.merge_method {
                MergeMethod::Augment => acc.augment(&r.entry.value),
                MergeMethod::Replace => acc.replace(&r.entry.value),
            }
        }
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::condition::Condition;
    use crate::condition_set::ConditionSet;
    use crate::qualifier_type::QualifierType;

    fn registries() -> &'static Registries {
        Registries::bundled()
    }

    fn qualifiers() -> HashMap<String, Qualifier> {
        let mut m = HashMap::new();
        m.insert(
            "territory".to_string(),
            Qualifier::new("territory", QualifierType::Territory, 10).unwrap(),
        );
        m
    }

    #[test]
    fn empty_decision_never_matches() {
        let abstract_decision = AbstractDecision::empty();
        let concrete = ConcreteDecision::create(&abstract_decision, vec![]).unwrap();
        let outcome =
            evaluate(registries(), &qualifiers(), &abstract_decision, &concrete, &Context::new())
                .unwrap();
        assert_eq!(outcome, Outcome::NoMatch);
    }

    #[test]
    fn default_only_decision_always_matches() {
        let abstract_decision = AbstractDecision::default_only();
        let candidates = vec![Candidate::new(ConditionSet::empty(), JsonValue::String("d".into()))];
        let concrete = ConcreteDecision::create(&abstract_decision, candidates).unwrap();
        let outcome =
            evaluate(registries(), &qualifiers(), &abstract_decision, &concrete, &Context::new())
                .unwrap();
        match outcome {
            Outcome::Ranked(ranked) => {
                assert_eq!(ranked.len(), 1);
                assert_eq!(ranked[0].score, 1.0);
            }
            other => panic!("expected a ranked match, got {other:?}"),
        }
    }

    #[test]
    fn falls_back_to_default_when_nothing_else_matches() {
        let specific = ConditionSet::new(vec![Condition::new("territory", "JP", 1)]).unwrap();
        let abstract_decision =
            AbstractDecision::create(vec![ConditionSet::empty(), specific.clone()]);
        let candidates = vec![
            Candidate::new(specific, JsonValue::String("jp".into())),
            Candidate::new(ConditionSet::empty(), JsonValue::String("default".into())),
        ];
        let concrete = ConcreteDecision::create(&abstract_decision, candidates).unwrap();
        let context = Context::new().with("territory", "US");
        let outcome =
            evaluate(registries(), &qualifiers(), &abstract_decision, &concrete, &context).unwrap();
        match outcome {
            Outcome::Ranked(ranked) => {
                assert_eq!(ranked.len(), 1);
                assert_eq!(ranked[0].entry.value, JsonValue::String("default".into()));
            }
            other => panic!("expected the default candidate to rank, got {other:?}"),
        }
    }

    #[test]
    fn best_scoring_candidate_ranks_first() {
        let us = ConditionSet::new(vec![Condition::new("territory", "US", 1)]).unwrap();
        let world = ConditionSet::new(vec![Condition::new("territory", "world", 1)]).unwrap();
        let abstract_decision = AbstractDecision::create(vec![us.clone(), world.clone()]);
        let candidates = vec![
            Candidate::new(us, JsonValue::String("us".into())),
            Candidate::new(world, JsonValue::String("world".into())),
        ];
        let concrete = ConcreteDecision::create(&abstract_decision, candidates).unwrap();
        let context = Context::new().with("territory", "US");
        let outcome =
            evaluate(registries(), &qualifiers(), &abstract_decision, &concrete, &context).unwrap();
        match outcome {
            Outcome::Ranked(ranked) => {
                assert_eq!(ranked[0].entry.value, JsonValue::String("us".into()));
                assert!(ranked.len() == 2 || ranked.len() == 1);
            }
            other => panic!("expected a ranked match, got {other:?}"),
        }
    }

    #[test]
    fn merge_augments_missing_keys_from_partial_candidates() {
        let mut base = indexmap::IndexMap::new();
        base.insert("a".to_string(), JsonValue::Number(1.0));
        let mut extra = indexmap::IndexMap::new();
        extra.insert("b".to_string(), JsonValue::Number(2.0));

        let us = ConditionSet::new(vec![Condition::new("territory", "US", 2)]).unwrap();
        let world = ConditionSet::new(vec![Condition::new("territory", "world", 1)]).unwrap();
        let abstract_decision = AbstractDecision::create(vec![us.clone(), world.clone()]);
        let candidates = vec![
            Candidate::new(us, JsonValue::Object(base)),
            Candidate::new(world, JsonValue::Object(extra)).partial(),
        ];
        let concrete = ConcreteDecision::create(&abstract_decision, candidates).unwrap();
        let context = Context::new().with("territory", "US");
        let outcome =
            evaluate(registries(), &qualifiers(), &abstract_decision, &concrete, &context).unwrap();
        let Outcome::Ranked(ranked) = outcome else { panic!("expected ranked outcome") };
        let merged = merge(&ranked).unwrap();
        let obj = merged.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&JsonValue::Number(1.0)));
        assert_eq!(obj.get("b"), Some(&JsonValue::Number(2.0)));
    }
}
