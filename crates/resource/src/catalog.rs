// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ties qualifiers, the content-addressed collectors, and resource-id
//! lookups together into a single build-time artifact (§3 Lifecycle:
//! "Qualifiers and qualifier types are registered once during catalog
//! construction and frozen. Decisions and condition sets are append-only
//! inside a catalog; never mutated once inserted.").

use crate::candidate::Candidate;
use crate::condition::Condition;
use crate::condition_set::ConditionSet;
use crate::context::Context;
use crate::decision::{AbstractDecision, ConcreteDecision};
use crate::engine::{self, Outcome};
use crate::qualifier::Qualifier;
use ctxres_core::{CtxError, Result};
use ctxres_registry::Registries;
use ctxres_store::Collector;
use std::collections::HashMap;

pub struct Catalog {
    qualifiers: HashMap<String, Qualifier>,
    conditions: Collector<Condition>,
    condition_sets: Collector<ConditionSet>,
    abstract_decisions: Collector<AbstractDecision>,
    concrete_decisions: Collector<ConcreteDecision>,
    resources: HashMap<String, usize>,
}

/// A diagnostic snapshot of a catalog's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub qualifier_names: Vec<String>,
    pub condition_count: usize,
    pub condition_set_count: usize,
    pub abstract_decision_count: usize,
    pub concrete_decision_count: usize,
    pub resource_count: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Pre-seeds the condition-set collector with the empty set and the
    /// abstract-decision collector with the empty decision (index 0) and
    /// the default-only decision (index 1), per §3.
    pub fn new() -> Self {
        let mut condition_sets = Collector::new();
        condition_sets
            .get_or_add(ConditionSet::empty())
            .expect("the empty condition set never collides");

        let mut abstract_decisions = Collector::new();
        abstract_decisions
            .get_or_add(AbstractDecision::empty())
            .expect("the empty decision never collides");
        abstract_decisions
            .get_or_add(AbstractDecision::default_only())
            .expect("the default-only decision never collides");

        Self {
            qualifiers: HashMap::new(),
            conditions: Collector::new(),
            condition_sets,
            abstract_decisions,
            concrete_decisions: Collector::new(),
            resources: HashMap::new(),
        }
    }

    /// Registers a qualifier by name. Re-registering the same name with
    /// an identical definition is idempotent; a differing definition is
    /// a [`CtxError::KeyCollision`].
    pub fn register_qualifier(&mut self, qualifier: Qualifier) -> Result<()> {
        match self.qualifiers.get(&qualifier.name) {
            Some(existing) if existing == &qualifier => Ok(()),
            Some(_) => Err(CtxError::KeyCollision(qualifier.name)),
            None => {
                self.qualifiers.insert(qualifier.name.clone(), qualifier);
                Ok(())
            }
        }
    }

    pub fn qualifier(&self, name: &str) -> Option<&Qualifier> {
        self.qualifiers.get(name)
    }

    pub fn qualifiers(&self) -> &HashMap<String, Qualifier> {
        &self.qualifiers
    }

    pub fn get_or_add_condition(&mut self, condition: Condition) -> Result<usize> {
        self.conditions.get_or_add(condition)
    }

    pub fn get_or_add_condition_set(&mut self, set: ConditionSet) -> Result<usize> {
        self.condition_sets.get_or_add(set)
    }

    /// Builds (or reuses) the abstract decision for `condition_sets`.
    pub fn get_or_add_decision(
        &mut self,
        condition_sets: Vec<ConditionSet>,
    ) -> Result<(usize, AbstractDecision)> {
        let abstract_decision = AbstractDecision::create(condition_sets);
        let index = self.abstract_decisions.get_or_add(abstract_decision.clone())?;
        Ok((index, abstract_decision))
    }

    /// Registers a resource's full candidate list, building its abstract
    /// and concrete decisions and indexing it under `resource_id`.
    pub fn add_resource(
        &mut self,
        resource_id: impl Into<String>,
        candidates: Vec<Candidate>,
    ) -> Result<usize> {
        let condition_sets: Vec<ConditionSet> =
            candidates.iter().map(|c| c.condition_set.clone()).collect();
        let (_, abstract_decision) = self.get_or_add_decision(condition_sets)?;
        let concrete = ConcreteDecision::create(&abstract_decision, candidates)?;
        let concrete_index = self.concrete_decisions.get_or_add(concrete)?;
        self.resources.insert(resource_id.into(), concrete_index);
        Ok(concrete_index)
    }

    /// Scores `resource_id`'s candidates against `context` (§4.J).
    pub fn resolve(
        &self,
        registries: &Registries,
        resource_id: &str,
        context: &Context,
    ) -> Result<Outcome<'_>> {
        self.validate_context(registries, context)?;
        let concrete_index = *self
            .resources
            .get(resource_id)
            .ok_or_else(|| CtxError::NotFound(resource_id.to_string()))?;
        let concrete = self
            .concrete_decisions
            .get(concrete_index)
            .ok_or_else(|| CtxError::NotFound(format!("concrete decision {concrete_index}")))?;
        let (_, abstract_decision) =
            self.abstract_decisions.get_by_key(concrete.abstract_key()).ok_or_else(|| {
                CtxError::NotFound(format!(
                    "abstract decision {:?} referenced by resource {resource_id:?}",
                    concrete.abstract_key()
                ))
            })?;
        engine::evaluate(registries, &self.qualifiers, abstract_decision, concrete, context)
    }

    /// Validates every context value against its qualifier's
    /// context-value validator (§3 Context: "Values are validated
    /// against the qualifier type's context-value validator"). A
    /// context entry naming a qualifier this catalog never registered
    /// isn't consulted by the engine either, so it's left alone rather
    /// than rejected here.
    fn validate_context(&self, registries: &Registries, context: &Context) -> Result<()> {
        for (name, value) in context.entries() {
            if let Some(qualifier) = self.qualifiers.get(name) {
                if !qualifier.qualifier_type.is_valid_context_value(registries, value) {
                    return Err(CtxError::InvalidContextValue {
                        qualifier: name.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn describe(&self) -> CatalogSummary {
        let mut qualifier_names: Vec<String> = self.qualifiers.keys().cloned().collect();
        qualifier_names.sort();
        CatalogSummary {
            qualifier_names,
            condition_count: self.conditions.len(),
            condition_set_count: self.condition_sets.len(),
            abstract_decision_count: self.abstract_decisions.len(),
            concrete_decision_count: self.concrete_decisions.len(),
            resource_count: self.resources.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::qualifier_type::QualifierType;
    use ctxres_core::JsonValue;

    fn registries() -> &'static Registries {
        Registries::bundled()
    }

    #[test]
    fn pre_seeds_empty_and_default_only_decisions_at_0_and_1() {
        let catalog = Catalog::new();
        let summary = catalog.describe();
        assert_eq!(summary.abstract_decision_count, 2);
        assert_eq!(summary.condition_set_count, 1);
    }

    #[test]
    fn resolves_a_registered_resource_against_a_context() {
        let mut catalog = Catalog::new();
        catalog
            .register_qualifier(Qualifier::new("territory", QualifierType::Territory, 10).unwrap())
            .unwrap();
        let set = ConditionSet::new(vec![Condition::new("territory", "US", 1)]).unwrap();
        catalog
            .add_resource(
                "greeting",
                vec![Candidate::new(set, JsonValue::String("hello US".into()))],
            )
            .unwrap();
        let context = Context::new().with("territory", "US");
        let outcome = catalog.resolve(registries(), "greeting", &context).unwrap();
        match outcome {
            Outcome::Ranked(ranked) => {
                assert_eq!(ranked[0].entry.value, JsonValue::String("hello US".into()));
            }
            other => panic!("expected a ranked match, got {other:?}"),
        }
    }

    #[test]
    fn unknown_resource_is_not_found() {
        let catalog = Catalog::new();
        let err = catalog.resolve(registries(), "missing", &Context::new()).unwrap_err();
        assert!(matches!(err, CtxError::NotFound(_)));
    }

    #[test]
    fn rejects_a_context_value_the_qualifier_type_does_not_accept() {
        let mut catalog = Catalog::new();
        catalog
            .register_qualifier(Qualifier::new("territory", QualifierType::Territory, 10).unwrap())
            .unwrap();
        let set = ConditionSet::new(vec![Condition::new("territory", "US", 1)]).unwrap();
        catalog
            .add_resource("greeting", vec![Candidate::new(set, JsonValue::String("hi".into()))])
            .unwrap();
        let context = Context::new().with("territory", "not-a-region");
        let err = catalog.resolve(registries(), "greeting", &context).unwrap_err();
        assert!(matches!(err, CtxError::InvalidContextValue { .. }));
    }

    #[test]
    fn context_entries_for_unregistered_qualifiers_are_ignored() {
        let catalog = Catalog::new();
        let context = Context::new().with("no-such-qualifier", "anything");
        let err = catalog.resolve(registries(), "missing", &context).unwrap_err();
        assert!(matches!(err, CtxError::NotFound(_)));
    }
}
