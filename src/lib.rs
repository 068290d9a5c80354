// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context-qualified resource resolution: a BCP-47 language engine plus
//! a qualifier/condition/decision matching engine for selecting and
//! merging resource values against a runtime context.
//!
//! This crate just re-exports the workspace's member crates under one
//! name; each member is independently usable and documents its own
//! component in full.

pub use ctxres_core as core;
pub use ctxres_import as import;
pub use ctxres_match as matcher;
pub use ctxres_parse as parse;
pub use ctxres_registry as registry;
pub use ctxres_resource as resource;

pub use ctxres_core::{CtxError, JsonValue, LanguageTag, NormalizationLevel, Result, SimilarityTier, Subtags, ValidityLevel};
pub use ctxres_match::{choose, similarity, ChooseOptions, Filter, Use};
pub use ctxres_parse::parse_tag;
pub use ctxres_registry::Registries;
pub use ctxres_resource::{Candidate, Catalog, Condition, ConditionSet, Context, MergeMethod, Outcome, Qualifier, QualifierType};


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const LANGUAGES: &[&str] = &["und", "en", "fr", "de", "es", "pt", "it", "nl", "ru", "ja", "ko"];
    const REGIONS: &[&str] =
        &["US", "GB", "CA", "AU", "NZ", "MX", "FR", "DE", "ES", "PT", "IT", "NL", "BE", "CH"];

    fn tag() -> impl Strategy<Value = String> {
        (
            prop::sample::select(LANGUAGES),
            prop::option::of(prop::sample::select(REGIONS)),
        )
            .prop_map(|(lang, region)| match region {
                Some(region) => format!("{lang}-{region}"),
                None => lang.to_string(),
            })
    }

    proptest! {
        /// §4.F: `choose` never ranks more tags than were offered as
        /// available, however many desired tags are fed through it.
        #[test]
        fn choose_never_ranks_more_than_the_available_tags(
            desired in prop::collection::vec(tag(), 1..4),
            available in prop::collection::vec(tag(), 1..4),
        ) {
            let registries = Registries::bundled();
            let ranked = choose(registries, &desired, &available, &ChooseOptions::default()).unwrap();
            prop_assert!(ranked.len() <= available.len());
        }
    }
}
