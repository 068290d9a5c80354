// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three escalating validation levels (§4.C).

use ctxres_core::{CtxError, Result, Subtags, ValidityLevel};
use ctxres_registry::Registries;
use std::collections::HashSet;

/// Re-export of the shared total order so callers of this crate don't
/// need to depend on `ctxres-core` directly just to name a level.
pub use ctxres_core::choose_level as choose_validator;

/// Check `subtags` against `level`, returning the highest level actually
/// achieved or the first failure encountered while escalating toward it.
pub fn validate(registries: &Registries, subtags: &Subtags, level: ValidityLevel) -> Result<()> {
    // well-formed is implied by having parsed successfully; nothing further
    // to check at that level.
    if level == ValidityLevel::WellFormed {
        return Ok(());
    }
    check_valid(registries, subtags)?;
    if level == ValidityLevel::Valid {
        return Ok(());
    }
    check_strictly_valid(registries, subtags)
}

/// **valid**: every subtag exists in the registry.
fn check_valid(registries: &Registries, subtags: &Subtags) -> Result<()> {
    if let Some(g) = &subtags.grandfathered {
        registries.grandfathered().to_valid_canonical(g)?;
        return Ok(());
    }
    if subtags.is_private_use_only() {
        return Ok(());
    }
    if let Some(lang) = &subtags.primary_language {
        registries.language().to_valid_canonical(lang)?;
    }
    for extlang in &subtags.extlangs {
        registries.extlang().to_valid_canonical(extlang)?;
    }
    if let Some(script) = &subtags.script {
        registries.script().to_valid_canonical(script)?;
    }
    if let Some(region) = &subtags.region {
        registries.region().to_valid_canonical(region)?;
    }
    for variant in &subtags.variants {
        registries.variant().to_valid_canonical(variant)?;
    }
    for ext in &subtags.extensions {
        registries.extension().to_valid_canonical(&ext.singleton.to_string())?;
    }
    Ok(())
}

/// **strictly-valid**: `valid` plus prefix, duplicate-variant, and
/// duplicate-extension-singleton rules.
fn check_strictly_valid(registries: &Registries, subtags: &Subtags) -> Result<()> {
    let Some(primary) = &subtags.primary_language else { return Ok(()) };

    for extlang in &subtags.extlangs {
        if let Some(record) = registries.extlang().try_get(extlang) {
            if !record.prefix.is_empty() && !record.prefix.iter().any(|p| p.eq_ignore_ascii_case(primary))
            {
                return Err(CtxError::NotStrictlyValid(format!(
                    "extlang {extlang:?} requires prefix in {:?}, found {primary:?}",
                    record.prefix
                )));
            }
        }
    }

    let mut preceding: Vec<String> = vec![primary.clone()];
    preceding.extend(subtags.extlangs.iter().cloned());
    if let Some(s) = &subtags.script {
        preceding.push(s.clone());
    }
    if let Some(r) = &subtags.region {
        preceding.push(r.clone());
    }
    let mut seen_variants: HashSet<String> = HashSet::new();
    for variant in &subtags.variants {
        let lower = variant.to_ascii_lowercase();
        if !seen_variants.insert(lower) {
            return Err(CtxError::NotStrictlyValid(format!("duplicate variant {variant:?}")));
        }
        if let Some(record) = registries.variant().try_get(variant) {
            if !record.prefix.is_empty() {
                let joined = preceding.join("-");
                let matches_prefix = record
                    .prefix
                    .iter()
                    .any(|p| joined.eq_ignore_ascii_case(p) || joined.to_ascii_lowercase().starts_with(&p.to_ascii_lowercase()));
                if !matches_prefix {
                    return Err(CtxError::NotStrictlyValid(format!(
                        "variant {variant:?} requires prefix in {:?}, found {joined:?}",
                        record.prefix
                    )));
                }
            }
        }
        preceding.push(variant.clone());
    }

    let mut seen_singletons: HashSet<char> = HashSet::new();
    for ext in &subtags.extensions {
        let lower = ext.singleton.to_ascii_lowercase();
        if !seen_singletons.insert(lower) {
            return Err(CtxError::NotStrictlyValid(format!(
                "duplicate extension singleton {:?}",
                ext.singleton
            )));
        }
    }

    Ok(())
}
