// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource importer (§4.K): walks a file tree, interprets directory and
//! filename condition tokens, and produces a [`ctxres_resource::Catalog`]
//! plus the external catalog JSON ([`manifest::Manifest`]) it was built
//! from.

pub mod manifest;
pub mod path_conditions;
pub mod walker;

use ctxres_core::{CtxError, JsonValue, Result};
use ctxres_registry::Registries;
use ctxres_resource::{Candidate, Catalog, Condition, ConditionSet, MergeMethod, Qualifier};
use manifest::{Manifest, ManifestCandidate, ManifestCondition};
use path_conditions::PathCondition;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// The outcome of importing a resource tree: the manifest that was built
/// plus any files that were skipped (non-JSON, per §4.K — informational,
/// not fatal).
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub manifest: Manifest,
    pub skipped: Vec<String>,
}

/// Walks `root`, classifies every discovered file's path into condition
/// tokens plus a dotted resource id, and accumulates a [`Manifest`].
/// `.json` files only; anything else is recorded in
/// [`ImportReport::skipped`] rather than erroring.
pub fn import_tree(
    registries: &Registries,
    qualifiers: &HashMap<String, Qualifier>,
    root: &Path,
) -> Result<ImportReport> {
    let mut manifest: Manifest = Manifest::new();
    let mut skipped = Vec::new();

    for file in walker::walk(root)? {
        let relative = file.relative_path.clone();
        if relative.extension().and_then(|e| e.to_str()) != Some("json") {
            debug!(path = %relative.display(), "skipping non-json file");
            skipped.push(relative.to_string_lossy().to_string());
            continue;
        }

        let (resource_id, conditions) = classify_path(registries, qualifiers, &relative)?;
        let contents = std::fs::read_to_string(&file.absolute_path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;

        let manifest_conditions = conditions
            .into_iter()
            .map(|c| ManifestCondition {
                qualifier: c.qualifier_name,
                value: c.value,
                priority: None,
            })
            .collect();

        manifest.entry(resource_id).or_default().push(ManifestCandidate {
            conditions: manifest_conditions,
            value,
            is_partial: None,
            merge_method: None,
        });
    }

    if !skipped.is_empty() {
        warn!(count = skipped.len(), "skipped non-json files during import");
    }

    Ok(ImportReport { manifest, skipped })
}

/// Splits a relative file path into its dotted resource id (the literal,
/// non-condition path segments plus the file's base name) and the
/// conditions its directory segments and filename suffix encode.
fn classify_path(
    registries: &Registries,
    qualifiers: &HashMap<String, Qualifier>,
    relative: &Path,
) -> Result<(String, Vec<PathCondition>)> {
    let mut id_segments = Vec::new();
    let mut conditions = Vec::new();

    let mut components: Vec<&std::ffi::OsStr> = relative.iter().collect();
    let file_name = components
        .pop()
        .ok_or_else(|| CtxError::ParseError { reason: "empty path".into(), position: 0 })?
        .to_string_lossy()
        .to_string();

    for component in components {
        let segment = component.to_string_lossy();
        match path_conditions::parse_segment(registries, qualifiers, &segment)? {
            Some(condition) => conditions.push(condition),
            None => id_segments.push(segment.to_string()),
        }
    }

    let stem = file_name.strip_suffix(".json").unwrap_or(&file_name);
    let (base, suffix) = match stem.split_once('.') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (stem, None),
    };
    if let Some(suffix) = suffix {
        conditions.extend(path_conditions::parse_suffix(registries, qualifiers, suffix)?);
    }

    id_segments.push(base.to_string());
    Ok((id_segments.join("."), conditions))
}

/// Rebuilds a [`Catalog`] from previously-exported catalog JSON, for the
/// CLI's `resolve` subcommand to load against without re-walking a tree.
pub fn build_catalog(qualifiers: HashMap<String, Qualifier>, manifest: &Manifest) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for qualifier in qualifiers.into_values() {
        catalog.register_qualifier(qualifier)?;
    }

    for (resource_id, manifest_candidates) in manifest {
        let candidates = manifest_candidates
            .iter()
            .map(|mc| build_candidate(catalog.qualifiers(), mc))
            .collect::<Result<Vec<_>>>()?;
        catalog.add_resource(resource_id.clone(), candidates)?;
    }

    Ok(catalog)
}

fn build_candidate(
    qualifiers: &HashMap<String, Qualifier>,
    manifest_candidate: &ManifestCandidate,
) -> Result<Candidate> {
    let conditions = manifest_candidate
        .conditions
        .iter()
        .map(|mc| {
            let qualifier = qualifiers
                .get(&mc.qualifier)
                .ok_or_else(|| CtxError::UnknownQualifier(mc.qualifier.clone()))?;
            let priority = mc.priority.unwrap_or(qualifier.default_priority);
            Ok(Condition::new(mc.qualifier.clone(), mc.value.clone(), priority))
        })
        .collect::<Result<Vec<_>>>()?;

    let condition_set = ConditionSet::new(conditions)?;
    let value: JsonValue = manifest_candidate.value.clone().into();
    let mut candidate = Candidate::new(condition_set, value);
    if manifest_candidate.is_partial.unwrap_or(false) {
        candidate = candidate.partial();
    }
    if manifest_candidate.merge_method.as_deref() == Some("replace") {
        candidate = candidate.with_merge_method(MergeMethod::Replace);
    }
    Ok(candidate)
}

/// Serializes a manifest the way the importer and the CLI's `import`
/// subcommand both need to write it: stable key order, two-space indent.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn read_manifest(path: &Path) -> Result<Manifest> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctxres_resource::QualifierType;
    use std::fs;

    fn registries() -> &'static Registries {
        Registries::bundled()
    }

    fn qualifiers() -> HashMap<String, Qualifier> {
        let mut m = HashMap::new();
        m.insert(
            "territory".to_string(),
            Qualifier::new("territory", QualifierType::Territory, 10)
                .unwrap()
                .with_token("territory", true),
        );
        m
    }

    #[test]
    fn imports_a_directory_segment_condition() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("territory=US")).unwrap();
        fs::write(dir.path().join("territory=US/greeting.json"), r#""hello""#).unwrap();

        let report = import_tree(registries(), &qualifiers(), dir.path()).unwrap();
        let candidates = report.manifest.get("greeting").expect("resource present");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].conditions[0].qualifier, "territory");
        assert_eq!(candidates[0].conditions[0].value, "US");
    }

    #[test]
    fn imports_a_bare_optional_token_directory_segment() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("US")).unwrap();
        fs::write(dir.path().join("US/greeting.json"), r#""hi""#).unwrap();

        let report = import_tree(registries(), &qualifiers(), dir.path()).unwrap();
        let candidates = report.manifest.get("greeting").expect("resource present");
        assert_eq!(candidates[0].conditions[0].qualifier, "territory");
    }

    #[test]
    fn imports_a_filename_suffix_condition() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("greeting.territory=US.json"), r#""hi""#).unwrap();

        let report = import_tree(registries(), &qualifiers(), dir.path()).unwrap();
        let candidates = report.manifest.get("greeting").expect("resource present");
        assert_eq!(candidates[0].conditions[0].value, "US");
    }

    #[test]
    fn non_json_files_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "notes").unwrap();

        let report = import_tree(registries(), &qualifiers(), dir.path()).unwrap();
        assert!(report.manifest.is_empty());
        assert_eq!(report.skipped, vec!["README.md".to_string()]);
    }

    #[test]
    fn round_trips_through_build_catalog() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("territory=US")).unwrap();
        fs::write(dir.path().join("territory=US/greeting.json"), r#""hello US""#).unwrap();

        let report = import_tree(registries(), &qualifiers(), dir.path()).unwrap();
        let catalog = build_catalog(qualifiers(), &report.manifest).unwrap();
        let context = ctxres_resource::Context::new().with("territory", "US");
        let outcome = catalog.resolve(registries(), "greeting", &context).unwrap();
        match outcome {
            ctxres_resource::Outcome::Ranked(ranked) => {
                assert_eq!(ranked[0].entry.value, JsonValue::String("hello US".into()));
            }
            other => panic!("expected a ranked match, got {other:?}"),
        }
    }
}
