// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parses the condition tokens a resource tree encodes in path segments
//! and filename suffixes (§6: "File path segments may encode conditions
//! either (a) as a directory name `qualifier=value` or `value` when the
//! qualifier declares `tokenIsOptional`, or (b) in the file's base name
//! suffix `<base>.<cond>,<cond>.json`.").

use ctxres_core::{CtxError, Result};
use ctxres_registry::Registries;
use ctxres_resource::Qualifier;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCondition {
    pub qualifier_name: String,
    pub value: String,
}

/// Parses one path segment. `None` means the segment isn't a condition
/// at all and should be kept as a literal resource-id path component.
pub fn parse_segment(
    registries: &Registries,
    qualifiers: &HashMap<String, Qualifier>,
    segment: &str,
) -> Result<Option<PathCondition>> {
    if let Some((name, value)) = segment.split_once('=') {
        let qualifier = qualifiers
            .get(name)
            .ok_or_else(|| CtxError::UnknownQualifier(name.to_string()))?;
        if !qualifier.qualifier_type.is_valid_condition_value(registries, value) {
            return Err(CtxError::InvalidConditionValue {
                qualifier: name.to_string(),
                value: value.to_string(),
            });
        }
        return Ok(Some(PathCondition { qualifier_name: name.to_string(), value: value.to_string() }));
    }

    // A bare `value` segment resolves to whichever qualifier accepts it
    // and declares itself reachable without its name (`tokenIsOptional`).
    let mut matches: Vec<&str> = qualifiers
        .iter()
        .filter(|(_, q)| q.token_is_optional)
        .filter(|(_, q)| q.qualifier_type.is_valid_condition_value(registries, segment))
        .map(|(name, _)| name.as_str())
        .collect();
    matches.sort_unstable();

    match matches.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(PathCondition { qualifier_name: (*only).to_string(), value: segment.to_string() })),
        many => Err(CtxError::Internal(format!(
            "segment {segment:?} is ambiguous across qualifiers {many:?}"
        ))),
    }
}

/// Parses a comma-separated filename condition suffix (`<cond>,<cond>`).
/// Every token must resolve to a known qualifier; unlike a bare
/// directory segment that doesn't match anything (kept as a literal path
/// component), an unresolved filename token is always an error.
pub fn parse_suffix(
    registries: &Registries,
    qualifiers: &HashMap<String, Qualifier>,
    suffix: &str,
) -> Result<Vec<PathCondition>> {
    suffix
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|token| {
            parse_segment(registries, qualifiers, token)?.ok_or_else(|| CtxError::ParseError {
                reason: format!("{token:?} does not resolve to any registered qualifier"),
                position: 0,
            })
        })
        .collect()
}
