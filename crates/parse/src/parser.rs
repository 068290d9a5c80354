// SPDX-License-Identifier: MIT OR Apache-2.0

//! The BCP-47 subtag parser (§4.B).
//!
//! Splits a tag on `-`, then consumes subtags in the fixed order the
//! grammar requires: whole-tag grandfathered, primary language (or
//! private-use-only), up to three extlangs, script, region, variants,
//! extensions, private-use, and finally rejects anything left over.

use crate::cursor::Cursor;
use ctxres_core::{CtxError, ExtensionSubtag, Result, Subtags};
use ctxres_registry::Registries;

/// Parse `raw` into [`Subtags`] against `registries` (§4.B).
pub fn parse(registries: &Registries, raw: &str) -> Result<Subtags> {
    if raw.is_empty() {
        return Err(CtxError::ParseError { reason: "empty tag".into(), position: 0 });
    }
    let parts: Vec<&str> = raw.split('-').collect();
    if let Some((i, _)) = parts.iter().enumerate().find(|(_, p)| p.is_empty()) {
        let position: usize = parts[..i].iter().map(|p| p.len() + 1).sum();
        return Err(CtxError::ParseError { reason: "empty subtag".into(), position });
    }

    // Step 1: whole-tag grandfathered lookup consumes everything on success.
    if let Some(record) = registries.grandfathered().try_get(raw) {
        return Ok(Subtags { grandfathered: Some(record.subtag.clone()), ..Default::default() });
    }

    let cursor = Cursor::new(&parts);

    // Step 2: primary language, or private-use-only if the tag starts `x-`.
    if cursor.peek().is_some_and(|p| p.eq_ignore_ascii_case("x")) {
        let (_, cursor) = cursor.advance();
        let (private_use, cursor) = consume_private_use_body(cursor)?;
        if private_use.is_empty() {
            return Err(CtxError::ParseError {
                reason: "private-use prefix with no subtags".into(),
                position: cursor.byte_position(),
            });
        }
        expect_exhausted(cursor)?;
        return Ok(Subtags { private_use, ..Default::default() });
    }

    let Some(primary_raw) = cursor.peek() else {
        return Err(CtxError::ParseError { reason: "missing primary language".into(), position: 0 });
    };
    if !registries.language().is_well_formed(primary_raw) {
        return Err(CtxError::ParseError {
            reason: format!("{primary_raw:?} is not a well-formed primary language"),
            position: cursor.byte_position(),
        });
    }
    let (_, cursor) = cursor.advance();
    let primary_language = primary_raw.to_string();

    // Step 3: up to three extlangs.
    let (extlangs, cursor) = consume_extlangs(registries, cursor)?;

    // Step 4: script.
    let (script, cursor) = consume_one(cursor, |p| registries.script().is_well_formed(p));

    // Step 5: region.
    let (region, cursor) = consume_one(cursor, |p| registries.region().is_well_formed(p));

    // Step 6: zero-or-more variants.
    let (variants, cursor) = consume_while(cursor, |p| registries.variant().is_well_formed(p));

    // Step 7: zero-or-more extensions.
    let (extensions, cursor) = consume_extensions(registries, cursor)?;

    // Step 8: optional private-use.
    let (private_use, cursor) = consume_private_use(cursor)?;

    // Step 9: anything left over is an error.
    expect_exhausted(cursor)?;

    Ok(Subtags {
        primary_language: Some(primary_language),
        extlangs,
        script,
        region,
        variants,
        extensions,
        private_use,
        grandfathered: None,
    })
}

fn expect_exhausted(cursor: Cursor<'_>) -> Result<()> {
    if cursor.is_exhausted() {
        return Ok(());
    }
    Err(CtxError::ParseError {
        reason: format!("unexpected subtag {:?}", cursor.peek().unwrap_or_default()),
        position: cursor.byte_position(),
    })
}

fn consume_one<'a>(
    cursor: Cursor<'a>,
    well_formed: impl Fn(&str) -> bool,
) -> (Option<String>, Cursor<'a>) {
    match cursor.peek() {
        Some(p) if well_formed(p) => {
            let (_, next) = cursor.advance();
            (Some(p.to_string()), next)
        }
        _ => (None, cursor),
    }
}

fn consume_while<'a>(
    mut cursor: Cursor<'a>,
    well_formed: impl Fn(&str) -> bool,
) -> (Vec<String>, Cursor<'a>) {
    let mut out = Vec::new();
    while let Some(p) = cursor.peek() {
        if !well_formed(p) {
            break;
        }
        out.push(p.to_string());
        (_, cursor) = cursor.advance();
    }
    (out, cursor)
}

fn consume_extlangs<'a>(
    registries: &Registries,
    mut cursor: Cursor<'a>,
) -> Result<(smallvec::SmallVec<[String; 3]>, Cursor<'a>)> {
    let mut out = smallvec::SmallVec::new();
    while out.len() < 3 {
        match cursor.peek() {
            Some(p) if registries.extlang().is_well_formed(p) => {
                out.push(p.to_string());
                (_, cursor) = cursor.advance();
            }
            _ => break,
        }
    }
    if let Some(p) = cursor.peek() {
        if registries.extlang().is_well_formed(p) {
            return Err(CtxError::ParseError {
                reason: "more than three extlang subtags".into(),
                position: cursor.byte_position(),
            });
        }
    }
    Ok((out, cursor))
}

fn consume_extensions<'a>(
    registries: &Registries,
    mut cursor: Cursor<'a>,
) -> Result<(Vec<ExtensionSubtag>, Cursor<'a>)> {
    let mut out = Vec::new();
    loop {
        let Some(singleton) = cursor.peek() else { break };
        if !registries.extension().is_well_formed(singleton) {
            break;
        }
        // `x`/`X` is reserved for private-use and never an extension
        // singleton (the well-formed pattern already excludes it).
        let singleton_char = singleton.chars().next().expect("non-empty subtag");
        let (_, next) = cursor.advance();
        let (subtags, next) = consume_while(next, |p| well_formed_extension_subtag(p));
        if subtags.is_empty() {
            return Err(CtxError::ParseError {
                reason: format!("extension singleton {singleton:?} has no subtags"),
                position: next.byte_position(),
            });
        }
        out.push(ExtensionSubtag { singleton: singleton_char.to_ascii_lowercase(), subtags });
        cursor = next;
    }
    Ok((out, cursor))
}

fn well_formed_extension_subtag(p: &str) -> bool {
    (2..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Step 8: detects the `x` marker and, if present, consumes the
/// private-use body that follows it. A marker with no well-formed body is
/// a malformed-private-use error; no marker at all is simply "none here".
fn consume_private_use(cursor: Cursor<'_>) -> Result<(Vec<String>, Cursor<'_>)> {
    match cursor.peek() {
        Some(p) if p.eq_ignore_ascii_case("x") => {
            let (_, next) = cursor.advance();
            let (out, next) = consume_private_use_body(next)?;
            if out.is_empty() {
                return Err(CtxError::ParseError {
                    reason: "private-use prefix with no subtags".into(),
                    position: next.byte_position(),
                });
            }
            Ok((out, next))
        }
        _ => Ok((Vec::new(), cursor)),
    }
}

/// Consumes 1-8 alphanumeric subtags that follow an already-stripped `x`
/// marker (used directly by the private-use-only tag path, and indirectly
/// by [`consume_private_use`] once it has stripped the marker itself).
fn consume_private_use_body(mut cursor: Cursor<'_>) -> Result<(Vec<String>, Cursor<'_>)> {
    let mut out = Vec::new();
    while let Some(p) = cursor.peek() {
        if p.is_empty() || p.len() > 8 || !p.chars().all(|c| c.is_ascii_alphanumeric()) {
            if out.is_empty() {
                return Err(CtxError::ParseError {
                    reason: format!("malformed private-use subtag {p:?}"),
                    position: cursor.byte_position(),
                });
            }
            break;
        }
        out.push(p.to_string());
        (_, cursor) = cursor.advance();
    }
    Ok((out, cursor))
}
