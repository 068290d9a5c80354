// SPDX-License-Identifier: MIT OR Apache-2.0

//! Region containment (UN M49-style macro-regions) shared by the BCP-47
//! similarity matcher (§4.E step 5) and the `territory` qualifier type
//! (§4.G). Not part of the IANA subtag registry itself — the registry
//! only knows that `"US"` is a registered region, not that it sits under
//! Northern America under the Americas under the world.
//!
//! The table is a deliberately small slice of CLDR's territory
//! containment graph: enough to exercise the documented macro-region and
//! world-region behaviors without vendoring the full CLDR dataset.

/// The universal ancestor every region matches at `neutralRegion`/`exact`
/// per §4.E step 5 and §8's boundary behavior.
pub const WORLD: &str = "001";

const PARENT_OF: &[(&str, &str)] = &[
    ("US", "021"),
    ("CA", "021"),
    ("MX", "021"),
    ("021", "019"),
    ("419", "019"),
    ("019", "001"),
    ("GB", "150"),
    ("FR", "150"),
    ("DE", "150"),
    ("ES", "150"),
    ("IT", "150"),
    ("NL", "150"),
    ("PT", "150"),
    ("BE", "150"),
    ("CH", "150"),
    ("RU", "150"),
    ("150", "001"),
    ("CN", "030"),
    ("JP", "030"),
    ("KR", "030"),
    ("030", "142"),
    ("142", "001"),
    ("AU", "053"),
    ("NZ", "053"),
    ("053", "009"),
    ("009", "001"),
];

/// The immediate parent of `region`, if the table knows one.
pub fn parent_of(region: &str) -> Option<&'static str> {
    PARENT_OF
        .iter()
        .find(|(child, _)| child.eq_ignore_ascii_case(region))
        .map(|(_, parent)| *parent)
}

pub fn is_world(region: &str) -> bool {
    region.eq_ignore_ascii_case(WORLD)
}

/// Whether `ancestor` is `region` itself or one of its containing
/// macro-regions, walking the chain up to (and including) the world.
pub fn is_ancestor(ancestor: &str, region: &str) -> bool {
    if ancestor.eq_ignore_ascii_case(region) {
        return true;
    }
    let mut current = region.to_string();
    // The table has < 30 entries; a cycle would mean a data bug, not an
    // unbounded walk, so a generous step cap is enough to stay safe.
    for _ in 0..16 {
        match parent_of(&current) {
            Some(parent) => {
                if parent.eq_ignore_ascii_case(ancestor) {
                    return true;
                }
                current = parent.to_string();
            }
            None => return false,
        }
    }
    false
}
