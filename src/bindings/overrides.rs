//! Manual corrections for table entries.

use super::types::{Mapping, Override};

/// Apply overrides to a parsed mapping.
///
/// Each override unconditionally replaces whatever the table said for its
/// pointer type. Applying the same list again yields the same mapping.
pub fn apply_overrides(mut mapping: Mapping, overrides: &[Override]) -> Mapping {
    for o in overrides {
        match mapping.insert(o.pointer_type.as_str(), o.member.as_str()) {
            Some(previous) if previous != o.member => tracing::debug!(
                "override {}: {} -> {}",
                o.pointer_type,
                previous,
                o.member
            ),
            Some(_) => {}
            None => tracing::debug!("override {}: added {}", o.pointer_type, o.member),
        }
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::parser::TableParser;
    use crate::test_support::fixtures;

    #[test]
    fn test_override_wins_over_table() {
        let mut mapping = Mapping::new();
        mapping.insert("K", "wrongName");

        let mapping = apply_overrides(mapping, &[Override::new("K", "rightName")]);
        assert_eq!(mapping.get("K"), Some("rightName"));
    }

    #[test]
    fn test_override_adds_missing_entry() {
        let mapping = apply_overrides(Mapping::new(), &[Override::new("K", "name")]);

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("K"), Some("name"));
    }

    #[test]
    fn test_overrides_idempotent() {
        let parsed = TableParser::default().parse(fixtures::TABLE);
        let overrides = Override::defaults();

        let once = apply_overrides(parsed, &overrides);
        let twice = apply_overrides(once.clone(), &overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_default_overrides_fix_profile_entries() {
        let parsed = TableParser::default().parse(fixtures::TABLE);
        assert_eq!(
            parsed.get("PNVENCGETENCODEPROFILEGUIDCOUNT"),
            Some("nvEncGetEncodeGUIDCount")
        );

        let mapping = apply_overrides(parsed, &Override::defaults());
        assert_eq!(
            mapping.get("PNVENCGETENCODEPROFILEGUIDCOUNT"),
            Some("nvEncGetEncodeProfileGUIDCount")
        );
        assert_eq!(
            mapping.get("PNVENCGETENCODEPROFILEGUIDS"),
            Some("nvEncGetEncodeProfileGUIDs")
        );
        // Untouched entries survive
        assert_eq!(
            mapping.get("PNVENCGETENCODEGUIDCOUNT"),
            Some("nvEncGetEncodeGUIDCount")
        );
    }
}
