use crate::{ALL_COLUMN_KINDS, ColumnKind, ComparePolicy};

#[test]
fn registry_lists_every_kind_once_in_declaration_order() {
    assert_eq!(
        ALL_COLUMN_KINDS,
        [
            ColumnKind::Text,
            ColumnKind::Decimal,
            ColumnKind::Real,
            ColumnKind::Integer,
        ]
    );
}

#[test]
fn decimal_shares_the_text_byte_policy() {
    assert_eq!(ColumnKind::Text.policy(), ComparePolicy::Bytes);
    assert_eq!(ColumnKind::Decimal.policy(), ComparePolicy::Bytes);
    assert!(ColumnKind::Decimal.is_textual());
}

#[test]
fn numeric_kinds_use_distinct_policies() {
    assert_eq!(ColumnKind::Real.policy(), ComparePolicy::Tolerance);
    assert_eq!(ColumnKind::Integer.policy(), ComparePolicy::Exact);
    assert!(!ColumnKind::Real.is_textual());
    assert!(!ColumnKind::Integer.is_textual());
}

#[test]
fn labels_match_display() {
    for kind in ALL_COLUMN_KINDS {
        assert_eq!(kind.to_string(), kind.label());
    }
}
