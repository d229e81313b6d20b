use crate::value::{ColumnKind, ColumnValue};

#[test]
fn null_carries_no_kind() {
    assert!(ColumnValue::Null.is_null());
    assert_eq!(ColumnValue::Null.kind(), None);
}

#[test]
fn decimal_and_text_expose_their_bytes() {
    assert_eq!(ColumnValue::decimal("1.50").kind(), Some(ColumnKind::Decimal));
    assert_eq!(ColumnValue::decimal("1.50").as_text_bytes(), Some(&b"1.50"[..]));
    assert_eq!(ColumnValue::text("a").as_text_bytes(), Some(&b"a"[..]));
    assert_eq!(ColumnValue::Integer(1).as_text_bytes(), None);
}

#[test]
fn option_conversion_maps_none_to_null() {
    let missing: Option<i64> = None;

    assert_eq!(ColumnValue::from(missing), ColumnValue::Null);
    assert_eq!(ColumnValue::from(Some(7_i64)), ColumnValue::Integer(7));
    assert_eq!(ColumnValue::from(Some(2.5_f64)), ColumnValue::Real(2.5));
    assert_eq!(ColumnValue::from(Some("x")), ColumnValue::Text(b"x"));
}
