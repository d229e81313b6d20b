#[macro_export]
macro_rules! column_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Text,
                Bytes,
                label = "Text",
                is_textual = true
            ),
            (
                Decimal,
                Bytes,
                label = "Decimal",
                is_textual = true
            ),
            (
                Real,
                Tolerance,
                label = "Real",
                is_textual = false
            ),
            (
                Integer,
                Exact,
                label = "Integer",
                is_textual = false
            ),
        }
    };
}

#[macro_export]
macro_rules! column_kind_registry {
    ($macro:ident) => {
        $crate::column_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::column_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($column:ident, $policy:ident, label = $label:expr, is_textual = $is_textual:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ColumnKind::$column => $crate::ColumnMetadata {
                    label: $label,
                    policy: $crate::ComparePolicy::$policy,
                    is_textual: $is_textual,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($column:ident, $policy:ident, label = $label:expr, is_textual = $is_textual:expr) ),* $(,)? ) => {
        [ $( $crate::ColumnKind::$column ),* ]
    };
    ( @args $($ignore:tt)*; @entries $( ($column:ident, $policy:ident, label = $label:expr, is_textual = $is_textual:expr) ),* $(,)? ) => {
        [ $( $crate::ColumnKind::$column ),* ]
    };
}
