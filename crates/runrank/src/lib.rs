//! ## Crate layout
//! - `core`: column values, slots, the streak tracker, host lifecycle, and observability.
//! - `primitives`: column-kind taxonomy and comparison-policy metadata.
//!
//! The `prelude` module mirrors the surface a host adapter needs to drive
//! one streak function through init, rows, and teardown.

pub use runrank_core as core;
pub use runrank_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{REAL_TOLERANCE, TEXT_CAPACITY, error::SetupError};

///
/// Host Prelude
///

pub mod prelude {
    pub use crate::core::{
        config::TrackerConfig,
        error::SetupError,
        prelude::*,
        udf::{FunctionDescriptor, HostArg, HostType, OutputSpec, RankFunction, TeardownReport},
    };
    pub use crate::primitives::ComparePolicy;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_drives_a_function_end_to_end() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"function_name":"streak"}"#).expect("config should parse");
        let mut function = RankFunction::init(config, &[HostType::Int]).expect("setup should succeed");
        let seven = 7_i64.to_ne_bytes();

        let outputs = (0..3)
            .map(|_| function.row(&[Some(&seven[..])]))
            .collect::<Vec<_>>();

        assert_eq!(outputs, vec![0, 1, 2]);
        assert_eq!(
            function.descriptor().create_sql(),
            "CREATE AGGREGATE FUNCTION streak RETURNS STRING SONAME 'udf_rank.so'"
        );
        assert_eq!(function.teardown().rows_observed, 3);
    }

    #[test]
    fn version_is_exported() {
        assert!(!super::VERSION.is_empty());
    }
}
