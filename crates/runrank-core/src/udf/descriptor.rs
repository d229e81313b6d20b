use crate::config::TrackerConfig;

/// Shared object the host loads the function from.
pub const SHARED_OBJECT: &str = "udf_rank.so";

/// Declared SQL return type of the function.
pub const RETURN_TYPE: &str = "STRING";

///
/// FunctionDescriptor
///
/// Catalog registration details for one streak function.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionDescriptor {
    pub name: String,
    pub returns: &'static str,
    pub soname: &'static str,
}

impl FunctionDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: RETURN_TYPE,
            soname: SHARED_OBJECT,
        }
    }

    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.function_name.clone())
    }

    /// Statement registering the function with the host catalog.
    #[must_use]
    pub fn create_sql(&self) -> String {
        format!(
            "CREATE AGGREGATE FUNCTION {} RETURNS {} SONAME '{}'",
            self.name, self.returns, self.soname
        )
    }

    /// Statement removing the function from the host catalog.
    #[must_use]
    pub fn drop_sql(&self) -> String {
        format!("DROP FUNCTION {}", self.name)
    }
}

impl Default for FunctionDescriptor {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}
