//! Field validators keyed by payload field name
//!
//! A field without a registered validator accepts any value.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Predicate deciding whether a value is acceptable for a field
pub type Validator = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Loose email shape: local part, `@`, dotted domain, alphabetic top-level label
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A([0-9a-z_+\-].?)+@[a-z0-9\-]+(\.[a-z]+)*\.[a-z]+\z")
        .expect("email pattern compiles")
});

static SHARED: LazyLock<Arc<ValidatorRegistry>> =
    LazyLock::new(|| Arc::new(ValidatorRegistry::builtin()));

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Immutable table of validators, looked up by exact field name
pub struct ValidatorRegistry {
    validators: HashMap<String, Validator>,
}

impl ValidatorRegistry {
    /// Registry with no validators: every value is accepted
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Registry with the built-in validators
    pub fn builtin() -> Self {
        Self::empty().with_validator("email", is_email)
    }

    /// Process-wide built-in registry, initialized on first use
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    pub fn with_validator(
        mut self,
        field: impl Into<String>,
        validator: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.validators.insert(field.into(), Box::new(validator));
        self
    }

    pub fn validate(&self, field: &str, value: &str) -> bool {
        self.validators
            .get(field)
            .is_none_or(|validator| validator(value))
    }

    /// Field names with a registered validator, sorted
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<_> = self.validators.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("fields", &self.fields())
            .finish()
    }
}
