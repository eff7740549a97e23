//! Startup configuration
//!
//! The secret comes from the first argument or `JWIZARD_SECRET`, falling back
//! to random bytes. Required fields come from `JWIZARD_REQUIRED_FIELDS`.

use crate::state_machine::Secret;
use std::ffi::OsString;

/// Fields a token must carry unless overridden
pub const DEFAULT_REQUIRED_FIELDS: [&str; 2] = ["user_id", "email"];

/// Length of the generated secret when none is supplied
pub const RANDOM_SECRET_LEN: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardConfig {
    /// Explicit signing secret, raw bytes. An empty override is still an override.
    pub secret: Option<Vec<u8>>,
    pub required_fields: Vec<String>,
}

impl WizardConfig {
    /// Build from process arguments (without the program name) and the environment
    pub fn from_env(args: impl IntoIterator<Item = OsString>) -> Self {
        Self::from_sources(args, |key| std::env::var_os(key))
    }

    fn from_sources(
        args: impl IntoIterator<Item = OsString>,
        env: impl Fn(&str) -> Option<OsString>,
    ) -> Self {
        let secret = args
            .into_iter()
            .next()
            .or_else(|| env("JWIZARD_SECRET"))
            .map(OsString::into_encoded_bytes);

        let required_fields = env("JWIZARD_REQUIRED_FIELDS").map_or_else(
            || DEFAULT_REQUIRED_FIELDS.map(String::from).to_vec(),
            |list| parse_field_list(&list.to_string_lossy()),
        );

        Self {
            secret,
            required_fields,
        }
    }

    /// The configured secret, or a freshly generated one
    pub fn resolve_secret(&self) -> Secret {
        match &self.secret {
            Some(secret) => Secret::new(secret.as_slice()),
            None => {
                tracing::info!("No secret supplied, generating a random one");
                Secret::new(rand::random::<[u8; RANDOM_SECRET_LEN]>())
            }
        }
    }
}

fn parse_field_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(String::from)
        .collect()
}
