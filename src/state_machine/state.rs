//! Wizard state types

use crate::validators::ValidatorRegistry;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Machine State
// ============================================================================

/// Position of the wizard in the conversation.
///
/// Prompting states emit a message and move on without input, reading states
/// consume exactly one line, `Validating` is a decision point with no I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardState {
    /// Beginning of a round, prints the banner
    #[default]
    Start,
    AskingForKey,
    ReadingKey,
    AskingForValue,
    ReadingValue,
    /// Checks the payload against the required fields
    Validating,
    AskingForMoreData,
    ReadingMoreData,
    AskingAnother,
    ReadingAnother,
    /// Terminal: the driving loop stops here
    Done,
}

impl WizardState {
    #[allow(dead_code)] // Enumerated by the property tests
    pub const ALL: [WizardState; 11] = [
        WizardState::Start,
        WizardState::AskingForKey,
        WizardState::ReadingKey,
        WizardState::AskingForValue,
        WizardState::ReadingValue,
        WizardState::Validating,
        WizardState::AskingForMoreData,
        WizardState::ReadingMoreData,
        WizardState::AskingAnother,
        WizardState::ReadingAnother,
        WizardState::Done,
    ];

    /// Check if the conversation is over
    pub fn is_terminal(self) -> bool {
        matches!(self, WizardState::Done)
    }

    /// Check if advancing from this state consumes a line of input
    pub fn reads_input(self) -> bool {
        matches!(
            self,
            WizardState::ReadingKey
                | WizardState::ReadingValue
                | WizardState::ReadingMoreData
                | WizardState::ReadingAnother
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WizardState::Start => "start",
            WizardState::AskingForKey => "asking_for_key",
            WizardState::ReadingKey => "reading_key",
            WizardState::AskingForValue => "asking_for_value",
            WizardState::ReadingValue => "reading_value",
            WizardState::Validating => "validating",
            WizardState::AskingForMoreData => "asking_for_more_data",
            WizardState::ReadingMoreData => "reading_more_data",
            WizardState::AskingAnother => "asking_another",
            WizardState::ReadingAnother => "reading_another",
            WizardState::Done => "done",
        }
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Claims collected so far, in the order they were entered.
///
/// Serializes as a flat JSON object of strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field. Overwriting keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Value::String(value.into()));
    }

    #[allow(dead_code)] // Used by tests
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)] // API completeness
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)] // Used by tests
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::new();
        for (key, value) in iter {
            payload.insert(key, value);
        }
        payload
    }
}

// ============================================================================
// Session
// ============================================================================

/// Signing secret, kept out of `Debug` output
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({} bytes)", self.0.len())
    }
}

/// Mutable context of one wizard run.
///
/// Only the executor mutates a session, and only by applying the effects
/// returned from `transition`.
#[derive(Debug, Clone)]
pub struct Session {
    pub state: WizardState,
    /// Field name being collected, set in `reading_key`
    pub current_key: Option<String>,
    pub payload: Payload,
    required_fields: BTreeSet<String>,
    secret: Secret,
    validators: Arc<ValidatorRegistry>,
}

impl Session {
    pub fn new<F>(required_fields: impl IntoIterator<Item = F>, secret: Secret) -> Self
    where
        F: Into<String>,
    {
        Self {
            state: WizardState::Start,
            current_key: None,
            payload: Payload::new(),
            required_fields: required_fields.into_iter().map(Into::into).collect(),
            secret,
            validators: ValidatorRegistry::shared(),
        }
    }

    /// Replace the process-wide validator registry for this session
    #[allow(dead_code)] // Used by tests
    pub fn with_validators(mut self, validators: Arc<ValidatorRegistry>) -> Self {
        self.validators = validators;
        self
    }

    pub fn required_fields(&self) -> &BTreeSet<String> {
        &self.required_fields
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    /// Required fields not yet present in the payload
    pub fn missing_fields(&self) -> Vec<&str> {
        self.required_fields
            .iter()
            .map(String::as_str)
            .filter(|field| !self.payload.contains_key(field))
            .collect()
    }

    pub fn has_required_fields(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
