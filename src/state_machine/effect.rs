//! Effects produced by state transitions

/// Session mutations and collaborator calls to run after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remember the field name the next value belongs to
    SetCurrentKey(String),

    /// Insert a validated field into the payload and clear the current key
    AcceptField { key: String, value: String },

    /// Sign the payload and copy the token to the clipboard
    IssueToken,
}

impl Effect {
    pub fn accept_field(key: impl Into<String>, value: impl Into<String>) -> Self {
        Effect::AcceptField {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Check if executing this effect calls an external collaborator
    #[allow(dead_code)] // Used by property tests
    pub fn calls_collaborator(&self) -> bool {
        matches!(self, Effect::IssueToken)
    }
}
