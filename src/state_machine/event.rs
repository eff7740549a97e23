//! Events that drive the wizard forward

/// What the executor feeds into a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Advance a prompting or internal state, no input consumed
    Proceed,
    /// One line of user input, trailing newline already stripped
    Line(String),
}

impl Event {
    pub fn line(text: impl Into<String>) -> Self {
        Event::Line(text.into())
    }
}
