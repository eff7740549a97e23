//! Text shown to the user at each prompting state

pub const STARTING: &str = "Starting with JWT token generation.";
pub const ASKING_FOR_MORE_DATA: &str = "Any additional inputs? (y/n)";
pub const ASKING_ANOTHER: &str = "Generate another token? (y/n)";
pub const TOKEN_COPIED: &str = "The JWT has been copied to your clipboard!";

/// `position` is 1-based: accepted fields so far plus one
pub fn asking_for_key(position: usize) -> String {
    format!("Enter key {position}")
}

pub fn asking_for_value(key: &str) -> String {
    format!("Enter {key} value")
}

pub fn invalid_value(key: &str) -> String {
    format!("Invalid {key} entered!")
}

/// Yes/no answers only look at the first character. Anything that does not
/// start with `y`, including an empty line, is a no.
pub fn is_yes(answer: &str) -> bool {
    answer
        .chars()
        .next()
        .is_some_and(|c| c.to_lowercase().eq(['y']))
}
