//! Name validation

/// Strips surrounding whitespace and byte-order marks from a text input.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Validates the display name: anything but whitespace is accepted.
pub fn validate_name(name: &str) -> Result<(), String> {
    if trim_input(name).is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    Ok(())
}
