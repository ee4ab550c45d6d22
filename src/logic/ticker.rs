//! Ticker symbol validation
//!
//! The server upper-cases symbols on every route, so the form does the same
//! before submitting.

/// Normalize a user-entered symbol: trim whitespace and uppercase.
pub fn normalize_symbol(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Check a normalized symbol: 1-10 chars, ASCII alphanumeric plus '-' and '.'
/// (covers crypto pairs like BTC-USD and class shares like BRK.B).
pub fn is_valid_symbol(symbol: &str) -> bool {
    if symbol.is_empty() || symbol.len() > 10 {
        return false;
    }
    symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

/// Validate the add-ticker form. Returns a user-facing message on failure.
pub fn validate_form(symbol: &str, name: &str) -> Result<(), String> {
    if symbol.is_empty() {
        return Err("Ticker symbol is required".to_string());
    }
    if !is_valid_symbol(symbol) {
        return Err(format!("Invalid ticker symbol: {}", symbol));
    }
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(())
}
