//! Integration tests for the add-ticker form lifecycle
//!
//! The form is a modal dialog: Tab moves between fields, symbols upper-case
//! as they are typed, and validation runs before anything is sent.

use sentitui::logic::ticker::{normalize_symbol, validate_form};
use sentitui::model::types::{AssetType, FormField, TickerFormState};
use sentitui::model::Model;

/// Test: opening the form starts on the symbol field
#[test]
fn test_form_opens_on_symbol_field() {
    let mut model = Model::new(false);
    model.ui.ticker_form = Some(TickerFormState::default());

    let form = model.ui.ticker_form.as_ref().unwrap();
    assert_eq!(form.focus, FormField::Symbol);
    assert_eq!(form.asset_type, AssetType::Stock);
    assert!(!form.submitting);
    assert!(model.has_modal());
}

/// Test: Tab cycles through all three fields and wraps
#[test]
fn test_field_focus_cycles() {
    let mut form = TickerFormState::default();

    form.focus = form.focus.next();
    assert_eq!(form.focus, FormField::Name);
    form.focus = form.focus.next();
    assert_eq!(form.focus, FormField::AssetType);
    form.focus = form.focus.next();
    assert_eq!(form.focus, FormField::Symbol);

    form.focus = form.focus.prev();
    assert_eq!(form.focus, FormField::AssetType);
}

/// Test: typed symbols upper-case as they are entered
#[test]
fn test_symbol_uppercases_while_typing() {
    let mut form = TickerFormState::default();

    // Handler logic: each typed char is pushed upper-cased
    for c in "gme".chars() {
        form.symbol.push(c.to_ascii_uppercase());
    }
    assert_eq!(form.symbol, "GME");

    // Backspace removes the last char
    form.symbol.pop();
    assert_eq!(form.symbol, "GM");
}

/// Test: asset type toggles between stock and crypto
#[test]
fn test_asset_type_toggle() {
    let mut form = TickerFormState::default();
    assert_eq!(form.asset_type.as_str(), "stock");

    form.asset_type = form.asset_type.toggle();
    assert_eq!(form.asset_type.as_str(), "crypto");

    form.asset_type = form.asset_type.toggle();
    assert_eq!(form.asset_type.as_str(), "stock");
}

/// Test: submit validation rejects bad input with a usable message
#[test]
fn test_submit_validation() {
    // Empty symbol
    assert!(validate_form("", "GameStop").is_err());

    // Whitespace-only name
    assert!(validate_form("GME", "   ").is_err());

    // Symbol with illegal characters
    let err = validate_form("GM E", "GameStop").unwrap_err();
    assert!(err.contains("GM E"));

    // Normalized input passes
    let symbol = normalize_symbol("  gme ");
    assert!(validate_form(&symbol, "GameStop").is_ok());
}

/// Test: a failed submit re-enables the form, a success closes it
#[test]
fn test_submit_result_lifecycle() {
    let mut model = Model::new(false);
    let mut form = TickerFormState::default();
    form.symbol = "GME".to_string();
    form.name = "GameStop".to_string();
    form.submitting = true;
    model.ui.ticker_form = Some(form);

    // Handler logic on AddTickerResult Err: keep the form, clear the flag
    if let Some(form) = model.ui.ticker_form.as_mut() {
        form.submitting = false;
    }
    assert!(model.ui.ticker_form.is_some());
    assert!(!model.ui.ticker_form.as_ref().unwrap().submitting);

    // Handler logic on AddTickerResult Ok: close the form, toast
    model.ui.ticker_form = None;
    model.show_toast("Added GME".to_string());
    assert!(!model.has_modal());
    assert!(model.ui.toast_message.is_some());
}
