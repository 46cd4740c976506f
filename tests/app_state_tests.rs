//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - RoutineForm validation behavior
//! - ChatState pending-entry lifecycle (id-keyed typing indicators)

use skintui::app::{AppMode, AppState, ChatRole, ChatState, RoutineForm};
use skintui::catalog::{Catalog, Product};
use skintui::chat::FALLBACK_REPLY;
use skintui::types::{AgeRange, RoutineStep, SkinType};

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_main_menu() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::MainMenu);
}

#[test]
fn test_app_state_default_has_welcome_message() {
    let state = AppState::default();
    assert!(state.status_message.contains("Welcome"));
}

#[test]
fn test_app_state_default_selections_are_zero() {
    let state = AppState::default();
    assert_eq!(state.main_menu_selection, 0);
    assert_eq!(state.form.selected_field, 0);
}

#[test]
fn test_app_state_default_help_not_visible() {
    let state = AppState::default();
    assert!(!state.help_visible);
}

#[test]
fn test_app_state_default_has_no_routine() {
    let state = AppState::default();
    assert!(state.routine.is_none());
    assert!(state.chat.entries.is_empty());
}

#[test]
fn test_app_state_reports_catalog_size_in_status() {
    let catalog = Catalog::new(vec![Product {
        name: "Gentle Cleanser".to_string(),
        step: RoutineStep::Cleanser,
        skin_types: vec!["dry".to_string()],
        age_ranges: vec!["30-39".to_string()],
        concerns: vec!["dryness".to_string()],
        image: None,
        description: String::new(),
    }]);
    let state = AppState::with_catalog(catalog);
    assert!(state.status_message.contains("1 product loaded"));
}

// =============================================================================
// RoutineForm Validation Tests
// =============================================================================

#[test]
fn test_empty_form_yields_no_profile() {
    let form = RoutineForm::default();
    assert!(form.profile().is_none());
}

#[test]
fn test_form_with_missing_concerns_yields_no_profile() {
    let form = RoutineForm {
        skin_type: Some(SkinType::Oily),
        age_range: Some(AgeRange::Twenties),
        concerns: "   ".to_string(),
        selected_field: 0,
    };
    assert!(form.profile().is_none());
}

#[test]
fn test_form_with_missing_skin_type_yields_no_profile() {
    let form = RoutineForm {
        skin_type: None,
        age_range: Some(AgeRange::Twenties),
        concerns: "acne".to_string(),
        selected_field: 0,
    };
    assert!(form.profile().is_none());
}

#[test]
fn test_complete_form_yields_trimmed_profile() {
    let form = RoutineForm {
        skin_type: Some(SkinType::Oily),
        age_range: Some(AgeRange::Twenties),
        concerns: "  acne and redness  ".to_string(),
        selected_field: 0,
    };
    let profile = form.profile().unwrap();
    assert_eq!(profile.skin_type, SkinType::Oily);
    assert_eq!(profile.age_range, AgeRange::Twenties);
    assert_eq!(profile.concerns, "acne and redness");
}

#[test]
fn test_form_selection_movement_stays_in_bounds() {
    let mut form = RoutineForm::default();
    form.move_up();
    assert_eq!(form.selected_field, 0);

    for _ in 0..10 {
        form.move_down();
    }
    assert_eq!(form.selected_field, RoutineForm::BUILD_ROW);
}

// =============================================================================
// ChatState Tests
// =============================================================================

#[test]
fn test_begin_request_appends_user_and_pending_entries() {
    let mut chat = ChatState::default();
    let id = chat.begin_request("is toner necessary?");

    assert_eq!(chat.entries.len(), 2);
    assert_eq!(chat.entries[0].role, ChatRole::User);
    assert_eq!(chat.entries[0].text, "is toner necessary?");
    assert_eq!(chat.entries[1].role, ChatRole::Advisor);
    assert_eq!(chat.entries[1].pending_id, Some(id));
    assert!(chat.has_pending());
}

#[test]
fn test_resolve_fills_the_matching_entry() {
    let mut chat = ChatState::default();
    let id = chat.begin_request("hello");

    assert!(chat.resolve(id, "Hi! How can I help your skin today?"));
    assert_eq!(chat.entries[1].text, "Hi! How can I help your skin today?");
    assert!(!chat.entries[1].is_pending());
    assert!(!chat.has_pending());

    // A second resolve for the same id finds nothing
    assert!(!chat.resolve(id, "duplicate"));
}

#[test]
fn test_fail_uses_the_fixed_fallback_string() {
    let mut chat = ChatState::default();
    let id = chat.begin_request("hello");

    assert!(chat.fail(id));
    assert_eq!(chat.entries[1].text, FALLBACK_REPLY);
    assert_eq!(
        chat.entries[1].text,
        "Sorry, something went wrong. Please try again."
    );
}

#[test]
fn test_concurrent_requests_resolve_their_own_placeholders() {
    let mut chat = ChatState::default();
    let first = chat.begin_request("first question");
    let second = chat.begin_request("second question");
    assert_ne!(first, second);

    // The SECOND reply arrives first and must only touch its own entry
    assert!(chat.resolve(second, "second answer"));
    assert!(chat.entries[1].is_pending());
    assert_eq!(chat.entries[3].text, "second answer");

    assert!(chat.fail(first));
    assert_eq!(chat.entries[1].text, FALLBACK_REPLY);
    assert!(!chat.has_pending());
}

#[test]
fn test_new_request_resets_scrollback() {
    let mut chat = ChatState::default();
    chat.scroll_back = 12;
    chat.begin_request("hello");
    assert_eq!(chat.scroll_back, 0);
}
