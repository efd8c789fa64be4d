use super::*;
use crate::model::sample_records;
use crate::screens::order_form::OrderFormScreen;
use crate::screens::order_list::OrderListScreen;
use crate::ui::apply_effects;
use crossterm::event::KeyCode;

fn press(state: &mut AppState, key: KeyCode) {
    let effects = update(state, AppMsg::Key(key));
    apply_effects(state, effects);
}

fn state_with_list() -> AppState {
    let mut state = AppState::default();
    state
        .stack
        .push(Box::new(OrderListScreen::new("Order Records", sample_records())));
    state
}

#[test]
fn enter_opens_menu_built_by_top_screen() {
    let mut state = state_with_list();
    let record = sample_records()[0].clone();
    state.stack.push(Box::new(OrderFormScreen::new(record, false)));
    press(&mut state, KeyCode::Enter);
    let menu = state.menu.as_ref().unwrap();
    assert!(menu.contains(MenuAction::Close));
    assert!(menu.contains(MenuAction::Edit));
    assert!(!menu.contains(MenuAction::Save));
}

#[test]
fn menu_esc_closes_without_dispatching() {
    let mut state = state_with_list();
    press(&mut state, KeyCode::Enter);
    assert!(state.menu.is_some());
    press(&mut state, KeyCode::Esc);
    assert!(state.menu.is_none());
    assert_eq!(state.stack.len(), 1);
}

#[test]
fn menu_close_entry_pops_the_screen() {
    let mut state = state_with_list();
    let record = sample_records()[0].clone();
    state.stack.push(Box::new(OrderFormScreen::new(record, false)));
    press(&mut state, KeyCode::Enter);
    // first entry is Close
    press(&mut state, KeyCode::Enter);
    assert!(state.menu.is_none());
    assert_eq!(state.stack.len(), 1);
}

#[test]
fn save_flow_hands_record_back_to_the_list() {
    let mut state = state_with_list();
    let record = sample_records()[0].clone();
    let original_quantity = record.quantity;
    state.stack.push(Box::new(OrderFormScreen::new(record, true)));
    // edit the quantity field in place: select it, clear one digit, type 7
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Char('7'));
    // open the menu and run Save (second entry after Close)
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);
    assert!(state.menu.is_none());
    assert_eq!(state.stack.len(), 1);
    assert!(state.toast.is_some());
    let list = state.stack[0]
        .as_any()
        .downcast_ref::<OrderListScreen>()
        .unwrap();
    assert_eq!(list.records()[0].quantity, 7);
    assert_ne!(list.records()[0].quantity, original_quantity);
}

#[test]
fn closing_without_save_leaves_the_list_untouched() {
    let mut state = state_with_list();
    let record = sample_records()[0].clone();
    state.stack.push(Box::new(OrderFormScreen::new(record, true)));
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Backspace);
    press(&mut state, KeyCode::Char('7'));
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.stack.len(), 1);
    let list = state.stack[0]
        .as_any()
        .downcast_ref::<OrderListScreen>()
        .unwrap();
    assert_eq!(list.records(), sample_records().as_slice());
}

#[test]
fn default_handling_pops_and_quits_at_the_root() {
    let mut state = state_with_list();
    press(&mut state, KeyCode::Esc);
    assert!(state.stack.is_empty());
    assert!(state.should_quit);
}

#[test]
fn q_quits_from_the_list() {
    let mut state = state_with_list();
    press(&mut state, KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn toast_expiry_is_tick_based() {
    let mut state = state_with_list();
    apply_effects(
        &mut state,
        vec![Effect::Toast {
            text: "saved".into(),
            level: ToastLevel::Success,
            seconds: 1,
        }],
    );
    let toast = state.toast.as_ref().unwrap();
    assert_eq!(toast.expires_at_tick, 5);
}

#[test]
fn menu_dispatch_pushes_form_from_list() {
    let mut state = state_with_list();
    press(&mut state, KeyCode::Enter);
    // entries: Close, View, Edit
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.stack.len(), 2);
    let form = state.stack[1]
        .as_any()
        .downcast_ref::<OrderFormScreen>()
        .unwrap();
    assert!(!form.is_editable());
    assert_eq!(form.title(), "View Order Record");
}
