use super::*;

#[test]
fn service_detail_default_closed() {
    let state = ServiceDetailState::default();
    assert!(!state.is_open());
    assert_eq!(state.selected, None);
}

#[test]
fn open_selects_card() {
    let mut state = ServiceDetailState::default();
    state.open(2);
    assert!(state.is_open());
    assert_eq!(state.selected, Some(2));
}

#[test]
fn open_replaces_previous_selection() {
    let mut state = ServiceDetailState::default();
    state.open(0);
    state.open(3);
    assert_eq!(state.selected, Some(3));
}

#[test]
fn close_clears_selection_and_is_idempotent() {
    let mut state = ServiceDetailState::default();
    state.open(1);
    state.close();
    assert!(!state.is_open());
    state.close();
    assert_eq!(state, ServiceDetailState::default());
}
