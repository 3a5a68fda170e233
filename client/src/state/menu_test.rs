use super::*;

#[test]
fn menu_state_default_collapsed() {
    assert!(!MenuState::default().expanded);
}

#[test]
fn toggle_flips_expanded() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.expanded);
    menu.toggle();
    assert!(!menu.expanded);
}

#[test]
fn close_after_toggle_collapses() {
    let mut menu = MenuState::default();
    menu.toggle();
    menu.close();
    assert!(!menu.expanded);
}

#[test]
fn close_is_idempotent() {
    let mut menu = MenuState::default();
    menu.close();
    menu.close();
    assert!(!menu.expanded);
}
