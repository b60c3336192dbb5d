use crate::client::{Navigator, TerminalNavigator};

#[test]
fn test_navigator_starts_at_initial_screen() {
    let navigator = TerminalNavigator::new("/inventory");

    assert_eq!(navigator.location(), "/inventory");
}

#[test]
fn test_navigate_moves_location() {
    let navigator = TerminalNavigator::new("/inventory");

    navigator.navigate("/login");

    assert_eq!(navigator.location(), "/login");
}
