use super::*;

#[test]
fn menus_start_closed() {
    let menus = MenuState::default();
    assert!(!menus.drawer_open);
    assert!(!menus.profile_open);
    assert!(!menus.create_open);
    assert!(!menus.any_open());
}

#[test]
fn toggles_are_independent() {
    let mut menus = MenuState::default();
    menus.toggle_profile();
    assert!(menus.profile_open);
    assert!(!menus.create_open);
    assert!(!menus.drawer_open);

    menus.toggle_create();
    assert!(menus.profile_open, "opening one menu leaves others alone");
    assert!(menus.create_open);
}

#[test]
fn toggle_twice_closes() {
    let mut menus = MenuState::default();
    menus.toggle_drawer();
    menus.toggle_drawer();
    assert!(!menus.drawer_open);
}

#[test]
fn close_all_resets_every_menu() {
    let mut menus = MenuState::default();
    menus.toggle_drawer();
    menus.toggle_profile();
    menus.toggle_create();
    assert!(menus.any_open());

    menus.close_all();
    assert_eq!(menus, MenuState::default());
}
