use exchange_desk_bot::exchange::Decision;
use exchange_desk_bot::exchange::intent::ButtonPress;
use exchange_desk_bot::interactions::ids::{
    FAMILY, ParsedButton, cancel, confirm, location_select, location_toggle, parse_button,
};

#[test]
fn parse_confirm_cancel_with_owner() {
    assert_eq!(
        parse_button(&confirm(42)),
        Some(ParsedButton { owner: Some(42), press: ButtonPress::Decision(Decision::Confirm) })
    );
    assert_eq!(
        parse_button(&cancel(42)),
        Some(ParsedButton { owner: Some(42), press: ButtonPress::Decision(Decision::Cancel) })
    );
}

#[test]
fn parse_location_buttons() {
    assert_eq!(
        parse_button(&location_select(42, 7)),
        Some(ParsedButton { owner: Some(42), press: ButtonPress::SelectLocation(7) })
    );
    assert_eq!(
        parse_button(&location_toggle(3, true)),
        Some(ParsedButton { owner: None, press: ButtonPress::ToggleLocation { id: 3, active: true } })
    );
    assert_eq!(
        parse_button(&location_toggle(3, false)),
        Some(ParsedButton { owner: None, press: ButtonPress::ToggleLocation { id: 3, active: false } })
    );
}

#[test]
fn every_id_belongs_to_the_family() {
    let big = u64::MAX;
    for id in [confirm(big), cancel(big), location_select(big, i32::MAX), location_toggle(1, true)] {
        assert!(id.starts_with(&format!("{FAMILY}_")), "{id}");
        assert!(id.len() <= 100, "custom_id too long: {id}");
    }
}

#[test]
fn parse_bad() {
    assert!(parse_button("desk_confirm").is_none());
    assert!(parse_button("desk_confirm_").is_none());
    assert!(parse_button("desk_confirm_0").is_none());
    assert!(parse_button("desk_cancel_x").is_none());
    assert!(parse_button("desk_loc_").is_none());
    assert!(parse_button("desk_loc_5").is_none());
    assert!(parse_button("desk_loc_5_x").is_none());
    assert!(parse_button("desk_loc_5_0").is_none());
    assert!(parse_button("desk_loc_x_4").is_none());
    assert!(parse_button("desk_loc_5_-4").is_none());
    assert!(parse_button("desk_admin_loc_enable_").is_none());
    assert!(parse_button("saga_confirm_5").is_none());
}
