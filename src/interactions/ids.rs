//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and keeps the parse side next to the build side.
//!
//! Buttons that resolve a per-actor slot carry the owner's id, so a press by
//! anyone else can be refused before it touches the workflow.

use crate::exchange::intent::ButtonPress;
use crate::exchange::{ActorId, Decision};

/// Component family prefix; the router dispatches on the segment before the first `_`.
pub const FAMILY: &str = "desk";

pub const CONFIRM_PREFIX: &str = "desk_confirm_"; // followed by owner id
pub const CANCEL_PREFIX: &str = "desk_cancel_"; // followed by owner id
pub const LOCATION_SELECT_PREFIX: &str = "desk_loc_"; // followed by owner id, `_`, location id
pub const LOCATION_ENABLE_PREFIX: &str = "desk_admin_loc_enable_"; // followed by location id
pub const LOCATION_DISABLE_PREFIX: &str = "desk_admin_loc_disable_"; // followed by location id

/// A parsed custom id. `owner` is `None` for buttons anyone with the role may press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedButton {
    pub owner: Option<ActorId>,
    pub press: ButtonPress,
}

pub fn confirm(owner: ActorId) -> String {
    format!("{CONFIRM_PREFIX}{owner}")
}

pub fn cancel(owner: ActorId) -> String {
    format!("{CANCEL_PREFIX}{owner}")
}

pub fn location_select(owner: ActorId, id: i32) -> String {
    format!("{LOCATION_SELECT_PREFIX}{owner}_{id}")
}

pub fn location_toggle(id: i32, active: bool) -> String {
    let prefix = if active {
        LOCATION_ENABLE_PREFIX
    } else {
        LOCATION_DISABLE_PREFIX
    };
    format!("{prefix}{id}")
}

/// Parse a component custom_id into the button it stands for.
pub fn parse_button(id: &str) -> Option<ParsedButton> {
    if let Some(rest) = id.strip_prefix(CONFIRM_PREFIX) {
        return owned(rest, ButtonPress::Decision(Decision::Confirm));
    }
    if let Some(rest) = id.strip_prefix(CANCEL_PREFIX) {
        return owned(rest, ButtonPress::Decision(Decision::Cancel));
    }
    if let Some(rest) = id.strip_prefix(LOCATION_SELECT_PREFIX) {
        let (owner, location) = rest.split_once('_')?;
        let location = parse_location_id(location)?;
        return owned(owner, ButtonPress::SelectLocation(location));
    }
    if let Some(rest) = id.strip_prefix(LOCATION_ENABLE_PREFIX) {
        return unowned(parse_location_id(rest)?, true);
    }
    if let Some(rest) = id.strip_prefix(LOCATION_DISABLE_PREFIX) {
        return unowned(parse_location_id(rest)?, false);
    }
    None
}

fn owned(owner: &str, press: ButtonPress) -> Option<ParsedButton> {
    let owner = owner.parse::<ActorId>().ok().filter(|id| *id > 0)?;
    Some(ParsedButton {
        owner: Some(owner),
        press,
    })
}

fn unowned(id: i32, active: bool) -> Option<ParsedButton> {
    Some(ParsedButton {
        owner: None,
        press: ButtonPress::ToggleLocation { id, active },
    })
}

fn parse_location_id(s: &str) -> Option<i32> {
    s.parse::<i32>().ok().filter(|id| *id > 0)
}
