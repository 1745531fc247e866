//! Button rows for staged actions and location lists.
use crate::constants::{MAX_BUTTON_ROWS, MAX_BUTTONS_PER_ROW};
use crate::exchange::{ActorId, Location};
use crate::interactions::ids;
use crate::ui::style::clamp_label;
use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;

pub struct Btn;
impl Btn {
    pub fn primary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(clamp_label(label))
            .style(ButtonStyle::Primary)
    }
    pub fn success(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(label)
            .style(ButtonStyle::Success)
    }
    pub fn secondary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(clamp_label(label))
            .style(ButtonStyle::Secondary)
    }
    pub fn danger(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(label)
            .style(ButtonStyle::Danger)
    }
}

/// Confirm / cancel pair shown under a staged action; only `owner` may press it.
pub fn confirm_row(owner: ActorId) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        Btn::success(&ids::confirm(owner), "✅ Confirm"),
        Btn::danger(&ids::cancel(owner), "❌ Cancel"),
    ])
}

/// One button per location, for picking where a request is served.
pub fn location_choice_rows(owner: ActorId, locations: &[Location]) -> Vec<CreateActionRow> {
    grid(
        locations
            .iter()
            .map(|l| Btn::primary(&ids::location_select(owner, l.id), &l.name))
            .collect(),
    )
}

/// Enable/disable buttons for the admin location list.
pub fn location_toggle_rows(locations: &[Location]) -> Vec<CreateActionRow> {
    grid(
        locations
            .iter()
            .map(|l| {
                if l.active {
                    Btn::secondary(&ids::location_toggle(l.id, false), &format!("🛑 Disable {}", l.name))
                } else {
                    Btn::secondary(&ids::location_toggle(l.id, true), &format!("▶️ Enable {}", l.name))
                }
            })
            .collect(),
    )
}

// Lays buttons out in rows, dropping whatever exceeds the message limit.
fn grid(buttons: Vec<CreateButton>) -> Vec<CreateActionRow> {
    buttons
        .chunks(MAX_BUTTONS_PER_ROW)
        .take(MAX_BUTTON_ROWS)
        .map(|chunk| CreateActionRow::Buttons(chunk.to_vec()))
        .collect()
}
