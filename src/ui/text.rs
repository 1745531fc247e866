//! Message bodies for the desk's replies.

use crate::constants::{MAX_MESSAGE_CHARS, RATE_TIME_FORMAT};
use crate::exchange::validate::REQUEST_EXAMPLE;
use crate::exchange::{Actor, Applied, ExchangeRequest, Location, PendingAction, Rate};
use crate::ui::style::{EMOJI_ACTIVE, EMOJI_INACTIVE, EMOJI_OK, EMOJI_PIN, EMOJI_RATE, EMOJI_WARN};
use chrono::Local;
use std::fmt::Write;

const CONFIRM_HINT: &str = "Press confirm or cancel.";

/// Preview shown next to the confirm/cancel buttons.
pub fn staged_preview(action: &PendingAction) -> String {
    match action {
        PendingAction::SetRate { buy, sell } => {
            format!("{EMOJI_WARN} Confirm the new rate:\n\nBuy: {buy}\nSell: {sell}\n\n{CONFIRM_HINT}")
        }
        PendingAction::AddUser { id, role, username } => {
            format!("Add user?\nID={id}\nRole={role}\nUsername={username}\n\n{CONFIRM_HINT}")
        }
        PendingAction::DeleteUser { id } => format!("Delete user {id}?\n\n{CONFIRM_HINT}"),
        PendingAction::AddLocation { name } => format!("Add location: {name}?\n\n{CONFIRM_HINT}"),
        PendingAction::UserRequest { message } => {
            format!("{message}\n\nConfirm sending to the administrator:")
        }
    }
}

pub fn applied(applied: &Applied) -> String {
    match applied {
        Applied::RateSet { buy, sell } => format!("{EMOJI_OK} Rate set\nBuy={buy}\nSell={sell}"),
        Applied::UserAdded { id, role, username } => format!(
            "{EMOJI_OK} User added:\n\nID: {id}\nRole: {role}\nUsername: {username}"
        ),
        Applied::UserDeleted { id } => format!("{EMOJI_OK} User {id} deleted."),
        Applied::LocationAdded { name } => format!("{EMOJI_OK} Location {name} added."),
        Applied::RequestForwarded => format!("{EMOJI_OK} Request sent to the administrator."),
    }
}

pub fn cancelled() -> String {
    "❌ Action cancelled.".to_string()
}

/// Rate card for users, followed by how to submit a request.
pub fn rate_card(rate: &Rate) -> String {
    let updated = rate.updated_at.with_timezone(&Local).format(RATE_TIME_FORMAT);
    format!(
        "{EMOJI_RATE} Euro rate:\nBuy: {}\nSell: {}\nUpdated: {updated}\n\n\
         Submit a request as:\nAMOUNT,CURRENCY(EUR/RSD),RATE,DUE_TIME\nExample:\n{REQUEST_EXAMPLE}",
        rate.buy, rate.sell
    )
}

pub fn location_prompt(request: &ExchangeRequest, locations: &[Location]) -> String {
    if locations.is_empty() {
        return format!("{EMOJI_WARN} There are no active locations right now.");
    }
    format!(
        "{EMOJI_PIN} Pick a location for {} {} at {} (due {}):",
        request.amount, request.currency, request.requested_rate, request.due_time
    )
}

pub fn user_list(actors: &[Actor]) -> String {
    let entries: Vec<String> = actors
        .iter()
        .map(|a| {
            let inactive = if a.active { "" } else { " (inactive)" };
            format!(
                "• ID: `{}`\n  Role: {}\n  Username: @{}{inactive}\n\n",
                a.id, a.role, a.username
            )
        })
        .collect();
    let mut out = String::from("👥 Users:\n\n");
    push_capped(&mut out, &entries, "");
    out
}

pub fn location_list(locations: &[Location]) -> String {
    if locations.is_empty() {
        return format!("{EMOJI_WARN} There are no locations yet.");
    }
    let entries: Vec<String> = locations
        .iter()
        .map(|l| {
            if l.active {
                format!("{EMOJI_ACTIVE} **{}**\n", l.name)
            } else {
                format!("{EMOJI_INACTIVE} {}\n", l.name)
            }
        })
        .collect();
    let mut out = format!("{EMOJI_PIN} **LOCATIONS**\n\n");
    push_capped(&mut out, &entries, "\nUse the buttons below to enable/disable.");
    out
}

// Appends entries while the content stays within Discord's limit, then says
// how many were left out.
fn push_capped(out: &mut String, entries: &[String], footer: &str) {
    const MORE_NOTE_RESERVE: usize = 32;
    let budget = MAX_MESSAGE_CHARS - footer.chars().count() - MORE_NOTE_RESERVE;
    let mut used = out.chars().count();
    for (i, entry) in entries.iter().enumerate() {
        let len = entry.chars().count();
        if used + len > budget {
            let _ = writeln!(out, "… and {} more", entries.len() - i);
            break;
        }
        out.push_str(entry);
        used += len;
    }
    out.push_str(footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{DueTime, Currency};
    use rust_decimal_macros::dec;

    #[test]
    fn location_list_marks_inactive() {
        let text = location_list(&[
            Location { id: 1, name: "Beograd".into(), active: true },
            Location { id: 2, name: "Niš".into(), active: false },
        ]);
        assert!(text.contains("🟢 **Beograd**"));
        assert!(text.contains("🔴 Niš"));
    }

    #[test]
    fn long_lists_stay_within_message_limit() {
        let actors: Vec<Actor> = (1..=200)
            .map(|id| Actor {
                id: 100_000_000_000_000_000 + id,
                role: crate::exchange::Role::User,
                active: id % 2 == 0,
                username: format!("user_number_{id}"),
            })
            .collect();
        let text = user_list(&actors);
        assert!(text.chars().count() <= MAX_MESSAGE_CHARS);
        assert!(text.contains("more\n"));
        assert!(text.contains("@user_number_1 (inactive)"));

        let short = user_list(&actors[..2]);
        assert!(!short.contains("more"));

        let locations: Vec<Location> = (1..=300)
            .map(|id| Location { id, name: format!("Exchange office {id}"), active: true })
            .collect();
        let text = location_list(&locations);
        assert!(text.chars().count() <= MAX_MESSAGE_CHARS);
        assert!(text.ends_with("enable/disable."));
    }

    #[test]
    fn prompt_without_locations_warns() {
        let request = ExchangeRequest {
            amount: dec!(1000),
            currency: Currency::Eur,
            requested_rate: dec!(117.2),
            due_time: DueTime { hour: 18, minute: 0 },
        };
        assert!(location_prompt(&request, &[]).contains("no active locations"));
        let with = location_prompt(&request, &[Location { id: 1, name: "X".into(), active: true }]);
        assert!(with.contains("1000 EUR at 117.2 (due 18.00)"));
    }
}
