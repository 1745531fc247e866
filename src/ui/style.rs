//! Emoji and label helpers shared by message bodies and buttons.
pub const EMOJI_OK: &str = "✅";
pub const EMOJI_ERR: &str = "❌";
pub const EMOJI_WARN: &str = "⚠️";
pub const EMOJI_ACTIVE: &str = "🟢";
pub const EMOJI_INACTIVE: &str = "🔴";
pub const EMOJI_RATE: &str = "💱";
pub const EMOJI_PIN: &str = "📍";

/// Discord caps button labels at 80 characters.
pub fn clamp_label(label: &str) -> String {
    const MAX: usize = 80;
    if label.chars().count() <= MAX {
        return label.to_string();
    }
    let mut out: String = label.chars().take(MAX - 1).collect();
    out.push('…');
    out
}

/// Mention markup that lets the reader open a DM with the administrator.
pub fn admin_contact(admin_id: u64) -> String {
    format!("\n\n📩 Contact the administrator: <@{admin_id}>")
}
