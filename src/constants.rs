// Central constants: rate safety limits and chat defaults.
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// RSD paid for 1 EUR.
pub const MIN_BUY_RATE: Decimal = dec!(115);
pub const MAX_BUY_RATE: Decimal = dec!(122);
// Allowed sell - buy difference.
pub const MIN_SPREAD: Decimal = dec!(0.1);
pub const MAX_SPREAD: Decimal = dec!(4.0);
// Scale of the NUMERIC rate columns.
pub const RATE_MAX_DECIMALS: u32 = 4;

pub const DEFAULT_COMMAND_PREFIX: &str = "!";
/// Display format for the time a rate was last updated.
pub const RATE_TIME_FORMAT: &str = "%d.%m.%Y. %H:%M";
// Discord caps message content at 2000 characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;
// Discord caps a message at 5 action rows of 5 buttons.
pub const MAX_BUTTON_ROWS: usize = 5;
pub const MAX_BUTTONS_PER_ROW: usize = 5;
