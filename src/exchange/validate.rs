//! Pure input checks run before anything is staged.

use super::convert::convert;
use super::error::ValidationError;
use crate::constants::RATE_MAX_DECIMALS;
use super::types::{ActorId, Currency, DueTime, ExchangeRequest, Rate, RateLimits, Role};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

pub const SET_RATE_USAGE: &str = "/kurs_evra BUY SELL\nExample: /kurs_evra 117.2 118.0";
pub const ADD_USER_USAGE: &str = "/add USER_ID ROLE USERNAME\nExample: /add 123456789 USER petar";
pub const DELETE_USER_USAGE: &str = "/delete USER_ID\nExample: /delete 123456789";
pub const ADD_LOCATION_USAGE: &str = "/add_location LOCATION_NAME\nExample: /add_location Beograd Centar";
pub const REQUEST_EXAMPLE: &str = "1000,EUR,117.2,18.00";

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,32}$").expect("username pattern compiles"));

/// Splits a raw `amount,currency,rate,due_time` line into its four trimmed parts.
pub fn split_request_line(line: &str) -> Result<[&str; 4], ValidationError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    match parts.len() {
        n if n < 4 => Err(ValidationError::MalformedRequest),
        4 => Ok([parts[0], parts[1], parts[2], parts[3]]),
        // A fifth part almost always means a decimal comma inside the amount or rate.
        _ => Err(ValidationError::DecimalComma),
    }
}

/// Checks an exchange request against the current rate. Short-circuits on the
/// first failure, in field order.
pub fn validate(
    parts: &[&str; 4],
    current_rate: Option<&Rate>,
) -> Result<ExchangeRequest, ValidationError> {
    let amount = Decimal::from_str(parts[0])
        .ok()
        .filter(|a| a.is_sign_positive() && !a.is_zero())
        .ok_or(ValidationError::InvalidAmount)?;

    let currency = Currency::from_str(parts[1]).map_err(|_| ValidationError::InvalidCurrency)?;

    let requested_rate = Decimal::from_str(parts[2]).map_err(|_| ValidationError::InvalidRate)?;

    let rate = current_rate.ok_or(ValidationError::RateNotSet)?;
    if requested_rate < rate.buy || requested_rate > rate.sell {
        return Err(ValidationError::RateOutOfRange {
            buy: rate.buy,
            sell: rate.sell,
        });
    }

    // The amount must also be payable out at that rate without overflow.
    if convert(amount, currency, requested_rate).is_none() {
        return Err(ValidationError::InvalidAmount);
    }

    let due_time = parse_due_time(parts[3]).ok_or(ValidationError::InvalidTime)?;

    Ok(ExchangeRequest {
        amount,
        currency,
        requested_rate,
        due_time,
    })
}

/// Parses `HH.MM` with 00 <= HH <= 23 and 00 <= MM <= 59.
pub fn parse_due_time(s: &str) -> Option<DueTime> {
    let (hh, mm) = s.split_once('.')?;
    if hh.len() != 2 || mm.len() != 2 {
        return None;
    }
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u8 = hh.parse().ok()?;
    let minute: u8 = mm.parse().ok()?;
    (hour <= 23 && minute <= 59).then_some(DueTime { hour, minute })
}

/// Checks `BUY SELL` arguments of a rate change against the safety limits.
pub fn validate_rate_change(
    args: &[&str],
    limits: &RateLimits,
) -> Result<(Decimal, Decimal), ValidationError> {
    let [buy_str, sell_str] = args else {
        return Err(ValidationError::Usage(SET_RATE_USAGE));
    };
    if buy_str.contains(',') || sell_str.contains(',') {
        return Err(ValidationError::DecimalComma);
    }
    let (Ok(buy), Ok(sell)) = (Decimal::from_str(buy_str), Decimal::from_str(sell_str)) else {
        return Err(ValidationError::InvalidRate);
    };
    if [buy, sell].iter().any(|r| r.normalize().scale() > RATE_MAX_DECIMALS) {
        return Err(ValidationError::TooManyDecimals(RATE_MAX_DECIMALS));
    }
    if buy >= sell {
        return Err(ValidationError::BuyNotBelowSell);
    }
    if buy < limits.min_buy || buy > limits.max_buy {
        return Err(ValidationError::BuyOutOfRange {
            min: limits.min_buy,
            max: limits.max_buy,
        });
    }
    let spread = sell - buy;
    if spread < limits.min_spread || spread > limits.max_spread {
        return Err(ValidationError::SpreadOutOfRange {
            min: limits.min_spread,
            max: limits.max_spread,
        });
    }
    Ok((buy, sell))
}

/// Parses `USER_ID ROLE USERNAME`. Extra trailing arguments are ignored.
pub fn parse_add_user(args: &[&str]) -> Result<(ActorId, Role, String), ValidationError> {
    let [id, role, username, ..] = args else {
        return Err(ValidationError::Usage(ADD_USER_USAGE));
    };
    let id = parse_actor_id(id)?;
    let role = Role::from_str(role).map_err(|_| ValidationError::InvalidRole)?;
    if !USERNAME_RE.is_match(username) {
        return Err(ValidationError::InvalidUsername);
    }
    Ok((id, role, (*username).to_string()))
}

pub fn parse_delete_user(args: &[&str]) -> Result<ActorId, ValidationError> {
    let [id] = args else {
        return Err(ValidationError::Usage(DELETE_USER_USAGE));
    };
    parse_actor_id(id)
}

/// Joins the arguments into a location name.
pub fn parse_location_name(args: &[&str]) -> Result<String, ValidationError> {
    let name = args.join(" ");
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Usage(ADD_LOCATION_USAGE));
    }
    Ok(name.to_string())
}

fn parse_actor_id(s: &str) -> Result<ActorId, ValidationError> {
    s.parse::<ActorId>()
        .map_err(|_| ValidationError::InvalidActorId)
}
