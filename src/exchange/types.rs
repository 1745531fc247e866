//! Domain types shared by the workflow engine, the stores and the chat layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Opaque chat identity of an actor.
pub type ActorId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a permission lookup.
///
/// `Unknown` and `Inactive` are kept apart here, but every outward reply treats
/// them the same way (see [`Access::active_role`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Unknown,
    Inactive(Role),
    Active(Role),
}

impl Access {
    pub fn active_role(&self) -> Option<Role> {
        match self {
            Access::Active(role) => Some(*role),
            Access::Unknown | Access::Inactive(_) => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.active_role() == Some(Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub role: Role,
    pub active: bool,
    pub username: String,
}

impl Actor {
    pub fn access(&self) -> Access {
        if self.active {
            Access::Active(self.role)
        } else {
            Access::Inactive(self.role)
        }
    }
}

/// Who is talking to the bot right now, as reported by the chat platform.
#[derive(Debug, Clone)]
pub struct Caller {
    pub id: ActorId,
    pub display_name: String,
}

impl Caller {
    pub fn new(id: ActorId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate {
    pub buy: Decimal,
    pub sell: Decimal,
    pub updated_at: DateTime<Utc>,
    pub updated_by: ActorId,
}

/// Safety limits checked before a rate change may be staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    pub min_buy: Decimal,
    pub max_buy: Decimal,
    pub min_spread: Decimal,
    pub max_spread: Decimal,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            min_buy: crate::constants::MIN_BUY_RATE,
            max_buy: crate::constants::MAX_BUY_RATE,
            min_spread: crate::constants::MIN_SPREAD,
            max_spread: crate::constants::MAX_SPREAD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Eur,
    /// Local currency (Serbian dinar).
    Rsd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Rsd => "RSD",
        }
    }
}

impl FromStr for Currency {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "RSD" => Ok(Currency::Rsd),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Local wall-clock deadline written as `HH.MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTime {
    pub hour: u8,
    pub minute: u8,
}

impl fmt::Display for DueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}", self.hour, self.minute)
    }
}

/// An exchange request that passed validation and waits for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub amount: Decimal,
    pub currency: Currency,
    pub requested_rate: Decimal,
    pub due_time: DueTime,
}

/// A mutating intent waiting for the owner's confirm or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    SetRate {
        buy: Decimal,
        sell: Decimal,
    },
    AddUser {
        id: ActorId,
        role: Role,
        username: String,
    },
    DeleteUser {
        id: ActorId,
    },
    AddLocation {
        name: String,
    },
    UserRequest {
        message: String,
    },
}

impl PendingAction {
    pub fn kind(&self) -> &'static str {
        match self {
            PendingAction::SetRate { .. } => "SET_RATE",
            PendingAction::AddUser { .. } => "ADD_USER",
            PendingAction::DeleteUser { .. } => "DELETE_USER",
            PendingAction::AddLocation { .. } => "ADD_LOCATION",
            PendingAction::UserRequest { .. } => "USER_REQUEST",
        }
    }
}

/// What a confirmed action did, for the reply to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    RateSet { buy: Decimal, sell: Decimal },
    UserAdded { id: ActorId, role: Role, username: String },
    UserDeleted { id: ActorId },
    LocationAdded { name: String },
    RequestForwarded,
}

/// Resolution of a confirm/cancel button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Applied(Applied),
    Cancelled(PendingAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Cancel,
}
