//! Error taxonomy of the exchange workflow. Every variant resolves to a reply to
//! the actor; none of them is fatal to the process.

use super::types::ActorId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Bad syntax or out-of-range input. Nothing was staged or changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Amount must be a positive number.")]
    InvalidAmount,
    #[error("Currency must be EUR or RSD.")]
    InvalidCurrency,
    #[error("Rate must be a number.")]
    InvalidRate,
    #[error("The exchange rate has not been set.")]
    RateNotSet,
    #[error("Rate must be between the current buy and sell rate:\nBuy={buy}, Sell={sell}")]
    RateOutOfRange { buy: Decimal, sell: Decimal },
    #[error("Time must be in HH.MM format, between 00.00 and 23.59.")]
    InvalidTime,
    #[error("Malformed request. Expected AMOUNT,CURRENCY,RATE,DUE_TIME.")]
    MalformedRequest,
    #[error("Use a dot (.) as the decimal separator, not a comma (,).")]
    DecimalComma,
    #[error("Rates may have at most {0} decimal places.")]
    TooManyDecimals(u32),
    #[error("Buy rate must be lower than the sell rate.")]
    BuyNotBelowSell,
    #[error("Buy rate must be between {min} and {max} RSD.")]
    BuyOutOfRange { min: Decimal, max: Decimal },
    #[error("The buy/sell spread must be between {min} and {max}.")]
    SpreadOutOfRange { min: Decimal, max: Decimal },
    #[error("User id must be a number.")]
    InvalidActorId,
    #[error("Role must be USER or ADMIN.")]
    InvalidRole,
    #[error("Username must be 3-32 characters (letters, digits, _).")]
    InvalidUsername,
    #[error("Invalid format.\n\n{0}")]
    Usage(&'static str),
}

/// Failure of a backing store. Surfaced to the actor, never swallowed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A backend failure, boxed so this module stays free of driver types.
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("unexpected stored value: {0}")]
    Corrupt(String),
}

#[derive(Debug, Clone, Error)]
#[error("could not reach the administrator: {0}")]
pub struct NotifyError(pub String);

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("You do not have permission for this action.")]
    PermissionDenied,
    #[error("There is no pending action.")]
    NoPendingAction,
    #[error("These buttons belong to another user.")]
    ForeignButton,
    #[error("You cannot delete yourself.")]
    SelfDeletion,
    #[error("A user with id {0} already exists.")]
    DuplicateActor(ActorId),
    #[error("User with id {0} does not exist.")]
    ActorNotFound(ActorId),
    #[error("That location is not available.")]
    LocationUnavailable,
    #[error("The exchange rate has not been set today.")]
    RateNotSetToday,
    #[error("Storage is unavailable, please try again. ({0})")]
    StoreUnavailable(#[from] StoreError),
    #[error("The request could not be delivered to the administrator. ({0})")]
    NotifyFailed(#[from] NotifyError),
}

impl WorkflowError {
    /// Replies that should carry the administrator contact hint.
    pub fn wants_admin_contact(&self) -> bool {
        matches!(
            self,
            WorkflowError::PermissionDenied
                | WorkflowError::RateNotSetToday
                | WorkflowError::Validation(ValidationError::RateNotSet)
        )
    }
}
