use super::types::Currency;
use rust_decimal::Decimal;
use std::fmt;

/// Amount the desk has to prepare for the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub amount: Decimal,
    pub currency: Currency,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount.round_dp(2), self.currency)
    }
}

/// EUR brought in is paid out in RSD (`amount * rate`), RSD brought in is paid
/// out in EUR (`amount / rate`). The amount is exact; only `Display` rounds.
/// Returns `None` for a zero rate.
pub fn convert(amount: Decimal, currency: Currency, rate: Decimal) -> Option<Conversion> {
    match currency {
        Currency::Eur => amount.checked_mul(rate).map(|amount| Conversion {
            amount,
            currency: Currency::Rsd,
        }),
        Currency::Rsd => amount.checked_div(rate).map(|amount| Conversion {
            amount,
            currency: Currency::Eur,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_rate_has_no_conversion() {
        assert!(convert(dec!(100), Currency::Rsd, Decimal::ZERO).is_none());
    }

    #[test]
    fn display_rounds_to_cents() {
        let c = convert(dec!(100), Currency::Rsd, dec!(117.3)).expect("non-zero rate");
        assert_eq!(c.currency, Currency::Eur);
        assert_eq!(c.to_string(), "0.85 EUR");
    }
}
