// Amount validation and cross-rate conversion.

use crate::api::RateTable;
use crate::currency::Currency;
use crate::error::{ConversionError, LookupMiss, ValidationError};

/// Inline validator for the amount field: accepts any finite decimal,
/// including zero and negatives.
pub fn validate_amount(input: &str) -> Result<(), ValidationError> {
    parse_amount(input).map(|_| ())
}

pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError),
    }
}

/// One submitted form. Built fresh on every pass through the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub from: Currency,
    pub to: Currency,
    pub amount: f64,
}

impl ConversionRequest {
    pub fn is_same_currency(&self) -> bool {
        self.from == self.to
    }
}

/// Result of resolving a request, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    SameCurrency {
        currency: Currency,
        amount: f64,
    },
    Converted {
        from: Currency,
        to: Currency,
        amount: f64,
        converted: f64,
        /// Units of `to` per one `from`
        rate: f64,
    },
}

impl Conversion {
    /// Same-currency shortcut; no rate table needed.
    pub fn same_currency(request: &ConversionRequest) -> Self {
        Conversion::SameCurrency {
            currency: request.from,
            amount: request.amount,
        }
    }

    /// Console lines: amounts at 2 decimals, rate at 4.
    pub fn lines(&self) -> Vec<String> {
        match *self {
            Conversion::SameCurrency { currency, amount } => vec![format!(
                "{:.2} {} = {:.2} {} (same currency)",
                amount, currency, amount, currency
            )],
            Conversion::Converted {
                from,
                to,
                amount,
                converted,
                rate,
            } => vec![
                format!("{:.2} {} = {:.2} {}", amount, from, converted, to),
                format!("Exchange rate: 1 {} = {:.4} {}", from, rate, to),
            ],
        }
    }
}

/// Resolve `request` against `table` using the cross-rate `to / from`.
///
/// Presence in the table is what counts, not the value. A source rate
/// that would make the cross-rate non-finite (zero, NaN) is reported as
/// missing as well, since nothing sensible can be printed for it. A finite
/// amount can still overflow once multiplied by the rate; that is reported
/// as out of range.
pub fn convert(
    table: &RateTable,
    request: &ConversionRequest,
) -> Result<Conversion, ConversionError> {
    if request.is_same_currency() {
        return Ok(Conversion::same_currency(request));
    }

    let rate_from = table.rate(request.from);
    let rate_to = table.rate(request.to);

    let mut missing = Vec::new();
    if rate_from.is_none() {
        missing.push(request.from);
    }
    if rate_to.is_none() {
        missing.push(request.to);
    }
    let (Some(rate_from), Some(rate_to)) = (rate_from, rate_to) else {
        return Err(LookupMiss { missing }.into());
    };

    let rate = rate_to / rate_from;
    if !rate.is_finite() {
        return Err(LookupMiss {
            missing: vec![request.from],
        }
        .into());
    }

    let converted = request.amount * rate;
    if !converted.is_finite() {
        return Err(ConversionError::OutOfRange {
            from: request.from,
            to: request.to,
        });
    }

    Ok(Conversion::Converted {
        from: request.from,
        to: request.to,
        amount: request.amount,
        converted,
        rate,
    })
}
