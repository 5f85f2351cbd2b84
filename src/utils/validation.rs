use crate::utils::error::{CalcError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const SERVICE_ID_PATTERN: &str = r"^[a-z0-9][a-z0-9_-]*$";

/// Largest price a single catalog entry may carry.
pub const MAX_SERVICE_PRICE: Decimal = rust_decimal_macros::dec!(1000000000000);

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CalcError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Service ids are lowercase slugs: letters, digits, `-` and `_`.
pub fn validate_service_id(field_name: &str, id: &str) -> Result<()> {
    let re = Regex::new(SERVICE_ID_PATTERN).map_err(|e| CalcError::ConfigValidationError {
        field: field_name.to_string(),
        message: format!("id pattern failed to compile: {}", e),
    })?;

    if !re.is_match(id) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: format!("Service id must match {}", SERVICE_ID_PATTERN),
        });
    }
    Ok(())
}

/// Prices are whole, non-negative currency units up to `MAX_SERVICE_PRICE`.
pub fn validate_price(field_name: &str, amount: Decimal) -> Result<()> {
    let reason = if amount < Decimal::ZERO {
        "Price cannot be negative".to_string()
    } else if !amount.fract().is_zero() {
        "Price must be a whole number of currency units".to_string()
    } else if amount > MAX_SERVICE_PRICE {
        format!("Price cannot exceed {}", MAX_SERVICE_PRICE)
    } else {
        return Ok(());
    };

    Err(CalcError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: amount.to_string(),
        reason,
    })
}

pub fn validate_max_decimal_places(field_name: &str, value: Decimal, places: u32) -> Result<()> {
    if value.normalize().scale() > places {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value may have at most {} decimal places", places),
        });
    }
    Ok(())
}

/// Checks `min <= value < max`.
pub fn validate_half_open_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value >= max {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {} and below {}", min, max),
        });
    }
    Ok(())
}
