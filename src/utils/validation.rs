use crate::utils::error::{OrderError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_mongo_uri(field_name: &str, uri: &str) -> Result<()> {
    if uri.is_empty() {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: "URI cannot be empty".to_string(),
        });
    }

    match Url::parse(uri) {
        Ok(url) => match url.scheme() {
            "mongodb" | "mongodb+srv" => Ok(()),
            scheme => Err(OrderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: uri.to_string(),
                reason: format!("Unsupported URI scheme: {}", scheme),
            }),
        },
        Err(e) => Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: format!("Invalid URI format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: price.to_string(),
            reason: "Price must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(OrderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

/// Required form field: absent and empty values are both rejected.
pub fn require_form_field<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(OrderError::MissingFieldError {
            field: field_name.to_string(),
        }),
    }
}
