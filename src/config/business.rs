//! Business identity from environment variables.
//!
//! The console always acts for exactly one business. Its id is either configured
//! directly (`SALON_BUSINESS_ID`) or looked up at startup from the owner's phone
//! number (`SALON_PHONE_NUMBER`).

use crate::errors::{Error, Result};

/// The business every backend call is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessContext {
    /// Backend business id
    pub business_id: i64,
    /// Owner's phone number, when known
    pub phone_number: Option<String>,
}

impl BusinessContext {
    /// Context for a known business id.
    #[must_use]
    pub const fn new(business_id: i64) -> Self {
        Self {
            business_id,
            phone_number: None,
        }
    }
}

/// What the environment says about the business identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessIdentity {
    /// Business id configured directly
    Known(BusinessContext),
    /// Only the owner's phone number; needs a backend lookup
    PhoneOnly(String),
}

/// Reads `SALON_BUSINESS_ID` and `SALON_PHONE_NUMBER` through `lookup`.
///
/// # Errors
/// Returns [`Error::Config`] for a non-numeric business id and
/// [`Error::MissingBusiness`] when neither variable is set.
pub fn identity_from<F>(lookup: F) -> Result<BusinessIdentity>
where
    F: Fn(&str) -> Option<String>,
{
    let phone = lookup("SALON_PHONE_NUMBER")
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    if let Some(raw_id) = lookup("SALON_BUSINESS_ID").filter(|v| !v.trim().is_empty()) {
        let business_id = raw_id.trim().parse::<i64>().map_err(|e| Error::Config {
            message: format!("SALON_BUSINESS_ID '{raw_id}' is not a number: {e}"),
        })?;
        return Ok(BusinessIdentity::Known(BusinessContext {
            business_id,
            phone_number: phone,
        }));
    }

    phone
        .map(BusinessIdentity::PhoneOnly)
        .ok_or(Error::MissingBusiness)
}

/// Reads the business identity from the process environment.
///
/// # Errors
/// See [`identity_from`].
pub fn identity_from_env() -> Result<BusinessIdentity> {
    identity_from(|key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(ToString::to_string)
    }

    #[test]
    fn test_business_id_wins() {
        let identity = identity_from(lookup(&[
            ("SALON_BUSINESS_ID", " 12 "),
            ("SALON_PHONE_NUMBER", "9876543210"),
        ]))
        .unwrap();
        assert_eq!(
            identity,
            BusinessIdentity::Known(BusinessContext {
                business_id: 12,
                phone_number: Some("9876543210".to_string()),
            })
        );
    }

    #[test]
    fn test_phone_only() {
        let identity = identity_from(lookup(&[("SALON_PHONE_NUMBER", "9876543210")])).unwrap();
        assert_eq!(
            identity,
            BusinessIdentity::PhoneOnly("9876543210".to_string())
        );
    }

    #[test]
    fn test_missing_identity() {
        assert!(matches!(
            identity_from(lookup(&[])),
            Err(Error::MissingBusiness)
        ));
    }

    #[test]
    fn test_non_numeric_id() {
        assert!(matches!(
            identity_from(lookup(&[("SALON_BUSINESS_ID", "abc")])),
            Err(Error::Config { .. })
        ));
    }
}
