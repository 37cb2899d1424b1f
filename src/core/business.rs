//! Turns the configured business identity into a [`BusinessContext`].

use crate::{
    api::{HttpTransport, SalonApi},
    config::business::{BusinessContext, BusinessIdentity},
    errors::{Error, Result},
};
use tracing::info;

/// Resolves the identity, asking the backend which business owns the phone
/// number when no id was configured.
///
/// # Errors
/// Returns [`Error::MissingBusiness`] when the phone number has no business and
/// propagates transport errors from the lookup.
pub async fn resolve_context<T: HttpTransport>(
    api: &SalonApi<T>,
    identity: BusinessIdentity,
) -> Result<BusinessContext> {
    match identity {
        BusinessIdentity::Known(ctx) => Ok(ctx),
        BusinessIdentity::PhoneOnly(phone_number) => {
            crate::api::payloads::validate_phone(&phone_number)?;
            let check = api.check_business(&phone_number).await?;
            let business_id = check.business_id().ok_or(Error::MissingBusiness)?;
            info!(
                "Phone number resolved to business {} (redirect: {:?})",
                business_id, check.redirect
            );
            Ok(BusinessContext {
                business_id,
                phone_number: Some(phone_number),
            })
        }
    }
}
