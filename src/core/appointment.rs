//! Appointment booking and status changes.
//!
//! Commands collect names typed by the owner. This module resolves those names
//! against the business [`Directory`], validates the booking, and produces the
//! full [`AppointmentPayload`] the backend expects for create and replace.

use super::{calendar::parse_day, directory::Directory};
use crate::{
    api::AppointmentPayload,
    config::business::BusinessContext,
    errors::{Error, Result},
    models::{Appointment, AppointmentStatus, BusinessAggregate, PayMode, PaymentStatus, TimeOfDay},
};

/// A booking as entered by the owner, before any name is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    /// Client name or phone
    pub client: String,
    /// Staff full name, if someone is assigned
    pub staff: Option<String>,
    /// Service names
    pub services: Vec<String>,
    /// Package names
    pub packages: Vec<String>,
    /// Day as `YYYY-MM-DD`
    pub date: String,
    /// Start time as `HH:MM`
    pub time: String,
    /// Payment channel
    pub pay_mode: PayMode,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Splits a comma separated list of names, dropping blanks.
#[must_use]
pub fn split_names(input: Option<&str>) -> Vec<String> {
    input
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Resolves and validates a draft into a create payload.
///
/// The client must exist. Staff is optional, but a named staff member must
/// exist and be available. At least one service or package is required. The
/// total is the sum of the chosen prices. New bookings start as `Scheduled`
/// and `Pending`.
///
/// # Errors
/// [`Error::NotFound`] for an unknown name, [`Error::Validation`] for an empty
/// booking or unavailable staff, [`Error::InvalidDate`]/[`Error::InvalidTime`]
/// for malformed input.
pub fn build_payload(
    ctx: &BusinessContext,
    directory: &Directory<'_>,
    draft: &AppointmentDraft,
) -> Result<AppointmentPayload> {
    let client = directory
        .find_client(&draft.client)
        .ok_or_else(|| Error::not_found("client", draft.client.trim()))?;

    let staff = match draft.staff.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => {
            let member = directory
                .find_staff(name)
                .ok_or_else(|| Error::not_found("team member", name))?;
            if !member.is_available {
                return Err(Error::validation(format!(
                    "{} is not taking bookings",
                    member.full_name()
                )));
            }
            Some(member.id)
        }
        _ => None,
    };

    if draft.services.is_empty() && draft.packages.is_empty() {
        return Err(Error::validation(
            "An appointment needs at least one service or package",
        ));
    }

    let mut total_amount = 0.0;
    let mut services = Vec::with_capacity(draft.services.len());
    for name in &draft.services {
        let service = directory
            .find_service(name)
            .ok_or_else(|| Error::not_found("service", name))?;
        total_amount += service.price;
        services.push(service.id);
    }
    let mut packages = Vec::with_capacity(draft.packages.len());
    for name in &draft.packages {
        let package = directory
            .find_package(name)
            .ok_or_else(|| Error::not_found("package", name))?;
        total_amount += package.package_price;
        packages.push(package.id);
    }

    Ok(AppointmentPayload {
        business: ctx.business_id,
        client_appointments: client.id,
        staff,
        services,
        packages,
        appointment_date: parse_day(&draft.date)?,
        appointment_time: draft.time.parse::<TimeOfDay>()?,
        total_amount,
        status: AppointmentStatus::Scheduled,
        payment_status: PaymentStatus::Pending,
        pay_mode: draft.pay_mode,
        notes: draft.notes.clone().unwrap_or_default(),
    })
}

/// Finds an appointment in the aggregate by id.
///
/// # Errors
/// Returns [`Error::NotFound`] when no appointment has that id.
pub fn find_appointment(aggregate: &BusinessAggregate, id: i64) -> Result<&Appointment> {
    aggregate
        .appointments
        .iter()
        .find(|appointment| appointment.id == id)
        .ok_or_else(|| Error::not_found("appointment", id))
}

/// Full replacement body that changes only the lifecycle status.
///
/// # Errors
/// Returns [`Error::Validation`] when the stored appointment has no client.
pub fn payload_with_status(
    ctx: &BusinessContext,
    appointment: &Appointment,
    status: AppointmentStatus,
) -> Result<AppointmentPayload> {
    let mut payload = AppointmentPayload::from_existing(ctx.business_id, appointment)?;
    payload.status = status;
    Ok(payload)
}

/// Full replacement body that changes only the payment state, and optionally
/// the channel it was paid through.
///
/// # Errors
/// Returns [`Error::Validation`] when the stored appointment has no client.
pub fn payload_with_payment(
    ctx: &BusinessContext,
    appointment: &Appointment,
    payment_status: PaymentStatus,
    pay_mode: Option<PayMode>,
) -> Result<AppointmentPayload> {
    let mut payload = AppointmentPayload::from_existing(ctx.business_id, appointment)?;
    payload.payment_status = payment_status;
    if let Some(mode) = pay_mode {
        payload.pay_mode = mode;
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{sample_aggregate, sample_context};

    fn draft() -> AppointmentDraft {
        AppointmentDraft {
            client: "asha".to_string(),
            staff: Some("Ravi Kumar".to_string()),
            services: vec!["Haircut".to_string(), "hair spa".to_string()],
            packages: vec![],
            date: "2024-06-20".to_string(),
            time: "15:30".to_string(),
            pay_mode: PayMode::Online,
            notes: Some("Window seat".to_string()),
        }
    }

    #[test]
    fn test_split_names() {
        assert_eq!(
            split_names(Some(" Haircut, ,Hair Spa ,")),
            vec!["Haircut".to_string(), "Hair Spa".to_string()]
        );
        assert!(split_names(None).is_empty());
    }

    #[test]
    fn test_build_payload_resolves_names_and_totals() -> Result<()> {
        let aggregate = sample_aggregate();
        let directory = Directory::from_aggregate(&aggregate);

        let payload = build_payload(&sample_context(), &directory, &draft())?;
        assert_eq!(payload.business, 1);
        assert_eq!(payload.client_appointments, 1);
        assert_eq!(payload.staff, Some(1));
        assert_eq!(payload.services, vec![1, 2]);
        assert!(payload.packages.is_empty());
        assert_eq!(payload.total_amount, 1150.0);
        assert_eq!(payload.appointment_time.to_string(), "15:30");
        assert_eq!(payload.status, AppointmentStatus::Scheduled);
        assert_eq!(payload.payment_status, PaymentStatus::Pending);
        assert_eq!(payload.pay_mode, PayMode::Online);
        assert_eq!(payload.notes, "Window seat");
        Ok(())
    }

    #[test]
    fn test_build_payload_client_by_phone_and_package_only() -> Result<()> {
        let aggregate = sample_aggregate();
        let directory = Directory::from_aggregate(&aggregate);
        let draft = AppointmentDraft {
            client: "9000000002".to_string(),
            staff: None,
            services: vec![],
            packages: vec!["Bridal Glow".to_string()],
            ..draft()
        };

        let payload = build_payload(&sample_context(), &directory, &draft)?;
        assert_eq!(payload.client_appointments, 2);
        assert_eq!(payload.staff, None);
        assert_eq!(payload.packages, vec![1]);
        assert_eq!(payload.total_amount, 2500.0);
        Ok(())
    }

    #[test]
    fn test_build_payload_rejects_bad_input() {
        let aggregate = sample_aggregate();
        let directory = Directory::from_aggregate(&aggregate);
        let ctx = sample_context();

        let unknown_client = AppointmentDraft {
            client: "Nobody".to_string(),
            ..draft()
        };
        assert!(matches!(
            build_payload(&ctx, &directory, &unknown_client),
            Err(Error::NotFound { resource: "client", .. })
        ));

        let unavailable = AppointmentDraft {
            staff: Some("Priya Shah".to_string()),
            ..draft()
        };
        assert!(matches!(
            build_payload(&ctx, &directory, &unavailable),
            Err(Error::Validation { .. })
        ));

        let empty = AppointmentDraft {
            services: vec![],
            packages: vec![],
            ..draft()
        };
        assert!(matches!(
            build_payload(&ctx, &directory, &empty),
            Err(Error::Validation { .. })
        ));

        let unknown_service = AppointmentDraft {
            services: vec!["Pedicure".to_string()],
            ..draft()
        };
        assert!(matches!(
            build_payload(&ctx, &directory, &unknown_service),
            Err(Error::NotFound { resource: "service", .. })
        ));

        let bad_time = AppointmentDraft {
            time: "25:00".to_string(),
            ..draft()
        };
        assert!(matches!(
            build_payload(&ctx, &directory, &bad_time),
            Err(Error::InvalidTime { .. })
        ));

        let bad_date = AppointmentDraft {
            date: "tomorrow".to_string(),
            ..draft()
        };
        assert!(matches!(
            build_payload(&ctx, &directory, &bad_date),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_status_and_payment_updates_keep_other_fields() -> Result<()> {
        let aggregate = sample_aggregate();
        let ctx = sample_context();
        let existing = find_appointment(&aggregate, 1)?;

        let cancelled = payload_with_status(&ctx, existing, AppointmentStatus::Cancelled)?;
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
        assert_eq!(cancelled.payment_status, existing.payment_status);
        assert_eq!(cancelled.services, existing.services);

        let paid = payload_with_payment(&ctx, existing, PaymentStatus::Completed, Some(PayMode::Online))?;
        assert_eq!(paid.payment_status, PaymentStatus::Completed);
        assert_eq!(paid.pay_mode, PayMode::Online);
        assert_eq!(paid.status, existing.status);

        let same_mode = payload_with_payment(&ctx, existing, PaymentStatus::Failed, None)?;
        assert_eq!(same_mode.pay_mode, existing.pay_mode);
        Ok(())
    }

    #[test]
    fn test_find_appointment_missing() {
        let aggregate = sample_aggregate();
        assert!(matches!(
            find_appointment(&aggregate, 404),
            Err(Error::NotFound { .. })
        ));
    }
}
