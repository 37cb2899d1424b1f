//! Appointment read-model assembly.
//!
//! Joins raw appointments against the business's clients, staff, services, and
//! packages to produce flat, display-ready [`AppointmentView`]s. Assembly is a
//! pure function of its inputs: no I/O, no clock, no state between calls. A
//! reference that does not resolve becomes a fallback label; it never fails.

use super::directory::Directory;
use crate::models::{
    Appointment, AppointmentStatus, BusinessAggregate, Client, PayMode, Package, PaymentStatus,
    Service, TeamMember, TimeOfDay,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Label for a client reference that does not resolve.
pub const UNKNOWN_CLIENT: &str = "Unknown Client";
/// Label for a missing or unresolved staff reference.
pub const UNASSIGNED_STAFF: &str = "Unassigned";
/// Label for a service reference that does not resolve.
pub const UNKNOWN_SERVICE: &str = "Unknown Service";
/// Label for a package reference that does not resolve.
pub const UNKNOWN_PACKAGE: &str = "Unknown Package";

/// One appointment with every reference resolved to display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentView {
    /// Appointment id
    pub id: i64,
    /// Client name or [`UNKNOWN_CLIENT`]
    pub client_name: String,
    /// Client phone, when the client resolved
    pub client_phone: Option<String>,
    /// Staff full name or [`UNASSIGNED_STAFF`]
    pub staff_name: String,
    /// Service names in booking order
    pub services: Vec<String>,
    /// Package names in booking order
    pub packages: Vec<String>,
    /// Calendar day
    pub date: NaiveDate,
    /// Start time, `HH:MM`
    pub time: TimeOfDay,
    /// Sum of the resolved services' and packages' durations
    pub duration_mins: u32,
    /// Amount charged
    pub total_amount: f64,
    /// Payment state
    pub payment_status: PaymentStatus,
    /// Lifecycle state
    pub status: AppointmentStatus,
    /// Payment channel
    pub pay_mode: PayMode,
    /// Notes, if any were written
    pub notes: Option<String>,
}

/// Builds one view per appointment, same length and order as `appointments`.
#[must_use]
pub fn assemble(
    appointments: &[Appointment],
    clients: &[Client],
    staff: &[TeamMember],
    services: &[Service],
    packages: &[Package],
) -> Vec<AppointmentView> {
    let directory = Directory::new(clients, staff, services, packages);
    assemble_with(&directory, appointments)
}

/// [`assemble`] against an already built [`Directory`].
#[must_use]
pub fn assemble_with(directory: &Directory<'_>, appointments: &[Appointment]) -> Vec<AppointmentView> {
    appointments
        .iter()
        .map(|appointment| view_of(directory, appointment))
        .collect()
}

/// Views for every appointment in a business aggregate.
#[must_use]
pub fn assemble_aggregate(aggregate: &BusinessAggregate) -> Vec<AppointmentView> {
    assemble_with(
        &Directory::from_aggregate(aggregate),
        &aggregate.appointments,
    )
}

fn view_of(directory: &Directory<'_>, appointment: &Appointment) -> AppointmentView {
    let client = appointment.client.and_then(|id| directory.clients.get(id));
    let staff_name = appointment
        .staff
        .and_then(|id| directory.staff.get(id))
        .map_or_else(|| UNASSIGNED_STAFF.to_string(), TeamMember::full_name);

    let mut duration_mins: u32 = 0;
    let services = appointment
        .services
        .iter()
        .map(|&id| match directory.services.get(id) {
            Some(service) => {
                duration_mins = duration_mins.saturating_add(service.duration_in_mins);
                service.service_name.clone()
            }
            None => UNKNOWN_SERVICE.to_string(),
        })
        .collect();
    let packages = appointment
        .packages
        .iter()
        .map(|&id| match directory.packages.get(id) {
            Some(package) => {
                duration_mins = duration_mins.saturating_add(package.package_duration_in_mins);
                package.package_name.clone()
            }
            None => UNKNOWN_PACKAGE.to_string(),
        })
        .collect();

    AppointmentView {
        id: appointment.id,
        client_name: client.map_or_else(|| UNKNOWN_CLIENT.to_string(), |c| c.client_name.clone()),
        client_phone: client
            .map(|c| c.client_phone.clone())
            .filter(|phone| !phone.is_empty()),
        staff_name,
        services,
        packages,
        date: appointment.appointment_date,
        time: appointment.appointment_time,
        duration_mins,
        total_amount: appointment.total_amount,
        payment_status: appointment.payment_status,
        status: appointment.status,
        pay_mode: appointment.pay_mode,
        notes: appointment
            .notes
            .clone()
            .filter(|notes| !notes.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{sample_aggregate, simple_appointment};

    fn asha() -> Client {
        Client {
            id: 1,
            client_name: "Asha".to_string(),
            client_phone: "9000000001".to_string(),
            client_email: String::new(),
            client_type: "Regular".to_string(),
            client_dob: None,
            client_gender: None,
        }
    }

    fn ravi() -> TeamMember {
        TeamMember {
            id: 1,
            first_name: "Ravi".to_string(),
            last_name: "Kumar".to_string(),
            phone_number: String::new(),
            member_email: String::new(),
            date_of_joining: None,
            access_type: None,
            is_available: true,
        }
    }

    fn haircut() -> Service {
        Service {
            id: 1,
            service_name: "Haircut".to_string(),
            service_type: None,
            category: None,
            duration_in_mins: 30,
            price: 300.0,
        }
    }

    #[test]
    fn test_empty_appointments_give_empty_views() {
        let views = assemble(&[], &[asha()], &[ravi()], &[haircut()], &[]);
        assert!(views.is_empty());
    }

    #[test]
    fn test_resolves_all_references() {
        let appointment = simple_appointment(1, Some(1), Some(1), "2024-06-10", "14:05:59");
        let views = assemble(&[appointment], &[asha()], &[ravi()], &[haircut()], &[]);

        let view = &views[0];
        assert_eq!(view.id, 1);
        assert_eq!(view.client_name, "Asha");
        assert_eq!(view.client_phone.as_deref(), Some("9000000001"));
        assert_eq!(view.staff_name, "Ravi Kumar");
        assert_eq!(view.services, vec!["Haircut".to_string()]);
        assert!(view.packages.is_empty());
        assert_eq!(view.date.to_string(), "2024-06-10");
        assert_eq!(view.time.to_string(), "14:05");
        assert_eq!(view.duration_mins, 30);
    }

    #[test]
    fn test_missing_client_falls_back() {
        let appointment = simple_appointment(1, Some(99), Some(1), "2024-06-10", "14:05");
        let views = assemble(&[appointment], &[asha()], &[ravi()], &[haircut()], &[]);
        assert_eq!(views[0].client_name, UNKNOWN_CLIENT);
        assert_eq!(views[0].client_phone, None);
    }

    #[test]
    fn test_missing_staff_is_unassigned() {
        let unassigned = simple_appointment(1, Some(1), None, "2024-06-10", "09:00");
        let dangling = simple_appointment(2, Some(1), Some(7), "2024-06-10", "09:30");
        let views = assemble(&[unassigned, dangling], &[asha()], &[ravi()], &[haircut()], &[]);
        assert_eq!(views[0].staff_name, UNASSIGNED_STAFF);
        assert_eq!(views[1].staff_name, UNASSIGNED_STAFF);
    }

    #[test]
    fn test_unresolved_entries_fall_back_individually() {
        let aggregate = sample_aggregate();
        let views = assemble_aggregate(&aggregate);

        // Appointment 2 books service 1 and the missing service 99, plus package 1.
        let view = &views[1];
        assert_eq!(
            view.services,
            vec!["Haircut".to_string(), UNKNOWN_SERVICE.to_string()]
        );
        assert_eq!(view.packages, vec!["Bridal Glow".to_string()]);
        assert_eq!(view.duration_mins, 30 + 120);

        // Appointment 3 only references missing records.
        let view = &views[2];
        assert_eq!(view.client_name, UNKNOWN_CLIENT);
        assert_eq!(view.staff_name, UNASSIGNED_STAFF);
        assert_eq!(view.packages, vec![UNKNOWN_PACKAGE.to_string()]);
        assert_eq!(view.duration_mins, 0);
    }

    #[test]
    fn test_preserves_length_order_and_verbatim_fields() {
        let aggregate = sample_aggregate();
        let views = assemble_aggregate(&aggregate);

        assert_eq!(views.len(), aggregate.appointments.len());
        for (view, appointment) in views.iter().zip(&aggregate.appointments) {
            assert_eq!(view.id, appointment.id);
            assert_eq!(view.date, appointment.appointment_date);
            assert_eq!(view.total_amount, appointment.total_amount);
            assert_eq!(view.status, appointment.status);
            assert_eq!(view.payment_status, appointment.payment_status);
            assert_eq!(view.pay_mode, appointment.pay_mode);
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let aggregate = sample_aggregate();
        assert_eq!(assemble_aggregate(&aggregate), assemble_aggregate(&aggregate));
    }
}
