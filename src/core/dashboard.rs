//! Business overview numbers shown on the dashboard.

use super::assembler::AppointmentView;
use crate::models::{AppointmentStatus, BusinessAggregate, PaymentStatus};
use chrono::NaiveDate;

/// Headline figures for one business on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessSummary {
    /// Salon name
    pub salon_name: String,
    /// Owner name
    pub owner_name: String,
    /// Number of team members
    pub team_size: usize,
    /// Team members currently taking bookings
    pub available_staff: usize,
    /// Number of clients
    pub client_count: usize,
    /// Number of services
    pub service_count: usize,
    /// Number of packages
    pub package_count: usize,
    /// Appointments on `today`, cancelled ones excluded
    pub today_count: usize,
    /// Unpaid amount over non-cancelled appointments
    pub pending_total: f64,
    /// Paid amount over all appointments
    pub collected_total: f64,
    /// Next scheduled appointments from `today` on
    pub upcoming: Vec<AppointmentView>,
}

/// Computes the dashboard for `today`, listing at most `limit` upcoming bookings.
#[must_use]
pub fn summarize(
    aggregate: &BusinessAggregate,
    views: &[AppointmentView],
    today: NaiveDate,
    limit: usize,
) -> BusinessSummary {
    let active = || {
        views
            .iter()
            .filter(|view| view.status != AppointmentStatus::Cancelled)
    };

    BusinessSummary {
        salon_name: aggregate.business.salon_name.clone(),
        owner_name: aggregate.business.owner_name.clone(),
        team_size: aggregate.team_members.len(),
        available_staff: aggregate
            .team_members
            .iter()
            .filter(|member| member.is_available)
            .count(),
        client_count: aggregate.clients.len(),
        service_count: aggregate.services.len(),
        package_count: aggregate.packages.len(),
        today_count: active().filter(|view| view.date == today).count(),
        pending_total: active()
            .filter(|view| view.payment_status != PaymentStatus::Completed)
            .map(|view| view.total_amount)
            .sum(),
        collected_total: views
            .iter()
            .filter(|view| view.payment_status == PaymentStatus::Completed)
            .map(|view| view.total_amount)
            .sum(),
        upcoming: upcoming(views, today, limit),
    }
}

/// Scheduled appointments on or after `today`, earliest first.
#[must_use]
pub fn upcoming(views: &[AppointmentView], today: NaiveDate, limit: usize) -> Vec<AppointmentView> {
    let mut next: Vec<AppointmentView> = views
        .iter()
        .filter(|view| view.status == AppointmentStatus::Scheduled && view.date >= today)
        .cloned()
        .collect();
    next.sort_by_key(|view| (view.date, view.time, view.id));
    next.truncate(limit);
    next
}
