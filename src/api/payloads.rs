//! Request bodies sent to the backend.
//!
//! Every `New*` payload carries the owning `business` id and validates itself
//! before it is sent, mirroring the constraints the backend enforces.

use crate::{
    errors::{Error, Result},
    models::{
        AccessType, Appointment, AppointmentStatus, PayMode, PaymentStatus, ServiceType,
        TimeOfDay,
    },
};
use chrono::NaiveDate;
use serde::Serialize;

/// Body of `/api/check-business/`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PhoneLookup<'a> {
    pub(crate) phone_number: &'a str,
}

/// Full appointment body for create (POST) and update (PUT).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentPayload {
    /// Owning business
    pub business: i64,
    /// Client reference
    pub client_appointments: i64,
    /// Staff reference
    pub staff: Option<i64>,
    /// Service references
    pub services: Vec<i64>,
    /// Package references
    pub packages: Vec<i64>,
    /// Calendar day
    pub appointment_date: NaiveDate,
    /// Start time
    pub appointment_time: TimeOfDay,
    /// Amount charged
    pub total_amount: f64,
    /// Lifecycle state
    pub status: AppointmentStatus,
    /// Payment state
    pub payment_status: PaymentStatus,
    /// Payment channel
    pub pay_mode: PayMode,
    /// Free-text notes
    pub notes: String,
}

impl AppointmentPayload {
    /// Rebuilds the full body of an existing appointment, for PUT updates.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] when the stored appointment has no client.
    pub fn from_existing(business_id: i64, appointment: &Appointment) -> Result<Self> {
        let client = appointment.client.ok_or_else(|| {
            Error::validation(format!("appointment {} has no client", appointment.id))
        })?;
        Ok(Self {
            business: business_id,
            client_appointments: client,
            staff: appointment.staff,
            services: appointment.services.clone(),
            packages: appointment.packages.clone(),
            appointment_date: appointment.appointment_date,
            appointment_time: appointment.appointment_time,
            total_amount: appointment.total_amount,
            status: appointment.status,
            payment_status: appointment.payment_status,
            pay_mode: appointment.pay_mode,
            notes: appointment.notes.clone().unwrap_or_default(),
        })
    }

    /// Checks the body before it is sent.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] for a missing client, an appointment that
    /// books neither services nor packages, or an invalid total.
    pub fn validate(&self) -> Result<()> {
        if self.client_appointments <= 0 {
            return Err(Error::validation(format!(
                "Invalid client id: {}",
                self.client_appointments
            )));
        }
        if self.services.is_empty() && self.packages.is_empty() {
            return Err(Error::validation(
                "An appointment needs at least one service or package",
            ));
        }
        require_price(self.total_amount)
    }
}

/// Body for creating or replacing a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClient {
    /// Owning business
    pub business: i64,
    /// Display name
    pub client_name: String,
    /// Business-defined type
    pub client_type: String,
    /// Contact email
    pub client_email: String,
    /// Contact phone, digits only
    pub client_phone: String,
    /// Date of birth
    pub client_dob: Option<NaiveDate>,
    /// Gender
    pub client_gender: Option<String>,
}

impl NewClient {
    /// Checks name, phone, and email before sending.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] describing the first failed rule.
    pub fn validate(&self) -> Result<()> {
        require_name("Client name", &self.client_name)?;
        validate_phone(&self.client_phone)?;
        if !self.client_email.is_empty() && !self.client_email.contains('@') {
            return Err(Error::validation(format!(
                "'{}' is not an email address",
                self.client_email
            )));
        }
        Ok(())
    }
}

/// Body for inviting or replacing a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeamMember {
    /// Owning business
    pub business: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact phone, digits only
    pub phone_number: String,
    /// Contact email
    pub member_email: String,
    /// Joining date
    pub date_of_joining: NaiveDate,
    /// Access level
    pub access_type: AccessType,
    /// Whether the member takes bookings
    pub is_available: bool,
}

impl NewTeamMember {
    /// Checks names and phone before sending.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] describing the first failed rule.
    pub fn validate(&self) -> Result<()> {
        require_name("First name", &self.first_name)?;
        validate_phone(&self.phone_number)
    }
}

/// Partial update toggling a team member's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityPatch {
    /// New availability
    pub is_available: bool,
}

/// Body for creating or replacing a service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewService {
    /// Owning business
    pub business: i64,
    /// Display name
    pub service_name: String,
    /// Tier
    pub service_type: ServiceType,
    /// Category reference
    pub category: Option<i64>,
    /// Length in minutes
    pub duration_in_mins: u32,
    /// Price
    pub price: f64,
}

impl NewService {
    /// Checks name, duration, and price before sending.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] describing the first failed rule.
    pub fn validate(&self) -> Result<()> {
        require_name("Service name", &self.service_name)?;
        require_duration(self.duration_in_mins)?;
        require_price(self.price)
    }
}

/// Body for creating a package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPackage {
    /// Owning business
    pub business: i64,
    /// Display name
    pub package_name: String,
    /// Length in minutes
    pub package_duration_in_mins: u32,
    /// Price
    pub package_price: f64,
}

impl NewPackage {
    /// Checks name, duration, and price before sending.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] describing the first failed rule.
    pub fn validate(&self) -> Result<()> {
        require_name("Package name", &self.package_name)?;
        require_duration(self.package_duration_in_mins)?;
        require_price(self.package_price)
    }
}

/// Body for creating a service category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCategory {
    /// Owning business
    pub business: i64,
    /// Category name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

impl NewCategory {
    /// Checks the name before sending.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] when the name is blank or too long.
    pub fn validate(&self) -> Result<()> {
        require_name("Category name", &self.name)
    }
}

const MAX_NAME_LEN: usize = 255;

fn require_name(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(Error::validation(format!(
            "{field} is longer than {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Phone numbers are 10 to 15 digits, nothing else.
pub(crate) fn validate_phone(phone: &str) -> Result<()> {
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::validation("Phone number must contain only digits"));
    }
    if !(10..=15).contains(&phone.len()) {
        return Err(Error::validation(
            "Phone number must be between 10 and 15 digits",
        ));
    }
    Ok(())
}

fn require_duration(minutes: u32) -> Result<()> {
    if minutes == 0 {
        return Err(Error::validation("Duration must be at least one minute"));
    }
    Ok(())
}

fn require_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::validation(format!("Invalid price: {price}")));
    }
    Ok(())
}
