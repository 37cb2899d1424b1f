//! Shared test utilities for `SalonDesk`.
//!
//! Provides a sample business aggregate, an in-memory `SQLite` setup, and a
//! [`FakeTransport`] that serves canned JSON and records every request.

use crate::{
    api::HttpTransport,
    config::business::BusinessContext,
    errors::{Error, Result},
    models::{Appointment, BusinessAggregate},
};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

/// Business 1 as the backend returns it from `/api/business/1/`.
///
/// Appointment 2 references a service that does not exist (99) and appointment
/// 3 references a missing client, staff member, and package.
pub const SAMPLE_AGGREGATE_JSON: &str = r#"{
    "id": 1,
    "phone_number": "9876543210",
    "owner_name": "Meera Nair",
    "salon_name": "Shear Bliss",
    "owner_email": "meera@shearbliss.in",
    "gst": null,
    "salon_description": "Neighbourhood salon",
    "clients": [
        {"id": 1, "client_name": "Asha", "client_phone": "9000000001", "client_email": "asha@example.com", "client_type": "Regular"},
        {"id": 2, "client_name": "Vikram", "client_phone": "9000000002", "client_email": "", "client_type": "Walk-in"}
    ],
    "business_team_members": [
        {"id": 1, "first_name": "Ravi", "last_name": "Kumar", "phone_number": "9100000001", "member_email": "ravi@shearbliss.in", "date_of_joining": "2023-04-01", "access_type": "Admin", "is_available": true},
        {"id": 2, "first_name": "Priya", "last_name": "Shah", "phone_number": "9100000002", "member_email": "priya@shearbliss.in", "date_of_joining": "2024-01-15", "access_type": "Super Admin", "is_available": false}
    ],
    "business_services": [
        {"id": 1, "service_name": "Haircut", "service_type": "Basic", "category": 1, "duration_in_mins": 30, "price": 300},
        {"id": 2, "service_name": "Hair Spa", "service_type": "Premium", "category": 1, "duration_in_mins": 60, "price": "850.00"}
    ],
    "business_packages": [
        {"id": 1, "package_name": "Bridal Glow", "package_duration_in_mins": 120, "package_price": 2500}
    ],
    "business_categories": [
        {"id": 1, "name": "Hair", "description": "Cuts and treatments"}
    ],
    "business_appointments": [
        {"id": 1, "client_appointments": 1, "staff": 1, "services": [1], "packages": [],
         "appointment_date": "2024-06-10", "appointment_time": "14:05:00", "total_amount": 300,
         "payment_status": "Pending", "pay_mode": "Offline", "status": "Scheduled", "notes": ""},
        {"id": 2, "client_appointments": 2, "staff": null, "services": [1, 99], "packages": [1],
         "appointment_date": "2024-06-11", "appointment_time": "10:45:00", "total_amount": "2800.00",
         "payment_status": "Completed", "pay_mode": "Online", "status": "Completed", "notes": "Bride's trial"},
        {"id": 3, "client_appointments": 77, "staff": 5, "services": [], "packages": [42],
         "appointment_date": "2024-06-12", "appointment_time": "18:30:00", "total_amount": 0,
         "payment_status": "Pending", "pay_mode": "Offline", "status": "Cancelled", "notes": null}
    ]
}"#;

/// [`SAMPLE_AGGREGATE_JSON`] decoded.
#[allow(clippy::unwrap_used)]
pub fn sample_aggregate() -> BusinessAggregate {
    serde_json::from_str(SAMPLE_AGGREGATE_JSON).unwrap()
}

/// Context for the sample business.
pub const fn sample_context() -> BusinessContext {
    BusinessContext::new(1)
}

/// An appointment booking service 1 for 300, with the given references.
#[allow(clippy::unwrap_used)]
pub fn simple_appointment(
    id: i64,
    client: Option<i64>,
    staff: Option<i64>,
    date: &str,
    time: &str,
) -> Appointment {
    Appointment {
        id,
        client,
        staff,
        services: vec![1],
        packages: vec![],
        appointment_date: date.parse().unwrap(),
        appointment_time: time.parse().unwrap(),
        total_amount: 300.0,
        payment_status: crate::models::PaymentStatus::Pending,
        pay_mode: crate::models::PayMode::Offline,
        status: crate::models::AppointmentStatus::Scheduled,
        notes: None,
    }
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Routes tracing output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// One request seen by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: &'static str,
    /// Path relative to the backend root
    pub path: String,
    /// JSON body, for methods that send one
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Json(Value),
    Status(u16),
}

/// In-memory [`HttpTransport`].
///
/// Answers are scripted per method and path; a later script replaces an
/// earlier one. Unscripted reads and writes fail with [`Error::NotFound`],
/// unscripted deletes succeed.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<(&'static str, String), Scripted>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    /// Answers `method path` with `body`.
    pub fn respond(&self, method: &'static str, path: &str, body: Value) {
        self.script(method, path, Scripted::Json(body));
    }

    /// Answers `method path` with an error status.
    pub fn fail(&self, method: &'static str, path: &str, status: u16) {
        self.script(method, path, Scripted::Status(status));
    }

    /// Every request made so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn script(&self, method: &'static str, path: &str, answer: Scripted) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, path.to_string()), answer);
    }

    fn record(&self, method: &'static str, path: &str, body: Option<Value>) -> Option<Scripted> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                method,
                path: path.to_string(),
                body,
            });
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(method, path.to_string()))
            .cloned()
    }

    fn answer<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        match self.record(method, path, body) {
            Some(Scripted::Json(value)) => Ok(serde_json::from_value(value)?),
            Some(Scripted::Status(status)) => Err(Error::Api {
                status,
                body: format!("scripted failure for {method} {path}"),
            }),
            None => Err(Error::not_found("backend resource", path)),
        }
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T> {
        self.answer("GET", path, None)
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.answer("POST", path, Some(serde_json::to_value(body)?))
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.answer("PUT", path, Some(serde_json::to_value(body)?))
    }

    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.answer("PATCH", path, Some(serde_json::to_value(body)?))
    }

    async fn delete(&self, path: &str) -> Result<()> {
        match self.record("DELETE", path, None) {
            Some(Scripted::Status(status)) => Err(Error::Api {
                status,
                body: format!("scripted failure for DELETE {path}"),
            }),
            _ => Ok(()),
        }
    }
}
