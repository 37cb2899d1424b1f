//! Typed endpoints of the salon booking backend.

use super::{
    HttpTransport,
    payloads::{
        AppointmentPayload, AvailabilityPatch, NewCategory, NewClient, NewPackage, NewService,
        NewTeamMember, PhoneLookup,
    },
};
use crate::{
    config::business::BusinessContext,
    errors::Result,
    models::{
        Appointment, BusinessAggregate, BusinessCheck, Client, Package, Service,
        ServiceCategory, TeamMember,
    },
};
use chrono::NaiveDate;
use tracing::instrument;

const APPOINTMENTS: &str = "api/appointments/";
const CLIENTS: &str = "api/clients/";
const TEAM_MEMBERS: &str = "api/team-members/";
const SERVICES: &str = "api/services/";
const PACKAGES: &str = "api/packages/";
const CATEGORIES: &str = "api/service-categories/";

fn detail(collection: &str, id: i64) -> String {
    format!("{collection}{id}/")
}

fn scoped(collection: &str, ctx: &BusinessContext) -> String {
    format!("{collection}?business_id={}", ctx.business_id)
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day
    pub start: NaiveDate,
    /// Last day
    pub end: NaiveDate,
}

/// Backend client. Every business-scoped call takes the [`BusinessContext`]
/// explicitly.
#[derive(Debug, Clone)]
pub struct SalonApi<T> {
    transport: T,
}

impl<T: HttpTransport> SalonApi<T> {
    /// Wraps a transport.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Looks up which business a phone number belongs to.
    #[instrument(skip(self))]
    pub async fn check_business(&self, phone_number: &str) -> Result<BusinessCheck> {
        self.transport
            .post("api/check-business/", &PhoneLookup { phone_number })
            .await
    }

    /// Fetches the business with all of its collections in one request.
    #[instrument(skip(self))]
    pub async fn fetch_business(&self, business_id: i64) -> Result<BusinessAggregate> {
        self.transport
            .get(&format!("api/business/{business_id}/"))
            .await
    }

    // ========== Appointments ==========

    /// Lists the business's appointments, optionally limited to a date range.
    pub async fn list_appointments(
        &self,
        ctx: &BusinessContext,
        range: Option<DateRange>,
    ) -> Result<Vec<Appointment>> {
        let mut path = scoped(APPOINTMENTS, ctx);
        if let Some(range) = range {
            path.push_str(&format!(
                "&start_date={}&end_date={}",
                range.start.format("%Y-%m-%d"),
                range.end.format("%Y-%m-%d")
            ));
        }
        self.transport.get(&path).await
    }

    /// Books a new appointment.
    pub async fn create_appointment(&self, payload: &AppointmentPayload) -> Result<Appointment> {
        payload.validate()?;
        self.transport.post(APPOINTMENTS, payload).await
    }

    /// Replaces an appointment.
    pub async fn update_appointment(
        &self,
        id: i64,
        payload: &AppointmentPayload,
    ) -> Result<Appointment> {
        payload.validate()?;
        self.transport.put(&detail(APPOINTMENTS, id), payload).await
    }

    /// Deletes an appointment.
    pub async fn delete_appointment(&self, id: i64) -> Result<()> {
        self.transport.delete(&detail(APPOINTMENTS, id)).await
    }

    // ========== Clients ==========

    /// Lists the business's clients.
    pub async fn list_clients(&self, ctx: &BusinessContext) -> Result<Vec<Client>> {
        self.transport.get(&scoped(CLIENTS, ctx)).await
    }

    /// Registers a client.
    pub async fn create_client(&self, client: &NewClient) -> Result<Client> {
        client.validate()?;
        self.transport.post(CLIENTS, client).await
    }

    /// Replaces a client's details.
    pub async fn update_client(&self, id: i64, client: &NewClient) -> Result<Client> {
        client.validate()?;
        self.transport.put(&detail(CLIENTS, id), client).await
    }

    /// Deletes a client.
    pub async fn delete_client(&self, id: i64) -> Result<()> {
        self.transport.delete(&detail(CLIENTS, id)).await
    }

    // ========== Team members ==========

    /// Lists the business's team members.
    pub async fn list_team_members(&self, ctx: &BusinessContext) -> Result<Vec<TeamMember>> {
        self.transport.get(&scoped(TEAM_MEMBERS, ctx)).await
    }

    /// Adds a team member.
    pub async fn create_team_member(&self, member: &NewTeamMember) -> Result<TeamMember> {
        member.validate()?;
        self.transport.post(TEAM_MEMBERS, member).await
    }

    /// Replaces a team member's details.
    pub async fn update_team_member(
        &self,
        id: i64,
        member: &NewTeamMember,
    ) -> Result<TeamMember> {
        member.validate()?;
        self.transport.put(&detail(TEAM_MEMBERS, id), member).await
    }

    /// Marks a team member as taking bookings or not.
    pub async fn set_availability(&self, id: i64, is_available: bool) -> Result<TeamMember> {
        self.transport
            .patch(&detail(TEAM_MEMBERS, id), &AvailabilityPatch { is_available })
            .await
    }

    /// Removes a team member.
    pub async fn delete_team_member(&self, id: i64) -> Result<()> {
        self.transport.delete(&detail(TEAM_MEMBERS, id)).await
    }

    // ========== Catalog ==========

    /// Lists the business's services.
    pub async fn list_services(&self, ctx: &BusinessContext) -> Result<Vec<Service>> {
        self.transport.get(&scoped(SERVICES, ctx)).await
    }

    /// Adds a service.
    pub async fn create_service(&self, service: &NewService) -> Result<Service> {
        service.validate()?;
        self.transport.post(SERVICES, service).await
    }

    /// Replaces a service.
    pub async fn update_service(&self, id: i64, service: &NewService) -> Result<Service> {
        service.validate()?;
        self.transport.put(&detail(SERVICES, id), service).await
    }

    /// Deletes a service.
    pub async fn delete_service(&self, id: i64) -> Result<()> {
        self.transport.delete(&detail(SERVICES, id)).await
    }

    /// Lists the business's packages.
    pub async fn list_packages(&self, ctx: &BusinessContext) -> Result<Vec<Package>> {
        self.transport.get(&scoped(PACKAGES, ctx)).await
    }

    /// Adds a package.
    pub async fn create_package(&self, package: &NewPackage) -> Result<Package> {
        package.validate()?;
        self.transport.post(PACKAGES, package).await
    }

    /// Lists the business's service categories.
    pub async fn list_categories(&self, ctx: &BusinessContext) -> Result<Vec<ServiceCategory>> {
        self.transport.get(&scoped(CATEGORIES, ctx)).await
    }

    /// Adds a service category.
    pub async fn create_category(&self, category: &NewCategory) -> Result<ServiceCategory> {
        category.validate()?;
        self.transport.post(CATEGORIES, category).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        errors::Error,
        models::AccessType,
        test_utils::{FakeTransport, SAMPLE_AGGREGATE_JSON, sample_context},
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_invalid_appointment_is_not_sent() -> Result<()> {
        let aggregate: crate::models::BusinessAggregate = serde_json::from_str(SAMPLE_AGGREGATE_JSON)?;
        let mut payload = AppointmentPayload::from_existing(1, &aggregate.appointments[0])?;
        payload.services.clear();
        payload.packages.clear();
        let api = SalonApi::new(FakeTransport::default());

        let result = api.create_appointment(&payload).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        let result = api.update_appointment(1, &payload).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!(api.transport().requests().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_business_hits_aggregate_endpoint() -> Result<()> {
        let transport = FakeTransport::default();
        transport.respond(
            "GET",
            "api/business/1/",
            serde_json::from_str(SAMPLE_AGGREGATE_JSON)?,
        );
        let api = SalonApi::new(transport);

        let aggregate = api.fetch_business(1).await?;
        assert_eq!(aggregate.business.salon_name, "Shear Bliss");
        assert_eq!(api.transport().requests().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_appointments_scopes_by_business_and_range() -> Result<()> {
        let transport = FakeTransport::default();
        let path = "api/appointments/?business_id=1&start_date=2024-06-01&end_date=2024-06-30";
        transport.respond("GET", path, json!([]));
        let api = SalonApi::new(transport);

        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        };
        let appointments = api.list_appointments(&sample_context(), Some(range)).await?;
        assert!(appointments.is_empty());
        assert_eq!(api.transport().requests()[0].path, path);
        Ok(())
    }

    #[tokio::test]
    async fn test_check_business_posts_phone_number() -> Result<()> {
        let transport = FakeTransport::default();
        transport.respond(
            "POST",
            "api/check-business/",
            json!({"exists": true, "redirect": "/dashboard", "business_id": 1}),
        );
        let api = SalonApi::new(transport);

        let check = api.check_business("9876543210").await?;
        assert_eq!(check.business_id(), Some(1));
        let requests = api.transport().requests();
        assert_eq!(requests[0].body, Some(json!({"phone_number": "9876543210"})));
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_backend() {
        let api = SalonApi::new(FakeTransport::default());
        let member = NewTeamMember {
            business: 1,
            first_name: "Priya".to_string(),
            last_name: "Shah".to_string(),
            phone_number: "12ab".to_string(),
            member_email: "priya@example.com".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            access_type: AccessType::Admin,
            is_available: true,
        };

        let result = api.create_team_member(&member).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!(api.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_availability_uses_patch() -> Result<()> {
        let transport = FakeTransport::default();
        transport.respond(
            "PATCH",
            "api/team-members/2/",
            json!({"id": 2, "first_name": "Priya", "last_name": "Shah", "is_available": true}),
        );
        let api = SalonApi::new(transport);

        let member = api.set_availability(2, true).await?;
        assert!(member.is_available);
        assert_eq!(
            api.transport().requests()[0].body,
            Some(json!({"is_available": true}))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_targets_detail_path() -> Result<()> {
        let transport = FakeTransport::default();
        let api = SalonApi::new(transport);

        api.delete_appointment(12).await?;
        let requests = api.transport().requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "api/appointments/12/");
        Ok(())
    }

    #[tokio::test]
    async fn test_reference_lists_are_business_scoped() -> Result<()> {
        let transport = FakeTransport::default();
        let aggregate: serde_json::Value = serde_json::from_str(SAMPLE_AGGREGATE_JSON)?;
        transport.respond("GET", "api/clients/?business_id=1", aggregate["clients"].clone());
        transport.respond(
            "GET",
            "api/team-members/?business_id=1",
            aggregate["business_team_members"].clone(),
        );
        transport.respond(
            "GET",
            "api/services/?business_id=1",
            aggregate["business_services"].clone(),
        );
        transport.respond(
            "GET",
            "api/packages/?business_id=1",
            aggregate["business_packages"].clone(),
        );
        transport.respond(
            "GET",
            "api/service-categories/?business_id=1",
            aggregate["business_categories"].clone(),
        );
        let api = SalonApi::new(transport);
        let ctx = sample_context();

        assert_eq!(api.list_clients(&ctx).await?.len(), 2);
        assert_eq!(api.list_team_members(&ctx).await?.len(), 2);
        let services = api.list_services(&ctx).await?;
        assert_eq!(services[1].service_name, "Hair Spa");
        assert_eq!(api.list_packages(&ctx).await?[0].package_name, "Bridal Glow");
        assert_eq!(api.list_categories(&ctx).await?[0].name, "Hair");
        assert_eq!(api.transport().requests().len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_updates_put_to_detail_paths() -> Result<()> {
        let transport = FakeTransport::default();
        transport.respond(
            "PUT",
            "api/clients/1/",
            json!({"id": 1, "client_name": "Asha R", "client_phone": "9000000001"}),
        );
        transport.respond(
            "PUT",
            "api/services/2/",
            json!({"id": 2, "service_name": "Hair Spa", "duration_in_mins": 75, "price": "900.00"}),
        );
        transport.respond(
            "PUT",
            "api/team-members/1/",
            json!({"id": 1, "first_name": "Ravi", "last_name": "K"}),
        );
        let api = SalonApi::new(transport);

        let client = NewClient {
            business: 1,
            client_name: "Asha R".to_string(),
            client_type: "Regular".to_string(),
            client_email: String::new(),
            client_phone: "9000000001".to_string(),
            client_dob: None,
            client_gender: None,
        };
        assert_eq!(api.update_client(1, &client).await?.client_name, "Asha R");

        let service = NewService {
            business: 1,
            service_name: "Hair Spa".to_string(),
            service_type: crate::models::ServiceType::Premium,
            category: Some(1),
            duration_in_mins: 75,
            price: 900.0,
        };
        let updated = api.update_service(2, &service).await?;
        assert_eq!(updated.duration_in_mins, 75);

        let member = NewTeamMember {
            business: 1,
            first_name: "Ravi".to_string(),
            last_name: "K".to_string(),
            phone_number: "9100000001".to_string(),
            member_email: String::new(),
            date_of_joining: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            access_type: AccessType::Admin,
            is_available: true,
        };
        assert_eq!(api.update_team_member(1, &member).await?.full_name(), "Ravi K");

        let requests = api.transport().requests();
        assert!(requests.iter().all(|r| r.method == "PUT"));
        assert_eq!(requests[1].body.as_ref().unwrap()["service_type"], "Premium");
        Ok(())
    }

    #[tokio::test]
    async fn test_unscripted_request_is_not_found() {
        let api = SalonApi::new(FakeTransport::default());
        let result = api.list_clients(&sample_context()).await;
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }
}
