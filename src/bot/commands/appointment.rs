//! Appointment Discord commands - `appointment create|status|payment|delete`.
//!
//! Names typed by the owner are resolved against the business snapshot; the
//! snapshot is refreshed after every successful write.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            choices::{PayModeChoice, PaymentChoice, StatusChoice},
            handlers::autocomplete,
        },
        core::{
            appointment::{
                AppointmentDraft, build_payload, find_appointment, payload_with_payment,
                payload_with_status, split_names,
            },
            assembler::assemble_with,
            directory::Directory,
            report::format_view_line,
        },
        errors::{Error, Result},
        models::{Appointment, BusinessAggregate},
    };
    use tracing::info;

    /// Finds an appointment in the snapshot, refetching once if it is missing.
    async fn locate(data: &BotData, id: i64) -> Result<(BusinessAggregate, Appointment)> {
        let read = data.snapshot().await?;
        if let Ok(found) = find_appointment(&read.snapshot.aggregate, id) {
            let found = found.clone();
            return Ok((read.snapshot.aggregate, found));
        }
        let stored = data.refresh().await?;
        let found = find_appointment(&stored.aggregate, id)?.clone();
        Ok((stored.aggregate, found))
    }

    fn describe(aggregate: &BusinessAggregate, appointment: &Appointment, currency: &str) -> String {
        let directory = Directory::from_aggregate(aggregate);
        assemble_with(&directory, std::slice::from_ref(appointment))
            .first()
            .map(|view| format!("{} {}", view.date, format_view_line(view, currency)))
            .unwrap_or_default()
    }

    /// Parent command for booking and updating appointments.
    #[poise::command(
        slash_command,
        subcommands(
            "appointment_create",
            "appointment_status",
            "appointment_payment",
            "appointment_delete"
        )
    )]
    pub async fn appointment(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Appointment command. Available subcommands:\n\
            `/appointment create` - Book an appointment\n\
            `/appointment status` - Change an appointment's status\n\
            `/appointment payment` - Record a payment\n\
            `/appointment delete` - Delete an appointment";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Books a new appointment.
    ///
    /// The total is the sum of the chosen services' and packages' prices. New
    /// bookings start as Scheduled with payment Pending.
    #[poise::command(slash_command, rename = "create")]
    pub async fn appointment_create(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Client name or phone number"]
        #[autocomplete = "autocomplete::autocomplete_client_name"]
        client: String,
        #[description = "Day as YYYY-MM-DD"] date: String,
        #[description = "Start time as HH:MM"] time: String,
        #[description = "Assigned team member"]
        #[autocomplete = "autocomplete::autocomplete_staff_name"]
        staff: Option<String>,
        #[description = "Services, separated by commas"]
        #[autocomplete = "autocomplete::autocomplete_service_names"]
        services: Option<String>,
        #[description = "Packages, separated by commas"]
        #[autocomplete = "autocomplete::autocomplete_package_names"]
        packages: Option<String>,
        #[description = "How the client pays (defaults to Offline)"] pay_mode: Option<
            PayModeChoice,
        >,
        #[description = "Notes for the appointment"] notes: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let aggregate = &read.snapshot.aggregate;
        let directory = Directory::from_aggregate(aggregate);

        let draft = AppointmentDraft {
            client,
            staff,
            services: split_names(services.as_deref()),
            packages: split_names(packages.as_deref()),
            date,
            time,
            pay_mode: pay_mode.map(Into::into).unwrap_or_default(),
            notes,
        };
        let payload = build_payload(&data.context, &directory, &draft)?;
        let created = data.api.create_appointment(&payload).await?;
        info!(
            "Appointment {} booked by {} for client {}",
            created.id,
            ctx.author().name,
            payload.client_appointments
        );
        data.refresh_after_write().await;

        ctx.say(format!(
            "✅ Booked: {}",
            describe(aggregate, &created, data.currency())
        ))
        .await?;
        Ok(())
    }

    /// Marks an appointment as scheduled, completed, or cancelled.
    #[poise::command(slash_command, rename = "status")]
    pub async fn appointment_status(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Appointment id"] id: i64,
        #[description = "New status"] status: StatusChoice,
    ) -> Result<()> {
        let data = ctx.data();
        let (aggregate, existing) = locate(data, id).await?;
        let payload = payload_with_status(&data.context, &existing, status.into())?;
        let updated = data.api.update_appointment(id, &payload).await?;
        info!("Appointment {} set to {} by {}", id, updated.status, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!(
            "✅ Updated: {}",
            describe(&aggregate, &updated, data.currency())
        ))
        .await?;
        Ok(())
    }

    /// Records the payment state of an appointment.
    #[poise::command(slash_command, rename = "payment")]
    pub async fn appointment_payment(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Appointment id"] id: i64,
        #[description = "Payment state"] payment: PaymentChoice,
        #[description = "How it was paid (keeps the current mode if omitted)"] mode: Option<
            PayModeChoice,
        >,
    ) -> Result<()> {
        let data = ctx.data();
        let (aggregate, existing) = locate(data, id).await?;
        let payload = payload_with_payment(
            &data.context,
            &existing,
            payment.into(),
            mode.map(Into::into),
        )?;
        let updated = data.api.update_appointment(id, &payload).await?;
        info!(
            "Appointment {} payment set to {} by {}",
            id,
            updated.payment_status,
            ctx.author().name
        );
        data.refresh_after_write().await;

        ctx.say(format!(
            "✅ Payment recorded: {}",
            describe(&aggregate, &updated, data.currency())
        ))
        .await?;
        Ok(())
    }

    /// Deletes an appointment.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn appointment_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Appointment id"] id: i64,
    ) -> Result<()> {
        let data = ctx.data();
        data.api.delete_appointment(id).await?;
        info!("Appointment {} deleted by {}", id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!("🗑️ Appointment #{id} deleted.")).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
