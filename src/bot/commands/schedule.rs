//! Schedule Discord commands - `dashboard`, `bookings`, `calendar`, and `sync`.
//!
//! These commands read the business snapshot, assemble appointment views, and
//! render them. None of them writes to the backend.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, freshness_note},
        core::{
            assembler::{AppointmentView, assemble_aggregate},
            calendar::{self, filter_by_date, schedule_for_day},
            dashboard::summarize,
            report::{
                EMBED_FIELD_LIMIT, EmbedField, LIST_FIELD_BUDGET, NO_PACKAGES, NO_SERVICES,
                collection_rate, fit_fields, fit_lines, format_amount, format_duration,
                format_names, format_progress_bar, format_view_line, list_footer, truncate_text,
            },
        },
        errors::{Error, Result},
    };
    use chrono::Utc;
    use poise::serenity_prelude as serenity;
    use tracing::info;

    const EMBED_DESCRIPTION_LIMIT: usize = 4000;
    const NOTES_LABEL: &str = "\n**Notes:** ";

    pub(super) fn booking_field(view: &AppointmentView, currency: &str) -> EmbedField {
        let mut value = format!(
            "**Staff:** {}\n**Services:** {}\n**Packages:** {}\n**Duration:** {}\n**Amount:** {} ({}, {})\n**Status:** {}",
            view.staff_name,
            format_names(&view.services, NO_SERVICES),
            format_names(&view.packages, NO_PACKAGES),
            format_duration(view.duration_mins),
            format_amount(currency, view.total_amount),
            view.payment_status,
            view.pay_mode,
            view.status,
        );
        if let Some(phone) = &view.client_phone {
            value.push_str(&format!("\n**Phone:** {phone}"));
        }
        // Notes give way first; the rest of the value is capped by fit_fields.
        if let Some(notes) = view.notes.as_deref().filter(|notes| !notes.is_empty()) {
            let room = EMBED_FIELD_LIMIT
                .saturating_sub(value.chars().count() + NOTES_LABEL.chars().count());
            if room > 1 {
                value.push_str(NOTES_LABEL);
                value.push_str(&truncate_text(notes, room));
            }
        }
        (
            format!("#{} at {} - {}", view.id, view.time, view.client_name),
            value,
            false,
        )
    }

    /// Shows the business overview: counts, today's bookings, and money owed.
    #[poise::command(slash_command)]
    pub async fn dashboard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let aggregate = &read.snapshot.aggregate;
        let views = assemble_aggregate(aggregate);
        let today = data.today();
        let summary = summarize(aggregate, &views, today, data.settings.display.max_listed.min(10));
        let currency = data.currency();

        let upcoming: Vec<String> = summary
            .upcoming
            .iter()
            .map(|view| format!("{} {}", view.date, format_view_line(view, currency)))
            .collect();
        let upcoming_text = if upcoming.is_empty() {
            "Nothing scheduled.".to_string()
        } else {
            fit_lines(&upcoming, EMBED_FIELD_LIMIT)
        };

        let rate = collection_rate(summary.collected_total, summary.pending_total);
        let embed = serenity::CreateEmbed::default()
            .title(format!("**{}**", summary.salon_name))
            .description(format!("Owner: {}\nToday: {today}", summary.owner_name))
            .color(0x00C7_6B98)
            .field(
                "Team",
                format!("{} ({} available)", summary.team_size, summary.available_staff),
                true,
            )
            .field("Clients", summary.client_count.to_string(), true)
            .field(
                "Catalog",
                format!(
                    "{} services, {} packages",
                    summary.service_count, summary.package_count
                ),
                true,
            )
            .field("Bookings today", summary.today_count.to_string(), true)
            .field("Pending", format_amount(currency, summary.pending_total), true)
            .field("Collected", format_amount(currency, summary.collected_total), true)
            .field("Collection rate", format_progress_bar(rate, None), false)
            .field("Upcoming", upcoming_text, false)
            .footer(serenity::CreateEmbedFooter::new(freshness_note(&read)));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Lists the appointments on a day.
    #[poise::command(slash_command)]
    pub async fn bookings(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Day as YYYY-MM-DD (defaults to today)"] date: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let day = calendar::day_or_today(date.as_deref(), data.timezone(), Utc::now())?;
        let read = data.snapshot().await?;
        let views = assemble_aggregate(&read.snapshot.aggregate);
        let day_views = filter_by_date(&views, day);

        if day_views.is_empty() {
            ctx.say(format!("No appointments on {day}.")).await?;
            return Ok(());
        }

        let max_listed = data.settings.display.max_listed.min(25);
        let fields = fit_fields(
            day_views
                .iter()
                .take(max_listed)
                .map(|view| booking_field(view, data.currency())),
            LIST_FIELD_BUDGET,
        );
        let footer = list_footer(fields.len(), day_views.len(), &freshness_note(&read));

        let embed = serenity::CreateEmbed::default()
            .title(format!("**Bookings on {day}**"))
            .description(format!("{} appointment(s)", day_views.len()))
            .color(0x0058_65F2)
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Shows a day as half-hour slots.
    #[poise::command(slash_command)]
    pub async fn calendar(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Day as YYYY-MM-DD (defaults to today)"] date: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let day = calendar::day_or_today(date.as_deref(), data.timezone(), Utc::now())?;
        let read = data.snapshot().await?;
        let views = assemble_aggregate(&read.snapshot.aggregate);
        let schedule = schedule_for_day(&views, day);

        let lines: Vec<String> = schedule
            .busy_slots()
            .flat_map(|(slot, views)| {
                views.iter().map(move |view| {
                    format!(
                        "`{slot}` {} with {} ({}, {})",
                        view.client_name,
                        view.staff_name,
                        format_names(&view.services, NO_SERVICES),
                        format_duration(view.duration_mins),
                    )
                })
            })
            .collect();

        let description = if lines.is_empty() {
            "Every slot is free.".to_string()
        } else {
            fit_lines(&lines, EMBED_DESCRIPTION_LIMIT)
        };
        let busy = schedule.busy_slots().count();

        let embed = serenity::CreateEmbed::default()
            .title(format!("**Calendar for {day}**"))
            .description(description)
            .color(0x0058_65F2)
            .field(
                "Slots",
                format!(
                    "{busy} busy, {} free",
                    calendar::SLOTS_PER_DAY - busy
                ),
                true,
            )
            .field("Appointments", schedule.appointment_count().to_string(), true)
            .footer(serenity::CreateEmbedFooter::new(freshness_note(&read)));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Refetches the business from the backend.
    #[poise::command(slash_command)]
    pub async fn sync(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.defer().await?;
        let stored = ctx.data().refresh().await?;
        let aggregate = &stored.aggregate;
        info!(
            "Manual sync by {} for business {}",
            ctx.author().name,
            stored.business_id
        );

        ctx.say(format!(
            "✅ Synced **{}**: {} appointments, {} clients, {} team members, {} services, {} packages.",
            aggregate.business.salon_name,
            aggregate.appointments.len(),
            aggregate.clients.len(),
            aggregate.team_members.len(),
            aggregate.services.len(),
            aggregate.packages.len(),
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
