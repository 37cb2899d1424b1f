//! Team Discord commands - `team_manage add|list|availability|delete`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        api::NewTeamMember,
        bot::{BotData, choices::AccessChoice, freshness_note, handlers::autocomplete},
        core::{
            calendar::parse_day,
            directory::Directory,
            report::{LIST_FIELD_BUDGET, fit_fields, list_footer},
        },
        errors::{Error, Result},
        models::{AccessType, TeamMember},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    async fn find_member(data: &BotData, name: &str) -> Result<TeamMember> {
        let read = data.snapshot().await?;
        Directory::from_aggregate(&read.snapshot.aggregate)
            .find_staff(name)
            .cloned()
            .ok_or_else(|| Error::not_found("team member", name.trim()))
    }

    /// Parent command for managing the salon's team.
    #[poise::command(
        slash_command,
        subcommands("team_add", "team_list", "team_availability", "team_delete")
    )]
    pub async fn team_manage(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Team management command. Available subcommands:\n\
            `/team_manage add` - Add a team member\n\
            `/team_manage list` - List the team\n\
            `/team_manage availability` - Set whether someone takes bookings\n\
            `/team_manage delete` - Remove a team member";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a team member.
    #[poise::command(slash_command, rename = "add")]
    pub async fn team_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "First name"] first_name: String,
        #[description = "Last name"] last_name: String,
        #[description = "Phone number, 10 to 15 digits"] phone: String,
        #[description = "Email address"] email: String,
        #[description = "Console access level"] access: AccessChoice,
        #[description = "Joining date as YYYY-MM-DD (defaults to today)"] joined: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let date_of_joining = match joined.as_deref() {
            Some(day) => parse_day(day)?,
            None => data.today(),
        };
        let member = NewTeamMember {
            business: data.context.business_id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            phone_number: phone.trim().to_string(),
            member_email: email.trim().to_string(),
            date_of_joining,
            access_type: access.into(),
            is_available: true,
        };

        let created = data.api.create_team_member(&member).await?;
        info!("Team member {} added by {}", created.id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!("✅ **{}** joined the team.", created.full_name()))
            .await?;
        Ok(())
    }

    /// Lists the team with availability.
    #[poise::command(slash_command, rename = "list")]
    pub async fn team_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let team = &read.snapshot.aggregate.team_members;

        if team.is_empty() {
            ctx.say("No team members yet. Use `/team_manage add` to add one!")
                .await?;
            return Ok(());
        }

        let all_fields = team
            .iter()
            .take(data.settings.display.max_listed.min(25))
            .map(|member| {
                let availability = if member.is_available {
                    "🟢 Available"
                } else {
                    "🔴 Unavailable"
                };
                let access = member
                    .access_type
                    .map_or("No access", AccessType::as_str);
                (
                    member.full_name(),
                    format!("{availability}\n🔑 {access}\n📞 {}", member.phone_number),
                    true,
                )
            })
            .collect::<Vec<_>>();
        let fields = fit_fields(all_fields, LIST_FIELD_BUDGET);
        let footer = list_footer(fields.len(), team.len(), &freshness_note(&read));

        let embed = serenity::CreateEmbed::default()
            .title(format!("**Team** ({})", team.len()))
            .color(0x0058_65F2)
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Sets whether a team member takes bookings.
    #[poise::command(slash_command, rename = "availability")]
    pub async fn team_availability(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Team member"]
        #[autocomplete = "autocomplete::autocomplete_staff_name"]
        member: String,
        #[description = "Takes bookings"] available: bool,
    ) -> Result<()> {
        let data = ctx.data();
        let found = find_member(data, &member).await?;
        let updated = data.api.set_availability(found.id, available).await?;
        info!(
            "Team member {} availability set to {} by {}",
            updated.id,
            updated.is_available,
            ctx.author().name
        );
        data.refresh_after_write().await;

        let state = if updated.is_available {
            "is taking bookings"
        } else {
            "is not taking bookings"
        };
        ctx.say(format!("✅ **{}** {state}.", updated.full_name()))
            .await?;
        Ok(())
    }

    /// Removes a team member.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn team_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Team member"]
        #[autocomplete = "autocomplete::autocomplete_staff_name"]
        member: String,
    ) -> Result<()> {
        let data = ctx.data();
        let found = find_member(data, &member).await?;
        data.api.delete_team_member(found.id).await?;
        info!("Team member {} removed by {}", found.id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!("🗑️ **{}** removed from the team.", found.full_name()))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
