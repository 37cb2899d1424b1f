//! Client Discord commands - `client_manage add|list|delete`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        api::NewClient,
        bot::{BotData, freshness_note, handlers::autocomplete},
        core::{
            calendar::parse_day,
            directory::Directory,
            report::{LIST_FIELD_BUDGET, fit_fields, list_footer},
        },
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    const DEFAULT_CLIENT_TYPE: &str = "Regular";

    /// Parent command for managing the salon's clients.
    #[poise::command(
        slash_command,
        subcommands("client_add", "client_list", "client_delete")
    )]
    pub async fn client_manage(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Client management command. Available subcommands:\n\
            `/client_manage add` - Register a client\n\
            `/client_manage list` - List clients\n\
            `/client_manage delete` - Delete a client";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Registers a new client.
    #[poise::command(slash_command, rename = "add")]
    pub async fn client_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Client's name"] name: String,
        #[description = "Phone number, 10 to 15 digits"] phone: String,
        #[description = "Email address"] email: Option<String>,
        #[description = "Client type (defaults to Regular)"] client_type: Option<String>,
        #[description = "Date of birth as YYYY-MM-DD"] date_of_birth: Option<String>,
        #[description = "Gender"] gender: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let client = NewClient {
            business: data.context.business_id,
            client_name: name.trim().to_string(),
            client_type: client_type
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_CLIENT_TYPE.to_string()),
            client_email: email.unwrap_or_default().trim().to_string(),
            client_phone: phone.trim().to_string(),
            client_dob: date_of_birth.as_deref().map(parse_day).transpose()?,
            client_gender: gender,
        };

        let created = data.api.create_client(&client).await?;
        info!("Client {} added by {}", created.id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!(
            "✅ Client **{}** added ({}, {}).",
            created.client_name, created.client_phone, created.client_type
        ))
        .await?;
        Ok(())
    }

    /// Lists the salon's clients.
    #[poise::command(slash_command, rename = "list")]
    pub async fn client_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let clients = &read.snapshot.aggregate.clients;

        if clients.is_empty() {
            ctx.say("No clients yet. Use `/client_manage add` to register one!")
                .await?;
            return Ok(());
        }

        let max_listed = data.settings.display.max_listed.min(25);
        let all_fields = clients
            .iter()
            .take(max_listed)
            .map(|client| {
                let mut value = format!("📞 {}\n🏷️ {}", client.client_phone, client.client_type);
                if !client.client_email.is_empty() {
                    value.push_str(&format!("\n✉️ {}", client.client_email));
                }
                (client.client_name.clone(), value, true)
            })
            .collect::<Vec<_>>();
        let fields = fit_fields(all_fields, LIST_FIELD_BUDGET);
        let footer = list_footer(fields.len(), clients.len(), &freshness_note(&read));

        let embed = serenity::CreateEmbed::default()
            .title(format!("**Clients** ({})", clients.len()))
            .color(0x0058_65F2)
            .fields(fields)
            .footer(serenity::CreateEmbedFooter::new(footer));

        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }

    /// Deletes a client.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn client_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Client name or phone number"]
        #[autocomplete = "autocomplete::autocomplete_client_name"]
        client: String,
    ) -> Result<()> {
        let data = ctx.data();
        let read = data.snapshot().await?;
        let directory = Directory::from_aggregate(&read.snapshot.aggregate);
        let found = directory
            .find_client(&client)
            .ok_or_else(|| Error::not_found("client", client.trim()))?;

        data.api.delete_client(found.id).await?;
        info!("Client {} deleted by {}", found.id, ctx.author().name);
        data.refresh_after_write().await;

        ctx.say(format!("🗑️ Client **{}** deleted.", found.client_name))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
