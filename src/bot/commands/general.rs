//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't touch the backend.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**SalonDesk Help**\n\
        Run your salon's bookings and records from Discord.\n\n\
        **Schedule**\n\
        • `/dashboard` - Business overview, today's bookings, and money owed.\n\
        • `/bookings [date]` - Appointments on a day (default today).\n\
        • `/calendar [date]` - Half-hour grid of a day.\n\
        • `/sync` - Refetch everything from the backend.\n\n\
        **Appointments**\n\
        • `/appointment create <client> <date> <time> [staff] [services] [packages]` - Book an appointment.\n\
        • `/appointment status <id> <status>` - Mark scheduled, completed, or cancelled.\n\
        • `/appointment payment <id> <payment> [mode]` - Record a payment.\n\
        • `/appointment delete <id>` - Remove an appointment.\n\n\
        **Records**\n\
        • `/client_manage <add|list|delete>` - Manage clients.\n\
        • `/team_manage <add|list|availability|delete>` - Manage staff.\n\
        • `/service_manage <add|list|delete>` - Manage services.\n\
        • `/package_manage <add|list>` - Manage packages.\n\
        • `/category_manage <add|list>` - Manage service categories.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        Dates are `YYYY-MM-DD`, times are `HH:MM`. Separate several services or packages with commas.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
