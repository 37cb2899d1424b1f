//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `SalonDesk`: slash commands
//! for the business owner, autocomplete handlers, and the shared bot context.

/// Parameter choices shown as Discord dropdowns
pub mod choices;
/// Discord command implementations (schedule, appointments, people, catalog, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    api::{ReqwestTransport, SalonApi},
    config::{business::BusinessContext, settings::Settings},
    core::snapshot::{self, SnapshotRead, SnapshotSource, StoredSnapshot},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use tracing::{error, info, instrument, warn};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Local snapshot store
    pub database: DatabaseConnection,
    /// Backend client
    pub api: SalonApi<ReqwestTransport>,
    /// The business every command acts for
    pub context: BusinessContext,
    /// Loaded settings
    pub settings: Settings,
    timezone: Tz,
}

impl BotData {
    /// Bundles the shared state, validating the configured timezone.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an unknown timezone.
    pub fn new(
        database: DatabaseConnection,
        api: SalonApi<ReqwestTransport>,
        context: BusinessContext,
        settings: Settings,
    ) -> Result<Self> {
        let timezone = settings.display.tz()?;
        Ok(Self {
            database,
            api,
            context,
            settings,
            timezone,
        })
    }

    /// The salon's timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Today in the salon's timezone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        crate::core::calendar::today_in(self.timezone, Utc::now())
    }

    /// Currency prefix for amounts.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.settings.display.currency_symbol
    }

    /// The business aggregate, from the local store when recent enough.
    pub async fn snapshot(&self) -> Result<SnapshotRead> {
        snapshot::load_or_refresh(
            &self.database,
            &self.api,
            &self.context,
            self.settings.snapshot.max_age(),
            Utc::now(),
        )
        .await
    }

    /// Refetches the business aggregate, e.g. after a write.
    pub async fn refresh(&self) -> Result<StoredSnapshot> {
        snapshot::refresh_snapshot(&self.database, &self.api, &self.context, Utc::now()).await
    }

    /// Refreshes after a successful write. The write already happened, so a
    /// failed refresh is only logged; the next read retries it.
    pub async fn refresh_after_write(&self) {
        if let Err(e) = self.refresh().await {
            warn!("Snapshot refresh after write failed: {}", e);
        }
    }
}

/// Footer text telling the owner how current the data is.
#[must_use]
pub fn freshness_note(read: &SnapshotRead) -> String {
    let fetched = read.snapshot.fetched_at.format("%Y-%m-%d %H:%M UTC");
    match read.source {
        SnapshotSource::Fresh | SnapshotSource::Cached => format!("Data as of {fetched}"),
        SnapshotSource::Stale => format!("⚠️ Backend unreachable, showing data from {fetched}"),
    }
}

/// Every command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::ping(),
        commands::help(),
        commands::sync(),
        commands::dashboard(),
        commands::bookings(),
        commands::calendar(),
        commands::appointment(),
        commands::client_manage(),
        commands::team_manage(),
        commands::service_manage(),
        commands::package_manage(),
        commands::category_manage(),
    ]
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and serves commands until the client stops.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}

pub use commands::*;
pub use handlers::*;
