use dotenvy::dotenv;
use salon_desk::{
    api::{ReqwestTransport, SalonApi},
    bot::{self, BotData},
    config::{business, database, settings},
    core::business::resolve_context,
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load salon.toml plus env overrides
    let settings = settings::load_app_settings()
        .inspect_err(|e| error!("Critical error loading settings: {}", e))?;
    info!("Backend at {}", settings.api.base_url);

    // 4. Open the snapshot database
    let db = database::connect(&database::get_database_url())
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Work out which business this console acts for
    let api = SalonApi::new(ReqwestTransport::new(&settings.api)?);
    let identity = business::identity_from_env()
        .inspect_err(|e| error!("No business identity: {}", e))?;
    let context = resolve_context(&api, identity)
        .await
        .inspect(|ctx| info!("Acting for business {}", ctx.business_id))
        .inspect_err(|e| error!("Failed to resolve business: {}", e))?;

    // 6. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in settings
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    let data = BotData::new(db, api, context, settings)?;
    bot::run_bot(token, data).await
}
