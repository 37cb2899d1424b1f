//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from the locally stored business snapshot only, so typing
//! never waits on the backend. Without a snapshot (before the first `/sync`)
//! nothing is suggested.

use crate::{
    bot::BotData,
    core::{
        directory::{Directory, MAX_SUGGESTIONS},
        snapshot,
    },
    errors::Error,
    models::{BusinessAggregate, TeamMember},
};

async fn stored_aggregate(ctx: poise::Context<'_, BotData, Error>) -> Option<BusinessAggregate> {
    let data = ctx.data();
    snapshot::load_snapshot(&data.database, data.context.business_id)
        .await
        .ok()
        .flatten()
        .map(|stored| stored.aggregate)
}

/// Completes the last entry of a comma separated list, keeping the entries
/// already typed in front of it.
#[must_use]
pub fn complete_list_item(partial: &str, suggest: impl Fn(&str) -> Vec<String>) -> Vec<String> {
    let (done, current) = partial
        .rsplit_once(',')
        .map_or(("", partial), |(done, current)| (done, current));

    let prefix: Vec<&str> = done
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    suggest(current.trim())
        .into_iter()
        .filter(|name| !prefix.iter().any(|taken| taken.eq_ignore_ascii_case(name)))
        .map(|name| {
            if prefix.is_empty() {
                name
            } else {
                format!("{}, {name}", prefix.join(", "))
            }
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggests client names.
pub async fn autocomplete_client_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Some(aggregate) = stored_aggregate(ctx).await else {
        return Vec::new();
    };
    Directory::from_aggregate(&aggregate)
        .clients
        .suggest(partial, |c| c.client_name.clone())
}

/// Suggests team member full names.
pub async fn autocomplete_staff_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Some(aggregate) = stored_aggregate(ctx).await else {
        return Vec::new();
    };
    Directory::from_aggregate(&aggregate)
        .staff
        .suggest(partial, TeamMember::full_name)
}

/// Suggests service names, one comma separated entry at a time.
pub async fn autocomplete_service_names(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Some(aggregate) = stored_aggregate(ctx).await else {
        return Vec::new();
    };
    let directory = Directory::from_aggregate(&aggregate);
    complete_list_item(partial, |current| {
        directory.services.suggest(current, |s| s.service_name.clone())
    })
}

/// Suggests package names, one comma separated entry at a time.
pub async fn autocomplete_package_names(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Some(aggregate) = stored_aggregate(ctx).await else {
        return Vec::new();
    };
    let directory = Directory::from_aggregate(&aggregate);
    complete_list_item(partial, |current| {
        directory.packages.suggest(current, |p| p.package_name.clone())
    })
}

/// Suggests service category names.
pub async fn autocomplete_category_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Some(aggregate) = stored_aggregate(ctx).await else {
        return Vec::new();
    };
    let partial_lower = partial.trim().to_lowercase();
    let mut matching: Vec<String> = aggregate
        .categories
        .into_iter()
        .map(|category| category.name)
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .collect();
    matching.sort();
    matching.dedup();
    matching.truncate(MAX_SUGGESTIONS);
    matching
}
