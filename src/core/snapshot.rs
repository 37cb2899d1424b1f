//! Snapshot business logic - Local copy of the business aggregate.
//!
//! Read commands are answered from the last aggregate fetched for the business,
//! kept as JSON in the `business_snapshots` table. When the stored copy is older
//! than the configured age it is refetched in one request. If the backend is
//! unreachable, the stale copy is served and marked as such.

use crate::{
    api::{HttpTransport, SalonApi},
    config::business::BusinessContext,
    entities::{BusinessSnapshot, BusinessSnapshotColumn, business_snapshot},
    errors::{Error, Result},
    models::BusinessAggregate,
};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveValue::NotSet, Set, prelude::*};
use tracing::{info, instrument, warn};

/// A business aggregate together with the time it was fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSnapshot {
    /// The business the aggregate belongs to
    pub business_id: i64,
    /// The decoded aggregate
    pub aggregate: BusinessAggregate,
    /// When it was fetched from the backend
    pub fetched_at: DateTime<Utc>,
}

impl StoredSnapshot {
    /// Age of the snapshot at `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }
}

/// Where a snapshot read came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Just fetched from the backend
    Fresh,
    /// Served from the local store, within the configured age
    Cached,
    /// Served from the local store because the backend could not be reached
    Stale,
}

/// Result of [`load_or_refresh`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRead {
    /// The snapshot served
    pub snapshot: StoredSnapshot,
    /// How it was obtained
    pub source: SnapshotSource,
}

/// Stores `aggregate` as the business's snapshot, replacing any previous one.
pub async fn save_snapshot(
    db: &DatabaseConnection,
    aggregate: &BusinessAggregate,
    fetched_at: DateTime<Utc>,
) -> Result<StoredSnapshot> {
    let business_id = aggregate.business.id;
    let payload = serde_json::to_string(aggregate)?;

    let existing = BusinessSnapshot::find()
        .filter(BusinessSnapshotColumn::BusinessId.eq(business_id))
        .one(db)
        .await?;

    let row = business_snapshot::ActiveModel {
        id: existing.map_or(NotSet, |row| Set(row.id)),
        business_id: Set(business_id),
        payload: Set(payload),
        fetched_at: Set(fetched_at.naive_utc()),
    };
    row.save(db).await?;

    Ok(StoredSnapshot {
        business_id,
        aggregate: aggregate.clone(),
        fetched_at,
    })
}

/// Loads the stored snapshot of a business, if there is one.
pub async fn load_snapshot(
    db: &DatabaseConnection,
    business_id: i64,
) -> Result<Option<StoredSnapshot>> {
    let Some(row) = BusinessSnapshot::find()
        .filter(BusinessSnapshotColumn::BusinessId.eq(business_id))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    Ok(Some(StoredSnapshot {
        business_id: row.business_id,
        aggregate: serde_json::from_str(&row.payload)?,
        fetched_at: row.fetched_at.and_utc(),
    }))
}

/// Fetches the aggregate from the backend and stores it.
#[instrument(skip(db, api))]
pub async fn refresh_snapshot<T: HttpTransport>(
    db: &DatabaseConnection,
    api: &SalonApi<T>,
    ctx: &BusinessContext,
    now: DateTime<Utc>,
) -> Result<StoredSnapshot> {
    let aggregate = api.fetch_business(ctx.business_id).await?;
    if aggregate.business.id != ctx.business_id {
        return Err(Error::Config {
            message: format!(
                "backend returned business {} when asked for {}",
                aggregate.business.id, ctx.business_id
            ),
        });
    }
    let stored = save_snapshot(db, &aggregate, now).await?;
    info!(
        "Refreshed snapshot for business {}: {} appointments, {} clients",
        ctx.business_id,
        aggregate.appointments.len(),
        aggregate.clients.len()
    );
    Ok(stored)
}

/// Serves the stored snapshot while it is younger than `max_age`, otherwise
/// refreshes it. A stored row that no longer decodes counts as missing. When the refresh fails because the backend is unreachable or
/// failing, the stored copy is served as [`SnapshotSource::Stale`].
pub async fn load_or_refresh<T: HttpTransport>(
    db: &DatabaseConnection,
    api: &SalonApi<T>,
    ctx: &BusinessContext,
    max_age: Duration,
    now: DateTime<Utc>,
) -> Result<SnapshotRead> {
    let stored = match load_snapshot(db, ctx.business_id).await {
        Ok(stored) => stored,
        Err(Error::Json(e)) => {
            warn!(
                "Stored snapshot for business {} no longer decodes, refetching: {}",
                ctx.business_id, e
            );
            None
        }
        Err(e) => return Err(e),
    };

    // A snapshot stamped in the future (clock moved back) is never fresh.
    let is_recent = |s: &&StoredSnapshot| {
        let age = s.age(now);
        age >= Duration::zero() && age < max_age
    };
    if let Some(snapshot) = stored.as_ref().filter(is_recent) {
        return Ok(SnapshotRead {
            snapshot: snapshot.clone(),
            source: SnapshotSource::Cached,
        });
    }

    match refresh_snapshot(db, api, ctx, now).await {
        Ok(snapshot) => Ok(SnapshotRead {
            snapshot,
            source: SnapshotSource::Fresh,
        }),
        Err(e) if is_unreachable(&e) => match stored {
            Some(snapshot) => {
                warn!(
                    "Backend unavailable, serving snapshot from {}: {}",
                    snapshot.fetched_at, e
                );
                Ok(SnapshotRead {
                    snapshot,
                    source: SnapshotSource::Stale,
                })
            }
            None => Err(e),
        },
        Err(e) => Err(e),
    }
}

fn is_unreachable(error: &Error) -> bool {
    match error {
        Error::Http(_) => true,
        Error::Api { status, .. } => *status >= 500,
        _ => false,
    }
}
