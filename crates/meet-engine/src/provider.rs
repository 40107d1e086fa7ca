//! The external calendar-provider boundary: per-owner free/busy fetches.
//!
//! Fetching is the only place the engine suspends. Each owner's fetch is an
//! independent network call, so the aggregate issues one task per owner and
//! waits for all of them; the first failure aborts the rest and fails the
//! whole request. Partial availability answers are never produced.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use tokio::task::JoinSet;

use crate::calendar::AvailabilityCalendar;
use crate::error::{EngineError, Result};
use crate::interval::Interval;
use crate::interval_set::IntervalSet;
use crate::projection;
use crate::scheduler::mutual_availability;

/// What a provider resolves for one owner: the owner's zone, and busy
/// intervals as wall-clock readings in that zone.
#[derive(Debug, Clone)]
pub struct OwnerSchedule {
    pub zone: Tz,
    pub busy: IntervalSet<NaiveDateTime>,
}

/// One owner in an aggregate request. Working hours are caller input; the
/// owner's zone and busy data come back from the provider.
#[derive(Debug, Clone)]
pub struct OwnerRequest {
    pub id: String,
    pub working_hours: Interval<NaiveTime>,
}

/// A free/busy source for owners' calendars.
///
/// Implementations typically talk to an external calendar service. Transport
/// and authorization failures are fatal for the request that triggered the
/// fetch; retry policy, if any, lives behind this trait.
#[async_trait]
pub trait BusyProvider: Send + Sync {
    /// Resolve `owner`'s zone and the busy intervals overlapping `window`.
    async fn fetch_busy(
        &self,
        owner: &str,
        window: &Interval<DateTime<Tz>>,
    ) -> Result<OwnerSchedule>;
}

/// In-memory provider backed by a fixed owner → schedule map.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    schedules: HashMap<String, OwnerSchedule>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(mut self, owner: impl Into<String>, schedule: OwnerSchedule) -> Self {
        self.schedules.insert(owner.into(), schedule);
        self
    }
}

#[async_trait]
impl BusyProvider for StaticProvider {
    async fn fetch_busy(
        &self,
        owner: &str,
        window: &Interval<DateTime<Tz>>,
    ) -> Result<OwnerSchedule> {
        let schedule = self
            .schedules
            .get(owner)
            .ok_or_else(|| EngineError::ProviderFetch {
                owner: owner.to_string(),
                message: "no calendar on record".to_string(),
            })?;
        // Serve busy data over the requested window widened by a day on each
        // side — the provider's own defensive horizon, so day-boundary busy
        // intervals survive zone differences between caller and owner.
        let local = projection::to_local(window, schedule.zone)?;
        let horizon = Interval::closed(
            *local.lower() - Duration::days(1),
            *local.upper() + Duration::days(1),
        )?;
        Ok(OwnerSchedule {
            zone: schedule.zone,
            busy: schedule.busy.restrict(&horizon),
        })
    }
}

/// Fetch every owner's schedule concurrently and assemble calendars.
///
/// One task per owner. Waits for all fetches; on the first failure the
/// remaining tasks are aborted and the error — tagged with the failing
/// owner's identity — is returned. The calendars keep the order of `owners`.
pub async fn fetch_calendars(
    provider: Arc<dyn BusyProvider>,
    owners: &[OwnerRequest],
    window: &Interval<DateTime<Tz>>,
) -> Result<Vec<AvailabilityCalendar>> {
    let mut tasks = JoinSet::new();
    let mut owner_of_task: HashMap<tokio::task::Id, String> = HashMap::new();
    for (slot, owner) in owners.iter().cloned().enumerate() {
        let provider = Arc::clone(&provider);
        let window = window.clone();
        let owner_id = owner.id.clone();
        let handle = tasks.spawn(async move {
            tracing::debug!(owner = %owner.id, "fetching free/busy");
            let schedule = provider
                .fetch_busy(&owner.id, &window)
                .await
                .map_err(|err| err.for_owner(&owner.id))?;
            Ok::<_, EngineError>((
                slot,
                AvailabilityCalendar::new(schedule.zone, schedule.busy, owner.working_hours),
            ))
        });
        owner_of_task.insert(handle.id(), owner_id);
    }

    let mut fetched: Vec<Option<AvailabilityCalendar>> = vec![None; owners.len()];
    while let Some(joined) = tasks.join_next_with_id().await {
        match joined {
            Ok((_, Ok((slot, calendar)))) => fetched[slot] = Some(calendar),
            Ok((_, Err(err))) => {
                tasks.abort_all();
                return Err(err);
            }
            Err(join_err) => {
                tasks.abort_all();
                let owner = owner_of_task
                    .get(&join_err.id())
                    .cloned()
                    .unwrap_or_default();
                return Err(EngineError::ProviderFetch {
                    owner,
                    message: join_err.to_string(),
                });
            }
        }
    }
    Ok(fetched.into_iter().flatten().collect())
}

/// Fetch every owner's calendar concurrently, then intersect their free time
/// over `query`.
pub async fn fetch_availability(
    provider: Arc<dyn BusyProvider>,
    owners: &[OwnerRequest],
    query: &Interval<DateTime<Tz>>,
) -> Result<IntervalSet<DateTime<Tz>>> {
    let calendars = fetch_calendars(provider, owners, query).await?;
    tracing::debug!(owners = owners.len(), "intersecting free sets");
    mutual_availability(&calendars, query)
}
