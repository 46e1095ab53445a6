//! The demo catalog the CLI queries.

use chrono::{DateTime, Duration, Utc};
use quarry::prelude::*;
use quarry::spec::Id;
use rust_decimal::Decimal;

/// Default distance between now and the reference instant.
pub const REFERENCE_OFFSET_SECS: i64 = 1_000_000;

/// Seconds between consecutive creation dates on either side of the
/// reference instant.
const CREATED_STEP_SECS: i64 = 10_000;

/// Reference instant used when none is given: roughly eleven days ago.
pub fn default_reference() -> DateTime<Utc> {
    Utc::now() - Duration::seconds(REFERENCE_OFFSET_SECS)
}

/// Price rule of the catalog.
///
/// Multiples of 15 cost 300, other multiples of 3 cost `50 + id`, other
/// multiples of 5 cost `450 + id`, everything else `150 + id`.
pub fn price(id: Id) -> Decimal {
    let value = if id % 15 == 0 {
        300
    } else if id % 3 == 0 {
        id.saturating_add(50)
    } else if id % 5 == 0 {
        id.saturating_add(450)
    } else {
        id.saturating_add(150)
    };
    Decimal::from(value)
}

/// Even ids are created before `reference`, odd ids after it, further away
/// the larger the id. `None` once the offset leaves chrono's range.
pub fn created(id: Id, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(id).ok()?.checked_mul(CREATED_STEP_SECS)?;
    let offset = Duration::try_seconds(secs)?;
    if id % 2 == 0 {
        reference.checked_sub_signed(offset)
    } else {
        reference.checked_add_signed(offset)
    }
}

pub fn entity(id: Id, reference: DateTime<Utc>) -> Entity {
    let mut entity = Entity::builder()
        .id(id)
        .name(format!("Entity {}", id))
        .description(format!("Description {}", id))
        .active(id % 2 == 0)
        .price(price(id))
        .build();
    entity.created = created(id, reference);
    entity
}

/// Builds a repository holding entities `1..=size`.
pub fn catalog(size: Id, reference: DateTime<Utc>) -> InMemoryRepository<Entity> {
    InMemoryRepository::builder()
        .seed((1..=size).map(|id| entity(id, reference)))
        .build()
}
