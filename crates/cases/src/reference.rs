//! Reference-number generation.
//!
//! A reference number is the short, human-shareable identifier printed on
//! correspondence, distinct from the entity's internal id. It is assigned
//! once at creation and never recomputed.

use chrono::{DateTime, Utc};
use rand::Rng;

use caseflow_core::{DomainError, DomainResult};

use crate::channel::{BusinessSegment, Channel};

/// Number of trailing id characters carried into the reference number.
const ID_SUFFIX_LEN: usize = 6;

/// Generate a reference number from the entity id, originating channel and
/// business segment, stamped with the current UTC date.
///
/// Shape: `<segment prefix><channel prefix><YYMMDD><3 random digits><last 6
/// of id>`, giving a fixed length per segment (18 for customer servicing).
///
/// Not idempotent: two calls with identical inputs in the same second differ
/// only in the random component, so collisions are possible in principle.
pub fn generate(id: &str, channel: Channel, segment: BusinessSegment) -> DomainResult<String> {
    generate_at(id, channel, segment, Utc::now())
}

/// Clock-explicit variant of [`generate`].
pub fn generate_at(
    id: &str,
    channel: Channel,
    segment: BusinessSegment,
    now: DateTime<Utc>,
) -> DomainResult<String> {
    if id.trim().is_empty() {
        return Err(DomainError::invalid_id(
            "reference number requires a non-blank id",
        ));
    }
    let id_len = id.chars().count();
    if id_len < ID_SUFFIX_LEN {
        return Err(DomainError::invalid_id(format!(
            "reference number requires an id of at least {ID_SUFFIX_LEN} characters, got {id_len}"
        )));
    }
    if channel == Channel::Unknown {
        return Err(DomainError::validation(
            "reference number requires a known channel",
        ));
    }

    let segment_prefix = segment
        .prefix()
        .ok_or_else(|| DomainError::out_of_range(format!("no prefix for segment {segment:?}")))?;
    let channel_prefix = channel
        .prefix()
        .ok_or_else(|| DomainError::out_of_range(format!("no prefix for channel {channel:?}")))?;

    let date = now.format("%y%m%d");
    let random = rand::thread_rng().gen_range(100..=999);
    let suffix: String = id.chars().skip(id_len - ID_SUFFIX_LEN).collect();

    Ok(format!(
        "{segment_prefix}{channel_prefix}{date}{random}{suffix}"
    ))
}
