//! Card configurator.

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::configs::CardConfig;
use crate::entities::cards;
use crate::errors::domain::DomainError;
use crate::services::samples::{apply_sample, SampleSource};

/// Card size is a closed enum and carries no custom dimensions, so there is
/// nothing to check beyond what deserialization already enforced.
pub fn validate(_config: &CardConfig) -> Result<(), DomainError> {
    Ok(())
}

pub async fn create(
    owner_id: Uuid,
    project_id: Option<Uuid>,
    config: CardConfig,
    samples: &impl SampleSource,
) -> Result<cards::Model, DomainError> {
    validate(&config)?;

    let now = OffsetDateTime::now_utc();
    let mut card = cards::Model {
        id: Uuid::new_v4(),
        project_id,
        created_by: owner_id,
        name: config.name,
        size: config.size,
        horizontal: config.horizontal,
        front_design: None,
        back_design: None,
        created_at: now,
        updated_at: now,
    };

    if let Some(sample_id) = config.sample_id {
        apply_sample(samples, owner_id, sample_id, |sample| {
            card.front_design = sample.front_design.clone();
            card.back_design = sample.back_design.clone();
        })
        .await?;
    }

    info!(card_id = %card.id, size = ?card.size, "created card component");
    Ok(card)
}

pub fn update(card: &mut cards::Model, config: CardConfig) -> Result<(), DomainError> {
    validate(&config)?;

    card.name = config.name;
    card.size = config.size;
    card.horizontal = config.horizontal;
    card.updated_at = OffsetDateTime::now_utc();

    debug!(card_id = %card.id, "updated card configuration");
    Ok(())
}
