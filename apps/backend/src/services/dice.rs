//! Dice configurator.

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::configs::DiceConfig;
use crate::entities::dice;
use crate::errors::domain::DomainError;
use crate::services::samples::{apply_sample, SampleSource};

/// Die blank and color are closed enums, so there is nothing to check
/// beyond what deserialization already enforced.
pub fn validate(_config: &DiceConfig) -> Result<(), DomainError> {
    Ok(())
}

pub async fn create(
    owner_id: Uuid,
    project_id: Option<Uuid>,
    config: DiceConfig,
    samples: &impl SampleSource,
) -> Result<dice::Model, DomainError> {
    validate(&config)?;

    let now = OffsetDateTime::now_utc();
    let mut die = dice::Model {
        id: Uuid::new_v4(),
        project_id,
        created_by: owner_id,
        name: config.name,
        dice_type: config.dice_type,
        color: config.color,
        front_design: None,
        back_design: None,
        created_at: now,
        updated_at: now,
    };

    if let Some(sample_id) = config.sample_id {
        apply_sample(samples, owner_id, sample_id, |sample| {
            die.front_design = sample.front_design.clone();
            die.back_design = sample.back_design.clone();
        })
        .await?;
    }

    info!(die_id = %die.id, dice_type = ?die.dice_type, "created dice component");
    Ok(die)
}

pub fn update(die: &mut dice::Model, config: DiceConfig) -> Result<(), DomainError> {
    validate(&config)?;

    die.name = config.name;
    die.dice_type = config.dice_type;
    die.color = config.color;
    die.updated_at = OffsetDateTime::now_utc();

    debug!(die_id = %die.id, "updated dice configuration");
    Ok(())
}
