//! Player mat configurator.

use std::ops::RangeInclusive;

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::configs::PlayerMatConfig;
use crate::entities::player_mats;
use crate::errors::domain::DomainError;
use crate::services::samples::{apply_sample, SampleSource};

/// Bounds for custom mat dimensions, both axes.
pub const CUSTOM_SIZE_MM: RangeInclusive<f64> = 63.0..=297.0;

/// Unlike game boards, custom bounds are checked whenever *either* custom
/// field is supplied, even if a preset is also set.
pub fn validate(config: &PlayerMatConfig) -> Result<(), DomainError> {
    if config.size.is_none()
        && (config.custom_width_mm.is_none() || config.custom_height_mm.is_none())
    {
        return Err(DomainError::validation(
            "player mat requires a preset size or both custom dimensions",
        ));
    }

    if config.custom_width_mm.is_some() || config.custom_height_mm.is_some() {
        let (width, height) = match (config.custom_width_mm, config.custom_height_mm) {
            (Some(w), Some(h)) => (w, h),
            _ => {
                return Err(DomainError::validation(
                    "custom player mat dimensions require both width and height",
                ))
            }
        };
        if !CUSTOM_SIZE_MM.contains(&width) {
            return Err(DomainError::validation(format!(
                "custom player mat width must be between {} and {} mm, got {width}",
                CUSTOM_SIZE_MM.start(),
                CUSTOM_SIZE_MM.end()
            )));
        }
        if !CUSTOM_SIZE_MM.contains(&height) {
            return Err(DomainError::validation(format!(
                "custom player mat height must be between {} and {} mm, got {height}",
                CUSTOM_SIZE_MM.start(),
                CUSTOM_SIZE_MM.end()
            )));
        }
    }

    Ok(())
}

pub async fn create(
    owner_id: Uuid,
    project_id: Option<Uuid>,
    config: PlayerMatConfig,
    samples: &impl SampleSource,
) -> Result<player_mats::Model, DomainError> {
    validate(&config)?;

    let now = OffsetDateTime::now_utc();
    let mut mat = player_mats::Model {
        id: Uuid::new_v4(),
        project_id,
        created_by: owner_id,
        name: config.name,
        size: config.size,
        horizontal: config.horizontal,
        custom_width_mm: config.custom_width_mm,
        custom_height_mm: config.custom_height_mm,
        front_design: None,
        back_design: None,
        created_at: now,
        updated_at: now,
    };

    if let Some(sample_id) = config.sample_id {
        apply_sample(samples, owner_id, sample_id, |sample| {
            mat.front_design = sample.front_design.clone();
            mat.back_design = sample.back_design.clone();
        })
        .await?;
    }

    info!(mat_id = %mat.id, size = ?mat.size, "created player mat component");
    Ok(mat)
}

pub fn update(mat: &mut player_mats::Model, config: PlayerMatConfig) -> Result<(), DomainError> {
    validate(&config)?;

    mat.name = config.name;
    mat.size = config.size;
    mat.horizontal = config.horizontal;
    mat.custom_width_mm = config.custom_width_mm;
    mat.custom_height_mm = config.custom_height_mm;
    mat.updated_at = OffsetDateTime::now_utc();

    debug!(mat_id = %mat.id, "updated player mat configuration");
    Ok(())
}
