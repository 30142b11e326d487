//! Game board configurator.

use std::ops::RangeInclusive;

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use crate::dto::configs::GameBoardConfig;
use crate::entities::game_boards;
use crate::errors::domain::DomainError;
use crate::services::samples::{apply_sample, SampleSource};

/// Bounds for custom board dimensions.
pub const CUSTOM_WIDTH_MM: RangeInclusive<f64> = 304.0..=914.0;
pub const CUSTOM_HEIGHT_MM: RangeInclusive<f64> = 152.0..=635.0;
pub const MAX_CUSTOM_FOLDS: u8 = 2;

/// Custom fields are only validated when no preset is set; a preset wins
/// outright and whatever custom values ride along are ignored.
pub fn validate(config: &GameBoardConfig) -> Result<(), DomainError> {
    if config.size.is_some() {
        return Ok(());
    }

    let (width, height) = match (config.custom_width_mm, config.custom_height_mm) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            return Err(DomainError::validation(
                "game board requires a preset size or both custom dimensions",
            ))
        }
    };

    if !CUSTOM_WIDTH_MM.contains(&width) {
        return Err(DomainError::validation(format!(
            "custom game board width must be between {} and {} mm, got {width}",
            CUSTOM_WIDTH_MM.start(),
            CUSTOM_WIDTH_MM.end()
        )));
    }
    if !CUSTOM_HEIGHT_MM.contains(&height) {
        return Err(DomainError::validation(format!(
            "custom game board height must be between {} and {} mm, got {height}",
            CUSTOM_HEIGHT_MM.start(),
            CUSTOM_HEIGHT_MM.end()
        )));
    }

    // Absent fold counts default to zero, which is always in range.
    if config.custom_horizontal_folds.unwrap_or(0) > MAX_CUSTOM_FOLDS {
        return Err(DomainError::validation(format!(
            "custom horizontal fold count must be at most {MAX_CUSTOM_FOLDS}"
        )));
    }
    if config.custom_vertical_folds.unwrap_or(0) > MAX_CUSTOM_FOLDS {
        return Err(DomainError::validation(format!(
            "custom vertical fold count must be at most {MAX_CUSTOM_FOLDS}"
        )));
    }

    Ok(())
}

pub async fn create(
    owner_id: Uuid,
    project_id: Option<Uuid>,
    config: GameBoardConfig,
    samples: &impl SampleSource,
) -> Result<game_boards::Model, DomainError> {
    validate(&config)?;

    let now = OffsetDateTime::now_utc();
    let mut board = game_boards::Model {
        id: Uuid::new_v4(),
        project_id,
        created_by: owner_id,
        name: config.name,
        size: config.size,
        horizontal: config.horizontal,
        custom_width_mm: config.custom_width_mm,
        custom_height_mm: config.custom_height_mm,
        custom_horizontal_folds: config.custom_horizontal_folds.map(i16::from),
        custom_vertical_folds: config.custom_vertical_folds.map(i16::from),
        front_design: None,
        back_design: None,
        created_at: now,
        updated_at: now,
    };

    if let Some(sample_id) = config.sample_id {
        apply_sample(samples, owner_id, sample_id, |sample| {
            board.front_design = sample.front_design.clone();
            board.back_design = sample.back_design.clone();
        })
        .await?;
    }

    info!(board_id = %board.id, size = ?board.size, "created game board component");
    Ok(board)
}

pub fn update(
    board: &mut game_boards::Model,
    config: GameBoardConfig,
) -> Result<(), DomainError> {
    validate(&config)?;

    board.name = config.name;
    board.size = config.size;
    board.horizontal = config.horizontal;
    board.custom_width_mm = config.custom_width_mm;
    board.custom_height_mm = config.custom_height_mm;
    board.custom_horizontal_folds = config.custom_horizontal_folds.map(i16::from);
    board.custom_vertical_folds = config.custom_vertical_folds.map(i16::from);
    board.updated_at = OffsetDateTime::now_utc();

    debug!(board_id = %board.id, "updated game board configuration");
    Ok(())
}
