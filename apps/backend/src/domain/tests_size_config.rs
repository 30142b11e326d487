//! Conversion from flat entity rows to the domain-level size sum types.

use time::macros::datetime;
use uuid::Uuid;

use crate::domain::size_config::{BoardSize, MatSize};
use crate::entities::game_boards::{self, GameBoardSize};
use crate::entities::player_mats::{self, PlayerMatSize};
use crate::errors::domain::{DomainError, InfraErrorKind};

fn mat_row() -> player_mats::Model {
    player_mats::Model {
        id: Uuid::new_v4(),
        project_id: None,
        created_by: Uuid::new_v4(),
        name: "mat".to_string(),
        size: Some(PlayerMatSize::A4),
        horizontal: false,
        custom_width_mm: None,
        custom_height_mm: None,
        front_design: None,
        back_design: None,
        created_at: datetime!(2025-06-01 12:00 UTC),
        updated_at: datetime!(2025-06-01 12:00 UTC),
    }
}

fn board_row() -> game_boards::Model {
    game_boards::Model {
        id: Uuid::new_v4(),
        project_id: None,
        created_by: Uuid::new_v4(),
        name: "board".to_string(),
        size: Some(GameBoardSize::MediumBifoldSquare),
        horizontal: true,
        custom_width_mm: None,
        custom_height_mm: None,
        custom_horizontal_folds: None,
        custom_vertical_folds: None,
        front_design: None,
        back_design: None,
        created_at: datetime!(2025-06-01 12:00 UTC),
        updated_at: datetime!(2025-06-01 12:00 UTC),
    }
}

#[test]
fn preset_mat_row_converts_to_preset() {
    let mat = mat_row();
    let config = MatSize::try_from(&mat).unwrap();
    assert_eq!(
        config,
        MatSize::Preset {
            size: PlayerMatSize::A4,
            horizontal: false
        }
    );
}

#[test]
fn custom_mat_row_converts_to_custom() {
    let mut mat = mat_row();
    mat.size = None;
    mat.custom_width_mm = Some(100.0);
    mat.custom_height_mm = Some(150.0);
    let config = MatSize::try_from(&mat).unwrap();
    assert_eq!(
        config,
        MatSize::Custom {
            width_mm: 100.0,
            height_mm: 150.0
        }
    );
}

#[test]
fn preset_wins_over_stale_custom_columns() {
    // A preset row may still carry custom values; they are ignored.
    let mut mat = mat_row();
    mat.custom_width_mm = Some(9999.0);
    mat.custom_height_mm = Some(9999.0);
    let config = MatSize::try_from(&mat).unwrap();
    assert!(matches!(config, MatSize::Preset { .. }));

    let mut board = board_row();
    board.custom_width_mm = Some(9999.0);
    board.custom_height_mm = Some(9999.0);
    board.custom_horizontal_folds = Some(7);
    let config = BoardSize::try_from(&board).unwrap();
    assert!(matches!(config, BoardSize::Preset { .. }));
}

#[test]
fn half_populated_row_is_data_corruption() {
    let mut mat = mat_row();
    mat.size = None;
    mat.custom_width_mm = Some(100.0);
    let err = MatSize::try_from(&mat).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}

#[test]
fn custom_board_row_defaults_absent_folds_to_zero() {
    let mut board = board_row();
    board.size = None;
    board.custom_width_mm = Some(500.0);
    board.custom_height_mm = Some(400.0);
    let config = BoardSize::try_from(&board).unwrap();
    assert_eq!(
        config,
        BoardSize::Custom {
            width_mm: 500.0,
            height_mm: 400.0,
            horizontal_folds: 0,
            vertical_folds: 0
        }
    );
}

#[test]
fn negative_fold_count_is_data_corruption() {
    let mut board = board_row();
    board.size = None;
    board.custom_width_mm = Some(500.0);
    board.custom_height_mm = Some(400.0);
    board.custom_vertical_folds = Some(-1);
    let err = BoardSize::try_from(&board).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}
