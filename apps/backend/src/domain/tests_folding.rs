//! Folded-dimension math for game boards.

use crate::domain::dimensions::BASE_BOARD_THICKNESS_MM;
use crate::domain::size_config::BoardSize;
use crate::entities::game_boards::GameBoardSize;

#[test]
fn medium_bifold_square_folds_to_square() {
    let config = BoardSize::Preset {
        size: GameBoardSize::MediumBifoldSquare,
        horizontal: true,
    };

    let unfolded = config.dimensions();
    assert_eq!(unfolded.width_mm, 457.2);
    assert_eq!(unfolded.height_mm, 228.6);

    let folded = config.folded_dimensions();
    // Single vertical crease: width halves, height unchanged
    assert_eq!(folded.width_mm, 228.6);
    assert_eq!(folded.height_mm, 228.6);
    assert_eq!(folded.thickness_mm, 5.0);
}

#[test]
fn quad_fold_doubles_thickness_twice() {
    let config = BoardSize::Preset {
        size: GameBoardSize::SmallQuadFoldSquare,
        horizontal: true,
    };

    let folded = config.folded_dimensions();
    assert_eq!(folded.width_mm, 152.4);
    assert_eq!(folded.height_mm, 152.4);
    assert_eq!(folded.thickness_mm, 10.0);
}

#[test]
fn zero_folds_round_trip() {
    let config = BoardSize::Custom {
        width_mm: 500.0,
        height_mm: 400.0,
        horizontal_folds: 0,
        vertical_folds: 0,
    };

    let unfolded = config.dimensions();
    let folded = config.folded_dimensions();
    assert_eq!(folded.width_mm, unfolded.width_mm);
    assert_eq!(folded.height_mm, unfolded.height_mm);
    assert_eq!(folded.thickness_mm, BASE_BOARD_THICKNESS_MM);
}

#[test]
fn custom_folds_halve_each_axis_independently() {
    let config = BoardSize::Custom {
        width_mm: 600.0,
        height_mm: 400.0,
        horizontal_folds: 2,
        vertical_folds: 1,
    };

    let folded = config.folded_dimensions();
    assert_eq!(folded.width_mm, 300.0); // one vertical crease
    assert_eq!(folded.height_mm, 100.0); // two horizontal creases
    // 3 creases total: 2.5 * 2^3
    assert_eq!(folded.thickness_mm, 20.0);
}

#[test]
fn bifold_portrait_creases_the_other_axis() {
    let config = BoardSize::Preset {
        size: GameBoardSize::SmallBifoldSquare,
        horizontal: false,
    };

    let unfolded = config.dimensions();
    assert_eq!(unfolded.width_mm, 152.4);
    assert_eq!(unfolded.height_mm, 304.8);

    let folded = config.folded_dimensions();
    // Portrait bifold creases horizontally: height halves
    assert_eq!(folded.width_mm, 152.4);
    assert_eq!(folded.height_mm, 152.4);
    assert_eq!(folded.thickness_mm, 5.0);
}
