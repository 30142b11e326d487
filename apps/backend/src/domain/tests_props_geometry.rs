//! Property tests for catalog geometry (pure domain, no DB).
//!
//! Geometry contract:
//! - Orientation swaps width and height; it never re-derives a new size
//! - Total crease count per preset is orientation-invariant
//! - Folding halves an axis per crease in that axis
//! - Thickness scales with the total layer count (2^total creases)

use proptest::prelude::*;
use sea_orm::Iterable;

use crate::domain::dimensions::BASE_BOARD_THICKNESS_MM;
use crate::domain::size_config::{card_dimensions, BoardSize, MatSize};
use crate::domain::test_prelude;
use crate::entities::cards::CardSize;
use crate::entities::game_boards::GameBoardSize;
use crate::entities::player_mats::PlayerMatSize;

fn any_card_size() -> impl Strategy<Value = CardSize> {
    proptest::sample::select(CardSize::iter().collect::<Vec<_>>())
}

fn any_mat_size() -> impl Strategy<Value = PlayerMatSize> {
    proptest::sample::select(PlayerMatSize::iter().collect::<Vec<_>>())
}

fn any_board_size() -> impl Strategy<Value = GameBoardSize> {
    proptest::sample::select(GameBoardSize::iter().collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Orientation swap is width/height transposition for cards.
    #[test]
    fn prop_card_orientation_transposes(
        size in any_card_size(),
        horizontal in any::<bool>(),
    ) {
        let dims = card_dimensions(size, horizontal);
        let flipped = card_dimensions(size, !horizontal);
        prop_assert_eq!(dims.width_mm, flipped.height_mm);
        prop_assert_eq!(dims.height_mm, flipped.width_mm);
    }

    /// Property: Orientation swap is width/height transposition for mats.
    #[test]
    fn prop_mat_orientation_transposes(
        size in any_mat_size(),
        horizontal in any::<bool>(),
    ) {
        let dims = MatSize::Preset { size, horizontal }.dimensions();
        let flipped = MatSize::Preset { size, horizontal: !horizontal }.dimensions();
        prop_assert_eq!(dims.width_mm, flipped.height_mm);
        prop_assert_eq!(dims.height_mm, flipped.width_mm);
    }

    /// Property: Orientation swap is width/height transposition for boards.
    #[test]
    fn prop_board_orientation_transposes(
        size in any_board_size(),
        horizontal in any::<bool>(),
    ) {
        prop_assert_eq!(size.width_mm(horizontal), size.height_mm(!horizontal));
        prop_assert_eq!(size.height_mm(horizontal), size.width_mm(!horizontal));
    }

    /// Property: Total crease count is orientation-invariant
    /// (1 for bifold, 2 for quadfold).
    #[test]
    fn prop_board_total_creases_orientation_invariant(
        size in any_board_size(),
    ) {
        let landscape = size.vertical_folds(true) + size.horizontal_folds(true);
        let portrait = size.vertical_folds(false) + size.horizontal_folds(false);
        prop_assert_eq!(landscape, portrait);
        prop_assert_eq!(landscape, if size.is_quad_fold() { 2 } else { 1 });
    }

    /// Property: Folded dimensions never exceed unfolded, and thickness is
    /// exactly base * 2^total creases.
    #[test]
    fn prop_board_folding_shrinks_and_thickens(
        size in any_board_size(),
        horizontal in any::<bool>(),
    ) {
        let config = BoardSize::Preset { size, horizontal };
        let unfolded = config.dimensions();
        let folded = config.folded_dimensions();

        prop_assert!(folded.width_mm <= unfolded.width_mm);
        prop_assert!(folded.height_mm <= unfolded.height_mm);

        let (h, v) = config.fold_counts();
        let expected = BASE_BOARD_THICKNESS_MM * 2f64.powi(i32::from(h) + i32::from(v));
        prop_assert_eq!(folded.thickness_mm, expected);
    }

    /// Property: Custom fold counts halve their axis exactly.
    #[test]
    fn prop_custom_fold_halving(
        width in 304.0f64..=914.0,
        height in 152.0f64..=635.0,
        h_folds in 0u8..=2,
        v_folds in 0u8..=2,
    ) {
        let config = BoardSize::Custom {
            width_mm: width,
            height_mm: height,
            horizontal_folds: h_folds,
            vertical_folds: v_folds,
        };
        let folded = config.folded_dimensions();
        prop_assert_eq!(folded.width_mm, width / 2f64.powi(i32::from(v_folds)));
        prop_assert_eq!(folded.height_mm, height / 2f64.powi(i32::from(h_folds)));
    }
}
