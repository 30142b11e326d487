//! Dimension resolution: bleed, DPI, pixel derivation, orientation.

use crate::domain::dimensions::{mm_to_px, Dimensions, BLEED_MM, DEFAULT_DPI, MM_PER_INCH};
use crate::domain::size_config::{card_dimensions, MatSize};
use crate::entities::cards::CardSize;
use crate::entities::player_mats::PlayerMatSize;

#[test]
fn new_dimensions_carry_default_bleed_and_dpi() {
    let dims = Dimensions::new(63.5, 88.9);
    assert_eq!(dims.bleed_mm, BLEED_MM);
    assert_eq!(dims.dpi, DEFAULT_DPI);
}

#[test]
fn pixel_derivation_at_300_dpi() {
    // 63.5mm = 2.5in -> 750px exactly
    assert_eq!(mm_to_px(63.5, 300), 750);
    // 88.9mm = 3.5in -> 1050px exactly
    assert_eq!(mm_to_px(88.9, 300), 1050);
    // A4 width: 210 / 25.4 * 300 = 2480.31... -> 2480
    assert_eq!(mm_to_px(210.0, 300), 2480);
    // A4 height: 297 / 25.4 * 300 = 3507.87... -> 3508
    assert_eq!(mm_to_px(297.0, 300), 3508);
}

#[test]
fn pixel_rounding_is_half_to_even() {
    // 12.7mm is exactly half an inch in f64 (25.4 is 12.7 scaled by a power
    // of two), so odd DPI values land the product exactly on .5 boundaries.
    assert_eq!(mm_to_px(MM_PER_INCH / 2.0, 1), 0); // 0.5 -> 0, not 1
    assert_eq!(mm_to_px(12.7, 3), 2); // 1.5 -> 2
    assert_eq!(mm_to_px(12.7, 5), 2); // 2.5 -> 2, not 3
    assert_eq!(mm_to_px(12.7, 7), 4); // 3.5 -> 4
}

#[test]
fn card_dimensions_swap_on_horizontal() {
    let portrait = card_dimensions(CardSize::StandardPoker, false);
    assert_eq!(portrait.width_mm, 63.5);
    assert_eq!(portrait.height_mm, 88.9);

    let landscape = card_dimensions(CardSize::StandardPoker, true);
    assert_eq!(landscape.width_mm, 88.9);
    assert_eq!(landscape.height_mm, 63.5);

    assert_eq!(portrait.bleed_mm, BLEED_MM);
    assert_eq!(landscape.bleed_mm, BLEED_MM);
}

#[test]
fn mat_preset_dimensions_follow_catalog() {
    let config = MatSize::Preset {
        size: PlayerMatSize::A4,
        horizontal: false,
    };
    let dims = config.dimensions();
    assert_eq!(dims.width_mm, 210.0);
    assert_eq!(dims.height_mm, 297.0);

    let config = MatSize::Preset {
        size: PlayerMatSize::A4,
        horizontal: true,
    };
    let dims = config.dimensions();
    assert_eq!(dims.width_mm, 297.0);
    assert_eq!(dims.height_mm, 210.0);
}

#[test]
fn mat_custom_dimensions_pass_through_verbatim() {
    let config = MatSize::Custom {
        width_mm: 100.0,
        height_mm: 150.0,
    };
    let dims = config.dimensions();
    assert_eq!(dims.width_mm, 100.0);
    assert_eq!(dims.height_mm, 150.0);
    assert_eq!(dims.bleed_mm, BLEED_MM);
    assert_eq!(dims.dpi, DEFAULT_DPI);
}
