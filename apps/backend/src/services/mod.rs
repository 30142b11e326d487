//! Component configurators.
//!
//! One module per component family, each exposing the same contract:
//! `validate(config)`, `create(owner, project, config, samples)` and
//! `update(component, config)`. Validation fully precedes mutation; an
//! update that fails validation leaves the component untouched.

pub mod cards;
pub mod dice;
pub mod game_boards;
pub mod player_mats;
pub mod samples;
