// lib.rs - Change-tracked Conway's Game of Life over a pluggable surface

//! A small Life engine that seeds a bordered grid with a random
//! population, steps it with the classic rule, and redraws only the
//! cells that changed between generations. Drawing goes through the
//! [`DrawSurface`] trait, so the same engine runs against a GUI texture
//! or a test recorder.

mod config;
mod engine;
mod error;
mod grid;
mod patterns;
mod render;
mod rules;
mod seed;
mod surface;

pub use config::LifegameConfig;
pub use engine::Lifegame;
pub use error::LifegameError;
pub use grid::{CellCoord, ChangeSet, Grid, GridDims};
pub use patterns::{PATTERNS, Pattern, apply_pattern};
pub use render::draw_changes;
pub use rules::next_generation;
pub use seed::seed_grid;
pub use surface::{DEAD_FILL, DrawSurface, LIVE_FILL, Rgb};
