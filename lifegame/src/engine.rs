// engine.rs - Driver tying seeding, rule evaluation, and rendering together

use crate::config::LifegameConfig;
use crate::error::LifegameError;
use crate::grid::{ChangeSet, Grid, GridDims};
use crate::patterns::{self, Pattern};
use crate::render::draw_changes;
use crate::rules::next_generation;
use crate::seed::seed_grid;
use crate::surface::DrawSurface;

/// One Life automaton bound to a drawing surface.
///
/// Construction computes the grid dimensions from the container width,
/// seeds a random population, and paints the full first frame. After
/// that, [`step`](Self::step) advances one generation and repaints only
/// the cells that flipped; the caller drives the cadence and decides
/// when to stop.
#[derive(Debug)]
pub struct Lifegame<S: DrawSurface> {
    config: LifegameConfig,
    grid: Grid,
    scratch: Grid,
    changes: ChangeSet,
    surface: S,
    generation: u64,
}

impl<S: DrawSurface> Lifegame<S> {
    pub fn new(
        container_width: u32,
        config: LifegameConfig,
        mut surface: S,
    ) -> Result<Self, LifegameError> {
        config.validate()?;
        let dims = GridDims::compute(container_width, &config)?;
        log::info!(
            "lifegame grid: {} cols x {} rows ({} cells) in {} px",
            dims.cols,
            dims.rows,
            dims.cols * dims.rows,
            container_width,
        );

        let mut grid = Grid::new(dims.rows, dims.cols);
        seed_grid(&mut grid, &config, &mut rand::rng());
        surface.resize(
            dims.cols as u32 * config.cell_size,
            dims.rows as u32 * config.cell_size,
        );

        let mut game = Self {
            config,
            scratch: grid.clone(),
            grid,
            changes: ChangeSet::new(),
            surface,
            generation: 0,
        };
        game.repaint_all();
        Ok(game)
    }

    /// Advance one generation and repaint the flipped cells.
    pub fn step(&mut self) {
        next_generation(&self.grid, &mut self.scratch, &mut self.changes);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        draw_changes(&self.grid, &self.changes, self.config.cell_size, &mut self.surface);
        self.generation += 1;
    }

    /// Throw the current population away and reseed at random.
    pub fn reseed(&mut self) {
        seed_grid(&mut self.grid, &self.config, &mut rand::rng());
        self.generation = 0;
        self.repaint_all();
    }

    /// Replace the population with a named pattern, centered.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        patterns::apply_pattern(&mut self.grid, pattern);
        self.generation = 0;
        self.repaint_all();
    }

    /// Flip a single cell and repaint it. Border and out-of-range
    /// coordinates are ignored.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.grid.is_interior(row, col) {
            let alive = self.grid.get(row, col);
            self.grid.set(row, col, !alive);
            draw_changes(&self.grid, &[(row, col)], self.config.cell_size, &mut self.surface);
        }
    }

    /// Repaint every interior cell, e.g. after (re)seeding.
    fn repaint_all(&mut self) {
        self.changes.clear();
        self.changes.extend(self.grid.interior_coords());
        draw_changes(&self.grid, &self.changes, self.config.cell_size, &mut self.surface);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn cell_size(&self) -> u32 {
        self.config.cell_size
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
