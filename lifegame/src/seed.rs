// seed.rs - Stochastic initial population

use rand::Rng;

use crate::config::LifegameConfig;
use crate::grid::Grid;

/// Target live-cell count for a freshly seeded grid.
pub fn max_live_count(rows: usize, cols: usize, init_percent: f64) -> usize {
    ((rows * cols) as f64 * init_percent / 100.0).ceil() as usize
}

/// Populate the interior of `grid` with a roughly uniform random pattern
/// whose live fraction approaches `config.init_percent`.
///
/// Scanning row-major, each cell flips a fair coin while the running live
/// count is under the target. A cell that would push the count past the
/// anti-clustering curve `0.01 * init_percent * (row-1) * rows + col` has
/// to pass a second 70% coin. The curve mixes grid-relative and per-row
/// quantities; it is kept as-is, a heuristic carried over from the
/// original rather than a formula with defined statistics.
pub fn seed_grid(grid: &mut Grid, config: &LifegameConfig, rng: &mut impl Rng) {
    grid.clear();
    let rows = grid.rows();
    let max_live = max_live_count(rows, grid.cols(), config.init_percent);

    let mut live_count = 0usize;
    for (row, col) in grid.interior_coords() {
        if live_count >= max_live || !rng.random_bool(0.5) {
            continue;
        }
        let expected = 0.01 * config.init_percent * ((row - 1) * rows) as f64 + col as f64;
        if live_count as f64 > expected && !rng.random_bool(0.7) {
            continue;
        }
        grid.set(row, col, true);
        live_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(rows: usize, cols: usize, init_percent: f64, seed: u64) -> Grid {
        let config = LifegameConfig {
            init_percent,
            ..Default::default()
        };
        let mut grid = Grid::new(rows, cols);
        seed_grid(&mut grid, &config, &mut StdRng::seed_from_u64(seed));
        grid
    }

    #[test]
    fn live_fraction_approaches_target() {
        let grid = seeded(100, 100, 37.5, 7);
        let live = grid.live_count();
        let max_live = max_live_count(100, 100, 37.5);
        assert!(live <= max_live, "{live} live cells exceeds target {max_live}");
        // The fair coin hits the cap long before the scan ends; the 70%
        // damping coin only shaves a little off.
        assert!(live >= 3_000, "only {live} of 10000 cells alive");
    }

    #[test]
    fn zero_percent_seeds_nothing() {
        let grid = seeded(50, 50, 0.0, 7);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn border_stays_dead_after_seeding() {
        let grid = seeded(20, 30, 100.0, 42);
        for row in 0..=21 {
            assert!(!grid.get(row, 0));
            assert!(!grid.get(row, 31));
        }
        for col in 0..=31 {
            assert!(!grid.get(0, col));
            assert!(!grid.get(21, col));
        }
    }

    #[test]
    fn same_seed_same_pattern() {
        let a = seeded(40, 40, 37.5, 9);
        let b = seeded(40, 40, 37.5, 9);
        assert_eq!(a, b);
    }
}
