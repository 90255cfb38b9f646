// engine.rs - End-to-end driver behavior against a recording surface

use lifegame::{DEAD_FILL, DrawSurface, LIVE_FILL, Lifegame, LifegameConfig, LifegameError, Rgb};

#[derive(Debug, Default)]
struct RecordingSurface {
    size: Option<(u32, u32)>,
    fills: Vec<(u32, u32, u32, u32, Rgb)>,
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width_px: u32, height_px: u32) {
        self.size = Some((width_px, height_px));
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        self.fills.push((x, y, width, height, color));
    }
}

fn empty_game() -> Lifegame<RecordingSurface> {
    // 0% live seeding keeps the run deterministic: everything starts dead.
    let config = LifegameConfig {
        init_percent: 0.0,
        cell_size: 5,
        min_count: 100,
    };
    Lifegame::new(50, config, RecordingSurface::default()).unwrap()
}

#[test]
fn construction_sizes_surface_and_paints_every_cell() {
    let game = empty_game();
    assert_eq!((game.rows(), game.cols()), (10, 10));

    let surface = game.surface();
    assert_eq!(surface.size, Some((50, 50)));
    // First frame covers all 100 interior cells, all dead.
    assert_eq!(surface.fills.len(), 100);
    assert!(surface.fills.iter().all(|&(.., color)| color == DEAD_FILL));
    assert_eq!(surface.fills.first(), Some(&(0, 0, 5, 5, DEAD_FILL)));
    assert_eq!(surface.fills.last(), Some(&(45, 45, 5, 5, DEAD_FILL)));
}

#[test]
fn stepping_a_dead_grid_draws_nothing() {
    let mut game = empty_game();
    game.surface_mut().fills.clear();

    game.step();
    game.step();

    assert_eq!(game.generation(), 2);
    assert_eq!(game.live_count(), 0);
    assert!(game.surface().fills.is_empty());
}

#[test]
fn toggling_a_cell_repaints_exactly_that_cell() {
    let mut game = empty_game();
    game.surface_mut().fills.clear();

    game.toggle_cell(2, 3);
    assert_eq!(game.live_count(), 1);
    assert_eq!(game.surface().fills, vec![(10, 5, 5, 5, LIVE_FILL)]);

    game.surface_mut().fills.clear();
    game.toggle_cell(2, 3);
    assert_eq!(game.live_count(), 0);
    assert_eq!(game.surface().fills, vec![(10, 5, 5, 5, DEAD_FILL)]);

    // Border and out-of-range coordinates are ignored.
    game.surface_mut().fills.clear();
    game.toggle_cell(0, 1);
    game.toggle_cell(11, 1);
    assert!(game.surface().fills.is_empty());
}

#[test]
fn block_pattern_survives_steps_without_redraws() {
    let mut game = empty_game();
    game.apply_pattern(&lifegame::PATTERNS[0]);
    assert_eq!(game.live_count(), 4);

    game.surface_mut().fills.clear();
    for _ in 0..5 {
        game.step();
    }
    assert_eq!(game.live_count(), 4);
    assert!(game.surface().fills.is_empty());
}

#[test]
fn reseed_resets_generation_and_repaints_in_full() {
    let mut game = empty_game();
    game.step();
    game.surface_mut().fills.clear();

    game.reseed();
    assert_eq!(game.generation(), 0);
    // 0% target: reseeding an all-dead config repaints everything dead.
    assert_eq!(game.surface().fills.len(), 100);
}

#[test]
fn invalid_configuration_fails_construction() {
    let config = LifegameConfig {
        init_percent: 150.0,
        ..Default::default()
    };
    let err = Lifegame::new(500, config, RecordingSurface::default()).unwrap_err();
    assert_eq!(err, LifegameError::InvalidInitPercent(150.0));

    let err = Lifegame::new(2, LifegameConfig::default(), RecordingSurface::default()).unwrap_err();
    assert_eq!(err, LifegameError::ZeroColumns { container_width: 2, cell_size: 5 });
}
