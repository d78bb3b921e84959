use astar_snake::game::{ControlMode, GameState, ResetReason, TickOutcome};
use astar_snake::grid::{GridSize, Position};
use astar_snake::input::{Direction, GameInput};
use astar_snake::snake::Snake;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(GridSize::new(6, 4), ControlMode::Manual, 42);
    state.snake = Snake::from_segments(
        vec![Position::new(2, 1), Position::new(1, 1), Position::new(0, 1)],
        Direction::Right,
    );
    state.food = Some(Position::new(3, 1));

    assert_eq!(state.tick(), TickOutcome::Ate);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Position::new(3, 1));
    state.food = None;

    state.apply_input(GameInput::Direction(Direction::Up));
    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position::new(3, 0));

    assert_eq!(
        state.tick(),
        TickOutcome::Reset(ResetReason::WallCollision)
    );
    assert_eq!(state.score, 0);
    assert_eq!(state.best_score, 1);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Position::new(3, 2));
    assert_eq!(state.mode, ControlMode::Manual);
}

#[test]
fn same_seed_replays_identically() {
    let bounds = GridSize::new(12, 9);
    let mut first = GameState::new_with_seed(bounds, ControlMode::Auto, 1234);
    let mut second = GameState::new_with_seed(bounds, ControlMode::Auto, 1234);

    for _ in 0..500 {
        assert_eq!(first.tick(), second.tick());
        assert_eq!(first.food, second.food);
        assert_eq!(first.snake.head(), second.snake.head());
    }
}

#[test]
fn autopilot_keeps_body_invariants() {
    let bounds = GridSize::new(10, 8);
    let mut state = GameState::new_with_seed(bounds, ControlMode::Auto, 77);

    for _ in 0..2_000 {
        let outcome = state.tick();

        let segments: Vec<Position> = state.snake.segments().copied().collect();
        assert!(bounds.contains(state.snake.head()));
        assert_eq!(state.snake.occupied_cells().len(), segments.len());
        for pair in segments.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }
        if let Some(food) = state.food {
            assert!(!state.snake.occupies(food));
        }

        let path = state.path();
        if outcome == TickOutcome::Moved && !path.is_empty() {
            assert_eq!(path.last().copied(), state.food);
            assert_eq!(path[0].manhattan_distance(state.snake.head()), 1);
            assert_eq!(path[1], state.snake.head());
        }
    }

    assert!(state.best_score > 0, "autopilot should eat at least once");
}
