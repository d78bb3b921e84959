use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::{
    Theme, CELL_COLUMNS, GLYPH_CELL, GLYPH_FOOD, GLYPH_GRID, GLYPH_PATH, STATUS_HELP,
};
use crate::game::{ControlMode, GameState};
use crate::grid::{GridSize, Position};

/// Drawable category of one grid cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    GridLine,
    Path,
    Food,
    SnakeBody,
    SnakeHead,
}

/// Cells to draw for `state`, in paint order (later entries cover earlier).
#[must_use]
pub fn scene(state: &GameState) -> Vec<(Position, CellKind)> {
    let mut cells: Vec<(Position, CellKind)> = state
        .bounds()
        .cells()
        .map(|position| (position, CellKind::GridLine))
        .collect();

    if state.mode == ControlMode::Auto {
        cells.extend(state.path().iter().skip(1).map(|p| (*p, CellKind::Path)));
    }

    if let Some(food) = state.food {
        cells.push((food, CellKind::Food));
    }

    cells.extend(
        state
            .snake
            .segments()
            .skip(1)
            .map(|segment| (*segment, CellKind::SnakeBody)),
    );
    cells.push((state.snake.head(), CellKind::SnakeHead));

    cells
}

/// Text for the status row.
#[must_use]
pub fn status_line(state: &GameState) -> String {
    format!(
        "Mode: {}    Score: {}    {STATUS_HELP}",
        state.mode.label(),
        state.score
    )
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let [status_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(status_line(state))).style(Style::new().fg(theme.status_text)),
        status_area,
    );

    let field = field_rect(play_area, state.bounds());
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    let buffer = frame.buffer_mut();
    for (position, kind) in scene(state) {
        draw_cell(buffer, inner, position, kind, theme);
    }
}

fn draw_cell(buffer: &mut Buffer, inner: Rect, position: Position, kind: CellKind, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, position) else {
        return;
    };

    let base = Style::new().bg(theme.play_bg);
    let (glyph, style) = match kind {
        CellKind::GridLine => (GLYPH_GRID, base.fg(theme.grid_line)),
        CellKind::Path => (GLYPH_PATH, base.fg(theme.path)),
        CellKind::Food => (GLYPH_FOOD, base.fg(theme.food)),
        CellKind::SnakeBody => (GLYPH_CELL, base.fg(theme.snake_body)),
        CellKind::SnakeHead => (
            GLYPH_CELL,
            base.fg(theme.snake_head).add_modifier(Modifier::BOLD),
        ),
    };

    buffer.set_string(x, y, glyph, style);
}

/// Bordered rectangle sized to the grid, centred horizontally in `area`.
fn field_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds
        .width
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::THEME_CLASSIC;
    use crate::game::{ControlMode, GameState};
    use crate::grid::{GridSize, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{logical_to_terminal, render, scene, status_line, CellKind};

    #[test]
    fn scene_paints_head_last_and_skips_path_start() {
        let mut state = GameState::new_with_seed(GridSize::new(8, 1), ControlMode::Auto, 1);
        state.snake = Snake::from_segments(
            vec![Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)],
            Direction::Right,
        );
        state.food = Some(Position::new(6, 0));
        state.tick();

        let cells = scene(&state);
        let grid_cells = cells
            .iter()
            .filter(|(_, kind)| *kind == CellKind::GridLine)
            .count();
        let path: Vec<Position> = cells
            .iter()
            .filter(|(_, kind)| *kind == CellKind::Path)
            .map(|(position, _)| *position)
            .collect();

        assert_eq!(grid_cells, 8);
        assert_eq!(
            path,
            vec![
                Position::new(3, 0),
                Position::new(4, 0),
                Position::new(5, 0),
                Position::new(6, 0),
            ]
        );
        assert_eq!(cells.last(), Some(&(Position::new(3, 0), CellKind::SnakeHead)));
        assert!(cells.contains(&(Position::new(6, 0), CellKind::Food)));
        assert!(cells.contains(&(Position::new(1, 0), CellKind::SnakeBody)));
    }

    #[test]
    fn manual_mode_draws_no_path() {
        let mut state = GameState::new_with_seed(GridSize::new(10, 8), ControlMode::Manual, 2);
        state.tick();

        assert!(scene(&state).iter().all(|(_, kind)| *kind != CellKind::Path));
    }

    #[test]
    fn status_line_shows_mode_and_score() {
        let mut state = GameState::new_with_seed(GridSize::new(10, 8), ControlMode::Manual, 3);
        state.score = 12;

        assert!(status_line(&state).starts_with("Mode: MANUAL    Score: 12"));
    }

    #[test]
    fn cells_outside_field_are_clipped() {
        let inner = Rect::new(1, 1, 8, 3);

        assert_eq!(logical_to_terminal(inner, Position::new(0, 0)), Some((1, 1)));
        assert_eq!(logical_to_terminal(inner, Position::new(3, 2)), Some((7, 3)));
        assert_eq!(logical_to_terminal(inner, Position::new(4, 0)), None);
        assert_eq!(logical_to_terminal(inner, Position::new(-1, 0)), None);
    }

    #[test]
    fn renders_status_and_head_into_buffer() {
        let state = GameState::new_with_seed(GridSize::new(8, 6), ControlMode::Auto, 4);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test backend");

        terminal
            .draw(|frame| render(frame, &state, &THEME_CLASSIC))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let content = buffer.content();
        let status: String = content[..80].iter().map(|cell| cell.symbol()).collect();
        assert!(status.starts_with("Mode: AUTO    Score: 0"));

        // Field is 18 columns wide, centred: border at x = 31, inner from x = 32, y = 2.
        // Head (4, 3) lands at x = 32 + 8, y = 2 + 3.
        let head = &content[5 * 80 + 40];
        assert_eq!(head.symbol(), "█");
        assert_eq!(head.fg, THEME_CLASSIC.snake_head);
    }
}
