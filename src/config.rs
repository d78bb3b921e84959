use ratatui::style::Color;

use crate::grid::GridSize;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 28;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Default board dimensions.
pub const DEFAULT_GRID: GridSize = GridSize::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT);

/// Default simulation rate.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 12;

/// Upper bound accepted for the simulation rate.
pub const MAX_TICKS_PER_SECOND: u32 = 120;

/// Smallest width that fits the three-cell start layout.
pub const MIN_GRID_WIDTH: u16 = 4;

/// Largest accepted board side; keeps a per-tick A* cheap.
pub const MAX_GRID_SIDE: u16 = 200;

/// Terminal columns used to draw one grid cell.
pub const CELL_COLUMNS: u16 = 2;

/// Filled cell glyph (snake segments).
pub const GLYPH_CELL: &str = "██";

/// Food glyph.
pub const GLYPH_FOOD: &str = "▐▌";

/// Path highlight glyph.
pub const GLYPH_PATH: &str = "░░";

/// Empty cell glyph; the dot stands in for grid lines.
pub const GLYPH_GRID: &str = " ·";

/// Static help appended to the status line.
pub const STATUS_HELP: &str = "SPACE: toggle auto/manual    R: restart    Q: quit";

/// Colors for each drawable category.
#[derive(Debug)]
pub struct Theme {
    pub grid_line: Color,
    pub food: Color,
    pub snake_body: Color,
    pub snake_head: Color,
    pub path: Color,
    pub play_bg: Color,
    pub border: Color,
    pub status_text: Color,
}

/// Green snake, red food, blue path on a near-black field.
pub const THEME_CLASSIC: Theme = Theme {
    grid_line: Color::Rgb(30, 30, 30),
    food: Color::Rgb(200, 50, 50),
    snake_body: Color::Rgb(50, 200, 50),
    snake_head: Color::Rgb(20, 230, 80),
    path: Color::Rgb(80, 160, 250),
    play_bg: Color::Rgb(10, 10, 10),
    border: Color::DarkGray,
    status_text: Color::Rgb(220, 220, 220),
};
