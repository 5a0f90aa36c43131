//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::num::{NonZeroU16, NonZeroU64};

/// Default board width, in cells
pub(crate) const DEFAULT_WIDTH: u16 = 24;

/// Default board height, in cells
pub(crate) const DEFAULT_HEIGHT: u16 = 18;

/// Default length of the snake at the start of a game
pub(crate) const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Default time between movements of the snake, in milliseconds
pub(crate) const DEFAULT_TICK_MS: NonZeroU64 = match NonZeroU64::new(120) {
    Some(n) => n,
    None => panic!("DEFAULT_TICK_MS should be nonzero"),
};

/// Default number of terminal columns used to draw each cell of the board.
/// Terminal cells are about twice as tall as they are wide, so two columns
/// make for roughly square board cells.
pub(crate) const DEFAULT_CELL_WIDTH: NonZeroU16 = match NonZeroU16::new(2) {
    Some(n) => n,
    None => panic!("DEFAULT_CELL_WIDTH should be nonzero"),
};

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with itself or a wall
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
