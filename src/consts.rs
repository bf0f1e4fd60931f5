//! Assorted constants & hard-coded configuration
use crate::game::{Cell, Heading};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Width and height of the (square) board, in cells
pub(crate) const GRID_SIZE: i32 = 15;

/// Where the snake's head is placed at the start of each game
pub(crate) const START_CELL: Cell = Cell::new(10, 10);

/// The direction the snake faces at the start of each game
pub(crate) const START_HEADING: Heading = Heading::Right;

/// Points awarded for each food eaten
pub(crate) const FOOD_POINTS: u32 = 10;

/// Number of obstacles on the board at a score of zero
pub(crate) const MIN_OBSTACLES: usize = 3;

/// Number of obstacles will never exceed this
pub(crate) const MAX_OBSTACLES: usize = 8;

/// One more obstacle is added each time the score passes a multiple of this
pub(crate) const POINTS_PER_OBSTACLE: u32 = 50;

/// Number of random draws the placement generator makes before falling back
/// to scanning the board for free cells
pub(crate) const PLACEMENT_ATTEMPTS: usize = 256;

/// Time between movements of the snake at the start of a game
pub(crate) const INITIAL_TICK_PERIOD: Duration = Duration::from_millis(200);

/// Amount by which the time between movements shrinks per food eaten
pub(crate) const TICK_PERIOD_STEP: Duration = Duration::from_millis(10);

/// The time between movements never drops below this
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(70);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw one board cell
pub(crate) const CELL_WIDTH: u16 = 2;

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

/// Glyph for the snake's head when it's collided with something
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

/// Style for the "new best score" notice
pub(crate) const NEW_BEST_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

/// Glyph for [`ObstacleKind::Rock`][crate::game::ObstacleKind::Rock]
pub(crate) const ROCK_SYMBOL: char = '◆';

/// Glyph for [`ObstacleKind::Crate`][crate::game::ObstacleKind::Crate]
pub(crate) const CRATE_SYMBOL: char = '▣';

/// Glyph for [`ObstacleKind::Bramble`][crate::game::ObstacleKind::Bramble]
pub(crate) const BRAMBLE_SYMBOL: char = '✱';

/// Glyph for [`ObstacleKind::Pillar`][crate::game::ObstacleKind::Pillar]
pub(crate) const PILLAR_SYMBOL: char = '█';

pub(crate) const ROCK_STYLE: Style = Style::new().fg(Color::Gray);

pub(crate) const CRATE_STYLE: Style = Style::new().fg(Color::Yellow);

pub(crate) const BRAMBLE_STYLE: Style = Style::new().fg(Color::Magenta);

pub(crate) const PILLAR_STYLE: Style = Style::new().fg(Color::DarkGray);
