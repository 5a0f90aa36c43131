//! The game engine: board, snake, food, and the per-tick state transition
mod direction;
mod grid;
mod snake;
pub use self::direction::Direction;
pub use self::grid::Point;
pub use self::snake::Snake;
use self::grid::Bounds;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Validated parameters for constructing an [`Engine`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Setup {
    width: u16,
    height: u16,
    initial_length: usize,
    wrap: bool,
}

impl Setup {
    /// The smallest permitted width & height of a board
    pub const MIN_SIDE: u16 = 5;

    /// Check that a game can be played on a `width` by `height` board with a
    /// snake that starts out `initial_length` segments long.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either side of the board is shorter than
    /// [`Setup::MIN_SIDE`], if `initial_length` is zero, or if a snake of
    /// `initial_length` segments stretching left from the center of the board
    /// would not fit on it.
    pub fn new(
        width: u16,
        height: u16,
        initial_length: usize,
        wrap: bool,
    ) -> Result<Setup, ConstructionError> {
        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(ConstructionError::BoardTooSmall { width, height });
        }
        if initial_length == 0 {
            return Err(ConstructionError::EmptySnake);
        }
        if initial_length > usize::from(width / 2) + 1 {
            return Err(ConstructionError::SnakeTooLong {
                length: initial_length,
                width,
            });
        }
        Ok(Setup {
            width,
            height,
            initial_length,
            wrap,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn initial_length(&self) -> usize {
        self.initial_length
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            width: self.width,
            height: self.height,
            wrap: self.wrap,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ConstructionError {
    #[error("board must be at least {min}x{min} cells; got {width}x{height}", min = Setup::MIN_SIDE)]
    BoardTooSmall { width: u16, height: u16 },
    #[error("initial snake length must be at least 1")]
    EmptySnake,
    #[error("a snake of length {length} does not fit on a board {width} cells wide")]
    SnakeTooLong { length: usize, width: u16 },
}

/// Whether the game is still going, and if not, what ended it
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Phase {
    Running,
    GameOver(Collision),
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Collision {
    /// The edge of a board without wraparound
    Wall,
    /// Another segment of the snake
    Body,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => f.pad("wall"),
            Collision::Body => f.pad("body"),
        }
    }
}

/// The complete state of a game.  Only the [`Engine`] that owns it can change
/// it; everyone else gets a shared reference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    bounds: Bounds,
    snake: Snake,
    food: Point,
    score: u32,
    phase: Phase,
}

impl GameState {
    pub fn width(&self) -> u16 {
        self.bounds.width
    }

    pub fn height(&self) -> u16 {
        self.bounds.height
    }

    /// Do the edges of the board wrap around?
    pub fn wrap(&self) -> bool {
        self.bounds.wrap
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Point {
        self.food
    }

    /// The number of food items eaten so far
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::Running
    }

    /// Is `p` a cell of the board?
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }
}

/// Owner of a [`GameState`] and the random source used to place food on it
#[derive(Clone, Debug)]
pub struct Engine<R = rand::rngs::ThreadRng> {
    state: GameState,
    rng: R,
}

impl Engine<rand::rngs::ThreadRng> {
    /// Start a new game on a `width` by `height` board.
    ///
    /// # Errors
    ///
    /// Returns `Err` under the same conditions as [`Setup::new()`].
    pub fn new(
        width: u16,
        height: u16,
        initial_length: usize,
        wrap: bool,
    ) -> Result<Self, ConstructionError> {
        Setup::new(width, height, initial_length, wrap).map(Engine::from_setup)
    }

    /// Start a new game with already-validated parameters
    pub fn from_setup(setup: Setup) -> Self {
        Engine::with_rng(setup, rand::rng())
    }
}

impl<R: Rng> Engine<R> {
    /// Start a new game, drawing food positions from `rng`
    pub fn with_rng(setup: Setup, rng: R) -> Engine<R> {
        let bounds = setup.bounds();
        let head = Point::new(i32::from(bounds.width / 2), i32::from(bounds.height / 2));
        let snake = Snake::new(head, setup.initial_length);
        let mut engine = Engine {
            state: GameState {
                bounds,
                snake,
                food: head,
                score: 0,
                phase: Phase::Running,
            },
            rng,
        };
        engine.place_food();
        log::info!(
            "New {}x{} game; wraparound: {}; snake length: {}",
            bounds.width,
            bounds.height,
            bounds.wrap,
            setup.initial_length
        );
        engine
    }

    /// Advance the game by one step and return the resulting state.  Once the
    /// game is over, this does nothing.
    pub fn tick(&mut self) -> &GameState {
        if self.state.is_over() {
            return &self.state;
        }
        let snake = &self.state.snake;
        let Some(head) = self.state.bounds.step(snake.head(), snake.direction()) else {
            self.end(Collision::Wall);
            return &self.state;
        };
        if snake.collides(head) {
            self.end(Collision::Body);
            return &self.state;
        }
        log::trace!("Snake moves {} to {head}", snake.direction());
        self.state.snake.advance(head);
        if head == self.state.food {
            self.state.snake.grow();
            self.state.score += 1;
            self.place_food();
        }
        &self.state
    }

    /// Put the food on a random cell not occupied by the snake.
    ///
    /// This loops forever if the snake covers the whole board.
    fn place_food(&mut self) {
        let food = loop {
            let p = self.state.bounds.random_point(&mut self.rng);
            if !self.state.snake.occupies(p) {
                break p;
            }
        };
        log::debug!("Placed food at {food}");
        self.state.food = food;
    }
}

impl<R> Engine<R> {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Request that the snake move in `direction` from the next tick onwards.
    /// Requests to reverse the snake's current direction of travel are
    /// ignored.
    pub fn change_direction(&mut self, direction: Direction) {
        self.state.snake.turn(direction);
    }

    fn end(&mut self, collision: Collision) {
        log::info!(
            "Game over: {collision} collision at {}; score: {}",
            self.state.snake.head(),
            self.state.score
        );
        self.state.phase = Phase::GameOver(collision);
    }
}
