use crate::consts;
use gridsnake::engine::{ConstructionError, Setup};
use serde::Deserialize;
use std::num::{NonZeroU16, NonZeroU64};
use std::time::Duration;

/// Gameplay & display options.  These can be set in the configuration file
/// and overridden on the command line.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Options {
    /// Width of the board, in cells
    pub(crate) width: u16,

    /// Height of the board, in cells
    pub(crate) height: u16,

    /// Length of the snake at the start of a game
    pub(crate) initial_length: usize,

    /// Milliseconds between movements of the snake
    pub(crate) tick_ms: NonZeroU64,

    /// Whether the snake passes through the edges of the board to the other
    /// side instead of dying
    pub(crate) wrap: bool,

    /// Number of terminal columns used to draw each cell of the board
    pub(crate) cell_width: NonZeroU16,
}

impl Options {
    /// Validate the board-related options for use in constructing game engines
    pub(crate) fn setup(&self) -> Result<Setup, ConstructionError> {
        Setup::new(self.width, self.height, self.initial_length, self.wrap)
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.get())
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            width: consts::DEFAULT_WIDTH,
            height: consts::DEFAULT_HEIGHT,
            initial_length: consts::DEFAULT_INITIAL_LENGTH,
            tick_ms: consts::DEFAULT_TICK_MS,
            wrap: false,
            cell_width: consts::DEFAULT_CELL_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_playable() {
        let opts = Options::default();
        let setup = opts.setup().expect("default options should be valid");
        assert_eq!((setup.width(), setup.height()), (24, 18));
        assert_eq!(setup.initial_length(), 3);
        assert!(!setup.wrap());
        assert_eq!(opts.tick_period(), Duration::from_millis(120));
    }

    #[test]
    fn small_board_is_rejected() {
        let opts = Options {
            width: 4,
            ..Options::default()
        };
        assert_eq!(
            opts.setup(),
            Err(ConstructionError::BoardTooSmall {
                width: 4,
                height: 18
            })
        );
    }
}
