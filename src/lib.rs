//! A deterministic, turn-based snake game on a discrete grid.
//!
//! The [`engine`] module holds all of the game rules: a snake of square
//! segments moves one cell per tick, grows by eating food, and dies on running
//! into itself or (unless the board wraps around) the edge of the board.  The
//! `gridsnake` binary is a terminal front end built on top of it.
pub mod engine;
