//! A terminal chess dashboard: a freely rearrangeable board plus static
//! tournament, lesson and game-history panels.

pub mod board;
pub mod dashboard;
pub mod fixtures;
pub mod input;
pub mod presentation;

pub use board::{Board, Interaction, PieceKind, Selection, Side, Square, Token};
pub use dashboard::{Dashboard, Flow, Tab};
pub use fixtures::{FixtureError, Fixtures};
