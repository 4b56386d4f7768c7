pub mod config;
pub mod consts;
pub mod game;
pub mod input;
pub mod session;
pub mod snake;
pub mod spawner;
pub mod term;
pub mod theme;
pub mod timing;

pub type TermInt = u16;
pub type GridInt = i16;
pub type Coords = (GridInt, GridInt);

/// Generator used for a whole run of the game.
pub type SessionRng = rand_pcg::Pcg32;
