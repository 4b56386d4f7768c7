use crate::{Coords, GridInt};

/// Width and height of the board, in cells.
pub const GRID_SIZE: GridInt = 18;

/// Body of a fresh snake, head first.
pub const START_BODY: [Coords; 3] = [(4, 10), (3, 10), (2, 10)];

pub const REWARD_PER_ITEM: u32 = 10;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 8;
/// The speed tier goes up every time this many items have been eaten.
pub const ITEMS_PER_SPEEDUP: u32 = 3;

pub const BASE_TICK_INTERVAL_MS: u64 = 140;
pub const TICK_STEP_MS: u64 = 8;

/// How long the presentation loop sleeps between input polls.
pub const POLL_INTERVAL_MS: u64 = 8;
