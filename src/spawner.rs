use rand::Rng;

use crate::consts::GRID_SIZE;
use crate::snake::Snake;
use crate::Coords;

/// Picks a uniformly random cell that the snake doesn't cover.
///
/// Samples until a free cell turns up, so it never returns if the snake fills
/// the whole board.
pub fn place_item<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Coords {
    loop {
        let spot = (rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        if !snake.occupies(spot) {
            log::debug!("Item placed at ({}, {})", spot.0, spot.1);
            return spot;
        }
    }
}
