use clap::Parser;

use crate::timing::seed_from_clock;

#[derive(Parser, Debug)]
#[command(name = "cozy-snake", about = "Snake on a wrap-around 18x18 board, in the terminal")]
pub struct Args {
    /// Fixed RNG seed, for replaying the same item placements
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting color theme
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub theme: u8,
}

impl Args {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(seed_from_clock)
    }

    pub fn theme_index(&self) -> usize {
        self.theme as usize - 1
    }
}
