use clap::Parser;

use cozy_snake::config::Args;
use cozy_snake::game::SnakeGame;

fn main() -> crossterm::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game = SnakeGame::new(args.seed(), args.theme_index())?;
    game.initialize()?;

    // Put the terminal back even if the game loop failed
    let res = game.play();
    game.restore()?;
    res
}
