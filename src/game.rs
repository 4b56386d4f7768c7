use std::{thread::sleep, time::{Duration, Instant}};

use crossterm::Result;
use rand::SeedableRng;

use crate::consts::{GRID_SIZE, POLL_INTERVAL_MS};
use crate::input::{apply_intent, intent_for_key, Intent};
use crate::session::{Phase, Session, Snapshot};
use crate::snake::Direction::{self, *};
use crate::term::{ScreenPos, TermManager};
use crate::theme::{theme, Theme};
use crate::timing::TickClock;
use crate::{Coords, SessionRng, TermInt};

/// Each board cell is two terminal columns wide so it looks roughly square.
const CELL_WIDTH: TermInt = 2;
const BOARD_COLS: TermInt = GRID_SIZE as TermInt * CELL_WIDTH + 2;
/// Board plus its border plus the score line above it.
const BOARD_ROWS: TermInt = GRID_SIZE as TermInt + 3;

pub struct SnakeGame {
    term: TermManager,
    session: Session,
    rng: SessionRng,
    theme: usize,
    clock: TickClock,
    moved: bool,
    dirty: bool,
}

impl SnakeGame {
    pub fn new(seed: u64, theme: usize) -> Result<Self> {
        let mut rng = SessionRng::seed_from_u64(seed);
        let session = Session::new(&mut rng);
        log::info!("New session, seed {}", seed);

        Ok(SnakeGame {
            term: TermManager::new()?,
            session,
            rng,
            theme,
            clock: TickClock::new(Instant::now()),
            moved: false,
            dirty: true,
        })
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    /// Runs until the player quits.
    pub fn play(&mut self) -> Result<()> {
        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                match intent_for_key(&key_ev) {
                    Some(Intent::Quit) => return Ok(()),
                    Some(Intent::SelectTheme(index)) => self.theme = index,
                    Some(Intent::Reset) => {
                        apply_intent(&mut self.session, Intent::Reset, &mut self.rng);
                        self.moved = false;
                    }
                    Some(intent) => apply_intent(&mut self.session, intent, &mut self.rng),
                    None => continue,
                }
                self.dirty = true;
            }

            if self.session.phase() == Phase::Running
                && self.clock.poll(Instant::now(), self.session.speed())
                && self.session.advance(&mut self.rng).is_some()
            {
                self.moved = true;
                self.dirty = true;
            }

            if self.dirty {
                self.render()?;
                self.dirty = false;
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn render(&mut self) -> Result<()> {
        let t = theme(self.theme);
        let snap = self.session.snapshot();
        let origin = board_origin(self.term.get_terminal_size());

        self.term.clear(t.panel)?;

        let hud = format!(
            "Score {:<5} Best {:<5} Speed {}  {}",
            snap.score, snap.best, snap.speed, t.name
        );
        self.term.print_at(origin, &hud, t.text, t.panel)?;

        draw_borders(&mut self.term, origin, t)?;

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let bg = if (x + y) % 2 == 0 { t.bg1 } else { t.bg2 };
                self.term.print_at(cell_pos(origin, (x, y)), "  ", t.text, bg)?;
            }
        }

        self.term.print_at(cell_pos(origin, snap.item), "()", t.accent, t.snack)?;

        for (i, pos) in snap.segments.iter().enumerate() {
            if i == 0 {
                let face = head_str(snap.heading);
                self.term.print_at(cell_pos(origin, *pos), face, t.text, t.head)?;
            } else {
                self.term.print_at(cell_pos(origin, *pos), "  ", t.text, t.body)?;
            }
        }

        let lines = overlay_lines(&snap, self.moved);
        if !lines.is_empty() {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let center = (origin.0 + BOARD_COLS / 2, origin.1 + 1 + BOARD_ROWS / 2);
            self.term.show_message(center, &refs, t.text, t.panel)?;
        }

        self.term.flush()
    }
}

fn draw_borders(term: &mut TermManager, origin: ScreenPos, t: &Theme) -> Result<()> {
    let top = origin.1 + 1;
    let bottom = top + GRID_SIZE as TermInt + 1;
    let edge = format!("+{}+", "-".repeat(BOARD_COLS as usize - 2));

    term.print_at((origin.0, top), &edge, t.accent, t.panel)?;
    term.print_at((origin.0, bottom), &edge, t.accent, t.panel)?;

    for y in top + 1..bottom {
        term.print_at((origin.0, y), "|", t.accent, t.panel)?;
        term.print_at((origin.0 + BOARD_COLS - 1, y), "|", t.accent, t.panel)?;
    }

    Ok(())
}

/// Top-left corner of the score line, centering the board in the terminal.
fn board_origin(term_size: ScreenPos) -> ScreenPos {
    (
        term_size.0.saturating_sub(BOARD_COLS) / 2,
        term_size.1.saturating_sub(BOARD_ROWS) / 2,
    )
}

/// Screen position of the left column of a board cell.
fn cell_pos(origin: ScreenPos, pos: Coords) -> ScreenPos {
    (
        origin.0 + 1 + pos.0 as TermInt * CELL_WIDTH,
        origin.1 + 2 + pos.1 as TermInt,
    )
}

fn head_str(direction: Direction) -> &'static str {
    match direction {
        Up => "^^",
        Down => "vv",
        Left => "<<",
        Right => ">>",
    }
}

fn overlay_lines(snap: &Snapshot, moved: bool) -> Vec<String> {
    match snap.phase {
        Phase::Running => vec![],
        Phase::Idle if !moved => vec![
            "Arrow keys or WASD to move".to_string(),
            "Space to pause, R to restart".to_string(),
            "1-4 to change colors, Q to quit".to_string(),
        ],
        Phase::Idle => vec!["Paused".to_string(), "Space to resume".to_string()],
        Phase::Over => vec![
            "Game over!".to_string(),
            format!("Score: {}", snap.score),
            format!("Best: {}", snap.best),
            String::new(),
            "Press R to play again".to_string(),
        ],
    }
}
