use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

use crate::session::{Phase, Session};
use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    TogglePause,
    Reset,
    /// Palette index, 0-based.
    SelectTheme(usize),
    Quit,
}

pub fn intent_for_key(ev: &KeyEvent) -> Option<Intent> {
    if is_ctrl_c(ev) {
        return Some(Intent::Quit);
    }

    let intent = match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Intent::Turn(Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Intent::Turn(Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Intent::Turn(Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Intent::Turn(Right),
        KeyCode::Char(' ') => Intent::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::Reset,
        KeyCode::Char(c @ '1'..='4') => Intent::SelectTheme(c as usize - '1' as usize),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
        _ => return None,
    };

    Some(intent)
}

/// Feeds a gameplay intent to the session. Theme and quit intents are left to the caller.
pub fn apply_intent<R: Rng + ?Sized>(session: &mut Session, intent: Intent, rng: &mut R) {
    match intent {
        Intent::Turn(dir) => {
            if !session.set_pending_heading(dir) {
                log::debug!("Ignored turn {:?} while heading {:?}", dir, session.heading());
            }
        }
        Intent::TogglePause => {
            if session.phase() != Phase::Over {
                session.toggle_pause();
            }
        }
        Intent::Reset => session.reset(rng),
        Intent::SelectTheme(_) | Intent::Quit => {}
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
