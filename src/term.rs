use crate::TermInt;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal, Result};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

/// Screen position, in terminal columns and rows.
pub type ScreenPos = (TermInt, TermInt);

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking)?;
        execute!(self.stdout, LeaveAlternateScreen)
    }

    /// Drains every key event that is already waiting.
    pub fn read_key_events_queue(&mut self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(ev) => events.push(ev),
                Event::Resize(w, h) => {
                    self.width = w;
                    self.height = h;
                }
                _ => {}
            }
        }

        Ok(events)
    }

    pub fn get_terminal_size(&self) -> ScreenPos {
        (self.width, self.height)
    }

    pub fn print_at(&mut self, pos: ScreenPos, text: &str, fg: Color, bg: Color) -> Result<()> {
        if pos.0 >= self.width || pos.1 >= self.height {
            return Ok(());
        }

        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg),
            style::Print(text)
        )
    }

    /// Draws a boxed message centered on `center`, padding every line to the widest one.
    pub fn show_message(&mut self, center: ScreenPos, lines: &[&str], fg: Color, bg: Color) -> Result<()> {
        let msg_width = lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2;
        let msg_height = lines.len() + 2;
        let top_left = (
            center.0.saturating_sub(msg_width as TermInt / 2),
            center.1.saturating_sub(msg_height as TermInt / 2),
        );

        let blank = " ".repeat(msg_width);
        self.print_at(top_left, &blank, fg, bg)?;
        self.print_at((top_left.0, top_left.1 + msg_height as TermInt - 1), &blank, fg, bg)?;

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width);
            self.print_at((top_left.0, top_left.1 + i as TermInt + 1), &padded_line, fg, bg)?;
        }

        Ok(())
    }

    pub fn clear(&mut self, bg: Color) -> Result<()> {
        queue!(self.stdout, style::SetBackgroundColor(bg), terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}
