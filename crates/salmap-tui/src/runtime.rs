//! Crossterm runtime for the interactive viewer: terminal session
//! lifecycle, key decoding, and styled line painting.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, Event as TerminalEvent, KeyCode as TerminalKeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use salmap_core::color::Rgb;

use crate::app::{App, AppKey, StyledLine};

/// Drive the app until it quits or the user interrupts.
pub fn run(app: &mut App) -> Result<(), String> {
    let mut session =
        TerminalSession::enter().map_err(|err| format!("enter tui terminal mode: {err}"))?;

    let mut dirty = true;
    loop {
        if dirty {
            let lines = app.render();
            render_lines(&mut session.stdout, &lines)
                .map_err(|err| format!("render frame: {err}"))?;
            dirty = false;
        }

        if app.quitting() {
            break;
        }

        let event = event::read().map_err(|err| format!("read terminal event: {err}"))?;
        if is_interrupt(&event) {
            break;
        }

        match event {
            TerminalEvent::Resize(..) => dirty = true,
            other => {
                if let Some(key) = map_terminal_event(&other) {
                    app.update(key);
                    dirty = true;
                }
            }
        }
    }

    Ok(())
}

fn map_terminal_event(event: &TerminalEvent) -> Option<AppKey> {
    let TerminalEvent::Key(key_event) = event else {
        return None;
    };
    if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key_event.code {
        TerminalKeyCode::Left => Some(AppKey::Left),
        TerminalKeyCode::Right => Some(AppKey::Right),
        TerminalKeyCode::Home => Some(AppKey::Home),
        TerminalKeyCode::End => Some(AppKey::End),
        TerminalKeyCode::Backspace => Some(AppKey::ClearHover),
        TerminalKeyCode::Esc => Some(AppKey::Quit),
        TerminalKeyCode::Char('h') => Some(AppKey::Left),
        TerminalKeyCode::Char('l') => Some(AppKey::Right),
        TerminalKeyCode::Char('c') => Some(AppKey::CycleColormap),
        TerminalKeyCode::Char('C') => Some(AppKey::CycleColormapBack),
        TerminalKeyCode::Char('q') => Some(AppKey::Quit),
        _ => None,
    }
}

fn is_interrupt(event: &TerminalEvent) -> bool {
    let TerminalEvent::Key(key_event) = event else {
        return false;
    };
    if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return false;
    }
    matches!(key_event.code, TerminalKeyCode::Char('c'))
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

fn to_crossterm(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn render_lines<W: Write>(out: &mut W, lines: &[StyledLine]) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, to_u16(row)))?;
        for span in line {
            queue!(out, SetAttribute(Attribute::Reset))?;
            if let Some(bg) = span.background {
                queue!(out, SetBackgroundColor(to_crossterm(bg)))?;
            }
            if let Some(fg) = span.foreground {
                queue!(out, SetForegroundColor(to_crossterm(fg)))?;
            }
            if span.underline {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            queue!(out, Print(&span.text))?;
        }
    }
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        MoveTo(0, to_u16(lines.len()))
    )?;
    out.flush()
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

struct TerminalSession {
    stdout: io::Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            LeaveAlternateScreen,
            Show,
            MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::{is_interrupt, map_terminal_event};
    use crate::app::AppKey;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn arrow_keys_map_to_hover_moves() {
        assert_eq!(
            map_terminal_event(&key(KeyCode::Left, KeyModifiers::NONE)),
            Some(AppKey::Left)
        );
        assert_eq!(
            map_terminal_event(&key(KeyCode::Right, KeyModifiers::NONE)),
            Some(AppKey::Right)
        );
    }

    #[test]
    fn shift_c_cycles_backwards() {
        assert_eq!(
            map_terminal_event(&key(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Some(AppKey::CycleColormapBack)
        );
    }

    #[test]
    fn ctrl_c_is_interrupt_not_cycle() {
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&event));
        assert_eq!(map_terminal_event(&event), None);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(
            map_terminal_event(&key(KeyCode::Tab, KeyModifiers::NONE)),
            None
        );
    }
}
