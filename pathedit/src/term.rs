//! Crossterm terminal frontend.
//!
//! Draws each grid cell as a two-column colored block and maps terminal
//! mouse coordinates back into window pixels, so the editor only ever sees
//! the pixel-space geometry it was designed around.

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathgrid_core::{Color, InputSnapshot, Point};

use crate::frontend::{Frontend, Scene};
use crate::status::StatusKind;

/// Terminal columns per grid cell.
const COLS_PER_CELL: i32 = 2;

/// Maps a [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Terminal position → window pixel position (top-left pixel of the area
/// the terminal cell covers).
fn terminal_to_pixel(col: u16, row: u16, pitch: i32) -> Point {
    Point::new(col as i32 * pitch / COLS_PER_CELL, row as i32 * pitch)
}

/// Cell centre in window pixels → terminal position of its left column.
fn center_to_terminal(center: Point, pitch: i32) -> (u16, u16) {
    let col = (center.x - pitch / 2) / pitch * COLS_PER_CELL;
    let row = (center.y - pitch / 2) / pitch;
    (col as u16, row as u16)
}

/// A terminal backend: raw mode, alternate screen, mouse capture.
pub struct TermFrontend {
    pitch: i32,
    interior: i32,
    /// Raw state carried across frames. Button and pointer state persist;
    /// key signals are momentary because terminals report presses, not
    /// held keys — each press surfaces as a one-frame high signal.
    held: InputSnapshot,
}

impl TermFrontend {
    pub fn new(window_px: i32, interior: i32) -> Self {
        Self {
            pitch: window_px / interior,
            interior,
            held: InputSnapshot::default(),
        }
    }

    fn handle_key(&mut self, ev: KeyEvent) {
        if ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL) {
            self.held.quit = true;
            return;
        }
        match ev.code {
            KeyCode::Esc | KeyCode::Char('q') => self.held.quit = true,
            KeyCode::Char('s') => self.held.start_key = true,
            KeyCode::Char('g') => self.held.goal_key = true,
            KeyCode::Char(' ') => self.held.path_key = true,
            KeyCode::Char('r') => self.held.scatter_key = true,
            KeyCode::Char('c') => self.held.clear_key = true,
            _ => {}
        }
    }
}

impl Frontend for TermFrontend {
    fn init(&mut self, title: &str) -> Result<(), Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::SetTitle(title),
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        Ok(())
    }

    fn poll(&mut self) -> Result<InputSnapshot, Box<dyn Error>> {
        // Key signals last exactly one frame.
        self.held.start_key = false;
        self.held.goal_key = false;
        self.held.path_key = false;
        self.held.scatter_key = false;
        self.held.clear_key = false;
        self.held.quit = false;

        // Short blocking poll paces the frame loop; then drain.
        if event::poll(Duration::from_millis(16))? {
            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Key(kev) => self.handle_key(kev),
                    Event::Mouse(mev) => {
                        self.held.mouse = terminal_to_pixel(mev.column, mev.row, self.pitch);
                        match mev.kind {
                            MouseEventKind::Down(MouseButton::Left) => self.held.left = true,
                            MouseEventKind::Down(MouseButton::Right) => self.held.right = true,
                            MouseEventKind::Up(MouseButton::Left) => self.held.left = false,
                            MouseEventKind::Up(MouseButton::Right) => self.held.right = false,
                            _ => {}
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(self.held)
    }

    fn present(&mut self, scene: &Scene) -> Result<(), Box<dyn Error>> {
        let mut stdout = io::stdout();

        for quad in &scene.quads {
            let (col, row) = center_to_terminal(quad.center, self.pitch);
            queue!(
                stdout,
                cursor::MoveTo(col, row),
                SetForegroundColor(to_ct_color(quad.color)),
                Print("██")
            )?;
        }

        // Status line below the grid.
        let status_row = (self.interior + 1) as u16;
        queue!(
            stdout,
            cursor::MoveTo(0, status_row),
            ResetColor,
            terminal::Clear(ClearType::CurrentLine)
        )?;
        if let Some((text, kind)) = &scene.status {
            let color = match kind {
                StatusKind::Info => CtColor::Reset,
                StatusKind::Success => CtColor::Green,
                StatusKind::Error => CtColor::Red,
            };
            queue!(stdout, SetForegroundColor(color), Print(text), ResetColor)?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, event::DisableMouseCapture);
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
