//! Terminal backend.
//!
//! Draws every mapped pie on stderr, in raw mode on the alternate screen,
//! and reads keyboard and mouse input from the controlling terminal. Stdout
//! stays free for the chosen output. The terminal is restored when the
//! backend is dropped, whatever path the session took.

pub mod canvas;
pub mod grab;
pub mod input;
pub mod metrics;

use std::collections::VecDeque;
use std::io::{self, BufWriter, Stderr, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Color, Colors, Print, ResetColor, SetColors};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use crossterm::{cursor, event, execute, queue};

use crate::config::{Rgb, Style};
use crate::domain::entities::{MenuId, MenuTree};
use crate::domain::ports::{EventSource, MenuDisplay, MenuEvent};
use crate::domain::services::PieShape;
use crate::error::{PieMenuError, PieResult};
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{ANSI_CUBE_LEVELS, ANSI_CUBE_START};

use canvas::{Canvas, Cell};
use grab::{acquire, GRAB_ATTEMPTS, GRAB_DELAY};
use input::InputTranslator;

pub use metrics::{screen_pixels, CellMetrics};

pub struct TerminalBackend {
    out: BufWriter<Stderr>,
    style: Style,
    shape: PieShape,
    true_color: bool,
    canvas: Canvas,
    last_frame: Vec<Cell>,
    /// Mapped menus, bottom to top
    mapped: Vec<MenuId>,
    input: InputTranslator,
    pending: VecDeque<MenuEvent>,
}

impl TerminalBackend {
    /// Take over the terminal. Fails if stderr is not a terminal or raw mode
    /// cannot be entered within the retry budget.
    pub fn open(
        style: Style,
        shape: PieShape,
        title: &str,
        caps: &TerminalCapabilities,
    ) -> PieResult<Self> {
        if !caps.is_tty {
            return Err(PieMenuError::DisplayUnavailable {
                message: "stderr is not a terminal".to_string(),
            });
        }

        acquire(GRAB_ATTEMPTS, GRAB_DELAY, terminal::enable_raw_mode)?;
        // From here on Drop restores the terminal
        let mut backend = Self {
            out: BufWriter::new(io::stderr()),
            style,
            shape,
            true_color: caps.supports_true_color,
            canvas: Canvas::new(caps.width, caps.height),
            last_frame: Vec::new(),
            mapped: Vec::new(),
            input: InputTranslator::new(),
            pending: VecDeque::new(),
        };
        execute!(
            backend.out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            SetTitle(title),
            Clear(ClearType::All)
        )?;
        log::debug!("terminal ready: {}x{} cells", caps.width, caps.height);
        Ok(backend)
    }

    fn color(&self, rgb: Option<Rgb>) -> Color {
        match rgb {
            None => Color::Reset,
            Some(rgb) if self.true_color => Color::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            },
            Some(rgb) => Color::AnsiValue(ansi_cube(rgb)),
        }
    }

    /// Print the cells that changed since the last frame
    fn present(&mut self, frame: Vec<Cell>) -> io::Result<()> {
        let columns = self.canvas.columns().max(1);
        for (i, cell) in frame.iter().enumerate() {
            if cell.symbol.is_empty() || self.last_frame.get(i) == Some(cell) {
                continue;
            }
            let colors = Colors::new(self.color(cell.fg), self.color(cell.bg));
            queue!(
                self.out,
                cursor::MoveTo((i % columns) as u16, (i / columns) as u16),
                SetColors(colors),
                Print(&cell.symbol)
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        self.last_frame = frame;
        Ok(())
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            DisableMouseCapture,
            cursor::Show,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl EventSource for TerminalBackend {
    fn next_event(&mut self, tree: &MenuTree) -> PieResult<Option<MenuEvent>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            let raw = event::read()?;
            if let event::Event::Resize(columns, rows) = raw {
                self.canvas = Canvas::new(columns, rows);
                self.last_frame.clear();
                execute!(self.out, Clear(ClearType::All))?;
            }
            let events = self.input.translate(&raw, tree, &self.mapped, &self.shape);
            self.pending.extend(events);
        }
    }
}

impl MenuDisplay for TerminalBackend {
    fn map(&mut self, _tree: &MenuTree, menu: MenuId) -> PieResult<()> {
        if !self.mapped.contains(&menu) {
            log::debug!("map menu {}", menu.index());
            self.mapped.push(menu);
        }
        Ok(())
    }

    fn unmap(&mut self, _tree: &MenuTree, menu: MenuId) -> PieResult<()> {
        log::debug!("unmap menu {}", menu.index());
        self.mapped.retain(|&m| m != menu);
        self.input.forget(menu);
        Ok(())
    }

    fn warp_pointer(&mut self, _tree: &MenuTree, menu: MenuId) -> PieResult<()> {
        // The real pointer cannot be moved; start tracking afresh instead
        log::trace!("warp to menu {}", menu.index());
        self.input.reset_hover();
        Ok(())
    }

    fn redraw(&mut self, tree: &MenuTree, current: MenuId) -> PieResult<()> {
        log::trace!("redraw up to menu {}", current.index());
        self.canvas.clear();
        for &menu in &self.mapped {
            self.canvas.paint_menu(tree, menu, &self.shape, &self.style);
        }
        let frame = self.canvas.render(self.style.font);
        self.present(frame)?;
        Ok(())
    }
}

/// Nearest colour of the 6x6x6 cube of the 256-colour palette
fn ansi_cube(rgb: Rgb) -> u8 {
    let level = |v: u8| {
        ANSI_CUBE_LEVELS
            .iter()
            .enumerate()
            .min_by_key(|(_, &l)| (i16::from(l) - i16::from(v)).abs())
            .map(|(i, _)| i as u8)
            .unwrap_or(0)
    };
    ANSI_CUBE_START + 36 * level(rgb.r) + 6 * level(rgb.g) + level(rgb.b)
}
