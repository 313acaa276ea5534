//! Crossterm terminal front end for pathviz.
//!
//! Each node is drawn as two blank columns with an RGB background, so a
//! square grid looks square in most terminal fonts. Mouse positions are in
//! character cells; the [`InputMapper`] is built with a 2x1 cell.

use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use pathviz_app::{Flow, InputMapper, Visualizer};
use pathviz_core::{Color, Grid, Key, MouseAction, Msg, Point, Renderer, Role, role_color};

/// Terminal columns per grid node.
const NODE_COLUMNS: i32 = 2;

fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Maps a crossterm event to a pathviz [`Msg`].
pub fn translate_event(ev: &Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if *kind != KeyEventKind::Press {
                return None;
            }
            if modifiers.contains(KeyModifiers::CONTROL) && *code == KeyCode::Char('c') {
                return Some(Msg::Quit);
            }
            if *code == KeyCode::Char(' ') {
                return Some(Msg::KeyDown { key: Key::Space });
            }
            to_key(*code).map(|key| Msg::KeyDown { key })
        }
        Event::Mouse(me) => {
            let pos = Point::new(me.column as i32, me.row as i32);
            let action = match me.kind {
                MouseEventKind::Down(btn) => match btn {
                    MouseButton::Left => MouseAction::Main,
                    MouseButton::Right => MouseAction::Secondary,
                    MouseButton::Middle => MouseAction::Auxiliary,
                },
                MouseEventKind::Up(_) => MouseAction::Release,
                MouseEventKind::Moved | MouseEventKind::Drag(_) => MouseAction::Move,
                _ => return None,
            };
            Some(Msg::mouse(action, pos))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// TerminalRenderer
// ---------------------------------------------------------------------------

/// Draws a [`Grid`] to any writer, emitting only the nodes whose role
/// changed since the previous frame.
///
/// [`Renderer::draw`] cannot fail, so the first I/O error is kept and every
/// later frame is skipped until [`take_error`](Self::take_error) is called.
pub struct TerminalRenderer<W: Write> {
    out: W,
    previous: Vec<Option<Role>>,
    status: String,
    status_drawn: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous: Vec::new(),
            status: String::new(),
            status_drawn: false,
            error: None,
        }
    }

    /// Text shown on the line below the grid.
    pub fn set_status(&mut self, status: String) {
        if status != self.status {
            self.status = status;
            self.status_drawn = false;
        }
    }

    /// Forget what is on screen; the next frame redraws everything.
    pub fn invalidate(&mut self) {
        self.previous.clear();
        self.status_drawn = false;
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn write_frame(&mut self, grid: &Grid) -> io::Result<()> {
        if self.previous.len() != grid.len() {
            self.previous = vec![None; grid.len()];
        }
        for (i, (p, role)) in grid.iter().enumerate() {
            if self.previous[i] == Some(role) {
                continue;
            }
            self.previous[i] = Some(role);
            queue!(
                self.out,
                cursor::MoveTo((p.x * NODE_COLUMNS) as u16, p.y as u16),
                SetBackgroundColor(to_ct_color(role_color(role))),
                Print("  ")
            )?;
        }
        if !self.status_drawn {
            queue!(
                self.out,
                ResetColor,
                cursor::MoveTo(0, grid.size() as u16),
                terminal::Clear(ClearType::UntilNewLine),
                Print(&self.status)
            )?;
            self.status_drawn = true;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_frame(grid) {
            log::warn!("terminal write failed: {err}");
            self.error = Some(err);
        }
    }
}

// ---------------------------------------------------------------------------
// CrosstermDriver
// ---------------------------------------------------------------------------

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard {
    mouse_enabled: bool,
}

impl TerminalGuard {
    fn enter(mouse_enabled: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { mouse_enabled };
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// A terminal front end using crossterm.
pub struct CrosstermDriver {
    mouse_enabled: bool,
    frame_interval: Duration,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            frame_interval: Duration::from_millis(16),
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Time between redraws while no input arrives.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Take over the terminal and block until the user quits.
    pub fn run(self, mut visualizer: Visualizer) -> Result<(), Box<dyn Error>> {
        let _guard = TerminalGuard::enter(self.mouse_enabled)?;
        let mut renderer = TerminalRenderer::new(io::stdout());
        let mut mapper = InputMapper::new(visualizer.grid().size(), NODE_COLUMNS, 1);

        loop {
            visualizer.poll();
            renderer.set_status(visualizer.status());
            renderer.draw(visualizer.grid());
            if let Some(err) = renderer.take_error() {
                return Err(err.into());
            }

            if !event::poll(self.frame_interval)? {
                continue;
            }
            while event::poll(Duration::ZERO)? {
                let ev = event::read()?;
                if let Event::Resize(..) = ev {
                    execute!(io::stdout(), terminal::Clear(ClearType::All))?;
                    renderer.invalidate();
                    continue;
                }
                let Some(cmd) = translate_event(&ev).and_then(|msg| mapper.map(&msg)) else {
                    continue;
                };
                if visualizer.handle(cmd) == Flow::Quit {
                    return Ok(());
                }
            }
        }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}
