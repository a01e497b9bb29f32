/// Terminal front-end for the rotating wireframe
use chrono::Local;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use log::{debug, info};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wirecube_core::Engine;

pub mod boot;
pub mod renderer;

pub use renderer::{LineRenderer, Stroke};

/// Entries shown in the navigation overlay
const NAV_ITEMS: &[&str] = &["HOME", "PROJECTS", "ABOUT", "CONTACT"];

/// Main application struct for the terminal renderer
pub struct TerminalApp {
    engine: Engine,
    renderer: LineRenderer,
    stroke: Stroke,
    running: bool,
    menu_open: bool,
    muted: bool,
    target_frame_time: Duration,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(engine: Engine, target_fps: u32, muted: bool) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let stroke = Stroke::default();

        Ok(Self {
            engine,
            renderer: LineRenderer::new(cols as usize, rows as usize, stroke),
            stroke,
            running: true,
            menu_open: false,
            muted,
            target_frame_time: Duration::from_millis(1000 / u64::from(target_fps.max(1))),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        info!(
            "render loop started on a {}x{} terminal",
            self.renderer.grid_size().0,
            self.renderer.grid_size().1
        );

        while self.running {
            let frame_start = Instant::now();

            // Handle pending input and resize events
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?)?;
            }

            // Render
            self.render()?;

            // Frame timing: a fixed-interval sleep stands in for a
            // display-synced callback, which terminals do not provide
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        info!("render loop stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('m') => {
                    self.menu_open = !self.menu_open;
                    self.chime()?;
                }
                KeyCode::Char(c @ '1'..='4') if self.menu_open => {
                    let index = c as usize - '1' as usize;
                    debug!("nav item selected: {}", NAV_ITEMS[index]);
                    self.menu_open = false;
                    self.chime()?;
                }
                _ => {}
            },
            Event::Resize(cols, rows) => {
                debug!("terminal resized to {}x{}", cols, rows);
                self.renderer
                    .resize(cols as usize, rows as usize, self.stroke);
            }
            _ => {}
        }
        Ok(())
    }

    /// Terminal bell, standing in for the UI hover tone
    fn chime(&self) -> io::Result<()> {
        if !self.muted {
            let mut stdout = stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        // Advance the rotation and redraw every edge into the cell buffer
        self.engine.frame_step(&mut self.renderer);

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        self.draw_status_line(&mut stdout)?;
        if self.menu_open {
            self.draw_menu(&mut stdout)?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn draw_status_line<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let clock = Local::now().format("%H:%M:%S");
        let menu_label = if self.menu_open { "/// CLOSE" } else { "/// MENU" };

        queue!(
            writer,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "WIRECUBE | FPS: {:.1} | {} | [m] {}  [q] QUIT",
                self.fps, clock, menu_label
            )),
            ResetColor
        )?;
        Ok(())
    }

    fn draw_menu<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let (cols, rows) = self.renderer.grid_size();
        let top = rows.saturating_sub(NAV_ITEMS.len() * 2) / 2;

        for (i, item) in NAV_ITEMS.iter().enumerate() {
            let label = format!("[{}] {}", i + 1, item);
            let col = cols.saturating_sub(label.len()) / 2;
            queue!(
                writer,
                cursor::MoveTo(col as u16, (top + i * 2) as u16),
                SetForegroundColor(Color::White),
                Print(label),
                ResetColor
            )?;
        }
        Ok(())
    }
}
