//! Interactive terminal animation.

use std::time::{Duration, Instant};

use colorstrip_config::{Settings, random_seed};
use colorstrip_core::AnimationSpeed;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use tracing::{debug, info};

use crate::canvas::{Canvas, to_color};
use crate::scene::Scene;

/// Frame budget; events are polled for at most this long.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Is the animation frozen?
    paused: bool,
    /// Interactive speed multiplier.
    speed: AnimationSpeed,
    scene: Scene,
    last_frame: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(settings: Settings) -> color_eyre::Result<Self> {
        Ok(Self {
            running: false,
            paused: false,
            speed: AnimationSpeed::default(),
            scene: Scene::new(settings)?,
            last_frame: Instant::now(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.last_frame = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.tick()?;
        }
        Ok(())
    }

    /// Advance the animation by the wall-clock time since the last frame.
    fn tick(&mut self) -> color_eyre::Result<()> {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(self.last_frame).as_secs_f64() * 1000.0;
        self.last_frame = now;
        if !self.paused {
            self.scene.update(elapsed_ms * self.speed.time_scale())?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Ring
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());
        let area = chunks[0];

        let mut canvas = Canvas::for_cells(area.width, area.height, self.scene.background());
        let paths = self
            .scene
            .paths(canvas.width() as f64, canvas.height() as f64);
        for (polygon, &color) in paths.iter().zip(self.scene.colors()) {
            canvas.fill_polygon(polygon, color);
        }
        frame.render_widget(Paragraph::new(canvas.to_lines()), area);

        let background = to_color(self.scene.background());
        let settings = self.scene.settings();
        let status = format!(
            "  {} · {} · seed {}{}",
            settings.theme,
            self.speed.name(),
            settings.seed,
            if self.paused { " · paused" } else { "" }
        );
        let help = Line::from(vec![
            "q".bold(),
            " quit  ".dark_gray(),
            "space".bold(),
            " pause  ".dark_gray(),
            "r".bold(),
            " reseed  ".dark_gray(),
            "t".bold(),
            " theme  ".dark_gray(),
            "s".bold(),
            " speed".dark_gray(),
            status.dark_gray(),
        ])
        .centered()
        .style(Style::new().bg(background));
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
                Event::Resize(width, height) => debug!(width, height, "resize"),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.paused = !self.paused,
            (_, KeyCode::Char('r')) => self.reseed()?,
            (_, KeyCode::Char('t')) => self.cycle_theme()?,
            (_, KeyCode::Char('s')) => self.speed = self.speed.next(),
            _ => {}
        }
        Ok(())
    }

    /// Restart palette and motion from a fresh seed.
    fn reseed(&mut self) -> color_eyre::Result<()> {
        let seed = random_seed();
        info!(seed, "reseed");
        self.scene.reseed(seed)?;
        Ok(())
    }

    /// Cycle through available themes.
    fn cycle_theme(&mut self) -> color_eyre::Result<()> {
        let theme = self.scene.settings().theme.next();
        info!(%theme, "theme");
        self.scene.set_theme(theme)?;
        Ok(())
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
