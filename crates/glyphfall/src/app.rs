//! The render loop.

use color_eyre::Result;
use glyphfall_core::config::{DEFAULT_DESCENT_SPEED, DEFAULT_FADE_RATE, INITIAL_COLUMN};
use glyphfall_rain::{ColumnAnimator, GlyphFace};
use rand::rngs::StdRng;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    style::{Color, Style},
};
use tracing::{debug, info};

use crate::{
    input::{Command, EventSource, command_for},
    pacer::FramePacer,
};

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated column.
    column: ColumnAnimator,
    /// Face the glyphs are drawn with.
    face: GlyphFace,
}

impl App {
    /// Construct a new instance of [`App`] with the default column.
    pub fn new(rng: StdRng) -> Self {
        Self {
            running: false,
            column: ColumnAnimator::new(
                INITIAL_COLUMN,
                DEFAULT_DESCENT_SPEED,
                DEFAULT_FADE_RATE,
                rng,
            ),
            face: GlyphFace::default(),
        }
    }

    /// Run the application's main loop until a close event arrives.
    pub fn run<B, E>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
        pacer: &FramePacer,
    ) -> Result<()>
    where
        B: Backend,
        B::Error: std::error::Error + Send + Sync + 'static,
        E: EventSource,
    {
        info!(
            column = self.column.x_position(),
            rows = self.column.rows(),
            "rain started"
        );

        self.running = true;
        while self.running {
            let frame_start = pacer.start();

            self.handle_events(events)?;
            self.column.update();
            terminal.draw(|frame| self.render(frame))?;

            pacer.wait(frame_start);
        }
        Ok(())
    }

    /// Clear the frame to black and draw the column over it.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let buf = frame.buffer_mut();
        buf.set_style(area, Style::new().bg(Color::Black));
        self.column.render(buf, area, &self.face);
    }

    /// Apply every pending event before the frame is drawn.
    fn handle_events<E: EventSource>(&mut self, events: &mut E) -> Result<()> {
        for event in events.drain()? {
            if let Some(command) = command_for(&event) {
                self.apply(command);
            }
        }
        Ok(())
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Close => self.quit(),
            Command::SetDescentSpeed(speed) => self.column.set_descent_speed(speed),
            Command::SetFadeRate(rate) => self.column.set_fade_rate(rate),
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        debug!("close requested");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;
    use std::time::Duration;

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    use super::*;

    /// Hands out one batch of events per frame, then closes.
    struct Scripted(VecDeque<Vec<Event>>);

    impl EventSource for Scripted {
        fn drain(&mut self) -> io::Result<Vec<Event>> {
            Ok(self
                .0
                .pop_front()
                .unwrap_or_else(|| vec![press(KeyCode::Esc)]))
        }
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(StdRng::seed_from_u64(5))
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(45, 40)).unwrap()
    }

    fn no_wait() -> FramePacer {
        FramePacer::new(Duration::ZERO)
    }

    #[test]
    fn test_new_app_uses_defaults() {
        let app = app();
        assert!(!app.running);
        assert_eq!(app.column.x_position(), 5);
        assert_eq!(app.column.rows(), 40);
        assert_eq!(app.column.descent_speed(), 0.2);
        assert_eq!(app.column.fade_rate(), 2.95);
    }

    #[test]
    fn test_up_overrides_any_speed() {
        let mut app = app();
        app.apply(Command::SetDescentSpeed(0.1));
        app.apply(Command::SetDescentSpeed(0.5));
        assert_eq!(app.column.descent_speed(), 0.5);
        app.column.update();
        assert_eq!(app.column.lead_position(), 0.5);
    }

    #[test]
    fn test_single_frame_then_close() {
        let mut app = app();
        let mut terminal = terminal();
        let mut events = Scripted(VecDeque::from([vec![
            press(KeyCode::Up),
            press(KeyCode::Esc),
        ]]));

        app.run(&mut terminal, &mut events, &no_wait()).unwrap();

        assert!(!app.running);
        assert_eq!(app.column.descent_speed(), 0.5);
        assert_eq!(app.column.lead_position(), 0.5);

        let buf = terminal.backend().buffer();
        let lead = app.column.cells()[0].character.to_string();
        assert_eq!(buf[(5, 0)].symbol(), lead);
        assert_eq!(buf[(5, 0)].fg, Color::Rgb(255, 255, 255));
        assert_eq!(buf[(0, 0)].bg, Color::Black);
        assert_eq!(buf[(5, 1)].symbol(), " ");
    }

    #[test]
    fn test_loop_runs_until_close() {
        let mut app = app();
        let mut terminal = terminal();
        let mut events = Scripted(VecDeque::from([
            vec![],
            vec![press(KeyCode::Right)],
            vec![press(KeyCode::Char('x'))],
        ]));

        app.run(&mut terminal, &mut events, &no_wait()).unwrap();

        // Three scripted frames plus the closing one.
        let lead = app.column.lead_position();
        assert!((lead - 0.8).abs() < 1e-5, "lead was {lead}");
        assert_eq!(app.column.fade_rate(), 0.1);
    }

    #[test]
    fn test_frames_fade_the_trail() {
        let mut app = app();
        let mut terminal = terminal();
        app.apply(Command::SetDescentSpeed(1.0));
        let mut events = Scripted(VecDeque::from(vec![vec![]; 9]));

        app.run(&mut terminal, &mut events, &no_wait()).unwrap();

        // Ten frames at one row per frame: row 0 is ten frames old.
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(5, 0)].fg, Color::Rgb(226, 226, 226));
        assert_eq!(buf[(5, 10)].fg, Color::Rgb(255, 255, 255));
        assert_eq!(buf[(5, 11)].symbol(), " ");
    }
}
