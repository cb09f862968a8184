//! glyphfall: a single column of digital rain in the terminal.

mod app;
mod input;
mod logging;
mod pacer;
mod screen;

use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::{app::App, input::CrosstermEvents, pacer::FramePacer, screen::Screen};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let mut screen = Screen::acquire()?;
    let mut app = App::new(StdRng::from_entropy());
    let result = app.run(
        screen.terminal_mut(),
        &mut CrosstermEvents,
        &FramePacer::default(),
    );
    drop(screen);

    info!("shutting down");
    result
}
