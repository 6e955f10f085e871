mod event_loop;
mod input;
mod render;

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::controller::Browser;
use crate::fetcher::Fetcher;
use crate::layout::Layout;
use crate::opener::{SystemOpener, UrlOpener};

pub use input::{InputResult, handle_key, route};

/// How long the loop waits for input before checking fetches and the clock.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Restore the terminal to normal mode. Safe to call multiple times.
pub fn restore_terminal() {
    let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Engine plus the collaborators it needs: fetch runner, URL opener and the
/// current terminal layout.
pub struct App {
    pub browser: Browser,
    pub fetcher: Fetcher,
    pub layout: Layout,
    opener: Box<dyn UrlOpener>,
    last_clock_second: i64,
}

impl App {
    pub fn new(fetcher: Fetcher, opener: Box<dyn UrlOpener>, layout: Layout) -> Self {
        Self {
            browser: Browser::new(layout.page_size()),
            fetcher,
            layout,
            opener,
            last_clock_second: 0,
        }
    }
}

/// Run the application. Sets up terminal, runs the main loop, restores terminal on exit.
pub fn run(config: &Config, should_quit: Arc<AtomicBool>) -> io::Result<()> {
    let rt = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(2)
            .build()?,
    );
    let client = ApiClient::new(&config.api_base_url, config.timeout).map_err(io::Error::other)?;
    info!(base_url = client.base_url(), "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;

    let mut app = App::new(
        Fetcher::new(client, rt),
        Box::new(SystemOpener),
        Layout::from_terminal(),
    );
    app.start();

    let result = main_loop(&mut app, &should_quit);
    restore_terminal();
    info!("shutting down");
    result
}

fn main_loop(app: &mut App, should_quit: &AtomicBool) -> io::Result<()> {
    let mut needs_render = true;

    loop {
        if should_quit.load(Ordering::Relaxed) {
            break;
        }

        if app.poll_fetches() {
            needs_render = true;
        }
        if app.tick_clock() {
            needs_render = true;
        }

        if needs_render {
            render::render(app)?;
            needs_render = false;
        }

        if crossterm::event::poll(POLL_INTERVAL)? {
            match crossterm::event::read()? {
                crossterm::event::Event::Key(key_event) => match input::handle_key(app, key_event) {
                    Some(InputResult::Quit) => break,
                    Some(InputResult::Consumed) => needs_render = true,
                    None => {}
                },
                crossterm::event::Event::Resize(cols, rows) => {
                    app.resize(cols, rows);
                    needs_render = true;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
