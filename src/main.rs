use std::io;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use signal_hook::consts::{SIGINT, SIGTERM};

use mcli::app;
use mcli::config::{Cli, Config};
use mcli::logging;

fn main() -> io::Result<()> {
    let config = Config::from(Cli::parse());

    let _log_guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("mcli: could not open {}: {err}", config.log_file.display());
            None
        }
    };

    let should_quit = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&should_quit))?;
    }

    // Put the terminal back even if something below panics.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        app::restore_terminal();
        default_hook(info);
    }));

    app::run(&config, should_quit)
}
