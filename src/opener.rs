use std::io;
use std::process::{Command, Stdio};

/// Opens a URL outside the terminal. Injected into the app so tests never
/// spawn a browser.
pub trait UrlOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Hands the URL to the platform's default handler.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        let (program, args) = open_command(url);
        Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

fn open_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        // `start` is a cmd builtin; the empty string is the window title.
        ("cmd", vec!["/C".into(), "start".into(), String::new(), url.to_string()])
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}
