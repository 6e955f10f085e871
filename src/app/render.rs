use std::io;

use crate::view::Presenter;

use super::App;

pub fn render(app: &App) -> io::Result<()> {
    if Presenter::render_size_guard(&app.layout)? {
        return Ok(());
    }
    Presenter::render(&app.browser, &app.layout)
}
