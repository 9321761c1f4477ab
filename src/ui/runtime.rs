use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

pub fn run(config: &Config) -> io::Result<()> {
    let mut app = App::new(config.labels()).map_err(io::Error::other)?;
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new()?;
    tracing::info!(locale = ?config.locale, "quiz mounted");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next() {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize) => {}
            Err(_) => {
                tracing::warn!("terminal event source closed");
                break;
            }
        }
    }

    tracing::info!(cards = app.model().cards.len(), "quiz closed");
    drop(guard);
    Ok(())
}
