mod app;
mod error;
mod paths;
mod settings;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::app::{App, Flow};
use crate::error::DemoError;
use crate::settings::Settings;
use crate::terminal::Terminal;

const LOG_FALLBACK: &str = "picklist-demo.log";

fn init_logging() {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from(LOG_FALLBACK));
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("logging disabled ({}): {e}", path.display()),
    }
}

fn load_settings() -> Result<Settings, DemoError> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(paths::settings_file)
        .filter(|path| path.exists());
    match path {
        Some(path) => Settings::load(&path),
        None => {
            log::info!("no settings file found, using built-in choices");
            Ok(Settings::default())
        }
    }
}

fn run() -> Result<(), DemoError> {
    let settings = load_settings()?;
    let as_exclusions = settings.as_exclusions;
    let mut app = App::new(settings.into_host(), as_exclusions)?;
    let mut term = Terminal::new()?;

    loop {
        term.draw(app.host().element(), app.focus(), &app.status_line())?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code)? == Flow::Quit {
                    break;
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = term.item_at(app.host().element(), mouse.column, mouse.row) {
                    app.handle_click(index)?;
                }
            }
            _ => {}
        }
    }

    log::info!("final selection: {:?}", app.host().model());
    Ok(())
}

fn main() {
    init_logging();
    log::info!("picklist-demo starting");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
