mod error;
mod options;

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crossterm::event::Event as CrosstermEvent;
use pickbox::{DropdownSelect, FilterReset, Mounted, SelectConfig};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuidom::{Color, Document, Element, Event, FocusState, Key, PointerDown, Style, Terminal};

use crate::error::DemoError;

const LOG_FILE: &str = "pickbox-demo.log";
const LOG_ENV: &str = "PICKBOX_LOG";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DemoError> {
    init_logger()?;

    let fruits = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("[demo] loading options from {}", path.display());
            options::load(&path)?
        }
        None => options::fruits(),
    };

    let last_choice = Arc::new(RwLock::new(None::<String>));
    let record = |label: &'static str| {
        let last_choice = Arc::clone(&last_choice);
        move |value: &str| {
            if let Ok(mut guard) = last_choice.write() {
                *guard = Some(format!("{label}: {value}"));
            }
        }
    };

    let document = Document::new();
    let selects = [
        DropdownSelect::new(
            SelectConfig::new()
                .options(fruits)
                .placeholder("Pick a fruit")
                .custom_classes("fruit")
                .on_select(record("fruit")),
        )
        .mount(&document),
        DropdownSelect::new(
            SelectConfig::new()
                .options(options::sizes())
                .selected("m")
                .placeholder("Pick a size")
                .filter_reset(FilterReset::OnClose)
                .on_select(record("size")),
        )
        .mount(&document),
    ];

    let mut terminal = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut root = redraw(&mut terminal, &selects, &last_choice, true)?;

    loop {
        let raw = terminal.poll(POLL_INTERVAL)?;
        let resized = raw.iter().any(|e| matches!(e, CrosstermEvent::Resize(..)));

        // Each event is resolved against the tree the previous one left behind
        for raw_event in &raw {
            let events =
                focus.process_events(std::slice::from_ref(raw_event), &root, terminal.layout());
            for event in events {
                if handle(&event, &root, &document, &selects) == Flow::Quit {
                    log::info!("[demo] quit");
                    return Ok(());
                }
            }
            root = redraw(&mut terminal, &selects, &last_choice, false)?;
        }

        if resized {
            root = redraw(&mut terminal, &selects, &last_choice, true)?;
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle(event: &Event, root: &Element, document: &Document, selects: &[Mounted]) -> Flow {
    match event {
        Event::Key {
            key: Key::Char('q'),
            modifiers,
            ..
        } if modifiers.ctrl => return Flow::Quit,
        Event::MouseDown {
            target,
            x,
            y,
            button,
        } => {
            document.dispatch_pointer_down(&PointerDown::resolve(
                root,
                target.as_deref(),
                *x,
                *y,
                *button,
            ));
        }
        _ => {
            for select in selects {
                if select.dispatch(event, root).is_handled() {
                    break;
                }
            }
        }
    }
    Flow::Continue
}

/// Rebuild the page and paint it when a widget changed (or `force` is set).
fn redraw(
    terminal: &mut Terminal,
    selects: &[Mounted],
    last_choice: &RwLock<Option<String>>,
    force: bool,
) -> Result<Element, DemoError> {
    let root = page(selects, last_choice);
    if force || selects.iter().any(|s| s.is_dirty()) {
        terminal.render(&root)?;
        selects.iter().for_each(|s| s.clear_dirty());
    }
    Ok(root)
}

fn init_logger() -> Result<(), DemoError> {
    let requested = env::var(LOG_ENV).ok();
    let level = requested
        .as_deref()
        .and_then(|level| LevelFilter::from_str(level).ok())
        .unwrap_or(LevelFilter::Debug);

    let log_file = File::create(LOG_FILE)?;
    WriteLogger::init(level, Config::default(), log_file)?;

    if let Some(requested) = requested
        && LevelFilter::from_str(&requested).is_err()
    {
        log::warn!("[demo] unknown {LOG_ENV} value {requested:?}, using debug");
    }
    Ok(())
}

fn page(selects: &[Mounted], last_choice: &RwLock<Option<String>>) -> Element {
    let status = last_choice
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_else(|| "Nothing chosen yet".to_string());

    let muted = Style::new().foreground(Color::oklch(0.65, 0.02, 280.0));

    Element::col()
        .id("page")
        .gap(1)
        .child(
            Element::text("Pickbox")
                .id("title")
                .style(Style::new().bold()),
        )
        .child(
            Element::text("Click a box or Tab to it, type to filter. Ctrl+Q quits.")
                .id("help")
                .style(muted),
        )
        .child(
            Element::row()
                .id("selects")
                .gap(2)
                .children(selects.iter().map(|s| s.element())),
        )
        .child(Element::text(status).id("status").style(muted))
}
