//! Stdin-driven presentation driver.
//!
//! Loads a deck, starts at the first step and then reads one command per
//! line: a bound key name (`ArrowRight`), a `#fragment`, `select <id>`,
//! `wait <ms>` or `quit`. Renderer output goes to the log.
//!
//! Stdin is read on its own thread so the timeline keeps ticking while no
//! input arrives: highlights end, auto-advance fires and the location is
//! published without waiting for the next line.

use std::io::BufRead;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use stagegrid::deck::{Deck, DeckManifest};
use stagegrid::deep_link::MemoryHistory;
use stagegrid::error::StageError;
use stagegrid::input::{InputEvent, InputProcessor};
use stagegrid::navigation::{LogRenderer, NavCommand, Navigator, Timeline};
use stagegrid::options::Options;
use web_time::Instant;

type Session = Navigator<LogRenderer, Timeline, MemoryHistory>;

/// How often the timeline advances while stdin is idle.
const TICK: Duration = Duration::from_millis(50);

enum Line {
    Empty,
    Quit,
    Wait(Duration),
    Command(NavCommand),
    Unknown,
}

fn parse_line(line: &str, input: &InputProcessor) -> Line {
    if line.is_empty() {
        return Line::Empty;
    }
    if line == "quit" {
        return Line::Quit;
    }
    if line.starts_with('#') {
        return Line::Command(NavCommand::Follow(line.to_owned()));
    }
    if let Some(id) = line.strip_prefix("select ") {
        return Line::Command(NavCommand::Select(id.trim().to_owned()));
    }
    if let Some(ms) = line.strip_prefix("wait ") {
        return ms
            .trim()
            .parse()
            .map_or(Line::Unknown, |ms| Line::Wait(Duration::from_millis(ms)));
    }
    input
        .handle_event(InputEvent::KeyPressed {
            key: line.to_owned(),
        })
        .map_or(Line::Unknown, Line::Command)
}

fn open(
    deck_path: &Path,
    options_path: Option<&Path>,
) -> Result<(Session, InputProcessor), StageError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let deck = Deck::build(&DeckManifest::load(deck_path)?)?;
    log::info!(
        "loaded {} steps and {} decorations from {}",
        deck.len(),
        deck.decorations().len(),
        deck_path.display()
    );
    let input = InputProcessor::with_key_bindings(options.keybindings.clone());
    let session = Navigator::with_options(
        deck,
        LogRenderer,
        Timeline::new(),
        MemoryHistory::new(),
        &options,
    );
    Ok((session, input))
}

/// Forward stdin lines to a channel from a background thread.
fn spawn_reader() -> std::io::Result<Receiver<std::io::Result<String>>> {
    let (tx, rx) = mpsc::channel();
    let _ = std::thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Apply one input line. Returns `false` when the session should end.
fn handle_line(session: &mut Session, input: &InputProcessor, line: &str) -> bool {
    match parse_line(line.trim(), input) {
        Line::Empty => {}
        Line::Quit => return false,
        Line::Wait(duration) => session.advance(duration),
        Line::Command(cmd) => match session.execute(cmd) {
            Ok(step) => {
                log::info!("at {} {}", step.id(), step.location());
            }
            Err(e) if e.is_redundant() => log::debug!("{e}"),
            Err(e) => log::warn!("{e}"),
        },
        Line::Unknown => log::warn!("unrecognised command {line:?}"),
    }
    true
}

fn run(
    session: &mut Session,
    input: &InputProcessor,
    lines: &Receiver<std::io::Result<String>>,
    tick: Duration,
) {
    let mut last = Instant::now();
    loop {
        let received = lines.recv_timeout(tick);

        // Deferred tasks run in real time, with or without input.
        let now = Instant::now();
        session.advance(now.duration_since(last));
        last = now;

        match received {
            Ok(Ok(line)) => {
                if !handle_line(session, input, &line) {
                    break;
                }
            }
            Ok(Err(e)) => {
                log::error!("failed to read stdin: {e}");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if let Some(fragment) = session.history().current() {
        log::info!("last published location {fragment}");
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(deck_path) = args.next() else {
        log::error!("Usage: stagegrid <deck.toml|deck.json> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();

    let (mut session, input) =
        match open(Path::new(&deck_path), options_path.as_deref().map(Path::new)) {
            Ok(opened) => opened,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        };

    if let Err(e) = session.start(None) {
        log::error!("{e}");
        std::process::exit(1);
    }

    let lines = match spawn_reader() {
        Ok(lines) => lines,
        Err(e) => {
            log::error!("failed to start stdin reader: {e}");
            std::process::exit(1);
        }
    };
    run(&mut session, &input, &lines, TICK);
}
