mod cli;
mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use plane_collector::assets::Sprites;
use plane_collector::buttons::ButtonId;
use plane_collector::compute::{init_session, HeldKeys};
use plane_collector::config::GameConfig;
use plane_collector::entities::{GameSession, GameState, TrackKind};
use plane_collector::hold::HoldTracker;
use plane_collector::machine::{self, Flow, InputEvent};
use plane_collector::viewport::Viewport;

use cli::Cli;

// ── Held-key tracking ─────────────────────────────────────────────────────────

fn held_keys(keys: &HoldTracker<KeyCode>, frame: u64) -> HeldKeys {
    let any = |codes: &[KeyCode]| codes.iter().any(|k| keys.is_held(k, frame));
    HeldKeys {
        left: any(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
        right: any(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
    }
}

// ── Input translation ─────────────────────────────────────────────────────────

/// Keyboard shortcut for a button on the current screen.
fn shortcut(state: GameState, code: KeyCode) -> Option<ButtonId> {
    let code = match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    match (state, code) {
        (GameState::Menu, KeyCode::Char('p') | KeyCode::Enter) => Some(ButtonId::Play),
        (GameState::Menu, KeyCode::Char('u')) => Some(ButtonId::Upgrades),
        (GameState::Menu, KeyCode::Char('q')) => Some(ButtonId::Quit),
        (GameState::Playing, KeyCode::Esc) => Some(ButtonId::Close),
        (GameState::Upgrades, KeyCode::Char('b')) => Some(ButtonId::Back),
        (GameState::Upgrades, KeyCode::Esc) => Some(ButtonId::Close),
        (GameState::Upgrades, KeyCode::Char(c @ '1'..='4')) => {
            let index = c as usize - '1' as usize;
            Some(ButtonId::Buy(TrackKind::ALL[index]))
        }
        (GameState::GameOver { won: false, .. }, KeyCode::Char('m') | KeyCode::Enter) => {
            Some(ButtonId::BackToMenu)
        }
        (GameState::GameOver { won: false, .. }, KeyCode::Char('q')) => Some(ButtonId::Quit),
        _ => None,
    }
}

fn key_to_input(state: GameState, code: KeyCode, modifiers: KeyModifiers) -> Option<InputEvent> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }
    shortcut(state, code).map(InputEvent::Press)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a Quit input arrives.
///
/// Input model: instead of acting on each key event individually, a
/// `HoldTracker` records the frame of the last press/repeat event for every
/// key.  Each frame we check which direction keys are still held and hand
/// them to the simulation.
/// One-shot inputs (shortcuts, clicks, quit) are dispatched as they arrive.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut GameSession,
    sprites: &Sprites,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let tick = Duration::from_secs_f64(1.0 / session.config.rules.tick_rate as f64);
    let field = &session.config.field;
    let (cols, rows) = terminal::size()?;
    let mut vp = Viewport::new(cols, rows, field.width, field.height);

    let mut keys: HoldTracker<KeyCode> = HoldTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let input = match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    // Press: record key + resolve one-shot actions
                    KeyEventKind::Press => {
                        keys.press(code, frame);
                        key_to_input(session.state, code, modifiers)
                    }
                    // Repeat: refresh timestamp so key stays "held"
                    KeyEventKind::Repeat => {
                        keys.repeat(code, frame);
                        None
                    }
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => {
                        keys.release(&code);
                        None
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let (x, y) = vp.to_field(column, row);
                    Some(InputEvent::PointerPressed { x, y })
                }
                Event::Resize(cols, rows) => {
                    vp = Viewport::new(cols, rows, vp.field_width, vp.field_height);
                    None
                }
                _ => None,
            };

            if let Some(input) = input {
                if machine::handle_event(session, input) == Flow::Exit {
                    info!(frame, "quit requested");
                    return Ok(());
                }
            }
        }

        let now = Instant::now();
        machine::step(session, held_keys(&keys, frame), now, rng);

        display::render(out, session, sprites, &vp, now)?;

        let elapsed = frame_start.elapsed();
        if elapsed < tick {
            thread::sleep(tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let sprites = Sprites::load(&cli.assets);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = init_session(config);
    info!(seed = ?cli.seed, degraded = sprites.is_degraded(), "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut session, &sprites, &rx, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(currency = session.progress.currency, "exiting");
    result.context("terminal I/O failed")
}
