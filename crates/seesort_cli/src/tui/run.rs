use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender, unbounded};
use crossterm::event::{self, Event as CEvent, KeyEventKind};

use crate::config::PlayerConfig;
use crate::tui::app::App;
use crate::tui::input::handle_key;
use crate::tui::term::{Term, setup_terminal};
use crate::tui::ui::ui;
use crate::tui::worker::{PlayCmd, PlayMsg, worker_loop};

/// Runs the interactive player. `values` replaces the first random array.
pub fn run_tui(config: PlayerConfig, values: Option<Vec<u64>>) -> Result<()> {
    let mut terminal = setup_terminal().context("Failed to initialize terminal")?;

    let width = terminal
        .size()
        .context("Failed to read terminal size")?
        .width;
    let mut app = match values {
        Some(values) => App::with_values(config.clone(), values),
        None => App::new(config.clone(), config.bar_count_for_width(width)),
    };
    tracing::info!(bars = app.values.len(), width, "player ready");

    let (tx_cmd, rx_cmd) = unbounded::<PlayCmd>();
    let (tx_msg, rx_msg) = unbounded::<PlayMsg>();

    // Spawn player thread
    let worker = std::thread::spawn(move || worker_loop(rx_cmd, tx_msg));

    let result = event_loop(&mut terminal, &mut app, &tx_cmd, &rx_msg);
    stop_player(tx_cmd, worker);
    result
}

fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    tx_cmd: &Sender<PlayCmd>,
    rx_msg: &Receiver<PlayMsg>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // non-blocking input
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                CEvent::Key(k) if k.kind == KeyEventKind::Press => {
                    if handle_key(k, app, tx_cmd)? {
                        return Ok(());
                    }
                }
                CEvent::Resize(width, _) => app.resize(width),
                _ => {}
            }
        }

        // apply every step the player has sent since the last frame
        while let Ok(msg) = rx_msg.try_recv() {
            app.apply_play_update(msg);
        }
    }
}

/// Cancels any playback in flight and waits for the player thread. Runs on
/// every exit from the event loop, including errors.
fn stop_player(tx_cmd: Sender<PlayCmd>, worker: JoinHandle<()>) {
    let _ = tx_cmd.send(PlayCmd::Cancel);
    drop(tx_cmd);
    if worker.join().is_err() {
        tracing::error!("player thread panicked");
    }
}
