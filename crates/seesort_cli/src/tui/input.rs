use anyhow::Result;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent};
use seesort_trace::Algorithm;

use crate::tui::app::App;
use crate::tui::worker::PlayCmd;

fn algorithm_for_key(c: char) -> Option<Algorithm> {
    match c {
        '1' | 'm' => Some(Algorithm::Merge),
        '2' | 'k' => Some(Algorithm::Quick),
        '3' | 'i' => Some(Algorithm::Insertion),
        '4' | 'b' => Some(Algorithm::Bubble),
        _ => None,
    }
}

/// Returns `Ok(true)` when the user asked to quit.
pub fn handle_key(k: KeyEvent, app: &mut App, tx: &Sender<PlayCmd>) -> Result<bool> {
    if let KeyCode::Char('q') = k.code {
        return Ok(true);
    }

    // the completion popup swallows the next key, like closing the summary
    if app.completed.is_some() {
        app.completed = None;
        return Ok(false);
    }

    match k.code {
        KeyCode::Esc => {
            app.show_help = false;
            app.show_config = false;
        }
        KeyCode::Char('?') | KeyCode::Char('h') => app.toggle_help(),
        KeyCode::Char('c') => app.toggle_config(),
        KeyCode::Char('x') if app.playing.is_some() => tx.send(PlayCmd::Cancel)?,
        KeyCode::Char('g') if app.playing.is_none() => {
            let bar_count = app.values.len().max(1);
            app.regenerate(bar_count);
        }
        KeyCode::Char(c) if app.playing.is_none() => {
            if let Some(algorithm) = algorithm_for_key(c) {
                tracing::debug!(algorithm = algorithm.key(), bars = app.values.len(), "sort requested");
                tx.send(PlayCmd::Play {
                    algorithm,
                    values: app.values.clone(),
                    delay: app.config.step_delay,
                })?;
                app.start_playing(algorithm);
            }
        }
        _ => {}
    }
    Ok(false)
}
