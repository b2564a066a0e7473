use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, select, tick};
use seesort_trace::{Algorithm, Step};

#[derive(Clone, Debug)]
pub enum PlayCmd {
    Play {
        algorithm: Algorithm,
        values: Vec<u64>,
        delay: Duration,
    },
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlayMsg {
    Started {
        algorithm: Algorithm,
        total: usize,
    },
    Step(Step<u64>),
    Finished {
        algorithm: Algorithm,
        comparisons: usize,
        writes: usize,
    },
    Cancelled {
        algorithm: Algorithm,
        applied: usize,
    },
}

enum Outcome {
    Finished,
    Cancelled,
    Disconnected,
}

/// Playback task: generates the trace for each `Play` command, then sends
/// one step per tick until the trace is exhausted or a `Cancel` arrives.
pub fn worker_loop(rx: Receiver<PlayCmd>, tx: Sender<PlayMsg>) {
    while let Ok(cmd) = rx.recv() {
        match cmd {
            PlayCmd::Play {
                algorithm,
                values,
                delay,
            } => {
                if let Outcome::Disconnected = play(algorithm, &values, delay, &rx, &tx) {
                    break;
                }
            }
            // nothing is playing
            PlayCmd::Cancel => {}
        }
    }
    tracing::debug!("player worker stopped");
}

fn play(
    algorithm: Algorithm,
    values: &[u64],
    delay: Duration,
    rx: &Receiver<PlayCmd>,
    tx: &Sender<PlayMsg>,
) -> Outcome {
    let trace = algorithm.trace(values);
    tracing::info!(algorithm = algorithm.key(), steps = trace.len(), "playback started");
    if tx
        .send(PlayMsg::Started {
            algorithm,
            total: trace.len(),
        })
        .is_err()
    {
        return Outcome::Disconnected;
    }

    let ticker = tick(delay.max(Duration::from_millis(1)));
    for (applied, step) in trace.iter().enumerate() {
        if tx.send(PlayMsg::Step(*step)).is_err() {
            return Outcome::Disconnected;
        }
        // only the ticker advances playback; other commands keep waiting on it
        loop {
            let cmd = select! {
                recv(ticker) -> _ => None,
                recv(rx) -> cmd => Some(cmd),
            };
            match cmd {
                None => break,
                Some(Ok(PlayCmd::Cancel)) => {
                    tracing::info!(algorithm = algorithm.key(), applied = applied + 1, "playback cancelled");
                    let _ = tx.send(PlayMsg::Cancelled { algorithm, applied: applied + 1 });
                    return Outcome::Cancelled;
                }
                Some(Ok(PlayCmd::Play { algorithm: ignored, .. })) => {
                    tracing::warn!(requested = ignored.key(), "already playing, request ignored");
                }
                Some(Err(_)) => return Outcome::Disconnected,
            }
        }
    }

    tracing::info!(algorithm = algorithm.key(), "playback finished");
    match tx.send(PlayMsg::Finished {
        algorithm,
        comparisons: trace.highlight_count(),
        writes: trace.update_count(),
    }) {
        Ok(()) => Outcome::Finished,
        Err(_) => Outcome::Disconnected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn spawn() -> (Sender<PlayCmd>, Receiver<PlayMsg>) {
        let (tx_cmd, rx_cmd) = unbounded();
        let (tx_msg, rx_msg) = unbounded();
        std::thread::spawn(move || worker_loop(rx_cmd, tx_msg));
        (tx_cmd, rx_msg)
    }

    fn recv(rx: &Receiver<PlayMsg>) -> PlayMsg {
        rx.recv_timeout(Duration::from_secs(5))
            .expect("worker should answer")
    }

    #[test]
    fn plays_every_step_then_finishes() {
        let (tx, rx) = spawn();
        let values = vec![5, 3, 8, 1];
        tx.send(PlayCmd::Play {
            algorithm: Algorithm::Bubble,
            values: values.clone(),
            delay: Duration::from_millis(1),
        })
        .unwrap();

        let expected = Algorithm::Bubble.trace(&values);
        assert_eq!(
            recv(&rx),
            PlayMsg::Started {
                algorithm: Algorithm::Bubble,
                total: expected.len()
            }
        );
        for step in &expected {
            assert_eq!(recv(&rx), PlayMsg::Step(*step));
        }
        assert_eq!(
            recv(&rx),
            PlayMsg::Finished {
                algorithm: Algorithm::Bubble,
                comparisons: 6,
                writes: expected.update_count(),
            }
        );
    }

    #[test]
    fn empty_trace_finishes_immediately() {
        let (tx, rx) = spawn();
        tx.send(PlayCmd::Play {
            algorithm: Algorithm::Merge,
            values: vec![],
            delay: Duration::from_secs(60),
        })
        .unwrap();
        assert!(matches!(recv(&rx), PlayMsg::Started { total: 0, .. }));
        assert!(matches!(
            recv(&rx),
            PlayMsg::Finished {
                algorithm: Algorithm::Merge,
                ..
            }
        ));
    }

    #[test]
    fn play_request_during_playback_keeps_the_cadence() {
        let (tx, rx) = spawn();
        let values = vec![3, 2, 1];
        tx.send(PlayCmd::Play {
            algorithm: Algorithm::Bubble,
            values: values.clone(),
            delay: Duration::from_millis(500),
        })
        .unwrap();
        assert!(matches!(recv(&rx), PlayMsg::Started { .. }));
        assert!(matches!(recv(&rx), PlayMsg::Step(_)));

        tx.send(PlayCmd::Play {
            algorithm: Algorithm::Merge,
            values,
            delay: Duration::from_millis(1),
        })
        .unwrap();
        // the ignored request must not release the next step early
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        assert!(matches!(recv(&rx), PlayMsg::Step(_)));

        tx.send(PlayCmd::Cancel).unwrap();
        assert!(matches!(
            recv(&rx),
            PlayMsg::Cancelled {
                algorithm: Algorithm::Bubble,
                applied: 2
            }
        ));
    }

    #[test]
    fn cancel_stops_playback() {
        let (tx, rx) = spawn();
        tx.send(PlayCmd::Play {
            algorithm: Algorithm::Insertion,
            values: (0..30).rev().collect(),
            delay: Duration::from_secs(60),
        })
        .unwrap();
        assert!(matches!(recv(&rx), PlayMsg::Started { .. }));
        assert!(matches!(recv(&rx), PlayMsg::Step(_)));
        tx.send(PlayCmd::Cancel).unwrap();
        assert_eq!(
            recv(&rx),
            PlayMsg::Cancelled {
                algorithm: Algorithm::Insertion,
                applied: 1
            }
        );

        // the worker accepts new work afterwards
        tx.send(PlayCmd::Play {
            algorithm: Algorithm::Quick,
            values: vec![1],
            delay: Duration::from_millis(1),
        })
        .unwrap();
        assert!(matches!(recv(&rx), PlayMsg::Started { total: 0, .. }));
        assert!(matches!(recv(&rx), PlayMsg::Finished { .. }));
    }
}
