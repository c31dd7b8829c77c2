//! Metronome: host-side tick pump.
//!
//! The [`Animator`](super::Animator) is passive by design; something has to
//! call `poll` at a steady rate. Hosts with their own event loop do that
//! directly. Hosts without one spawn a `Metronome`: a dedicated thread that
//! delivers [`Tick`]s over a bounded channel. The channel never queues up —
//! a slow receiver skips ticks instead of falling behind.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Tick number (monotonically increasing).
    pub seq: u64,
    /// The instant the tick fired. Pass this to `Animator::poll`.
    pub at: Instant,
}

/// Fixed-interval tick source running on its own thread.
pub struct Metronome {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    tick_rx: Receiver<Tick>,
}

impl Metronome {
    /// Spawn a metronome with the given interval.
    ///
    /// A 25-50 ms interval comfortably drives every animation mode; the
    /// animator fires only when its own deadline passes, so a fast
    /// metronome does not speed anything up.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Small buffer on purpose: ticks must not queue up behind a slow
        // receiver.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("dotsign-metronome".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown_clone, interval);
            })
            .expect("failed to spawn metronome thread");

        Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        }
    }

    /// Get a reference to the tick receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the metronome to shut down.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Shut down and wait for the thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let mut seq = 0u64;
        let mut next_tick = Instant::now() + interval;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                // Non-blocking send: a full buffer means the receiver is
                // behind, and this tick is skipped rather than queued.
                let _ = tick_tx.try_send(Tick { seq, at: now });

                seq += 1;
                next_tick += interval;

                // Catch up without queuing if the thread overslept.
                if next_tick < now {
                    next_tick = now + interval;
                }
            } else {
                thread::sleep((next_tick - now).min(Duration::from_millis(5)));
            }
        }
    }
}

impl Drop for Metronome {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metronome_delivers_numbered_ticks() {
        let metronome = Metronome::spawn(Duration::from_millis(10));

        let tick = metronome
            .receiver()
            .recv_timeout(Duration::from_millis(200))
            .unwrap();
        assert_eq!(tick.seq, 0);

        let tick2 = metronome
            .receiver()
            .recv_timeout(Duration::from_millis(200))
            .unwrap();
        assert!(tick2.seq > tick.seq);
        assert!(tick2.at >= tick.at);

        metronome.join();
    }

    #[test]
    fn test_metronome_shutdown_stops_ticks() {
        let metronome = Metronome::spawn(Duration::from_millis(10));
        metronome.shutdown();
        thread::sleep(Duration::from_millis(50));

        // Drain whatever was in flight; nothing new arrives afterwards.
        while metronome.receiver().try_recv().is_ok() {}
        thread::sleep(Duration::from_millis(50));
        assert!(metronome.receiver().try_recv().is_err());

        metronome.join();
    }
}
