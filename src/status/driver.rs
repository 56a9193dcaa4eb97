// src/status/driver.rs
//! Background animation thread for the spinner.

use std::io;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};

use super::gate::WriteGate;
use super::render;

/// Time between animation frames.
pub const FRAME_PERIOD: Duration = Duration::from_millis(100);

/// Longest a caller waits for the animation thread to exit on stop.
pub const STOP_TIMEOUT: Duration = Duration::from_millis(500);

/// Generation of the spinner that owns the line, or [`NO_OWNER`].
///
/// Written without the write gate so a stop never waits behind a frame write.
/// Read by the animation thread under the gate before every frame.
pub(crate) type Owner = Arc<AtomicU64>;

pub(crate) const NO_OWNER: u64 = 0;

/// Handle to one running animation thread.
pub(crate) struct SpinnerDriver {
    generation: u64,
    stop_tx: Sender<()>,
    exited_rx: Receiver<()>,
    handle: Option<thread::JoinHandle<()>>,
}

/// Held by the animation thread; dropping it marks the thread as gone.
struct Liveness {
    live: Arc<AtomicUsize>,
    _exited_tx: Sender<()>,
}

impl Drop for Liveness {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl SpinnerDriver {
    /// Spawns the animation loop for `generation`, which must already be stored
    /// in `owner`.
    ///
    /// `live` counts animation threads that have not exited yet.
    pub(crate) fn spawn(
        gate: WriteGate,
        owner: Owner,
        generation: u64,
        message: String,
        live: &Arc<AtomicUsize>,
    ) -> io::Result<Self> {
        let (stop_tx, stop_rx) = bounded(1);
        let (exited_tx, exited_rx) = bounded(0);

        live.fetch_add(1, Ordering::SeqCst);
        let liveness = Liveness {
            live: Arc::clone(live),
            _exited_tx: exited_tx,
        };

        let handle = thread::Builder::new()
            .name("status-spinner".to_string())
            .spawn(move || {
                let _liveness = liveness;
                run_frames(&gate, &owner, generation, &message, &stop_rx);
            })?;

        Ok(Self {
            generation,
            stop_tx,
            exited_rx,
            handle: Some(handle),
        })
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Signals the loop and waits up to [`STOP_TIMEOUT`] for it to exit.
    ///
    /// The caller releases `owner` first. Returns `false` if the thread was still
    /// alive when the wait ran out; such a thread draws nothing further and exits
    /// once its current write returns.
    pub(crate) fn stop(mut self) -> bool {
        let _ = self.stop_tx.try_send(());
        match self.exited_rx.recv_timeout(STOP_TIMEOUT) {
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    generation = self.generation,
                    "spinner thread did not exit within {}ms",
                    STOP_TIMEOUT.as_millis()
                );
                false
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                if let Some(handle) = self.handle.take() {
                    let _ = handle.join();
                }
                true
            }
        }
    }
}

/// Gives up the line if `generation` still holds it.
pub(crate) fn release(owner: &AtomicU64, generation: u64) {
    let _ = owner.compare_exchange(generation, NO_OWNER, Ordering::SeqCst, Ordering::SeqCst);
}

fn run_frames(
    gate: &WriteGate,
    owner: &AtomicU64,
    generation: u64,
    message: &str,
    stop_rx: &Receiver<()>,
) {
    let mut frame_idx = 0usize;
    loop {
        match stop_rx.recv_timeout(FRAME_PERIOD) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }

        let drawn = gate.with(|line| {
            if owner.load(Ordering::SeqCst) != generation {
                return false;
            }
            match line.draw(&render::spinner_line(frame_idx, message)) {
                Ok(()) => true,
                Err(e) => {
                    line.record_fault(e);
                    release(owner, generation);
                    false
                }
            }
        });
        if !drawn {
            return;
        }
        frame_idx = frame_idx.wrapping_add(1);
    }
}
