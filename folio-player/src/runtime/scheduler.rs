//! Repeating frame task that drives a shared [`CarouselMotion`].
//!
//! At most one frame task exists per scheduler. Scheduling again cancels
//! the previous task before the new one is spawned, so two loops never
//! tick the same engine.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use folio_core::CarouselMotion;
use parking_lot::Mutex;
use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Roughly one display refresh at 60 Hz.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Receives every frame after the engine has been ticked.
pub trait FrameObserver: Send + Sync {
    fn on_frame(&self, motion: &CarouselMotion, now: Instant);
}

/// Current time on the tokio clock, so paused-time tests control it.
pub fn frame_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

#[derive(Debug)]
struct FrameTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

pub struct FrameScheduler {
    period: Duration,
    observer: Option<Arc<dyn FrameObserver>>,
    active: Mutex<Option<FrameTask>>,
    frames: Arc<AtomicU64>,
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("period", &self.period)
            .field("observer", &self.observer.is_some())
            .field("running", &self.is_running())
            .field("frames", &self.frames_ticked())
            .finish()
    }
}

impl FrameScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            observer: None,
            active: Mutex::new(None),
            frames: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FrameObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Total frames ticked by every task this scheduler has spawned.
    pub fn frames_ticked(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.active
            .lock()
            .as_ref()
            .is_some_and(|task| !task.token.is_cancelled() && !task.handle.is_finished())
    }

    /// Replace any running frame task with a fresh one. Must be called from
    /// within a tokio runtime.
    pub fn schedule(&self, motion: Arc<Mutex<CarouselMotion>>) {
        let mut active = self.active.lock();
        if let Some(previous) = active.take() {
            previous.token.cancel();
        }

        let token = CancellationToken::new();
        let handle = tokio::spawn(run_frames(
            motion,
            token.clone(),
            self.period,
            self.observer.clone(),
            Arc::clone(&self.frames),
        ));
        *active = Some(FrameTask { token, handle });
    }

    /// Cancel the running frame task, if any.
    pub fn stop(&self) {
        if let Some(task) = self.active.lock().take() {
            task.token.cancel();
        }
    }

    /// Wait for the current frame task to finish on its own, i.e. until the
    /// engine stops asking for frames.
    pub async fn settled(&self) {
        let handle = self.active.lock().take().map(|task| task.handle);
        if let Some(handle) = handle {
            // A cancelled or panicked task has nothing left to wait for.
            let _ = handle.await;
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.active.get_mut().take() {
            task.token.cancel();
        }
    }
}

async fn run_frames(
    motion: Arc<Mutex<CarouselMotion>>,
    token: CancellationToken,
    period: Duration,
    observer: Option<Arc<dyn FrameObserver>>,
    frames: Arc<AtomicU64>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    debug!(?period, "frame loop started");

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("frame loop cancelled");
                return;
            }
            _ = ticker.tick() => {}
        }

        let now = frame_now();
        let at_rest = {
            let mut engine = motion.lock();
            // Cancelled while waiting on the lock.
            if token.is_cancelled() {
                return;
            }
            engine.tick(now);
            frames.fetch_add(1, Ordering::Relaxed);
            if let Some(observer) = &observer {
                observer.on_frame(&engine, now);
            }
            let at_rest = !engine.needs_frames();
            if at_rest {
                trace!(offset = engine.scroll_offset(), "engine at rest");
            }
            at_rest
        };
        if at_rest {
            break;
        }
    }
    debug!("frame loop finished");
}
