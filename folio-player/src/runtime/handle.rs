use std::{sync::Arc, time::Duration};

use folio_core::{
    CardTransform, CarouselConfig, CarouselMotion, Direction, DragOutcome,
    MotionError, NavKey, PreviewNavigator,
};
use parking_lot::Mutex;
use tracing::debug;

use super::scheduler::{FrameObserver, FrameScheduler, frame_now};

/// Input surface for one carousel on screen.
///
/// Every input mutates the shared engine and then either (re)starts the
/// frame task or stops it, depending on whether the engine still wants
/// frames. Cloning shares the same engine and scheduler.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    motion: Arc<Mutex<CarouselMotion>>,
    preview: Arc<Mutex<PreviewNavigator>>,
    scheduler: Arc<FrameScheduler>,
}

impl CarouselHandle {
    pub fn new(
        config: CarouselConfig,
        period: Duration,
    ) -> Result<Self, MotionError> {
        Self::build(config, FrameScheduler::new(period))
    }

    pub fn with_observer(
        config: CarouselConfig,
        period: Duration,
        observer: Arc<dyn FrameObserver>,
    ) -> Result<Self, MotionError> {
        Self::build(config, FrameScheduler::new(period).with_observer(observer))
    }

    fn build(
        config: CarouselConfig,
        scheduler: FrameScheduler,
    ) -> Result<Self, MotionError> {
        let motion = CarouselMotion::new(config)?;
        Ok(Self {
            preview: Arc::new(Mutex::new(PreviewNavigator::new(
                config.item_count,
            ))),
            motion: Arc::new(Mutex::new(motion)),
            scheduler: Arc::new(scheduler),
        })
    }

    /// Start the frame loop if the engine has work, e.g. idle auto-scroll
    /// right after mount.
    pub fn start(&self) {
        self.refresh();
    }

    /// Stop driving frames. The engine keeps its state.
    pub fn shutdown(&self) {
        self.scheduler.stop();
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Run `f` against the engine under its lock.
    pub fn with_motion<R>(&self, f: impl FnOnce(&CarouselMotion) -> R) -> R {
        f(&self.motion.lock())
    }

    pub fn scroll_offset(&self) -> f32 {
        self.motion.lock().scroll_offset()
    }

    pub fn center_index(&self) -> Option<usize> {
        self.motion.lock().center_index()
    }

    pub fn card_transforms(&self) -> Vec<CardTransform> {
        self.motion.lock().card_transforms().collect()
    }

    pub fn preview_selected(&self) -> Option<usize> {
        self.preview.lock().selected()
    }

    pub fn pointer_down(&self, x: f32) {
        self.motion.lock().begin_drag(x);
        self.refresh();
    }

    pub fn pointer_move(&self, x: f32) -> bool {
        // Drags are driven by input events, not frames.
        self.motion.lock().drag_move(x)
    }

    pub fn pointer_up(&self) -> DragOutcome {
        let outcome = self.motion.lock().end_drag();
        self.refresh();
        outcome
    }

    pub fn pointer_cancel(&self) {
        self.motion.lock().cancel_drag();
        self.refresh();
    }

    pub fn pointer_leave(&self) -> DragOutcome {
        let outcome = self.motion.lock().pointer_leave();
        self.refresh();
        outcome
    }

    pub fn set_hovered(&self, hovered: bool) {
        self.motion.lock().set_hovered(hovered);
        self.refresh();
    }

    pub fn scroll_to_index(&self, index: usize) {
        self.motion.lock().scroll_to_index(index, frame_now());
        self.refresh();
    }

    pub fn step(&self, direction: Direction) {
        self.motion.lock().step(direction, frame_now());
        self.refresh();
    }

    pub fn jump_to(&self, offset: f32) {
        self.motion.lock().jump_to(offset);
        self.refresh();
    }

    /// Open the full-screen preview on a card.
    pub fn open_preview(&self, index: usize) {
        self.preview.lock().open(index);
    }

    pub fn close_preview(&self) {
        self.preview.lock().close();
    }

    /// Route a key press. An open preview takes the arrows and Escape;
    /// otherwise the arrows step the carousel. Returns whether the key was
    /// consumed.
    pub fn handle_key(&self, key: NavKey) -> bool {
        {
            let mut preview = self.preview.lock();
            if preview.is_open() {
                return preview.handle_key(key);
            }
        }
        match key {
            NavKey::ArrowLeft => self.step(Direction::Prev),
            NavKey::ArrowRight => self.step(Direction::Next),
            NavKey::Escape => return false,
        }
        true
    }

    /// Swap in a new item count after the list changed.
    pub fn set_item_count(&self, item_count: usize) {
        self.motion.lock().set_item_count(item_count);
        self.preview.lock().set_item_count(item_count);
        self.refresh();
    }

    fn refresh(&self) {
        let (wants_frames, state) = {
            let motion = self.motion.lock();
            (motion.needs_frames(), motion.state().label())
        };
        if wants_frames {
            debug!(state, "scheduling frames");
            self.scheduler.schedule(Arc::clone(&self.motion));
        } else {
            self.scheduler.stop();
        }
    }
}
