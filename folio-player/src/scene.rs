//! Render layer: turns card transforms into CSS strings and serializable
//! frame snapshots.

use std::time::{Duration, Instant};

use folio_core::{CardTransform, CarouselMotion};
use folio_model::PortfolioItem;
use parking_lot::Mutex;
use serde::Serialize;

use crate::runtime::FrameObserver;

/// Avoid printing `-0`.
fn tidy(value: f32) -> f32 {
    value + 0.0
}

/// CSS `transform` value for one card. The card turns before it recedes,
/// so depth runs along its own normal rather than the viewer's axis.
pub fn css_transform(t: &CardTransform) -> String {
    format!(
        "translateX({:.1}px) rotateY({:.2}deg) translateZ({:.1}px) scale({:.3})",
        tidy(t.translate_x),
        tidy(t.rotate_y),
        tidy(t.translate_z),
        tidy(t.scale),
    )
}

/// CSS `filter` value for one card.
pub fn css_filter(t: &CardTransform) -> String {
    format!(
        "blur({:.1}px) brightness({:.2})",
        tidy(t.blur),
        tidy(t.brightness)
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFrame {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub transform: String,
    pub filter: String,
    pub opacity: f32,
    pub z_index: i32,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    pub elapsed_ms: u64,
    pub scroll_offset: f32,
    pub state: &'static str,
    pub center_index: Option<usize>,
    pub cards: Vec<CardFrame>,
}

impl SceneFrame {
    /// Cards that are actually drawn, back to front.
    pub fn paint_order(&self) -> Vec<&CardFrame> {
        let mut visible: Vec<&CardFrame> =
            self.cards.iter().filter(|card| card.visible).collect();
        visible.sort_by_key(|card| card.z_index);
        visible
    }
}

/// Items shown on the track, used to label frames.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<PortfolioItem>,
}

impl Scene {
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    pub fn capture(
        &self,
        motion: &CarouselMotion,
        elapsed: Duration,
    ) -> SceneFrame {
        let cards = motion
            .card_transforms()
            .enumerate()
            .map(|(index, transform)| {
                let item = self.items.get(index);
                CardFrame {
                    index,
                    id: item.map(|item| item.id.to_string()),
                    title: item.map(|item| item.title.clone()),
                    transform: css_transform(&transform),
                    filter: css_filter(&transform),
                    opacity: tidy(transform.opacity),
                    z_index: transform.z_index,
                    visible: transform.visible,
                }
            })
            .collect();

        SceneFrame {
            elapsed_ms: elapsed.as_millis() as u64,
            scroll_offset: tidy(motion.scroll_offset()),
            state: motion.state().label(),
            center_index: motion.center_index(),
            cards,
        }
    }
}

/// Frame observer that keeps every captured frame.
#[derive(Debug)]
pub struct SceneRecorder {
    scene: Scene,
    started_at: Instant,
    frames: Mutex<Vec<SceneFrame>>,
}

impl SceneRecorder {
    pub fn new(scene: Scene, started_at: Instant) -> Self {
        Self {
            scene,
            started_at,
            frames: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }

    pub fn take_frames(&self) -> Vec<SceneFrame> {
        std::mem::take(&mut *self.frames.lock())
    }
}

impl FrameObserver for SceneRecorder {
    fn on_frame(&self, motion: &CarouselMotion, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started_at);
        let frame = self.scene.capture(motion, elapsed);
        self.frames.lock().push(frame);
    }
}
