//! Gesture scripts: timed input events replayed against a
//! [`CarouselHandle`].
//!
//! Scripts are TOML or JSON:
//!
//! ```toml
//! tail_ms = 1500
//!
//! [[events]]
//! at_ms = 0
//! type = "pointer_down"
//! x = 400.0
//!
//! [[events]]
//! at_ms = 16
//! type = "pointer_move"
//! x = 360.0
//! ```

use std::{fs, path::Path, time::Duration};

use anyhow::{Context, anyhow};
use folio_core::{Direction, DragOutcome, NavKey};
use serde::{Deserialize, Serialize};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

use crate::runtime::CarouselHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Prev,
    Next,
}

impl From<StepDirection> for Direction {
    fn from(value: StepDirection) -> Self {
        match value {
            StepDirection::Prev => Direction::Prev,
            StepDirection::Next => Direction::Next,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    PointerCancel,
    PointerLeave,
    Hover { hovered: bool },
    ScrollTo { index: usize },
    Step { direction: StepDirection },
    /// DOM-style key name, e.g. `ArrowRight`.
    Key { key: String },
    OpenPreview { index: usize },
    ClosePreview,
    Jump { offset: f32 },
    SetItemCount { count: usize },
}

impl GestureEvent {
    /// Feed the event to the handle. Pointer releases report how the press
    /// ended.
    pub fn apply(&self, handle: &CarouselHandle) -> Option<DragOutcome> {
        match self {
            GestureEvent::PointerDown { x } => handle.pointer_down(*x),
            GestureEvent::PointerMove { x } => {
                handle.pointer_move(*x);
            }
            GestureEvent::PointerUp => return Some(handle.pointer_up()),
            GestureEvent::PointerCancel => handle.pointer_cancel(),
            GestureEvent::PointerLeave => return Some(handle.pointer_leave()),
            GestureEvent::Hover { hovered } => handle.set_hovered(*hovered),
            GestureEvent::ScrollTo { index } => handle.scroll_to_index(*index),
            GestureEvent::Step { direction } => handle.step((*direction).into()),
            GestureEvent::Key { key } => match NavKey::from_key_name(key) {
                Some(key) => {
                    handle.handle_key(key);
                }
                None => warn!(key = %key, "ignoring unknown key"),
            },
            GestureEvent::OpenPreview { index } => handle.open_preview(*index),
            GestureEvent::ClosePreview => handle.close_preview(),
            GestureEvent::Jump { offset } => handle.jump_to(*offset),
            GestureEvent::SetItemCount { count } => handle.set_item_count(*count),
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimedEvent {
    /// Milliseconds from the start of the replay.
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: GestureEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GestureScript {
    /// How long to keep the frame loop running after the last event.
    pub tail_ms: u64,
    pub events: Vec<TimedEvent>,
}

impl GestureScript {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read gesture script from {}", path.display())
        })?;

        let script: Self = match path.extension().and_then(|ext| ext.to_str())
        {
            Some("json") => serde_json::from_str(&contents).with_context(|| {
                format!("invalid gesture script {}", path.display())
            })?,
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid gesture script {}: {}", path.display(), err)
            })?,
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };
        Ok(script.sorted())
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        let script: Self = toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse gesture script {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })?;
        Ok(script.sorted())
    }

    /// Events in time order; ties keep their written order.
    fn sorted(mut self) -> Self {
        self.events.sort_by_key(|event| event.at_ms);
        self
    }

    /// Time of the last event plus the tail.
    pub fn duration(&self) -> Duration {
        let last = self.events.last().map_or(0, |event| event.at_ms);
        Duration::from_millis(last + self.tail_ms)
    }
}

/// What happened during a replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub clicks: usize,
    pub flings: usize,
    pub final_offset: f32,
    pub center_index: Option<usize>,
    pub preview: Option<usize>,
}

/// Replay `script` on the tokio clock, then stop the frame loop.
pub async fn replay(
    script: &GestureScript,
    handle: &CarouselHandle,
) -> ReplaySummary {
    let started = Instant::now();
    let mut summary = ReplaySummary::default();

    handle.start();
    for timed in &script.events {
        sleep_until(started + Duration::from_millis(timed.at_ms)).await;
        debug!(at_ms = timed.at_ms, event = ?timed.event, "gesture");
        match timed.event.apply(handle) {
            Some(DragOutcome::Click) => summary.clicks += 1,
            Some(DragOutcome::Fling { velocity }) => {
                debug!(velocity, "fling released");
                summary.flings += 1;
            }
            _ => {}
        }
        summary.events += 1;
    }
    sleep_until(started + script.duration()).await;
    handle.shutdown();

    summary.final_offset = handle.scroll_offset();
    summary.center_index = handle.center_index();
    summary.preview = handle.preview_selected();
    info!(
        events = summary.events,
        clicks = summary.clicks,
        flings = summary.flings,
        offset = summary.final_offset,
        "replay finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_events_in_time_order() {
        let script = GestureScript::parse_from_str(
            r#"
tail_ms = 500

[[events]]
at_ms = 48
type = "pointer_up"

[[events]]
at_ms = 0
type = "pointer_down"
x = 400

[[events]]
at_ms = 16
type = "step"
direction = "next"
"#,
            "inline",
        )
        .expect("parse");

        assert_eq!(script.events.len(), 3);
        assert_eq!(
            script.events[0].event,
            GestureEvent::PointerDown { x: 400.0 }
        );
        assert_eq!(
            script.events[1].event,
            GestureEvent::Step {
                direction: StepDirection::Next
            }
        );
        assert_eq!(script.duration(), Duration::from_millis(548));
    }

    #[test]
    fn parses_json_events() {
        let script = GestureScript::parse_from_str(
            r#"{"events": [
                {"at_ms": 0, "type": "hover", "hovered": true},
                {"at_ms": 10, "type": "key", "key": "ArrowLeft"},
                {"at_ms": 20, "type": "set_item_count", "count": 3}
            ]}"#,
            "inline",
        )
        .expect("parse");
        assert_eq!(script.tail_ms, 0);
        assert_eq!(
            script.events[1].event,
            GestureEvent::Key {
                key: "ArrowLeft".to_string()
            }
        );
    }

    #[test]
    fn unknown_event_types_are_rejected() {
        let err = GestureScript::parse_from_str(
            r#"{"events": [{"at_ms": 0, "type": "teleport"}]}"#,
            "inline",
        )
        .expect_err("unknown type");
        assert!(err.to_string().contains("inline"));
    }
}
