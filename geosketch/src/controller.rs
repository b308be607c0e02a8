//! Click interpretation driven by the active mode.

use crate::config::SketchConfig;
use crate::engine::GeometryEngine;
use crate::error::{check_coord, SketchError, SketchResult};
use crate::locator::find_nearby;
use crate::mode::Mode;
use crate::model::{PointId, ShapeKind, Status};
use crate::scene::SceneState;
use crate::selection::{SelectionBuffer, SelectionProgress};
use log::{debug, info};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// The active mode does not react to clicks.
    Ignored,
    PointCreated { id: PointId, label: String },
    /// A point was added to the selection; `pending` is the buffer length.
    Selected { id: PointId, label: String, pending: usize },
    ShapeCreated {
        #[serde(rename = "shape")]
        kind: ShapeKind,
        first: String,
        second: String,
    },
}

impl ClickOutcome {
    pub fn status(&self, mode: Mode) -> Option<Status> {
        match self {
            ClickOutcome::Ignored => None,
            ClickOutcome::PointCreated { label, .. } => Some(Status::success(format!("Point {} created", label))),
            ClickOutcome::Selected { label, .. } => Some(Status::info(match mode {
                Mode::Circle => format!("Center {} selected, click a point on the circumference", label),
                _ => format!("Selected {}, click one more point", label),
            })),
            ClickOutcome::ShapeCreated { kind, first, second } => {
                Some(Status::success(kind.created_message(first, second)))
            }
        }
    }
}

/// Mode state machine plus the selection it accumulates.
///
/// The mode only changes through `set_mode`; completing a shape keeps the
/// mode active so the next one can be drawn right away.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    mode: Mode,
    selection: SelectionBuffer,
}

impl InteractionController {
    pub fn new() -> Self { Self::default() }

    pub fn mode(&self) -> Mode { self.mode }

    pub fn pending(&self) -> &[PointId] { self.selection.as_slice() }

    pub fn set_mode(&mut self, mode: Mode) -> Status {
        if mode != self.mode {
            info!("mode {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
        self.selection.clear();
        mode.prompt()
    }

    /// Drops selection and returns to `Mode::None`.
    pub fn reset(&mut self) {
        self.mode = Mode::None;
        self.selection.clear();
    }

    pub fn handle_click<E: GeometryEngine>(
        &mut self,
        scene: &mut SceneState<E::Handle>,
        engine: &mut E,
        cfg: &SketchConfig,
        x: f64,
        y: f64,
    ) -> SketchResult<ClickOutcome> {
        check_coord("x", x)?;
        check_coord("y", y)?;
        let kind = match self.mode {
            Mode::None | Mode::Select => return Ok(ClickOutcome::Ignored),
            Mode::Point => {
                let id = scene.create_point(engine, cfg, x, y)?;
                let label = label_of(scene, id);
                return Ok(ClickOutcome::PointCreated { id, label });
            }
            Mode::Line => ShapeKind::Line,
            Mode::Circle => ShapeKind::Circle,
        };
        let id = find_nearby(scene, engine, x, y, cfg.snap_threshold)
            .ok_or(SketchError::NoPointNearby { x, y })?;
        match self.selection.push(id) {
            SelectionProgress::Pending(pending) => {
                debug!("selected {:?} ({} pending)", id, pending);
                Ok(ClickOutcome::Selected { id, label: label_of(scene, id), pending })
            }
            SelectionProgress::Complete(first, second) => {
                scene.create_shape(engine, cfg, kind, first, second)?;
                Ok(ClickOutcome::ShapeCreated {
                    kind,
                    first: label_of(scene, first),
                    second: label_of(scene, second),
                })
            }
        }
    }
}

fn label_of<H: Clone>(scene: &SceneState<H>, id: PointId) -> String {
    scene.point(id).map(|p| p.label.clone()).unwrap_or_default()
}
