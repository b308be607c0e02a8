//! Registry of everything created in a session.

use crate::config::SketchConfig;
use crate::engine::GeometryEngine;
use crate::error::{SketchError, SketchResult};
use crate::limits::{MAX_POINTS, MAX_SHAPES};
use crate::model::{PointId, SceneStats, ShapeKind};
use log::{debug, info};

#[derive(Clone, Debug)]
pub struct PointEntry<H> {
    pub id: PointId,
    pub label: String,
    pub handle: H,
}

/// A line or segment; `first` anchors a segment.
#[derive(Clone, Debug)]
pub struct LineEntry<H> {
    pub kind: ShapeKind,
    pub first: PointId,
    pub second: PointId,
    pub handle: H,
}

#[derive(Clone, Debug)]
pub struct CircleEntry<H> {
    pub center: PointId,
    pub rim: PointId,
    pub handle: H,
}

/// Points, lines (including segments) and circles in creation order.
/// Counts are always derived from the collections.
#[derive(Clone, Debug)]
pub struct SceneState<H> {
    points: Vec<PointEntry<H>>,
    lines: Vec<LineEntry<H>>,
    circles: Vec<CircleEntry<H>>,
    next_label: u32, // 1-based, reset only by clear
}

impl<H> Default for SceneState<H> {
    fn default() -> Self {
        SceneState { points: Vec::new(), lines: Vec::new(), circles: Vec::new(), next_label: 1 }
    }
}

impl<H: Clone> SceneState<H> {
    pub fn new() -> Self { Self::default() }

    pub fn points(&self) -> &[PointEntry<H>] { &self.points }
    pub fn lines(&self) -> &[LineEntry<H>] { &self.lines }
    pub fn circles(&self) -> &[CircleEntry<H>] { &self.circles }

    pub fn stats(&self) -> SceneStats {
        SceneStats { points: self.points.len(), lines: self.lines.len(), circles: self.circles.len() }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.circles.is_empty()
    }

    pub fn point(&self, id: PointId) -> Option<&PointEntry<H>> {
        self.points.get(id.0 as usize)
    }

    /// Exact, case-sensitive label lookup.
    pub fn point_by_label(&self, label: &str) -> Option<PointId> {
        self.points.iter().find(|p| p.label == label).map(|p| p.id)
    }

    pub fn create_point<E>(&mut self, engine: &mut E, cfg: &SketchConfig, x: f64, y: f64) -> SketchResult<PointId>
    where
        E: GeometryEngine<Handle = H>,
    {
        if self.points.len() >= MAX_POINTS {
            return Err(SketchError::LimitReached { kind: "points", max: MAX_POINTS });
        }
        let label = format!("P{}", self.next_label);
        let handle = engine.create_point(x, y, &label, &cfg.point_style);
        let id = PointId(self.points.len() as u32);
        debug!("created point {} at ({}, {})", label, x, y);
        self.points.push(PointEntry { id, label, handle });
        self.next_label += 1;
        Ok(id)
    }

    /// Creates a line, segment or circle from two registered points.
    pub fn create_shape<E>(
        &mut self,
        engine: &mut E,
        cfg: &SketchConfig,
        kind: ShapeKind,
        first: PointId,
        second: PointId,
    ) -> SketchResult<()>
    where
        E: GeometryEngine<Handle = H>,
    {
        if self.lines.len() + self.circles.len() >= MAX_SHAPES {
            return Err(SketchError::LimitReached { kind: "shapes", max: MAX_SHAPES });
        }
        let a = self.point(first).ok_or(SketchError::InvalidId { kind: "point", id: first.0 })?.handle.clone();
        let b = self.point(second).ok_or(SketchError::InvalidId { kind: "point", id: second.0 })?.handle.clone();
        match kind {
            ShapeKind::Line => {
                let handle = engine.create_line(&a, &b, &cfg.line_style);
                self.lines.push(LineEntry { kind, first, second, handle });
            }
            ShapeKind::Segment => {
                let handle = engine.create_segment(&a, &b, &cfg.line_style);
                self.lines.push(LineEntry { kind, first, second, handle });
            }
            ShapeKind::Circle => {
                let handle = engine.create_circle(&a, &b, &cfg.circle_style);
                self.circles.push(CircleEntry { center: first, rim: second, handle });
            }
        }
        debug!("created {} from {:?} and {:?}", kind.name(), first, second);
        Ok(())
    }

    /// Removes every primitive from the engine and empties the registry.
    /// Shapes go first since they depend on their points.
    pub fn clear<E>(&mut self, engine: &mut E)
    where
        E: GeometryEngine<Handle = H>,
    {
        let stats = self.stats();
        for c in self.circles.drain(..) {
            engine.remove(&c.handle);
        }
        for l in self.lines.drain(..) {
            engine.remove(&l.handle);
        }
        for p in self.points.drain(..) {
            engine.remove(&p.handle);
        }
        self.next_label = 1;
        info!("cleared scene ({} points, {} lines, {} circles)", stats.points, stats.lines, stats.circles);
    }
}
