//! The capability surface the sketchpad needs from a geometry engine.
//!
//! The engine owns primitive math, rendering and dragging. The core only
//! creates and removes primitives and reads a point's live coordinates.

use crate::model::{CircleStyle, PointStyle, StrokeStyle};

pub trait GeometryEngine {
    /// Opaque reference to an engine-owned primitive.
    type Handle: Clone;

    fn create_point(&mut self, x: f64, y: f64, label: &str, style: &PointStyle) -> Self::Handle;
    /// Infinite line through both points.
    fn create_line(&mut self, a: &Self::Handle, b: &Self::Handle, style: &StrokeStyle) -> Self::Handle;
    /// Bounded segment from `a` to `b`.
    fn create_segment(&mut self, a: &Self::Handle, b: &Self::Handle, style: &StrokeStyle) -> Self::Handle;
    fn create_circle(&mut self, center: &Self::Handle, rim: &Self::Handle, style: &CircleStyle) -> Self::Handle;
    fn remove(&mut self, handle: &Self::Handle);
    /// Current position of a point primitive. Points may have been dragged
    /// since creation, so this is read on every query.
    fn point_coords(&self, handle: &Self::Handle) -> (f64, f64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Point { x: f64, y: f64, label: String },
    Line { a: usize, b: usize },
    Segment { a: usize, b: usize },
    Circle { center: usize, rim: usize },
}

/// In-memory engine: keeps primitives in a slot vector, handle is the index.
#[derive(Clone, Debug, Default)]
pub struct MemoryEngine {
    prims: Vec<Option<Primitive>>,
}

impl MemoryEngine {
    pub fn new() -> MemoryEngine { MemoryEngine::default() }

    fn push(&mut self, p: Primitive) -> usize {
        let id = self.prims.len();
        self.prims.push(Some(p));
        id
    }

    pub fn get(&self, handle: usize) -> Option<&Primitive> {
        self.prims.get(handle).and_then(|p| p.as_ref())
    }

    /// Simulates a drag of a point primitive.
    pub fn move_point(&mut self, handle: usize, nx: f64, ny: f64) -> bool {
        match self.prims.get_mut(handle) {
            Some(Some(Primitive::Point { x, y, .. })) => {
                *x = nx;
                *y = ny;
                true
            }
            _ => false,
        }
    }

    /// Number of primitives created and not yet removed.
    pub fn live_count(&self) -> usize {
        self.prims.iter().filter(|p| p.is_some()).count()
    }

    pub fn primitives(&self) -> impl Iterator<Item = (usize, &Primitive)> {
        self.prims.iter().enumerate().filter_map(|(i, p)| p.as_ref().map(|p| (i, p)))
    }
}

impl GeometryEngine for MemoryEngine {
    type Handle = usize;

    fn create_point(&mut self, x: f64, y: f64, label: &str, _style: &PointStyle) -> usize {
        self.push(Primitive::Point { x, y, label: label.to_string() })
    }
    fn create_line(&mut self, a: &usize, b: &usize, _style: &StrokeStyle) -> usize {
        self.push(Primitive::Line { a: *a, b: *b })
    }
    fn create_segment(&mut self, a: &usize, b: &usize, _style: &StrokeStyle) -> usize {
        self.push(Primitive::Segment { a: *a, b: *b })
    }
    fn create_circle(&mut self, center: &usize, rim: &usize, _style: &CircleStyle) -> usize {
        self.push(Primitive::Circle { center: *center, rim: *rim })
    }
    fn remove(&mut self, handle: &usize) {
        if let Some(slot) = self.prims.get_mut(*handle) {
            *slot = None;
        }
    }
    fn point_coords(&self, handle: &usize) -> (f64, f64) {
        match self.get(*handle) {
            Some(Primitive::Point { x, y, .. }) => (*x, *y),
            _ => (f64::NAN, f64::NAN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_engine_tracks_live_primitives() {
        let mut e = MemoryEngine::new();
        let a = e.create_point(0.0, 0.0, "P1", &PointStyle::default());
        let b = e.create_point(1.0, 0.0, "P2", &PointStyle::default());
        let l = e.create_segment(&a, &b, &StrokeStyle::default());
        assert_eq!(e.live_count(), 3);
        assert_eq!(e.get(l), Some(&Primitive::Segment { a, b }));
        assert!(e.move_point(b, 2.0, 3.0));
        assert_eq!(e.point_coords(&b), (2.0, 3.0));
        assert!(!e.move_point(l, 0.0, 0.0));
        e.remove(&l);
        assert_eq!(e.live_count(), 2);
        assert!(e.point_coords(&l).0.is_nan());
    }
}
