use crate::engine::GeometryEngine;
use crate::model::PointId;
use crate::scene::SceneState;

/// First point in creation order strictly within `threshold` of (x, y).
///
/// This is a scan-and-return-first, not a nearest-neighbour search: an
/// older point wins over a closer, newer one.
pub fn find_nearby<E: GeometryEngine>(
    scene: &SceneState<E::Handle>,
    engine: &E,
    x: f64,
    y: f64,
    threshold: f64,
) -> Option<PointId> {
    for p in scene.points() {
        let (px, py) = engine.point_coords(&p.handle);
        let dx = px - x;
        let dy = py - y;
        // compare the distance itself; squared comparison rounds differently
        // at the boundary
        if (dx * dx + dy * dy).sqrt() < threshold {
            return Some(p.id);
        }
    }
    None
}
