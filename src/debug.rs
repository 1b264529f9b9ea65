//! Records the geometry of sampled paths, for inspection in an external
//! viewer. Everything here compiles to nothing without the `debug` feature.

use crate::math::Point2d;
use crate::path::{PathFamily, SegmentKind};
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records an arc segment of a sampled path.
///
/// # Parameters
/// * `family` - The family of the path being sampled
/// * `index` - The position of the segment within the path
/// * `kind` - Either [SegmentKind::Left] or [SegmentKind::Right]
/// * `centre` - The world space centre of the turning circle
/// * `radius` - The turning radius
/// * `sweep` - The angle turned through, in radians
#[allow(unused)]
pub fn debug_arc(
    family: PathFamily,
    index: usize,
    kind: SegmentKind,
    centre: Point2d,
    radius: f64,
    sweep: f64,
) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "arc",
            "family": family.to_string(),
            "segment": index,
            "kind": kind.to_string(),
            "centre": [centre.x, centre.y],
            "radius": radius,
            "sweep": sweep,
        }))
    })
}

/// Records a straight segment of a sampled path, from `from` to `to`.
#[allow(unused)]
pub fn debug_straight(family: PathFamily, index: usize, from: Point2d, to: Point2d) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "straight",
            "family": family.to_string(),
            "segment": index,
            "from": [from.x, from.y],
            "to": [to.x, to.y],
            "length": (to.x - from.x).hypot(to.y - from.y),
        }))
    })
}

/// Takes the geometry recorded on this thread since the last call,
/// one entry per sampled segment.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
