pub mod command;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod limits;
pub mod locator;
pub mod mode;
pub mod model;
pub mod scene;
pub mod selection;
mod session;

pub use command::{Command, CommandOutcome, HELP_TEXT};
pub use config::SketchConfig;
pub use controller::{ClickOutcome, InteractionController};
pub use engine::{GeometryEngine, MemoryEngine, Primitive};
pub use error::{SketchError, SketchResult};
pub use mode::Mode;
pub use model::{
    CircleStyle, Color, PointId, PointStyle, SceneStats, Severity, ShapeKind, Status, StrokeStyle,
};
pub use scene::SceneState;
pub use session::{ClearToken, Sketchpad};
