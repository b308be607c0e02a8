use crate::error::SketchError;
use crate::model::{Severity, Status};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a click on the board is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    None,
    Point,
    Line,
    Circle,
    /// Reserved for inspection; clicks create nothing.
    Select,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::None, Mode::Point, Mode::Line, Mode::Circle, Mode::Select];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::None => "none",
            Mode::Point => "point",
            Mode::Line => "line",
            Mode::Circle => "circle",
            Mode::Select => "select",
        }
    }

    /// Points a click sequence must collect before a shape is created.
    pub fn operands(&self) -> usize {
        match self {
            Mode::Line | Mode::Circle => crate::selection::OPERANDS,
            _ => 0,
        }
    }

    /// Status shown when the mode becomes active.
    pub fn prompt(&self) -> Status {
        let (text, severity) = match self {
            Mode::None => ("No mode selected", Severity::Inactive),
            Mode::Point => ("Point mode: click on the board to place points", Severity::Info),
            Mode::Line => ("Line mode: click two points to connect them", Severity::Info),
            Mode::Circle => {
                ("Circle mode: click the center, then a point on the circumference", Severity::Info)
            }
            Mode::Select => ("Select mode", Severity::Info),
        };
        Status::new(text, severity)
    }
}

impl FromStr for Mode {
    type Err = SketchError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| SketchError::InvalidMode(s.to_string()))
    }
}
