use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: 255 }),
            8 => Some(Color { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid color '{}'", s))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_hex()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub size: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub show_label: bool,
    pub label_offset: [f64; 2],
}

impl Default for PointStyle {
    fn default() -> Self {
        PointStyle {
            size: 6.0,
            fill: Color::rgb(0x66, 0x7e, 0xea),
            stroke: Color::rgb(0x76, 0x4b, 0xa2),
            stroke_width: 2.0,
            show_label: true,
            label_offset: [5.0, -15.0],
        }
    }
}

/// Stroke used for lines and segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub fixed: bool,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        StrokeStyle { color: Color::rgb(0xff, 0x98, 0x00), width: 2.0, fixed: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStyle {
    pub color: Color,
    pub width: f64,
    pub fill: Color,
    pub fill_opacity: f64,
    pub fixed: bool,
}

impl Default for CircleStyle {
    fn default() -> Self {
        let green = Color::rgb(0x4c, 0xaf, 0x50);
        CircleStyle { color: green, width: 2.0, fill: green, fill_opacity: 0.05, fixed: true }
    }
}

/// Index of a point in creation order. Stable until the scene is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Segment,
    Circle,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Segment => "segment",
            ShapeKind::Circle => "circle",
        }
    }

    pub fn from_keyword(s: &str) -> Option<ShapeKind> {
        match s {
            "line" => Some(ShapeKind::Line),
            "segment" => Some(ShapeKind::Segment),
            "circle" => Some(ShapeKind::Circle),
            _ => None,
        }
    }

    /// Success text shared by the click and command paths.
    pub fn created_message(&self, first: &str, second: &str) -> String {
        match self {
            ShapeKind::Line => format!("Line created between {} and {}", first, second),
            ShapeKind::Segment => format!("Segment created between {} and {}", first, second),
            ShapeKind::Circle => {
                format!("Circle created (center: {}, circumference: {})", first, second)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
    Inactive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub text: String,
    pub severity: Severity,
}

impl Status {
    pub fn new(text: impl Into<String>, severity: Severity) -> Status {
        Status { text: text.into(), severity }
    }
    pub fn info(text: impl Into<String>) -> Status { Status::new(text, Severity::Info) }
    pub fn success(text: impl Into<String>) -> Status { Status::new(text, Severity::Success) }
    pub fn error(text: impl Into<String>) -> Status { Status::new(text, Severity::Error) }
    pub fn inactive(text: impl Into<String>) -> Status { Status::new(text, Severity::Inactive) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneStats {
    pub points: usize,
    pub lines: usize,
    pub circles: usize,
}
