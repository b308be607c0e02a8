use crate::error::{SketchError, SketchResult};
use crate::limits::{self, DEFAULT_SNAP_THRESHOLD, MAX_SNAP_THRESHOLD};
use crate::model::{CircleStyle, PointStyle, StrokeStyle};
use serde::{Deserialize, Serialize};

/// Session configuration. Missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Max distance (user units) at which a click selects an existing point.
    pub snap_threshold: f64,
    /// Board viewport as `[left, top, right, bottom]`.
    pub bounding_box: [f64; 4],
    pub grid: bool,
    pub point_style: PointStyle,
    pub line_style: StrokeStyle,
    pub circle_style: CircleStyle,
}

impl Default for SketchConfig {
    fn default() -> Self {
        SketchConfig {
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            bounding_box: [-1.0, 1.0, 1.0, -1.0],
            grid: true,
            point_style: PointStyle::default(),
            line_style: StrokeStyle::default(),
            circle_style: CircleStyle::default(),
        }
    }
}

impl SketchConfig {
    pub fn from_json_str(s: &str) -> SketchResult<SketchConfig> {
        let cfg: SketchConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> SketchResult<()> {
        let t = self.snap_threshold;
        if !t.is_finite() {
            return Err(SketchError::NonFinite("snap_threshold"));
        }
        if !limits::in_threshold_bounds(t) {
            return Err(SketchError::OutOfRange {
                param: "snap_threshold",
                min: 0.0,
                max: MAX_SNAP_THRESHOLD,
                got: t,
            });
        }
        if self.bounding_box.iter().any(|v| !v.is_finite()) {
            return Err(SketchError::NonFinite("bounding_box"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SketchConfig::from_json_str(r##"{"snap_threshold": 0.5, "line_style": {"color": "#000000"}}"##)
            .unwrap();
        assert_eq!(cfg.snap_threshold, 0.5);
        assert_eq!(cfg.line_style.color, Color::rgb(0, 0, 0));
        assert_eq!(cfg.line_style.width, 2.0);
        assert_eq!(cfg.point_style, PointStyle::default());
        assert!(cfg.grid);
    }

    #[test]
    fn rejects_bad_threshold_and_json() {
        let e = SketchConfig::from_json_str(r#"{"snap_threshold": 0}"#).unwrap_err();
        assert_eq!(e.code(), "out_of_range");
        let e = SketchConfig::from_json_str("{not json").unwrap_err();
        assert_eq!(e.code(), "invalid_config");
        let e = SketchConfig::from_json_str(r#"{"point_style": {"fill": "blue"}}"#).unwrap_err();
        assert_eq!(e.code(), "invalid_config");
    }
}
