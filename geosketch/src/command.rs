//! One-line command language.
//!
//! ```text
//! command   := "help" | shape-cmd
//! shape-cmd := kind label label
//! kind      := "line" | "segment" | "circle"
//! ```
//!
//! Tokens are whitespace separated; the keyword is case-insensitive while
//! labels must match exactly.

use crate::config::SketchConfig;
use crate::engine::GeometryEngine;
use crate::error::{SketchError, SketchResult};
use crate::limits::MAX_COMMAND_LEN;
use crate::model::ShapeKind;
use crate::scene::SceneState;
use log::debug;
use serde::Serialize;

pub const HELP_TEXT: &str = "\
Available Commands:
  line pointA pointB     - Draw infinite line through two points
  segment pointA pointB  - Draw line segment between two points
  circle pointA pointB   - Draw circle (pointA = center, pointB = on circumference)
  help                   - Show this message

Example:
  line P1 P2
  segment P1 P2
  circle P1 P3";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Shape { kind: ShapeKind, first: String, second: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutcome {
    Empty,
    Help,
    Created {
        #[serde(rename = "shape")]
        kind: ShapeKind,
        first: String,
        second: String,
    },
}

/// Parses a line; `Ok(None)` for blank input. Tokens past the two labels
/// are ignored.
pub fn parse(line: &str) -> SketchResult<Option<Command>> {
    if line.len() > MAX_COMMAND_LEN {
        return Err(SketchError::OutOfRange {
            param: "command",
            min: 0.0,
            max: MAX_COMMAND_LEN as f64,
            got: line.len() as f64,
        });
    }
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else { return Ok(None) };
    let keyword = keyword.to_lowercase();
    if keyword == "help" {
        return Ok(Some(Command::Help));
    }
    let kind = ShapeKind::from_keyword(&keyword).ok_or(SketchError::UnknownCommand(keyword))?;
    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => Ok(Some(Command::Shape { kind, first: a.to_string(), second: b.to_string() })),
        _ => Err(SketchError::MissingLabels { command: kind.name() }),
    }
}

/// Parses and runs a line against the scene. Labels are resolved in order,
/// so a bad first label is reported even when the second is bad too.
pub fn execute<E: GeometryEngine>(
    scene: &mut SceneState<E::Handle>,
    engine: &mut E,
    cfg: &SketchConfig,
    line: &str,
) -> SketchResult<CommandOutcome> {
    let (kind, first, second) = match parse(line)? {
        None => return Ok(CommandOutcome::Empty),
        Some(Command::Help) => return Ok(CommandOutcome::Help),
        Some(Command::Shape { kind, first, second }) => (kind, first, second),
    };
    let a = scene.point_by_label(&first).ok_or_else(|| SketchError::PointNotFound(first.clone()))?;
    let b = scene.point_by_label(&second).ok_or_else(|| SketchError::PointNotFound(second.clone()))?;
    scene.create_shape(engine, cfg, kind, a, b)?;
    debug!("command {} {} {}", kind.name(), first, second);
    Ok(CommandOutcome::Created { kind, first, second })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("HELP").unwrap(), Some(Command::Help));
        assert_eq!(
            parse("  Segment P1   P2 extra").unwrap(),
            Some(Command::Shape { kind: ShapeKind::Segment, first: "P1".into(), second: "P2".into() })
        );
    }

    #[test]
    fn unknown_keyword_is_named() {
        let e = parse("ellipse P1 P2").unwrap_err();
        assert_eq!(e.code(), "unknown_command");
        assert!(e.to_string().starts_with("Unknown command \"ellipse\""));
    }

    #[test]
    fn arity_error_names_command() {
        let e = parse("circle A").unwrap_err();
        assert!(matches!(e, SketchError::MissingLabels { command: "circle" }));
        let e = parse("line").unwrap_err();
        assert!(matches!(e, SketchError::MissingLabels { command: "line" }));
    }

    #[test]
    fn overlong_input_rejected() {
        let long = "a".repeat(MAX_COMMAND_LEN + 1);
        assert_eq!(parse(&long).unwrap_err().code(), "out_of_range");
    }
}
