//! `"x,y"` square arguments.

use knightquest_core::Point;

/// Largest accepted coordinate magnitude.
///
/// Keeps the displacement between two squares, and every square a path
/// visits, inside `i32`.
pub const COORD_LIMIT: i32 = 1_000_000_000;

/// A square argument that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointParseError {
    /// Not two comma-separated integers.
    #[error("Invalid point format: '{token}'. Expected format is 'x,y'.")]
    Format { token: String },
    /// A coordinate beyond [`COORD_LIMIT`].
    #[error(
        "Point '{token}' is out of range: coordinates must lie within ±{limit}.",
        limit = COORD_LIMIT
    )]
    OutOfRange { token: String },
}

impl PointParseError {
    /// The argument after trimming whitespace and quotes.
    pub fn token(&self) -> &str {
        match self {
            Self::Format { token } | Self::OutOfRange { token } => token,
        }
    }
}

/// Parse `"x,y"` into a [`Point`].
///
/// Surrounding whitespace and single or double quotes are ignored, as is
/// whitespace around either number. Both numbers may carry a sign and must
/// lie within `±COORD_LIMIT`.
pub fn parse_point(value: &str) -> Result<Point, PointParseError> {
    let token = value
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'')
        .trim();
    let format = || PointParseError::Format {
        token: token.to_string(),
    };
    let (x, y) = token.split_once(',').ok_or_else(format)?;
    let x = x.trim().parse::<i64>().map_err(|_| format())?;
    let y = y.trim().parse::<i64>().map_err(|_| format())?;

    let coord = |v: i64| {
        i32::try_from(v)
            .ok()
            .filter(|c| (-COORD_LIMIT..=COORD_LIMIT).contains(c))
    };
    match (coord(x), coord(y)) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err(PointParseError::OutOfRange {
            token: token.to_string(),
        }),
    }
}
