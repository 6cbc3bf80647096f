//! Line classification and coordinate extraction
//!
//! A line is only ever looked at on its own. There is no modal state, so an
//! axis omitted on a line is simply absent rather than inherited from an
//! earlier command.

use gxform_core::Axis;

/// Command prefixes that mark a rapid (`G0`) or linear (`G1`) move
const MOTION_PREFIXES: [&str; 2] = ["G0", "G1"];

/// How a source line is handled by the transformer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Copied to the output unchanged
    PassThrough,
    /// Motion command eligible for transformation
    Motion,
}

/// Classify a line
///
/// A line is a motion command when its first whitespace-delimited token
/// starts with `G0` or `G1` and an uppercase `X`, `Y` or `Z` occurs anywhere
/// in its text. The prefix check is a plain string prefix, so `G01` and
/// `G1X1` qualify as well.
pub fn classify_line(line: &str) -> LineKind {
    let Some(first) = line.split_whitespace().next() else {
        return LineKind::PassThrough;
    };

    if !MOTION_PREFIXES.iter().any(|p| first.starts_with(p)) {
        return LineKind::PassThrough;
    }

    if line.contains(['X', 'Y', 'Z']) {
        LineKind::Motion
    } else {
        LineKind::PassThrough
    }
}

/// Value of one coordinate field on a line
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CoordinateValue {
    /// The field was present and its number parsed
    Present(f64),
    /// The field was missing, or its number did not parse
    #[default]
    Absent,
}

impl CoordinateValue {
    /// Check whether a value was parsed
    pub fn is_present(&self) -> bool {
        matches!(self, CoordinateValue::Present(_))
    }

    /// The parsed value, or `default` when absent
    pub fn unwrap_or(self, default: f64) -> f64 {
        match self {
            CoordinateValue::Present(v) => v,
            CoordinateValue::Absent => default,
        }
    }
}

/// Parse a coordinate token such as `X10.5`
///
/// Returns `None` when the token does not address an axis. A token that does
/// address an axis but carries no parseable number yields
/// [`CoordinateValue::Absent`]; this is not an error.
pub fn parse_coordinate(token: &str) -> Option<(Axis, CoordinateValue)> {
    let axis = Axis::from_token(token)?;
    // Axis letters are single-byte, so slicing after the first byte is safe.
    let value = match token[1..].parse::<f64>() {
        Ok(v) => CoordinateValue::Present(v),
        Err(_) => CoordinateValue::Absent,
    };
    Some((axis, value))
}

/// The X/Y/Z fields found on one line
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateTriple {
    pub x: CoordinateValue,
    pub y: CoordinateValue,
    pub z: CoordinateValue,
}

impl CoordinateTriple {
    /// Record a field for `axis`
    ///
    /// A later field that fails to parse does not erase an earlier value
    /// for the same axis.
    pub fn record(&mut self, axis: Axis, value: CoordinateValue) {
        if !value.is_present() {
            return;
        }
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// Value recorded for `axis`
    pub fn get(&self, axis: Axis) -> CoordinateValue {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Check whether at least one axis was parsed
    pub fn any_present(&self) -> bool {
        Axis::ALL.iter().any(|&axis| self.get(axis).is_present())
    }

    /// The three values with absent axes defaulted to `0.0`
    pub fn resolved(&self) -> (f64, f64, f64) {
        (
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.z.unwrap_or(0.0),
        )
    }
}

/// A tokenized motion command
#[derive(Debug, Clone, PartialEq)]
pub struct MotionCommand<'a> {
    /// The command token, kept verbatim (e.g. `G1`, `G01`)
    pub command: &'a str,
    /// Tokens after the command that are not coordinate fields, in order
    pub other_tokens: Vec<&'a str>,
    /// Coordinates parsed from the line
    pub coordinates: CoordinateTriple,
    /// Whether the raw line text contains an uppercase `Z` anywhere
    pub mentions_z: bool,
}

impl<'a> MotionCommand<'a> {
    /// Tokenize `line` if it classifies as a motion command
    ///
    /// Every token after the command that starts with `X`, `Y` or `Z` is
    /// removed from `other_tokens`, whether or not its number parsed.
    pub fn parse(line: &'a str) -> Option<Self> {
        if classify_line(line) != LineKind::Motion {
            return None;
        }

        let mut tokens = line.split_whitespace();
        let command = tokens.next()?;
        let mut other_tokens = Vec::new();
        let mut coordinates = CoordinateTriple::default();

        for token in tokens {
            match parse_coordinate(token) {
                Some((axis, value)) => coordinates.record(axis, value),
                None => other_tokens.push(token),
            }
        }

        Some(Self {
            command,
            other_tokens,
            coordinates,
            mentions_z: line.contains('Z'),
        })
    }

    /// Check whether any coordinate field parsed
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.any_present()
    }
}
