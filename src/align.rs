//! Parsing of `direction:offset` alignment expressions such as `"centre"`,
//! `"left:20"` or `"right:15%"`, and the x-placement helper built on them.

use std::str::FromStr;

use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Centre,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Offset in pixels.
    Unit(f32),
    /// Offset as a fraction of the span width (`50%` -> `0.5`).
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pub direction: Direction,
    pub offset: Offset,
}

impl Default for Alignment {
    fn default() -> Self {
        Self {
            direction: Direction::Centre,
            offset: Offset::Unit(0.0),
        }
    }
}

impl FromStr for Alignment {
    type Err = LayoutError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bad = || LayoutError::InvalidAlignment(input.to_string());
        let mut parts = input.splitn(2, ':');
        let direction = match parts
            .next()
            .map(|d| d.trim().to_ascii_lowercase())
            .ok_or_else(bad)?
            .as_str()
        {
            "centre" | "center" => Direction::Centre,
            "left" => Direction::Left,
            "right" => Direction::Right,
            _ => return Err(bad()),
        };
        let offset = match parts.next() {
            None => Offset::Unit(0.0),
            Some(raw) => {
                let raw = raw.trim();
                if let Some(pct) = raw.strip_suffix('%') {
                    let value: f32 = pct.trim().parse().map_err(|_| bad())?;
                    Offset::Percent(value / 100.0)
                } else {
                    Offset::Unit(raw.parse().map_err(|_| bad())?)
                }
            }
        };
        Ok(Self { direction, offset })
    }
}

/// X position for an item of `item_width` placed within
/// `[span_x, span_x + span_width]` according to `alignment`.
pub fn aligned_x(span_x: f32, span_width: f32, item_width: f32, alignment: Alignment) -> f32 {
    let offset = match alignment.offset {
        Offset::Unit(px) => px,
        Offset::Percent(fraction) => span_width * fraction,
    };
    match alignment.direction {
        Direction::Centre => span_x + (span_width - item_width) / 2.0 + offset,
        Direction::Left => span_x + offset,
        Direction::Right => span_x + span_width - item_width - offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_directions_case_insensitively() {
        for input in ["centre", "Center", "LEFT", "Right"] {
            assert!(input.parse::<Alignment>().is_ok(), "input {input}");
        }
    }

    #[test]
    fn parses_unit_and_percent_offsets() {
        let a: Alignment = "left:50%".parse().unwrap();
        assert_eq!(a.direction, Direction::Left);
        assert_eq!(a.offset, Offset::Percent(0.5));

        let b: Alignment = "right:12.5".parse().unwrap();
        assert_eq!(b.direction, Direction::Right);
        assert_eq!(b.offset, Offset::Unit(12.5));
    }

    #[test]
    fn unknown_direction_fails() {
        let err = "top:10".parse::<Alignment>().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidAlignment(_)));
    }

    #[test]
    fn malformed_offset_fails() {
        assert!("left:ten".parse::<Alignment>().is_err());
        assert!("left:%".parse::<Alignment>().is_err());
    }

    #[test]
    fn aligned_x_places_within_span() {
        let centre = aligned_x(100.0, 200.0, 50.0, Alignment::default());
        assert_eq!(centre, 175.0);

        let left: Alignment = "left:10".parse().unwrap();
        assert_eq!(aligned_x(100.0, 200.0, 50.0, left), 110.0);

        let right_pct: Alignment = "right:25%".parse().unwrap();
        assert_eq!(aligned_x(100.0, 200.0, 50.0, right_pct), 200.0);
    }
}
