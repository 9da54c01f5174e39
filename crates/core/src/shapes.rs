//! Shape library - the fixed catalog of seven four-cell shapes
//!
//! Offsets are `(dcol, drow)` from the piece anchor, rows growing downward.

use crate::types::{Color, ShapeId};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Four cell offsets of a shape
pub type ShapeOffsets = [CellOffset; 4];

/// Catalog entry: cell offsets plus the shape's color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub offsets: ShapeOffsets,
    pub color: Color,
}

const CATALOG: [Shape; 7] = [
    // 1: Z
    Shape {
        offsets: [(0, 0), (1, 0), (1, 1), (2, 1)],
        color: Color::Red,
    },
    // 2: S
    Shape {
        offsets: [(1, 0), (2, 0), (0, 1), (1, 1)],
        color: Color::Green,
    },
    // 3: T
    Shape {
        offsets: [(1, 0), (0, 1), (1, 1), (2, 1)],
        color: Color::Purple,
    },
    // 4: horizontal bar, one cell left of the anchor
    Shape {
        offsets: [(-1, 0), (0, 0), (1, 0), (2, 0)],
        color: Color::LightBlue,
    },
    // 5: square
    Shape {
        offsets: [(0, 0), (1, 0), (0, 1), (1, 1)],
        color: Color::Yellow,
    },
    // 6: L
    Shape {
        offsets: [(0, 0), (1, 0), (2, 0), (0, 1)],
        color: Color::Orange,
    },
    // 7: J
    Shape {
        offsets: [(0, 0), (0, 1), (1, 1), (2, 1)],
        color: Color::DarkBlue,
    },
];

/// Look up a shape in the catalog.
pub fn shape(id: ShapeId) -> &'static Shape {
    &CATALOG[(id.get() - 1) as usize]
}

/// Cell offsets and color for a shape
pub fn shape_offsets(id: ShapeId) -> (ShapeOffsets, Color) {
    let s = shape(id);
    (s.offsets, s.color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u8) -> ShapeId {
        ShapeId::try_from(n).unwrap()
    }

    #[test]
    fn catalog_matches_literal_table() {
        assert_eq!(
            shape_offsets(id(1)),
            ([(0, 0), (1, 0), (1, 1), (2, 1)], Color::Red)
        );
        assert_eq!(
            shape_offsets(id(4)),
            ([(-1, 0), (0, 0), (1, 0), (2, 0)], Color::LightBlue)
        );
        assert_eq!(
            shape_offsets(id(7)),
            ([(0, 0), (0, 1), (1, 1), (2, 1)], Color::DarkBlue)
        );
    }

    #[test]
    fn every_shape_has_four_distinct_cells() {
        for id in ShapeId::ALL {
            let (offsets, _) = shape_offsets(id);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(offsets[i], offsets[j], "{} repeats a cell", id);
                }
            }
        }
    }

    #[test]
    fn every_shape_has_its_own_color() {
        let colors: std::collections::HashSet<Color> =
            ShapeId::ALL.iter().map(|&id| shape(id).color).collect();
        assert_eq!(colors.len(), 7);
    }
}
