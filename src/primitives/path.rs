//! Path - triangle geometry for decorative shapes
//!
//! Coordinates live in the 100x100 user space of the decoration surface.

use rand::Rng;

use super::bounded::bounded_f32;

bounded_f32!(Coord, 0.0, 100.0);

impl Coord {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::clamped(rng.random_range(0.0..100.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let x = Coord::random(rng);
        let y = Coord::random(rng);
        Self { x, y }
    }
}

/// Closed three-vertex polygon
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    /// Six fresh coordinates, drawn in vertex order
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self([Point::random(rng), Point::random(rng), Point::random(rng)])
    }

    /// SVG path data: move to the first vertex, line to the other two, close
    pub fn to_path_data(&self) -> String {
        let [a, b, c] = self.0;
        format!(
            "M{},{} L{},{} L{},{} Z",
            a.x.value(),
            a.y.value(),
            b.x.value(),
            b.y.value(),
            c.x.value(),
            c.y.value(),
        )
    }
}
