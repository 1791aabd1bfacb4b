//! ShapeScale - scale factor of a decorative shape

use super::bounded::bounded_f32;

bounded_f32!(ShapeScale, 0.5, 1.0);

impl ShapeScale {
    /// Value for the `transform` style property
    pub fn to_css(&self) -> String {
        format!("scale({})", self.0)
    }
}
