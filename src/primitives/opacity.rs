//! Opacity - visibility of a revealed element

use super::bounded::bounded_f32;

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const HIDDEN: Self = Self::new(0.0);
    pub const VISIBLE: Self = Self::new(1.0);

    /// Value for the `opacity` style property
    pub fn to_css(&self) -> String {
        format!("{}", self.0)
    }
}
