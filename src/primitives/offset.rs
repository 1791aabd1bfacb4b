//! Offset - vertical entrance offset, rendered as `translateY`

/// Vertical offset in pixels. Negative slides in from above.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset(pub f32);

impl Offset {
    pub const NONE: Self = Self(0.0);
    pub const ABOVE: Self = Self(-50.0);
    pub const BELOW: Self = Self(50.0);

    pub const fn is_none(&self) -> bool {
        self.0 == 0.0
    }

    /// Value for the `transform` style property
    pub fn to_css(&self) -> String {
        if self.is_none() {
            return "translateY(0)".to_string();
        }
        format!("translateY({}px)", self.0)
    }
}
