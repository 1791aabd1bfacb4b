//! Transition - CSS transition shorthand for the properties the animator moves

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Ease,
    Linear,
}

impl Easing {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Linear => "linear",
        }
    }
}

/// Duration plus easing, applied uniformly to every animated property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn ease(duration_ms: u32) -> Self {
        Self { duration_ms, easing: Easing::Ease }
    }

    pub const fn linear(duration_ms: u32) -> Self {
        Self { duration_ms, easing: Easing::Linear }
    }

    /// Seconds form, e.g. `0.5s`
    fn seconds(&self) -> String {
        format!("{}s", self.duration_ms as f32 / 1000.0)
    }

    /// `opacity 0.5s ease, transform 0.5s ease`
    pub fn reveal_css(&self) -> String {
        let d = self.seconds();
        let e = self.easing.keyword();
        format!("opacity {d} {e}, transform {d} {e}")
    }

    /// `all 4200ms linear`
    pub fn all_css(&self) -> String {
        format!("all {}ms {}", self.duration_ms, self.easing.keyword())
    }
}
