//! Animator configuration
//!
//! Everything the animator reads is injected through `AnimatorConfig`.
//! `Default` reproduces the landing page timings.

use crate::catalog::{ALGORITHMS, CatalogEntry};
use crate::primitives::{Offset, ShapeScale, Transition};

/// Selectors for the nodes the page shell must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub grid: &'static str,
    pub surface: &'static str,
    pub header: &'static str,
    pub about: &'static str,
    pub footer: &'static str,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            grid: ".algorithms-grid",
            surface: ".geometric-svg",
            header: ".header-content",
            about: ".about-section",
            footer: "footer",
        }
    }
}

/// Card entrance: hidden below, revealed one after another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTiming {
    pub stagger_ms: u32,
    pub duration_ms: u32,
    pub offset: Offset,
}

impl CardTiming {
    pub fn delay_for(&self, index: usize) -> u32 {
        self.stagger_ms.saturating_mul(index as u32)
    }

    pub fn transition(&self) -> Transition {
        Transition::ease(self.duration_ms)
    }
}

impl Default for CardTiming {
    fn default() -> Self {
        Self { stagger_ms: 100, duration_ms: 500, offset: Offset::BELOW }
    }
}

/// Decorative shape regeneration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTiming {
    pub count: usize,
    pub fill: &'static str,
    /// Inclusive bounds of the per-cycle duration
    pub min_duration_ms: u32,
    pub max_duration_ms: u32,
    /// Half-open scale range, `min..max`
    pub min_scale: ShapeScale,
    pub max_scale: ShapeScale,
}

impl Default for ShapeTiming {
    fn default() -> Self {
        Self {
            count: 20,
            fill: "rgba(255,255,255,0.1)",
            min_duration_ms: 1000,
            max_duration_ms: 11000,
            min_scale: ShapeScale::new(0.5),
            max_scale: ShapeScale::new(1.0),
        }
    }
}

/// One-shot fade of a page region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionTiming {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub offset: Offset,
}

impl RegionTiming {
    pub const HEADER: Self = Self { delay_ms: 500, duration_ms: 1000, offset: Offset::ABOVE };
    pub const ABOUT: Self = Self { delay_ms: 200, duration_ms: 500, offset: Offset::BELOW };
    pub const FOOTER: Self = Self { delay_ms: 500, duration_ms: 500, offset: Offset::BELOW };

    pub fn transition(&self) -> Transition {
        Transition::ease(self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    pub catalog: &'static [CatalogEntry],
    pub targets: Targets,
    pub cards: CardTiming,
    pub shapes: ShapeTiming,
    pub header: RegionTiming,
    pub about: RegionTiming,
    pub footer: RegionTiming,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            catalog: ALGORITHMS,
            targets: Targets::default(),
            cards: CardTiming::default(),
            shapes: ShapeTiming::default(),
            header: RegionTiming::HEADER,
            about: RegionTiming::ABOUT,
            footer: RegionTiming::FOOTER,
        }
    }
}
