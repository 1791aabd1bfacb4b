//! Presentation primitives - typed values for the inline styles the animator writes
//!
//! Each primitive:
//! - keeps its value inside a fixed range (see `bounded`)
//! - `to_css()` → the exact property value written to the DOM

#[macro_use]
pub mod bounded;
pub mod offset;
pub mod opacity;
pub mod path;
pub mod scale;
pub mod transition;

pub use offset::Offset;
pub use opacity::Opacity;
pub use path::Triangle;
pub use scale::ShapeScale;
pub use transition::Transition;
