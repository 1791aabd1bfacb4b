//! Bounded - macro for creating range-constrained numeric types
//!
//! Generates types with compile-time validation for const contexts.
//! Computed values go through `clamped` instead of panicking.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// let o = Opacity::new(0.5);
/// let o2 = Opacity::clamped(1.7);  // Opacity(1.0)
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        #[allow(dead_code)]
        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            pub fn clamped(value: f32) -> Self {
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }
    };
}

pub(crate) use bounded_f32;
