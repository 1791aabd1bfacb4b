//! Decorative shape engine
//!
//! Each shape owns its RNG and its timer chain. A cycle draws a duration,
//! a triangle and a scale, applies them with a linear transition of that
//! duration, and schedules the next cycle after the same duration.

use std::rc::Rc;

use dioxus::logger::tracing::{debug, error};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::ShapeTiming;
use crate::error::MountError;
use crate::primitives::{ShapeScale, Transition, Triangle};
use crate::schedule::Scheduler;
use crate::stage::Stage;

/// One randomized geometry state of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeFrame {
    pub duration_ms: u32,
    pub triangle: Triangle,
    pub scale: ShapeScale,
}

impl ShapeFrame {
    /// Empty duration or scale ranges collapse to their lower bound.
    /// Durations are at least 1ms so a loop always yields to the event loop.
    pub fn sample<R: Rng>(rng: &mut R, timing: &ShapeTiming) -> Self {
        let (min_ms, max_ms) = (timing.min_duration_ms, timing.max_duration_ms);
        let duration_ms = if min_ms < max_ms { rng.random_range(min_ms..=max_ms) } else { min_ms };
        let triangle = Triangle::random(rng);
        let (min_scale, max_scale) = (timing.min_scale.value(), timing.max_scale.value());
        let scale = if min_scale < max_scale { rng.random_range(min_scale..max_scale) } else { min_scale };
        Self { duration_ms: duration_ms.max(1), triangle, scale: ShapeScale::clamped(scale) }
    }

    pub fn apply<S: Stage>(&self, stage: &S, node: &S::Node) -> Result<(), MountError> {
        stage.set_attribute(node, "d", &self.triangle.to_path_data())?;
        stage.set_style(node, "transform", &self.scale.to_css())?;
        stage.set_style(node, "transition", &Transition::linear(self.duration_ms).all_css())
    }
}

struct Shape<N> {
    slot: usize,
    node: N,
    rng: SmallRng,
}

fn cycle<S, T>(stage: Rc<S>, scheduler: Rc<T>, timing: ShapeTiming, mut shape: Shape<S::Node>)
where
    S: Stage + 'static,
    T: Scheduler + 'static,
{
    let frame = ShapeFrame::sample(&mut shape.rng, &timing);
    if let Err(err) = frame.apply(&*stage, &shape.node) {
        error!("shape {} update failed: {err}", shape.slot);
    }
    debug!(slot = shape.slot, duration_ms = frame.duration_ms, "shape regenerated");

    let next = Rc::clone(&scheduler);
    scheduler.after(
        frame.duration_ms,
        Box::new(move || cycle(stage, next, timing, shape)),
    );
}

/// Append `timing.count` paths to `surface` and start one loop per path.
/// The first cycle is applied before this returns.
pub fn spawn<S, T>(
    stage: &Rc<S>,
    scheduler: &Rc<T>,
    surface: &S::Node,
    timing: &ShapeTiming,
    rng: &mut SmallRng,
) -> Result<Vec<S::Node>, MountError>
where
    S: Stage + 'static,
    T: Scheduler + 'static,
{
    let mut nodes = Vec::with_capacity(timing.count);
    for _ in 0..timing.count {
        let node = stage.create_svg_element("path")?;
        stage.set_attribute(&node, "fill", timing.fill)?;
        stage.append_child(surface, &node)?;
        nodes.push(node);
    }

    for (slot, node) in nodes.iter().enumerate() {
        let shape = Shape { slot, node: node.clone(), rng: SmallRng::from_rng(&mut *rng) };
        cycle(Rc::clone(stage), Rc::clone(scheduler), *timing, shape);
    }
    Ok(nodes)
}
