//! Page animator - wires the catalog renderer, shape engine and region fader
//! to a stage and a scheduler
//!
//! Mounting resolves every shell node first. A missing node fails the mount
//! before the DOM is touched.

pub mod cards;
pub mod regions;
pub mod reveal;
pub mod shapes;

use std::rc::Rc;

use rand::rngs::SmallRng;

use crate::config::AnimatorConfig;
use crate::error::{MountError, Role};
use crate::schedule::Scheduler;
use crate::stage::{Resolved, Stage};

/// Nodes created by a mount
#[derive(Debug, Clone)]
pub struct Mounted<N> {
    pub cards: Vec<N>,
    pub shapes: Vec<N>,
}

pub struct PageAnimator<S, T> {
    stage: Rc<S>,
    scheduler: Rc<T>,
    config: AnimatorConfig,
}

impl<S, T> PageAnimator<S, T>
where
    S: Stage + 'static,
    T: Scheduler + 'static,
{
    pub fn new(stage: S, scheduler: T, config: AnimatorConfig) -> Self {
        Self { stage: Rc::new(stage), scheduler: Rc::new(scheduler), config }
    }

    #[cfg(test)]
    pub fn stage(&self) -> &Rc<S> {
        &self.stage
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Rc<T> {
        &self.scheduler
    }

    #[cfg(test)]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Render the cards, start the shapes and fade in the regions.
    /// Call once per page load.
    pub fn mount(&self, rng: &mut SmallRng) -> Result<Mounted<S::Node>, MountError> {
        let config = &self.config;
        let shell = Resolved::resolve(&*self.stage, &config.targets)?;

        let cards = cards::render(&self.stage, &*self.scheduler, &shell.grid, config.catalog, &config.cards)?;
        let shapes = shapes::spawn(&self.stage, &self.scheduler, &shell.surface, &config.shapes, rng)?;
        regions::fade_in(
            &self.stage,
            &*self.scheduler,
            [
                (&shell.header, &config.header, Role::Header),
                (&shell.about, &config.about, Role::About),
                (&shell.footer, &config.footer, Role::Footer),
            ],
        )?;

        Ok(Mounted { cards, shapes })
    }
}
