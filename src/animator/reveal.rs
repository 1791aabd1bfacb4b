//! Reveal - one-shot hidden → visible transition shared by cards and regions

use std::fmt::Display;
use std::rc::Rc;

use dioxus::logger::tracing::error;

use crate::config::{CardTiming, RegionTiming};
use crate::error::MountError;
use crate::primitives::{Offset, Opacity, Transition};
use crate::schedule::Scheduler;
use crate::stage::Stage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub offset: Offset,
    pub delay_ms: u32,
    pub transition: Transition,
}

impl Reveal {
    pub fn card(timing: &CardTiming, index: usize) -> Self {
        Self {
            offset: timing.offset,
            delay_ms: timing.delay_for(index),
            transition: timing.transition(),
        }
    }

    pub fn region(timing: &RegionTiming) -> Self {
        Self {
            offset: timing.offset,
            delay_ms: timing.delay_ms,
            transition: timing.transition(),
        }
    }

    pub fn hide<S: Stage>(&self, stage: &S, node: &S::Node) -> Result<(), MountError> {
        stage.set_style(node, "opacity", &Opacity::HIDDEN.to_css())?;
        stage.set_style(node, "transform", &self.offset.to_css())
    }

    pub fn show<S: Stage>(&self, stage: &S, node: &S::Node) -> Result<(), MountError> {
        stage.set_style(node, "transition", &self.transition.reveal_css())?;
        stage.set_style(node, "opacity", &Opacity::VISIBLE.to_css())?;
        stage.set_style(node, "transform", &Offset::NONE.to_css())
    }

    /// Queue `show` after `delay_ms`. Runs once.
    pub fn schedule<S, T, L>(self, stage: &Rc<S>, scheduler: &T, node: S::Node, what: L)
    where
        S: Stage + 'static,
        T: Scheduler + ?Sized,
        L: Display + 'static,
    {
        let stage = Rc::clone(stage);
        scheduler.after(
            self.delay_ms,
            Box::new(move || {
                if let Err(err) = self.show(&*stage, &node) {
                    error!("reveal of {what} failed: {err}");
                }
            }),
        );
    }
}
