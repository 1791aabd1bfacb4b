//! Stage - the DOM seam the animator mutates
//!
//! The animator never touches `web_sys` directly. It resolves its targets
//! and builds cards and shapes through a `Stage`, so the same code drives
//! the browser (`WebStage`) and the in-memory DOM used by tests.

#[cfg(test)]
pub mod memory;
pub mod web;

#[cfg(test)]
pub use memory::MemoryStage;
pub use web::WebStage;

use crate::config::Targets;
use crate::error::{MountError, Role};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub trait Stage {
    type Node: Clone + 'static;

    /// First node matching `selector`, if any
    fn query(&self, selector: &str) -> Option<Self::Node>;

    fn create_element(&self, tag: &str) -> Result<Self::Node, MountError>;

    /// Element in the SVG namespace
    fn create_svg_element(&self, tag: &str) -> Result<Self::Node, MountError>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), MountError>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), MountError>;

    /// Set one inline style property, leaving the others alone
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), MountError>;

    /// Replace the node's children with a single text node
    fn set_text_content(&self, node: &Self::Node, text: &str);
}

/// The five shell nodes, looked up once before anything is mutated
#[derive(Debug, Clone)]
pub struct Resolved<N> {
    pub grid: N,
    pub surface: N,
    pub header: N,
    pub about: N,
    pub footer: N,
}

impl<N> Resolved<N> {
    /// Fails on the first missing node, in page order
    pub fn resolve<S: Stage<Node = N>>(stage: &S, targets: &Targets) -> Result<Self, MountError> {
        let find = |role: Role, selector: &'static str| {
            stage.query(selector).ok_or(MountError::MissingNode { role, selector })
        };
        Ok(Self {
            surface: find(Role::Surface, targets.surface)?,
            header: find(Role::Header, targets.header)?,
            about: find(Role::About, targets.about)?,
            grid: find(Role::Grid, targets.grid)?,
            footer: find(Role::Footer, targets.footer)?,
        })
    }
}
