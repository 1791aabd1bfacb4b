//! MemoryStage - a small in-memory DOM for driving the animator in tests
//!
//! Selectors are either `.class` or a bare tag name. Queries only see nodes
//! attached under the root, like `document.querySelector`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{SVG_NS, Stage};
use crate::error::MountError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct MemoryNode {
    tag: String,
    namespace: Option<&'static str>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
}

impl MemoryNode {
    fn matches(&self, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self
                .attributes
                .get("class")
                .is_some_and(|classes| classes.split_whitespace().any(|c| c == class)),
            None => self.tag == selector,
        }
    }
}

pub struct MemoryStage {
    nodes: RefCell<Vec<MemoryNode>>,
    /// Number of mutating calls made, for all-or-nothing checks
    writes: RefCell<usize>,
}

impl MemoryStage {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        let root = MemoryNode { tag: "body".into(), ..MemoryNode::default() };
        Self { nodes: RefCell::new(vec![root]), writes: RefCell::new(0) }
    }

    /// The landing page shell: header with decoration surface and content,
    /// about section, empty grid, footer
    pub fn page_shell() -> Self {
        Self::page_shell_without("")
    }

    /// Page shell with the node matching `selector` left out
    pub fn page_shell_without(selector: &str) -> Self {
        let stage = Self::new();
        let header = stage.build(Self::ROOT, "header", None, "");
        let shell: [(NodeId, &str, Option<&'static str>, &str); 5] = [
            (header, "svg", Some(SVG_NS), "geometric-svg"),
            (header, "div", None, "header-content"),
            (Self::ROOT, "section", None, "about-section"),
            (Self::ROOT, "div", None, "algorithms-grid"),
            (Self::ROOT, "footer", None, ""),
        ];
        for (parent, tag, namespace, class) in shell {
            let skip = match selector.strip_prefix('.') {
                Some(wanted) => wanted == class,
                None => selector == tag,
            };
            if !skip {
                stage.build(parent, tag, namespace, class);
            }
        }
        *stage.writes.borrow_mut() = 0;
        stage
    }

    fn build(&self, parent: NodeId, tag: &str, namespace: Option<&'static str>, class: &str) -> NodeId {
        let mut node = MemoryNode { tag: tag.into(), namespace, ..MemoryNode::default() };
        if !class.is_empty() {
            node.attributes.insert("class".into(), class.into());
        }
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(node);
        nodes[parent.0].children.push(id);
        id
    }

    fn write(&self) {
        *self.writes.borrow_mut() += 1;
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn tag(&self, id: NodeId) -> String {
        self.nodes.borrow()[id.0].tag.clone()
    }

    pub fn namespace(&self, id: NodeId) -> Option<&'static str> {
        self.nodes.borrow()[id.0].namespace
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[id.0].children.clone()
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[id.0].attributes.get(name).cloned()
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[id.0].style.get(property).cloned()
    }

    pub fn text(&self, id: NodeId) -> String {
        self.nodes.borrow()[id.0].text.clone()
    }
}

impl Stage for MemoryStage {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            let node = &nodes[id.0];
            if node.matches(selector) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, MountError> {
        self.write();
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(MemoryNode { tag: tag.into(), ..MemoryNode::default() });
        Ok(NodeId(nodes.len() - 1))
    }

    fn create_svg_element(&self, tag: &str) -> Result<NodeId, MountError> {
        let id = self.create_element(tag)?;
        self.nodes.borrow_mut()[id.0].namespace = Some(SVG_NS);
        Ok(id)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), MountError> {
        self.write();
        self.nodes.borrow_mut()[parent.0].children.push(*child);
        Ok(())
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), MountError> {
        self.write();
        self.nodes.borrow_mut()[node.0].attributes.insert(name.into(), value.into());
        Ok(())
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) -> Result<(), MountError> {
        self.write();
        self.nodes.borrow_mut()[node.0].style.insert(property.into(), value.into());
        Ok(())
    }

    fn set_text_content(&self, node: &NodeId, text: &str) {
        self.write();
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].children.clear();
        nodes[node.0].text = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_class_and_tag() {
        let stage = MemoryStage::page_shell();
        let grid = stage.query(".algorithms-grid").unwrap();
        assert_eq!(stage.tag(grid), "div");
        let footer = stage.query("footer").unwrap();
        assert_eq!(stage.tag(footer), "footer");
        assert!(stage.query(".nope").is_none());
    }

    #[test]
    fn query_ignores_detached_nodes() {
        let stage = MemoryStage::new();
        let orphan = stage.create_element("aside").unwrap();
        stage.set_attribute(&orphan, "class", "lonely").unwrap();
        assert!(stage.query(".lonely").is_none());
        stage.append_child(&MemoryStage::ROOT, &orphan).unwrap();
        assert_eq!(stage.query(".lonely"), Some(orphan));
    }

    #[test]
    fn shell_without_drops_only_that_node() {
        let stage = MemoryStage::page_shell_without("footer");
        assert!(stage.query("footer").is_none());
        assert!(stage.query(".about-section").is_some());
        assert_eq!(stage.writes(), 0);
    }

    #[test]
    fn text_content_is_stored_verbatim_and_replaces_children() {
        let stage = MemoryStage::page_shell();
        let about = stage.query(".about-section").unwrap();
        let child = stage.create_element("span").unwrap();
        stage.append_child(&about, &child).unwrap();
        stage.set_text_content(&about, "<em>hull</em> & more");
        assert_eq!(stage.text(about), "<em>hull</em> & more");
        assert!(stage.children(about).is_empty());
        assert!(stage.query("em").is_none());
    }

    #[test]
    fn style_properties_are_independent() {
        let stage = MemoryStage::page_shell();
        let about = stage.query(".about-section").unwrap();
        stage.set_style(&about, "opacity", "0").unwrap();
        stage.set_style(&about, "transform", "translateY(50px)").unwrap();
        stage.set_style(&about, "opacity", "1").unwrap();
        assert_eq!(stage.style(about, "opacity").as_deref(), Some("1"));
        assert_eq!(stage.style(about, "transform").as_deref(), Some("translateY(50px)"));
    }
}
