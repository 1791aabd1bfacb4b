//! WebStage - `Stage` over the live browser document

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

use super::{SVG_NS, Stage};
use crate::error::MountError;

fn dom_error(value: JsValue) -> MountError {
    MountError::Dom(format!("{value:?}"))
}

pub struct WebStage {
    document: Document,
}

impl WebStage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Stage over `window.document`
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }

    fn style_of(node: &Element) -> Option<CssStyleDeclaration> {
        if let Some(html) = node.dyn_ref::<HtmlElement>() {
            return Some(html.style());
        }
        node.dyn_ref::<SvgElement>().map(|svg| svg.style())
    }
}

impl Stage for WebStage {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn create_element(&self, tag: &str) -> Result<Element, MountError> {
        self.document.create_element(tag).map_err(dom_error)
    }

    fn create_svg_element(&self, tag: &str) -> Result<Element, MountError> {
        self.document.create_element_ns(Some(SVG_NS), tag).map_err(dom_error)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), MountError> {
        parent.append_child(child).map(|_| ()).map_err(dom_error)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), MountError> {
        node.set_attribute(name, value).map_err(dom_error)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), MountError> {
        let style = Self::style_of(node)
            .ok_or_else(|| MountError::Dom(format!("<{}> has no inline style", node.tag_name())))?;
        style.set_property(property, value).map_err(dom_error)
    }

    fn set_text_content(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }
}
