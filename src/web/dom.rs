//! DOM-backed UI regions

use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use crate::core::constants::{DISPLAY_HIDDEN, DISPLAY_SHOWN};
use crate::core::ui::{NodeSpec, UiRegion};

/// Handle to a node of the NUI page.
///
/// `None` only for a toast whose creation failed; every call on it is a no-op.
#[derive(Debug, Clone)]
pub struct WebRegion {
    node: Option<Node>,
}

impl From<Element> for WebRegion {
    fn from(element: Element) -> Self {
        Self {
            node: Some(element.into()),
        }
    }
}

impl WebRegion {
    fn element(&self) -> Option<&Element> {
        self.node.as_ref()?.dyn_ref::<Element>()
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.node.as_ref().and_then(|n| n.dyn_ref::<HtmlElement>()) else {
            return;
        };
        if let Err(e) = html.style().set_property(property, value) {
            warn!(property, error = ?e, "[nui] Failed to set style");
        }
    }

    fn document(&self) -> Option<Document> {
        self.node.as_ref()?.owner_document()
    }

    fn append(&self, spec: &NodeSpec) -> Result<Node, JsValue> {
        let (Some(node), Some(document)) = (self.node.as_ref(), self.document()) else {
            return Err(JsValue::from_str("region has no document"));
        };
        let child = build(&document, spec)?;
        node.append_child(&child)
    }
}

fn build(document: &Document, spec: &NodeSpec) -> Result<Node, JsValue> {
    match spec {
        NodeSpec::Text(text) => Ok(document.create_text_node(text).into()),
        NodeSpec::Element {
            tag,
            class,
            children,
        } => {
            let element = document.create_element(tag)?;
            if let Some(class) = class {
                element.set_class_name(class);
            }
            for child in children {
                element.append_child(&build(document, child)?)?;
            }
            Ok(element.into())
        }
    }
}

impl UiRegion for WebRegion {
    fn set_visible(&self, visible: bool) {
        let display = if visible { DISPLAY_SHOWN } else { DISPLAY_HIDDEN };
        self.set_style("display", display);
    }

    fn set_text(&self, text: &str) {
        if let Some(node) = &self.node {
            node.set_text_content(Some(text));
        }
    }

    fn set_class_name(&self, class_name: &str) {
        if let Some(element) = self.element() {
            element.set_class_name(class_name);
        }
    }

    fn add_class(&self, class: &str) {
        if let Some(element) = self.element() {
            if let Err(e) = element.class_list().add_1(class) {
                warn!(class, error = ?e, "[nui] Failed to add class");
            }
        }
    }

    fn set_width(&self, width: &str) {
        self.set_style("width", width);
    }

    fn replace_children(&self, children: &[NodeSpec]) {
        let Some(node) = &self.node else {
            return;
        };
        node.set_text_content(None);
        for spec in children {
            if let Err(e) = self.append(spec) {
                warn!(error = ?e, "[nui] Failed to render list item");
            }
        }
    }

    fn append_child(&self, child: &NodeSpec) -> Self {
        match self.append(child) {
            Ok(node) => Self { node: Some(node) },
            Err(e) => {
                warn!(error = ?e, "[nui] Failed to append node");
                Self { node: None }
            }
        }
    }

    fn remove(&self) {
        let Some(node) = &self.node else {
            return;
        };
        // Already detached: nothing to do
        let Some(parent) = node.parent_node() else {
            return;
        };
        if let Err(e) = parent.remove_child(node) {
            warn!(error = ?e, "[nui] Failed to remove node");
        }
    }
}
