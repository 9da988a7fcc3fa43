//! Headless document - an in-memory node tree implementing `UiRegion`
//!
//! Mirrors the small part of the DOM the HUD touches: ids, class lists,
//! inline `display`/`width`, text nodes and parent/child links. The native
//! host renders into it, and tests inspect it after dispatching messages.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::constants::{DISPLAY_HIDDEN, DISPLAY_SHOWN};
use super::elements::ElementIds;
use super::ui::{NodeSpec, UiRegion};

const TEXT_TAG: &str = "#text";

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    display: Option<String>,
    width: Option<String>,
    /// Only set on text nodes
    text: String,
    children: Vec<Node>,
    parent: Weak<RefCell<NodeData>>,
    /// Bumped on every mutation of this node
    revision: u64,
}

/// Handle to a node of a headless document
#[derive(Debug, Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    fn new(tag: &str) -> Self {
        Node(Rc::new(RefCell::new(NodeData {
            tag: tag.to_string(),
            ..Default::default()
        })))
    }

    fn text_node(text: &str) -> Self {
        let node = Node::new(TEXT_TAG);
        node.0.borrow_mut().text = text.to_string();
        node
    }

    fn from_spec(spec: &NodeSpec) -> Self {
        match spec {
            NodeSpec::Text(text) => Node::text_node(text),
            NodeSpec::Element {
                tag,
                class,
                children,
            } => {
                let node = Node::new(tag);
                if let Some(class) = class {
                    node.0.borrow_mut().classes = split_classes(class);
                }
                for child in children {
                    node.push_child(Node::from_spec(child));
                }
                node
            }
        }
    }

    fn push_child(&self, child: Node) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
    }

    fn detach_children(&self) {
        let children = std::mem::take(&mut self.0.borrow_mut().children);
        for child in children {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    fn touch(&self) {
        self.0.borrow_mut().revision += 1;
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn is_text(&self) -> bool {
        self.0.borrow().tag == TEXT_TAG
    }

    /// The class attribute as the browser would serialize it
    pub fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    /// Inline `display` value, if ever set
    pub fn display(&self) -> Option<String> {
        self.0.borrow().display.clone()
    }

    /// Inline `width` value, if ever set
    pub fn width(&self) -> Option<String> {
        self.0.borrow().width.clone()
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let data = self.0.borrow();
        if data.tag == TEXT_TAG {
            return data.text.clone();
        }
        data.children.iter().map(Node::text_content).collect()
    }

    /// All child nodes, text nodes included
    pub fn child_nodes(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    /// Element children only
    pub fn children(&self) -> Vec<Node> {
        self.0
            .borrow()
            .children
            .iter()
            .filter(|c| !c.is_text())
            .cloned()
            .collect()
    }

    /// First descendant element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<Node> {
        for child in self.children() {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find_by_class(class) {
                return Some(found);
            }
        }
        None
    }

    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    pub fn is_attached(&self) -> bool {
        self.parent().is_some()
    }

    /// How many times this node itself was mutated
    pub fn revision(&self) -> u64 {
        self.0.borrow().revision
    }

    pub fn same_node(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn split_classes(class_name: &str) -> Vec<String> {
    class_name.split_whitespace().map(str::to_string).collect()
}

impl UiRegion for Node {
    fn set_visible(&self, visible: bool) {
        let display = if visible { DISPLAY_SHOWN } else { DISPLAY_HIDDEN };
        self.0.borrow_mut().display = Some(display.to_string());
        self.touch();
    }

    fn set_text(&self, text: &str) {
        self.detach_children();
        if !text.is_empty() {
            self.push_child(Node::text_node(text));
        }
        self.touch();
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.borrow_mut().classes = split_classes(class_name);
        self.touch();
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
        self.touch();
    }

    fn set_width(&self, width: &str) {
        self.0.borrow_mut().width = Some(width.to_string());
        self.touch();
    }

    fn replace_children(&self, children: &[NodeSpec]) {
        self.detach_children();
        for spec in children {
            self.push_child(Node::from_spec(spec));
        }
        self.touch();
    }

    fn append_child(&self, child: &NodeSpec) -> Self {
        let node = Node::from_spec(child);
        self.push_child(node.clone());
        self.touch();
        node
    }

    fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .0
            .borrow_mut()
            .children
            .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        parent.touch();
        self.0.borrow_mut().parent = Weak::new();
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// A headless page with a `<body>` root
#[derive(Debug, Clone)]
pub struct Document {
    body: Node,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Node::new("body"),
        }
    }

    /// The HUD page layout: every region the element cache looks up
    pub fn hud_page(ids: &ElementIds) -> Self {
        let doc = Document::new();
        let body = doc.body();

        let hud = doc.create_element(&body, "div", &ids.race_hud);
        let timer = doc.create_element(&hud, "div", &ids.timer);
        timer.set_class_name("timer-display");
        let checkpoints = doc.create_element(&hud, "div", "");
        doc.create_element(&checkpoints, "span", &ids.cp_current);
        doc.create_element(&checkpoints, "span", &ids.cp_total);
        let bar = doc.create_element(&hud, "div", "");
        doc.create_element(&bar, "div", &ids.progress_fill);

        let lobby = doc.create_element(&body, "div", &ids.lobby_panel);
        doc.create_element(&lobby, "div", &ids.lobby_timer);
        doc.create_element(&lobby, "ul", &ids.lobby_players);

        let leaderboard = doc.create_element(&body, "div", &ids.leaderboard);
        doc.create_element(&leaderboard, "ul", &ids.lb_list);

        doc.create_element(&body, "div", &ids.notifications);
        doc
    }

    pub fn body(&self) -> Node {
        self.body.clone()
    }

    /// Append a new element under `parent`; an empty `id` leaves it anonymous
    pub fn create_element(&self, parent: &Node, tag: &str, id: &str) -> Node {
        let node = Node::new(tag);
        if !id.is_empty() {
            node.0.borrow_mut().id = Some(id.to_string());
        }
        parent.push_child(node.clone());
        node
    }

    /// Depth-first search for the first element with `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<Node> {
        fn walk(node: &Node, id: &str) -> Option<Node> {
            if node.0.borrow().id.as_deref() == Some(id) {
                return Some(node.clone());
            }
            node.children().iter().find_map(|child| walk(child, id))
        }
        walk(&self.body, id)
    }
}
