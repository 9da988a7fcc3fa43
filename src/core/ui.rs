//! UI traits - abstractions over the page the HUD renders into
//!
//! `UiRegion` is an opaque handle to one node of the page and `Scheduler`
//! runs delayed work on the page's event loop. The browser build implements
//! both on top of the DOM; the headless document and `TimerQueue` implement
//! them natively so the whole render path is testable on any platform.

use std::rc::Rc;
use std::time::Duration;

// =============================================================================
// NODE SPECS
// =============================================================================

/// Description of a node to create under a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSpec {
    Element {
        tag: &'static str,
        class: Option<String>,
        children: Vec<NodeSpec>,
    },
    Text(String),
}

impl NodeSpec {
    /// Start an element with no class and no children
    pub fn element(tag: &'static str) -> Self {
        NodeSpec::Element {
            tag,
            class: None,
            children: Vec::new(),
        }
    }

    /// A `<span class="..">text</span>`
    pub fn span(class: &str, text: impl Into<String>) -> Self {
        NodeSpec::element("span")
            .with_class(class)
            .with_child(NodeSpec::Text(text.into()))
    }

    pub fn with_class(mut self, value: &str) -> Self {
        if let NodeSpec::Element { class, .. } = &mut self {
            *class = Some(value.to_string());
        }
        self
    }

    pub fn with_child(mut self, child: NodeSpec) -> Self {
        if let NodeSpec::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(NodeSpec::Text(text.into()))
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            NodeSpec::Text(text) => text.clone(),
            NodeSpec::Element { children, .. } => {
                children.iter().map(NodeSpec::text_content).collect()
            }
        }
    }
}

// =============================================================================
// UI REGION
// =============================================================================

/// Handle to one node of the page
///
/// Handles are cheap to clone and all clones refer to the same node.
/// Mutations cannot fail from the caller's point of view: a backend that
/// hits an error logs it and leaves the node as it was.
pub trait UiRegion: Clone {
    /// Show (`display: block`) or hide (`display: none`) the node
    fn set_visible(&self, visible: bool);

    /// Replace all content with a single text node
    fn set_text(&self, text: &str);

    /// Overwrite the whole class attribute
    fn set_class_name(&self, class_name: &str);

    /// Add one class, keeping the others
    fn add_class(&self, class: &str);

    /// Set the inline CSS width
    fn set_width(&self, width: &str);

    /// Drop all children and create `children` in order
    fn replace_children(&self, children: &[NodeSpec]);

    /// Create `child` as the last child and return a handle to it
    fn append_child(&self, child: &NodeSpec) -> Self;

    /// Detach the node from its parent. No-op when already detached.
    fn remove(&self);
}

// =============================================================================
// SCHEDULER
// =============================================================================

/// Handle to a delayed task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    pub id: u64,
    pub delay: Duration,
}

/// Run work later on the page's event loop
pub trait Scheduler {
    /// Run `task` once after `delay`
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;

    /// Drop a task that has not run yet. Returns false if it already ran.
    fn cancel(&self, handle: TaskHandle) -> bool;
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        (**self).schedule(delay, task)
    }

    fn cancel(&self, handle: TaskHandle) -> bool {
        (**self).cancel(handle)
    }
}
