use serde::{Serialize, Deserialize};

use crate::{input::InputKind, view::ViewTree};

/// Name of the change notification
pub const PAGE_CHANGE_EVENT: &str = "page-change";

/// Payload of the change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChange {
    /// Newly selected page
    pub page: u32,
}

/// Platform the control is embedded into.
///
/// Host owns the realized view and low level listeners,
/// the control only tells it what to do.
pub trait Host {
    /// Handle of an installed listener, removed with [Host::unlisten]
    type Listener;

    /// Start delivering notifications of given kind for the rendered subtree
    fn listen(&mut self, kind: InputKind) -> Self::Listener;

    /// Stop delivering notifications of an installed listener
    fn unlisten(&mut self, listener: Self::Listener);

    /// Realize view, replacing previous one
    fn render(&mut self, view: &ViewTree);

    /// Emit [PAGE_CHANGE_EVENT] to the host listeners
    fn dispatch(&mut self, event: PageChange);

    /// Move input focus to control with given index
    fn focus(&mut self, control: usize);
}
