use tracing::{debug, info, trace};

use crate::{
    host::{Host, PageChange},
    input::{Input, InputKind, Outcome},
    state::{Attribute, PaginationState},
    view::ViewTree,
};

/// Whether control is attached to the host tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Detached,
    Attached,
}

/// Listeners installed for one attach cycle
struct Listeners<L> {
    click: L,
    key: L,
}

/// Pagination control: state, its current view and host glue.
///
/// Every mutation is handled synchronously: state is updated,
/// view is rebuilt and rendered, then at most one [PageChange] is emitted.
pub struct Pagination<H: Host> {
    state: PaginationState,
    view: ViewTree,
    host: H,
    listeners: Option<Listeners<H::Listener>>,
    /// Move focus to the tab stop after next render
    pending_focus: bool,
}

impl<H: Host> Pagination<H> {
    /// Create detached control
    pub fn new(host: H, state: PaginationState) -> Self {
        let view = ViewTree::of(&state);
        Self {
            state,
            view,
            host,
            listeners: None,
            pending_focus: false,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Last built view
    pub fn view(&self) -> &ViewTree {
        &self.view
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn phase(&self) -> Phase {
        match self.listeners {
            Some(_) => Phase::Attached,
            None => Phase::Detached,
        }
    }

    pub fn total(&self) -> u32 {
        self.state.total()
    }

    pub fn page_size(&self) -> u32 {
        self.state.page_size()
    }

    pub fn current(&self) -> u32 {
        self.state.current()
    }

    pub fn total_pages(&self) -> u32 {
        self.state.total_pages()
    }

    /// Install listeners, if not yet, and render
    pub fn attach(&mut self) {
        if self.listeners.is_none() {
            let click = self.host.listen(InputKind::Click);
            let key = self.host.listen(InputKind::Key);
            self.listeners = Some(Listeners { click, key });
            debug!("installed input listeners");
        } else {
            trace!("already attached");
        }
        self.host.render(&self.view);
    }

    /// Remove listeners. State is kept.
    pub fn detach(&mut self) {
        if let Some(Listeners { click, key }) = self.listeners.take() {
            self.host.unlisten(click);
            self.host.unlisten(key);
            debug!("removed input listeners");
        }
    }

    /// External attribute write
    pub fn set_attribute(&mut self, attr: Attribute, value: impl Into<String>) {
        let old = self.state.store(attr, Some(value.into()));
        self.attribute_changed(attr, old);
    }

    /// External attribute removal
    pub fn remove_attribute(&mut self, attr: Attribute) {
        let old = self.state.store(attr, None);
        self.attribute_changed(attr, old);
    }

    /// Select page. Goes through the attribute channel,
    /// so writing current value again is a no-op.
    pub fn set_current(&mut self, page: u32) {
        let old = self.state.set_current(page);
        self.attribute_changed(Attribute::Current, old);
    }

    /// Translate user input into a page change
    pub fn handle(&mut self, input: Input) -> Outcome {
        if self.phase() == Phase::Detached {
            trace!(?input, "input while detached");
            return Outcome::Ignored;
        }

        match input {
            Input::Click(target) => {
                match target.page {
                    Some(page) if !target.disabled => self.user_select(page),
                    _ => trace!(?target, "inert click"),
                }
                Outcome::Ignored
            }
            Input::Key(press) => {
                match press.target(self.current(), self.total_pages()) {
                    Some(Some(page)) => self.user_select(page),
                    Some(None) => trace!(key = %press.key, "key target out of range"),
                    None => {}
                }
                press.outcome()
            }
        }
    }

    /// User initiated change, focus follows the new tab stop
    fn user_select(&mut self, page: u32) {
        self.pending_focus = true;
        self.set_current(page);
        self.pending_focus = false;
    }

    fn attribute_changed(&mut self, attr: Attribute, old: Option<String>) {
        let new = self.state.attribute(attr);
        if old.as_deref() == new {
            trace!(%attr, value = new, "attribute unchanged");
            return;
        }
        debug!(%attr, old = old.as_deref(), new, "attribute changed");

        self.view = ViewTree::of(&self.state);

        if self.phase() == Phase::Detached {
            return;
        }

        self.host.render(&self.view);
        if self.pending_focus {
            if let Some(idx) = self.view.tab_stop {
                self.host.focus(idx);
            }
        }

        if attr == Attribute::Current {
            let page = self.state.current();
            info!(page, "page changed");
            self.host.dispatch(PageChange { page });
        }
    }
}
