use itertools::Itertools;

use crate::{state::PaginationState, window::PageWindow};

/// Accessible name of the navigation landmark
pub const NAV_LABEL: &str = "Pagination";

/// Role of a control in the pagination list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Arrow to page 1
    First,
    /// Ellipsis jumping three pages back
    BackJump,
    /// Direct page selector
    Page,
    /// Ellipsis jumping three pages forward
    ForwardJump,
    /// Arrow to the last page
    Last,
}

/// Single button of the rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    /// Visible content
    pub text: String,
    /// Accessible name, also used as tooltip
    pub label: String,
    /// Longer visually hidden description
    pub description: Option<String>,
    /// Page to switch to on activation.
    /// `None` for controls that can't be activated.
    pub target: Option<u32>,
    /// Marks the selected page (`aria-current="page"`)
    pub current: bool,
    /// Natively disabled, can't take focus
    pub disabled: bool,
    /// Inert for activation but still focusable
    pub inert: bool,
    /// 0 for the single tab stop, -1 otherwise
    pub tab_index: i32,
}

impl Control {
    fn arrow(kind: ControlKind, text: &str, page: u32, here: bool) -> Self {
        let label = if here {
            format!("Already on page {page}")
        } else {
            format!("Go to page {page}")
        };
        Self {
            kind,
            text: text.into(),
            label,
            description: None,
            target: (!here).then_some(page),
            current: false,
            disabled: here,
            inert: false,
            tab_index: -1,
        }
    }

    fn jump(kind: ControlKind, direction: &str, page: u32) -> Self {
        Self {
            kind,
            text: "…".into(),
            label: format!("Go to page {page}"),
            description: Some(format!("Jump {direction} three pages, to page {page}")),
            target: Some(page),
            current: false,
            disabled: false,
            inert: false,
            tab_index: -1,
        }
    }

    fn page(page: u32, current: bool) -> Self {
        let label = if current {
            format!("Current page, page {page}")
        } else {
            format!("Go to page {page}")
        };
        Self {
            kind: ControlKind::Page,
            text: page.to_string(),
            label,
            description: None,
            target: (!current).then_some(page),
            current,
            disabled: false,
            inert: false,
            tab_index: -1,
        }
    }

    /// Whether assistive technology should treat control as inert
    pub fn aria_disabled(&self) -> bool {
        self.disabled || self.current || self.inert
    }

    /// Whether activation changes the page
    pub fn is_interactive(&self) -> bool {
        !self.aria_disabled() && self.target.is_some()
    }

    pub fn is_tab_stop(&self) -> bool {
        self.tab_index == 0
    }
}

/// Abstract description of the rendered control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    /// Landmark label
    pub label: &'static str,
    /// Ordered list content
    pub controls: Vec<Control>,
    /// Live status line
    pub status: String,
    /// Index of the control reachable with Tab
    pub tab_stop: Option<usize>,
}

impl ViewTree {
    /// Map state and its window to a view
    pub fn build(state: &PaginationState, window: &PageWindow) -> Self {
        let current = state.current();
        let total_pages = state.total_pages();
        // Empty set navigates like a single page
        let last_page = total_pages.max(1);

        let mut last = Control::arrow(ControlKind::Last, "→", last_page, current == last_page);
        if total_pages == 0 && last.disabled {
            // Empty set still needs one control reachable with Tab
            last.disabled = false;
            last.inert = true;
        }

        let controls = std::iter::once(Control::arrow(ControlKind::First, "←", 1, current == 1))
            .chain(window.back_jump.map(|page| Control::jump(ControlKind::BackJump, "back", page)))
            .chain(window.pages.clone().map(|page| Control::page(page, page == current)))
            .chain(window.forward_jump.map(|page| Control::jump(ControlKind::ForwardJump, "forward", page)))
            .chain(Some(last))
            .collect();

        let status = match total_pages {
            0 => "No pages".to_string(),
            n => format!("Page {current} of {n}"),
        };

        let mut view = Self {
            label: NAV_LABEL,
            controls,
            status,
            tab_stop: None,
        };
        view.refresh_tab_stop();
        view
    }

    /// Build view of the state with its own window
    pub fn of(state: &PaginationState) -> Self {
        let window = PageWindow::compute(state.current(), state.total_pages());
        Self::build(state, &window)
    }

    /// Keep exactly one control reachable with Tab:
    /// the current page, else first enabled control
    fn refresh_tab_stop(&mut self) {
        let stop = self.controls
            .iter()
            .find_position(|c| c.current)
            .or_else(|| self.controls.iter().find_position(|c| !c.disabled))
            .map(|(idx, _)| idx);

        for (idx, control) in self.controls.iter_mut().enumerate() {
            control.tab_index = if Some(idx) == stop { 0 } else { -1 };
        }
        self.tab_stop = stop;
    }

    /// Control marked as current page
    pub fn current_control(&self) -> Option<&Control> {
        self.controls.iter().find(|c| c.current)
    }

    /// Controls of given kind, in order
    pub fn controls_of(&self, kind: ControlKind) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(move |c| c.kind == kind)
    }

    /// First control of given kind
    pub fn control(&self, kind: ControlKind) -> Option<&Control> {
        self.controls_of(kind).next()
    }

    /// Page selector showing `page`
    pub fn page_control(&self, page: u32) -> Option<&Control> {
        self.controls_of(ControlKind::Page)
            .find(|c| c.text == page.to_string())
    }
}
