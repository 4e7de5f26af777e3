use std::fmt;

/// Kind of low level notification the control listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Click,
    Key,
}

impl InputKind {
    /// DOM event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Key => "keydown",
        }
    }
}

/// Data found on the clicked button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Page from the `data-target` marker
    pub page: Option<u32>,
    /// Native `disabled` or `aria-disabled="true"`
    pub disabled: bool,
}

impl ClickTarget {
    /// Read click target from button markers
    pub fn from_markers(data_target: Option<&str>, aria_disabled: Option<&str>, disabled: bool) -> Self {
        Self {
            page: data_target.and_then(|t| t.trim().parse().ok()),
            disabled: disabled || aria_disabled == Some("true"),
        }
    }

    /// Control bound to `page`
    pub fn page(page: u32) -> Self {
        Self { page: Some(page), disabled: false }
    }
}

/// Keys with navigation meaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Other(String),
}

impl From<&str> for Key {
    /// Map `KeyboardEvent.key` value
    fn from(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArrowLeft => f.write_str("ArrowLeft"),
            Self::ArrowRight => f.write_str("ArrowRight"),
            Self::Home => f.write_str("Home"),
            Self::End => f.write_str("End"),
            Self::Other(key) => f.write_str(key),
        }
    }
}

/// Key press inside the control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    /// Key press without modifiers
    pub fn plain(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            alt: false,
            ctrl: false,
            meta: false,
        }
    }

    pub fn has_modifiers(&self) -> bool {
        self.alt || self.ctrl || self.meta
    }

    /// Whether press is handled by the control instead of the host
    pub fn is_navigation(&self) -> bool {
        !self.has_modifiers() && !matches!(self.key, Key::Other(_))
    }

    /// Whether host must suppress its default action for the press.
    /// Known before the page changes, so listeners can decide synchronously.
    pub fn outcome(&self) -> Outcome {
        match self.is_navigation() {
            true => Outcome::Consumed,
            false => Outcome::Ignored,
        }
    }

    /// Page the key navigates to.
    /// `None` when key has no navigation meaning,
    /// `Some(None)` when target falls outside of the page set.
    pub fn target(&self, current: u32, total_pages: u32) -> Option<Option<u32>> {
        if !self.is_navigation() {
            return None;
        }

        let page = match self.key {
            Key::ArrowLeft => current.checked_sub(1),
            Key::ArrowRight => current.checked_add(1),
            Key::Home => Some(1),
            Key::End => Some(total_pages),
            Key::Other(_) => return None,
        };
        Some(page.filter(|p| (1..=total_pages).contains(p)))
    }
}

/// Raw user input delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Click(ClickTarget),
    Key(KeyPress),
}

/// Whether host should suppress its default action for an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Navigation key, default action must be prevented
    Consumed,
    /// Left to the host (Tab traversal, clicks)
    Ignored,
}
