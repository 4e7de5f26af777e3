use std::{fmt, str::FromStr};

use enum_iterator::Sequence;
use once_cell::sync::Lazy;
use regex::Regex;

/// Page size used when attribute is absent, invalid or zero
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page selected when attribute is absent or invalid
pub const DEFAULT_CURRENT: u32 = 1;

/// Leading integer of an attribute value, `parseInt` style
static LEADING_INT: Lazy<Regex> = Lazy::new(||
    Regex::new(r"^\s*([+-]?[0-9]+)").unwrap()
);

/// Observed attribute of the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Attribute {
    Total,
    PageSize,
    Current,
}

impl Attribute {
    /// External attribute key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::PageSize => "page-size",
            Self::Current => "current",
        }
    }

    /// All observed attributes
    pub fn observed() -> impl Iterator<Item = Self> {
        enum_iterator::all::<Self>()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown attribute key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAttribute(pub String);

impl fmt::Display for UnknownAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown attribute `{}`", self.0)
    }
}

impl std::error::Error for UnknownAttribute {}

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::observed()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| UnknownAttribute(s.to_owned()))
    }
}

/// Parse leading integer, ignoring trailing garbage (`"100abc"` -> 100).
/// Negative values yield `None`, huge ones saturate at `u32::MAX`.
fn parse_leading(raw: &str) -> Option<u32> {
    let caps = LEADING_INT.captures(raw)?;
    let number = &caps[1];
    if number.starts_with('-') {
        return None;
    }
    // Only digits are left, so parsing can fail on overflow alone
    Some(number.trim_start_matches('+').parse::<u32>().unwrap_or(u32::MAX))
}

/// Parse whole trimmed value as integral number (`"7.0"` -> 7, `"3abc"` -> `None`)
fn parse_whole(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<u32>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    (v.is_finite() && v.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&v))
        .then_some(v as u32)
}

/// Parsed `total`: absent or invalid is 0
fn parse_total(raw: Option<&str>) -> u32 {
    raw.and_then(parse_leading).unwrap_or(0)
}

/// Parsed `page-size`: absent, invalid or zero is [DEFAULT_PAGE_SIZE]
fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(parse_leading)
        .filter(|&v| v != 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Parsed `current`: absent, invalid or zero is [DEFAULT_CURRENT]
fn parse_current(raw: Option<&str>) -> u32 {
    raw.and_then(parse_whole)
        .filter(|&v| v != 0)
        .unwrap_or(DEFAULT_CURRENT)
}

/// Attribute store of the control with parsed and derived values.
///
/// Raw strings are kept as written, so old/new comparison stays exact,
/// parsed values are refreshed on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    raw_total: Option<String>,
    raw_page_size: Option<String>,
    raw_current: Option<String>,

    total: u32,
    page_size: u32,
    current: u32,
    total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl PaginationState {
    /// Create state from raw attribute values
    pub fn new(
        total: Option<&str>,
        page_size: Option<&str>,
        current: Option<&str>,
    ) -> Self {
        let mut state = Self {
            raw_total: total.map(str::to_owned),
            raw_page_size: page_size.map(str::to_owned),
            raw_current: current.map(str::to_owned),
            total: 0,
            page_size: DEFAULT_PAGE_SIZE,
            current: DEFAULT_CURRENT,
            total_pages: 0,
        };
        state.reparse();
        state
    }

    fn reparse(&mut self) {
        self.total = parse_total(self.raw_total.as_deref());
        self.page_size = parse_page_size(self.raw_page_size.as_deref());
        self.current = parse_current(self.raw_current.as_deref());
        self.total_pages = self.total.div_ceil(self.page_size);
    }

    fn slot(&mut self, attr: Attribute) -> &mut Option<String> {
        match attr {
            Attribute::Total => &mut self.raw_total,
            Attribute::PageSize => &mut self.raw_page_size,
            Attribute::Current => &mut self.raw_current,
        }
    }

    /// Raw stored value of attribute
    pub fn attribute(&self, attr: Attribute) -> Option<&str> {
        match attr {
            Attribute::Total => self.raw_total.as_deref(),
            Attribute::PageSize => self.raw_page_size.as_deref(),
            Attribute::Current => self.raw_current.as_deref(),
        }
    }

    /// Write or remove (`None`) raw attribute value.
    /// Returns previous raw value.
    pub fn store(&mut self, attr: Attribute, value: Option<String>) -> Option<String> {
        let old = std::mem::replace(self.slot(attr), value);
        self.reparse();
        old
    }

    /// Write page number to `current` attribute.
    /// Doesn't check whether value actually changed.
    pub fn set_current(&mut self, page: u32) -> Option<String> {
        self.store(Attribute::Current, Some(page.to_string()))
    }

    /// Total item count
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Items on a single page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Selected page, not clamped to `total_pages`
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Count of pages, 0 for empty set
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }
}
