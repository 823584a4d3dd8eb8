//! Pagination math and the built-in pagers.
//!
//! Pagers build an element tree; any element carrying the [`PAGE_KEY`] data
//! entry is a page link, and clicking it through
//! [`Datagrid::click`](crate::Datagrid::click) moves the grid to that page.

use datagrid_dom::{Cursor, Element};
use serde_json::Value;

use crate::registry::PagerContext;

/// Data key holding the target page of a page link.
pub const PAGE_KEY: &str = "page";

/// Default half-width of the sliding window.
pub const DEFAULT_SLIDING_PAGES: u64 = 3;

/// Number of pages needed for `total` rows. A page size of 0 disables
/// paging (everything on one page).
pub fn last_page(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size)
}

/// Visible page range and neighbours for a windowed pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerLimits {
    pub min_page: u64,
    pub max_page: u64,
    pub prev_page: u64,
    pub next_page: u64,
}

impl PagerLimits {
    /// Sliding window of `pages` pages on each side of `page`, shifted to
    /// stay inside `1..=last_page` while showing `2 * pages + 1` pages when
    /// possible.
    pub fn sliding(page: u64, last_page: u64, pages: u64) -> Self {
        let signed = |n: u64| i64::try_from(n).unwrap_or(i64::MAX);
        let (p, last, w) = (signed(page), signed(last_page), signed(pages));
        let span = w.saturating_mul(2);
        let min_page = 1_i64.max(p.saturating_sub(w).min(last.saturating_sub(span)));
        let max_page = last.min(p.saturating_add(w).max(span.saturating_add(1)));

        Self {
            min_page: min_page as u64,
            max_page: max_page.max(0) as u64,
            prev_page: if page <= 1 { 1 } else { page - 1 },
            next_page: if page >= last_page { last_page } else { page + 1 },
        }
    }

    /// Computes limits for a behavior given either as a mode name
    /// (`"sliding"`) or as `{"sliding": {"pages": n}}`. Unknown modes yield
    /// `None`.
    pub fn compute(behavior: &Value, page: u64, last_page: u64) -> Option<Self> {
        let options = match behavior {
            Value::String(mode) if mode == "sliding" => None,
            Value::Object(map) => Some(map.get("sliding")?),
            _ => return None,
        };
        let pages = options
            .and_then(|o| o.get("pages"))
            .and_then(Value::as_u64)
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_SLIDING_PAGES);
        Some(Self::sliding(page, last_page, pages))
    }

    /// Pages inside the window.
    pub fn pages(&self) -> std::ops::RangeInclusive<u64> {
        self.min_page..=self.max_page
    }
}

/// A clickable element that moves the grid to `page`.
pub fn page_link(page: u64, label: impl Into<String>) -> Element {
    Element::span()
        .clickable(true)
        .cursor(Cursor::Pointer)
        .data(PAGE_KEY, page.to_string())
        .child(Element::text(label))
}

/// One link per page, `1..=last_page`, without windowing.
pub fn default_pager(ctx: &PagerContext<'_>, _args: &[Value]) -> Option<Element> {
    let links = (1..=ctx.last_page).map(|page| {
        let link = page_link(page, format!(" {page} "));
        if page == ctx.page { link.class("active") } else { link }
    });
    Some(Element::div().class("pager").children(links))
}

/// Previous link, a sliding window of page links, next link. The trailing
/// argument may carry `{"pages": n}`.
pub fn sliding_pager(ctx: &PagerContext<'_>, args: &[Value]) -> Option<Element> {
    let options = args.last().cloned().unwrap_or(Value::Null);
    let behavior = serde_json::json!({ "sliding": options });
    let limits = PagerLimits::compute(&behavior, ctx.page, ctx.last_page)?;

    let mut pager = Element::div().class("pager");
    pager.push(page_link(limits.prev_page, "«").disabled(ctx.page <= 1));
    for page in limits.pages() {
        let link = page_link(page, format!(" {page} "));
        pager.push(if page == ctx.page { link.class("active") } else { link });
    }
    pager.push(page_link(limits.next_page, "»").disabled(ctx.page >= ctx.last_page));
    Some(pager)
}
