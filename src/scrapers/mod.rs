//! Source-specific scraper adapters.
//!
//! Each adapter is an independent fetch → parse → shape pipeline over one
//! fixed listing URL, sharing only the [`crate::fetch`] boundary and the
//! tuple shapes in [`crate::models`]. There is no cross-adapter state; a
//! caller invokes whichever sources it wants and each call makes exactly
//! one outbound request.
//!
//! | Source | Module | Output | Failure mode |
//! |--------|--------|--------|--------------|
//! | Nikkei Medical | [`nikkei`] | 5-tuples | any malformed item fails the whole batch |
//! | Jiji Medical | [`jiji`] | 4-tuples | missing image tolerated, missing title/date/link fails the batch |
//!
//! Both adapters preserve the source page's document order (newest first
//! by the sites' own convention) and absolutize every href/src against
//! the site origin.

use scraper::ElementRef;

pub mod jiji;
pub mod nikkei;

/// First direct child element with the given tag name.
///
/// The listing markup nests the interesting anchor/image exactly one
/// level below its container; descendant selectors would also match
/// decorative links deeper in the tree.
pub(crate) fn first_direct_child<'a>(parent: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}
