//! # label-printer
//!
//! Print-queue core for the label designer: pure, synchronous, no I/O.
//!
//! ## Pipeline
//!
//! ```text
//! QueueStore ──snapshot──▶ render (per label type) ──▶ plan (page breaks) ──▶ HtmlPrintBuilder
//! ```
//!
//! - [`QueueStore`] owns the queued [`LabelDescriptor`]s and hands out ids
//! - [`render`] expands one descriptor into `quantity` fragments
//! - [`FontSizeTier::resolve`] sizes notice text by length
//! - [`plan`] marks forced page breaks from each type's [`Packing`] rule
//! - [`compose`] runs the whole pass over a queue snapshot
//! - [`HtmlPrintBuilder`] emits the letter-size print document
//!
//! ## Example
//!
//! ```ignore
//! use label_printer::{compose, HtmlPrintBuilder, PageGeometry, QueueStore};
//!
//! let mut store = QueueStore::new();
//! store.add(label);
//!
//! let fragments = compose(store.entries())?;
//! let mut builder = HtmlPrintBuilder::new(PageGeometry::LETTER);
//! builder.fragments(&fragments);
//! let html = builder.build();
//! ```
//!
//! [`LabelDescriptor`]: shared::models::LabelDescriptor

mod composer;
mod error;
mod font;
mod fragment;
mod html;
mod planner;
mod queue;
mod renderer;

// Re-exports
pub use composer::compose;
pub use error::{PrintError, PrintResult};
pub use font::FontSizeTier;
pub use fragment::{
    BIN_FONT_PT, CATEGORY_PLACEHOLDER, FragmentContent, LABEL_TEXT_PLACEHOLDER,
    NOTICE_TEXT_PLACEHOLDER, RenderedFragment, SHELF_FONT_PT, SHOE_FONT_PT,
};
pub use html::{ACCENT_COLOR, HtmlPrintBuilder, LabelGeometry, PageGeometry, escape_html};
pub use planner::{Packing, plan};
pub use queue::{QueueStore, QueueSummary};
pub use renderer::{render, render_content};
