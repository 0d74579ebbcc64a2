//! Page break planning
//!
//! Each label type has a packing rule: how many of its labels fit on one
//! letter page. Counters run per type across the whole fragment stream, so
//! two queued bin labels share one counter and a break may fall inside a
//! descriptor's expansion. No break is ever set on the last fragment of the
//! stream, which would only print a blank trailing page.

use std::collections::HashMap;

use shared::models::LabelType;

use crate::fragment::RenderedFragment;

/// How a label type fills printed pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packing {
    /// Fixed labels per page; break after every n-th fragment of the type
    PerPage(usize),
    /// Stack until the page overflows naturally; never forces a break
    Flow,
}

impl Packing {
    pub fn for_type(label_type: LabelType) -> Self {
        match label_type {
            LabelType::Notice => Packing::PerPage(1),
            LabelType::Bin | LabelType::Shoe => Packing::PerPage(2),
            LabelType::Shelf => Packing::Flow,
        }
    }

    fn breaks_after(self, seen: usize) -> bool {
        match self {
            Packing::PerPage(per_page) => per_page > 0 && seen % per_page == 0,
            Packing::Flow => false,
        }
    }
}

/// Set `forced_break_after` on every fragment, in stream order.
///
/// Any previous annotation is overwritten, so planning is idempotent.
pub fn plan(mut fragments: Vec<RenderedFragment>) -> Vec<RenderedFragment> {
    let last = fragments.len().saturating_sub(1);
    let mut seen: HashMap<LabelType, usize> = HashMap::new();

    for (index, fragment) in fragments.iter_mut().enumerate() {
        let count = seen.entry(fragment.label_type).or_default();
        *count += 1;

        fragment.forced_break_after =
            index != last && Packing::for_type(fragment.label_type).breaks_after(*count);
    }

    fragments
}
