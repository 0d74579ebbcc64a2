//! Print composition: queue snapshot → annotated fragment stream

use shared::models::LabelDescriptor;
use tracing::instrument;

use crate::error::PrintResult;
use crate::fragment::RenderedFragment;
use crate::planner::plan;
use crate::renderer::render;

/// Render every descriptor in queue order and plan page breaks.
///
/// All or nothing: the first invalid descriptor fails the whole pass.
/// Pure and idempotent for an unchanged snapshot.
#[instrument(skip_all, fields(entries = queue.len()))]
pub fn compose(queue: &[LabelDescriptor]) -> PrintResult<Vec<RenderedFragment>> {
    let mut fragments = Vec::new();
    for descriptor in queue {
        fragments.extend(render(descriptor)?);
    }

    let fragments = plan(fragments);
    tracing::debug!(
        fragments = fragments.len(),
        forced_breaks = fragments.iter().filter(|f| f.forced_break_after).count(),
        "Print job composed"
    );
    Ok(fragments)
}
