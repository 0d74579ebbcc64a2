//! Label renderers
//!
//! One renderer per label type, selected by matching on the payload. Each
//! expands a descriptor into `quantity` identical fragments.

use shared::models::{BinLabel, LabelDescriptor, LabelPayload, NoticeLabel, ShelfLabel, ShoeLabel};

use crate::error::{PrintError, PrintResult};
use crate::font::FontSizeTier;
use crate::fragment::{
    CATEGORY_PLACEHOLDER, FragmentContent, LABEL_TEXT_PLACEHOLDER, NOTICE_TEXT_PLACEHOLDER,
    RenderedFragment,
};

/// Expand a descriptor into its physical label instances.
///
/// `quantity == 0` yields nothing. There is no upper cap here. A negative
/// quantity is rejected with [`PrintError::Validation`].
pub fn render(descriptor: &LabelDescriptor) -> PrintResult<Vec<RenderedFragment>> {
    let quantity = descriptor.quantity();
    let count = usize::try_from(quantity).map_err(|_| {
        PrintError::Validation(format!(
            "label {} has negative quantity {}",
            descriptor.id, quantity
        ))
    })?;

    let content = render_content(&descriptor.label);
    let label_type = descriptor.label_type();

    Ok((0..count)
        .map(|instance| RenderedFragment::new(descriptor.id, label_type, instance, content.clone()))
        .collect())
}

/// Display content for one instance of `label`
pub fn render_content(label: &LabelPayload) -> FragmentContent {
    match label {
        LabelPayload::Shelf(l) => render_shelf(l),
        LabelPayload::Bin(l) => render_bin(l),
        LabelPayload::Shoe(l) => render_shoe(l),
        LabelPayload::Notice(l) => render_notice(l),
    }
}

// Values outside the size catalog are printed as-is.
fn render_shelf(label: &ShelfLabel) -> FragmentContent {
    FragmentContent::Shelf {
        size: label.size.to_string(),
        category: or_placeholder(&label.category, CATEGORY_PLACEHOLDER),
    }
}

fn render_bin(label: &BinLabel) -> FragmentContent {
    FragmentContent::Bin {
        text: or_placeholder(&label.label_text, LABEL_TEXT_PLACEHOLDER),
    }
}

fn render_shoe(label: &ShoeLabel) -> FragmentContent {
    FragmentContent::Shoe {
        season: label.season.to_string(),
        size_range: label.size_range.to_string(),
        category: label.category.to_string(),
    }
}

// Tier comes from the real text, never the placeholder.
fn render_notice(label: &NoticeLabel) -> FragmentContent {
    FragmentContent::Notice {
        text: or_placeholder(&label.notice_text, NOTICE_TEXT_PLACEHOLDER),
        tier: FontSizeTier::resolve(&label.notice_text),
    }
}

fn or_placeholder(text: &str, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    }
}
