//! Print document builder
//!
//! Turns a composed fragment stream into a self-contained HTML document
//! for the browser's print engine. Forced breaks become
//! `page-break-after: always`; everything else flows.

use std::fmt::Write as _;

use shared::models::LabelType;

use crate::fragment::{FragmentContent, RenderedFragment};

/// Label border and accent color
pub const ACCENT_COLOR: &str = "#F052A1";

/// Printed page size and margin, in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_in: f32,
    pub height_in: f32,
    pub margin_in: f32,
}

impl PageGeometry {
    /// US letter, 0.25in margin
    pub const LETTER: PageGeometry = PageGeometry {
        width_in: 8.5,
        height_in: 11.0,
        margin_in: 0.25,
    };
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::LETTER
    }
}

/// Fixed physical shape of one label type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelGeometry {
    pub width_in: f32,
    pub height_in: f32,
    pub border_pt: f32,
    /// Vertical outer margin (inches), horizontally centered
    pub margin_in: f32,
    /// Inner padding (inches) between page edge and border
    pub padding_in: f32,
}

impl LabelGeometry {
    pub fn for_type(label_type: LabelType) -> Self {
        match label_type {
            LabelType::Shelf => LabelGeometry {
                width_in: 10.0,
                height_in: 1.0,
                border_pt: 2.0,
                margin_in: 0.25,
                padding_in: 0.0,
            },
            LabelType::Bin | LabelType::Shoe => LabelGeometry {
                width_in: 5.0,
                height_in: 5.0,
                border_pt: 3.0,
                margin_in: 0.5,
                padding_in: 0.0,
            },
            LabelType::Notice => LabelGeometry {
                width_in: 8.5,
                height_in: 11.0,
                border_pt: 5.0,
                margin_in: 0.0,
                padding_in: 0.5,
            },
        }
    }

    fn css(&self, label_type: LabelType) -> String {
        let class = css_class(label_type);
        match label_type {
            // Notice border sits on an inner box inside the padding
            LabelType::Notice => format!(
                ".{class} {{ width: {}in; height: {}in; padding: {}in; box-sizing: border-box; }}\n\
                 .{class} .notice-border {{ width: 100%; height: 100%; border: {}pt solid {ACCENT_COLOR}; \
                 display: flex; align-items: center; justify-content: center; box-sizing: border-box; padding: 0.5in; }}\n",
                self.width_in, self.height_in, self.padding_in, self.border_pt
            ),
            _ => format!(
                ".{class} {{ width: {}in; height: {}in; border: {}pt solid {ACCENT_COLOR}; \
                 margin: {}in auto; box-sizing: border-box; }}\n",
                self.width_in, self.height_in, self.border_pt, self.margin_in
            ),
        }
    }
}

fn css_class(label_type: LabelType) -> &'static str {
    match label_type {
        LabelType::Shelf => "shelf-label",
        LabelType::Bin => "bin-label",
        LabelType::Shoe => "shoe-label",
        LabelType::Notice => "notice-label",
    }
}

const BASE_CSS: &str = "\
body { margin: 0; font-family: Arial, Helvetica, sans-serif; background: white; }
.label { background: white; font-weight: bold; color: black; }
.shelf-label { display: flex; align-items: center; justify-content: center; gap: 0.3in; padding: 0 20px; }
.shelf-size { color: #F052A1; }
.bin-label { display: flex; align-items: center; justify-content: center; padding: 20px; text-align: center; line-height: 1.2; word-break: break-word; }
.shoe-label { display: flex; flex-direction: column; }
.shoe-row { flex: 1; display: flex; align-items: center; justify-content: center; padding: 10px; text-align: center; }
.shoe-row + .shoe-row { border-top: 1pt solid black; }
.shoe-size-range { color: #F052A1; }
.notice-text { text-align: center; line-height: 1.2; word-break: break-word; }
";

/// HTML print document builder
///
/// ```ignore
/// let fragments = compose(&store.snapshot())?;
/// let mut builder = HtmlPrintBuilder::new(PageGeometry::LETTER);
/// builder.fragments(&fragments);
/// let html = builder.build();
/// ```
pub struct HtmlPrintBuilder {
    buf: String,
}

impl HtmlPrintBuilder {
    pub fn new(page: PageGeometry) -> Self {
        let mut buf = String::with_capacity(8192);
        buf.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        buf.push_str("<title>Print Queue</title>\n<style>\n");
        let _ = writeln!(
            buf,
            "@page {{ size: {}in {}in; margin: {}in; }}",
            page.width_in, page.height_in, page.margin_in
        );
        buf.push_str(BASE_CSS);
        for label_type in LabelType::ALL {
            buf.push_str(&LabelGeometry::for_type(label_type).css(label_type));
        }
        buf.push_str("</style>\n</head>\n<body>\n");
        Self { buf }
    }

    /// Append one fragment
    pub fn fragment(&mut self, fragment: &RenderedFragment) -> &mut Self {
        let page_break = if fragment.forced_break_after {
            "always"
        } else {
            "auto"
        };
        let _ = write!(
            self.buf,
            "<div class=\"label {}\" data-key=\"{}\" style=\"page-break-after: {page_break}; font-size: {}pt\">",
            css_class(fragment.label_type),
            escape_html(&fragment.key),
            fragment.content.font_points()
        );

        match &fragment.content {
            FragmentContent::Shelf { size, category } => {
                let _ = write!(
                    self.buf,
                    "<span class=\"shelf-size\">Size: {}</span><span class=\"shelf-category\">{}</span>",
                    escape_html(size),
                    escape_html(category)
                );
            }
            FragmentContent::Bin { text } => {
                let _ = write!(self.buf, "<span class=\"bin-text\">{}</span>", escape_html(text));
            }
            FragmentContent::Shoe {
                season,
                size_range,
                category,
            } => {
                let _ = write!(
                    self.buf,
                    "<div class=\"shoe-row shoe-season\">{}</div>\
                     <div class=\"shoe-row shoe-size-range\">{}</div>\
                     <div class=\"shoe-row shoe-category\">{}</div>",
                    escape_html(season),
                    escape_html(size_range),
                    escape_html(category)
                );
            }
            FragmentContent::Notice { text, .. } => {
                let _ = write!(
                    self.buf,
                    "<div class=\"notice-border\"><span class=\"notice-text\">{}</span></div>",
                    escape_html(text)
                );
            }
        }

        self.buf.push_str("</div>\n");
        self
    }

    /// Append fragments in stream order
    pub fn fragments(&mut self, fragments: &[RenderedFragment]) -> &mut Self {
        for fragment in fragments {
            self.fragment(fragment);
        }
        self
    }

    /// Close the document and return it
    pub fn build(mut self) -> String {
        self.buf.push_str("</body>\n</html>\n");
        self.buf
    }
}

impl Default for HtmlPrintBuilder {
    fn default() -> Self {
        Self::new(PageGeometry::default())
    }
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
