//! Sheet rendering: turns paginated blocks into physical A4 sheets.
//!
//! Every call builds a fresh tree; nothing from a previous presentation is
//! reused. The CSS is generated from the same `StyleSheet` and `PageGeometry`
//! the measurer read, so the heights it computed are the heights the browser
//! (or PDF renderer) lays out.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::block::{BlockKind, BoxStyle, MeasuredBlock, TextStyle};
use crate::layout::geometry::PageGeometry;
use crate::layout::paginate::Page;
use crate::layout::templates::StyleSheet;
use crate::models::document::TemplateId;

/// Where the sheets are going to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentMode {
    /// Stacked sheets with spacing and drop shadows for on-screen preview.
    #[default]
    Screen,
    /// One sheet per printed page, no chrome.
    Print,
}

/// Summary of one emitted sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub number: usize,
    pub height_px: f32,
    pub block_keys: Vec<String>,
}

/// A ready-to-insert page tree plus the CSS that sizes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub template_id: TemplateId,
    pub mode: PresentMode,
    pub css: String,
    pub html: String,
    pub pages: Vec<PageSummary>,
}

impl Presentation {
    /// Wraps the sheets in a standalone HTML document, as sent to the PDF renderer.
    pub fn to_document(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n\
             <link rel=\"stylesheet\" href=\"{FONTS_URL}\">\n\
             <style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            tera::escape_html(title),
            self.css,
            self.html
        )
    }
}

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=EB+Garamond:wght@400;700\
&family=Inter:wght@400;700&family=Lato:wght@400;700&display=swap";

/// Places each page's blocks, in order, on its own sheet.
///
/// Zero pages still produce one blank sheet so the preview never collapses.
pub fn present(
    pages: &[Page<MeasuredBlock>],
    template: TemplateId,
    sheet: &StyleSheet,
    geometry: &PageGeometry,
    mode: PresentMode,
) -> Presentation {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="cv-root cv-template-{}" data-mode="{}">"#,
        template.as_str(),
        mode.as_str()
    );

    if pages.is_empty() {
        html.push_str(r#"<section class="cv-page" data-page="1"></section>"#);
    }
    for (index, page) in pages.iter().enumerate() {
        let _ = write!(html, r#"<section class="cv-page" data-page="{}">"#, index + 1);
        for measured in &page.blocks {
            html.push_str(&measured.block.markup);
        }
        html.push_str("</section>");
    }
    html.push_str("</div>");

    let summaries: Vec<PageSummary> = pages
        .iter()
        .enumerate()
        .map(|(index, page)| PageSummary {
            number: index + 1,
            height_px: page.height_px,
            block_keys: page.blocks.iter().map(|m| m.block.key.clone()).collect(),
        })
        .collect();

    debug!(
        template = template.as_str(),
        mode = mode.as_str(),
        pages = summaries.len(),
        "Presented pages"
    );

    Presentation {
        template_id: template,
        mode,
        css: stylesheet_css(sheet, geometry, mode),
        html,
        pages: summaries,
    }
}

impl PresentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentMode::Screen => "screen",
            PresentMode::Print => "print",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CSS generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates the sheet CSS. Sheets grow past A4 rather than clip a block taller
/// than the page. Every length that affects a block's height comes
/// from `sheet` or `geometry`; `decor_css` is appended last and only paints.
pub fn stylesheet_css(sheet: &StyleSheet, geometry: &PageGeometry, mode: PresentMode) -> String {
    let mut css = String::new();

    let _ = write!(
        css,
        ".cv-root{{font-family:{};color:#111827;-webkit-print-color-adjust:exact;print-color-adjust:exact}}",
        sheet.font.css_stack()
    );
    let _ = write!(
        css,
        ".cv-root *{{box-sizing:border-box}}\
         .cv-root h2,.cv-root p,.cv-root ul,.cv-root li,.cv-root div{{margin:0;padding:0}}\
         .cv-root a{{color:inherit;text-decoration:none}}\
         .cv-page{{position:relative;width:{}mm;min-height:{}mm;background:#fff}}",
        geometry.width_mm, geometry.height_mm
    );

    match mode {
        PresentMode::Screen => css.push_str(
            ".cv-root{background:#e5e7eb;padding:32px 0}\
             .cv-page{margin:0 auto 32px;box-shadow:0 4px 12px rgba(0,0,0,0.15)}",
        ),
        PresentMode::Print => css.push_str(
            "@page{size:A4;margin:0}\
             html,body{margin:0;padding:0}\
             .cv-page{margin:0;break-after:page;page-break-after:always}\
             .cv-page:last-child{break-after:auto;page-break-after:auto}",
        ),
    }

    // Typography. Line heights are emitted in px, exactly as measured.
    for (class, style) in [
        ("t-name", sheet.text.name),
        ("t-job-title", sheet.text.job_title),
        ("t-contact", sheet.text.contact),
        ("t-heading", sheet.text.heading),
        ("t-entry-title", sheet.text.entry_title),
        ("t-entry-meta", sheet.text.entry_meta),
        ("t-body", sheet.text.body),
        ("t-small", sheet.text.small),
    ] {
        push_text_rule(&mut css, class, &style);
    }

    // Block boxes. flow-root keeps child margins inside the box.
    css.push_str(".cv-root .cv-block{display:flow-root}");
    for kind in [
        BlockKind::Header,
        BlockKind::Summary,
        BlockKind::Heading,
        BlockKind::Entry,
        BlockKind::Trailer,
    ] {
        push_box_rule(&mut css, kind.css_class(), &sheet.box_for(kind));
    }

    let photo = sheet.photo;
    let _ = write!(
        css,
        ".cv-root .b-header{{display:flex;align-items:flex-start;gap:{}px}}\
         .cv-root .hdr-text{{flex:1 1 auto;min-width:0}}\
         .cv-root .photo{{flex:none;display:block;width:{}px;height:{}px;object-fit:cover}}",
        px(photo.gap_px),
        px(photo.width_px),
        px(photo.height_px)
    );
    let _ = write!(
        css,
        ".cv-root .gap{{margin-bottom:{}px}}\
         .cv-root .gap-label{{margin-bottom:{}px}}\
         .cv-root ul{{padding-left:{}px;list-style:disc outside}}\
         .cv-root .t-entry-title{{display:flex;justify-content:space-between;gap:8px}}\
         .cv-root .t-contact span{{margin-right:16px}}\
         .cv-root .dates{{flex:none;font-weight:400}}",
        px(sheet.row_gap_px),
        px(sheet.label_gap_px),
        px(sheet.bullet_indent_px)
    );

    css.push_str(sheet.decor_css);
    css
}

fn push_text_rule(css: &mut String, class: &str, style: &TextStyle) {
    let _ = write!(
        css,
        ".cv-root .{class}{{font-size:{}px;line-height:{}px;font-weight:{}}}",
        px(style.size_px),
        px(style.line_px()),
        if style.bold { 700 } else { 400 }
    );
}

fn push_box_rule(css: &mut String, class: &str, b: &BoxStyle) {
    let _ = write!(
        css,
        ".cv-root .{class}{{padding:{}px {}px {}px {}px;margin:0 0 {}px 0}}",
        px(b.pad_top),
        px(b.inset_right),
        px(b.pad_bottom),
        px(b.inset_left),
        px(b.margin_bottom)
    );
}

/// Formats a pixel length with at most three decimals and no trailing zeros.
fn px(value: f32) -> String {
    let s = format!("{value:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::block::{BlockLayout, ContentBlock};
    use crate::layout::paginate::paginate;
    use crate::layout::templates::renderer_for;

    fn measured(key: &str, height_px: f32) -> MeasuredBlock {
        MeasuredBlock {
            block: ContentBlock {
                key: key.to_string(),
                kind: BlockKind::Entry,
                markup: format!(r#"<div class="cv-block b-entry" data-key="{key}"></div>"#),
                layout: BlockLayout::new(BoxStyle::new(0.0, 0.0, 0.0, 0.0)),
            },
            height_px,
            line_count: 1,
        }
    }

    fn present_minimal(pages: &[Page<MeasuredBlock>], mode: PresentMode) -> Presentation {
        let sheet = renderer_for(TemplateId::Minimal).sheet();
        present(pages, TemplateId::Minimal, sheet, &PageGeometry::default(), mode)
    }

    #[test]
    fn test_one_sheet_per_page_in_order() {
        let pages = paginate(
            vec![measured("a", 400.0), measured("b", 400.0), measured("c", 400.0)],
            1000.0,
        );
        let out = present_minimal(&pages, PresentMode::Screen);
        assert_eq!(out.html.matches(r#"class="cv-page""#).count(), 2);
        assert_eq!(out.pages[0].block_keys, vec!["a", "b"]);
        assert_eq!(out.pages[1].block_keys, vec!["c"]);

        let a = out.html.find(r#"data-key="a""#).unwrap();
        let b = out.html.find(r#"data-key="b""#).unwrap();
        let page2 = out.html.find(r#"data-page="2""#).unwrap();
        let c = out.html.find(r#"data-key="c""#).unwrap();
        assert!(a < b && b < page2 && page2 < c);
    }

    #[test]
    fn test_zero_pages_render_one_blank_sheet() {
        let out = present_minimal(&[], PresentMode::Screen);
        assert_eq!(out.html.matches(r#"class="cv-page""#).count(), 1);
        assert!(out.pages.is_empty());
    }

    #[test]
    fn test_sheet_is_a4() {
        let out = present_minimal(&[], PresentMode::Print);
        assert!(out.css.contains("width:210mm;min-height:297mm"));
        assert!(out.css.contains("@page{size:A4;margin:0}"));
    }

    #[test]
    fn test_sheets_never_clip_content() {
        for mode in [PresentMode::Screen, PresentMode::Print] {
            let out = present_minimal(&[], mode);
            assert!(!out.css.contains("overflow:hidden"));
            assert!(!out.css.contains(";height:297mm"));
        }
    }

    #[test]
    fn test_screen_and_print_differ_only_in_chrome() {
        let screen = present_minimal(&[], PresentMode::Screen);
        let print = present_minimal(&[], PresentMode::Print);
        assert!(screen.css.contains("box-shadow:0 4px 12px"));
        assert!(!print.css.contains("box-shadow:0 4px 12px"));
        assert!(print.css.contains("break-after:page"));
        assert!(print.html.contains(r#"data-mode="print""#));
    }

    #[test]
    fn test_css_carries_measured_metrics() {
        let sheet = renderer_for(TemplateId::Minimal).sheet();
        let css = stylesheet_css(sheet, &PageGeometry::default(), PresentMode::Screen);
        // body: 14px at 1.375 → 19.25px lines
        assert!(css.contains(".cv-root .t-body{font-size:14px;line-height:19.25px;font-weight:400}"));
        assert!(css.contains(".cv-root .b-header{padding:32px 32px 16px 32px;margin:0 0 24px 0}"));
        assert!(css.contains(".cv-root .gap{margin-bottom:4px}"));
        assert!(css.contains("width:96px;height:128px"));
    }

    #[test]
    fn test_decor_comes_last() {
        let sheet = renderer_for(TemplateId::Modern).sheet();
        let css = stylesheet_css(sheet, &PageGeometry::default(), PresentMode::Screen);
        assert!(css.ends_with(sheet.decor_css));
    }

    #[test]
    fn test_standalone_document_escapes_title() {
        let out = present_minimal(&[], PresentMode::Print);
        let doc = out.to_document("<Alex> CV");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>&lt;Alex&gt; CV</title>"));
        assert!(doc.contains(&out.html));
    }

    #[test]
    fn test_px_formatting() {
        assert_eq!(px(24.0), "24");
        assert_eq!(px(19.25), "19.25");
        assert_eq!(px(15.54), "15.54");
    }
}
