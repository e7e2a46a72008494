//! Height measurement: lays blocks out on an off-screen surface and records heights.
//!
//! The surface is a scratch arena of line boxes owned by the `Measurer`. It is
//! cleared at the start of every pass, so repeated runs never accumulate state
//! and a pass never sees lines from a previous document.
//!
//! # Height model
//! ```text
//! height = pad_top + max(text column, photo slot) + pad_bottom + margin_bottom
//! text column = Σ (lines(run) × line_px(run) + gap_after(run))
//! ```
//! Runs wrap at the page width minus the block insets, minus the photo slot and
//! its gap when present, minus the run's own indent.

use tracing::debug;

use crate::layout::block::{BlockLayout, ContentBlock, MeasuredBlock, TextRun};
use crate::layout::font_metrics::{get_metrics, FontMetricTable};
use crate::layout::geometry::PageGeometry;
use crate::layout::templates::StyleSheet;

/// One laid-out text run on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    pub block_index: usize,
    pub lines: u16,
    pub height_px: f32,
}

pub struct Measurer {
    geometry: PageGeometry,
    metrics: &'static FontMetricTable,
    surface: Vec<LineBox>,
}

impl Measurer {
    /// Builds a measurer for the given page and the typography of one stylesheet.
    pub fn new(geometry: PageGeometry, sheet: &StyleSheet) -> Self {
        Self {
            geometry,
            metrics: get_metrics(sheet.font),
            surface: Vec::new(),
        }
    }

    /// Measures every block in order. Heights are in CSS pixels.
    pub fn measure(&mut self, blocks: Vec<ContentBlock>) -> Vec<MeasuredBlock> {
        self.surface.clear();

        let measured: Vec<MeasuredBlock> = blocks
            .into_iter()
            .enumerate()
            .map(|(index, block)| {
                let (height_px, line_count) = self.lay_out(index, &block.layout);
                MeasuredBlock {
                    block,
                    height_px,
                    line_count,
                }
            })
            .collect();

        debug!(
            blocks = measured.len(),
            line_boxes = self.surface.len(),
            "Measured blocks on off-screen surface"
        );
        measured
    }

    /// Line boxes produced by the most recent pass.
    #[cfg(test)]
    pub fn surface(&self) -> &[LineBox] {
        &self.surface
    }

    fn lay_out(&mut self, block_index: usize, layout: &BlockLayout) -> (f32, u16) {
        let box_style = &layout.box_style;
        let mut column_width =
            self.geometry.width_px() - box_style.inset_left - box_style.inset_right;
        if let Some(photo) = &layout.photo {
            column_width -= photo.width_px + photo.gap_px;
        }

        let mut column_height = 0.0_f32;
        let mut line_count = 0u16;
        for run in &layout.runs {
            let line_box = self.lay_out_run(block_index, run, column_width);
            column_height += line_box.height_px;
            line_count = line_count.saturating_add(line_box.lines);
            self.surface.push(line_box);
        }

        let photo_height = layout.photo.map(|p| p.height_px).unwrap_or(0.0);
        let content_height = column_height.max(photo_height);
        let height = box_style.pad_top + content_height + box_style.pad_bottom + box_style.margin_bottom;
        (height, line_count)
    }

    fn lay_out_run(&self, block_index: usize, run: &TextRun, column_width: f32) -> LineBox {
        let available_px = (column_width - run.indent_px).max(run.style.size_px);
        let width_em = available_px / run.style.size_px;
        let lines = self
            .metrics
            .wrapped_lines(&run.text, width_em, run.style.bold);
        let height_px = if lines == 0 {
            0.0
        } else {
            lines as f32 * run.style.line_px() + run.gap_after_px
        };
        LineBox {
            block_index,
            lines,
            height_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::block::{BlockKind, BoxStyle, PhotoSlot, TextStyle};
    use crate::layout::templates::renderer_for;
    use crate::models::document::TemplateId;

    const BODY: TextStyle = TextStyle::new(14.0, 1.5, false);

    fn block(layout: BlockLayout) -> ContentBlock {
        ContentBlock {
            key: "test".to_string(),
            kind: BlockKind::Entry,
            markup: String::new(),
            layout,
        }
    }

    fn measurer() -> Measurer {
        Measurer::new(
            PageGeometry::default(),
            renderer_for(TemplateId::Minimal).sheet(),
        )
    }

    #[test]
    fn test_box_only_height_is_padding_plus_margin() {
        let layout = BlockLayout::new(BoxStyle::new(32.0, 10.0, 6.0, 16.0));
        let measured = measurer().measure(vec![block(layout)]);
        assert_eq!(measured[0].height_px, 32.0);
        assert_eq!(measured[0].line_count, 0);
    }

    #[test]
    fn test_single_line_run_height() {
        let mut layout = BlockLayout::new(BoxStyle::new(32.0, 0.0, 0.0, 0.0));
        layout.push(TextRun::new("Experience", BODY).gap(4.0));
        let measured = measurer().measure(vec![block(layout)]);
        assert_eq!(measured[0].line_count, 1);
        assert!((measured[0].height_px - (21.0 + 4.0)).abs() < 1e-3);
    }

    #[test]
    fn test_long_run_wraps_and_grows() {
        let short = {
            let mut l = BlockLayout::new(BoxStyle::new(32.0, 0.0, 0.0, 0.0));
            l.push(TextRun::new("Short line", BODY));
            l
        };
        let long = {
            let mut l = BlockLayout::new(BoxStyle::new(32.0, 0.0, 0.0, 0.0));
            l.push(TextRun::new("word ".repeat(300), BODY));
            l
        };
        let measured = measurer().measure(vec![block(short), block(long)]);
        assert!(measured[1].line_count > 1);
        assert!(measured[1].height_px > measured[0].height_px);
    }

    #[test]
    fn test_photo_slot_sets_minimum_height() {
        let mut layout = BlockLayout::new(BoxStyle::new(32.0, 0.0, 0.0, 0.0));
        layout.push(TextRun::new("Alex Morgan", BODY));
        layout.photo = Some(PhotoSlot {
            width_px: 96.0,
            height_px: 128.0,
            gap_px: 24.0,
        });
        let measured = measurer().measure(vec![block(layout)]);
        assert_eq!(measured[0].height_px, 128.0);
    }

    #[test]
    fn test_photo_narrows_text_column() {
        let text = "word ".repeat(120);
        let without = {
            let mut l = BlockLayout::new(BoxStyle::new(32.0, 0.0, 0.0, 0.0));
            l.push(TextRun::new(text.clone(), BODY));
            l
        };
        let with = {
            let mut l = without.clone();
            l.photo = Some(PhotoSlot {
                width_px: 300.0,
                height_px: 10.0,
                gap_px: 24.0,
            });
            l
        };
        let measured = measurer().measure(vec![block(without), block(with)]);
        assert!(measured[1].line_count > measured[0].line_count);
    }

    #[test]
    fn test_surface_is_reset_between_passes() {
        let mut layout = BlockLayout::new(BoxStyle::new(32.0, 0.0, 0.0, 0.0));
        layout.push(TextRun::new("one", BODY));
        layout.push(TextRun::new("two", BODY));

        let mut m = measurer();
        m.measure(vec![block(layout.clone()), block(layout.clone())]);
        assert_eq!(m.surface().len(), 4);
        m.measure(vec![block(layout)]);
        assert_eq!(m.surface().len(), 2, "previous pass must not leak line boxes");
        assert!(m.surface().iter().all(|lb| lb.block_index == 0));
    }

    #[test]
    fn test_measurement_is_deterministic() {
        let mut layout = BlockLayout::new(BoxStyle::new(40.0, 4.0, 4.0, 12.0));
        layout.push(TextRun::new("Mentored junior designers and established a unified design system", BODY));
        let a = measurer().measure(vec![block(layout.clone())]);
        let b = measurer().measure(vec![block(layout)]);
        assert_eq!(a, b);
    }
}
