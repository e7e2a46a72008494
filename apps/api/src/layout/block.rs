//! Content blocks — the atomic, never-split units flowing through the pipeline.
//!
//! A block carries two views of the same content: `markup` (the HTML fragment the
//! presenter places on a page) and `layout` (the box description the measurer
//! turns into a height). Both are produced together by a template variant from
//! one stylesheet, so they cannot drift apart.

use serde::Serialize;

/// Visual role of a block. Used for the block's CSS class only; the paginator
/// never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Header,
    Summary,
    Heading,
    Entry,
    Trailer,
}

impl BlockKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            BlockKind::Header => "b-header",
            BlockKind::Summary => "b-summary",
            BlockKind::Heading => "b-heading",
            BlockKind::Entry => "b-entry",
            BlockKind::Trailer => "b-trailer",
        }
    }
}

/// Typography of a single text run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub size_px: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn new(size_px: f32, line_height: f32, bold: bool) -> Self {
        Self {
            size_px,
            line_height,
            bold,
        }
    }

    /// Height of one rendered line in pixels.
    pub fn line_px(&self) -> f32 {
        self.size_px * self.line_height
    }
}

/// Box metrics of a block: horizontal insets, vertical padding, and the gap
/// below it. The trailing margin counts toward the block's height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStyle {
    pub inset_left: f32,
    pub inset_right: f32,
    pub pad_top: f32,
    pub pad_bottom: f32,
    pub margin_bottom: f32,
}

impl BoxStyle {
    pub const fn new(inset_x: f32, pad_top: f32, pad_bottom: f32, margin_bottom: f32) -> Self {
        Self {
            inset_left: inset_x,
            inset_right: inset_x,
            pad_top,
            pad_bottom,
            margin_bottom,
        }
    }
}

/// A wrapped paragraph of text inside a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
    /// Extra left indent (list bullets).
    pub indent_px: f32,
    /// Vertical space after this run.
    pub gap_after_px: f32,
}

impl TextRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            indent_px: 0.0,
            gap_after_px: 0.0,
        }
    }

    pub fn indent(mut self, px: f32) -> Self {
        self.indent_px = px;
        self
    }

    pub fn gap(mut self, px: f32) -> Self {
        self.gap_after_px = px;
        self
    }
}

/// Space reserved for the profile photo beside the header text.
///
/// The slot has a fixed size whether or not the image has decoded, so header
/// height never depends on image loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhotoSlot {
    pub width_px: f32,
    pub height_px: f32,
    /// Horizontal gap between the photo and the text column.
    pub gap_px: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockLayout {
    pub box_style: BoxStyle,
    pub runs: Vec<TextRun>,
    pub photo: Option<PhotoSlot>,
}

impl BlockLayout {
    pub fn new(box_style: BoxStyle) -> Self {
        Self {
            box_style,
            runs: Vec::new(),
            photo: None,
        }
    }

    /// Appends a run, skipping text that is empty after trimming.
    pub fn push(&mut self, run: TextRun) {
        if !run.text.trim().is_empty() {
            self.runs.push(run);
        }
    }
}

/// One rendered, not yet measured, chunk of the résumé.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBlock {
    /// Stable identity: the source entity id, or a synthetic key for headings.
    pub key: String,
    pub kind: BlockKind,
    pub markup: String,
    #[serde(skip)]
    pub layout: BlockLayout,
}

/// A block annotated with its height on the measuring surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasuredBlock {
    #[serde(flatten)]
    pub block: ContentBlock,
    pub height_px: f32,
    pub line_count: u16,
}

/// Anything the paginator can pack: it only needs a height.
pub trait Measured {
    fn height(&self) -> f32;
}

impl Measured for MeasuredBlock {
    fn height(&self) -> f32 {
        self.height_px
    }
}

impl Measured for f32 {
    fn height(&self) -> f32 {
        *self
    }
}
