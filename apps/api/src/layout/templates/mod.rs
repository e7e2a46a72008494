//! Résumé templates: map a document onto an ordered sequence of content blocks.
//!
//! Three variants implement `TemplateRenderer`. They supply a stylesheet, Tera
//! markup, and the text runs of each block; the block *sequence* is decided once,
//! in `render_with`, so every variant yields the same blocks in the same order:
//!
//! ```text
//! header → summary? → [experience heading → entries]? → [projects heading → entries]?
//!        → [education heading → entries]? → trailer?
//! ```

pub mod format;
pub mod minimal;
pub mod modern;
pub mod professional;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::layout::block::{
    BlockKind, BlockLayout, BoxStyle, ContentBlock, PhotoSlot, TextRun, TextStyle,
};
use crate::layout::font_metrics::FontFamily;
use crate::layout::LayoutError;
use crate::models::document::{
    Education, Experience, PersonalInfo, Project, ResumeDocument, TemplateId,
};

use format::{description_bullets, format_date_range, join_present, link_href};
use minimal::MinimalTemplate;
use modern::ModernTemplate;
use professional::ProfessionalTemplate;

// ────────────────────────────────────────────────────────────────────────────
// Stylesheet
// ────────────────────────────────────────────────────────────────────────────

/// Text styles used across a variant.
#[derive(Debug, Clone, Copy)]
pub struct TextStyles {
    pub name: TextStyle,
    pub job_title: TextStyle,
    pub contact: TextStyle,
    pub heading: TextStyle,
    pub entry_title: TextStyle,
    pub entry_meta: TextStyle,
    pub body: TextStyle,
    pub small: TextStyle,
}

/// The single source of typography and spacing for one variant.
///
/// The measurer reads it to compute heights; the presenter turns it into CSS.
#[derive(Debug, Clone, Copy)]
pub struct StyleSheet {
    pub font: FontFamily,
    pub text: TextStyles,
    pub header: BoxStyle,
    pub summary: BoxStyle,
    pub heading: BoxStyle,
    pub entry: BoxStyle,
    pub trailer: BoxStyle,
    pub photo: PhotoSlot,
    pub bullet_indent_px: f32,
    /// Gap between consecutive lines of an entry (bullets, meta rows).
    pub row_gap_px: f32,
    /// Gap under the name line and between trailer rows.
    pub label_gap_px: f32,
    /// Colors and rules only. Must not change any box metric.
    pub decor_css: &'static str,
}

impl StyleSheet {
    pub fn box_for(&self, kind: BlockKind) -> BoxStyle {
        match kind {
            BlockKind::Header => self.header,
            BlockKind::Summary => self.summary,
            BlockKind::Heading => self.heading,
            BlockKind::Entry => self.entry,
            BlockKind::Trailer => self.trailer,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Projects,
    Education,
}

impl Section {
    fn key(&self) -> &'static str {
        match self {
            Section::Experience => "heading:experience",
            Section::Projects => "heading:projects",
            Section::Education => "heading:education",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Markup views (Tera contexts)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LinkView<'a> {
    pub platform: &'a str,
    pub url: &'a str,
    pub href: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HeaderView<'a> {
    pub full_name: &'a str,
    pub job_title: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub location: &'a str,
    pub links: Vec<LinkView<'a>>,
    pub photo: Option<&'a str>,
}

impl<'a> HeaderView<'a> {
    fn new(info: &'a PersonalInfo) -> Self {
        Self {
            full_name: &info.full_name,
            job_title: &info.job_title,
            email: &info.email,
            phone: &info.phone,
            location: &info.location,
            links: info
                .links
                .iter()
                .filter(|l| !l.url.trim().is_empty())
                .map(|l| LinkView {
                    platform: &l.platform,
                    url: &l.url,
                    href: link_href(&l.url),
                })
                .collect(),
            photo: info.photo_uri(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExperienceView<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub dates: String,
    pub bullets: Vec<String>,
}

impl<'a> ExperienceView<'a> {
    pub fn new(e: &'a Experience) -> Self {
        Self {
            title: &e.title,
            company: &e.company,
            location: &e.location,
            dates: format_date_range(&e.start_date, &e.end_date, e.current),
            bullets: description_bullets(&e.description),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectView<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub href: Option<String>,
    pub description: &'a str,
}

impl<'a> ProjectView<'a> {
    pub fn new(p: &'a Project) -> Self {
        let link = p.link.trim();
        Self {
            title: &p.title,
            link,
            href: link_href(link),
            description: &p.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EducationView<'a> {
    pub school: &'a str,
    pub degree: &'a str,
    pub dates: String,
}

impl<'a> EducationView<'a> {
    pub fn new(e: &'a Education) -> Self {
        Self {
            school: &e.school,
            degree: &e.degree,
            dates: format_date_range(&e.start_date, &e.end_date, false),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TrailerView<'a> {
    pub label: &'a str,
    pub skills: &'a [String],
    pub languages: &'a [String],
    pub certifications: &'a [String],
}

#[derive(Debug, Serialize)]
struct LabelView<'a> {
    label: &'a str,
    text: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer trait
// ────────────────────────────────────────────────────────────────────────────

/// Tera template names every variant must provide.
#[cfg(test)]
pub const MARKUP_NAMES: [&str; 7] = [
    "header.html",
    "summary.html",
    "heading.html",
    "experience.html",
    "project.html",
    "education.html",
    "trailer.html",
];

/// One visual variant. Variants differ in markup, typography and labels only;
/// block existence and order are fixed by `render_with`.
pub trait TemplateRenderer: Send + Sync {
    fn id(&self) -> TemplateId;

    fn sheet(&self) -> &StyleSheet;

    /// `(name, source)` pairs for every entry of `MARKUP_NAMES`.
    fn markup_sources(&self) -> &'static [(&'static str, &'static str)];

    /// Label of the summary block, if the variant titles it.
    fn summary_label(&self) -> Option<&'static str>;

    fn section_label(&self, section: Section) -> &'static str;

    fn trailer_label(&self) -> &'static str;

    /// Text runs of the header block. Which contact fields appear is up to the variant.
    fn header_runs(&self, info: &PersonalInfo) -> Vec<TextRun>;

    /// Text runs of the skills/languages/certifications block.
    fn trailer_runs(&self, document: &ResumeDocument) -> Vec<TextRun>;

    /// Second line of an experience entry.
    fn experience_meta(&self, view: &ExperienceView<'_>) -> String {
        join_present(&[view.company, view.location], "  ")
    }

    fn experience_runs(&self, view: &ExperienceView<'_>) -> Vec<TextRun> {
        let sheet = self.sheet();
        let mut runs = vec![
            TextRun::new(join_present(&[view.title, view.dates.as_str()], "  "), sheet.text.entry_title)
                .gap(sheet.row_gap_px),
            TextRun::new(self.experience_meta(view), sheet.text.entry_meta).gap(sheet.row_gap_px),
        ];
        runs.extend(view.bullets.iter().map(|b| {
            TextRun::new(b.as_str(), sheet.text.body)
                .indent(sheet.bullet_indent_px)
                .gap(sheet.row_gap_px)
        }));
        runs
    }

    fn project_runs(&self, view: &ProjectView<'_>) -> Vec<TextRun> {
        let sheet = self.sheet();
        vec![
            TextRun::new(join_present(&[view.title, view.link], "  "), sheet.text.entry_title)
                .gap(sheet.row_gap_px),
            TextRun::new(view.description, sheet.text.body),
        ]
    }

    fn education_runs(&self, view: &EducationView<'_>) -> Vec<TextRun> {
        let sheet = self.sheet();
        vec![
            TextRun::new(join_present(&[view.school, view.dates.as_str()], "  "), sheet.text.entry_title)
                .gap(sheet.row_gap_px),
            TextRun::new(view.degree, sheet.text.entry_meta),
        ]
    }
}

static MINIMAL: MinimalTemplate = MinimalTemplate;
static MODERN: ModernTemplate = ModernTemplate;
static PROFESSIONAL: ProfessionalTemplate = ProfessionalTemplate;

/// Selects the variant for a template id.
pub fn renderer_for(id: TemplateId) -> &'static dyn TemplateRenderer {
    match id {
        TemplateId::Minimal => &MINIMAL,
        TemplateId::Modern => &MODERN,
        TemplateId::Professional => &PROFESSIONAL,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders `document` with the `template` variant.
#[cfg(test)]
pub fn render(
    document: &ResumeDocument,
    template: TemplateId,
) -> Result<Vec<ContentBlock>, LayoutError> {
    render_with(renderer_for(template), document)
}

/// Renders `document` with an explicit renderer. Pure: output depends only on the inputs.
pub fn render_with(
    renderer: &dyn TemplateRenderer,
    document: &ResumeDocument,
) -> Result<Vec<ContentBlock>, LayoutError> {
    let mut sink = BlockSink::new(renderer)?;
    let sheet = renderer.sheet();

    // Header
    let header = HeaderView::new(&document.personal_info);
    let mut layout = BlockLayout::new(sheet.header);
    for run in renderer.header_runs(&document.personal_info) {
        layout.push(run);
    }
    if header.photo.is_some() {
        layout.photo = Some(sheet.photo);
    }
    sink.push("header".to_string(), BlockKind::Header, "header.html", &header, layout)?;

    // Summary
    let summary = document.summary.trim();
    if !summary.is_empty() {
        let label = renderer.summary_label().unwrap_or("");
        let mut layout = BlockLayout::new(sheet.summary);
        layout.push(TextRun::new(label, sheet.text.heading).gap(sheet.row_gap_px));
        layout.push(TextRun::new(summary, sheet.text.body));
        let view = LabelView {
            label,
            text: summary,
        };
        sink.push("summary".to_string(), BlockKind::Summary, "summary.html", &view, layout)?;
    }

    // Experience
    if !document.experience.is_empty() {
        sink.heading(Section::Experience)?;
        for entry in &document.experience {
            let view = ExperienceView::new(entry);
            let mut layout = BlockLayout::new(sheet.entry);
            for run in renderer.experience_runs(&view) {
                layout.push(run);
            }
            let key = format!("experience:{}", entry.id);
            sink.push(key, BlockKind::Entry, "experience.html", &view, layout)?;
        }
    }

    // Projects
    if !document.projects.is_empty() {
        sink.heading(Section::Projects)?;
        for project in &document.projects {
            let view = ProjectView::new(project);
            let mut layout = BlockLayout::new(sheet.entry);
            for run in renderer.project_runs(&view) {
                layout.push(run);
            }
            let key = format!("project:{}", project.id);
            sink.push(key, BlockKind::Entry, "project.html", &view, layout)?;
        }
    }

    // Education
    if !document.education.is_empty() {
        sink.heading(Section::Education)?;
        for entry in &document.education {
            let view = EducationView::new(entry);
            let mut layout = BlockLayout::new(sheet.entry);
            for run in renderer.education_runs(&view) {
                layout.push(run);
            }
            let key = format!("education:{}", entry.id);
            sink.push(key, BlockKind::Entry, "education.html", &view, layout)?;
        }
    }

    // Skills / languages / certifications
    if document.has_extras() {
        let view = TrailerView {
            label: renderer.trailer_label(),
            skills: &document.skills,
            languages: &document.languages,
            certifications: &document.certifications,
        };
        let mut layout = BlockLayout::new(sheet.trailer);
        for run in renderer.trailer_runs(document) {
            layout.push(run);
        }
        sink.push("trailer".to_string(), BlockKind::Trailer, "trailer.html", &view, layout)?;
    }

    debug!(
        template = renderer.id().as_str(),
        blocks = sink.blocks.len(),
        "Rendered document into content blocks"
    );
    Ok(sink.blocks)
}

/// Accumulates blocks for one render pass, owning that pass's Tera instance.
struct BlockSink<'r> {
    renderer: &'r dyn TemplateRenderer,
    tera: Tera,
    blocks: Vec<ContentBlock>,
}

impl<'r> BlockSink<'r> {
    fn new(renderer: &'r dyn TemplateRenderer) -> Result<Self, LayoutError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(renderer.markup_sources().to_vec())?;
        Ok(Self {
            renderer,
            tera,
            blocks: Vec::new(),
        })
    }

    fn heading(&mut self, section: Section) -> Result<(), LayoutError> {
        let sheet = self.renderer.sheet();
        let label = self.renderer.section_label(section);
        let mut layout = BlockLayout::new(sheet.heading);
        layout.push(TextRun::new(label, sheet.text.heading));
        let view = LabelView { label, text: "" };
        self.push(
            section.key().to_string(),
            BlockKind::Heading,
            "heading.html",
            &view,
            layout,
        )
    }

    fn push<V: Serialize>(
        &mut self,
        key: String,
        kind: BlockKind,
        template: &str,
        view: &V,
        layout: BlockLayout,
    ) -> Result<(), LayoutError> {
        let inner = self.tera.render(template, &Context::from_serialize(view)?)?;
        let markup = format!(
            r#"<div class="cv-block {}" data-key="{}">{}</div>"#,
            kind.css_class(),
            tera::escape_html(&key),
            inner.trim()
        );
        self.blocks.push(ContentBlock {
            key,
            kind,
            markup,
            layout,
        });
        Ok(())
    }
}
