//! ATS Minimal — classic serif layout with a centered header and ruled headings.

use crate::layout::block::{BoxStyle, PhotoSlot, TextRun, TextStyle};
use crate::layout::font_metrics::FontFamily;
use crate::layout::templates::format::join_present;
use crate::layout::templates::{Section, StyleSheet, TemplateRenderer, TextStyles};
use crate::models::document::{PersonalInfo, ResumeDocument, TemplateId};

static SHEET: StyleSheet = StyleSheet {
    font: FontFamily::EbGaramond,
    text: TextStyles {
        name: TextStyle::new(30.0, 1.2, true),
        job_title: TextStyle::new(16.0, 1.5, false),
        contact: TextStyle::new(14.0, 1.43, false),
        heading: TextStyle::new(14.0, 1.43, true),
        entry_title: TextStyle::new(16.0, 1.5, true),
        entry_meta: TextStyle::new(14.0, 1.43, false),
        body: TextStyle::new(14.0, 1.375, false),
        small: TextStyle::new(12.0, 1.33, false),
    },
    header: BoxStyle::new(32.0, 32.0, 16.0, 24.0),
    summary: BoxStyle::new(32.0, 0.0, 0.0, 24.0),
    heading: BoxStyle::new(32.0, 0.0, 2.0, 12.0),
    entry: BoxStyle::new(32.0, 0.0, 0.0, 16.0),
    trailer: BoxStyle::new(32.0, 16.0, 0.0, 24.0),
    photo: PhotoSlot {
        width_px: 96.0,
        height_px: 128.0,
        gap_px: 24.0,
    },
    bullet_indent_px: 32.0,
    row_gap_px: 4.0,
    label_gap_px: 8.0,
    decor_css: "\
.cv-template-minimal .b-header{box-shadow:inset 0 -2px 0 #111827;text-align:center}\
.cv-template-minimal .b-heading .t-heading,.cv-template-minimal .b-trailer .t-heading,\
.cv-template-minimal .b-summary .t-heading{box-shadow:inset 0 -1px 0 #d1d5db}\
.cv-template-minimal .meta{color:#374151}",
};

const HEADER: &str = r#"
<div class="hdr-text">
  {% if full_name %}<div class="t-name gap-label">{{ full_name }}</div>{% endif %}
  <div class="t-contact">
    {% if location %}<span>{{ location }}</span> {% endif %}
    {% if phone %}<span>{{ phone }}</span> {% endif %}
    {% if email %}<span>{{ email }}</span> {% endif %}
    {% for link in links %}<span>{% if link.href %}<a href="{{ link.href }}">{{ link.url }}</a>{% else %}{{ link.url }}{% endif %}</span> {% endfor %}
  </div>
</div>
{% if photo %}<img class="photo" src="{{ photo }}" alt="Profile">{% endif %}
"#;

const SUMMARY: &str = r#"
<h2 class="t-heading gap">{{ label }}</h2>
<p class="t-body">{{ text }}</p>
"#;

const HEADING: &str = r#"<h2 class="t-heading">{{ label }}</h2>"#;

const EXPERIENCE: &str = r#"
{% if title or dates %}<div class="t-entry-title gap"><span>{{ title }}</span> <span class="dates">{{ dates }}</span></div>{% endif %}
{% if company or location %}<div class="t-entry-meta gap"><span class="meta">{{ company }}</span> <span>{{ location }}</span></div>{% endif %}
{% if bullets %}<ul>{% for line in bullets %}<li class="t-body gap">{{ line }}</li>{% endfor %}</ul>{% endif %}
"#;

const PROJECT: &str = r#"
{% if title or link %}<div class="t-entry-title gap"><span>{{ title }}</span>{% if link %} {% if href %}<a class="t-small" href="{{ href }}">{{ link }}</a>{% else %}<span class="t-small">{{ link }}</span>{% endif %}{% endif %}</div>{% endif %}
<p class="t-body">{{ description }}</p>
"#;

const EDUCATION: &str = r#"
{% if school or dates %}<div class="t-entry-title gap"><span>{{ school }}</span> <span class="dates">{{ dates }}</span></div>{% endif %}
<div class="t-entry-meta">{{ degree }}</div>
"#;

const TRAILER: &str = r#"
<h2 class="t-heading gap-label">{{ label }}</h2>
{% if skills %}<div class="t-body gap-label"><strong>Skills:</strong> {{ skills | join(sep=", ") }}</div>{% endif %}
{% if languages %}<div class="t-body gap-label"><strong>Languages:</strong> {{ languages | join(sep=", ") }}</div>{% endif %}
{% if certifications %}<div class="t-body gap-label"><strong>Certifications:</strong> {{ certifications | join(sep=", ") }}</div>{% endif %}
"#;

static MARKUP: [(&str, &str); 7] = [
    ("header.html", HEADER),
    ("summary.html", SUMMARY),
    ("heading.html", HEADING),
    ("experience.html", EXPERIENCE),
    ("project.html", PROJECT),
    ("education.html", EDUCATION),
    ("trailer.html", TRAILER),
];

pub struct MinimalTemplate;

impl TemplateRenderer for MinimalTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }

    fn sheet(&self) -> &StyleSheet {
        &SHEET
    }

    fn markup_sources(&self) -> &'static [(&'static str, &'static str)] {
        &MARKUP
    }

    fn summary_label(&self) -> Option<&'static str> {
        Some("Professional Summary")
    }

    fn section_label(&self, section: Section) -> &'static str {
        match section {
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Education => "Education",
        }
    }

    fn trailer_label(&self) -> &'static str {
        "Additional Information"
    }

    // The minimal header leaves out the job title.
    fn header_runs(&self, info: &PersonalInfo) -> Vec<TextRun> {
        let links: Vec<&str> = info.links.iter().map(|l| l.url.as_str()).collect();
        let mut contact = vec![info.location.as_str(), info.phone.as_str(), info.email.as_str()];
        contact.extend(links);
        vec![
            TextRun::new(info.full_name.as_str(), SHEET.text.name).gap(SHEET.label_gap_px),
            TextRun::new(join_present(&contact, "    "), SHEET.text.contact),
        ]
    }

    fn trailer_runs(&self, document: &ResumeDocument) -> Vec<TextRun> {
        let body = SHEET.text.body;
        let mut runs = vec![TextRun::new(self.trailer_label(), SHEET.text.heading).gap(SHEET.label_gap_px)];
        for (label, items) in [
            ("Skills:", &document.skills),
            ("Languages:", &document.languages),
            ("Certifications:", &document.certifications),
        ] {
            if !items.is_empty() {
                runs.push(TextRun::new(format!("{label} {}", items.join(", ")), body).gap(SHEET.label_gap_px));
            }
        }
        runs
    }
}
