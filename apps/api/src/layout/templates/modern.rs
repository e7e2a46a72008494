//! Modern Creative — sans-serif layout with a bold name block and accent headings.

use crate::layout::block::{BoxStyle, PhotoSlot, TextRun, TextStyle};
use crate::layout::font_metrics::FontFamily;
use crate::layout::templates::format::join_present;
use crate::layout::templates::{ExperienceView, Section, StyleSheet, TemplateRenderer, TextStyles};
use crate::models::document::{PersonalInfo, ResumeDocument, TemplateId};

const META_SEPARATOR: &str = " • ";

static SHEET: StyleSheet = StyleSheet {
    font: FontFamily::Lato,
    text: TextStyles {
        name: TextStyle::new(36.0, 1.11, true),
        job_title: TextStyle::new(20.0, 1.4, false),
        contact: TextStyle::new(14.0, 1.43, false),
        heading: TextStyle::new(12.0, 1.33, true),
        entry_title: TextStyle::new(16.0, 1.5, true),
        entry_meta: TextStyle::new(14.0, 1.43, false),
        body: TextStyle::new(14.0, 1.625, false),
        small: TextStyle::new(12.0, 1.33, false),
    },
    header: BoxStyle::new(40.0, 40.0, 0.0, 32.0),
    summary: BoxStyle::new(40.0, 0.0, 0.0, 32.0),
    heading: BoxStyle::new(40.0, 0.0, 4.0, 16.0),
    entry: BoxStyle::new(40.0, 0.0, 0.0, 24.0),
    trailer: BoxStyle::new(40.0, 24.0, 40.0, 0.0),
    photo: PhotoSlot {
        width_px: 96.0,
        height_px: 96.0,
        gap_px: 24.0,
    },
    bullet_indent_px: 20.0,
    row_gap_px: 4.0,
    label_gap_px: 12.0,
    decor_css: "\
.cv-template-modern .b-header .t-name{color:#111827}\
.cv-template-modern .b-header .t-job-title{color:#2563eb}\
.cv-template-modern .t-heading{color:#2563eb;box-shadow:inset 0 -2px 0 #dbeafe}\
.cv-template-modern .photo{border-radius:9999px;box-shadow:0 0 0 4px #eff6ff}\
.cv-template-modern .dates{color:#6b7280}\
.cv-template-modern .b-trailer{background:#f9fafb}",
};

const HEADER: &str = r#"
<div class="hdr-text">
  {% if full_name %}<div class="t-name gap-label">{{ full_name }}</div>{% endif %}
  {% if job_title %}<div class="t-job-title gap-label">{{ job_title }}</div>{% endif %}
  <div class="t-contact">
    {% if email %}<span>{{ email }}</span> {% endif %}
    {% if phone %}<span>{{ phone }}</span> {% endif %}
    {% if location %}<span>{{ location }}</span> {% endif %}
    {% for link in links %}<span>{% if link.href %}<a href="{{ link.href }}">{{ link.platform }}</a>{% else %}{{ link.platform }}{% endif %}</span> {% endfor %}
  </div>
</div>
{% if photo %}<img class="photo" src="{{ photo }}" alt="Profile">{% endif %}
"#;

const SUMMARY: &str = r#"<p class="t-body">{{ text }}</p>"#;

const HEADING: &str = r#"<h2 class="t-heading">{{ label }}</h2>"#;

const EXPERIENCE: &str = r#"
{% if title or dates %}<div class="t-entry-title gap"><span>{{ title }}</span> <span class="dates t-small">{{ dates }}</span></div>{% endif %}
{% if company or location %}<div class="t-entry-meta gap">{{ company }}{% if company and location %} • {% endif %}{{ location }}</div>{% endif %}
{% if bullets %}<ul>{% for line in bullets %}<li class="t-body gap">{{ line }}</li>{% endfor %}</ul>{% endif %}
"#;

const PROJECT: &str = r#"
{% if title or link %}<div class="t-entry-title gap"><span>{{ title }}</span>{% if link %} {% if href %}<a class="t-small" href="{{ href }}">{{ link }}</a>{% else %}<span class="t-small">{{ link }}</span>{% endif %}{% endif %}</div>{% endif %}
<p class="t-body">{{ description }}</p>
"#;

const EDUCATION: &str = r#"
{% if school or dates %}<div class="t-entry-title gap"><span>{{ school }}</span> <span class="dates t-small">{{ dates }}</span></div>{% endif %}
<div class="t-entry-meta">{{ degree }}</div>
"#;

const TRAILER: &str = r#"
<h2 class="t-heading gap-label">{{ label }}</h2>
{% if skills %}<div class="t-body gap-label">{{ skills | join(sep=" • ") }}</div>{% endif %}
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

pub struct ModernTemplate;

impl TemplateRenderer for ModernTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn sheet(&self) -> &StyleSheet {
        &SHEET
    }

    fn markup_sources(&self) -> &'static [(&'static str, &'static str)] {
        &MARKUP
    }

    fn summary_label(&self) -> Option<&'static str> {
        None
    }

    fn section_label(&self, section: Section) -> &'static str {
        match section {
            Section::Experience => "Work Experience",
            Section::Projects => "Projects",
            Section::Education => "Education",
        }
    }

    fn trailer_label(&self) -> &'static str {
        "Skills & Certifications"
    }

    fn header_runs(&self, info: &PersonalInfo) -> Vec<TextRun> {
        let mut contact = vec![info.email.as_str(), info.phone.as_str(), info.location.as_str()];
        contact.extend(
            info.links
                .iter()
                .filter(|l| !l.url.trim().is_empty())
                .map(|l| l.platform.as_str()),
        );
        vec![
            TextRun::new(info.full_name.as_str(), SHEET.text.name).gap(SHEET.label_gap_px),
            TextRun::new(info.job_title.as_str(), SHEET.text.job_title).gap(SHEET.label_gap_px),
            TextRun::new(join_present(&contact, "    "), SHEET.text.contact),
        ]
    }

    fn experience_meta(&self, view: &ExperienceView<'_>) -> String {
        join_present(&[view.company, view.location], META_SEPARATOR)
    }

    fn trailer_runs(&self, document: &ResumeDocument) -> Vec<TextRun> {
        let body = SHEET.text.body;
        let gap = SHEET.label_gap_px;
        let mut runs = vec![TextRun::new(self.trailer_label(), SHEET.text.heading).gap(gap)];
        if !document.skills.is_empty() {
            runs.push(TextRun::new(document.skills.join(META_SEPARATOR), body).gap(gap));
        }
        if !document.languages.is_empty() {
            runs.push(TextRun::new(format!("Languages: {}", document.languages.join(", ")), body).gap(gap));
        }
        if !document.certifications.is_empty() {
            let text = format!("Certifications: {}", document.certifications.join(", "));
            runs.push(TextRun::new(text, body).gap(gap));
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::templates::render;

    #[test]
    fn test_summary_has_no_label_run() {
        let mut doc = ResumeDocument::new_blank();
        doc.summary = "Designer with a decade of product work.".to_string();
        let blocks = render(&doc, TemplateId::Modern).unwrap();
        let summary = blocks.iter().find(|b| b.key == "summary").unwrap();
        assert_eq!(summary.layout.runs.len(), 1);
        assert!(!summary.markup.contains("<h2"));
    }

    #[test]
    fn test_meta_joined_with_bullet() {
        let mut doc = ResumeDocument::new_blank();
        doc.experience.push(crate::models::document::Experience {
            id: "e1".to_string(),
            company: "Acme".to_string(),
            location: "Austin".to_string(),
            ..Default::default()
        });
        let blocks = render(&doc, TemplateId::Modern).unwrap();
        let entry = blocks.iter().find(|b| b.key == "experience:e1").unwrap();
        assert!(entry.layout.runs.iter().any(|r| r.text == "Acme • Austin"));
        assert!(entry.markup.contains("Acme • Austin"));
    }
}
