//! Professional — Inter, generous whitespace, entries hung on a left timeline rule.

use crate::layout::block::{BoxStyle, PhotoSlot, TextRun, TextStyle};
use crate::layout::font_metrics::FontFamily;
use crate::layout::templates::format::join_present;
use crate::layout::templates::{ExperienceView, Section, StyleSheet, TemplateRenderer, TextStyles};
use crate::models::document::{PersonalInfo, ResumeDocument, TemplateId};

static SHEET: StyleSheet = StyleSheet {
    font: FontFamily::Inter,
    text: TextStyles {
        name: TextStyle::new(30.0, 1.2, true),
        job_title: TextStyle::new(18.0, 1.55, false),
        contact: TextStyle::new(14.0, 1.43, false),
        heading: TextStyle::new(18.0, 1.55, true),
        entry_title: TextStyle::new(16.0, 1.5, true),
        entry_meta: TextStyle::new(14.0, 1.43, false),
        body: TextStyle::new(14.0, 1.625, false),
        small: TextStyle::new(12.0, 1.33, false),
    },
    header: BoxStyle::new(48.0, 48.0, 32.0, 32.0),
    summary: BoxStyle::new(48.0, 0.0, 0.0, 24.0),
    heading: BoxStyle::new(48.0, 0.0, 0.0, 16.0),
    // Entries sit 16px further in, right of the timeline rule.
    entry: BoxStyle {
        inset_left: 64.0,
        inset_right: 48.0,
        pad_top: 0.0,
        pad_bottom: 0.0,
        margin_bottom: 24.0,
    },
    trailer: BoxStyle::new(48.0, 24.0, 48.0, 0.0),
    photo: PhotoSlot {
        width_px: 112.0,
        height_px: 128.0,
        gap_px: 32.0,
    },
    bullet_indent_px: 20.0,
    row_gap_px: 4.0,
    label_gap_px: 8.0,
    decor_css: "\
.cv-template-professional .b-header{background:#f8fafc;box-shadow:inset 0 -1px 0 #e2e8f0}\
.cv-template-professional .t-job-title{color:#475569}\
.cv-template-professional .t-heading{color:#0f172a}\
.cv-template-professional .b-entry{box-shadow:inset 2px 0 0 #e2e8f0}\
.cv-template-professional .dates{color:#64748b}\
.cv-template-professional .t-sub{color:#334155}",
};

const HEADER: &str = r#"
<div class="hdr-text">
  {% if full_name %}<div class="t-name gap-label">{{ full_name }}</div>{% endif %}
  {% if job_title %}<div class="t-job-title gap-label">{{ job_title }}</div>{% endif %}
  <div class="t-contact">
    {% if email %}<span>{{ email }}</span> {% endif %}
    {% if phone %}<span>{{ phone }}</span> {% endif %}
    {% if location %}<span>{{ location }}</span> {% endif %}
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
{% if title or dates %}<div class="t-entry-title gap"><span>{{ title }}</span> <span class="dates t-small">{{ dates }}</span></div>{% endif %}
{% if company %}<div class="t-entry-meta gap">{{ company }}</div>{% endif %}
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
{% if skills %}<div class="t-entry-meta t-sub">Skills</div><div class="t-body gap-label">{{ skills | join(sep=", ") }}</div>{% endif %}
{% if languages %}<div class="t-entry-meta t-sub">Languages</div><div class="t-body gap-label">{{ languages | join(sep=", ") }}</div>{% endif %}
{% if certifications %}<div class="t-entry-meta t-sub">Certifications</div><div class="t-body gap-label">{{ certifications | join(sep=", ") }}</div>{% endif %}
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

pub struct ProfessionalTemplate;

impl TemplateRenderer for ProfessionalTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Professional
    }

    fn sheet(&self) -> &StyleSheet {
        &SHEET
    }

    fn markup_sources(&self) -> &'static [(&'static str, &'static str)] {
        &MARKUP
    }

    fn summary_label(&self) -> Option<&'static str> {
        Some("Profile")
    }

    fn section_label(&self, section: Section) -> &'static str {
        match section {
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Education => "Education",
        }
    }

    fn trailer_label(&self) -> &'static str {
        "Expertise"
    }

    // No social links in this header.
    fn header_runs(&self, info: &PersonalInfo) -> Vec<TextRun> {
        let contact = [info.email.as_str(), info.phone.as_str(), info.location.as_str()];
        vec![
            TextRun::new(info.full_name.as_str(), SHEET.text.name).gap(SHEET.label_gap_px),
            TextRun::new(info.job_title.as_str(), SHEET.text.job_title).gap(SHEET.label_gap_px),
            TextRun::new(join_present(&contact, "    "), SHEET.text.contact),
        ]
    }

    fn experience_meta(&self, view: &ExperienceView<'_>) -> String {
        view.company.trim().to_string()
    }

    fn trailer_runs(&self, document: &ResumeDocument) -> Vec<TextRun> {
        let text = SHEET.text;
        let mut runs = vec![TextRun::new(self.trailer_label(), text.heading).gap(SHEET.label_gap_px)];
        for (label, items) in [
            ("Skills", &document.skills),
            ("Languages", &document.languages),
            ("Certifications", &document.certifications),
        ] {
            if items.is_empty() {
                continue;
            }
            runs.push(TextRun::new(label, text.entry_meta));
            runs.push(TextRun::new(items.join(", "), text.body).gap(SHEET.label_gap_px));
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::templates::render;
    use crate::models::document::SocialLink;

    #[test]
    fn test_header_omits_links() {
        let mut doc = ResumeDocument::new_blank();
        doc.personal_info.full_name = "Budi Santoso".to_string();
        doc.personal_info.links.push(SocialLink {
            id: "l1".to_string(),
            platform: "LinkedIn".to_string(),
            url: "linkedin.com/in/budi".to_string(),
        });
        let header = &render(&doc, TemplateId::Professional).unwrap()[0];
        assert!(!header.markup.contains("linkedin"));
        assert!(header.layout.runs.iter().all(|r| !r.text.contains("linkedin")));
    }

    #[test]
    fn test_entries_are_inset_past_timeline() {
        assert!(SHEET.entry.inset_left > SHEET.heading.inset_left);
    }

    #[test]
    fn test_trailer_has_sub_rows_per_list() {
        let mut doc = ResumeDocument::new_blank();
        doc.skills = vec!["Go".to_string()];
        doc.languages = vec!["Bahasa Indonesia".to_string()];
        let blocks = render(&doc, TemplateId::Professional).unwrap();
        let trailer = blocks.last().unwrap();
        assert_eq!(trailer.key, "trailer");
        // heading + (label, values) for skills and languages
        assert_eq!(trailer.layout.runs.len(), 5);
        assert!(!trailer.markup.contains("Certifications"));
    }
}
