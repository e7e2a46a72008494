//! Sample-data autofill for the editor.
//!
//! Overwrites the content fields of a document with a complete demo résumé.
//! Identity (`id`, `title`, `templateId`) and the profile photo are kept; every
//! list item gets a fresh id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::document::{
    Education, Experience, PersonalInfo, Project, ResumeDocument, SocialLink,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleLocale {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "id")]
    Indonesian,
}

struct SampleExperience {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    current: bool,
    description: &'static str,
}

struct Sample {
    full_name: &'static str,
    job_title: &'static str,
    email: &'static str,
    phone: &'static str,
    location: &'static str,
    links: [(&'static str, &'static str); 2],
    summary: &'static str,
    experience: [SampleExperience; 2],
    // (school, degree, start, end)
    education: (&'static str, &'static str, &'static str, &'static str),
    // (title, link, description)
    projects: [(&'static str, &'static str, &'static str); 2],
    skills: &'static [&'static str],
    languages: &'static [&'static str],
    certifications: &'static [&'static str],
}

static ENGLISH: Sample = Sample {
    full_name: "Alex Morgan",
    job_title: "Senior Product Designer",
    email: "alex.morgan@example.com",
    phone: "+1 (555) 0123-4567",
    location: "San Francisco, CA",
    links: [
        ("LinkedIn", "linkedin.com/in/alexmorgan"),
        ("Portfolio", "alexmorgan.design"),
    ],
    summary: "Creative and detail-oriented Product Designer with over 6 years of experience in \
building user-centric digital products. Proficient in translating complex requirements into \
intuitive and visually appealing designs. Strong background in UX research, prototyping, and \
cross-functional collaboration.",
    experience: [
        SampleExperience {
            title: "Senior Product Designer",
            company: "TechFlow Solutions",
            location: "San Francisco, CA",
            start_date: "2021-03-01",
            end_date: "",
            current: true,
            description: "Lead the design of the core SaaS platform, resulting in a 25% increase in user engagement.\n\
Mentored junior designers and established a unified design system used across 4 products.\n\
Collaborated closely with engineering and product management to define product roadmap and feature specifications.",
        },
        SampleExperience {
            title: "UX Designer",
            company: "Creative Pulse Agency",
            location: "Austin, TX",
            start_date: "2018-06-01",
            end_date: "2021-02-01",
            current: false,
            description: "Designed responsive websites and mobile apps for diverse clients in fintech and healthcare.\n\
Conducted user research, usability testing, and stakeholder interviews to inform design decisions.\n\
Created high-fidelity wireframes and interactive prototypes using Figma and Adobe XD.",
        },
    ],
    education: (
        "University of Texas at Austin",
        "Bachelor of Fine Arts in Design",
        "2014-09-01",
        "2018-05-01",
    ),
    projects: [
        (
            "EcoTrack Mobile App",
            "behance.net/ecotrack",
            "Designed a personal carbon footprint tracking app. Featured on App Store \"Apps we Love\".",
        ),
        (
            "Fintech Dashboard Redesign",
            "dribbble.com/alex/fintech",
            "Complete overhaul of a legacy banking dashboard, improving task completion rate by 40%.",
        ),
    ],
    skills: &[
        "Figma",
        "Adobe Creative Suite",
        "Prototyping",
        "User Research",
        "HTML/CSS",
        "Agile Methodology",
    ],
    languages: &["English (Native)", "Spanish (Conversational)"],
    certifications: &[
        "Google UX Design Professional Certificate",
        "Certified Scrum Master (CSM)",
    ],
};

static INDONESIAN: Sample = Sample {
    full_name: "Budi Santoso",
    job_title: "Senior Product Designer",
    email: "budi.santoso@example.com",
    phone: "+62 812 3456 7890",
    location: "Jakarta, Indonesia",
    links: [
        ("LinkedIn", "linkedin.com/in/budisantoso"),
        ("Portfolio", "budisantoso.design"),
    ],
    summary: "Desainer Produk yang kreatif dan berorientasi pada detail dengan pengalaman lebih dari \
6 tahun dalam membangun produk digital yang berpusat pada pengguna. Mahir dalam menerjemahkan \
kebutuhan kompleks menjadi desain yang intuitif dan menarik secara visual. Memiliki latar belakang \
yang kuat dalam riset UX, pembuatan prototipe, dan kolaborasi lintas fungsi.",
    experience: [
        SampleExperience {
            title: "Senior Product Designer",
            company: "Teknologi Nusantara",
            location: "Jakarta Selatan",
            start_date: "2021-03-01",
            end_date: "",
            current: true,
            description: "Memimpin desain platform SaaS inti, menghasilkan peningkatan keterlibatan pengguna sebesar 25%.\n\
Membimbing desainer junior dan menetapkan sistem desain terpadu yang digunakan di 4 produk.\n\
Bekerja sama dengan tim teknik dan manajemen produk untuk menentukan peta jalan produk dan spesifikasi fitur.",
        },
        SampleExperience {
            title: "UX Designer",
            company: "Agensi Kreatif Maju",
            location: "Bandung",
            start_date: "2018-06-01",
            end_date: "2021-02-01",
            current: false,
            description: "Merancang situs web responsif dan aplikasi seluler untuk berbagai klien di bidang fintech dan kesehatan.\n\
Melakukan riset pengguna, pengujian kegunaan, dan wawancara pemangku kepentingan untuk menginformasikan keputusan desain.\n\
Membuat kerangka gambar fidelitas tinggi dan prototipe interaktif menggunakan Figma dan Adobe XD.",
        },
    ],
    education: (
        "Universitas Indonesia",
        "Sarjana Desain Komunikasi Visual",
        "2014-09-01",
        "2018-05-01",
    ),
    projects: [
        (
            "Aplikasi EcoTrack",
            "behance.net/ecotrack",
            "Merancang aplikasi pelacakan jejak karbon pribadi. Ditampilkan di App Store \"Apps we Love\".",
        ),
        (
            "Desain Ulang Dashboard Fintech",
            "dribbble.com/budi/fintech",
            "Pembaruan menyeluruh dashboard perbankan lama, meningkatkan tingkat penyelesaian tugas sebesar 40%.",
        ),
    ],
    skills: &[
        "Figma",
        "Adobe Creative Suite",
        "Prototyping",
        "Riset Pengguna",
        "HTML/CSS",
        "Metodologi Agile",
    ],
    languages: &["Bahasa Indonesia (Native)", "Bahasa Inggris (Professional)"],
    certifications: &[
        "Sertifikat Profesional UX Design Google",
        "Certified Scrum Master (CSM)",
    ],
};

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fills `document` with the sample résumé for `locale`.
pub fn apply_sample(document: &ResumeDocument, locale: SampleLocale) -> ResumeDocument {
    let sample = match locale {
        SampleLocale::English => &ENGLISH,
        SampleLocale::Indonesian => &INDONESIAN,
    };

    let personal_info = PersonalInfo {
        full_name: sample.full_name.to_string(),
        job_title: sample.job_title.to_string(),
        email: sample.email.to_string(),
        phone: sample.phone.to_string(),
        location: sample.location.to_string(),
        links: sample
            .links
            .iter()
            .map(|(platform, url)| SocialLink {
                id: new_item_id(),
                platform: platform.to_string(),
                url: url.to_string(),
            })
            .collect(),
        photo: document.personal_info.photo.clone(),
    };

    let (school, degree, start_date, end_date) = sample.education;

    ResumeDocument {
        personal_info,
        summary: sample.summary.to_string(),
        experience: sample
            .experience
            .iter()
            .map(|e| Experience {
                id: new_item_id(),
                title: e.title.to_string(),
                company: e.company.to_string(),
                location: e.location.to_string(),
                start_date: e.start_date.to_string(),
                end_date: e.end_date.to_string(),
                current: e.current,
                description: e.description.to_string(),
            })
            .collect(),
        education: vec![Education {
            id: new_item_id(),
            school: school.to_string(),
            degree: degree.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            description: String::new(),
        }],
        projects: sample
            .projects
            .iter()
            .map(|(title, link, description)| Project {
                id: new_item_id(),
                title: title.to_string(),
                link: link.to_string(),
                description: description.to_string(),
            })
            .collect(),
        skills: strings(sample.skills),
        languages: strings(sample.languages),
        certifications: strings(sample.certifications),
        ..document.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::TemplateId;

    #[test]
    fn test_english_sample_keeps_identity() {
        let mut doc = ResumeDocument::new_blank();
        doc.title = "Design roles".to_string();
        doc.template_id = TemplateId::Professional;
        doc.personal_info.photo = Some("data:image/png;base64,AAAA".to_string());

        let filled = apply_sample(&doc, SampleLocale::English);
        assert_eq!(filled.id, doc.id);
        assert_eq!(filled.title, "Design roles");
        assert_eq!(filled.template_id, TemplateId::Professional);
        assert_eq!(filled.personal_info.photo, doc.personal_info.photo);
        assert_eq!(filled.personal_info.full_name, "Alex Morgan");
        assert_eq!(filled.experience.len(), 2);
        assert!(filled.experience[0].current);
        assert_eq!(filled.skills.len(), 6);
    }

    #[test]
    fn test_indonesian_sample_content() {
        let filled = apply_sample(&ResumeDocument::new_blank(), SampleLocale::Indonesian);
        assert_eq!(filled.personal_info.full_name, "Budi Santoso");
        assert_eq!(filled.education[0].school, "Universitas Indonesia");
        assert!(filled.summary.starts_with("Desainer Produk"));
    }

    #[test]
    fn test_sample_overwrites_existing_entries() {
        let mut doc = ResumeDocument::new_blank();
        doc.experience.push(Experience {
            id: "old".to_string(),
            ..Default::default()
        });
        doc.skills = vec!["Cobol".to_string()];
        let filled = apply_sample(&doc, SampleLocale::English);
        assert!(filled.experience.iter().all(|e| e.id != "old"));
        assert!(!filled.skills.contains(&"Cobol".to_string()));
    }

    #[test]
    fn test_item_ids_are_fresh_and_unique() {
        let doc = ResumeDocument::new_blank();
        let a = apply_sample(&doc, SampleLocale::English);
        let b = apply_sample(&doc, SampleLocale::English);
        assert_ne!(a.experience[0].id, b.experience[0].id);
        assert_ne!(a.experience[0].id, a.experience[1].id);
    }

    #[test]
    fn test_locale_codes() {
        let en: SampleLocale = serde_json::from_str("\"en\"").unwrap();
        let id: SampleLocale = serde_json::from_str("\"id\"").unwrap();
        assert_eq!(en, SampleLocale::English);
        assert_eq!(id, SampleLocale::Indonesian);
        assert!(serde_json::from_str::<SampleLocale>("\"fr\"").is_err());
    }
}
