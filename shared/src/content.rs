//! Everything the page says. Edit here, not in the views.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Nandu Panakanti",
    title: "Full Stack Developer",
    tagline: "Building polished, scalable web apps with measurable impact.",
    email: "panakantinandu@gmail.com",
    linkedin: "https://www.linkedin.com/in/nandu-panakanti-41839731a/",
    github: "https://github.com/panakantinandu",
    phone: "+1 (913) 206-2988",
    location: "📍 Remote / US",
    availability: "AVAILABLE FOR FULL-TIME — 2026",
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Github,
    Blog,
    Contact,
}

/// Page order, used by both the header and the footer nav.
pub const SECTIONS: [SectionId; 7] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Github,
    SectionId::Blog,
    SectionId::Contact,
];

impl SectionId {
    /// Element id, without the `#`.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Github => "github",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Github => "GitHub",
            SectionId::Blog => "Blog",
            SectionId::Contact => "Contact",
        }
    }

    /// Heading subtitle; the hero has none.
    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            SectionId::Home => None,
            SectionId::About => Some(
                "Full-stack developer across React, Node, and cloud. I turn ideas into production-ready systems with clean UX and measurable outcomes.",
            ),
            SectionId::Skills => Some("Tools I use to build and ship."),
            SectionId::Projects => Some("Selected work — real features, real stacks."),
            SectionId::Github => Some("A snapshot of recent activity."),
            SectionId::Blog => Some("Writing to clarify thinking. Posts are in progress."),
            SectionId::Contact => Some("No forms, no fluff — reach me directly."),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutCard {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const ABOUT_CARDS: [AboutCard; 2] = [
    AboutCard {
        heading: "Snapshot",
        body: "I build end-to-end web apps: responsive frontends, robust APIs, and data models that hold up in the real world. Experience with AWS/Azure, Stripe, Firebase, and modern CI/CD.",
    },
    AboutCard {
        heading: "Currently",
        body: "Master’s in Computer Science (UCM, 2026). Open to full-time roles where I can own features, move fast, and ship.",
    },
];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub group: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 5] = [
    SkillGroup {
        group: "Frontend",
        items: &["React", "JavaScript", "TypeScript", "HTML", "CSS"],
    },
    SkillGroup {
        group: "Backend",
        items: &["Node.js", "Express.js", "PHP"],
    },
    SkillGroup {
        group: "Databases",
        items: &["MongoDB", "MySQL", "SQL Server", "Oracle"],
    },
    SkillGroup {
        group: "Cloud / DevOps",
        items: &["AWS", "Azure", "Git", "GitHub", "GitLab"],
    },
    SkillGroup {
        group: "Other",
        items: &["Stripe", "Twilio", "Firebase", "Grafana"],
    },
];

/// Link placeholder for projects without a demo or public code.
pub const PLACEHOLDER_HREF: &str = "#";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub code: Option<&'static str>,
}

impl ProjectLinks {
    pub fn demo_href(&self) -> &'static str {
        self.demo.unwrap_or(PLACEHOLDER_HREF)
    }

    pub fn code_href(&self) -> &'static str {
        self.code.unwrap_or(PLACEHOLDER_HREF)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub highlights: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub links: ProjectLinks,
}

impl Project {
    /// Later cards fade in slightly slower.
    pub fn reveal_duration(index: usize) -> f64 {
        0.55 + index as f64 * 0.04
    }
}

pub const PROJECTS: [Project; 5] = [
    Project {
        title: "StudyMate — Educational Management",
        blurb: "LAMP stack platform for sessions, uploads, notifications, and role-based access control.",
        highlights: &[
            "Secure auth with RBAC & hashed passwords",
            "PHPMailer for verification & password reset",
            "MySQL schema + migrations for reliability",
        ],
        stack: &["PHP", "MySQL", "HTML", "CSS", "JavaScript", "Bootstrap"],
        links: ProjectLinks {
            demo: None,
            code: Some("https://github.com/panakantinandu/studymate"),
        },
    },
    Project {
        title: "Community Food Sharing Platform",
        blurb: "Cloud-based donor/receiver marketplace with real-time matching and geolocation.",
        highlights: &[
            "Firebase Auth + role-based flows",
            "Google Maps for nearby listings",
            "Cloud Functions notifications & metrics",
        ],
        stack: &["React", "Express", "Firebase", "Firestore/MongoDB"],
        links: ProjectLinks { demo: None, code: None },
    },
    Project {
        title: "AI Deepfake & Misinformation Detection",
        blurb: "Multimodal models (video/audio/text) with explainability tooling for robust detection.",
        highlights: &[
            "CNNs for frames, Transformers for text",
            "Attention-based fusion, AUC-ROC/F1 evaluation",
            "Grad-CAM & SHAP/LIME explanations",
        ],
        stack: &["Python", "PyTorch", "OpenCV", "Librosa", "Transformers"],
        links: ProjectLinks {
            demo: None,
            code: Some("https://github.com/panakantinandu/deepfake-detection-system_NanduML"),
        },
    },
    Project {
        title: "Property Management Platform",
        blurb: "Full-stack rental platform with digital applications, secure payments, and notifications.",
        highlights: &[
            "Automated deposit handling & refunds",
            "Stripe & PayPal payments with status updates",
            "Twilio/Firebase notifications for events",
        ],
        stack: &["React", "Node", "Express", "MongoDB", "Stripe", "Firebase"],
        links: ProjectLinks {
            demo: None,
            code: Some("https://github.com/panakantinandu/Property-MS-main"),
        },
    },
    Project {
        title: "MQWC Bandpass Filter (HFSS)",
        blurb: "High-frequency filter design with improved harmonic suppression for radar communication.",
        highlights: &[
            "S-parameter simulation & tuning",
            "Optimized resonators & coupling gaps",
            "Enhanced harmonic rejection",
        ],
        stack: &["HFSS", "EM Simulation"],
        links: ProjectLinks { demo: None, code: None },
    },
];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "Building Reliable Notification Pipelines with Firebase + Twilio",
        date: "Coming Soon",
        summary: "Design notes, pitfalls, and patterns for real-time notifications in full-stack apps.",
    },
    BlogPost {
        title: "From Prototype to Production: Hardening a MERN App",
        date: "Coming Soon",
        summary: "Auth, observability, CI/CD that actually matters.",
    },
    BlogPost {
        title: "Multimodal Deepfake Detection: A Practical Walkthrough",
        date: "Coming Soon",
        summary: "Data prep, model fusion, and evaluation without academic fluff.",
    },
];

pub const ORB_CAPTION: &str = "Interactive tech orb — just because we can.";

pub const CONTACT_HEADING: &str = "Let’s build something.";
pub const CONTACT_BODY: &str =
    "Prefer a quick email over forms. If you really want a form later, wire it to Formspree/Nodemailer.";
pub const CONTACT_NOTE: &str = "Keep it simple: until you need a backend, use mailto links. If you want real submissions, hook this up to a serverless endpoint later.";

const STATS_BASE: &str = "https://github-readme-stats.vercel.app/api";

pub fn github_stats_url(username: &str) -> String {
    format!("{STATS_BASE}?username={username}&show_icons=true&hide_border=true&theme=tokyonight")
}

pub fn github_top_languages_url(username: &str) -> String {
    format!("{STATS_BASE}/top-langs/?username={username}&layout=compact&hide_border=true&theme=tokyonight")
}

pub fn footer_copyright(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PROFILE.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_have_unique_anchors_in_page_order() {
        let anchors: Vec<&str> = SECTIONS.iter().map(|section| section.anchor()).collect();
        assert_eq!(
            anchors,
            ["home", "about", "skills", "projects", "github", "blog", "contact"]
        );
        assert_eq!(SectionId::Github.label(), "GitHub");
        assert_eq!(SectionId::Contact.href(), "#contact");
        assert!(SectionId::Home.subtitle().is_none());
    }

    #[test]
    fn missing_links_fall_back_to_placeholder() {
        let food_sharing = &PROJECTS[1];
        assert_eq!(food_sharing.links.demo_href(), "#");
        assert_eq!(food_sharing.links.code_href(), "#");
        assert_eq!(
            PROJECTS[0].links.code_href(),
            "https://github.com/panakantinandu/studymate"
        );
    }

    #[test]
    fn project_reveal_slows_per_card() {
        assert!((Project::reveal_duration(0) - 0.55).abs() < 1e-12);
        assert!((Project::reveal_duration(4) - 0.71).abs() < 1e-12);
    }

    #[test]
    fn stats_urls_embed_username() {
        assert_eq!(
            github_stats_url("panakantinandu"),
            "https://github-readme-stats.vercel.app/api?username=panakantinandu&show_icons=true&hide_border=true&theme=tokyonight"
        );
        assert_eq!(
            github_top_languages_url("octocat"),
            "https://github-readme-stats.vercel.app/api/top-langs/?username=octocat&layout=compact&hide_border=true&theme=tokyonight"
        );
    }

    #[test]
    fn footer_names_owner_and_year() {
        assert_eq!(
            footer_copyright(2026),
            "© 2026 Nandu Panakanti. All rights reserved."
        );
        assert_eq!(PROFILE.mailto(), "mailto:panakantinandu@gmail.com");
    }

    #[test]
    fn content_serializes_for_inspection() {
        let json = serde_json::to_value(PROJECTS[0]).unwrap();
        assert_eq!(json["links"]["demo"], serde_json::Value::Null);
        assert_eq!(json["stack"][0], "PHP");
        assert_eq!(serde_json::to_value(SectionId::Github).unwrap(), "github");
    }
}
