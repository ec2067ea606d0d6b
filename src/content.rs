use http::Uri;
use thiserror::Error;

use crate::config::is_allowed_image;

// document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Education => "Education & Certifications",
            Self::Contact => "Get in Touch",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTag(pub &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static str,
    pub image_url: &'static str,
    pub image_alt: &'static str,
    pub code_url: &'static str,
    pub demo_url: &'static str,
}

impl ProjectCard {
    pub const IMAGE_WIDTH: u32 = 300;
    pub const IMAGE_HEIGHT: u32 = 200;

    pub fn urls(&self) -> [&'static str; 3] {
        [self.image_url, self.code_url, self.demo_url]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub program: &'static str,
    pub dates: &'static str,
    pub details: &'static [&'static str],
}

impl EducationEntry {
    pub fn summary(&self) -> String {
        format!("{} ({})", self.program, self.dates)
    }
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "About",
        target: Section::About,
    },
    NavItem {
        label: "Skills",
        target: Section::Skills,
    },
    NavItem {
        label: "Projects",
        target: Section::Projects,
    },
    NavItem {
        label: "Education",
        target: Section::Education,
    },
    NavItem {
        label: "Contact",
        target: Section::Contact,
    },
];

/// About paragraphs with their entrance delays in seconds.
pub static ABOUT_PARAGRAPHS: &[(&str, f64)] = &[
    (
        "I am a passionate front-end developer with a keen interest in creating visually appealing and user-friendly websites. I specialize in React.js, Next.js, and JavaScript, along with expertise in styling frameworks like Tailwind CSS.",
        0.0,
    ),
    (
        "I thrive on transforming creative ideas into functional web applications and am always eager to learn new technologies to enhance my skills. Currently, I am advancing my knowledge through a Full Stack Development course at Saylani Mass IT Training, where I'm exploring back-end development and expanding my proficiency in the MERN stack.",
        0.2,
    ),
    (
        "My approach to development is centered around simplicity, efficiency, and collaboration. I believe in the power of teamwork to create impactful solutions and continuously strive to improve my coding practices to contribute to exciting projects in the tech world.",
        0.4,
    ),
];

pub static SKILLS: &[SkillTag] = &[
    SkillTag("HTML"),
    SkillTag("CSS"),
    SkillTag("JavaScript (ES6+)"),
    SkillTag("TypeScript"),
    SkillTag("Bootstrap"),
    SkillTag("Tailwind CSS"),
    SkillTag("Shadcn"),
    SkillTag("React.js"),
    SkillTag("Next.js"),
    SkillTag("Vite.js"),
    SkillTag("Firebase"),
    SkillTag("Git & GitHub"),
];

pub static PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        title: "Financial Management Application",
        description:
            "Manage expenses, track income, calculate taxes, and plan budgets effectively.",
        tools: "React, CSS, Redux & Firebase",
        image_url: "https://i.ibb.co/Vx7XrVB/main-screen.png",
        image_alt: "Financial Management Application",
        code_url: "https://github.com/iamqitmeer/finance-management",
        demo_url: "https://finance-management-qitmeer.vercel.app",
    },
    ProjectCard {
        title: "E-commerce Website",
        description: "A full-featured online store with admin controls for product management.",
        tools: "React.js, Firebase, Tailwind CSS, NextUI",
        image_url: "https://i.ibb.co/fQG0BMP/ecommerce.png",
        image_alt: "E-commerce Website",
        code_url: "https://github.com/iamqitmeer/SMIT-0002-WMA-Batch-11-2024-Training/tree/main/SMIT%20Projects/final_frontend_ecommerce",
        demo_url: "https://ecommerce-react-two-alpha.vercel.app/",
    },
    ProjectCard {
        title: "Multiple Task Manager",
        description: "A Functional Multiple Task Manager that organizes tasks by days, allowing users to add and manage separate to-dos for each day of the week.",
        tools: "React.js, Tailwind CSS",
        image_url: "https://i.ibb.co/tZyq91Y/multi-task-manager.png",
        image_alt: "Multiple Task Manager",
        code_url: "https://github.com/iamqitmeer/multiple-task-manager",
        demo_url: "https://multi-task-manager.vercel.app/",
    },
    ProjectCard {
        title: "Todo List App",
        description: "A Functional Multiple Task Manager that organizes tasks by days, allowing users to add and manage separate to-dos for each day of the week.",
        tools: "React.js, Tailwind CSS",
        image_url: "https://i.ibb.co/cyxbkhb/weather.png",
        image_alt: "Todo List App",
        code_url: "https://github.com/iamqitmeer/multiple-task-manager",
        demo_url: "https://multi-task-manager.vercel.app/",
    },
];

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "GBCHS College Korangi No 3",
        program: "Intermediate in Pre-Engineering",
        dates: "2023 - ongoing",
        details: &[],
    },
    EducationEntry {
        institution: "Government Boys Secondary School, KTS-11",
        program: "Completed Matriculation in Science",
        dates: "2021 - 2023",
        details: &[],
    },
    EducationEntry {
        institution: "Saylani Mass IT Training (SMIT)",
        program: "Certification in Full Stack Development",
        dates: "2023 - ongoing",
        details: &[
            "Focus on front-end technologies: HTML, CSS, JavaScript, React.js, and Next.js",
            "Learning back-end development and MERN stack technologies",
        ],
    },
    EducationEntry {
        institution: "SIMSAT COMPUTER ACADEMY",
        program: "Certification in PCIT",
        dates: "2022 - 2023",
        details: &["Covered basics of Designing, Development, Accounting, and Complete MS Office suite"],
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("malformed url in {owner}: {url}")]
    MalformedUrl { owner: &'static str, url: &'static str },
    #[error("image host not allowed for {owner}: {url}")]
    DisallowedImage { owner: &'static str, url: &'static str },
    #[error("nav item {label} points at #{anchor}, which is not rendered")]
    UnknownAnchor {
        label: &'static str,
        anchor: &'static str,
    },
    #[error("nav has {labels} labels but {anchors} distinct anchors")]
    NavMismatch { labels: usize, anchors: usize },
    #[error("section id #{0} is declared twice")]
    DuplicateSection(&'static str),
}

fn check_url(owner: &'static str, url: &'static str) -> Result<(), ContentError> {
    let parsed = url
        .parse::<Uri>()
        .map_err(|_| ContentError::MalformedUrl { owner, url })?;
    match (parsed.scheme_str(), parsed.host()) {
        (Some("https") | Some("http"), Some(_)) => Ok(()),
        _ => Err(ContentError::MalformedUrl { owner, url }),
    }
}

/// Checks the nav against the set of section ids that actually render.
pub fn check_nav(nav: &[NavItem], rendered: &[Section]) -> Result<(), ContentError> {
    for (i, section) in rendered.iter().enumerate() {
        if rendered[..i].contains(section) {
            return Err(ContentError::DuplicateSection(section.id()));
        }
    }
    for item in nav {
        if !rendered.contains(&item.target) {
            return Err(ContentError::UnknownAnchor {
                label: item.label,
                anchor: item.target.id(),
            });
        }
    }
    let mut anchors = nav.iter().map(|n| n.target.id()).collect::<Vec<_>>();
    anchors.sort_unstable();
    anchors.dedup();
    if anchors.len() != nav.len() {
        return Err(ContentError::NavMismatch {
            labels: nav.len(),
            anchors: anchors.len(),
        });
    }
    Ok(())
}

pub fn check_projects(projects: &[ProjectCard]) -> Result<(), ContentError> {
    for project in projects {
        for url in project.urls() {
            check_url(project.title, url)?;
        }
        if !is_allowed_image(project.image_url) {
            return Err(ContentError::DisallowedImage {
                owner: project.title,
                url: project.image_url,
            });
        }
    }
    Ok(())
}

pub fn validate() -> Result<(), ContentError> {
    check_nav(NAV_ITEMS, &Section::ALL)?;
    check_projects(PROJECTS)?;
    Ok(())
}
