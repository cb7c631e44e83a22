//! Static portfolio content. Content is data, not behavior: every section
//! renders from these tables.

pub const BRAND: &str = "iamtaduuuuu portfolio";
pub const WINDOW_TITLE: &str = "Võ Tấn Dũng — Portfolio";

pub const FULL_NAME: &str = "Võ Tấn Dũng";
pub const ROLE: &str = "Backend / Fullstack Developer";
pub const GREETING: &str = "👋  Xin chào!";
pub const PORTRAIT_INITIALS: &str = "VTD";

/// The hero tagline typed out character by character.
pub const TAGLINE: &str = "I'm Võ Tấn Dũng - Backend Developer specializing in \
building high-performance, secure, and scalable systems.";
pub const TYPE_DELAY_SECS: f64 = 0.08;
pub const TYPE_START_DELAY_SECS: f64 = 1.8;
pub const CARET_BLINK_SECS: f64 = 0.5;

pub const ABOUT_INTRO: [&str; 2] = [
    "Hello! I'm Võ Tấn Dũng, a passionate developer who loves creating robust \
and scalable solutions. My journey in programming started with curiosity and \
has evolved into a deep passion for building digital experiences that matter.",
    "I specialize in backend development while maintaining strong fullstack \
capabilities. I enjoy working with modern technologies and frameworks to \
create efficient, maintainable, and user-friendly applications.",
];

pub const CURRENT_FOCUS: [&str; 3] = [
    "Building high-performance backend systems with .NET and Java.",
    "Exploring real-time 3D rendering with ThreeJS and React Three Fiber.",
    "Mastering cloud-native technologies and microservices architecture.",
];

/// Accent colors shared by cards and headings, as RGB triples.
pub const ACCENT_CYAN: (u8, u8, u8) = (0, 234, 255);
pub const ACCENT_PINK: (u8, u8, u8) = (255, 41, 114);
pub const ACCENT_BLUE: (u8, u8, u8) = (59, 130, 246);
pub const ACCENT_GREEN: (u8, u8, u8) = (16, 185, 129);
pub const ACCENT_YELLOW: (u8, u8, u8) = (255, 198, 41);

pub struct TechCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub accent: (u8, u8, u8),
}

pub const TECH_CARDS: [TechCard; 3] = [
    TechCard {
        title: "Backend",
        items: &["C#", "Java", "ASP.NET Core"],
        accent: ACCENT_PINK,
    },
    TechCard {
        title: "Frontend",
        items: &["ReactJS", "NextJS", "ThreeJS"],
        accent: ACCENT_BLUE,
    },
    TechCard {
        title: "Database",
        items: &["SQL Server", "MongoDB", "Firebase"],
        accent: ACCENT_GREEN,
    },
];

pub struct JourneyEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const JOURNEY_HEADING: &str = "My Journey in HUFLIT";

pub const JOURNEY: [JourneyEntry; 9] = [
    JourneyEntry {
        period: "09/2022 - 11/2022",
        title: "Getting Started with Programming",
        detail: "Introduction to basic coding with C# programming language",
    },
    JourneyEntry {
        period: "02/2023 - 04/2023",
        title: "Database & Core Programming",
        detail: "Learning database interaction with SQL Server, fundamental \
programming techniques: Recursion, Divide and Conquer, Sorting Algorithms, \
and Object-Oriented Programming (OOP)",
    },
    JourneyEntry {
        period: "08/2023 - 10/2023",
        title: "Web Development & Data Structures",
        detail: "Introduction to web development with HTML, CSS and ASP.NET \
MVC framework, deep dive into data structures and algorithms: OOP, Stack, \
Queue, Linked List, Binary Tree",
    },
    JourneyEntry {
        period: "12/2023 - 03/2024",
        title: "Mobile Development & Graph Algorithms",
        detail: "Mobile development with Java - Android Studio, learning graph \
algorithms like DFS, BFS, Dijkstra, Prim... and understanding software \
analysis and design principles",
    },
    JourneyEntry {
        period: "05/2024 - 07/2024",
        title: "Team Collaboration & Project Management",
        detail: "Learning teamwork and group project execution following the \
complete process from analysis and design to programming",
    },
    JourneyEntry {
        period: "09/2024 - 11/2024",
        title: "Agile Development & APIs",
        detail: "Implementing group projects using Agile-Scrum methodology and \
working with RESTful APIs",
    },
    JourneyEntry {
        period: "12/2024 - 03/2025",
        title: "Design Patterns & Deployment",
        detail: "Learning to apply design patterns in real projects and \
understanding how to deploy websites to the internet",
    },
    JourneyEntry {
        period: "05/2025 - 07/2025",
        title: "Project Management & Internship Prep",
        detail: "Learning software project management and preparing for \
internship opportunities",
    },
    JourneyEntry {
        period: "08/2025 - Present",
        title: "Real-World Experience",
        detail: "Preparing for internship to gain practical experience and \
enhance professional knowledge",
    },
];

pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub repo_url: &'static str,
    pub accent: (u8, u8, u8),
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "E-commerce Website MERDI",
        kind: "Fullstack",
        description: "Comprehensive ASP.NET Core MVC e-commerce platform \
featuring advanced product management, real-time chat support with SignalR, \
integrated payment processing with Stripe, and dynamic user experience. \
Includes admin dashboard, inventory management, wishlist functionality, and \
responsive design with Bootstrap.",
        tech: &[
            "ASP.NET Core",
            "C#",
            "Entity Framework",
            "SQL Server",
            "Stripe API",
            "Bootstrap",
            "jQuery",
            "Identity Framework",
        ],
        repo_url: "https://github.com/ComBiCha/E-commerce",
        accent: ACCENT_PINK,
    },
    Project {
        title: "E-commerce Website SHNGear",
        kind: "Fullstack",
        description: "A fullstack e-commerce site built with a modern tech \
stack, featuring a ReactJS-based frontend and a robust ASP.NET Core backend, \
with payment integration.",
        tech: &[
            "ASP.NET Core",
            "C#",
            "SQL Server",
            "Paypal API",
            "ReactJS",
            "Restful API",
        ],
        repo_url: "https://github.com/Waito3007/SHNGear",
        accent: ACCENT_BLUE,
    },
    Project {
        title: "E-commerce Mobile App MERDI",
        kind: "Frontend",
        description: "A mobile application for the MERDI e-commerce platform, \
built with Flutter for a cross-platform experience, connected to a powerful \
backend.",
        tech: &[
            "Flutter",
            "ASP.NET Core",
            "SQL Server",
            "JWT",
            "RESTful API",
            "State Management",
        ],
        repo_url: "https://github.com/1Tatsumi2/mobile_nang_cao",
        accent: ACCENT_GREEN,
    },
    Project {
        title: "Social Network Mobile App ClaraZone",
        kind: "Fullstack",
        description: "A mobile-first social networking application using Java \
and Firebase for a real-time, scalable, and engaging user experience.",
        tech: &["Java", "Firebase"],
        repo_url: "https://github.com/Waito3007/ClaraZone",
        accent: ACCENT_YELLOW,
    },
];

pub const CONTACT_EMAIL: &str = "iamvotandung26@gmail.com";
pub const CONTACT_MAILTO: &str = "mailto:iamvotandung26@gmail.com";
pub const CONTACT_BLURB: &str = "I'm currently open to new opportunities and \
collaborations. Feel free to send me a message using the form, or connect \
with me on social media.";

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/iamvotandung",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/iamtaduuuuu/?hl=vi",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/v%C3%B5-t%E1%BA%A5n-d%C5%A9ng-aa10b1323/",
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/iamTaDu",
    },
];

/// Shipped alongside the executable; opened with the system handler.
pub const CV_FILE: &str = "Vo Tan Dung - CV.pdf";

pub const FOOTER: &str = "© 2025 Võ Tấn Dũng. Built with Rust and FLTK.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(JOURNEY.len(), 9);
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(TECH_CARDS.len(), 3);
        assert_eq!(SOCIAL_LINKS.len(), 4);
        assert!(!TAGLINE.is_empty());
    }

    #[test]
    fn test_urls_are_absolute() {
        for project in &PROJECTS {
            assert!(project.repo_url.starts_with("https://"));
        }
        for link in &SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"));
        }
    }
}
