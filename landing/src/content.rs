//! Literal page content.
//!
//! Every list on the page is a fixed `&'static` slice of a small typed record.
//! Nothing here is mutated or reordered at runtime.

/// In-page navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Anchor id including the leading `#`
    pub target: &'static str,
}

/// Decorative number tile (hero and about sections).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub tech: &'static [&'static str],
}

impl ProjectCard {
    /// Separator between technology tags on a project card.
    pub const TECH_SEPARATOR: &'static str = " · ";

    /// Technology tags in source order, e.g. `React · Node · Postgres`.
    pub fn tech_line(&self) -> String {
        self.tech.join(Self::TECH_SEPARATOR)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechChip {
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// Number of star glyphs shown under the quote
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", target: "#about" },
    NavLink { label: "Services", target: "#services" },
    NavLink { label: "Projects", target: "#projects" },
    NavLink { label: "Tech", target: "#tech" },
    NavLink { label: "Contact", target: "#contact" },
];

pub const HERO_METRICS: &[MetricTile] = &[
    MetricTile { label: "Projects", value: "50+" },
    MetricTile { label: "Years", value: "5" },
    MetricTile { label: "Clients", value: "30+" },
    MetricTile { label: "Uptime", value: "99.9%" },
];

pub const ABOUT_POINTS: &[&str] = &[
    "Product-driven engineering culture",
    "Design systems with accessibility at the core",
    "Performance, security, and observability by default",
];

pub const ABOUT_METRICS: &[MetricTile] = &[
    MetricTile { label: "Projects", value: "50+" },
    MetricTile { label: "Screens", value: "120+" },
    MetricTile { label: "Commits", value: "20k+" },
    MetricTile { label: "Delivery", value: "100%" },
];

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: "Web App Development",
        description: "Modern, scalable, and performant web apps with delightful UX.",
    },
    ServiceCard {
        title: "Mobile App Development",
        description: "iOS and Android apps using React Native and native stacks.",
    },
    ServiceCard {
        title: "Cloud & DevOps Solutions",
        description: "CI/CD, containers, serverless, and infrastructure-as-code.",
    },
    ServiceCard {
        title: "UI/UX Design",
        description: "Design systems, prototyping, and user-centered interfaces.",
    },
    ServiceCard {
        title: "AI & Automation Integration",
        description: "Embed AI into your product workflows and operations.",
    },
    ServiceCard {
        title: "Consulting & Audits",
        description: "Architecture reviews, performance, and security audits.",
    },
];

pub const PROJECTS: &[ProjectCard] = &[
    ProjectCard { title: "Fintech Dashboard", tech: &["React", "Node", "Postgres"] },
    ProjectCard { title: "E\u{2011}commerce Platform", tech: &["Next.js", "Stripe", "Prisma"] },
    ProjectCard { title: "AI Ops Assistant", tech: &["Python", "FastAPI", "OpenAI"] },
    ProjectCard { title: "Logistics Suite", tech: &["React", "Go", "gRPC"] },
    ProjectCard { title: "Mobile Banking", tech: &["RN", "TypeScript", "GraphQL"] },
    ProjectCard { title: "Cloud Analytics", tech: &["AWS", "Athena", "S3"] },
];

pub const TECH_STACK: &[TechChip] = &[
    TechChip { name: "React" },
    TechChip { name: "Next.js" },
    TechChip { name: "Node.js" },
    TechChip { name: "Python" },
    TechChip { name: "FastAPI" },
    TechChip { name: "Postgres" },
    TechChip { name: "MongoDB" },
    TechChip { name: "AWS" },
    TechChip { name: "Docker" },
    TechChip { name: "Kubernetes" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ava Thompson",
        role: "CTO, NovaBank",
        quote: "Shilog delivered ahead of schedule with flawless execution.",
        rating: 5,
    },
    Testimonial {
        name: "Daniel Park",
        role: "Founder, Shiply",
        quote: "World\u{2011}class engineering meets thoughtful design.",
        rating: 5,
    },
    Testimonial {
        name: "Maya Chen",
        role: "PM, CloudScale",
        quote: "A true partner for scaling our platform.",
        rating: 5,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink { label: "GitHub", href: "#" },
];
