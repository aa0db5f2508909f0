//! Static copy rendered by the page sections.

pub const OWNER: &str = "Ather Ali";
pub const ROLE: &str = "Full Stack AI Engineer";

#[derive(Debug, Clone, Copy)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: &'static str,
    pub is_link: bool,
}

impl InfoRow {
    const fn text(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            is_link: false,
        }
    }

    pub fn href(&self) -> Option<String> {
        self.is_link.then(|| format!("https://{}", self.value))
    }
}

pub static PERSONAL_INFO: [InfoRow; 8] = [
    InfoRow::text("NAME", OWNER),
    InfoRow::text("BIRTHDAY", "13. 12. 1997."),
    InfoRow::text("ROLE", ROLE),
    InfoRow::text("EMAIL", "athergenius777@gmail.com"),
    InfoRow::text("PHONE", "(+92) 347 564 6617"),
    InfoRow {
        label: "WEBSITE",
        value: "www.smarttechdevs.com",
        is_link: true,
    },
    InfoRow::text("LOCATION", "Gilgit, Pakistan"),
    InfoRow::text("INTERESTS", "Books, Scouting, Movies"),
];

pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub focus: &'static str,
    pub years: &'static str,
    pub url: &'static str,
}

pub static EDUCATION: Education = Education {
    school: "Air University Islamabad",
    degree: "Bachelor of Science in Computer Sciences",
    focus: "Specialized in Natural Language Processing",
    years: "2018 - 2022",
    url: "https://www.au.edu.pk",
};

pub static JOURNEY: [&str; 3] = [
    "I graduated with a degree in Computer Science in 2022 and began my tech career in 2021 while still studying. During this time, I gained valuable experience working with tech companies and freelancing, where I helped clients achieve their goals. These roles were essential in building my ability to navigate, solve diverse technical challenges and consistently delivering results.",
    "Building on this foundation, my focus has naturally shifted to generative AI research, where I'm passionate about creating ethical AI systems that make technology more accessible and solve key social issues. This work aligns with my desire to use technology for positive change, and I'm eager to continue applying my skills in this area.",
    "Ultimately, I aspire to lead research teams, connecting new ideas with practical, real-world solutions, just as I've done in my professional journey so far.",
];

pub static BEYOND_TECH: &str = "Beyond tech, my experience as a Boy Scout and volunteer has shaped my problem-solving and leadership skills, instilling a strong sense of community and responsibility. Combined with my technical background, this equips me to contribute meaningfully to computer science research. I'm committed to continuous learning and driving impactful change in this evolving field.";

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub frameworks: &'static [&'static str],
}

pub static SERVICES: [Service; 4] = [
    Service {
        icon: "🤖",
        title: "Generative AI",
        description: "I harness the power of cutting-edge AI to create innovative solutions. From natural language processing to image generation, I bring AI-driven ideas to life.",
        frameworks: &["Python", "Langchain", "Vector DBs", "AWS Bedrock", "PyTorch", "TensorFlow"],
    },
    Service {
        icon: "🌐",
        title: "Full Stack Web/AI Development",
        description: "I create end-to-end SaaS solutions that seamlessly integrate front-end aesthetics with robust back-end functionality. I build responsive, scalable, and user-friendly web and AI SaaS applications.",
        frameworks: &["Langchain", "Vector DBs", "React", "Next.js", "Django", "Flask", "Streamlit"],
    },
    Service {
        icon: "⚙️",
        title: "Web Development",
        description: "I develop powerful and efficient front-end and server-side solutions. I architect design, databases, APIs, and server logic to ensure your applications run smoothly and securely at scale.",
        frameworks: &["React", "Next.js", "Django", "Flask", "FastAPI", "PostgreSQL", "MongoDB", "Redis"],
    },
    Service {
        icon: "🎨",
        title: "Illustration Design",
        description: "I bring ideas to life with custom illustrations. From digital art to brand mascots, I create unique visuals that capture attention and convey your message effectively.",
        frameworks: &["Illustrator", "Procreate", "Figma", "Sketch", "Photoshop"],
    },
];

pub struct Project {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub static PROJECTS: [Project; 2] = [
    Project {
        image: "/images/project1.jpg",
        title: "WellBot: A cutting-edge AI-powered Mental Health chatbot",
        description: "Developed an advanced conversational AI chatbot using natural language processing and machine learning techniques. This chatbot provides intelligent responses and assists users with various tasks.",
        url: "https://wellbot.streamlit.app/",
    },
    Project {
        image: "/images/project2.png",
        title: "Responsive Web Design for my Company",
        description: "I was part of team who created a fully responsive website for my company with modern design principles, ensuring optimal user experience across all devices.",
        url: "https://www.smarttechdevs.com/",
    },
];

pub struct Role {
    pub period: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
}

pub struct Timeline {
    pub title: &'static str,
    pub roles: &'static [Role],
}

pub static TIMELINES: [Timeline; 2] = [
    Timeline {
        title: "Professional Experience",
        roles: &[
            Role {
                period: "January, 2023 - Present",
                title: "Full Stack AI Engineer",
                description: "Developing advanced LLM RAG chatbots using Django, Flask, and Streamlit. Leveraged Langchain with Pinecone and other databases to create knowledge bases, reducing hallucination and boosting accuracy by 70% for client businesses. Implemented custom AI solutions that enhanced customer engagement and operational efficiency across diverse industries.",
                location: "SmartTech Devs / Gilgit",
            },
            Role {
                period: "May, 2023 - July, 2023",
                title: "AI Emotion Detection Specialist (Freelance)",
                description: "Developed an advanced emotion detection system for healthcare professionals using OpenAI and ParlAI. Implemented machine learning models that improved emotion recognition accuracy by 50%. This solution enhanced patient-doctor communication and treatment personalization in mental health settings.",
                location: "Remote",
            },
            Role {
                period: "November, 2021 - December, 2022",
                title: "Full Stack Web Developer",
                description: "Led development of 10+ full-stack web applications using Django, Flask, React, and Tailwind CSS. Optimized site performance, reducing load times by 25% and significantly enhancing user experience. Implemented efficient coding practices and responsive designs, resulting in a 40% increase in client satisfaction ratings.",
                location: "SmartTech Devs / Gilgit",
            },
        ],
    },
    Timeline {
        title: "Voluntary Experience",
        roles: &[
            Role {
                period: "2005 - Present",
                title: "Boy Scout",
                description: "Since the age of 8, I have dedicated 6 hours per week to community development as a scout. During this time, I have earned numerous badges, and developed skills in leadership, teamwork, and problem-solving. My efforts have contributed to local community, demonstrating my commitment to making a positive impact.",
                location: "Islamabad / Gilgit",
            },
            Role {
                period: "June, 2022 - December, 2022",
                title: "Tech Mentor",
                description: "Mentoring aspiring developers in web and AI technologies. Conducted weekly workshops, improving participants' coding skills by an average of 40%. Organized hackathons that increased community engagement by 60%.",
                location: "Local Coding Bootcamp / Islamabad",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
}

impl Skill {
    const fn new(name: &'static str, percentage: u8) -> Self {
        Self { name, percentage }
    }

    /// Bar fill, never wider than its track.
    pub fn fill(&self) -> u8 {
        self.percentage.min(100)
    }
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Languages & Frameworks",
        skills: &[
            Skill::new("Python", 90),
            Skill::new("C++ and C#", 70),
            Skill::new("JavaScript", 75),
            Skill::new("React", 75),
            Skill::new("Django", 85),
            Skill::new("Flask", 90),
            Skill::new("Streamlit", 95),
            Skill::new("RAG", 75),
        ],
    },
    SkillCategory {
        title: "Tools",
        skills: &[
            Skill::new("Langchain", 88),
            Skill::new("AWS Cloud", 80),
            Skill::new("Azure Cloud", 50),
            Skill::new("TensorFlow", 70),
            Skill::new("PyTorch", 55),
            Skill::new("Pinecone, ChromaDB", 85),
            Skill::new("FAISS, PGVector", 90),
        ],
    },
    SkillCategory {
        title: "Domains",
        skills: &[
            Skill::new("Generative AI", 80),
            Skill::new("Machine Learning", 85),
            Skill::new("Deep Learning", 75),
            Skill::new("Full Stack Web Development", 85),
            Skill::new("Adobe Illustration", 90),
        ],
    },
    SkillCategory {
        title: "Soft Skills",
        skills: &[
            Skill::new("Communication", 95),
            Skill::new("Problem Solving", 90),
            Skill::new("Team Collaboration", 85),
            Skill::new("Adaptability", 88),
        ],
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Facebook",
        href: "https://web.facebook.com/ather.ali.587/",
        icon: "devicon-facebook-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ather-ali-1ba022123/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/AtherAli777",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "Goodreads",
        href: "https://www.goodreads.com/user/show/58216702-ather-ali",
        icon: "extra-goodreads",
    },
];

pub static CONTACT_DETAILS: [(&str, &str); 4] = [
    ("Name", OWNER),
    ("Address", "Gilgit, Pakistan"),
    ("Phone", "(+92) 347 564 6617"),
    ("Hours", "9:00 am - 7:00 pm"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_website_row_links() {
        let links = PERSONAL_INFO
            .iter()
            .filter_map(InfoRow::href)
            .collect::<Vec<_>>();
        assert_eq!(links, ["https://www.smarttechdevs.com"]);
    }

    #[test]
    fn test_skill_fill_is_clamped() {
        assert_eq!(Skill::new("overachiever", 140).fill(), 100);
        assert_eq!(Skill::new("Python", 90).fill(), 90);
        assert!(SKILL_CATEGORIES
            .iter()
            .flat_map(|c| c.skills)
            .all(|s| s.percentage <= 100));
    }

    #[test]
    fn test_every_service_lists_frameworks() {
        assert!(SERVICES.iter().all(|s| !s.frameworks.is_empty()));
    }
}
