//! Static portfolio records
//!
//! Everything shown on the page is compiled in. Style metadata (accents,
//! categories) lives on the records themselves so nothing is derived from
//! display names at render time.

use folio_math::Rgba;

/// Two-stop gradient used to tint a card, badge or progress bar
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accent {
    pub from: Rgba,
    pub to: Rgba,
}

impl Accent {
    pub const fn new(from: Rgba, to: Rgba) -> Self {
        Self { from, to }
    }

    pub const BLUE_CYAN: Accent = Accent::new(palette::BLUE, palette::CYAN);
    pub const GREEN_EMERALD: Accent = Accent::new(palette::GREEN, palette::EMERALD);
    pub const PURPLE_PINK: Accent = Accent::new(palette::PURPLE, palette::PINK);
    pub const YELLOW_ORANGE: Accent = Accent::new(palette::YELLOW, palette::ORANGE);
    pub const TEAL_BLUE: Accent = Accent::new(palette::TEAL, palette::BLUE);
    pub const BLUE_PURPLE: Accent = Accent::new(palette::BLUE, palette::PURPLE);
    pub const GREEN_TEAL: Accent = Accent::new(palette::GREEN, palette::TEAL);
    pub const ORANGE_RED: Accent = Accent::new(palette::ORANGE, palette::RED);
}

/// Named swatches the accents are built from
pub mod palette {
    use folio_math::Rgba;

    pub const BLUE: Rgba = Rgba::from_rgb8(0x3b, 0x82, 0xf6);
    pub const CYAN: Rgba = Rgba::from_rgb8(0x06, 0xb6, 0xd4);
    pub const GREEN: Rgba = Rgba::from_rgb8(0x22, 0xc5, 0x5e);
    pub const EMERALD: Rgba = Rgba::from_rgb8(0x10, 0xb9, 0x81);
    pub const PURPLE: Rgba = Rgba::from_rgb8(0xa8, 0x55, 0xf7);
    pub const PINK: Rgba = Rgba::from_rgb8(0xec, 0x48, 0x99);
    pub const YELLOW: Rgba = Rgba::from_rgb8(0xea, 0xb3, 0x08);
    pub const ORANGE: Rgba = Rgba::from_rgb8(0xf9, 0x73, 0x16);
    pub const TEAL: Rgba = Rgba::from_rgb8(0x14, 0xb8, 0xa6);
    pub const RED: Rgba = Rgba::from_rgb8(0xef, 0x44, 0x44);
    pub const VIOLET: Rgba = Rgba::from_rgb8(0x8b, 0x5c, 0xf6);
}

// ==================== Profile ====================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub availability: &'static str,
    pub tagline: &'static str,
    pub stack: &'static [&'static str],
    pub resume: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Umayer Hossain",
    role: "Full-Stack Developer",
    availability: "Available for new opportunities",
    tagline: "I craft scalable web applications using modern technologies like Node.js, \
              TypeScript, and Next Js. Passionate about clean code, performance optimization, \
              and creating exceptional user experiences.",
    stack: &["Next.js", "React", "TypeScript", "Node.js", "MongoDB", "Tailwind CSS"],
    resume: "/Md Umayer Hossain.pdf",
};

// ==================== About ====================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm Umayer, a passionate web developer specializing in the MERN stack, Next.js, and \
     TypeScript. I love building full-stack applications from scratch and bringing ideas to \
     life with clean, maintainable code.",
    "I enjoy working with React for its component-based architecture, Next.js for building \
     scalable and SEO-friendly web apps, and Node.js for its flexibility in backend \
     development. TypeScript helps me write more reliable and robust code throughout the stack.",
    "Over time, I have completed several projects that deepened my understanding of frontend \
     and backend technologies. I'm eager to collaborate on meaningful projects, learn from \
     experienced developers, and continuously improve my skills to deliver the best web \
     experiences.",
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Continuous Learning",
        description: "Always eager to learn new technologies and improve my skills through courses and practice.",
    },
    Highlight {
        title: "Team Collaboration",
        description: "Great at working in teams, communicating ideas, and contributing to group projects.",
    },
    Highlight {
        title: "Creative Problem Solving",
        description: "Love tackling challenges with innovative approaches and thinking outside the box.",
    },
    Highlight {
        title: "Goal-Oriented",
        description: "Focused on achieving objectives and delivering quality results within deadlines.",
    },
];

pub const INTERESTS: &[&str] = &["Coffee Enthusiast", "Music Lover", "Gaming", "Photography"];

// ==================== Navigation ====================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    /// In-page anchor, e.g. `#skills`
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", href: "#home" },
    NavItem { name: "About", href: "#about" },
    NavItem { name: "Journey", href: "#timeline" },
    NavItem { name: "Skills", href: "#skills" },
    NavItem { name: "Projects", href: "#projects" },
    NavItem { name: "Blog", href: "#blog" },
    NavItem { name: "Contact", href: "#contact" },
];

// ==================== Skills ====================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0 to 100
    pub level: u8,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillCategory {
    /// Stable key used for selection
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8, description: &'static str) -> Skill {
    Skill { name, level, description }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "frontend",
        title: "Frontend Development",
        icon: "🎨",
        accent: Accent::BLUE_CYAN,
        skills: &[
            skill("React", 85, "Component-based UI development"),
            skill("JavaScript", 80, "Modern ES6+ features"),
            skill("TypeScript", 70, "Type-safe development"),
            skill("HTML5/CSS3", 90, "Semantic markup & styling"),
            skill("Tailwind CSS", 85, "Utility-first CSS framework"),
            skill("Next.js", 75, "React framework for production"),
        ],
    },
    SkillCategory {
        id: "backend",
        title: "Backend Development",
        icon: "⚙️",
        accent: Accent::GREEN_EMERALD,
        skills: &[
            skill("Node.js", 80, "Server-side JavaScript runtime"),
            skill("Express.js", 75, "Web application framework"),
            skill("MongoDB", 70, "NoSQL database management"),
            skill("PostgreSQL", 65, "Relational database systems"),
            skill("REST APIs", 85, "RESTful web services"),
            skill("Authentication", 70, "JWT & OAuth implementation"),
        ],
    },
    SkillCategory {
        id: "tools",
        title: "Tools & Technologies",
        icon: "🛠️",
        accent: Accent::PURPLE_PINK,
        skills: &[
            skill("Git/GitHub", 85, "Version control & collaboration"),
            skill("VS Code", 90, "Code editor proficiency"),
            skill("Docker", 60, "Containerization basics"),
            skill("AWS", 55, "Cloud services fundamentals"),
            skill("Figma", 70, "UI/UX design tools"),
            skill("Testing", 65, "Unit & integration testing"),
        ],
    },
    SkillCategory {
        id: "soft",
        title: "Soft Skills",
        icon: "🧠",
        accent: Accent::YELLOW_ORANGE,
        skills: &[
            skill("Problem Solving", 90, "Analytical thinking & debugging"),
            skill("Communication", 85, "Clear technical communication"),
            skill("Team Work", 88, "Collaborative development"),
            skill("Learning", 95, "Quick adaptation to new tech"),
            skill("Time Management", 80, "Project deadline management"),
            skill("Leadership", 75, "Team guidance & mentoring"),
        ],
    },
];

/// Look up a skill category by its id
pub fn skill_category(id: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.id == id)
}

// ==================== Projects ====================

/// Category a project is filed under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Academic,
    Personal,
    Learning,
    Frontend,
    FullStack,
}

impl ProjectCategory {
    /// All categories in filter-button order
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Academic,
        ProjectCategory::Personal,
        ProjectCategory::Learning,
        ProjectCategory::Frontend,
        ProjectCategory::FullStack,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Academic => "Academic",
            ProjectCategory::Personal => "Personal",
            ProjectCategory::Learning => "Learning",
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::FullStack => "Full-stack",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub tech: &'static [&'static str],
    pub repo: &'static str,
    pub live: &'static str,
    pub stars: u32,
    pub forks: u32,
    pub year: u16,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Full-stack MERN e-commerce application built for my final year project.",
        category: ProjectCategory::Academic,
        tech: &["React", "Node.js", "MongoDB", "Stripe"],
        repo: "https://github.com/umayerhossain/ecommerce",
        live: "https://ecommerce-demo.vercel.app",
        stars: 18,
        forks: 6,
        year: 2024,
    },
    Project {
        id: 2,
        title: "Task Manager",
        description: "Productivity app to manage daily tasks with drag-and-drop UI.",
        category: ProjectCategory::Personal,
        tech: &["React", "LocalStorage", "TailwindCSS"],
        repo: "https://github.com/umayerhossain/task-manager",
        live: "https://task-manager.vercel.app",
        stars: 10,
        forks: 2,
        year: 2023,
    },
    Project {
        id: 3,
        title: "Weather App",
        description: "Real-time weather data using the OpenWeather API.",
        category: ProjectCategory::Learning,
        tech: &["JavaScript", "HTML5", "CSS3"],
        repo: "https://github.com/umayerhossain/weather-app",
        live: "https://weather-demo.netlify.app",
        stars: 5,
        forks: 1,
        year: 2022,
    },
];

// ==================== Testimonials ====================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    /// Star rating, 1 to 5
    pub rating: u8,
    pub content: &'static str,
    pub relationship: &'static str,
    pub accent: Accent,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Dr. Sarah Ahmed",
        role: "Computer Science Professor",
        company: "University of Dhaka",
        rating: 5,
        content: "Umayer was one of my most dedicated students. His final year project demonstrated \
                  exceptional technical skills and creativity. He has a strong foundation in computer \
                  science principles and shows great potential for a successful career in software \
                  development.",
        relationship: "Professor",
        accent: Accent::BLUE_CYAN,
    },
    Testimonial {
        id: 2,
        name: "Mohammad Rahman",
        role: "Senior Developer",
        company: "TechStart Bangladesh",
        rating: 5,
        content: "I mentored Umayer during his internship, and I was impressed by his eagerness to \
                  learn and quick grasp of new concepts. He's a team player who asks thoughtful \
                  questions and isn't afraid to tackle challenging problems.",
        relationship: "Mentor",
        accent: Accent::GREEN_EMERALD,
    },
    Testimonial {
        id: 3,
        name: "Fatima Khan",
        role: "Project Teammate",
        company: "University Group Project",
        rating: 5,
        content: "Working with Umayer on our group projects was always a pleasure. He's reliable, \
                  communicates well, and brings creative solutions to the table. His positive \
                  attitude and collaborative spirit made our team more productive.",
        relationship: "Teammate",
        accent: Accent::PURPLE_PINK,
    },
    Testimonial {
        id: 4,
        name: "Ahmed Hassan",
        role: "Programming Club President",
        company: "University Programming Club",
        rating: 5,
        content: "Umayer has been an active and valuable member of our programming club. He \
                  regularly participates in coding competitions and helps junior students with their \
                  programming challenges. His dedication to continuous learning is truly inspiring.",
        relationship: "Peer",
        accent: Accent::YELLOW_ORANGE,
    },
    Testimonial {
        id: 5,
        name: "Lisa Chen",
        role: "Hackathon Organizer",
        company: "Code Bangladesh",
        rating: 5,
        content: "I've seen Umayer participate in multiple hackathons, and he consistently \
                  demonstrates strong problem-solving skills and the ability to work under pressure. \
                  He's always willing to help other participants and contributes positively to the \
                  community.",
        relationship: "Organizer",
        accent: Accent::TEAL_BLUE,
    },
];

// ==================== Certifications ====================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: u16,
    pub credential_id: &'static str,
    pub skills: &'static [&'static str],
    pub description: &'static str,
    pub verified: bool,
    pub link: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "JavaScript Algorithms and Data Structures",
        issuer: "freeCodeCamp",
        year: 2023,
        credential_id: "fcc-js-algo-2023",
        skills: &["JavaScript", "Algorithms", "Data Structures", "Problem Solving"],
        description: "300+ hours of coursework covering ES6, regular expressions, debugging, data \
                      structures, and algorithmic thinking.",
        verified: true,
        link: "https://freecodecamp.org/certification/umayerhossain/javascript-algorithms-and-data-structures",
    },
    Certification {
        title: "Responsive Web Design",
        issuer: "freeCodeCamp",
        year: 2022,
        credential_id: "fcc-rwd-2022",
        skills: &["HTML5", "CSS3", "Responsive Design", "Accessibility"],
        description: "300+ hours of coursework covering HTML, CSS, Visual Design, Accessibility, and \
                      Responsive Web Design principles.",
        verified: true,
        link: "https://freecodecamp.org/certification/umayerhossain/responsive-web-design",
    },
    Certification {
        title: "React - The Complete Guide",
        issuer: "Udemy",
        year: 2023,
        credential_id: "UC-react-complete-2023",
        skills: &["React", "Redux", "React Router", "Hooks", "Context API"],
        description: "40+ hours comprehensive course covering React fundamentals, advanced patterns, \
                      and real-world project development.",
        verified: true,
        link: "https://udemy.com/certificate/UC-react-complete-2023",
    },
    Certification {
        title: "Node.js Developer Course",
        issuer: "Coursera",
        year: 2024,
        credential_id: "coursera-nodejs-2024",
        skills: &["Node.js", "Express.js", "MongoDB", "REST APIs"],
        description: "Comprehensive course on server-side development with Node.js, including \
                      database integration and API development.",
        verified: true,
        link: "https://coursera.org/verify/nodejs-2024",
    },
    Certification {
        title: "Git and GitHub Essentials",
        issuer: "LinkedIn Learning",
        year: 2023,
        credential_id: "linkedin-git-2023",
        skills: &["Git", "GitHub", "Version Control", "Collaboration"],
        description: "Complete course on version control systems, Git workflows, and collaborative \
                      development using GitHub.",
        verified: true,
        link: "https://linkedin.com/learning/certificates/git-essentials-2023",
    },
    Certification {
        title: "Introduction to Databases",
        issuer: "Coursera",
        year: 2023,
        credential_id: "coursera-db-2023",
        skills: &["SQL", "Database Design", "MySQL", "Data Modeling"],
        description: "Foundational course covering database concepts, SQL queries, normalization, \
                      and database design principles.",
        verified: true,
        link: "https://coursera.org/verify/databases-2023",
    },
];

// ==================== Contact ====================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactMethod {
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub available: &'static str,
    pub accent: Accent,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        title: "Email",
        value: "umayer@example.com",
        href: "mailto:umayer@example.com",
        description: "Best way to reach me",
        available: "Always",
        accent: Accent::BLUE_CYAN,
    },
    ContactMethod {
        title: "Phone",
        value: "+880 1234 567890",
        href: "tel:+8801234567890",
        description: "Available 9 AM - 6 PM",
        available: "Business Hours",
        accent: Accent::GREEN_EMERALD,
    },
    ContactMethod {
        title: "Video Call",
        value: "Schedule a Meeting",
        href: "#",
        description: "Google Meet or Zoom",
        available: "By Appointment",
        accent: Accent::PURPLE_PINK,
    },
    ContactMethod {
        title: "Coffee Chat",
        value: "Let's Meet Up",
        href: "#",
        description: "In-person meeting in Dhaka",
        available: "Weekends",
        accent: Accent::YELLOW_ORANGE,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    /// Hover tint
    pub hover: Rgba,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/umayer-hossain-604999351/",
        description: "Professional network",
        hover: Rgba::from_rgb8(0x60, 0xa5, 0xfa),
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/UmayerCoding1",
        description: "Code repositories",
        hover: Rgba::from_rgb8(0xd1, 0xd5, 0xdb),
    },
    SocialLink {
        name: "Twitter",
        href: "https://x.com/Umayer_dev",
        description: "Tech discussions",
        hover: Rgba::from_rgb8(0x22, 0xd3, 0xee),
    },
    SocialLink {
        name: "Email",
        href: "mailto:umayer.hossain10@gmail.com",
        description: "Direct contact",
        hover: Rgba::from_rgb8(0x4a, 0xde, 0x80),
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    /// Button label
    pub action: &'static str,
    pub accent: Accent,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Job Opportunities",
        description: "Discuss full-time positions",
        action: "Let's Talk",
        accent: Accent::BLUE_PURPLE,
    },
    QuickAction {
        title: "Internships",
        description: "Explore internship programs",
        action: "Apply Now",
        accent: Accent::GREEN_TEAL,
    },
    QuickAction {
        title: "Freelance Projects",
        description: "Collaborate on projects",
        action: "Get Quote",
        accent: Accent::ORANGE_RED,
    },
    QuickAction {
        title: "Mentorship",
        description: "Learning opportunities",
        action: "Connect",
        accent: Accent::PURPLE_PINK,
    },
];

// ==================== Code Showcase ====================

/// Runnable example in the code playground
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CodeDemo {
    pub title: &'static str,
    pub language: &'static str,
    pub description: &'static str,
    pub code: &'static str,
    /// Shown in the output pane once a run finishes
    pub output: &'static str,
}

pub const CODE_DEMOS: &[CodeDemo] = &[
    CodeDemo {
        title: "React Component",
        language: "jsx",
        description: "A reusable button component with TypeScript",
        code: r#"interface ButtonProps {
  variant: 'primary' | 'secondary';
  children: React.ReactNode;
  onClick?: () => void;
}

const CustomButton: React.FC<ButtonProps> = ({ 
  variant, 
  children, 
  onClick 
}) => {
  return (
    <button
      className={`btn btn-${variant}`}
      onClick={onClick}
    >
      {children}
    </button>
  );
};

export default CustomButton;"#,
        output: "✨ Interactive button component ready!",
    },
    CodeDemo {
        title: "Node.js API",
        language: "javascript",
        description: "Express.js REST API endpoint",
        code: r#"const express = require('express');
const app = express();

app.use(express.json());

// GET all users
app.get('/api/users', async (req, res) => {
  try {
    const users = await User.find();
    res.json({
      success: true,
      data: users
    });
  } catch (error) {
    res.status(500).json({
      success: false,
      message: error.message
    });
  }
});

app.listen(3000, () => {
  console.log('Server running on port 3000');
});"#,
        output: "🚀 Server running on port 3000",
    },
    CodeDemo {
        title: "MongoDB Query",
        language: "javascript",
        description: "Database operations with Mongoose",
        code: r#"const mongoose = require('mongoose');

const userSchema = new mongoose.Schema({
  name: { type: String, required: true },
  email: { type: String, unique: true },
  createdAt: { type: Date, default: Date.now }
});

const User = mongoose.model('User', userSchema);

// Create new user
const createUser = async (userData) => {
  try {
    const user = new User(userData);
    await user.save();
    return user;
  } catch (error) {
    throw new Error(error.message);
  }
};"#,
        output: "💾 User created successfully!",
    },
    CodeDemo {
        title: "Algorithm Challenge",
        language: "javascript",
        description: "Binary search implementation",
        code: r#"function binarySearch(arr, target) {
  let left = 0;
  let right = arr.length - 1;
  
  while (left <= right) {
    const mid = Math.floor((left + right) / 2);
    
    if (arr[mid] === target) {
      return mid;
    } else if (arr[mid] < target) {
      left = mid + 1;
    } else {
      right = mid - 1;
    }
  }
  
  return -1;
}

// Test the function
const numbers = [1, 3, 5, 7, 9, 11, 13];
console.log(binarySearch(numbers, 7)); // Output: 3"#,
        output: "🎯 Found at index: 3",
    },
];

/// Snippet typed out line by line in the hero editor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CodeSnippet {
    pub title: &'static str,
    pub code: &'static str,
}

pub const CODE_SNIPPETS: &[CodeSnippet] = &[
    CodeSnippet {
        title: "Express Server Setup",
        code: r#"import express from 'express';
import cors from 'cors';
import { config } from 'dotenv';

config();

const app = express();
const PORT = process.env.PORT || 3000;

app.use(cors());
app.use(express.json());

app.get('/api/health', (req, res) => {
  res.json({ status: 'OK', timestamp: new Date() });
});

app.listen(PORT, () => {
  console.log(`Server running on port ${PORT}`);
});"#,
    },
    CodeSnippet {
        title: "TypeScript Interface",
        code: r#"interface User {
  id: string;
  email: string;
  profile: UserProfile;
  createdAt: Date;
  updatedAt: Date;
}

interface UserProfile {
  firstName: string;
  lastName: string;
  avatar?: string;
  bio?: string;
  skills: string[];
}"#,
    },
    CodeSnippet {
        title: "Async Database Operations",
        code: r#"import { Pool } from 'pg';

const pool = new Pool({
  connectionString: process.env.DATABASE_URL,
  ssl: process.env.NODE_ENV === 'production'
});

export class DatabaseService {
  async getUsers(limit: number = 10): Promise<User[]> {
    try {
      const query = 'SELECT * FROM users ORDER BY created_at DESC LIMIT $1';
      const result = await pool.query(query, [limit]);
      return result.rows;
    } catch (error) {
      console.error('Database error:', error);
      throw new Error('Failed to fetch users');
    }
  }
}"#,
    },
    CodeSnippet {
        title: "Modern JavaScript Patterns",
        code: r#"// Functional composition with currying
const pipe = (...fns) => (value) => fns.reduce((acc, fn) => fn(acc), value);

const compose = (...fns) => (value) => fns.reduceRight((acc, fn) => fn(acc), value);

const curry = (fn) => (...args) =>
  args.length >= fn.length ? fn(...args) : curry(fn.bind(null, ...args));

const addTax = curry((rate, price) => price * (1 + rate));
const formatCurrency = (amount) => `$${amount.toFixed(2)}`;
const calculateTotal = pipe(addTax(0.08), formatCurrency);"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_categories_have_six_skills() {
        assert_eq!(SKILL_CATEGORIES.len(), 4);
        for category in SKILL_CATEGORIES {
            assert_eq!(category.skills.len(), 6, "{}", category.id);
            assert!(category.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_skill_category_lookup() {
        assert_eq!(skill_category("backend").unwrap().title, "Backend Development");
        assert_eq!(skill_category("soft").unwrap().accent, Accent::YELLOW_ORANGE);
        assert!(skill_category("cooking").is_none());
    }

    #[test]
    fn test_project_ids_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_nav_items_are_anchors() {
        assert_eq!(NAV_ITEMS.len(), 7);
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ProjectCategory::FullStack.label(), "Full-stack");
        assert_eq!(ProjectCategory::Academic.to_string(), "Academic");
    }

    #[test]
    fn test_code_records_have_content() {
        assert_eq!(CODE_DEMOS.len(), 4);
        assert!(CODE_DEMOS.iter().all(|d| !d.code.is_empty() && !d.output.is_empty()));
        assert!(CODE_SNIPPETS.iter().all(|s| s.code.lines().count() > 1));
    }
}
