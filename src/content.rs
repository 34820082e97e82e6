//! Static content catalogs supplied to the page layer
//!
//! Fixed literal collections: the submission flow itself never reads them,
//! but the career modal is opened for a specific opening from this catalog.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A service offering shown on the services page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

/// An open position shown on the career page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOpening {
    pub id: String,
    pub position: String,
    pub location: String,
    pub experience: String,
    pub description: String,
}

/// A blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
}

/// A delivered project shown in the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Core service offerings
pub fn services() -> Vec<Service> {
    vec![
        service(
            "SAP ERP Solutions",
            "End-to-end implementation and support of SAP S/4HANA.",
        ),
        service(
            "Custom Development",
            "Intelligent applications designed for your unique business needs.",
        ),
        service(
            "System Integration",
            "Seamless integration of systems to optimize performance.",
        ),
    ]
}

/// Technical expertise areas
pub fn skill_areas() -> Vec<String> {
    ["Data Analytics", "Cloud Solutions", "Cyber Security", "DevOps"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn opening(id: &str, position: &str, location: &str, experience: &str, description: &str) -> JobOpening {
    JobOpening {
        id: id.to_string(),
        position: position.to_string(),
        location: location.to_string(),
        experience: experience.to_string(),
        description: description.to_string(),
    }
}

/// Current job openings
pub fn job_openings() -> Vec<JobOpening> {
    vec![
        opening(
            "1",
            "Senior SAP Consultant",
            "Pune, India",
            "5+ Years",
            "Lead SAP S/4HANA implementation projects, providing expert guidance and solutions \
             to enterprise clients. Strong experience in FI/CO modules required.",
        ),
        opening(
            "2",
            "React Frontend Developer",
            "Remote",
            "3+ Years",
            "Build and maintain modern, responsive user interfaces for our client-facing \
             applications using Next.js and TypeScript. Collaborate with UI/UX designers.",
        ),
        opening(
            "3",
            "Cloud DevOps Engineer",
            "Bengaluru, India",
            "4+ Years",
            "Manage and scale our cloud infrastructure on AWS/Azure. Implement CI/CD pipelines, \
             monitor system performance, and ensure high availability.",
        ),
    ]
}

/// Synthetic opening behind the "Submit Resume" call-to-action for
/// candidates applying outside a listed position
pub fn general_application() -> JobOpening {
    opening("general", "General Application", "Any", "Varies", "")
}

/// Published blog entries, newest first
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "Unlocking Business Potential with SAP S/4HANA".to_string(),
            content: "Discover the core advantages of migrating to SAP S/4HANA. From real-time \
                      analytics to a simplified data model, we explore how this intelligent ERP \
                      can revolutionize your business operations."
                .to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 8, 15, 10, 0, 0).unwrap(),
        },
        BlogPost {
            id: "2".to_string(),
            title: "The Future of AI in Enterprise Resource Planning".to_string(),
            content: "Artificial intelligence is no longer a futuristic concept; it's a \
                      present-day reality in ERP. Learn how AI is enhancing automation, \
                      predictive analytics, and decision-making within modern ERP systems."
                .to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 8, 10, 9, 0, 0).unwrap(),
        },
        BlogPost {
            id: "3".to_string(),
            title: "Cloud vs. On-Premise: A Modern Tech Dilemma".to_string(),
            content: "Choosing between cloud and on-premise infrastructure is a critical \
                      decision. We break down the pros, cons, and key considerations for \
                      scalability, security, and cost-effectiveness."
                .to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 8, 5, 14, 30, 0).unwrap(),
        },
        BlogPost {
            id: "4".to_string(),
            title: "Cybersecurity Best Practices for a Digital-First World".to_string(),
            content: "As businesses become more digitized, the threat landscape evolves. Here \
                      are essential cybersecurity strategies to protect your valuable data and \
                      infrastructure from modern threats."
                .to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 7, 28, 11, 0, 0).unwrap(),
        },
    ]
}

fn project(id: &str, title: &str, description: &str, tags: &[&str]) -> PortfolioProject {
    PortfolioProject {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Delivered project portfolio
pub fn portfolio() -> Vec<PortfolioProject> {
    vec![
        project(
            "1",
            "MooRopan",
            "An agriculture tech solution designed to optimize crop management and improve \
             yield for farmers.",
            &["React.js", "Express.js", "Node.js", "MongoDB"],
        ),
        project(
            "2",
            "SRDT",
            "A security and data transformation tool ensuring data integrity and protection \
             for enterprise-level applications.",
            &["React.js", "Java", "Spring Boot", "MySQL"],
        ),
        project(
            "3",
            "Amsa",
            "A comprehensive software suite for managing complex business operations and \
             workflows.",
            &["React.js", "Node.js", "Express.js", "MongoDB"],
        ),
        project(
            "4",
            "Crowd Fund",
            "A robust platform for raising capital through community contributions, featuring \
             secure payment gateway and project tracking.",
            &["React", "Java", "Spring Boot", "MySQL", "Razorpay", "PostgreSQL"],
        ),
        project(
            "5",
            "Agrimitra",
            "A farmer-centric application providing vital information on weather, market \
             rates, and best farming practices.",
            &["React.js", "Node.js", "Express.js", "MongoDB"],
        ),
        project(
            "6",
            "Exilieen",
            "A comprehensive software suite for managing complex business operations and \
             workflows.",
            &["React.js", "MongoDB", "Node.js", "Express.js"],
        ),
    ]
}
