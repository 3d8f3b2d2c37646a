//! The published profile

use super::{Education, Profile, Project, Skill, SocialLinks};
use crate::response::AssetUrls;

const EMAIL: &str = "malojighorpade07@gmail.com";

impl Profile {
    /// Build the published profile, linking project images through `assets`
    pub fn maloji(assets: &AssetUrls) -> Self {
        let grades = [("sem1", "8.41"), ("sem2", "8.95"), ("sem3", "8.41"), ("sem4", "8.77")]
            .into_iter()
            .map(|(sem, grade)| (sem.to_string(), grade.to_string()))
            .collect();

        let skills = vec![
            Skill::new("Python", 90),
            Skill::new("SQL", 85),
            Skill::new("Java", 80),
            Skill::new("JavaScript", 75),
            Skill::new("React", 70),
            Skill::new("Machine Learning", 80),
        ];

        let projects = [
            ("RAG Based Video Search App", "Major Project", "Agriculture.png"),
            ("Agriculture Dashboard (Power BI)", "Mini Project", "Agriculuredasbored.jpeg"),
            ("Laptop Price Prediction", "Mini Project", "laptopprice.jpeg"),
        ]
        .into_iter()
        .zip(1..)
        .map(|((title, category, image), id)| Project {
            id,
            title: title.to_string(),
            category: category.to_string(),
            image: assets.url_for(image),
        })
        .collect();

        let social_links = SocialLinks {
            linkedin: "https://www.linkedin.com/in/maloji-ghorpade-9ba716308".to_string(),
            github: "https://github.com/malojighorpade".to_string(),
            email: EMAIL.to_string(),
        };

        Self {
            name: "Maloji Vijay Ghorpade".to_string(),
            title: "B.E. Computer Engineering Student | Data Science & AI Enthusiast".to_string(),
            bio: "Motivated Computer Engineering student skilled in Data Science, AI, and Web Development."
                .to_string(),
            phone: "+91-9850841185".to_string(),
            email: EMAIL.to_string(),
            education: Education {
                degree: "B.E. Computer Engineering".to_string(),
                institution: "Jaywantrao Sawant College of Engineering, Pune".to_string(),
                university: "SPPU".to_string(),
                grades,
                period: "2023 – 2027".to_string(),
            },
            skills,
            projects,
            social_links,
        }
    }
}
