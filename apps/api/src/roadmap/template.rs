//! Static roadmap template. Pure, deterministic and total: the topic is
//! substituted verbatim into fixed phrasing.

use crate::roadmap::models::{Project, Resources, Roadmap, Stage};

pub fn template_roadmap(topic: &str) -> Roadmap {
    Roadmap {
        learning_path: vec![
            Stage {
                step: format!("Foundations of {topic}"),
                difficulty: "Beginner".to_string(),
                description: format!(
                    "Build core knowledge and fundamental skills in {topic}. Focus on understanding basic principles and becoming familiar with essential tools."
                ),
                time_estimate: "4-6 weeks".to_string(),
                key_concepts: vec![
                    format!("{topic} basics"),
                    "Core principles".to_string(),
                    "Fundamental tools and techniques".to_string(),
                ],
                milestones: vec![
                    format!("Complete first {topic} exercise"),
                    format!("Build simple {topic} project"),
                ],
                practice_activities: vec![
                    format!("Daily {topic} exercises"),
                    "Follow beginner tutorials".to_string(),
                ],
            },
            Stage {
                step: format!("{topic} Skill Development"),
                difficulty: "Intermediate".to_string(),
                description: format!(
                    "Deepen understanding of {topic} and apply more advanced concepts. Focus on building practical skills through hands-on projects and implementation."
                ),
                time_estimate: "8-12 weeks".to_string(),
                key_concepts: vec![
                    format!("Advanced {topic} techniques"),
                    "Applied projects".to_string(),
                    "Specialized tools".to_string(),
                ],
                milestones: vec![
                    format!("Complete medium complexity {topic} project"),
                    "Solve real-world problems".to_string(),
                ],
                practice_activities: vec![
                    "Implement sample projects".to_string(),
                    "Participate in forums/discussions".to_string(),
                ],
            },
            Stage {
                step: format!("{topic} Mastery & Specialization"),
                difficulty: "Advanced".to_string(),
                description: format!(
                    "Develop expert-level skills in {topic} with focus on real-world application. Specialize in specific areas and build a professional portfolio."
                ),
                time_estimate: "12-16 weeks".to_string(),
                key_concepts: vec![
                    "Industry best practices".to_string(),
                    "Complex problem-solving".to_string(),
                    "Portfolio development".to_string(),
                ],
                milestones: vec![
                    "Create capstone project".to_string(),
                    "Contribute to community".to_string(),
                ],
                practice_activities: vec![
                    "Build complex projects".to_string(),
                    "Mentor beginners".to_string(),
                ],
            },
        ],
        project_suggestions: vec![
            Project {
                name: format!("Beginner Project: {topic} Fundamentals Application"),
                description: format!(
                    "Apply basic {topic} concepts in a simple project to practice fundamentals and gain confidence."
                ),
                complexity: "Low".to_string(),
                skills_practiced: vec![
                    format!("Basic {topic} principles"),
                    "Problem-solving".to_string(),
                    "Tool familiarity".to_string(),
                ],
                resources: vec![
                    "Online tutorials".to_string(),
                    "Documentation".to_string(),
                    "Starter templates".to_string(),
                ],
                estimated_time: "1-2 weeks".to_string(),
            },
            Project {
                name: format!("Intermediate Project: Interactive {topic} Application"),
                description: format!(
                    "Create a more complex application using intermediate {topic} skills with greater functionality and sophistication."
                ),
                complexity: "Medium".to_string(),
                skills_practiced: vec![
                    format!("Intermediate {topic} techniques"),
                    "Code organization".to_string(),
                    "Testing".to_string(),
                ],
                resources: vec![
                    "GitHub repositories".to_string(),
                    "Online coding platforms".to_string(),
                    "Community forums".to_string(),
                ],
                estimated_time: "3-4 weeks".to_string(),
            },
            Project {
                name: format!("Capstone Project: Advanced {topic} Implementation"),
                description: format!(
                    "Apply all learned skills in a comprehensive {topic} project that showcases mastery and solves a real-world problem."
                ),
                complexity: "High".to_string(),
                skills_practiced: vec![
                    format!("Advanced {topic} mastery"),
                    "System design".to_string(),
                    "Optimization".to_string(),
                ],
                resources: vec![
                    "Industry case studies".to_string(),
                    "Research papers".to_string(),
                    "Expert communities".to_string(),
                ],
                estimated_time: "6-8 weeks".to_string(),
            },
        ],
        resources: Resources {
            books: vec![
                format!("Introduction to {topic}"),
                format!("Advanced {topic} Techniques"),
                format!("Mastering {topic}"),
            ],
            online_courses: vec![
                format!("{topic} for Beginners"),
                format!("Professional {topic} Masterclass"),
            ],
            communities: vec![
                "Stack Overflow".to_string(),
                "Reddit".to_string(),
                format!("{topic} Discord Servers"),
            ],
            tools: vec![
                format!("{topic} Development Environment"),
                "Version Control".to_string(),
                "Testing Frameworks".to_string(),
            ],
            practice_platforms: vec![
                "Codecademy".to_string(),
                "Exercism".to_string(),
                "LeetCode".to_string(),
            ],
        },
        career_insights: vec![
            format!("Proficiency in {topic} is valuable for roles in software development, data science, and IT operations"),
            format!("Entry-level {topic} positions typically require demonstrated project experience"),
            format!("{topic} specialists can pursue careers in consulting, education, or product development"),
        ],
    }
}
