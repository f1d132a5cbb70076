#![allow(dead_code)]

//! Hand-authored demo dataset. Compiled in, immutable, and served whenever
//! no authenticated roadmap exists.

use once_cell::sync::Lazy;

use crate::models::{
    Course, CourseRecommendation, JobPosting, Milestone, Roadmap, RoadmapStatus, Role, Skill,
    UserProfile,
};

pub const DEMO_CREATED_AT: &str = "2025-12-01T00:00:00.000Z";

pub static DEMO_USERS: Lazy<Vec<UserProfile>> = Lazy::new(|| {
    vec![
        UserProfile {
            id: "demo-1".into(),
            name: "Alice Chen".into(),
            email: "alice@example.com".into(),
            current_role: "Student (Computer Science)".into(),
            resume_text: "BS in CS, Python, JavaScript, SQL, basic React. Interested in data engineering and machine learning.".into(),
        },
        UserProfile {
            id: "demo-2".into(),
            name: "Bob Martinez".into(),
            email: "bob@example.com".into(),
            current_role: "Full Stack Developer".into(),
            resume_text: "Senior Dev with 5y experience. Expert in Node.js, React, PostgreSQL. Seeking to transition into Product Management.".into(),
        },
    ]
});

pub static DEMO_SKILLS: Lazy<Vec<Skill>> = Lazy::new(|| {
    vec![
        skill("skill-1", "Python", "General-purpose programming language"),
        skill("skill-2", "JavaScript", "Web development language"),
        skill("skill-3", "React", "Frontend UI library"),
        skill("skill-4", "SQL", "Database query language"),
        skill("skill-5", "Data Engineering", "Data pipeline design and implementation"),
        skill("skill-6", "Machine Learning", "ML algorithms and model training"),
        skill("skill-7", "Product Management", "Product strategy and roadmapping"),
        skill("skill-8", "Node.js", "Backend JavaScript runtime"),
        skill("skill-9", "PostgreSQL", "Relational database system"),
        skill("skill-10", "AWS", "Cloud infrastructure"),
    ]
});

fn skill(id: &str, name: &str, description: &str) -> Skill {
    Skill {
        id: id.into(),
        name: name.into(),
        description: description.into(),
    }
}

pub static DEMO_ROLES: Lazy<Vec<Role>> = Lazy::new(|| {
    vec![
        Role {
            id: "role-1".into(),
            title: "Data Engineer".into(),
            description: "Design and build scalable data pipelines, ETL systems, and data warehouses. Master Python, SQL, and cloud platforms (AWS, GCP, Azure).".into(),
            average_salary: 165_000,
            required_skills: strings(&["Python", "SQL", "Data Engineering", "AWS"]),
        },
        Role {
            id: "role-2".into(),
            title: "Machine Learning Engineer".into(),
            description: "Build and deploy machine learning models in production. Focus on MLOps, model optimization, and real-time inference systems.".into(),
            average_salary: 185_000,
            required_skills: strings(&["Python", "Machine Learning", "AWS"]),
        },
        Role {
            id: "role-3".into(),
            title: "Product Manager".into(),
            description: "Drive product vision, roadmap, and strategy. Lead cross-functional teams and make data-driven decisions to maximize user impact.".into(),
            average_salary: 170_000,
            required_skills: strings(&["Product Management", "Communication", "Analytics"]),
        },
        Role {
            id: "role-4".into(),
            title: "Senior Full Stack Engineer".into(),
            description: "Architect and lead backend and frontend systems. Mentor junior engineers and drive technical excellence across the stack.".into(),
            average_salary: 175_000,
            required_skills: strings(&["Node.js", "React", "PostgreSQL", "AWS"]),
        },
    ]
});

pub static DEMO_COURSES: Lazy<Vec<Course>> = Lazy::new(|| {
    vec![
        Course {
            id: "course-1".into(),
            title: "The Complete Python for Data Engineering".into(),
            provider: "Udemy".into(),
            url: "https://www.udemy.com/course/the-complete-python-for-data-engineering/".into(),
            duration_hours: 40,
            skill_tags: strings(&["Python", "Data Engineering"]),
        },
        Course {
            id: "course-2".into(),
            title: "Machine Learning Specialization".into(),
            provider: "Coursera".into(),
            url: "https://www.coursera.org/specializations/machine-learning-introduction".into(),
            duration_hours: 120,
            skill_tags: strings(&["Machine Learning", "Python"]),
        },
        Course {
            id: "course-3".into(),
            title: "Advanced SQL for Data Analysis".into(),
            provider: "DataCamp".into(),
            url: "https://www.datacamp.com/courses/advanced-sql-for-data-engineers".into(),
            duration_hours: 30,
            skill_tags: strings(&["SQL"]),
        },
        Course {
            id: "course-4".into(),
            title: "AWS Data Engineering on AWS".into(),
            provider: "Linux Academy".into(),
            url: "https://www.linuxacademy.com/course/aws-data-engineering-on-aws/".into(),
            duration_hours: 50,
            skill_tags: strings(&["AWS", "Data Engineering"]),
        },
        Course {
            id: "course-5".into(),
            title: "Reforge: Product Management".into(),
            provider: "Reforge".into(),
            url: "https://www.reforge.com/courses/product-management".into(),
            duration_hours: 35,
            skill_tags: strings(&["Product Management"]),
        },
    ]
});

pub static DEMO_JOBS: Lazy<Vec<JobPosting>> = Lazy::new(|| {
    vec![
        JobPosting {
            id: "job-1".into(),
            title: "Senior Data Engineer".into(),
            company: "Stripe".into(),
            location: "San Francisco, CA (Remote)".into(),
            url: "https://stripe.com/jobs/listing/senior-data-engineer".into(),
            description: "Build and maintain data infrastructure for payment processing. Work with petabyte-scale datasets.".into(),
            required_skills: strings(&["Python", "SQL", "Data Engineering", "AWS"]),
            salary_range: "$170k - $220k".into(),
        },
        JobPosting {
            id: "job-2".into(),
            title: "Machine Learning Engineer".into(),
            company: "OpenAI".into(),
            location: "San Francisco, CA".into(),
            url: "https://openai.com/careers/machine-learning-engineer".into(),
            description: "Develop and deploy ML models for language AI. Work on cutting-edge deep learning systems.".into(),
            required_skills: strings(&["Python", "Machine Learning", "AWS"]),
            salary_range: "$180k - $250k".into(),
        },
        JobPosting {
            id: "job-3".into(),
            title: "Senior Product Manager".into(),
            company: "Figma".into(),
            location: "San Francisco, CA (Remote)".into(),
            url: "https://fig.ma/jobs/product-manager-senior".into(),
            description: "Lead product strategy for design collaboration tools. Shape the future of design software.".into(),
            required_skills: strings(&["Product Management"]),
            salary_range: "$170k - $240k".into(),
        },
        JobPosting {
            id: "job-4".into(),
            title: "Full Stack Engineer".into(),
            company: "Vercel".into(),
            location: "Remote".into(),
            url: "https://vercel.com/careers/full-stack-engineer".into(),
            description: "Build next-gen deployment and frontend infrastructure. Work on Next.js ecosystem.".into(),
            required_skills: strings(&["React", "Node.js", "PostgreSQL"]),
            salary_range: "$150k - $220k".into(),
        },
    ]
});

pub static DEMO_ROADMAPS: Lazy<Vec<Roadmap>> = Lazy::new(|| {
    vec![
        Roadmap {
            id: "roadmap-1".into(),
            user_id: "demo-1".into(),
            target_role: "Data Engineer".into(),
            missing_skills: strings(&["Data Engineering", "AWS"]),
            recommended_courses: vec![
                CourseRecommendation {
                    skill: "Data Engineering".into(),
                    courses: vec![DEMO_COURSES[0].clone(), DEMO_COURSES[3].clone()],
                },
                CourseRecommendation {
                    skill: "AWS".into(),
                    courses: vec![DEMO_COURSES[3].clone()],
                },
            ],
            timeline_weeks: 16,
            status: RoadmapStatus::InProgress,
            created_at: DEMO_CREATED_AT.into(),
            milestones: vec![
                milestone(4, "Complete Python for Data Engineering"),
                milestone(8, "Build first data pipeline project"),
                milestone(12, "Complete AWS certification"),
                milestone(16, "Ready for entry-level Data Engineer role"),
            ],
        },
        Roadmap {
            id: "roadmap-2".into(),
            user_id: "demo-2".into(),
            target_role: "Product Manager".into(),
            missing_skills: strings(&["Product Management"]),
            recommended_courses: vec![CourseRecommendation {
                skill: "Product Management".into(),
                courses: vec![DEMO_COURSES[4].clone()],
            }],
            timeline_weeks: 8,
            status: RoadmapStatus::NotStarted,
            created_at: DEMO_CREATED_AT.into(),
            milestones: vec![
                milestone(4, "Complete Product Management Masterclass"),
                milestone(8, "Deliver PM case studies; Ready for transition"),
            ],
        },
    ]
});

fn milestone(week: u32, text: &str) -> Milestone {
    Milestone {
        week,
        milestone: text.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_roadmap_is_the_data_engineer_plan() {
        let first = &DEMO_ROADMAPS[0];
        assert_eq!(first.target_role, "Data Engineer");
        assert_eq!(first.timeline_weeks, 16);
        assert_eq!(first.status, RoadmapStatus::InProgress);
        assert_eq!(first.milestones.len(), 4);
    }

    #[test]
    fn test_recommended_courses_come_from_the_catalog() {
        for roadmap in DEMO_ROADMAPS.iter() {
            for rec in &roadmap.recommended_courses {
                for course in &rec.courses {
                    assert!(
                        DEMO_COURSES.iter().any(|c| c.id == course.id),
                        "course {} not in catalog",
                        course.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_roadmap_owners_are_demo_users() {
        for roadmap in DEMO_ROADMAPS.iter() {
            assert!(DEMO_USERS.iter().any(|u| u.id == roadmap.user_id));
        }
    }

    #[test]
    fn test_dataset_ids_are_unique() {
        let mut ids: Vec<&str> = DEMO_SKILLS.iter().map(|s| s.id.as_str()).collect();
        ids.extend(DEMO_ROLES.iter().map(|r| r.id.as_str()));
        ids.extend(DEMO_COURSES.iter().map(|c| c.id.as_str()));
        ids.extend(DEMO_JOBS.iter().map(|j| j.id.as_str()));
        ids.extend(DEMO_ROADMAPS.iter().map(|r| r.id.as_str()));
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
