//! Demo candidates served by the in-memory store.
//! Kept in sync with `migrations/0001_candidates.sql`.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::candidate::Candidate;

struct SeedRow {
    name: &'static str,
    age: i32,
    gender: &'static str,
    experience: Option<i32>,
    work_start: (i32, u32, u32),
    work_end: Option<(i32, u32, u32)>,
    skills: &'static str,
    introduction: &'static str,
    position: &'static str,
    job_preference: &'static str,
    degree: &'static str,
    university: &'static str,
    major: &'static str,
    gpa: f64,
    nationality: &'static str,
    graduated: (i32, u32, u32),
}

const SEED: &[SeedRow] = &[
    SeedRow {
        name: "Alex Thompson",
        age: 29,
        gender: "male",
        experience: Some(5),
        work_start: (2020, 3, 1),
        work_end: None,
        skills: "JavaScript, React, Node.js, Python",
        introduction: "Passionate software developer with a focus on web technologies",
        position: "Software Developer",
        job_preference: "full-time",
        degree: "Bachelor of Science",
        university: "University of Washington",
        major: "Computer Science",
        gpa: 3.6,
        nationality: "American",
        graduated: (2018, 6, 30),
    },
    SeedRow {
        name: "Sarah Chen",
        age: 26,
        gender: "female",
        experience: Some(3),
        work_start: (2022, 7, 1),
        work_end: None,
        skills: "Python, Django, PostgreSQL, AWS",
        introduction: "Creative full-stack developer with strong problem-solving skills",
        position: "Full-Stack Developer",
        job_preference: "full-time",
        degree: "Master of Science",
        university: "University of Toronto",
        major: "Software Engineering",
        gpa: 3.8,
        nationality: "Canadian",
        graduated: (2021, 5, 31),
    },
    SeedRow {
        name: "Michael Rodriguez",
        age: 35,
        gender: "male",
        experience: Some(7),
        work_start: (2018, 1, 15),
        work_end: None,
        skills: "AWS, Docker, Kubernetes, Java",
        introduction: "Senior developer specialized in cloud architecture",
        position: "Senior Cloud Engineer",
        job_preference: "full-time",
        degree: "Bachelor of Engineering",
        university: "Monterrey Institute of Technology",
        major: "Electrical Engineering",
        gpa: 3.2,
        nationality: "Mexican",
        graduated: (2014, 6, 30),
    },
    SeedRow {
        name: "Emma Wilson",
        age: 24,
        gender: "female",
        experience: Some(2),
        work_start: (2023, 1, 9),
        work_end: Some((2025, 8, 31)),
        skills: "HTML, CSS, JavaScript, Vue.js",
        introduction: "Frontend developer with an eye for design",
        position: "Frontend Developer",
        job_preference: "part-time",
        degree: "Bachelor of Arts",
        university: "University of Leeds",
        major: "Design",
        gpa: 3.4,
        nationality: "British",
        graduated: (2022, 6, 30),
    },
    SeedRow {
        name: "James Lee",
        age: 31,
        gender: "male",
        experience: Some(4),
        work_start: (2021, 4, 1),
        work_end: None,
        skills: "Java, Spring Boot, MySQL, Redis",
        introduction: "Backend developer with expertise in microservices",
        position: "Backend Developer",
        job_preference: "full-time",
        degree: "Bachelor of Science",
        university: "Seoul National University",
        major: "Computer Science",
        gpa: 3.1,
        nationality: "Korean",
        graduated: (2017, 2, 28),
    },
    SeedRow {
        name: "David Miller",
        age: 33,
        gender: "male",
        experience: Some(6),
        work_start: (2018, 9, 1),
        work_end: Some((2024, 12, 31)),
        skills: "Jenkins, Terraform, Ansible, Python",
        introduction: "DevOps engineer with strong automation skills",
        position: "DevOps Engineer",
        job_preference: "full-time",
        degree: "Bachelor of Science",
        university: "Ohio State University",
        major: "Information Technology",
        gpa: 3.0,
        nationality: "American",
        graduated: (2015, 5, 31),
    },
    SeedRow {
        name: "Lisa Wang",
        age: 38,
        gender: "female",
        experience: Some(8),
        work_start: (2016, 8, 1),
        work_end: None,
        skills: "Java, C++, System Design, Cloud Architecture",
        introduction: "Technical architect with extensive enterprise experience",
        position: "Solutions Architect",
        job_preference: "full-time",
        degree: "PhD",
        university: "Tsinghua University",
        major: "Computer Science",
        gpa: 3.9,
        nationality: "Chinese",
        graduated: (2012, 7, 1),
    },
    SeedRow {
        name: "Robert Taylor",
        age: 23,
        gender: "male",
        experience: Some(1),
        work_start: (2024, 9, 2),
        work_end: None,
        skills: "JavaScript, HTML, CSS, React",
        introduction: "Junior developer eager to learn and grow",
        position: "Junior Developer",
        job_preference: "full-time",
        degree: "Bachelor of Science",
        university: "University of Melbourne",
        major: "Mathematics",
        gpa: 3.3,
        nationality: "Australian",
        graduated: (2024, 6, 30),
    },
    SeedRow {
        name: "Jennifer Park",
        age: 30,
        gender: "female",
        experience: Some(4),
        work_start: (2021, 10, 1),
        work_end: None,
        skills: "Swift, Objective-C, Firebase",
        introduction: "Mobile app developer with iOS expertise",
        position: "Mobile Developer",
        job_preference: "part-time",
        degree: "Master of Science",
        university: "KAIST",
        major: "Computer Science",
        gpa: 3.7,
        nationality: "Korean",
        graduated: (2019, 2, 28),
    },
    SeedRow {
        name: "William Brown",
        age: 32,
        gender: "male",
        experience: None,
        work_start: (2021, 2, 1),
        work_end: None,
        skills: "Node.js, MongoDB, React, TypeScript",
        introduction: "Full-stack developer focused on scalable solutions",
        position: "Full-Stack Developer",
        job_preference: "full-time",
        degree: "Bachelor of Science",
        university: "University of Texas at Austin",
        major: "Software Engineering",
        gpa: 3.5,
        nationality: "American",
        graduated: (2016, 5, 31),
    },
];

fn ymd((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn demo_candidates() -> Vec<Candidate> {
    SEED.iter()
        .enumerate()
        .map(|(i, row)| {
            let first = row.name.split_whitespace().next().unwrap_or(row.name);
            Candidate {
                id: Uuid::from_u128(i as u128 + 1),
                name: row.name.to_string(),
                age: Some(row.age),
                gender: Some(row.gender.to_string()),
                experience: row.experience,
                work_start_date: ymd(row.work_start),
                work_end_date: row.work_end.and_then(ymd),
                skills: row.skills.to_string(),
                introduction: row.introduction.to_string(),
                position: Some(row.position.to_string()),
                job_preference: row.job_preference.to_string(),
                degree: Some(row.degree.to_string()),
                university: Some(row.university.to_string()),
                major: Some(row.major.to_string()),
                gpa: Some(row.gpa),
                nationality: Some(row.nationality.to_string()),
                address: None,
                email: Some(format!("{}@example.com", first.to_lowercase())),
                phone: None,
                education_start_date: ymd((row.graduated.0 - 4, 9, 1)),
                education_end_date: ymd(row.graduated),
            }
        })
        .collect()
}
