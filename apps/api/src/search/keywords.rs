// Static keyword tables read by the requirement translator.
// All entries are lower-case; matching happens on a lower-cased copy of the input.

/// Technology names matched against both skills and self-introduction.
pub const TECH_KEYWORDS: &[&str] = &[
    "java",
    "python",
    "javascript",
    "nodejs",
    "react",
    "angular",
    "vue",
    "c++",
    "ruby",
    "php",
    "aws",
    "docker",
    "kubernetes",
    "devops",
];

/// Seniority and specialisation words matched against self-introduction.
pub const BACKGROUND_KEYWORDS: &[&str] = &[
    "architect",
    "senior",
    "junior",
    "lead",
    "frontend",
    "backend",
    "full-stack",
    "mobile",
];

pub const POSITION_KEYWORDS: &[&str] = &["engineer", "developer", "manager", "architect", "designer"];

pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "undergraduate",
    "postgraduate",
];

/// Longer phrases first: a match of "software engineering" suppresses "engineering".
pub const MAJOR_KEYWORDS: &[&str] = &[
    "computer science",
    "software engineering",
    "electrical engineering",
    "mechanical engineering",
    "information technology",
    "data science",
    "mathematics",
    "statistics",
    "physics",
    "engineering",
    "business",
    "economics",
    "finance",
    "design",
];

pub const EXPERIENCE_TRIGGERS: &[&str] = &["experience", "year", "years", "yrs"];
pub const AGE_TRIGGERS: &[&str] = &["age", "aged"];
pub const GRADUATION_TRIGGERS: &[&str] = &[
    "graduate",
    "graduates",
    "graduated",
    "graduation",
    "graduating",
];
pub const CURRENT_WORDS: &[&str] = &["current", "currently", "now", "present"];
pub const EMPLOYED_WORDS: &[&str] = &["working", "employed"];

pub const LESS_WORDS: &[&str] = &["less than", "fewer than", "no more than", "under", "below", "at most"];
pub const MORE_WORDS: &[&str] = &["more than", "over", "above", "at least"];
pub const EQUAL_WORDS: &[&str] = &["equal", "equals", "exactly"];

/// Tokens skipped (not counted) when scanning the window after a trigger word.
pub const FILLER_WORDS: &[&str] = &[
    "is", "of", "at", "least", "most", "than", "less", "more", "fewer", "no", "under", "below",
    "over", "above", "equal", "equals", "to", "exactly", "a", "an", "the", "around", "about",
];

/// Tokens that belong to another rule's phrase; a window scan stops on them.
pub const STOP_WORDS: &[&str] = &[
    "age", "aged", "gpa", "top", "first", "experience", "year", "years", "yrs", "old", "graduate",
    "graduates", "graduated", "graduation", "graduating",
];

/// Number of content tokens inspected on each side of a trigger word.
pub const NUMBER_WINDOW: usize = 3;
