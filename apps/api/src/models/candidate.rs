use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::search::filter::{Field, Value};

/// A job-seeker record. Read-only from the API's point of view.
///
/// `introduction` is stored as `self_introduction` and aliased on read.
/// `experience` may be absent, in which case it is derived from `work_start_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub experience: Option<i32>,
    pub work_start_date: Option<NaiveDate>,
    pub work_end_date: Option<NaiveDate>,
    pub skills: String,
    pub introduction: String,
    pub position: Option<String>,
    pub job_preference: String,
    pub degree: Option<String>,
    pub university: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub nationality: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub education_start_date: Option<NaiveDate>,
    pub education_end_date: Option<NaiveDate>,
}

impl Candidate {
    /// Years of experience, falling back to `today.year - work_start_date.year`.
    pub fn experience_years(&self, today: NaiveDate) -> Option<i32> {
        self.experience.or_else(|| {
            self.work_start_date
                .map(|start| (today.year() - start.year()).max(0))
        })
    }

    /// The value of `field` as a filter operand; missing data is `Value::Null`.
    pub fn field_value(&self, field: Field, today: NaiveDate) -> Value {
        let text = |s: &Option<String>| s.clone().map(Value::Text).unwrap_or(Value::Null);
        match field {
            Field::Name => Value::text(&self.name),
            Field::Age => self.age.map(|a| Value::Int(a.into())).unwrap_or(Value::Null),
            Field::Experience => self
                .experience_years(today)
                .map(|y| Value::Int(y.into()))
                .unwrap_or(Value::Null),
            Field::Skills => Value::text(&self.skills),
            Field::Introduction => Value::text(&self.introduction),
            Field::Position => text(&self.position),
            Field::JobPreference => Value::text(&self.job_preference),
            Field::Degree => text(&self.degree),
            Field::Major => text(&self.major),
            Field::Gpa => self.gpa.map(Value::Float).unwrap_or(Value::Null),
            Field::Nationality => text(&self.nationality),
            Field::EducationEndDate => self
                .education_end_date
                .map(Value::Date)
                .unwrap_or(Value::Null),
            Field::WorkEndDate => self.work_end_date.map(Value::Date).unwrap_or(Value::Null),
        }
    }
}
