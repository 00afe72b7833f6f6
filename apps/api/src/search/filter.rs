//! FilterSpec — the structured output of requirement translation.
//!
//! Fields are a closed enum and values are plain data. Store backends map each
//! `Field` to a fixed column expression and bind every `Value` as a parameter, so
//! nothing the user typed ever becomes query syntax.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A filterable candidate attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Age,
    Experience,
    Skills,
    Introduction,
    Position,
    JobPreference,
    Degree,
    Major,
    Gpa,
    Nationality,
    EducationEndDate,
    WorkEndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Eq,
    Gte,
    Lte,
    Gt,
    Lt,
    /// Case-insensitive substring match.
    Contains,
    IsNull,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Contains => "contains",
            Operator::IsNull => "is null",
        }
    }
}

/// A condition operand. Always data, never syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
    Null,
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// A single `(field, operator, value)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: Field,
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    pub fn new(field: Field, operator: Operator, value: Value) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    pub fn contains(field: Field, needle: impl Into<String>) -> Self {
        Self::new(field, Operator::Contains, Value::text(needle))
    }

    pub fn is_null(field: Field) -> Self {
        Self::new(field, Operator::IsNull, Value::Null)
    }
}

/// One AND-ed entry of a `FilterSpec`.
///
/// `AnyOf` groups conditions that are OR-ed together (a skill keyword checked
/// against both `skills` and `introduction`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "conditions", rename_all = "snake_case")]
pub enum Criterion {
    All(Condition),
    AnyOf(Vec<Condition>),
}

impl Criterion {
    pub fn conditions(&self) -> &[Condition] {
        match self {
            Criterion::All(c) => std::slice::from_ref(c),
            Criterion::AnyOf(cs) => cs,
        }
    }
}

impl From<Condition> for Criterion {
    fn from(c: Condition) -> Self {
        Criterion::All(c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Experience,
    Age,
    Gpa,
    /// Graduation date.
    Education,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::Experience,
            direction: SortDirection::Desc,
        }
    }
}

/// Conditions + sort + optional limit, built fresh per request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub conditions: Vec<Criterion>,
    pub sort: Sort,
    pub limit: Option<u32>,
}

impl FilterSpec {
    /// Applies a fallback limit when the requirement did not ask for one.
    pub fn with_default_limit(mut self, default: Option<u32>) -> Self {
        if self.limit.is_none() {
            self.limit = default;
        }
        self
    }
}
