use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::search::filter::{
    Condition, Criterion, Field, FilterSpec, Operator, SortDirection, SortField, Value,
};
use crate::store::seed::demo_candidates;
use crate::store::CandidateStore;

/// Evaluates a `FilterSpec` over an in-process candidate list.
///
/// Semantics follow the SQL backend: comparisons against missing values never
/// match, `contains` is case-insensitive, nulls sort last in both directions and
/// ties are broken by name.
#[derive(Clone)]
pub struct MemoryCandidateStore {
    candidates: Arc<Vec<Candidate>>,
    today: Option<NaiveDate>,
}

impl MemoryCandidateStore {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: Arc::new(candidates),
            today: None,
        }
    }

    /// Store seeded with the demo dataset.
    pub fn demo() -> Self {
        Self::new(demo_candidates())
    }

    /// Pins the date used to derive experience from `work_start_date`.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    fn run(&self, spec: &FilterSpec) -> Vec<Candidate> {
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());

        let mut results: Vec<Candidate> = self
            .candidates
            .iter()
            .filter(|c| spec.conditions.iter().all(|crit| criterion_matches(c, crit, today)))
            .cloned()
            .collect();

        let sort = spec.sort;
        results.sort_by(|a, b| {
            let (ka, kb) = (sort_key(a, sort.field, today), sort_key(b, sort.field, today));
            let primary = match (ka.is_null(), kb.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let ord = compare(&ka, &kb).unwrap_or(Ordering::Equal);
                    match sort.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                }
            };
            primary.then_with(|| a.name.cmp(&b.name))
        });

        if let Some(limit) = spec.limit {
            results.truncate(limit as usize);
        }
        results
    }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn search(&self, spec: &FilterSpec) -> Result<Vec<Candidate>, AppError> {
        Ok(self.run(spec))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

fn criterion_matches(candidate: &Candidate, criterion: &Criterion, today: NaiveDate) -> bool {
    // a single condition is a one-element group
    criterion
        .conditions()
        .iter()
        .any(|cond| condition_matches(candidate, cond, today))
}

fn condition_matches(candidate: &Candidate, cond: &Condition, today: NaiveDate) -> bool {
    let actual = candidate.field_value(cond.field, today);

    match cond.operator {
        Operator::IsNull => actual.is_null(),
        Operator::Contains => match (&actual, &cond.value) {
            (Value::Text(hay), Value::Text(needle)) => {
                hay.to_lowercase().contains(&needle.to_lowercase())
            }
            _ => false,
        },
        Operator::Eq => match (&actual, &cond.value) {
            (Value::Text(a), Value::Text(b)) => a.eq_ignore_ascii_case(b),
            _ => compare(&actual, &cond.value) == Some(Ordering::Equal),
        },
        Operator::Gte => matches!(
            compare(&actual, &cond.value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Operator::Lte => matches!(
            compare(&actual, &cond.value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        Operator::Gt => compare(&actual, &cond.value) == Some(Ordering::Greater),
        Operator::Lt => compare(&actual, &cond.value) == Some(Ordering::Less),
    }
}

/// Orders two operands of compatible type; `None` when either is null or the
/// types do not compare.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Int(x), Value::Float(y)) => (*x as f64).partial_cmp(y),
        (Value::Float(x), Value::Int(y)) => x.partial_cmp(&(*y as f64)),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y),
        (Value::Date(x), Value::Date(y)) => Some(x.cmp(y)),
        (Value::Text(x), Value::Text(y)) => Some(x.to_lowercase().cmp(&y.to_lowercase())),
        _ => None,
    }
}

fn sort_key(candidate: &Candidate, field: SortField, today: NaiveDate) -> Value {
    let field = match field {
        SortField::Experience => Field::Experience,
        SortField::Age => Field::Age,
        SortField::Gpa => Field::Gpa,
        SortField::Education => Field::EducationEndDate,
        SortField::Name => Field::Name,
    };
    candidate.field_value(field, today)
}
