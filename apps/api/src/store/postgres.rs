use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::search::filter::{
    Condition, Criterion, Field, FilterSpec, Operator, SortDirection, SortField, Value,
};
use crate::store::CandidateStore;

/// Experience in years, derived from the work start date when not stored.
const EXPERIENCE_EXPR: &str = "COALESCE(experience, \
     (EXTRACT(YEAR FROM CURRENT_DATE) - EXTRACT(YEAR FROM work_start_date))::int)";

const SELECT_CANDIDATES: &str = "SELECT id, name, age, gender, \
     COALESCE(experience, (EXTRACT(YEAR FROM CURRENT_DATE) - EXTRACT(YEAR FROM work_start_date))::int) AS experience, \
     work_start_date, work_end_date, skills, self_introduction AS introduction, position, \
     job_preference, degree, university, major, gpa, nationality, address, email, phone, \
     education_start_date, education_end_date \
     FROM candidates";

/// PostgreSQL-backed store. Every value from a `FilterSpec` is sent as a bind
/// parameter; only fixed column expressions are written into the SQL text.
#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn search(&self, spec: &FilterSpec) -> Result<Vec<Candidate>, AppError> {
        let mut query = build_query(spec);
        debug!(sql = query.sql(), "executing candidate search");

        let rows = query
            .build_query_as::<Candidate>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// The parameterized statement text for `spec`, with `$n` placeholders.
#[cfg(test)]
fn render_sql(spec: &FilterSpec) -> String {
    build_query(spec).sql().to_string()
}

fn build_query(spec: &FilterSpec) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_CANDIDATES);

    for (i, criterion) in spec.conditions.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        match criterion {
            Criterion::All(cond) => push_condition(&mut qb, cond),
            Criterion::AnyOf(conds) => {
                qb.push("(");
                for (j, cond) in conds.iter().enumerate() {
                    if j > 0 {
                        qb.push(" OR ");
                    }
                    push_condition(&mut qb, cond);
                }
                qb.push(")");
            }
        }
    }

    let direction = match spec.sort.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    qb.push(" ORDER BY ")
        .push(sort_column(spec.sort.field))
        .push(" ")
        .push(direction)
        .push(" NULLS LAST, name ASC");

    if let Some(limit) = spec.limit {
        qb.push(" LIMIT ").push_bind(i64::from(limit));
    }

    qb
}

fn push_condition(qb: &mut QueryBuilder<'static, Postgres>, cond: &Condition) {
    let column = column(cond.field);

    match (cond.operator, &cond.value) {
        (Operator::IsNull, _) => {
            qb.push(column).push(" IS NULL");
        }
        (Operator::Contains, value) => {
            let pattern = format!("%{}%", escape_like(&value_as_text(value)));
            qb.push(column).push(" ILIKE ").push_bind(pattern);
        }
        (Operator::Eq, Value::Text(s)) => {
            qb.push("LOWER(")
                .push(column)
                .push(") = LOWER(")
                .push_bind(s.clone())
                .push(")");
        }
        (op, value) => {
            qb.push(column).push(" ").push(op.as_str()).push(" ");
            push_value(qb, value);
        }
    }
}

fn push_value(qb: &mut QueryBuilder<'static, Postgres>, value: &Value) {
    match value {
        Value::Int(n) => {
            qb.push_bind(*n);
        }
        Value::Float(f) => {
            qb.push_bind(*f);
        }
        Value::Date(d) => {
            qb.push_bind(*d);
        }
        Value::Text(s) => {
            qb.push_bind(s.clone());
        }
        Value::Null => {
            qb.push("NULL");
        }
    }
}

fn column(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Age => "age",
        Field::Experience => EXPERIENCE_EXPR,
        Field::Skills => "skills",
        Field::Introduction => "self_introduction",
        Field::Position => "position",
        Field::JobPreference => "job_preference",
        Field::Degree => "degree",
        Field::Major => "major",
        Field::Gpa => "gpa",
        Field::Nationality => "nationality",
        Field::EducationEndDate => "education_end_date",
        Field::WorkEndDate => "work_end_date",
    }
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Experience => EXPERIENCE_EXPR,
        SortField::Age => "age",
        SortField::Gpa => "gpa",
        SortField::Education => "education_end_date",
        SortField::Name => "name",
    }
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Date(d) => d.to_string(),
        Value::Null => String::new(),
    }
}

/// Escapes LIKE wildcards so the value only ever matches literally.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
