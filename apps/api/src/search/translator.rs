//! Requirement translator — turns a free-text hiring requirement into a `FilterSpec`.
//!
//! The translator is a flat table of independent rules. Each rule inspects the same
//! normalised requirement and returns zero or more criteria; rules never see what
//! other rules matched. Evaluation order is the table order, which is also the order
//! of the resulting conditions.
//!
//! Numbers are captured from a small window around each rule's own trigger word, so
//! "age 30 with 5 years experience" gives `age = 30` and `experience >= 5`.
//! The comparison word ("less than", "over", "exactly", ...) is detected once per
//! requirement and applies to every numeric rule that fires.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::search::filter::{
    Condition, Criterion, Field, FilterSpec, Operator, Sort, SortDirection, SortField, Value,
};
use crate::search::keywords::*;

lazy_static! {
    static ref SKILL_RE: Regex = Regex::new(
        r"\b(?:skill|know)(?:s|ledge)?\s+(?:(?:in|with|of)\s+)?(?:(?:a|an|the)\s+)?([a-z][a-z0-9+#.]*)"
    )
    .unwrap();
    static ref NAME_RE: Regex = Regex::new(r"\b(?:named|name is)\s+([a-z][a-z'\-]*)").unwrap();
    static ref NATIONALITY_RE: Regex =
        Regex::new(r"\bnationality(?:\s*:\s*|\s+is\s+|\s+)([a-z][a-z\-]*)").unwrap();
    static ref SORT_RE: Regex = Regex::new(
        r"\b(?:sort|sorted|order|ordered)\s+by\s+(experience|age|gpa|education|graduation|name)\b"
    )
    .unwrap();
    static ref LIMIT_RE: Regex = Regex::new(r"\b(?:first|top)\s*(\d+)\b").unwrap();
}

/// The comparison word found in a requirement, shared by all numeric rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    More,
    Equal,
    Unspecified,
}

/// A lower-cased, trimmed requirement plus the derived facts every rule reads.
#[derive(Debug)]
pub struct Requirement {
    text: String,
    tokens: Vec<String>,
    comparison: Comparison,
}

impl Requirement {
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        let tokens = text
            .split(|c: char| !(c.is_alphanumeric() || c == '.'))
            .map(|t| t.trim_matches('.'))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        let comparison = detect_comparison(&text);
        Self {
            text,
            tokens,
            comparison,
        }
    }

    fn has_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| has_term(&self.text, t))
    }

    fn positions_of<'a>(&'a self, terms: &'a [&'a str]) -> impl Iterator<Item = usize> + 'a {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| terms.contains(&t.as_str()))
            .map(|(i, _)| i)
    }

    /// First token after `idx` (skipping filler words, stopping at another rule's
    /// trigger) that `parse` accepts, within `NUMBER_WINDOW` content tokens.
    fn scan_forward<T>(&self, idx: usize, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        self.scan(idx, (idx + 1)..self.tokens.len(), parse)
    }

    fn scan_backward<T>(&self, idx: usize, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        self.scan(idx, (0..idx).rev(), parse)
    }

    fn scan<T>(
        &self,
        origin: usize,
        positions: impl Iterator<Item = usize>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        let mut seen = 0;
        for j in positions {
            let tok = self.tokens[j].as_str();
            if STOP_WORDS.contains(&tok) {
                return None;
            }
            if FILLER_WORDS.contains(&tok) {
                continue;
            }
            if let Some(v) = parse(tok).filter(|_| !self.is_claimed(j, origin)) {
                return Some(v);
            }
            seen += 1;
            if seen >= NUMBER_WINDOW {
                return None;
            }
        }
        None
    }

    /// A number directly followed by another rule's trigger ("5 years") belongs to
    /// that rule, unless the trigger is the one being scanned from.
    fn is_claimed(&self, j: usize, origin: usize) -> bool {
        j + 1 != origin
            && self
                .token(j + 1)
                .is_some_and(|next| STOP_WORDS.contains(&next))
    }

    /// True when the token before `j` is another rule's trigger ("top 3").
    fn follows_trigger(&self, j: usize) -> bool {
        j.checked_sub(1)
            .and_then(|k| self.token(k))
            .is_some_and(|prev| STOP_WORDS.contains(&prev))
    }

    fn token(&self, idx: usize) -> Option<&str> {
        self.tokens.get(idx).map(String::as_str)
    }
}

/// One independent extraction rule.
pub struct Rule {
    pub name: &'static str,
    pub extract: fn(&Requirement) -> Vec<Criterion>,
}

pub static RULES: &[Rule] = &[
    Rule { name: "experience", extract: experience_rule },
    Rule { name: "skills", extract: skills_rule },
    Rule { name: "job_preference", extract: job_preference_rule },
    Rule { name: "name", extract: name_rule },
    Rule { name: "background", extract: background_rule },
    Rule { name: "age", extract: age_rule },
    Rule { name: "gpa", extract: gpa_rule },
    Rule { name: "degree", extract: degree_rule },
    Rule { name: "major", extract: major_rule },
    Rule { name: "nationality", extract: nationality_rule },
    Rule { name: "graduation", extract: graduation_rule },
    Rule { name: "employment", extract: employment_rule },
    Rule { name: "position", extract: position_rule },
];

/// Translates a free-text requirement into a `FilterSpec`. Never fails.
pub fn translate(raw: &str) -> FilterSpec {
    let req = Requirement::new(raw);
    debug!(comparison = ?req.comparison, tokens = req.tokens.len(), "requirement normalised");

    let mut conditions = Vec::new();
    for rule in RULES {
        let found = (rule.extract)(&req);
        if !found.is_empty() {
            debug!(rule = rule.name, criteria = found.len(), "translation rule fired");
        }
        conditions.extend(found);
    }

    FilterSpec {
        conditions,
        sort: resolve_sort(&req),
        limit: resolve_limit(&req),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

fn experience_rule(req: &Requirement) -> Vec<Criterion> {
    if !req.has_any(EXPERIENCE_TRIGGERS) {
        return vec![];
    }

    let years = req
        .positions_of(EXPERIENCE_TRIGGERS)
        .find_map(|i| {
            // "N years" / "N+ years" / "N experience", but not "N years old"
            let before = i.checked_sub(1).and_then(|j| req.token(j)).and_then(parse_int);
            let is_age = req.token(i + 1) == Some("old");
            before.filter(|_| !is_age)
        })
        .or_else(|| {
            req.positions_of(&["experience"])
                .find_map(|i| req.scan_forward(i, parse_int))
        });

    let Some(years) = years else {
        return vec![];
    };

    let operator = match req.comparison {
        Comparison::Less => Operator::Lte,
        Comparison::Equal => Operator::Eq,
        Comparison::More | Comparison::Unspecified => Operator::Gte,
    };
    vec![Condition::new(Field::Experience, operator, Value::Int(years)).into()]
}

fn skills_rule(req: &Requirement) -> Vec<Criterion> {
    if let Some(skill) = SKILL_RE
        .captures(&req.text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('.'))
        .filter(|s| !s.is_empty())
    {
        return vec![Condition::contains(Field::Skills, skill).into()];
    }

    TECH_KEYWORDS
        .iter()
        .filter(|kw| has_term(&req.text, kw))
        .map(|kw| {
            Criterion::AnyOf(vec![
                Condition::contains(Field::Skills, *kw),
                Condition::contains(Field::Introduction, *kw),
            ])
        })
        .collect()
}

fn job_preference_rule(req: &Requirement) -> Vec<Criterion> {
    let preference = if ["full-time", "full time", "fulltime"]
        .iter()
        .any(|t| req.text.contains(*t))
    {
        "full-time"
    } else if ["part-time", "part time", "parttime"]
        .iter()
        .any(|t| req.text.contains(*t))
    {
        "part-time"
    } else {
        return vec![];
    };
    vec![Condition::new(Field::JobPreference, Operator::Eq, Value::text(preference)).into()]
}

fn name_rule(req: &Requirement) -> Vec<Criterion> {
    NAME_RE
        .captures(&req.text)
        .and_then(|caps| caps.get(1))
        .map(|m| vec![Criterion::from(Condition::contains(Field::Name, m.as_str()))])
        .unwrap_or_default()
}

fn background_rule(req: &Requirement) -> Vec<Criterion> {
    keyword_conditions(req, BACKGROUND_KEYWORDS, Field::Introduction)
}

fn age_rule(req: &Requirement) -> Vec<Criterion> {
    let age = req
        .positions_of(AGE_TRIGGERS)
        .find_map(|i| req.scan_forward(i, parse_int))
        .or_else(|| {
            // "N years old" / "N year old"
            req.positions_of(&["old"]).find_map(|i| {
                let unit = i.checked_sub(1).and_then(|j| req.token(j))?;
                if unit != "year" && unit != "years" {
                    return None;
                }
                i.checked_sub(2).and_then(|j| req.token(j)).and_then(parse_int)
            })
        });

    let Some(age) = age else {
        return vec![];
    };

    let operator = match req.comparison {
        Comparison::Less => Operator::Lte,
        Comparison::More => Operator::Gte,
        Comparison::Equal | Comparison::Unspecified => Operator::Eq,
    };
    vec![Condition::new(Field::Age, operator, Value::Int(age)).into()]
}

fn gpa_rule(req: &Requirement) -> Vec<Criterion> {
    let gpa = req.positions_of(&["gpa"]).find_map(|i| {
        // "3.5 gpa" first, then "gpa above 3.5"
        i.checked_sub(1)
            .filter(|&j| !req.follows_trigger(j))
            .and_then(|j| req.token(j))
            .and_then(parse_gpa)
            .or_else(|| req.scan_forward(i, parse_gpa))
    });

    let Some(gpa) = gpa else {
        return vec![];
    };

    let operator = match req.comparison {
        Comparison::Less => Operator::Lt,
        Comparison::More => Operator::Gt,
        Comparison::Equal | Comparison::Unspecified => Operator::Gte,
    };
    vec![Condition::new(Field::Gpa, operator, Value::Float(gpa)).into()]
}

fn degree_rule(req: &Requirement) -> Vec<Criterion> {
    keyword_conditions(req, DEGREE_KEYWORDS, Field::Degree)
}

fn major_rule(req: &Requirement) -> Vec<Criterion> {
    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut out: Vec<Criterion> = Vec::new();

    for kw in MAJOR_KEYWORDS {
        let spans = term_spans(&req.text, kw, false);
        let fresh = spans
            .iter()
            .any(|&(s, e)| !claimed.iter().any(|&(cs, ce)| cs <= s && e <= ce));
        if fresh {
            out.push(Condition::contains(Field::Major, *kw).into());
        }
        claimed.extend(spans);
    }
    out
}

fn nationality_rule(req: &Requirement) -> Vec<Criterion> {
    NATIONALITY_RE
        .captures(&req.text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| *s != "is" && *s != "of")
        .map(|s| vec![Criterion::from(Condition::contains(Field::Nationality, s))])
        .unwrap_or_default()
}

fn graduation_rule(req: &Requirement) -> Vec<Criterion> {
    let year = req.positions_of(GRADUATION_TRIGGERS).find_map(|i| {
        req.scan_forward(i, parse_year)
            .or_else(|| req.scan_backward(i, parse_year))
    });

    year.and_then(|y| NaiveDate::from_ymd_opt(y, 12, 31))
        .map(|date| {
            vec![Criterion::from(Condition::new(
                Field::EducationEndDate,
                Operator::Lte,
                Value::Date(date),
            ))]
        })
        .unwrap_or_default()
}

fn employment_rule(req: &Requirement) -> Vec<Criterion> {
    if req.has_any(CURRENT_WORDS) && req.has_any(EMPLOYED_WORDS) {
        vec![Condition::is_null(Field::WorkEndDate).into()]
    } else {
        vec![]
    }
}

fn position_rule(req: &Requirement) -> Vec<Criterion> {
    keyword_conditions(req, POSITION_KEYWORDS, Field::Position)
}

// ────────────────────────────────────────────────────────────────────────────
// Sort & limit
// ────────────────────────────────────────────────────────────────────────────

fn resolve_sort(req: &Requirement) -> Sort {
    let field = SORT_RE
        .captures(&req.text)
        .and_then(|caps| caps.get(1))
        .map(|m| match m.as_str() {
            "age" => SortField::Age,
            "gpa" => SortField::Gpa,
            "education" | "graduation" => SortField::Education,
            "name" => SortField::Name,
            _ => SortField::Experience,
        })
        .unwrap_or(SortField::Experience);

    let direction = if req.has_any(&["descending", "desc"]) {
        SortDirection::Desc
    } else if req.has_any(&["ascending", "asc"]) {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };

    Sort { field, direction }
}

fn resolve_limit(req: &Requirement) -> Option<u32> {
    LIMIT_RE
        .captures(&req.text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0)
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn detect_comparison(text: &str) -> Comparison {
    let any = |words: &[&str]| words.iter().any(|w| has_term(text, w));
    if any(LESS_WORDS) {
        Comparison::Less
    } else if any(MORE_WORDS) {
        Comparison::More
    } else if any(EQUAL_WORDS) {
        Comparison::Equal
    } else {
        Comparison::Unspecified
    }
}

/// One `contains` condition per keyword present as a whole word (plural allowed).
fn keyword_conditions(req: &Requirement, keywords: &[&str], field: Field) -> Vec<Criterion> {
    keywords
        .iter()
        .filter(|kw| !term_spans(&req.text, kw, true).is_empty())
        .map(|kw| Condition::contains(field, *kw).into())
        .collect()
}

fn has_term(text: &str, term: &str) -> bool {
    !term_spans(text, term, false).is_empty()
}

/// Byte spans of `term` in `text` where it is not glued to other alphanumerics.
/// With `allow_plural`, a single trailing `s` is accepted ("developers").
fn term_spans(text: &str, term: &str, allow_plural: bool) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    if term.is_empty() {
        return spans;
    }

    let mut from = 0;
    while let Some(pos) = text[from..].find(term) {
        let start = from + pos;
        let mut end = start + term.len();
        from = end;

        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        if allow_plural && text[end..].starts_with('s') && is_boundary(&text[end + 1..]) {
            end += 1;
        }
        if before_ok && is_boundary(&text[end..]) {
            spans.push((start, end));
        }
    }
    spans
}

fn is_boundary(rest: &str) -> bool {
    rest.chars().next().map_or(true, |c| !c.is_alphanumeric())
}

fn parse_int(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok().map(i64::from)
}

fn parse_gpa(token: &str) -> Option<f64> {
    if !token.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    token
        .parse::<f64>()
        .ok()
        .filter(|g| g.is_finite() && (0.0..=10.0).contains(g))
}

fn parse_year(token: &str) -> Option<i32> {
    if token.len() != 4 {
        return None;
    }
    parse_int(token)
        .filter(|y| (1900..=2099).contains(y))
        .and_then(|y| i32::try_from(y).ok())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn int(field: Field, operator: Operator, n: i64) -> Criterion {
        Condition::new(field, operator, Value::Int(n)).into()
    }

    fn contains(field: Field, s: &str) -> Criterion {
        Condition::contains(field, s).into()
    }

    fn skill_group(kw: &str) -> Criterion {
        Criterion::AnyOf(vec![
            Condition::contains(Field::Skills, kw),
            Condition::contains(Field::Introduction, kw),
        ])
    }

    fn run_rule(name: &str, text: &str) -> Vec<Criterion> {
        let rule = RULES.iter().find(|r| r.name == name).unwrap();
        (rule.extract)(&Requirement::new(text))
    }

    #[test]
    fn test_empty_input_yields_empty_spec_with_default_sort() {
        let spec = translate("");
        assert!(spec.conditions.is_empty());
        assert_eq!(spec.sort, Sort::default());
        assert!(spec.limit.is_none());
    }

    #[test]
    fn test_text_without_triggers_matches_everything() {
        let spec = translate("hello there, anyone around?");
        assert!(spec.conditions.is_empty());
        assert_eq!(spec.sort, Sort::default());
    }

    #[test]
    fn test_full_time_only() {
        let spec = translate("full-time");
        assert_eq!(
            spec.conditions,
            vec![Condition::new(Field::JobPreference, Operator::Eq, Value::text("full-time")).into()]
        );
        assert_eq!(spec.sort, Sort::default());
        assert!(spec.limit.is_none());
    }

    #[test]
    fn test_years_plus_experience_in_java() {
        let spec = translate("5+ years experience in Java");
        assert_eq!(
            spec.conditions,
            vec![int(Field::Experience, Operator::Gte, 5), skill_group("java")]
        );
        assert_eq!(spec.sort, Sort::default());
    }

    #[test]
    fn test_less_than_experience_part_time() {
        let spec = translate("less than 3 years experience, part-time");
        assert_eq!(
            spec.conditions,
            vec![
                int(Field::Experience, Operator::Lte, 3),
                Condition::new(Field::JobPreference, Operator::Eq, Value::text("part-time")).into(),
            ]
        );
    }

    #[test]
    fn test_senior_architect_ands_background_keywords() {
        let spec = translate("senior architect");
        let intro: Vec<_> = spec
            .conditions
            .iter()
            .flat_map(|c| c.conditions())
            .filter(|c| c.field == Field::Introduction)
            .map(|c| c.value.clone())
            .collect();
        assert_eq!(intro, vec![Value::text("architect"), Value::text("senior")]);
        assert!(spec.conditions.contains(&contains(Field::Position, "architect")));
    }

    #[test]
    fn test_top_full_time_developers_sorted_ascending() {
        let spec = translate("top 5 full-time developers sort by experience ascending");
        assert_eq!(
            spec.conditions,
            vec![
                Condition::new(Field::JobPreference, Operator::Eq, Value::text("full-time")).into(),
                contains(Field::Position, "developer"),
            ]
        );
        assert_eq!(spec.sort.field, SortField::Experience);
        assert_eq!(spec.sort.direction, SortDirection::Asc);
        assert_eq!(spec.limit, Some(5));
    }

    #[test]
    fn test_translate_is_deterministic() {
        let text = "top 3 senior python developers with gpa over 3.5, graduated 2019";
        assert_eq!(translate(text), translate(text));
    }

    #[test]
    fn test_age_and_experience_numbers_do_not_bleed() {
        let spec = translate("age 30 with 5 years experience");
        assert!(spec.conditions.contains(&int(Field::Age, Operator::Eq, 30)));
        assert!(spec.conditions.contains(&int(Field::Experience, Operator::Gte, 5)));
    }

    #[test]
    fn test_number_before_years_is_not_reused_for_age_or_gpa() {
        assert_eq!(
            translate("3.5 gpa with 5 years experience").conditions,
            vec![
                int(Field::Experience, Operator::Gte, 5),
                Condition::new(Field::Gpa, Operator::Gte, Value::Float(3.5)).into(),
            ]
        );
        assert_eq!(
            translate("any age with 5 years experience").conditions,
            vec![int(Field::Experience, Operator::Gte, 5)]
        );
        assert_eq!(
            translate("age: open, 5 years experience").conditions,
            vec![int(Field::Experience, Operator::Gte, 5)]
        );
    }

    #[test]
    fn test_gpa_ignores_number_owned_by_top_n() {
        let spec = translate("top 3 gpa above 3.5");
        assert_eq!(
            spec.conditions,
            vec![Condition::new(Field::Gpa, Operator::Gt, Value::Float(3.5)).into()]
        );
        assert_eq!(spec.limit, Some(3));
    }

    #[test]
    fn test_year_before_graduate_trigger_is_kept() {
        let date = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
        assert_eq!(
            run_rule("graduation", "a 2019 graduate"),
            vec![Condition::new(Field::EducationEndDate, Operator::Lte, Value::Date(date)).into()]
        );
    }

    #[test]
    fn test_graduates_plural_triggers_graduation() {
        let date = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        assert_eq!(
            translate("graduates of 2020").conditions,
            vec![Condition::new(Field::EducationEndDate, Operator::Lte, Value::Date(date)).into()]
        );
    }

    #[test]
    fn test_years_old_is_age_not_experience() {
        let spec = translate("candidates under 35 years old");
        assert_eq!(spec.conditions, vec![int(Field::Age, Operator::Lte, 35)]);
    }

    #[test]
    fn test_comparison_mode_is_shared_across_numeric_fields() {
        let spec = translate("over 3 years experience and age over 25");
        assert!(spec.conditions.contains(&int(Field::Experience, Operator::Gte, 3)));
        assert!(spec.conditions.contains(&int(Field::Age, Operator::Gte, 25)));
    }

    #[test]
    fn test_exactly_gives_equality_on_experience() {
        assert_eq!(
            run_rule("experience", "exactly 4 years of experience"),
            vec![int(Field::Experience, Operator::Eq, 4)]
        );
    }

    #[test]
    fn test_experience_number_after_keyword() {
        assert_eq!(
            run_rule("experience", "experience of at least 6"),
            vec![int(Field::Experience, Operator::Gte, 6)]
        );
    }

    #[test]
    fn test_experience_trigger_without_number_is_dropped() {
        assert!(run_rule("experience", "lots of experience").is_empty());
        assert!(run_rule("experience", "many years experience").is_empty());
    }

    #[test]
    fn test_explicit_skill_phrase_wins_over_keyword_list() {
        assert_eq!(
            run_rule("skills", "someone who knows rust and java"),
            vec![contains(Field::Skills, "rust")]
        );
        assert_eq!(
            run_rule("skills", "skills in c++"),
            vec![contains(Field::Skills, "c++")]
        );
    }

    #[test]
    fn test_every_tech_keyword_gets_its_own_group() {
        assert_eq!(
            run_rule("skills", "docker and kubernetes on aws"),
            vec![skill_group("aws"), skill_group("docker"), skill_group("kubernetes")]
        );
    }

    #[test]
    fn test_javascript_does_not_also_match_java() {
        assert_eq!(run_rule("skills", "javascript developer"), vec![skill_group("javascript")]);
    }

    #[test]
    fn test_full_time_takes_precedence_over_part_time() {
        assert_eq!(
            run_rule("job_preference", "full time or part time"),
            vec![Condition::new(Field::JobPreference, Operator::Eq, Value::text("full-time")).into()]
        );
    }

    #[test]
    fn test_name_extraction() {
        assert_eq!(
            run_rule("name", "someone named Alex"),
            vec![contains(Field::Name, "alex")]
        );
        assert_eq!(
            run_rule("name", "her name is sarah"),
            vec![contains(Field::Name, "sarah")]
        );
    }

    #[test]
    fn test_quote_in_name_is_kept_as_plain_data() {
        let spec = translate("named o'brien");
        assert_eq!(spec.conditions, vec![contains(Field::Name, "o'brien")]);
    }

    #[test]
    fn test_gpa_comparisons() {
        let gpa = |op, v| vec![Criterion::from(Condition::new(Field::Gpa, op, Value::Float(v)))];
        assert_eq!(run_rule("gpa", "gpa 3.5"), gpa(Operator::Gte, 3.5));
        assert_eq!(run_rule("gpa", "gpa more than 3.2"), gpa(Operator::Gt, 3.2));
        assert_eq!(run_rule("gpa", "gpa less than 2.0"), gpa(Operator::Lt, 2.0));
        assert!(run_rule("gpa", "good gpa").is_empty());
    }

    #[test]
    fn test_degree_keywords() {
        assert_eq!(
            run_rule("degree", "a master's or phd holder"),
            vec![contains(Field::Degree, "master"), contains(Field::Degree, "phd")]
        );
    }

    #[test]
    fn test_major_prefers_longest_phrase() {
        assert_eq!(
            run_rule("major", "software engineering graduates"),
            vec![contains(Field::Major, "software engineering")]
        );
        assert_eq!(
            run_rule("major", "computer science or engineering"),
            vec![contains(Field::Major, "computer science"), contains(Field::Major, "engineering")]
        );
    }

    #[test]
    fn test_nationality_extraction() {
        assert_eq!(
            run_rule("nationality", "nationality is japanese"),
            vec![contains(Field::Nationality, "japanese")]
        );
        assert_eq!(
            run_rule("nationality", "nationality: canadian"),
            vec![contains(Field::Nationality, "canadian")]
        );
        assert!(run_rule("nationality", "any nationality is").is_empty());
    }

    #[test]
    fn test_graduation_year_becomes_end_of_year_bound() {
        let date = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        assert_eq!(
            run_rule("graduation", "graduated in 2020"),
            vec![Condition::new(Field::EducationEndDate, Operator::Lte, Value::Date(date)).into()]
        );
        assert!(run_rule("graduation", "graduated in 1850").is_empty());
        assert!(run_rule("graduation", "recent graduate").is_empty());
    }

    #[test]
    fn test_undergraduate_is_not_a_graduation_trigger() {
        assert!(run_rule("graduation", "undergraduate 2021").is_empty());
    }

    #[test]
    fn test_currently_working_requires_both_words() {
        assert_eq!(
            run_rule("employment", "currently working somewhere"),
            vec![Condition::is_null(Field::WorkEndDate).into()]
        );
        assert!(run_rule("employment", "currently looking").is_empty());
    }

    #[test]
    fn test_sort_by_other_field_and_desc() {
        let spec = translate("sort by gpa desc");
        assert_eq!(spec.sort.field, SortField::Gpa);
        assert_eq!(spec.sort.direction, SortDirection::Desc);

        let spec = translate("order by age ascending");
        assert_eq!(spec.sort.field, SortField::Age);
        assert_eq!(spec.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_first_n_limit_and_zero_is_ignored() {
        assert_eq!(translate("first 10 candidates").limit, Some(10));
        assert_eq!(translate("top 0").limit, None);
        assert_eq!(translate("top 99999999999").limit, None);
    }

    #[test]
    fn test_under_does_not_fire_inside_undergraduate() {
        assert_eq!(Requirement::new("undergraduate").comparison, Comparison::Unspecified);
        assert_eq!(Requirement::new("under 30").comparison, Comparison::Less);
    }

    #[test]
    fn test_malformed_and_odd_inputs_never_panic() {
        for text in [
            "   ",
            "年齢 30 歳",
            "age",
            "gpa .",
            "graduated",
            "named",
            "top",
            "5+++ years c++++",
            "experience 3.5.5 years",
            "ǅ s ss age 1 old years old",
            "'; DROP TABLE candidates; --",
        ] {
            let _ = translate(text);
        }
    }

    #[test]
    fn test_sql_meta_characters_stay_in_values() {
        let spec = translate("skills in x'or'1=1 named bob\"--");
        for cond in spec.conditions.iter().flat_map(|c| c.conditions()) {
            assert!(matches!(cond.value, Value::Text(_)));
        }
        assert!(spec.conditions.contains(&contains(Field::Skills, "x")));
        assert!(spec.conditions.contains(&contains(Field::Name, "bob")));
    }
}
