// Candidate search: requirement text -> FilterSpec -> store query.
// The translator is pure; all I/O goes through the CandidateStore in AppState.

pub mod filter;
pub mod handlers;
pub mod keywords;
pub mod translator;
