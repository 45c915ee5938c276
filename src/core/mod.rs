// Core algorithm exports
pub mod assignment;
pub mod matcher;
pub mod ranking;
pub mod scoring;
pub mod team;

pub use assignment::suggest_optimal_assignments;
pub use matcher::Matcher;
pub use ranking::{create_match_matrix, find_best_candidates, find_best_tasks, DEFAULT_LIMIT};
pub use scoring::calculate_match;
pub use team::analyze_team;
