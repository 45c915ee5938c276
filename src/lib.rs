//! Skill Match - assigns work to people by weighted skill compatibility
//!
//! This library scores actors (people with an assessed skill profile)
//! against tasks (weighted skill requirements), ranks either side, pairs
//! them one-to-one with a greedy solver and summarizes team-wide skills.
//! All matching operations are pure functions over borrowed input.

pub mod assessment;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use crate::assessment::Questionnaire;
pub use crate::config::Settings;
pub use crate::core::{
    analyze_team, calculate_match, create_match_matrix, find_best_candidates, find_best_tasks,
    suggest_optimal_assignments, Matcher,
};
pub use crate::error::{AssessmentError, MatchError};
pub use crate::models::{
    Actor, Answer, Assignment, AssignmentPlan, Factor, FactorBreakdown, FitLevel, MatchResult,
    Profile, SkillScore, Task, TeamAnalysis, WeightVector,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let actor = Actor::with_id("a", "A", Profile::uniform(40));
        let task = Task::with_id("t", "T", WeightVector::single(Factor::Technical));
        assert_eq!(calculate_match(&actor, &task).match_score, 40);
    }
}
