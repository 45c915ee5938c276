use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::{Actor, Factor, Profile, Task};

/// How one factor contributed to a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub actor_score: u8,
    /// Task weight as a rounded percentage
    pub task_weight: u32,
    /// Contribution to the total as a rounded percentage
    pub contribution: u32,
}

/// Breakdown for every factor, keyed in enumeration order
pub type Breakdown = BTreeMap<Factor, FactorBreakdown>;

/// Compatibility of one actor with one task
///
/// Rounded per-factor contributions may not add up to `match_score`: the
/// total is rounded once from the unrounded sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub actor_id: String,
    pub actor_name: String,
    pub task_id: String,
    pub task_title: String,
    pub match_score: u32,
    pub breakdown: Breakdown,
}

/// Actor paired with a task by the solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub actor: Actor,
    pub task: Task,
    pub match_score: u32,
}

/// Solver output: pairings in selection order plus leftovers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPlan {
    pub assignments: Vec<Assignment>,
    pub unassigned_tasks: Vec<Task>,
    pub unassigned_actors: Vec<Actor>,
}

impl AssignmentPlan {
    pub fn total_score(&self) -> u32 {
        self.assignments.iter().map(|a| a.match_score).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScore {
    pub skill: Factor,
    pub score: u8,
}

/// Group-level averages and extremes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysis {
    pub team_size: usize,
    pub average_skills: Profile,
    pub top_strengths: Vec<SkillScore>,
    pub areas_for_improvement: Vec<SkillScore>,
}

/// Coarse quality band for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitLevel {
    Strong,
    Moderate,
    Weak,
}
