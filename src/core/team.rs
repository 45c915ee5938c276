use tracing::info;

use crate::models::{Actor, Factor, Profile, SkillScore, TeamAnalysis};

/// Number of factors reported as team strengths
pub const TOP_STRENGTHS: usize = 3;

/// Number of factors reported as areas for improvement
pub const IMPROVEMENT_AREAS: usize = 2;

/// Summarize a team's skills
///
/// Averages each factor across all actors (rounded to the nearest integer)
/// and ranks factors by that average. Ties keep enumeration order. Returns
/// `None` for an empty team.
pub fn analyze_team(actors: &[Actor]) -> Option<TeamAnalysis> {
    if actors.is_empty() {
        return None;
    }

    let team_size = actors.len();
    let average_skills = Profile::from_fn(|factor| factor_average(actors, factor));

    let mut ranked: Vec<SkillScore> = average_skills
        .iter()
        .map(|(skill, score)| SkillScore { skill, score })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let top_strengths = ranked.iter().take(TOP_STRENGTHS).copied().collect();
    let areas_for_improvement = ranked[ranked.len().saturating_sub(IMPROVEMENT_AREAS)..].to_vec();

    info!(team_size, "Team analysis computed");

    Some(TeamAnalysis {
        team_size,
        average_skills,
        top_strengths,
        areas_for_improvement,
    })
}

/// Rounded mean of one factor; `actors` must not be empty
fn factor_average(actors: &[Actor], factor: Factor) -> u8 {
    let total: u32 = actors.iter().map(|a| a.profile.get(factor) as u32).sum();
    (total as f64 / actors.len() as f64).round() as u8
}
