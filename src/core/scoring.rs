use crate::models::{Actor, Breakdown, Factor, FactorBreakdown, MatchResult, Task};

/// Calculate the compatibility (0-100) of an actor for a task
///
/// Scoring formula, per factor `f`:
/// contribution(f) = (actor_score(f) / 100) * weight(f) * 100
///
/// match_score = round(sum of unrounded contributions)
///
/// The breakdown shows each contribution and weight rounded to whole
/// percent, so it may not add up to `match_score` exactly.
///
/// The actor's profile is assumed to hold 0-100 values and the task's
/// weights to sum to 1.0; neither is checked here. A task with all-zero
/// weights scores 0.
pub fn calculate_match(actor: &Actor, task: &Task) -> MatchResult {
    let mut breakdown = Breakdown::new();
    let mut total = 0.0;

    for factor in Factor::ALL {
        let actor_score = actor.profile.get(factor);
        let weight = task.weights.get(factor);
        let contribution = factor_contribution(actor_score, weight);

        breakdown.insert(
            factor,
            FactorBreakdown {
                actor_score,
                task_weight: as_percent(weight * 100.0),
                contribution: as_percent(contribution),
            },
        );

        total += contribution;
    }

    MatchResult {
        actor_id: actor.id.clone(),
        actor_name: actor.name.clone(),
        task_id: task.id.clone(),
        task_title: task.title.clone(),
        match_score: as_percent(total),
        breakdown,
    }
}

/// Unrounded contribution of one factor, in percent
#[inline]
fn factor_contribution(actor_score: u8, weight: f64) -> f64 {
    (actor_score as f64 / 100.0) * weight * 100.0
}

/// Round half away from zero; negative values saturate to 0
#[inline]
fn as_percent(value: f64) -> u32 {
    value.round() as u32
}
