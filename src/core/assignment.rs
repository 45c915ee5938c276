use tracing::{debug, info};

use crate::core::scoring::calculate_match;
use crate::models::{Actor, Assignment, AssignmentPlan, Task};

/// Pair actors with tasks one-to-one using a global greedy strategy
///
/// Each round looks at every remaining (actor, task) pair, commits the
/// single pair with the highest score and removes both from the pool. On
/// equal scores the first pair in (actor order, task order) wins. The loop
/// stops when either pool is empty or the best remaining score is 0; a
/// zero-score pair is never assigned.
///
/// This is not an optimal bipartite matching. A locally best pair can block
/// a better overall pairing, and the total score may be lower than what the
/// Hungarian algorithm would find. Cost is
/// O(min(actors, tasks) * actors * tasks), so callers should cap pool sizes.
///
/// The caller's slices are never modified. Assignments are returned in
/// selection order; leftovers keep their input order.
pub fn suggest_optimal_assignments(actors: &[Actor], tasks: &[Task]) -> AssignmentPlan {
    // Scores do not depend on which pairs are still open, so compute the
    // full grid once and let each round scan the live rows and columns.
    let scores: Vec<Vec<u32>> = actors
        .iter()
        .map(|actor| {
            tasks
                .iter()
                .map(|task| calculate_match(actor, task).match_score)
                .collect()
        })
        .collect();

    let mut open_actors: Vec<usize> = (0..actors.len()).collect();
    let mut open_tasks: Vec<usize> = (0..tasks.len()).collect();
    let mut assignments = Vec::with_capacity(actors.len().min(tasks.len()));

    while !open_actors.is_empty() && !open_tasks.is_empty() {
        let Some(best) = best_open_pair(&scores, &open_actors, &open_tasks) else {
            debug!(
                open_actors = open_actors.len(),
                open_tasks = open_tasks.len(),
                "No remaining pair scores above zero"
            );
            break;
        };

        let actor_idx = open_actors.remove(best.actor_pos);
        let task_idx = open_tasks.remove(best.task_pos);

        debug!(
            round = assignments.len() + 1,
            actor_id = %actors[actor_idx].id,
            task_id = %tasks[task_idx].id,
            score = best.score,
            "Assigned pair"
        );

        assignments.push(Assignment {
            actor: actors[actor_idx].clone(),
            task: tasks[task_idx].clone(),
            match_score: best.score,
        });
    }

    let plan = AssignmentPlan {
        assignments,
        unassigned_tasks: open_tasks.iter().map(|&i| tasks[i].clone()).collect(),
        unassigned_actors: open_actors.iter().map(|&i| actors[i].clone()).collect(),
    };

    info!(
        actors = actors.len(),
        tasks = tasks.len(),
        assigned = plan.assignments.len(),
        total_score = plan.total_score(),
        "Greedy assignment finished"
    );

    plan
}

/// Position of a pair within the open pools
#[derive(Debug, Clone, Copy)]
struct Candidate {
    actor_pos: usize,
    task_pos: usize,
    score: u32,
}

/// Highest-scoring open pair, or `None` if every open pair scores 0
fn best_open_pair(
    scores: &[Vec<u32>],
    open_actors: &[usize],
    open_tasks: &[usize],
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (actor_pos, &actor_idx) in open_actors.iter().enumerate() {
        for (task_pos, &task_idx) in open_tasks.iter().enumerate() {
            let score = scores[actor_idx][task_idx];
            // Strictly greater: the earliest pair keeps a tie
            if score > best.map_or(0, |b| b.score) {
                best = Some(Candidate { actor_pos, task_pos, score });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Factor, Profile, WeightVector};

    fn specialist(id: &str, factor: Factor, score: u8) -> Actor {
        Actor::with_id(id, format!("Actor {}", id), Profile::uniform(0).with(factor, score))
    }

    fn task_for(id: &str, factor: Factor) -> Task {
        Task::with_id(id, format!("Task {}", id), WeightVector::single(factor))
    }

    fn pairs(plan: &AssignmentPlan) -> Vec<(&str, &str, u32)> {
        plan.assignments
            .iter()
            .map(|a| (a.actor.id.as_str(), a.task.id.as_str(), a.match_score))
            .collect()
    }

    #[test]
    fn test_specialists_get_their_tasks() {
        let actors = vec![
            specialist("a1", Factor::Technical, 100),
            specialist("a2", Factor::Creativity, 100),
        ];
        let tasks = vec![task_for("t1", Factor::Technical), task_for("t2", Factor::Creativity)];

        let plan = suggest_optimal_assignments(&actors, &tasks);

        assert_eq!(pairs(&plan), vec![("a1", "t1", 100), ("a2", "t2", 100)]);
        assert!(plan.unassigned_actors.is_empty());
        assert!(plan.unassigned_tasks.is_empty());
    }

    #[test]
    fn test_assignments_in_selection_order() {
        let actors = vec![
            specialist("low", Factor::Technical, 40),
            specialist("high", Factor::Creativity, 90),
        ];
        let tasks = vec![task_for("tech", Factor::Technical), task_for("art", Factor::Creativity)];

        let plan = suggest_optimal_assignments(&actors, &tasks);

        assert_eq!(pairs(&plan), vec![("high", "art", 90), ("low", "tech", 40)]);
    }

    #[test]
    fn test_tie_prefers_first_actor_then_first_task() {
        let actors = vec![
            Actor::with_id("a1", "A1", Profile::uniform(50)),
            Actor::with_id("a2", "A2", Profile::uniform(50)),
        ];
        let tasks = vec![task_for("t1", Factor::Leadership), task_for("t2", Factor::Organization)];

        let plan = suggest_optimal_assignments(&actors, &tasks);

        assert_eq!(pairs(&plan), vec![("a1", "t1", 50), ("a2", "t2", 50)]);
    }

    #[test]
    fn test_zero_score_pairs_are_not_assigned() {
        let actors = vec![
            specialist("tech", Factor::Technical, 80),
            specialist("lead", Factor::Leadership, 80),
        ];
        let tasks = vec![task_for("art", Factor::Creativity), task_for("code", Factor::Technical)];

        let plan = suggest_optimal_assignments(&actors, &tasks);

        assert_eq!(pairs(&plan), vec![("tech", "code", 80)]);
        assert_eq!(plan.unassigned_actors.len(), 1);
        assert_eq!(plan.unassigned_actors[0].id, "lead");
        assert_eq!(plan.unassigned_tasks[0].id, "art");
    }

    #[test]
    fn test_greedy_is_not_globally_optimal() {
        // a1 is best everywhere, so greedy gives it t1 (90) and leaves a2 with
        // t2 (10): total 100. Swapping would give 80 + 60 = 140.
        let a1 = Actor::with_id(
            "a1",
            "A1",
            Profile::uniform(0).with(Factor::Technical, 90).with(Factor::Creativity, 80),
        );
        let a2 = Actor::with_id(
            "a2",
            "A2",
            Profile::uniform(0).with(Factor::Technical, 60).with(Factor::Creativity, 10),
        );
        let tasks = vec![task_for("t1", Factor::Technical), task_for("t2", Factor::Creativity)];

        let plan = suggest_optimal_assignments(&[a1, a2], &tasks);

        assert_eq!(pairs(&plan), vec![("a1", "t1", 90), ("a2", "t2", 10)]);
        assert_eq!(plan.total_score(), 100);
    }

    #[test]
    fn test_leftovers_keep_input_order() {
        let actors = vec![
            specialist("a", Factor::Communication, 10),
            specialist("b", Factor::Communication, 99),
            specialist("c", Factor::Communication, 20),
        ];
        let tasks = vec![task_for("talk", Factor::Communication)];

        let plan = suggest_optimal_assignments(&actors, &tasks);

        assert_eq!(pairs(&plan), vec![("b", "talk", 99)]);
        let left: Vec<&str> = plan.unassigned_actors.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(left, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_pools() {
        let tasks = vec![task_for("t1", Factor::Technical)];
        let plan = suggest_optimal_assignments(&[], &tasks);
        assert!(plan.assignments.is_empty());
        assert_eq!(plan.unassigned_tasks, tasks);

        let actors = vec![specialist("a", Factor::Technical, 50)];
        let plan = suggest_optimal_assignments(&actors, &[]);
        assert!(plan.assignments.is_empty());
        assert_eq!(plan.unassigned_actors, actors);
    }
}
