use crate::core::scoring::calculate_match;
use crate::models::{Actor, MatchResult, Task};

/// Ranking limit used when the caller has no preference
pub const DEFAULT_LIMIT: usize = 5;

/// Rank actors for a task, best first
///
/// Returns at most `limit` results. Equal scores keep the input order of
/// the actors.
pub fn find_best_candidates(actors: &[Actor], task: &Task, limit: usize) -> Vec<MatchResult> {
    let matches = actors
        .iter()
        .map(|actor| calculate_match(actor, task))
        .collect();

    rank(matches, limit)
}

/// Rank tasks for an actor, best first
///
/// Returns at most `limit` results. Equal scores keep the input order of
/// the tasks.
pub fn find_best_tasks(actor: &Actor, tasks: &[Task], limit: usize) -> Vec<MatchResult> {
    let matches = tasks
        .iter()
        .map(|task| calculate_match(actor, task))
        .collect();

    rank(matches, limit)
}

/// Score every actor against every task
///
/// Row `i` holds actor `i` matched against each task, in task order.
pub fn create_match_matrix(actors: &[Actor], tasks: &[Task]) -> Vec<Vec<MatchResult>> {
    actors
        .iter()
        .map(|actor| tasks.iter().map(|task| calculate_match(actor, task)).collect())
        .collect()
}

fn rank(mut matches: Vec<MatchResult>, limit: usize) -> Vec<MatchResult> {
    // sort_by is stable, which is what keeps ties in input order
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Factor, Profile, WeightVector};

    fn create_actor(id: &str, technical: u8) -> Actor {
        let profile = Profile::uniform(0).with(Factor::Technical, technical);
        Actor::with_id(id, format!("Actor {}", id), profile)
    }

    fn technical_task(id: &str) -> Task {
        Task::with_id(id, format!("Task {}", id), WeightVector::single(Factor::Technical))
    }

    #[test]
    fn test_candidates_sorted_by_score() {
        let actors = vec![create_actor("1", 30), create_actor("2", 90), create_actor("3", 60)];

        let result = find_best_candidates(&actors, &technical_task("t"), DEFAULT_LIMIT);

        let ids: Vec<&str> = result.iter().map(|m| m.actor_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_candidates_ties_keep_input_order() {
        let actors = vec![
            create_actor("a", 50),
            create_actor("b", 70),
            create_actor("c", 50),
            create_actor("d", 50),
        ];

        let result = find_best_candidates(&actors, &technical_task("t"), 10);

        let ids: Vec<&str> = result.iter().map(|m| m.actor_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_respects_limit() {
        let actors: Vec<Actor> = (0..20).map(|i| create_actor(&i.to_string(), i * 5)).collect();

        let result = find_best_candidates(&actors, &technical_task("t"), 5);

        assert_eq!(result.len(), 5);
        assert_eq!(result[0].match_score, 95);
    }

    #[test]
    fn test_limit_does_not_pad() {
        let actors = vec![create_actor("1", 10)];
        assert_eq!(find_best_candidates(&actors, &technical_task("t"), 5).len(), 1);
        assert!(find_best_candidates(&[], &technical_task("t"), 5).is_empty());
    }

    #[test]
    fn test_best_tasks_for_actor() {
        let actor = Actor::with_id(
            "a",
            "Actor",
            Profile::uniform(10).with(Factor::Leadership, 90),
        );
        let tasks = vec![
            technical_task("tech"),
            Task::with_id("lead", "Lead", WeightVector::single(Factor::Leadership)),
        ];

        let result = find_best_tasks(&actor, &tasks, 1);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].task_id, "lead");
        assert_eq!(result[0].match_score, 90);
    }

    #[test]
    fn test_match_matrix_shape() {
        let actors = vec![create_actor("1", 10), create_actor("2", 20), create_actor("3", 30)];
        let tasks = vec![technical_task("x"), technical_task("y")];

        let matrix = create_match_matrix(&actors, &tasks);

        assert_eq!(matrix.len(), 3);
        assert!(matrix.iter().all(|row| row.len() == 2));
        assert_eq!(matrix[2][1].actor_id, "3");
        assert_eq!(matrix[2][1].task_id, "y");
        assert_eq!(matrix[2][1].match_score, 30);
    }
}
