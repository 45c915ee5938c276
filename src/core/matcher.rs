use tracing::{debug, warn};
use validator::Validate;

use crate::config::{FitSettings, MatchingSettings, Settings};
use crate::core::{
    assignment::suggest_optimal_assignments,
    ranking::{create_match_matrix, find_best_candidates, find_best_tasks},
    scoring::calculate_match,
    team::analyze_team,
};
use crate::error::{MatchError, MatcherResult};
use crate::models::{Actor, AssignmentPlan, FitLevel, MatchResult, Task, TeamAnalysis};

/// Configured entry point to the matching engine
///
/// Wraps the pure functions in `core` with the checks a host usually wants
/// in front of them:
/// 1. Pool size caps, so the cubic solver cannot be handed unbounded input
/// 2. Profile and weight validation (optional)
/// 3. Default ranking limit and fit thresholds
#[derive(Debug, Clone)]
pub struct Matcher {
    settings: MatchingSettings,
    fit: FitSettings,
}

impl Matcher {
    pub fn new(settings: MatchingSettings, fit: FitSettings) -> Self {
        Self { settings, fit }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.matching.clone(), settings.fit)
    }

    pub fn with_default_settings() -> Self {
        Self::new(MatchingSettings::default(), FitSettings::default())
    }

    /// Score one pair. Inputs are trusted as-is.
    pub fn calculate_match(&self, actor: &Actor, task: &Task) -> MatchResult {
        calculate_match(actor, task)
    }

    /// Rank actors for a task; `limit` falls back to the configured default
    pub fn best_candidates(
        &self,
        actors: &[Actor],
        task: &Task,
        limit: Option<usize>,
    ) -> MatcherResult<Vec<MatchResult>> {
        self.check_actors(actors)?;
        self.check_tasks(std::slice::from_ref(task))?;

        Ok(find_best_candidates(actors, task, limit.unwrap_or(self.settings.default_limit)))
    }

    /// Rank tasks for an actor; `limit` falls back to the configured default
    pub fn best_tasks(
        &self,
        actor: &Actor,
        tasks: &[Task],
        limit: Option<usize>,
    ) -> MatcherResult<Vec<MatchResult>> {
        self.check_actors(std::slice::from_ref(actor))?;
        self.check_tasks(tasks)?;

        Ok(find_best_tasks(actor, tasks, limit.unwrap_or(self.settings.default_limit)))
    }

    pub fn match_matrix(
        &self,
        actors: &[Actor],
        tasks: &[Task],
    ) -> MatcherResult<Vec<Vec<MatchResult>>> {
        self.check_actors(actors)?;
        self.check_tasks(tasks)?;

        Ok(create_match_matrix(actors, tasks))
    }

    /// Greedy one-to-one assignment of actors to tasks
    pub fn assign(&self, actors: &[Actor], tasks: &[Task]) -> MatcherResult<AssignmentPlan> {
        self.check_actors(actors)?;
        self.check_tasks(tasks)?;

        debug!(actors = actors.len(), tasks = tasks.len(), "Running greedy assignment");
        Ok(suggest_optimal_assignments(actors, tasks))
    }

    pub fn analyze_team(&self, actors: &[Actor]) -> MatcherResult<Option<TeamAnalysis>> {
        self.check_actors(actors)?;

        Ok(analyze_team(actors))
    }

    pub fn fit_level(&self, score: u32) -> FitLevel {
        self.fit.classify(score)
    }

    fn check_actors(&self, actors: &[Actor]) -> MatcherResult<()> {
        check_pool_size("actors", actors.len(), self.settings.max_actors)?;

        if self.settings.validate_inputs {
            for actor in actors {
                actor.validate().map_err(|source| MatchError::InvalidActor {
                    id: actor.id.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    fn check_tasks(&self, tasks: &[Task]) -> MatcherResult<()> {
        check_pool_size("tasks", tasks.len(), self.settings.max_tasks)?;

        if self.settings.validate_inputs {
            for task in tasks {
                task.validate().map_err(|source| MatchError::InvalidTask {
                    id: task.id.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_settings()
    }
}

fn check_pool_size(pool: &'static str, len: usize, max: Option<usize>) -> MatcherResult<()> {
    match max {
        Some(max) if len > max => {
            warn!(pool, len, max, "Input pool exceeds configured limit");
            Err(MatchError::PoolTooLarge { pool, len, max })
        }
        _ => Ok(()),
    }
}
