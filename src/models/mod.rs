// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Actor, Factor, Profile, Task, WeightVector};
pub use requests::{Answer, AnswerOption, Question};
pub use responses::{
    Assignment, AssignmentPlan, Breakdown, FactorBreakdown, FitLevel, MatchResult, SkillScore,
    TeamAnalysis,
};
