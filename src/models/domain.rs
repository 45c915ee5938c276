use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Skill dimension measured by the assessment and weighted by tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    Creativity,
    Technical,
    Organization,
    Communication,
    Leadership,
    ProblemSolving,
}

impl Factor {
    /// All factors in enumeration order. Every per-factor iteration in the
    /// crate walks this array, so ordering-dependent results are stable.
    pub const ALL: [Factor; 6] = [
        Factor::Creativity,
        Factor::Technical,
        Factor::Organization,
        Factor::Communication,
        Factor::Leadership,
        Factor::ProblemSolving,
    ];

    /// Serialized key, as used in JSON and TOML documents
    pub fn key(self) -> &'static str {
        match self {
            Factor::Creativity => "creativity",
            Factor::Technical => "technical",
            Factor::Organization => "organization",
            Factor::Communication => "communication",
            Factor::Leadership => "leadership",
            Factor::ProblemSolving => "problemSolving",
        }
    }

    /// Human-readable label for reports
    pub fn label(self) -> &'static str {
        match self {
            Factor::Creativity => "Creativity",
            Factor::Technical => "Technical skills",
            Factor::Organization => "Organization",
            Factor::Communication => "Communication",
            Factor::Leadership => "Leadership",
            Factor::ProblemSolving => "Problem solving",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-factor skill scores on a 0-100 scale
///
/// Every factor is a required field, so a deserialized profile is always
/// complete. The 0-100 bound is checked by `validate()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(range(max = 100))]
    pub creativity: u8,
    #[validate(range(max = 100))]
    pub technical: u8,
    #[validate(range(max = 100))]
    pub organization: u8,
    #[validate(range(max = 100))]
    pub communication: u8,
    #[validate(range(max = 100))]
    pub leadership: u8,
    #[validate(range(max = 100))]
    pub problem_solving: u8,
}

impl Profile {
    /// Build a profile by evaluating `score` once per factor
    pub fn from_fn(mut score: impl FnMut(Factor) -> u8) -> Self {
        Self {
            creativity: score(Factor::Creativity),
            technical: score(Factor::Technical),
            organization: score(Factor::Organization),
            communication: score(Factor::Communication),
            leadership: score(Factor::Leadership),
            problem_solving: score(Factor::ProblemSolving),
        }
    }

    /// Profile with every factor set to the same score
    pub fn uniform(score: u8) -> Self {
        Self::from_fn(|_| score)
    }

    #[inline]
    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Creativity => self.creativity,
            Factor::Technical => self.technical,
            Factor::Organization => self.organization,
            Factor::Communication => self.communication,
            Factor::Leadership => self.leadership,
            Factor::ProblemSolving => self.problem_solving,
        }
    }

    /// Return a copy with one factor replaced
    pub fn with(mut self, factor: Factor, score: u8) -> Self {
        *self.slot_mut(factor) = score;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, u8)> + '_ {
        Factor::ALL.iter().map(move |&factor| (factor, self.get(factor)))
    }

    fn slot_mut(&mut self, factor: Factor) -> &mut u8 {
        match factor {
            Factor::Creativity => &mut self.creativity,
            Factor::Technical => &mut self.technical,
            Factor::Organization => &mut self.organization,
            Factor::Communication => &mut self.communication,
            Factor::Leadership => &mut self.leadership,
            Factor::ProblemSolving => &mut self.problem_solving,
        }
    }
}

/// Per-factor importance of a task
///
/// Weights are expected to be normalized (sum 1.0) before scoring. Factors
/// missing from a serialized vector default to weight 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WeightVector {
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub creativity: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub technical: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub organization: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub communication: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub leadership: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub problem_solving: f64,
}

impl WeightVector {
    /// Vector putting the whole weight on a single factor
    pub fn single(factor: Factor) -> Self {
        Self::default().with(factor, 1.0)
    }

    pub fn from_fn(mut weight: impl FnMut(Factor) -> f64) -> Self {
        Self {
            creativity: weight(Factor::Creativity),
            technical: weight(Factor::Technical),
            organization: weight(Factor::Organization),
            communication: weight(Factor::Communication),
            leadership: weight(Factor::Leadership),
            problem_solving: weight(Factor::ProblemSolving),
        }
    }

    #[inline]
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Creativity => self.creativity,
            Factor::Technical => self.technical,
            Factor::Organization => self.organization,
            Factor::Communication => self.communication,
            Factor::Leadership => self.leadership,
            Factor::ProblemSolving => self.problem_solving,
        }
    }

    pub fn with(mut self, factor: Factor, weight: f64) -> Self {
        match factor {
            Factor::Creativity => self.creativity = weight,
            Factor::Technical => self.technical = weight,
            Factor::Organization => self.organization = weight,
            Factor::Communication => self.communication = weight,
            Factor::Leadership => self.leadership = weight,
            Factor::ProblemSolving => self.problem_solving = weight,
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.iter().map(move |&factor| (factor, self.get(factor)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, weight)| weight).sum()
    }

    /// Scale weights so they sum to 1.0
    ///
    /// A vector whose total is zero is returned unchanged.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total == 0.0 {
            return *self;
        }
        Self::from_fn(|factor| self.get(factor) / total)
    }
}

/// Assessed person who can take on tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[validate(nested)]
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Actor {
    /// Create an actor with a fresh id, stamped as assessed now
    pub fn new(name: impl Into<String>, profile: Profile) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: None,
            profile,
            completed_at: Some(Utc::now()),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, profile: Profile) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            profile,
            completed_at: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Unit of work described by how much each factor matters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(nested)]
    pub weights: WeightVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a task with a fresh id. Weights are normalized on the way in,
    /// the way the task builder does it.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        weights: WeightVector,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            weights: weights.normalized(),
            created_at: Some(Utc::now()),
        }
    }

    /// Create a task with a caller-chosen id and weights taken as-is
    pub fn with_id(id: impl Into<String>, title: impl Into<String>, weights: WeightVector) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            weights,
            created_at: None,
        }
    }
}
