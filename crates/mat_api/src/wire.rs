//! JSON DTOs for embedders that want structured results.
//!
//! These are transport models, deliberately independent from the engine
//! types: every numeric payload is pre-rendered to its exact string form, so
//! consumers never need a big-rational implementation to read a reply.

use mat_linalg::{ExpansionHistory, OperationHistory, SolutionSet, SystemSolution, Vector};
use mat_num::rational;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Version of the JSON shapes below. Bump on breaking changes.
pub const SCHEMA_VERSION: u32 = 1;

/// One narrated step of an algorithm: what was done and the state after.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StepJson {
    pub index: usize,
    pub description: String,
    pub state: String,
}

/// A computed result plus the steps that produced it (empty when the caller
/// used a silent variant).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultJson {
    pub schema_version: u32,
    pub result: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepJson>,
}

impl ResultJson {
    pub fn new(result: impl Into<String>) -> Self {
        ResultJson {
            schema_version: SCHEMA_VERSION,
            result: result.into(),
            steps: Vec::new(),
        }
    }

    /// Attach the row operations of an elimination run.
    pub fn with_operation_steps(result: impl Into<String>, history: &OperationHistory) -> Self {
        let steps = history
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| StepJson {
                index: i + 1,
                description: step.description.clone(),
                state: step.state_after.to_string(),
            })
            .collect();
        ResultJson {
            schema_version: SCHEMA_VERSION,
            result: result.into(),
            steps,
        }
    }

    /// Attach the terms of a cofactor expansion; the state of each step is
    /// the minor it expanded.
    pub fn with_expansion_steps(result: impl Into<String>, history: &ExpansionHistory) -> Self {
        let steps = history
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| StepJson {
                index: i + 1,
                description: step.description.clone(),
                state: step.minor.to_string(),
            })
            .collect();
        ResultJson {
            schema_version: SCHEMA_VERSION,
            result: result.into(),
            steps,
        }
    }

    pub fn to_json(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Classification tag of a linear-system solution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolutionKindJson {
    Unique,
    Infinite,
    None,
    Undetermined,
}

/// A linear-system solution with its rank analysis. Vector payloads are
/// present only for the kinds that carry them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SystemSolutionJson {
    pub schema_version: u32,
    pub kind: SolutionKindJson,
    pub coefficient_rank: usize,
    pub augmented_rank: usize,
    pub variables: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub basis: Vec<Vec<String>>,
}

fn render_components(vector: &Vector) -> Vec<String> {
    vector.components().iter().map(rational::format).collect()
}

impl From<&SystemSolution> for SystemSolutionJson {
    fn from(solution: &SystemSolution) -> Self {
        let analysis = solution.analysis;
        let (kind, rendered, basis) = match &solution.set {
            SolutionSet::Unique(vector) => (
                SolutionKindJson::Unique,
                Some(render_components(vector)),
                Vec::new(),
            ),
            SolutionSet::Infinite { particular, basis } => (
                SolutionKindJson::Infinite,
                Some(render_components(particular)),
                basis.iter().map(render_components).collect(),
            ),
            SolutionSet::Inconsistent => (SolutionKindJson::None, None, Vec::new()),
            SolutionSet::Undetermined => (SolutionKindJson::Undetermined, None, Vec::new()),
        };
        SystemSolutionJson {
            schema_version: SCHEMA_VERSION,
            kind,
            coefficient_rank: analysis.coefficient_rank,
            augmented_rank: analysis.augmented_rank,
            variables: analysis.variables,
            solution: rendered,
            basis,
        }
    }
}

impl SystemSolutionJson {
    pub fn to_json(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mat_linalg::{Matrix, RankAnalysis, Vector};
    use mat_num::rational::from_int;

    #[test]
    fn result_without_steps_omits_the_field() {
        let json = ResultJson::new("-2").to_json().unwrap();
        assert_eq!(json, r#"{"schema_version":1,"result":"-2"}"#);
    }

    #[test]
    fn operation_steps_carry_description_and_state() {
        let matrix = Matrix::new(
            2,
            2,
            vec![from_int(1), from_int(2), from_int(3), from_int(4)],
        )
        .unwrap();
        let (reduced, history) = mat_linalg::row_echelon_form_recorded(&matrix);
        let reply = ResultJson::with_operation_steps("done", &history);
        assert_eq!(reply.steps.len(), 1);
        assert_eq!(reply.steps[0].index, 1);
        assert_eq!(reply.steps[0].description, "add -3 * R1 to R2");
        assert_eq!(reply.steps[0].state, reduced.to_string());
    }

    #[test]
    fn expansion_steps_use_the_minor_as_state() {
        let matrix = Matrix::new(
            2,
            2,
            vec![from_int(1), from_int(2), from_int(3), from_int(4)],
        )
        .unwrap();
        let (det, history) = mat_linalg::determinant_by_expansion_recorded(&matrix).unwrap();
        let reply = ResultJson::with_expansion_steps(rational::format(&det), &history);
        assert_eq!(reply.result, "-2");
        assert_eq!(reply.steps.len(), 2);
        assert_eq!(reply.steps[0].state, "[4]");
    }

    #[test]
    fn unique_solution_serializes_with_snake_case_kind() {
        let solution = SystemSolution {
            set: SolutionSet::Unique(Vector::new(vec![from_int(1), from_int(-2)]).unwrap()),
            analysis: RankAnalysis {
                coefficient_rank: 2,
                augmented_rank: 2,
                variables: 2,
            },
        };
        let json = SystemSolutionJson::from(&solution).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"schema_version":1,"kind":"unique","coefficient_rank":2,"augmented_rank":2,"variables":2,"solution":["1","-2"]}"#
        );
    }

    #[test]
    fn inconsistent_solution_omits_vector_payloads() {
        let solution = SystemSolution {
            set: SolutionSet::Inconsistent,
            analysis: RankAnalysis {
                coefficient_rank: 1,
                augmented_rank: 2,
                variables: 2,
            },
        };
        let json = SystemSolutionJson::from(&solution).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"schema_version":1,"kind":"none","coefficient_rank":1,"augmented_rank":2,"variables":2}"#
        );
    }

    #[test]
    fn json_round_trips_through_serde() {
        let solution = SystemSolution {
            set: SolutionSet::Infinite {
                particular: Vector::new(vec![from_int(1), from_int(0)]).unwrap(),
                basis: vec![Vector::new(vec![from_int(-2), from_int(1)]).unwrap()],
            },
            analysis: RankAnalysis {
                coefficient_rank: 1,
                augmented_rank: 1,
                variables: 2,
            },
        };
        let dto = SystemSolutionJson::from(&solution);
        let parsed: SystemSolutionJson =
            serde_json::from_str(&dto.to_json().unwrap()).unwrap();
        assert_eq!(parsed, dto);
    }
}
