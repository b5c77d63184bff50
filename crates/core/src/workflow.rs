//! Workflow template types
//!
//! A workflow template is the authored, persisted unit: an ordered list of
//! stages, each holding the job declarations for its steps. Job specs are
//! stored untyped and decoded by the compiler for the job's kind.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind tag on a job declaration.
///
/// A closed set: every job kind the engine can compile has a variant here,
/// and dispatch happens by matching on the tag when a declaration is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    /// Deploy one or more chart releases into a target environment
    HelmChartDeploy,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HelmChartDeploy => write!(f, "helm-chart-deploy"),
        }
    }
}

/// One workflow step: a named, typed job declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    /// Step name, unique within the workflow
    pub name: String,
    /// Kind tag selecting the compiler for this declaration
    pub job_type: JobType,
    /// The kind-specific spec, stored untyped and decoded per operation
    #[serde(default)]
    pub spec: Value,
}

/// An ordered group of jobs within a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Stage {
    /// Stage name
    pub name: String,
    /// Jobs in execution order
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// A workflow template: the authored unit one compilation run operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Workflow {
    /// Workflow name
    pub name: String,
    /// The owning project
    pub project: String,
    /// Stages in execution order
    #[serde(default)]
    pub stages: Vec<Stage>,
}
