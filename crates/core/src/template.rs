//! Project template entity
//!
//! The project template describes the owning project: how its services are
//! deployed and the default timeout applied to deploy tasks.

use serde::{Deserialize, Serialize};

/// How a project's services are deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeployType {
    /// Chart-based releases managed by the chart deploy pipeline
    HelmChart,
    /// Raw manifest deployment
    K8s,
    /// Host-based deployment
    Host,
}

impl std::fmt::Display for DeployType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HelmChart => write!(f, "helm-chart"),
            Self::K8s => write!(f, "k8s"),
            Self::Host => write!(f, "host"),
        }
    }
}

/// Template describing one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTemplate {
    /// Project name
    pub product_name: String,
    /// Deploy task timeout, in minutes
    pub timeout_minutes: u64,
    /// How this project's services are deployed
    pub deploy_type: DeployType,
}
