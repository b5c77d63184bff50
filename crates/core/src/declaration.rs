//! Helm chart deploy job declaration
//!
//! The typed shape of a `helm-chart-deploy` job spec: the target environment,
//! the environment choices offered in the editor, and the chart releases to
//! deploy. `env_options` and `deploy_helm_charts` are computed by the
//! compiler's preset step, not authored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentinel prefix on `env` locking the field to a single value.
///
/// An env of `fixed-staging` means the user cannot pick another environment;
/// the preset step strips the mark when building `env_options`.
pub const FIXED_VALUE_MARK: &str = "fixed-";

/// One release-level deploy unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeployHelmChart {
    /// Release name, unique within an environment's chart service set
    pub release_name: String,
    /// Chart repository holding the artifact
    pub chart_repo: String,
    /// Chart name within the repository
    pub chart_name: String,
    /// Chart version to deploy
    pub chart_version: String,
    /// Override values content effective for this release
    #[serde(default)]
    pub values_yaml: String,
}

/// Declaration for a `helm-chart-deploy` job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct HelmChartDeployJobSpec {
    /// Target environment name, optionally carrying [`FIXED_VALUE_MARK`]
    #[serde(default)]
    pub env: String,
    /// Environment choices presented in the editor; computed, not authored
    #[serde(default)]
    pub env_options: Vec<String>,
    /// Releases to deploy, in fan-out order
    #[serde(default)]
    pub deploy_helm_charts: Vec<DeployHelmChart>,
    /// Skip post-deploy status verification (consumed by the executor)
    #[serde(default)]
    pub skip_check_run_status: bool,
}
