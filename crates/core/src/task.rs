//! Task descriptors
//!
//! A [`JobTask`] is the compiler's output unit: one resolved, per-release
//! deploy task handed to the execution engine. Descriptors produced from the
//! same job share its name; the key combines job and release name to keep
//! them distinguishable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::declaration::DeployHelmChart;
use crate::workflow::JobType;

/// `job_info` key holding the originating job name
pub const JOB_NAME_KEY: &str = "job_name";
/// `job_info` key holding the release a descriptor deploys
pub const RELEASE_NAME_KEY: &str = "release_name";

/// Kind-specific payload of a task descriptor.
///
/// Closed over the same set of kinds as [`JobType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobTaskSpec {
    /// Payload for a chart release deploy task
    HelmChartDeploy(HelmChartDeployTaskSpec),
}

/// Resolved inputs for deploying one chart release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelmChartDeployTaskSpec {
    /// Target environment name
    pub env: String,
    /// The release to deploy
    pub deploy_helm_chart: DeployHelmChart,
    /// Skip post-deploy status verification
    pub skip_check_run_status: bool,
    /// Cluster the target environment runs on
    pub cluster_id: String,
    /// Execution timeout handed to the task engine, in seconds
    pub timeout_seconds: u64,
}

/// One resolved task descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTask {
    /// Name of the originating job
    pub name: String,
    /// Composite identity: `<job name>.<release name>`
    pub key: String,
    /// Labels identifying the descriptor's origin
    pub job_info: BTreeMap<String, String>,
    /// Kind tag of the originating job
    pub job_type: JobType,
    /// Kind-specific resolved payload
    pub spec: JobTaskSpec,
}
