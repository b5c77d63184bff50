//! Compiler for `helm-chart-deploy` jobs
//!
//! Turns one chart deploy declaration into per-release task descriptors.
//! Environment state informs editor defaults only: at run time the fan-out
//! count and order come solely from the declaration's stored chart list.

use std::collections::BTreeMap;

use slipway_core::{
    DeployHelmChart, DeployType, FIXED_VALUE_MARK, HelmChartDeployJobSpec,
    HelmChartDeployTaskSpec, JOB_NAME_KEY, Job, JobTask, JobTaskSpec, JobType, RELEASE_NAME_KEY,
    decode_spec, decode_yaml_spec, encode_spec,
};

use crate::error::{Error, Result};
use crate::job::Collaborators;

/// Compiler bound to one `helm-chart-deploy` job declaration.
///
/// Request-scoped: one instance serves one lifecycle call against one job of
/// one workflow. Collaborators are re-queried on every call.
pub struct HelmChartDeployJob<'a> {
    job: &'a mut Job,
    project: &'a str,
    collaborators: Collaborators<'a>,
}

impl<'a> HelmChartDeployJob<'a> {
    /// Bind a compiler to a job declaration and its owning project.
    pub fn new(job: &'a mut Job, project: &'a str, collaborators: Collaborators<'a>) -> Self {
        Self {
            job,
            project,
            collaborators,
        }
    }

    /// Decode the raw authored spec into its typed declaration and store the
    /// normalized form back into the job's spec slot.
    pub fn instantiate(&mut self) -> Result<()> {
        let spec: HelmChartDeployJobSpec = decode_yaml_spec(&self.job.spec)?;
        self.job.spec = encode_spec(&spec)?;
        Ok(())
    }

    /// Populate editor defaults from current environment state.
    ///
    /// Overwrites `env_options` and `deploy_helm_charts` unconditionally;
    /// this is a defaults-repopulation step and discards any manual edits to
    /// those fields. Nothing is written back if any resolution step fails.
    pub fn set_preset(&mut self) -> Result<()> {
        let mut spec: HelmChartDeployJobSpec = decode_spec(&self.job.spec)?;

        if let Some(fixed) = spec.env.strip_prefix(FIXED_VALUE_MARK) {
            // Locked to one value; the user cannot pick another environment.
            spec.env_options = vec![fixed.to_string()];
        } else {
            let environments = self.collaborators.environments.list(self.project)?;
            spec.env_options = environments.into_iter().map(|env| env.env_name).collect();
        }

        let environment = self
            .collaborators
            .environments
            .find(self.project, &spec.env)?
            .ok_or_else(|| Error::EnvNotFound {
                env: spec.env.clone(),
            })?;

        let render_charts = environment.render_chart_map();
        let mut deploys = Vec::new();
        for (release, _service) in environment.chart_service_map() {
            let render_chart =
                render_charts
                    .get(release)
                    .ok_or_else(|| Error::RenderChartNotFound {
                        release: release.to_string(),
                    })?;
            deploys.push(DeployHelmChart {
                release_name: render_chart.release_name.clone(),
                chart_repo: render_chart.chart_repo.clone(),
                chart_name: render_chart.chart_name.clone(),
                chart_version: render_chart.chart_version.clone(),
                values_yaml: render_chart.override_yaml().to_string(),
            });
        }
        spec.deploy_helm_charts = deploys;

        self.job.spec = encode_spec(&spec)?;
        Ok(())
    }

    /// Reconcile an edited declaration against the bound one.
    ///
    /// Only applies when `incoming` refers to the same job by name and kind;
    /// otherwise this is a silent no-op. Only `env` and `deploy_helm_charts`
    /// are carried over, every other field stays as stored.
    pub fn merge_args(&mut self, incoming: &Job) -> Result<()> {
        if self.job.name != incoming.name || self.job.job_type != incoming.job_type {
            return Ok(());
        }

        let mut spec: HelmChartDeployJobSpec = decode_spec(&self.job.spec)?;
        let incoming_spec: HelmChartDeployJobSpec = decode_spec(&incoming.spec)?;
        spec.env = incoming_spec.env;
        spec.deploy_helm_charts = incoming_spec.deploy_helm_charts;

        self.job.spec = encode_spec(&spec)?;
        Ok(())
    }

    /// Resolve the declaration and fan it out into one task descriptor per
    /// chart release, in the declaration's stored order.
    ///
    /// All-or-nothing: any resolution failure yields no tasks. An empty chart
    /// list is legal and yields an empty sequence.
    pub fn to_jobs(&mut self, task_run_id: u64) -> Result<Vec<JobTask>> {
        let spec: HelmChartDeployJobSpec = decode_spec(&self.job.spec)?;
        self.job.spec = encode_spec(&spec)?;

        let env_name = spec.env.clone();
        let environment = self
            .collaborators
            .environments
            .find(self.project, &env_name)?
            .ok_or_else(|| Error::EnvNotFound {
                env: env_name.clone(),
            })?;

        let template = self
            .collaborators
            .templates
            .find(self.project)?
            .ok_or_else(|| Error::ProjectNotFound {
                project: self.project.to_string(),
            })?;
        let timeout_seconds = template.timeout_minutes * 60;

        if template.deploy_type != DeployType::HelmChart {
            return Err(Error::WrongDeployType {
                project: self.project.to_string(),
                deploy_type: template.deploy_type,
            });
        }

        tracing::debug!(
            task_run_id,
            job = %self.job.name,
            env = %env_name,
            releases = spec.deploy_helm_charts.len(),
            "expanding helm chart deploy job"
        );

        let mut tasks = Vec::with_capacity(spec.deploy_helm_charts.len());
        for deploy in &spec.deploy_helm_charts {
            let mut job_info = BTreeMap::new();
            job_info.insert(JOB_NAME_KEY.to_string(), self.job.name.clone());
            job_info.insert(RELEASE_NAME_KEY.to_string(), deploy.release_name.clone());

            tasks.push(JobTask {
                name: self.job.name.clone(),
                key: format!("{}.{}", self.job.name, deploy.release_name),
                job_info,
                job_type: JobType::HelmChartDeploy,
                spec: JobTaskSpec::HelmChartDeploy(HelmChartDeployTaskSpec {
                    env: env_name.clone(),
                    deploy_helm_chart: deploy.clone(),
                    skip_check_run_status: spec.skip_check_run_status,
                    cluster_id: environment.cluster_id.clone(),
                    timeout_seconds,
                }),
            });
        }
        Ok(tasks)
    }

    /// Pre-submission gate: entitlement first, then structural decode.
    ///
    /// The license check runs before decode so unlicensed tenants get a
    /// uniform error regardless of payload shape. No environment or project
    /// lookups happen here.
    pub fn lint(&self) -> Result<()> {
        self.collaborators.license.check_entitlement()?;
        let _: HelmChartDeployJobSpec = decode_yaml_spec(&self.job.spec)?;
        Ok(())
    }
}
