//! Job compiler dispatch
//!
//! Every job kind the engine can compile implements the same lifecycle:
//! `instantiate -> {set_preset | merge_args}* -> to_jobs`, with `lint` as an
//! independent gate. [`JobCompiler`] is the closed dispatch layer over the
//! kind tag: loading a declaration matches on [`JobType`] and binds the
//! kind-specific compiler.

pub mod helm_chart_deploy;

use slipway_core::{Job, JobTask, JobType, Workflow};

use crate::error::Result;
use crate::repository::{EnvironmentRepository, LicenseValidator, TemplateRepository};

use helm_chart_deploy::HelmChartDeployJob;

/// The collaborators a compiler queries during resolution.
///
/// Injected at construction so embedders and tests can substitute in-memory
/// implementations.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    /// Deployed environments of the owning project
    pub environments: &'a dyn EnvironmentRepository,
    /// Project templates
    pub templates: &'a dyn TemplateRepository,
    /// Entitlement checks for license-gated job types
    pub license: &'a dyn LicenseValidator,
}

/// A compiler bound to one job declaration, dispatched by its kind tag.
pub enum JobCompiler<'a> {
    /// Chart release deployment
    HelmChartDeploy(HelmChartDeployJob<'a>),
}

impl<'a> JobCompiler<'a> {
    /// Bind the kind-specific compiler for a job declaration.
    pub fn for_job(job: &'a mut Job, project: &'a str, collaborators: Collaborators<'a>) -> Self {
        match job.job_type {
            JobType::HelmChartDeploy => {
                Self::HelmChartDeploy(HelmChartDeployJob::new(job, project, collaborators))
            }
        }
    }

    /// Decode the raw authored spec into its typed declaration.
    pub fn instantiate(&mut self) -> Result<()> {
        match self {
            Self::HelmChartDeploy(job) => job.instantiate(),
        }
    }

    /// Populate editor defaults from current environment state.
    pub fn set_preset(&mut self) -> Result<()> {
        match self {
            Self::HelmChartDeploy(job) => job.set_preset(),
        }
    }

    /// Reconcile an edited declaration against the bound one.
    pub fn merge_args(&mut self, incoming: &Job) -> Result<()> {
        match self {
            Self::HelmChartDeploy(job) => job.merge_args(incoming),
        }
    }

    /// Expand the bound declaration into task descriptors.
    pub fn to_jobs(&mut self, task_run_id: u64) -> Result<Vec<JobTask>> {
        match self {
            Self::HelmChartDeploy(job) => job.to_jobs(task_run_id),
        }
    }

    /// Pre-submission entitlement and structural check.
    pub fn lint(&self) -> Result<()> {
        match self {
            Self::HelmChartDeploy(job) => job.lint(),
        }
    }
}

/// Instantiate every job declaration of a workflow in place.
pub fn instantiate_workflow(workflow: &mut Workflow, collaborators: Collaborators<'_>) -> Result<()> {
    let project = workflow.project.clone();
    for stage in &mut workflow.stages {
        for job in &mut stage.jobs {
            JobCompiler::for_job(job, &project, collaborators).instantiate()?;
        }
    }
    Ok(())
}

/// Lint every job declaration of a workflow, failing on the first violation.
pub fn lint_workflow(workflow: &mut Workflow, collaborators: Collaborators<'_>) -> Result<()> {
    let project = workflow.project.clone();
    for stage in &mut workflow.stages {
        for job in &mut stage.jobs {
            JobCompiler::for_job(job, &project, collaborators).lint()?;
        }
    }
    Ok(())
}
