//! Job-definition compiler for the slipway workflow engine
//!
//! This crate turns the job declarations stored in a workflow template into
//! concrete task descriptors for the execution engine. For each job kind a
//! compiler implements the lifecycle
//! `instantiate -> {set_preset | merge_args}* -> to_jobs`, with `lint` as an
//! independent pre-submission gate:
//!
//! - `instantiate` decodes the raw authored spec into its typed declaration
//! - `set_preset` populates editor defaults from current environment state
//! - `merge_args` reconciles an edited declaration against the stored one
//! - `to_jobs` resolves the declaration and fans it out into one task
//!   descriptor per chart release
//! - `lint` checks entitlement and structural decodability only
//!
//! Collaborators (environment and template repositories, license validation)
//! are injected as traits, so embedders and tests can supply in-memory
//! implementations from [`repository::memory`].

pub mod error;
pub mod job;
pub mod repository;

pub use error::{Error, Result};
pub use job::helm_chart_deploy::HelmChartDeployJob;
pub use job::{Collaborators, JobCompiler, instantiate_workflow, lint_workflow};
pub use repository::{EnvironmentRepository, LicenseValidator, TemplateRepository};
