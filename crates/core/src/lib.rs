//! Core domain types for the slipway workflow engine
//!
//! This crate contains the entities shared between the workflow compiler and
//! its embedders:
//! - Workflow declarations: the authored workflow template, its stages and
//!   per-step job declarations
//! - Runtime entities queried during compilation: environments, render
//!   charts, project templates
//! - Task descriptors: the resolved, per-release units handed to the task
//!   execution engine
//! - The spec codec used to move job specs between their untyped stored form
//!   and their typed declarations

pub mod codec;
pub mod declaration;
pub mod environment;
pub mod error;
pub mod task;
pub mod template;
pub mod workflow;

pub use codec::{decode_spec, decode_yaml_spec, encode_spec};
pub use declaration::{DeployHelmChart, FIXED_VALUE_MARK, HelmChartDeployJobSpec};
pub use environment::{ChartService, Environment, RenderChart};
pub use error::{DecodeError, Result};
pub use task::{HelmChartDeployTaskSpec, JOB_NAME_KEY, JobTask, JobTaskSpec, RELEASE_NAME_KEY};
pub use template::{DeployType, ProjectTemplate};
pub use workflow::{Job, JobType, Stage, Workflow};
