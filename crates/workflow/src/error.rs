//! Error types for the job compiler
//!
//! Every lifecycle operation fails fast on the first error it encounters;
//! resolution errors always carry the offending identifier so operators can
//! diagnose which environment, release, or project was missing.

use miette::Diagnostic;
use slipway_core::{DecodeError, DeployType};
use thiserror::Error;

/// Main error type for job compilation
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The stored spec does not match its declared job shape
    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    /// The declared environment does not exist for the project
    #[error("env {env} not exists")]
    #[diagnostic(code(slipway::workflow::env_not_found))]
    EnvNotFound {
        /// The environment name that failed to resolve
        env: String,
    },

    /// A chart service has no render chart backing it
    #[error("render chart {release} not found")]
    #[diagnostic(code(slipway::workflow::render_chart_not_found))]
    RenderChartNotFound {
        /// The release missing its render chart
        release: String,
    },

    /// The owning project has no template
    #[error("cannot find project template {project}")]
    #[diagnostic(code(slipway::workflow::project_not_found))]
    ProjectNotFound {
        /// The project that failed to resolve
        project: String,
    },

    /// The owning project is not chart-deployed
    #[error("project {project} deploy type is {deploy_type}, not helm-chart")]
    #[diagnostic(code(slipway::workflow::wrong_deploy_type))]
    WrongDeployType {
        /// The offending project
        project: String,
        /// Its actual deploy type
        deploy_type: DeployType,
    },

    /// The tenant does not hold the license tier this job type requires
    #[error("a professional license is required for this job type")]
    #[diagnostic(code(slipway::workflow::license_invalid))]
    LicenseInvalid,

    /// A collaborator query failed at the transport layer
    #[error("repository error during {operation}: {message}")]
    #[diagnostic(code(slipway::workflow::repository))]
    Repository {
        /// The query that failed
        operation: String,
        /// The backend's message
        message: String,
    },
}

impl Error {
    /// Create a repository error with operation context
    pub fn repository(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Repository {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Result type for job compilation
pub type Result<T> = std::result::Result<T, Error>;
