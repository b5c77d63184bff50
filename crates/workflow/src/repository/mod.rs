//! Collaborator contracts consumed during job compilation
//!
//! Compilation re-queries its collaborators on every call: there is no
//! caching layer here, and no retries. All calls are synchronous blocking
//! reads; a transient backend failure surfaces immediately as
//! [`Error::Repository`](crate::Error::Repository).

pub mod memory;

use slipway_core::{Environment, ProjectTemplate};

use crate::error::Result;

/// Read access to the deployed environments of a project.
pub trait EnvironmentRepository {
    /// List all environments of a project, in repository order.
    ///
    /// Callers must not assume any particular order; it is passed through to
    /// `env_options` as returned.
    fn list(&self, project: &str) -> Result<Vec<Environment>>;

    /// Find one environment of a project by name.
    fn find(&self, project: &str, env_name: &str) -> Result<Option<Environment>>;
}

/// Read access to project templates.
pub trait TemplateRepository {
    /// Find the template describing a project.
    fn find(&self, project: &str) -> Result<Option<ProjectTemplate>>;
}

/// Entitlement check for license-gated job types.
pub trait LicenseValidator {
    /// Verify the tenant holds the required license tier.
    fn check_entitlement(&self) -> Result<()>;
}
