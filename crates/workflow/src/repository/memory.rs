//! In-memory collaborator implementations
//!
//! Deterministic, process-local backings for the repository traits, used by
//! tests and by embedders that already hold the entities in memory.

use std::collections::BTreeMap;

use slipway_core::{Environment, ProjectTemplate};

use crate::error::{Error, Result};
use crate::repository::{EnvironmentRepository, LicenseValidator, TemplateRepository};

/// Environments held in memory, keyed by project.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironments {
    environments: BTreeMap<String, Vec<Environment>>,
}

impl InMemoryEnvironments {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment under a project, preserving insertion order
    pub fn insert(&mut self, project: impl Into<String>, environment: Environment) {
        self.environments
            .entry(project.into())
            .or_default()
            .push(environment);
    }
}

impl EnvironmentRepository for InMemoryEnvironments {
    fn list(&self, project: &str) -> Result<Vec<Environment>> {
        Ok(self.environments.get(project).cloned().unwrap_or_default())
    }

    fn find(&self, project: &str, env_name: &str) -> Result<Option<Environment>> {
        Ok(self
            .environments
            .get(project)
            .and_then(|envs| envs.iter().find(|env| env.env_name == env_name))
            .cloned())
    }
}

/// Project templates held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    templates: BTreeMap<String, ProjectTemplate>,
}

impl InMemoryTemplates {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project template
    pub fn insert(&mut self, template: ProjectTemplate) {
        self.templates
            .insert(template.product_name.clone(), template);
    }
}

impl TemplateRepository for InMemoryTemplates {
    fn find(&self, project: &str) -> Result<Option<ProjectTemplate>> {
        Ok(self.templates.get(project).cloned())
    }
}

/// A license validator with a fixed verdict.
#[derive(Debug, Clone, Copy)]
pub struct StaticLicense {
    valid: bool,
}

impl StaticLicense {
    /// A validator that grants entitlement
    #[must_use]
    pub fn valid() -> Self {
        Self { valid: true }
    }

    /// A validator that denies entitlement
    #[must_use]
    pub fn invalid() -> Self {
        Self { valid: false }
    }
}

impl LicenseValidator for StaticLicense {
    fn check_entitlement(&self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(Error::LicenseInvalid)
        }
    }
}
