//! Runtime environment entities
//!
//! An [`Environment`] is the queried snapshot of one deployed environment of
//! a project: the chart services currently installed and the render charts
//! (effective chart configuration per release) backing them. The compiler
//! reads these to populate deploy defaults; it never writes them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The effective chart configuration for one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderChart {
    /// Release this configuration applies to
    pub release_name: String,
    /// Chart repository
    pub chart_repo: String,
    /// Chart name
    pub chart_name: String,
    /// Chart version
    pub chart_version: String,
    /// Override values content, if any overrides are set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_yaml: Option<String>,
}

impl RenderChart {
    /// The effective override values content, empty when none is set.
    #[must_use]
    pub fn override_yaml(&self) -> &str {
        self.override_yaml.as_deref().unwrap_or_default()
    }
}

/// A chart-backed service installed in an environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartService {
    /// Service name within the project
    pub service_name: String,
    /// Release name the service is installed under
    pub release_name: String,
}

/// One deployed environment of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment name, unique within the project
    pub env_name: String,
    /// Cluster the environment runs on
    pub cluster_id: String,
    /// Chart services currently installed
    #[serde(default)]
    pub chart_services: Vec<ChartService>,
    /// Render charts keyed by release, as currently effective
    #[serde(default)]
    pub render_charts: Vec<RenderChart>,
}

impl Environment {
    /// Index the environment's render charts by release name.
    #[must_use]
    pub fn render_chart_map(&self) -> BTreeMap<&str, &RenderChart> {
        self.render_charts
            .iter()
            .map(|chart| (chart.release_name.as_str(), chart))
            .collect()
    }

    /// Index the environment's chart services by release name.
    #[must_use]
    pub fn chart_service_map(&self) -> BTreeMap<&str, &ChartService> {
        self.chart_services
            .iter()
            .map(|svc| (svc.release_name.as_str(), svc))
            .collect()
    }
}
