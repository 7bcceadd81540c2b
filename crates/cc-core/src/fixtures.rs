//! Fixture data rendered by the dashboard.
//!
//! [`DashboardData`] is built once at startup (either the built-in demo set
//! or a TOML file) and handed to the UI by value. Nothing mutates it after
//! that.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::{
    Agent, AgentState, InfraComponent, InfraIcon, McpServer, Project, ProjectState, ServerIcon,
    ServerState, SystemMetrics,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub mcp_servers: Vec<McpServer>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub infrastructure: Vec<InfraComponent>,
    pub metrics: SystemMetrics,
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

impl DashboardData {
    /// Load fixtures from a TOML file with the same shape as [`DashboardData`].
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let path = path.into();
        let text =
            std::fs::read_to_string(&path).map_err(|e| FixtureError::Io(e.to_string()))?;
        let data: DashboardData =
            toml::from_str(&text).map_err(|e| FixtureError::Parse(e.to_string()))?;
        data.validate()?;
        tracing::debug!(
            path = %path.display(),
            agents = data.agents.len(),
            servers = data.mcp_servers.len(),
            projects = data.projects.len(),
            "fixtures loaded"
        );
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.health > 100 {
                return Err(FixtureError::Validation(format!(
                    "project '{}' health {} exceeds 100",
                    project.id, project.health
                )));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(FixtureError::Validation(format!(
                    "duplicate project id '{}'",
                    project.id
                )));
            }
        }
        if self.metrics.cpu_percent > 100 {
            return Err(FixtureError::Validation(format!(
                "metrics.cpu_percent {} exceeds 100",
                self.metrics.cpu_percent
            )));
        }
        Ok(())
    }

    /// Number of MCP servers currently reachable (connected or active).
    pub fn live_server_count(&self) -> usize {
        self.mcp_servers
            .iter()
            .filter(|s| s.status != ServerState::Disconnected)
            .count()
    }

    /// The built-in sample data set.
    pub fn demo() -> Self {
        Self {
            agents: demo_agents(),
            mcp_servers: demo_mcp(),
            projects: demo_projects(),
            infrastructure: demo_infrastructure(),
            metrics: demo_metrics(),
        }
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::demo()
    }
}

// ---------------------------------------------------------------------------
// Demo data factories
// ---------------------------------------------------------------------------

fn agent(name: &str, emoji: &str, queue_count: u32) -> Agent {
    Agent {
        name: name.into(),
        emoji: emoji.into(),
        status: AgentState::Idle,
        last_run: "2m ago".into(),
        queue_count,
    }
}

fn demo_agents() -> Vec<Agent> {
    vec![
        agent("Forager", "🤖", 12),
        agent("Forge", "🔨", 12),
        agent("Crucible", "🔥", 12),
        agent("Warden", "🛡️", 20),
    ]
}

fn server(name: &str, status: ServerState, icon: ServerIcon, details: Option<&str>) -> McpServer {
    McpServer {
        name: name.into(),
        status,
        icon,
        details: details.map(Into::into),
    }
}

fn demo_mcp() -> Vec<McpServer> {
    vec![
        server(
            "GitHub",
            ServerState::Connected,
            ServerIcon::Branch,
            Some("fredericklaw"),
        ),
        server(
            "Google",
            ServerState::Connected,
            ServerIcon::Globe,
            Some("Gmail/Calendar"),
        ),
        server("Filesystem", ServerState::Active, ServerIcon::Database, None),
        server("Fetch", ServerState::Active, ServerIcon::Zap, None),
        server("Git", ServerState::Active, ServerIcon::Branch, None),
        server("SQLite", ServerState::Active, ServerIcon::Database, None),
    ]
}

fn project(id: &str, name: &str, status: ProjectState, metric: &str, value: &str) -> Project {
    Project {
        id: id.into(),
        name: name.into(),
        status,
        health: 100,
        metric: metric.into(),
        value: value.into(),
    }
}

fn demo_projects() -> Vec<Project> {
    vec![
        project("1", "RSI System", ProjectState::Active, "Proposals", "12"),
        project("2", "PT Booking Bot", ProjectState::Active, "Status", "Ready"),
        project("3", "Browser-Use", ProjectState::Complete, "Version", "0.11.13"),
        project("4", "MCP Suite", ProjectState::Complete, "Servers", "6"),
    ]
}

fn infra(name: &str, icon: InfraIcon, status: &str) -> InfraComponent {
    InfraComponent {
        name: name.into(),
        icon,
        status: status.into(),
    }
}

fn demo_infrastructure() -> Vec<InfraComponent> {
    vec![
        infra("PHNX Core", InfraIcon::Cpu, "active"),
        infra("RSI System", InfraIcon::Shield, "active"),
        infra("Vector Memory", InfraIcon::Database, "active"),
        infra("MCP Client (6)", InfraIcon::Globe, "connected"),
    ]
}

fn demo_metrics() -> SystemMetrics {
    SystemMetrics {
        cpu_percent: 23,
        memory_gb: 1.2,
        uptime: "4h 32m".into(),
        active_tasks: 3,
        queue_depth: 12,
    }
}
