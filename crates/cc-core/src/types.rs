//! Dashboard records and the typed states and icons they carry.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AgentState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    Active,
    Idle,
    Error,
}

impl AgentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentState::Active => "active",
            AgentState::Idle => "idle",
            AgentState::Error => "error",
        }
    }
}

// ---------------------------------------------------------------------------
// ServerState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerState {
    Connected,
    Active,
    Disconnected,
}

impl ServerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerState::Connected => "connected",
            ServerState::Active => "active",
            ServerState::Disconnected => "disconnected",
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    Active,
    Complete,
}

impl ProjectState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectState::Active => "active",
            ProjectState::Complete => "complete",
        }
    }
}

// ---------------------------------------------------------------------------
// Icons (opaque visual tokens)
// ---------------------------------------------------------------------------

/// Icon shown on an MCP server tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerIcon {
    Branch,
    Globe,
    Database,
    Zap,
}

impl ServerIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ServerIcon::Branch => "⎇",
            ServerIcon::Globe => "◍",
            ServerIcon::Database => "▤",
            ServerIcon::Zap => "ϟ",
        }
    }
}

/// Icon shown next to an infrastructure component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfraIcon {
    Cpu,
    Shield,
    Database,
    Globe,
}

impl InfraIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            InfraIcon::Cpu => "▣",
            InfraIcon::Shield => "⛨",
            InfraIcon::Database => "▤",
            InfraIcon::Globe => "◍",
        }
    }
}

// ---------------------------------------------------------------------------
// Fixture records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub emoji: String,
    pub status: AgentState,
    pub last_run: String,
    pub queue_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServer {
    pub name: String,
    pub status: ServerState,
    pub icon: ServerIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectState,
    /// Percentage in `0..=100`.
    pub health: u8,
    pub metric: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfraComponent {
    pub name: String,
    pub icon: InfraIcon,
    /// Free-form status label; rendered through the status palette.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub cpu_percent: u8,
    pub memory_gb: f32,
    pub uptime: String,
    pub active_tasks: u32,
    pub queue_depth: u32,
}
