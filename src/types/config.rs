//! Mutation policy configuration.

use serde::{Deserialize, Serialize};

/// How insertions react to nodes and edges that are already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationPolicy {
    /// Duplicates are errors; edge insertion requires both endpoints.
    #[default]
    Strict,
    /// Duplicates are silent no-ops; edge insertion creates missing endpoints.
    Idempotent,
}

impl MutationPolicy {
    /// Return a human-readable name for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Idempotent => "idempotent",
        }
    }

    /// Parse a policy from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "idempotent" => Some(Self::Idempotent),
            _ => None,
        }
    }
}

impl std::fmt::Display for MutationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-instance graph configuration.
///
/// A deployment picks one profile and keeps it for the lifetime of the
/// graph; the policy cannot be changed on an existing instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Duplicate handling for `add_node` / `add_edge` / `assign_edge`.
    pub policy: MutationPolicy,
}

impl GraphConfig {
    /// Strict profile (the default).
    pub fn strict() -> Self {
        Self {
            policy: MutationPolicy::Strict,
        }
    }

    /// Idempotent profile.
    pub fn idempotent() -> Self {
        Self {
            policy: MutationPolicy::Idempotent,
        }
    }

    /// Load a configuration from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
