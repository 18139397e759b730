//! Network scoping value objects.
//!
//! A user's profile carries up to three tenant identifiers. Exactly one of
//! them scopes every read and write, chosen by a fixed precedence:
//! `rede`, then `empresa`, then `sub_rede`.

use serde::{Deserialize, Serialize};

/// Read-only view over the network fields of an authenticated user's profile.
///
/// Built once per request from the profile row and passed explicitly to
/// whatever needs to scope data. Never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNetworkContext {
    /// Used for diagnostics only, never for resolution.
    pub email: Option<String>,

    /// Primary network identifier.
    pub rede: Option<String>,

    /// Company identifier, historically interchangeable with `rede`.
    pub empresa: Option<String>,

    /// Sub-network, last resort.
    pub sub_rede: Option<String>,
}

impl UserNetworkContext {
    /// Context carrying only an email and no network fields.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Raw value of the given field, with the empty string treated as absent.
    pub fn field(&self, source: NetworkSource) -> Option<&str> {
        let value = match source {
            NetworkSource::Rede => &self.rede,
            NetworkSource::Empresa => &self.empresa,
            NetworkSource::SubRede => &self.sub_rede,
        };

        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Which profile field a resolved network came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkSource {
    Rede,
    Empresa,
    SubRede,
}

impl NetworkSource {
    /// Resolution precedence, highest first.
    pub const PRECEDENCE: [NetworkSource; 3] =
        [NetworkSource::Rede, NetworkSource::Empresa, NetworkSource::SubRede];

    /// Column / field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rede => "rede",
            Self::Empresa => "empresa",
            Self::SubRede => "sub_rede",
        }
    }
}

impl std::fmt::Display for NetworkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presence flags for all three network fields, independent of precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAvailability {
    pub rede: bool,
    pub empresa: bool,
    pub sub_rede: bool,
}

impl NetworkAvailability {
    /// True when at least one field is present.
    pub fn any(&self) -> bool {
        self.rede || self.empresa || self.sub_rede
    }
}

/// Derived report of how a context resolves. Observability only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResolutionDiagnostics {
    pub resolved_network: Option<String>,
    pub source: Option<NetworkSource>,
    pub available: NetworkAvailability,
}
