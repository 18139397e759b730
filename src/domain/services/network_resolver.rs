//! Network resolution domain service.
//!
//! Every read or write made on behalf of a dashboard user is scoped to a
//! single network. The network comes from the user's profile, taking the
//! first non-empty value among `rede`, `empresa` and `sub_rede`. Fields are
//! never merged, and the empty string counts as absent.
//!
//! Nothing here holds state. Resolution and diagnostics are synchronous.
//! Validation awaits once, on the injected [`StoreLookup`]. None of these
//! functions returns an error: failures come back as `None` / `false` plus
//! a `tracing` event.

use tracing::{debug, warn};

use crate::domain::entities::StoreLookup;
use crate::domain::value_objects::{
    NetworkAvailability, NetworkResolutionDiagnostics, NetworkSource, UserNetworkContext,
};

/// Reported when the profile has none of the three network fields.
pub const MSG_NO_NETWORK_FIELDS: &str =
    "Usuário não possui nenhum campo de rede definido (rede, empresa, sub_rede)";

/// Reported when some network field is present but no network was resolved.
pub const MSG_UNRESOLVABLE_NETWORK: &str =
    "Não foi possível determinar a rede do usuário. Verifique suas permissões.";

/// Why a context failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// No network field is present at all.
    NoNetworkFields,
    /// At least one field is present, yet resolution produced nothing.
    Unresolvable,
}

impl ResolutionFailure {
    /// User-facing message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoNetworkFields => MSG_NO_NETWORK_FIELDS,
            Self::Unresolvable => MSG_UNRESOLVABLE_NETWORK,
        }
    }
}

impl std::fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Domain service deciding which network scopes a user's requests.
pub struct NetworkResolver;

impl NetworkResolver {
    /// Pick the network that scopes this user.
    ///
    /// Returns the first non-empty of `rede`, `empresa`, `sub_rede`, or
    /// `None` when the context is missing or all three are absent/empty.
    pub fn resolve_user_network(context: Option<&UserNetworkContext>) -> Option<String> {
        let email = context.and_then(|ctx| ctx.email.as_deref());

        match Self::resolve_with_source(context) {
            Some((network, source)) => {
                debug!(email = ?email, network, source = %source, "Network resolved");
                Some(network.to_string())
            }
            None => {
                debug!(email = ?email, "No network could be resolved");
                None
            }
        }
    }

    /// Describe how a context resolves.
    ///
    /// `available` reports raw presence of every field, so `empresa` may be
    /// flagged available even when `source` is `rede`.
    pub fn get_network_resolution_info(
        context: Option<&UserNetworkContext>,
    ) -> NetworkResolutionDiagnostics {
        let resolved = Self::resolve_with_source(context);

        let available = context
            .map(|ctx| NetworkAvailability {
                rede: ctx.field(NetworkSource::Rede).is_some(),
                empresa: ctx.field(NetworkSource::Empresa).is_some(),
                sub_rede: ctx.field(NetworkSource::SubRede).is_some(),
            })
            .unwrap_or_default();

        NetworkResolutionDiagnostics {
            resolved_network: resolved.map(|(network, _)| network.to_string()),
            source: resolved.map(|(_, source)| source),
            available,
        }
    }

    /// Check that a resolved network owns at least one store.
    ///
    /// `None` short-circuits to `false` without touching `lookup`. Lookup
    /// errors are logged and reported as `false`; they never propagate.
    pub async fn validate_network_exists<L>(resolved_network: Option<&str>, lookup: &L) -> bool
    where
        L: StoreLookup + ?Sized,
    {
        let Some(network) = resolved_network else {
            debug!("Skipping network validation: nothing resolved");
            return false;
        };

        match lookup.list_stores_for_network(network).await {
            Ok(stores) if !stores.is_empty() => {
                debug!(network, store_count = stores.len(), "Network validated");
                true
            }
            Ok(_) => {
                warn!(network, "Network has no stores");
                false
            }
            Err(e) => {
                warn!(network, error = %e, "Store lookup failed, treating network as invalid");
                false
            }
        }
    }

    /// Classify a failed resolution by raw field presence.
    ///
    /// This does not re-run resolution: a context whose `rede` is empty but
    /// whose `empresa` is set classifies as [`ResolutionFailure::Unresolvable`]
    /// even though it would resolve. Only call this after
    /// [`Self::resolve_user_network`] returned `None`.
    pub fn classify_failure(context: Option<&UserNetworkContext>) -> ResolutionFailure {
        if Self::get_network_resolution_info(context).available.any() {
            ResolutionFailure::Unresolvable
        } else {
            ResolutionFailure::NoNetworkFields
        }
    }

    /// Report why resolution failed and return `None`.
    ///
    /// `on_error` receives one of the two fixed messages chosen by
    /// [`Self::classify_failure`]. The `None` return lets read paths bail out
    /// with `return NetworkResolver::handle_network_resolution_failure(..)`.
    pub fn handle_network_resolution_failure<F>(
        context: Option<&UserNetworkContext>,
        on_error: Option<F>,
    ) -> Option<String>
    where
        F: FnOnce(&str),
    {
        let failure = Self::classify_failure(context);
        let email = context.and_then(|ctx| ctx.email.as_deref());

        warn!(email = ?email, reason = ?failure, "{}", failure.message());

        if let Some(on_error) = on_error {
            on_error(failure.message());
        }

        None
    }

    /// First present field in precedence order, borrowed from the context.
    fn resolve_with_source(
        context: Option<&UserNetworkContext>,
    ) -> Option<(&str, NetworkSource)> {
        let context = context?;

        NetworkSource::PRECEDENCE
            .iter()
            .find_map(|&source| context.field(source).map(|network| (network, source)))
    }
}
