//! Network Scope Service
//!
//! Applies the resolver the same way for every feature module: reads
//! without a network yield nothing, writes without a (valid) network fail.

use std::sync::Arc;

use crate::domain::services::{NetworkResolver, ResolutionFailure};
use crate::domain::{StoreLookup, UserNetworkContext};
use crate::shared::error::AppError;

/// Why a write could not be scoped to a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error("{0}")]
    Unresolved(ResolutionFailure),

    #[error("A rede \"{0}\" não foi encontrada no sistema")]
    NetworkNotFound(String),
}

impl From<ScopeError> for AppError {
    fn from(err: ScopeError) -> Self {
        match err {
            ScopeError::Unresolved(_) => AppError::Forbidden(err.to_string()),
            ScopeError::NetworkNotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

/// Resolves (and for writes, validates) the network of a request.
pub struct NetworkScopeService<L>
where
    L: StoreLookup + ?Sized,
{
    lookup: Arc<L>,
    validate_on_write: bool,
}

impl<L> NetworkScopeService<L>
where
    L: StoreLookup + ?Sized,
{
    /// Create a scope service that validates networks before writes.
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            lookup,
            validate_on_write: true,
        }
    }

    /// Enable or disable the store-existence check on writes.
    pub fn with_write_validation(mut self, enabled: bool) -> Self {
        self.validate_on_write = enabled;
        self
    }

    /// Network to filter reads by, or `None` when the caller should get an
    /// empty result.
    pub fn read_scope(&self, context: Option<&UserNetworkContext>) -> Option<String> {
        match NetworkResolver::resolve_user_network(context) {
            Some(network) => Some(network),
            None => NetworkResolver::handle_network_resolution_failure(context, None::<fn(&str)>),
        }
    }

    /// Network to tag a new row with.
    pub async fn write_scope(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<String, ScopeError> {
        let Some(network) = NetworkResolver::resolve_user_network(context) else {
            NetworkResolver::handle_network_resolution_failure(context, None::<fn(&str)>);
            return Err(ScopeError::Unresolved(NetworkResolver::classify_failure(context)));
        };

        if self.validate_on_write
            && !NetworkResolver::validate_network_exists(Some(&network), self.lookup.as_ref()).await
        {
            return Err(ScopeError::NetworkNotFound(network));
        }

        Ok(network)
    }
}
