//! Survey Service

use std::sync::Arc;

use async_trait::async_trait;

use super::network_scope_service::NetworkScopeService;
use crate::application::dto::response::ScopedListResponse;
use crate::domain::{StoreLookup, Survey, SurveyRepository, UserNetworkContext};
use crate::shared::error::AppError;

/// Survey service trait
#[async_trait]
pub trait SurveyService: Send + Sync {
    async fn list_surveys(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<ScopedListResponse<Survey>, AppError>;
}

/// SurveyService implementation
pub struct SurveyServiceImpl<R, L>
where
    R: SurveyRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    survey_repo: Arc<R>,
    scope: NetworkScopeService<L>,
}

impl<R, L> SurveyServiceImpl<R, L>
where
    R: SurveyRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    pub fn new(survey_repo: Arc<R>, scope: NetworkScopeService<L>) -> Self {
        Self { survey_repo, scope }
    }
}

#[async_trait]
impl<R, L> SurveyService for SurveyServiceImpl<R, L>
where
    R: SurveyRepository + ?Sized,
    L: StoreLookup + ?Sized,
{
    async fn list_surveys(
        &self,
        context: Option<&UserNetworkContext>,
    ) -> Result<ScopedListResponse<Survey>, AppError> {
        let Some(network) = self.scope.read_scope(context) else {
            return Ok(ScopedListResponse::new(None, Vec::new()));
        };

        let surveys = self.survey_repo.list_by_network(&network).await?;
        Ok(ScopedListResponse::new(Some(network), surveys))
    }
}
