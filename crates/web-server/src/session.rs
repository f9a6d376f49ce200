use crate::{error::AppError, AppState};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use database::Session;
use std::sync::Arc;

/// A database session scoped to one request.
///
/// Extracting it acquires a pooled connection before the handler body runs.
/// The handler owns it, so the connection is returned to the pool when the
/// handler finishes, whether it succeeded or returned an error.
pub struct DbSession(pub Session);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session = state.db_repo.session().await?;
        Ok(DbSession(session))
    }
}
