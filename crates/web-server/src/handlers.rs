use crate::{
    error::{AppError, PERSONA_NOT_FOUND},
    session::DbSession,
};
use axum::{extract::Path, Json};
use axum_extra::extract::WithRejection;
use core_types::{Persona, PersonaSchema};
use serde::{Deserialize, Serialize};

/// The body returned after a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

type PersonaId = WithRejection<Path<i64>, AppError>;
type PersonaBody = WithRejection<Json<PersonaSchema>, AppError>;

/// # GET /personas/:persona_id
pub async fn get_persona(
    WithRejection(Path(persona_id), _): PersonaId,
    DbSession(mut session): DbSession,
) -> Result<Json<Persona>, AppError> {
    let persona = session
        .get(persona_id)
        .await?
        .ok_or_else(|| AppError::NotFound(PERSONA_NOT_FOUND.to_string()))?;
    Ok(Json(persona))
}

/// # GET /personas
/// Fetches every stored persona. The list may be empty.
pub async fn get_personas(
    DbSession(mut session): DbSession,
) -> Result<Json<Vec<Persona>>, AppError> {
    let personas = session.list().await?;
    Ok(Json(personas))
}

/// # POST /personas
/// Stores a new persona. Repeating the request stores another row.
pub async fn create_persona(
    DbSession(mut session): DbSession,
    WithRejection(Json(fields), _): PersonaBody,
) -> Result<Json<Persona>, AppError> {
    let persona = session.insert(&fields).await?;
    tracing::info!(id = persona.id, "Persona created.");
    Ok(Json(persona))
}

/// # PUT /personas/:persona_id
pub async fn update_persona(
    WithRejection(Path(persona_id), _): PersonaId,
    DbSession(mut session): DbSession,
    WithRejection(Json(fields), _): PersonaBody,
) -> Result<Json<Persona>, AppError> {
    let persona = session.update(persona_id, &fields).await?;
    tracing::info!(id = persona.id, "Persona updated.");
    Ok(Json(persona))
}

/// # DELETE /personas/:persona_id
pub async fn delete_persona(
    WithRejection(Path(persona_id), _): PersonaId,
    DbSession(mut session): DbSession,
) -> Result<Json<MessageResponse>, AppError> {
    session.delete(persona_id).await?;
    tracing::info!(id = persona_id, "Persona deleted.");
    Ok(Json(MessageResponse {
        message: "Persona deleted successfully".to_string(),
    }))
}
