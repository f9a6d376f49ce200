use crate::DbError;
use core_types::{Persona, PersonaSchema};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqlitePool};
use sqlx::FromRow;

/// The `PersonaRepository` owns the process-wide pool and hands out
/// request-scoped sessions. It is cheap to clone.
#[derive(Debug, Clone)]
pub struct PersonaRepository {
    pool: SqlitePool,
}

/// A row of the `personas` table, exactly as stored.
#[derive(Debug, Clone, FromRow)]
pub struct PersonaRow {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

impl From<PersonaRow> for Persona {
    fn from(row: PersonaRow) -> Self {
        Persona {
            id: row.id,
            nombre: row.nombre,
            apellido: row.apellido,
            email: row.email,
        }
    }
}

/// One pooled connection, exclusively owned by a single request.
///
/// The connection goes back to the pool when the session is dropped, on
/// every exit path of the code holding it.
#[derive(Debug)]
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl PersonaRepository {
    /// Creates a new `PersonaRepository` around a shared connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Acquires a connection from the pool, waiting up to the configured
    /// acquire timeout.
    pub async fn session(&self) -> Result<Session, DbError> {
        let conn = self.pool.acquire().await?;
        tracing::debug!("Session acquired.");
        Ok(Session { conn })
    }
}

impl Session {
    /// Looks up a single persona by primary key.
    pub async fn get(&mut self, id: i64) -> Result<Option<Persona>, DbError> {
        let row = sqlx::query_as::<_, PersonaRow>(
            "SELECT id, nombre, apellido, email FROM personas WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(row.map(Persona::from))
    }

    /// Fetches every stored persona, ordered by id.
    pub async fn list(&mut self) -> Result<Vec<Persona>, DbError> {
        let rows = sqlx::query_as::<_, PersonaRow>(
            "SELECT id, nombre, apellido, email FROM personas ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows.into_iter().map(Persona::from).collect())
    }

    /// Inserts a new persona and returns it with the id the database assigned.
    pub async fn insert(&mut self, fields: &PersonaSchema) -> Result<Persona, DbError> {
        let row = sqlx::query_as::<_, PersonaRow>(
            r#"
            INSERT INTO personas (nombre, apellido, email)
            VALUES (?, ?, ?)
            RETURNING id, nombre, apellido, email
            "#,
        )
        .bind(&fields.nombre)
        .bind(&fields.apellido)
        .bind(&fields.email)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(id = row.id, "Persona inserted.");
        Ok(row.into())
    }

    /// Overwrites nombre, apellido and email of an existing persona.
    ///
    /// Returns `DbError::NotFound` if no row has that id. Concurrent updates to
    /// the same id are not detected; the last commit wins.
    pub async fn update(&mut self, id: i64, fields: &PersonaSchema) -> Result<Persona, DbError> {
        let row = sqlx::query_as::<_, PersonaRow>(
            r#"
            UPDATE personas
            SET nombre = ?, apellido = ?, email = ?
            WHERE id = ?
            RETURNING id, nombre, apellido, email
            "#,
        )
        .bind(&fields.nombre)
        .bind(&fields.apellido)
        .bind(&fields.email)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or(DbError::NotFound)?;

        tracing::debug!(id, "Persona updated.");
        Ok(row.into())
    }

    /// Permanently removes a persona. Returns `DbError::NotFound` if it was absent.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM personas WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        tracing::debug!(id, "Persona deleted.");
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::debug!("Session released.");
    }
}
