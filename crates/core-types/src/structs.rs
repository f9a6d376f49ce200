use serde::{Deserialize, Serialize};

/// A stored persona as returned to API clients.
///
/// The `id` is assigned by the storage engine on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

/// The fields a client supplies when creating or replacing a persona.
///
/// All three are required. Extra keys in the body (including `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSchema {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn persona_serializes_with_id_first() {
        let persona = Persona {
            id: 1,
            nombre: "Ana".to_string(),
            apellido: "Gomez".to_string(),
            email: "ana@x.com".to_string(),
        };
        let body = serde_json::to_string(&persona).unwrap();
        assert_eq!(
            body,
            r#"{"id":1,"nombre":"Ana","apellido":"Gomez","email":"ana@x.com"}"#
        );
    }

    #[test]
    fn schema_ignores_id_and_unknown_keys() {
        let schema: PersonaSchema = serde_json::from_value(json!({
            "id": 99,
            "nombre": "Ana",
            "apellido": "Gomez",
            "email": "ana@x.com",
            "telefono": "555"
        }))
        .unwrap();
        assert_eq!(schema.nombre, "Ana");
        assert_eq!(schema.email, "ana@x.com");
    }

    #[test]
    fn schema_rejects_missing_field() {
        let result = serde_json::from_value::<PersonaSchema>(json!({
            "nombre": "Ana",
            "email": "ana@x.com"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("apellido"), "unexpected error: {err}");
    }

    #[test]
    fn schema_rejects_wrong_primitive_type() {
        let result = serde_json::from_value::<PersonaSchema>(json!({
            "nombre": 42,
            "apellido": "Gomez",
            "email": "ana@x.com"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn schema_accepts_any_email_text() {
        // Only the primitive type is checked.
        let schema: PersonaSchema = serde_json::from_value(json!({
            "nombre": "Ana",
            "apellido": "Gomez",
            "email": "not-an-email"
        }))
        .unwrap();
        assert_eq!(schema.email, "not-an-email");
    }
}
