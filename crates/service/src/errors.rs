use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let e = ServiceError::not_found("pig");
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "not found: pig not found");
    }

    #[test]
    fn model_errors_are_not_not_found() {
        let e: ServiceError = models::errors::ModelError::Db("boom".into()).into();
        assert!(!e.is_not_found());
        assert_eq!(e.to_string(), "model error: database error: boom");
    }
}
