use crate::domain::errors::DomainError;

const CNT_MATERIAL_SLUG: &str = "materials_slug_key";
const CNT_TAG_SLUG: &str = "tags_slug_key";
const CNT_PROJECT_SLUG: &str = "projects_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_MATERIAL_SLUG => DomainError::Conflict("material slug already exists".into()),
                    CNT_TAG_SLUG => DomainError::Conflict("tag slug already exists".into()),
                    CNT_PROJECT_SLUG => DomainError::Conflict("project slug already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if db_err.code().as_deref() == Some("23505") {
                return DomainError::Conflict("unique constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
