use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeMappingError {
    #[error("Invalid UUID format: {value:?}: {source}")]
    InvalidUuidFormat {
        value: String,
        #[source]
        source: uuid::Error,
    },
}
