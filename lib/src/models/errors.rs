#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Design bookmark '{0}' has a repository but no repository URL")]
    MissingRepoUrl(String),

    #[error("Design bookmark '{0}' has a repository URL but is not marked as having a repository")]
    UnexpectedRepoUrl(String),
}
