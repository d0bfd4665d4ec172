#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("invalid JSON: {0}")]
    InvalidJson(serde_json::Error),
    #[error("invalid YAML: {0}")]
    InvalidYaml(serde_yaml::Error),
    #[error("translation error: {0}")]
    Translation(String),
    #[error("invalid text: {0}")]
    Text(#[from] story_types::TextError),
}

pub type StoryResult<T> = std::result::Result<T, StoryError>;
