use thiserror::Error;

use crate::api::ElementRole;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("required presentation element is missing: {role}")]
    MissingElement { role: ElementRole },

    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),

    #[error("invalid render frame: {0}")]
    InvalidFrame(String),

    #[error("plugin id must not be blank")]
    BlankPluginId,

    #[error("plugin `{id}` is already attached to this carousel")]
    DuplicatePlugin { id: String },

    #[error("renderer failed: {0}")]
    Render(String),
}
