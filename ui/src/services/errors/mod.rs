use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    /// The app id meta tag exists but does not carry an `app-id=` field.
    /// This is a page authoring defect and is surfaced, not swallowed.
    #[error("Malformed app meta tag: {meta} = \"{content}\"")]
    MalformedAppMeta { meta: String, content: String },

    #[error("Document unavailable: {context}")]
    DocumentUnavailable { context: String },

    #[error("Banner markup error: {message}")]
    Markup { message: String },
}

pub type BannerResult<T> = Result<T, BannerError>;
