/// Errors produced by remap while loading alias configuration.
///
/// Every variant is raised during registry construction; nothing here
/// survives past startup.
#[derive(Debug, thiserror::Error)]
pub enum RemapError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("base directory does not exist or is not a directory: {0}")]
    BadBaseDir(String),

    #[error("{path}: {message}")]
    Config { path: String, message: String },

    #[error("empty alias symbol (declared for target '{target}')")]
    EmptyAlias { target: String },
}
