#[derive(Debug, thiserror::Error)]
pub enum HasherError {
    #[error("no input available on stdin")]
    NoInput,

    #[error("failed to read stdin: {0}")]
    StdinRead(String),

    #[error("bcrypt rejected the password: {0}")]
    Hash(String),
}
