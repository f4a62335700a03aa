use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    #[error("unknown theme '{0}' (expected one of: blank, none, box, underbar)")]
    UnknownTheme(String),

    #[error("activation opacity {0} is outside 0.0..=1.0")]
    InvalidActivationOpacity(f32),

    #[error("select widget requires an on_select callback")]
    MissingOnSelect,
}

pub type Result<T> = std::result::Result<T, SelectError>;
