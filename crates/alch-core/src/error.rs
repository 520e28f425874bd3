use thiserror::Error;

pub type ArithResult<T> = Result<T, ArithError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow during {op}")]
    ArithmeticOverflow { op: &'static str },
}

/// Errors from parsing a textual rational such as `"3/4"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRationalError {
    #[error("Malformed rational: '{input}'")]
    Malformed { input: String },

    #[error(transparent)]
    Arith(#[from] ArithError),
}
