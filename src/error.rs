// src/error.rs
use std::io;
use thiserror::Error;

/// Failures of the status display. Fatal to the session.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("terminal write failed: {0}")]
    Write(#[from] io::Error),

    #[error("could not start spinner thread: {0}")]
    Spawn(#[source] io::Error),
}

/// Arithmetic expression failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("no arithmetic expression found in request")]
    NoExpression,

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("unexpected input after the end of the expression")]
    TrailingInput,

    #[error("unbalanced parentheses")]
    Unbalanced,

    #[error("expression is nested too deeply")]
    TooDeep,

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NotFinite,
}

/// Failures while processing one request.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("interrupted")]
    Interrupted,

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error("calculation failed: {0}")]
    Calculation(#[from] CalcError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

