use std::fmt;

#[derive(Debug)]
pub enum CalcError {
    InvalidInput(String),
    DomainError(String),
    UndefinedResult(String),
    GeneralError(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            CalcError::DomainError(msg) => write!(f, "Domain Error: {}", msg),
            CalcError::UndefinedResult(msg) => write!(f, "Undefined: {}", msg),
            CalcError::GeneralError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CalcError {}

impl CalcError {
    pub fn invalid_input(message: &str) -> Self { CalcError::InvalidInput(message.to_string()) }
    pub fn domain(message: &str) -> Self { CalcError::DomainError(message.to_string()) }
    pub fn undefined(message: &str) -> Self { CalcError::UndefinedResult(message.to_string()) }
    pub fn general(message: &str) -> Self { CalcError::GeneralError(message.to_string()) }
}
