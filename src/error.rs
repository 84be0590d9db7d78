//! Domain errors for the profile form

use thiserror::Error;

/// Message shown when the form is submitted before every field is filled
pub const INCOMPLETE_MESSAGE: &str = "Por favor, preencha todos os campos e aceite os termos.";

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("{}", INCOMPLETE_MESSAGE)]
    Incomplete,

    #[error("Data de nascimento inválida: '{input}' (use DD/MM/AAAA)")]
    MalformedDate { input: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
