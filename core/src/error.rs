use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Symbol names must not be empty")]
    EmptySymbolName,
    #[error("Symbol {0:?} appears more than once in the catalog")]
    DuplicateSymbol(String),
    #[error("Catalog has more symbols than a board can hold")]
    CatalogTooLarge,
    #[error("Deck must hold every catalog symbol exactly twice")]
    InvalidDeck,
    #[error("No card at that position")]
    InvalidCard,
}

pub type Result<T> = core::result::Result<T, GameError>;
