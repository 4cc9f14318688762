use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card code: {0:?}")]
    InvalidCardCode(String),
    #[error("Card specified multiple times: {0}")]
    DuplicateCard(String),
    #[error("Board holds at most 5 cards, got {0}")]
    BoardSize(usize),
}
