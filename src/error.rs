use thiserror::Error;

/// Failures surfaced by the fallible [`PriorityQueue`] operations.
///
/// Every variant is a precondition violation on the caller's side; nothing
/// is retried internally.
///
/// [`PriorityQueue`]: crate::PriorityQueue
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `top`, `top_key_value` or `pop` was called on an empty queue.
    #[error("the queue is empty")]
    EmptyQueue,

    /// `update_key` or `key_of` named an element that is not in the queue.
    #[error("element is not in the queue")]
    ElementNotFound,

    /// `push` was handed an element that is already in the queue.
    #[error("element is already in the queue")]
    DuplicateElement,
}
