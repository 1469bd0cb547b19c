use thiserror::Error;

/// Failures reported by the SNS side of the program.
#[derive(Debug, Error)]
pub enum TopicError {
    #[error("failed to list SNS topics: {reason}")]
    List { reason: String },
    #[error("failed to publish to {topic_arn}: {reason}")]
    Publish { topic_arn: String, reason: String },
}

/// The two ways a topic selection can be rejected before any lookup happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("you must select a topic (by entering the integer value)")]
    Empty,
    #[error("you must enter an integer value (digits 0-9)")]
    NotAnInteger,
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("no topic is listed under number {0}")]
    UnknownTopic(String),
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error("standard input closed before a line was entered")]
    InputClosed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
