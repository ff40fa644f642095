//! Domain error types.
//!
//! These errors represent validation failures in caller-supplied data.
//! They are raised before any optimization work starts.

use std::fmt;

/// One of the two competing traffic streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// North-south traffic.
    A,
    /// East-west traffic.
    B,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::A => f.write_str("A (north-south)"),
            Stream::B => f.write_str("B (east-west)"),
        }
    }
}

/// Domain-level errors for input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// An arrival count was below zero
    #[error("negative arrival count {value} on stream {stream} at step {step}")]
    NegativeArrival {
        stream: Stream,
        step: usize,
        value: i64,
    },

    /// An arrival count does not fit the queue counter
    #[error("arrival count {value} on stream {stream} at step {step} is too large")]
    ArrivalOverflow {
        stream: Stream,
        step: usize,
        value: i64,
    },

    /// The two arrival sequences cover different numbers of steps
    #[error("arrival streams differ in length: A has {a} steps, B has {b}")]
    UnequalStreams { a: usize, b: usize },
}
