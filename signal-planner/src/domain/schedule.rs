//! Arrival schedule type.

use super::{DomainError, Stream};

/// Per-step arrival counts for both streams.
///
/// `arrivals(i)` gives the vehicles joining each queue during step `i`.
/// Both streams always cover the same number of steps. A schedule is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrivalSchedule {
    a: Vec<u32>,
    b: Vec<u32>,
}

impl ArrivalSchedule {
    /// Create a schedule from two unsigned arrival sequences.
    ///
    /// Returns an error if the sequences differ in length.
    pub fn new(a: Vec<u32>, b: Vec<u32>) -> Result<Self, DomainError> {
        if a.len() != b.len() {
            return Err(DomainError::UnequalStreams {
                a: a.len(),
                b: b.len(),
            });
        }
        Ok(Self { a, b })
    }

    /// Create a schedule from signed input, rejecting negative counts.
    ///
    /// Validation happens here, before any optimization begins.
    pub fn from_signed(a: &[i64], b: &[i64]) -> Result<Self, DomainError> {
        if a.len() != b.len() {
            return Err(DomainError::UnequalStreams {
                a: a.len(),
                b: b.len(),
            });
        }
        let a = convert_stream(Stream::A, a)?;
        let b = convert_stream(Stream::B, b)?;
        Ok(Self { a, b })
    }

    /// Number of steps the schedule covers.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns true if the schedule covers no steps.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Arrivals `(a, b)` during `step`, or `None` past the end.
    pub fn arrivals(&self, step: usize) -> Option<(u32, u32)> {
        Some((*self.a.get(step)?, *self.b.get(step)?))
    }

    /// Arrival sequence for stream A.
    pub fn stream_a(&self) -> &[u32] {
        &self.a
    }

    /// Arrival sequence for stream B.
    pub fn stream_b(&self) -> &[u32] {
        &self.b
    }
}

fn convert_stream(stream: Stream, values: &[i64]) -> Result<Vec<u32>, DomainError> {
    values
        .iter()
        .enumerate()
        .map(|(step, &value)| {
            if value < 0 {
                return Err(DomainError::NegativeArrival {
                    stream,
                    step,
                    value,
                });
            }
            u32::try_from(value).map_err(|_| DomainError::ArrivalOverflow {
                stream,
                step,
                value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_equal_lengths() {
        let s = ArrivalSchedule::new(vec![1, 2, 3], vec![4, 5, 6]).unwrap();
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.arrivals(0), Some((1, 4)));
        assert_eq!(s.arrivals(2), Some((3, 6)));
        assert_eq!(s.arrivals(3), None);
    }

    #[test]
    fn new_rejects_unequal_lengths() {
        let err = ArrivalSchedule::new(vec![1, 2], vec![1]).unwrap_err();
        assert_eq!(err, DomainError::UnequalStreams { a: 2, b: 1 });
    }

    #[test]
    fn from_signed_rejects_negative() {
        let err = ArrivalSchedule::from_signed(&[1, 2, 3], &[0, -1, 0]).unwrap_err();
        assert_eq!(
            err,
            DomainError::NegativeArrival {
                stream: Stream::B,
                step: 1,
                value: -1
            }
        );
    }

    #[test]
    fn from_signed_reports_first_stream_first() {
        let err = ArrivalSchedule::from_signed(&[-3], &[-4]).unwrap_err();
        assert!(matches!(
            err,
            DomainError::NegativeArrival {
                stream: Stream::A,
                value: -3,
                ..
            }
        ));
    }

    #[test]
    fn from_signed_rejects_oversized() {
        let too_big = i64::from(u32::MAX) + 1;
        let err = ArrivalSchedule::from_signed(&[too_big], &[0]).unwrap_err();
        assert!(matches!(err, DomainError::ArrivalOverflow { step: 0, .. }));
    }

    #[test]
    fn from_signed_accepts_zeros() {
        let s = ArrivalSchedule::from_signed(&[0, 0], &[0, 0]).unwrap();
        assert_eq!(s.stream_a(), &[0, 0]);
        assert_eq!(s.stream_b(), &[0, 0]);
    }

    #[test]
    fn empty_schedule() {
        let s = ArrivalSchedule::new(vec![], vec![]).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.arrivals(0), None);
    }
}
