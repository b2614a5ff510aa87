use thiserror::Error;

/// Error returned when a range's minimum and maximum are equal.
///
/// Both [`normalize`](crate::normalize) and [`denormalize`](crate::denormalize) divide
/// by the width of the range, which is zero in this case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("division by zero: range minimum equals range maximum")]
pub struct DivisionByZero;
