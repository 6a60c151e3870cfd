use thiserror::Error;

/// Which extent of a projection volume collapsed to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanAxis {
    /// `right - left`
    Horizontal,
    /// `top - bottom`
    Vertical,
    /// `far - near`
    Depth,
}

/// Geometric input for which a transform is undefined.
///
/// Only the `try_` constructors on [`Mat4`](crate::Mat4) return this. The plain
/// constructors substitute a fallback matrix instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DegenerateTransform {
    #[error("rotation axis has zero length")]
    ZeroAxis,
    #[error("projection volume has zero {axis:?} span")]
    ZeroSpan { axis: SpanAxis },
    #[error("look-at up vector is parallel to the view direction")]
    ParallelUp,
}
