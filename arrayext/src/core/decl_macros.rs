// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro, so that a diff of the left and
/// right values is printed when an assertion fails.
///
/// ```
/// use arrayext::assert_eq2;
///
/// assert_eq2!(vec![0, 4], vec![0, 4]);
/// ```
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Emits a `trace!` event for a structural resize. `$op` names the operation, the old
/// and new lengths are attached as fields.
#[macro_export]
macro_rules! trace_resize {
    ($op:expr, $old_len:expr, $new_len:expr) => {
        tracing::trace!(
            message = "resize",
            op = $op,
            old_len = $old_len,
            new_len = $new_len
        )
    };
}
