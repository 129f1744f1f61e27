// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error type shared by every operation in this crate. See [`ArrayOpError`] for the
//! taxonomy.

/// Type alias to make it easy to work with [`ArrayOpError`].
///
/// Since [`ArrayOpError`] implements [`miette::Diagnostic`], callers that use
/// [`miette::Result`] can simply propagate it with `?`.
///
/// # Example
///
/// ```
/// use arrayext::FlatArrayOps;
///
/// fn drop_first_two(items: &mut Vec<u8>) -> miette::Result<()> {
///     items.remove_range(0, 2)?;
///     Ok(())
/// }
///
/// let mut items = vec![1, 2, 3];
/// drop_first_two(&mut items).unwrap();
/// assert_eq!(items, vec![3]);
/// ```
pub type ArrayOpResult<T> = Result<T, ArrayOpError>;

/// Errors returned by the splicing, volume, reorder, range, and path operations.
///
/// | Variant                     | Raised when                                                       |
/// | :-------------------------- | :---------------------------------------------------------------- |
/// | [`InvalidArgument`]         | A structural precondition fails regardless of position            |
/// | [`ArgumentOutOfRange`]      | A parameter (width, height, depth, length) is outside its domain  |
/// | [`IndexOutOfRange`]         | A position falls outside the storage that is being accessed       |
/// | [`ValueOutOfRange`]         | [`crate::RangeExt::ensure_in_range`] rejected a value             |
/// | [`ItemNotFound`]            | A reorder by item could not locate the item                       |
/// | [`PathMissingFolderName`]   | A path has an empty segment where a folder name was expected      |
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`ArgumentOutOfRange`]: Self::ArgumentOutOfRange
/// [`IndexOutOfRange`]: Self::IndexOutOfRange
/// [`ValueOutOfRange`]: Self::ValueOutOfRange
/// [`ItemNotFound`]: Self::ItemNotFound
/// [`PathMissingFolderName`]: Self::PathMissingFolderName
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ArrayOpError {
    /// The argument is structurally invalid, eg: a layer source that is larger than a
    /// single `width * height` layer.
    #[error("Invalid argument '{name}': {reason}")]
    #[diagnostic(code(arrayext::invalid_argument))]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    /// The argument is outside of the domain that the operation accepts.
    #[error("Argument '{name}' is out of range: {value}")]
    #[diagnostic(
        code(arrayext::argument_out_of_range),
        help("Width and height must be at least 1, lengths must be positive, and depths must not be negative")
    )]
    ArgumentOutOfRange { name: &'static str, value: isize },

    /// The position can't be used to access the storage.
    #[error("Index {index} is out of range for a sequence of length {len}")]
    #[diagnostic(code(arrayext::index_out_of_range))]
    IndexOutOfRange { index: isize, len: usize },

    /// A value failed a range check.
    #[error("Value '{name}' is out of range")]
    #[diagnostic(code(arrayext::value_out_of_range))]
    ValueOutOfRange { name: &'static str },

    /// The item to reorder does not exist in the list.
    #[error("Item does not exist in the list")]
    #[diagnostic(code(arrayext::item_not_found))]
    ItemNotFound,

    /// The path contains an empty segment, eg: `a//b`.
    #[error("Path is missing a folder name: '{path}'")]
    #[diagnostic(
        code(arrayext::path_missing_folder_name),
        help("Remove repeated separators from the path")
    )]
    PathMissingFolderName { path: String },
}

impl ArrayOpError {
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn argument_out_of_range(name: &'static str, value: isize) -> Self {
        Self::ArgumentOutOfRange { name, value }
    }

    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
