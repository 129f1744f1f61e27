// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod array_op_error;
pub mod signed_index;

// Re-export.
pub use array_op_error::*;
pub use signed_index::*;
