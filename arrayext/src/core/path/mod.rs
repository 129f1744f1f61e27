// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod comparison;
pub mod path_helpers;

// Re-export.
pub use comparison::*;
pub use path_helpers::*;
