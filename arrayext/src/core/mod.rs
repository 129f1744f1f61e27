// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod flat_array;
pub mod log;
pub mod notify;
pub mod path;
pub mod range;
pub mod reorder;
pub mod volume;

// Re-export.
pub use common::*;
pub use flat_array::*;
pub use log::*;
pub use notify::*;
pub use path::*;
pub use range::*;
pub use reorder::*;
pub use volume::*;
