// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod flat_array_ops;

// Re-export.
pub use flat_array_ops::*;
