// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod layer_dims;
pub mod volume_access;
pub mod volume_layers;

// Re-export.
pub use layer_dims::*;
pub use volume_access::*;
pub use volume_layers::*;
