// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod notify_property_changed;
pub mod property_changed_args;
pub mod property_observers;

// Re-export.
pub use notify_property_changed::*;
pub use property_changed_args::*;
pub use property_observers::*;
