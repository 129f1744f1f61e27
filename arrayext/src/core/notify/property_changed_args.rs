// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{any::Any, fmt::Debug};

/// Payload handed to every observer when a property changes. The old and new values
/// are only present when the change was raised with
/// [`crate::NotifyPropertyChanged::notify_change`].
#[derive(Clone, Copy)]
pub struct PropertyChangedArgs<'a> {
    pub property_name: &'a str,
    pub old_value: Option<&'a dyn Any>,
    pub new_value: Option<&'a dyn Any>,
}

impl<'a> PropertyChangedArgs<'a> {
    #[must_use]
    pub fn new(property_name: &'a str) -> Self {
        Self {
            property_name,
            old_value: None,
            new_value: None,
        }
    }

    #[must_use]
    pub fn with_values<V: Any>(property_name: &'a str, old_value: &'a V, new_value: &'a V) -> Self {
        Self {
            property_name,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    /// The `(old, new)` pair, if values were attached and they are of type `V`.
    #[must_use]
    pub fn values<V: Any>(&self) -> Option<(&'a V, &'a V)> {
        let old = self.old_value?.downcast_ref::<V>()?;
        let new = self.new_value?.downcast_ref::<V>()?;
        Some((old, new))
    }

    #[must_use]
    pub fn has_values(&self) -> bool { self.old_value.is_some() && self.new_value.is_some() }
}

impl Debug for PropertyChangedArgs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyChangedArgs")
            .field("property_name", &self.property_name)
            .field("has_values", &self.has_values())
            .finish()
    }
}
