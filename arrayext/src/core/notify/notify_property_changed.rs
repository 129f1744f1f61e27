// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Types that want to announce property changes hold a [`PropertyObservers`] and expose
//! it through [`NotifyPropertyChanged::observers`]. The provided methods build the
//! [`PropertyChangedArgs`] and dispatch them.

use std::any::Any;

use super::{PropertyChangedArgs, PropertyObservers};

/// Raise property change notifications.
///
/// ```
/// use std::{cell::Cell, rc::Rc};
/// use arrayext::{NotifyPropertyChanged, PropertyObservers};
///
/// #[derive(Debug, Default)]
/// struct Player {
///     score: u32,
///     observers: PropertyObservers,
/// }
///
/// impl NotifyPropertyChanged for Player {
///     fn observers(&self) -> &PropertyObservers { &self.observers }
/// }
///
/// impl Player {
///     fn set_score(&mut self, score: u32) {
///         let old = std::mem::replace(&mut self.score, score);
///         self.notify_change("score", &old, &score);
///     }
/// }
///
/// let last_delta = Rc::new(Cell::new(0));
/// let last_delta_clone = last_delta.clone();
///
/// let mut player = Player::default();
/// player.observers.on_changed("score", move |_, args| {
///     if let Some((old, new)) = args.values::<u32>() {
///         last_delta_clone.set(new - old);
///     }
/// });
/// player.set_score(7);
/// assert_eq!(last_delta.get(), 7);
/// ```
pub trait NotifyPropertyChanged {
    fn observers(&self) -> &PropertyObservers;

    /// Notifies with `self` as the sender. Returns `false` when no observers are
    /// registered.
    fn notify(&self, property_name: &str) -> bool
    where
        Self: Sized + 'static,
    {
        self.notify_from(self, property_name)
    }

    fn notify_from(&self, sender: &dyn Any, property_name: &str) -> bool {
        self.observers()
            .dispatch(sender, &PropertyChangedArgs::new(property_name))
    }

    /// Notifies with `self` as the sender and attaches the old and new values.
    fn notify_change<V: Any>(&self, property_name: &str, old_value: &V, new_value: &V) -> bool
    where
        Self: Sized + 'static,
    {
        self.notify_change_from(self, property_name, old_value, new_value)
    }

    fn notify_change_from<V: Any>(
        &self,
        sender: &dyn Any,
        property_name: &str,
        old_value: &V,
        new_value: &V,
    ) -> bool {
        self.observers().dispatch(
            sender,
            &PropertyChangedArgs::with_values(property_name, old_value, new_value),
        )
    }
}
