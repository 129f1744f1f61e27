// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{any::Any, fmt::Debug};

use super::PropertyChangedArgs;

/// An observer receives the sender and the change.
pub type PropertyHandler = Box<dyn Fn(&dyn Any, &PropertyChangedArgs<'_>)>;

/// Ordered list of property change observers. Handlers run on the caller's thread in
/// the order they were added.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use arrayext::{PropertyChangedArgs, PropertyObservers};
///
/// let seen = Rc::new(RefCell::new(vec![]));
/// let seen_clone = seen.clone();
///
/// let mut observers = PropertyObservers::default();
/// observers.on_changed("name", move |_, args| {
///     seen_clone.borrow_mut().push(args.property_name.to_string());
/// });
///
/// assert!(observers.dispatch(&(), &PropertyChangedArgs::new("name")));
/// assert!(observers.dispatch(&(), &PropertyChangedArgs::new("age")));
/// assert_eq!(*seen.borrow(), vec!["name".to_string()]);
/// ```
#[derive(Default)]
pub struct PropertyObservers {
    handler_vec: Vec<PropertyHandler>,
}

impl PropertyObservers {
    /// Adds a handler that sees every change.
    pub fn subscribe(
        &mut self,
        handler: impl Fn(&dyn Any, &PropertyChangedArgs<'_>) + 'static,
    ) -> &mut Self {
        self.handler_vec.push(Box::new(handler));
        self
    }

    /// Adds a handler that only sees changes to `property_name` (ordinal comparison).
    pub fn on_changed(
        &mut self,
        property_name: impl Into<String>,
        handler: impl Fn(&dyn Any, &PropertyChangedArgs<'_>) + 'static,
    ) -> &mut Self {
        let property_name = property_name.into();
        self.subscribe(move |sender, args| {
            if args.property_name == property_name {
                handler(sender, args);
            }
        })
    }

    /// Adds a handler that sees changes to any of `property_names`.
    pub fn on_any_changed(
        &mut self,
        property_names: &[&str],
        handler: impl Fn(&dyn Any, &PropertyChangedArgs<'_>) + 'static,
    ) -> &mut Self {
        let property_names: Vec<String> =
            property_names.iter().map(ToString::to_string).collect();
        self.subscribe(move |sender, args| {
            if property_names.iter().any(|it| it == args.property_name) {
                handler(sender, args);
            }
        })
    }

    pub fn clear(&mut self) -> &mut Self {
        self.handler_vec.clear();
        self
    }

    #[must_use]
    pub fn len(&self) -> usize { self.handler_vec.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.handler_vec.is_empty() }

    /// Runs every handler. Returns `false` when there are none, ie: nothing was
    /// dispatched.
    pub fn dispatch(&self, sender: &dyn Any, args: &PropertyChangedArgs<'_>) -> bool {
        if self.is_empty() {
            return false;
        }
        tracing::trace!(
            message = "property changed",
            property_name = args.property_name,
            handlers = self.len()
        );
        for handler in &self.handler_vec {
            handler(sender, args);
        }
        true
    }
}

impl Debug for PropertyObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyObservers")
            .field("handlers", &self.len())
            .finish()
    }
}
