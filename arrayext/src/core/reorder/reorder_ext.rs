// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reordering helpers for lists that back things like layer stacks or menus, where
//! items are nudged up and down one slot at a time.

use crate::{ArrayOpError, ArrayOpResult, ensure_element_index, signed_len};

/// How [`ReorderExt::swap_items`] exchanges two items. The final order is the same,
/// only the sequence of mutations differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapMode {
    /// Exchange the two values where they are.
    #[default]
    InPlace,
    /// Remove both items (later one first) and insert them back at each other's
    /// position.
    RemoveAndReinsert,
}

/// Reordering operations for a [`Vec`].
///
/// ```
/// use arrayext::{ReorderExt, SwapMode};
///
/// let mut layers = vec!["background", "sprites", "hud"];
/// layers.move_item_up(&"hud", SwapMode::InPlace).unwrap();
/// assert_eq!(layers, vec!["background", "hud", "sprites"]);
///
/// // Already at the top.
/// layers.move_up(0, SwapMode::InPlace).unwrap();
/// assert_eq!(layers[0], "background");
/// ```
pub trait ReorderExt<T> {
    /// Exchanges the items at `index_a` and `index_b`. Equal indices are a no-op.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::IndexOutOfRange`] if either index does not address an item.
    fn swap_items(&mut self, index_a: isize, index_b: isize, mode: SwapMode)
    -> ArrayOpResult<()>;

    /// Like [`ReorderExt::swap_items`], returns whether the swap succeeded.
    fn try_swap_items(&mut self, index_a: isize, index_b: isize, mode: SwapMode) -> bool {
        self.swap_items(index_a, index_b, mode).is_ok()
    }

    /// Swaps the item at `index` with the one before it. The first item stays put.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::IndexOutOfRange`] if `index` does not address an item.
    fn move_up(&mut self, index: isize, mode: SwapMode) -> ArrayOpResult<()>;

    /// Swaps the item at `index` with the one after it. The last item stays put.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::IndexOutOfRange`] if `index` does not address an item, which
    /// includes every index of an empty list.
    fn move_down(&mut self, index: isize, mode: SwapMode) -> ArrayOpResult<()>;

    /// # Errors
    ///
    /// [`ArrayOpError::ItemNotFound`] if `item` is not in the list.
    fn move_item_up(&mut self, item: &T, mode: SwapMode) -> ArrayOpResult<()>
    where
        T: PartialEq;

    /// # Errors
    ///
    /// [`ArrayOpError::ItemNotFound`] if `item` is not in the list.
    fn move_item_down(&mut self, item: &T, mode: SwapMode) -> ArrayOpResult<()>
    where
        T: PartialEq;

    /// Removes every item that matches `predicate`, keeping the order of the rest.
    fn remove_any(&mut self, predicate: impl FnMut(&T) -> bool);

    /// Removes and returns the item at `index`.
    ///
    /// # Errors
    ///
    /// [`ArrayOpError::IndexOutOfRange`] if `index` does not address an item.
    fn pull_item_at(&mut self, index: isize) -> ArrayOpResult<T>;

    fn try_pull_item_at(&mut self, index: isize) -> Option<T> { self.pull_item_at(index).ok() }
}

impl<T> ReorderExt<T> for Vec<T> {
    fn swap_items(
        &mut self,
        index_a: isize,
        index_b: isize,
        mode: SwapMode,
    ) -> ArrayOpResult<()> {
        if index_a == index_b {
            return Ok(());
        }

        let a = ensure_element_index(index_a, self.len())?;
        let b = ensure_element_index(index_b, self.len())?;

        match mode {
            SwapMode::InPlace => self.swap(a, b),
            SwapMode::RemoveAndReinsert => {
                let (first, second) = (a.min(b), a.max(b));
                let later = self.remove(second);
                let earlier = self.remove(first);
                self.insert(first, later);
                self.insert(second, earlier);
            }
        }
        Ok(())
    }

    fn move_up(&mut self, index: isize, mode: SwapMode) -> ArrayOpResult<()> {
        let target = index.saturating_sub(1).max(0);
        if target == index {
            return Ok(());
        }
        self.swap_items(index, target, mode)
    }

    fn move_down(&mut self, index: isize, mode: SwapMode) -> ArrayOpResult<()> {
        let target = index.saturating_add(1).min(signed_len(self.len()) - 1);
        if target == index {
            return Ok(());
        }
        self.swap_items(index, target, mode)
    }

    fn move_item_up(&mut self, item: &T, mode: SwapMode) -> ArrayOpResult<()>
    where
        T: PartialEq,
    {
        let index = position_of(self, item)?;
        self.move_up(index, mode)
    }

    fn move_item_down(&mut self, item: &T, mode: SwapMode) -> ArrayOpResult<()>
    where
        T: PartialEq,
    {
        let index = position_of(self, item)?;
        self.move_down(index, mode)
    }

    fn remove_any(&mut self, mut predicate: impl FnMut(&T) -> bool) {
        self.retain(|it| !predicate(it));
    }

    fn pull_item_at(&mut self, index: isize) -> ArrayOpResult<T> {
        let offset = ensure_element_index(index, self.len())?;
        Ok(self.remove(offset))
    }
}

fn position_of<T: PartialEq>(items: &[T], item: &T) -> ArrayOpResult<isize> {
    items
        .iter()
        .position(|it| it == item)
        .map(signed_len)
        .ok_or(ArrayOpError::ItemNotFound)
}
