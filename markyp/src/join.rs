//! Element joining utilities.

use std::iter::{FusedIterator, Peekable};

/// Iterator that yields items with a separator between every two of them.
///
/// Created by [`join`] and [`join_with`].
pub struct Join<I: Iterator, F> {
    items: Peekable<I>,
    separator: F,
    gap_pending: bool,
}

impl<I, F> Iterator for Join<I, F>
where
    I: Iterator,
    F: FnMut() -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.gap_pending {
            self.gap_pending = false;
            return Some((self.separator)());
        }
        let item = self.items.next()?;
        self.gap_pending = self.items.peek().is_some();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.items.size_hint();
        let pending = usize::from(self.gap_pending);
        let joined = |n: usize| n.saturating_mul(2).saturating_sub(1);
        (
            joined(lower).saturating_add(pending),
            upper.and_then(|n| n.checked_mul(2)).map(|n| n.saturating_sub(1) + pending),
        )
    }
}

impl<I, F> FusedIterator for Join<I, F>
where
    I: FusedIterator,
    F: FnMut() -> I::Item,
{
}

/// Yields every item with a clone of `separator` between every two of them.
///
/// ```
/// let joined: Vec<_> = markyp::join(["a", "b", "c"], "-").collect();
/// assert_eq!(joined, ["a", "-", "b", "-", "c"]);
/// ```
pub fn join<I>(items: I, separator: I::Item) -> Join<I::IntoIter, impl FnMut() -> I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    join_with(items, move || separator.clone())
}

/// Yields every item with a freshly produced separator between every two of
/// them.
///
/// `separator` is called exactly once per gap, so `n` items call it `n - 1`
/// times and zero or one item never call it.
pub fn join_with<I, F>(items: I, separator: F) -> Join<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut() -> I::Item,
{
    Join {
        items: items.into_iter().peekable(),
        separator,
        gap_pending: false,
    }
}

/// Collects [`join`] into a vector.
pub fn join_elements<I>(items: I, separator: I::Item) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    join(items, separator).collect()
}
