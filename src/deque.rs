use std::fmt;
use std::mem;
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};
use tracing::trace;

use crate::error::Error;
use crate::heap;
use crate::options::Options;
use crate::select;

/// A double-ended priority queue that keeps at most `limit` elements.
///
/// Both the smallest and the greatest element are available in constant
/// time. Once the deque is full, inserting an element evicts the current
/// greatest one if the newcomer ranks strictly below it, and is rejected
/// otherwise, so the deque always holds the best `limit` elements it has
/// been offered.
///
/// Iteration visits elements in heap order, which is not sorted.
#[derive(Clone)]
pub struct PriorityDeque<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    limit: Option<usize>,
    cmp: C,
}

impl<T: Ord> PriorityDeque<T> {
    /// Unbounded deque in the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Deque in the natural order of `T` keeping at most `limit` elements.
    pub fn with_limit(limit: usize) -> Self {
        Self::with_limit_and_comparator(limit, natural())
    }
}

impl<T, C: Compare<T>> PriorityDeque<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            limit: None,
            cmp,
        }
    }

    pub fn with_limit_and_comparator(limit: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(limit.min(1024)),
            limit: Some(limit),
            cmp,
        }
    }

    pub fn from_options(options: Options<T, C>) -> Self {
        options.build()
    }

    /// Builds a deque from `data` in linear time, keeping only the `limit`
    /// smallest elements when there are more.
    pub(crate) fn from_parts(mut data: Vec<T>, limit: Option<usize>, cmp: C) -> Self {
        Self::load(&mut data, limit, &cmp);
        let deque = Self { data, limit, cmp };
        debug_assert!(deque.validate().is_ok());
        deque
    }

    fn load(data: &mut Vec<T>, limit: Option<usize>, cmp: &C) {
        if let Some(limit) = limit {
            if data.len() > limit {
                trace!(input = data.len(), limit, "trimming bulk input to its best elements");
                select::select_smallest(data, limit, cmp);
            }
        }
        heap::heapify(data, cmp);
    }

    /// Replaces the whole content with the best elements of `items`.
    #[tracing::instrument(skip_all)]
    pub fn set<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let mut data: Vec<T> = items.into_iter().collect();
        Self::load(&mut data, self.limit, &self.cmp);
        self.data = data;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The maximum number of retained elements, `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.bound()
    }

    fn bound(&self) -> usize {
        self.limit.unwrap_or(usize::MAX)
    }

    pub fn clear(&mut self) {
        trace!(len = self.data.len(), "clearing deque");
        self.data.clear();
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn peek_max(&self) -> Option<&T> {
        self.data.get(heap::max_index(&self.data, &self.cmp))
    }

    /// Inserts `item`, returning the element that is no longer held: the
    /// evicted greatest element, or `item` itself if it was rejected.
    ///
    /// ```
    /// use priority_deque::PriorityDeque;
    ///
    /// let mut deque = PriorityDeque::with_limit(2);
    /// assert_eq!(None, deque.push(5));
    /// assert_eq!(None, deque.push(3));
    /// assert_eq!(Some(5), deque.push(1));
    /// assert_eq!(Some(4), deque.push(4));
    /// assert_eq!(Some(&3), deque.peek_max());
    /// ```
    pub fn push(&mut self, item: T) -> Option<T> {
        let bound = self.bound();
        if self.data.len() < bound {
            self.grow(item);
            return None;
        }
        if bound == 0 {
            return Some(item);
        }
        let worst = heap::max_index(&self.data, &self.cmp);
        if !self.cmp.compares_lt(&item, &self.data[worst]) {
            return Some(item);
        }
        Some(self.evict(worst, item))
    }

    /// Offers every element of `items` in turn, keeping the best ones.
    pub fn append<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let bound = self.bound();
        if bound == 0 {
            return;
        }
        let mut items = items.into_iter();
        while self.data.len() < bound {
            match items.next() {
                Some(item) => self.grow(item),
                None => return,
            }
        }

        let mut worst = heap::max_index(&self.data, &self.cmp);
        for item in items {
            if self.cmp.compares_lt(&item, &self.data[worst]) {
                self.evict(worst, item);
                worst = heap::max_index(&self.data, &self.cmp);
            }
        }
    }

    fn grow(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        if last > 0 {
            heap::bubble_up(&mut self.data, last, &self.cmp);
        }
    }

    fn evict(&mut self, worst: usize, item: T) -> T {
        let evicted = mem::replace(&mut self.data[worst], item);
        if self.data.len() > 1 {
            heap::reposition(&mut self.data, worst, &self.cmp);
        }
        trace!(len = self.data.len(), "evicted greatest element");
        evicted
    }

    pub fn pop_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    pub fn pop_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let i = heap::max_index(&self.data, &self.cmp);
        Some(self.remove_at(i))
    }

    fn remove_at(&mut self, i: usize) -> T {
        let item = self.data.swap_remove(i);
        if i < self.data.len() {
            heap::reposition(&mut self.data, i, &self.cmp);
        }
        item
    }

    /// Swaps `item` in for the smallest element and returns the latter.
    ///
    /// An empty deque takes `item` as its only element and returns `None`;
    /// a deque limited to zero drops `item` and returns `None`.
    pub fn replace_min(&mut self, item: T) -> Option<T> {
        if self.bound() == 0 {
            return None;
        }
        if self.data.is_empty() {
            self.data.push(item);
            return None;
        }
        let min = mem::replace(&mut self.data[0], item);
        heap::trickle_down(&mut self.data, 0, &self.cmp);
        Some(min)
    }

    /// Swaps `item` in for the greatest element and returns the latter,
    /// with the same empty and zero-limit behavior as [`Self::replace_min`].
    pub fn replace_max(&mut self, item: T) -> Option<T> {
        if self.bound() == 0 {
            return None;
        }
        if self.data.is_empty() {
            self.data.push(item);
            return None;
        }
        let i = heap::max_index(&self.data, &self.cmp);
        let max = mem::replace(&mut self.data[i], item);
        heap::reposition(&mut self.data, i, &self.cmp);
        Some(max)
    }

    /// New deque with the same limit holding `f` applied to every element,
    /// ordered by `cmp`.
    #[tracing::instrument(skip_all)]
    pub fn map<U, D, F>(&self, f: F, cmp: D) -> PriorityDeque<U, D>
    where
        D: Compare<U>,
        F: FnMut(&T) -> U,
    {
        PriorityDeque::from_parts(self.data.iter().map(f).collect(), self.limit, cmp)
    }

    /// New deque with the same limit and comparator holding the elements
    /// that satisfy `f`.
    #[tracing::instrument(skip_all)]
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        T: Clone,
        C: Clone,
        F: FnMut(&T) -> bool,
    {
        let data = self.data.iter().filter(|item| f(*item)).cloned().collect();
        Self::from_parts(data, self.limit, self.cmp.clone())
    }

    /// New deque with the same limit holding everything `f` yields for each
    /// element, ordered by `cmp`. Only the best `limit` of them are kept.
    #[tracing::instrument(skip_all)]
    pub fn flat_map<U, D, I, F>(&self, f: F, cmp: D) -> PriorityDeque<U, D>
    where
        D: Compare<U>,
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        PriorityDeque::from_parts(self.data.iter().flat_map(f).collect(), self.limit, cmp)
    }

    /// Visits the elements in heap order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn any<F: FnMut(&T) -> bool>(&self, f: F) -> bool {
        self.data.iter().any(f)
    }

    pub fn all<F: FnMut(&T) -> bool>(&self, f: F) -> bool {
        self.data.iter().all(f)
    }

    pub fn find<F: FnMut(&T) -> bool>(&self, mut f: F) -> Option<&T> {
        self.data.iter().find(|item| f(*item))
    }

    pub fn for_each<F: FnMut(&T)>(&self, f: F) {
        self.data.iter().for_each(f)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the deque, returning its elements smallest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Verifies the limit and the min-max ordering of every element.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(limit) = self.limit {
            if self.data.len() > limit {
                return Err(Error::OverLimit {
                    len: self.data.len(),
                    limit,
                });
            }
        }
        heap::check(&self.data, &self.cmp)
    }
}

impl<T: PartialEq, C: Compare<T>> PriorityDeque<T, C> {
    pub fn contains(&self, item: &T) -> bool {
        self.data.contains(item)
    }

    /// Removes the first element equal to `item`.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let i = self.data.iter().position(|x| x == item)?;
        Some(self.remove_at(i))
    }

    /// Overwrites the first element equal to `old` with `new`, returning the
    /// overwritten element. `new` is dropped when nothing matches.
    pub fn replace(&mut self, old: &T, new: T) -> Option<T> {
        let i = self.data.iter().position(|x| x == old)?;
        let replaced = mem::replace(&mut self.data[i], new);
        heap::reposition(&mut self.data, i, &self.cmp);
        Some(replaced)
    }
}

impl<T, C: Compare<T> + Default> Default for PriorityDeque<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for PriorityDeque<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Compare<T>> From<Options<T, C>> for PriorityDeque<T, C> {
    fn from(options: Options<T, C>) -> Self {
        options.build()
    }
}

impl<T: Ord> FromIterator<T> for PriorityDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_parts(iter.into_iter().collect(), None, natural())
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityDeque<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T, C: Compare<T>> IntoIterator for PriorityDeque<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a PriorityDeque<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
