use compare::{natural, Compare, Natural};

use crate::deque::PriorityDeque;

/// Construction settings for a [`PriorityDeque`].
///
/// ```
/// use priority_deque::Options;
///
/// let deque = Options::new().limit(3).items([8, 2, 6, 4, 9]).build();
/// assert_eq!(vec![2, 4, 6], deque.into_sorted_vec());
/// ```
#[derive(Debug, Clone)]
pub struct Options<T, C = Natural<T>> {
    compare: C,
    limit: Option<usize>,
    items: Vec<T>,
}

impl<T: Ord> Options<T> {
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }
}

impl<T: Ord> Default for Options<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Options<T, C> {
    pub fn with_comparator(compare: C) -> Self {
        Self {
            compare,
            limit: None,
            items: Vec::new(),
        }
    }

    /// Keep at most `limit` elements.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Elements to bulk-load at construction; repeated calls accumulate.
    pub fn items<I: IntoIterator<Item = T>>(mut self, items: I) -> Self {
        self.items.extend(items);
        self
    }

    /// Orders the deque by `compare` instead.
    pub fn compare<D>(self, compare: D) -> Options<T, D> {
        Options {
            compare,
            limit: self.limit,
            items: self.items,
        }
    }
}

impl<T, C: Compare<T>> Options<T, C> {
    pub fn build(self) -> PriorityDeque<T, C> {
        PriorityDeque::from_parts(self.items, self.limit, self.compare)
    }
}

#[cfg(test)]
mod test {
    use super::Options;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_to_unbounded_and_empty() {
        let deque = Options::<u8>::default().build();
        assert!(deque.is_empty());
        assert_eq!(None, deque.limit());
    }

    #[test]
    fn test_items_accumulate_before_trimming() {
        let deque = Options::new()
            .items([5, 9])
            .items(vec![1, 7])
            .limit(3)
            .build();
        deque.validate().unwrap();
        assert_eq!(Some(3), deque.limit());
        assert_eq!(vec![1, 5, 7], deque.into_sorted_vec());
    }

    #[test]
    fn test_unbounded_overrides_limit() {
        let deque = Options::new().limit(1).unbounded().items(0..10).build();
        assert_eq!(10, deque.len());
        assert_eq!(Some(&9), deque.peek_max());
    }
}
