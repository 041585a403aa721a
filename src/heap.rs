//! Slice-level maintenance of the min-max heap property.
//!
//! A min-max heap is a complete binary tree stored in a slice, node `i`
//! having children `2i + 1` and `2i + 2`. Nodes on even depths (the root
//! included) are no greater than any of their descendants, nodes on odd
//! depths are no smaller. The minimum therefore sits at index 0 and the
//! maximum at index 1 or 2.

use std::cmp::Ordering;
use std::fmt;

use compare::Compare;

use crate::error::Error;

/// The band a node belongs to, derived from its depth.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Level {
    Min,
    Max,
}

impl Level {
    pub fn of(index: usize) -> Self {
        if (index + 1).ilog2() & 1 == 0 {
            Level::Min
        } else {
            Level::Max
        }
    }

    /// The ordering a node on this level holds against its descendants.
    pub fn ordering(self) -> Ordering {
        match self {
            Level::Min => Ordering::Less,
            Level::Max => Ordering::Greater,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Level::Min => write!(f, "min"),
            Level::Max => write!(f, "max"),
        }
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) >> 1
}

#[inline]
fn grandparent(i: usize) -> usize {
    (i - 3) >> 2
}

/// Index of the most extreme node under `ord` among the children and
/// grandchildren of `i`, or `None` for a leaf. Ties keep the lower index.
fn extremal_descendant<T, C: Compare<T>>(
    data: &[T],
    i: usize,
    ord: Ordering,
    cmp: &C,
) -> Option<usize> {
    let first = 2 * i + 1;
    if first >= data.len() {
        return None;
    }
    let mut m = first;
    let rest = [first + 1, 4 * i + 3, 4 * i + 4, 4 * i + 5, 4 * i + 6];
    for j in rest.into_iter().take_while(|&j| j < data.len()) {
        if cmp.compare(&data[j], &data[m]) == ord {
            m = j;
        }
    }
    Some(m)
}

/// Sinks the element at `i` until the subtree rooted there is a valid
/// min-max heap. Everything below `i` must already be valid.
pub fn trickle_down<T, C: Compare<T>>(data: &mut [T], mut i: usize, cmp: &C) {
    let ord = Level::of(i).ordering();
    while let Some(m) = extremal_descendant(data, i, ord, cmp) {
        if cmp.compare(&data[m], &data[i]) != ord {
            return;
        }
        data.swap(i, m);
        // a child picked over every grandchild has nothing left below it to fix
        if m <= 2 * i + 2 {
            return;
        }
        let p = parent(m);
        if cmp.compare(&data[p], &data[m]) == ord {
            data.swap(p, m);
        }
        i = m;
    }
}

/// Lifts the element at `i` towards the root, first across the band
/// boundary with its parent, then along its grandparents. Returns whether
/// anything moved.
pub fn bubble_up<T, C: Compare<T>>(data: &mut [T], mut i: usize, cmp: &C) -> bool {
    if i == 0 {
        return false;
    }
    let mut ord = Level::of(i).ordering();
    let mut moved = false;

    let p = parent(i);
    if cmp.compare(&data[i], &data[p]) == ord.reverse() {
        data.swap(i, p);
        i = p;
        ord = ord.reverse();
        moved = true;
    }

    while i >= 3 {
        let g = grandparent(i);
        if cmp.compare(&data[i], &data[g]) != ord {
            break;
        }
        data.swap(i, g);
        i = g;
        moved = true;
    }
    moved
}

/// Restores the heap after the element at `i` was overwritten with an
/// arbitrary value.
///
/// The upward pass runs first. When it swaps `i` with its parent, the
/// parent's old value lands in `i` on the wrong band for `i`'s subtree, so
/// the downward pass always follows; it stops after one comparison when the
/// slot is already in order.
pub fn reposition<T, C: Compare<T>>(data: &mut [T], i: usize, cmp: &C) -> bool {
    let moved = bubble_up(data, i, cmp);
    trickle_down(data, i, cmp);
    moved
}

/// Bottom-up heap construction in linear time.
pub fn heapify<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    let len = data.len();
    if len < 2 {
        return;
    }
    for i in (0..=parent(len - 1)).rev() {
        trickle_down(data, i, cmp);
    }
}

/// Index of the greatest element of a valid heap; 0 when empty.
pub fn max_index<T, C: Compare<T>>(data: &[T], cmp: &C) -> usize {
    match data.len() {
        0 | 1 => 0,
        2 => 1,
        _ => {
            if cmp.compares_lt(&data[1], &data[2]) {
                2
            } else {
                1
            }
        }
    }
}

/// Checks every node against its parent and grandparent, which by
/// transitivity covers every ancestor.
pub fn check<T, C: Compare<T>>(data: &[T], cmp: &C) -> Result<(), Error> {
    for index in 1..data.len() {
        let mut ancestors = [Some(parent(index)), None];
        if index >= 3 {
            ancestors[1] = Some(grandparent(index));
        }
        for ancestor in ancestors.into_iter().flatten() {
            let level = Level::of(ancestor);
            if cmp.compare(&data[index], &data[ancestor]) == level.ordering() {
                return Err(Error::OutOfOrder {
                    index,
                    ancestor,
                    level,
                });
            }
        }
    }
    Ok(())
}
