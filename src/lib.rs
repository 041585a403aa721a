//! A bounded double-ended priority queue backed by a min-max heap.
//!
//! [`PriorityDeque`] gives constant-time access to both its smallest and
//! greatest element and logarithmic insertion and removal at either end. An
//! optional limit turns it into a "best `k`" collector: once full, it only
//! accepts elements that rank strictly below its current greatest one.
//!
//! ```
//! use priority_deque::PriorityDeque;
//!
//! let mut deque = PriorityDeque::with_limit(3);
//! deque.extend([7, 3, 9, 1, 8]);
//! assert_eq!(Some(&1), deque.peek_min());
//! assert_eq!(Some(&7), deque.peek_max());
//! assert_eq!(Some(7), deque.pop_max());
//! assert_eq!(Some(1), deque.pop_min());
//! ```

pub mod deque;
pub mod error;
pub mod heap;
pub mod options;
pub mod select;

pub use deque::PriorityDeque;
pub use error::Error;
pub use options::Options;
