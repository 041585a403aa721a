use thiserror::Error;

use crate::heap::Level;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    #[error("element at {index} breaks the {level}-level order of its ancestor at {ancestor}")]
    OutOfOrder {
        index: usize,
        ancestor: usize,
        level: Level,
    },

    #[error("deque holds {len} elements but is limited to {limit}")]
    OverLimit { len: usize, limit: usize },
}
