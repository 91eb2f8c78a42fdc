use std::fmt;

/// The errors a tree can report to its caller. Structural problems inside
/// the tree are programmer errors and surface as panics, not as variants
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested order cannot form a valid tree; it must be at least 3.
    InvalidOrder(usize),
    /// The key handed to `remove` is not in the tree.
    NotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidOrder(d) => {
                write!(f, "invalid order {}: a B+ tree needs an order of at least 3", d)
            }
            Error::NotFound => write!(f, "key not found"),
        }
    }
}

impl std::error::Error for Error {}
