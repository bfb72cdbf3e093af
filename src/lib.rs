//! A singly linked list with indexed access, built from owned `Box` links.

mod error;
mod iter;
mod list;
#[cfg(feature = "serde")]
mod serde;

pub use error::{Error, OutOfRange, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;
