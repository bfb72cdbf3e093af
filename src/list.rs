use std::fmt;

use log::{debug, trace};

use crate::error::{Error, OutOfRange, Result};
use crate::iter::{Iter, IterMut};

pub struct LinkedList<T> {
    head: Link<T>,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) elem: T,
    pub(crate) next: Link<T>,
}

// Negative indices are rejected, never wrapped.
fn position(index: isize) -> Result<usize> {
    usize::try_from(index).map_err(|_| {
        debug!("rejected negative index {}", index);
        Error::InvalidArgument(index)
    })
}

fn out_of_range(pos: usize) -> Error {
    debug!("no node at index {}", pos);
    Error::OutOfRange(OutOfRange::Index(pos))
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None }
    }

    /// A list holding a single node.
    pub fn from_head(elem: T) -> Self {
        LinkedList {
            head: Some(Box::new(Node { elem, next: None })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the nodes by walking the whole chain. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.elem)
    }

    pub fn head_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.elem)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head)
    }

    fn node(&self, pos: usize) -> Option<&Node<T>> {
        let mut cur = self.head.as_deref();
        for _ in 0..pos {
            cur = cur?.next.as_deref();
        }
        cur
    }

    fn node_mut(&mut self, pos: usize) -> Option<&mut Node<T>> {
        let mut cur = self.head.as_deref_mut();
        for _ in 0..pos {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }

    // The `next` slot of the last node, or `head` when empty.
    pub(crate) fn tail_link(&mut self) -> &mut Link<T> {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        cur
    }

    /// O(n).
    pub fn get(&self, index: isize) -> Result<&T> {
        let pos = position(index)?;
        self.node(pos)
            .map(|node| &node.elem)
            .ok_or_else(|| out_of_range(pos))
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let pos = position(index)?;
        self.node_mut(pos)
            .map(|node| &mut node.elem)
            .ok_or_else(|| out_of_range(pos))
    }

    /// Overwrites the value in place; the node itself is kept. O(n).
    pub fn set(&mut self, index: isize, elem: T) -> Result<()> {
        *self.get_mut(index)? = elem;
        Ok(())
    }

    pub fn push_front(&mut self, elem: T) {
        let new_node = Box::new(Node {
            elem,
            next: self.head.take(),
        });

        self.head = Some(new_node);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            node.elem
        })
    }

    /// Inserts `elem` so that it ends up at `index`.
    ///
    /// O(1) when `index` is 0, O(n) otherwise. `index == len()` is valid
    /// and inserts at the end.
    pub fn insert_before(&mut self, index: isize, elem: T) -> Result<()> {
        let pos = position(index)?;
        if pos == 0 {
            trace!("insert_before: new head");
            self.push_front(elem);
            return Ok(());
        }

        let prev = self.node_mut(pos - 1).ok_or_else(|| out_of_range(pos))?;
        let next = prev.next.take();
        prev.next = Some(Box::new(Node { elem, next }));
        trace!("insert_before: spliced at {}", pos);
        Ok(())
    }

    /// Removes and returns the value at `index`.
    ///
    /// O(1) when `index` is 0, O(n) otherwise.
    pub fn pop(&mut self, index: isize) -> Result<T> {
        let pos = position(index)?;
        if pos == 0 {
            trace!("pop: detaching head");
            return self.pop_front().ok_or_else(|| {
                debug!("pop from empty list");
                Error::from(OutOfRange::PopFromEmpty)
            });
        }

        let prev = self.node_mut(pos - 1).ok_or_else(|| out_of_range(pos))?;
        let target = prev.next.take().ok_or_else(|| out_of_range(pos))?;
        prev.next = target.next;
        trace!("pop: unlinked index {}", pos);
        Ok(target.elem)
    }

    /// Position of the first value equal to `elem`.
    ///
    /// Indexed methods take `isize`, so the result needs `as isize` before
    /// it is passed back to `get`, `set` or `pop`.
    pub fn index_of(&self, elem: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == elem).ok_or_else(|| {
            debug!("index_of: no matching value");
            Error::NotFound
        })
    }

    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == elem)
    }

    /// Walks to the tail and links a new node after it. O(n).
    pub fn append(&mut self, elem: T) {
        *self.tail_link() = Some(Box::new(Node { elem, next: None }));
    }

    /// Reverses the links in place with O(1) extra space.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }

        self.head = prev;
        trace!("reverse: done");
    }

    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

// Unlinks node by node so a long chain is not dropped recursively.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_link();
        for elem in iter {
            tail = &mut tail.insert(Box::new(Node { elem, next: None })).next;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "]")
    }
}
