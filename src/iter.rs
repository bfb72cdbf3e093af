use crate::list::{LinkedList, Link, Node};

/// Borrowing iterator, head to tail. Each call to `iter()` starts over.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: &'a Link<T>) -> Self {
        Iter {
            next: head.as_deref(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.elem
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: &'a mut Link<T>) -> Self {
        IterMut {
            next: head.as_deref_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // `&mut` is not Copy, so the slot has to be emptied first
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.elem
        })
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    #[test]
    fn iter() {
        let list: LinkedList<i32> = vec![1, 2, 3].into_iter().collect();

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_is_restartable() {
        let list: LinkedList<i32> = (1..=4).collect();

        let mut partial = list.iter();
        assert_eq!(partial.next(), Some(&1));
        assert_eq!(partial.next(), Some(&2));

        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3, &4]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn iter_empty() {
        let list = LinkedList::<String>::new();
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn iter_mut() {
        let mut list: LinkedList<i32> = (1..=3).collect();

        for elem in list.iter_mut() {
            *elem *= 2;
        }
        for elem in &mut list {
            *elem += 1;
        }

        assert_eq!((&list).into_iter().copied().collect::<Vec<_>>(), vec![3, 5, 7]);
    }

    #[test]
    fn into_iter() {
        let list: LinkedList<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some("a".to_string()));
        assert_eq!(iter.next(), Some("b".to_string()));
        assert_eq!(iter.next(), Some("c".to_string()));
        assert_eq!(iter.next(), None);
    }
}
