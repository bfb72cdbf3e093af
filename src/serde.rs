//! Sequence (de)serialization, enabled by the `serde` feature.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::list::{LinkedList, Node};

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = LinkedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    // Each element is linked at the tail as it arrives.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut list = LinkedList::new();
        let mut tail = list.tail_link();
        while let Some(elem) = seq.next_element()? {
            tail = &mut tail.insert(Box::new(Node { elem, next: None })).next;
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    #[test]
    fn test_serialize_as_sequence() {
        let list: LinkedList<i32> = (1..=3).collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
        assert_eq!(
            serde_json::to_string(&LinkedList::<i32>::new()).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let list: LinkedList<String> = serde_json::from_str(r#"["x","y","z"]"#).unwrap();
        assert_eq!(list.head(), Some(&"x".to_string()));
        assert_eq!(list.get(2), Ok(&"z".to_string()));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_deserialize_empty_and_rejects_non_sequence() {
        let list: LinkedList<i32> = serde_json::from_str("[]").unwrap();
        assert!(list.is_empty());

        assert!(serde_json::from_str::<LinkedList<i32>>(r#"{"a":1}"#).is_err());
    }
}
