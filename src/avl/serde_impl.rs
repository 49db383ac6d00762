use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use super::AvlTree;
use crate::compare::Compare;

// Trees travel as a sequence of their elements in ascending order.
impl<T: Serialize, C> Serialize for AvlTree<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct SeqVisitor<T, C> {
    marker: PhantomData<fn() -> AvlTree<T, C>>,
}

impl<'de, T, C> Visitor<'de> for SeqVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    type Value = AvlTree<T, C>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of tree elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = AvlTree::with_comparator(C::default());
        while let Some(elt) = seq.next_element()? {
            tree.insert(elt);
        }
        Ok(tree)
    }
}

impl<'de, T, C> Deserialize<'de> for AvlTree<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor {
            marker: PhantomData,
        })
    }
}
