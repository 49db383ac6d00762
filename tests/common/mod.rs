use proptest::prelude::*;

#[allow(dead_code)]
pub(super) fn assert_eq_iters<I: Iterator, J: Iterator<Item = I::Item>>(
    mut i: I,
    mut j: J,
) where
    I::Item: std::fmt::Debug + Eq, // same inferred for J::Item
{
    loop {
        match (i.next(), j.next()) {
            (None, None) => return,
            (a, b) => assert_eq!(a, b),
        }
    }
}

pub(super) type U16Seq = Vec<u16>;

pub(super) fn small_int_seq() -> impl Strategy<Value = U16Seq> {
    prop::collection::vec(0u16..1024u16, 0..512)
}

/// An operation applied to a tree and to a reference set in lockstep.
#[derive(Clone, Debug)]
pub(super) enum Op {
    Insert(u16),
    Erase(u16),
    PopFirst,
    PopLast,
}

#[allow(dead_code)]
pub(super) fn ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => (0u16..256).prop_map(Op::Insert),
        3 => (0u16..256).prop_map(Op::Erase),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
    ];
    prop::collection::vec(op, 0..768)
}
