//! Module for testing using fuzzing (quickcheck)

use std::{collections::BTreeSet, fmt::Debug};

use crate::*;
use quickcheck::Arbitrary;

mod traversals;

#[derive(Debug, PartialEq, Clone, Copy)]
enum Operation {
    Add(TestKey),
    Remove(TestKey),
}

#[cfg(miri)]
const DEFAULT_NUM_TESTS: usize = 10;
#[cfg(not(miri))]
const DEFAULT_NUM_TESTS: usize = 10000;
const DEFAULT_GEN_SIZE: usize = 100;

fn proptest_runner<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F) {
    let num_tests: usize = std::env::var("QUICKCHECK_TESTS")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_NUM_TESTS);

    let gen_size: usize = std::env::var("QUICKCHECK_GENERATOR_SIZE")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_GEN_SIZE);

    let mut gen = quickcheck::Gen::new(gen_size);

    // sample all inputs
    for _ in 0..num_tests {
        let input = A::arbitrary(&mut gen);
        let input_c = input.clone();
        let success = f(input_c);
        if !success {
            shrink_failure(f, input)
        }
    }
}

fn shrink_failure<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F, input: A) -> ! {
    for i in input.shrink() {
        let i_c = i.clone();
        let success = f(i_c);
        if !success {
            shrink_failure(f, i)
        }
    }
    // if we reach this point, then all shrunken inputs work. Therefore, `inputs` is the minimal
    // input
    panic!(
        "[QUICKCHECK] Test case failed!\n  Minimal input:\n    {:?}",
        input
    );
}

#[allow(missing_docs)]
#[macro_export]
macro_rules! qc {
    ($name:ident, $f:ident) => {
        #[test]
        fn $name() {
            proptest_runner($f)
        }
    };
}

/// Apply all operations both to a trie and to the model.
fn apply(ops: &[Operation]) -> (Ipv4Trie, BTreeSet<u32>) {
    let mut trie = Ipv4Trie::new();
    let mut model = BTreeSet::new();
    for op in ops {
        match *op {
            Operation::Add(k) => {
                assert_eq!(trie.insert(k.0), model.insert(k.0));
            }
            Operation::Remove(k) => {
                assert_eq!(trie.remove(k.0), model.remove(&k.0));
            }
        }
    }
    (trie, model)
}

impl Arbitrary for Ipv4Trie {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        <Vec<TestKey> as Arbitrary>::arbitrary(g)
            .into_iter()
            .map(|k| k.0)
            .collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let elems = self.iter().map(TestKey).collect::<Vec<_>>();
        let shrinked = elems.shrink();
        Box::new(shrinked.map(|keys| Ipv4Trie::from_iter(keys.into_iter().map(|k| k.0))))
    }
}

impl Arbitrary for Operation {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let k = TestKey::arbitrary(g);
        if g.choose(&[
            true, true, true, true, true, true, true, false, false, false,
        ])
        .copied()
        .unwrap_or_default()
        {
            Self::Add(k)
        } else {
            Self::Remove(k)
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Operation::Add(k) => Box::new(k.shrink().map(Operation::Add)),
            Operation::Remove(k) => Box::new(k.shrink().map(Operation::Remove)),
        }
    }
}

/// A key drawn from a small pool of networks, such that random operations frequently hit keys
/// that are present and share long paths in the trie.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
struct TestKey(u32);

impl Debug for TestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DottedQuad(self.0))
    }
}

impl Arbitrary for TestKey {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        #[rustfmt::skip]
        let base: u32 = *g
            .choose(&[
                0x0000_0000,
                0x0a00_0000, 0x0a00_0000, 0x0a00_0000,
                0x0a08_0200,
                0x8c00_0000,
                0xc0a8_0100, 0xc0a8_0100,
                0xffff_ff00,
            ])
            .unwrap();
        let host = u8::arbitrary(g) as u32;
        if bool::arbitrary(g) {
            Self(base | (host & 0x0f))
        } else {
            Self(u32::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(TestKey))
    }
}
