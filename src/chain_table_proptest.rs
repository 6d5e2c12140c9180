#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they can walk the
// chains directly through `check_invariants`.

use crate::chain_table::ChainTable;
use crate::hash::{bucket_index, djb2};
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Absent(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    // Short keys over a tiny alphabet collide often at small capacities.
    proptest::collection::vec("[a-d]{0,4}", 1..=48).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => "[e-z]{1,3}".prop_map(OpI::Absent),
        ];
        proptest::collection::vec(op, 1..200).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Insert of a present key returns the previous value and keeps `len`.
// - `remove` returns exactly the model's value; absent keys are a no-op.
// - Capacity is a power of two, never shrinks, and only ever doubles.
// - After every op each entry sits in `djb2(key) % capacity`, chains are
//   acyclic, every entry is reachable, and no key appears twice.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ChainTable<i32> = ChainTable::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            let cap_before = sut.capacity();
            match op {
                OpI::Insert(i, v) => {
                    let k = &pool[i];
                    let prev = sut.insert(k, v).expect("small inserts do not fail");
                    prop_assert_eq!(prev, model.insert(k.clone(), v));
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    let got = sut.remove(k);
                    let want = model.remove(k);
                    prop_assert_eq!(got.map(|(kk, vv)| (kk.into_string(), vv)), want.map(|v| (k.clone(), v)));
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Absent(s) => {
                    prop_assert!(sut.get(&s).is_none());
                    prop_assert!(sut.remove(&s).is_none());
                }
            }

            let cap = sut.capacity();
            prop_assert!(cap == cap_before || cap == cap_before * 2);
            prop_assert_eq!(sut.len(), model.len());
            sut.check_invariants();
        }

        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
            prop_assert_eq!(sut.bucket_of(k), bucket_index(djb2(k.as_bytes()), sut.capacity()));
        }
    }
}
