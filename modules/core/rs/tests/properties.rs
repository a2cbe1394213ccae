use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use eyre::Result;
use itertools::Itertools;

use lazyview_core_rs::{all, drop, filter, keys, pipe, reverse, take, transform, values, Container};

fn sequences() -> Vec<Vec<i32>> {
    vec![
        vec![],
        vec![7],
        vec![3, 2, 4],
        vec![1, 2, 3, 4, 5, 6, 7, 8],
        vec![-5, 0, 5, 10, -10, 3, 3, 3],
    ]
}

#[test]
fn filter_yields_matching_subsequence() {
    for seq in sequences() {
        let even = |x: &&i32| **x % 2 == 0;
        let expected = seq.iter().filter(even).collect_vec();
        assert_eq!(filter(&seq, even).iter().collect_vec(), expected);
        assert_eq!(
            filter(&seq, |_: &&i32| true).iter().collect_vec(),
            seq.iter().collect_vec()
        );
    }
}

#[test]
fn take_yields_prefix() {
    for seq in sequences() {
        for count in 0..=seq.len() + 2 {
            let expected = seq[..count.min(seq.len())].iter().collect_vec();
            assert_eq!(take(&seq, count).iter().collect_vec(), expected);
        }
        assert!(take(&seq, 0).is_empty());
        assert_eq!(take(&seq, seq.len()).iter().collect_vec(), seq.iter().collect_vec());
    }
}

#[test]
fn drop_yields_suffix() {
    for seq in sequences() {
        for count in 0..=seq.len() + 2 {
            let expected = seq[count.min(seq.len())..].iter().collect_vec();
            assert_eq!(drop(&seq, count).iter().collect_vec(), expected);
            assert_eq!(drop(&seq, count).len(), seq.len() - count.min(seq.len()));
        }
        assert!(drop(&seq, seq.len()).is_empty());
    }
}

#[test]
fn transform_preserves_length() {
    for seq in sequences() {
        let view = transform(&seq, |x: &i32| i64::from(*x) * 3);
        assert_eq!(view.len(), seq.len());
        for (i, x) in seq.iter().enumerate() {
            assert_eq!(view.at(i).unwrap(), i64::from(*x) * 3);
        }
    }
}

#[test]
fn keys_and_values_zip_back_into_pairs() {
    let map = BTreeMap::from([(5, 'e'), (1, 'a'), (3, 'c')]);
    let pairs = keys(&map).iter().zip_eq(values(&map).iter()).collect_vec();
    assert_eq!(pairs, map.iter().collect_vec());

    let hashed: HashMap<_, _> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(keys(&hashed).len(), hashed.len());
    assert_eq!(values(&hashed).len(), hashed.len());
    for (key, value) in keys(&hashed).iter().zip_eq(values(&hashed).iter()) {
        assert_eq!(hashed[key], *value);
    }
}

#[test]
fn reverse_twice_is_identity() {
    for seq in sequences() {
        assert_eq!(reverse(&seq).len(), seq.len());
        assert_eq!(
            reverse(&seq).iter().collect_vec(),
            seq.iter().rev().collect_vec()
        );
        assert_eq!(
            reverse(reverse(&seq)).iter().collect_vec(),
            seq.iter().collect_vec()
        );
    }
}

#[test]
fn composition_order_matters() {
    let seq = vec![3, 2, 4];
    let pairs = &seq
        | pipe::take(3)
        | pipe::transform(|x: &i32| (*x, *x))
        | pipe::reverse();
    assert_eq!(pairs.iter().collect_vec(), [(4, 4), (2, 2), (3, 3)]);

    let seq = vec![1, 2, 3, 4, 5];
    let head = &seq | pipe::take(3) | pipe::reverse();
    let tail = &seq | pipe::reverse() | pipe::take(3);
    assert_eq!(head.iter().copied().collect_vec(), [3, 2, 1]);
    assert_eq!(tail.iter().copied().collect_vec(), [5, 4, 3]);
}

#[test]
fn long_pipeline() {
    let seq = (1..=20).collect_vec();
    let view = &seq
        | pipe::reverse()
        | pipe::filter(|x: &&i32| **x % 2 == 0)
        | pipe::take(4)
        | pipe::transform(|x: &i32| x * x)
        | pipe::drop(2)
        | pipe::reverse();
    assert_eq!(view.iter().collect_vec(), [196, 256]);
}

#[test]
fn empty_base_gives_empty_views() {
    let empty: Vec<(u8, u8)> = Vec::new();
    assert!((&empty | pipe::filter(|_: &&(u8, u8)| true)).is_empty());
    assert!((&empty | pipe::take(2)).is_empty());
    assert!((&empty | pipe::drop(2)).is_empty());
    assert!((&empty | pipe::transform(|p: &(u8, u8)| p.1)).is_empty());
    assert!((&empty | pipe::keys()).is_empty());
    assert!((&empty | pipe::values()).is_empty());
    assert!((&empty | pipe::reverse()).is_empty());
    assert!(all(&empty).is_empty());
}

#[test]
fn views_do_not_consume_the_base() {
    let seq = vec![String::from("a"), String::from("bb"), String::from("ccc")];
    let view = &seq
        | pipe::filter(|s: &&String| s.len() > 1)
        | pipe::transform(|s: &String| s.len());

    let first = view.iter().collect_vec();
    let second = view.iter().collect_vec();
    assert_eq!(first, [2, 3]);
    assert_eq!(first, second);
    assert_eq!(seq.len(), 3);
}

#[test]
fn checked_access() -> Result<()> {
    let seq = vec![10, 20, 30, 40];
    let view = &seq | pipe::drop(1) | pipe::reverse();
    assert_eq!(*view.at(0)?, 40);
    assert_eq!(*view.at(2)?, 20);
    assert!(view.at(3).is_err());
    Ok(())
}

#[test]
fn every_std_collection_is_viewable() {
    let vec = vec![1, 2, 3];
    let array = [1, 2, 3];
    let deque = VecDeque::from([1, 2, 3]);
    let list = LinkedList::from([1, 2, 3]);
    let set = BTreeSet::from([1, 2, 3]);
    let hashset = HashSet::from([1, 2, 3]);
    let map = BTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    let hashmap = HashMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);

    assert_eq!(all(&vec).len(), 3);
    assert_eq!(all(&array[..]).len(), 3);
    assert_eq!(all(&array).len(), 3);
    assert_eq!(all(&deque).len(), 3);
    assert_eq!(all(&list).len(), 3);
    assert_eq!(all(&set).len(), 3);
    assert_eq!(all(&hashset).len(), 3);
    assert_eq!(keys(&map).len(), 3);
    assert_eq!(values(&hashmap).len(), 3);

    assert_eq!((&deque | pipe::drop(1) | pipe::reverse()).iter().collect_vec(), [&3, &2]);
    assert_eq!((&list | pipe::take(2)).iter().collect_vec(), [&1, &2]);
    assert_eq!((&set | pipe::filter(|x: &&i32| **x > 1)).len(), 2);
    assert_eq!((&hashset | pipe::transform(|x: &i32| x * 2)).iter().sum::<i32>(), 12);
}
