use std::collections::{BTreeMap, HashSet, LinkedList};

use container_utils::query::scan_contains;
use container_utils::{
    all_of, any_of, contains, index_of, index_of_by, irange, IRange, Membership, Multiset, Strategy,
};

fn strategy_of<C: Membership<i32>>(_: &C) -> Strategy {
    C::STRATEGY
}

#[test]
fn contains_picks_the_best_capability() {
    let set: HashSet<i32> = HashSet::from([1, 2]);
    let map: BTreeMap<i32, &str> = BTreeMap::from([(1, "one")]);
    let bag: Multiset<i32> = [1, 1, 2].into_iter().collect();
    let list: LinkedList<i32> = LinkedList::from([1, 2]);

    assert_eq!(strategy_of(&set), Strategy::NativeContains);
    assert_eq!(strategy_of(&map), Strategy::NativeContains);
    assert_eq!(strategy_of(&bag), Strategy::NativeCount);
    assert_eq!(strategy_of(&list), Strategy::LinearScan);

    for present in [1, 2] {
        assert!(contains(&set, &present));
        assert!(contains(&bag, &present));
        assert!(contains(&list, &present));
    }
    assert!(contains(&map, &1));
    assert!(!contains(&map, &2));
    assert!(!contains(&bag, &3));
}

#[test]
fn every_strategy_agrees_with_a_scan() {
    let values = [4, 8, 15, 16, 23, 42];
    let set: HashSet<i32> = values.iter().copied().collect();
    let bag: Multiset<i32> = values.iter().copied().collect();
    for needle in 0..50 {
        let expected = scan_contains(&values, &needle);
        assert_eq!(contains(&set, &needle), expected, "set, needle {needle}");
        assert_eq!(contains(&bag, &needle), expected, "multiset, needle {needle}");
        assert_eq!(contains(&values, &needle), expected, "array, needle {needle}");
    }
}

#[test]
fn string_keys_are_found_by_str() {
    let names = vec![String::from("ada"), String::from("grace")];
    let index: HashSet<String> = names.iter().cloned().collect();
    assert!(contains(&names, "grace"));
    assert!(contains(&index, "ada"));
    assert_eq!(index_of(&names, "grace"), 1);
    assert_eq!(index_of(&names, "linus"), names.len());
}

#[test]
fn index_and_quantifiers() {
    let v = vec![3, 6, 9, 10];
    assert_eq!(index_of_by(&v, |x| x % 2 == 0), 1);
    assert_eq!(index_of_by(&v, |x| *x > 100), 4);
    assert!(any_of(&v, |x| *x == 10));
    assert!(!all_of(&v, |x| x % 3 == 0));
    assert!(all_of(Vec::<i32>::new(), |_| false));
}

#[test]
fn irange_walks_in_both_directions() {
    let up: Vec<i32> = irange(0, 10, 3).into_iter().collect();
    let down: Vec<i32> = irange(10, 0, -3).into_iter().collect();
    assert_eq!(up, vec![0, 3, 6, 9]);
    assert_eq!(down, vec![10, 7, 4, 1]);

    let r = irange(0_u64, 5, 2);
    assert_eq!(r.iter().count(), 3);
    assert_eq!(r.iter().sum::<u64>(), 6);
    assert!(IRange::try_new(1_u8, 2, 0).is_err());
}
