use crate::RadixTree;

#[test]
fn new_tree_is_empty() {
    let tree: RadixTree<u32> = RadixTree::new();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.num_vertices(), 1);
}

#[test]
fn insert_new_key_returns_none() {
    let mut tree = RadixTree::new();
    assert_eq!(tree.insert(b"a", 1).unwrap(), None);
    assert_eq!(tree.len(), 1);
}

#[test]
fn insert_overwrite_returns_old_value() {
    let mut tree = RadixTree::new();
    tree.insert(b"a", 1).unwrap();
    assert_eq!(tree.insert(b"a", 2).unwrap(), Some(1));
    assert_eq!(tree.get(b"a"), Some(&2));
    assert_eq!(tree.len(), 1);
}

#[test]
fn insert_if_absent_keeps_existing() {
    let mut tree = RadixTree::new();
    assert_eq!(tree.insert_if_absent(b"a", 1).unwrap(), Ok(()));
    assert_eq!(tree.insert_if_absent(b"a", 2).unwrap(), Err(2));
    assert_eq!(tree.get(b"a"), Some(&1));
}

#[test]
fn remove_inverts_insert() {
    let mut tree = RadixTree::new();
    tree.insert(b"a", 1).unwrap();
    assert_eq!(tree.remove(b"a"), Some(1));
    assert_eq!(tree.get(b"a"), None);
    assert_eq!(tree.len(), 0);
}

#[test]
fn remove_missing_key_is_none() {
    let mut tree: RadixTree<u32> = RadixTree::new();
    assert_eq!(tree.remove(b"missing"), None);
}

#[test]
fn get_on_empty_tree_is_none() {
    let tree: RadixTree<u32> = RadixTree::new();
    assert_eq!(tree.get(b"anything"), None);
}

#[test]
fn extending_a_key_leaf_with_a_longer_key_keeps_the_shorter_key() {
    // Regression: Case D used to overwrite the "foo" leaf wholesale when
    // compressing the "bar" tail in place, dropping its `is_key`/value.
    let mut tree = RadixTree::new();
    tree.insert(b"foo", 1).unwrap();
    tree.insert(b"foobar", 2).unwrap();
    assert_eq!(tree.get(b"foo"), Some(&1));
    assert_eq!(tree.get(b"foobar"), Some(&2));
    assert_eq!(tree.len(), 2);
}

#[test]
fn shared_prefix_keys_stay_distinct() {
    let mut tree = RadixTree::new();
    tree.insert(b"foo", 1).unwrap();
    tree.insert(b"foobar", 2).unwrap();
    tree.insert(b"footer", 3).unwrap();
    assert_eq!(tree.get(b"foo"), Some(&1));
    assert_eq!(tree.get(b"foobar"), Some(&2));
    assert_eq!(tree.get(b"footer"), Some(&3));
    assert_eq!(tree.get(b"foob"), None);
    assert_eq!(tree.len(), 3);
}

#[test]
fn empty_key_is_a_valid_key() {
    let mut tree = RadixTree::new();
    assert_eq!(tree.insert(b"", 1).unwrap(), None);
    assert_eq!(tree.get(b""), Some(&1));
    assert_eq!(tree.remove(b""), Some(1));
}

#[test]
fn keys_may_contain_embedded_nuls() {
    let mut tree = RadixTree::new();
    tree.insert(b"a\0b", 1).unwrap();
    tree.insert(b"a\0c", 2).unwrap();
    assert_eq!(tree.get(b"a\0b"), Some(&1));
    assert_eq!(tree.get(b"a\0c"), Some(&2));
}

#[test]
fn get_mut_modifies_stored_value() {
    let mut tree = RadixTree::new();
    tree.insert(b"a", 1).unwrap();
    *tree.get_mut(b"a").unwrap() += 41;
    assert_eq!(tree.get(b"a"), Some(&42));
}

#[test]
fn key_too_long_is_rejected_without_side_effects() {
    use crate::error::{RadixError, MAX_KEY_LEN};

    let mut tree = RadixTree::new();
    let oversized = vec![0u8; MAX_KEY_LEN + 1];
    assert_eq!(
        tree.insert(&oversized, 1),
        Err(RadixError::KeyTooLong {
            len: oversized.len()
        })
    );
    assert!(tree.is_empty());
}

#[test]
fn drain_with_visits_every_value_once() {
    let mut tree = RadixTree::new();
    for (i, key) in [b"a".as_slice(), b"ab", b"abc", b"b"].iter().enumerate() {
        tree.insert(key, i).unwrap();
    }
    let mut seen = Vec::new();
    tree.drain_with(|v| seen.push(v));
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.num_vertices(), 1);
}

#[test]
fn debug_print_does_not_panic() {
    let mut tree = RadixTree::new();
    tree.insert(b"foo", 1).unwrap();
    tree.insert(b"foobar", 2).unwrap();
    let rendered = tree.debug_print();
    assert!(rendered.contains("foo"));
}

#[test]
fn deleting_leaves_recompressed_single_edge() {
    let mut tree = RadixTree::new();
    tree.insert(b"foobar", 2).unwrap();
    tree.insert(b"footer", 3).unwrap();
    tree.remove(b"footer");
    assert_eq!(tree.get(b"foobar"), Some(&2));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.num_vertices(), 2);
}
