use dynstring::{DynString, DynStringError};

#[test]
fn test_compare_equal() {
    let a = DynString::from("same");
    let b = DynString::from("same");

    assert_eq!(a.compare(&b), 0);
    assert_eq!(DynString::new().compare(&DynString::new()), 0);
}

#[test]
fn test_compare_sign_follows_byte_difference() {
    let a = DynString::from("apple");
    let b = DynString::from("apricot");

    // first difference at index 2: 'p' vs 'r'
    assert!(a.compare(&b) < 0);
    assert!(b.compare(&a) > 0);
}

#[test]
fn test_compare_prefix_falls_back_to_length() {
    let short = DynString::from("abc");
    let long = DynString::from("abcdef");

    assert!(short.compare(&long) < 0);
    assert!(long.compare(&short) > 0);
    assert!(DynString::new().compare(&short) < 0);
}

#[test]
fn test_compare_antisymmetry() {
    let samples = ["", "a", "ab", "abc", "abd", "b", "zz"];
    for x in samples {
        for y in samples {
            let a = DynString::from(x);
            let b = DynString::from(y);
            let ab = a.compare(&b);
            let ba = b.compare(&a);
            assert_eq!(ab.signum(), -ba.signum(), "{x:?} vs {y:?}");
        }
    }
}

#[test]
fn test_compare_range_matching_middle() {
    let s = DynString::from("ABCD");

    assert_eq!(s.compare_range(1, 2, &DynString::from("BC")), Ok(0));
}

#[test]
fn test_compare_range_residual_lengths() {
    let s = DynString::from("abcdef");

    // clamped sub-range "ef" vs longer other: equal prefix, other longer
    assert!(s.compare_range(4, 100, &DynString::from("efg")).unwrap() < 0);
    // sub-range "cdef" vs shorter equal prefix "cd": this side longer
    assert!(s.compare_range(2, 4, &DynString::from("cd")).unwrap() > 0);
    // zero-length sub-range at the very end vs empty
    assert_eq!(s.compare_range(6, 5, &DynString::new()), Ok(0));
}

#[test]
fn test_compare_range_pos_out_of_range() {
    let s = DynString::from("abc");

    assert_eq!(
        s.compare_range(4, 1, &DynString::from("x")),
        Err(DynStringError::PosOutOfRange { pos: 4, length: 3 })
    );
    // pos == len is still valid and compares the empty tail
    assert!(s.compare_range(3, 1, &DynString::from("x")).unwrap() < 0);
}

#[test]
fn test_relational_operators() {
    let a = DynString::from("alpha");
    let b = DynString::from("beta");
    let a2 = DynString::from("alpha");

    assert!(a == a2);
    assert!(a != b);
    assert!(a < b);
    assert!(a <= a2);
    assert!(b > a);
    assert!(b >= b);
}

#[test]
fn test_ordering_matches_byte_order() {
    let mut words = vec![
        DynString::from("pear"),
        DynString::from("apple"),
        DynString::from(""),
        DynString::from("applesauce"),
    ];
    words.sort();

    assert_eq!(words[0], "");
    assert_eq!(words[1], "apple");
    assert_eq!(words[2], "applesauce");
    assert_eq!(words[3], "pear");
}

#[test]
fn test_cross_type_equality() {
    let s = DynString::from("abc");

    assert_eq!(s, "abc");
    assert_eq!("abc", s);
    assert_eq!(s, &b"abc"[..]);
    assert_eq!(s, b"abc");
    assert_eq!(b"abc", s);
}
