use dynstring::{DynString, DynStringError};

#[test]
fn test_new_string_is_empty() {
    let s = DynString::new();

    assert_eq!(s.len(), 0);
    assert!(s.is_empty());
    assert_eq!(s.as_bytes(), b"");
    assert!(s.c_str().is_none());
}

#[test]
fn test_construction_from_bytes_and_str() {
    let a = DynString::from("hello");
    let b = DynString::from(&b"hello"[..]);

    assert_eq!(a.len(), 5);
    assert_eq!(a, b);
    assert_eq!(a, "hello");
    assert_eq!(a.c_str().unwrap(), b"hello\0");
}

#[test]
fn test_clone_is_deep() {
    let a = DynString::from("abc");
    let mut b = a.clone();
    b.push(b'd');

    assert_eq!(a, "abc");
    assert_eq!(b, "abcd");
}

#[test]
fn test_take_leaves_source_empty() {
    let mut a = DynString::from("content");
    let b = a.take();

    assert_eq!(b, "content");
    assert!(a.is_empty());
    assert!(a.c_str().is_none());

    // the moved-from string stays fully usable
    a.push(b'x');
    assert_eq!(a, "x");
}

#[test]
fn test_checked_access() {
    let s = DynString::from("abc");

    assert_eq!(s.at(0), Ok(b'a'));
    assert_eq!(s.at(2), Ok(b'c'));
    assert_eq!(
        s.at(3),
        Err(DynStringError::IndexOutOfBounds {
            index: 3,
            length: 3
        })
    );
}

#[test]
fn test_checked_mutation_in_place() {
    let mut s = DynString::from("abc");
    *s.at_mut(1).unwrap() = b'X';

    assert_eq!(s, "aXc");
    assert!(s.at_mut(5).is_err());
}

#[test]
fn test_unchecked_access() {
    let mut s = DynString::from("abc");
    unsafe {
        assert_eq!(s.get_unchecked(1), b'b');
        *s.get_unchecked_mut(0) = b'Z';
    }
    assert_eq!(s, "Zbc");
}

#[test]
fn test_front_and_back() {
    let s = DynString::from("abc");
    assert_eq!(s.front(), Some(b'a'));
    assert_eq!(s.back(), Some(b'c'));

    let empty = DynString::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
}

#[test]
fn test_concatenation_operator() {
    let s = DynString::from("hello") + DynString::from(" world");
    assert_eq!(s, "hello world");
    assert_eq!(s.len(), 11);

    let t = &DynString::from("ab") + &DynString::from("cd");
    assert_eq!(t, "abcd");

    let u = DynString::from("ab") + b'c';
    assert_eq!(u, "abc");

    let v = b'a' + DynString::from("bc");
    assert_eq!(v, "abc");
}

#[test]
fn test_add_assign_family() {
    let mut s = DynString::from("a");
    s += &DynString::from("b");
    s += &b"cd"[..];
    s += b'e';

    assert_eq!(s, "abcde");
}

#[test]
fn test_substr_round_trip_identity() {
    for text in ["", "a", "hello world"] {
        let s = DynString::from(text);
        assert_eq!(s.substr(0, s.len()), s);
        assert_eq!(s.substr(0, DynString::NPOS), s);
    }
}

#[test]
fn test_substr_clamping() {
    let s = DynString::from("abcdef");

    assert_eq!(s.substr(2, 2), "cd");
    assert_eq!(s.substr(4, 100), "ef"); // length clamped
    assert_eq!(s.substr(6, 1), ""); // position at the end
    assert_eq!(s.substr(100, 1), ""); // position past the end

    for pos in 0..s.len() {
        for len in 0..8 {
            let expected = (s.len() - pos).min(len);
            assert_eq!(s.substr(pos, len).len(), expected);
        }
    }
}

#[test]
fn test_substr_is_independent() {
    let mut s = DynString::from("hello");
    let sub = s.substr(1, 3);
    s.clear();

    assert_eq!(sub, "ell");
    assert_eq!(sub.c_str().unwrap(), b"ell\0");
}

#[test]
fn test_append_associativity() {
    let parts = [("ab", "cd"), ("", "xyz"), ("q", "")];
    for (a, b) in parts {
        let mut left = DynString::from("base");
        left.append(&DynString::from(a)).append(&DynString::from(b));

        let mut right = DynString::from("base");
        right.append(&(DynString::from(a) + DynString::from(b)));

        assert_eq!(left, right);
    }
}

#[test]
fn test_copy_to() {
    let s = DynString::from("abcdef");
    let mut dest = [0u8; 4];

    assert_eq!(s.copy_to(&mut dest, 4, 1), 4);
    assert_eq!(&dest, b"bcde");

    assert_eq!(s.copy_to(&mut dest, 100, 4), 2); // clamped to rest
    assert_eq!(&dest[..2], b"ef");

    assert_eq!(s.copy_to(&mut dest, 4, 6), 0); // pos at the end
    assert_eq!(s.copy_to(&mut dest, 4, 100), 0); // pos past the end

    let mut small = [0u8; 2];
    assert_eq!(s.copy_to(&mut small, 100, 0), 2); // bounded by dest
    assert_eq!(&small, b"ab");
}

#[test]
fn test_display_and_debug() {
    let s = DynString::from("hi there");
    assert_eq!(format!("{s}"), "hi there");
    assert_eq!(format!("{}", DynString::new()), "");

    let escaped = DynString::from(&b"a\"\\\n\x01"[..]);
    assert_eq!(format!("{escaped:?}"), "b\"a\\\"\\\\\\n\\x01\"");
}

#[test]
fn test_swap_exchanges_content() {
    let mut a = DynString::from("first");
    let mut b = DynString::from("second");

    a.swap(&mut b);

    assert_eq!(a, "second");
    assert_eq!(b, "first");
}
