use automata_lab::patterns::{find_pattern, PATTERNS};

fn matches(id: char, input: &str) -> bool {
    find_pattern(id).expect("pattern exists").matches(input)
}

#[test]
fn test_table_shape() {
    assert_eq!(PATTERNS.len(), 10);
    let ids: Vec<char> = PATTERNS.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j']);
    assert!(find_pattern('z').is_none());

    // descriptions state the language only
    assert_eq!(
        find_pattern('f').unwrap().description,
        "L = { w in {0,1}* | w has exactly three 1s } (also accepts four 1s)"
    );
}

#[test]
fn test_ends_in_01() {
    assert!(matches('a', "1101"));
    assert!(!matches('a', "1001"));
    assert!(matches('a', "01"));
    assert!(!matches('a', ""));
    assert!(!matches('a', "10"));
}

#[test]
fn test_contains_a_one() {
    assert!(matches('b', "0001"));
    assert!(matches('b', "1000"));
    assert!(matches('b', "1"));
    assert!(!matches('b', "000"));
    assert!(!matches('b', ""));
}

#[test]
fn test_even_number_of_zeros() {
    assert!(matches('c', "1100"));
    assert!(matches('c', "0101"));
    assert!(matches('c', ""));
    assert!(matches('c', "11"));
    assert!(!matches('c', "10"));
    assert!(!matches('c', "000"));
}

#[test]
fn test_no_adjacent_ones() {
    assert!(matches('d', "1010"));
    assert!(matches('d', "10101"));
    assert!(matches('d', "010"));
    assert!(matches('d', "100"));
    assert!(!matches('d', "1100"));
    assert!(!matches('d', "11"));
}

#[test]
fn test_at_most_two_ones() {
    assert!(matches('e', "0010"));
    assert!(matches('e', "1100"));
    assert!(matches('e', "100"));
    assert!(matches('e', ""));
    assert!(!matches('e', "111"));
    assert!(!matches('e', "11011"));
}

#[test]
fn test_three_or_four_ones() {
    assert!(matches('f', "10101"));
    assert!(matches('f', "111"));
    assert!(matches('f', "10011"));
    assert!(matches('f', "1111"));
    assert!(!matches('f', "11"));
    assert!(!matches('f', "11111"));
}

#[test]
fn test_length_multiple_of_three() {
    assert!(matches('g', "101"));
    assert!(matches('g', "111000"));
    assert!(matches('g', ""));
    assert!(!matches('g', "1011"));
    assert!(!matches('g', "10"));
}

#[test]
fn test_starts_and_ends_with_a() {
    assert!(matches('h', "abba"));
    assert!(matches('h', "aaaba"));
    assert!(matches('h', "a"));
    assert!(!matches('h', "ab"));
    assert!(!matches('h', "ba"));
    assert!(!matches('h', ""));
}

#[test]
fn test_at_least_two_as() {
    assert!(matches('i', "bbaa"));
    assert!(matches('i', "aba"));
    assert!(matches('i', "bbbaaa"));
    assert!(!matches('i', "ba"));
    assert!(!matches('i', ""));
}

#[test]
fn test_empty_or_all_zeros() {
    assert!(matches('j', ""));
    assert!(matches('j', "0"));
    assert!(matches('j', "00"));
    assert!(matches('j', "000"));
    assert!(!matches('j', "01"));
    assert!(!matches('j', "1"));
}

#[test]
fn test_fullmatch_not_substring_match() {
    // "ends in 01" must match the whole string, not find "01" somewhere
    assert!(!matches('j', "0001"));
    assert!(!matches('g', "1010"));
    assert!(!matches('h', "xax"));
}
