//! The ten literal regular-language patterns of the matcher exercise.
//!
//! Matching is delegated to the `regex` engine; fullmatch semantics come from
//! anchoring the pattern as `^(...)$`.

use regex::Regex;

/// One exercise pattern: identifier, language description, the literal regex,
/// and the fixed battery of sample strings shown before free-form testing.
#[derive(Debug)]
pub struct Pattern {
    pub id: char,
    pub description: &'static str,
    pub source: &'static str,
    pub regex: Regex,
    pub battery: &'static [&'static str],
}

impl Pattern {
    fn new(
        id: char,
        description: &'static str,
        source: &'static str,
        battery: &'static [&'static str],
    ) -> Pattern {
        let anchored = format!("^({})$", source);
        let regex = Regex::new(&anchored).expect("invalid literal pattern");
        Pattern {
            id,
            description,
            source,
            regex,
            battery,
        }
    }

    /// Fullmatch verdict for the whole input string.
    pub fn matches(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

lazy_static! {
    /// The pattern table, in menu order a-j.
    pub static ref PATTERNS: Vec<Pattern> = vec![
        Pattern::new(
            'a',
            "L = { w in {0,1}* | w ends in 01 }",
            r".*01",
            &["1101", "1001"],
        ),
        Pattern::new(
            'b',
            "L = { w in {0,1}* | w contains at least one 1 }",
            r".*1.*",
            &["0001", "1000"],
        ),
        Pattern::new(
            'c',
            "L = { w in {0,1}* | the number of 0s is even }",
            r"1*(01*01*)*1*",
            &["1100", "0101"],
        ),
        Pattern::new(
            'd',
            "L = { w in {0,1}* | 11 does not occur in w }",
            r"(0|10)*1?",
            &["1010", "10101", "010"],
        ),
        Pattern::new(
            'e',
            "L = { w in {0,1}* | w has at most two 1s }",
            r"0*1?0*1?0*",
            &["0010", "1100", "100"],
        ),
        Pattern::new(
            'f',
            "L = { w in {0,1}* | w has exactly three 1s } (also accepts four 1s)",
            r"0*10*10*10*|0*10*10*10*10*",
            &["10101", "111", "10011"],
        ),
        Pattern::new(
            'g',
            "L = { w in {0,1}* | |w| is a multiple of 3 }",
            r"([01]{3})*",
            &["101", "111000"],
        ),
        Pattern::new(
            'h',
            "L = { w in {a,b}* | w starts and ends with a }",
            r"a|a[ab]*a",
            &["abba", "aaaba", "a"],
        ),
        Pattern::new(
            'i',
            "L = { w in {a,b}* | w contains at least two a's }",
            r".*a.*a.*",
            &["bbaa", "aba", "bbbaaa"],
        ),
        Pattern::new(
            'j',
            "L = { w in {0,1}* | w is empty or all 0s }",
            r"0*",
            &["", "0", "000", "00"],
        ),
    ];
}

/// Looks a pattern up by its menu identifier.
pub fn find_pattern(id: char) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.id == id)
}
