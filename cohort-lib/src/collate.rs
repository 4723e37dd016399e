//! Natural, locale-aware string collation.
//!
//! Strings are split into elements: a run of ASCII digits, or a single other
//! character. Comparison happens in three levels, in the manner of a
//! multilingual collator:
//!
//! 1. Primary: whitespace < punctuation and symbols < digits < letters.
//!    Digit runs compare by numeric value, so `"item2" < "item10"`. Letters
//!    compare by their lowercase base letter, so `"é"` sorts with `"e"`.
//! 2. Secondary: unaccented letters before accented ones.
//! 3. Tertiary: lowercase before uppercase, fewer leading zeros first.
//!
//! Strings equal at every level fall back to bytewise order, which keeps the
//! result a total order.

use std::cmp::Ordering;

/// Compare two strings in natural order.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use cohort_lib::collate::natural_cmp;
///
/// assert_eq!(natural_cmp("a2", "a10"), Ordering::Less);
/// assert_eq!(natural_cmp("Apple", "apple"), Ordering::Greater);
/// assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(natural_cmp("-5", "3"), Ordering::Less);
/// assert_eq!(natural_cmp("é", "f"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    compare_elements(a, b, primary)
        .then_with(|| compare_elements(a, b, secondary))
        .then_with(|| compare_elements(a, b, tertiary))
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element<'a> {
    Digits(&'a str),
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punct,
    Digit,
    Letter,
}

struct Elements<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Elements<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Element<'a>> {
        let first = self.rest.chars().next()?;
        if first.is_ascii_digit() {
            let end = self
                .rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(self.rest.len());
            let (run, rest) = self.rest.split_at(end);
            self.rest = rest;
            Some(Element::Digits(run))
        } else {
            self.rest = &self.rest[first.len_utf8()..];
            Some(Element::Char(first))
        }
    }
}

fn elements(s: &str) -> Elements<'_> {
    Elements { rest: s }
}

fn compare_elements(a: &str, b: &str, cmp: fn(Element, Element) -> Ordering) -> Ordering {
    let mut left = elements(a);
    let mut right = elements(b);
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => match cmp(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn class(c: char) -> Class {
    if c.is_whitespace() {
        Class::Space
    } else if c.is_alphanumeric() {
        Class::Letter
    } else {
        Class::Punct
    }
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Strip the accent from a lowercase Latin letter.
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

fn primary(x: Element, y: Element) -> Ordering {
    match (x, y) {
        (Element::Digits(x), Element::Digits(y)) => {
            let x = x.trim_start_matches('0');
            let y = y.trim_start_matches('0');
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (Element::Char(x), Element::Char(y)) => class(x)
            .cmp(&class(y))
            .then_with(|| base_letter(lowercase(x)).cmp(&base_letter(lowercase(y)))),
        (Element::Digits(_), Element::Char(c)) => Class::Digit.cmp(&class(c)),
        (Element::Char(c), Element::Digits(_)) => class(c).cmp(&Class::Digit),
    }
}

fn secondary(x: Element, y: Element) -> Ordering {
    match (x, y) {
        (Element::Char(x), Element::Char(y)) => accent(x).cmp(&accent(y)),
        _ => Ordering::Equal,
    }
}

// 0 for an unaccented character.
fn accent(c: char) -> u32 {
    let lower = lowercase(c);
    if base_letter(lower) == lower {
        0
    } else {
        u32::from(lower)
    }
}

fn tertiary(x: Element, y: Element) -> Ordering {
    match (x, y) {
        (Element::Digits(x), Element::Digits(y)) => x.len().cmp(&y.len()),
        (Element::Char(x), Element::Char(y)) => x.is_uppercase().cmp(&y.is_uppercase()),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_split() {
        let parts: Vec<Element> = elements("ab12c003").collect();
        assert_eq!(
            parts,
            vec![
                Element::Char('a'),
                Element::Char('b'),
                Element::Digits("12"),
                Element::Char('c'),
                Element::Digits("003"),
            ]
        );
        assert_eq!(elements("").count(), 0);
        assert_eq!(elements("과정").count(), 2);
    }

    #[test]
    fn test_digit_runs_by_value() {
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("10", "9"), Ordering::Greater);
        assert_eq!(natural_cmp("007", "7"), Ordering::Greater);
        assert_eq!(natural_cmp("7", "007"), Ordering::Less);
    }

    #[test]
    fn test_long_digit_runs_do_not_overflow() {
        assert_eq!(
            natural_cmp("x99999999999999999999999", "x100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_case_insensitive_then_lowercase_first() {
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("apple", "Apple"), Ordering::Less);
        assert_eq!(natural_cmp("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_space_and_punctuation_before_digits() {
        assert_eq!(natural_cmp("a b", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("a!", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("a b", "a!"), Ordering::Less);
        assert_eq!(natural_cmp("-5", "3"), Ordering::Less);
        assert_eq!(natural_cmp("3", "-5"), Ordering::Greater);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(natural_cmp("9", "a"), Ordering::Less);
        assert_eq!(natural_cmp("x9", "xa"), Ordering::Less);
    }

    #[test]
    fn test_accents_are_secondary() {
        assert_eq!(natural_cmp("é", "f"), Ordering::Less);
        assert_eq!(natural_cmp("e", "é"), Ordering::Less);
        assert_eq!(natural_cmp("é", "e"), Ordering::Greater);
        assert_eq!(natural_cmp("Émile", "emma"), Ordering::Less);
        // Accent difference outranks case difference.
        assert_eq!(natural_cmp("E", "é"), Ordering::Less);
    }
}
