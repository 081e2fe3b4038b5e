//! English number speller.
//!
//! Works on digit strings rather than integers so that arbitrarily long digit
//! runs never overflow. Output uses only lowercase ASCII letters, `-`, `,`
//! and spaces.

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Checked in order against the end of the cardinal.
const ORDINAL_ENDINGS: [(&str, &str); 8] = [
    ("ty", "tieth"),
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("five", "fifth"),
    ("eight", "eighth"),
    ("nine", "ninth"),
    ("twelve", "twelfth"),
];

/// Read for a zero tens digit in pairwise (year-style) reading.
const ZERO_PAIR: &str = "oh";

/// Keep only ASCII digits and drop leading zeros; `"0"` when nothing is left.
pub fn canonical_digits(s: &str) -> String {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[inline]
fn below_hundred(n: usize) -> String {
    match n {
        0..=19 => ONES[n].to_owned(),
        _ if n % 10 == 0 => TENS[n / 10].to_owned(),
        _ => format!("{}-{}", TENS[n / 10], ONES[n % 10]),
    }
}

#[inline]
fn join_and(left: &str, and_word: &str, right: &str) -> String {
    if and_word.is_empty() {
        format!("{left} {right}")
    } else {
        format!("{left} {and_word} {right}")
    }
}

fn below_thousand(n: usize, and_word: &str) -> String {
    let (hundreds, rest) = (n / 100, n % 100);
    match (hundreds, rest) {
        (0, _) => below_hundred(rest),
        (_, 0) => format!("{} hundred", ONES[hundreds]),
        _ => join_and(
            &format!("{} hundred", ONES[hundreds]),
            and_word,
            &below_hundred(rest),
        ),
    }
}

/// Split canonical digits into three-digit groups, most significant first.
fn three_digit_groups(digits: &str) -> Vec<usize> {
    let bytes = digits.as_bytes();
    let head = bytes.len() % 3;
    let value = |chunk: &[u8]| {
        chunk
            .iter()
            .fold(0usize, |acc, b| acc * 10 + usize::from(b - b'0'))
    };

    let mut groups = Vec::with_capacity(bytes.len() / 3 + 1);
    if head > 0 {
        groups.push(value(&bytes[..head]));
    }
    groups.extend(bytes[head..].chunks(3).map(value));
    groups
}

fn digit_by_digit(digits: &str) -> String {
    digits
        .bytes()
        .map(|b| ONES[usize::from(b - b'0')])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cardinal words for a digit string.
///
/// Groups of a thousand are separated by `", "`, except that a single-word
/// final group is joined with `and_word` (`1001` → `"one thousand and one"`;
/// with an empty `and_word`, `"one thousand one"`). `and_word` also joins
/// hundreds to the rest of a group. Numbers beyond the decillions are read
/// digit by digit.
pub fn cardinal(digits: &str, and_word: &str) -> String {
    let digits = canonical_digits(digits);
    if digits == "0" {
        return ONES[0].to_owned();
    }
    if digits.len() > SCALES.len() * 3 {
        return digit_by_digit(&digits);
    }

    let groups = three_digit_groups(&digits);
    let count = groups.len();
    let parts: Vec<String> = groups
        .iter()
        .enumerate()
        .filter(|(_, g)| **g != 0)
        .map(|(i, &g)| {
            let words = below_thousand(g, and_word);
            match SCALES[count - 1 - i] {
                "" => words,
                scale => format!("{words} {scale}"),
            }
        })
        .collect();

    match parts.split_last() {
        Some((last, head)) if !head.is_empty() && !last.contains(' ') => {
            join_and(&head.join(", "), and_word, last)
        }
        _ => parts.join(", "),
    }
}

/// Ordinal words for a digit string (`"21"` → `"twenty-first"`). Hundreds are
/// joined with `"and"`.
pub fn ordinal(digits: &str) -> String {
    let words = cardinal(digits, "and");
    for (ending, replacement) in ORDINAL_ENDINGS {
        if let Some(stem) = words.strip_suffix(ending) {
            return format!("{stem}{replacement}");
        }
    }
    format!("{words}th")
}

/// Year-style reading of a four-digit number in two pairs
/// (`1905` → `"nineteen oh five"`, `2010` → `"twenty ten"`).
///
/// The caller handles exact hundreds; a `00` low pair is read as `"oh zero"`.
pub fn pairwise(n: usize) -> String {
    let (high, low) = (n / 100, n % 100);
    let low = if low < 10 {
        format!("{ZERO_PAIR} {}", ONES[low])
    } else {
        below_hundred(low)
    };
    format!("{} {low}", below_hundred(high % 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_digits_strips_noise() {
        assert_eq!(canonical_digits("007"), "7");
        assert_eq!(canonical_digits(""), "0");
        assert_eq!(canonical_digits("000"), "0");
        assert_eq!(canonical_digits(",5"), "5");
        assert_eq!(canonical_digits("1.000"), "1000");
    }

    #[test]
    fn small_cardinals() {
        assert_eq!(cardinal("0", ""), "zero");
        assert_eq!(cardinal("7", ""), "seven");
        assert_eq!(cardinal("13", ""), "thirteen");
        assert_eq!(cardinal("40", ""), "forty");
        assert_eq!(cardinal("99", ""), "ninety-nine");
    }

    #[test]
    fn hundreds_and_the_and_word() {
        assert_eq!(cardinal("100", ""), "one hundred");
        assert_eq!(cardinal("101", ""), "one hundred one");
        assert_eq!(cardinal("101", "and"), "one hundred and one");
        assert_eq!(cardinal("999", ""), "nine hundred ninety-nine");
    }

    #[test]
    fn thousands_groups() {
        assert_eq!(cardinal("1000", ""), "one thousand");
        assert_eq!(cardinal("1001", ""), "one thousand one");
        assert_eq!(cardinal("1001", "and"), "one thousand and one");
        assert_eq!(cardinal("1021", "and"), "one thousand and twenty-one");
        assert_eq!(cardinal("1100", ""), "one thousand, one hundred");
        assert_eq!(
            cardinal("12345", ""),
            "twelve thousand, three hundred forty-five"
        );
        assert_eq!(
            cardinal("1234", "and"),
            "one thousand, two hundred and thirty-four"
        );
    }

    #[test]
    fn large_scales() {
        assert_eq!(cardinal("1000000", ""), "one million");
        assert_eq!(cardinal("2001000", ""), "two million, one thousand");
        assert_eq!(cardinal("5000021", ""), "five million twenty-one");
        assert_eq!(
            cardinal("1000000000000000000000000000000000", ""),
            "one decillion"
        );
    }

    #[test]
    fn overlong_numbers_read_digit_by_digit() {
        let digits = "1".repeat(37);
        let words = cardinal(&digits, "");
        assert_eq!(words.split(' ').count(), 37);
        assert!(words.split(' ').all(|w| w == "one"));
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal("0"), "zeroth");
        assert_eq!(ordinal("1"), "first");
        assert_eq!(ordinal("2"), "second");
        assert_eq!(ordinal("3"), "third");
        assert_eq!(ordinal("4"), "fourth");
        assert_eq!(ordinal("5"), "fifth");
        assert_eq!(ordinal("8"), "eighth");
        assert_eq!(ordinal("9"), "ninth");
        assert_eq!(ordinal("11"), "eleventh");
        assert_eq!(ordinal("12"), "twelfth");
        assert_eq!(ordinal("19"), "nineteenth");
        assert_eq!(ordinal("20"), "twentieth");
        assert_eq!(ordinal("21"), "twenty-first");
        assert_eq!(ordinal("80"), "eightieth");
        assert_eq!(ordinal("100"), "one hundredth");
        assert_eq!(ordinal("103"), "one hundred and third");
        assert_eq!(ordinal("1000"), "one thousandth");
    }

    #[test]
    fn pairwise_reading() {
        assert_eq!(pairwise(1905), "nineteen oh five");
        assert_eq!(pairwise(1999), "nineteen ninety-nine");
        assert_eq!(pairwise(2010), "twenty ten");
        assert_eq!(pairwise(1001), "ten oh one");
    }
}
