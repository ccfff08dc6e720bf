//! Sort words by the parity of their length.

use std::cmp::Ordering;
use std::io::{BufRead, Write};

use crate::error::ExerciseResult;

fn by_len(a: &str, b: &str) -> Ordering {
    let (a_len, b_len) = (a.len(), b.len());
    match (a_len % 2 == 1, b_len % 2 == 1) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a_len.cmp(&b_len).then_with(|| a.cmp(b)),
        (false, false) => b_len.cmp(&a_len).then_with(|| a.cmp(b)),
    }
}

/// Odd lengths first, shortest first; then even lengths, longest first.
/// Equal lengths sort alphabetically.
pub fn sort_by_len<S: AsRef<str>>(words: &mut [S]) {
    words.sort_by(|a, b| by_len(a.as_ref(), b.as_ref()));
}

/// Reads whitespace-separated words and writes them sorted on one line.
pub fn run(input: impl BufRead, mut output: impl Write) -> ExerciseResult<()> {
    let mut words = Vec::new();
    for line in input.lines() {
        words.extend(line?.split_whitespace().map(str::to_string));
    }
    sort_by_len(&mut words);
    writeln!(output, "{}", words.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_by_len() {
        let mut words = ["abc", "ab", "abcde", "a", "abcd", "abbd"];
        sort_by_len(&mut words);
        assert_eq!(words, ["a", "abc", "abcde", "abbd", "abcd", "ab"]);
    }

    #[test]
    fn test_single_parity() {
        let mut odd = vec!["ccc".to_string(), "a".to_string(), "bbb".to_string()];
        sort_by_len(&mut odd);
        assert_eq!(odd, vec!["a", "bbb", "ccc"]);

        let mut even: [&str; 0] = [];
        sort_by_len(&mut even);
    }

    #[test]
    fn test_run() {
        let mut out = Vec::new();
        run("abc ab abcde\na abcd abbd\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a abc abcde abbd abcd ab\n");
    }
}
