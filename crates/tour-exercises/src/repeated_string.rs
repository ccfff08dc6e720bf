//! Count the `'a'`s in a prefix of an infinitely repeated string.

use std::io::{BufRead, Write};

use crate::error::{ExerciseError, ExerciseResult};
use crate::input::LineReader;

/// Number of `'a'` characters among the first `n` characters of `s`
/// repeated forever.
pub fn repeated_string(s: &str, n: u64) -> ExerciseResult<u64> {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return Err(ExerciseError::EmptyPattern);
    }

    let count_a = |chars: &[char]| chars.iter().filter(|&&c| c == 'a').count() as u64;

    let len = chars.len() as u64;
    let whole = n / len;
    let rest = (n % len) as usize;
    Ok(count_a(&chars) * whole + count_a(&chars[..rest]))
}

/// Reads `s` then `n`, writes the count.
pub fn run(input: impl BufRead, mut output: impl Write) -> ExerciseResult<()> {
    let mut reader = LineReader::new(input);
    let s = reader.line("s")?;
    let n = reader.number::<u64>("n")?;
    writeln!(output, "{}", repeated_string(&s, n)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_string() {
        assert_eq!(repeated_string("aba", 10).unwrap(), 7);
        assert_eq!(repeated_string("a", 1_000_000_000_000).unwrap(), 1_000_000_000_000);
        assert_eq!(repeated_string("bcd", 100).unwrap(), 0);
        assert_eq!(repeated_string("abc", 0).unwrap(), 0);
        assert_eq!(repeated_string("ba", 1).unwrap(), 0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(repeated_string("éa", 3).unwrap(), 1);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(
            repeated_string("", 5),
            Err(ExerciseError::EmptyPattern)
        ));
    }

    #[test]
    fn test_run() {
        let mut out = Vec::new();
        run("aba\n10\n".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7\n");
    }
}
