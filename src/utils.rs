//! Assorted helpers shared by the engine and the probe binary.

/// Compare two characters, optionally ignoring case.
///
/// Case-insensitive comparison folds both sides to lower case; characters
/// whose lower-case form expands to several code points compare by the full
/// expansion.
#[inline]
pub fn chars_equal(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
}

/// Length of the longest common subsequence, computed with two rolling rows.
///
/// Independent of the traced engine; used as a baseline.
pub fn lcs_len(s: &[char], t: &[char], case_sensitive: bool) -> u32 {
    let m = t.len();
    let mut prev = vec![0u32; m + 1];
    let mut curr = vec![0u32; m + 1];

    for &cs in s {
        for j in 1..=m {
            curr[j] = if chars_equal(cs, t[j - 1], case_sensitive) {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Length of the longest common contiguous run, with two rolling rows.
pub fn longest_common_run(s: &[char], t: &[char], case_sensitive: bool) -> u32 {
    let m = t.len();
    let mut prev = vec![0u32; m + 1];
    let mut curr = vec![0u32; m + 1];
    let mut best = 0;

    for &cs in s {
        for j in 1..=m {
            curr[j] = if chars_equal(cs, t[j - 1], case_sensitive) {
                prev[j - 1] + 1
            } else {
                0
            };
            best = best.max(curr[j]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn case_folding() {
        assert!(chars_equal('a', 'a', true));
        assert!(!chars_equal('a', 'A', true));
        assert!(chars_equal('a', 'A', false));
        assert!(chars_equal('Σ', 'σ', false));
        assert!(!chars_equal('a', 'b', false));
    }

    #[test]
    fn lcs_len_basic_cases() {
        assert_eq!(lcs_len(&chars(""), &chars(""), true), 0);
        assert_eq!(lcs_len(&chars("A"), &chars(""), true), 0);
        assert_eq!(lcs_len(&chars("A"), &chars("A"), true), 1);
        assert_eq!(lcs_len(&chars("ABCBDAB"), &chars("BDCABA"), true), 4);
        assert_eq!(lcs_len(&chars("abc"), &chars("ABC"), false), 3);
    }

    #[test]
    fn longest_run_basic_cases() {
        assert_eq!(longest_common_run(&chars(""), &chars("abc"), true), 0);
        assert_eq!(longest_common_run(&chars("ABCBDAB"), &chars("BDCABA"), true), 2);
        assert_eq!(longest_common_run(&chars("xabcy"), &chars("zabcw"), true), 3);
    }
}
