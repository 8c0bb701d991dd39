//! Employee name ("ФИО") normalisation and fuzzy matching.
//!
//! Names coming from access-control exports or hand-typed grids rarely match
//! the roster byte for byte ("Иванов И.И." vs "иванов  и и", "ё" vs "е").

use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.\t\r\n]+").unwrap());
static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub fn normalize_fio(s: &str) -> String {
    let lower = s.trim().to_lowercase().replace('ё', "е");
    let spaced = SEPARATORS_RE.replace_all(&lower, " ");
    SPACES_RE.replace_all(&spaced, " ").trim().to_string()
}

/// Longest common block of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`:
/// (start in a, start in b, length). Earliest block wins ties.
fn longest_match(
    a: &[char],
    b: &[char],
    (a_lo, a_hi): (usize, usize),
    (b_lo, b_hi): (usize, usize),
) -> (usize, usize, usize) {
    let mut best = (a_lo, b_lo, 0);
    // lengths of common suffixes ending at (i, j), one row at a time
    let mut prev = vec![0usize; b_hi - b_lo + 1];

    for i in a_lo..a_hi {
        let mut cur = vec![0usize; b_hi - b_lo + 1];
        for j in b_lo..b_hi {
            if a[i] == b[j] {
                let k = prev[j - b_lo] + 1;
                cur[j - b_lo + 1] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        prev = cur;
    }

    best
}

fn matching_chars(a: &[char], b: &[char], ra: (usize, usize), rb: (usize, usize)) -> usize {
    let (i, j, k) = longest_match(a, b, ra, rb);
    if k == 0 {
        return 0;
    }
    k + matching_chars(a, b, (ra.0, i), (rb.0, j)) + matching_chars(a, b, (i + k, ra.1), (j + k, rb.1))
}

/// Ratcliff/Obershelp similarity in `0.0..=1.0` (`2 * matches / total`).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let m = matching_chars(&a, &b, (0, a.len()), (0, b.len()));
    2.0 * m as f64 / total as f64
}

/// Best candidate for `fio` after normalising both sides, with its score.
/// `(None, 0.0)` when `fio` is blank or nothing shares a single character.
pub fn best_fio_match_with_score<'a, S>(fio: &str, candidates: &'a [S]) -> (Option<&'a str>, f64)
where
    S: AsRef<str>,
{
    let nf = normalize_fio(fio);
    if nf.is_empty() {
        return (None, 0.0);
    }

    let mut best: (Option<&str>, f64) = (None, 0.0);
    for cand in candidates {
        let nc = normalize_fio(cand.as_ref());
        if nc.is_empty() {
            continue;
        }
        let score = similarity(&nf, &nc);
        if score > best.1 {
            best = (Some(cand.as_ref()), score);
        }
    }
    best
}
