//! Text similarity scoring
//!
//! Decides whether two versions of a source text are "the same sentence"
//! for the purpose of keeping an existing translation, and whether a text
//! looks like a translation at all.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use regex::Regex;

/// Ratio above which two source texts count as a close match
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

lazy_static::lazy_static! {
    /// `|cRRGGBB` color start and `|r` color reset
    static ref COLOR_TAG: Regex =
        Regex::new(r"\|c[0-9a-zA-Z]{1,6}|\|r").expect("color tag pattern is valid");

    /// Grammatical suffix markers such as `^f` or `^N`
    static ref SUFFIX_MARKER: Regex =
        Regex::new(r"\^[fFnNpP]").expect("suffix marker pattern is valid");

    /// A black color tag directly followed by another color tag
    static ref DOUBLED_COLOR_TAG: Regex =
        Regex::new(r"^\|c000000\|c[0-9a-zA-Z]{6}").expect("doubled color tag pattern is valid");
}

/// Remove decorations that differ between otherwise identical texts
///
/// Ellipsis and em dash characters go, as does the mojibake form of the
/// ellipsis. A text opening with a black color tag immediately overridden
/// by another color loses every `|c000000`.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.replace(['…', '—'], "").replace("â€¦", "");
    if DOUBLED_COLOR_TAG.is_match(&cleaned) {
        cleaned = cleaned.replace("|c000000", "");
    }
    cleaned
}

/// Strip color tags and suffix markers
#[must_use]
pub fn normalize(text: &str) -> String {
    let without_color = COLOR_TAG.replace_all(text, "");
    SUFFIX_MARKER.replace_all(&without_color, "").into_owned()
}

/// Similarity of two texts in `[0, 1]` after [`normalize`]
///
/// Twice the number of characters in matching blocks over the total number
/// of characters. Two empty texts are identical.
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

/// Whether two source texts are close enough to keep a translation
///
/// Exact equality always matches. Otherwise both texts must be non-empty
/// and score above [`SIMILARITY_THRESHOLD`].
#[must_use]
pub fn is_close_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if a.is_empty() || b.is_empty() {
        return false;
    }
    ratio(a, b) > SIMILARITY_THRESHOLD
}

/// Whether a text looks like it was translated from English
///
/// True as soon as any character is outside 7-bit ASCII; the accented Latin
/// letters of the European translations all are. Invalid UTF-8 is ignored
/// rather than counted.
#[must_use]
pub fn looks_translated(text: &[u8]) -> bool {
    text.utf8_chunks()
        .any(|chunk| chunk.valid().chars().any(|c| !c.is_ascii()))
}

/// Decode raw text for scoring, replacing invalid sequences
pub(crate) fn decode(text: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(text)
}

// ============================================================================
// Matching blocks
// ============================================================================

/// Longest-matching-block comparison of two character sequences
///
/// Elements of `b` that make up more than 1% of a sequence of 200 or more
/// are "popular" and never start a match, which keeps long texts fast and
/// makes heavily repetitive text score low.
struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    b2j: HashMap<char, Vec<usize>>,
}

#[derive(Debug, Clone, Copy)]
struct Match {
    a: usize,
    b: usize,
    size: usize,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        let n = b.len();
        if n >= 200 {
            let ntest = n / 100 + 1;
            let popular: HashSet<char> = b2j
                .iter()
                .filter(|(_, indexes)| indexes.len() > ntest)
                .map(|(&c, _)| c)
                .collect();
            b2j.retain(|c, _| !popular.contains(c));
        }

        Self { a, b, b2j }
    }

    fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        2.0 * matches as f64 / total as f64
    }

    fn matching_blocks(&self) -> Vec<Match> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        blocks
    }

    /// Longest block with `a[i..i+size] == b[j..j+size]` inside the bounds
    ///
    /// Ties go to the earliest block in `a`, then in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let mut best = Match {
            a: alo,
            b: blo,
            size: 0,
        };

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(indexes) = self.b2j.get(c) {
                for &j in indexes {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j.checked_sub(1).and_then(|p| j2len.get(&p)).copied().unwrap_or(0) + 1;
                    next.insert(j, k);
                    if k > best.size {
                        best = Match {
                            a: i + 1 - k,
                            b: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next;
        }

        // Popular elements never start a match but may extend one
        while best.a > alo && best.b > blo && a[best.a - 1] == b[best.b - 1] {
            best.a -= 1;
            best.b -= 1;
            best.size += 1;
        }
        while best.a + best.size < ahi
            && best.b + best.size < bhi
            && a[best.a + best.size] == b[best.b + best.size]
        {
            best.size += 1;
        }
        best
    }
}
