//! Rhyme-scheme inference over a block of lyric lines.
//!
//! Lines are fingerprinted by an "ending key": the last up-to-3 characters
//! of the line's final word, after stripping one trailing punctuation mark
//! and lowercasing. Two keys are judged to rhyme when either string contains
//! the other. The scan over previously seen keys is first-match-wins in
//! insertion order; the resulting grouping is not closed under transitivity,
//! and must stay that way since it is what users see highlighted.

/// Number of visual group slots in the frontend colour palette. Group ids
/// themselves are unbounded; only the colour assignment wraps.
pub const PALETTE_SLOTS: usize = 8;

/// Result of classifying one lyric block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeAnalysis {
    /// One letter code per line, concatenated in line order ("AABB").
    /// Group ids past 25 use spreadsheet-style codes (AA, AB, ...).
    pub scheme: String,
    /// Group id per line, aligned with the blank-filtered input lines.
    pub groups: Vec<usize>,
}

impl RhymeAnalysis {
    /// Palette slot for a group id. Presentation only.
    pub fn palette_slot(group: usize) -> usize {
        group % PALETTE_SLOTS
    }
}

const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Last whitespace-delimited token of the line, with at most one trailing
/// punctuation mark removed, lowercased.
fn last_word(line: &str) -> String {
    let word = line.split_whitespace().next_back().unwrap_or("");
    word.strip_suffix(TRAILING_PUNCTUATION)
        .unwrap_or(word)
        .to_lowercase()
}

/// The final 3 characters of the word, or the whole word if shorter.
fn ending_key(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let start = chars.len().saturating_sub(3);
    chars[start..].iter().collect()
}

/// Letter code for a group id: 0 -> A, 25 -> Z, 26 -> AA, 27 -> AB, ...
fn group_letters(id: usize) -> String {
    let mut id = id;
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (id % 26) as u8) as char);
        if id < 26 {
            break;
        }
        id = id / 26 - 1;
    }
    letters.into_iter().rev().collect()
}

/// Assign each line of a lyric block to a rhyme group.
///
/// Blank lines are dropped before analysis. Returns `None` when nothing is
/// left to classify; an empty block has no scheme rather than an empty one.
///
/// A line ending in a lone punctuation mark has an empty ending key, which
/// is "contained" by every key, so it collapses into the first group seen.
/// Only one trailing mark is stripped: an ellipsis keeps a ".." key and
/// forms its own group. That is accepted behavior, not something to fix.
pub fn classify<S: AsRef<str>>(lines: &[S]) -> Option<RhymeAnalysis> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|l| l.as_ref())
        .filter(|l| !l.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }

    // Insertion order matters: the first previously-seen key for which
    // either string contains the other wins.
    let mut seen: Vec<(String, usize)> = Vec::new();
    let mut groups = Vec::with_capacity(lines.len());

    for line in &lines {
        let key = ending_key(&last_word(line));
        let group = seen
            .iter()
            .find(|(k, _)| k.contains(key.as_str()) || key.contains(k.as_str()))
            .map(|(_, id)| *id);
        let group = match group {
            Some(id) => id,
            None => {
                let id = seen.len();
                seen.push((key, id));
                id
            }
        };
        groups.push(group);
    }

    let scheme = groups.iter().map(|id| group_letters(*id)).collect();
    Some(RhymeAnalysis { scheme, groups })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_endings_share_a_group() {
        let lines = [
            "I walk alone at night",
            "Stars are burning bright",
            "Nothing feels quite right",
        ];
        let analysis = classify(&lines).unwrap();
        assert_eq!(analysis.scheme, "AAA");
        assert_eq!(analysis.groups, vec![0, 0, 0]);
    }

    #[test]
    fn scheme_length_matches_filtered_line_count() {
        let lines = ["first line here", "", "  ", "second line apart"];
        let analysis = classify(&lines).unwrap();
        assert_eq!(analysis.scheme.len(), 2);
        assert_eq!(analysis.groups.len(), 2);
    }

    #[test]
    fn containment_joins_shorter_key_to_earlier_group() {
        // "sight" -> "ght", "alright" -> "ght": containment, same group.
        let lines = ["a welcome sight", "everything is alright"];
        let analysis = classify(&lines).unwrap();
        assert_eq!(analysis.scheme, "AA");
    }

    #[test]
    fn distinct_endings_get_fresh_groups() {
        let lines = ["down by the sea", "up in the air", "lost in the rain"];
        let analysis = classify(&lines).unwrap();
        assert_eq!(analysis.scheme, "ABC");
        assert_eq!(analysis.groups, vec![0, 1, 2]);
    }

    #[test]
    fn trailing_punctuation_is_ignored() {
        let lines = ["hold me tight!", "through the night."];
        let analysis = classify(&lines).unwrap();
        assert_eq!(analysis.scheme, "AA");
    }

    #[test]
    fn case_is_ignored() {
        let lines = ["SINGING IN THE RAIN", "walking in the rain"];
        assert_eq!(classify(&lines).unwrap().scheme, "AA");
    }

    #[test]
    fn empty_block_has_no_result() {
        let empty: [&str; 0] = [];
        assert!(classify(&empty).is_none());
        assert!(classify(&["", "   "]).is_none());
    }

    #[test]
    fn first_match_wins_over_later_candidates() {
        // "me" is contained in both "ame" and "ome"; it must join the group
        // of "ame" because that key was seen first.
        let lines = ["you call my name", "welcome home", "stay with me"];
        let analysis = classify(&lines).unwrap();
        assert_eq!(analysis.groups, vec![0, 1, 0]);
        assert_eq!(analysis.scheme, "ABA");
    }

    #[test]
    fn lone_punctuation_line_collapses_into_first_group() {
        // A single mark strips to an empty key, contained in every key.
        let lines = ["shine so bright", "?"];
        let analysis = classify(&lines).unwrap();
        assert_eq!(analysis.groups, vec![0, 0]);
    }

    #[test]
    fn ellipsis_keeps_a_key_and_opens_its_own_group() {
        // Only one trailing mark is stripped, so "..." fingerprints as "..".
        let lines = ["shine so bright", "..."];
        let analysis = classify(&lines).unwrap();
        assert_eq!(analysis.groups, vec![0, 1]);
        assert_eq!(analysis.scheme, "AB");
    }

    #[test]
    fn group_letters_extend_past_z() {
        assert_eq!(group_letters(0), "A");
        assert_eq!(group_letters(25), "Z");
        assert_eq!(group_letters(26), "AA");
        assert_eq!(group_letters(27), "AB");
        assert_eq!(group_letters(51), "AZ");
        assert_eq!(group_letters(52), "BA");
    }

    #[test]
    fn palette_slot_wraps_while_group_ids_do_not() {
        assert_eq!(RhymeAnalysis::palette_slot(3), 3);
        assert_eq!(RhymeAnalysis::palette_slot(8), 0);
        assert_eq!(RhymeAnalysis::palette_slot(11), 3);
    }
}
