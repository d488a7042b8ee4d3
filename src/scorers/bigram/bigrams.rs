use std::collections::HashMap;

/// Split a normalized string into its overlapping two-character windows.
///
/// A string of `L` characters yields `L - 1` bigrams; empty and
/// single-character strings yield none.
pub fn bigrams(text: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Multiset intersection size of two bigram lists.
///
/// Each bigram in `reference` can be matched at most once. Counting through a
/// frequency bag gives the same cardinality as scanning and removing matches
/// one by one, in linear time.
pub fn intersection_count(candidate: &[(char, char)], reference: &[(char, char)]) -> usize {
    let mut bag: HashMap<(char, char), usize> = HashMap::with_capacity(reference.len());
    for &pair in reference {
        *bag.entry(pair).or_insert(0) += 1;
    }

    let mut matched = 0;
    for pair in candidate {
        if let Some(remaining) = bag.get_mut(pair) {
            if *remaining > 0 {
                *remaining -= 1;
                matched += 1;
            }
        }
    }
    matched
}
