/// Levenshtein distance between `a` and `b` with unit costs.
///
/// Characters are compared exactly, so callers fold case beforehand.
/// Runs in `O(len(a) * len(b))` time and space over the full grid.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // grid[j][i] holds the distance between b[..j] and a[..i]
    let mut grid = vec![vec![0usize; a.len() + 1]; b.len() + 1];
    for (i, cell) in grid[0].iter_mut().enumerate() {
        *cell = i;
    }
    for (j, row) in grid.iter_mut().enumerate() {
        row[0] = j;
    }

    for j in 1..=b.len() {
        for i in 1..=a.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            grid[j][i] = (grid[j][i - 1] + 1) // deletion
                .min(grid[j - 1][i] + 1) // insertion
                .min(grid[j - 1][i - 1] + cost); // substitution
        }
    }

    grid[b.len()][a.len()]
}

#[cfg(test)]
mod tests {
    use super::distance;

    #[test]
    fn distance_between_equal_strings_is_zero() {
        assert_eq!(distance("Stanford", "Stanford"), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn distance_from_empty_is_length() {
        assert_eq!(distance("", "Yale"), 4);
        assert_eq!(distance("Brown", ""), 5);
    }

    #[test]
    fn distance_matches_known_values() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("harvard", "yale"), 6);
    }

    #[test]
    fn distance_is_case_sensitive() {
        assert_eq!(distance("Yale", "yale"), 1);
    }

    #[test]
    fn distance_counts_characters_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("", "naïve"), 5);
    }
}
