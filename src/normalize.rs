use std::collections::BTreeSet;

/// Collapses a sequence of strings into its distinct elements, in
/// ascending lexicographic order by code point.
///
/// Every artifact kind (words, URLs, scripts) goes through this one
/// routine so dedup and ordering semantics stay identical across them.
pub fn normalize<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let set: BTreeSet<String> = items.into_iter().collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_and_sort() {
        let input = strings(&["pear", "apple", "pear", "banana", "apple"]);
        assert_eq!(normalize(input), strings(&["apple", "banana", "pear"]));
    }

    #[test]
    fn test_idempotent() {
        let input = strings(&["b", "a", "b", "c"]);
        let once = normalize(input);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_code_point_ordering() {
        // Uppercase sorts before lowercase; digits before letters.
        let input = strings(&["zebra", "Zebra", "1up"]);
        assert_eq!(normalize(input), strings(&["1up", "Zebra", "zebra"]));
    }

    #[test]
    fn test_empty() {
        assert!(normalize(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_strictly_ascending() {
        let input = strings(&["c", "a", "a", "b", "c", "b"]);
        let result = normalize(input);
        for pair in result.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
