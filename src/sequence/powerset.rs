/// All subsets of `items`, each keeping the input order of its elements.
///
/// Subsets without the first element come before the subsets with it, and the
/// same holds recursively for the rest, so `[a, b]` gives
/// `[], [b], [a], [a, b]`.
pub fn powerset<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let Some((first, rest)) = items.split_first() else {
        return vec![Vec::new()];
    };

    let mut subsets = powerset(rest);
    let with_first: Vec<Vec<T>> = subsets
        .iter()
        .map(|subset| {
            let mut extended = Vec::with_capacity(subset.len() + 1);
            extended.push(first.clone());
            extended.extend(subset.iter().cloned());
            extended
        })
        .collect();

    subsets.extend(with_first);
    subsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powerset_order() {
        assert_eq!(
            powerset(&['a', 'b', 'c']),
            vec![
                vec![],
                vec!['c'],
                vec!['b'],
                vec!['b', 'c'],
                vec!['a'],
                vec!['a', 'c'],
                vec!['a', 'b'],
                vec!['a', 'b', 'c'],
            ]
        );
    }

    #[test]
    fn test_powerset_sizes() {
        assert_eq!(powerset::<u8>(&[]), vec![Vec::<u8>::new()]);
        assert_eq!(powerset(&[1, 2, 3, 4, 5]).len(), 32);
    }
}
