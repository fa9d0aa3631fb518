/// Indices of the smallest tail of an increasing run of each length, and for
/// every element the index of its predecessor in the best run ending there.
fn tails<T: Ord>(arr: &[T]) -> (Vec<usize>, Vec<Option<usize>>) {
    let mut ends: Vec<usize> = Vec::new();
    let mut prev = vec![None; arr.len()];

    for (i, val) in arr.iter().enumerate() {
        // Tails are strictly increasing, so the longest run `val` extends is found by bisection
        let length = ends.partition_point(|&e| arr[e] < *val);
        prev[i] = length.checked_sub(1).map(|j| ends[j]);

        if length == ends.len() {
            ends.push(i);
        } else if *val < arr[ends[length]] {
            ends[length] = i;
        }
    }

    (ends, prev)
}

/// Length of the longest strictly increasing subsequence of `arr`
pub fn lis<T: Ord>(arr: &[T]) -> usize {
    tails(arr).0.len()
}

/// One longest strictly increasing subsequence of `arr`
pub fn lis_sequence<T: Ord>(arr: &[T]) -> Vec<&T> {
    let (ends, prev) = tails(arr);
    let mut sequence = Vec::with_capacity(ends.len());
    let mut current = ends.last().copied();

    while let Some(i) = current {
        sequence.push(&arr[i]);
        current = prev[i];
    }

    sequence.reverse();
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lis_lengths() {
        assert_eq!(lis::<i32>(&[]), 0);
        assert_eq!(lis(&[3]), 1);
        assert_eq!(lis(&[10, 20, 11, 32, 22, 48, 43]), 4);
        assert_eq!(lis(&[4, 2, 1]), 1);
        assert_eq!(lis(&[5, 1, 3, 4, 7]), 4);
        assert_eq!(lis(&[4, 1, 5, 3, 7, 6, 2]), 3);
        assert_eq!(lis(&[10, 22, 9, 33, 21, 50, 41, 60, 80]), 6);
        assert_eq!(lis(&[7, 10, 9, 2, 3, 8, 1]), 3);
        assert_eq!(lis(&[9, 11, 2, 13, 7, 15]), 4);
    }

    #[test]
    fn test_lis_is_strict() {
        assert_eq!(lis(&[2, 2, 2]), 1);
        assert_eq!(lis(&[1, 2, 2, 3]), 3);
    }

    #[test]
    fn test_lis_sequence_is_increasing() {
        let arr = [10, 22, 9, 33, 21, 50, 41, 60, 80];
        let sequence = lis_sequence(&arr);
        assert_eq!(sequence.len(), lis(&arr));
        assert!(sequence.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(sequence, vec![&10, &22, &33, &41, &60, &80]);
    }
}
