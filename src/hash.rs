use crate::digest::DigestAlgorithm;

/// Index of hash function `function` for `value`, in `[0, max_items)`.
///
/// The function number is salted in as the hex text of its own digest, and
/// the first four bytes of the salted digest are read as a big-endian `u32`.
pub fn salted_index(algorithm: DigestAlgorithm, value: &str, function: usize, max_items: usize) -> usize {
    debug_assert!(max_items > 0, "max_items must be > 0");
    let salt = hex::encode(algorithm.digest(&[function.to_string().as_bytes()]));
    let raw = algorithm.digest(&[value.as_bytes(), salt.as_bytes()]);
    let head = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
    head as usize % max_items
}

pub(crate) fn iter_indices(
    algorithm: DigestAlgorithm,
    value: &str,
    num_functions: usize,
    max_items: usize,
) -> impl Iterator<Item = usize> + '_ {
    (0..num_functions).map(move |i| salted_index(algorithm, value, i, max_items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_matches_manual_derivation() {
        let algorithm = DigestAlgorithm::Sha256;
        let salt = hex::encode(algorithm.digest(&[b"3".as_slice()]));
        let input = format!("hello{salt}");
        let raw = algorithm.digest(&[input.as_bytes()]);
        let expected = u32::from_be_bytes(raw[..4].try_into().unwrap()) as usize % 500;

        assert_eq!(salted_index(algorithm, "hello", 3, 500), expected);
    }

    #[test]
    fn test_pinned_indices() {
        let pinned = [
            (DigestAlgorithm::Sha1, [392, 313, 188, 462]),
            (DigestAlgorithm::Md5, [117, 493, 200, 282]),
            (DigestAlgorithm::Sha256, [318, 94, 85, 231]),
        ];
        for (algorithm, expected) in pinned {
            let indices: Vec<_> = iter_indices(algorithm, "hello", 4, 500).collect();
            assert_eq!(indices, expected, "{algorithm}");
        }
    }

    #[test]
    fn test_salt_is_hex_text_not_raw_bytes() {
        let algorithm = DigestAlgorithm::Sha256;
        let salt = algorithm.digest(&[b"0".as_slice()]);
        let raw = algorithm.digest(&[b"hello".as_slice(), salt.as_slice()]);
        let raw_salted = u32::from_be_bytes(raw[..4].try_into().unwrap()) as usize;

        assert_ne!(salted_index(algorithm, "hello", 0, usize::MAX), raw_salted);
    }

    #[test]
    fn test_deterministic() {
        for algorithm in DigestAlgorithm::ALL {
            let first: Vec<_> = iter_indices(algorithm, "some value", 8, 1000).collect();
            let second: Vec<_> = iter_indices(algorithm, "some value", 8, 1000).collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_in_range() {
        for max_items in [1, 2, 7, 500, 1 << 20] {
            for i in 0..50 {
                let value = format!("value-{i}");
                assert!(iter_indices(DigestAlgorithm::Sha256, &value, 5, max_items).all(|h| h < max_items));
            }
        }
    }

    #[test]
    fn test_functions_vary() {
        let indices: HashSet<_> = iter_indices(DigestAlgorithm::Sha256, "value", 16, 1 << 20).collect();
        assert!(indices.len() > 1);
    }

    #[test]
    fn test_algorithms_vary() {
        let sha2 = salted_index(DigestAlgorithm::Sha256, "value", 0, 1 << 30);
        let sha3 = salted_index(DigestAlgorithm::Sha3_256, "value", 0, 1 << 30);
        assert_ne!(sha2, sha3);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(iter_indices(DigestAlgorithm::Sha256, "", 4, 10).count(), 4);
    }

    #[test]
    fn test_no_functions() {
        assert_eq!(iter_indices(DigestAlgorithm::Sha256, "value", 0, 10).count(), 0);
    }
}
