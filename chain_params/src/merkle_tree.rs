use crate::utils::double_sha256;

/// Root of the pairwise double-SHA256 tree over `txids`. Odd levels pair the
/// last node with itself; a single transaction is its own root.
pub fn merkle_tree_root(txids: &[[u8; 32]]) -> [u8; 32] {
    let mut level: Vec<[u8; 32]> = txids.to_vec();
    if level.is_empty() {
        return [0u8; 32];
    }

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                double_sha256(&[left, right].concat())
            })
            .collect();
    }

    level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_leaf_is_root() {
        let leaf = [7u8; 32];
        assert_eq!(merkle_tree_root(&[leaf]), leaf);
    }

    #[test]
    fn test_empty_set_has_zero_root() {
        assert_eq!(merkle_tree_root(&[]), [0u8; 32]);
    }

    #[test]
    fn test_odd_level_duplicates_last_node() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        let c = [3u8; 32];

        let ab = double_sha256(&[a, b].concat());
        let cc = double_sha256(&[c, c].concat());
        let expected = double_sha256(&[ab, cc].concat());

        assert_eq!(merkle_tree_root(&[a, b, c]), expected);
    }
}
