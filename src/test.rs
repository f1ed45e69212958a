use crate::LeftRightTree;

/// Level-order inputs covering skewed, sparse and full shapes
pub const TRAVERSAL_TREES: &[&[&str]] = &[
    &["1", "2", "3", "#", "#", "4", "#", "5", "6"],
    &["1", "2", "3", "#", "#", "#", "4", "5", "6"],
    &[
        "7", "1", "9", "0", "3", "8", "10", "#", "#", "2", "5", "#", "#", "#", "#", "#", "#", "4",
        "6",
    ],
    &["1", "#", "2", "3", "#", "#", "4", "5", "#"],
    &["1", "#", "2", "#", "3", "#", "4"],
    &["1", "2", "#", "3", "#", "4", "#"],
    &["1", "2", "3", "4", "#", "#", "5"],
    &["1", "2", "3", "4", "5"],
    &["6", "3", "8", "1", "7", "#", "9"],
    &["-2", "#", "-3"],
    &["42"],
];

/// Build a tree from level-order tokens, panicking on malformed input
pub fn tree(tokens: &[&str]) -> LeftRightTree {
    let tree = LeftRightTree::from_level_order(tokens).unwrap();
    println!("{}", tree);
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_build() {
        for tokens in TRAVERSAL_TREES {
            let t = tree(tokens);
            let values = tokens.iter().filter(|token| **token != "#").count();
            assert_eq!(t.len(), values, "{tokens:?}");
        }
    }
}
