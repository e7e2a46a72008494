//! Greedy first-fit pagination.
//!
//! # Algorithm
//! Single left-to-right pass. Each block is appended to the current page; if the
//! running height then exceeds the budget and the page already held a block, the
//! block moves to a fresh page instead. A block taller than the budget on its own
//! stays alone on its page and overflows it.
//!
//! # Guarantees
//! - Concatenating the pages' blocks reproduces the input sequence exactly.
//! - Every page with two or more blocks has a height sum ≤ budget.
//! - A block taller than the budget never shares a page.
//! - Landing exactly on the budget fits; only `height > budget` overflows.
//!
//! The packing is greedy, not minimal: it never looks ahead or reorders.

use serde::Serialize;

use crate::layout::block::Measured;

/// Blocks assigned to one physical page, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<B> {
    pub blocks: Vec<B>,
    /// Sum of the block heights on this page.
    pub height_px: f32,
}

impl<B> Page<B> {
    fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            height_px: 0.0,
        }
    }
}

/// Packs measured blocks into pages of at most `budget_px` content height.
///
/// The budget must be positive; it comes from fixed page geometry. An empty input
/// produces no pages.
pub fn paginate<B, I>(blocks: I, budget_px: f32) -> Vec<Page<B>>
where
    B: Measured,
    I: IntoIterator<Item = B>,
{
    debug_assert!(budget_px > 0.0, "page budget must be positive");

    let mut pages: Vec<Page<B>> = Vec::new();
    let mut current = Page::empty();

    for block in blocks {
        let height = block.height();
        if !current.blocks.is_empty() && current.height_px + height > budget_px {
            pages.push(std::mem::replace(&mut current, Page::empty()));
        }
        current.height_px += height;
        current.blocks.push(block);
    }

    if !current.blocks.is_empty() {
        pages.push(current);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Block {
        name: &'static str,
        height: f32,
    }

    impl Measured for Block {
        fn height(&self) -> f32 {
            self.height
        }
    }

    fn blocks(heights: &[f32]) -> Vec<Block> {
        const NAMES: [&str; 8] = ["b1", "b2", "b3", "b4", "b5", "b6", "b7", "b8"];
        heights
            .iter()
            .zip(NAMES)
            .map(|(&height, name)| Block { name, height })
            .collect()
    }

    fn names(pages: &[Page<Block>]) -> Vec<Vec<&'static str>> {
        pages
            .iter()
            .map(|p| p.blocks.iter().map(|b| b.name).collect())
            .collect()
    }

    #[test]
    fn test_three_400s_split_after_two() {
        let pages = paginate(blocks(&[400.0, 400.0, 400.0]), 1000.0);
        assert_eq!(names(&pages), vec![vec!["b1", "b2"], vec!["b3"]]);
        assert_eq!(pages[0].height_px, 800.0);
        assert_eq!(pages[1].height_px, 400.0);
    }

    #[test]
    fn test_oversized_block_stays_alone() {
        let pages = paginate(blocks(&[1200.0, 300.0]), 1000.0);
        assert_eq!(names(&pages), vec![vec!["b1"], vec!["b2"]]);
        assert_eq!(pages[0].height_px, 1200.0);
    }

    #[test]
    fn test_four_300s_split_after_three() {
        let pages = paginate(blocks(&[300.0, 300.0, 300.0, 300.0]), 1000.0);
        assert_eq!(names(&pages), vec![vec!["b1", "b2", "b3"], vec!["b4"]]);
    }

    #[test]
    fn test_exact_budget_fits() {
        let pages = paginate(blocks(&[600.0, 400.0, 1.0]), 1000.0);
        assert_eq!(names(&pages), vec![vec!["b1", "b2"], vec!["b3"]]);
        assert_eq!(pages[0].height_px, 1000.0);
    }

    #[test]
    fn test_oversized_block_mid_sequence_gets_own_page() {
        let pages = paginate(blocks(&[200.0, 1500.0, 200.0]), 1000.0);
        assert_eq!(names(&pages), vec![vec!["b1"], vec!["b2"], vec!["b3"]]);
    }

    #[test]
    fn test_empty_input_yields_no_pages() {
        let pages: Vec<Page<f32>> = paginate(Vec::<f32>::new(), 1000.0);
        assert!(pages.is_empty());
    }

    #[test]
    fn test_zero_height_blocks_share_page() {
        let pages = paginate(vec![0.0_f32, 0.0, 1000.0, 0.0], 1000.0);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].blocks.len(), 4);
    }

    #[test]
    fn test_greedy_does_not_backfill_earlier_pages() {
        // An optimal packer would put b3 next to b1; greedy never looks back.
        let pages = paginate(blocks(&[600.0, 500.0, 400.0]), 1000.0);
        assert_eq!(names(&pages), vec![vec!["b1"], vec!["b2", "b3"]]);
    }

    #[test]
    fn test_order_preserved_and_budget_respected_across_mixed_heights() {
        let heights = [120.0, 830.0, 40.0, 990.0, 10.0, 1300.0, 500.0, 499.0];
        let input = blocks(&heights);
        let pages = paginate(input.clone(), 1000.0);

        let flattened: Vec<Block> = pages.iter().flat_map(|p| p.blocks.clone()).collect();
        assert_eq!(flattened, input, "no reordering, duplication, or omission");

        for page in &pages {
            assert!(!page.blocks.is_empty());
            let sum: f32 = page.blocks.iter().map(|b| b.height).sum();
            assert!((sum - page.height_px).abs() < 1e-3);
            if page.blocks.len() > 1 {
                assert!(sum <= 1000.0, "multi-block page over budget: {sum}");
            }
            if page.blocks.iter().any(|b| b.height > 1000.0) {
                assert_eq!(page.blocks.len(), 1, "oversized block must be alone");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let heights = [310.0, 450.0, 120.0, 700.0, 90.0];
        let a = names(&paginate(blocks(&heights), 800.0));
        let b = names(&paginate(blocks(&heights), 800.0));
        assert_eq!(a, b);
    }
}
