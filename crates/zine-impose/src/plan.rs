//! Saddle-fold imposition planning
//!
//! This module computes the page order for the single-fold zine signature:
//! every output sheet carries 2 pages per side, and nesting the folded
//! sheets restores reading order.
//!
//! ## Fold order
//!
//! For an 8-page zine the output sheets look like:
//!
//! ```text
//! Sheet 1 (outer face):   Sheet 1 (inner face):
//! +--------+--------+     +--------+--------+
//! |   8    |   1    |     |   2    |   7    |
//! +--------+--------+     +--------+--------+
//!
//! Sheet 2 (outer face):   Sheet 2 (inner face):
//! +--------+--------+     +--------+--------+
//! |   6    |   3    |     |   4    |   5    |
//! +--------+--------+     +--------+--------+
//! ```
//!
//! Page counts that are not a multiple of 4 are padded with blank filler
//! pages; [`FillPosition`] controls where the blanks land in the reading
//! order before the fold permutation is applied.

use crate::types::{FillPosition, ImposeError, Result};

/// The two page slots printed on one output sheet face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetFaces {
    /// Source page rendered into the left half (`None` = blank)
    pub left: Option<usize>,
    /// Source page rendered into the right half (`None` = blank)
    pub right: Option<usize>,
}

/// A complete imposition plan for one source document.
///
/// Built once per invocation from the real page count and the fill policy;
/// pure data afterwards, safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionPlan {
    /// Flat slot order, length `padded_pages`. Consumed two at a time:
    /// entries `2k` and `2k + 1` are the left and right slots of sheet `k`.
    order: Vec<Option<usize>>,
    source_pages: usize,
    filler_pages: usize,
}

impl ImpositionPlan {
    /// Plan the imposition for `source_pages` real pages.
    ///
    /// Returns [`ImposeError::NoPages`] for an empty document; the caller
    /// must not proceed to render anything in that case.
    pub fn build(source_pages: usize, fill_position: FillPosition) -> Result<Self> {
        if source_pages == 0 {
            return Err(ImposeError::NoPages);
        }

        // Pad to the sheet unit: the smallest multiple of 4 holding all pages
        let padded = ((source_pages + 3) / 4) * 4;
        let filler_pages = padded - source_pages;

        let sequence = logical_sequence(source_pages, padded, fill_position);

        // Walk inward from both ends of the reading order. Iteration i emits
        // the outer face (last, first) and inner face (first+1, last-1) of
        // physical sheet i; each nested sheet sits one layer further in.
        let mut order = Vec::with_capacity(padded);
        for i in 0..padded / 4 {
            let last = padded - 1 - 2 * i;
            let first = 2 * i;
            order.push(sequence[last]); // outer left
            order.push(sequence[first]); // outer right
            order.push(sequence[first + 1]); // inner left
            order.push(sequence[last - 1]); // inner right
        }

        // Markers at or past the real page count resolve to blank
        let order = order
            .into_iter()
            .map(|slot| (slot < source_pages).then_some(slot))
            .collect();

        Ok(Self {
            order,
            source_pages,
            filler_pages,
        })
    }

    /// Number of real pages in the source document
    pub fn source_pages(&self) -> usize {
        self.source_pages
    }

    /// Page count padded up to the sheet unit (always a multiple of 4)
    pub fn padded_pages(&self) -> usize {
        self.order.len()
    }

    /// Blank pages added to reach the sheet unit (0..=3)
    pub fn filler_pages(&self) -> usize {
        self.filler_pages
    }

    /// Number of output sheets (2 slots each)
    pub fn sheet_count(&self) -> usize {
        self.order.len() / 2
    }

    /// The flat slot order, two entries per output sheet
    pub fn slots(&self) -> &[Option<usize>] {
        &self.order
    }

    /// Iterate the plan one output sheet at a time
    pub fn sheets(&self) -> impl Iterator<Item = SheetFaces> + '_ {
        self.order.chunks(2).map(|pair| SheetFaces {
            left: pair[0],
            right: pair[1],
        })
    }
}

/// Build the reading order with filler positions folded in, length `padded`.
///
/// Values `>= source_pages` are filler markers; they only carry position,
/// never content. With no filler both policies collapse to the plain
/// sequential order.
fn logical_sequence(source_pages: usize, padded: usize, fill_position: FillPosition) -> Vec<usize> {
    let fillers = source_pages..padded;
    if fillers.is_empty() {
        return (0..padded).collect();
    }

    match fill_position {
        FillPosition::End => (0..source_pages).chain(fillers).collect(),
        FillPosition::BeforeLast => (0..source_pages - 1)
            .chain(fillers)
            .chain(std::iter::once(source_pages - 1))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_page_order() {
        let plan = ImpositionPlan::build(8, FillPosition::End).unwrap();

        assert_eq!(plan.padded_pages(), 8);
        assert_eq!(plan.filler_pages(), 0);
        assert_eq!(
            plan.slots(),
            &[
                Some(7),
                Some(0),
                Some(1),
                Some(6),
                Some(5),
                Some(2),
                Some(3),
                Some(4)
            ]
        );
    }

    #[test]
    fn test_eight_page_sheets() {
        let plan = ImpositionPlan::build(8, FillPosition::End).unwrap();
        let sheets: Vec<_> = plan.sheets().collect();

        assert_eq!(sheets.len(), 4);
        assert_eq!(sheets[0].left, Some(7));
        assert_eq!(sheets[0].right, Some(0));
        assert_eq!(sheets[1].left, Some(1));
        assert_eq!(sheets[1].right, Some(6));
        assert_eq!(sheets[2].left, Some(5));
        assert_eq!(sheets[2].right, Some(2));
        assert_eq!(sheets[3].left, Some(3));
        assert_eq!(sheets[3].right, Some(4));
    }

    #[test]
    fn test_five_pages_fill_end() {
        let plan = ImpositionPlan::build(5, FillPosition::End).unwrap();

        assert_eq!(plan.padded_pages(), 8);
        assert_eq!(plan.filler_pages(), 3);
        // Same permutation as 8 pages, with positions 5..8 resolving blank
        assert_eq!(
            plan.slots(),
            &[
                None,
                Some(0),
                Some(1),
                None,
                None,
                Some(2),
                Some(3),
                Some(4)
            ]
        );
    }

    #[test]
    fn test_five_pages_fill_before_last() {
        let plan = ImpositionPlan::build(5, FillPosition::BeforeLast).unwrap();

        assert_eq!(plan.padded_pages(), 8);
        assert_eq!(plan.filler_pages(), 3);
        // Reading order 0,1,2,3,blank,blank,blank,4: the last real page
        // takes the final logical position and prints on the outer face
        // alongside the front cover
        assert_eq!(
            plan.slots(),
            &[
                Some(4),
                Some(0),
                Some(1),
                None,
                None,
                Some(2),
                Some(3),
                None
            ]
        );
    }

    #[test]
    fn test_last_page_shares_outer_face_with_cover() {
        // BeforeLast keeps the back cover on the outermost face whenever
        // filler is needed
        for n in [5, 6, 7, 9, 10, 11] {
            let plan = ImpositionPlan::build(n, FillPosition::BeforeLast).unwrap();
            let outer = plan.sheets().next().unwrap();
            assert_eq!(outer.left, Some(n - 1), "n = {}", n);
            assert_eq!(outer.right, Some(0), "n = {}", n);
        }
    }

    #[test]
    fn test_single_page() {
        let plan = ImpositionPlan::build(1, FillPosition::End).unwrap();

        assert_eq!(plan.padded_pages(), 4);
        assert_eq!(plan.filler_pages(), 3);
        assert_eq!(plan.sheet_count(), 2);
        // The lone page lands on the front cover slot
        assert_eq!(plan.slots(), &[None, Some(0), None, None]);
    }

    #[test]
    fn test_empty_document() {
        let result = ImpositionPlan::build(0, FillPosition::End);
        assert!(matches!(result, Err(ImposeError::NoPages)));

        let result = ImpositionPlan::build(0, FillPosition::BeforeLast);
        assert!(matches!(result, Err(ImposeError::NoPages)));
    }

    #[test]
    fn test_every_source_page_placed_exactly_once() {
        for n in 1..=48 {
            for fill in [FillPosition::End, FillPosition::BeforeLast] {
                let plan = ImpositionPlan::build(n, fill).unwrap();

                assert_eq!(plan.padded_pages() % 4, 0);
                assert!(plan.padded_pages() >= n);
                assert!(plan.filler_pages() <= 3);
                assert_eq!(plan.padded_pages(), n + plan.filler_pages());

                let mut seen = vec![false; n];
                let mut blanks = 0;
                for slot in plan.slots() {
                    match slot {
                        Some(idx) => {
                            assert!(*idx < n);
                            assert!(!seen[*idx], "page {} placed twice (n = {})", idx, n);
                            seen[*idx] = true;
                        }
                        None => blanks += 1,
                    }
                }
                assert!(seen.iter().all(|&s| s));
                assert_eq!(blanks, plan.filler_pages());
            }
        }
    }

    #[test]
    fn test_policies_agree_without_filler() {
        for n in [4, 8, 12, 16, 20] {
            let end = ImpositionPlan::build(n, FillPosition::End).unwrap();
            let before_last = ImpositionPlan::build(n, FillPosition::BeforeLast).unwrap();
            assert_eq!(end, before_last, "n = {}", n);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = ImpositionPlan::build(13, FillPosition::BeforeLast).unwrap();
        let b = ImpositionPlan::build(13, FillPosition::BeforeLast).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_logical_sequence_end() {
        assert_eq!(
            logical_sequence(5, 8, FillPosition::End),
            vec![0, 1, 2, 3, 4, 5, 6, 7]
        );
    }

    #[test]
    fn test_logical_sequence_before_last() {
        assert_eq!(
            logical_sequence(5, 8, FillPosition::BeforeLast),
            vec![0, 1, 2, 3, 5, 6, 7, 4]
        );
    }
}
