//! Tests for the row-major reference construction

#[cfg(test)]
mod tests {
    use loomtile::Result;
    use loomtile::weave::iterative::{materialize_boundary, scan_block, weave_iterative};
    use loomtile::weave::rules::{RuleKind, RuleTable};
    use loomtile::weave::sequence::{ThreadSequence, sequence_by_name};
    use loomtile::weave::thread::{Crossing, Thread};

    // Tests a zero grid size is rejected before any weaving
    // Verified by weaving an empty grid successfully
    #[test]
    fn test_zero_size_is_rejected() -> Result<()> {
        let result = weave_iterative(
            RuleKind::Knot,
            0,
            sequence_by_name("g-r..")?,
            sequence_by_name("g-r..")?,
        );
        assert!(result.is_err());
        Ok(())
    }

    // Tests boundary materialization draws exactly the requested count
    // Verified by drawing one thread too many
    #[test]
    fn test_materialize_boundary_draws_size_threads() -> Result<()> {
        let mut seq = ThreadSequence::once_then(Thread::Green, Thread::Red);
        let threads = materialize_boundary(&mut seq, 4, "warp boundary")?;
        assert_eq!(
            threads,
            vec![Thread::Green, Thread::Red, Thread::Red, Thread::Red]
        );
        // The cursor advanced past the drawn threads
        assert_eq!(seq.next(), Some(Thread::Red));
        Ok(())
    }

    // Tests the first row and column take their threads from the boundaries
    // Verified by swapping the two boundary slices
    #[test]
    fn test_boundaries_seed_the_first_row_and_column() -> Result<()> {
        let table = RuleTable::new(RuleKind::Mod3);
        let top = [Thread::Red, Thread::Green, Thread::Blue];
        let side = [Thread::Blue, Thread::Green, Thread::Red];
        let block = scan_block(&table, &top, &side, Crossing::Warp)?;

        for (x, &seed) in top.iter().enumerate() {
            assert_eq!(block.get([0, x]).map(|c| c.up), Some(seed));
        }
        for (y, &seed) in side.iter().enumerate() {
            assert_eq!(block.get([y, 0]).map(|c| c.left), Some(seed));
        }
        Ok(())
    }

    // Tests the hand-enumerated rank-zero knot grid
    // Verified by starting the scan on a weft orientation
    #[test]
    fn test_rank_zero_knot_scan() -> Result<()> {
        let grid = weave_iterative(
            RuleKind::Knot,
            2,
            sequence_by_name("g-r..")?,
            sequence_by_name("g-r..")?,
        )?;

        assert_eq!(
            grid.get(0, 0).map(|c| (c.up, c.left, c.down, c.right)),
            Some((Thread::Green, Thread::Green, Thread::Green, Thread::Green))
        );
        assert_eq!(
            grid.get(0, 1).map(|c| (c.up, c.left, c.down, c.right)),
            Some((Thread::Red, Thread::Green, Thread::Red, Thread::Blue))
        );
        assert_eq!(
            grid.get(1, 0).map(|c| (c.up, c.left, c.down, c.right)),
            Some((Thread::Green, Thread::Red, Thread::Green, Thread::Blue))
        );
        assert_eq!(
            grid.get(1, 1).map(|c| (c.up, c.left, c.down, c.right)),
            Some((Thread::Red, Thread::Blue, Thread::Green, Thread::Blue))
        );
        Ok(())
    }

    // Tests rectangular blocks carry the shifted origin parity
    // Verified by ignoring the origin and always starting on warp
    #[test]
    fn test_scan_block_respects_the_origin_orientation() -> Result<()> {
        let table = RuleTable::new(RuleKind::Knot);
        let top = [Thread::Red];
        let side = [Thread::Green];

        // At a weft origin the right thread is rewritten instead of down
        let block = scan_block(&table, &top, &side, Crossing::Weft)?;
        assert_eq!(
            block.get([0, 0]).map(|c| (c.down, c.right)),
            Some((Thread::Red, Thread::Blue))
        );
        Ok(())
    }
}
