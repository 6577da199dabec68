//! Tests for the crossing rule variants and their memoized table

#[cfg(test)]
mod tests {
    use loomtile::weave::grid::Cell;
    use loomtile::weave::rules::{RuleKind, RuleTable};
    use loomtile::weave::thread::{Crossing, Thread};

    // Tests equal inputs pass through the knot unchanged
    // Verified by rewriting the under thread unconditionally
    #[test]
    fn test_knot_is_identity_on_equal_threads() {
        let table = RuleTable::new(RuleKind::Knot);
        for colour in Thread::PRIMARIES {
            assert_eq!(
                table.cell(colour, colour, Crossing::Warp).ok(),
                Some(Cell::uniform(colour))
            );
            assert_eq!(
                table.cell(colour, colour, Crossing::Weft).ok(),
                Some(Cell::uniform(colour))
            );
        }
    }

    // Tests unequal knot inputs rewrite the under thread to the third colour
    // Verified by rewriting the over thread instead
    #[test]
    fn test_knot_rewrites_under_thread_to_third_colour() {
        let table = RuleTable::new(RuleKind::Knot);
        let warp = table.cell(Thread::Red, Thread::Green, Crossing::Warp).ok();
        assert_eq!(
            warp,
            Some(Cell {
                up: Thread::Red,
                left: Thread::Green,
                down: Thread::Blue,
                right: Thread::Green,
            })
        );
        let weft = table.cell(Thread::Red, Thread::Green, Crossing::Weft).ok();
        assert_eq!(
            weft,
            Some(Cell {
                up: Thread::Red,
                left: Thread::Green,
                down: Thread::Red,
                right: Thread::Blue,
            })
        );
    }

    // Tests xor leaves the cell alone when the over thread is red
    // Verified by flipping on red as well
    #[test]
    fn test_xor_passes_through_under_red_over_thread() {
        let table = RuleTable::new(RuleKind::Xor);
        // Warp: left is the over thread
        assert_eq!(
            table.cell(Thread::Green, Thread::Red, Crossing::Warp).ok(),
            Some(Cell {
                up: Thread::Green,
                left: Thread::Red,
                down: Thread::Green,
                right: Thread::Red,
            })
        );
        // Weft: up is the over thread
        assert_eq!(
            table.cell(Thread::Red, Thread::Green, Crossing::Weft).ok(),
            Some(Cell {
                up: Thread::Red,
                left: Thread::Green,
                down: Thread::Red,
                right: Thread::Green,
            })
        );
    }

    // Tests xor flips the under thread when the over thread is green
    // Verified by copying the under thread through
    #[test]
    fn test_xor_flips_under_thread_under_green() {
        let table = RuleTable::new(RuleKind::Xor);
        assert_eq!(
            table.cell(Thread::Red, Thread::Green, Crossing::Warp).ok(),
            Some(Cell {
                up: Thread::Red,
                left: Thread::Green,
                down: Thread::Green,
                right: Thread::Green,
            })
        );
        assert_eq!(
            table.cell(Thread::Green, Thread::Green, Crossing::Weft).ok(),
            Some(Cell {
                up: Thread::Green,
                left: Thread::Green,
                down: Thread::Green,
                right: Thread::Red,
            })
        );
    }

    // Tests mod3 stays inside the three-colour domain for every input pair
    // Verified by mapping a pair beyond code 2
    #[test]
    fn test_mod3_is_total_over_the_primary_domain() {
        let table = RuleTable::new(RuleKind::Mod3);
        for up in Thread::PRIMARIES {
            for left in Thread::PRIMARIES {
                for cross in [Crossing::Warp, Crossing::Weft] {
                    let cell = match table.cell(up, left, cross) {
                        Ok(cell) => cell,
                        Err(e) => unreachable!("mod3 must be total: {e}"),
                    };
                    let changed = match cross {
                        Crossing::Warp => cell.down,
                        Crossing::Weft => cell.right,
                    };
                    assert_eq!(changed.code(), (up.code() + left.code()) % 3);
                    assert!(Thread::PRIMARIES.contains(&changed));
                }
            }
        }
    }

    // Tests smod3 subtracts in opposite directions per orientation
    // Verified by using the same direction for both
    #[test]
    fn test_smod3_is_asymmetric_across_orientations() {
        let table = RuleTable::new(RuleKind::Smod3);
        // Warp rewrites down to (left - up) mod 3
        assert_eq!(
            table
                .cell(Thread::Green, Thread::Red, Crossing::Warp)
                .ok()
                .map(|c| c.down),
            Some(Thread::Blue)
        );
        // Weft rewrites right to (up - left) mod 3
        assert_eq!(
            table
                .cell(Thread::Green, Thread::Red, Crossing::Weft)
                .ok()
                .map(|c| c.right),
            Some(Thread::Green)
        );
    }

    // Tests rules copy the incoming threads through unchanged
    // Verified by swapping up and left in the output
    #[test]
    fn test_rules_never_rewrite_incoming_threads() {
        for kind in [RuleKind::Knot, RuleKind::Mod3, RuleKind::Smod3] {
            let table = RuleTable::new(kind);
            for up in Thread::PRIMARIES {
                for left in Thread::PRIMARIES {
                    for cross in [Crossing::Warp, Crossing::Weft] {
                        let cell = match table.cell(up, left, cross) {
                            Ok(cell) => cell,
                            Err(e) => unreachable!("in-domain call failed: {e}"),
                        };
                        assert_eq!(cell.up, up);
                        assert_eq!(cell.left, left);
                        // Exactly one outgoing slot may differ from its input
                        match cross {
                            Crossing::Warp => assert_eq!(cell.right, left),
                            Crossing::Weft => assert_eq!(cell.down, up),
                        }
                    }
                }
            }
        }
    }

    // Tests out-of-domain threads are rejected instead of defaulted
    // Verified by returning a pass-through cell for yellow
    #[test]
    fn test_out_of_domain_threads_fail_loudly() {
        let knot = RuleTable::new(RuleKind::Knot);
        assert!(knot.cell(Thread::Yellow, Thread::Red, Crossing::Warp).is_err());

        let xor = RuleTable::new(RuleKind::Xor);
        assert!(xor.cell(Thread::Blue, Thread::Red, Crossing::Warp).is_err());
        assert!(xor.cell(Thread::Red, Thread::Yellow, Crossing::Weft).is_err());
    }

    // Tests repeated lookups return identical cells
    // Verified by mutating table state on lookup
    #[test]
    fn test_lookups_are_deterministic() {
        let table = RuleTable::new(RuleKind::Mod3);
        let first = table.cell(Thread::Green, Thread::Blue, Crossing::Warp).ok();
        let second = table.cell(Thread::Green, Thread::Blue, Crossing::Warp).ok();
        assert_eq!(first, second);
    }

    // Tests registry names round-trip and unknown names are rejected
    // Verified by registering a rule under the wrong key
    #[test]
    fn test_rule_registry_round_trips_names() {
        for kind in RuleKind::ALL {
            assert_eq!(RuleKind::from_name(kind.name()).ok(), Some(kind));
        }
        assert!(RuleKind::from_name("plait").is_err());
    }
}
