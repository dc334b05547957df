mod support;

use bike_core::station::{Station, StationCounts};
use support::{random_op, random_station, seeded_rng, Op};

const SEEDS: u64 = 64;
const OPS_PER_RUN: usize = 400;

fn run_sequence(seed: u64, mut check: impl FnMut(Op, bool, StationCounts, StationCounts)) {
    let mut rng = seeded_rng(seed);
    let mut station: Station = random_station(&mut rng);
    for _ in 0..OPS_PER_RUN {
        let op = random_op(&mut rng);
        let before = station.counts();
        let ok = op.apply(&mut station);
        check(op, ok, before, station.counts());
    }
}

#[test]
fn failed_operations_leave_state_untouched() {
    for seed in 0..SEEDS {
        run_sequence(seed, |op, ok, before, after| {
            if !ok {
                assert_eq!(before, after, "seed {seed}: {op:?} mutated on failure");
            }
        });
    }
}

#[test]
fn reservation_invariants_hold_after_every_operation() {
    for seed in 0..SEEDS {
        run_sequence(seed, |op, _, _, after| {
            assert!(
                after.n_sreserved <= after.num_sbikes,
                "seed {seed}: {op:?} -> {after:?}"
            );
            assert!(
                after.n_ereserved <= after.num_ebikes,
                "seed {seed}: {op:?} -> {after:?}"
            );
            assert!(
                after.n_sreserved + after.n_ereserved <= after.res_limit,
                "seed {seed}: {op:?} -> {after:?}"
            );
            assert!(after.is_consistent(), "seed {seed}: {op:?} -> {after:?}");
        });
    }
}

#[test]
fn operations_move_counts_in_one_direction() {
    for seed in 0..SEEDS {
        run_sequence(seed, |op, ok, before, after| {
            assert_eq!(before.num_docks, after.num_docks);
            assert_eq!(before.res_limit, after.res_limit);
            match op {
                Op::CheckOut { .. } => {
                    assert!(after.num_sbikes <= before.num_sbikes);
                    assert!(after.num_ebikes <= before.num_ebikes);
                    assert_eq!(before.n_sreserved, after.n_sreserved);
                    assert_eq!(before.n_ereserved, after.n_ereserved);
                    if ok {
                        let taken = (before.num_sbikes + before.num_ebikes)
                            - (after.num_sbikes + after.num_ebikes);
                        assert_eq!(taken, 1);
                    }
                }
                Op::Return(_) => {
                    assert!(after.num_sbikes >= before.num_sbikes);
                    assert!(after.num_ebikes >= before.num_ebikes);
                }
                Op::Reserve(_) => {
                    assert_eq!(before.num_sbikes, after.num_sbikes);
                    assert_eq!(before.num_ebikes, after.num_ebikes);
                    assert!(after.n_sreserved >= before.n_sreserved);
                    assert!(after.n_ereserved >= before.n_ereserved);
                }
            }
        });
    }
}
