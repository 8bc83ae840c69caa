//! Property-based tests over random wire layouts.

mod common;

use common::{assert_implements_mcx, assert_wires_within};
use mcx_ir::{Wire, WireRoles};
use mcx_synth::{AncillaState, mcx_linear, mcx_log};
use proptest::prelude::*;

/// `k` controls, a target and `work` work wires drawn as distinct ids below
/// 64 in random order.
fn arb_roles(k: std::ops::RangeInclusive<usize>, work: usize) -> impl Strategy<Value = WireRoles> {
    k.prop_flat_map(move |k| {
        prop::sample::subsequence((0u32..64).collect::<Vec<_>>(), k + 1 + work)
            .prop_shuffle()
            .prop_map(move |ids| {
                let wires: Vec<Wire> = ids.into_iter().map(Wire).collect();
                WireRoles::new(
                    wires[..k].iter().copied(),
                    wires[k],
                    wires[k + 1..].iter().copied(),
                )
            })
    })
}

fn arb_ancilla() -> impl Strategy<Value = AncillaState> {
    prop_oneof![Just(AncillaState::Clean), Just(AncillaState::Dirty)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn linear_is_disjoint_and_counted(roles in arb_roles(3..=30, 1), ancilla in arb_ancilla()) {
        let seq = mcx_linear(&roles, ancilla).unwrap();
        assert_wires_within(&seq, &roles);
        let k = roles.controls.len();
        let expected = if ancilla.is_dirty() { 4 * k - 8 } else { 2 * k - 3 };
        prop_assert_eq!(seq.toffoli_count(), expected);
    }

    #[test]
    fn log_is_disjoint_and_counted(roles in arb_roles(3..=40, 2), ancilla in arb_ancilla()) {
        let seq = mcx_log(&roles, ancilla).unwrap();
        assert_wires_within(&seq, &roles);
        let k = roles.controls.len();
        let expected = if ancilla.is_dirty() { 4 * k - 8 } else { 2 * k - 3 };
        prop_assert_eq!(seq.toffoli_count(), expected);
    }

    #[test]
    fn linear_correct_on_random_layouts(roles in arb_roles(3..=8, 1), ancilla in arb_ancilla()) {
        let seq = mcx_linear(&roles, ancilla).unwrap();
        assert_implements_mcx(&seq, &roles, ancilla.is_dirty());
    }

    #[test]
    fn log_correct_on_random_layouts(roles in arb_roles(3..=8, 2), ancilla in arb_ancilla()) {
        let seq = mcx_log(&roles, ancilla).unwrap();
        assert_implements_mcx(&seq, &roles, ancilla.is_dirty());
    }

    #[test]
    fn synthesis_is_deterministic(roles in arb_roles(3..=20, 2), ancilla in arb_ancilla()) {
        prop_assert_eq!(mcx_log(&roles, ancilla).unwrap(), mcx_log(&roles, ancilla).unwrap());
        prop_assert_eq!(
            mcx_linear(&roles, ancilla).unwrap(),
            mcx_linear(&roles, ancilla).unwrap()
        );
    }
}
