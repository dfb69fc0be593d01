//! Huntington-Hill apportionment of seats among states.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::ApportionError;

/// Huntington-Hill priority of a state holding `seats` seats.
fn priority(population: u64, seats: u32) -> f64 {
    let n = seats as f64;
    population as f64 / (n * (n + 1.0)).sqrt()
}

/// Apportion `total_seats` among every state not in `excluded`.
///
/// Each state starts with one seat; every remaining seat goes to the state with the highest
/// priority value. Ties go to the lowest state code, so results are reproducible.
/// The returned seat counts always sum to `total_seats`.
pub fn apportion(
    populations: &BTreeMap<String, u64>,
    total_seats: u32,
    excluded: &BTreeSet<String>,
) -> Result<BTreeMap<String, u32>, ApportionError> {
    let mut seats: BTreeMap<&str, u32> = populations.keys()
        .filter(|state| !excluded.contains(*state))
        .map(|state| (state.as_str(), 1))
        .collect();

    let remaining = u32::try_from(seats.len()).ok()
        .and_then(|states| total_seats.checked_sub(states))
        .ok_or(ApportionError::Precondition { seats: total_seats, states: seats.len() })?;

    for _ in 0..remaining {
        // BTreeMap iterates in ascending state order; a strict `>` keeps the first of equals.
        let mut best: Option<(&str, f64)> = None;
        for (&state, &n) in &seats {
            let p = priority(populations[state], n);
            if best.is_none_or(|(_, top)| p > top) {
                best = Some((state, p));
            }
        }
        if let Some((state, _)) = best {
            *seats.entry(state).or_default() += 1;
        }
    }

    debug!(states = seats.len(), seats = total_seats, "apportionment complete");
    Ok(seats.into_iter().map(|(state, n)| (state.to_string(), n)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populations(entries: &[(&str, u64)]) -> BTreeMap<String, u64> {
        entries.iter().map(|&(s, p)| (s.to_string(), p)).collect()
    }

    fn set(codes: &[&str]) -> BTreeSet<String> { codes.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn small_example() {
        let pops = populations(&[("A", 100), ("B", 50), ("C", 10)]);
        let seats = apportion(&pops, 5, &BTreeSet::new()).unwrap();

        assert!(seats.values().all(|&n| n >= 1));
        assert_eq!(seats.values().sum::<u32>(), 5);
        // A (70.7) takes the first extra seat, then A (40.8) still beats B (35.4).
        assert_eq!(seats, BTreeMap::from([("A".into(), 3), ("B".into(), 1), ("C".into(), 1)]));
    }

    #[test]
    fn one_seat_each_when_seats_equal_states() {
        let pops = populations(&[("A", 1_000_000), ("B", 5), ("C", 0)]);
        let seats = apportion(&pops, 3, &BTreeSet::new()).unwrap();
        assert_eq!(seats, BTreeMap::from([("A".into(), 1), ("B".into(), 1), ("C".into(), 1)]));
    }

    #[test]
    fn too_few_seats() {
        let pops = populations(&[("A", 100), ("B", 50), ("C", 10)]);
        assert_eq!(
            apportion(&pops, 2, &BTreeSet::new()),
            Err(ApportionError::Precondition { seats: 2, states: 3 }),
        );
    }

    #[test]
    fn excluded_states_get_nothing() {
        let pops = populations(&[("A", 100), ("B", 50), ("DC", 700), ("PR", 3000)]);
        let seats = apportion(&pops, 4, &set(&["DC", "PR"])).unwrap();

        assert_eq!(seats.len(), 2);
        assert!(!seats.contains_key("DC") && !seats.contains_key("PR"));
        assert_eq!(seats.values().sum::<u32>(), 4);
        // Exclusion also lowers the floor: 2 states need only 2 seats.
        assert!(apportion(&pops, 2, &set(&["DC", "PR"])).is_ok());
    }

    #[test]
    fn ties_go_to_lowest_state_code() {
        let pops = populations(&[("NY", 500), ("AK", 500), ("MT", 500)]);
        let seats = apportion(&pops, 4, &BTreeSet::new()).unwrap();
        assert_eq!(seats["AK"], 2);
        assert_eq!(seats["MT"], 1);
        assert_eq!(seats["NY"], 1);
    }

    #[test]
    fn zero_population_states_still_resolve() {
        let pops = populations(&[("A", 0), ("B", 0)]);
        let seats = apportion(&pops, 4, &BTreeSet::new()).unwrap();
        assert_eq!(seats.values().sum::<u32>(), 4);
    }

    #[test]
    fn awards_follow_priority_order() {
        // Replay the awards one seat at a time: each extra seat must go to a state whose
        // priority was at least that of every other state at that moment.
        let pops = populations(&[("CA", 39_538_223), ("TX", 29_145_505), ("WY", 576_851), ("VT", 643_077), ("RI", 1_097_379)]);
        let mut prev = apportion(&pops, 5, &BTreeSet::new()).unwrap();
        for total in 6..=20 {
            let next = apportion(&pops, total, &BTreeSet::new()).unwrap();
            let winner = next.iter().find(|(s, n)| prev[*s] + 1 == **n).map(|(s, _)| s.clone()).unwrap();
            let top = prev.iter().map(|(s, &n)| priority(pops[s], n)).fold(f64::MIN, f64::max);
            assert_eq!(priority(pops[&winner], prev[&winner]), top);
            prev = next;
        }
        assert_eq!(prev.values().sum::<u32>(), 20);
    }

    #[test]
    fn empty_input() {
        let seats = apportion(&BTreeMap::new(), 0, &BTreeSet::new()).unwrap();
        assert!(seats.is_empty());
    }
}
