use std::cmp::Ordering;

use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

fn compare(a: &SimulationResult, b: &SimulationResult) -> Ordering {
    a.service_rate
        .total_cmp(&b.service_rate)
        .then_with(|| b.deferred_returns.cmp(&a.deferred_returns))
}

pub(crate) fn find_best_index_by_service(results: &[SimulationResult]) -> Option<usize> {
    let mut best: Option<(usize, &SimulationResult)> = None;
    for (idx, result) in results.iter().enumerate() {
        match best {
            Some((_, current)) if compare(result, current) != Ordering::Greater => {}
            _ => best = Some((idx, result)),
        }
    }
    best.map(|(idx, _)| idx)
}

pub(crate) fn find_best_parameters_impl<'a>(
    results: &'a [SimulationResult],
    parameter_sets: &'a [ParameterSet],
) -> Option<&'a ParameterSet> {
    if results.is_empty() || results.len() != parameter_sets.len() {
        return None;
    }

    let best_idx = find_best_index_by_service(results)?;
    parameter_sets.get(best_idx)
}
