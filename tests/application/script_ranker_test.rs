use adoptify::application::services::{RankError, ScriptRanker};
use adoptify::domain::ScriptCandidate;

fn candidate(id: &str, latency_ms: u64, cost_usd: f64) -> ScriptCandidate {
    ScriptCandidate::new(id, latency_ms, cost_usd, format!("script from {id}"))
}

#[test]
fn given_empty_candidates_when_ranking_then_empty_candidate_set_error() {
    assert_eq!(ScriptRanker::rank(&[]), Err(RankError::EmptyCandidateSet));
}

#[test]
fn given_single_candidate_when_ranking_then_it_wins() {
    let only = candidate("a", 900, 3.0);

    let ranked = ScriptRanker::rank(std::slice::from_ref(&only)).unwrap();

    assert_eq!(ranked.candidate(), &only);
}

#[test]
fn given_different_costs_when_ranking_then_cheapest_wins_regardless_of_latency() {
    let candidates = vec![
        candidate("fast-expensive", 10, 0.9),
        candidate("slow-cheap", 5000, 0.1),
        candidate("mid", 100, 0.5),
    ];

    let ranked = ScriptRanker::rank(&candidates).unwrap();

    assert_eq!(ranked.candidate().provider_id, "slow-cheap");
}

#[test]
fn given_equal_costs_when_ranking_then_lowest_latency_wins() {
    let candidates = vec![candidate("a", 300, 0.2), candidate("b", 100, 0.2), candidate("c", 200, 0.2)];

    let ranked = ScriptRanker::rank(&candidates).unwrap();

    assert_eq!(ranked.candidate().provider_id, "b");
}

#[test]
fn given_full_ties_when_ranking_then_earliest_input_wins() {
    let candidates = vec![
        candidate("second-best", 50, 0.3),
        candidate("first-tied", 10, 0.1),
        candidate("later-tied", 10, 0.1),
    ];

    let ranked = ScriptRanker::rank(&candidates).unwrap();

    assert_eq!(ranked.candidate().provider_id, "first-tied");
}

#[test]
fn given_any_permutation_when_ranking_then_lexicographic_minimum_is_returned() {
    let base = [
        candidate("a", 40, 0.2),
        candidate("b", 10, 0.3),
        candidate("c", 30, 0.2),
        candidate("d", 5, 0.4),
    ];
    let orders = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];

    for order in orders {
        let candidates: Vec<ScriptCandidate> = order.iter().map(|&i| base[i].clone()).collect();
        let ranked = ScriptRanker::rank(&candidates).unwrap();
        assert_eq!(ranked.candidate().provider_id, "c", "order {order:?}");
    }
}

#[test]
fn given_candidates_when_sorting_then_ranking_order_is_stable() {
    let mut candidates = vec![
        candidate("x", 10, 0.5),
        candidate("y", 10, 0.1),
        candidate("z", 10, 0.5),
        candidate("w", 1, 0.5),
    ];

    ScriptRanker::sort(&mut candidates);

    let ids: Vec<&str> = candidates.iter().map(|c| c.provider_id.as_str()).collect();
    assert_eq!(ids, vec!["y", "w", "x", "z"]);
}
