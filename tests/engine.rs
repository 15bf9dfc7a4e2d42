//! End-to-end properties of the enrichment engine.

use approx::assert_relative_eq;
use kinact::{
    ActivityEngine, EngineError, Estimator, FoldChanges, InteractionGraph, Significance, Weight,
};

/// A graph where KIN1 has 2, KIN2 has 4, and KIN3 has 6 observed targets.
fn tiered_graph() -> InteractionGraph {
    let mut graph = InteractionGraph::new();
    for site in ["A_S1", "A_S2"] {
        graph.insert("KIN1", site, Weight::ACTIVATING);
    }
    for site in ["A_S1", "A_S2", "A_S3", "A_S4"] {
        graph.insert("KIN2", site, Weight::ACTIVATING);
    }
    for site in ["A_S1", "A_S2", "A_S3", "A_S4", "B_T1", "B_T2"] {
        graph.insert("KIN3", site, Weight::ACTIVATING);
    }
    graph
}

fn tiered_observations() -> FoldChanges {
    [
        ("A_S1", 1.0),
        ("A_S2", -0.4),
        ("A_S3", 2.1),
        ("A_S4", 0.3),
        ("B_T1", -1.2),
        ("B_T2", 0.8),
        ("C_Y1", 0.1),
        ("C_Y2", -0.6),
    ]
    .into_iter()
    .collect()
}

#[test]
fn mean_fixture_matches_hand_computed_statistics() {
    let observations: FoldChanges = [("A_S1", 1.0), ("A_S2", 2.0), ("A_S3", 3.0)]
        .into_iter()
        .collect();
    let mut graph = InteractionGraph::new();
    for site in ["A_S1", "A_S2", "A_S3"] {
        graph.insert("KIN", site, Weight::ACTIVATING);
    }

    let table = ActivityEngine::new()
        .minimum_set_size(3)
        .baseline(0.0, 1.0)
        .mean(&observations, &graph)
        .unwrap();

    let record = table.get("KIN").unwrap();
    assert_relative_eq!(record.score, 2.0);
    // z = |2.0 * sqrt(3)| = 3.464, upper tail of the standard normal
    assert!((record.p_value - 2.66e-4).abs() < 1e-6);
    // a single test leaves nothing to correct
    assert_relative_eq!(record.p_adjusted, record.p_value);
    assert!(record.significant);
}

#[test]
fn median_is_robust_to_an_outlier_substrate() {
    let observations: FoldChanges = [("A_S1", 1.0), ("A_S2", 2.0), ("A_S3", 9.0)]
        .into_iter()
        .collect();
    let mut graph = InteractionGraph::new();
    for site in ["A_S1", "A_S2", "A_S3"] {
        graph.insert("KIN", site, Weight::ACTIVATING);
    }

    let engine = ActivityEngine::new().minimum_set_size(3).baseline(0.0, 1.0);
    let mean = engine.mean(&observations, &graph).unwrap();
    let median = engine.clone().median().mean(&observations, &graph).unwrap();

    assert_relative_eq!(mean.get("KIN").unwrap().score, 4.0);
    assert_relative_eq!(median.get("KIN").unwrap().score, 2.0);
}

#[test]
fn delta_fixture_counts_net_regulation() {
    let observations: FoldChanges = [
        ("A_S1", 1.0),
        ("A_S2", 0.5),
        ("A_S3", 2.0),
        ("A_S4", -1.0),
        ("A_S5", 0.8),
        ("A_S6", -0.5),
    ]
    .into_iter()
    .collect();
    // three significantly up, one significantly down, two below the cutoff
    let significance: Significance = [
        ("A_S1", 2.0),
        ("A_S2", 1.5),
        ("A_S3", 3.0),
        ("A_S4", 2.0),
        ("A_S5", 0.5),
        ("A_S6", 1.0),
    ]
    .into_iter()
    .collect();
    let mut graph = InteractionGraph::new();
    for site in ["A_S1", "A_S2", "A_S3", "A_S4", "A_S5", "A_S6"] {
        graph.insert("KIN", site, Weight::ACTIVATING);
    }

    let table = ActivityEngine::new()
        .delta(&observations, &significance, &graph)
        .unwrap();

    let record = table.get("KIN").unwrap();
    assert_relative_eq!(record.score, 2.0);
    assert_eq!(record.substrate_count, 6);
    assert!((0.0..=1.0).contains(&record.p_value));
}

#[test]
fn delta_without_significant_substrates_is_null() {
    let observations: FoldChanges = (1..=5)
        .map(|i| (format!("A_S{i}"), 0.5))
        .collect();
    let significance: Significance = (1..=5)
        .map(|i| (format!("A_S{i}"), 0.1))
        .collect();
    let mut graph = InteractionGraph::new();
    for i in 1..=5 {
        graph.insert("KIN", format!("A_S{i}"), Weight::ACTIVATING);
    }

    let table = ActivityEngine::new()
        .delta(&observations, &significance, &graph)
        .unwrap();

    let record = table.get("KIN").unwrap();
    assert_relative_eq!(record.score, 0.0);
    assert_relative_eq!(record.p_value, 1.0);
    assert!(!record.significant);
}

#[test]
fn weighted_mean_with_unit_weights_matches_the_mean_estimator() {
    let observations = tiered_observations();
    let graph = tiered_graph();

    let engine = ActivityEngine::new().minimum_set_size(2);
    let mean = engine.mean(&observations, &graph).unwrap();
    let weighted = engine.weighted_mean(&observations, &graph).unwrap();

    assert_eq!(mean.len(), weighted.len());
    for record in &mean {
        let counterpart = weighted.get(&record.kinase).unwrap();
        assert_relative_eq!(record.score, counterpart.score);
        assert_relative_eq!(record.p_value, counterpart.p_value);
        assert_relative_eq!(record.p_adjusted, counterpart.p_adjusted);
    }
}

#[test]
fn score_and_p_value_mappings_share_their_key_set() {
    let observations = tiered_observations();
    let graph = tiered_graph();

    let table = ActivityEngine::new()
        .minimum_set_size(2)
        .mean(&observations, &graph)
        .unwrap();

    let scores = table.scores();
    let raw = table.p_values();
    let adjusted = table.adjusted_p_values();
    assert_eq!(scores.len(), raw.len());
    assert_eq!(scores.len(), adjusted.len());
    for kinase in scores.keys() {
        assert!(raw.contains_key(kinase));
        assert!(adjusted.contains_key(kinase));
    }
}

#[test]
fn adjusted_p_values_dominate_raw_p_values() {
    let observations = tiered_observations();
    let graph = tiered_graph();

    let table = ActivityEngine::new()
        .minimum_set_size(2)
        .mean(&observations, &graph)
        .unwrap();

    assert!(!table.is_empty());
    for record in &table {
        assert!(record.p_adjusted >= record.p_value);
        assert!((0.0..=1.0).contains(&record.p_value));
        assert!((0.0..=1.0).contains(&record.p_adjusted));
    }
}

#[test]
fn raising_the_set_size_filter_never_adds_kinases() {
    let observations = tiered_observations();
    let graph = tiered_graph();

    let mut previous = usize::MAX;
    for minimum in 1..=7 {
        let table = ActivityEngine::new()
            .minimum_set_size(minimum)
            .mean(&observations, &graph)
            .unwrap();
        assert!(table.len() <= previous);
        previous = table.len();
    }
    // the filter eventually empties the table
    assert_eq!(previous, 0);
}

#[test]
fn repeated_calls_are_deterministic() {
    let observations = tiered_observations();
    let graph = tiered_graph();
    let engine = ActivityEngine::new().minimum_set_size(2);

    let first = engine.mean(&observations, &graph).unwrap();
    let second = engine.mean(&observations, &graph).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_inputs_yield_empty_tables() {
    let observations = tiered_observations();
    let empty_graph = InteractionGraph::new();
    let engine = ActivityEngine::new();

    assert!(engine.mean(&observations, &empty_graph).unwrap().is_empty());

    let empty_observations = FoldChanges::new();
    let graph = tiered_graph();
    assert!(engine.mean(&empty_observations, &graph).unwrap().is_empty());
    assert!(engine
        .delta(&empty_observations, &Significance::new(), &graph)
        .unwrap()
        .is_empty());
}

#[test]
fn significant_mean_silently_drops_kinases_without_evidence() {
    let observations = tiered_observations();
    let graph = tiered_graph();
    // only KIN3's two B-protein sites are significant
    let significance: Significance = [("B_T1", 2.0), ("B_T2", 2.5)].into_iter().collect();

    let table = ActivityEngine::new()
        .minimum_set_size(2)
        .mean_significant(&observations, &significance, &graph)
        .unwrap();

    assert!(table.get("KIN3").is_some());
    assert!(table.get("KIN1").is_none());
    assert!(table.get("KIN2").is_none());
    // the score is the mean over the significant subset only
    assert_relative_eq!(table.get("KIN3").unwrap().score, (-1.2 + 0.8) / 2.0);
}

#[test]
fn constant_observations_fail_loudly() {
    let observations: FoldChanges = (1..=5)
        .map(|i| (format!("A_S{i}"), 1.0))
        .collect();
    let mut graph = InteractionGraph::new();
    for i in 1..=5 {
        graph.insert("KIN", format!("A_S{i}"), Weight::ACTIVATING);
    }

    let result = ActivityEngine::new().mean(&observations, &graph);
    assert!(matches!(
        result,
        Err(EngineError::DegenerateBaseline { .. })
    ));
}

#[test]
fn runtime_estimator_selection_requires_significance() {
    let observations = tiered_observations();
    let graph = tiered_graph();
    let engine = ActivityEngine::new().minimum_set_size(2);

    let result = engine.run(Estimator::Delta, &observations, None, &graph);
    assert!(matches!(
        result,
        Err(EngineError::MissingSignificance {
            estimator: Estimator::Delta
        })
    ));

    let table = engine
        .run(Estimator::Mean, &observations, None, &graph)
        .unwrap();
    assert_eq!(table, engine.mean(&observations, &graph).unwrap());
}
