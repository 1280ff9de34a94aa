use std::collections::BTreeMap;

use keyframe_animation_core::{AnimationError, Interval, Keyframe, OrderedKeyframeSet};

fn set_with_times(times: &[u64]) -> OrderedKeyframeSet<f32> {
    let mut set = OrderedKeyframeSet::new();
    for &t in times {
        set.insert_or_replace(Keyframe::linear(t, t as f32));
    }
    set
}

/// Small deterministic LCG so the insertion orders are reproducible.
fn pseudo_random_times(seed: u64, count: usize, max: u64) -> Vec<u64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 33) % max
        })
        .collect()
}

#[test]
fn stays_sorted_and_unique_for_any_insertion_order() {
    for seed in 0..16 {
        let times = pseudo_random_times(seed, 64, 50);
        let set = set_with_times(&times);

        let stored: Vec<u64> = set.iter().map(|k| k.time_ms).collect();
        assert!(
            stored.windows(2).all(|w| w[0] < w[1]),
            "seed {seed}: not strictly increasing: {stored:?}"
        );

        let mut expected = times.clone();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(stored, expected, "seed {seed}");
    }
}

#[test]
fn duplicate_time_keeps_last_write() {
    let mut set = OrderedKeyframeSet::new();
    set.insert_or_replace(Keyframe::linear(100, "A"));
    set.insert_or_replace(Keyframe::linear(200, "C"));
    set.insert_or_replace(Keyframe::linear(100, "B"));

    assert_eq!(set.len(), 2);
    let at_100: Vec<_> = set.iter().filter(|k| k.time_ms == 100).collect();
    assert_eq!(at_100.len(), 1);
    assert_eq!(at_100[0].value, "B");
}

#[test]
fn last_write_wins_matches_map_model() {
    let times = pseudo_random_times(7, 200, 30);
    let mut set = OrderedKeyframeSet::new();
    let mut model = BTreeMap::new();
    for (i, &t) in times.iter().enumerate() {
        set.insert_or_replace(Keyframe::linear(t, i));
        model.insert(t, i);
    }
    let stored: Vec<(u64, usize)> = set.iter().map(|k| (k.time_ms, k.value)).collect();
    let expected: Vec<(u64, usize)> = model.into_iter().collect();
    assert_eq!(stored, expected);
}

#[test]
fn interval_lookup_boundaries() {
    let set = set_with_times(&[100, 200, 300]);

    let cases = [
        (50, (-1, 0)),
        (100, (0, 0)),
        (150, (0, 1)),
        (200, (1, 1)),
        (299, (1, 2)),
        (300, (2, -1)),
        (1000, (2, -1)),
    ];
    for (query, expected) in cases {
        let interval = set.interval_of(query).expect("non-empty set");
        assert_eq!(interval.as_indices(), expected, "query {query}");
    }

    assert_eq!(set.interval_of(0), Some(Interval::Before));
    assert_eq!(set.interval_of(150), Some(Interval::Between(0, 1)));
    assert_eq!(set.interval_of(200), Some(Interval::Exact(1)));
    assert_eq!(set.interval_of(300), Some(Interval::After(2)));
}

#[test]
fn between_lower_is_greatest_not_after_query() {
    let times: Vec<u64> = (0..100).map(|i| i * 10 + 5).collect();
    let set = set_with_times(&times);
    for query in 6..994 {
        match set.interval_of(query).unwrap() {
            Interval::Between(lower, upper) => {
                assert_eq!(upper, lower + 1);
                assert!(set.index_at(lower).unwrap().time_ms < query);
                assert!(set.index_at(upper).unwrap().time_ms > query);
            }
            Interval::Exact(idx) => assert_eq!(set.index_at(idx).unwrap().time_ms, query),
            other => panic!("query {query}: unexpected {other:?}"),
        }
    }
}

#[test]
fn remove_by_time_and_missing() {
    let mut set = set_with_times(&[100, 200, 300]);
    assert!(set.remove(250).is_none());
    assert_eq!(set.len(), 3);

    let removed = set.remove_keyframe(&Keyframe::linear(200, -1.0)).unwrap();
    assert_eq!(removed.value, 200.0);
    assert_eq!(set.time_range(), Some((100, 300)));
    assert_eq!(set.interval_of(200).unwrap().as_indices(), (0, 1));
}

#[test]
fn index_at_out_of_range() {
    let set = set_with_times(&[100, 200]);
    assert_eq!(set.index_at(1).unwrap().time_ms, 200);
    let err = set.index_at(2).unwrap_err();
    assert_eq!(err, AnimationError::IndexOutOfRange { index: 2, len: 2 });
    assert!(!err.is_recoverable());
}

#[test]
fn clear_empties_the_set() {
    let mut set = set_with_times(&[1, 2, 3]);
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.interval_of(2), None);
}
