// tests/engine_test.rs
//
// End-to-end behaviour of the rating engine through the public API.

mod test_utils;

use albumrater::core::quantizer::quantize;
use albumrater::core::{evaluate_library, RatingEngine};
use albumrater::{Album, EngineConfig, EngineDecision, Library, OverrideKind, Track};
use test_utils::album;

fn engine() -> RatingEngine {
    RatingEngine::new(EngineConfig::default()).unwrap()
}

fn final_score(engine: &RatingEngine, album: &Album) -> f64 {
    engine
        .evaluate(album)
        .diagnostics
        .final_score
        .expect("no final score")
}

#[test]
fn test_reference_album() {
    // 10 eligible tracks, 4 rated [5,5,4,5]: shrunk 3.875, coverage 0.4, final 3.35
    let eval = engine().evaluate(&album("ref", &[5, 5, 4, 5], 6));
    assert_eq!(eval.decision, EngineDecision::SetRating(7));
    assert!((eval.diagnostics.final_score.unwrap() - 3.35).abs() < 1e-9);
}

#[test]
fn test_unanimous_one_star_floors() {
    // 3 of 5 rated, all 1 star: override fires independently of coverage
    let eval = engine().evaluate(&album("floor", &[1, 1, 1], 2));
    assert_eq!(eval.decision, EngineDecision::SetRating(2));
    assert_eq!(eval.diagnostics.override_kind, Some(OverrideKind::Floor));
}

#[test]
fn test_override_precedence_over_any_config() {
    // 1 rated track out of 20: far below any coverage threshold
    let floor = album("floor", &[1], 19);
    let ceiling = album("ceiling", &[5], 19);

    for neutral in [1.0, 2.5, 3.0, 5.0] {
        for k in [0.0, 4.0, 100.0] {
            let config = EngineConfig::builder()
                .neutral_rating(neutral)
                .confidence_weight(k)
                .min_coverage(1.0)
                .build()
                .unwrap();
            let engine = RatingEngine::new(config).unwrap();
            assert_eq!(engine.evaluate(&floor).decision, EngineDecision::SetRating(2));
            assert_eq!(engine.evaluate(&ceiling).decision, EngineDecision::SetRating(10));
        }
    }
}

#[test]
fn test_override_counts_short_tracks() {
    let album = Album::new("short").with_tracks(vec![
        Track::new("intro").with_duration(12).with_rating(1),
        Track::new("song").with_duration(240).with_rating(1),
        Track::new("outro").with_duration(30).with_rating(1),
    ]);
    assert_eq!(engine().evaluate(&album).decision, EngineDecision::SetRating(2));

    // A short 3-star skit breaks unanimity even though it never counts toward coverage
    let mixed = Album::new("mixed").with_tracks(vec![
        Track::new("skit").with_duration(20).with_rating(3),
        Track::new("song").with_duration(240).with_rating(5),
    ]);
    let eval = engine().evaluate(&mixed);
    assert_eq!(eval.diagnostics.override_kind, None);
    assert_eq!(eval.diagnostics.rated_eligible_tracks, 1);
}

#[test]
fn test_no_rated_tracks_no_change() {
    let unrated = album("none", &[], 12).with_rating(8);
    assert_eq!(engine().evaluate(&unrated).decision, EngineDecision::NoChange);

    let config = EngineConfig::builder().min_coverage(0.0).build().unwrap();
    let lenient = RatingEngine::new(config).unwrap();
    assert_eq!(lenient.evaluate(&album("none", &[], 12)).decision, EngineDecision::NoChange);

    // Only short tracks rated, and not unanimously: nothing eligible carries a rating
    let skits_only = Album::new("skits").with_tracks(vec![
        Track::new("skit-a").with_duration(20).with_rating(3),
        Track::new("skit-b").with_duration(20).with_rating(4),
        Track::new("song").with_duration(200),
    ]);
    let eval = lenient.evaluate(&skits_only);
    assert_eq!(eval.diagnostics.rated_eligible_tracks, 0);
    assert_eq!(eval.decision, EngineDecision::NoChange);
}

#[test]
fn test_low_coverage_unrate_policy() {
    let previously_rated = album("dropped", &[3], 9).with_rating(6);

    assert_eq!(engine().evaluate(&previously_rated).decision, EngineDecision::NoChange);

    let config = EngineConfig::builder()
        .unrate_on_low_coverage(true)
        .build()
        .unwrap();
    let unrating = RatingEngine::new(config).unwrap();
    assert_eq!(unrating.evaluate(&previously_rated).decision, EngineDecision::ClearRating);

    // Nothing stored, nothing to clear
    let never_rated = album("dropped", &[3], 9);
    assert_eq!(unrating.evaluate(&never_rated).decision, EngineDecision::NoChange);
}

#[test]
fn test_gate_threshold_inclusive() {
    let engine = engine();
    let at_threshold = engine.evaluate(&album("at", &[4, 3], 8));
    assert!((at_threshold.diagnostics.coverage - 0.2).abs() < 1e-12);
    assert!(matches!(at_threshold.decision, EngineDecision::SetRating(_)));

    let below = engine.evaluate(&album("below", &[4], 9));
    assert_eq!(below.decision, EngineDecision::NoChange);
}

#[test]
fn test_boundary_rounding_asymmetry() {
    let config = EngineConfig::default();
    // 5.5 half stars with a 0.5 remainder
    assert_eq!(quantize(2.75, &config), 5);
    // Same remainder above neutral
    assert_eq!(quantize(3.25, &config), 7);
    assert_eq!(quantize(3.0, &config), 6);

    // Remainders between the two biases only round up above neutral
    for frac in [0.45, 0.5, 0.55, 0.6] {
        let below = (4.0 + frac) / 2.0;
        let above = (6.0 + frac) / 2.0;
        assert_eq!(quantize(below, &config), 4, "below-neutral frac {}", frac);
        assert_eq!(quantize(above, &config), 7, "above-neutral frac {}", frac);
    }
}

#[test]
fn test_idempotent() {
    let engine = engine();
    let album = album("same", &[2, 4, 3, 5, 4], 3).with_rating(6);
    let first = engine.evaluate(&album);
    for _ in 0..5 {
        assert_eq!(engine.evaluate(&album), first);
    }
}

#[test]
fn test_more_ratings_move_final_toward_mean() {
    let engine = engine();
    let total = 20;

    for rating in [4i64, 2] {
        let mean = rating as f64;
        let mut previous = 3.0;
        for n in 1..=total {
            let score = final_score(&engine, &album("mono", &vec![rating; n], total - n));
            if mean > 3.0 {
                assert!(score >= previous && score <= mean, "n={} score={}", n, score);
            } else {
                assert!(score <= previous && score >= mean, "n={} score={}", n, score);
            }
            previous = score;
        }
    }
}

#[test]
fn test_final_between_prior_and_shrunk() {
    let engine = engine();
    let albums = vec![
        album("a", &[5, 4], 3),
        album("b", &[2, 2, 3], 0),
        album("c", &[1, 5, 3, 2], 12),
        album("d", &[4], 0),
    ];
    for album in &albums {
        let diag = engine.evaluate(album).diagnostics;
        let shrunk = diag.shrunk.unwrap();
        let score = diag.final_score.unwrap();
        let (lo, hi) = if shrunk < 3.0 { (shrunk, 3.0) } else { (3.0, shrunk) };
        assert!(score >= lo - 1e-12 && score <= hi + 1e-12, "{}: {}", album.id, score);
    }
}

#[test]
fn test_malformed_tracks_contained() {
    let mut broken = album("broken", &[4, 4, 5], 0);
    broken.tracks.push(Track::new("bad").with_duration(200).with_rating(42));
    let fine = album("fine", &[4, 4, 5], 0);

    let library = Library::new("Music", vec![broken, fine]);
    let reports = evaluate_library(&library, &engine(), None);

    assert_eq!(reports[0].evaluation.decision, reports[1].evaluation.decision);
    assert_eq!(reports[0].evaluation.diagnostics.anomalies.len(), 1);
    assert!(reports[1].evaluation.diagnostics.anomalies.is_empty());
}

#[test]
fn test_parallel_matches_sequential() {
    let albums: Vec<Album> = (0..200)
        .map(|i| {
            let ratings: Vec<i64> = (0..(i % 7)).map(|j| 1 + ((i + j) % 5) as i64).collect();
            album(&format!("album-{}", i), &ratings, i % 5)
        })
        .collect();
    let library = Library::new("Music", albums);
    let engine = engine();

    let parallel = evaluate_library(&library, &engine, None);
    let sequential: Vec<_> = library.albums.iter().map(|a| engine.evaluate(a)).collect();

    assert_eq!(parallel.len(), sequential.len());
    for (report, eval) in parallel.iter().zip(&sequential) {
        assert_eq!(&report.evaluation, eval);
    }
}
