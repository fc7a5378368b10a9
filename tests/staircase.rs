//! Integration tests for the staircase controller.
//!
//! Covers the behavioral contract end to end: direction conventions,
//! history accumulation, the stopping rule, terminality, and threshold
//! selection.

use limen::{Direction, Staircase, StaircaseConfig, StaircaseError, TrialTally};
use pretty_assertions::assert_eq;

fn staircase(start: f64, step: f64, direction: Direction) -> Staircase {
    Staircase::new(StaircaseConfig::new(start, step, direction)).unwrap()
}

// ============================================================================
// Direction correctness
// ============================================================================

#[test]
fn decrease_on_correct_direction() {
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    assert_eq!(s.step(true), 4.0);

    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    assert_eq!(s.step(false), 6.0);
}

#[test]
fn increase_on_correct_direction() {
    let mut s = staircase(5.5, 0.5, Direction::IncreaseOnCorrect);
    assert_eq!(s.step(false), 5.0);
    assert_eq!(s.step(true), 5.5);
}

// ============================================================================
// History accumulation
// ============================================================================

#[test]
fn repeated_visits_accumulate_one_tally() {
    // Alternating responses bounce between 5.0 and 4.0, so each level is
    // presented repeatedly and tallies must accumulate by level.
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    for _ in 0..3 {
        s.step(true); // presented at 5.0, moves to 4.0
        s.step(false); // presented at 4.0, moves back to 5.0
    }

    assert_eq!(s.history().tally_at(5.0), Some(TrialTally::new(3, 3)));
    assert_eq!(s.history().tally_at(4.0), Some(TrialTally::new(0, 3)));
    assert_eq!(s.trials_run(), 6);
}

#[test]
fn fractional_steps_key_cleanly() {
    // 0.1 is not exactly representable; ten steps of 0.1 must still land
    // on the same history level as the literal 1.0 written here.
    let mut s = staircase(2.0, 0.1, Direction::DecreaseOnCorrect);
    for _ in 0..10 {
        s.step(true);
    }
    assert!((s.current_intensity() - 1.0).abs() < 1e-9);
    assert_eq!(s.history().tally_at(1.1), Some(TrialTally::new(1, 1)));
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn stops_exactly_at_miss_limit() {
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    s.step(false);
    assert!(!s.is_stopped());
    s.step(false);
    assert!(!s.is_stopped());
    s.step(false);
    assert!(s.is_stopped());
}

#[test]
fn detection_resets_the_miss_count() {
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    s.step(false);
    s.step(false);
    s.step(true); // resets
    s.step(false);
    s.step(false);
    assert!(!s.is_stopped());
    assert_eq!(s.consecutive_misses(), 2);
    s.step(false);
    assert!(s.is_stopped());
}

#[test]
fn custom_miss_limit_is_honored() {
    let config = StaircaseConfig::new(5.0, 1.0, Direction::DecreaseOnCorrect).miss_limit(5);
    let mut s = Staircase::new(config).unwrap();
    for _ in 0..4 {
        s.step(false);
    }
    assert!(!s.is_stopped());
    s.step(false);
    assert!(s.is_stopped());
}

#[test]
fn stopped_is_terminal() {
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    for _ in 0..3 {
        s.step(false);
    }
    assert!(s.is_stopped());
    for &responded in &[true, true, false, true] {
        s.step(responded);
        assert!(s.is_stopped());
    }
}

// ============================================================================
// Threshold estimation
// ============================================================================

#[test]
fn threshold_requires_stop() {
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    assert_eq!(s.threshold(), Err(StaircaseError::NotStopped));
    s.step(true);
    s.step(false);
    assert_eq!(s.threshold(), Err(StaircaseError::NotStopped));
}

#[test]
fn threshold_is_least_intense_qualifying_level() {
    // Decrease-on-correct: larger numbers are more intense, so the
    // threshold is the numerically smallest level at criterion.
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    for &responded in &[true, true, false, false, false] {
        s.step(responded);
    }
    // History: 5.0 -> 1/2, 4.0 -> 1/2, 3.0 -> 0/1. Qualifying: 5.0, 4.0.
    assert!(s.is_stopped());
    assert_eq!(s.threshold(), Ok(4.0));
}

#[test]
fn threshold_orientation_flips_with_direction() {
    let mut s = staircase(5.0, 1.0, Direction::IncreaseOnCorrect);
    for &responded in &[true, true, false, false, false] {
        s.step(responded);
    }
    // History: 5.0 -> 1/2, 6.0 -> 1/2, 7.0 -> 0/1. Qualifying: 5.0, 6.0;
    // smaller numbers are more intense here, so report the maximum.
    assert!(s.is_stopped());
    assert_eq!(s.threshold(), Ok(6.0));
}

#[test]
fn no_qualifying_level_is_an_explicit_error() {
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    for _ in 0..3 {
        s.step(false);
    }
    assert_eq!(s.threshold(), Err(StaircaseError::NoThresholdData));
}

#[test]
fn estimate_reports_the_evidence() {
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    for &responded in &[true, true, false, false, false] {
        s.step(responded);
    }
    let estimate = s.estimate().unwrap();
    assert_eq!(estimate.threshold, 4.0);
    assert_eq!(estimate.hits, 1);
    assert_eq!(estimate.trials_at_threshold, 2);
    assert_eq!(estimate.hit_rate, 0.5);
    assert_eq!(estimate.total_trials, 5);
    assert_eq!(estimate.levels_visited, 3);
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn full_session_increase_on_correct() {
    // Start 20, step 2, increase-on-correct. Responses: correct, correct,
    // incorrect, incorrect, incorrect.
    let mut s = staircase(20.0, 2.0, Direction::IncreaseOnCorrect);

    let responses = [true, true, false, false, false];
    let expected_intensities = [22.0, 24.0, 22.0, 20.0, 18.0];
    let expected_misses = [0, 0, 1, 2, 3];

    for i in 0..responses.len() {
        let next = s.step(responses[i]);
        assert_eq!(next, expected_intensities[i], "trial {}", i + 1);
        assert_eq!(s.consecutive_misses(), expected_misses[i], "trial {}", i + 1);
        assert_eq!(s.is_stopped(), i == 4, "trial {}", i + 1);
    }

    // Presented levels: 20 (hit), 22 (hit), 24 (miss), 22 (miss), 20 (miss).
    // Qualifying at 50%: 20 (1/2), 22 (1/2). Increase-on-correct reports
    // the maximum.
    assert_eq!(s.threshold(), Ok(22.0));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn config_json_roundtrip() {
    let config = StaircaseConfig::new(20.0, 2.0, Direction::IncreaseOnCorrect).miss_limit(4);
    let json = serde_json::to_string(&config).unwrap();
    let back: StaircaseConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn estimate_json_roundtrip() {
    let mut s = staircase(5.0, 1.0, Direction::DecreaseOnCorrect);
    for &responded in &[true, true, false, false, false] {
        s.step(responded);
    }
    let estimate = s.estimate().unwrap();
    let json = serde_json::to_string(&estimate).unwrap();
    let back: limen::ThresholdEstimate = serde_json::from_str(&json).unwrap();
    assert_eq!(estimate, back);
}
