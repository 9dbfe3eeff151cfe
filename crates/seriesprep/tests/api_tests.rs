//! Tests for the high-level preprocessing API.
//!
//! These tests verify the one-call functions and the fluent builders:
//! - Outlier flagging on smooth series with injected spikes
//! - Large-uncertainty flagging
//! - Adaptive binning and its partition guarantees
//! - Gap splitting
//! - Builder validation and error reporting
//!
//! ## Test Organization
//!
//! 1. **Outlier Flagging** - Masks, results, window shapes
//! 2. **Large Uncertainties** - Relative threshold flagging
//! 3. **Smart Binning** - Bins, unbinned indices, reporters
//! 4. **Gap Splitting** - Segments and round trips
//! 5. **Validation** - Invalid arguments and builder misuse

use approx::assert_relative_eq;
use std::cell::RefCell;
use std::f64::consts::PI;

use seriesprep::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// One full cosine period over `n` samples with a spike added at `spike_at`.
fn cosine_with_spike(n: usize, spike_at: usize, height: f64) -> Vec<f64> {
    let mut x: Vec<f64> = (0..n)
        .map(|i| (2.0 * PI * i as f64 / (n - 1) as f64).cos())
        .collect();
    x[spike_at] += height;
    x
}

fn flagged(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect()
}

// ============================================================================
// Outlier Flagging Tests
// ============================================================================

/// Test that a single spike on a smooth curve is the only flagged point.
#[test]
fn test_mask_outliers_flags_single_spike() {
    let x = cosine_with_spike(200, 77, 10.0);

    let mask = mask_outliers(&x, 101, 3.0).unwrap();

    assert_eq!(mask.len(), x.len());
    assert_eq!(flagged(&mask), vec![77]);
}

/// Test that every window shape isolates the spike.
#[test]
fn test_outlier_flagger_window_functions() {
    let x = cosine_with_spike(200, 77, 10.0);

    for wf in [Flat, Hann, Hamming, Bartlett, Blackman] {
        let result = OutlierFlaggerBuilder::new()
            .window_length(101)
            .threshold(3.0)
            .window_function(wf)
            .build()
            .unwrap()
            .fit(&x)
            .unwrap();

        assert_eq!(result.outlier_indices(), vec![77], "window {}", wf.name());
        assert_eq!(result.window_function, wf);
    }
}

/// Test the contents of the full outlier result.
#[test]
fn test_outlier_result_fields() {
    let x = cosine_with_spike(200, 77, 10.0);

    let result = OutlierFlaggerBuilder::new()
        .window_length(101)
        .threshold(3.0)
        .build()
        .unwrap()
        .fit(&x)
        .unwrap();

    assert_eq!(result.len(), 200);
    assert_eq!(result.smoothed.len(), 200);
    assert_eq!(result.residuals.len(), 200);
    assert_eq!(result.outlier_count(), 1);
    assert_eq!(result.window_length, 101);

    let mean = result.residuals.iter().sum::<f64>() / 200.0;
    assert_relative_eq!(result.mean_residual, mean, epsilon = 1e-12);
    assert_relative_eq!(result.cutoff, 3.0 * mean, epsilon = 1e-12);

    for (i, (&xi, &si)) in x.iter().zip(&result.smoothed).enumerate() {
        assert_relative_eq!(result.residuals[i], (xi - si).abs(), epsilon = 1e-12);
    }

    let max = result.max_residual().unwrap();
    assert_relative_eq!(max, result.residuals[77], epsilon = 1e-12);
}

/// Test that a constant series has no outliers.
#[test]
fn test_mask_outliers_constant_series() {
    let x = vec![2.5f64; 30];
    let mask = mask_outliers(&x, 7, 2.0).unwrap();

    assert_eq!(mask, vec![false; 30]);
}

/// Test that f32 input is supported.
#[test]
fn test_mask_outliers_f32() {
    let x: Vec<f32> = cosine_with_spike(200, 120, 10.0)
        .into_iter()
        .map(|v| v as f32)
        .collect();

    let mask = mask_outliers(&x, 101, 3.0f32).unwrap();
    assert_eq!(flagged(&mask), vec![120]);
}

/// Test that the result renders a summary.
#[test]
fn test_outlier_result_display() {
    let x = cosine_with_spike(200, 77, 10.0);
    let result = OutlierFlaggerBuilder::new()
        .window_length(101)
        .threshold(3.0)
        .build()
        .unwrap()
        .fit(&x)
        .unwrap();

    let text = format!("{result}");
    assert!(text.contains("Data points:   200"));
    assert!(text.contains("Outliers:      1"));
    assert!(text.contains("101 (Hann)"));
}

// ============================================================================
// Large Uncertainty Tests
// ============================================================================

/// Test the reference example.
#[test]
fn test_mask_largeunc_example() {
    let mask = mask_largeunc(&[1.0, 1.0, 1.0, 1.0, 10.0], 2.0).unwrap();
    assert_eq!(mask, vec![false, false, false, false, true]);
}

/// Test that values equal to the cutoff are not flagged.
#[test]
fn test_mask_largeunc_strict_comparison() {
    // mean = 2, cutoff = 1.5 * 2 = 3
    let mask = mask_largeunc(&[1.0, 2.0, 3.0], 1.5).unwrap();
    assert_eq!(mask, vec![false, false, false]);
}

/// Test that an empty input yields an empty mask.
#[test]
fn test_mask_largeunc_empty() {
    let mask = mask_largeunc::<f64>(&[], 2.0).unwrap();
    assert!(mask.is_empty());
}

/// Test the builder form.
#[test]
fn test_uncertainty_flagger_builder() {
    let flagger = UncertaintyFlaggerBuilder::new().threshold(1.2).build().unwrap();
    assert_relative_eq!(flagger.threshold(), 1.2);

    let mask = flagger.mask(&[0.1, 0.1, 0.1, 0.5]).unwrap();
    assert_eq!(mask, vec![false, false, false, true]);
}

// ============================================================================
// Smart Binning Tests
// ============================================================================

/// Test two well separated clusters.
#[test]
fn test_smart_binning_two_clusters() {
    let time = [0.0, 1.0, 2.0, 10.0, 11.0, 12.0];

    let (bins, unbinned) = smart_binning(&time, 2.5).unwrap();

    assert_eq!(bins, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    assert!(unbinned.is_empty());
}

/// Test that the reach is strict: with interval 1.5 the first and third
/// point of each cluster are not within reach of one another.
#[test]
fn test_smart_binning_strict_reach() {
    let time = [0.0, 1.0, 2.0, 10.0, 11.0, 12.0];

    let (bins, unbinned) = smart_binning(&time, 1.5).unwrap();

    assert_eq!(bins, vec![vec![0, 1], vec![3, 4]]);
    assert_eq!(unbinned, vec![2, 5]);
}

/// Test that the tightest candidate is preferred over an earlier one.
#[test]
fn test_smart_binning_prefers_tightest() {
    let time = [0.0, 0.5, 3.0, 3.2, 3.4, 10.0];

    let (bins, unbinned) = smart_binning(&time, 1.0).unwrap();

    assert_eq!(bins, vec![vec![0, 1], vec![2, 3, 4]]);
    assert_eq!(unbinned, vec![5]);
}

/// Test that identical timestamps form one bin.
#[test]
fn test_smart_binning_identical_times() {
    let (bins, unbinned) = smart_binning(&[1.0, 1.0, 1.0, 1.0], 0.1).unwrap();

    assert_eq!(bins, vec![vec![0, 1, 2, 3]]);
    assert!(unbinned.is_empty());
}

/// Test that isolated points are all reported as unbinned.
#[test]
fn test_smart_binning_all_isolated() {
    let (bins, unbinned) = smart_binning(&[0.0, 10.0, 20.0, 30.0], 1.0).unwrap();

    assert!(bins.is_empty());
    assert_eq!(unbinned, vec![0, 1, 2, 3]);
}

/// Test that series shorter than two points compute nothing.
#[test]
fn test_smart_binning_short_series() {
    let (bins, unbinned) = smart_binning::<f64>(&[], 1.0).unwrap();
    assert!(bins.is_empty());
    assert!(unbinned.is_empty());

    let (bins, unbinned) = smart_binning(&[3.0], 1.0).unwrap();
    assert!(bins.is_empty());
    assert!(unbinned.is_empty());
}

/// Test that the reporter receives the bin-size summary once.
#[test]
fn test_smart_binning_reporter() {
    let seen: RefCell<Vec<BinSummary>> = RefCell::new(Vec::new());
    let time = [0.0, 0.1, 0.2, 5.0, 5.1, 9.0];

    let binning = SmartBinningBuilder::new()
        .interval(0.5)
        .reporter(|summary: &BinSummary| seen.borrow_mut().push(summary.clone()))
        .build()
        .unwrap()
        .fit(&time)
        .unwrap();

    assert_eq!(binning.len(), 2);
    assert_eq!(binning.unbinned, vec![5]);

    let seen = seen.into_inner();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].bins, 2);
    assert_eq!(seen[0].min, 2);
    assert_eq!(seen[0].max, 3);
    assert_relative_eq!(seen[0].median, 2.5);
    assert_relative_eq!(seen[0].mean, 2.5);
}

/// Test that the reporter is silent when nothing was found.
#[test]
fn test_smart_binning_reporter_silent_without_bins() {
    let calls = RefCell::new(0usize);

    let binning = SmartBinningBuilder::new()
        .interval(0.5)
        .reporter(|_: &BinSummary| *calls.borrow_mut() += 1)
        .build()
        .unwrap()
        .fit(&[0.0, 5.0, 10.0])
        .unwrap();

    assert!(binning.is_empty());
    assert_eq!(*calls.borrow(), 0);
}

/// Test the `Binning` helpers.
#[test]
fn test_binning_helpers() {
    let binning = SmartBinningBuilder::new()
        .interval(1.0)
        .build()
        .unwrap()
        .fit(&[0.0, 0.5, 3.0, 3.2, 3.4, 10.0])
        .unwrap();

    assert_eq!(binning.bin_of(0), Some(0));
    assert_eq!(binning.bin_of(1), Some(0));
    assert_eq!(binning.bin_of(4), Some(1));
    assert_eq!(binning.bin_of(5), None);
    assert_eq!(binning.bin_of(99), None);

    assert_eq!(binning.bins[1].start(), 2);
    assert_eq!(binning.bins[1].stop(), 5);
    assert!(binning.bins[1].contains(3));
    assert_eq!(binning.index_groups(), vec![vec![0, 1], vec![2, 3, 4]]);
}

// ============================================================================
// Gap Splitting Tests
// ============================================================================

/// Test splitting at large gaps.
#[test]
fn test_split_data_basic() {
    let time = [0.0, 1.0, 2.0, 10.0, 11.0, 20.0];

    let groups = split_data(&time, 5.0).unwrap();

    assert_eq!(groups, vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
}

/// Test that steps equal to the gap do not split.
#[test]
fn test_split_data_gap_is_exclusive() {
    let groups = split_data(&[0.0, 2.0, 4.0], 2.0).unwrap();
    assert_eq!(groups, vec![vec![0, 1, 2]]);
}

/// Test that concatenating the groups reconstructs the series.
#[test]
fn test_split_data_round_trip() {
    let time = [0.0, 0.3, 0.4, 3.0, 3.1, 7.5, 7.6, 7.7, 20.0];

    let groups = split_data(&time, 1.0).unwrap();
    let rebuilt: Vec<f64> = groups.iter().flatten().map(|&i| time[i]).collect();

    assert_eq!(rebuilt, time.to_vec());
}

/// Test degenerate lengths.
#[test]
fn test_split_data_short_series() {
    assert!(split_data::<f64>(&[], 1.0).unwrap().is_empty());
    assert_eq!(split_data(&[4.0], 1.0).unwrap(), vec![vec![0]]);
}

/// Test the segment form of the splitter.
#[test]
fn test_gap_splitter_segments() {
    let splitter = GapSplitterBuilder::new().gap(5.0).build().unwrap();
    let segments = splitter.segments(&[0.0, 1.0, 20.0, 21.0]).unwrap();

    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].start(), segments[0].stop()), (0, 2));
    assert_eq!((segments[1].start(), segments[1].stop()), (2, 4));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that unsorted time is rejected by every time-based operation.
#[test]
fn test_unsorted_time_rejected() {
    let time = [0.0, 2.0, 1.0, 3.0];

    let err = smart_binning(&time, 1.0).unwrap_err();
    assert_eq!(err, PrepError::UnsortedTime { index: 2 });
    assert!(err.is_invalid_argument());

    let err = split_data(&time, 1.0).unwrap_err();
    assert_eq!(err, PrepError::UnsortedTime { index: 2 });
}

/// Test that non-finite values are rejected.
#[test]
fn test_non_finite_rejected() {
    assert!(matches!(
        smart_binning(&[0.0, f64::NAN], 1.0),
        Err(PrepError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        mask_largeunc(&[1.0, f64::INFINITY], 2.0),
        Err(PrepError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        mask_outliers(&[1.0, 2.0, f64::NAN, 4.0, 5.0], 3, 2.0),
        Err(PrepError::InvalidNumericValue(_))
    ));
}

/// Test window length constraints.
#[test]
fn test_invalid_window_length() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();

    for window_length in [0, 4, 10, 11] {
        assert_eq!(
            mask_outliers(&x, window_length, 2.0).unwrap_err(),
            PrepError::InvalidWindowLength {
                got: window_length,
                n: 10
            }
        );
    }

    assert!(mask_outliers(&x, 9, 2.0).is_ok());
    assert!(mask_outliers(&x, 1, 2.0).is_ok());
}

/// Test that empty series cannot be smoothed.
#[test]
fn test_mask_outliers_empty() {
    assert_eq!(
        mask_outliers::<f64>(&[], 3, 2.0).unwrap_err(),
        PrepError::EmptyInput
    );
}

/// Test that a single point cannot be smoothed.
#[test]
fn test_mask_outliers_single_point() {
    assert_eq!(
        mask_outliers(&[1.0], 1, 2.0).unwrap_err(),
        PrepError::TooFewPoints { got: 1, min: 2 }
    );
}

/// Test non-positive thresholds, intervals and gaps.
#[test]
fn test_non_positive_parameters() {
    let time = [0.0, 1.0, 2.0];

    assert_eq!(
        mask_largeunc(&time, 0.0).unwrap_err(),
        PrepError::InvalidThreshold(0.0)
    );
    assert_eq!(
        mask_outliers(&time, 1, -1.0).unwrap_err(),
        PrepError::InvalidThreshold(-1.0)
    );
    assert_eq!(
        smart_binning(&time, 0.0).unwrap_err(),
        PrepError::InvalidInterval(0.0)
    );
    assert_eq!(
        split_data(&time, -2.0).unwrap_err(),
        PrepError::InvalidGap(-2.0)
    );
}

/// Test deferred builder errors.
#[test]
fn test_builder_errors() {
    let err = OutlierFlaggerBuilder::<f64>::new()
        .window_length(5)
        .window_length(7)
        .threshold(2.0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        PrepError::DuplicateParameter {
            parameter: "window_length"
        }
    );

    let err = OutlierFlaggerBuilder::<f64>::new()
        .threshold(2.0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        PrepError::MissingParameter {
            parameter: "window_length"
        }
    );

    let err = SmartBinningBuilder::<f64>::new().build().unwrap_err();
    assert_eq!(
        err,
        PrepError::MissingParameter {
            parameter: "interval"
        }
    );

    let err = SmartBinningBuilder::<f64>::new()
        .interval(1.0)
        .reporter(NoReporter)
        .reporter(NoReporter)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        PrepError::DuplicateParameter {
            parameter: "reporter"
        }
    );

    let err = GapSplitterBuilder::new()
        .gap(1.0)
        .gap(2.0)
        .build()
        .unwrap_err();
    assert_eq!(err, PrepError::DuplicateParameter { parameter: "gap" });
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(
        PrepError::UnsortedTime { index: 3 }.to_string(),
        "Time is not sorted increasingly: time[3] < time[2]"
    );
    assert_eq!(
        PrepError::InvalidWindowLength { got: 4, n: 10 }.to_string(),
        "Invalid window_length: 4 (must be odd, at least 1 and less than 10)"
    );
    assert_eq!(
        PrepError::InvalidInterval(-1.0).to_string(),
        "Invalid interval: -1 (must be > 0 and finite)"
    );
}
