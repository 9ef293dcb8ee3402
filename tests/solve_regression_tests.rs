//! End-to-end tests on synthetic slider challenges
//!
//! Each challenge is a light, slightly noisy background with a dark piece
//! outline drawn at a known column. These protect the full pipeline:
//! binarization, run indexing, edge pairing and offset selection.

use slide_gap::overlay::{DEFAULT_MARKER, render_overlay};
use slide_gap::tools::{load_rgba, save_overlay};
use slide_gap::{
    GeometryTrait, PairGroup, PixelBuffer, SolveError, Solver, SolverConfig, binarize,
    binarize_collect, find_gap_candidates, inspect, solve, solve_batch, solve_with_report,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Background whose mean RGB stays well above the default threshold
fn background(width: usize, height: usize, seed: u32) -> PixelBuffer {
    let mut state = seed;
    let mut buffer = PixelBuffer::filled(width, height, [0, 0, 0, 255]);
    for y in 0..height {
        for x in 0..width {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let v = 160 + ((state >> 16) % 80) as u8;
            buffer.set_pixel(x, y, [v, v.saturating_sub(10), v, 255]);
        }
    }
    buffer
}

fn dark_segment(buffer: &mut PixelBuffer, x: usize, start: usize, len: usize) {
    for y in start..start + len {
        buffer.set_pixel(x, y, [15, 25, 35, 255]);
    }
}

/// Intact edge: one run of the full edge height
fn full_edge(buffer: &mut PixelBuffer, x: usize, top: usize) {
    dark_segment(buffer, x, top, 87);
}

/// Edge crossed by the notch: 25 rows, 25-row opening, 37 rows
fn notched_edge(buffer: &mut PixelBuffer, x: usize, top: usize) {
    dark_segment(buffer, x, top, 25);
    dark_segment(buffer, x, top + 50, 37);
}

#[test]
fn test_full_edges_85_apart() {
    init_logging();
    let mut buffer = PixelBuffer::filled(200, 100, [255, 255, 255, 255]);
    full_edge(&mut buffer, 20, 0);
    full_edge(&mut buffer, 105, 0);

    let offset = solve(&mut buffer, &GeometryTrait::default()).unwrap();
    assert_eq!(offset.left_offset, 20);
}

#[test]
fn test_piece_outline_with_notch_on_noisy_background() {
    init_logging();
    let mut buffer = background(320, 160, 11);
    full_edge(&mut buffer, 131, 30);
    notched_edge(&mut buffer, 215, 30);

    let report = solve_with_report(&mut buffer, &SolverConfig::default()).unwrap();
    assert_eq!(report.offset.left_offset, 131);
    assert_eq!(report.pairs.len(), 1);
    assert_eq!(report.pairs[0].group, PairGroup::FullNotch);
    assert_eq!(report.pairs[0].distance(), 84);
}

#[test]
fn test_anchor_is_full_line_even_when_right_of_notch() {
    let mut buffer = background(320, 160, 5);
    notched_edge(&mut buffer, 60, 10);
    full_edge(&mut buffer, 145, 10);

    let report = solve_with_report(&mut buffer, &SolverConfig::default()).unwrap();
    assert_eq!(report.offset.left_offset, 145);
    assert_eq!(report.pairs[0].left_column(), 60);
}

#[test]
fn test_full_notch_group_precedes_full_full() {
    let mut buffer = PixelBuffer::filled(400, 120, [240, 240, 240, 255]);
    full_edge(&mut buffer, 10, 0);
    full_edge(&mut buffer, 95, 0);
    notched_edge(&mut buffer, 265, 0);
    full_edge(&mut buffer, 180, 0);

    let report = solve_with_report(&mut buffer, &SolverConfig::default()).unwrap();
    let groups: Vec<PairGroup> = report.pairs.iter().map(|p| p.group).collect();
    assert_eq!(
        groups,
        vec![
            PairGroup::FullNotch,
            PairGroup::FullFull,
            PairGroup::FullFull
        ]
    );
    assert_eq!(report.offset.left_offset, 180);
}

#[test]
fn test_width_bounds_are_exclusive_end_to_end() {
    for distance in [83usize, 87] {
        let mut buffer = PixelBuffer::filled(200, 100, [255, 255, 255, 255]);
        full_edge(&mut buffer, 10, 0);
        full_edge(&mut buffer, 10 + distance, 0);
        assert_eq!(
            solve(&mut buffer, &GeometryTrait::default()),
            Err(SolveError::NoQualifyingPair {
                full_lines: 2,
                notch_lines: 0
            })
        );
    }
}

#[test]
fn test_no_black_pixels_means_no_candidates() {
    assert!(find_gap_candidates(Vec::new(), &GeometryTrait::default()).is_empty());

    let mut buffer = background(120, 90, 3);
    assert_eq!(
        solve(&mut buffer, &GeometryTrait::default()),
        Err(SolveError::NoCandidatesFound)
    );
}

#[test]
fn test_threshold_changes_classification() {
    // Mid-grey edges vanish once the threshold drops below their luminance
    let mut source = PixelBuffer::filled(200, 100, [250, 250, 250, 255]);
    for x in [20, 105] {
        for y in 0..87 {
            source.set_pixel(x, y, [90, 90, 90, 255]);
        }
    }

    let dark = SolverConfig {
        threshold: 89,
        ..Default::default()
    };
    assert_eq!(
        Solver::with_config(dark).solve(&mut source.clone()),
        Err(SolveError::NoCandidatesFound)
    );

    let at_grey = SolverConfig {
        threshold: 90,
        ..Default::default()
    };
    let offset = Solver::with_config(at_grey).solve(&mut source.clone()).unwrap();
    assert_eq!(offset.left_offset, 20);
}

#[test]
fn test_binarize_twice_is_stable() {
    let mut once = background(64, 48, 21);
    full_edge(&mut once, 7, 0);
    let first = binarize_collect(&mut once, 100);

    let mut twice = once.clone();
    let second = binarize_collect(&mut twice, 100);
    binarize(&mut twice, 100, None, None);
    assert_eq!(once, twice);
    assert_eq!(first, second);
}

#[test]
fn test_overlay_does_not_change_result() {
    let mut buffer = background(320, 160, 8);
    full_edge(&mut buffer, 40, 20);
    full_edge(&mut buffer, 126, 20);

    let config = SolverConfig::default();
    let before = solve_with_report(&mut buffer.clone(), &config).unwrap();

    let mut binary = buffer.clone();
    let inspection = inspect(&mut binary, &config);
    let canvas = render_overlay(&binary, &inspection.pairs, DEFAULT_MARKER).unwrap();
    assert_eq!(canvas.pixel(40, 20), Some(DEFAULT_MARKER));
    assert_eq!(canvas.pixel(126, 106), Some(DEFAULT_MARKER));

    let after = solve_with_report(&mut buffer, &config).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_png_round_trip_through_loader() {
    let mut buffer = background(200, 100, 2);
    full_edge(&mut buffer, 50, 5);
    full_edge(&mut buffer, 136, 5);

    let path = std::env::temp_dir().join(format!(
        "slide_gap_regression_{}.png",
        std::process::id()
    ));
    save_overlay(&buffer, &path).unwrap();
    let mut loaded = load_rgba(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let offset = solve(&mut loaded, &GeometryTrait::default()).unwrap();
    assert_eq!(offset.left_offset, 50);
}

#[test]
fn test_batch_matches_individual_solves() {
    let mut buffers: Vec<PixelBuffer> = (0..6)
        .map(|i| {
            let mut b = background(240, 120, i as u32 + 40);
            full_edge(&mut b, 10 + i * 20, 10);
            notched_edge(&mut b, 10 + i * 20 + 85, 10);
            b
        })
        .collect();
    let individual: Vec<_> = buffers
        .clone()
        .iter_mut()
        .map(|b| solve(b, &GeometryTrait::default()))
        .collect();

    let batch = solve_batch(&mut buffers, &SolverConfig::default());
    assert_eq!(batch, individual);
    for (i, result) in batch.iter().enumerate() {
        assert_eq!(result.as_ref().unwrap().left_offset, 10 + i * 20);
    }
}
