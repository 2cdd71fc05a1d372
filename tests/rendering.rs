//! Rendering properties over arbitrary sample sequences.

use heapspark::spark::{
    bounds, joined_rows, render_bars, render_bars_with, render_digit_axis,
    render_digit_axis_aligned, render_glyphs, DigitAlignment, RenderError, Scale, BAR_LEVELS,
    GLYPHS,
};
use proptest::prelude::*;

fn samples() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 1..64)
}

fn magnitudes() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..10_000_000, 1..64)
}

proptest! {
    #[test]
    fn glyph_line_has_one_gradient_glyph_per_sample(s in samples()) {
        let spark = render_glyphs(&s).unwrap();
        prop_assert_eq!(spark.line.chars().count(), s.len());
        prop_assert!(spark.line.chars().all(|c| GLYPHS.contains(&c)));
    }

    #[test]
    fn glyph_extremes_use_first_and_last_glyph(s in samples()) {
        let spark = render_glyphs(&s).unwrap();
        let glyphs: Vec<char> = spark.line.chars().collect();
        let (min, max) = bounds(&s).unwrap();
        for (i, &v) in s.iter().enumerate() {
            if v == min {
                prop_assert_eq!(glyphs[i], GLYPHS[0]);
            } else if v == max {
                prop_assert_eq!(glyphs[i], GLYPHS[GLYPHS.len() - 1]);
            }
        }
    }

    #[test]
    fn glyph_levels_are_monotonic(s in samples()) {
        let spark = render_glyphs(&s).unwrap();
        for i in 0..s.len() {
            for j in 0..s.len() {
                if s[i] <= s[j] {
                    prop_assert!(spark.levels[i] <= spark.levels[j]);
                }
            }
        }
    }

    #[test]
    fn bar_rows_match_tallest_column(s in samples()) {
        let bars = render_bars(&s).unwrap();
        let tallest = bars.heights.iter().copied().max().unwrap();
        prop_assert_eq!(bars.rows.len(), tallest);
        prop_assert!(bars.rows.len() >= 1 && bars.rows.len() <= BAR_LEVELS);
        prop_assert!(bars.rows.iter().all(|r| r.chars().count() == s.len()));
    }

    #[test]
    fn bar_baseline_is_fully_filled(s in samples(), fill in prop::char::range('!', '~')) {
        let bars = render_bars_with(&s, fill).unwrap();
        let baseline = bars.rows.last().unwrap();
        prop_assert!(baseline.chars().all(|c| c == fill));
    }

    #[test]
    fn bar_columns_are_solid_from_the_bottom(s in samples()) {
        let bars = render_bars(&s).unwrap();
        let grid: Vec<Vec<char>> = bars.rows.iter().map(|r| r.chars().collect()).collect();
        let height = grid.len();
        for (col, &h) in bars.heights.iter().enumerate() {
            for (row, cells) in grid.iter().enumerate() {
                let expected = if row >= height - h { '|' } else { ' ' };
                prop_assert_eq!(cells[col], expected);
            }
        }
    }

    #[test]
    fn rendering_is_repeatable(s in magnitudes(), tick in 1usize..6) {
        prop_assert_eq!(render_glyphs(&s).unwrap(), render_glyphs(&s).unwrap());
        prop_assert_eq!(render_bars(&s).unwrap(), render_bars(&s).unwrap());
        prop_assert_eq!(
            render_digit_axis(&s, tick).unwrap(),
            render_digit_axis(&s, tick).unwrap()
        );
    }

    #[test]
    fn constant_sequences_render_flat(c in any::<i64>(), n in 1usize..40) {
        let s = vec![c; n];
        let spark = render_glyphs(&s).unwrap();
        prop_assert_eq!(spark.line, GLYPHS[0].to_string().repeat(n));
        let bars = render_bars(&s).unwrap();
        prop_assert_eq!(bars.rows.len(), 1);
    }

    #[test]
    fn scale_levels_stay_in_range(s in samples(), levels in 2usize..16, shift in 0u32..12) {
        let scale = Scale::new(&s, levels, shift).unwrap();
        for &v in &s {
            prop_assert!(scale.level(v) < levels);
        }
    }

    #[test]
    fn digit_axis_rows_cover_longest_number(s in magnitudes()) {
        let rows = render_digit_axis(&s, 1).unwrap();
        let longest = s.iter().map(|v| v.to_string().len()).max().unwrap();
        prop_assert_eq!(rows.len(), longest);
        prop_assert!(rows.iter().all(|r| r.chars().count() == s.len()));
    }

    #[test]
    fn digit_axis_columns_spell_the_sample(s in magnitudes()) {
        for alignment in [DigitAlignment::Bottom, DigitAlignment::Top] {
            let rows = render_digit_axis_aligned(&s, 1, alignment).unwrap();
            let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
            for (col, v) in s.iter().enumerate() {
                let spelled: String = grid.iter().map(|row| row[col]).collect();
                prop_assert_eq!(spelled.trim(), v.to_string());
            }
        }
    }

    #[test]
    fn tick_keeps_only_every_nth_position(s in magnitudes(), tick in 2usize..8) {
        let plain = render_digit_axis(&s, 1).unwrap();
        let masked = render_digit_axis(&s, tick).unwrap();
        for (p, m) in plain.iter().zip(&masked) {
            for (i, (pc, mc)) in p.chars().zip(m.chars()).enumerate() {
                if (i + 1) % tick == 0 {
                    prop_assert_eq!(mc, pc);
                } else {
                    prop_assert_eq!(mc, ' ');
                }
            }
        }
    }
}

#[test]
fn glyph_boundary_scenario() {
    let spark = render_glyphs(&[10, 3, 4, 5, 6, 90, 389, 28, 3]).unwrap();
    assert_eq!(spark.min, 3);
    assert_eq!(spark.max, 389);
    let glyphs: Vec<char> = spark.line.chars().collect();
    assert_eq!(glyphs[6], '█');
    assert_eq!(glyphs[1], '▁');
    assert_eq!(glyphs[8], '▁');
}

#[test]
fn digit_axis_scenario() {
    let rows = render_digit_axis(&[101, 250, 47, 150, 6, 90, 389, 28, 300], 1).unwrap();
    assert_eq!(rows.len(), 3);
    let col = |c: usize| -> String { rows.iter().map(|r| r.chars().nth(c).unwrap()).collect() };
    assert_eq!(col(0), "101");
    assert_eq!(col(4), "  6");
}

#[test]
fn tick_four_scenario() {
    let rows = render_digit_axis(&[101, 250, 47, 150, 6, 90, 389, 28, 300], 4).unwrap();
    for row in &rows {
        for (i, c) in row.chars().enumerate() {
            if (i + 1) % 4 != 0 {
                assert_eq!(c, ' ');
            }
        }
    }
    assert_eq!(rows[2], "   0   8 ");
}

#[test]
fn joined_bars_scenario() {
    let bars = render_bars(&[1, 1, 3, 2, 3, 4, 2, 1, 4]).unwrap();
    assert_eq!(
        joined_rows(&bars.rows, "\n"),
        "     |  |\n  | ||  |\n  ||||| |\n|||||||||"
    );
}

#[test]
fn preconditions_fail_fast() {
    assert_eq!(render_glyphs(&[]), Err(RenderError::EmptyInput));
    assert_eq!(render_bars(&[]), Err(RenderError::EmptyInput));
    assert_eq!(
        render_digit_axis(&[1, -2], 1),
        Err(RenderError::NegativeSample { index: 1, value: -2 })
    );
    assert_eq!(
        Scale::new(&[1, 2], 1, 8),
        Err(RenderError::InvalidLevelCount { levels: 1 })
    );
}

#[test]
fn renders_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            std::thread::spawn(move || {
                let s: Vec<i64> = (0..100).map(|i| (i * 37 + t) % 251).collect();
                (render_glyphs(&s).unwrap(), render_bars(&s).unwrap())
            })
        })
        .collect();
    for (t, h) in handles.into_iter().enumerate() {
        let (glyphs, bars) = h.join().unwrap();
        let s: Vec<i64> = (0..100).map(|i| (i * 37 + t as i64) % 251).collect();
        assert_eq!(glyphs, render_glyphs(&s).unwrap());
        assert_eq!(bars, render_bars(&s).unwrap());
    }
}
