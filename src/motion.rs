// Scroll-linked animation math for the story track. Everything here is
// deterministic and DOM-free: the landing page samples these tables from its
// scroll listener and writes the results into element styles.

pub type ControlPoint = (f64, f64);

// Chapter 1: the JEET.ING hero holds, then gives way to the portal.
pub const INTRO_OPACITY: &[ControlPoint] = &[(0.0, 1.0), (0.05, 1.0), (0.20, 1.0), (0.25, 0.0)];
pub const INTRO_SCALE: &[ControlPoint] = &[(0.0, 0.95), (0.05, 1.0), (0.20, 1.05)];

// The dot in JEET.ING blows up into a full-screen portal and stays there.
pub const DOT_SCALE: &[ControlPoint] = &[(0.0, 1.0), (0.20, 1.0), (0.35, 80.0), (0.40, 80.0)];

// Chapter 2: Sanskrit etymology.
pub const ETYMOLOGY_OPACITY: &[ControlPoint] = &[(0.35, 0.0), (0.40, 1.0), (0.52, 1.0), (0.57, 0.0)];
pub const ETYMOLOGY_RISE: &[ControlPoint] = &[(0.35, 30.0), (0.40, 0.0)];

// Chapter 3: the crypto dialect.
pub const CRYPTO_OPACITY: &[ControlPoint] = &[(0.52, 0.0), (0.57, 1.0), (0.69, 1.0), (0.74, 0.0)];
pub const CRYPTO_RISE: &[ControlPoint] = &[(0.52, 30.0), (0.57, 0.0)];

// Chapter 4: the vision, held almost to the end of the track.
pub const VISION_OPACITY: &[ControlPoint] = &[(0.69, 0.0), (0.74, 1.0), (0.92, 1.0), (1.0, 0.0)];
pub const VISION_RISE: &[ControlPoint] = &[(0.69, 30.0), (0.74, 0.0)];

// Chapter 5: the fade-to-black handoff into the use-case grid.
pub const HANDOFF_OPACITY: &[ControlPoint] = &[(0.80, 0.0), (1.0, 1.0)];

// Nav bar fade, keyed to the acquisition section's approach rather than the
// story track.
pub const HEADER_OPACITY: &[ControlPoint] = &[(0.0, 1.0), (0.5, 0.5), (1.0, 0.0)];

// Piecewise-linear sample over sorted control points, clamped to the first
// and last values outside the defined domain.
pub fn sample(points: &[ControlPoint], progress: f64) -> f64 {
    let (first, rest) = match points.split_first() {
        Some(split) => split,
        None => return 0.0,
    };
    if progress <= first.0 {
        return first.1;
    }
    let mut prev = *first;
    for &(p, v) in rest {
        if progress <= p {
            let span = p - prev.0;
            if span <= f64::EPSILON {
                return v;
            }
            let t = (progress - prev.0) / span;
            return prev.1 + (v - prev.1) * t;
        }
        prev = (p, v);
    }
    prev.1
}

// Every derived value the story stage needs for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoryFrame {
    pub intro_opacity: f64,
    pub intro_scale: f64,
    pub dot_scale: f64,
    pub etymology_opacity: f64,
    pub etymology_rise: f64,
    pub crypto_opacity: f64,
    pub crypto_rise: f64,
    pub vision_opacity: f64,
    pub vision_rise: f64,
    pub handoff_opacity: f64,
}

impl StoryFrame {
    pub fn at(progress: f64) -> Self {
        Self {
            intro_opacity: sample(INTRO_OPACITY, progress),
            intro_scale: sample(INTRO_SCALE, progress),
            dot_scale: sample(DOT_SCALE, progress),
            etymology_opacity: sample(ETYMOLOGY_OPACITY, progress),
            etymology_rise: sample(ETYMOLOGY_RISE, progress),
            crypto_opacity: sample(CRYPTO_OPACITY, progress),
            crypto_rise: sample(CRYPTO_RISE, progress),
            vision_opacity: sample(VISION_OPACITY, progress),
            vision_rise: sample(VISION_RISE, progress),
            handoff_opacity: sample(HANDOFF_OPACITY, progress),
        }
    }

    // Chapter opacities in narrative order: intro, etymology, crypto,
    // vision, handoff overlay.
    pub fn chapter_opacities(&self) -> [f64; 5] {
        [
            self.intro_opacity,
            self.etymology_opacity,
            self.crypto_opacity,
            self.vision_opacity,
            self.handoff_opacity,
        ]
    }
}

// Progress through the story track: 0 when its top pins to the viewport top,
// 1 when its bottom meets the viewport bottom.
pub fn track_progress(scroll_y: f64, track_top: f64, track_height: f64, viewport: f64) -> f64 {
    let scrollable = track_height - viewport;
    if scrollable <= 0.0 {
        return if scroll_y >= track_top { 1.0 } else { 0.0 };
    }
    clamp_unit((scroll_y - track_top) / scrollable)
}

// How far a section's top has traveled from the viewport bottom to the
// viewport top: 0 while still below the fold, 1 once it reaches the top.
pub fn approach_progress(scroll_y: f64, section_top: f64, viewport: f64) -> f64 {
    if viewport <= 0.0 {
        return 0.0;
    }
    clamp_unit((scroll_y + viewport - section_top) / viewport)
}

// Overall scroll position across the whole document, for the nav readout.
pub fn page_progress(scroll_y: f64, document_height: f64, viewport: f64) -> f64 {
    let scrollable = document_height - viewport;
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp_unit(scroll_y / scrollable)
}

pub fn signal_percent(progress: f64) -> u32 {
    (clamp_unit(progress) * 100.0).round() as u32
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sample_clamps_below_the_domain() {
        assert_eq!(sample(ETYMOLOGY_OPACITY, -1.0), 0.0);
        assert_eq!(sample(INTRO_OPACITY, -0.5), 1.0);
    }

    #[test]
    fn sample_clamps_above_the_domain() {
        assert_eq!(sample(INTRO_OPACITY, 2.0), 0.0);
        assert_eq!(sample(DOT_SCALE, 1.5), 80.0);
        assert_eq!(sample(INTRO_SCALE, 0.9), 1.05);
    }

    #[test]
    fn sample_interpolates_linearly_between_points() {
        let ramp: &[ControlPoint] = &[(0.0, 0.0), (1.0, 10.0)];
        assert_close(sample(ramp, 0.25), 2.5);
        assert_close(sample(ramp, 0.5), 5.0);
        assert_close(sample(ramp, 0.75), 7.5);
    }

    #[test]
    fn sample_of_empty_table_is_zero() {
        assert_eq!(sample(&[], 0.5), 0.0);
    }

    #[test]
    fn chapter_opacities_stay_in_unit_range_across_the_track() {
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            for opacity in StoryFrame::at(p).chapter_opacities() {
                assert!(
                    (0.0..=1.0).contains(&opacity),
                    "opacity {opacity} out of range at progress {p}"
                );
            }
        }
    }

    #[test]
    fn track_start_shows_only_the_intro() {
        let frame = StoryFrame::at(0.0);
        assert_eq!(frame.chapter_opacities(), [1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(frame.dot_scale, 1.0);
        assert_eq!(frame.intro_scale, 0.95);
    }

    #[test]
    fn track_end_shows_only_the_handoff() {
        let frame = StoryFrame::at(1.0);
        assert_eq!(frame.chapter_opacities(), [0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(frame.dot_scale, 80.0);
    }

    #[test]
    fn etymology_owns_the_mid_track() {
        let frame = StoryFrame::at(0.45);
        assert_eq!(frame.etymology_opacity, 1.0);
        assert_eq!(frame.intro_opacity, 0.0);
        assert_eq!(frame.crypto_opacity, 0.0);
        assert_eq!(frame.vision_opacity, 0.0);
        assert_eq!(frame.etymology_rise, 0.0);
    }

    #[test]
    fn at_most_one_chapter_is_fully_visible_at_any_point() {
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            let full = StoryFrame::at(p)
                .chapter_opacities()
                .iter()
                .filter(|o| **o >= 0.999)
                .count();
            assert!(full <= 1, "{full} chapters fully visible at progress {p}");
        }
    }

    #[test]
    fn adjacent_chapters_cross_fade_over_a_short_overlap() {
        // Etymology hands off to crypto across 0.52..0.57; the fades mirror
        // each other, so their sum stays at one through the zone.
        for step in 0..=10 {
            let p = 0.52 + 0.05 * step as f64 / 10.0;
            let frame = StoryFrame::at(p);
            assert_close(frame.etymology_opacity + frame.crypto_opacity, 1.0);
        }
    }

    #[test]
    fn incoming_chapters_rise_into_place() {
        let arriving = StoryFrame::at(0.35);
        assert_eq!(arriving.etymology_rise, 30.0);
        let settled = StoryFrame::at(0.40);
        assert_eq!(settled.etymology_rise, 0.0);
        assert_close(StoryFrame::at(0.375).etymology_rise, 15.0);
    }

    #[test]
    fn the_dot_expands_into_a_portal_and_holds() {
        assert_eq!(StoryFrame::at(0.1).dot_scale, 1.0);
        assert_close(StoryFrame::at(0.275).dot_scale, 40.5);
        assert_eq!(StoryFrame::at(0.5).dot_scale, 80.0);
    }

    #[test]
    fn header_fades_out_as_the_acquisition_section_arrives() {
        assert_eq!(sample(HEADER_OPACITY, 0.0), 1.0);
        assert_close(sample(HEADER_OPACITY, 0.5), 0.5);
        assert_eq!(sample(HEADER_OPACITY, 1.0), 0.0);
    }

    #[test]
    fn track_progress_pins_to_the_ends() {
        // 400vh track on a 1000px viewport: 4000 tall, 3000 scrollable.
        assert_eq!(track_progress(0.0, 0.0, 4000.0, 1000.0), 0.0);
        assert_eq!(track_progress(-200.0, 0.0, 4000.0, 1000.0), 0.0);
        assert_close(track_progress(1500.0, 0.0, 4000.0, 1000.0), 0.5);
        assert_eq!(track_progress(3000.0, 0.0, 4000.0, 1000.0), 1.0);
        assert_eq!(track_progress(5000.0, 0.0, 4000.0, 1000.0), 1.0);
    }

    #[test]
    fn track_progress_handles_a_degenerate_track() {
        assert_eq!(track_progress(0.0, 100.0, 500.0, 1000.0), 0.0);
        assert_eq!(track_progress(100.0, 100.0, 500.0, 1000.0), 1.0);
    }

    #[test]
    fn approach_progress_spans_the_viewport_entry() {
        // Section top at 2000 with a 1000px viewport: enters the fold when
        // scroll hits 1000, reaches the top at 2000.
        assert_eq!(approach_progress(500.0, 2000.0, 1000.0), 0.0);
        assert_eq!(approach_progress(1000.0, 2000.0, 1000.0), 0.0);
        assert_close(approach_progress(1500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(approach_progress(2000.0, 2000.0, 1000.0), 1.0);
        assert_eq!(approach_progress(2500.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn page_progress_tracks_the_whole_document() {
        assert_eq!(page_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_close(page_progress(2000.0, 5000.0, 1000.0), 0.5);
        assert_eq!(page_progress(4000.0, 5000.0, 1000.0), 1.0);
        assert_eq!(page_progress(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn signal_percent_rounds_the_clamped_signal() {
        assert_eq!(signal_percent(0.0), 0);
        assert_eq!(signal_percent(0.004), 0);
        assert_eq!(signal_percent(0.456), 46);
        assert_eq!(signal_percent(1.0), 100);
        assert_eq!(signal_percent(7.0), 100);
    }
}
