//! Progress line formatting.
//!
//! One redraw is a single line rewritten in place:
//!
//! ```text
//! \r<label padded to label_width> [=====>        ] 42%
//! ```
//!
//! Only the bar interior is colored. The final redraw of a session is
//! followed by `"  ->  "`, the elapsed time, and a newline.
//!
//! The helpers here are pure and exported so callers can reuse the exact
//! arithmetic, e.g. to draw the same line somewhere other than a terminal.
//!
//! # Examples
//!
//! ```rust
//! use cmdbar::render::{fit_label, format_bar, percent_of};
//!
//! assert_eq!(percent_of(1, 3), 33);
//! assert_eq!(fit_label("Downloading", 8), "Downl...");
//! assert_eq!(format_bar("Copy", 6, 10, 50), "Copy   [=====>    ] 50%");
//! ```

use crate::terminal::Terminal;
use std::io;
use std::time::Duration;

/// Marker appended to labels that had to be cut.
const ELLIPSIS: &str = "...";

/// Separator between the final bar and the elapsed time.
pub const SUMMARY_SEPARATOR: &str = "  ->  ";

/// Fit `text` into a field of `width` characters.
///
/// Labels that fit are returned unchanged. Longer labels are cut and end in
/// `"..."` when the field has room for it; otherwise they are just cut.
pub fn fit_label(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    if width >= ELLIPSIS.len() {
        let mut fitted: String = text.chars().take(width - ELLIPSIS.len()).collect();
        fitted.push_str(ELLIPSIS);
        fitted
    } else {
        text.chars().take(width).collect()
    }
}

/// Percentage of `step` out of `total`, rounded half up.
///
/// Uses `(step * 100 + total / 2) / total` in integer arithmetic so the
/// boundaries are exact. `total` must not be zero.
pub fn percent_of(step: u64, total: u64) -> u64 {
    let step = u128::from(step);
    let total = u128::from(total);
    ((step * 100 + total / 2) / total) as u64
}

/// Index of the bar cell holding the `>` head, rounded half up.
pub fn fill_position(bar_width: usize, percent: u64) -> usize {
    let cells = bar_width as u128 * u128::from(percent);
    ((cells + 50) / 100) as usize
}

/// The bar interior: `=` before the fill position, `>` on it, spaces after.
pub fn bar_glyphs(bar_width: usize, percent: u64) -> String {
    let pos = fill_position(bar_width, percent);
    (0..bar_width)
        .map(|i| match i.cmp(&pos) {
            std::cmp::Ordering::Less => '=',
            std::cmp::Ordering::Equal => '>',
            std::cmp::Ordering::Greater => ' ',
        })
        .collect()
}

/// A whole progress line without the carriage return or any color.
///
/// `label` is padded to `label_width` but not cut; pass it through
/// [`fit_label`] first.
pub fn format_bar(label: &str, label_width: usize, bar_width: usize, percent: u64) -> String {
    format!(
        "{label:<label_width$} [{}] {percent}%",
        bar_glyphs(bar_width, percent)
    )
}

/// Elapsed time in the coarsest unit that is not empty.
///
/// A minute or more is shown as `HH:MM:SS`, hours included and not wrapped.
/// Below that only whole seconds, milliseconds or microseconds are shown.
pub fn format_duration(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;

    if hours > 0 || minutes > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else if seconds > 0 {
        format!("{seconds} seconds")
    } else if elapsed.subsec_millis() > 0 {
        format!("{} milliseconds", elapsed.subsec_millis())
    } else {
        format!("{} microseconds", elapsed.subsec_micros())
    }
}

/// Writes progress lines to a [`Terminal`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Renderer {
    label_width: usize,
    bar_width: usize,
}

impl Renderer {
    pub(crate) fn new(label_width: usize, bar_width: usize) -> Self {
        Self {
            label_width,
            bar_width,
        }
    }

    /// Rewrite the current line with `label` at `percent`.
    ///
    /// The accent color is taken and given back inside this call.
    pub(crate) fn draw<T: Terminal + ?Sized>(
        &self,
        terminal: &mut T,
        label: &str,
        percent: u64,
    ) -> io::Result<()> {
        let label_width = self.label_width;
        terminal.write_str(&format!("\r{label:<label_width$} ["))?;

        let colored = terminal.begin_accent_color();
        let glyphs = terminal.write_str(&bar_glyphs(self.bar_width, percent));
        terminal.end_accent_color(colored);
        glyphs?;

        terminal.write_str(&format!("] {percent}%"))?;
        terminal.flush()
    }

    /// Append the elapsed time to the line and end it.
    pub(crate) fn summary<T: Terminal + ?Sized>(
        &self,
        terminal: &mut T,
        elapsed: Duration,
    ) -> io::Result<()> {
        terminal.write_str(&format!("{SUMMARY_SEPARATOR}{}\n", format_duration(elapsed)))?;
        terminal.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::BufferTerminal;

    #[test]
    fn test_fit_label_short_is_unchanged() {
        assert_eq!(fit_label("Copy", 35), "Copy");
        assert_eq!(fit_label("", 35), "");
        assert_eq!(fit_label("exact", 5), "exact");
    }

    #[test]
    fn test_fit_label_long_gets_ellipsis() {
        let label = "a".repeat(40);
        let fitted = fit_label(&label, 35);
        assert_eq!(fitted.chars().count(), 35);
        assert!(fitted.ends_with("..."));
        assert_eq!(&fitted[..32], &label[..32]);
    }

    #[test]
    fn test_fit_label_narrow_field_is_cut() {
        assert_eq!(fit_label("abcdef", 2), "ab");
        assert_eq!(fit_label("abcdef", 3), "...");
        assert_eq!(fit_label("abcdef", 0), "");
    }

    #[test]
    fn test_fit_label_counts_characters() {
        assert_eq!(fit_label("éééééé", 5), "éé...");
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(0, 7), 0);
        assert_eq!(percent_of(7, 7), 100);
        assert_eq!(percent_of(199, 200), 100);
    }

    #[test]
    fn test_percent_of_does_not_overflow() {
        assert_eq!(percent_of(u64::MAX / 2, u64::MAX), 50);
        assert_eq!(percent_of(u64::MAX, u64::MAX), 100);
    }

    #[test]
    fn test_fill_position() {
        assert_eq!(fill_position(50, 0), 0);
        assert_eq!(fill_position(50, 33), 17);
        assert_eq!(fill_position(50, 50), 25);
        assert_eq!(fill_position(50, 100), 50);
        assert_eq!(fill_position(10, 25), 3);
    }

    #[test]
    fn test_bar_glyphs() {
        assert_eq!(bar_glyphs(4, 0), ">   ");
        assert_eq!(bar_glyphs(4, 50), "==> ");
        assert_eq!(bar_glyphs(4, 100), "====");
        assert_eq!(bar_glyphs(0, 100), "");
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::from_micros(500_000)), "500 milliseconds");
        assert_eq!(format_duration(Duration::from_secs(65)), "00:01:05");
        assert_eq!(format_duration(Duration::from_secs(3600)), "01:00:00");
        assert_eq!(format_duration(Duration::from_secs(100 * 3600 + 1)), "100:00:01");
        assert_eq!(format_duration(Duration::from_millis(2_750)), "2 seconds");
        assert_eq!(format_duration(Duration::from_micros(999)), "999 microseconds");
        assert_eq!(format_duration(Duration::ZERO), "0 microseconds");
    }

    #[test]
    fn test_draw_colors_only_the_interior() {
        let mut terminal = BufferTerminal::interactive();
        Renderer::new(4, 4)
            .draw(&mut terminal, "ab", 50)
            .unwrap();
        assert_eq!(terminal.output(), "\rab   [\x1b[94m==> \x1b[0m] 50%");
    }
}
