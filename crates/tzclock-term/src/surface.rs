//! ANSI terminal rendering of the clock and its timezone buttons.
//!
//! The screen is a three-line header (city, time, date) above one page
//! of buttons. Ticks only change the header, so they are drawn in place
//! with cursor save/restore; anything that changes the button page
//! triggers a full redraw.

use std::io::{self, Write};

use tzclock_core::{ControlSet, DisplayStrings, Presenter, TimezoneId};

const CLEAR: &str = "\x1b[2J\x1b[H";
const HOME: &str = "\x1b[H";
const SAVE: &str = "\x1b7";
const RESTORE: &str = "\x1b8";
const CLEAR_LINE: &str = "\x1b[K";

/// Text styles, empty when colors are disabled.
struct Style {
    city: &'static str,
    time: &'static str,
    dim: &'static str,
    active: &'static str,
    warn: &'static str,
    reset: &'static str,
}

const COLOR: Style = Style {
    city: "\x1b[1;97m",  // Bold bright white
    time: "\x1b[1;94m",  // Bold bright blue
    dim: "\x1b[90m",     // Dim gray
    active: "\x1b[7;94m", // Reversed bright blue
    warn: "\x1b[33m",    // Yellow
    reset: "\x1b[0m",
};

const PLAIN: Style = Style {
    city: "",
    time: "",
    dim: "",
    active: "",
    warn: "",
    reset: "",
};

/// A [`Presenter`] that draws to an ANSI terminal (or any writer).
pub struct TerminalSurface<W: Write> {
    out: W,
    controls: ControlSet,
    city: String,
    display: Option<DisplayStrings>,
    status: String,
    page: usize,
    page_size: usize,
    color: bool,
    needs_full_redraw: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, controls: ControlSet, page_size: usize, color: bool) -> Self {
        Self {
            out,
            controls,
            city: String::new(),
            display: None,
            status: String::new(),
            page: 0,
            page_size: page_size.max(1),
            color,
            needs_full_redraw: true,
        }
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn display(&self) -> Option<&DisplayStrings> {
        self.display.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Shows a one-line message under the buttons until replaced.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.needs_full_redraw = true;
    }

    /// Zero-based index of the visible page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.controls.len().div_ceil(self.page_size).max(1)
    }

    /// Shows the next page of buttons, wrapping to the first.
    pub fn next_page(&mut self) {
        self.page = (self.page + 1) % self.page_count();
        self.needs_full_redraw = true;
    }

    /// Shows the previous page of buttons, wrapping to the last.
    pub fn prev_page(&mut self) {
        let count = self.page_count();
        self.page = (self.page + count - 1) % count;
        self.needs_full_redraw = true;
    }

    /// Forces the next [`draw`](Self::draw) to repaint everything.
    pub fn invalidate(&mut self) {
        self.needs_full_redraw = true;
    }

    /// Writes pending changes to the terminal.
    pub fn draw(&mut self) -> io::Result<()> {
        let frame = if self.needs_full_redraw {
            self.full_frame()
        } else {
            self.header_frame()
        };
        self.needs_full_redraw = false;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    /// Leaves the terminal in a clean state below the last frame.
    pub fn finish(&mut self) -> io::Result<()> {
        let reset = self.style().reset;
        writeln!(self.out, "{reset}")?;
        self.out.flush()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn style(&self) -> &'static Style {
        if self.color { &COLOR } else { &PLAIN }
    }

    fn header_lines(&self) -> [String; 3] {
        let s = self.style();
        let (time, date) = match &self.display {
            Some(d) => (d.time.as_str(), d.date.as_str()),
            None => ("--:--:--", ""),
        };
        [
            format!("  {}{}{}", s.city, self.city, s.reset),
            format!("  {}{time}{}", s.time, s.reset),
            format!("  {}{date}{}", s.dim, s.reset),
        ]
    }

    fn button_lines(&self) -> Vec<String> {
        let s = self.style();
        let start = self.page * self.page_size;
        self.controls
            .iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .map(|(i, c)| {
                let number = i + 1;
                if c.active {
                    format!(
                        "  {number:>4}  {}> {} <{}  {}{}{}",
                        s.active, c.label, s.reset, s.dim, c.key, s.reset
                    )
                } else {
                    format!(
                        "  {number:>4}  [ {} ]  {}{}{}",
                        c.label, s.dim, c.key, s.reset
                    )
                }
            })
            .collect()
    }

    fn full_frame(&self) -> String {
        let s = self.style();
        let mut frame = String::from(CLEAR);
        for line in self.header_lines() {
            frame.push_str(&line);
            frame.push('\n');
        }
        frame.push('\n');
        for line in self.button_lines() {
            frame.push_str(&line);
            frame.push('\n');
        }
        frame.push('\n');
        frame.push_str(&format!(
            "  {}Page {}/{} · number or key to select · n/p to page · q to quit{}\n",
            s.dim,
            self.page + 1,
            self.page_count(),
            s.reset
        ));
        if !self.status.is_empty() {
            frame.push_str(&format!("  {}{}{}\n", s.warn, self.status, s.reset));
        }
        frame.push_str("> ");
        frame
    }

    fn header_frame(&self) -> String {
        let mut frame = format!("{SAVE}{HOME}");
        for line in self.header_lines() {
            frame.push_str(&line);
            frame.push_str(CLEAR_LINE);
            frame.push('\n');
        }
        frame.push_str(RESTORE);
        frame
    }
}

impl<W: Write> Presenter for TerminalSurface<W> {
    fn show_city(&mut self, label: &str) {
        self.city = label.to_string();
    }

    fn set_active(&mut self, tz: &TimezoneId) {
        self.controls.set_active(tz);
        if let Some(index) = self.controls.position(tz) {
            self.page = index / self.page_size;
        }
        self.needs_full_redraw = true;
    }

    fn show_time(&mut self, display: &DisplayStrings) {
        self.display = Some(display.clone());
    }
}

#[cfg(test)]
mod tests {
    use tzclock_core::catalog;

    use super::*;

    fn surface(page_size: usize) -> TerminalSurface<Vec<u8>> {
        TerminalSurface::new(
            Vec::new(),
            ControlSet::from_catalog(&catalog::fallback()),
            page_size,
            false,
        )
    }

    fn output(surface: &TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8_lossy(surface.writer()).into_owned()
    }

    fn display() -> DisplayStrings {
        DisplayStrings {
            time: "08:05:09".into(),
            date: "Oct 20, 2026".into(),
        }
    }

    #[test]
    fn first_draw_is_a_full_frame() {
        // Arrange
        let mut s = surface(5);
        s.show_city("UTC");
        s.set_active(&"UTC".into());
        s.show_time(&display());

        // Act
        s.draw().unwrap();

        // Assert
        let out = output(&s);
        assert!(out.starts_with(CLEAR));
        assert!(out.contains("  UTC\n"));
        assert!(out.contains("08:05:09"));
        assert!(out.contains("Oct 20, 2026"));
        assert!(out.contains("> UTC <"));
        assert!(out.contains("[ Los Angeles ]"));
        assert!(out.contains("Page 1/4"));
    }

    #[test]
    fn time_only_changes_redraw_the_header_in_place() {
        // Arrange
        let mut s = surface(5);
        s.set_active(&"UTC".into());
        s.draw().unwrap();
        let before = s.writer().len();

        // Act
        s.show_time(&display());
        s.draw().unwrap();

        // Assert
        let tail = String::from_utf8_lossy(&s.writer()[before..]).into_owned();
        assert!(tail.starts_with(SAVE));
        assert!(tail.ends_with(RESTORE));
        assert!(tail.contains("08:05:09"));
        assert!(!tail.contains(CLEAR));
        assert!(!tail.contains("[ Los Angeles ]"));
    }

    #[test]
    fn selecting_jumps_to_the_page_of_the_active_control() {
        // Arrange
        let mut s = surface(5);
        let brisbane = TimezoneId::from("Australia/Brisbane");
        let index = s.controls().position(&brisbane).unwrap();

        // Act
        s.set_active(&brisbane);

        // Assert
        assert_eq!(s.page(), index / 5);
        assert_eq!(s.controls().active().count(), 1);
    }

    #[test]
    fn paging_wraps_in_both_directions() {
        // Arrange
        let mut s = surface(5);
        let count = s.page_count();

        // Act / Assert
        s.prev_page();
        assert_eq!(s.page(), count - 1);
        s.next_page();
        assert_eq!(s.page(), 0);
        s.next_page();
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn buttons_show_only_the_visible_page() {
        // Arrange
        let mut s = surface(5);
        s.next_page();

        // Act
        s.draw().unwrap();

        // Assert
        let out = output(&s);
        assert!(out.contains("     6  [ "));
        assert!(!out.contains("[ UTC ]"));
    }

    #[test]
    fn status_line_is_drawn_with_the_frame() {
        let mut s = surface(5);
        s.set_status("No timezone matches 'mars'");
        s.draw().unwrap();

        assert!(output(&s).contains("No timezone matches 'mars'"));
    }

    #[test]
    fn colors_are_omitted_when_disabled() {
        let mut s = surface(5);
        s.set_active(&"UTC".into());
        s.draw().unwrap();

        assert!(!output(&s).contains("\x1b[7;94m"));
    }

    #[test]
    fn empty_catalog_still_has_one_page() {
        let s = TerminalSurface::new(Vec::new(), ControlSet::default(), 5, true);
        assert_eq!(s.page_count(), 1);
    }
}
