//! Due date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a due date string that formats it for display.
///
/// Due dates are free text in the document. Values that parse as a calendar
/// date are shown as `Mon DD, YYYY`; anything else is shown verbatim.
///
/// ```rust
/// use waypoint_core::display::DueDate;
///
/// assert_eq!(DueDate("2025-03-07").to_string(), "Mar 07, 2025");
/// assert_eq!(DueDate("next spring").to_string(), "next spring");
/// ```
pub struct DueDate<'a>(pub &'a str);

impl DueDate<'_> {
    /// The parsed calendar date, if the text is one.
    pub fn date(&self) -> Option<Date> {
        self.0.parse().ok()
    }
}

impl fmt::Display for DueDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date() {
            Some(date) => write!(f, "{}", date.strftime("%b %d, %Y")),
            None => write!(f, "{}", self.0),
        }
    }
}
