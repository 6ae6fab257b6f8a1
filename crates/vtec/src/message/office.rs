//! Issuing office

use std::fmt;

/// NWS issuing office
///
/// Describes the Weather Forecast Office which issued a P-VTEC
/// string. Offices are obtained from the
/// [office registry](crate::offices) or from
/// [`Vtec::office()`](crate::Vtec::office).
///
/// ```
/// let office = vtec::offices::lookup("KBUF").unwrap();
/// assert_eq!("BUF", office.short_id());
/// assert_eq!("Buffalo", office.city());
/// assert_eq!("NY", office.state());
///
/// assert_eq!("Buffalo, NY", format!("{}", office));
/// assert_eq!("BUF", format!("{:#}", office));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Office {
    short_id: &'static str,
    city: &'static str,
    state: &'static str,
}

impl Office {
    pub(crate) const fn new(
        short_id: &'static str,
        city: &'static str,
        state: &'static str,
    ) -> Self {
        Self {
            short_id,
            city,
            state,
        }
    }

    /// Three-character office identifier
    ///
    /// The identifier used in product headers and on the web,
    /// like "`BUF`." This is usually the last three characters of
    /// the four-character id.
    pub fn short_id(&self) -> &'static str {
        self.short_id
    }

    /// City or area served by the office
    pub fn city(&self) -> &'static str {
        self.city
    }

    /// Two-letter state or territory abbreviation
    pub fn state(&self) -> &'static str {
        self.state
    }
}

impl fmt::Display for Office {
    /// Printable string
    ///
    /// * The normal form is the location, like "`Buffalo, NY`"
    /// * The alternate form is the short id, like "`BUF`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.short_id.fmt(f)
        } else {
            write!(f, "{}, {}", self.city, self.state)
        }
    }
}
