//! Significance level

use std::fmt;
use std::str::FromStr;

use strum::EnumMessage;

use super::error::{Registry, UnknownReferenceErr};

/// P-VTEC significance code
///
/// The one-character `s` field of a P-VTEC string. Together with the
/// [`Phenomenon`](crate::Phenomenon), it names the hazard: `WS` + `A`
/// is a "Winter Storm Watch."
///
/// | Code | Significance                                          |
/// |------|-------------------------------------------------------|
/// | `W`  | [warning](crate::SignificanceLevel::Warning)          |
/// | `A`  | [watch](crate::SignificanceLevel::Watch)              |
/// | `Y`  | [advisory](crate::SignificanceLevel::Advisory)        |
/// | `S`  | [statement](crate::SignificanceLevel::Statement)      |
/// | `F`  | [forecast](crate::SignificanceLevel::Forecast)        |
/// | `O`  | [outlook](crate::SignificanceLevel::Outlook)          |
/// | `N`  | [synopsis](crate::SignificanceLevel::Synopsis)        |
///
/// Codes are case-sensitive. Anything else is an
/// [`UnknownReferenceErr`](crate::UnknownReferenceErr).
///
/// ```
/// use vtec::{Registry, SignificanceLevel};
///
/// let sig = SignificanceLevel::from_code("A").unwrap();
/// assert_eq!(SignificanceLevel::Watch, sig);
/// assert_eq!("Watch", sig.as_display_str());
/// assert_eq!("Watch", format!("{}", sig));
/// assert_eq!("A", sig.as_code_str());
/// assert_eq!("A", format!("{:#}", sig));
///
/// let err = SignificanceLevel::from_code("a").unwrap_err();
/// assert_eq!(Registry::Significance, err.registry());
/// ```
///
/// ## `S` and `N`
///
/// Some older tables list `S` twice, as both "Statement" and
/// "Synopsis," which leaves the second entry as the only one that
/// can ever match. NWSI 10-1703 assigns "Synopsis" its own code, `N`.
/// This crate follows the directive: `S` is always a
/// [`Statement`](SignificanceLevel::Statement), and only `N` decodes
/// as a [`Synopsis`](SignificanceLevel::Synopsis).
///
/// ```
/// # use vtec::SignificanceLevel;
/// assert_eq!(SignificanceLevel::Statement, SignificanceLevel::from_code("S").unwrap());
/// assert_eq!(SignificanceLevel::Synopsis, SignificanceLevel::from_code("N").unwrap());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[repr(u8)]
pub enum SignificanceLevel {
    /// Warning
    ///
    /// A hazardous event is occurring, imminent, or likely.
    #[strum(serialize = "W", detailed_message = "Warning")]
    Warning,

    /// Watch
    ///
    /// Conditions are favorable for a hazardous event, but its
    /// occurrence, location, or timing is still uncertain.
    #[strum(serialize = "A", detailed_message = "Watch")]
    Watch,

    /// Advisory
    ///
    /// A less serious event which may still cause inconvenience.
    #[strum(serialize = "Y", detailed_message = "Advisory")]
    Advisory,

    /// Statement
    ///
    /// Follow-up information to a warning, watch, or advisory.
    #[strum(serialize = "S", detailed_message = "Statement")]
    Statement,

    /// Forecast
    #[strum(serialize = "F", detailed_message = "Forecast")]
    Forecast,

    /// Outlook
    #[strum(serialize = "O", detailed_message = "Outlook")]
    Outlook,

    /// Synopsis
    ///
    /// Marine synopses. Encoded as `N`, never as `S`.
    #[strum(serialize = "N", detailed_message = "Synopsis")]
    Synopsis,
}

impl SignificanceLevel {
    /// Human-readable string representation
    ///
    /// Converts to a human-readable string, like "`Warning`."
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// P-VTEC string representation
    ///
    /// Returns the one-character code for this
    /// `SignificanceLevel`, like "`W`."
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Convert from one-character significance code
    ///
    /// Codes which are not in the table are reported as an
    /// [`UnknownReferenceErr`] against the significance registry.
    pub fn from_code(code: &str) -> Result<Self, UnknownReferenceErr> {
        Self::from_str(code).map_err(|_| UnknownReferenceErr::new(Registry::Significance, code))
    }
}

impl AsRef<str> for SignificanceLevel {
    fn as_ref(&self) -> &'static str {
        self.as_code_str()
    }
}

impl fmt::Display for SignificanceLevel {
    /// Printable string
    ///
    /// * The normal form is a human-readable string like "`Statement`"
    /// * The alternate form is a one-character string like "`S`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}
