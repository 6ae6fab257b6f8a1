//! Product class and action codes

use std::fmt;
use std::str::FromStr;

use strum::EnumMessage;

/// P-VTEC product class
///
/// The one-character `k` field, which distinguishes operational
/// products from tests and experiments. Unrecognized classes are
/// quietly represented as [`ProductClass::Unknown`]: the class is
/// informational and never causes a decode to fail.
///
/// ```
/// use vtec::ProductClass;
///
/// assert_eq!(ProductClass::Operational, ProductClass::from_code("O"));
/// assert_eq!("Operational", ProductClass::Operational.as_display_str());
/// assert_eq!("T", ProductClass::Test.as_code_str());
/// assert_eq!(ProductClass::Unknown, ProductClass::from_code("Q"));
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
pub enum ProductClass {
    /// An unknown product class
    #[strum(serialize = "?", detailed_message = "Unknown product class")]
    Unknown,

    /// Operational product
    #[strum(serialize = "O", detailed_message = "Operational")]
    Operational,

    /// Test product
    ///
    /// Test products should not be acted upon.
    #[strum(serialize = "T", detailed_message = "Test")]
    Test,

    /// Experimental product
    #[strum(serialize = "E", detailed_message = "Experimental")]
    Experimental,

    /// Experimental VTEC in an operational product
    #[strum(
        serialize = "X",
        detailed_message = "Experimental VTEC in an operational product"
    )]
    ExperimentalInOperational,
}

impl ProductClass {
    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// P-VTEC string representation
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Convert from one-character product class code
    ///
    /// Unrecognized codes become [`ProductClass::Unknown`].
    pub fn from_code(code: &str) -> Self {
        Self::from_str(code).unwrap_or(ProductClass::Unknown)
    }

    /// True for products which are meant to be acted upon
    pub fn is_operational(&self) -> bool {
        matches!(
            self,
            ProductClass::Operational | ProductClass::ExperimentalInOperational
        )
    }
}

impl AsRef<str> for ProductClass {
    fn as_ref(&self) -> &'static str {
        self.as_code_str()
    }
}

impl fmt::Display for ProductClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

/// P-VTEC action code
///
/// The three-character `aaa` field says what this product does
/// to the event: issue it, continue it, cancel it, and so on.
/// Like [`ProductClass`], unrecognized actions are represented as
/// [`Action::Unknown`].
///
/// ```
/// use vtec::Action;
///
/// let act = Action::from_code("EXT");
/// assert_eq!(Action::ExtendedTime, act);
/// assert_eq!("Event extended (time)", format!("{}", act));
/// assert_eq!("EXT", format!("{:#}", act));
///
/// assert_eq!(Action::Unknown, Action::from_code("new"));
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
pub enum Action {
    /// An unknown action
    #[strum(serialize = "???", detailed_message = "Unknown action")]
    Unknown,

    /// New event
    #[strum(serialize = "NEW", detailed_message = "New event")]
    New,

    /// Event continued
    #[strum(serialize = "CON", detailed_message = "Event continued")]
    Continued,

    /// Event extended in time
    #[strum(serialize = "EXT", detailed_message = "Event extended (time)")]
    ExtendedTime,

    /// Event extended in area
    #[strum(serialize = "EXA", detailed_message = "Event extended (area)")]
    ExtendedArea,

    /// Event extended in both time and area
    #[strum(
        serialize = "EXB",
        detailed_message = "Event extended (time and area)"
    )]
    ExtendedBoth,

    /// Event upgraded to a more severe significance
    #[strum(serialize = "UPG", detailed_message = "Event upgraded")]
    Upgraded,

    /// Event cancelled
    #[strum(serialize = "CAN", detailed_message = "Event cancelled")]
    Cancelled,

    /// Event expiring
    #[strum(serialize = "EXP", detailed_message = "Event expiring")]
    Expiring,

    /// Correction to a previous product
    #[strum(serialize = "COR", detailed_message = "Correction")]
    Correction,

    /// Routine (non-event) product
    #[strum(serialize = "ROU", detailed_message = "Routine")]
    Routine,
}

impl Action {
    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// P-VTEC string representation
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Convert from three-character action code
    ///
    /// Unrecognized codes become [`Action::Unknown`].
    pub fn from_code(code: &str) -> Self {
        Self::from_str(code).unwrap_or(Action::Unknown)
    }

    /// True if this action ends the event
    pub fn is_terminal(&self) -> bool {
        matches!(self, Action::Cancelled | Action::Expiring)
    }
}

impl AsRef<str> for Action {
    fn as_ref(&self) -> &'static str {
        self.as_code_str()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}
