//! Decoding errors

use thiserror::Error;

/// Error decoding a [`Vtec`](crate::Vtec)
///
/// Every error is terminal: no partially-decoded code is
/// returned.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VtecDecodeErr {
    /// A required delimiter is missing or out of order
    ///
    /// Also returned when the event tracking number is not an
    /// unsigned integer.
    #[error("invalid VTEC: {0} field is missing or malformed")]
    Malformed(Field),

    /// A date/time group is not a valid `YYMMDDTHHMMZ` time
    #[error("invalid VTEC: {field} \"{text}\" is not a valid YYMMDDTHHMMZ time")]
    InvalidTimestamp {
        /// Which timestamp failed
        field: Field,

        /// The offending text
        text: String,
    },

    /// A code is missing from its reference table
    #[error("invalid VTEC: {0}")]
    UnknownReference(#[from] UnknownReferenceErr),
}

/// A code which is not present in its reference table
///
/// ```
/// use vtec::{Phenomenon, Registry};
///
/// let err = Phenomenon::from_code("QQ").unwrap_err();
/// assert_eq!(err.registry(), Registry::Phenomenon);
/// assert_eq!(err.code(), "QQ");
/// assert_eq!(err.to_string(), "unknown phenomenon code \"QQ\"");
/// ```
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[error("unknown {registry} code \"{code}\"")]
pub struct UnknownReferenceErr {
    registry: Registry,
    code: String,
}

impl UnknownReferenceErr {
    pub(crate) fn new<S>(registry: Registry, code: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            registry,
            code: code.into(),
        }
    }

    /// The reference table which missed
    pub fn registry(&self) -> Registry {
        self.registry
    }

    /// The code which was looked up, verbatim
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Reference tables consulted while decoding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Registry {
    /// Issuing offices, keyed by four-character identifier
    #[strum(to_string = "office")]
    Office,

    /// Hazard phenomena, keyed by two-character code
    #[strum(to_string = "phenomenon")]
    Phenomenon,

    /// Significance levels, keyed by one-character code
    #[strum(to_string = "significance")]
    Significance,
}

/// Positional fields of a P-VTEC string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Field {
    /// `k`
    #[strum(to_string = "product class")]
    ProductClass,

    /// `aaa`
    #[strum(to_string = "action")]
    Action,

    /// `cccc`
    #[strum(to_string = "office id")]
    OfficeId,

    /// `pp`
    #[strum(to_string = "phenomenon")]
    Phenomenon,

    /// `s`
    #[strum(to_string = "significance")]
    Significance,

    /// `nnnn`
    #[strum(to_string = "event tracking number")]
    TrackingNumber,

    /// Event beginning date/time group
    #[strum(to_string = "event beginning")]
    Begin,

    /// Event ending date/time group
    #[strum(to_string = "event ending")]
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            "invalid VTEC: event ending field is missing or malformed",
            &VtecDecodeErr::Malformed(Field::End).to_string()
        );

        let err = VtecDecodeErr::InvalidTimestamp {
            field: Field::Begin,
            text: "211399T0000Z".to_owned(),
        };
        assert_eq!(
            "invalid VTEC: event beginning \"211399T0000Z\" is not a valid YYMMDDTHHMMZ time",
            &err.to_string()
        );

        let err: VtecDecodeErr = UnknownReferenceErr::new(Registry::Office, "KZZZ").into();
        assert_eq!("invalid VTEC: unknown office code \"KZZZ\"", &err.to_string());
    }
}
