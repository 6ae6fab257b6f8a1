//! P-VTEC decoding

use std::convert::TryFrom;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use super::action::{Action, ProductClass};
use super::error::{Field, Registry, UnknownReferenceErr, VtecDecodeErr};
use super::office::Office;
use super::phenomenon::Phenomenon;
use super::significance::SignificanceLevel;
use crate::offices;

/// A decoded P-VTEC string
///
/// The Primary Valid Time Event Code is a one-line summary of a
/// hazard product issued by the National Weather Service:
///
/// ```txt
/// /O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/
///  k aaa cccc pp s nnnn yymmddThhnnZ-yymmddThhnnZ
/// ```
///
/// | Field          | Meaning                                         |
/// |----------------|-------------------------------------------------|
/// | `k`            | [product class](Vtec::product_class)            |
/// | `aaa`          | [action](Vtec::action)                          |
/// | `cccc`         | [issuing office](Vtec::office)                  |
/// | `pp`           | [phenomenon](Vtec::phenomenon)                  |
/// | `s`            | [significance](Vtec::significance)              |
/// | `nnnn`         | [event tracking number](Vtec::event_tracking_number) |
/// | first time     | [event beginning](Vtec::event_beginning)        |
/// | second time    | [event ending](Vtec::event_ending)              |
///
/// Fields are located by counting delimiters, not by width, so the
/// string may carry other text before the leading `/` or after the
/// trailing one. The office, phenomenon, and significance codes must
/// all be present in their reference tables.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use vtec::{Action, Phenomenon, SignificanceLevel, Vtec};
///
/// let vtec = Vtec::new("/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/").unwrap();
///
/// assert_eq!(Action::New, vtec.action());
/// assert_eq!("KBUF", vtec.office_id());
/// assert_eq!("Buffalo", vtec.office().city());
/// assert_eq!(Phenomenon::WinterStorm, vtec.phenomenon());
/// assert_eq!(SignificanceLevel::Watch, vtec.significance());
/// assert_eq!(1, vtec.event_tracking_number());
/// assert_eq!(
///     Some(Utc.with_ymd_and_hms(2021, 2, 14, 12, 0, 0).unwrap()),
///     vtec.event_beginning()
/// );
/// assert_eq!(
///     Utc.with_ymd_and_hms(2021, 2, 15, 0, 0, 0).unwrap(),
///     vtec.event_ending()
/// );
/// ```
///
/// `Vtec` implements `Display` as the original string. The alternate
/// form is a one-line summary.
///
/// ```
/// # use vtec::Vtec;
/// let vtec = Vtec::new("/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/").unwrap();
/// assert_eq!(
///     "Winter Storm Watch (NEW) from NWS Buffalo, NY #0001",
///     format!("{:#}", vtec)
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vtec {
    // the input, verbatim
    message: String,

    // byte ranges of each field within `message`
    bounds: Bounds,

    office: &'static Office,
    phenomenon: Phenomenon,
    significance: SignificanceLevel,
    tracking_number: u32,
    begin: Option<DateTime<Utc>>,
    end: DateTime<Utc>,
}

impl Vtec {
    /// Try to decode a P-VTEC `String`
    ///
    /// The `message` is retained verbatim. An error is returned if
    /// any field cannot be located, if a timestamp is invalid, or if
    /// a code is missing from its reference table. Errors are
    /// checked in that order.
    pub fn new<S>(message: S) -> Result<Self, VtecDecodeErr>
    where
        S: Into<String>,
    {
        let message: String = message.into();
        let bounds = check_vtec(&message)?;

        let tracking_number = message[bounds.tracking_number.clone()]
            .parse::<u32>()
            .map_err(|_| VtecDecodeErr::Malformed(Field::TrackingNumber))?;

        let begin = match &message[bounds.begin.clone()] {
            UNDEFINED_TIME => None,
            text => Some(parse_time(text, Field::Begin)?),
        };
        let end = parse_time(&message[bounds.end.clone()], Field::End)?;

        let office_id = &message[bounds.office_id.clone()];
        let office = offices::lookup(office_id)
            .ok_or_else(|| UnknownReferenceErr::new(Registry::Office, office_id))?;
        let phenomenon = Phenomenon::from_code(&message[bounds.phenomenon.clone()])?;
        let significance = SignificanceLevel::from_code(&message[bounds.significance.clone()])?;

        Ok(Self {
            message,
            bounds,
            office,
            phenomenon,
            significance,
            tracking_number,
            begin,
            end,
        })
    }

    /// Message text
    ///
    /// Returns the string this code was decoded from, exactly as
    /// it was given. Use [`release()`](#method.release) to obtain
    /// an owned `String`.
    pub fn as_str(&self) -> &str {
        &self.message
    }

    /// Product class
    ///
    /// Unrecognized classes decode as [`ProductClass::Unknown`];
    /// the original text is available from
    /// [`product_class_str()`](#method.product_class_str).
    pub fn product_class(&self) -> ProductClass {
        ProductClass::from_code(self.product_class_str())
    }

    /// Product class (as string)
    ///
    /// Usually one character, like `O` for operational.
    pub fn product_class_str(&self) -> &str {
        &self.message[self.bounds.product_class.clone()]
    }

    /// Action
    ///
    /// Unrecognized actions decode as [`Action::Unknown`].
    pub fn action(&self) -> Action {
        Action::from_code(self.action_str())
    }

    /// Action (as string)
    ///
    /// Usually three characters, like `NEW` or `CAN`.
    pub fn action_str(&self) -> &str {
        &self.message[self.bounds.action.clone()]
    }

    /// Four-character issuing office id, like "`KBUF`"
    pub fn office_id(&self) -> &str {
        &self.message[self.bounds.office_id.clone()]
    }

    /// Issuing office
    pub fn office(&self) -> &'static Office {
        self.office
    }

    /// Hazard phenomenon
    pub fn phenomenon(&self) -> Phenomenon {
        self.phenomenon
    }

    /// Significance level
    pub fn significance(&self) -> SignificanceLevel {
        self.significance
    }

    /// Event tracking number (ETN)
    ///
    /// Event tracking numbers are assigned sequentially by each
    /// office for each phenomenon and significance. Together with
    /// those three fields, the ETN identifies one event.
    pub fn event_tracking_number(&self) -> u32 {
        self.tracking_number
    }

    /// Event beginning time (UTC)
    ///
    /// `None` if the product encodes an undefined beginning,
    /// `000000T0000Z`. This usually means the event is already
    /// in progress.
    pub fn event_beginning(&self) -> Option<DateTime<Utc>> {
        self.begin
    }

    /// Event ending time (UTC)
    pub fn event_ending(&self) -> DateTime<Utc> {
        self.end
    }

    /// Is the event over?
    ///
    /// True once `now` is strictly later than the
    /// [event ending](#method.event_ending) time.
    pub fn is_expired_at(&self, now: &DateTime<Utc>) -> bool {
        self.end < *now
    }

    /// Is the event in effect?
    ///
    /// True if the event has begun (or has no defined beginning)
    /// and has not yet [expired](#method.is_expired_at).
    pub fn is_in_effect_at(&self, now: &DateTime<Utc>) -> bool {
        let started = match self.begin {
            Some(begin) => begin <= *now,
            None => true,
        };

        started && !self.is_expired_at(now)
    }

    /// Obtain the owned message String
    ///
    /// Destroys this object and releases the message
    /// contained within
    pub fn release(self) -> String {
        self.message
    }
}

impl fmt::Display for Vtec {
    /// Printable string
    ///
    /// * The normal form is the original string
    /// * The alternate form is a one-line summary like
    ///   "`Tornado Warning (NEW) from NWS Norman, OK #0042`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "{} {} ({}) from NWS {} #{:04}",
                self.phenomenon,
                self.significance,
                self.action_str(),
                self.office,
                self.tracking_number
            )
        } else {
            self.message.fmt(f)
        }
    }
}

impl AsRef<str> for Vtec {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Vtec> for String {
    #[inline]
    fn from(vtec: Vtec) -> String {
        vtec.release()
    }
}

impl TryFrom<String> for Vtec {
    type Error = VtecDecodeErr;

    #[inline]
    fn try_from(inp: String) -> Result<Self, Self::Error> {
        Self::new(inp)
    }
}

impl TryFrom<&str> for Vtec {
    type Error = VtecDecodeErr;

    #[inline]
    fn try_from(inp: &str) -> Result<Self, Self::Error> {
        Self::new(inp)
    }
}

impl FromStr for Vtec {
    type Err = VtecDecodeErr;

    #[inline]
    fn from_str(inp: &str) -> Result<Self, Self::Err> {
        Self::new(inp)
    }
}

/// Date/time group which means "no defined time"
const UNDEFINED_TIME: &str = "000000T0000Z";

// Byte ranges of each field in a P-VTEC string
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Bounds {
    product_class: Range<usize>,
    action: Range<usize>,
    office_id: Range<usize>,
    phenomenon: Range<usize>,
    significance: Range<usize>,
    tracking_number: Range<usize>,
    begin: Range<usize>,
    end: Range<usize>,
}

// A field begins after the `n`th `delim` and ends before
// another. Occurrences count from one, over the whole string.
type Boundary = (char, usize);

const PRODUCT_CLASS: (Boundary, Boundary) = (('/', 1), ('.', 1));
const ACTION: (Boundary, Boundary) = (('.', 1), ('.', 2));
const OFFICE_ID: (Boundary, Boundary) = (('.', 2), ('.', 3));
const PHENOMENON: (Boundary, Boundary) = (('.', 3), ('.', 4));
const SIGNIFICANCE: (Boundary, Boundary) = (('.', 4), ('.', 5));
const TRACKING_NUMBER: (Boundary, Boundary) = (('.', 5), ('.', 6));
const BEGIN: (Boundary, Boundary) = (('.', 6), ('-', 1));
const END: (Boundary, Boundary) = (('-', 1), ('/', 2));

// Locate every field of a P-VTEC string
//
// We check only that each delimiter exists and that every
// field ends at or after the point where it begins. Fields
// may be empty. Their content is validated by the caller.
fn check_vtec(vtec: &str) -> Result<Bounds, VtecDecodeErr> {
    Ok(Bounds {
        product_class: field_range(vtec, PRODUCT_CLASS, Field::ProductClass)?,
        action: field_range(vtec, ACTION, Field::Action)?,
        office_id: field_range(vtec, OFFICE_ID, Field::OfficeId)?,
        phenomenon: field_range(vtec, PHENOMENON, Field::Phenomenon)?,
        significance: field_range(vtec, SIGNIFICANCE, Field::Significance)?,
        tracking_number: field_range(vtec, TRACKING_NUMBER, Field::TrackingNumber)?,
        begin: field_range(vtec, BEGIN, Field::Begin)?,
        end: field_range(vtec, END, Field::End)?,
    })
}

// Byte range between two delimiters
fn field_range(
    vtec: &str,
    bounds: (Boundary, Boundary),
    field: Field,
) -> Result<Range<usize>, VtecDecodeErr> {
    let ((after, after_n), (before, before_n)) = bounds;

    let start = nth_index(vtec, after, after_n).ok_or(VtecDecodeErr::Malformed(field))? + 1;
    let end = nth_index(vtec, before, before_n).ok_or(VtecDecodeErr::Malformed(field))?;
    if end < start {
        return Err(VtecDecodeErr::Malformed(field));
    }

    Ok(start..end)
}

// Byte position of the `n`th occurrence of `delim`, counting from one
fn nth_index(haystack: &str, delim: char, n: usize) -> Option<usize> {
    haystack
        .match_indices(delim)
        .nth(n.checked_sub(1)?)
        .map(|(idx, _)| idx)
}

// Parse a `YYMMDDTHHMMZ` date/time group
//
// Two-digit years are always in the 2000s.
fn parse_time(text: &str, field: Field) -> Result<DateTime<Utc>, VtecDecodeErr> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^([0-9]{2})([0-9]{2})([0-9]{2})T([0-9]{2})([0-9]{2})Z$")
            .expect("bad VTEC time regexp");
    }

    let invalid = || VtecDecodeErr::InvalidTimestamp {
        field,
        text: text.to_owned(),
    };

    let caps = RE.captures(text).ok_or_else(invalid)?;
    let num = |i: usize| -> u32 { caps[i].parse().expect(PANIC_MSG) };

    Utc.with_ymd_and_hms(2000 + num(1) as i32, num(2), num(3), num(4), num(5), 0)
        .single()
        .ok_or_else(invalid)
}

const PANIC_MSG: &str = "VTEC time check admitted a non-numeric field";

#[cfg(test)]
mod tests {
    use super::*;

    const WINTER_STORM_WATCH: &str = "/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/";
    const ONGOING_WARNING: &str = "/O.CON.KLOT.WS.W.0004.000000T0000Z-210216T1800Z/";

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_nth_index() {
        const S: &str = "/a.b.c-d/";
        assert_eq!(Some(0), nth_index(S, '/', 1));
        assert_eq!(Some(8), nth_index(S, '/', 2));
        assert_eq!(None, nth_index(S, '/', 3));
        assert_eq!(Some(4), nth_index(S, '.', 2));
        assert_eq!(Some(6), nth_index(S, '-', 1));
        assert_eq!(None, nth_index(S, '/', 0));
        assert_eq!(None, nth_index("", '.', 1));
    }

    #[test]
    fn test_check_vtec() {
        let bounds = check_vtec(WINTER_STORM_WATCH).unwrap();
        assert_eq!(1..2, bounds.product_class);
        assert_eq!(3..6, bounds.action);
        assert_eq!(7..11, bounds.office_id);
        assert_eq!(12..14, bounds.phenomenon);
        assert_eq!(15..16, bounds.significance);
        assert_eq!(17..21, bounds.tracking_number);
        assert_eq!(22..34, bounds.begin);
        assert_eq!(35..47, bounds.end);

        // fields may be empty, but they must exist
        let bounds = check_vtec("/......-/").unwrap();
        assert_eq!(1..1, bounds.product_class);
        assert_eq!(7..7, bounds.begin);
        assert_eq!(8..8, bounds.end);

        assert_eq!(
            Err(VtecDecodeErr::Malformed(Field::ProductClass)),
            check_vtec("O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z")
        );
        assert_eq!(
            Err(VtecDecodeErr::Malformed(Field::TrackingNumber)),
            check_vtec("/O.NEW.KBUF.WS.A.0001")
        );
        assert_eq!(
            Err(VtecDecodeErr::Malformed(Field::Begin)),
            check_vtec("/O.NEW.KBUF.WS.A.0001.210214T1200Z")
        );
        assert_eq!(
            Err(VtecDecodeErr::Malformed(Field::End)),
            check_vtec("/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z")
        );

        // the `-` comes before the sixth `.`
        assert_eq!(
            Err(VtecDecodeErr::Malformed(Field::Begin)),
            check_vtec("/O.NEW.KBUF.WS.A.0001-210214T1200Z.210215T0000Z/")
        );

        // so does a negative tracking number
        assert_eq!(
            Err(VtecDecodeErr::Malformed(Field::Begin)),
            check_vtec("/O.NEW.KBUF.WS.A.-001.210214T1200Z-210215T0000Z/")
        );
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(Ok(utc(2021, 2, 14, 12, 0)), parse_time("210214T1200Z", Field::Begin));
        assert_eq!(Ok(utc(2000, 1, 1, 0, 0)), parse_time("000101T0000Z", Field::End));
        assert_eq!(Ok(utc(2099, 12, 31, 23, 59)), parse_time("991231T2359Z", Field::End));

        // leap day
        assert_eq!(Ok(utc(2024, 2, 29, 6, 30)), parse_time("240229T0630Z", Field::End));

        for bad in [
            "",
            "210214T1200",
            "210214 1200Z",
            "21021T41200Z",
            "210214T1200Z ",
            "2102141200Z",
            "210230T1200Z",
            "211301T1200Z",
            "210214T2400Z",
            "210214T1260Z",
            "230229T0000Z",
            "000000T0000Z",
        ] {
            assert_eq!(
                Err(VtecDecodeErr::InvalidTimestamp {
                    field: Field::End,
                    text: bad.to_owned()
                }),
                parse_time(bad, Field::End),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_vtec() {
        let vtec = Vtec::new(WINTER_STORM_WATCH).expect("bad vtec");

        assert_eq!(WINTER_STORM_WATCH, vtec.as_str());
        assert_eq!("O", vtec.product_class_str());
        assert_eq!(ProductClass::Operational, vtec.product_class());
        assert_eq!("NEW", vtec.action_str());
        assert_eq!(Action::New, vtec.action());
        assert_eq!("KBUF", vtec.office_id());
        assert_eq!("BUF", vtec.office().short_id());
        assert_eq!("Buffalo", vtec.office().city());
        assert_eq!("NY", vtec.office().state());
        assert_eq!(Phenomenon::WinterStorm, vtec.phenomenon());
        assert_eq!("WS", vtec.phenomenon().as_code_str());
        assert_eq!("Winter Storm", vtec.phenomenon().as_display_str());
        assert_eq!(SignificanceLevel::Watch, vtec.significance());
        assert_eq!("A", vtec.significance().as_code_str());
        assert_eq!("Watch", vtec.significance().as_display_str());
        assert_eq!(1, vtec.event_tracking_number());
        assert_eq!(Some(utc(2021, 2, 14, 12, 0)), vtec.event_beginning());
        assert_eq!(utc(2021, 2, 15, 0, 0), vtec.event_ending());

        assert_eq!(WINTER_STORM_WATCH, &format!("{}", vtec));
        assert_eq!(
            "Winter Storm Watch (NEW) from NWS Buffalo, NY #0001",
            &format!("{:#}", vtec)
        );

        // conversions
        assert_eq!(Ok(vtec.clone()), Vtec::try_from(WINTER_STORM_WATCH));
        assert_eq!(Ok(vtec.clone()), Vtec::try_from(WINTER_STORM_WATCH.to_owned()));
        assert_eq!(Ok(vtec.clone()), WINTER_STORM_WATCH.parse::<Vtec>());
        assert_eq!(Ok(vtec.clone()), crate::parse(WINTER_STORM_WATCH));
        assert_eq!(WINTER_STORM_WATCH, &String::from(vtec));
    }

    #[test]
    fn test_undefined_beginning() {
        let vtec = Vtec::new(ONGOING_WARNING).expect("bad vtec");
        assert_eq!(None, vtec.event_beginning());
        assert_eq!(utc(2021, 2, 16, 18, 0), vtec.event_ending());
        assert_eq!(Action::Continued, vtec.action());
        assert_eq!("Chicago, IL", &vtec.office().to_string());
        assert_eq!(4, vtec.event_tracking_number());

        // the sentinel is only special as a beginning
        assert_eq!(
            Err(VtecDecodeErr::InvalidTimestamp {
                field: Field::End,
                text: UNDEFINED_TIME.to_owned()
            }),
            Vtec::new("/O.CON.KLOT.WS.W.0004.210215T1800Z-000000T0000Z/")
        );
    }

    #[test]
    fn test_surrounding_text() {
        // a VTEC line as it appears in a product, with trailing text
        const LINE: &str = "/O.EXT.KOUN.TO.W.0042.000000T0000Z-240506T0315Z/ trailing";

        let vtec = Vtec::new(LINE).expect("bad vtec");
        assert_eq!(LINE, vtec.as_str());
        assert_eq!(Action::ExtendedTime, vtec.action());
        assert_eq!(Phenomenon::Tornado, vtec.phenomenon());
        assert_eq!(SignificanceLevel::Warning, vtec.significance());
        assert_eq!(42, vtec.event_tracking_number());
        assert_eq!(utc(2024, 5, 6, 3, 15), vtec.event_ending());
        assert_eq!(
            "Tornado Warning (EXT) from NWS Norman, OK #0042",
            &format!("{:#}", vtec)
        );
    }

    #[test]
    fn test_unrecognized_class_and_action() {
        let vtec = Vtec::new("/Q.ZZZ.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/").expect("bad vtec");
        assert_eq!(ProductClass::Unknown, vtec.product_class());
        assert_eq!("Q", vtec.product_class_str());
        assert_eq!(Action::Unknown, vtec.action());
        assert_eq!("ZZZ", vtec.action_str());
    }

    #[test]
    fn test_tracking_number() {
        let vtec = Vtec::new("/O.NEW.KBUF.WS.A.9999.210214T1200Z-210215T0000Z/").unwrap();
        assert_eq!(9999, vtec.event_tracking_number());

        for bad in [
            "/O.NEW.KBUF.WS.A.ABCD.210214T1200Z-210215T0000Z/",
            "/O.NEW.KBUF.WS.A..210214T1200Z-210215T0000Z/",
            "/O.NEW.KBUF.WS.A.A1B2.210214T1200Z-210215T0000Z/",
            "/O.NEW.KBUF.WS.A.99999999999.210214T1200Z-210215T0000Z/",
        ] {
            assert_eq!(
                Err(VtecDecodeErr::Malformed(Field::TrackingNumber)),
                Vtec::new(bad),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn test_unknown_references() {
        let err = Vtec::new("/O.NEW.KZZZ.WS.A.0001.210214T1200Z-210215T0000Z/").unwrap_err();
        assert_eq!(
            VtecDecodeErr::UnknownReference(UnknownReferenceErr::new(Registry::Office, "KZZZ")),
            err
        );

        let err = Vtec::new("/O.NEW.KBUF.QQ.A.0001.210214T1200Z-210215T0000Z/").unwrap_err();
        assert_eq!(
            VtecDecodeErr::UnknownReference(UnknownReferenceErr::new(Registry::Phenomenon, "QQ")),
            err
        );

        let err = Vtec::new("/O.NEW.KBUF.WS.Q.0001.210214T1200Z-210215T0000Z/").unwrap_err();
        assert_eq!(
            VtecDecodeErr::UnknownReference(UnknownReferenceErr::new(
                Registry::Significance,
                "Q"
            )),
            err
        );

        // lookups are case-sensitive
        let err = Vtec::new("/O.NEW.kbuf.WS.A.0001.210214T1200Z-210215T0000Z/").unwrap_err();
        assert_eq!(
            VtecDecodeErr::UnknownReference(UnknownReferenceErr::new(Registry::Office, "kbuf")),
            err
        );
    }

    #[test]
    fn test_error_order() {
        // structure is checked before content
        assert_eq!(
            Err(VtecDecodeErr::Malformed(Field::End)),
            Vtec::new("/O.NEW.KZZZ.QQ.Q.ABCD.999999T9999Z-210215T0000Z")
        );

        // then the tracking number
        assert_eq!(
            Err(VtecDecodeErr::Malformed(Field::TrackingNumber)),
            Vtec::new("/O.NEW.KZZZ.QQ.Q.ABCD.999999T9999Z-210215T0000Z/")
        );

        // then timestamps
        assert_eq!(
            Err(VtecDecodeErr::InvalidTimestamp {
                field: Field::Begin,
                text: "999999T9999Z".to_owned()
            }),
            Vtec::new("/O.NEW.KZZZ.QQ.Q.0001.999999T9999Z-210215T0000Z/")
        );

        // then lookups, office first
        assert_eq!(
            Err(VtecDecodeErr::UnknownReference(UnknownReferenceErr::new(
                Registry::Office,
                "KZZZ"
            ))),
            Vtec::new("/O.NEW.KZZZ.QQ.Q.0001.210214T1200Z-210215T0000Z/")
        );
    }

    #[test]
    fn test_expiration() {
        let vtec = Vtec::new(WINTER_STORM_WATCH).unwrap();

        // before the beginning
        assert!(!vtec.is_in_effect_at(&utc(2021, 2, 14, 11, 59)));
        assert!(!vtec.is_expired_at(&utc(2021, 2, 14, 11, 59)));

        // during
        assert!(vtec.is_in_effect_at(&utc(2021, 2, 14, 12, 0)));
        assert!(vtec.is_in_effect_at(&utc(2021, 2, 15, 0, 0)));
        assert!(!vtec.is_expired_at(&utc(2021, 2, 15, 0, 0)));

        // after
        assert!(vtec.is_expired_at(&utc(2021, 2, 15, 0, 1)));
        assert!(!vtec.is_in_effect_at(&utc(2021, 2, 15, 0, 1)));

        // no defined beginning: in effect until the end
        let vtec = Vtec::new(ONGOING_WARNING).unwrap();
        assert!(vtec.is_in_effect_at(&utc(2001, 1, 1, 0, 0)));
        assert!(!vtec.is_in_effect_at(&utc(2021, 2, 16, 18, 1)));
    }

    #[test]
    fn test_deterministic() {
        let a = Vtec::new(ONGOING_WARNING).unwrap();
        let b = Vtec::new(ONGOING_WARNING.to_owned()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), ONGOING_WARNING);
    }
}
