//! # vtec: A P-VTEC Parser
//!
//! This crate decodes the
//! [Primary Valid Time Event Code](https://www.weather.gov/vtec/)
//! (P-VTEC) which the United States National Weather Service attaches
//! to its watches, warnings, and advisories. It provides machine- and
//! human-friendly representations of each field, with
//! [issuing offices](crate::offices), [phenomena](crate::Phenomenon),
//! and [significance levels](crate::SignificanceLevel) resolved from
//! built-in reference tables.
//!
//! For a command-line decoder, see the companion binary crate
//! `vtecdec`.
//!
//! ## Disclaimer
//!
//! This crate is dual-licensed MIT and Apache 2.0. Read these licenses
//! carefully as they may affect your rights.
//!
//! This crate has not been certified for any purpose. The author
//! **strongly discourages** its use in any safety-critical
//! applications. Always have at least two methods available for
//! receiving weather alerts.
//!
//! ## Anatomy of a P-VTEC string
//!
//! A P-VTEC string is a single line of slash- and period-delimited
//! fields, defined by
//! [NWSI 10-1703](https://www.weather.gov/media/directives/010_pdfs/pd01017003curr.pdf):
//!
//! ```txt
//! /O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/
//! ```
//!
//! ```
//! use vtec::{Action, Phenomenon, ProductClass, SignificanceLevel};
//!
//! // decode the string
//! let vtec = vtec::parse("/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/")
//!     .expect("fail to parse");
//!
//! // an operational product announcing a new event
//! assert_eq!(ProductClass::Operational, vtec.product_class());
//! assert_eq!(Action::New, vtec.action());
//!
//! // issued by the Buffalo, NY office
//! assert_eq!("BUF", vtec.office().short_id());
//! assert_eq!("Buffalo, NY", &vtec.office().to_string());
//!
//! // a winter storm watch
//! assert_eq!(Phenomenon::WinterStorm, vtec.phenomenon());
//! assert_eq!(SignificanceLevel::Watch, vtec.significance());
//!
//! // display to the user
//! assert_eq!(
//!     "Winter Storm Watch (NEW) from NWS Buffalo, NY #0001",
//!     &format!("{:#}", vtec)
//! );
//! ```
//!
//! Times are always UTC. An event which is already under way may
//! have no defined beginning.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let vtec = vtec::parse("/O.CON.KLOT.WS.W.0004.000000T0000Z-210216T1800Z/").unwrap();
//! assert_eq!(None, vtec.event_beginning());
//! assert_eq!(
//!     Utc.with_ymd_and_hms(2021, 2, 16, 18, 0, 0).unwrap(),
//!     vtec.event_ending()
//! );
//! assert!(vtec.is_in_effect_at(&Utc.with_ymd_and_hms(2021, 2, 16, 12, 0, 0).unwrap()));
//! ```
//!
//! ## Errors
//!
//! Decoding fails with a [`VtecDecodeErr`] if a field cannot be
//! located, if a timestamp is invalid, or if the office, phenomenon,
//! or significance code is unknown. Decoding never logs and never
//! returns a partial result.
//!
//! ```
//! use vtec::{Registry, VtecDecodeErr};
//!
//! match vtec::parse("/O.NEW.KZZZ.WS.A.0001.210214T1200Z-210215T0000Z/") {
//!     Err(VtecDecodeErr::UnknownReference(err)) => {
//!         assert_eq!(Registry::Office, err.registry());
//!         assert_eq!("KZZZ", err.code());
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! All reference tables are immutable statics, and [`Vtec`] is
//! `Send` and `Sync`. It is safe to decode from any number of
//! threads at once.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod message;
pub mod offices;

pub use message::{
    Action, Field, Office, Phenomenon, ProductClass, Registry, SignificanceLevel,
    UnknownReferenceErr, Vtec, VtecDecodeErr,
};

/// Decode a P-VTEC string
///
/// Equivalent to [`Vtec::new()`]. The input is copied into the
/// returned [`Vtec`].
pub fn parse(code: &str) -> Result<Vtec, VtecDecodeErr> {
    Vtec::new(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_thread_safety() {
        assert_send_sync::<Vtec>();
        assert_send_sync::<VtecDecodeErr>();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    parse("/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/")
                        .expect("bad vtec")
                })
            })
            .collect();

        let first = parse("/O.NEW.KBUF.WS.A.0001.210214T1200Z-210215T0000Z/").unwrap();
        for handle in handles {
            assert_eq!(first, handle.join().expect("thread panicked"));
        }
    }
}
