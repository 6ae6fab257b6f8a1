//! # NWS Issuing Offices Known to `vtec`
//!
//! The `cccc` field of a P-VTEC string is the four-character ICAO
//! identifier of the issuing Weather Forecast Office (WFO). Offices
//! in the contiguous United States begin with `K`. Offices in
//! Alaska and the Pacific begin with `P`, and San Juan is `TJSJ`.
//!
//! ```
//! let office = vtec::offices::lookup("PHFO").expect("known office");
//! assert_eq!("HFO", office.short_id());
//! assert_eq!("Honolulu, HI", office.to_string());
//!
//! // lookups are exact and case-sensitive
//! assert!(vtec::offices::lookup("kbuf").is_none());
//! assert!(vtec::offices::lookup("BUF").is_none());
//! ```
//!
//! The registry lists all 122 WFOs. National centers, which issue
//! products without P-VTEC, are not included.
//!
//! ## See Also
//!
//! * [`Office`](crate::Office)
//! * [`Vtec::office()`](crate::Vtec::office)

use phf::phf_map;

use crate::Office;

/// Lookup a four-character office id, like "`KBUF`"
pub fn lookup<S>(id: S) -> Option<&'static Office>
where
    S: AsRef<str>,
{
    OFFICES.get(id.as_ref())
}

/// Iterate over every known office
///
/// Yields `(id, office)` pairs in no particular order.
pub fn iter() -> impl Iterator<Item = (&'static str, &'static Office)> {
    OFFICES.entries().map(|(id, office)| (*id, office))
}

/// Database of Weather Forecast Offices, keyed by ICAO id
static OFFICES: phf::Map<&'static str, Office> = phf_map! {
    // Eastern Region
    "KAKQ" => Office::new("AKQ", "Wakefield", "VA"),
    "KALY" => Office::new("ALY", "Albany", "NY"),
    "KBGM" => Office::new("BGM", "Binghamton", "NY"),
    "KBOX" => Office::new("BOX", "Boston", "MA"),
    "KBTV" => Office::new("BTV", "Burlington", "VT"),
    "KBUF" => Office::new("BUF", "Buffalo", "NY"),
    "KCAE" => Office::new("CAE", "Columbia", "SC"),
    "KCAR" => Office::new("CAR", "Caribou", "ME"),
    "KCHS" => Office::new("CHS", "Charleston", "SC"),
    "KCLE" => Office::new("CLE", "Cleveland", "OH"),
    "KCTP" => Office::new("CTP", "State College", "PA"),
    "KGSP" => Office::new("GSP", "Greenville-Spartanburg", "SC"),
    "KGYX" => Office::new("GYX", "Gray", "ME"),
    "KILM" => Office::new("ILM", "Wilmington", "NC"),
    "KILN" => Office::new("ILN", "Wilmington", "OH"),
    "KLWX" => Office::new("LWX", "Sterling", "VA"),
    "KMHX" => Office::new("MHX", "Newport/Morehead City", "NC"),
    "KOKX" => Office::new("OKX", "New York", "NY"),
    "KPBZ" => Office::new("PBZ", "Pittsburgh", "PA"),
    "KPHI" => Office::new("PHI", "Mount Holly", "NJ"),
    "KRAH" => Office::new("RAH", "Raleigh", "NC"),
    "KRLX" => Office::new("RLX", "Charleston", "WV"),
    "KRNK" => Office::new("RNK", "Blacksburg", "VA"),

    // Southern Region
    "KABQ" => Office::new("ABQ", "Albuquerque", "NM"),
    "KAMA" => Office::new("AMA", "Amarillo", "TX"),
    "KBMX" => Office::new("BMX", "Birmingham", "AL"),
    "KBRO" => Office::new("BRO", "Brownsville", "TX"),
    "KCRP" => Office::new("CRP", "Corpus Christi", "TX"),
    "KEPZ" => Office::new("EPZ", "El Paso", "TX"),
    "KEWX" => Office::new("EWX", "Austin/San Antonio", "TX"),
    "KFFC" => Office::new("FFC", "Atlanta", "GA"),
    "KFWD" => Office::new("FWD", "Fort Worth", "TX"),
    "KHGX" => Office::new("HGX", "Houston", "TX"),
    "KHUN" => Office::new("HUN", "Huntsville", "AL"),
    "KJAN" => Office::new("JAN", "Jackson", "MS"),
    "KJAX" => Office::new("JAX", "Jacksonville", "FL"),
    "KKEY" => Office::new("KEY", "Key West", "FL"),
    "KLCH" => Office::new("LCH", "Lake Charles", "LA"),
    "KLIX" => Office::new("LIX", "New Orleans", "LA"),
    "KLUB" => Office::new("LUB", "Lubbock", "TX"),
    "KLZK" => Office::new("LZK", "Little Rock", "AR"),
    "KMAF" => Office::new("MAF", "Midland", "TX"),
    "KMEG" => Office::new("MEG", "Memphis", "TN"),
    "KMFL" => Office::new("MFL", "Miami", "FL"),
    "KMLB" => Office::new("MLB", "Melbourne", "FL"),
    "KMOB" => Office::new("MOB", "Mobile", "AL"),
    "KMRX" => Office::new("MRX", "Morristown", "TN"),
    "KOHX" => Office::new("OHX", "Nashville", "TN"),
    "KOUN" => Office::new("OUN", "Norman", "OK"),
    "KSHV" => Office::new("SHV", "Shreveport", "LA"),
    "KSJT" => Office::new("SJT", "San Angelo", "TX"),
    "KTAE" => Office::new("TAE", "Tallahassee", "FL"),
    "KTBW" => Office::new("TBW", "Tampa Bay", "FL"),
    "KTSA" => Office::new("TSA", "Tulsa", "OK"),
    "TJSJ" => Office::new("SJU", "San Juan", "PR"),

    // Central Region
    "KABR" => Office::new("ABR", "Aberdeen", "SD"),
    "KAPX" => Office::new("APX", "Gaylord", "MI"),
    "KARX" => Office::new("ARX", "La Crosse", "WI"),
    "KBIS" => Office::new("BIS", "Bismarck", "ND"),
    "KBOU" => Office::new("BOU", "Denver", "CO"),
    "KCYS" => Office::new("CYS", "Cheyenne", "WY"),
    "KDDC" => Office::new("DDC", "Dodge City", "KS"),
    "KDLH" => Office::new("DLH", "Duluth", "MN"),
    "KDMX" => Office::new("DMX", "Des Moines", "IA"),
    "KDTX" => Office::new("DTX", "Detroit", "MI"),
    "KDVN" => Office::new("DVN", "Davenport", "IA"),
    "KEAX" => Office::new("EAX", "Kansas City", "MO"),
    "KFGF" => Office::new("FGF", "Grand Forks", "ND"),
    "KFSD" => Office::new("FSD", "Sioux Falls", "SD"),
    "KGID" => Office::new("GID", "Hastings", "NE"),
    "KGJT" => Office::new("GJT", "Grand Junction", "CO"),
    "KGLD" => Office::new("GLD", "Goodland", "KS"),
    "KGRB" => Office::new("GRB", "Green Bay", "WI"),
    "KGRR" => Office::new("GRR", "Grand Rapids", "MI"),
    "KICT" => Office::new("ICT", "Wichita", "KS"),
    "KILX" => Office::new("ILX", "Lincoln", "IL"),
    "KIND" => Office::new("IND", "Indianapolis", "IN"),
    "KIWX" => Office::new("IWX", "Northern Indiana", "IN"),
    "KJKL" => Office::new("JKL", "Jackson", "KY"),
    "KLBF" => Office::new("LBF", "North Platte", "NE"),
    "KLMK" => Office::new("LMK", "Louisville", "KY"),
    "KLOT" => Office::new("LOT", "Chicago", "IL"),
    "KLSX" => Office::new("LSX", "St. Louis", "MO"),
    "KMKX" => Office::new("MKX", "Milwaukee", "WI"),
    "KMPX" => Office::new("MPX", "Minneapolis", "MN"),
    "KMQT" => Office::new("MQT", "Marquette", "MI"),
    "KOAX" => Office::new("OAX", "Omaha", "NE"),
    "KPAH" => Office::new("PAH", "Paducah", "KY"),
    "KPUB" => Office::new("PUB", "Pueblo", "CO"),
    "KRIW" => Office::new("RIW", "Riverton", "WY"),
    "KSGF" => Office::new("SGF", "Springfield", "MO"),
    "KTOP" => Office::new("TOP", "Topeka", "KS"),
    "KUNR" => Office::new("UNR", "Rapid City", "SD"),

    // Western Region
    "KBOI" => Office::new("BOI", "Boise", "ID"),
    "KBYZ" => Office::new("BYZ", "Billings", "MT"),
    "KEKA" => Office::new("EKA", "Eureka", "CA"),
    "KFGZ" => Office::new("FGZ", "Flagstaff", "AZ"),
    "KGGW" => Office::new("GGW", "Glasgow", "MT"),
    "KHNX" => Office::new("HNX", "Hanford", "CA"),
    "KLKN" => Office::new("LKN", "Elko", "NV"),
    "KLOX" => Office::new("LOX", "Los Angeles", "CA"),
    "KMFR" => Office::new("MFR", "Medford", "OR"),
    "KMSO" => Office::new("MSO", "Missoula", "MT"),
    "KMTR" => Office::new("MTR", "San Francisco", "CA"),
    "KOTX" => Office::new("OTX", "Spokane", "WA"),
    "KPDT" => Office::new("PDT", "Pendleton", "OR"),
    "KPIH" => Office::new("PIH", "Pocatello", "ID"),
    "KPQR" => Office::new("PQR", "Portland", "OR"),
    "KPSR" => Office::new("PSR", "Phoenix", "AZ"),
    "KREV" => Office::new("REV", "Reno", "NV"),
    "KSEW" => Office::new("SEW", "Seattle", "WA"),
    "KSGX" => Office::new("SGX", "San Diego", "CA"),
    "KSLC" => Office::new("SLC", "Salt Lake City", "UT"),
    "KSTO" => Office::new("STO", "Sacramento", "CA"),
    "KTFX" => Office::new("TFX", "Great Falls", "MT"),
    "KTWC" => Office::new("TWC", "Tucson", "AZ"),
    "KVEF" => Office::new("VEF", "Las Vegas", "NV"),

    // Alaska Region
    "PAFC" => Office::new("AFC", "Anchorage", "AK"),
    "PAFG" => Office::new("AFG", "Fairbanks", "AK"),
    "PAJK" => Office::new("AJK", "Juneau", "AK"),

    // Pacific Region
    "PGUM" => Office::new("GUM", "Guam", "GU"),
    "PHFO" => Office::new("HFO", "Honolulu", "HI"),
};

#[cfg(test)]
mod tests {
    use super::*;

    use lazy_static::lazy_static;
    use regex::Regex;

    /// ensure we have populated the registry correctly
    #[test]
    fn check_offices() {
        lazy_static! {
            static ref ICAO: Regex = Regex::new(r"^[KPT][A-Z]{3}$").expect("bad test regexp");
            static ref SHORT: Regex = Regex::new(r"^[A-Z]{3}$").expect("bad test regexp");
            static ref STATE: Regex = Regex::new(r"^[A-Z]{2}$").expect("bad test regexp");
        }

        let mut count = 0;
        for (id, office) in iter() {
            count += 1;
            assert!(ICAO.is_match(id), "bad office id {}", id);
            assert!(SHORT.is_match(office.short_id()), "bad short id for {}", id);
            assert!(STATE.is_match(office.state()), "bad state for {}", id);
            assert!(!office.city().is_empty());
            assert_eq!(office.city(), office.city().trim());

            // the short id is the tail of the ICAO id, except San Juan
            if id != "TJSJ" {
                assert_eq!(&id[1..], office.short_id(), "short id mismatch for {}", id);
            }

            assert_eq!(Some(office), lookup(id));
        }

        assert_eq!(122, count);
    }

    #[test]
    fn test_lookup() {
        let office = lookup("KBUF").expect("missing KBUF");
        assert_eq!(("BUF", "Buffalo", "NY"), (office.short_id(), office.city(), office.state()));

        let office = lookup("TJSJ").expect("missing TJSJ");
        assert_eq!("SJU", office.short_id());
        assert_eq!("San Juan, PR", &office.to_string());

        assert_eq!("Charleston, SC", &lookup("KCHS").unwrap().to_string());
        assert_eq!("Charleston, WV", &lookup("KRLX").unwrap().to_string());

        assert_eq!(None, lookup(""));
        assert_eq!(None, lookup("KBUFF"));
        assert_eq!(None, lookup(String::from("KZZZ")));
    }
}
