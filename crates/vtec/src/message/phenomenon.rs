//! Hazard phenomenon

use std::fmt;
use std::str::FromStr;

use strum::{EnumMessage, EnumProperty};

use super::error::{Registry, UnknownReferenceErr};

/// P-VTEC phenomenon code
///
/// The two-character `pp` field of a P-VTEC string names the
/// hazard itself: tornado, winter storm, rip current, etc. Codes
/// are listed in NWSI 10-1703,
/// <https://www.weather.gov/media/directives/010_pdfs/pd01017003curr.pdf>.
///
/// ```
/// use vtec::Phenomenon;
///
/// let phen = Phenomenon::from_code("WS").unwrap();
/// assert_eq!(Phenomenon::WinterStorm, phen);
/// assert_eq!("WS", phen.as_code_str());
/// assert_eq!("Winter Storm", phen.as_display_str());
/// assert_eq!("Winter Storm", format!("{}", phen));
/// assert_eq!("WS", format!("{:#}", phen));
/// ```
///
/// Codes which the NWS has since retired are still decoded, so
/// that archived products remain readable.
///
/// ```
/// # use vtec::Phenomenon;
/// let phen = Phenomenon::from_code("HS").unwrap();
/// assert_eq!("Heavy Snow", phen.as_display_str());
/// assert!(phen.is_retired());
/// assert!(!Phenomenon::WinterStorm.is_retired());
/// ```
///
/// Display names are not unique: the marine-zone codes `MF`, `MH`,
/// and `MS` share their names with the land-zone codes `FG`, `AF`,
/// and `SM`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumProperty,
    strum_macros::EnumIter,
)]
#[non_exhaustive]
pub enum Phenomenon {
    /// Ashfall
    #[strum(serialize = "AF", detailed_message = "Ashfall")]
    Ashfall,

    /// Air Stagnation
    #[strum(serialize = "AS", detailed_message = "Air Stagnation")]
    AirStagnation,

    /// Beach Hazard
    #[strum(serialize = "BH", detailed_message = "Beach Hazard")]
    BeachHazard,

    /// Blowing Snow (merged into `WW`)
    #[strum(serialize = "BS", detailed_message = "Blowing Snow", props(retired = "Y"))]
    BlowingSnow,

    /// Brisk Wind
    #[strum(serialize = "BW", detailed_message = "Brisk Wind")]
    BriskWind,

    /// Blizzard
    #[strum(serialize = "BZ", detailed_message = "Blizzard")]
    Blizzard,

    /// Coastal Flood
    #[strum(serialize = "CF", detailed_message = "Coastal Flood")]
    CoastalFlood,

    /// Cold Weather
    #[strum(serialize = "CW", detailed_message = "Cold Weather")]
    ColdWeather,

    /// Debris Flow
    #[strum(serialize = "DF", detailed_message = "Debris Flow")]
    DebrisFlow,

    /// Dust Storm
    #[strum(serialize = "DS", detailed_message = "Dust Storm")]
    DustStorm,

    /// Blowing Dust
    #[strum(serialize = "DU", detailed_message = "Blowing Dust")]
    BlowingDust,

    /// Extreme Cold
    #[strum(serialize = "EC", detailed_message = "Extreme Cold")]
    ExtremeCold,

    /// Excessive Heat (superseded by `XH`)
    #[strum(serialize = "EH", detailed_message = "Excessive Heat", props(retired = "Y"))]
    ExcessiveHeat,

    /// Extreme Wind
    #[strum(serialize = "EW", detailed_message = "Extreme Wind")]
    ExtremeWind,

    /// Areal Flood (flooding which is not a flash flood)
    #[strum(serialize = "FA", detailed_message = "Areal Flood")]
    ArealFlood,

    /// Flash Flood
    #[strum(serialize = "FF", detailed_message = "Flash Flood")]
    FlashFlood,

    /// Dense Fog
    #[strum(serialize = "FG", detailed_message = "Dense Fog")]
    DenseFog,

    /// Flood
    #[strum(serialize = "FL", detailed_message = "Flood")]
    Flood,

    /// Frost
    #[strum(serialize = "FR", detailed_message = "Frost")]
    Frost,

    /// Fire Weather
    #[strum(serialize = "FW", detailed_message = "Fire Weather")]
    FireWeather,

    /// Freeze
    #[strum(serialize = "FZ", detailed_message = "Freeze")]
    Freeze,

    /// Gale
    #[strum(serialize = "GL", detailed_message = "Gale")]
    Gale,

    /// Hurricane Force Wind
    #[strum(serialize = "HF", detailed_message = "Hurricane Force Wind")]
    HurricaneForceWind,

    /// Inland Hurricane (merged into `HU`)
    #[strum(serialize = "HI", detailed_message = "Inland Hurricane", props(retired = "Y"))]
    InlandHurricane,

    /// Heavy Snow (merged into `WS`)
    #[strum(serialize = "HS", detailed_message = "Heavy Snow", props(retired = "Y"))]
    HeavySnow,

    /// Heat
    #[strum(serialize = "HT", detailed_message = "Heat")]
    Heat,

    /// Hurricane
    #[strum(serialize = "HU", detailed_message = "Hurricane")]
    Hurricane,

    /// High Wind
    #[strum(serialize = "HW", detailed_message = "High Wind")]
    HighWind,

    /// Hydrologic (outlooks and statements)
    #[strum(serialize = "HY", detailed_message = "Hydrologic")]
    Hydrologic,

    /// Hard Freeze
    #[strum(serialize = "HZ", detailed_message = "Hard Freeze")]
    HardFreeze,

    /// Sleet (merged into `WS` and `WW`)
    #[strum(serialize = "IP", detailed_message = "Sleet", props(retired = "Y"))]
    Sleet,

    /// Ice Storm
    #[strum(serialize = "IS", detailed_message = "Ice Storm")]
    IceStorm,

    /// Lake Effect Snow and Blowing Snow (merged into `LE`)
    #[strum(
        serialize = "LB",
        detailed_message = "Lake Effect Snow and Blowing Snow",
        props(retired = "Y")
    )]
    LakeEffectSnowAndBlowingSnow,

    /// Lake Effect Snow
    #[strum(serialize = "LE", detailed_message = "Lake Effect Snow")]
    LakeEffectSnow,

    /// Low Water
    #[strum(serialize = "LO", detailed_message = "Low Water")]
    LowWater,

    /// Lakeshore Flood
    #[strum(serialize = "LS", detailed_message = "Lakeshore Flood")]
    LakeshoreFlood,

    /// Lake Wind
    #[strum(serialize = "LW", detailed_message = "Lake Wind")]
    LakeWind,

    /// Marine (special marine warnings and marine weather statements)
    #[strum(serialize = "MA", detailed_message = "Marine")]
    Marine,

    /// Dense Fog (marine zones)
    #[strum(serialize = "MF", detailed_message = "Dense Fog")]
    MarineDenseFog,

    /// Ashfall (marine zones)
    #[strum(serialize = "MH", detailed_message = "Ashfall")]
    MarineAshfall,

    /// Dense Smoke (marine zones)
    #[strum(serialize = "MS", detailed_message = "Dense Smoke")]
    MarineDenseSmoke,

    /// Small Craft for Rough Bar
    #[strum(serialize = "RB", detailed_message = "Small Craft for Rough Bar")]
    SmallCraftRoughBar,

    /// Rip Current Risk
    #[strum(serialize = "RP", detailed_message = "Rip Current Risk")]
    RipCurrentRisk,

    /// Snow and Blowing Snow (merged into `WW`)
    #[strum(serialize = "SB", detailed_message = "Snow and Blowing Snow", props(retired = "Y"))]
    SnowAndBlowingSnow,

    /// Small Craft
    #[strum(serialize = "SC", detailed_message = "Small Craft")]
    SmallCraft,

    /// Hazardous Seas
    #[strum(serialize = "SE", detailed_message = "Hazardous Seas")]
    HazardousSeas,

    /// Small Craft for Winds
    #[strum(serialize = "SI", detailed_message = "Small Craft for Winds")]
    SmallCraftWinds,

    /// Dense Smoke
    #[strum(serialize = "SM", detailed_message = "Dense Smoke")]
    DenseSmoke,

    /// Snow Squall
    #[strum(serialize = "SQ", detailed_message = "Snow Squall")]
    SnowSquall,

    /// Storm
    #[strum(serialize = "SR", detailed_message = "Storm")]
    Storm,

    /// Storm Surge
    #[strum(serialize = "SS", detailed_message = "Storm Surge")]
    StormSurge,

    /// High Surf
    #[strum(serialize = "SU", detailed_message = "High Surf")]
    HighSurf,

    /// Severe Thunderstorm
    #[strum(serialize = "SV", detailed_message = "Severe Thunderstorm")]
    SevereThunderstorm,

    /// Small Craft for Hazardous Seas
    #[strum(serialize = "SW", detailed_message = "Small Craft for Hazardous Seas")]
    SmallCraftHazardousSeas,

    /// Inland Tropical Storm (merged into `TR`)
    #[strum(serialize = "TI", detailed_message = "Inland Tropical Storm", props(retired = "Y"))]
    InlandTropicalStorm,

    /// Tornado
    #[strum(serialize = "TO", detailed_message = "Tornado")]
    Tornado,

    /// Tropical Storm
    #[strum(serialize = "TR", detailed_message = "Tropical Storm")]
    TropicalStorm,

    /// Tsunami
    #[strum(serialize = "TS", detailed_message = "Tsunami")]
    Tsunami,

    /// Typhoon
    #[strum(serialize = "TY", detailed_message = "Typhoon")]
    Typhoon,

    /// Heavy Freezing Spray
    #[strum(serialize = "UP", detailed_message = "Heavy Freezing Spray")]
    HeavyFreezingSpray,

    /// Wind Chill
    #[strum(serialize = "WC", detailed_message = "Wind Chill")]
    WindChill,

    /// Wind
    #[strum(serialize = "WI", detailed_message = "Wind")]
    Wind,

    /// Winter Storm
    #[strum(serialize = "WS", detailed_message = "Winter Storm")]
    WinterStorm,

    /// Winter Weather
    #[strum(serialize = "WW", detailed_message = "Winter Weather")]
    WinterWeather,

    /// Extreme Heat
    #[strum(serialize = "XH", detailed_message = "Extreme Heat")]
    ExtremeHeat,

    /// Freezing Fog
    #[strum(serialize = "ZF", detailed_message = "Freezing Fog")]
    FreezingFog,

    /// Freezing Rain
    #[strum(serialize = "ZR", detailed_message = "Freezing Rain")]
    FreezingRain,

    /// Freezing Spray
    #[strum(serialize = "ZY", detailed_message = "Freezing Spray")]
    FreezingSpray,
}

impl Phenomenon {
    /// Human-readable string representation
    ///
    /// Converts to a human-readable string, like "`Winter Storm`."
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message()
            .expect("missing human-readable definition")
    }

    /// P-VTEC string representation
    ///
    /// Returns the two-character code for this `Phenomenon`,
    /// like "`WS`."
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// True if the NWS no longer issues this phenomenon
    ///
    /// Retired codes have been merged into other phenomena
    /// but may still appear in archived products.
    pub fn is_retired(&self) -> bool {
        self.get_str("retired").is_some()
    }

    /// Convert from two-character phenomenon code
    ///
    /// Codes are case-sensitive: "`ws`" is not a phenomenon.
    pub fn from_code(code: &str) -> Result<Self, UnknownReferenceErr> {
        Self::from_str(code).map_err(|_| UnknownReferenceErr::new(Registry::Phenomenon, code))
    }
}

impl AsRef<str> for Phenomenon {
    fn as_ref(&self) -> &'static str {
        self.as_code_str()
    }
}

impl fmt::Display for Phenomenon {
    /// Printable string
    ///
    /// * The normal form is a human-readable string like "`Tornado`"
    /// * The alternate form is a two-character string like "`TO`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use lazy_static::lazy_static;
    use regex::Regex;
    use strum::IntoEnumIterator;

    #[test]
    fn test_phenomenon_api() {
        let phen = Phenomenon::from_code("SV").unwrap();
        assert_eq!(Phenomenon::SevereThunderstorm, phen);
        assert_eq!("Severe Thunderstorm", phen.as_display_str());
        assert_eq!("SV", phen.as_ref());

        let phen = Phenomenon::from_code("MF").unwrap();
        assert_eq!(Phenomenon::MarineDenseFog, phen);
        assert_eq!("Dense Fog", &format!("{}", phen));
        assert_eq!("MF", &format!("{:#}", phen));

        let err = Phenomenon::from_code("ws").unwrap_err();
        assert_eq!(Registry::Phenomenon, err.registry());
        assert_eq!("ws", err.code());

        Phenomenon::from_code("").expect_err("empty code should not decode");
        Phenomenon::from_code("WSW").expect_err("three-character code should not decode");
    }

    /// ensure we have populated the table correctly
    #[test]
    fn test_phenomenon_completeness() {
        lazy_static! {
            static ref ASCII_UPPER: Regex = Regex::new(r"^[A-Z]{2}$").expect("bad test regexp");
        }

        let mut code_set = HashSet::new();
        for phen in Phenomenon::iter() {
            let code = phen.as_code_str();
            assert!(ASCII_UPPER.is_match(code), "bad code {}", code);
            assert!(code_set.insert(code), "duplicate code {}", code);
            assert!(!phen.as_display_str().is_empty());

            // convert from code
            let cmp = Phenomenon::from_code(code).expect("can't back-convert phenomenon code!");
            assert_eq!(cmp, phen);
        }

        assert_eq!(68, code_set.len());
    }

    #[test]
    fn test_retired() {
        let retired: Vec<&str> = Phenomenon::iter()
            .filter(Phenomenon::is_retired)
            .map(|p| p.as_code_str())
            .collect();
        assert_eq!(&["BS", "EH", "HI", "HS", "IP", "LB", "SB", "TI"], retired.as_slice());
    }
}
