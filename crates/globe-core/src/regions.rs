//! Named country sets the globe can highlight.
//!
//! Country codes are ISO-3166 alpha-3, matching the `ISO_A3` property carried
//! by the polygon features the scene host renders.

use crate::error::ControllerError;
use fnv::FnvHashSet;
use std::fmt;

const INDIA: &[&str] = &["IND"];

const AFRICA: &[&str] = &[
    "DZA", "AGO", "BEN", "BWA", "BFA", "BDI", "CPV", "CMR", "CAF", "TCD", "COM", "COG", "COD",
    "CIV", "DJI", "EGY", "GNQ", "ERI", "SWZ", "ETH", "GAB", "GMB", "GHA", "GIN", "GNB", "KEN",
    "LSO", "LBR", "LBY", "MDG", "MWI", "MLI", "MRT", "MUS", "MAR", "MOZ", "NAM", "NER", "NGA",
    "RWA", "STP", "SEN", "SYC", "SLE", "SOM", "ZAF", "SSD", "SDN", "TZA", "TGO", "TUN", "UGA",
    "ZMB", "ZWE", "ESH",
];

const WESTERNS: &[&str] = &[
    "USA", "CAN", "GBR", "IRL", "FRA", "DEU", "ITA", "ESP", "PRT", "NLD", "BEL", "LUX", "CHE",
    "AUT", "DNK", "NOR", "SWE", "FIN", "ISL", "AUS", "NZL",
];

/// Discrete selection id used by the hover menu and the preset table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RegionId {
    India = 0,
    Africa = 1,
    Westerns = 2,
}

impl RegionId {
    pub const ALL: [RegionId; 3] = [RegionId::India, RegionId::Africa, RegionId::Westerns];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RegionId::India => "india",
            RegionId::Africa => "africa",
            RegionId::Westerns => "westerns",
        }
    }
}

impl TryFrom<u32> for RegionId {
    type Error = ControllerError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RegionId::India),
            1 => Ok(RegionId::Africa),
            2 => Ok(RegionId::Westerns),
            other => Err(ControllerError::InvalidSelection(other)),
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable set of country codes.
#[derive(Clone, Debug)]
pub struct RegionSet {
    id: RegionId,
    codes: FnvHashSet<&'static str>,
}

impl RegionSet {
    fn from_table(id: RegionId, table: &[&'static str]) -> Self {
        Self {
            id,
            codes: table.iter().copied().collect(),
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn contains(&self, iso_a3: &str) -> bool {
        self.codes.contains(iso_a3)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// The three region sets, built once at mount.
#[derive(Clone, Debug)]
pub struct RegionCatalog {
    sets: [RegionSet; 3],
}

impl RegionCatalog {
    pub fn get(&self, id: RegionId) -> &RegionSet {
        &self.sets[id.index()]
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self {
            sets: [
                RegionSet::from_table(RegionId::India, INDIA),
                RegionSet::from_table(RegionId::Africa, AFRICA),
                RegionSet::from_table(RegionId::Westerns, WESTERNS),
            ],
        }
    }
}
