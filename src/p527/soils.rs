//! Catalog of example soil mixtures.

use std::str::FromStr;

use super::soil::{Soil, LOW_PERCENTAGE, SUM_TOLERANCE};
use crate::error::DielectricError;

/// Reference soil types, each a fixed mixture of sand, clay, and silt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SoilType {
    Clay,
    SandyClay,
    SiltyClay,
    ClayLoam,
    SandyClayLoam,
    SiltyClayLoam,
    Loam,
    SiltyLoam,
    SandyLoam,
    Sand,
    LoamySand,
    Silt,
}

impl SoilType {
    /// Every soil type in the catalog.
    pub const ALL: [SoilType; 12] = [
        SoilType::Clay,
        SoilType::SandyClay,
        SoilType::SiltyClay,
        SoilType::ClayLoam,
        SoilType::SandyClayLoam,
        SoilType::SiltyClayLoam,
        SoilType::Loam,
        SoilType::SiltyLoam,
        SoilType::SandyLoam,
        SoilType::Sand,
        SoilType::LoamySand,
        SoilType::Silt,
    ];

    /// Catalog label, e.g. `"sandy_clay_loam"`.
    pub const fn name(self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::SandyClay => "sandy_clay",
            SoilType::SiltyClay => "silty_clay",
            SoilType::ClayLoam => "clay_loam",
            SoilType::SandyClayLoam => "sandy_clay_loam",
            SoilType::SiltyClayLoam => "silty_clay_loam",
            SoilType::Loam => "loam",
            SoilType::SiltyLoam => "silty_loam",
            SoilType::SandyLoam => "sandy_loam",
            SoilType::Sand => "sand",
            SoilType::LoamySand => "loamy_sand",
            SoilType::Silt => "silt",
        }
    }

    /// Sand, clay, and silt percentages of this soil type.
    pub const fn composition(self) -> Soil {
        match self {
            SoilType::Clay => Soil::new(20.0, 60.0, 20.0),
            SoilType::SandyClay => Soil::new(50.0, 40.0, 10.0),
            SoilType::SiltyClay => Soil::new(10.0, 45.0, 45.0),
            SoilType::ClayLoam => Soil::new(35.0, 30.0, 35.0),
            SoilType::SandyClayLoam => Soil::new(60.0, 25.0, 15.0),
            SoilType::SiltyClayLoam => Soil::new(15.0, 32.5, 52.5),
            SoilType::Loam => Soil::new(40.0, 20.0, 40.0),
            SoilType::SiltyLoam => Soil::new(22.5, 15.0, 62.5),
            SoilType::SandyLoam => Soil::new(65.0, 10.0, 25.0),
            SoilType::Sand => Soil::new(90.0, 5.0, 5.0),
            SoilType::LoamySand => Soil::new(80.0, 10.0, 10.0),
            SoilType::Silt => Soil::new(10.0, 10.0, 80.0),
        }
    }
}

// Every preset sums to 100 and has no constituent low enough for an advisory
const _: () = {
    let mut i = 0;
    while i < SoilType::ALL.len() {
        let soil = SoilType::ALL[i].composition();
        let excess = soil.p_sand + soil.p_clay + soil.p_silt - 100.;
        assert!(
            excess <= SUM_TOLERANCE && excess >= -SUM_TOLERANCE,
            "soil preset does not sum to 100"
        );
        assert!(
            soil.p_sand >= LOW_PERCENTAGE
                && soil.p_clay >= LOW_PERCENTAGE
                && soil.p_silt >= LOW_PERCENTAGE,
            "soil preset constituent below 1%"
        );
        i += 1;
    }
};

impl From<SoilType> for Soil {
    fn from(soil_type: SoilType) -> Self {
        soil_type.composition()
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoilType {
    type Err = DielectricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilType::ALL
            .into_iter()
            .find(|soil_type| soil_type.name() == s)
            .ok_or_else(|| DielectricError::UnknownSoilType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_compositions_are_valid() {
        for soil_type in SoilType::ALL {
            let advisories = soil_type
                .composition()
                .check()
                .unwrap_or_else(|e| panic!("{soil_type}: {e}"));
            assert!(advisories.is_empty(), "{soil_type}");
        }
    }

    #[test]
    fn names_round_trip() {
        for soil_type in SoilType::ALL {
            assert_eq!(soil_type.name().parse::<SoilType>(), Ok(soil_type));
        }
        assert_eq!(
            "peat".parse::<SoilType>(),
            Err(DielectricError::UnknownSoilType("peat".to_string()))
        );
    }
}
