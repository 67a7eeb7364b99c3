use crate::time::recurringholiday::administrativearea::AdministrativeArea;

/// The federal states of Germany with their ISO 3166-2:DE codes.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum GermanFederalState {
    BadenWuerttemberg,
    Bayern,
    Berlin,
    Brandenburg,
    Bremen,
    Hamburg,
    Hessen,
    MecklenburgVorpommern,
    Niedersachsen,
    NordrheinWestfalen,
    RheinlandPfalz,
    Saarland,
    Sachsen,
    SachsenAnhalt,
    SchleswigHolstein,
    Thueringen
}

const ALL_STATES: [GermanFederalState; 16] = [
    GermanFederalState::BadenWuerttemberg,
    GermanFederalState::Bayern,
    GermanFederalState::Berlin,
    GermanFederalState::Brandenburg,
    GermanFederalState::Bremen,
    GermanFederalState::Hamburg,
    GermanFederalState::Hessen,
    GermanFederalState::MecklenburgVorpommern,
    GermanFederalState::Niedersachsen,
    GermanFederalState::NordrheinWestfalen,
    GermanFederalState::RheinlandPfalz,
    GermanFederalState::Saarland,
    GermanFederalState::Sachsen,
    GermanFederalState::SachsenAnhalt,
    GermanFederalState::SchleswigHolstein,
    GermanFederalState::Thueringen
];

impl GermanFederalState {
    pub fn all() -> &'static [GermanFederalState] {
        &ALL_STATES
    }

    pub fn iso(&self) -> &'static str {
        match self {
            GermanFederalState::BadenWuerttemberg => "DE-BW",
            GermanFederalState::Bayern => "DE-BY",
            GermanFederalState::Berlin => "DE-BE",
            GermanFederalState::Brandenburg => "DE-BB",
            GermanFederalState::Bremen => "DE-HB",
            GermanFederalState::Hamburg => "DE-HH",
            GermanFederalState::Hessen => "DE-HE",
            GermanFederalState::MecklenburgVorpommern => "DE-MV",
            GermanFederalState::Niedersachsen => "DE-NI",
            GermanFederalState::NordrheinWestfalen => "DE-NW",
            GermanFederalState::RheinlandPfalz => "DE-RP",
            GermanFederalState::Saarland => "DE-SL",
            GermanFederalState::Sachsen => "DE-SN",
            GermanFederalState::SachsenAnhalt => "DE-ST",
            GermanFederalState::SchleswigHolstein => "DE-SH",
            GermanFederalState::Thueringen => "DE-TH"
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GermanFederalState::BadenWuerttemberg => "Baden-Württemberg",
            GermanFederalState::Bayern => "Bayern",
            GermanFederalState::Berlin => "Berlin",
            GermanFederalState::Brandenburg => "Brandenburg",
            GermanFederalState::Bremen => "Bremen",
            GermanFederalState::Hamburg => "Hamburg",
            GermanFederalState::Hessen => "Hessen",
            GermanFederalState::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            GermanFederalState::Niedersachsen => "Niedersachsen",
            GermanFederalState::NordrheinWestfalen => "Nordrhein-Westfalen",
            GermanFederalState::RheinlandPfalz => "Rheinland-Pfalz",
            GermanFederalState::Saarland => "Saarland",
            GermanFederalState::Sachsen => "Sachsen",
            GermanFederalState::SachsenAnhalt => "Sachsen-Anhalt",
            GermanFederalState::SchleswigHolstein => "Schleswig-Holstein",
            GermanFederalState::Thueringen => "Thüringen"
        }
    }

    pub fn from_iso(iso: &str) -> Option<GermanFederalState> {
        ALL_STATES.iter().copied().find(|state| state.iso() == iso)
    }

    pub fn area(&self) -> AdministrativeArea {
        AdministrativeArea::from(*self)
    }
}

impl From<GermanFederalState> for AdministrativeArea {
    fn from(state: GermanFederalState) -> Self {
        AdministrativeArea::from_parts(state.iso().to_owned(), state.name().to_owned())
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn iso_lookup_round_trips() {
        for state in GermanFederalState::all() {
            assert_eq!(GermanFederalState::from_iso(state.iso()), Some(*state));
        }
        assert_eq!(GermanFederalState::from_iso("DE-XX"), None);
    }

    #[test]
    fn iso_codes_are_unique_and_prefixed() {
        let codes: HashSet<&str> = GermanFederalState::all().iter().map(|s| s.iso()).collect();
        assert_eq!(codes.len(), 16);
        assert!(codes.iter().all(|code| code.starts_with("DE-")));
    }

    #[test]
    fn converts_into_area() {
        let area = GermanFederalState::Thueringen.area();
        assert_eq!(area.iso(), "DE-TH");
        assert_eq!(area.name(), "Thüringen");
    }
}
