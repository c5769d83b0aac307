//! Liturgical part vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A slot in the liturgy that music can be chosen for.
///
/// The vocabulary is closed: plan files naming anything else are rejected at
/// load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    Processional,
    Opening,
    Offertory,
    Preparation,
    PreparationOfGifts,
    Psalm,
    ResponsorialPsalm,
    GospelAcclamation,
    Communion,
    Meditation,
    SecondCommunion,
    Recessional,
    Closing,
    Anthems,
    Ashes,
    DistributionOfAshes,
    WashingOfFeet,
    TransferOfTheBlessedSacrament,
    VenerationOfTheCross,
    PsalmAfterFirstReading,
    PsalmAfterSecondReading,
    PsalmAfterThirdReading,
    PsalmAfterFourthReading,
    PsalmAfterFifthReading,
    PsalmAfterSixthReading,
    PsalmAfterSeventhReading,
    PsalmAfterEpistle,
    LitanyOfTheSaints,
    AfterEachBaptism,
    /// Spelled as existing plan files spell it.
    SprinkingRite,
    Sprinkling,
    MarianAntiphon,
    Sequence,
    Kyrie,
    Gloria,
    HolyHolyHoly,
    MemorialAcclamation,
    Amen,
    LambOfGod,
}

impl Part {
    /// Every accepted part.
    pub const ALL: [Part; 39] = [
        Self::Processional,
        Self::Opening,
        Self::Offertory,
        Self::Preparation,
        Self::PreparationOfGifts,
        Self::Psalm,
        Self::ResponsorialPsalm,
        Self::GospelAcclamation,
        Self::Communion,
        Self::Meditation,
        Self::SecondCommunion,
        Self::Recessional,
        Self::Closing,
        Self::Anthems,
        Self::Ashes,
        Self::DistributionOfAshes,
        Self::WashingOfFeet,
        Self::TransferOfTheBlessedSacrament,
        Self::VenerationOfTheCross,
        Self::PsalmAfterFirstReading,
        Self::PsalmAfterSecondReading,
        Self::PsalmAfterThirdReading,
        Self::PsalmAfterFourthReading,
        Self::PsalmAfterFifthReading,
        Self::PsalmAfterSixthReading,
        Self::PsalmAfterSeventhReading,
        Self::PsalmAfterEpistle,
        Self::LitanyOfTheSaints,
        Self::AfterEachBaptism,
        Self::SprinkingRite,
        Self::Sprinkling,
        Self::MarianAntiphon,
        Self::Sequence,
        Self::Kyrie,
        Self::Gloria,
        Self::HolyHolyHoly,
        Self::MemorialAcclamation,
        Self::Amen,
        Self::LambOfGod,
    ];

    /// The key used in plan files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Processional => "processional",
            Self::Opening => "opening",
            Self::Offertory => "offertory",
            Self::Preparation => "preparation",
            Self::PreparationOfGifts => "preparation-of-gifts",
            Self::Psalm => "psalm",
            Self::ResponsorialPsalm => "responsorial-psalm",
            Self::GospelAcclamation => "gospel-acclamation",
            Self::Communion => "communion",
            Self::Meditation => "meditation",
            Self::SecondCommunion => "second-communion",
            Self::Recessional => "recessional",
            Self::Closing => "closing",
            Self::Anthems => "anthems",
            Self::Ashes => "ashes",
            Self::DistributionOfAshes => "distribution-of-ashes",
            Self::WashingOfFeet => "washing-of-feet",
            Self::TransferOfTheBlessedSacrament => "transfer-of-the-blessed-sacrament",
            Self::VenerationOfTheCross => "veneration-of-the-cross",
            Self::PsalmAfterFirstReading => "psalm-after-first-reading",
            Self::PsalmAfterSecondReading => "psalm-after-second-reading",
            Self::PsalmAfterThirdReading => "psalm-after-third-reading",
            Self::PsalmAfterFourthReading => "psalm-after-fourth-reading",
            Self::PsalmAfterFifthReading => "psalm-after-fifth-reading",
            Self::PsalmAfterSixthReading => "psalm-after-sixth-reading",
            Self::PsalmAfterSeventhReading => "psalm-after-seventh-reading",
            Self::PsalmAfterEpistle => "psalm-after-epistle",
            Self::LitanyOfTheSaints => "litany-of-the-saints",
            Self::AfterEachBaptism => "after-each-baptism",
            Self::SprinkingRite => "sprinking-rite",
            Self::Sprinkling => "sprinkling",
            Self::MarianAntiphon => "marian-antiphon",
            Self::Sequence => "sequence",
            Self::Kyrie => "kyrie",
            Self::Gloria => "gloria",
            Self::HolyHolyHoly => "holy-holy-holy",
            Self::MemorialAcclamation => "memorial-acclamation",
            Self::Amen => "amen",
            Self::LambOfGod => "lamb-of-god",
        }
    }

    /// Row label shown in the first table column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Processional => "Processional",
            Self::Opening => "Opening",
            Self::Offertory => "Offertory",
            Self::Preparation => "Preparation",
            Self::PreparationOfGifts => "Preparation of Gifts",
            Self::Psalm => "Psalm",
            Self::ResponsorialPsalm => "Responsorial Psalm",
            Self::GospelAcclamation => "Gospel Acclamation",
            Self::Communion => "Communion",
            Self::Meditation => "Meditation",
            Self::SecondCommunion => "Second Communion",
            Self::Recessional => "Recessional",
            Self::Closing => "Closing",
            Self::Anthems => "Anthems",
            Self::Ashes => "Ashes",
            Self::DistributionOfAshes => "Distribution of Ashes",
            Self::WashingOfFeet => "Washing of Feet",
            Self::TransferOfTheBlessedSacrament => "Transfer of the Blessed Sacrament",
            Self::VenerationOfTheCross => "Veneration of the Cross",
            Self::PsalmAfterFirstReading => "Psalm After First Reading",
            Self::PsalmAfterSecondReading => "Psalm After Second Reading",
            Self::PsalmAfterThirdReading => "Psalm After Third Reading",
            Self::PsalmAfterFourthReading => "Psalm After Fourth Reading",
            Self::PsalmAfterFifthReading => "Psalm After Fifth Reading",
            Self::PsalmAfterSixthReading => "Psalm After Sixth Reading",
            Self::PsalmAfterSeventhReading => "Psalm After Seventh Reading",
            Self::PsalmAfterEpistle => "Psalm After Epistle",
            Self::LitanyOfTheSaints => "Litany of the Saints",
            Self::AfterEachBaptism => "After Each Baptism",
            Self::SprinkingRite => "Sprinking Rite",
            Self::Sprinkling => "Sprinkling",
            Self::MarianAntiphon => "Marian Antiphon",
            Self::Sequence => "Sequence",
            Self::Kyrie => "Kyrie",
            Self::Gloria => "Gloria",
            Self::HolyHolyHoly => "Holy, Holy, Holy",
            Self::MemorialAcclamation => "Memorial Acclamation",
            Self::Amen => "Amen",
            Self::LambOfGod => "Lamb of God",
        }
    }

    /// Psalm parts are formatted in italics without title casing.
    pub fn is_psalm(&self) -> bool {
        self.key().contains("psalm")
    }
}

impl FromStr for Part {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| Error::UnknownPart(s.to_string()))
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = Part::ALL.iter().map(Part::key).collect();
        assert_eq!(keys.len(), Part::ALL.len());

        for part in Part::ALL {
            assert_eq!(part.key().parse::<Part>().unwrap(), part);
        }
    }

    #[test]
    fn test_serde_matches_key() {
        for part in Part::ALL {
            let yaml = serde_yaml::to_string(&part).unwrap();
            assert_eq!(yaml.trim(), part.key());
        }
    }

    #[test]
    fn test_unknown_part() {
        assert_eq!(
            "offerory".parse::<Part>(),
            Err(Error::UnknownPart("offerory".to_string()))
        );
    }

    #[test_case(Part::PreparationOfGifts, "Preparation of Gifts")]
    #[test_case(Part::TransferOfTheBlessedSacrament, "Transfer of the Blessed Sacrament")]
    #[test_case(Part::HolyHolyHoly, "Holy, Holy, Holy")]
    #[test_case(Part::PsalmAfterEpistle, "Psalm After Epistle")]
    #[test_case(Part::LambOfGod, "Lamb of God")]
    #[test_case(Part::SprinkingRite, "Sprinking Rite")]
    fn test_labels(part: Part, label: &str) {
        assert_eq!(part.label(), label);
    }

    #[test]
    fn test_psalm_parts() {
        assert!(Part::Psalm.is_psalm());
        assert!(Part::ResponsorialPsalm.is_psalm());
        assert!(Part::PsalmAfterThirdReading.is_psalm());
        assert!(!Part::Opening.is_psalm());
        assert!(!Part::Anthems.is_psalm());
    }
}
