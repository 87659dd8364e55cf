//! Archive naming: organism class and growth stage.
//!
//! Frame archives are named `<class>-<stage>.zip`, e.g. `amoeba-early.zip`.
//! The class may itself contain dashes; only the last one separates the
//! stage.

use std::fmt;
use std::str::FromStr;

use super::{RedistributeError, RedistributeResult};

/// Number of variants each stage occupies.
pub const VARIANTS_PER_STAGE: u32 = 4;

/// Growth stage of an organism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    Early,
    Middle,
    Late,
    Final,
}

impl LifeStage {
    /// All stages in growth order.
    pub fn all() -> [LifeStage; 4] {
        [Self::Early, Self::Middle, Self::Late, Self::Final]
    }

    /// Variant block multiplier: early 0, middle 1, late 2, final 3.
    pub fn multiplier(&self) -> u32 {
        match self {
            Self::Early => 0,
            Self::Middle => 1,
            Self::Late => 2,
            Self::Final => 3,
        }
    }

    /// The token used in archive names.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Middle => "middle",
            Self::Late => "late",
            Self::Final => "final",
        }
    }

    /// First and last variant numbers of this stage's block.
    pub fn variant_range(&self) -> (u32, u32) {
        let first = VARIANTS_PER_STAGE * self.multiplier() + 1;
        (first, first + VARIANTS_PER_STAGE - 1)
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for LifeStage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "early" => Ok(Self::Early),
            "middle" => Ok(Self::Middle),
            "late" => Ok(Self::Late),
            "final" => Ok(Self::Final),
            _ => Err(()),
        }
    }
}

/// A parsed archive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    /// Organism class, used as the output directory name.
    pub class: String,

    /// Growth stage.
    pub stage: LifeStage,
}

impl ArchiveName {
    /// Parse an archive file stem such as `amoeba-early`.
    ///
    /// # Errors
    ///
    /// - [`RedistributeError::MalformedName`] if there is no `-` or the class is empty
    /// - [`RedistributeError::UnknownStage`] if the stage token is not recognized
    pub fn parse(stem: &str) -> RedistributeResult<Self> {
        let (class, stage) = stem
            .rsplit_once('-')
            .filter(|(class, _)| !class.is_empty())
            .ok_or_else(|| RedistributeError::MalformedName(stem.to_string()))?;

        let stage = stage
            .parse::<LifeStage>()
            .map_err(|()| RedistributeError::UnknownStage {
                archive: stem.to_string(),
                stage: stage.to_string(),
            })?;

        Ok(Self {
            class: class.to_string(),
            stage,
        })
    }
}
