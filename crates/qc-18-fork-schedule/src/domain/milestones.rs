//! # Milestones
//!
//! Named protocol upgrades and the block heights at which they activate.
//!
//! A milestone absent from the schedule never activates. A milestone at
//! block 0 is active from genesis. The two cases must never be conflated.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named protocol upgrade.
///
/// The first eight are the mainnet milestones; the rest belong to the
/// classic (historical) chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Milestone {
    Homestead,
    DaoFork,
    TangerineWhistle,
    SpuriousDragon,
    Byzantium,
    Constantinople,
    ConstantinopleFix,
    Istanbul,
    Ecip1015,
    DieHard,
    Gotham,
    DefuseDifficultyBomb,
    Atlantis,
    ClassicFork,
}

impl Milestone {
    /// Every milestone, mainnet set first.
    pub const ALL: [Milestone; 14] = [
        Milestone::Homestead,
        Milestone::DaoFork,
        Milestone::TangerineWhistle,
        Milestone::SpuriousDragon,
        Milestone::Byzantium,
        Milestone::Constantinople,
        Milestone::ConstantinopleFix,
        Milestone::Istanbul,
        Milestone::Ecip1015,
        Milestone::DieHard,
        Milestone::Gotham,
        Milestone::DefuseDifficultyBomb,
        Milestone::Atlantis,
        Milestone::ClassicFork,
    ];

    /// Short kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Homestead => "homestead",
            Self::DaoFork => "dao-fork",
            Self::TangerineWhistle => "tangerine-whistle",
            Self::SpuriousDragon => "spurious-dragon",
            Self::Byzantium => "byzantium",
            Self::Constantinople => "constantinople",
            Self::ConstantinopleFix => "constantinople-fix",
            Self::Istanbul => "istanbul",
            Self::Ecip1015 => "ecip-1015",
            Self::DieHard => "die-hard",
            Self::Gotham => "gotham",
            Self::DefuseDifficultyBomb => "defuse-difficulty-bomb",
            Self::Atlantis => "atlantis",
            Self::ClassicFork => "classic-fork",
        }
    }

    /// Genesis config key holding this milestone's activation block.
    ///
    /// Keys are matched case-insensitively when loading.
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::Homestead => "homesteadBlock",
            Self::DaoFork => "daoForkBlock",
            Self::TangerineWhistle => "eip150Block",
            Self::SpuriousDragon => "eip158Block",
            Self::Byzantium => "byzantiumBlock",
            Self::Constantinople => "constantinopleBlock",
            Self::ConstantinopleFix => "constantinopleFixBlock",
            Self::Istanbul => "istanbulBlock",
            Self::Ecip1015 => "ecip1015Block",
            Self::DieHard => "dieHardBlock",
            Self::Gotham => "gothamBlock",
            Self::DefuseDifficultyBomb => "ecip1041Block",
            Self::Atlantis => "atlantisBlock",
            Self::ClassicFork => "classicForkBlock",
        }
    }

    /// Alternative keys accepted for this milestone, consulted only when
    /// [`config_key`](Self::config_key) is absent.
    pub fn config_aliases(&self) -> &'static [&'static str] {
        match self {
            Self::ConstantinopleFix => &["petersburgBlock"],
            _ => &[],
        }
    }

    /// Whether this milestone belongs to the classic chain set.
    pub fn is_classic(&self) -> bool {
        matches!(
            self,
            Self::Ecip1015
                | Self::DieHard
                | Self::Gotham
                | Self::DefuseDifficultyBomb
                | Self::Atlantis
                | Self::ClassicFork
        )
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised milestone name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown milestone: {0}")]
pub struct UnknownMilestone(pub String);

impl FromStr for Milestone {
    type Err = UnknownMilestone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Milestone::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMilestone(s.to_string()))
    }
}

/// Activation heights of the configured milestones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MilestoneSchedule {
    blocks: BTreeMap<Milestone, u64>,
}

impl MilestoneSchedule {
    /// Create an empty schedule (nothing ever activates).
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `milestone` activating at `block`.
    pub fn with(mut self, milestone: Milestone, block: u64) -> Self {
        self.blocks.insert(milestone, block);
        self
    }

    /// Activation block, if the milestone is scheduled.
    pub fn block(&self, milestone: Milestone) -> Option<u64> {
        self.blocks.get(&milestone).copied()
    }

    /// Whether `milestone` is active at `block_number`.
    pub fn is_active(&self, milestone: Milestone, block_number: u64) -> bool {
        self.block(milestone)
            .is_some_and(|activation| activation <= block_number)
    }

    /// Milestones active at `block_number`, in declaration order.
    pub fn active_at(&self, block_number: u64) -> impl Iterator<Item = Milestone> + '_ {
        self.blocks
            .iter()
            .filter(move |(_, activation)| **activation <= block_number)
            .map(|(&milestone, _)| milestone)
    }

    /// Scheduled milestones with their activation blocks.
    pub fn iter(&self) -> impl Iterator<Item = (Milestone, u64)> + '_ {
        self.blocks.iter().map(|(&m, &b)| (m, b))
    }

    /// Number of scheduled milestones.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no milestone is scheduled.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FromIterator<(Milestone, u64)> for MilestoneSchedule {
    fn from_iter<I: IntoIterator<Item = (Milestone, u64)>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
