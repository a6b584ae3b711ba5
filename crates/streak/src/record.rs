//! Animal records stored in a [`Streak`](crate::Streak).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest id accepted by the index.
pub const MIN_ID: u32 = 10000;

/// Largest id accepted by the index.
pub const MAX_ID: u32 = 99999;

/// Whether `id` lies in `[MIN_ID, MAX_ID]`.
#[inline]
pub fn is_valid_id(id: u32) -> bool {
    (MIN_ID..=MAX_ID).contains(&id)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LifeStage {
    #[default]
    Cub,
    Young,
    Old,
}

impl LifeStage {
    pub const ALL: [LifeStage; 3] = [LifeStage::Cub, LifeStage::Young, LifeStage::Old];

    pub fn as_str(self) -> &'static str {
        match self {
            LifeStage::Cub => "CUB",
            LifeStage::Young => "YOUNG",
            LifeStage::Old => "OLD",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "MALE",
            Sex::Female => "FEMALE",
            Sex::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VitalStatus {
    #[default]
    Alive,
    Dead,
}

impl VitalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalStatus::Alive => "ALIVE",
            VitalStatus::Dead => "DEAD",
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(LifeStage, Sex, VitalStatus);

/// One entry of the index.
///
/// Two records with the same `id` are the same entry; everything else is
/// payload carried alongside the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animal {
    pub id: u32,
    pub stage: LifeStage,
    pub sex: Sex,
    pub status: VitalStatus,
}

impl Animal {
    /// A live cub of unknown sex.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            stage: LifeStage::default(),
            sex: Sex::default(),
            status: VitalStatus::default(),
        }
    }

    pub fn with_stage(mut self, stage: LifeStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_status(mut self, status: VitalStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.status == VitalStatus::Dead
    }
}

/// Listing line: `id:STAGE:SEX:STATUS`.
impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.id, self.stage, self.sex, self.status)
    }
}
