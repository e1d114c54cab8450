use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Skinfold sites. The first eight are the ISAK restricted-profile sites;
/// chest and midaxillary are only needed by the Jackson-Pollock equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SkinfoldSite {
    Triceps,
    Subscapular,
    Biceps,
    #[serde(alias = "suprailiac")]
    IliacCrest,
    Supraspinale,
    Abdominal,
    #[serde(alias = "thigh")]
    FrontThigh,
    #[serde(alias = "calf")]
    MedialCalf,
    Chest,
    Midaxillary,
}

impl SkinfoldSite {
    pub const ALL: [SkinfoldSite; 10] = [
        SkinfoldSite::Triceps,
        SkinfoldSite::Subscapular,
        SkinfoldSite::Biceps,
        SkinfoldSite::IliacCrest,
        SkinfoldSite::Supraspinale,
        SkinfoldSite::Abdominal,
        SkinfoldSite::FrontThigh,
        SkinfoldSite::MedialCalf,
        SkinfoldSite::Chest,
        SkinfoldSite::Midaxillary,
    ];

    /// The eight ISAK restricted-profile sites.
    pub const ISAK: [SkinfoldSite; 8] = [
        SkinfoldSite::Triceps,
        SkinfoldSite::Subscapular,
        SkinfoldSite::Biceps,
        SkinfoldSite::IliacCrest,
        SkinfoldSite::Supraspinale,
        SkinfoldSite::Abdominal,
        SkinfoldSite::FrontThigh,
        SkinfoldSite::MedialCalf,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SkinfoldSite::Triceps => "triceps",
            SkinfoldSite::Subscapular => "subscapular",
            SkinfoldSite::Biceps => "biceps",
            SkinfoldSite::IliacCrest => "iliac_crest",
            SkinfoldSite::Supraspinale => "supraspinale",
            SkinfoldSite::Abdominal => "abdominal",
            SkinfoldSite::FrontThigh => "front_thigh",
            SkinfoldSite::MedialCalf => "medial_calf",
            SkinfoldSite::Chest => "chest",
            SkinfoldSite::Midaxillary => "midaxillary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkinfoldSite::Triceps => "Triceps skinfold",
            SkinfoldSite::Subscapular => "Subscapular skinfold",
            SkinfoldSite::Biceps => "Biceps skinfold",
            SkinfoldSite::IliacCrest => "Iliac crest skinfold",
            SkinfoldSite::Supraspinale => "Supraspinale skinfold",
            SkinfoldSite::Abdominal => "Abdominal skinfold",
            SkinfoldSite::FrontThigh => "Front thigh skinfold",
            SkinfoldSite::MedialCalf => "Medial calf skinfold",
            SkinfoldSite::Chest => "Chest skinfold",
            SkinfoldSite::Midaxillary => "Midaxillary skinfold",
        }
    }
}

impl fmt::Display for SkinfoldSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Girths (circumferences), in cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Girth {
    /// Mid-upper arm, relaxed. Also the MAC used by Chumlea.
    #[serde(alias = "arm", alias = "mid_upper_arm")]
    ArmRelaxed,
    #[serde(alias = "arm_flexed_tensed")]
    ArmFlexed,
    Forearm,
    Chest,
    Waist,
    Hip,
    #[serde(alias = "mid_thigh")]
    Thigh,
    Calf,
}

impl Girth {
    pub const ALL: [Girth; 8] = [
        Girth::ArmRelaxed,
        Girth::ArmFlexed,
        Girth::Forearm,
        Girth::Chest,
        Girth::Waist,
        Girth::Hip,
        Girth::Thigh,
        Girth::Calf,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Girth::ArmRelaxed => "arm_relaxed",
            Girth::ArmFlexed => "arm_flexed",
            Girth::Forearm => "forearm",
            Girth::Chest => "chest",
            Girth::Waist => "waist",
            Girth::Hip => "hip",
            Girth::Thigh => "thigh",
            Girth::Calf => "calf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Girth::ArmRelaxed => "Arm girth (relaxed)",
            Girth::ArmFlexed => "Arm girth (flexed and tensed)",
            Girth::Forearm => "Forearm girth",
            Girth::Chest => "Chest girth",
            Girth::Waist => "Waist girth",
            Girth::Hip => "Hip girth",
            Girth::Thigh => "Mid-thigh girth",
            Girth::Calf => "Calf girth",
        }
    }
}

impl fmt::Display for Girth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bone breadths and trunk depths, in cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Breadth {
    /// Biepicondylar humerus.
    Humerus,
    /// Biepicondylar femur.
    Femur,
    Biacromial,
    Biiliocristal,
    /// Bistyloid wrist.
    Wrist,
    TransverseChest,
    ApChestDepth,
}

impl Breadth {
    pub const ALL: [Breadth; 7] = [
        Breadth::Humerus,
        Breadth::Femur,
        Breadth::Biacromial,
        Breadth::Biiliocristal,
        Breadth::Wrist,
        Breadth::TransverseChest,
        Breadth::ApChestDepth,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Breadth::Humerus => "humerus",
            Breadth::Femur => "femur",
            Breadth::Biacromial => "biacromial",
            Breadth::Biiliocristal => "biiliocristal",
            Breadth::Wrist => "wrist",
            Breadth::TransverseChest => "transverse_chest",
            Breadth::ApChestDepth => "ap_chest_depth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Breadth::Humerus => "Humerus breadth",
            Breadth::Femur => "Femur breadth",
            Breadth::Biacromial => "Biacromial breadth",
            Breadth::Biiliocristal => "Biiliocristal breadth",
            Breadth::Wrist => "Wrist breadth",
            Breadth::TransverseChest => "Transverse chest breadth",
            Breadth::ApChestDepth => "Anterior-posterior chest depth",
        }
    }
}

impl fmt::Display for Breadth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Segment lengths and surrogate statures, in cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Length {
    SittingHeight,
    KneeHeight,
    DemiSpan,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::SittingHeight, Length::KneeHeight, Length::DemiSpan];

    pub fn id(&self) -> &'static str {
        match self {
            Length::SittingHeight => "sitting_height",
            Length::KneeHeight => "knee_height",
            Length::DemiSpan => "demi_span",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Length::SittingHeight => "Sitting height",
            Length::KneeHeight => "Knee height",
            Length::DemiSpan => "Demi-span",
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Any measured quantity a replicate set can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Site {
    Skinfold(SkinfoldSite),
    Girth(Girth),
    Breadth(Breadth),
    Length(Length),
    Stature,
    BodyMass,
    HeadCircumference,
}

impl Site {
    pub fn label(&self) -> &'static str {
        match self {
            Site::Skinfold(s) => s.label(),
            Site::Girth(g) => g.label(),
            Site::Breadth(b) => b.label(),
            Site::Length(l) => l.label(),
            Site::Stature => "Stature",
            Site::BodyMass => "Body mass",
            Site::HeadCircumference => "Head circumference",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
