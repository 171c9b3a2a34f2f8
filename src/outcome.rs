//! Plate appearance outcome model.
//!
//! Six category scores are built from the batter's and pitcher's effective
//! lines, normalized to 100 and sampled. A hit is refined into a hit type
//! from the batter's own extra-base mix.

use crate::error::SimError;
use crate::model::{BatterStats, PitcherStats};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const LEAGUE_WALKS_PER_9: f64 = 4.2;
const LEAGUE_STRIKEOUTS_PER_9: f64 = 7.2;
const LEAGUE_ERA: f64 = 4.8;
const HIT_BY_PITCH_SCORE: f64 = 3.0;

/// Final result of one plate appearance.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Walk,
    Strikeout,
    HitByPitch,
    FlyOut,
    GroundOut,
    Single,
    Double,
    Triple,
    HomeRun,
}

impl Outcome {
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            Outcome::Single | Outcome::Double | Outcome::Triple | Outcome::HomeRun
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Walk => "walk",
            Outcome::Strikeout => "strikeout",
            Outcome::HitByPitch => "hit by pitch",
            Outcome::FlyOut => "fly out",
            Outcome::GroundOut => "ground out",
            Outcome::Single => "single",
            Outcome::Double => "double",
            Outcome::Triple => "triple",
            Outcome::HomeRun => "home run",
        };
        f.write_str(label)
    }
}

/// First-stage categories; `Hit` is refined by [`resolve_hit_type`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Walk,
    Strikeout,
    Hit,
    HitByPitch,
    FlyOut,
    GroundOut,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Walk,
        Category::Strikeout,
        Category::Hit,
        Category::HitByPitch,
        Category::FlyOut,
        Category::GroundOut,
    ];
}

impl FromStr for Category {
    type Err = SimError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let normalized = label.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "walk" | "볼넷" => Ok(Category::Walk),
            "strikeout" | "삼진" => Ok(Category::Strikeout),
            "hit" | "안타" => Ok(Category::Hit),
            "hit_by_pitch" | "몸에_맞는_공" => Ok(Category::HitByPitch),
            "fly_out" | "플라이_아웃" => Ok(Category::FlyOut),
            "ground_out" | "땅볼_아웃" => Ok(Category::GroundOut),
            _ => Err(SimError::UnknownOutcome(label.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeScores {
    pub walk: f64,
    pub strikeout: f64,
    pub hit: f64,
    pub hit_by_pitch: f64,
    pub fly_out: f64,
    pub ground_out: f64,
}

impl OutcomeScores {
    pub fn compute(batter: &BatterStats, pitcher: &PitcherStats) -> Self {
        let walk = (batter.walk_pct * 0.2
            + (11.0 + 2.5 * (pitcher.walks_per_9 - LEAGUE_WALKS_PER_9)))
            .max(0.0);
        let strikeout = (batter.strikeout_pct * 0.2
            + (20.0 + 2.5 * (pitcher.strikeouts_per_9 - LEAGUE_STRIKEOUTS_PER_9)))
            .max(0.0);
        let hit = (batter.avg * 100.0 + (pitcher.era - LEAGUE_ERA) * 0.06).max(0.0);
        // Fly and ground outs split the same residual evenly.
        let residual = (0.5 * (100.0 - (hit + walk + strikeout))).max(0.0);
        OutcomeScores {
            walk,
            strikeout,
            hit,
            hit_by_pitch: HIT_BY_PITCH_SCORE,
            fly_out: residual,
            ground_out: residual,
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Walk => self.walk,
            Category::Strikeout => self.strikeout,
            Category::Hit => self.hit,
            Category::HitByPitch => self.hit_by_pitch,
            Category::FlyOut => self.fly_out,
            Category::GroundOut => self.ground_out,
        }
    }

    /// Score lookup for callers that name categories by label.
    pub fn by_label(&self, label: &str) -> Result<f64, SimError> {
        Ok(self.get(label.parse()?))
    }

    pub fn total(&self) -> f64 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Rescales the scores to percentages. The hit-by-pitch floor keeps the
    /// total positive.
    pub fn normalized(&self) -> Self {
        let scale = 100.0 / self.total();
        OutcomeScores {
            walk: self.walk * scale,
            strikeout: self.strikeout * scale,
            hit: self.hit * scale,
            hit_by_pitch: self.hit_by_pitch * scale,
            fly_out: self.fly_out * scale,
            ground_out: self.ground_out * scale,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Category {
        let normalized = self.normalized();
        let weights = Category::ALL.map(|c| normalized.get(c));
        match WeightedIndex::new(weights) {
            Ok(dist) => Category::ALL[dist.sample(rng)],
            // Only reachable with non-finite stat input.
            Err(_) => Category::GroundOut,
        }
    }
}

const HIT_TYPES: [Outcome; 4] = [
    Outcome::Single,
    Outcome::Double,
    Outcome::Triple,
    Outcome::HomeRun,
];

/// Share of singles, doubles, triples and home runs in the batter's hits.
/// `None` when the batter has no recorded hits.
pub fn hit_type_shares(batter: &BatterStats) -> Option<[f64; 4]> {
    if batter.hits == 0 {
        return None;
    }
    let total = batter.hits as f64;
    Some([
        batter.singles as f64 / total,
        batter.doubles as f64 / total,
        batter.triples as f64 / total,
        batter.home_runs as f64 / total,
    ])
}

pub fn resolve_hit_type<R: Rng + ?Sized>(batter: &BatterStats, rng: &mut R) -> Outcome {
    let Some(shares) = hit_type_shares(batter) else {
        return Outcome::Single;
    };
    match WeightedIndex::new(shares) {
        Ok(dist) => HIT_TYPES[dist.sample(rng)],
        Err(_) => Outcome::Single,
    }
}

pub fn evaluate<R: Rng + ?Sized>(
    batter: &BatterStats,
    pitcher: &PitcherStats,
    rng: &mut R,
) -> Outcome {
    match OutcomeScores::compute(batter, pitcher).sample(rng) {
        Category::Walk => Outcome::Walk,
        Category::Strikeout => Outcome::Strikeout,
        Category::Hit => resolve_hit_type(batter, rng),
        Category::HitByPitch => Outcome::HitByPitch,
        Category::FlyOut => Outcome::FlyOut,
        Category::GroundOut => Outcome::GroundOut,
    }
}
