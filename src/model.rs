use crate::error::SimError;
use crate::types;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::Sunny,
        Weather::Cloudy,
        Weather::Rainy,
        Weather::Snowy,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Weather {
        Weather::ALL[rng.gen_range(0..Weather::ALL.len())]
    }
}

impl TryFrom<String> for Weather {
    type Error = SimError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        types::weather(&label)
    }
}

impl std::str::FromStr for Weather {
    type Err = SimError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        types::weather(label)
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Weather::Sunny => "sunny",
            Weather::Cloudy => "cloudy",
            Weather::Rainy => "rainy",
            Weather::Snowy => "snowy",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum BatterPosition {
    Catcher,
    Infielder,
    Outfielder,
}

impl TryFrom<String> for BatterPosition {
    type Error = SimError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        types::batter_position(&label)
    }
}

impl BatterPosition {
    pub fn label(self) -> &'static str {
        match self {
            BatterPosition::Catcher => "catcher",
            BatterPosition::Infielder => "infielder",
            BatterPosition::Outfielder => "outfielder",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PitcherRole {
    Starter,
    Reliever,
}

impl TryFrom<String> for PitcherRole {
    type Error = SimError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        types::pitcher_role(&label)
    }
}

impl PitcherRole {
    pub fn label(self) -> &'static str {
        match self {
            PitcherRole::Starter => "starter",
            PitcherRole::Reliever => "reliever",
        }
    }
}

/// Season line of a batter. Missing columns read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatterStats {
    pub walk_pct: f64,
    pub strikeout_pct: f64,
    pub wrc: f64,
    pub avg: f64,
    pub at_bats: u32,
    pub hits: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitcherStats {
    pub era: f64,
    pub walks_per_9: f64,
    pub strikeouts_per_9: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batter {
    pub name: String,
    pub team: String,
    pub position: BatterPosition,
    #[serde(rename = "weather")]
    pub preferred_weather: Weather,
    #[serde(default)]
    pub stats: BatterStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitcher {
    pub name: String,
    pub team: String,
    #[serde(rename = "position")]
    pub role: PitcherRole,
    #[serde(rename = "weather")]
    pub preferred_weather: Weather,
    #[serde(default)]
    pub stats: PitcherStats,
}

/// Ordered player names for a hand-picked roster. Lineup order is
/// catcher, infielders, outfielders, bench.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSelection {
    pub team: String,
    pub catcher: Vec<String>,
    pub infielders: Vec<String>,
    pub outfielders: Vec<String>,
    pub bench: Vec<String>,
    pub starters: Vec<String>,
    pub relievers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LeagueFile {
    pub batters: Vec<Batter>,
    pub pitchers: Vec<Pitcher>,
    #[serde(default)]
    pub selection: Option<RosterSelection>,
}
