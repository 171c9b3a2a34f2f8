// Label tables for the categorical columns of the stat sheets. The source
// sheets carry Korean labels; English aliases are accepted as well.
use crate::error::SimError;
use crate::model::{BatterPosition, PitcherRole, Weather};
use phf::phf_map;

static BATTER_POSITIONS: phf::Map<&'static str, BatterPosition> = phf_map! {
    "포수" => BatterPosition::Catcher,
    "catcher" => BatterPosition::Catcher,
    "c" => BatterPosition::Catcher,
    "내야수" => BatterPosition::Infielder,
    "infielder" => BatterPosition::Infielder,
    "if" => BatterPosition::Infielder,
    "외야수" => BatterPosition::Outfielder,
    "outfielder" => BatterPosition::Outfielder,
    "of" => BatterPosition::Outfielder,
};

static PITCHER_ROLES: phf::Map<&'static str, PitcherRole> = phf_map! {
    "선발" => PitcherRole::Starter,
    "starter" => PitcherRole::Starter,
    "sp" => PitcherRole::Starter,
    "불펜" => PitcherRole::Reliever,
    "reliever" => PitcherRole::Reliever,
    "rp" => PitcherRole::Reliever,
};

static WEATHER: phf::Map<&'static str, Weather> = phf_map! {
    "맑음" => Weather::Sunny,
    "sunny" => Weather::Sunny,
    "흐림" => Weather::Cloudy,
    "cloudy" => Weather::Cloudy,
    "비옴" => Weather::Rainy,
    "rainy" => Weather::Rainy,
    "눈옴" => Weather::Snowy,
    "snowy" => Weather::Snowy,
};

fn normalize(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}

pub fn batter_position(label: &str) -> Result<BatterPosition, SimError> {
    BATTER_POSITIONS
        .get(normalize(label).as_str())
        .copied()
        .ok_or_else(|| SimError::UnknownPosition(label.to_string()))
}

pub fn pitcher_role(label: &str) -> Result<PitcherRole, SimError> {
    PITCHER_ROLES
        .get(normalize(label).as_str())
        .copied()
        .ok_or_else(|| SimError::UnknownPosition(label.to_string()))
}

pub fn weather(label: &str) -> Result<Weather, SimError> {
    WEATHER
        .get(normalize(label).as_str())
        .copied()
        .ok_or_else(|| SimError::UnknownWeather(label.to_string()))
}
