//! Preferred-weather bonuses.
//!
//! Adjustments are derived from the untouched season line on every call, so
//! a player who bats fourteen times in a game gets the same bonus each time.

use crate::model::{Batter, BatterStats, Pitcher, PitcherStats, Weather};

const BATTER_WALK_MULT: f64 = 0.9;
const BATTER_STRIKEOUT_MULT: f64 = 0.9;
const BATTER_AVG_MULT: f64 = 1.2;

const PITCHER_WALK_MULT: f64 = 0.9;
const PITCHER_STRIKEOUT_MULT: f64 = 1.2;
const PITCHER_ERA_MULT: f64 = 0.9;

pub fn adjust_batter(base: &BatterStats, preferred: Weather, current: Weather) -> BatterStats {
    if preferred != current {
        return *base;
    }
    BatterStats {
        walk_pct: base.walk_pct * BATTER_WALK_MULT,
        strikeout_pct: base.strikeout_pct * BATTER_STRIKEOUT_MULT,
        avg: base.avg * BATTER_AVG_MULT,
        ..*base
    }
}

pub fn adjust_pitcher(base: &PitcherStats, preferred: Weather, current: Weather) -> PitcherStats {
    if preferred != current {
        return *base;
    }
    PitcherStats {
        era: base.era * PITCHER_ERA_MULT,
        walks_per_9: base.walks_per_9 * PITCHER_WALK_MULT,
        strikeouts_per_9: base.strikeouts_per_9 * PITCHER_STRIKEOUT_MULT,
    }
}

impl Batter {
    pub fn effective_stats(&self, weather: Weather) -> BatterStats {
        adjust_batter(&self.stats, self.preferred_weather, weather)
    }
}

impl Pitcher {
    pub fn effective_stats(&self, weather: Weather) -> PitcherStats {
        adjust_pitcher(&self.stats, self.preferred_weather, weather)
    }
}
