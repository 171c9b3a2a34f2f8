use crate::bases::{Bases, HalfInning};
use crate::error::SimError;
use crate::model::Weather;
use crate::outcome::{evaluate, Outcome};
use crate::roster::Roster;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const INNINGS: u32 = 9;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Away,
    Home,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    AwayWins,
    HomeWins,
    Draw,
}

impl GameOutcome {
    pub fn from_scores(away: u32, home: u32) -> Self {
        match away.cmp(&home) {
            std::cmp::Ordering::Greater => GameOutcome::AwayWins,
            std::cmp::Ordering::Less => GameOutcome::HomeWins,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }
}

/// One batter-versus-pitcher confrontation and the state it left behind.
#[derive(Clone, Debug, Serialize)]
pub struct PlateAppearance {
    pub batter: String,
    pub pitcher: String,
    pub outcome: Outcome,
    pub runs: u32,
    pub outs_after: u8,
    pub bases_after: Bases,
}

#[derive(Clone, Debug, Serialize)]
pub struct HalfInningResult {
    pub inning: u32,
    pub batting: Side,
    pub pitcher: String,
    pub runs: u32,
    pub plate_appearances: Vec<PlateAppearance>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GameResult {
    pub away_team: String,
    pub home_team: String,
    pub weather: Weather,
    pub away_score: u32,
    pub home_score: u32,
    pub outcome: GameOutcome,
    pub half_innings: Vec<HalfInningResult>,
}

impl GameResult {
    /// Runs per inning for one side, in inning order.
    pub fn line_score(&self, side: Side) -> Vec<u32> {
        self.half_innings
            .iter()
            .filter(|half| half.batting == side)
            .map(|half| half.runs)
            .collect()
    }

    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            GameOutcome::AwayWins => Some(&self.away_team),
            GameOutcome::HomeWins => Some(&self.home_team),
            GameOutcome::Draw => None,
        }
    }
}

/// Plays one half-inning: the lineup bats in order, without wrapping, until
/// three outs are recorded or the lineup runs out.
pub fn simulate_half_inning<R: Rng + ?Sized>(
    batting: &Roster,
    pitching: &Roster,
    side: Side,
    inning: u32,
    weather: Weather,
    rng: &mut R,
) -> Result<HalfInningResult, SimError> {
    let pitcher = pitching.pitcher_for_inning(inning)?;
    let pitcher_stats = pitcher.effective_stats(weather);
    let mut half = HalfInning::new();
    let mut plate_appearances = Vec::new();

    for batter in &batting.lineup {
        if half.is_over() {
            break;
        }
        let outcome = evaluate(&batter.effective_stats(weather), &pitcher_stats, rng);
        let play = half.apply(outcome, &batter.name);
        log::debug!(
            "inning {inning} {:?}: {} vs {} -> {outcome} ({} runs, {} outs)",
            side,
            batter.name,
            pitcher.name,
            play.runs,
            half.outs()
        );
        plate_appearances.push(PlateAppearance {
            batter: batter.name.clone(),
            pitcher: pitcher.name.clone(),
            outcome,
            runs: play.runs,
            outs_after: half.outs(),
            bases_after: half.bases().clone(),
        });
    }

    log::info!(
        "inning {inning} {:?}: {} scored {}",
        side,
        batting.team_name,
        half.runs()
    );
    Ok(HalfInningResult {
        inning,
        batting: side,
        pitcher: pitcher.name.clone(),
        runs: half.runs(),
        plate_appearances,
    })
}

pub struct Game<'a> {
    away: &'a Roster,
    home: &'a Roster,
    weather: Weather,
    rng: SmallRng,
}

impl<'a> Game<'a> {
    pub fn new(away: &'a Roster, home: &'a Roster, weather: Weather, seed: u64) -> Self {
        Game {
            away,
            home,
            weather,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Nine innings, visitors batting first. A tie after nine stands.
    pub fn play(mut self) -> Result<GameResult, SimError> {
        self.away.check_playable()?;
        self.home.check_playable()?;

        let mut away_score = 0;
        let mut home_score = 0;
        let mut half_innings = Vec::with_capacity(2 * INNINGS as usize);
        for inning in 1..=INNINGS {
            let top = simulate_half_inning(
                self.away,
                self.home,
                Side::Away,
                inning,
                self.weather,
                &mut self.rng,
            )?;
            away_score += top.runs;
            half_innings.push(top);

            let bottom = simulate_half_inning(
                self.home,
                self.away,
                Side::Home,
                inning,
                self.weather,
                &mut self.rng,
            )?;
            home_score += bottom.runs;
            half_innings.push(bottom);
        }

        let outcome = GameOutcome::from_scores(away_score, home_score);
        log::info!(
            "final: {} {away_score} : {home_score} {} ({:?})",
            self.away.team_name,
            self.home.team_name,
            outcome
        );
        Ok(GameResult {
            away_team: self.away.team_name.clone(),
            home_team: self.home.team_name.clone(),
            weather: self.weather,
            away_score,
            home_score,
            outcome,
            half_innings,
        })
    }
}

pub fn simulate_game(
    away: &Roster,
    home: &Roster,
    weather: Weather,
    seed: u64,
) -> Result<GameResult, SimError> {
    Game::new(away, home, weather, seed).play()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_scores_are_a_draw() {
        assert_eq!(GameOutcome::from_scores(5, 5), GameOutcome::Draw);
        assert_eq!(GameOutcome::from_scores(6, 5), GameOutcome::AwayWins);
        assert_eq!(GameOutcome::from_scores(0, 1), GameOutcome::HomeWins);
    }
}
