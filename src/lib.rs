pub mod bases;
pub mod error;
pub mod game;
pub mod model;
pub mod outcome;
pub mod roster;
pub mod series;
pub mod types;
pub mod weather;

use crate::game::{simulate_game, GameResult, Side};
use crate::model::{LeagueFile, Weather};
use crate::roster::{League, Roster};
use crate::series::simulate_series;
use anyhow::Context;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

pub use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub league_path: PathBuf,
    pub team: Option<String>,
    pub opponent: Option<String>,
    pub weather: Option<Weather>,
    pub seed: u64,
    pub games: usize,
    pub output_path: Option<PathBuf>,
    pub log_json_path: Option<PathBuf>,
}

pub fn load_league(path: &Path) -> anyhow::Result<LeagueFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read league file at {}", path.display()))?;
    let parsed: LeagueFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(parsed)
}

/// User roster: an explicit selection from the league file wins over a
/// ranked roster for `--team`.
fn user_roster(league: &League, file: &LeagueFile, team: Option<&str>) -> anyhow::Result<Roster> {
    if let Some(selection) = &file.selection {
        if team.is_some_and(|t| t.trim() != selection.team.trim()) {
            anyhow::bail!(
                "--team {} conflicts with the selection for {}",
                team.unwrap_or_default(),
                selection.team
            );
        }
        let pool = league.team(&selection.team)?;
        let roster = Roster::from_selection(pool, selection)?;
        roster.validate()?;
        return Ok(roster);
    }
    let Some(team) = team else {
        anyhow::bail!("No user team: pass --team or add a selection to the league file");
    };
    Ok(league.team(team)?.rank())
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    if opts.games == 0 {
        anyhow::bail!("--games must be > 0");
    }
    let file = load_league(&opts.league_path)?;
    let league = League::from_players(file.batters.clone(), file.pitchers.clone());
    if league.is_empty() {
        anyhow::bail!("{} has no complete teams", opts.league_path.display());
    }
    let user = user_roster(&league, &file, opts.team.as_deref())?;
    let opponents = league.auto_configure(&user.team_name);

    let mut rng = SmallRng::seed_from_u64(opts.seed);
    let opponent = match &opts.opponent {
        Some(name) => opponents
            .iter()
            .find(|r| r.team_name == name.trim())
            .ok_or_else(|| SimError::UnknownTeam(name.clone()))?,
        None => opponents
            .choose(&mut rng)
            .ok_or_else(|| anyhow::anyhow!("No opponent available for {}", user.team_name))?,
    };
    let weather = opts.weather.unwrap_or_else(|| Weather::random(&mut rng));
    println!(
        "{} at {} | weather: {weather}",
        user.team_name, opponent.team_name
    );

    if opts.games == 1 {
        let result = simulate_game(&user, opponent, weather, rng.gen())?;
        print_box_score(&result);
        if let Some(path) = &opts.log_json_path {
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write game log to {}", path.display()))?;
        }
        return Ok(());
    }

    let summary = simulate_series(&user, opponent, weather, opts.games, rng.gen())?;
    println!(
        "{} games: {} {} wins, {} {} wins, {} draws ({:.2} - {:.2} avg runs)",
        summary.games.len(),
        summary.away_team,
        summary.away_wins,
        summary.home_team,
        summary.home_wins,
        summary.draws,
        summary.avg_away_runs,
        summary.avg_home_runs
    );
    if let Some(path) = &opts.output_path {
        series::write_csv(&summary, path)?;
        println!("Wrote {} games to {}", summary.games.len(), path.display());
    }
    Ok(())
}

fn print_box_score(result: &GameResult) {
    for (side, team, total) in [
        (Side::Away, &result.away_team, result.away_score),
        (Side::Home, &result.home_team, result.home_score),
    ] {
        let innings: Vec<String> = result
            .line_score(side)
            .iter()
            .map(|runs| runs.to_string())
            .collect();
        println!("{team:<16} {} | {total}", innings.join(" "));
    }
    match result.winner() {
        Some(team) => println!("{team} win"),
        None => println!("Draw"),
    }
}
