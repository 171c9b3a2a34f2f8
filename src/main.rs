use kbo_sim::model::Weather;
use kbo_sim::{run, CliOptions};
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--league data/league.json] [--team NAME] [--opponent NAME] \
[--weather sunny|cloudy|rainy|snowy] [--seed SEED] [--games N] [--output series.csv] [--log-json game.json]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut league_path = PathBuf::from("data/league.json");
    let mut team = None;
    let mut opponent = None;
    let mut weather: Option<Weather> = None;
    let mut seed = 0u64;
    let mut games = 1usize;
    let mut output_path = None;
    let mut log_json_path = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--league" => {
                league_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--league requires a path (e.g. --league data/league.json)")
                })?;
            }
            "--team" => {
                team = Some(
                    args.next()
                        .ok_or_else(|| anyhow::anyhow!("--team requires a team name"))?,
                );
            }
            "--opponent" => {
                opponent = Some(
                    args.next()
                        .ok_or_else(|| anyhow::anyhow!("--opponent requires a team name"))?,
                );
            }
            "--weather" => {
                let val = args.next().ok_or_else(|| {
                    anyhow::anyhow!("--weather requires sunny, cloudy, rainy or snowy")
                })?;
                weather = Some(val.parse()?);
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                seed = val.parse()?;
            }
            "--games" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--games requires a number"))?;
                games = val.parse()?;
            }
            "--output" => {
                output_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output series.csv)")
                })?);
            }
            "--log-json" => {
                log_json_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--log-json requires a path (e.g. --log-json game.json)")
                })?);
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions {
        league_path,
        team,
        opponent,
        weather,
        seed,
        games,
        output_path,
        log_json_path,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let opts = parse_args()?;
    run(opts)
}
