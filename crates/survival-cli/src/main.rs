use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use survival_api::{serve, GameApi, GameConfig, DEFAULT_PORT, PORT_ENV, SEED_ENV};

fn print_usage() {
    println!("survival-cli <command>");
    println!("commands:");
    println!("  serve [addr]");
    println!("    default addr: 0.0.0.0:${PORT_ENV} (falls back to port {DEFAULT_PORT})");
    println!("  play <name> <decision>...");
    println!("    decisions: food shelter allies rest");
    println!("environment:");
    println!("  {PORT_ENV}           listen port for serve");
    println!("  {SEED_ENV}  fixed dice seed for reproducible runs");
    println!("  RUST_LOG       log filter (default info)");
}

fn default_port() -> Result<u16, String> {
    match env::var(PORT_ENV) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| format!("invalid {PORT_ENV}: {raw}")),
        _ => Ok(DEFAULT_PORT),
    }
}

fn parse_socket_addr(value: Option<&String>) -> Result<SocketAddr, String> {
    match value {
        Some(raw) => raw
            .parse::<SocketAddr>()
            .map_err(|_| format!("invalid addr: {raw}")),
        None => Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, default_port()?))),
    }
}

fn run_play(args: &[String]) -> Result<(), String> {
    let name = args.get(2).ok_or_else(|| "missing name".to_string())?;
    let decisions = &args[3.min(args.len())..];
    if decisions.is_empty() {
        return Err("missing decisions".to_string());
    }

    let mut api = GameApi::from_config(GameConfig::from_env());
    let id = api.create_survivor(Some(name.as_str())).survivor.id;

    for decision in decisions {
        match api.decide(id, decision) {
            Ok(outcome) => println!(
                "day {:>2} {:<8} {:<28} {:+4}  {}",
                outcome.survivor.day - 1,
                decision,
                outcome.message,
                outcome.score_gain,
                outcome.survivor
            ),
            Err(err) => {
                println!("{decision}: {err}");
                if api
                    .survivor(id)
                    .map(|survivor| !survivor.status.is_alive())
                    .unwrap_or(true)
                {
                    break;
                }
            }
        }
    }

    let survivor = api
        .survivor(id)
        .map_err(|err| format!("survivor lookup failed: {err}"))?;
    println!("final: {survivor}");
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str);

    match command {
        Some("serve") => match parse_socket_addr(args.get(2)) {
            Ok(addr) => {
                if let Err(err) = serve(addr, GameConfig::from_env()).await {
                    log::error!("server error: {err}");
                    std::process::exit(1);
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                print_usage();
                std::process::exit(2);
            }
        },
        Some("play") => {
            if let Err(err) = run_play(&args) {
                eprintln!("error: {err}");
                print_usage();
                std::process::exit(2);
            }
        }
        _ => {
            print_usage();
        }
    }
}
