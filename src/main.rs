mod app;
mod prompt;

use anyhow::Result;
use anyhow::bail;
use app::App;
use app::BankArgs;
use env_logger::Env;
use hp_srs::Srs;
use hp_srs::clock::UtcClock;
use pico_args::Arguments;
use std::env;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: hp-srs [-p <db>] [-u <user>] <command>

Commands:
  init                              create the database
  add <front> <back>                add a flashcard
  cards                             list flashcards
  delete <card_id>                  delete a flashcard
  review                            review due flashcards
  stats                             show review statistics
  generate <section> <count>        print a generated question bank
      [--seed <seed>] [--test-version <version>] [--json]
  drill <section> <count>           practice a generated question bank
      [--seed <seed>] [--test-version <version>]
  sessions                          list drill sessions
  replay <session_id>               drill the questions of a session again

Options:
  -p, --path <db>     database file (env HP_SRS_DB, default srs.db)
  -u, --user <user>   user id (env HP_SRS_USER, default local)

Sections: ORD, LÄS, MEK, XYZ, KVA, DTK";

#[derive(Debug, PartialEq)]
struct Opt {
    path: Option<PathBuf>,
    user: Option<String>,
    command: Command,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Init,
    Add { front: String, back: String },
    Cards,
    Delete { card_id: u64 },
    Review,
    Stats,
    Generate { bank: BankArgs, json: bool },
    Drill { bank: BankArgs },
    Sessions,
    Replay { session_id: u64 },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let opt = parse(Arguments::from_env())?;

    if opt.command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let path = opt
        .path
        .or_else(|| env::var_os("HP_SRS_DB").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("srs.db"));
    let user = opt
        .user
        .or_else(|| env::var("HP_SRS_USER").ok())
        .unwrap_or_else(|| "local".to_string());

    let mut app = App::new(Srs::open(&path)?, user, UtcClock);

    match opt.command {
        Command::Help => Ok(()),
        Command::Init => app.init(),
        Command::Add { front, back } => app.add(&front, &back),
        Command::Cards => app.cards(),
        Command::Delete { card_id } => app.delete(card_id),
        Command::Review => app.review(),
        Command::Stats => app.stats(),
        Command::Generate { bank, json } => app.generate(&bank, json),
        Command::Drill { bank } => app.drill(&bank),
        Command::Sessions => app.sessions(),
        Command::Replay { session_id } => app.replay(session_id),
    }
}

/// Global options may come before or after the command name.
fn parse(mut args: Arguments) -> Result<Opt> {
    let help = args.contains(["-h", "--help"]);
    let path = args.opt_value_from_str(["-p", "--path"])?;
    let user = args.opt_value_from_str(["-u", "--user"])?;

    let command = match args.subcommand()? {
        _ if help => Command::Help,
        None => Command::Help,
        Some(name) => match name.as_str() {
            "init" => Command::Init,
            "add" => Command::Add {
                front: args.free_from_str()?,
                back: args.free_from_str()?,
            },
            "cards" => Command::Cards,
            "delete" => Command::Delete {
                card_id: args.free_from_str()?,
            },
            "review" => Command::Review,
            "stats" => Command::Stats,
            "generate" => {
                let json = args.contains("--json");
                Command::Generate {
                    bank: bank_args(&mut args)?,
                    json,
                }
            }
            "drill" => Command::Drill {
                bank: bank_args(&mut args)?,
            },
            "sessions" => Command::Sessions,
            "replay" => Command::Replay {
                session_id: args.free_from_str()?,
            },
            other => bail!("unknown command '{other}', see --help"),
        },
    };

    let remaining = args.finish();
    if command != Command::Help && !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }

    Ok(Opt {
        path,
        user,
        command,
    })
}

fn bank_args(args: &mut Arguments) -> Result<BankArgs> {
    let seed = args.opt_value_from_str("--seed")?;
    let test_version = args.opt_value_from_str("--test-version")?;

    Ok(BankArgs {
        section: args.free_from_str()?,
        count: args.free_from_str()?,
        seed,
        test_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse_args(args: &[&str]) -> Result<Opt> {
        parse(Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn global_options_before_command() {
        let opt = parse_args(&["-p", "x.db", "-u", "anna", "init"]).unwrap();

        assert_eq!(opt.path, Some(PathBuf::from("x.db")));
        assert_eq!(opt.user.as_deref(), Some("anna"));
        assert_eq!(opt.command, Command::Init);
    }

    #[test]
    fn global_options_after_command() {
        let opt = parse_args(&["delete", "7", "--path", "x.db"]).unwrap();

        assert_eq!(opt.path, Some(PathBuf::from("x.db")));
        assert_eq!(opt.user, None);
        assert_eq!(opt.command, Command::Delete { card_id: 7 });
    }

    #[test]
    fn generate_with_options() {
        let opt = parse_args(&[
            "-p", "x.db", "generate", "LÄS", "20", "--seed", "abc", "--json",
        ])
        .unwrap();

        assert_eq!(
            opt.command,
            Command::Generate {
                bank: BankArgs {
                    section: "LÄS".to_string(),
                    count: 20,
                    seed: Some("abc".to_string()),
                    test_version: None,
                },
                json: true,
            }
        );
    }

    #[test]
    fn drill_with_version() {
        let opt = parse_args(&["drill", "KVA", "10", "--test-version", "vt-2024"]).unwrap();

        assert_eq!(
            opt.command,
            Command::Drill {
                bank: BankArgs {
                    section: "KVA".to_string(),
                    count: 10,
                    seed: None,
                    test_version: Some("vt-2024".to_string()),
                },
            }
        );
    }

    #[test]
    fn help_and_missing_command() {
        assert_eq!(parse_args(&[]).unwrap().command, Command::Help);
        assert_eq!(parse_args(&["-p", "x.db"]).unwrap().command, Command::Help);
        assert_eq!(parse_args(&["--help", "init"]).unwrap().command, Command::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&["frobnicate"]).is_err());
        assert!(parse_args(&["init", "extra"]).is_err());
        assert!(parse_args(&["delete", "seven"]).is_err());
        assert!(parse_args(&["add", "only-front"]).is_err());
    }
}
