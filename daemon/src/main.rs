//! `ballot-portal`: command-line front end for the voting portal.

mod config;

use anyhow::{bail, Context};
use clap::Parser;
use portal_ballot::{BallotState, MockBallotService, Tally};
use portal_session::{
    Access, CommissionerPage, RegistrationForm, Route, SessionState, VoterPage,
};
use portal_store::FileIdentityStore;
use portal_types::{Role, TxHash};
use portal_utils::{format_countdown, init_tracing, LogFormat, SystemClock, ThreadRandom};
use std::path::PathBuf;

use crate::config::PortalConfig;

type Session = SessionState<FileIdentityStore, SystemClock, ThreadRandom>;
type Ballot = BallotState<MockBallotService<SystemClock, ThreadRandom>, SystemClock>;

#[derive(Parser)]
#[command(name = "ballot-portal", about = "Simulated voting portal")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the persisted identity.
    #[arg(long, env = "PORTAL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "PORTAL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "PORTAL_LOG_FORMAT")]
    log_format: Option<String>,

    /// Multiplier for simulated latencies (0 disables waiting).
    #[arg(long, env = "PORTAL_LATENCY_SCALE")]
    latency_scale: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Sign in with a demo account.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "PORTAL_PASSWORD")]
        password: String,
    },
    /// Register a new account and sign in.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, env = "PORTAL_PASSWORD")]
        password: String,
        /// Defaults to the password when omitted.
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,
    },
    /// Sign out and forget the persisted identity.
    Logout,
    /// Show the signed-in identity.
    Whoami,
    /// Cast this session's vote.
    Vote {
        #[arg(long)]
        candidate: String,
    },
    /// Show the election results.
    Results,
    /// Check whether a vote transaction is recorded.
    Verify {
        #[arg(long)]
        tx: String,
    },
}

fn parse_role(s: &str) -> Result<Role, String> {
    Role::parse(s).ok_or_else(|| format!("unknown role `{s}` (expected voter or commissioner)"))
}

fn load_config(cli: &Cli) -> anyhow::Result<PortalConfig> {
    let base = match &cli.config {
        Some(path) => PortalConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PortalConfig::default(),
    };

    let config = PortalConfig {
        data_dir: cli.data_dir.clone().unwrap_or(base.data_dir),
        log_level: cli.log_level.clone().unwrap_or(base.log_level),
        log_format: cli.log_format.clone().unwrap_or(base.log_format),
        latency_scale: cli.latency_scale.unwrap_or(base.latency_scale),
        ..base
    };
    config.validate()?;
    Ok(config)
}

/// Redirect to the login page unless the restored session may open `route`.
fn require(session: &Session, route: Route) -> anyhow::Result<()> {
    match session.resolve(route) {
        Access::Granted => Ok(()),
        Access::Redirect(Route::Login) => bail!("not signed in; run `ballot-portal login` first"),
        Access::Redirect(to) => bail!(
            "{} is not available to this account (see {})",
            route.path(),
            to.path()
        ),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(LogFormat::parse(&config.log_format), &config.log_level);
    tracing::debug!(?config, "configuration resolved");

    let clock = SystemClock::scaled(config.latency_scale);
    let session: Session = SessionState::new(
        FileIdentityStore::new(&config.data_dir),
        clock,
        ThreadRandom,
    );
    session.check_auth();

    let ballot: Ballot = BallotState::new(
        MockBallotService::new(clock, ThreadRandom)
            .with_verify_success_rate(config.verify_success_rate),
        clock,
    );

    match cli.command {
        Command::Login { username, password } => {
            let identity = session.try_login(&username, &password).await?;
            let role = identity.role.map_or("none", |r| r.as_str());
            println!("signed in as {} ({role})", identity.username);
        }
        Command::Register {
            username,
            email,
            phone,
            password,
            confirm_password,
            role,
        } => {
            let form = RegistrationForm {
                username,
                email,
                phone_number: phone,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
            };
            if let Err(errors) = form.validate() {
                for e in &errors {
                    eprintln!("{e}");
                }
                bail!("registration rejected ({} problem(s))", errors.len());
            }
            let identity = session
                .try_register(
                    &form.email,
                    &form.username,
                    &form.password,
                    &form.phone_number,
                    role,
                )
                .await?;
            println!("registered {} with id {}", identity.username, identity.id);
        }
        Command::Logout => {
            session
                .try_logout()
                .context("sign-out did not stick; the saved identity is still on disk")?;
            println!("signed out");
        }
        Command::Whoami => match session.identity() {
            Some(identity) => {
                let role = identity.role.map_or("none", |r| r.as_str());
                println!(
                    "{} <{}> id={} role={role}",
                    identity.username, identity.email, identity.id
                );
                if identity.role == Some(Role::Voter) {
                    ballot.load_election().await;
                    if let Some(election) = ballot.current_election() {
                        println!(
                            "{} closes in {}",
                            election.title,
                            format_countdown(election.time_remaining(ballot.now()))
                        );
                    }
                }
            }
            None => println!("not signed in"),
        },
        Command::Vote { candidate } => {
            require(&session, Route::Voter(VoterPage::Vote))?;
            ballot.try_connect_wallet().await?;
            ballot.try_load_election().await?;
            let vote = ballot.try_cast_vote(&candidate).await?;
            println!("vote recorded for candidate {}", vote.candidate_id);
            println!("transaction {}", vote.transaction_hash);
        }
        Command::Results => {
            require(&session, Route::Commissioner(CommissionerPage::Results))?;
            let election = ballot.try_load_election().await?;
            let results = ballot.try_get_election_results().await?;
            let tally = Tally::from_results(&results, &election);
            println!("{} ({} votes)", election.title, tally.total);
            for row in &tally.rows {
                println!(
                    "  {:<16} {:<20} {:>6} {:>5.1}%",
                    row.name, row.party, row.votes, row.share_percent
                );
            }
            if let Some(leader) = tally.leader() {
                println!("leading: {}", leader.name);
            }
        }
        Command::Verify { tx } => {
            require(&session, Route::Voter(VoterPage::Verify))?;
            let tx_hash = TxHash::parse(tx)?;
            if ballot.try_verify_vote(&tx_hash).await? {
                println!("{tx_hash} is recorded");
            } else {
                println!("{tx_hash} could not be verified");
            }
        }
    }

    Ok(())
}
