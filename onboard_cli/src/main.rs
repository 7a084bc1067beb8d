mod report;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use onboard_core::{
    credentials::{CredentialDraft, CredentialField},
    landing::{LandingSchedule, ScheduleConfig},
    route::Page,
    selector::SelectorState,
};

/// Headless companion to the onboarding web app
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Languages(LanguagesArgs),
    Preview(PreviewArgs),
    Timeline(TimelineArgs),
    Route(RouteArgs),
}

/// List the languages matching a search, exact matches first
#[derive(Args, Debug)]
#[command(about)]
struct LanguagesArgs {
    /// Text typed into the language search box
    #[arg(short, long, default_value_t = String::new())]
    query: String,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Render the MongoDB connection string for the given credentials
#[derive(Args, Debug)]
#[command(about)]
struct PreviewArgs {
    #[arg(long, default_value_t = String::new())]
    username: String,

    #[arg(long, default_value_t = String::new())]
    password: String,

    #[arg(long, default_value_t = String::new())]
    cluster_name: String,

    #[arg(long, default_value_t = String::new())]
    hostname: String,

    /// Print JSON with the password redacted
    #[arg(long)]
    json: bool,
}

/// Print when the landing page changes what it shows
#[derive(Args, Debug)]
#[command(about)]
struct TimelineArgs {
    /// JSON file with show_loading_ms, hide_loading_ms and show_redirect_ms
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tear the landing page down at this many milliseconds
    #[arg(long)]
    unmount_at_ms: Option<u64>,
}

/// Show which page a path segment resolves to
#[derive(Args, Debug)]
#[command(about)]
struct RouteArgs {
    slug: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Arguments::parse();
    match args.command {
        Command::Languages(args) => languages(args),
        Command::Preview(args) => preview(args),
        Command::Timeline(args) => timeline(args),
        Command::Route(args) => {
            route(args);
            Ok(())
        }
    }
}

fn languages(args: LanguagesArgs) -> Result<()> {
    let mut selector = SelectorState::new();
    selector.set_query(args.query);
    let matches = selector.ordered();

    if args.json {
        let rows = report::language_rows(&matches);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if matches.is_empty() {
        println!("No languages match {:?}", selector.query());
    } else {
        for row in report::language_rows(&matches) {
            println!("{row}");
        }
    }
    Ok(())
}

fn preview(args: PreviewArgs) -> Result<()> {
    let mut draft = CredentialDraft::default();
    draft.set(CredentialField::Username, args.username);
    draft.set(CredentialField::Password, args.password);
    draft.set(CredentialField::ClusterName, args.cluster_name);
    draft.set(CredentialField::Hostname, args.hostname);

    if args.json {
        let report = report::PreviewReport::new(&draft);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", draft.preview());
    if let Err(err) = draft.validate() {
        eprintln!("note: {err}");
    }
    Ok(())
}

fn timeline(args: TimelineArgs) -> Result<()> {
    let schedule = match &args.config {
        Some(path) => {
            let file = std::fs::File::open(path)
                .wrap_err_with(|| format!("failed to open {}", path.display()))?;
            let config: ScheduleConfig = serde_json::from_reader(file)
                .wrap_err_with(|| format!("failed to parse {}", path.display()))?;
            LandingSchedule::try_from(config)?
        }
        None => LandingSchedule::default(),
    };

    let unmount_at = args.unmount_at_ms.map(Duration::from_millis);
    for line in report::timeline_lines(&schedule, unmount_at) {
        println!("{line}");
    }
    Ok(())
}

fn route(args: RouteArgs) {
    let page = Page::from_slug(&args.slug);
    match page.path() {
        Some(path) => println!("{} -> {page:?} ({path})", args.slug),
        None => println!("{} -> {page:?}", args.slug),
    }
}
