//! Course-enrollment record keeper.
//!
//! Keeps a roster of students and their courses in `Enrollments.json`.
//! Without a subcommand the interactive menu runs; `show`, `register`, and
//! `init` cover the same operations non-interactively.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use enroll::console::{Console, render_error, write_listing};
use enroll::exit_codes;
use enroll::io::config::{DEFAULT_CONFIG_FILE, EnrollConfig, load_config, write_config};
use enroll::io::roster_store::{load_roster, save_roster};
use enroll::logging;
use enroll::roster::Roster;

#[derive(Parser)]
#[command(
    name = "enroll",
    version,
    about = "Register students for courses and keep the roster in a JSON file"
)]
struct Cli {
    /// Roster file; overrides `data_file` from the config.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Config file (TOML). Missing means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive menu (default).
    Interactive,
    /// Print every enrolled student.
    Show,
    /// Register one student and save the roster.
    Register {
        first_name: String,
        last_name: String,
        course_name: String,
    },
    /// Create the config file and an empty roster file if missing.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config).context("load config")?;
    logging::init(&cfg.log_filter);
    let data_file = cli.file.clone().unwrap_or_else(|| cfg.data_file.clone());
    debug!(config = %cli.config.display(), data_file = %data_file.display(), "starting");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => cmd_interactive(data_file),
        Command::Show => cmd_show(&data_file),
        Command::Register {
            first_name,
            last_name,
            course_name,
        } => cmd_register(&data_file, &first_name, &last_name, &course_name),
        Command::Init { force } => cmd_init(&cli.config, &cfg, &data_file, force),
    }
}

fn cmd_interactive(data_file: PathBuf) -> Result<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::open(stdin.lock(), stdout.lock(), data_file)?;
    console.run()?;
    Ok(exit_codes::OK)
}

fn cmd_show(data_file: &Path) -> Result<i32> {
    let students = match load_roster(data_file) {
        Ok(students) => students,
        Err(err) => {
            render_error(&mut io::stderr(), "Error: There was a problem reading the file.", &err)
                .context("write load error")?;
            return Ok(exit_codes::INVALID);
        }
    };
    let roster = Roster::new(students);
    write_listing(&mut io::stdout(), &roster.list()).context("write roster")?;
    Ok(exit_codes::OK)
}

fn cmd_register(data_file: &Path, first: &str, last: &str, course: &str) -> Result<i32> {
    // A missing file means a first registration; anything unreadable is left alone.
    let mut roster = if data_file.exists() {
        match load_roster(data_file) {
            Ok(students) => Roster::new(students),
            Err(err) => {
                render_error(
                    &mut io::stderr(),
                    "Error: There was a problem reading the file.",
                    &err,
                )
                .context("write load error")?;
                return Ok(exit_codes::INVALID);
            }
        }
    } else {
        Roster::default()
    };

    if let Err(err) = roster.register_student(first, last, course) {
        render_error(
            &mut io::stderr(),
            "One of the values was the incorrect type of data.",
            &err,
        )
        .context("write validation error")?;
        return Ok(exit_codes::INVALID);
    }

    let receipt = match roster.persist(data_file) {
        Ok(receipt) => receipt,
        Err(err) => {
            render_error(
                &mut io::stderr(),
                "Error: There was a problem writing to the file.",
                &err,
            )
            .context("write save error")?;
            return Ok(exit_codes::INVALID);
        }
    };

    let mut out = io::stdout().lock();
    writeln!(out, "Student {first} {last} has successfully been registered for {course}.")
        .context("write confirmation")?;
    write_listing(&mut out, &roster.list()).context("write roster")?;
    writeln!(out, "{} students saved to {}.", receipt.count, receipt.path.display())
        .context("write save summary")?;
    Ok(exit_codes::OK)
}

fn cmd_init(config_path: &Path, cfg: &EnrollConfig, data_file: &Path, force: bool) -> Result<i32> {
    if force || !config_path.exists() {
        // Record the effective roster location, including a `--file` override.
        let cfg = EnrollConfig {
            data_file: data_file.to_path_buf(),
            ..cfg.clone()
        };
        write_config(config_path, &cfg)
            .with_context(|| format!("write {}", config_path.display()))?;
        println!("init: wrote {}", config_path.display());
    } else {
        println!("init: kept {} (use --force to overwrite)", config_path.display());
    }
    if force || !data_file.exists() {
        save_roster(data_file, &[])?;
        println!("init: wrote {}", data_file.display());
    } else {
        println!("init: kept {} (use --force to overwrite)", data_file.display());
    }
    Ok(exit_codes::OK)
}
