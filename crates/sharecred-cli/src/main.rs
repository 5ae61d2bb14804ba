use clap::Parser;
use sharecred::{generate_suggestion, validate, AccountStore};
use snafu::ResultExt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Provision a download account for the file share.
///
/// Prompts for a username and password, offers a generated password
/// suggestion, and writes the bcrypt hash to download/<username>/hash.txt.
#[derive(Parser)]
#[command(name = "sharecred")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host used to build the login link
    #[arg(long, default_value = "share.juandid.com")]
    host: String,

    /// Do not generate or offer a password suggestion
    #[arg(long)]
    no_suggestion: bool,

    /// Base directory for account data (default: ./download)
    #[arg(long)]
    root: Option<PathBuf>,
}

type Result<T> = ::std::result::Result<T, snafu::Whatever>;

/// Print a prompt and read one trimmed line. Read errors are reported and
/// the prompt retried; end of stream is fatal, there is nothing left to read.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .whatever_context("Can't flush stdout")?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => snafu::whatever!("Input stream closed"),
            Ok(_) => return Ok(line.trim().to_string()),
            Err(e) => eprintln!("Error reading input: {e}"),
        }
    }
}

fn prompt_username(input: &mut impl BufRead) -> Result<String> {
    loop {
        let candidate = prompt_line(input, "Username (3-20 characters): ")?;
        match validate::check_username(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) => eprintln!("Invalid username: {e}"),
        }
    }
}

fn prompt_password(
    input: &mut impl BufRead,
    suggestion: Option<&str>,
) -> Result<Zeroizing<String>> {
    loop {
        let candidate = match suggestion {
            Some(s) => {
                let line = prompt_line(
                    input,
                    &format!("Password (8-20 characters) or press Enter to accept [{s}]: "),
                )?;
                if line.is_empty() {
                    log::debug!("suggestion accepted");
                    s.to_string()
                } else {
                    line
                }
            }
            None => prompt_line(input, "Password (8-20 characters): ")?,
        };
        let candidate = Zeroizing::new(candidate);

        match validate::check_password(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) => eprintln!("Invalid password: {e}"),
        }
    }
}

fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let username = prompt_username(&mut input)?;
    log::debug!("username accepted: {username}");

    let suggestion = if cli.no_suggestion {
        None
    } else {
        Some(Zeroizing::new(generate_suggestion()))
    };
    let password = prompt_password(&mut input, suggestion.as_deref().map(String::as_str))?;

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()
            .whatever_context("Can't determine the current directory")?
            .join("download"),
    };

    let store = AccountStore::new(root, cli.host);
    let account = store
        .provision(&username, &password)
        .whatever_context("Can't provision account")?;

    println!();
    println!(
        "The hash was successfully created and saved to {}",
        account.hash_path.display()
    );
    println!("File download at {}", account.login_url);
    println!("The password is: '{}'", &*password);
    Ok(())
}

#[snafu::report]
fn main() -> Result<()> {
    run()
}
