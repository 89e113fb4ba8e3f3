//! hideit 命令行入口
//!
//! 用法：
//!   hideit hide   [--password <PW>] <path>
//!   hideit unhide [--password <PW>] <path.lock>
//!
//! 密码来源优先级：`--password` > `HIDEIT_PASSWORD` > 交互输入。
//! 所有实际逻辑都委托给 hideit 库。

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use hideit::HideItError;
use hideit::fs::paths::LOCK_EXT;

#[derive(Parser)]
#[command(name = "hideit")]
#[command(author, version, about = "Hide a file or folder behind a password")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a file or folder
    Hide(Target),

    /// Unhide a file or folder
    Unhide(Target),
}

#[derive(Args)]
struct Target {
    /// Password used to hide/unhide the path
    #[arg(long, env = "HIDEIT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// File or folder to process
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        // 密码错误 / 文件损坏只给出简短提示
        if let Some(HideItError::IncorrectPasswordOrCorrupted) =
            err.downcast_ref::<HideItError>()
        {
            eprintln!("{}", HideItError::IncorrectPasswordOrCorrupted);
        } else {
            eprintln!("Error: {err:#}");
        }
        exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    let out = match command {
        Commands::Hide(target) => hide(target)?,
        Commands::Unhide(target) => unhide(target)?,
    };

    println!("{}", out.display());
    Ok(())
}

fn hide(target: Target) -> Result<PathBuf> {
    let path = target.path;
    if !path.is_file() && !path.is_dir() {
        bail!("'{}' is not a valid file or folder", path.display());
    }

    let password = resolve_password(target.password)?;

    let out = if path.is_dir() {
        hideit::encrypt_dir(&path, &password)?
    } else {
        hideit::encrypt_file(&path, &password)?
    };
    Ok(out)
}

fn unhide(target: Target) -> Result<PathBuf> {
    let path = target.path;
    validate_locked_file(&path)?;

    let password = resolve_password(target.password)?;

    let out = if hideit::is_dir_container(&path) {
        hideit::decrypt_dir(&path, &password)?
    } else {
        hideit::decrypt_file(&path, &password)?
    };
    Ok(out)
}

fn validate_locked_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!("'{}' is not a valid file", path.display());
    }
    if path.extension() != Some(OsStr::new(LOCK_EXT)) {
        bail!("'{}' must have the .{LOCK_EXT} extension", path.display());
    }
    Ok(())
}

/// 参数 / 环境变量中没有密码时交互读取
fn resolve_password(given: Option<String>) -> Result<Zeroizing<String>> {
    let password = match given {
        Some(p) if !p.is_empty() => Zeroizing::new(p),
        _ => Zeroizing::new(rpassword::prompt_password("Password: ").context("read password")?),
    };

    if password.is_empty() {
        bail!("password must not be empty");
    }
    Ok(password)
}
