use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};

use envlog::{EnvConfig, built_info, common::VersionInfo, logger::init_sys_logger, logger_from_env};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Severity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Recover,
    Panic,
    Fatal,
    Sys,
}

#[derive(Parser)]
#[clap(name = "envlog", about = "Write one message through a logger configured from LOG_* variables")]
struct Cmd {
    /// Prefix of the LOG_SYSLOG, LOG_FILE, LOG_LEVEL and LOG_PREFIX variables
    #[clap(short, long, default_value = "")]
    namespace: String,

    /// Severity of the message
    #[clap(short, long, value_enum, default_value = "info")]
    level: Severity,

    /// Omit the date and time from the line
    #[clap(long, action = ArgAction::SetTrue)]
    no_timestamp: bool,

    /// Print the resolved configuration as YAML and exit
    #[clap(long, action = ArgAction::SetTrue)]
    print_config: bool,

    /// Display the version
    #[clap(short, long, action = ArgAction::SetTrue)]
    version: bool,

    /// Message words, joined with spaces
    message: Vec<String>,
}

const VERSION_INFO: &VersionInfo = &VersionInfo {
    name: built_info::PKG_NAME,
    version: built_info::PKG_VERSION,
    branch: built_info::GIT_HEAD_REF,
    commit_hash: built_info::GIT_COMMIT_HASH,
    compiler: built_info::RUSTC_VERSION,
    compile_time: built_info::BUILT_TIME_UTC,
};

fn main() -> Result<()> {
    let cmd = Cmd::parse();

    if cmd.version {
        println!("{}", VERSION_INFO);
        return Ok(());
    }

    if cmd.print_config {
        let config = EnvConfig::from_env(&cmd.namespace).report();
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    let _sys = init_sys_logger("info")?;
    let log = logger_from_env(&cmd.namespace, false);
    if cmd.no_timestamp {
        log.set_timestamps(false);
    }

    let msg = cmd.message.join(" ");
    match cmd.level {
        Severity::Trace => log.trace(&msg),
        Severity::Debug => log.debug(&msg),
        Severity::Info => log.info(&msg),
        Severity::Warning => log.warning(&msg),
        Severity::Error => log.error(&msg),
        Severity::Recover => log.recover(&msg),
        Severity::Panic => log.panic(&msg),
        Severity::Fatal => log.fatal(&msg),
        Severity::Sys => log.sys(&msg),
    }
    log.flush()?;

    Ok(())
}
