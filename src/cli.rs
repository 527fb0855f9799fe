use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "setu", about = "Multilingual Government-of-India news monitoring pipeline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the periodic scheduler and run continuously until interrupted.
    Run,

    /// Run a single collection cycle immediately and exit, mirroring the
    /// source's standalone one-shot collection script.
    CollectNow(CollectNowArgs),
}

#[derive(Args)]
pub struct CollectNowArgs {
    /// Restrict the cycle to sources whose name contains this substring.
    #[arg(long)]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_run_command() {
        let cli = Cli::try_parse_from(["setu", "run"]).unwrap();
        assert!(matches!(cli.command, Command::Run));
    }

    #[test]
    fn parses_collect_now_with_source_filter() {
        let cli = Cli::try_parse_from(["setu", "collect-now", "--source", "PIB"]).unwrap();
        if let Command::CollectNow(args) = cli.command {
            assert_eq!(args.source, Some("PIB".to_string()));
        } else {
            panic!("expected CollectNow");
        }
    }

    #[test]
    fn global_verbose_flag_is_parsed() {
        let cli = Cli::try_parse_from(["setu", "-vv", "run"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
