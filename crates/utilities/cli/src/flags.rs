//! CLI flags for logging and the L1 confirmation depths.
//!
//! The confirmation depth flags mirror the `verifier.l1-confs` and `sequencer.l1-confs` flags of
//! the [`op-node`][op-node] CLI.
//!
//! [op-node]: https://github.com/ethereum-optimism/optimism/blob/develop/op-node/flags/flags.go

use crate::{LogConfig, LogFormat};
use clap::{ArgAction, Parser};
use kona_conf_depth::ConfDepthConfig;
use tracing::level_filters::LevelFilter;

/// L1 confirmation depth CLI Flags
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
pub struct ConfDepthArgs {
    /// Number of L1 blocks to keep distance from the L1 head before deriving L2 data from them.
    #[arg(
        long = "verifier.l1-confs",
        default_value = "0",
        env = "KONA_NODE_VERIFIER_L1_CONFS"
    )]
    pub verifier_l1_confs: u64,

    /// Number of L1 blocks to keep distance from the L1 head as a sequencer for picking an L1
    /// origin.
    #[arg(
        long = "sequencer.l1-confs",
        default_value = "4",
        env = "KONA_NODE_SEQUENCER_L1_CONFS"
    )]
    pub sequencer_l1_confs: u64,
}

impl Default for ConfDepthArgs {
    fn default() -> Self {
        // Construct default values using the clap parser.
        // This works since none of the cli flags are required.
        Self::parse_from::<[_; 0], &str>([])
    }
}

impl ConfDepthArgs {
    /// Creates a [`ConfDepthConfig`] from the [`ConfDepthArgs`].
    pub const fn config(&self) -> ConfDepthConfig {
        ConfDepthConfig::new(self.verifier_l1_confs, self.sequencer_l1_confs)
    }
}

/// Log-related CLI arguments.
///
/// Verbosity levels: 1=ERROR, 2=WARN, 3=INFO (default), 4=DEBUG, 5=TRACE.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
pub struct LogArgs {
    /// Increase logging verbosity (1=ERROR, 2=WARN, 3=INFO, 4=DEBUG, 5=TRACE).
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        default_value = "3",
        env = "KONA_NODE_LOG_LEVEL",
        global = true
    )]
    pub level: u8,

    /// Suppress stdout logging.
    #[arg(long = "quiet", short = 'q', global = true)]
    pub stdout_quiet: bool,

    /// Stdout log format.
    #[arg(
        long = "log-format",
        default_value = "full",
        env = "KONA_NODE_LOG_FORMAT",
        global = true
    )]
    pub stdout_format: LogFormat,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self::parse_from::<[_; 0], &str>([])
    }
}

impl From<LogArgs> for LogConfig {
    fn from(args: LogArgs) -> Self {
        let global_level = match args.level {
            0 => LevelFilter::OFF,
            1 => LevelFilter::ERROR,
            2 => LevelFilter::WARN,
            3 => LevelFilter::INFO,
            4 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        let stdout_format = (!args.stdout_quiet).then_some(args.stdout_format);

        Self { global_level, stdout_format }
    }
}
