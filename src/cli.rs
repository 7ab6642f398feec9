use std::{io, path::PathBuf};

mod prompt;
mod shell;
mod terminal;

use clap::ArgAction;
use hospital::{Config, Registry};
use prompt::Terminal;
use shell::{OutputFormat, Shell, View};
use terminal::Palette;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for the listing actions
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.load_config()?;
        let palette = Palette::new(config.color);
        let view = View {
            title: config.title().to_string(),
            palette,
            format: self.output,
        };

        let mut shell = Shell::new(
            Registry::default(),
            Terminal::new(palette),
            io::stdout(),
            view,
        );
        shell.run()
    }

    #[instrument(skip(self))]
    fn load_config(&self) -> anyhow::Result<Config> {
        let Some(path) = &self.config else {
            return Ok(Config::default());
        };

        tracing::debug!(path = %path.display(), "loading config");
        Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the menu
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
