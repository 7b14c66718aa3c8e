use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use covid_stats::menu;
use covid_stats::report::DEFAULT_CHART_WIDTH;
use covid_stats::{ApiConfig, Client, Metric, Reporter};
use std::io;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "covid-stats",
    version,
    about = "Plot recent COVID-19 case and death counts as terminal bar charts"
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    /// Maximum number of columns for the tallest bar.
    #[arg(long, global = true, default_value_t = DEFAULT_CHART_WIDTH)]
    width: f64,
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Base URL of the data endpoint.
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Area type filter (e.g., nation, region).
    #[arg(long, global = true, default_value = "nation")]
    area_type: String,
    /// Area name filter (e.g., england, scotland).
    #[arg(long, global = true, default_value = "england")]
    area_name: String,
    /// Total request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default).
    Interactive,
    /// Print a single chart and exit.
    Chart(ChartArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MetricArg {
    Cases,
    Deaths,
}

impl From<MetricArg> for Metric {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Cases => Metric::Cases,
            MetricArg::Deaths => Metric::Deaths,
        }
    }
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Which daily count to plot.
    #[arg(short, long, value_enum)]
    metric: MetricArg,
    /// Number of weeks to look back.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=520))]
    weeks: u32,
}

impl SourceArgs {
    fn to_config(&self) -> ApiConfig {
        let defaults = ApiConfig::default();
        ApiConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            area_type: self.area_type.clone(),
            area_name: self.area_name.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !(cli.width > 0.0 && cli.width.is_finite()) {
        anyhow::bail!("--width must be a positive number, got {}", cli.width);
    }

    let client = Client::new(&cli.source.to_config())?;
    let reporter = Reporter::new(client).with_chart_width(cli.width);

    match cli.cmd.unwrap_or(Command::Interactive) {
        Command::Interactive => menu::run(&reporter, io::stdin().lock(), io::stdout().lock()),
        Command::Chart(args) => {
            let metric = Metric::from(args.metric);
            eprintln!(
                "Fetching {} for the last {} week(s)...",
                metric.noun(),
                args.weeks
            );
            print!("{}", reporter.chart(metric, args.weeks)?);
            Ok(())
        }
    }
}
