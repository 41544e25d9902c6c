use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use temp_heatmap::api::{DEFAULT_SOURCE_URL, DataSource};
use temp_heatmap::format::{CELSIUS, format_fixed1, map_locale};
use temp_heatmap::render::{self, ChartConfig, HeatmapChart};
use temp_heatmap::tooltip::TooltipBox;
use temp_heatmap::{palette, stats, storage};

#[derive(Parser, Debug)]
#[command(
    name = "heatmap",
    version,
    about = "Fetch global monthly temperature data and render it as a heatmap"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the heatmap (and optionally export data, dump the scene, print stats).
    Render(RenderArgs),
    /// Print the tooltip shown for one cell.
    Tooltip(TooltipArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// URL of the temperature document.
    #[arg(long, default_value = DEFAULT_SOURCE_URL, conflicts_with = "input")]
    url: String,
    /// Read the temperature document from a local file instead of the network.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Total request timeout in seconds (default: none).
    #[arg(long)]
    timeout: Option<u64>,
}

impl SourceArgs {
    fn source(&self) -> DataSource {
        match &self.input {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Remote(self.url.clone()),
        }
    }

    fn load(&self) -> Result<temp_heatmap::Dataset> {
        let source = self.source();
        source
            .load(self.timeout.map(Duration::from_secs))
            .with_context(|| format!("loading {}", source.describe()))
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Chart output path (.svg or .png).
    #[arg(long, default_value = "heatmap.svg")]
    plot: PathBuf,
    /// Width of the chart (default 1200).
    #[arg(long, default_value_t = 1200)]
    width: u32,
    /// Height of the chart (default 550).
    #[arg(long, default_value_t = 550)]
    height: u32,
    /// TrueType font for bitmap (.png) output.
    #[arg(long)]
    font: Option<PathBuf>,
    /// Locale for numbers (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Colours coldest-first, comma separated (e.g. "#313695,#ffffbf,#a50026").
    #[arg(long)]
    palette: Option<String>,
    /// Chart title.
    #[arg(long)]
    title: Option<String>,
    /// Save the normalized readings to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Dump the rendered scene (cells with metadata, axes, legend) as JSON.
    #[arg(long)]
    scene: Option<PathBuf>,
    /// Print per-month statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Args, Debug)]
struct TooltipArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Year of the cell.
    #[arg(long)]
    year: i32,
    /// Calendar month of the cell (1-12).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: u32,
    /// Locale for numbers.
    #[arg(long, default_value = "en")]
    locale: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Tooltip(args) => cmd_tooltip(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let dataset = args.source.load()?;

    let colors = match &args.palette {
        Some(spec) => palette::parse_palette(spec).context("invalid --palette")?,
        None => palette::default_palette(),
    };
    let config = ChartConfig {
        width: args.width,
        height: args.height,
        locale: args.locale.clone(),
        title: args
            .title
            .clone()
            .unwrap_or_else(|| render::DEFAULT_TITLE.to_string()),
        ..ChartConfig::default()
    };
    let chart = HeatmapChart::new(dataset, colors, config)?;

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(chart.dataset(), path)?,
            "json" => storage::save_json(chart.dataset(), path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", chart.dataset().len(), path.display());
    }

    render::export_chart(&chart, &args.plot, args.font.as_deref())
        .with_context(|| format!("rendering {}", args.plot.display()))?;
    eprintln!("Wrote plot to {}", args.plot.display());

    if let Some(path) = args.scene.as_ref() {
        let scene = chart.to_scene()?;
        std::fs::write(path, serde_json::to_string_pretty(&scene)?)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Wrote scene to {}", path.display());
    }

    if args.stats {
        let sep = chart.decimal_sep();
        println!("{}", chart.description());
        for s in stats::monthly_summary(chart.dataset()) {
            println!(
                "{:<9}  count={}  min={}{c}  max={}{c}  mean={}{c}  median={}{c}",
                s.month_name,
                s.count,
                format_fixed1(s.min, sep),
                format_fixed1(s.max, sep),
                format_fixed1(s.mean, sep),
                format_fixed1(s.median, sep),
                c = CELSIUS,
            );
        }
    }

    Ok(())
}

fn cmd_tooltip(args: TooltipArgs) -> Result<()> {
    let dataset = args.source.load()?;
    let month = args.month - 1;
    let (index, record) = dataset
        .records()
        .iter()
        .enumerate()
        .find(|(_, r)| r.year == args.year && r.month == month)
        .ok_or_else(|| anyhow::anyhow!("no reading for {}-{:02}", args.year, args.month))?;

    let config = temp_heatmap::tooltip::TooltipConfig {
        decimal_sep: map_locale(&args.locale).1,
        ..Default::default()
    };
    let mut tooltip = temp_heatmap::tooltip::TooltipController::new(
        TooltipBox::default(),
        dataset.base_temperature(),
        config,
    );
    tooltip.on_enter(index, record, render::Point::new(0.0, 0.0));
    for line in tooltip.overlay().lines() {
        println!("{line}");
    }
    Ok(())
}
