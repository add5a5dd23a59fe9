use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use wav2karaoke_rs::{
    read_frequency_track, read_interval_tiers, read_syllable_rows, write_records, write_report,
    write_syllable_rows, write_syllable_textgrid, PipelineConfig, SyllableAligner,
    SyllableAlignerBuilder, SyllableReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    #[value(name = "textgrid")]
    TextGrid,
}

#[derive(Debug, Parser)]
#[command(name = "wav2karaoke")]
#[command(about = "Turn phone/word alignments and a pitch track into pitched syllables")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, ClapArgs)]
struct CommonArgs {
    /// JSON pipeline configuration; defaults are used when absent.
    #[arg(long, global = true, env = "WAV2KARAOKE_CONFIG")]
    config: Option<PathBuf>,
    /// Overrides `melody.confidence_quantile` from the configuration.
    #[arg(long, global = true, env = "WAV2KARAOKE_CONFIDENCE_QUANTILE")]
    confidence_quantile: Option<f64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Syllabify a TextGrid into `word,syllable,start,end,syl`.
    Syllabify {
        #[arg(short = 'g', long)]
        grid: PathBuf,
        #[arg(short = 'o', long)]
        out: PathBuf,
    },
    /// Attach pitch to an existing syllable CSV, rewriting it in place.
    Align {
        #[arg(short = 'f', long)]
        frequency: PathBuf,
        #[arg(short = 's', long)]
        syllables: PathBuf,
    },
    /// Syllabify and attach pitch in one go.
    Run {
        #[arg(short = 'g', long)]
        grid: PathBuf,
        #[arg(short = 'f', long)]
        frequency: PathBuf,
        #[arg(short = 'o', long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

fn main() {
    wav2karaoke_rs::logging::init();
    if let Err(err) = run() {
        eprintln!("wav2karaoke: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = load_config(&cli.common)?;
    let aligner = SyllableAlignerBuilder::new(config)
        .build()
        .map_err(|err| format!("failed to build syllable aligner: {err}"))?;

    match cli.command {
        Command::Syllabify { grid, out } => {
            let tiers = read_interval_tiers(&grid, aligner.config().time_decimals)
                .map_err(|err| format!("{}: {err}", grid.display()))?;
            let rows = aligner
                .syllabify(&tiers)
                .map_err(|err| format!("{}: syllabification failed: {err}", grid.display()))?;
            write_syllable_rows(&out, &rows).map_err(|err| format!("{}: {err}", out.display()))?;
            println!("{}", out.display());
        }
        Command::Align {
            frequency,
            syllables,
        } => {
            let track = read_frequency_track(&frequency)
                .map_err(|err| format!("{}: {err}", frequency.display()))?;
            let rows = read_syllable_rows(&syllables)
                .map_err(|err| format!("{}: {err}", syllables.display()))?;
            let records = aligner.attach_melody(rows, &track);
            write_records(&syllables, &records)
                .map_err(|err| format!("{}: {err}", syllables.display()))?;
            println!("{}", syllables.display());
        }
        Command::Run {
            grid,
            frequency,
            out,
            format,
        } => run_full(&aligner, &grid, &frequency, &out, format)?,
    }
    Ok(())
}

fn run_full(
    aligner: &SyllableAligner,
    grid: &Path,
    frequency: &Path,
    out: &Path,
    format: OutputFormat,
) -> Result<(), String> {
    let tiers = read_interval_tiers(grid, aligner.config().time_decimals)
        .map_err(|err| format!("{}: {err}", grid.display()))?;
    let track =
        read_frequency_track(frequency).map_err(|err| format!("{}: {err}", frequency.display()))?;
    let records = aligner
        .run(&tiers, &track)
        .map_err(|err| format!("{}: alignment failed: {err}", grid.display()))?;

    let written = match format {
        OutputFormat::Csv => write_records(out, &records),
        OutputFormat::Json => {
            let report = SyllableReport::new(
                grid,
                frequency,
                aligner.config().melody.confidence_quantile,
                records,
            );
            write_report(out, &report)
        }
        OutputFormat::TextGrid => write_syllable_textgrid(out, &tiers, &records),
    };
    written.map_err(|err| format!("{}: {err}", out.display()))?;
    println!("{}", out.display());
    Ok(())
}

fn load_config(args: &CommonArgs) -> Result<PipelineConfig, String> {
    let mut config = match args.config.as_ref() {
        Some(path) => PipelineConfig::load(path)
            .map_err(|err| format!("{}: {err}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(quantile) = args.confidence_quantile {
        config.melody.confidence_quantile = quantile;
    }
    config
        .validate()
        .map_err(|err| format!("invalid configuration: {err}"))?;
    Ok(config)
}
