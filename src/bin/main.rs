use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use syntax_select::config::{load_settings, load_user_settings, merge_settings};
use syntax_select::text::{CharOffsetMapper, OffsetMapper, Utf16OffsetMapper};
use syntax_select::{
    CommandOutcome, EditorHost, MemoryHost, Range, SelectError, SelectResult, SelectionHistory,
    SmartSelect, SupportedLanguage,
};

/// Syntax-aware selection growing and shrinking using Tree-sitter
#[derive(Parser)]
#[command(name = "syntax-select")]
#[command(version)]
#[command(about = "Syntax-aware selection growing and shrinking using Tree-sitter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grow selections in a file step by step, then optionally shrink back
    Grow {
        /// The file to select in
        file: PathBuf,

        /// A selection as START or START..END, counted in --offsets units (repeatable)
        #[arg(short, long = "range", required = true, value_parser = parse_offsets)]
        ranges: Vec<(usize, usize)>,

        /// Unit of the offsets given in --range and printed in the output
        #[arg(long, value_enum, default_value_t = OffsetUnit::Chars)]
        offsets: OffsetUnit,

        /// Number of grow steps
        #[arg(long, default_value_t = 1)]
        steps: usize,

        /// Number of shrink steps after growing
        #[arg(long, default_value_t = 0)]
        shrink: usize,

        /// Language identifier (default: detected from the file extension)
        #[arg(long)]
        language: Option<String>,

        /// Settings file, layered over the user config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the steps as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the supported language identifiers
    Languages,
}

/// How offsets on the command line count text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OffsetUnit {
    /// Unicode scalar values
    Chars,
    /// UTF-16 code units, as LSP clients and JavaScript editors count
    Utf16,
}

impl OffsetUnit {
    fn mapper<'a>(self, text: &'a str) -> Box<dyn OffsetMapper + 'a> {
        match self {
            OffsetUnit::Chars => Box::new(CharOffsetMapper::new(text)),
            OffsetUnit::Utf16 => Box::new(Utf16OffsetMapper::new(text)),
        }
    }
}

#[derive(Debug, Serialize)]
struct StepReport {
    step: usize,
    action: &'static str,
    selections: Vec<SelectionReport>,
}

#[derive(Debug, Serialize)]
struct SelectionReport {
    start: usize,
    end: usize,
    text: String,
}

struct GrowRequest<'a> {
    file: &'a Path,
    ranges: &'a [(usize, usize)],
    unit: OffsetUnit,
    steps: usize,
    shrink: usize,
    language: Option<&'a str>,
    config: Option<&'a Path>,
}

fn parse_offsets(value: &str) -> Result<(usize, usize), String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid offset '{}': {}", part, e))
    };
    match value.split_once("..") {
        Some((start, end)) => {
            let (start, end) = (parse(start)?, parse(end)?);
            if start > end {
                return Err(format!("range start {} is after end {}", start, end));
            }
            Ok((start, end))
        }
        None => {
            let offset = parse(value)?;
            Ok((offset, offset))
        }
    }
}

fn report(host: &MemoryHost, unit: OffsetUnit, step: usize, action: &'static str) -> StepReport {
    let text = host.text().unwrap_or_default();
    let mapper = unit.mapper(text);
    let selections = host
        .selections()
        .into_iter()
        .filter_map(|range| {
            let (start, end) = mapper.byte_range_to_offsets(range)?;
            Some(SelectionReport {
                start,
                end,
                text: range.slice(text)?.to_string(),
            })
        })
        .collect();
    StepReport {
        step,
        action,
        selections,
    }
}

fn run_grow(request: GrowRequest<'_>) -> SelectResult<Vec<StepReport>> {
    let text = std::fs::read_to_string(request.file)?;

    let language_id = match request.language {
        Some(id) => id.to_string(),
        None => SupportedLanguage::from_path(request.file)
            .map(|language| language.id().to_string())
            .ok_or_else(|| SelectError::unknown_language(request.file.display().to_string()))?,
    };
    if SupportedLanguage::from_language_id(&language_id).is_none() {
        return Err(SelectError::unknown_language(language_id));
    }

    let explicit = request.config.map(load_settings).transpose()?;
    let settings = merge_settings(load_user_settings(), explicit).unwrap_or_default();

    let selections = {
        let mapper = request.unit.mapper(&text);
        request
            .ranges
            .iter()
            .map(|&(start, end)| {
                mapper
                    .offsets_to_byte_range(start, end)
                    .ok_or_else(|| SelectError::invalid_range(start, end))
            })
            .collect::<SelectResult<Vec<Range>>>()?
    };

    let select = SmartSelect::new(settings);
    let mut host = MemoryHost::new(text, language_id).with_selections(selections);
    let mut history = SelectionHistory::new();
    let mut reports = vec![report(&host, request.unit, 0, "initial")];

    for step in 1..=request.steps {
        if select.grow(&mut host, &mut history) != CommandOutcome::Applied {
            break;
        }
        // Deliver the change notification a real editor would send back
        select.selection_changed(&host.selections(), &mut history);
        reports.push(report(&host, request.unit, step, "grow"));
    }

    for step in 1..=request.shrink {
        if select.shrink(&mut host, &mut history) != CommandOutcome::Applied {
            break;
        }
        select.selection_changed(&host.selections(), &mut history);
        reports.push(report(&host, request.unit, step, "shrink"));
    }

    Ok(reports)
}

fn print_reports(reports: &[StepReport], json: bool) -> SelectResult<()> {
    if json {
        let rendered = serde_json::to_string_pretty(reports)
            .map_err(|e| SelectError::config(format!("cannot render JSON: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }
    for report in reports {
        for selection in &report.selections {
            println!(
                "{} {}\t{}..{}\t{:?}",
                report.action, report.step, selection.start, selection.end, selection.text
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Grow {
            file,
            ranges,
            offsets,
            steps,
            shrink,
            language,
            config,
            json,
        } => {
            let request = GrowRequest {
                file: &file,
                ranges: &ranges,
                unit: offsets,
                steps,
                shrink,
                language: language.as_deref(),
                config: config.as_deref(),
            };
            match run_grow(request).and_then(|reports| print_reports(&reports, json)) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Languages => {
            for language in SupportedLanguage::ALL {
                println!("{}", language.id());
            }
            ExitCode::SUCCESS
        }
    }
}
