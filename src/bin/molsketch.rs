use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};

use molsketch::{
    bohr_model_for, parse_description, Analysis, Editor, EditorConfig, MatchKind, PALETTE,
};

#[derive(Parser, Debug)]
#[command(
    name = "molsketch",
    about = "Analyze hand-drawn molecules: formula, functional groups, valence, and a tutor prompt.",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// Molecule description (JSON). When omitted, stdin is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,
    /// Editor configuration (JSON). Missing fields keep their defaults.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Formula, identified name, functional groups, and open valences.
    Analyze(AnalyzeArgs),
    /// Print the tutor prompt for the molecule.
    Prompt,
    /// Shell occupancy and nucleus of one element.
    Bohr {
        /// Element symbol, case-sensitive (e.g. `Cl`).
        symbol: String,
    },
    /// List the element palette.
    Elements,
}

#[derive(Args, Debug, Default)]
struct AnalyzeArgs {
    /// Emit the analysis as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EditorConfig::default(),
    };

    let mut out = io::stdout().lock();
    match &cli.command {
        Command::Analyze(args) => {
            let editor = load_editor(cli.input.as_deref(), config)?;
            let analysis = editor.analysis();
            if args.json {
                serde_json::to_writer_pretty(&mut out, &analysis)
                    .context("failed to write JSON analysis")?;
                writeln!(out)?;
            } else {
                print_analysis(&mut out, &analysis)?;
            }
        }
        Command::Prompt => {
            let editor = load_editor(cli.input.as_deref(), config)?;
            match editor.explain_prompt() {
                Some(prompt) => writeln!(out, "{prompt}")?,
                None => bail!("the molecule has no atoms"),
            }
        }
        Command::Bohr { symbol } => {
            let Some(model) = bohr_model_for(symbol) else {
                bail!("unknown element symbol {symbol:?}");
            };
            let shells: Vec<String> = model
                .shells
                .iter()
                .map(|s| s.electrons.len().to_string())
                .collect();
            writeln!(out, "{} ({})", model.element.name(), model.element)?;
            writeln!(out, "  protons:   {}", model.protons)?;
            writeln!(out, "  neutrons:  {}", model.neutrons)?;
            writeln!(out, "  electrons: {}", model.electron_count())?;
            writeln!(out, "  shells:    {}", shells.join("-"))?;
        }
        Command::Elements => {
            writeln!(out, "{:<4}{:<12}{:>4}{:>7}  color", "sym", "name", "Z", "bonds")?;
            for el in PALETTE {
                writeln!(
                    out,
                    "{:<4}{:<12}{:>4}{:>7}  {}",
                    el.symbol(),
                    el.name(),
                    el.atomic_num(),
                    el.max_bonds(),
                    el.color()
                )?;
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(path: &Path) -> Result<EditorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    EditorConfig::from_json(&text)
        .with_context(|| format!("invalid config {}", path.display()))
}

fn load_editor(input: Option<&Path>, config: EditorConfig) -> Result<Editor> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read molecule from stdin")?;
            buf
        }
    };
    let desc = parse_description(&text)?;

    let mut editor = Editor::new(config);
    let report = editor.load(&desc);
    if report.dropped_bonds > 0 {
        log::info!(
            "loaded {} atoms and {} bonds, dropped {}",
            report.atoms,
            report.bonds,
            report.dropped_bonds
        );
    }
    Ok(editor)
}

fn print_analysis(out: &mut impl Write, analysis: &Analysis) -> Result<()> {
    writeln!(out, "formula:  {}", analysis.formula)?;
    match analysis.identification {
        Some(id) if id.kind == MatchKind::Ambiguous => {
            writeln!(out, "molecule: {} (uncertain)", id.molecule.name)?
        }
        Some(id) => writeln!(out, "molecule: {}", id.molecule.name)?,
        None => writeln!(out, "molecule: unknown")?,
    }

    if analysis.groups.is_empty() {
        writeln!(out, "groups:   none")?;
    } else {
        let names: Vec<&str> = analysis.groups.iter().map(|g| g.name()).collect();
        writeln!(out, "groups:   {}", names.join(", "))?;
    }

    if analysis.complete {
        writeln!(out, "valence:  complete")?;
    } else if analysis.unsatisfied.is_empty() {
        writeln!(out, "valence:  no bonds")?;
    } else {
        writeln!(out, "valence:  incomplete")?;
        for open in &analysis.unsatisfied {
            writeln!(out, "  {} {} needs {} more", open.element, open.atom, open.missing)?;
        }
    }
    Ok(())
}
