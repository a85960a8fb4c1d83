//! wakachi - Japanese line-break segmentation CLI
//!
//! Usage:
//!   wakachi split "常に最新、最高のモバイル。"    One token per line
//!   wakachi split -s ' ' < input.txt           Space-separated, line by line
//!   wakachi html --class wbr "私は好きにした。"  Inline-block spans
//!   wakachi particles --prefix か               Continuations of a prefix

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, BufWriter, Write};
use wakachi::{HtmlOptions, Segmenter};

#[derive(Parser)]
#[command(name = "wakachi", version, about = "Split Japanese text into line-break friendly tokens")]
struct Cli {
    /// Extra particle pattern (`*` matches a run of kanji). Repeatable.
    #[arg(short, long = "particle", global = true, value_name = "PATTERN")]
    particles: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tokens, one per line or joined by a separator
    Split {
        /// Text to split; read from stdin line by line when absent
        text: Vec<String>,
        /// Join the tokens of each line with this string
        #[arg(short, long)]
        separator: Option<String>,
    },
    /// Wrap tokens in inline-block <span> elements
    Html {
        /// Text to wrap; read from stdin line by line when absent
        text: Vec<String>,
        /// Class attribute for every span
        #[arg(long = "class", value_name = "NAME")]
        class_name: Option<String>,
        /// Extra CSS appended after `display:inline-block`
        #[arg(long, value_name = "CSS")]
        style: Option<String>,
        /// Omit role="presentation"
        #[arg(long)]
        no_aria: bool,
        /// Escape token text as HTML
        #[arg(long)]
        escape: bool,
    },
    /// Inspect the particle table
    Particles {
        /// List what can follow this prefix
        #[arg(long, conflicts_with = "check")]
        prefix: Option<String>,
        /// Report whether WORD is a registered particle
        #[arg(long, value_name = "WORD")]
        check: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let segmenter = Segmenter::builder()
        .particles(cli.particles)
        .build()
        .context("Failed to build segmenter")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Split { text, separator } => for_each_input(&text, |line| {
            let tokens = segmenter.tokenize(line);
            match &separator {
                Some(sep) => writeln!(out, "{}", tokens.join(sep)),
                None => tokens.iter().try_for_each(|t| writeln!(out, "{t}")),
            }
        })?,
        Commands::Html {
            text,
            class_name,
            style,
            no_aria,
            escape,
        } => {
            let opts = HtmlOptions {
                class_name,
                style,
                aria: !no_aria,
                escape_text: escape,
            };
            for_each_input(&text, |line| writeln!(out, "{}", segmenter.to_html(line, &opts)))?;
        }
        Commands::Particles { prefix, check } => {
            cmd_particles(&segmenter, prefix.as_deref(), check.as_deref(), &mut out)?
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Run `f` on the joined positional text, or on every stdin line when there is none.
fn for_each_input(text: &[String], mut f: impl FnMut(&str) -> io::Result<()>) -> Result<()> {
    if !text.is_empty() {
        return f(&text.join(" ")).context("Failed to write output");
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        f(&line).context("Failed to write output")?;
    }
    Ok(())
}

fn cmd_particles(
    segmenter: &Segmenter,
    prefix: Option<&str>,
    check: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let trie = segmenter.trie();
    match (prefix, check) {
        (_, Some(word)) => {
            let verdict = if trie.is_particle(word) { "particle" } else { "not a particle" };
            writeln!(out, "{word}: {verdict}")?;
        }
        (Some(prefix), None) => {
            let continuations = trie.continuations_from(prefix);
            if continuations.is_empty() {
                tracing::warn!(prefix, "no particle continues this prefix");
            }
            for suffix in continuations {
                writeln!(out, "{prefix}{suffix}")?;
            }
        }
        (None, None) => {
            writeln!(
                out,
                "{} patterns, {} nodes",
                trie.len(),
                trie.node_count()
            )?;
            write!(out, "{trie}")?;
        }
    }
    Ok(())
}
