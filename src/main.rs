mod cli_main;

use std::collections::BTreeMap;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

use cli_main::{Cli, OutputFormat};
use nucleo::io::fasta::read_fasta;
use nucleo::kmer::table::{sorted_entries, Count, CountTable};
use nucleo::kmer::{canonical_kmers, count_kmers_many, reverse_complement};
use nucleo::seq::composition::nt_composition_file;
use nucleo::seq::translate::{translate_lenient, CodonTable};
use nucleo::{CountConfig, NucleoError, Result};

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(path) = &cli.comp {
        debug!("Computing composition of {}", path.display());
        let comp = nt_composition_file(path)?;
        let total = comp.total() as f64;
        for (nt, count) in comp.iter() {
            writeln!(out, "{} {} ({:.6})", nt, count, count as f64 / total)?;
        }
    } else if let Some(seq) = &cli.rc {
        writeln!(out, "{}", reverse_complement(seq)?)?;
    } else if let Some(seq) = &cli.translate {
        writeln!(out, "{}", translate_lenient(seq, CodonTable::standard())?)?;
    } else if let Some(path) = &cli.count {
        let config = count_config(&cli)?;
        ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .map_err(|e| NucleoError::Config(e.to_string()))?;

        info!("Counting {}-mers in {}", config.k, path.display());
        let sequences: Vec<String> = read_fasta(path)?.into_iter().map(|r| r.sequence).collect();
        let raw = count_kmers_many(&sequences, &config)?;

        if cli.canonical {
            write_table(&mut out, &canonical_kmers(&raw, cli.return_all), cli.format)?;
        } else {
            write_table(&mut out, &raw, cli.format)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Defaults, then the JSON config file, then explicit flags.
fn count_config(cli: &Cli) -> Result<CountConfig> {
    let mut config = match &cli.config {
        Some(path) => CountConfig::from_json_file(path)?,
        None => CountConfig::default(),
    };
    if let Some(k) = cli.k {
        config.k = k;
    }
    if cli.all {
        config.exhaustive = true;
    }
    if let Some(strand) = cli.strand {
        config.strand = strand.into();
    }
    config.validate()?;
    Ok(config)
}

fn write_table<W: Write, C: Count + std::fmt::Display + serde::Serialize>(
    out: &mut W,
    table: &CountTable<C>,
    format: OutputFormat,
) -> Result<()> {
    let entries = sorted_entries(table);
    match format {
        OutputFormat::Tsv => {
            for (kmer, count) in entries {
                writeln!(out, "{}\t{}", kmer, count)?;
            }
        }
        OutputFormat::Json => {
            let ordered: BTreeMap<&str, C> = entries.into_iter().collect();
            serde_json::to_writer_pretty(&mut *out, &ordered)
                .map_err(|e| NucleoError::Io(e.into()))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
