use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

use nucleo::StrandMode;

#[derive(Parser, Debug)]
#[command(name = "nucleo", version, about = "Nucleotide composition, reverse complements and k-mer counts", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["comp", "rc", "count", "translate"])))]
pub struct Cli {
    /// Print the nucleotide composition of a sequence file
    #[arg(long, value_name = "FILE")]
    pub comp: Option<PathBuf>,

    /// Print the reverse complement of a sequence
    #[arg(long, value_name = "SEQUENCE")]
    pub rc: Option<String>,

    /// Count k-mers over every record of a FASTA(.gz) file
    #[arg(long, value_name = "FILE")]
    pub count: Option<PathBuf>,

    /// Translate a DNA sequence to amino acids
    #[arg(long, value_name = "SEQUENCE")]
    pub translate: Option<String>,

    /// K-mer length (overrides the config file)
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Also report k-mers that never occur, with count 0
    #[arg(long)]
    pub all: bool,

    /// Fold counts onto canonical k-mers
    #[arg(long)]
    pub canonical: bool,

    /// With --canonical, keep every k-mer key and give it its pair's folded count
    #[arg(long, requires = "canonical")]
    pub return_all: bool,

    /// Source of the second count per window
    #[arg(long, value_enum)]
    pub strand: Option<StrandArg>,

    /// JSON file with counting options
    #[arg(long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Output format for k-mer counts
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Number of threads
    #[arg(long, default_value_t = num_cpus::get())]
    pub threads: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrandArg {
    Forward,
    ReverseComplement,
}

impl From<StrandArg> for StrandMode {
    fn from(arg: StrandArg) -> Self {
        match arg {
            StrandArg::Forward => StrandMode::Forward,
            StrandArg::ReverseComplement => StrandMode::ReverseComplement,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Json,
}
