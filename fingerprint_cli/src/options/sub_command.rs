use clap::Subcommand;
use fingerprint_identity::{ScriptSection, SpoofTier};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// generate a new fingerprint as JSON.
    GENERATE {
        /// The stealth tier: basic, advanced or ultra.
        #[clap(short, long, default_value = "basic")]
        tier: SpoofTier,
        /// Seed for a reproducible fingerprint.
        #[clap(short, long)]
        seed: Option<u64>,
        /// Indent the JSON output.
        #[clap(short, long)]
        pretty: bool,
        /// Write to a file instead of standard output.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// validate fingerprint JSON. Exits non-zero when invalid.
    VALIDATE {
        /// The fingerprint JSON file. Reads standard input when omitted.
        file: Option<PathBuf>,
        /// Also require the fingerprint to fit the bands of its tier.
        #[clap(long)]
        tier_check: bool,
    },
    /// copy a fingerprint with freshly drawn canvas and audio noise.
    CLONE {
        /// The fingerprint JSON file. Reads standard input when omitted.
        file: Option<PathBuf>,
        /// Indent the JSON output.
        #[clap(short, long)]
        pretty: bool,
        /// Write to a file instead of standard output.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// build the injectable spoofing script for a fingerprint.
    SCRIPT {
        /// The fingerprint JSON file. Reads standard input when omitted.
        file: Option<PathBuf>,
        /// Comma separated sections to leave out ex: "canvas,audio".
        #[clap(long, value_delimiter = ',')]
        skip: Vec<ScriptSection>,
        /// Write to a file instead of standard output.
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}
