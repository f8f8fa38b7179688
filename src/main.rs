use std::path::PathBuf;

use clap::Parser;

use extras_map::{ProcessOptions, EXTRAS_DIR, MANIFEST_FILE, OUTPUT_FILE};

#[derive(Parser)]
#[command(name = "extras-map", version, about = "Map dated extras to the next manifest entry")]
struct Cli {
    /// Manifest with the dated tracks
    #[arg(short, long, default_value = MANIFEST_FILE)]
    manifest: PathBuf,

    /// Directory holding the extras media
    #[arg(short, long, default_value = EXTRAS_DIR)]
    extras_dir: PathBuf,

    /// Output JSON file (overwritten)
    #[arg(short, long, default_value = OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = ProcessOptions {
        manifest: cli.manifest,
        extras_dir: cli.extras_dir,
        output: cli.output,
    };

    let result = extras_map::process(&options)?;

    println!("✅ Wrote {} with {} entries", options.output.display(), result.entries);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["extras-map"]).unwrap();
        assert_eq!(cli.manifest, PathBuf::from(MANIFEST_FILE));
        assert_eq!(cli.extras_dir, PathBuf::from(EXTRAS_DIR));
        assert_eq!(cli.output, PathBuf::from(OUTPUT_FILE));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from(["extras-map", "-m", "set.json", "--extras-dir", "media", "-o", "out.json"])
            .unwrap();
        assert_eq!(cli.manifest, PathBuf::from("set.json"));
        assert_eq!(cli.extras_dir, PathBuf::from("media"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_cli_rejects_positionals() {
        assert!(Cli::try_parse_from(["extras-map", "manifest.json"]).is_err());
    }
}
