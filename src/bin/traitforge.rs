use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "traitforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one composite image plus its metadata record.
    #[command(alias = "g")]
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Variant selector: male|m, female|f (avatar) or banner|b.
    variant: String,

    /// Output image path; the extension picks the codec (png/jpeg/gif).
    #[arg(long, short = 'o', default_value = "nft.png")]
    output: PathBuf,

    /// Asset store root directory.
    #[arg(long, default_value = "data")]
    assets: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let variant = traitforge::Variant::parse_selector(&args.variant)
        .map_err(|e| anyhow::anyhow!("{e}. Run `traitforge help generate`"))?;

    let store = traitforge::FsAssetStore::new(&args.assets);
    let generator = traitforge::Generator::new(&store, variant);
    let (frame, attributes) = generator.generate()?;

    traitforge::encode::encode_to_file(&frame, &args.output)?;

    let out_dir = args
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let id = traitforge::metadata::count_png_outputs(out_dir);
    let record = traitforge::NftRecord::new(id, attributes);
    traitforge::metadata::write_record(&record, &args.output)?;

    for attr in &record.attributes {
        eprintln!("{}: {}", attr.trait_type, attr.value);
    }
    eprintln!("wrote {}", args.output.display());
    eprintln!(
        "wrote {}",
        traitforge::metadata::metadata_path(&args.output).display()
    );
    Ok(())
}
