use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::error;
use rand::Rng;

use ads_testdata::batch::{prepare_output_dir, run_batch, GeneratedFile, DEFAULT_BATCH};
use ads_testdata::error::GenError;
use ads_testdata::generator::SizedGenerator;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Directory the test files are written to
    #[clap(long, default_value = "test-files")]
    pub(crate) output_dir: PathBuf,

    /// Seed for reproducible files. Without it every run differs.
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn run<R: Rng>(
    cli: &Cli,
    mut generator: SizedGenerator<R>,
) -> Result<Vec<GeneratedFile>, GenError> {
    prepare_output_dir(&cli.output_dir)?;
    run_batch(&cli.output_dir, &DEFAULT_BATCH, &mut generator)
}

fn print_summary(cli: &Cli, files: &[GeneratedFile]) {
    let rule = "=".repeat(80);
    println!("\nAll test files generated in: {}", cli.output_dir.display());
    println!("\nSummary:");
    println!("{}", rule);
    for file in files {
        println!("{:<35} | {:>6}MB | {}", file.name, file.actual_mb, file.tier);
    }
    println!("{}", rule);
    println!("\nRecommended test plan:");
    println!("1. Upload GoogleAds_90jours_50MB.csv (should go through Netlify)");
    println!("2. Upload FacebookAds_90jours_120MB.csv (should go through Google Drive)");
    println!("3. Upload Shopify_Commandes_300MB.csv (longer upload)");
    println!("4. Upload Combined_AllPlatforms_600MB.csv (upper limit)");
    println!("\nTips:");
    println!("- Open the browser console (F12) to follow the upload logs");
    println!("- Google Drive uploads of the large files can take 2-5 minutes");
    println!("- Check your mailbox and Google Drive after each test");
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let res = match cli.seed {
        Some(seed) => run(&cli, SizedGenerator::from_seed(seed)),
        None => run(&cli, SizedGenerator::new()),
    };

    match res {
        Ok(files) => print_summary(&cli, &files),
        Err(e) => {
            error!("Generation failed: {}", e);
            process::exit(1);
        }
    }
}
