//! Generates a single file of the given size.
//! can be run with `cargo run --example generator -- <path> <megabytes>`

use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args.next().map_or_else(|| env::temp_dir().join("rand.csv"), PathBuf::from);
    let target_mb: f64 = args.next().map_or(Ok(1.0), |arg| arg.parse())?;

    let actual_mb = ads_testdata::generate(&path, target_mb)?;
    println!("{}: {}MB", path.display(), actual_mb);
    Ok(())
}
