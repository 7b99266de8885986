use std::env;
use std::error::Error;
use std::time::Instant;

use log::warn;

use ads_testdata::generator::SizedGenerator;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut generator = SizedGenerator::from_seed(42);
    let start = Instant::now();
    let report = generator.generate(env::temp_dir().join("ads-testdata-bench.csv"), 10.0)?;
    let elapsed = start.elapsed();

    warn!(
        "Generating {} rows ({}MB) took: {:.2?}",
        report.rows_written,
        report.actual_size_mb(),
        elapsed
    );

    Ok(())
}
