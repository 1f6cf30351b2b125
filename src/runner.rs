use std::ffi::OsString;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::cli::{self, Cli};
use crate::grid;

/// Parse `args` and generate the grid, returning the process exit code.
///
/// Argument errors are reported here and never reach the filesystem;
/// generation failures are returned to the caller.
pub fn entry<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match cli::parse_from(args) {
        Ok(cli) => run(cli).map(|()| 0),
        Err(err) => {
            err.report();
            Ok(err.exit_code())
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    debug!("seeding generator from OS entropy");
    let mut rng = StdRng::from_entropy();
    let summary = generate_with(&cli, &mut rng)?;
    println!("{}", summary);
    Ok(())
}

/// Run the generator with an explicit random source and return the line
/// reported to the user.
fn generate_with(cli: &Cli, rng: &mut StdRng) -> Result<String> {
    grid::generate(cli.shape(), &cli.output, rng)?;
    Ok(format!(
        "Generated input file with {} rows and {} columns at {}",
        cli.rows, cli.cols, cli.output
    ))
}
