mod cli;
mod grid;
mod logging;
mod runner;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    let code = runner::entry(std::env::args_os())?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
