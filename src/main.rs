use std::{io};
use io::{Write};

use netdoc::shell::{Config, Shell};

fn main() -> io::Result<()> {
    let config = Config::from_env();
    env_logger::Builder::new().parse_filters(&config.log_filter).init();
    log::debug!("starting with {:?}", config);
    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let mut shell = Shell::new(config);
    writeln!(output, "netdoc: type `help` for commands")?;
    while !shell.is_complete {
        shell.step(&mut input, &mut output)?;
    }
    Ok(())
}
