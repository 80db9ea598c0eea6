use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_dots::prelude::*;

fn main() -> Result<()> {
    // Initialize program options and environment.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }
    let options = DotsOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_level.clone().unwrap_or("warn".into()).as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    // Run the menus on the terminal.
    let settings = options.settings()?;
    let mut console = TextConsole::stdio();
    if let Err(e) = Shell::new(settings).run(&mut console) {
        log::error!("fatal error: {}", e);
        return Err(e);
    }
    Ok(())
}
