//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use huffcode::compression::compress::run;
use huffcode::tools::cli::{huffopts_init, log_settings};
use huffcode::tools::text_io::STD_STREAM;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let opts = huffopts_init();

    // Keep stdout clean when the result itself goes there.
    let terminal = if opts.output_path() == Some(STD_STREAM) {
        TerminalMode::Stderr
    } else {
        TerminalMode::Stdout
    };
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        opts.verbose.level_filter(),
        Config::default(),
        terminal,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Could not start the terminal logger");
    }
    log_settings(&opts);

    //----- Figure out what we need to do and go do it
    if let Err(e) = run(&opts) {
        error!("Fatal error: {}", e);
        exit(1);
    }
    info!("Done.");
}
