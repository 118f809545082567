#[macro_use]
extern crate log;

use clap::App;
use clap::AppSettings;
use clap::Arg;
use intcnv_tools::cli;
use intcnv_tools::cli::Error;
use intcnv_tools::warn_stderr::Stderr;
use std::process;

fn main() {
    let matches = App::new("intcnv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Truncates a decimal integer to the bit width and signedness \
                of an integer type and prints the result")
        .setting(AppSettings::TrailingVarArg)
        .arg(Arg::with_name("strict")
            .short("s")
            .long("strict")
            .help("Fail instead of warning when VALUE isn't a plain decimal integer")
        )
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .multiple(true)
            .help("Log more, repeat for even more")
        )
        // Everything after TYPE is a value, even if it looks like a flag.
        .arg(Arg::with_name("ARGS")
            .help("TYPE (u8, i8, u16, i16, u32, i32, u64 or i64) followed by \
                   the decimal VALUE to convert")
            .multiple(true)
            .allow_hyphen_values(true)
        )
        .get_matches();

    intcnv_logger::init_with_verbosity(matches.occurrences_of("verbose"));

    let args: Vec<&str> = matches.values_of("ARGS")
        .map(|v| v.collect())
        .unwrap_or_default();
    if args.len() > 2 {
        warn!("ignoring extra arguments {:?}", &args[2..]);
    }
    let strict = matches.is_present("strict");
    let result = cli::run(
        &mut Stderr,
        args.get(0).cloned(),
        args.get(1).cloned(),
        strict,
    );
    match result {
        Ok(value) => println!("{}", value),
        Err(Error::MissingArguments) => {
            println!("{}", cli::USAGE);
            process::exit(Error::MissingArguments.exit_code());
        }
        Err(e) => {
            debug!("conversion failed: {:?}", e);
            eprintln!("error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
