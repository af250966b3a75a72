use log::LevelFilter;
use shoal::error::ShellError;
use shoal::flags::Flags;
use shoal::shell::Shell;
use std::env;
use std::path::Path;

fn init_logging(flags: &Flags) {
    let level = if flags.is_set("debug") {
        LevelFilter::Debug
    } else if flags.is_set("quiet") {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(program_name: &str, args: &[String]) -> Result<i32, ShellError> {
    let mut flags = Flags::new();
    flags.parse(args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("shoal {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    init_logging(&flags);

    let mut shell = Shell::new(flags, program_name)?;
    shell.run()
}

fn main() {
    let mut args = env::args();
    let program_name = args
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("shoal")
        .to_string();
    let args: Vec<String> = args.collect();

    let code = match run(&program_name, &args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: 0: {}", program_name, e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
