use std::path::Path;

use clap::Parser;

use env_doctor::EnvDoctorError;
use env_doctor::cli::{self, Cli, EXIT_ERROR, logging, output};
use env_doctor::config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();
    let no_color_env = std::env::var_os("NO_COLOR").is_some();
    logging::init(args.verbose, !args.no_color && !no_color_env);

    let config = match AppConfig::load(args.config.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(e) => fail(&e, args.json),
    };

    let options = args.resolve(&config, no_color_env);
    if !options.color {
        colored::control::set_override(false);
    }

    match cli::check::execute(&options) {
        Ok(valid) => std::process::exit(cli::exit_code(valid, options.ci)),
        Err(e) => fail(&e, options.json),
    }
}

fn fail(err: &EnvDoctorError, json: bool) -> ! {
    if json {
        output::error_json(&err.to_string());
    } else {
        output::error(&format!("Error: {err}"));
    }
    std::process::exit(EXIT_ERROR);
}
