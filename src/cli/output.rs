use colored::Colorize;

/// Print the run header.
pub fn header(version: &str, env_path: &str, example_path: &str) {
    println!("{}", format!("env-doctor v{version}").bold());
    println!();
    println!("Checking {env_path} against {example_path}...");
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print an error as a JSON payload on stdout.
pub fn error_json(msg: &str) {
    println!("{:#}", serde_json::json!({ "error": msg }));
}
