mod cli;
mod render;
mod telemetry;

fn main() {
    let _telemetry = telemetry::init_tracing("warn");

    if let Err(e) = cli::run() {
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
