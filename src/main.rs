use clap::Parser;
use codecommit_mover::{mover_main, MoverCli};
use std::process::exit;

#[tokio::main]
async fn main() {
    let cli = MoverCli::parse();
    env_logger::builder()
        .filter_level(cli.log_level())
        .format_target(false)
        .format_timestamp(None)
        .init();
    let verbose = cli.verbose > 0;
    match mover_main(cli).await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            if verbose {
                eprintln!("{e:#?}");
            } else {
                eprintln!("{e}");
            }
            exit(1);
        }
    };
}
