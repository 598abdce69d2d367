use clap::Parser;

#[derive(Parser)]
#[command(
    name = "orion-safelist",
    version,
    about = "Print a Tailwind safelist of the classes used by the Orion ucode templates"
)]
pub struct Cli {
    /// Trace each template and its class count on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
