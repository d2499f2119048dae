use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Analyze a single extension, e.g. `vscan-cli scan ms-python.python`
    Scan {
        /// Extension reference in the form publisher.name
        extension: String,
        /// Submit only, do not wait for the analysis to complete
        #[clap(long)]
        no_wait: bool,
    },
    /// Analyze every enabled extension from the configuration
    Batch {
        /// Override the report output directory
        #[clap(short, long)]
        output: Option<String>,
        /// Submit only, do not wait for analyses to complete
        #[clap(long)]
        no_wait: bool,
    },
    /// List configured extensions
    List,
    /// Validate the configuration file
    Validate,
}
