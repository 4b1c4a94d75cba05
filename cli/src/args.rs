use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "natives")]
#[command(about = "Inspect and call registered native functions", long_about = None)]
pub struct Cli {
    /// Runtime configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every registered function with its signature
    List,
    /// Show the parameters of one function
    Describe {
        /// Function name
        name: String,
    },
    /// Call a function
    Call {
        /// Function name
        name: String,
        /// Arguments: `literal` binds positionally, `param=literal` by name
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
