use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the terminal page and the /api endpoints
    Serve {
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,

        /// Directory holding index.html and the front-end assets
        #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
        public_dir: PathBuf,
    },

    /// Run one query through the pipeline and print the HTML fragment
    Ask {
        query: String,
    },

    /// List the known topics in prompt order
    Topics,
}
