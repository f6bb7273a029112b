use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "rowkind",
    about = "rowkind: inspect the SQL type <-> storage kind registry and convert values",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered kinds with their canonical and accepted types
    Kinds {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a declared column type (e.g. `VARCHAR(32)`) to a storage kind
    Resolve {
        /// Declared SQL type
        sql_type: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the canonical type and claims for one storage kind
    Describe {
        /// Storage kind: bool, int, uint, float, string, uuid, datetime, ...
        kind: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a value into a storage kind and encode it back
    Convert {
        /// Target storage kind
        #[arg(long)]
        kind: String,

        /// Input value text (ignored for `--as null`)
        #[arg(long, default_value = "")]
        value: String,

        /// Representation the input is handed over as
        #[arg(long = "as", value_enum, default_value_t = ShapeArg::Text)]
        shape: ShapeArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    Text,
}
