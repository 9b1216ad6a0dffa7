use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use langgen::generator::{DEFAULT_TABLE_NAME, DEFAULT_TYPE_NAME};
use langgen_cli::{GenerateOptions, run_generate_command, run_keys_command, run_validate_command};
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG: &str = "langgen.yml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a catalog and generate .strings tables and the Swift accessor module.
    Generate {
        /// The catalog file to compile
        #[arg(short, long, default_value = DEFAULT_CATALOG)]
        catalog: String,

        /// Catalog format (yaml, json, toml); inferred from the extension if omitted
        #[arg(long)]
        format: Option<String>,

        /// Directory that receives one <lang>.lproj directory per language
        #[arg(long, default_value = ".")]
        strings_output_dir: String,

        /// Directory that receives the generated Swift file
        #[arg(long, default_value = ".")]
        swift_output_dir: String,

        /// Name of the .strings table
        #[arg(long, default_value = DEFAULT_TABLE_NAME)]
        table_name: String,

        /// Name of the generated Swift type (and file)
        #[arg(long, default_value = DEFAULT_TYPE_NAME)]
        type_name: String,

        /// Fail if generated files on disk are out of date instead of writing them
        #[arg(long)]
        check: bool,
    },

    /// Validate a catalog without generating anything.
    Validate {
        /// The catalog file to validate
        #[arg(short, long, default_value = DEFAULT_CATALOG)]
        catalog: String,

        /// Catalog format (yaml, json, toml); inferred from the extension if omitted
        #[arg(long)]
        format: Option<String>,
    },

    /// Print the resource key and argument list derived for every entry.
    Keys {
        /// The catalog file to read
        #[arg(short, long, default_value = DEFAULT_CATALOG)]
        catalog: String,

        /// Catalog format (yaml, json, toml); inferred from the extension if omitted
        #[arg(long)]
        format: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions.
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.commands {
        Commands::Generate {
            catalog,
            format,
            strings_output_dir,
            swift_output_dir,
            table_name,
            type_name,
            check,
        } => run_generate_command(GenerateOptions {
            catalog,
            format,
            strings_output_dir,
            swift_output_dir,
            table_name,
            type_name,
            check,
        }),
        Commands::Validate { catalog, format } => run_validate_command(&catalog, format.as_deref()),
        Commands::Keys {
            catalog,
            format,
            json,
        } => run_keys_command(&catalog, format.as_deref(), json),
        Commands::Completions { shell } => {
            let mut command = Args::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
