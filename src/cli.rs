use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "petfriends")]
#[command(author, version, about = "CLI for the PetFriends pet catalog API")]
#[command(propagate_version = true)]
pub struct Cli {
    /// API key from `petfriends key`
    #[arg(long, global = true, env = "PETFRIENDS_AUTH_KEY", hide_env_values = true)]
    pub auth_key: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "PETFRIENDS_API_URL")]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Verbose output (request logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Obtain an API key for an account
    Key(KeyArgs),

    /// Pet management
    #[command(subcommand)]
    Pets(PetCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Clone)]
pub struct KeyArgs {
    /// Account email
    #[arg(long, env = "PETFRIENDS_EMAIL")]
    pub email: String,

    /// Account password
    #[arg(long, env = "PETFRIENDS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Subcommand, Clone)]
pub enum PetCommands {
    /// List pets
    List {
        /// "all", "my_pets", or any raw value the server understands
        #[arg(long, default_value = "all")]
        filter: String,
    },

    /// Create a pet, optionally with a JPEG photo
    Create {
        #[command(flatten)]
        fields: PetFields,

        /// Path to a JPEG photo
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Update a pet's name, type and age
    Update {
        /// Pet ID
        id: String,

        #[command(flatten)]
        fields: PetFields,
    },

    /// Delete a pet
    Delete {
        /// Pet ID
        id: String,
    },

    /// Attach a JPEG photo to a pet
    Photo {
        /// Pet ID
        id: String,

        /// Path to a JPEG photo
        path: PathBuf,
    },
}

#[derive(Args, Clone, Debug)]
pub struct PetFields {
    /// Pet name
    #[arg(long)]
    pub name: String,

    /// Species or type
    #[arg(long)]
    pub animal_type: String,

    /// Age, passed to the server as-is
    #[arg(long)]
    pub age: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pets_create_with_photo() {
        let cli = Cli::try_parse_from([
            "petfriends",
            "--auth-key",
            "k",
            "pets",
            "create",
            "--name",
            "Кот",
            "--animal-type",
            "тигр",
            "--age",
            "10",
            "--photo",
            "images/cat.jpg",
        ])
        .unwrap();

        assert_eq!(cli.auth_key.as_deref(), Some("k"));
        match cli.command {
            Commands::Pets(PetCommands::Create { fields, photo }) => {
                assert_eq!(fields.name, "Кот");
                assert_eq!(fields.animal_type, "тигр");
                assert_eq!(fields.age, "10");
                assert_eq!(photo, Some(PathBuf::from("images/cat.jpg")));
            }
            _ => panic!("expected pets create"),
        }
    }

    #[test]
    fn test_parse_pets_list_default_filter() {
        let cli = Cli::try_parse_from(["petfriends", "pets", "list"]).unwrap();
        match cli.command {
            Commands::Pets(PetCommands::List { filter }) => assert_eq!(filter, "all"),
            _ => panic!("expected pets list"),
        }
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_update_requires_all_fields() {
        let result = Cli::try_parse_from(["petfriends", "pets", "update", "id-1", "--name", "Жора"]);
        assert!(result.is_err());
    }
}
