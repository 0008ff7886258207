use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_PORT, DEFAULT_PUBLIC_DIR};
use crate::store::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// JSON file holding the contacts
    #[arg(long, env = "CONTACTS_PATH", global = true, default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub data_path: String,

    /// Keep contacts in memory only, nothing is written to disk
    #[arg(long, global = true)]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web app
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory of static assets (css, images)
        #[arg(long, env = "PUBLIC_DIR", default_value_t = String::from(DEFAULT_PUBLIC_DIR))]
        public_dir: String,
    },

    #[command(flatten)]
    Book(BookCommand),
}

/// Commands that work directly on the contact file
#[derive(Subcommand, Debug)]
pub enum BookCommand {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Contact phone number (id-ID mobile format)
        #[arg(long)]
        phone: String,
    },
    /// List contacts in insertion order
    List,
    /// Show a single contact
    Show {
        /// Contact name
        #[arg(long)]
        name: String,
    },
    /// Edit the data of an existing contact
    /// Provide current contact name
    /// followed by as many fields as you wish to update
    Edit {
        /// Contact current name
        #[arg(long)]
        name: String,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update email address
        #[arg(long)]
        new_email: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn book_commands_parse_at_top_level() {
        let cli = Cli::try_parse_from(["contact-book", "delete", "--name", "Seli"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Book(BookCommand::Delete { name }) if name == "Seli"
        ));

        let cli = Cli::try_parse_from(["contact-book", "--in-memory", "list"]).unwrap();
        assert!(cli.in_memory);
        assert!(matches!(cli.command, Commands::Book(BookCommand::List)));
    }

    #[test]
    fn serve_takes_port() {
        let cli = Cli::try_parse_from(["contact-book", "serve", "--port", "8080"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: 8080, .. }));
    }
}
