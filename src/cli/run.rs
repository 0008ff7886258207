use crate::{
    cli::{display_contact, list_row},
    config::Config,
    prelude::{
        AppError, ContactBook, ContactForm,
        command::{BookCommand, Cli, Commands},
        parse_store, validate_form,
    },
    web,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run_app() -> Result<(), AppError> {
    let Cli {
        data_path,
        in_memory,
        command,
    } = Cli::parse();

    // Terminal commands print their own results; keep the log quiet unless asked.
    let default_level = match command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    match command {
        Commands::Serve { port, public_dir } => {
            let config = Config {
                data_path,
                in_memory,
                port,
                public_dir,
            };
            web::start_server(config).await
        }
        Commands::Book(command) => {
            let book = ContactBook::new(parse_store(&data_path, in_memory)?);
            run_book_command(command, &book)
        }
    }
}

fn run_book_command(command: BookCommand, book: &ContactBook) -> Result<(), AppError> {
    match command {
        BookCommand::Add { name, email, phone } => {
            let form = ContactForm {
                name,
                email,
                phone,
                old_name: None,
            }
            .trimmed();

            reject_invalid(&form, book)?;
            book.add(form.into_contact())?;

            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts
        BookCommand::List => {
            let contacts = book.load_all()?;
            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in contacts.iter().enumerate() {
                println!("{}", list_row(i + 1, c));
            }
            Ok(())
        }

        BookCommand::Show { name } => {
            let contact = book
                .find_by_name(&name)?
                .ok_or(AppError::NotFound(name))?;

            println!("{}", display_contact(&contact));
            Ok(())
        }

        // Edit Contact
        BookCommand::Edit {
            name,
            new_name,
            new_email,
            new_phone,
        } => {
            let current = book
                .find_by_name(&name)?
                .ok_or_else(|| AppError::NotFound(name.clone()))?;

            let form = ContactForm {
                name: new_name.unwrap_or(current.name),
                email: new_email.unwrap_or(current.email),
                phone: new_phone.unwrap_or(current.phone),
                old_name: Some(name.clone()),
            }
            .trimmed();

            reject_invalid(&form, book)?;
            book.update(&name, form.into_contact())?;

            println!("Contact updated successfully");
            Ok(())
        }

        BookCommand::Delete { name } => {
            book.delete(&name)?;

            println!("Contact deleted successfully");
            Ok(())
        }
    }
}

fn reject_invalid(form: &ContactForm, book: &ContactBook) -> Result<(), AppError> {
    let errors = validate_form(form, book)?;
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors.join(" ")))
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: tests may run the app more than once per process
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
