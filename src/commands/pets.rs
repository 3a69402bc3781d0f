use crate::cli::{OutputFormat, PetCommands};
use crate::client::PetFriendsClient;
use crate::error::ClientError;
use crate::exit_codes;
use crate::model::{AuthKey, PetFilter};
use crate::output::{print_json, print_response};
use crate::response::ApiResponse;
use anyhow::Result;

fn require_auth(auth_key: Option<&str>) -> Result<AuthKey, ClientError> {
    auth_key
        .filter(|k| !k.is_empty())
        .map(AuthKey::new)
        .ok_or(ClientError::MissingSetting("PETFRIENDS_AUTH_KEY"))
}

/// Handle pets subcommands
pub async fn handle(
    client: &PetFriendsClient,
    auth_key: Option<&str>,
    command: PetCommands,
    format: OutputFormat,
    verbose: bool,
) -> Result<i32> {
    let key = require_auth(auth_key)?;

    if verbose {
        eprintln!("[verbose] API URL: {}", client.base_url());
    }

    let response = match command {
        PetCommands::List { filter } => {
            let filter = PetFilter::from(filter.as_str());
            if verbose {
                eprintln!("[verbose] Filter: {}", filter);
            }
            client.list_pets(&key, &filter).await?
        }
        PetCommands::Create {
            fields,
            photo: Some(photo),
        } => {
            client
                .create_pet(&key, &fields.name, &fields.animal_type, &fields.age, photo)
                .await?
        }
        PetCommands::Create { fields, photo: None } => {
            client
                .create_pet_simple(&key, &fields.name, &fields.animal_type, &fields.age)
                .await?
        }
        PetCommands::Update { id, fields } => {
            client
                .update_pet(&key, &id, &fields.name, &fields.animal_type, &fields.age)
                .await?
        }
        PetCommands::Delete { id } => client.delete_pet(&key, &id).await?,
        PetCommands::Photo { id, path } => client.attach_photo(&key, &id, path).await?,
    };

    show(format, &response)?;
    Ok(exit_codes::from_status(response.status))
}

fn show(format: OutputFormat, response: &ApiResponse) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(response),
        OutputFormat::Table => print_response(format, response),
    }
}
