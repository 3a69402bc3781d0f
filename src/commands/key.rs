use crate::cli::{KeyArgs, OutputFormat};
use crate::client::PetFriendsClient;
use crate::exit_codes;
use crate::output::{print_json, print_response, print_status};
use anyhow::Result;

/// Obtain an API key and print it.
///
/// In table format a successful response prints only the key on stdout, so
/// `export PETFRIENDS_AUTH_KEY=$(petfriends key)` works.
pub async fn execute(
    client: &PetFriendsClient,
    args: KeyArgs,
    format: OutputFormat,
    verbose: bool,
) -> Result<i32> {
    if verbose {
        eprintln!("[verbose] API URL: {}", client.base_url());
        eprintln!("[verbose] Requesting key for {}", args.email);
    }

    let response = client.obtain_key(&args.email, &args.password).await?;

    match format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Table => match response.auth_key() {
            Ok(key) if response.is_success() => {
                print_status(response.status);
                println!("{}", key.as_str());
            }
            _ => print_response(format, &response)?,
        },
    }

    Ok(exit_codes::from_status(response.status))
}
