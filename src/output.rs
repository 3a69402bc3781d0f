use crate::cli::OutputFormat;
use crate::model::{Pet, PetList};
use crate::response::{ApiResponse, ResponseBody};
use console::{Style, style};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Tabled, Serialize, PartialEq)]
pub struct PetRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "TYPE")]
    pub animal_type: String,
    #[tabled(rename = "AGE")]
    pub age: String,
    #[tabled(rename = "PHOTO")]
    pub photo: String,
}

impl From<&Pet> for PetRow {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            animal_type: pet.animal_type.clone(),
            age: pet.age.clone(),
            photo: if pet.has_photo() { "yes" } else { "-" }.to_string(),
        }
    }
}

/// Render data as a table
pub fn render_table<T: Tabled>(data: Vec<T>) -> String {
    if data.is_empty() {
        return style("No items found").dim().to_string();
    }
    Table::new(data).to_string()
}

/// Print data as JSON
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Render a response body for the terminal.
///
/// Text bodies are shown verbatim. In table format, pet collections and
/// single pets become tables; any other JSON is pretty-printed.
pub fn render_body(format: OutputFormat, body: &ResponseBody) -> anyhow::Result<String> {
    let value = match body {
        ResponseBody::Text(text) => return Ok(text.clone()),
        ResponseBody::Json(value) => value,
    };

    if format == OutputFormat::Table {
        if let Ok(list) = serde_json::from_value::<PetList>(value.clone()) {
            return Ok(render_table(list.pets.iter().map(PetRow::from).collect()));
        }
        if let Ok(pet) = serde_json::from_value::<Pet>(value.clone()) {
            return Ok(render_table(vec![PetRow::from(&pet)]));
        }
    }

    Ok(serde_json::to_string_pretty(value)?)
}

/// Print status on stderr and the body on stdout
pub fn print_response(format: OutputFormat, response: &ApiResponse) -> anyhow::Result<()> {
    print_status(response.status);
    println!("{}", render_body(format, &response.body)?);
    Ok(())
}

/// Print the HTTP status line on stderr
pub fn print_status(status: u16) {
    let symbol = if (200..300).contains(&status) { "✓" } else { "✗" };
    let st = status_style(status);
    eprintln!("{} {}", st.apply_to(symbol), st.apply_to(format!("HTTP {}", status)));
}

/// Style for an HTTP status class
pub fn status_style(status: u16) -> Style {
    match status {
        200..=299 => Style::new().green().bold(),
        300..=399 => Style::new().cyan(),
        400..=499 => Style::new().yellow().bold(),
        _ => Style::new().red().bold(),
    }
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}
