//! Property management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use estatehub_core::config::AppConfig;
use estatehub_core::error::AppError;
use estatehub_core::types::PropertyId;
use estatehub_entity::property::{CreateProperty, PropertyGallery};
use estatehub_service::PropertyService;

use crate::output::{self, OutputFormat};

/// Arguments for the property command
#[derive(Debug, Args)]
pub struct PropertyArgs {
    /// Property subcommand
    #[command(subcommand)]
    pub command: PropertyCommand,
}

/// Property subcommands
#[derive(Debug, Subcommand)]
pub enum PropertyCommand {
    /// List all properties ordered by name
    List,
    /// Show a property and its photos
    Show {
        /// Property ID
        id: PropertyId,
    },
    /// Create a property
    Create {
        /// Display name (2 to 100 characters)
        name: String,
    },
    /// Delete a property and its photo records
    Delete {
        /// Property ID
        id: PropertyId,
    },
}

/// Table row for a property
#[derive(Debug, Serialize, Tabled)]
pub struct PropertyRow {
    /// ID
    #[tabled(rename = "ID")]
    pub id: PropertyId,
    /// Name
    #[tabled(rename = "Name")]
    pub name: String,
    /// Photo count
    #[tabled(rename = "Photos")]
    pub photos: usize,
    /// Cover photo filename
    #[tabled(rename = "Cover")]
    pub cover: String,
}

impl From<&PropertyGallery> for PropertyRow {
    fn from(gallery: &PropertyGallery) -> Self {
        Self {
            id: gallery.property.id,
            name: gallery.property.name.clone(),
            photos: gallery.photo_count(),
            cover: gallery
                .cover_photo()
                .map(|p| p.filename.clone())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute property commands
pub async fn execute(
    args: &PropertyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = PropertyService::new(super::open_store(config).await?);

    match &args.command {
        PropertyCommand::List => {
            let galleries = service.list_galleries().await?;
            let rows: Vec<PropertyRow> = galleries.iter().map(PropertyRow::from).collect();
            output::print_list(&rows, format);
        }
        PropertyCommand::Show { id } => {
            let gallery = service.get_gallery(*id).await?;
            match format {
                OutputFormat::Json => output::print_json(&gallery),
                OutputFormat::Table => {
                    output::print_kv("ID", &gallery.property.id.to_string());
                    output::print_kv("Name", &gallery.property.name);
                    output::print_kv("Photos", &gallery.photo_count().to_string());
                    output::print_kv(
                        "Cover position",
                        &gallery.cover_photo_position().to_string(),
                    );
                    let rows: Vec<super::photo::PhotoRow> = gallery
                        .photos()
                        .iter()
                        .map(|p| super::photo::PhotoRow::new(p, gallery.is_cover(p)))
                        .collect();
                    output::print_list(&rows, format);
                }
            }
        }
        PropertyCommand::Create { name } => {
            super::require_persistent_catalog(config, "property create")?;
            let property = service
                .create(CreateProperty { name: name.clone() })
                .await?;
            let gallery = PropertyGallery::new(property, Vec::new());
            output::print_item(&PropertyRow::from(&gallery), format);
            output::print_success(&format!("Property {} created.", gallery.property.id));
        }
        PropertyCommand::Delete { id } => {
            super::require_persistent_catalog(config, "property delete")?;
            service.delete(*id).await?;
            output::print_success(&format!("Property {id} deleted."));
        }
    }

    Ok(())
}
