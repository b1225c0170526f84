//! Photo management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use estatehub_core::config::AppConfig;
use estatehub_core::error::AppError;
use estatehub_core::types::PropertyId;
use estatehub_entity::photo::{CreatePhoto, Photo, PhotoContentType, storage_path};
use estatehub_entity::property::cover_photo;
use estatehub_service::PhotoService;
use estatehub_storage::guess_image_content_type;

use crate::output::{self, OutputFormat};

/// Arguments for the photo command
#[derive(Debug, Args)]
pub struct PhotoArgs {
    /// Photo subcommand
    #[command(subcommand)]
    pub command: PhotoCommand,
}

/// Photo subcommands
#[derive(Debug, Subcommand)]
pub enum PhotoCommand {
    /// List a property's photos in position order
    List {
        /// Property ID
        property_id: PropertyId,
    },
    /// Register a file already placed at `<root>/photos/<property_id>/<filename>`
    Add {
        /// Property ID
        property_id: PropertyId,
        /// Filename inside the property's photo directory
        filename: String,
        /// Explicit position (defaults to the next free one)
        #[arg(long)]
        position: Option<i32>,
        /// Content type (guessed from the extension when omitted)
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Delete a photo record; the file stays on disk
    Delete {
        /// Property ID
        property_id: PropertyId,
        /// Filename of the photo
        filename: String,
    },
}

/// Table row for a photo
#[derive(Debug, Serialize, Tabled)]
pub struct PhotoRow {
    /// Position
    #[tabled(rename = "Pos")]
    pub position: i32,
    /// Filename
    #[tabled(rename = "Filename")]
    pub filename: String,
    /// Content type
    #[tabled(rename = "Type")]
    pub content_type: String,
    /// Size in bytes
    #[tabled(rename = "Bytes")]
    pub file_size: i64,
    /// Public URL
    #[tabled(rename = "URL")]
    pub url: String,
    /// Cover marker
    #[tabled(rename = "Cover")]
    pub cover: bool,
}

impl PhotoRow {
    /// Build a row for `photo`.
    pub fn new(photo: &Photo, cover: bool) -> Self {
        Self {
            position: photo.position,
            filename: photo.filename.clone(),
            content_type: photo.content_type.clone(),
            file_size: photo.file_size,
            url: photo.url(),
            cover,
        }
    }
}

/// Execute photo commands
pub async fn execute(
    args: &PhotoArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = PhotoService::new(super::open_store(config).await?);

    match &args.command {
        PhotoCommand::List { property_id } => {
            let photos = service.list_photos(*property_id).await?;
            let cover_id = cover_photo(&photos).map(|p| p.id);
            let rows: Vec<PhotoRow> = photos
                .iter()
                .map(|p| PhotoRow::new(p, Some(p.id) == cover_id))
                .collect();
            output::print_list(&rows, format);
        }
        PhotoCommand::Add {
            property_id,
            filename,
            position,
            content_type,
        } => {
            super::require_persistent_catalog(config, "photo add")?;
            let storage = estatehub_storage::build_provider(&config.storage).await?;
            let path = storage_path(*property_id, filename);
            let meta = storage.metadata(&path).await?;
            if meta.is_directory {
                return Err(AppError::validation(format!("{path} is a directory")));
            }

            let content_type = match content_type {
                Some(ct) => ct.parse::<PhotoContentType>()?.to_string(),
                None => guess_image_content_type(filename)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        AppError::validation(format!(
                            "Cannot guess content type of '{filename}'; pass --content-type"
                        ))
                    })?,
            };
            let file_size = i64::try_from(meta.size_bytes)
                .map_err(|_| AppError::validation("File is too large"))?;

            let photo = service
                .add_photo(CreatePhoto {
                    property_id: *property_id,
                    filename: filename.clone(),
                    content_type,
                    file_size,
                    position: *position,
                })
                .await?;
            output::print_item(&PhotoRow::new(&photo, false), format);
            output::print_success(&format!(
                "Photo registered at position {} ({}).",
                photo.position,
                photo.url()
            ));
        }
        PhotoCommand::Delete {
            property_id,
            filename,
        } => {
            super::require_persistent_catalog(config, "photo delete")?;
            service.delete_photo(*property_id, filename).await?;
            output::print_success(&format!(
                "Photo '{filename}' removed from property {property_id}."
            ));
        }
    }

    Ok(())
}
