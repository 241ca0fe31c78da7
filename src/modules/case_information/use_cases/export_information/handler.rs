use crate::modules::case_information::adapters::outbound::command_gateway::{
    CommandGateway, ExportRequest,
};
use crate::modules::case_information::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::to_epoch_millis;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Report file name for a range, e.g. `1704067200000-tin-bao-010124-310124.xlsx`.
pub fn default_export_file_name(
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
    now: &DateTime<Utc>,
) -> String {
    format!(
        "{}-tin-bao-{}-{}.xlsx",
        to_epoch_millis(now),
        from.format("%d%m%y"),
        to.format("%d%m%y")
    )
}

pub fn default_export_path(
    directory: &Path,
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
    now: &DateTime<Utc>,
) -> String {
    directory
        .join(default_export_file_name(from, to, now))
        .to_string_lossy()
        .into_owned()
}

pub struct ExportInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    gateway: Arc<TGateway>,
}

impl<TGateway> ExportInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    pub fn new(gateway: Arc<TGateway>) -> Self {
        Self { gateway }
    }

    /// Exports the records accepted within `[from, to]` and returns the saved path.
    pub async fn handle(
        &self,
        from: &DateTime<Utc>,
        to: &DateTime<Utc>,
        path: &str,
    ) -> Result<String, ApplicationError> {
        if from > to {
            return Err(ApplicationError::Invalid(
                "export range starts after it ends".to_string(),
            ));
        }
        if path.trim().is_empty() {
            return Err(ApplicationError::Invalid(
                "export destination path is empty".to_string(),
            ));
        }
        debug!(%from, %to, path, "exporting information");

        let saved = self
            .gateway
            .export_excel(ExportRequest {
                from: to_epoch_millis(from),
                to: to_epoch_millis(to),
                path: path.to_string(),
            })
            .await?;
        info!(path = %saved, "information exported");
        Ok(saved)
    }
}
