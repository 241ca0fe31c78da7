// In memory implementation of the CommandGateway port.
//
// Purpose
// - Support use case tests and local development without the desktop backend.
//
// Responsibilities
// - Assign identities and lifecycle stamps the way the backend does.
// - Enforce the unique acceptance number.
// - Answer both listings with search, ordering by creation time and offset pagination.
// - Write the export document for the requested acceptance date range.

use crate::modules::case_information::adapters::outbound::command_gateway::{
    CREATE_INFORMATION, CommandGateway, DELETE_INFORMATION, EXPORT_EXCEL, ExportRequest,
    GET_INFORMATION_LIST, GET_NEW_INFORMATION_LIST, GatewayError, UPDATE_INFORMATION,
};
use crate::modules::case_information::adapters::outbound::information_row::{
    InformationRow, RawInformationList,
};
use crate::modules::case_information::core::query::{Order, QueryOption};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryCommandGateway {
    rows: RwLock<Vec<InformationRow>>,
    is_offline: bool,
    delay_ms: AtomicU64,
}

impl InMemoryCommandGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays every command by `ms` before it touches the store.
    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, AtomicOrdering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    async fn enter(&self, command: &'static str) -> Result<(), GatewayError> {
        let delay = self.delay_ms.load(AtomicOrdering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline {
            return Err(GatewayError::new(command, "backend offline"));
        }
        Ok(())
    }

    async fn list_where(
        &self,
        query: &QueryOption,
        selected: impl Fn(&InformationRow) -> bool,
        searchable: fn(&InformationRow) -> Vec<Option<&str>>,
    ) -> RawInformationList {
        let guard = self.rows.read().await;
        let needle = query.search.as_deref().map(str::to_lowercase);

        let mut items: Vec<&InformationRow> = guard
            .iter()
            .filter(|row| selected(*row))
            .filter(|row| match &needle {
                Some(needle) => searchable(*row)
                    .into_iter()
                    .flatten()
                    .any(|value| value.to_lowercase().contains(needle)),
                None => true,
            })
            .collect();

        match query.order {
            Order::Asc => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            Order::Desc => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        let total = items.len() as i64;
        let page: Vec<InformationRow> = items
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();

        // The backend computes the total as a window over the returned rows.
        if page.is_empty() {
            (page, None)
        } else {
            (page, Some(total))
        }
    }
}

fn all_searchable(row: &InformationRow) -> Vec<Option<&str>> {
    vec![
        Some(row.acceptance_no.as_str()),
        Some(row.plaintiff.as_str()),
        Some(row.defendant.as_str()),
        row.inv_investigator.as_deref(),
        row.pro_procurator.as_deref(),
        row.inv_designation_no.as_deref(),
        row.pro_designation_no.as_deref(),
    ]
}

fn root_searchable(row: &InformationRow) -> Vec<Option<&str>> {
    vec![
        Some(row.acceptance_no.as_str()),
        Some(row.plaintiff.as_str()),
        Some(row.defendant.as_str()),
    ]
}

fn is_new(row: &InformationRow) -> bool {
    row.inv_investigator.is_none()
        && row.inv_designation_no.is_none()
        && row.pro_procurator.is_none()
        && row.pro_designation_no.is_none()
}

#[async_trait::async_trait]
impl CommandGateway for InMemoryCommandGateway {
    async fn create_information(&self, mut row: InformationRow) -> Result<String, GatewayError> {
        self.enter(CREATE_INFORMATION).await?;
        let mut guard = self.rows.write().await;
        if guard.iter().any(|r| r.acceptance_no == row.acceptance_no) {
            return Err(GatewayError::new(
                CREATE_INFORMATION,
                format!("acceptance_no {} already exists", row.acceptance_no),
            ));
        }

        // Stamps stay strictly increasing so creation order is the listing order.
        let now = Utc::now().timestamp_millis();
        let last = guard.iter().filter_map(|r| r.created_at).max();
        let created_at = last.map_or(now, |last| now.max(last + 1));

        let id = Uuid::now_v7().to_string();
        row.id = id.clone();
        row.created_at = Some(created_at);
        row.updated_at = None;
        row.deleted_at = None;
        guard.push(row);
        Ok(id)
    }

    async fn update_information(&self, mut row: InformationRow) -> Result<(), GatewayError> {
        self.enter(UPDATE_INFORMATION).await?;
        let mut guard = self.rows.write().await;
        if guard
            .iter()
            .any(|r| r.id != row.id && r.acceptance_no == row.acceptance_no)
        {
            return Err(GatewayError::new(
                UPDATE_INFORMATION,
                format!("acceptance_no {} already exists", row.acceptance_no),
            ));
        }
        let Some(stored) = guard.iter_mut().find(|r| r.id == row.id) else {
            return Err(GatewayError::new(
                UPDATE_INFORMATION,
                format!("no information with id {}", row.id),
            ));
        };
        row.created_at = stored.created_at;
        row.updated_at = Some(Utc::now().timestamp_millis());
        row.deleted_at = stored.deleted_at;
        *stored = row;
        Ok(())
    }

    async fn get_information_list(
        &self,
        query: &QueryOption,
    ) -> Result<RawInformationList, GatewayError> {
        self.enter(GET_INFORMATION_LIST).await?;
        Ok(self.list_where(query, |_| true, all_searchable).await)
    }

    async fn get_new_information_list(
        &self,
        query: &QueryOption,
    ) -> Result<RawInformationList, GatewayError> {
        self.enter(GET_NEW_INFORMATION_LIST).await?;
        Ok(self.list_where(query, is_new, root_searchable).await)
    }

    async fn delete_information(&self, ids: &[String]) -> Result<(), GatewayError> {
        self.enter(DELETE_INFORMATION).await?;
        self.rows.write().await.retain(|row| !ids.contains(&row.id));
        Ok(())
    }

    async fn export_excel(&self, request: ExportRequest) -> Result<String, GatewayError> {
        self.enter(EXPORT_EXCEL).await?;
        let mut rows: Vec<InformationRow> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| (request.from..=request.to).contains(&row.accepted_at))
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.accepted_at);

        let document = serde_json::to_vec_pretty(&rows)
            .map_err(|e| GatewayError::new(EXPORT_EXCEL, e.to_string()))?;
        tokio::fs::write(&request.path, document)
            .await
            .map_err(|e| GatewayError::new(EXPORT_EXCEL, e.to_string()))?;
        Ok(request.path)
    }
}
