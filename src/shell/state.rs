use crate::modules::case_information::adapters::outbound::command_gateway_in_memory::InMemoryCommandGateway;
use crate::modules::case_information::use_cases::create_information::handler::CreateInformationHandler;
use crate::modules::case_information::use_cases::delete_information::handler::DeleteInformationHandler;
use crate::modules::case_information::use_cases::export_information::handler::ExportInformationHandler;
use crate::modules::case_information::use_cases::list_information::handler::ListInformationHandler;
use crate::modules::case_information::use_cases::update_information::handler::UpdateInformationHandler;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateInformationHandler<InMemoryCommandGateway>>,
    pub update_handler: Arc<UpdateInformationHandler<InMemoryCommandGateway>>,
    pub delete_handler: Arc<DeleteInformationHandler<InMemoryCommandGateway>>,
    pub list_handler: Arc<ListInformationHandler<InMemoryCommandGateway>>,
    pub export_handler: Arc<ExportInformationHandler<InMemoryCommandGateway>>,
    pub default_limit: u64,
    pub export_directory: PathBuf,
}

impl AppState {
    pub fn new(
        gateway: Arc<InMemoryCommandGateway>,
        default_limit: u64,
        export_directory: PathBuf,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreateInformationHandler::new(gateway.clone())),
            update_handler: Arc::new(UpdateInformationHandler::new(gateway.clone())),
            delete_handler: Arc::new(DeleteInformationHandler::new(gateway.clone())),
            list_handler: Arc::new(ListInformationHandler::new(gateway.clone())),
            export_handler: Arc::new(ExportInformationHandler::new(gateway)),
            default_limit,
            export_directory,
        }
    }
}
