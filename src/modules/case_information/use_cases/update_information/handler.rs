use crate::modules::case_information::adapters::mappers::information_row_mapper::flatten;
use crate::modules::case_information::adapters::outbound::command_gateway::CommandGateway;
use crate::modules::case_information::core::information::Information;
use crate::modules::case_information::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{debug, info};

pub struct UpdateInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    gateway: Arc<TGateway>,
}

impl<TGateway> UpdateInformationHandler<TGateway>
where
    TGateway: CommandGateway + 'static,
{
    pub fn new(gateway: Arc<TGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, information: &Information) -> Result<(), ApplicationError> {
        if !information.entity.is_persisted() {
            return Err(ApplicationError::Invalid(
                "update requires the id of a persisted record".to_string(),
            ));
        }
        debug!(id = %information.id(), "updating information");

        self.gateway.update_information(flatten(information)).await?;
        info!(id = %information.id(), "information updated");
        Ok(())
    }
}

#[cfg(test)]
mod update_information_handler_tests {
    use super::*;
    use crate::modules::case_information::adapters::mappers::information_row_mapper::reconstruct;
    use crate::modules::case_information::adapters::outbound::command_gateway_in_memory::InMemoryCommandGateway;
    use crate::modules::case_information::core::query::QueryOption;
    use crate::modules::case_information::use_cases::create_information::handler::CreateInformationHandler;
    use crate::tests::fixtures::information::{InformationBuilder, procuracy_fixture};
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<InMemoryCommandGateway>,
        CreateInformationHandler<InMemoryCommandGateway>,
        UpdateInformationHandler<InMemoryCommandGateway>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let gateway = Arc::new(InMemoryCommandGateway::new());
        let create = CreateInformationHandler::new(gateway.clone());
        let update = UpdateInformationHandler::new(gateway.clone());
        (gateway, create, update)
    }

    async fn stored(gateway: &InMemoryCommandGateway) -> Information {
        let (mut rows, _) = gateway
            .get_information_list(&QueryOption::default())
            .await
            .unwrap();
        reconstruct(rows.remove(0)).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_attach_a_sub_record_and_keep_the_identity(before_each: BeforeEachReturn) {
        let (gateway, create, update) = before_each;
        let id = create
            .handle(&InformationBuilder::new().build())
            .await
            .expect("create failed");
        let mut information = stored(&gateway).await;
        let created_at = information.entity.created_at;
        information.procuracy_information = Some(procuracy_fixture());
        information.plaintiff = "Nguyen Van C".to_string();

        update.handle(&information).await.expect("update failed");

        let updated = stored(&gateway).await;
        assert_eq!(updated.id(), id);
        assert_eq!(updated.entity.created_at, created_at);
        assert!(updated.entity.updated_at.is_some());
        assert_eq!(updated.plaintiff, "Nguyen Van C");
        assert_eq!(updated.procuracy_information, Some(procuracy_fixture()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_record_without_an_id(before_each: BeforeEachReturn) {
        let (_, _, update) = before_each;
        let result = update.handle(&InformationBuilder::new().build()).await;
        assert!(matches!(result, Err(ApplicationError::Invalid(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_the_seed_id_without_reaching_the_backend(
        before_each: BeforeEachReturn,
    ) {
        let (gateway, create, update) = before_each;
        create
            .handle(&InformationBuilder::new().build())
            .await
            .expect("create failed");
        let before = stored(&gateway).await;

        let mut seeded = InformationBuilder::new().id("0").build();
        seeded.plaintiff = "Nguyen Van C".to_string();
        let result = update.handle(&seeded).await;

        assert!(matches!(result, Err(ApplicationError::Invalid(_))));
        assert_eq!(stored(&gateway).await, before);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_an_unknown_id(before_each: BeforeEachReturn) {
        let (_, _, update) = before_each;
        let result = update
            .handle(&InformationBuilder::new().id("missing").build())
            .await;
        assert!(matches!(result, Err(ApplicationError::Gateway(_))));
    }
}
