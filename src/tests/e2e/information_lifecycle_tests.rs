use crate::modules::case_information::adapters::outbound::command_gateway_in_memory::InMemoryCommandGateway;
use crate::modules::case_information::core::information::{
    Information, InformationStatus, InvestigationBodyInformation,
};
use crate::modules::case_information::core::query::{FilterMode, QueryOption};
use crate::modules::case_information::use_cases::create_information::handler::CreateInformationHandler;
use crate::modules::case_information::use_cases::delete_information::handler::DeleteInformationHandler;
use crate::modules::case_information::use_cases::list_information::handler::ListInformationHandler;
use crate::modules::case_information::use_cases::update_information::handler::UpdateInformationHandler;
use crate::tests::fixtures::information::{InformationBuilder, procuracy_fixture};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

#[tokio::test]
async fn creates_and_lists_an_investigated_record() {
    let gateway = Arc::new(InMemoryCommandGateway::new());
    let create = CreateInformationHandler::new(gateway.clone());
    let list = ListInformationHandler::new(gateway);

    let information = Information::new(
        "AN01",
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        "A",
        "B",
    )
    .with_investigation(InvestigationBodyInformation::new(
        "I",
        "D1",
        Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        InformationStatus::Prosecution,
    ));

    let id = create.handle(&information).await.unwrap();
    assert!(!id.is_empty());

    let page = list
        .handle(FilterMode::All, QueryOption::default())
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    let record = &page.records[0];
    assert_eq!(record.id(), id);
    assert_eq!(
        record.investigation_information.as_ref().unwrap().status,
        InformationStatus::Prosecution
    );
    assert_eq!(record.procuracy_information, None);
}

#[tokio::test]
async fn refreshes_the_listing_after_each_mutation() {
    let gateway = Arc::new(InMemoryCommandGateway::new());
    let create = CreateInformationHandler::new(gateway.clone());
    let update = UpdateInformationHandler::new(gateway.clone());
    let delete = DeleteInformationHandler::new(gateway.clone());
    let list = ListInformationHandler::new(gateway);

    let ids: Vec<String> = {
        let mut ids = Vec::new();
        for (no, plaintiff) in [("AN01", "Hoang"), ("AN02", "Vu"), ("AN03", "Hoang Minh")] {
            let information = InformationBuilder::new()
                .acceptance_no(no)
                .plaintiff(plaintiff)
                .build();
            ids.push(create.handle(&information).await.unwrap());
        }
        ids
    };

    let unfiltered = list
        .handle(FilterMode::All, QueryOption::default())
        .await
        .unwrap();
    let searched = list
        .handle(FilterMode::All, QueryOption::default().with_search("hoang"))
        .await
        .unwrap();
    assert_eq!(unfiltered.total_count, 3);
    assert_eq!(searched.total_count, 2);
    assert!(searched.total_count <= unfiltered.total_count);

    let mut assigned = unfiltered.records[1].clone();
    assigned.procuracy_information = Some(procuracy_fixture());
    update.handle(&assigned).await.unwrap();

    let new_only = list
        .handle(FilterMode::New, QueryOption::default())
        .await
        .unwrap();
    assert_eq!(new_only.total_count, 2);
    assert!(new_only.records.iter().all(|r| r.id() != ids[1]));

    delete.handle(&ids).await.unwrap();
    let emptied = list
        .handle(FilterMode::All, QueryOption::default())
        .await
        .unwrap();
    assert!(emptied.records.is_empty());
    assert_eq!(emptied.total_count, 0);
}
