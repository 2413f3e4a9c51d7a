use crate::modules::attendance::adapters::outbound::remote_repository::RemoteAttendanceRepository;
use crate::modules::attendance::application::attendance_service::AttendanceService;
use crate::modules::attendance::application::errors::AttendanceError;
use crate::modules::attendance::core::policy::{ReconcilePolicy, UnknownStudentPolicy};
use crate::modules::attendance::core::record::AttendanceDocument;
use crate::modules::attendance::core::student::AttendanceStatus;
use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::remote_collection::in_memory::{
    InMemoryRemoteCollection, RemoteOperation,
};
use crate::tests::fixtures::records::{RosterBuilder, day, seeded_collection};
use std::sync::Arc;

type Collection = InMemoryRemoteCollection<AttendanceDocument>;

const TODAY: &str = "2025-02-03";

fn service(collection: Arc<Collection>, policy: ReconcilePolicy) -> AttendanceService {
    AttendanceService::new(
        Arc::new(RemoteAttendanceRepository::new(collection)),
        Arc::new(FixedClock(day(TODAY))),
        policy,
    )
}

#[tokio::test]
async fn marks_a_day_then_edits_it_through_create_and_replace() {
    let collection = Arc::new(seeded_collection());
    let service = service(collection.clone(), ReconcilePolicy::default());
    let stored_before = collection.documents().await.len();

    let roster = service
        .mark_status(day(TODAY), 4, AttendanceStatus::Present)
        .await
        .unwrap();
    assert_eq!(roster, RosterBuilder::new().present(4, "Danish").build());
    assert!(matches!(
        collection.writes().await.as_slice(),
        [RemoteOperation::Create { .. }]
    ));

    let roster = service
        .mark_status(day(TODAY), 2, AttendanceStatus::Leave)
        .await
        .unwrap();
    assert_eq!(
        roster,
        RosterBuilder::new()
            .leave(2, "Bilal")
            .present(4, "Danish")
            .build()
    );

    let roster = service.remove_student(day(TODAY), 2).await.unwrap();
    assert_eq!(roster, RosterBuilder::new().present(4, "Danish").build());

    let writes = collection.writes().await;
    assert_eq!(writes.len(), 3);
    assert!(
        writes[1..]
            .iter()
            .all(|op| matches!(op, RemoteOperation::Replace { .. }))
    );
    assert_eq!(collection.documents().await.len(), stored_before + 1);
    assert_eq!(service.get_day(day(TODAY)).await.unwrap(), roster);
}

#[tokio::test]
async fn an_empty_collection_knows_no_students_unless_admitted() {
    let strict = service(Arc::new(Collection::new()), ReconcilePolicy::default());
    let result = strict
        .mark_status(day(TODAY), 4, AttendanceStatus::Present)
        .await;
    assert_eq!(result, Err(AttendanceError::UnknownStudent(4)));

    let collection = Arc::new(Collection::new());
    let lenient = service(
        collection.clone(),
        ReconcilePolicy {
            unknown_student: UnknownStudentPolicy::Admit,
            ..ReconcilePolicy::default()
        },
    );
    let roster = lenient
        .mark_status(day(TODAY), 4, AttendanceStatus::Present)
        .await
        .unwrap();
    assert_eq!(roster, RosterBuilder::new().present(4, "Student 4").build());

    // Once written, the placeholder is history and resolves like any other name.
    let roster = lenient
        .mark_status(day(TODAY), 4, AttendanceStatus::Absent)
        .await
        .unwrap();
    assert_eq!(roster, RosterBuilder::new().absent(4, "Student 4").build());
    assert_eq!(collection.documents().await.len(), 1);
}

#[tokio::test]
async fn concurrent_edits_of_one_day_lose_an_update() {
    let mut collection = seeded_collection();
    collection.set_delay_write_ms(20);
    let collection = Arc::new(collection);
    let service = service(collection.clone(), ReconcilePolicy::default());

    service
        .mark_status(day(TODAY), 1, AttendanceStatus::Present)
        .await
        .unwrap();

    // Both callers read the one-student roster before either write lands.
    let (left, right) = tokio::join!(
        service.mark_status(day(TODAY), 2, AttendanceStatus::Present),
        service.mark_status(day(TODAY), 3, AttendanceStatus::Absent),
    );
    assert_eq!(left.unwrap().len(), 2);
    assert_eq!(right.unwrap().len(), 2);

    let roster = service.get_day(day(TODAY)).await.unwrap();
    let ids: Vec<_> = roster.iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), 2, "last writer wins, one update is lost");
    assert_eq!(ids[0], 1);
    assert!(ids[1] == 2 || ids[1] == 3);
}
