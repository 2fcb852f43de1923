use futures::executor::block_on;

use super::*;
use crate::actions::mock_api::MockClinicApi;

#[test]
fn mock_source_serves_placeholder_dataset() {
    let source = MockReferenceSource;
    let pets = block_on(source.pets(42)).unwrap();
    let services = block_on(source.services()).unwrap();
    let vets = block_on(source.veterinarians()).unwrap();

    assert_eq!(pets.iter().map(|p| p.id).collect::<Vec<_>>(), vec![5, 6, 7, 8]);
    assert_eq!(pets[0].name, "Max");
    assert_eq!(services.len(), 6);
    assert_eq!(services[2].name, "Cirugía");
    assert_eq!(services[2].duration_minutes, 120);
    assert_eq!(vets.len(), 2);
    assert_eq!(vets[1].specialty, "Cirugía");
}

#[test]
fn remote_source_delegates_to_api() {
    let api = Arc::new(MockClinicApi::default());
    let source = RemoteReferenceSource::new(api.clone());

    let pets = block_on(source.pets(9)).unwrap();
    block_on(source.services()).unwrap();
    block_on(source.veterinarians()).unwrap();

    assert!(pets.is_empty());
    assert_eq!(api.calls(), vec!["list_pets:9", "list_services", "list_veterinarians"]);
}

#[test]
fn source_for_mock_mode_issues_no_backend_calls() {
    let api = Arc::new(MockClinicApi::default());
    let source = source_for(ReferenceDataMode::Mock, api.clone());
    let pets = block_on(source.pets(1)).unwrap();
    assert_eq!(pets.len(), 4);
    assert!(api.calls().is_empty());
}

#[test]
fn source_for_remote_mode_uses_backend() {
    let api = Arc::new(MockClinicApi::default());
    let source = source_for(ReferenceDataMode::Remote, api.clone());
    block_on(source.services()).unwrap();
    assert_eq!(api.calls(), vec!["list_services"]);
}
