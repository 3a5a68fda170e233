use super::*;

#[test]
fn services_catalogue_order_and_ids() {
    let ids: Vec<&str> = SERVICES.iter().map(|s| s.id).collect();
    assert_eq!(ids, ["traffic", "waste", "energy", "parking"]);
}

#[test]
fn selected_service_none_when_closed() {
    assert_eq!(selected_service(ServiceDetailState::default()), None);
}

#[test]
fn selected_service_follows_open_and_close() {
    let mut state = ServiceDetailState::default();
    state.open(2);
    assert_eq!(selected_service(state).map(|s| s.title), Some("Smart Energy"));

    state.close();
    assert_eq!(selected_service(state), None);
}

#[test]
fn selected_service_ignores_out_of_range_index() {
    let mut state = ServiceDetailState::default();
    state.open(SERVICES.len());
    assert_eq!(selected_service(state), None);
}
