use calm_map_be::models::{
    ImageKind, Organization, OrganizationPatch, UserParams, UserParamsPatch,
};
use uuid::Uuid;

#[test]
fn test_user_params_patch_applies_only_present_fields() {
    let mut params = UserParams {
        appearance: true,
        lighting: true,
        ..Default::default()
    };

    let patch: UserParamsPatch =
        serde_json::from_str(r#"{"lighting": false, "calmness": true}"#).unwrap();
    assert!(!patch.is_empty());
    patch.apply_to(&mut params);

    assert!(params.appearance); // absent from mask, untouched
    assert!(!params.lighting);
    assert!(params.calmness);
    assert!(!params.smell);
}

#[test]
fn test_user_params_patch_rejects_unknown_fields() {
    let result = serde_json::from_str::<UserParamsPatch>(r#"{"lihgting": false}"#);
    assert!(result.is_err());
}

#[test]
fn test_user_params_empty_patch_detected() {
    let patch: UserParamsPatch = serde_json::from_str("{}").unwrap();
    assert!(patch.is_empty());
}

#[test]
fn test_organization_patch_rejects_unknown_fields() {
    let result = serde_json::from_str::<OrganizationPatch>(r#"{"adress": "new street 1"}"#);
    assert!(result.is_err());
}

#[test]
fn test_organization_patch_partial() {
    let patch: OrganizationPatch =
        serde_json::from_str(r#"{"address": "new street 1", "longitude": 21.0}"#).unwrap();

    assert!(!patch.is_empty());
    assert_eq!(patch.address.as_deref(), Some("new street 1"));
    assert_eq!(patch.longitude, Some(21.0));
    assert_eq!(patch.latitude, None);
    assert_eq!(patch.organization_type, None);
}

#[test]
fn test_organization_empty_patch_detected() {
    let patch: OrganizationPatch = serde_json::from_str("{}").unwrap();
    assert!(patch.is_empty());
}

#[test]
fn test_image_kind_selects_matching_path() {
    let org = Organization {
        id: 1,
        owner_id: Uuid::nil(),
        address: "new street 1".into(),
        longitude: None,
        latitude: None,
        organization_type: "cafe".into(),
        map_path: Some("org_maps/org_1_map_1.png".into()),
        picture_path: None,
    };

    assert_eq!(ImageKind::Map.path_of(&org), Some("org_maps/org_1_map_1.png"));
    assert_eq!(ImageKind::Picture.path_of(&org), None);
}
