//! Mass-delete matrix: shape validation, scope authorization, and the
//! ordering between the two.

use anno_authz::{
    Action, Permission, SCOPE_ANNOTATIONS_TYPE_DASHBOARD, SCOPE_ANNOTATIONS_TYPE_ORGANIZATION,
};
use anno_service::MassDeleteRequest;
use anno_test_utils::{
    dashboard_annotation, organization_annotation, scoped_permission, seeded_store, service_over,
    user_with_permissions, FakeDashboardLookup,
};

struct Case {
    name: &'static str,
    permissions: Vec<Permission>,
    request: MassDeleteRequest,
    want: u16,
}

async fn run(case: Case) {
    let store = seeded_store(vec![dashboard_annotation(), organization_annotation()]).await;
    let service = service_over(store, FakeDashboardLookup::new().with_dashboard("home", 1));
    let user = user_with_permissions(case.permissions);

    let got = match service.mass_delete(&user, case.request).await {
        Ok(_) => 200,
        Err(e) => e.status_code(),
    };
    assert_eq!(got, case.want, "{}", case.name);
}

#[tokio::test]
async fn panel_without_dashboard_is_a_bad_request() {
    run(Case {
        name: "mass delete without dashboardId is not allowed",
        permissions: scoped_permission(
            Action::AnnotationsDelete,
            SCOPE_ANNOTATIONS_TYPE_ORGANIZATION,
        ),
        request: MassDeleteRequest {
            panel_id: 1,
            ..Default::default()
        },
        want: 400,
    })
    .await;
}

#[tokio::test]
async fn dashboard_without_panel_is_a_bad_request() {
    run(Case {
        name: "mass delete without panelId is not allowed",
        permissions: scoped_permission(
            Action::AnnotationsDelete,
            SCOPE_ANNOTATIONS_TYPE_ORGANIZATION,
        ),
        request: MassDeleteRequest {
            dashboard_id: 10,
            ..Default::default()
        },
        want: 400,
    })
    .await;
}

#[tokio::test]
async fn dashboard_and_panel_with_dashboard_scope_is_allowed() {
    run(Case {
        name: "mass delete with dashboardId and panelId is allowed",
        permissions: scoped_permission(Action::AnnotationsDelete, SCOPE_ANNOTATIONS_TYPE_DASHBOARD),
        request: MassDeleteRequest {
            dashboard_id: 1,
            panel_id: 1,
            ..Default::default()
        },
        want: 200,
    })
    .await;
}

#[tokio::test]
async fn empty_request_deletes_whole_org_with_org_scope() {
    run(Case {
        name: "mass delete without input deletes all organization annotations",
        permissions: scoped_permission(
            Action::AnnotationsDelete,
            SCOPE_ANNOTATIONS_TYPE_ORGANIZATION,
        ),
        request: MassDeleteRequest::default(),
        want: 200,
    })
    .await;
}

#[tokio::test]
async fn empty_request_without_org_scope_is_forbidden() {
    run(Case {
        name: "mass delete without organization scope is forbidden",
        permissions: scoped_permission(Action::AnnotationsDelete, SCOPE_ANNOTATIONS_TYPE_DASHBOARD),
        request: MassDeleteRequest::default(),
        want: 403,
    })
    .await;
}

#[tokio::test]
async fn annotation_id_resolves_to_dashboard_scope() {
    run(Case {
        name: "mass delete of a dashboard annotation with dashboard scope is allowed",
        permissions: scoped_permission(Action::AnnotationsDelete, SCOPE_ANNOTATIONS_TYPE_DASHBOARD),
        request: MassDeleteRequest {
            annotation_id: 1,
            ..Default::default()
        },
        want: 200,
    })
    .await;
}

#[tokio::test]
async fn dashboard_annotation_with_only_org_scope_is_forbidden() {
    run(Case {
        name: "mass delete of a dashboard annotation without dashboard scope is forbidden",
        permissions: scoped_permission(
            Action::AnnotationsDelete,
            SCOPE_ANNOTATIONS_TYPE_ORGANIZATION,
        ),
        request: MassDeleteRequest {
            annotation_id: 1,
            ..Default::default()
        },
        want: 403,
    })
    .await;
}

#[tokio::test]
async fn organization_annotation_with_only_dashboard_scope_is_forbidden() {
    run(Case {
        name: "mass delete of an organization annotation without organization scope is forbidden",
        permissions: scoped_permission(Action::AnnotationsDelete, SCOPE_ANNOTATIONS_TYPE_DASHBOARD),
        request: MassDeleteRequest {
            annotation_id: 2,
            ..Default::default()
        },
        want: 403,
    })
    .await;
}

#[tokio::test]
async fn dashboard_uid_is_resolved_before_validation() {
    run(Case {
        name: "mass delete with dashboardUID resolves the uid and is allowed",
        permissions: scoped_permission(Action::AnnotationsDelete, SCOPE_ANNOTATIONS_TYPE_DASHBOARD),
        request: MassDeleteRequest {
            dashboard_uid: Some("home".to_string()),
            panel_id: 1,
            ..Default::default()
        },
        want: 200,
    })
    .await;
}

#[tokio::test]
async fn unknown_dashboard_uid_is_not_found() {
    run(Case {
        name: "mass delete with an unknown dashboardUID fails the lookup",
        permissions: scoped_permission(Action::AnnotationsDelete, SCOPE_ANNOTATIONS_TYPE_DASHBOARD),
        request: MassDeleteRequest {
            dashboard_uid: Some("missing".to_string()),
            panel_id: 1,
            ..Default::default()
        },
        want: 404,
    })
    .await;
}

// Ordering guarantee: a request that is both malformed and unauthorized
// answers 400, never 403 — validation runs before authorization.
#[tokio::test]
async fn validation_runs_before_authorization() {
    run(Case {
        name: "malformed request without any permissions is still a bad request",
        permissions: vec![],
        request: MassDeleteRequest {
            dashboard_id: 10,
            ..Default::default()
        },
        want: 400,
    })
    .await;
}

#[tokio::test]
async fn mass_delete_actually_removes_matching_annotations() {
    let store = seeded_store(vec![dashboard_annotation(), organization_annotation()]).await;
    let service = service_over(store.clone(), FakeDashboardLookup::new());
    let user = user_with_permissions(scoped_permission(
        Action::AnnotationsDelete,
        SCOPE_ANNOTATIONS_TYPE_DASHBOARD,
    ));

    let deleted = service
        .mass_delete(
            &user,
            MassDeleteRequest {
                dashboard_id: 1,
                panel_id: 1,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(deleted, 1);
    // The organization annotation survives.
    assert_eq!(store.len(), 1);
}
