//! Table-driven tests for the annotation type scope resolver.

use anno_authz::{AuthzError, Scope, ScopeResolver};
use anno_service::{
    annotation_scope_registry, parse_annotation_id, AnnotationTypeScopeResolver,
    ANNOTATION_ID_SCOPE_PREFIX,
};
use anno_test_utils::{dashboard_annotation, organization_annotation, seeded_store};
use proptest::prelude::*;

struct ResolverCase {
    desc: &'static str,
    given: &'static str,
    want: Option<&'static str>,
}

#[tokio::test]
async fn resolver_table() {
    let cases = [
        ResolverCase {
            desc: "correctly resolves dashboard annotations",
            given: "annotations:id:1",
            want: Some("annotations:type:dashboard"),
        },
        ResolverCase {
            desc: "correctly resolves organization annotations",
            given: "annotations:id:2",
            want: Some("annotations:type:organization"),
        },
        ResolverCase {
            desc: "invalid annotation ID",
            given: "annotations:id:123abc",
            want: None,
        },
        ResolverCase {
            desc: "malformed scope",
            given: "annotations:1",
            want: None,
        },
    ];

    let store = seeded_store(vec![dashboard_annotation(), organization_annotation()]).await;
    let resolver = AnnotationTypeScopeResolver::new(store);

    for case in cases {
        let result = resolver.resolve(1, case.given).await;
        match case.want {
            Some(want) => {
                let resolved = result.unwrap_or_else(|e| panic!("{}: {e}", case.desc));
                assert_eq!(resolved.len(), 1, "{}", case.desc);
                assert_eq!(resolved[0], Scope::new(want), "{}", case.desc);
            }
            None => {
                let err = result.expect_err(case.desc);
                assert!(
                    matches!(err, AuthzError::InvalidScope(_)),
                    "{}: expected invalid scope, got {err}",
                    case.desc
                );
            }
        }
    }
}

#[tokio::test]
async fn missing_annotation_propagates_not_found() {
    let store = seeded_store(vec![dashboard_annotation()]).await;
    let resolver = AnnotationTypeScopeResolver::new(store);

    let err = resolver.resolve(1, "annotations:id:42").await.unwrap_err();
    assert!(matches!(err, AuthzError::NotFound(_)));
}

#[tokio::test]
async fn registry_is_keyed_by_the_id_prefix() {
    let store = seeded_store(vec![]).await;
    let registry = annotation_scope_registry(store);
    assert!(registry.contains(ANNOTATION_ID_SCOPE_PREFIX));
    assert_eq!(registry.len(), 1);
}

proptest! {
    #[test]
    fn any_positive_id_parses(id in 1i64..=i64::MAX) {
        let scope = format!("{ANNOTATION_ID_SCOPE_PREFIX}{id}");
        prop_assert_eq!(parse_annotation_id(&scope).unwrap(), id);
    }

    #[test]
    fn any_non_numeric_suffix_is_invalid(suffix in "[0-9]{0,4}[a-zA-Z:_-][0-9a-zA-Z]{0,4}") {
        let scope = format!("{ANNOTATION_ID_SCOPE_PREFIX}{suffix}");
        prop_assert!(matches!(
            parse_annotation_id(&scope),
            Err(AuthzError::InvalidScope(_))
        ));
    }

    #[test]
    fn any_non_positive_id_is_invalid(id in i64::MIN..=0i64) {
        let scope = format!("{ANNOTATION_ID_SCOPE_PREFIX}{id}");
        prop_assert!(matches!(
            parse_annotation_id(&scope),
            Err(AuthzError::InvalidScope(_))
        ));
    }
}
