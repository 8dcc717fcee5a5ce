//! # Addressing Flow
//!
//! Request host -> tenant resolver -> tenant context -> unique ID codec.
//!
//! A request arrives on a tenant host name, the resolver derives the tenant
//! context, entities are encoded under that tenant, and decoding the unique
//! IDs (or deriving a context from them) recovers the same tenant.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shared_ids::{
        decode_application, decode_client, decode_device, decode_entity, decode_gateway,
        decode_organization, decode_tenant, decode_user, derive_context, encode,
        ApplicationIdentifiers, ClientIdentifiers, CodecError, EndDeviceIdentifiers,
        EntityIdentifiers, EntityKind, ErrorKind, GatewayIdentifiers, OrganizationIdentifiers,
        StaticLicense, TenancyConfig, TenantContext, TenantError, TenantResolver,
        UserIdentifiers,
    };
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn resolver(multi_tenancy: bool) -> TenantResolver {
        let config = TenancyConfig {
            default_id: None,
            base_domains: vec!["eu1.cloud.example.com".to_string()],
            allow_empty: false,
        };
        TenantResolver::new(config, Arc::new(StaticLicense { multi_tenancy }))
    }

    fn all_entities() -> Vec<EntityIdentifiers> {
        vec![
            ApplicationIdentifiers::new("foo-app").into(),
            ClientIdentifiers::new("foo-client").into(),
            EndDeviceIdentifiers::new("foo-app", "foo-device").into(),
            GatewayIdentifiers::new("foo-gtw").into(),
            OrganizationIdentifiers::new("foo-org").into(),
            UserIdentifiers::new("foo-usr").into(),
        ]
    }

    // =============================================================================
    // RESOLVE THEN ENCODE
    // =============================================================================

    #[test]
    fn test_host_tenant_flows_into_unique_ids() {
        let ctx = resolver(true)
            .resolve(&TenantContext::background(), "foo-tenant.eu1.cloud.example.com:443")
            .unwrap();

        for ids in all_entities() {
            let uid = encode(&ctx, &ids).unwrap();
            assert!(uid.ends_with("@foo-tenant"), "{uid}");
            assert_eq!(decode_entity(ids.kind(), &uid).unwrap(), ids);
            assert_eq!(decode_tenant(&uid).unwrap().tenant_id, "foo-tenant");
        }
    }

    #[test]
    fn test_unresolvable_host_never_reaches_codec() {
        let err = resolver(true)
            .resolve(&TenantContext::background(), "eu1.cloud.example.com")
            .unwrap_err();
        assert!(matches!(err, TenantError::MissingTenant { .. }));
    }

    #[test]
    fn test_context_without_tenant_cannot_encode() {
        let err = encode(&TenantContext::background(), UserIdentifiers::new("foo-usr")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingTenant);
    }

    // =============================================================================
    // DERIVE FROM UNIQUE ID
    // =============================================================================

    #[test]
    fn test_derived_context_reencodes_to_same_tenant() {
        let parent = TenantContext::background();
        let ctx = derive_context(&parent, "foo-gtw@foo-tenant").unwrap();

        let uid = encode(&ctx, ApplicationIdentifiers::new("foo-app")).unwrap();
        assert_eq!(uid, "foo-app@foo-tenant");
        assert!(parent.tenant().is_none());
    }

    #[test]
    fn test_derived_context_keeps_resolved_parent() {
        let resolved = resolver(true)
            .resolve(&TenantContext::background(), "outer.eu1.cloud.example.com")
            .unwrap();
        let derived = derive_context(&resolved, "foo-gtw@inner").unwrap();

        assert_eq!(derived.tenant_id(), Some("inner"));
        assert_eq!(derived.parent().and_then(TenantContext::tenant_id), Some("outer"));
    }

    #[test]
    fn test_derive_context_propagates_decode_failure() {
        let err = derive_context(&TenantContext::background(), "foo-gtw").unwrap_err();
        assert_eq!(
            err,
            CodecError::MissingTenant {
                uid: "foo-gtw".to_string()
            }
        );
    }

    // =============================================================================
    // ROUND TRIP
    // =============================================================================

    #[test]
    fn test_round_trip_value_and_reference() {
        let ctx = TenantContext::background().with_tenant_id("foo-tenant");

        let app = ApplicationIdentifiers::new("foo-app");
        assert_eq!(decode_application(&encode(&ctx, app.clone()).unwrap()).unwrap(), app);
        assert_eq!(decode_application(&encode(&ctx, &app).unwrap()).unwrap(), app);

        let client = ClientIdentifiers::new("foo-client");
        assert_eq!(decode_client(&encode(&ctx, client.clone()).unwrap()).unwrap(), client);
        assert_eq!(decode_client(&encode(&ctx, &client).unwrap()).unwrap(), client);

        let dev = EndDeviceIdentifiers::new("foo-app", "foo-device");
        assert_eq!(decode_device(&encode(&ctx, dev.clone()).unwrap()).unwrap(), dev);
        assert_eq!(decode_device(&encode(&ctx, &dev).unwrap()).unwrap(), dev);

        let gtw = GatewayIdentifiers::new("foo-gtw");
        assert_eq!(decode_gateway(&encode(&ctx, gtw.clone()).unwrap()).unwrap(), gtw);
        assert_eq!(decode_gateway(&encode(&ctx, &gtw).unwrap()).unwrap(), gtw);

        let org = OrganizationIdentifiers::new("foo-org");
        assert_eq!(decode_organization(&encode(&ctx, org.clone()).unwrap()).unwrap(), org);
        assert_eq!(decode_organization(&encode(&ctx, &org).unwrap()).unwrap(), org);

        let usr = UserIdentifiers::new("foo-usr");
        assert_eq!(decode_user(&encode(&ctx, usr.clone()).unwrap()).unwrap(), usr);
        assert_eq!(decode_user(&encode(&ctx, &usr).unwrap()).unwrap(), usr);
    }

    #[test]
    #[should_panic(expected = "unique ID precondition violated")]
    fn test_zero_identifiers_panic_through_resolved_context() {
        let ctx = resolver(false)
            .resolve(&TenantContext::background(), "foo-tenant.eu1.cloud.example.com")
            .unwrap();
        let _ = encode(&ctx, GatewayIdentifiers::default());
    }

    fn segment() -> impl Strategy<Value = String> {
        "[a-z0-9]{3,12}(-[a-z0-9]{1,11}){0,2}"
    }

    fn kind() -> impl Strategy<Value = EntityKind> {
        prop::sample::select(EntityKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_any_kind_round_trips(kind in kind(), a in segment(), b in segment(), tenant in segment()) {
            let ids: EntityIdentifiers = match kind {
                EntityKind::Application => ApplicationIdentifiers::new(a).into(),
                EntityKind::Client => ClientIdentifiers::new(a).into(),
                EntityKind::Device => EndDeviceIdentifiers::new(a, b).into(),
                EntityKind::Gateway => GatewayIdentifiers::new(a).into(),
                EntityKind::Organization => OrganizationIdentifiers::new(a).into(),
                EntityKind::User => UserIdentifiers::new(a).into(),
            };
            let ctx = TenantContext::background().with_tenant_id(tenant.clone());
            let uid = encode(&ctx, &ids).unwrap();
            prop_assert_eq!(decode_entity(kind, &uid).unwrap(), ids);
            prop_assert_eq!(decode_tenant(&uid).unwrap().tenant_id, tenant);
        }
    }
}
