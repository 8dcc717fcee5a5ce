//! # Gateway Topic Flow
//!
//! Tenant context -> gateway unique ID -> layout factory -> topic paths.
//!
//! Mirrors how a gateway connection is set up: the license decides the
//! layout once, the connection encodes its gateway unique ID, and every
//! inbound publish is classified against the same layout.

#[cfg(test)]
mod tests {
    use mqtt_topics::{
        join, new_layout, select_layout, select_legacy_layout, split, LayoutVersion, TopicKind,
        TopicLayout,
    };
    use shared_ids::{encode, GatewayIdentifiers, StaticLicense, TenantContext};
    use std::sync::Arc;

    const GATEWAY_ID: &str = "test";

    fn gateway_uid() -> String {
        let ctx = TenantContext::background().with_tenant_id("foo-tenant");
        encode(&ctx, GatewayIdentifiers::new(GATEWAY_ID)).unwrap()
    }

    /// Topics built by `layout` classify back to their own kind.
    fn assert_self_classifying(layout: &Arc<dyn TopicLayout>, uid: &str) {
        for kind in TopicKind::ALL {
            let path = layout.build_topic(kind, uid);
            if path.is_empty() || kind == TopicKind::Downlink {
                continue;
            }
            assert_eq!(layout.classify(&path), Some(kind), "{}", join(&path));
            // Survives the trip through the wire form.
            assert_eq!(layout.classify(&split(&join(&path))), Some(kind));
        }
    }

    #[test]
    fn test_multi_tenant_license_keeps_uid() {
        let uid = gateway_uid();
        let layout = select_layout(&StaticLicense::multi_tenant());

        assert_eq!(layout.uplink_topic(&uid), vec!["v3", uid.as_str(), "up"]);
        assert_eq!(layout.status_topic(&uid), vec!["v3", uid.as_str(), "status"]);
        assert_eq!(layout.tx_ack_topic(&uid), vec!["v3", uid.as_str(), "down", "ack"]);
        assert_eq!(join(&layout.downlink_topic(&uid)), format!("v3/{uid}/down"));
        assert_self_classifying(&layout, &uid);
    }

    #[test]
    fn test_single_tenant_license_strips_tenant() {
        let uid = gateway_uid();
        let layout = select_layout(&StaticLicense::single_tenant());

        assert_eq!(layout.uplink_topic(&uid), vec!["v3", GATEWAY_ID, "up"]);
        assert_eq!(layout.status_topic(&uid), vec!["v3", GATEWAY_ID, "status"]);
        assert_eq!(layout.tx_ack_topic(&uid), vec!["v3", GATEWAY_ID, "down", "ack"]);
        assert_self_classifying(&layout, &uid);
    }

    #[test]
    fn test_legacy_layout_for_both_licenses() {
        let uid = gateway_uid();
        for license in [StaticLicense::multi_tenant(), StaticLicense::single_tenant()] {
            let layout = select_legacy_layout(&license);
            assert_eq!(layout.birth_topic(&uid), vec!["connect"]);
            assert_eq!(layout.last_will_topic(&uid), vec!["disconnect"]);
            assert_eq!(layout.uplink_topic(&uid), vec![GATEWAY_ID, "up"]);
            assert!(layout.tx_ack_topic(&uid).is_empty());
            assert!(!layout.is_tx_ack_topic(&split("test/down/ack")));
            assert_self_classifying(&layout, &uid);
        }
    }

    #[test]
    fn test_layouts_disagree_on_legacy_paths() {
        let license = StaticLicense::multi_tenant();
        let current = new_layout(LayoutVersion::V3, &license);
        let legacy = new_layout(LayoutVersion::V2, &license);

        let connect = split("connect");
        assert_eq!(legacy.classify(&connect), Some(TopicKind::Birth));
        assert_eq!(current.classify(&connect), None);

        let legacy_up = split("test/up");
        assert_eq!(legacy.classify(&legacy_up), Some(TopicKind::Uplink));
        assert_eq!(current.classify(&legacy_up), None);
    }

    #[test]
    fn test_layout_version_from_config_string() {
        let version: LayoutVersion = "v2".parse().unwrap();
        let layout = new_layout(version, &StaticLicense::single_tenant());
        assert_eq!(layout.version(), LayoutVersion::V2);
        assert!(!layout.multi_tenancy());
    }
}
