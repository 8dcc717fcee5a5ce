//! # Forwarding Flow
//!
//! Tenant context -> application uplinks -> forwarder -> publisher.
//!
//! Uplinks for devices of several tenants are pushed through a spawned
//! forwarder; each lands on its own tenant's topic tree, unmapped kinds and
//! broken messages are counted without stopping the loop.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use awsiot_forwarder::{
        spawn_forwarder, ApplicationDownlink, ApplicationUp, ForwardStats, ForwarderConfig,
        InMemoryPublisher, PublishError, Publisher, UpPayload,
    };
    use parking_lot::Mutex;
    use shared_ids::{derive_context, encode, EndDeviceIdentifiers, TenantContext};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Records topics and fails every topic carrying one tenant segment.
    #[derive(Default)]
    struct RecordingPublisher {
        topics: Mutex<Vec<String>>,
        reject_tenant: Option<String>,
    }

    #[async_trait]
    impl Publisher for RecordingPublisher {
        async fn publish(&self, topic: &str, _payload: Vec<u8>) -> Result<(), PublishError> {
            if let Some(tenant) = &self.reject_tenant {
                // The prefix may span several segments.
                if topic.split('/').any(|segment| segment == tenant.as_str()) {
                    return Err(PublishError::Transport(format!("tenant {tenant} throttled")));
                }
            }
            self.topics.lock().push(topic.to_string());
            Ok(())
        }

        fn messages_published(&self) -> u64 {
            self.topics.lock().len() as u64
        }
    }

    fn uplink(ctx: &TenantContext, app: &str, dev: &str) -> ApplicationUp {
        ApplicationUp::new(
            ctx.clone(),
            EndDeviceIdentifiers::new(app, dev),
            UpPayload::UplinkMessage {
                f_port: 1,
                f_cnt: 1,
                frm_payload: vec![0x01],
                decoded_payload: Some(serde_json::json!({ "temperature": 21.5 })),
            },
        )
    }

    // =============================================================================
    // TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_tenants_land_on_separate_topic_trees() {
        let publisher = Arc::new(RecordingPublisher::default());
        let handle = spawn_forwarder(ForwarderConfig::default(), publisher.clone());

        let root = TenantContext::background();
        let tenant_a = derive_context(&root, "foo-gtw@tenant-a").unwrap();
        let tenant_b = derive_context(&root, "foo-gtw@tenant-b").unwrap();

        handle.sender().send(uplink(&tenant_a, "app-one", "dev-one")).await.unwrap();
        handle.sender().send(uplink(&tenant_b, "app-two", "dev-two")).await.unwrap();

        let mut joined = uplink(&tenant_a, "app-one", "dev-one");
        joined.up = UpPayload::JoinAccept {
            session_key_id: "session".to_string(),
        };
        handle.sender().send(joined).await.unwrap();

        let stats = timeout(Duration::from_secs(5), handle.drain())
            .await
            .expect("forwarder did not drain")
            .unwrap();
        assert_eq!(stats.forwarded, 3);

        assert_eq!(
            *publisher.topics.lock(),
            vec![
                "lorawan/tenant-a/app-one/things/dev-one/up",
                "lorawan/tenant-b/app-two/things/dev-two/up",
                "lorawan/tenant-a/app-one/things/dev-one/join",
            ]
        );
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_other_tenants() {
        let publisher = Arc::new(RecordingPublisher {
            topics: Mutex::new(Vec::new()),
            reject_tenant: Some("tenant-b".to_string()),
        });
        let config = ForwarderConfig {
            topic_prefix: "eu1/lorawan".to_string(),
            ..Default::default()
        };
        let handle = spawn_forwarder(config, publisher.clone());

        let tenant_a = TenantContext::background().with_tenant_id("tenant-a");
        let tenant_b = TenantContext::background().with_tenant_id("tenant-b");

        handle.sender().send(uplink(&tenant_b, "app-two", "dev-two")).await.unwrap();
        // No tenant at all: the device uid cannot be built.
        handle
            .sender()
            .send(uplink(&TenantContext::background(), "app-one", "dev-one"))
            .await
            .unwrap();
        let mut invalidated = uplink(&tenant_a, "app-one", "dev-one");
        invalidated.up = UpPayload::DownlinkQueueInvalidated {
            downlinks: vec![ApplicationDownlink::default()],
            last_f_cnt_down: 3,
        };
        handle.sender().send(invalidated).await.unwrap();
        handle.sender().send(uplink(&tenant_a, "app-one", "dev-one")).await.unwrap();

        let stats = timeout(Duration::from_secs(5), handle.drain())
            .await
            .expect("forwarder did not drain")
            .unwrap();
        assert_eq!(
            stats,
            ForwardStats {
                forwarded: 1,
                skipped: 1,
                failed: 2
            }
        );
        assert_eq!(
            *publisher.topics.lock(),
            vec!["eu1/lorawan/tenant-a/app-one/things/dev-one/up"]
        );
    }

    #[tokio::test]
    async fn test_payload_matches_device_uid() {
        let publisher = Arc::new(InMemoryPublisher::new());
        let mut rx = publisher.subscribe();
        let handle = spawn_forwarder(ForwarderConfig::default(), publisher.clone());

        let ctx = TenantContext::background().with_tenant_id("foo-tenant");
        let msg = uplink(&ctx, "foo-app", "foo-device");
        let device_uid = encode(&msg.context, &msg.end_device_ids).unwrap();
        handle.sender().send(msg).await.unwrap();

        let published = timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("nothing published")
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&published.payload).unwrap();

        // The topic and the payload identify the same device as the uid.
        let (local, tenant) = device_uid.split_once('@').unwrap();
        let (app, dev) = local.split_once('.').unwrap();
        assert_eq!(
            published.topic,
            format!("lorawan/{tenant}/{app}/things/{dev}/up")
        );
        assert_eq!(json["end_device_ids"]["application_ids"]["application_id"], app);
        assert_eq!(json["end_device_ids"]["device_id"], dev);
        assert_eq!(json["up"]["uplink_message"]["decoded_payload"]["temperature"], 21.5);

        let stats = timeout(Duration::from_secs(5), handle.shutdown())
            .await
            .expect("forwarder did not stop")
            .unwrap();
        assert_eq!(stats.forwarded, 1);
    }
}
