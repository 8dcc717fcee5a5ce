//! Forwarded topic names: `{prefix}/{tenant}/{application}/things/{device}/{suffix}`.

use shared_ids::EndDeviceIdentifiers;

/// Build the topic a message for `ids` of tenant `tenant_id` is published on.
#[must_use]
pub fn forward_topic(
    prefix: &str,
    tenant_id: &str,
    ids: &EndDeviceIdentifiers,
    suffix: &str,
) -> String {
    format!(
        "{prefix}/{tenant_id}/{}/things/{}/{suffix}",
        ids.application_id(),
        ids.device_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_topic() {
        let ids = EndDeviceIdentifiers::new("foo-app", "foo-device");
        assert_eq!(
            forward_topic("lorawan", "foo-tenant", &ids, "down/ack"),
            "lorawan/foo-tenant/foo-app/things/foo-device/down/ack"
        );
    }
}
