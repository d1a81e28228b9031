use lazy_static::lazy_static;
use uuid::Uuid;

const VWO_NAMESPACE_SEED: &[u8] = b"https://vwo.com";

lazy_static! {
    static ref VWO_NAMESPACE: Uuid = Uuid::new_v5(&Uuid::NAMESPACE_URL, VWO_NAMESPACE_SEED);
}

/// Derives the stable visitor identifier for a (user, account) pair.
///
/// Two v5 hops under the VWO namespace: first the account id, then the user
/// id. The same pair always yields the same identifier, which is what lets
/// the remote service correlate events for one visitor across calls.
#[must_use]
pub fn get_visitor_uuid(user_id: &str, account_id: u64) -> String {
    let account_namespace = Uuid::new_v5(&VWO_NAMESPACE, account_id.to_string().as_bytes());
    let visitor = Uuid::new_v5(&account_namespace, user_id.as_bytes());

    visitor.simple().to_string().to_uppercase()
}
