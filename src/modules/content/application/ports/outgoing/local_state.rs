/// Local tier of the persistence gateway: a synchronous keyed string store,
/// the server-side analog of the browser's localStorage. Best-effort by
/// design; adapters log failures instead of surfacing them, because losing a
/// local mirror only costs a fallthrough to the next resolution tier.
pub trait LocalStateStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
