use redis::aio::ConnectionManager;

pub async fn init_store(addr: &str) -> ConnectionManager {
    let client = redis::Client::open(format!("redis://{addr}")).expect("Invalid Redis address");
    let mut conn = client
        .get_connection_manager()
        .await
        .expect("Failed to connect to Redis");
    let _: String = redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .expect("Failed to connect to Redis");
    conn
}
