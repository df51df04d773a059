
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub redis_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "localhost:8080".to_string());
        let redis_addr =
            std::env::var("REDIS_ADDR").unwrap_or_else(|_| "localhost:6379".to_string());

        Config {
            listen_addr,
            redis_addr,
        }
    }
}
