use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;
}


// Configuration abstracts config options for the book shop
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub env_name: String,
    pub listen_addr: String,
    pub static_dir: String,
    pub index_template: String,
}

impl Configuration {
    pub fn new(env_name: &str) -> Self {
        Configuration {
            env_name: env_name.to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            static_dir: "static".to_string(),
            index_template: "templates/index.html".to_string(),
        }
    }
}
