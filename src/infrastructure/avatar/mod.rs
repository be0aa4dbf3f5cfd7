mod did_client;

pub use did_client::DidClient;
