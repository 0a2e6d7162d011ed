pub mod api_client;
pub mod gateway;

pub use api_client::ApiClient;
pub use gateway::BookingGateway;
