pub mod api_response;
pub mod order_dto;
pub mod quote_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
