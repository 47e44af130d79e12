pub mod activity;
pub mod api_response;
pub mod itinerary;
pub mod price;
pub mod recommendation;
