pub mod distance_service;
pub mod itinerary_optimizer_service;
pub mod preference_service;
pub mod price_prediction_service;
pub mod recommendation_service;
pub mod scheduler_service;
