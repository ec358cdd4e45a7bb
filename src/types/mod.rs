pub mod packing;
pub mod profile;
pub mod recommendation;
pub mod style;
pub mod summary;
pub mod trip;
pub mod weather;

pub use packing::{ClothingGuide, PackingItem, PackingRecommendation, ShopItem};
pub use profile::{DestinationType, Gender, Persona, UserProfile};
pub use recommendation::{
    Accommodation, AccommodationDetails, Budget, Transportation, TransportationDetails,
    TripRecommendation,
};
pub use style::{StyleCategory, StyleItem, StyleLooks, StyleRecommendation};
pub use summary::TripSummary;
pub use trip::{Companions, TripPlan};
pub use weather::{TemperatureRange, WeatherData, WeatherForecast};
