pub mod clothing;
pub mod recommendation;
pub mod weather;

pub use clothing::{ClothingItem, Formality, GarmentType, WardrobeEntry, WarmthBand};
pub use recommendation::{Outfit, RationaleEntry, Recommendation};
pub use weather::{ApiWeatherResponse, CurrentConditions, WeatherSnapshot, WindBand};
