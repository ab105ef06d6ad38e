use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

/// A class definition, stored once per day of its date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub class_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: u32,
}

/// A single enrollment on a class day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub name: String,
    pub date: NaiveDate,
}

// Omitted fields decode to their zero value so the required-fields check can
// name them, instead of failing the whole decode.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClassRequest {
    #[serde(default)]
    #[schema(example = "Pilates")]
    pub class_name: String,
    #[serde(default)]
    #[schema(value_type = String, format = "date", example = "2024-12-01")]
    pub start_date: String,
    #[serde(default)]
    #[schema(value_type = String, format = "date", example = "2024-12-20")]
    pub end_date: String,
    #[serde(default)]
    #[schema(example = 10)]
    pub capacity: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingRequest {
    #[serde(default)]
    #[schema(example = "Meher")]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = String, format = "date", example = "2024-12-05")]
    pub date: String,
}
