use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodType {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [Self::Vegetarian, Self::NonVegetarian, Self::Vegan];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Vegan => "Vegan",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snacks => "Snacks",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.as_str() == raw)
    }
}

/// Claim status as stored. The value set is owned by the store, so only
/// `Completed` is given a name here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimStatus(pub String);

impl ClaimStatus {
    pub const COMPLETED: &'static str = "Completed";

    pub fn is_completed(&self) -> bool {
        self.0 == Self::COMPLETED
    }
}

/// Tables whose row counts feed the dashboard metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountedTable {
    Providers,
    Receivers,
    FoodListings,
}

impl CountedTable {
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Providers => "providers",
            Self::Receivers => "receivers",
            Self::FoodListings => "food_listings",
        }
    }

    pub fn metric_label(self) -> &'static str {
        match self {
            Self::Providers => "Total Providers",
            Self::Receivers => "Total Receivers",
            Self::FoodListings => "Total Food Listings",
        }
    }
}

/// A listing as submitted through the creation form, before the store assigns
/// its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewFoodListing {
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub provider_id: i64,
    pub provider_type: String,
    pub location: String,
    pub food_type: FoodType,
    pub meal_type: MealType,
}

/// Equality filters for the listing browser. `None` stands for "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListingFilters {
    pub city: Option<String>,
    pub food_type: Option<String>,
    pub meal_type: Option<String>,
}

impl ListingFilters {
    pub const ALL: &'static str = "All";

    /// Builds filters from raw selector values. Only an empty value or "All"
    /// turns a dimension off; anything else is matched byte for byte.
    pub fn from_selection(city: Option<&str>, food_type: Option<&str>, meal_type: Option<&str>) -> Self {
        Self {
            city: normalize_selection(city),
            food_type: normalize_selection(food_type),
            meal_type: normalize_selection(meal_type),
        }
    }

    /// Column/value pairs of the active filters, in the order city, food
    /// type, meal type.
    pub fn active(&self) -> Vec<(&'static str, &str)> {
        [
            ("Location", self.city.as_deref()),
            ("Food_Type", self.food_type.as_deref()),
            ("Meal_Type", self.meal_type.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|value| (column, value)))
        .collect()
    }
}

fn normalize_selection(raw: Option<&str>) -> Option<String> {
    let value = raw?;
    if value.is_empty() || value == ListingFilters::ALL {
        None
    } else {
        Some(value.to_string())
    }
}
