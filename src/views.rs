//! Screens reachable from the navigation bar. Each screen is a function of
//! the store and its explicit inputs; nothing is remembered between requests.

use crate::catalog::{self, Report};
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{ClaimStatus, CountedTable, FoodType, ListingFilters, MealType, NewFoodListing};
use crate::presentation::{present, Presentation};
use crate::table::{CellValue, DataTable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const LISTINGS_BY_CITY_SQL: &str = "SELECT Location, COUNT(*) AS Listings
 FROM food_listings
 GROUP BY Location";

const ALL_LISTINGS_SQL: &str = "SELECT * FROM food_listings";

const CLAIMS_SQL: &str = "SELECT
   c.Claim_ID,
   f.Food_Name,
   r.Name AS Receiver_Name,
   c.Status,
   c.Timestamp
 FROM claims c
 JOIN food_listings f ON c.Food_ID = f.Food_ID
 JOIN receivers r ON c.Receiver_ID = r.Receiver_ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    ListingBrowser,
    ClaimsBrowser,
    ReportRunner,
    ListingCreator,
}

impl View {
    pub const ALL: [View; 5] = [
        Self::Dashboard,
        Self::ListingBrowser,
        Self::ClaimsBrowser,
        Self::ReportRunner,
        Self::ListingCreator,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::ListingBrowser => "View Food Listings",
            Self::ClaimsBrowser => "Claims Management",
            Self::ReportRunner => "SQL Analysis",
            Self::ListingCreator => "Add New Food Listing",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::ListingBrowser => "/listings",
            Self::ClaimsBrowser => "/claims",
            Self::ReportRunner => "/reports",
            Self::ListingCreator => "/listings/new",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard Overview",
            Self::ListingBrowser => "Available Food Listings",
            Self::ClaimsBrowser => "Food Claims",
            Self::ReportRunner => "SQL Analysis & Insights",
            Self::ListingCreator => "Add New Food Listing",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    pub metrics: Vec<Presentation>,
    pub listings_by_city: Presentation,
}

pub fn dashboard(db: &Database) -> AppResult<DashboardScreen> {
    let mut metrics = Vec::with_capacity(3);
    for table in [CountedTable::Providers, CountedTable::Receivers, CountedTable::FoodListings] {
        metrics.push(Presentation::Metric {
            label: table.metric_label().to_string(),
            value: db.count(table)?,
        });
    }
    let listings_by_city = present(db.fetch(LISTINGS_BY_CITY_SQL)?);
    Ok(DashboardScreen {
        metrics,
        listings_by_city,
    })
}

/// Selector choices for the listing browser, each led by "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub food_types: Vec<String>,
    pub meal_types: Vec<String>,
}

impl FilterOptions {
    pub fn from_listings(listings: &DataTable) -> Self {
        let with_all = |column: &str| {
            let mut values = vec![ListingFilters::ALL.to_string()];
            values.extend(listings.distinct_values(column));
            values
        };
        Self {
            cities: with_all("Location"),
            food_types: with_all("Food_Type"),
            meal_types: with_all("Meal_Type"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingBrowserScreen {
    pub filters: ListingFilters,
    pub options: FilterOptions,
    pub listings: DataTable,
}

pub fn listing_browser(db: &Database, filters: &ListingFilters) -> AppResult<ListingBrowserScreen> {
    let all = db.fetch(ALL_LISTINGS_SQL)?;
    let options = FilterOptions::from_listings(&all);
    let listings = apply_filters(all, filters);
    Ok(ListingBrowserScreen {
        filters: filters.clone(),
        options,
        listings,
    })
}

/// Keeps the rows matching every active filter, in store order.
pub fn apply_filters(mut listings: DataTable, filters: &ListingFilters) -> DataTable {
    for (column, value) in filters.active() {
        listings.retain_equal(column, value);
    }
    listings
}

#[derive(Debug, Clone)]
pub struct ClaimsScreen {
    pub claims: DataTable,
    pub completed: usize,
}

pub fn claims_browser(db: &Database) -> AppResult<ClaimsScreen> {
    let claims = db.fetch(CLAIMS_SQL)?;
    let completed = claims
        .column_index("Status")
        .map(|index| {
            claims
                .rows
                .iter()
                .filter_map(|row| match row.get(index) {
                    Some(CellValue::Text(status)) => Some(ClaimStatus(status.clone())),
                    _ => None,
                })
                .filter(ClaimStatus::is_completed)
                .count()
        })
        .unwrap_or(0);
    Ok(ClaimsScreen { claims, completed })
}

#[derive(Debug, Clone)]
pub struct ReportScreen {
    pub reports: &'static [Report],
    pub selected: &'static Report,
    pub result: Presentation,
}

/// Resolves a report selection given either as its menu number or its full
/// label. No selection means the first report.
pub fn resolve_report(selection: Option<&str>) -> AppResult<&'static Report> {
    let Some(raw) = selection.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(catalog::first());
    };
    let found = match raw.parse::<u8>() {
        Ok(number) => catalog::find_by_number(number),
        Err(_) => catalog::find_by_label(raw),
    };
    found.ok_or_else(|| AppError::NotFound(format!("unknown report: {raw}")))
}

pub fn report_runner(db: &Database, report: &'static Report) -> AppResult<ReportScreen> {
    tracing::debug!(report = report.number, "running report");
    let result = present(db.fetch(report.sql)?);
    Ok(ReportScreen {
        reports: catalog::reports(),
        selected: report,
        result,
    })
}

/// Raw values of the listing creation form, kept as typed so the form can be
/// shown again exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListingForm {
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub provider_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub food_type: String,
    #[serde(default)]
    pub meal_type: String,
}

impl ListingForm {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            food_name: String::new(),
            quantity: "1".to_string(),
            expiry_date: today.format("%Y-%m-%d").to_string(),
            provider_id: "1".to_string(),
            provider_type: String::new(),
            location: String::new(),
            food_type: FoodType::Vegetarian.as_str().to_string(),
            meal_type: MealType::Breakfast.as_str().to_string(),
        }
    }

    /// Applies the same limits the form widgets declare.
    pub fn validate(&self, today: NaiveDate) -> AppResult<NewFoodListing> {
        let quantity = parse_at_least_one(&self.quantity, "Quantity")?;
        let provider_id = parse_at_least_one(&self.provider_id, "Provider ID")?;
        let expiry_date = NaiveDate::parse_from_str(self.expiry_date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::Validation(format!("Expiry Date '{}' is not a date", self.expiry_date)))?;
        if expiry_date < today {
            return Err(AppError::Validation(format!(
                "Expiry Date must be on or after {}",
                today.format("%Y-%m-%d")
            )));
        }
        let food_type = FoodType::parse(&self.food_type)
            .ok_or_else(|| AppError::Validation(format!("unknown food type '{}'", self.food_type)))?;
        let meal_type = MealType::parse(&self.meal_type)
            .ok_or_else(|| AppError::Validation(format!("unknown meal type '{}'", self.meal_type)))?;

        Ok(NewFoodListing {
            food_name: self.food_name.clone(),
            quantity,
            expiry_date,
            provider_id,
            provider_type: self.provider_type.clone(),
            location: self.location.clone(),
            food_type,
            meal_type,
        })
    }
}

fn parse_at_least_one(raw: &str, field: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 1 => Ok(value),
        Ok(_) => Err(AppError::Validation(format!("{field} must be at least 1"))),
        Err(_) => Err(AppError::Validation(format!("{field} must be a whole number"))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created { food_id: i64 },
    Rejected { reason: String },
}

#[derive(Debug, Clone)]
pub struct CreatorScreen {
    pub form: ListingForm,
    pub min_expiry: NaiveDate,
    pub outcome: Option<CreateOutcome>,
}

pub fn listing_creator(today: NaiveDate) -> CreatorScreen {
    CreatorScreen {
        form: ListingForm::blank(today),
        min_expiry: today,
        outcome: None,
    }
}

/// Validates and inserts one listing. Rejected input comes back as part of
/// the screen; store failures propagate.
pub fn create_listing(db: &Database, form: ListingForm, today: NaiveDate) -> AppResult<CreatorScreen> {
    let outcome = match form.validate(today) {
        Ok(listing) => CreateOutcome::Created {
            food_id: db.insert_listing(&listing)?,
        },
        Err(AppError::Validation(reason)) => {
            tracing::warn!(reason = %reason, "food listing rejected");
            CreateOutcome::Rejected { reason }
        }
        Err(other) => return Err(other),
    };
    Ok(CreatorScreen {
        form,
        min_expiry: today,
        outcome: Some(outcome),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        apply_filters, claims_browser, create_listing, dashboard, listing_browser, report_runner, resolve_report,
        CreateOutcome, ListingForm, View,
    };
    use crate::catalog;
    use crate::db::test_support::{add_claim, add_listing, add_provider, add_receiver, empty_database};
    use crate::errors::AppError;
    use crate::models::ListingFilters;
    use crate::presentation::Presentation;
    use crate::table::{CellValue, DataTable};
    use chrono::{Days, NaiveDate};
    use std::collections::BTreeSet;

    fn names(table: &DataTable) -> BTreeSet<String> {
        let index = table.column_index("Food_Name").expect("Food_Name column");
        table.rows.iter().map(|row| row[index].to_string()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("date")
    }

    #[test]
    fn navigation_has_five_distinct_screens() {
        let labels: BTreeSet<&str> = View::ALL.iter().map(|view| view.label()).collect();
        let paths: BTreeSet<&str> = View::ALL.iter().map(|view| view.path()).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(paths.len(), 5);
        assert_eq!(View::ALL[0].label(), "Dashboard");
    }

    #[test]
    fn dashboard_reports_counts_and_city_chart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (conn, db) = empty_database(dir.path());
        let provider = add_provider(&conn, "Hilltop", "Restaurant", "Pune");
        add_receiver(&conn, "Shelter", "Pune");
        add_listing(&conn, "Rice", 4, "2030-01-01", provider, "Pune", "Vegan", "Lunch");
        add_listing(&conn, "Soup", 2, "2030-01-01", provider, "Pune", "Vegan", "Dinner");
        add_listing(&conn, "Bread", 9, "2030-01-01", provider, "Agra", "Vegetarian", "Breakfast");

        let screen = dashboard(&db).expect("dashboard");
        let values: Vec<i64> = screen
            .metrics
            .iter()
            .map(|metric| match metric {
                Presentation::Metric { value, .. } => *value,
                other => panic!("unexpected presentation {other:?}"),
            })
            .collect();
        assert_eq!(values, vec![1, 1, 3]);

        let Presentation::Chart { chart, .. } = &screen.listings_by_city else {
            panic!("listings by city should chart");
        };
        let bars: BTreeSet<(String, i64)> = chart
            .bars
            .iter()
            .map(|bar| (bar.category.clone(), bar.value as i64))
            .collect();
        assert_eq!(bars, BTreeSet::from([("Agra".to_string(), 1), ("Pune".to_string(), 2)]));
    }

    #[test]
    fn empty_store_gives_zero_metrics_and_empty_chart() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_conn, db) = empty_database(dir.path());
        let screen = dashboard(&db).expect("dashboard");
        assert!(screen
            .metrics
            .iter()
            .all(|metric| matches!(metric, Presentation::Metric { value: 0, .. })));
        assert!(matches!(&screen.listings_by_city, Presentation::Chart { chart, .. } if chart.bars.is_empty()));
    }

    #[test]
    fn listing_filters_are_conjunctive_and_order_independent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (conn, db) = empty_database(dir.path());
        let provider = add_provider(&conn, "Hilltop", "Restaurant", "Pune");
        add_listing(&conn, "Rice", 4, "2030-01-01", provider, "Pune", "Vegan", "Lunch");
        add_listing(&conn, "Curry", 2, "2030-01-01", provider, "Pune", "Non-Vegetarian", "Dinner");
        add_listing(&conn, "Salad", 6, "2030-01-01", provider, "Agra", "Vegan", "Lunch");
        add_listing(&conn, "Idli", 8, "2030-01-01", provider, "Pune", "Vegan", "Breakfast");

        let all = listing_browser(&db, &ListingFilters::default()).expect("browser").listings;
        assert_eq!(all.row_count(), 4);

        let city_only = apply_filters(all.clone(), &ListingFilters::from_selection(Some("Pune"), None, None));
        let type_only = apply_filters(all.clone(), &ListingFilters::from_selection(None, Some("Vegan"), None));
        let both = ListingFilters::from_selection(Some("Pune"), Some("Vegan"), None);
        let combined = apply_filters(all.clone(), &both);

        // Applying one dimension after the other, in either order.
        let city_then_type = apply_filters(city_only.clone(), &ListingFilters::from_selection(None, Some("Vegan"), None));
        let type_then_city = apply_filters(type_only.clone(), &ListingFilters::from_selection(Some("Pune"), None, None));

        let intersection: BTreeSet<String> = names(&city_only).intersection(&names(&type_only)).cloned().collect();
        assert_eq!(names(&combined), intersection);
        assert_eq!(names(&city_then_type), names(&type_then_city));
        assert_eq!(names(&combined), BTreeSet::from(["Idli".to_string(), "Rice".to_string()]));

        let screen = listing_browser(&db, &both).expect("filtered browser");
        assert_eq!(names(&screen.listings), names(&combined));
        assert_eq!(screen.options.cities, vec!["All", "Agra", "Pune"]);
        assert_eq!(screen.options.food_types, vec!["All", "Non-Vegetarian", "Vegan"]);
        assert_eq!(screen.options.meal_types, vec!["All", "Breakfast", "Dinner", "Lunch"]);
    }

    #[test]
    fn every_offered_option_selects_at_least_one_listing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (conn, db) = empty_database(dir.path());
        let provider = add_provider(&conn, "Hilltop", "Restaurant", "Pune");
        add_listing(&conn, "Rice", 4, "2030-01-01", provider, "Pune ", "Vegan", "Lunch");
        add_listing(&conn, "Curry", 2, "2030-01-01", provider, " ", "Non-Vegetarian", "Dinner");
        add_listing(&conn, "Salad", 6, "2030-01-01", provider, "Agra", "Vegan", " Snacks");

        let options = listing_browser(&db, &ListingFilters::default()).expect("browser").options;
        assert_eq!(options.cities, vec!["All", " ", "Agra", "Pune "]);

        let offered = |values: &[String]| values.iter().skip(1).cloned().collect::<Vec<_>>();
        for city in offered(&options.cities) {
            let filters = ListingFilters::from_selection(Some(&city), None, None);
            let screen = listing_browser(&db, &filters).expect("browser");
            assert!(!screen.listings.is_empty(), "city {city:?} matched nothing");
        }
        for food_type in offered(&options.food_types) {
            let filters = ListingFilters::from_selection(None, Some(&food_type), None);
            let screen = listing_browser(&db, &filters).expect("browser");
            assert!(!screen.listings.is_empty(), "food type {food_type:?} matched nothing");
        }
        for meal_type in offered(&options.meal_types) {
            let filters = ListingFilters::from_selection(None, None, Some(&meal_type));
            let screen = listing_browser(&db, &filters).expect("browser");
            assert!(!screen.listings.is_empty(), "meal type {meal_type:?} matched nothing");
        }
    }

    #[test]
    fn claims_join_drops_dangling_references() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (conn, db) = empty_database(dir.path());
        // The bundled SQLite enables foreign keys by default; the fixture needs them off to build dangling rows.
        conn.pragma_update(None, "foreign_keys", false).expect("disable fk");
        let provider = add_provider(&conn, "Hilltop", "Restaurant", "Pune");
        let receiver = add_receiver(&conn, "Shelter", "Pune");
        let rice = add_listing(&conn, "Rice", 4, "2030-01-01", provider, "Pune", "Vegan", "Lunch");
        let soup = add_listing(&conn, "Soup", 2, "2030-01-01", provider, "Pune", "Vegan", "Dinner");
        let kept = add_claim(&conn, rice, receiver, "Completed");
        add_claim(&conn, soup, receiver, "Pending");
        add_claim(&conn, rice, 999, "Cancelled");

        conn.execute("DELETE FROM food_listings WHERE Food_ID = ?1", [soup])
            .expect("delete listing");

        let screen = claims_browser(&db).expect("claims");
        assert_eq!(
            screen.claims.columns,
            vec!["Claim_ID", "Food_Name", "Receiver_Name", "Status", "Timestamp"]
        );
        assert_eq!(screen.claims.row_count(), 1);
        assert_eq!(screen.claims.rows[0][0], CellValue::Integer(kept));
        assert_eq!(screen.completed, 1);
    }

    #[test]
    fn report_selection_accepts_number_label_or_nothing() {
        assert_eq!(resolve_report(None).expect("default").number, 1);
        assert_eq!(resolve_report(Some("7")).expect("number").number, 7);
        assert_eq!(
            resolve_report(Some("11. Claim status distribution")).expect("label").number,
            11
        );
        assert!(matches!(resolve_report(Some("42")), Err(AppError::NotFound(_))));
    }

    #[test]
    fn providers_by_city_report_charts_grouped_counts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (conn, db) = empty_database(dir.path());
        add_provider(&conn, "One", "Restaurant", "A");
        add_provider(&conn, "Two", "Bakery", "A");
        add_provider(&conn, "Three", "Grocery Store", "B");

        let report = catalog::find_by_number(1).expect("report 1");
        let screen = report_runner(&db, report).expect("report");
        let Presentation::Chart { table, .. } = &screen.result else {
            panic!("two-column report should chart");
        };
        let rows: BTreeSet<(String, i64)> = table
            .rows
            .iter()
            .map(|row| (row[0].to_string(), row[1].as_i64().expect("count")))
            .collect();
        assert_eq!(rows, BTreeSet::from([("A".to_string(), 2), ("B".to_string(), 1)]));
        assert_eq!(screen.reports.len(), 15);
    }

    #[test]
    fn contact_and_total_reports_render_as_tables() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (conn, db) = empty_database(dir.path());
        add_provider(&conn, "One", "Restaurant", "A");

        for number in [4, 6, 15] {
            let report = catalog::find_by_number(number).expect("report");
            let screen = report_runner(&db, report).expect("report");
            assert!(matches!(screen.result, Presentation::Table { .. }), "report {number}");
        }
    }

    #[test]
    fn expired_report_excludes_today_and_future() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (conn, db) = empty_database(dir.path());
        let provider = add_provider(&conn, "Hilltop", "Restaurant", "Pune");

        let evaluation: String = conn
            .query_row("SELECT DATE('now', 'localtime')", [], |row| row.get(0))
            .expect("store date");
        let evaluation = NaiveDate::parse_from_str(&evaluation, "%Y-%m-%d").expect("date");
        let day = |date: NaiveDate| date.format("%Y-%m-%d").to_string();

        add_listing(&conn, "Old Milk", 1, &day(evaluation - Days::new(30)), provider, "Pune", "Vegetarian", "Breakfast");
        add_listing(&conn, "Stale Bread", 1, &day(evaluation - Days::new(1)), provider, "Pune", "Vegan", "Snacks");
        add_listing(&conn, "Fresh Soup", 1, &day(evaluation), provider, "Pune", "Vegan", "Dinner");
        add_listing(&conn, "Rice", 1, &day(evaluation + Days::new(1)), provider, "Pune", "Vegan", "Lunch");

        let report = catalog::find_by_number(15).expect("report 15");
        let screen = report_runner(&db, report).expect("report");
        let Presentation::Table { table } = &screen.result else {
            panic!("three-column report should be a table");
        };
        assert_eq!(
            names(table),
            BTreeSet::from(["Old Milk".to_string(), "Stale Bread".to_string()])
        );
    }

    #[test]
    fn form_constraints_mirror_the_widgets() {
        let mut form = ListingForm::blank(today());
        form.food_name = "Bread Loaves".to_string();
        assert!(form.validate(today()).is_ok());

        let mut zero = form.clone();
        zero.quantity = "0".to_string();
        assert!(matches!(zero.validate(today()), Err(AppError::Validation(_))));

        let mut past = form.clone();
        past.expiry_date = "2025-06-14".to_string();
        assert!(matches!(past.validate(today()), Err(AppError::Validation(_))));

        let mut meal = form.clone();
        meal.meal_type = "Brunch".to_string();
        assert!(matches!(meal.validate(today()), Err(AppError::Validation(_))));
    }

    #[test]
    fn creating_a_listing_inserts_one_row_and_keeps_the_form() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (conn, db) = empty_database(dir.path());
        add_provider(&conn, "Bakehouse", "Bakery", "Springfield");
        let before = dashboard(&db).expect("dashboard");

        let form = ListingForm {
            food_name: "Bread Loaves".to_string(),
            quantity: "10".to_string(),
            expiry_date: "2025-06-16".to_string(),
            provider_id: "1".to_string(),
            provider_type: "Bakery".to_string(),
            location: "Springfield".to_string(),
            food_type: "Vegetarian".to_string(),
            meal_type: "Breakfast".to_string(),
        };
        let screen = create_listing(&db, form.clone(), today()).expect("create");
        assert_eq!(screen.form, form);
        assert!(matches!(screen.outcome, Some(CreateOutcome::Created { food_id: 1 })));

        let browser = listing_browser(&db, &ListingFilters::default()).expect("browser");
        assert_eq!(browser.listings.row_count(), 1);
        let row = &browser.listings.rows[0];
        let cell = |name: &str| row[browser.listings.column_index(name).expect("column")].clone();
        assert_eq!(cell("Food_Name"), CellValue::Text("Bread Loaves".into()));
        assert_eq!(cell("Quantity"), CellValue::Integer(10));
        assert_eq!(cell("Expiry_Date"), CellValue::Text("2025-06-16".into()));
        assert_eq!(cell("Provider_Type"), CellValue::Text("Bakery".into()));
        assert_eq!(cell("Meal_Type"), CellValue::Text("Breakfast".into()));

        let after = dashboard(&db).expect("dashboard");
        assert!(matches!(
            (&before.metrics[2], &after.metrics[2]),
            (Presentation::Metric { value: 0, .. }, Presentation::Metric { value: 1, .. })
        ));
    }

    #[test]
    fn rejected_form_is_not_inserted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_conn, db) = empty_database(dir.path());
        let mut form = ListingForm::blank(today());
        form.quantity = "-3".to_string();

        let screen = create_listing(&db, form, today()).expect("screen");
        assert!(matches!(screen.outcome, Some(CreateOutcome::Rejected { .. })));
        assert_eq!(screen.form.quantity, "-3");
        let browser = listing_browser(&db, &ListingFilters::default()).expect("browser");
        assert!(browser.listings.is_empty());
    }
}
