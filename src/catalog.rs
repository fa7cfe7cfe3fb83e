//! The fixed menu of analytical reports shown on the SQL analysis screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub number: u8,
    pub label: &'static str,
    pub sql: &'static str,
}

const REPORTS: [Report; 15] = [
    Report {
        number: 1,
        label: "1. Providers count by city",
        sql: "SELECT City, COUNT(*) AS Provider_Count FROM providers GROUP BY City",
    },
    Report {
        number: 2,
        label: "2. Receivers count by city",
        sql: "SELECT City, COUNT(*) AS Receiver_Count FROM receivers GROUP BY City",
    },
    Report {
        number: 3,
        label: "3. Provider type contributing most food",
        sql: "SELECT Provider_Type, SUM(Quantity) AS Total_Quantity FROM food_listings GROUP BY Provider_Type",
    },
    Report {
        number: 4,
        label: "4. Provider contact details",
        sql: "SELECT Name, Type, City, Contact FROM providers",
    },
    Report {
        number: 5,
        label: "5. Receivers who claimed most food",
        sql: "SELECT r.Name, COUNT(c.Claim_ID) AS Total_Claims
              FROM claims c
              JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
              GROUP BY r.Name
              ORDER BY Total_Claims DESC",
    },
    Report {
        number: 6,
        label: "6. Total quantity of food available",
        sql: "SELECT SUM(Quantity) AS Total_Food_Quantity FROM food_listings",
    },
    Report {
        number: 7,
        label: "7. City with highest food listings",
        sql: "SELECT Location, COUNT(*) AS Listings FROM food_listings GROUP BY Location ORDER BY Listings DESC",
    },
    Report {
        number: 8,
        label: "8. Most commonly available food types",
        sql: "SELECT Food_Type, COUNT(*) AS Count FROM food_listings GROUP BY Food_Type",
    },
    Report {
        number: 9,
        label: "9. Number of claims per food item",
        sql: "SELECT f.Food_Name, COUNT(c.Claim_ID) AS Claim_Count
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              GROUP BY f.Food_Name",
    },
    Report {
        number: 10,
        label: "10. Provider with highest successful claims",
        sql: "SELECT p.Name, COUNT(c.Claim_ID) AS Successful_Claims
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              WHERE c.Status = 'Completed'
              GROUP BY p.Name
              ORDER BY Successful_Claims DESC",
    },
    Report {
        number: 11,
        label: "11. Claim status distribution",
        sql: "SELECT Status, COUNT(*) AS Count FROM claims GROUP BY Status",
    },
    Report {
        number: 12,
        label: "12. Average quantity claimed per receiver",
        sql: "SELECT r.Name, AVG(f.Quantity) AS Avg_Quantity
              FROM claims c
              JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              GROUP BY r.Name",
    },
    Report {
        number: 13,
        label: "13. Most claimed meal type",
        sql: "SELECT Meal_Type, COUNT(*) AS Claims
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              GROUP BY Meal_Type
              ORDER BY Claims DESC",
    },
    Report {
        number: 14,
        label: "14. Total food donated by each provider",
        sql: "SELECT p.Name, SUM(f.Quantity) AS Total_Donated
              FROM food_listings f
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              GROUP BY p.Name
              ORDER BY Total_Donated DESC",
    },
    Report {
        number: 15,
        label: "15. Expired food items",
        sql: "SELECT Food_Name, Expiry_Date, Location FROM food_listings WHERE Expiry_Date < DATE('now', 'localtime')",
    },
];

/// All reports in menu order.
pub fn reports() -> &'static [Report] {
    &REPORTS
}

pub fn find_by_label(label: &str) -> Option<&'static Report> {
    REPORTS.iter().find(|report| report.label == label)
}

pub fn find_by_number(number: u8) -> Option<&'static Report> {
    REPORTS.iter().find(|report| report.number == number)
}

pub fn first() -> &'static Report {
    &REPORTS[0]
}
