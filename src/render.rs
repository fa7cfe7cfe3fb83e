//! HTML output for the dashboard screens.

use crate::models::{FoodType, MealType};
use crate::presentation::{BarChart, Presentation};
use crate::table::DataTable;
use crate::views::{
    ClaimsScreen, CreateOutcome, CreatorScreen, DashboardScreen, ListingBrowserScreen, ReportScreen, View,
};
use std::fmt::Write as _;

const STYLE: &str = "
*{box-sizing:border-box}
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;font-size:14px;color:#1f2430;background:#f6f7f9;display:flex;min-height:100vh}
nav{width:230px;background:#fff;border-right:1px solid #e2e5ea;padding:18px 14px}
nav h2{font-size:15px;margin:0 0 12px}
nav a{display:block;padding:7px 10px;border-radius:6px;color:#1f2430;text-decoration:none;margin-bottom:2px}
nav a.active,nav a:hover{background:#e9f1ff;color:#1e5cd6}
main{flex:1;padding:22px 30px;overflow-x:auto}
h1{font-size:22px;margin:0 0 4px}
.lede{color:#5c6475;margin:0 0 20px}
.metrics{display:flex;gap:16px;margin-bottom:18px}
.metric{flex:1;background:#fff;border:1px solid #e2e5ea;border-radius:8px;padding:14px}
.metric .label{font-size:12px;color:#5c6475}
.metric .value{font-size:28px;font-weight:600}
table{border-collapse:collapse;background:#fff;width:100%;margin:10px 0}
th,td{border:1px solid #e2e5ea;padding:5px 9px;text-align:left}
th{background:#f0f2f5}
td.num{text-align:right}
.chart{background:#fff;border:1px solid #e2e5ea;border-radius:8px;padding:12px;margin:10px 0}
.bar-row{display:flex;align-items:center;gap:8px;margin:4px 0}
.bar-label{width:200px;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.bar{height:18px;background:#4a8aff;border-radius:3px;min-width:1px}
.bar-value{color:#5c6475;font-size:12px}
.filters{display:flex;gap:16px;align-items:flex-end}
.filters label,.form label{display:flex;flex-direction:column;font-size:12px;color:#5c6475;gap:4px}
select,input{padding:5px 8px;border:1px solid #cfd4dc;border-radius:5px;font-size:14px}
.form{display:grid;grid-template-columns:repeat(2,minmax(200px,360px));gap:12px 20px;margin-bottom:12px}
button{padding:7px 14px;border:none;border-radius:6px;background:#1e5cd6;color:#fff;cursor:pointer}
.notice{padding:10px 14px;border-radius:6px;margin:10px 0}
.success{background:#e6f6ea;color:#1d6b35}
.failure{background:#fdecec;color:#a02525}
.empty{color:#5c6475;font-style:italic}
";

#[derive(Debug, Clone)]
pub struct Renderer {
    title: String,
}

impl Renderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    fn page(&self, active: Option<View>, body: &str) -> String {
        let mut html = String::with_capacity(body.len() + 4096);
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
             <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<nav>\n<h2>Navigation</h2>\n",
            title = escape(&self.title)
        );
        for view in View::ALL {
            let class = if Some(view) == active { " class=\"active\"" } else { "" };
            let _ = writeln!(html, "<a href=\"{}\"{class}>{}</a>", view.path(), escape(view.label()));
        }
        let _ = write!(
            html,
            "</nav>\n<main>\n<h1>{title}</h1>\n\
             <p class=\"lede\">A platform to reduce food wastage by connecting providers with receivers.</p>\n\
             {body}</main>\n</body>\n</html>\n",
            title = escape(&self.title)
        );
        html
    }

    pub fn dashboard(&self, screen: &DashboardScreen) -> String {
        let mut body = heading(View::Dashboard);
        body.push_str("<div class=\"metrics\">\n");
        for metric in &screen.metrics {
            body.push_str(&presentation(metric));
        }
        body.push_str("</div>\n<h3>Food Listings by City</h3>\n");
        body.push_str(&presentation(&screen.listings_by_city));
        self.page(Some(View::Dashboard), &body)
    }

    pub fn listing_browser(&self, screen: &ListingBrowserScreen) -> String {
        let mut body = heading(View::ListingBrowser);
        let filters = &screen.filters;
        let _ = write!(
            body,
            "<form class=\"filters\" method=\"get\" action=\"{action}\">\n{city}{food}{meal}\
             <button type=\"submit\">Apply</button>\n</form>\n",
            action = View::ListingBrowser.path(),
            city = select("City", "city", &screen.options.cities, filters.city.as_deref(), true),
            food = select("Food Type", "food_type", &screen.options.food_types, filters.food_type.as_deref(), true),
            meal = select("Meal Type", "meal_type", &screen.options.meal_types, filters.meal_type.as_deref(), true),
        );
        body.push_str(&table(&screen.listings));
        self.page(Some(View::ListingBrowser), &body)
    }

    pub fn claims_browser(&self, screen: &ClaimsScreen) -> String {
        let mut body = heading(View::ClaimsBrowser);
        let _ = writeln!(
            body,
            "<p>{} claims, {} completed.</p>",
            screen.claims.row_count(),
            screen.completed
        );
        body.push_str(&table(&screen.claims));
        self.page(Some(View::ClaimsBrowser), &body)
    }

    pub fn report_runner(&self, screen: &ReportScreen) -> String {
        let mut body = heading(View::ReportRunner);
        let _ = write!(
            body,
            "<form class=\"filters\" method=\"get\" action=\"{}\">\n\
             <label>Select a Query<select name=\"report\" onchange=\"this.form.submit()\">\n",
            View::ReportRunner.path()
        );
        for report in screen.reports {
            let selected = if report.number == screen.selected.number { " selected" } else { "" };
            let _ = writeln!(
                body,
                "<option value=\"{}\"{selected}>{}</option>",
                report.number,
                escape(report.label)
            );
        }
        body.push_str("</select></label>\n<button type=\"submit\">Run</button>\n</form>\n");
        let _ = writeln!(body, "<h3>{}</h3>", escape(screen.selected.label));
        body.push_str(&presentation(&screen.result));
        self.page(Some(View::ReportRunner), &body)
    }

    pub fn listing_creator(&self, screen: &CreatorScreen) -> String {
        let mut body = heading(View::ListingCreator);
        match &screen.outcome {
            Some(CreateOutcome::Created { food_id }) => {
                let _ = writeln!(
                    body,
                    "<div class=\"notice success\">Food listing added successfully! (Food ID {food_id})</div>"
                );
            }
            Some(CreateOutcome::Rejected { reason }) => {
                let _ = writeln!(body, "<div class=\"notice failure\">{}</div>", escape(reason));
            }
            None => {}
        }

        let form = &screen.form;
        let min_expiry = screen.min_expiry.format("%Y-%m-%d").to_string();
        let food_types: Vec<String> = FoodType::ALL.iter().map(|value| value.as_str().to_string()).collect();
        let meal_types: Vec<String> = MealType::ALL.iter().map(|value| value.as_str().to_string()).collect();
        let _ = write!(
            body,
            "<form method=\"post\" action=\"{action}\">\n<div class=\"form\">\n\
             {name}{quantity}{expiry}{provider_id}{provider_type}{location}{food_type}{meal_type}\
             </div>\n<button type=\"submit\">Add Food</button>\n</form>\n",
            action = View::ListingCreator.path(),
            name = input("Food Name", "food_name", "text", &form.food_name, ""),
            quantity = input("Quantity", "quantity", "number", &form.quantity, " min=\"1\" step=\"1\""),
            expiry = input(
                "Expiry Date",
                "expiry_date",
                "date",
                &form.expiry_date,
                &format!(" min=\"{min_expiry}\"")
            ),
            provider_id = input("Provider ID", "provider_id", "number", &form.provider_id, " min=\"1\" step=\"1\""),
            provider_type = input("Provider Type", "provider_type", "text", &form.provider_type, ""),
            location = input("City", "location", "text", &form.location, ""),
            food_type = select("Food Type", "food_type", &food_types, Some(form.food_type.as_str()), false),
            meal_type = select("Meal Type", "meal_type", &meal_types, Some(form.meal_type.as_str()), false),
        );
        self.page(Some(View::ListingCreator), &body)
    }

    /// Generic failure page. The detail stays in the logs.
    pub fn failure(&self, message: &str) -> String {
        let body = format!("<div class=\"notice failure\">{}</div>\n", escape(message));
        self.page(None, &body)
    }
}

fn heading(view: View) -> String {
    format!("<h2>{}</h2>\n", escape(view.heading()))
}

pub fn presentation(presentation: &Presentation) -> String {
    match presentation {
        Presentation::Metric { label, value } => format!(
            "<div class=\"metric\"><div class=\"label\">{}</div><div class=\"value\">{value}</div></div>\n",
            escape(label)
        ),
        Presentation::Table { table: data } => table(data),
        Presentation::Chart { chart, table: data } => {
            let mut html = bar_chart(chart);
            html.push_str(&table(data));
            html
        }
    }
}

pub fn table(table: &DataTable) -> String {
    if table.columns.is_empty() {
        return "<p class=\"empty\">No columns returned.</p>\n".to_string();
    }
    let mut html = String::from("<table>\n<thead><tr>");
    for column in &table.columns {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let class = if cell.as_f64().is_some() { " class=\"num\"" } else { "" };
            let _ = write!(html, "<td{class}>{}</td>", escape(&cell.to_string()));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    if table.is_empty() {
        html.push_str("<p class=\"empty\">No rows.</p>\n");
    }
    html
}

pub fn bar_chart(chart: &BarChart) -> String {
    let max = chart.max_value();
    let mut html = format!(
        "<div class=\"chart\" data-category=\"{}\" data-value=\"{}\">\n",
        escape(&chart.category_label),
        escape(&chart.value_label)
    );
    for bar in &chart.bars {
        let width = if max > 0.0 { (bar.value.max(0.0) / max) * 100.0 } else { 0.0 };
        let _ = writeln!(
            html,
            "<div class=\"bar-row\"><span class=\"bar-label\">{}</span>\
             <span class=\"bar\" style=\"width:{width:.1}%\"></span>\
             <span class=\"bar-value\">{}</span></div>",
            escape(&bar.category),
            format_value(bar.value)
        );
    }
    if chart.bars.is_empty() {
        html.push_str("<p class=\"empty\">Nothing to chart.</p>\n");
    }
    html.push_str("</div>\n");
    html
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn select(label: &str, name: &str, options: &[String], selected: Option<&str>, submit_on_change: bool) -> String {
    let selected = selected.unwrap_or(options.first().map(String::as_str).unwrap_or_default());
    let onchange = if submit_on_change { " onchange=\"this.form.submit()\"" } else { "" };
    let mut html = format!("<label>{}<select name=\"{name}\"{onchange}>", escape(label));
    // A value the options no longer offer (an old link, a rejected form)
    // is still shown as the active choice.
    if !selected.is_empty() && !options.iter().any(|option| option == selected) {
        let value = escape(selected);
        let _ = write!(html, "<option value=\"{value}\" selected>{value}</option>");
    }
    for option in options {
        let marker = if option == selected { " selected" } else { "" };
        let value = escape(option);
        let _ = write!(html, "<option value=\"{value}\"{marker}>{value}</option>");
    }
    html.push_str("</select></label>\n");
    html
}

fn input(label: &str, name: &str, kind: &str, value: &str, extra: &str) -> String {
    format!(
        "<label>{}<input type=\"{kind}\" name=\"{name}\" value=\"{}\"{extra} required></label>\n",
        escape(label),
        escape(value)
    )
}

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
