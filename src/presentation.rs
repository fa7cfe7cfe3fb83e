use crate::table::{CellValue, DataTable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Presentation {
    Metric { label: String, value: i64 },
    Table { table: DataTable },
    Chart { chart: BarChart, table: DataTable },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub category_label: String,
    pub value_label: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
}

impl BarChart {
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }
}

/// Chooses how a result is shown from its shape alone: two columns become a
/// bar chart of the first column against the second, anything else a table.
pub fn present(table: DataTable) -> Presentation {
    match bar_chart(&table) {
        Some(chart) => Presentation::Chart { chart, table },
        None => Presentation::Table { table },
    }
}

/// Builds a chart when the table has exactly two columns. Non-numeric values
/// plot as zero.
pub fn bar_chart(table: &DataTable) -> Option<BarChart> {
    let [category_label, value_label] = table.columns.as_slice() else {
        return None;
    };
    let bars = table
        .rows
        .iter()
        .map(|row| Bar {
            category: row.first().map(ToString::to_string).unwrap_or_default(),
            value: row.get(1).and_then(CellValue::as_f64).unwrap_or(0.0),
        })
        .collect();
    Some(BarChart {
        category_label: category_label.clone(),
        value_label: value_label.clone(),
        bars,
    })
}

#[cfg(test)]
mod tests {
    use super::{present, Presentation};
    use crate::table::{CellValue, DataTable};

    fn synthetic(columns: usize) -> DataTable {
        let mut table = DataTable::new((0..columns).map(|index| format!("c{index}")).collect());
        table.rows.push(
            (0..columns)
                .map(|index| {
                    if index == 0 {
                        CellValue::Text("row".to_string())
                    } else {
                        CellValue::Integer(index as i64)
                    }
                })
                .collect(),
        );
        table
    }

    #[test]
    fn only_two_column_results_become_charts() {
        for columns in [1, 3, 5] {
            assert!(
                matches!(present(synthetic(columns)), Presentation::Table { .. }),
                "{columns} columns should render as a table"
            );
        }
        let Presentation::Chart { chart, table } = present(synthetic(2)) else {
            panic!("two columns should render as a chart");
        };
        assert_eq!(chart.category_label, "c0");
        assert_eq!(chart.value_label, "c1");
        assert_eq!(chart.bars.len(), 1);
        assert_eq!(chart.bars[0].category, "row");
        assert_eq!(chart.bars[0].value, 1.0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn empty_two_column_result_is_an_empty_chart() {
        let table = DataTable::new(vec!["Location".to_string(), "Listings".to_string()]);
        let Presentation::Chart { chart, .. } = present(table) else {
            panic!("shape, not content, decides");
        };
        assert!(chart.bars.is_empty());
        assert_eq!(chart.max_value(), 0.0);
    }

    #[test]
    fn null_and_text_values_plot_as_zero() {
        let mut table = DataTable::new(vec!["Name".to_string(), "Avg".to_string()]);
        table.rows.push(vec![CellValue::Text("a".into()), CellValue::Null]);
        table.rows.push(vec![CellValue::Text("b".into()), CellValue::Real(2.5)]);
        let Presentation::Chart { chart, .. } = present(table) else {
            panic!("chart expected");
        };
        assert_eq!(chart.bars[0].value, 0.0);
        assert_eq!(chart.max_value(), 2.5);
    }
}
