use chrono::Local;
use mikomi_core::{time, DayEntry, ForecastView};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    day_of_week: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Mark")]
    marker: String,
}

#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "Bucket")]
    label: String,
    #[tabled(rename = "Total")]
    total: i64,
}

fn day_marker(entry: &DayEntry) -> &'static str {
    let today = Local::now().date_naive();
    match time::parse_date_key(&entry.date) {
        Some(day) if time::is_same_day(day, today) => "today",
        _ => "",
    }
}

fn format_quantity(quantity: Option<f64>) -> String {
    match quantity {
        Some(q) => format!("{}", q),
        None => "-".to_string(),
    }
}

pub fn print_view(forecast: &ForecastView) {
    println!(
        "\n\x1b[1;36m{}年{}月\x1b[0m (単位: {})",
        forecast.target_month.year,
        forecast.target_month.month_number(),
        if forecast.unit.is_empty() { "-" } else { forecast.unit.as_str() },
    );

    let day_rows: Vec<DayRow> = forecast
        .days
        .iter()
        .map(|entry| DayRow {
            date: entry.date.clone(),
            day_of_week: entry.day_of_week.clone(),
            quantity: format_quantity(entry.quantity),
            marker: day_marker(entry).to_string(),
        })
        .collect();
    let mut day_table = Table::new(day_rows);
    day_table.with(Style::rounded());
    println!("{}", day_table);

    println!("月合計: {}", forecast.daily_total);

    if !forecast.dekad_buckets.is_empty() {
        let bucket_rows: Vec<BucketRow> = forecast
            .dekad_buckets
            .iter()
            .map(|bucket| BucketRow {
                label: bucket.label.clone(),
                total: bucket.total,
            })
            .collect();
        let mut bucket_table = Table::new(bucket_rows);
        bucket_table.with(Style::rounded());
        println!("\n旬別予測\n{}", bucket_table);
    }

    if let Some(monthly) = &forecast.monthly_bucket {
        println!("\n月別予測: {} = {}", monthly.label, monthly.total);
    }
}
