//! Formatting one date in every layout, typed and from loose arguments.

use chrono::NaiveDate;
use utilkit::{
    format_date_value, format_date_with_options, DateFormatOptions, Layout, Separator, Value,
};

fn main() -> Result<(), utilkit::Error> {
    let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(13, 7, 0))
        .ok_or_else(|| utilkit::Error::invalid_date("2024-03-05 13:07"))?;

    for layout in [Layout::Eu, Layout::Us, Layout::Database] {
        for sep in [Separator::Slash, Separator::Dash] {
            let options = DateFormatOptions::new().with_separator(sep);
            let text = format_date_with_options(dt, layout, &options)?;
            println!("{:<9} {}  [{}]", format!("{:?}", layout), sep, text);
        }
    }

    let text = format_date_value(
        &Value::from("2024-03-05"),
        &Value::from(1),
        Some(&Value::from(false)),
        None,
    )?;
    println!("\nFrom loose arguments: [{}]", text);

    match format_date_value(&Value::from("2024-03-05"), &Value::from("abc"), None, None) {
        Ok(text) => println!("unexpected: {}", text),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
