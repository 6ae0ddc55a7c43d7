use num_format::{Locale, ToFormattedString as _};

/// Formats an amount as whole Vietnamese đồng: rounded to the nearest unit,
/// thousands grouped with `.` per the `vi` locale, glyph suffixed with no
/// space, leading `-` preserved for negative amounts.
///
/// This is the single formatting authority for every widget host; both
/// platforms must show byte-identical strings for the same stored value.
pub fn format_dong(amount: f64) -> String {
    let whole = amount.round() as i64;
    format!("{}₫", whole.to_formatted_string(&Locale::vi))
}
