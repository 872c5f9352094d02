//! WMO weather code to display glyph.

/// Total mapping from WMO weather code to a glyph.
///
/// Codes outside the table take the partly-sunny default arm, so an
/// unmapped code can never surface as an absent value.
pub fn weather_icon(code: u32) -> &'static str {
    match code {
        0 => "☀️",
        1 => "🌤️",
        2 => "⛅",
        3 => "☁️",
        45 | 48 => "🌫️",
        51 | 53 | 55 | 61 | 80 => "🌧️",
        63 | 65 | 81 | 82 | 95 | 96 | 99 => "⛈️",
        71 | 73 | 75 | 77 | 85 | 86 => "❄️",
        _ => "🌤️",
    }
}
