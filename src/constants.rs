/// Color used for lines with no palette entry and for stations no selected line touches
pub const DEFAULT_FALLBACK_COLOR: &str = "lightgray";

/// Official London Underground line colors, in the order they are offered to the user
pub const LONDON_LINE_COLORS: [(&str, &str); 11] = [
    ("Bakerloo", "#a65a2a"),
    ("Central", "#e1251b"),
    ("Circle", "#ffcd00"),
    ("District", "#007934"),
    ("Hammersmith and City", "#ec9bad"),
    ("Jubilee", "#7b868c"),
    ("Metropolitan", "#870f54"),
    ("Northern", "#000000"),
    ("Piccadilly", "#000f9f"),
    ("Victoria", "#00a0df"),
    ("Waterloo and City", "#6bcdb2"),
];

/// Edge width when every line is drawn at once
pub const OVERVIEW_EDGE_WIDTH: f64 = 1.5;
pub const OVERVIEW_EDGE_ALPHA: f64 = 0.6;
pub const OVERVIEW_NODE_SIZE: f64 = 50.0;

/// Edge width when only the selected lines are drawn
pub const FOCUSED_EDGE_WIDTH: f64 = 2.5;
pub const FOCUSED_EDGE_ALPHA: f64 = 0.8;
pub const FOCUSED_NODE_SIZE: f64 = 70.0;

pub const STATION_LABEL_FONT_SIZE: f64 = 8.0;

/// Margin around the drawn stations, as a fraction of the map extent per side
pub const MAP_PADDING_FRACTION: f64 = 0.05;
