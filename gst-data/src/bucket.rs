//! Fixed temperature color table.
//!
//! Eight buckets ordered hottest first. Lookup is a linear scan with
//! inclusive lower bounds; the last bucket has no bound and catches
//! everything that falls through, including non-finite temperatures.

/// One entry in the temperature color table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempBucket {
    /// Inclusive lower bound in °C, or None for the coldest catch-all.
    pub lower_bound: Option<f64>,
    /// Cell fill and legend swatch color.
    pub color: &'static str,
    /// Legend label.
    pub label: &'static str,
}

/// The eight buckets, hottest first.
pub const BUCKETS: [TempBucket; 8] = [
    TempBucket {
        lower_bound: Some(12.0),
        color: "#ff6600",
        label: "over 12°C",
    },
    TempBucket {
        lower_bound: Some(10.0),
        color: "#ff944d",
        label: "10-12°C",
    },
    TempBucket {
        lower_bound: Some(9.0),
        color: "#ffa64d",
        label: "9-10°C",
    },
    TempBucket {
        lower_bound: Some(8.0),
        color: "#ffcc66",
        label: "8-9°C",
    },
    TempBucket {
        lower_bound: Some(7.0),
        color: "#ffff99",
        label: "7-8°C",
    },
    TempBucket {
        lower_bound: Some(6.0),
        color: "#e6e6ff",
        label: "6-7°C",
    },
    TempBucket {
        lower_bound: Some(4.0),
        color: "#ccccff",
        label: "4-6°C",
    },
    TempBucket {
        lower_bound: None,
        color: "#9999ff",
        label: "below 4°C",
    },
];

/// First bucket whose lower bound `temperature` meets, scanning hottest
/// first. A NaN temperature fails every comparison and lands in the
/// catch-all, coloring the cell as "below 4°C".
pub fn bucket_for(temperature: f64) -> &'static TempBucket {
    for bucket in &BUCKETS {
        if let Some(bound) = bucket.lower_bound {
            if temperature >= bound {
                return bucket;
            }
        }
    }
    // Nothing matched, including NaN: the unbounded final bucket.
    &BUCKETS[BUCKETS.len() - 1]
}

/// Cell fill color for `base_temperature + variance`.
pub fn cell_color(base_temperature: f64, variance: f64) -> &'static str {
    bucket_for(base_temperature + variance).color
}
