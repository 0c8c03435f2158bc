use quake_core::{EarthquakeRowView, LoadPhase, LoadViewModel, MagnitudeBucket};

/// Circle color for a magnitude bucket, lowest severity first.
pub fn bucket_color(bucket: MagnitudeBucket) -> &'static str {
    match bucket {
        MagnitudeBucket::Level(1) => "#4A7BA7",
        MagnitudeBucket::Level(2) => "#04B4B3",
        MagnitudeBucket::Level(3) => "#10CAC9",
        MagnitudeBucket::Level(4) => "#F5A623",
        MagnitudeBucket::Level(5) => "#FF7D50",
        MagnitudeBucket::Level(6) => "#FC6644",
        MagnitudeBucket::Level(7) => "#E75F40",
        MagnitudeBucket::Level(8) => "#E13A20",
        MagnitudeBucket::Level(9) => "#D93218",
        MagnitudeBucket::Level(_) | MagnitudeBucket::TenPlus => "#C03823",
    }
}

pub fn phase_label(phase: LoadPhase) -> &'static str {
    match phase {
        LoadPhase::Idle => "Idle",
        LoadPhase::CheckingConnectivity => "Checking connectivity",
        LoadPhase::Fetching => "Fetching",
        LoadPhase::Parsing => "Parsing",
        LoadPhase::Loaded => "Loaded",
        LoadPhase::Empty => "Empty",
        LoadPhase::Failed => "Failed",
    }
}

/// Text lines for the whole list screen.
pub fn render(view: &LoadViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 2);
    if let Some(status) = &view.status_text {
        lines.push(status.clone());
    }
    lines.extend(view.rows.iter().map(render_row));
    if view.skipped > 0 {
        lines.push(format!("({} malformed entries skipped)", view.skipped));
    }
    lines
}

fn render_row(row: &EarthquakeRowView) -> String {
    format!(
        "{:>5} {}  {:<14}{:<40} {} {:>8}  {}",
        row.magnitude,
        bucket_color(row.bucket),
        row.offset.to_uppercase(),
        row.place,
        row.date,
        row.time,
        row.detail_url
    )
}
