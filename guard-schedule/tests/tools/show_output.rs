use guard_schedule::application::dto::{GuardCellDto, GuardRowDto, SiteRowDto};

pub fn show_guard_rows_debug_data(rows: &[GuardRowDto]) {
    println!("\n=======================================================");
    println!("[DEBUG] by guard ({} rows)", rows.len());
    println!("=======================================================");

    for row in rows {
        let cells: Vec<String> = row
            .days
            .iter()
            .map(|d| match &d.cell {
                GuardCellDto::Site { site_name, .. } => site_name.clone(),
                GuardCellDto::Free => "free".to_string(),
                GuardCellDto::Off => "off".to_string(),
                GuardCellDto::Leave => "leave".to_string(),
                GuardCellDto::Empty => "-".to_string(),
            })
            .collect();
        println!("  {:<14} | {}", row.guard.name, cells.join(" | "));
    }
    println!("=======================================================\n");
}

pub fn show_site_rows_debug_data(rows: &[SiteRowDto]) {
    println!("\n=======================================================");
    println!("[DEBUG] by site ({} rows)", rows.len());
    println!("=======================================================");

    for row in rows {
        println!("  {} (capacity {})", row.site.name, row.site.capacity);
        for day in &row.days {
            let slots: Vec<String> = day
                .slots
                .iter()
                .map(|s| s.as_ref().map(|g| g.name.clone()).unwrap_or_else(|| "(empty)".to_string()))
                .collect();
            println!("   ┣ {} : {}", day.date, slots.join(", "));
        }
    }
    println!("=======================================================\n");
}
