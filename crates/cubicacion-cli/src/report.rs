use crate::input::volume_m3;
use colored::*;
use cubicacion_core::{
    BoxTypeEvaluation, LengthUnit, MultiPackResult, PalletLoad, UnitInBoxLayout, VehicleLoad,
    WeightSummary,
};

pub fn print_unit_in_box(layout: Option<&UnitInBoxLayout>, unit: LengthUnit) {
    let Some(layout) = layout else {
        println!(
            "{}",
            "❌ The product does not fit in the box in any orientation".bright_red()
        );
        return;
    };

    let symbol = unit.symbol();
    println!("{}", "📦 Units in box:".bright_yellow().bold());
    println!(
        "  Orientation: {} x {} x {} {}",
        layout.orientation.length, layout.orientation.width, layout.orientation.height, symbol
    );
    println!(
        "  Grid: {} x {} x {}",
        layout.counts.x, layout.counts.y, layout.counts.z
    );
    println!(
        "  Units per box: {}",
        layout.total_units.to_string().bright_white().bold()
    );
    println!(
        "  Cavity: {} x {} x {} {} ({:.4} m³)",
        layout.cavity.length,
        layout.cavity.width,
        layout.cavity.height,
        symbol,
        volume_m3(&layout.cavity, unit)
    );
    println!("  Occupancy: {:.2}%", layout.occupancy_pct);
}

pub fn print_pallet(load: &PalletLoad) {
    println!("{}", "🧱 Boxes on pallet:".bright_yellow().bold());
    if load.total_boxes == 0 {
        println!("  {}", "No box fits on the pallet".bright_red());
    }
    println!(
        "  Per layer: {} x {} = {}{}",
        load.boxes_along_length,
        load.boxes_along_width,
        load.boxes_per_layer,
        if load.rotated { " (rotated 90°)" } else { "" }
    );
    println!("  Layers: {} (load height {:.3} m)", load.layers, load.load_height);
    println!(
        "  Total boxes: {}",
        load.total_boxes.to_string().bright_white().bold()
    );
    println!(
        "  Total products: {}",
        load.total_units.to_string().bright_white().bold()
    );
    println!(
        "  Occupancy: {:.2}% of {:.3} m³",
        load.occupancy_pct, load.container_volume
    );
    print_weight(&load.weight);
}

pub fn print_vehicle(load: &VehicleLoad) {
    println!("{}", "🚚 Pallets in vehicle:".bright_yellow().bold());
    if load.total_pallets == 0 {
        println!("  {}", "No pallet fits in the vehicle".bright_red());
    }
    println!(
        "  Per layer: {} x {} = {}{}",
        load.pallets_along_length,
        load.pallets_along_width,
        load.pallets_per_layer,
        if load.rotated { " (rotated 90°)" } else { "" }
    );
    println!("  Layers: {}", load.layers);
    println!(
        "  Total pallets: {}",
        load.total_pallets.to_string().bright_white().bold()
    );
    println!(
        "  Total products: {}",
        load.total_units.to_string().bright_white().bold()
    );
    println!(
        "  Occupancy: {:.2}% of {:.3} m³",
        load.occupancy_pct, load.vehicle_volume
    );
    print_weight(&load.weight);
}

fn print_weight(weight: &WeightSummary) {
    let Some(total) = weight.total else {
        println!("  Weight: {}", "unknown".dimmed());
        return;
    };

    match (weight.max_payload, weight.utilization_pct) {
        (Some(max), Some(pct)) => {
            let line = format!("  Weight: {:.1} kg of {:.1} kg ({:.1}%)", total, max, pct);
            if weight.exceeds_max {
                println!("{} {}", line.bright_red(), "⚠️ over the limit".bright_red().bold());
            } else {
                println!("{}", line.bright_green());
            }
        }
        _ => println!("  Weight: {:.1} kg (no limit known)", total),
    }
}

pub fn print_multi(result: &MultiPackResult) {
    println!("{}", "📊 Results:".bright_yellow().bold());
    println!(
        "  Boxes required: {}",
        result.total_bins.to_string().bright_white().bold()
    );
    println!("  Global occupancy: {:.1}%", result.global_occupancy_pct);

    for bin in &result.bins {
        println!(
            "    • Box #{}: {:.1}% full",
            bin.index.to_string().bright_white(),
            bin.occupancy_pct
        );
        for content in &bin.contents {
            println!(
                "        {} x {}",
                content.units,
                content.code.as_deref().unwrap_or(&content.key).bright_cyan()
            );
        }
    }
}

pub fn print_ranking(ranked: &[BoxTypeEvaluation]) {
    if ranked.is_empty() {
        println!(
            "{}",
            "❌ No box type in the catalog can hold these products".bright_red()
        );
        return;
    }

    println!("{}", "🏆 Best box types:".bright_yellow().bold());
    for (position, evaluation) in ranked.iter().enumerate() {
        let Some(packing) = &evaluation.packing else {
            continue;
        };

        let star = if evaluation.box_type.preferred { " ★" } else { "" };
        println!(
            "  {}. {}{}: {} boxes, {:.1}% occupancy",
            position + 1,
            evaluation.box_type.code.bright_white().bold(),
            star.bright_yellow(),
            packing.total_bins,
            packing.global_occupancy_pct
        );
    }
}
