use metacity_geo::decode::read_devices;
use metacity_geo::normalize::normalize_devices;
use metacity_geo::{LayerState, MapConfig, plan_overlays};
use std::env;
use std::fs::File;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <devices.json>", args[0]);
        std::process::exit(1);
    }

    let mut warnings = Vec::new();
    let devices = read_devices(File::open(&args[1])?, &mut warnings)?;
    for warning in &warnings {
        eprintln!("warning: {warning:?}");
    }

    let devices = normalize_devices(devices);
    let config = MapConfig::default();

    let mut layers = LayerState::new();
    layers.register(&devices);

    println!("=== Layers ===");
    for category in layers.categories() {
        let count = layers.layer(category).map_or(0, |layer| layer.item_ids.len());
        println!("{category}: {count} devices");
    }

    println!("\n=== Visible devices ===");
    for device in layers.visible(&devices, &config.elevation_range) {
        let (lng, lat) = device.position.xy();
        println!("{} ({}) at {lat:.6}, {lng:.6}", device.id, device.sensor_type.as_str());

        for overlay in plan_overlays(device, None, &config)? {
            println!(
                "   {:?} {}: {} points",
                overlay.kind,
                overlay.color.as_str(),
                overlay.points.len()
            );
        }
    }

    Ok(())
}
