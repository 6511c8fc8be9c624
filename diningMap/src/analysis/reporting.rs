use std::path::Path;

use crate::data::registry::LocationRegistry;
use crate::geo::distance::DistanceEstimate;
use crate::publish::publisher::ViewerOutcome;
use crate::render::navigation::NavProvider;

const RULE_WIDTH: usize = 60;

pub fn print_banner(registry: &LocationRegistry) {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("    🍴 VIRGINIA TECH DINING HALLS GPS NAVIGATOR 🍴");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "\n📊 Tracking {} all-you-care-to-eat dining locations",
        registry.len()
    );
}

pub fn print_locations(registry: &LocationRegistry) {
    println!("\n🏫 Available Dining Halls:");
    println!("{}", "-".repeat(50));
    for location in registry {
        println!("  • {} [{}]", location.get_name(), location.get_category().display_name());
        println!("    Hours: {}", location.get_hours());
    }
}

pub fn print_distance_table(estimates: &[DistanceEstimate<'_>]) {
    println!("\n🚶 Walking distances:");
    println!("{}", "-".repeat(50));
    for estimate in estimates {
        println!(
            "  {:<24} {:>7.0} m  ~{} min",
            estimate.location.get_name(),
            estimate.meters,
            estimate.minutes
        );
    }
}

pub fn print_publish_result(path: &Path, viewer: &ViewerOutcome) {
    println!("\n✅ Map saved to: {}", path.display());
    match viewer {
        ViewerOutcome::Opened => println!("✅ Map opened in your default browser"),
        ViewerOutcome::Skipped => println!("   Open the file in a browser to view it"),
        ViewerOutcome::Failed(err) => {
            println!("⚠️ Could not open browser automatically: {:#}", err);
            println!("   Please open the file manually: {}", path.display());
        }
    }
}

pub fn print_usage(viewer: &ViewerOutcome) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    match viewer {
        ViewerOutcome::Opened => println!("📱 MAP READY - OPENED IN YOUR BROWSER!"),
        _ => println!("📱 MAP READY!"),
    }
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("\n🎯 How to Use:");
    println!("  1. Click any dining hall marker to see details");
    println!("  2. Use the navigation buttons to get directions:");
    for provider in NavProvider::ALL {
        println!("     • {} ({})", provider.display_name(), provider.usage_hint());
    }
    println!("  3. Optional: Click location button (📍) for distance calculation");
    println!("\n🦃 Go Hokies! Enjoy your meal!");
}
