//! Sustainable plumbing tips

/// Fixed advice list, served verbatim and in this order
pub const PLUMBING_TIPS: [&str; 8] = [
    "Install low-flow showerheads to reduce water usage by 40-50%",
    "Fix leaks promptly - a dripping faucet can waste 20 gallons of water a day",
    "Use water-efficient appliances (look for WaterSense labeled products)",
    "Install dual-flush toilets to save water with every flush",
    "Insulate hot water pipes to reduce heat loss and save water while waiting for hot water",
    "Collect rainwater for outdoor irrigation",
    "Use a broom instead of a hose to clean outdoor areas",
    "Water plants early in the morning or late in the evening to reduce evaporation",
];

pub fn plumbing_tips() -> &'static [&'static str] {
    &PLUMBING_TIPS
}
