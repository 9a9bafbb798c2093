use eframe::egui::Color32;

use crate::analytics::score::OpportunityBand;
use crate::analytics::sources::SourceKind;
use crate::data::model::Category;

// ---------------------------------------------------------------------------
// Fixed dashboard palette
// ---------------------------------------------------------------------------

/// Scatter/bar color for a category. Fixed per category so the legend stays
/// stable across filter changes.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::CandyConfectionery => Color32::from_rgb(0xE6, 0x39, 0x46),
        Category::CookiesBiscuits => Color32::from_rgb(0xF4, 0xA2, 0x61),
        Category::ChipsSavory => Color32::from_rgb(0xE9, 0xC4, 0x6A),
        Category::GeneralSnacks => Color32::from_rgb(0xA8, 0xDA, 0xDC),
        Category::FruitVeg => Color32::from_rgb(0x52, 0xB7, 0x88),
        Category::NutsSeeds => Color32::from_rgb(0x2D, 0x9E, 0x6F),
        Category::DairyYogurt => Color32::from_rgb(0x58, 0xA6, 0xFF),
        Category::ProteinBars => Color32::from_rgb(0xBF, 0x91, 0xF3),
    }
}

/// Traffic-light color for an opportunity band.
pub fn band_color(band: OpportunityBand) -> Color32 {
    match band {
        OpportunityBand::High => Color32::from_rgb(0x3F, 0xB9, 0x50),
        OpportunityBand::Medium => Color32::from_rgb(0xD2, 0x99, 0x22),
        OpportunityBand::Low => Color32::from_rgb(0xE6, 0x39, 0x46),
    }
}

/// Plant vs animal protein sources.
pub fn source_color(kind: SourceKind) -> Color32 {
    match kind {
        SourceKind::Plant => Color32::from_rgb(0x3F, 0xB9, 0x50),
        SourceKind::Animal => Color32::from_rgb(0x58, 0xA6, 0xFF),
    }
}

/// Accent color for the Blue Ocean zone overlay.
pub const BLUE_OCEAN_ACCENT: Color32 = Color32::from_rgb(0x58, 0xA6, 0xFF);
