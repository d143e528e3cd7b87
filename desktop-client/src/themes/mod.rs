mod animation;
mod loader;

pub use animation::frame_index;
pub use loader::{
    apply_theme, load_theme_entries, manifest_path, themes_dir, ActiveTheme, ThemeArt, ThemeKind,
    ThemeEntry, CLASSIC_THEME_ID,
};
