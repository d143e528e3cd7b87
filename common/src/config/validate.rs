/// Structural validation run by [`super::ConfigManager`] before a config is
/// accepted, both when loading and when storing.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
