use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub debounce: DebounceConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub back_to_top: BackToTopConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve used by scroll animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump at the end
    None,
    Linear,
    /// Cubic ease-in-out (accelerate, then decelerate)
    #[default]
    CubicInOut,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Smooth scroll animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scroll-to-anchor instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate used when the host drives frames from a timer
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Subtract the header height from anchor targets
    #[serde(default = "default_true")]
    pub header_offset: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            header_offset: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Sticky header scroll handler
    #[serde(default = "default_header_wait")]
    pub header_wait_ms: u64,
    /// Active link scroll handler
    #[serde(default = "default_highlight_wait")]
    pub highlight_wait_ms: u64,
    /// Terminal resize handler (always trailing edge)
    #[serde(default = "default_resize_wait")]
    pub resize_wait_ms: u64,
    /// Fire scroll handlers on the leading edge
    #[serde(default = "default_true")]
    pub immediate: bool,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            header_wait_ms: default_header_wait(),
            highlight_wait_ms: default_highlight_wait(),
            resize_wait_ms: default_resize_wait(),
            immediate: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Scroll position past which the header switches to its scrolled style
    #[serde(default = "default_header_threshold")]
    pub scrolled_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: default_header_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Added to the scroll position before the section scan
    #[serde(default = "default_nav_offset")]
    pub nav_offset: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            nav_offset: default_nav_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackToTopConfig {
    /// Scroll position past which the button is shown
    #[serde(default = "default_show_threshold")]
    pub show_threshold: f64,
    /// Anchor the button scrolls to
    #[serde(default = "default_back_to_top_target")]
    pub target: String,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            show_threshold: default_show_threshold(),
            target: default_back_to_top_target(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Visible fraction of a target needed to reveal it (0.0-1.0)
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
    /// Added to the viewport bottom edge (negative shrinks the viewport)
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f64,
    /// Transition delay step between staggered children
    #[serde(default = "default_stagger_step")]
    pub stagger_step_ms: u64,
    /// Delay before a revealed target stops being observed
    #[serde(default = "default_unobserve_delay")]
    pub unobserve_delay_ms: u64,
    /// Elements watched for reveal
    #[serde(default = "default_reveal_selectors")]
    pub selectors: Vec<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            bottom_margin: default_bottom_margin(),
            stagger_step_ms: default_stagger_step(),
            unobserve_delay_ms: default_unobserve_delay(),
            selectors: default_reveal_selectors(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Delay before the body gets its `page-loaded` class
    #[serde(default = "default_loaded_delay")]
    pub loaded_delay_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loaded_delay_ms: default_loaded_delay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Page units rendered per terminal row
    #[serde(default = "default_units_per_row")]
    pub units_per_row: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            units_per_row: default_units_per_row(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glide")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_scroll_duration() -> u64 {
    800
}

fn default_animation_fps() -> u32 {
    60
}

fn default_header_wait() -> u64 {
    10
}

fn default_highlight_wait() -> u64 {
    50
}

fn default_resize_wait() -> u64 {
    150
}

fn default_header_threshold() -> f64 {
    100.0
}

fn default_nav_offset() -> f64 {
    100.0
}

fn default_show_threshold() -> f64 {
    500.0
}

fn default_back_to_top_target() -> String {
    "#hero".to_string()
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_bottom_margin() -> f64 {
    -50.0
}

fn default_stagger_step() -> u64 {
    100
}

fn default_unobserve_delay() -> u64 {
    1000
}

fn default_reveal_selectors() -> Vec<String> {
    [".card", ".contact-card", ".section-alt", "#available-spaces", "#location-highlights", "#why-us"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_loaded_delay() -> u64 {
    100
}

fn default_tick_rate() -> u64 {
    100
}

fn default_units_per_row() -> f64 {
    20.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> crate::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/glide/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("glide")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("glide.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = AppConfig::default();
        assert_eq!(config.scroll.duration_ms, 800);
        assert_eq!(config.scroll.easing, EasingType::CubicInOut);
        assert_eq!(config.debounce.resize_wait_ms, 150);
        assert_eq!(config.debounce.header_wait_ms, 10);
        assert_eq!(config.debounce.highlight_wait_ms, 50);
        assert!(config.debounce.immediate);
        assert_eq!(config.highlight.nav_offset, 100.0);
        assert_eq!(config.header.scrolled_threshold, 100.0);
        assert_eq!(config.back_to_top.show_threshold, 500.0);
        assert_eq!(config.back_to_top.target, "#hero");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroll]
            duration_ms = 400
            easing = "linear"

            [highlight]
            nav_offset = 64.0
            "#,
        )
        .unwrap();

        assert_eq!(config.scroll.duration_ms, 400);
        assert_eq!(config.scroll.easing, EasingType::Linear);
        assert!(config.scroll.smooth_enabled);
        assert_eq!(config.highlight.nav_offset, 64.0);
        assert_eq!(config.back_to_top.target, "#hero");
    }

    #[test]
    fn test_debounce_waits_per_handler() {
        let config: AppConfig = toml::from_str(
            r#"
            [debounce]
            header_wait_ms = 16
            resize_wait_ms = 300
            immediate = false
            "#,
        )
        .unwrap();

        assert_eq!(config.debounce.header_wait_ms, 16);
        assert_eq!(config.debounce.highlight_wait_ms, 50);
        assert_eq!(config.debounce.resize_wait_ms, 300);
        assert!(!config.debounce.immediate);
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("glide-no-such-config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.page.loaded_delay_ms, 100);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("glide-config-{}", std::process::id()))
            .join("config.toml");
        let mut config = AppConfig::default();
        config.scroll.duration_ms = 250;
        config.reveal.selectors = vec![".tile".to_string()];
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.scroll.duration_ms, 250);
        assert_eq!(loaded.reveal.selectors, [".tile"]);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_expand_tilde() {
        let plain = PathBuf::from("/var/lib/glide");
        assert_eq!(expand_tilde(&plain), plain);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/glide")), home.join("glide"));
        }
    }
}
