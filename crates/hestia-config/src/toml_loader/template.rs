//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Hestia Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Saved state (theme edits, tile layout) lives in the data directory and
# takes precedence over [theme], [custom_presets] and [[apps]] below.

[theme]
# bgCanvas = "#0f1115"
# bgSurface = "#181b21"
# bgHighlight = "#242832"
# borderDim = "#2a2e38"
# borderBright = "#3d4352"
# textMain = "#e6e6e6"
# textMuted = "#9aa0ab"
# textFaint = "#5c6370"
# textInverse = "#0f1115"
# brandPrimary = "#98c379"
# brandSecondary = "#61afef"
# brandTertiary = "#c678dd"
# statusError = "#e06c75"
# statusWarning = "#d19a66"
# statusSuccess = "#98c379"
# gapSize = "10px"         # bare numbers are pixels
# borderRadius = "6px"
# gridPadding = "20px"
# fontFamily = "Courier New"
# titleBarIcon = "fa-server"
# titleBarText = "HestiaHUD"
# shadow = true
# outlines = false
# activePalette = "nord"   # base16 slug; enables reset-to-palette

[custom_presets]
# [custom_presets.Evening]
# bgCanvas = "#101018"
# statusError = "#ff5555"

# Initial tiles, used until a layout has been saved. Grid is 10x6, 1-based.
# [[apps]]
# id = 1
# name = "Plex"
# type = "static"
# x = 1
# y = 1
# cols = 2
# rows = 1

[storage]
# data_dir = "/path/to/state"        # default: platform data dir
# palettes_dir = "/path/to/palettes" # default: <config dir>/hestia/palettes

[surface]
# grid_width = 1200.0
# grid_height = 600.0
# show_theme = false

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
