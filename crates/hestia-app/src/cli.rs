use clap::{Parser, Subcommand};

/// Hestia — a self-hosted dashboard of app tiles on a 10x6 grid.
#[derive(Parser, Debug)]
#[command(name = "hestia", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory for saved layout and theme (overrides `storage.data_dir`).
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print the resolved theme after the command runs.
    #[arg(long, global = true)]
    pub show_theme: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the dashboard grid.
    Show {
        /// Print tiles and resolved theme as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Add a 1x1 tile at the first free cell.
    Add {
        /// Tile name (defaults to "Static App").
        #[arg(default_value = "")]
        name: String,
    },
    /// Delete a tile by id.
    Delete { id: u64 },
    /// Rename a tile.
    Rename { id: u64, name: String },
    /// Drag a tile by whole cells.
    #[command(name = "move")]
    Move {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        cols: i32,
        #[arg(allow_negative_numbers = true)]
        rows: i32,
    },
    /// Drag a tile's resize handle by whole cells.
    Resize {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        cols: i32,
        #[arg(allow_negative_numbers = true)]
        rows: i32,
    },
    /// List base16 palettes and custom presets.
    Palettes,
    /// Apply a base16 palette by slug.
    Palette { slug: String },
    /// Manage custom presets.
    Preset {
        #[command(subcommand)]
        action: PresetCommand,
    },
    /// Set a theme key (e.g. `set bgCanvas 1d2021`, `set gapSize 12`).
    Set { key: String, value: String },
    /// Reset a color key to the active palette's value.
    Reset { key: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum PresetCommand {
    /// Apply a saved preset.
    Apply { name: String },
    /// Save the current colors as a preset.
    Save { name: String },
    /// List saved presets.
    List,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hestia").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_show() {
        let args = parse_from(&[]);
        assert!(args.command.is_none());
        assert!(!args.show_theme);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = parse_from(&["add", "Plex", "--data-dir", "/tmp/h", "--log-level", "debug"]);
        assert_eq!(args.command, Some(Command::Add { name: "Plex".into() }));
        assert_eq!(args.data_dir.as_deref(), Some("/tmp/h"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn show_json_flag() {
        let args = parse_from(&["show", "--json"]);
        assert_eq!(args.command, Some(Command::Show { json: true }));
    }

    #[test]
    fn add_without_name_is_blank() {
        let args = parse_from(&["add"]);
        assert_eq!(args.command, Some(Command::Add { name: String::new() }));
    }

    #[test]
    fn move_accepts_negative_deltas() {
        let args = parse_from(&["move", "7", "-2", "1"]);
        assert_eq!(
            args.command,
            Some(Command::Move {
                id: 7,
                cols: -2,
                rows: 1
            })
        );
    }

    #[test]
    fn preset_subcommands() {
        let args = parse_from(&["preset", "save", "Late Night"]);
        assert_eq!(
            args.command,
            Some(Command::Preset {
                action: PresetCommand::Save {
                    name: "Late Night".into()
                }
            })
        );
        let args = parse_from(&["preset", "list"]);
        assert_eq!(
            args.command,
            Some(Command::Preset {
                action: PresetCommand::List
            })
        );
    }
}
