mod theme;

pub use theme::ThemeCommands;
