//! # Navigation
//!
//! The six in-page jump targets and the collapsible menu that lists them.

/// In-page navigation targets, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Same-document anchor (`#about`, ...).
    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "#about",
            Section::Experience => "#experience",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Education => "#education",
            Section::Contact => "#contact",
        }
    }

    /// Maps the `1`..`6` shortcut keys onto sections.
    pub fn from_digit(c: char) -> Option<Section> {
        let index = c.to_digit(10)?.checked_sub(1)?;
        Section::ALL.get(index as usize).copied()
    }
}

/// Open/closed flag for the collapsible navigation panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Choosing a link always closes the panel.
    pub fn select_link(&mut self) {
        self.open = false;
    }
}
