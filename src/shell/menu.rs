//! Menu entries

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Prompt for name, id and grade and insert a record.
    Add,
    /// Remove every record with an id.
    Remove,
    /// Show the first record with an id.
    Search,
    /// List every record in order.
    DisplayAll,
    /// Save the collection and end the session.
    SaveAndExit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Remove,
        Self::Search,
        Self::DisplayAll,
        Self::SaveAndExit,
    ];

    /// Number the user types to pick this entry.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Remove => 2,
            Self::Search => 3,
            Self::DisplayAll => 4,
            Self::SaveAndExit => 5,
        }
    }

    /// Text shown next to the number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Student",
            Self::Remove => "Remove Student",
            Self::Search => "Search Student",
            Self::DisplayAll => "Display All Students",
            Self::SaveAndExit => "Save and Exit",
        }
    }

    /// Parse a line of user input into a menu entry.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let number = line.trim().parse::<u8>().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}
