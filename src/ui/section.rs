use clap::ValueEnum;

/// Page sections, in display order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, ValueEnum)]
pub enum Section {
    #[default]
    Hero,
    Quotes,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Quotes,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Quotes => "Quotes",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    /// Whether this section shows a rotating carousel.
    pub fn rotates(self) -> bool {
        matches!(self, Section::Quotes | Section::Projects | Section::Skills)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn offset(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let index = (self.position() as isize + delta).rem_euclid(len);
        Self::ALL[index as usize]
    }
}
