//! Top-level section selection.

/// One of the five fixed portal sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    News,
    Gallery,
    Tree,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::News,
        Section::Gallery,
        Section::Tree,
        Section::Contacts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::News => "Новости",
            Section::Gallery => "Галерея",
            Section::Tree => "Родословная",
            Section::Contacts => "Контакты",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::News => 1,
            Section::Gallery => 2,
            Section::Tree => 3,
            Section::Contacts => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Default)]
pub struct ViewRouter {
    current: Section,
}

impl ViewRouter {
    pub fn current(&self) -> Section {
        self.current
    }

    pub fn select(&mut self, section: Section) {
        self.current = section;
    }
}
