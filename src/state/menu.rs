//! Header menu state machine.
//!
//! The persistent header carries the site's top-level menu; items either
//! navigate directly or expand a dropdown (course list, success stories,
//! resources). Keyboard-driven: left/right across top-level items, down
//! into a dropdown, enter to follow a link.
//!
//! Two menu links point at success-story paths the route table does not
//! carry; following them lands on the not-found unit, same as the
//! original site's dead links.

// ===== Menu data =====

/// One dropdown row.
#[derive(Debug, Clone, Copy)]
pub struct DropdownItem {
    /// Row label.
    pub label: &'static str,
    /// Route navigated to on activation.
    pub link: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Duration or highlight detail, shown dimmed.
    pub detail: &'static str,
}

/// One top-level menu item: either a direct link or a dropdown.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    /// Item label.
    pub label: &'static str,
    /// Direct link, for items without a dropdown.
    pub link: Option<&'static str>,
    /// Dropdown rows, empty for direct links.
    pub dropdown: &'static [DropdownItem],
}

static COURSES: [DropdownItem; 6] = [
    DropdownItem {
        label: "Post Graduation Program",
        link: "/courses/post-graduation",
        description: "Advanced mechanical engineering concepts",
        detail: "12 months",
    },
    DropdownItem {
        label: "PTC Creo",
        link: "/courses/PTCCreo",
        description: "Master parametric modeling",
        detail: "3 months",
    },
    DropdownItem {
        label: "Solid Body",
        link: "/courses/SolidBody",
        description: "Advanced solid modeling",
        detail: "4 months",
    },
    DropdownItem {
        label: "AutoCAD",
        link: "/courses/AutoCAD",
        description: "2D and 3D design fundamentals",
        detail: "2 months",
    },
    DropdownItem {
        label: "GD&T",
        link: "/courses/GD&T",
        description: "Geometric dimensioning and tolerancing",
        detail: "2 months",
    },
    DropdownItem {
        label: "CATIA",
        link: "/courses/CATIA",
        description: "Advanced 3D modeling and surface design",
        detail: "4 months",
    },
];

static SUCCESS: [DropdownItem; 2] = [
    DropdownItem {
        label: "Placements",
        link: "/success/placements",
        description: "Our students at top companies",
        detail: "100% placement rate",
    },
    DropdownItem {
        label: "Success Stories",
        link: "/success/stories",
        description: "Student testimonials and achievements",
        detail: "5000+ success stories",
    },
];

static RESOURCES: [DropdownItem; 4] = [
    DropdownItem {
        label: "FAQ",
        link: "/components/FAQ",
        description: "Common questions about our services",
        detail: "",
    },
    DropdownItem {
        label: "Blogs",
        link: "/components/Blogs",
        description: "Engineering notes and announcements",
        detail: "",
    },
    DropdownItem {
        label: "Case Studies",
        link: "/components/CaseStudies",
        description: "Project deep dives",
        detail: "",
    },
    DropdownItem {
        label: "3D Printing",
        link: "/components/ThreeDPrinting",
        description: "Additive manufacturing services",
        detail: "",
    },
];

static MENU: [MenuItem; 6] = [
    MenuItem {
        label: "Home",
        link: Some("/"),
        dropdown: &[],
    },
    MenuItem {
        label: "Courses",
        link: None,
        dropdown: &COURSES,
    },
    MenuItem {
        label: "About",
        link: Some("/about"),
        dropdown: &[],
    },
    MenuItem {
        label: "Success Stories",
        link: None,
        dropdown: &SUCCESS,
    },
    MenuItem {
        label: "Resources",
        link: None,
        dropdown: &RESOURCES,
    },
    MenuItem {
        label: "Contact",
        link: Some("/contact"),
        dropdown: &[],
    },
];

/// The fixed top-level menu, in display order.
pub fn menu_items() -> &'static [MenuItem] {
    &MENU
}

// ===== MenuState =====

/// Menu focus state. Sum type - closed, browsing the top level, or
/// inside one item's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Menu not focused.
    Closed,
    /// Browsing top-level items.
    Top {
        /// Highlighted top-level index.
        item: usize,
    },
    /// Browsing one item's dropdown rows.
    Dropdown {
        /// The expanded top-level index.
        item: usize,
        /// Highlighted row within the dropdown.
        row: usize,
    },
}

impl MenuState {
    /// Focus the menu on its first item.
    pub fn open(&mut self) {
        *self = MenuState::Top { item: 0 };
    }

    /// Leave the menu.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Whether the menu has focus.
    pub fn is_open(&self) -> bool {
        !matches!(self, MenuState::Closed)
    }

    /// Move right across top-level items, wrapping. Collapses an open
    /// dropdown back to the top level first.
    pub fn right(&mut self) {
        let len = MENU.len();
        *self = match *self {
            MenuState::Closed => MenuState::Closed,
            MenuState::Top { item } | MenuState::Dropdown { item, .. } => MenuState::Top {
                item: (item + 1) % len,
            },
        };
    }

    /// Move left across top-level items, wrapping.
    pub fn left(&mut self) {
        let len = MENU.len();
        *self = match *self {
            MenuState::Closed => MenuState::Closed,
            MenuState::Top { item } | MenuState::Dropdown { item, .. } => MenuState::Top {
                item: (item + len - 1) % len,
            },
        };
    }

    /// Move down: expand the highlighted item's dropdown, or step to the
    /// next row inside one (clamped to the last row).
    pub fn down(&mut self) {
        *self = match *self {
            MenuState::Closed => MenuState::Closed,
            MenuState::Top { item } => {
                if MENU[item].dropdown.is_empty() {
                    MenuState::Top { item }
                } else {
                    MenuState::Dropdown { item, row: 0 }
                }
            }
            MenuState::Dropdown { item, row } => MenuState::Dropdown {
                item,
                row: (row + 1).min(MENU[item].dropdown.len() - 1),
            },
        };
    }

    /// Move up: step back a row, or collapse the dropdown from its first
    /// row.
    pub fn up(&mut self) {
        *self = match *self {
            MenuState::Closed => MenuState::Closed,
            MenuState::Top { item } => MenuState::Top { item },
            MenuState::Dropdown { item, row: 0 } => MenuState::Top { item },
            MenuState::Dropdown { item, row } => MenuState::Dropdown { item, row: row - 1 },
        };
    }

    /// Follow the highlighted link, if the highlight is on one.
    ///
    /// A top-level item with a dropdown expands instead of navigating
    /// (same as the original header, where those items were buttons, not
    /// links). Returns the path to navigate to, or `None`.
    pub fn activate(&mut self) -> Option<&'static str> {
        match *self {
            MenuState::Closed => None,
            MenuState::Top { item } => {
                if let Some(link) = MENU[item].link {
                    *self = MenuState::Closed;
                    Some(link)
                } else {
                    self.down();
                    None
                }
            }
            MenuState::Dropdown { item, row } => {
                *self = MenuState::Closed;
                Some(MENU[item].dropdown[row].link)
            }
        }
    }

    /// The expanded dropdown, for rendering.
    pub fn expanded(&self) -> Option<(usize, usize)> {
        match *self {
            MenuState::Dropdown { item, row } => Some((item, row)),
            _ => None,
        }
    }

    /// The highlighted top-level index, for rendering.
    pub fn highlighted(&self) -> Option<usize> {
        match *self {
            MenuState::Closed => None,
            MenuState::Top { item } | MenuState::Dropdown { item, .. } => Some(item),
        }
    }
}
