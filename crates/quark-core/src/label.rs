use crate::constants::ANTI_PREFIX;
use crate::error::LabelError;
use std::fmt;
use std::str::FromStr;

/// Quark flavors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flavor {
    Up,
    Down,
    Strange,
    Charm,
    Bottom,
    Top,
}

impl Flavor {
    pub const ALL: [Flavor; 6] = [
        Flavor::Up,
        Flavor::Down,
        Flavor::Strange,
        Flavor::Charm,
        Flavor::Bottom,
        Flavor::Top,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Flavor::Up => "Up",
            Flavor::Down => "Down",
            Flavor::Strange => "Strange",
            Flavor::Charm => "Charm",
            Flavor::Bottom => "Bottom",
            Flavor::Top => "Top",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// A constituent label: one flavor, either as a quark or its antiquark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Label {
    pub flavor: Flavor,
    pub anti: bool,
}

impl Label {
    /// Every label in spawn-button order: six quarks, then six antiquarks.
    pub const ALL: [Label; 12] = [
        Label::quark(Flavor::Up),
        Label::quark(Flavor::Down),
        Label::quark(Flavor::Strange),
        Label::quark(Flavor::Charm),
        Label::quark(Flavor::Bottom),
        Label::quark(Flavor::Top),
        Label::antiquark(Flavor::Up),
        Label::antiquark(Flavor::Down),
        Label::antiquark(Flavor::Strange),
        Label::antiquark(Flavor::Charm),
        Label::antiquark(Flavor::Bottom),
        Label::antiquark(Flavor::Top),
    ];

    pub const fn quark(flavor: Flavor) -> Self {
        Self {
            flavor,
            anti: false,
        }
    }

    pub const fn antiquark(flavor: Flavor) -> Self {
        Self { flavor, anti: true }
    }

    #[inline]
    pub fn is_anti(self) -> bool {
        self.anti
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anti {
            f.write_str(ANTI_PREFIX)?;
        }
        f.write_str(self.flavor.name())
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (anti, name) = match text.strip_prefix(ANTI_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        Flavor::from_name(name)
            .map(|flavor| Label { flavor, anti })
            .ok_or_else(|| LabelError::Unknown(s.to_string()))
    }
}
