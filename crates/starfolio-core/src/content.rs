//! Compiled-in page content.

use ratatui::style::Color;

/// An outbound link opened in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Button label.
    pub label: &'static str,
    pub url: &'static str,
    /// Keyboard shortcut that activates the link.
    pub key: char,
}

/// Border and icon tone of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Purple,
    Blue,
    Cyan,
    Indigo,
    Pink,
    Green,
}

impl CardTone {
    pub fn color(self) -> Color {
        match self {
            CardTone::Purple => Color::Rgb(192, 132, 252),
            CardTone::Blue => Color::Rgb(96, 165, 250),
            CardTone::Cyan => Color::Rgb(34, 211, 238),
            CardTone::Indigo => Color::Rgb(129, 140, 248),
            CardTone::Pink => Color::Rgb(244, 114, 182),
            CardTone::Green => Color::Rgb(74, 222, 128),
        }
    }
}

/// An informational card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Single glyph badge standing in for the card's icon or logo.
    pub icon: &'static str,
    pub title: &'static str,
    /// Monospace handle shown under the title.
    pub handle: Option<&'static str>,
    pub body: &'static str,
    pub tone: CardTone,
    pub link: Option<Link>,
}

/// How a section's cards enter when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMotion {
    /// Delay of the first card.
    pub card_delay_ms: u64,
    /// Added per subsequent card.
    pub card_stagger_ms: u64,
    pub card_duration_ms: u64,
    /// Distance units each card rises while fading in.
    pub card_rise: f32,
}

/// A titled page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub heading: &'static str,
    /// Left and right stops of the heading gradient.
    pub heading_tones: (CardTone, CardTone),
    pub intro: Option<&'static str>,
    pub cards: &'static [Card],
    /// Widest the section's content grows, in columns.
    pub max_width: u16,
    pub motion: SectionMotion,
}

/// The whole page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [Section],
}

impl Profile {
    /// Every link on the page, in reading order.
    pub fn links(&self) -> impl Iterator<Item = &'static Link> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.cards.iter())
            .filter_map(|card| card.link.as_ref())
    }

    /// Look up a link by its keyboard shortcut.
    pub fn link_for_key(&self, key: char) -> Option<&'static Link> {
        self.links().find(|link| link.key == key)
    }
}

const PLAY_GAME: Link = Link {
    label: "Play Game",
    url: "https://www.roblox.com/games/139797513890723/Pet-Legends",
    key: 'p',
};

const VIEW_PROFILE: Link = Link {
    label: "View Profile",
    url: "https://www.roblox.com/users/8019543437/profile/",
    key: 'v',
};

const AVAILABILITY: &[Card] = &[
    Card {
        icon: "▣",
        title: "Commissions",
        handle: None,
        body: "Custom Roblox game development and scripting solutions",
        tone: CardTone::Purple,
        link: None,
    },
    Card {
        icon: "◷",
        title: "Part-Time",
        handle: None,
        body: "Flexible scheduling for ongoing projects and maintenance",
        tone: CardTone::Blue,
        link: None,
    },
    Card {
        icon: "☷",
        title: "Full-Time",
        handle: None,
        body: "Ready to join a dedicated development team",
        tone: CardTone::Cyan,
        link: None,
    },
];

const FEATURED: &[Card] = &[Card {
    icon: "✦",
    title: "Pet Legends",
    handle: None,
    body: "A comprehensive pet simulator showcasing advanced Lua scripting, game mechanics, \
           and user experience design. Features complex pet systems, trading mechanics, \
           and immersive gameplay loops.",
    tone: CardTone::Indigo,
    link: Some(PLAY_GAME),
}];

const CONTACT: &[Card] = &[
    Card {
        icon: "◉",
        title: "Discord",
        handle: Some("velliua"),
        body: "Send me a message to get started!",
        tone: CardTone::Pink,
        link: None,
    },
    Card {
        icon: "▲",
        title: "Roblox Profile",
        handle: None,
        body: "Check out my Roblox profile and games",
        tone: CardTone::Green,
        link: Some(VIEW_PROFILE),
    },
];

/// The portfolio page rendered by the application.
pub const PROFILE: Profile = Profile {
    title: "JJettas",
    subtitle: "Roblox Developer",
    tagline: "3 Years of Lua Mastery • Age 17",
    sections: &[
        Section {
            heading: "Available for Work",
            heading_tones: (CardTone::Cyan, CardTone::Blue),
            intro: None,
            cards: AVAILABILITY,
            max_width: 110,
            motion: SectionMotion {
                card_delay_ms: 100,
                card_stagger_ms: 100,
                card_duration_ms: 1000,
                card_rise: 60.0,
            },
        },
        Section {
            heading: "Featured Project",
            heading_tones: (CardTone::Green, CardTone::Blue),
            intro: None,
            cards: FEATURED,
            max_width: 90,
            motion: SectionMotion {
                card_delay_ms: 0,
                card_stagger_ms: 0,
                card_duration_ms: 1200,
                card_rise: 0.0,
            },
        },
        Section {
            heading: "Let's Connect",
            heading_tones: (CardTone::Pink, CardTone::Purple),
            intro: Some("Ready to bring your Roblox vision to life? Let's discuss your project!"),
            cards: CONTACT,
            max_width: 64,
            motion: SectionMotion {
                card_delay_ms: 300,
                card_stagger_ms: 100,
                card_duration_ms: 1000,
                card_rise: 40.0,
            },
        },
    ],
};
