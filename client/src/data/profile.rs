//! Portfolio owner details and capability cards.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub lede: &'static str,
    pub portrait: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub affiliation: &'static str,
    pub about: &'static [&'static str],
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Etay Naor",
    headline: "Creative Strategist",
    tagline: "Clarity, momentum, and creative outcomes",
    lede: "I help founders and teams cut through: craft the story, design the plan, and ship the work that moves the needle.",
    portrait: "/etay-profile.jpg",
    email: "etaynaor@gmail.com",
    location: "Berlin, Germany",
    affiliation: "Partner & Lead Strategist at Allenby Concept House",
    about: &[
        "Over the past 15+ years, I've been sharing aha moments with companies, startups, and movements, and turning them into bold execution.",
        "I've worked with major brands like Spotify, Budweiser, and SodaStream, early-stage startups, human rights organizations and election campaigns.",
        "I work hands-on with leadership to align message, medium, and execution, then ship at a high bar.",
    ],
};

/// Color accent for a capability card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Pink,
    Cyan,
    Yellow,
    Purple,
}

impl Accent {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Pink => "accent-pink",
            Self::Cyan => "accent-cyan",
            Self::Yellow => "accent-yellow",
            Self::Purple => "accent-purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capability {
    pub title: &'static str,
    pub accent: Accent,
    pub bullets: &'static [&'static str],
}

pub static CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Strategic Creative Leadership",
        accent: Accent::Pink,
        bullets: &[
            "Develop creative strategies for global brands and startups",
            "Transform complex positioning challenges into clear creative direction",
            "Lead strategic thinking across diverse client contexts",
        ],
    },
    Capability {
        title: "Cultural Trend Intelligence",
        accent: Accent::Cyan,
        bullets: &[
            "Identify emerging cultural moments and translate them into brand opportunities",
            "Understand where culture is heading before it becomes mainstream",
            "Connect authentic cultural insights to strategic creative work",
        ],
    },
    Capability {
        title: "AI-Enhanced Innovation",
        accent: Accent::Yellow,
        bullets: &[
            "AI-first strategic creative development",
            "Rapid concept prototyping & creative exploration",
            "Emerging tech integration in creative strategy",
        ],
    },
    Capability {
        title: "Cross-Functional Coordination",
        accent: Accent::Purple,
        bullets: &[
            "Lead multidisciplinary teams including designers, developers, and strategists",
            "Coordinate complex creative projects across different skill sets",
            "Bridge strategic thinking with creative execution",
        ],
    },
];
